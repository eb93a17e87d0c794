//! JSON-lines wire messages exchanged with the hosting process

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::errors::{EngineError, Result};
use crate::common::traits::HostEvent;
use crate::common::types::{OrderUpdate, QuoteEvent, QuoteSide, Side};
use crate::config::types::EngineConfig;
use crate::strategy::{IntentPair, Phase, TradeDirection};

/// One inbound line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostMessage {
    /// Best bid or ask change for a symbol
    Quote {
        symbol: String,
        side: QuoteSide,
        price: Decimal,
    },
    /// Order state change from the transport
    OrderUpdate(OrderUpdate),
}

impl HostMessage {
    /// Parse a single line
    pub fn parse(line: &str) -> Result<Self> {
        Ok(serde_json::from_str(line)?)
    }

    /// Resolve the symbol against the configured legs
    pub fn into_event(self, config: &EngineConfig) -> Result<HostEvent> {
        match self {
            HostMessage::Quote { symbol, side, price } => {
                let leg = config
                    .leg_for_symbol(&symbol)
                    .ok_or(EngineError::UnknownInstrument(symbol))?;
                Ok(HostEvent::Quote(QuoteEvent::new(leg, side, price)))
            }
            HostMessage::OrderUpdate(update) => Ok(HostEvent::OrderUpdate(update)),
        }
    }
}

/// One leg of an outbound [`IntentRecord`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRecordLeg {
    pub symbol: String,
    pub side: Side,
    pub quantity: u32,
    pub limit_price: Decimal,
    pub tag: String,
}

/// One outbound line describing an emitted intent pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRecord {
    pub emitted_at: DateTime<Utc>,
    pub direction: TradeDirection,
    pub phase: Phase,
    pub legs: Vec<IntentRecordLeg>,
}

impl IntentRecord {
    pub fn from_pair(pair: &IntentPair, config: &EngineConfig) -> Self {
        Self {
            emitted_at: Utc::now(),
            direction: pair.direction,
            phase: pair.phase,
            legs: pair
                .legs()
                .into_iter()
                .map(|intent| IntentRecordLeg {
                    symbol: config.leg(intent.leg).symbol.clone(),
                    side: intent.side,
                    quantity: intent.quantity,
                    limit_price: intent.limit_price,
                    tag: intent.tag.clone(),
                })
                .collect(),
        }
    }

    pub fn to_json_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
