use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::types::{Leg, Side};

/// Direction of the currently held spread position
///
/// `LongCheapLeg` buys leg A and sells leg B (B rich relative to A).
/// `ShortCheapLeg` sells leg A and buys leg B (A rich relative to B).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeDirection {
    #[default]
    Flat,
    LongCheapLeg,
    ShortCheapLeg,
}

impl TradeDirection {
    pub fn is_flat(self) -> bool {
        self == TradeDirection::Flat
    }

    /// Swaps the two non-flat directions; `Flat` maps to itself
    pub fn opposite(self) -> Self {
        match self {
            TradeDirection::Flat => TradeDirection::Flat,
            TradeDirection::LongCheapLeg => TradeDirection::ShortCheapLeg,
            TradeDirection::ShortCheapLeg => TradeDirection::LongCheapLeg,
        }
    }

    /// Side traded on each leg when opening a position in this direction
    pub fn entry_sides(self) -> Option<(Side, Side)> {
        match self {
            TradeDirection::Flat => None,
            TradeDirection::LongCheapLeg => Some((Side::Buy, Side::Sell)),
            TradeDirection::ShortCheapLeg => Some((Side::Sell, Side::Buy)),
        }
    }
}

impl std::fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeDirection::Flat => write!(f, "flat"),
            TradeDirection::LongCheapLeg => write!(f, "long_cheap_leg"),
            TradeDirection::ShortCheapLeg => write!(f, "short_cheap_leg"),
        }
    }
}

/// Whether an intent pair opens or closes a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Entry,
    Exit,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Entry => write!(f, "entry"),
            Phase::Exit => write!(f, "exit"),
        }
    }
}

/// What the evaluator recommends for the current quotes and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    /// Nothing to do
    Hold,
    /// Open a position in the given (non-flat) direction
    Enter(TradeDirection),
    /// Close the held position
    Exit,
}

impl Signal {
    /// The same signal seen from the instrument-swapped side
    pub fn mirrored(self) -> Self {
        match self {
            Signal::Enter(direction) => Signal::Enter(direction.opposite()),
            other => other,
        }
    }
}

/// Result of a single spread evaluation, recomputed on every complete quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpreadDecision {
    pub candidate: Signal,
    /// Executable spread backing the candidate, in price units
    pub executable_spread: Decimal,
    /// `executable_spread` divided by the tick size
    pub spread_in_ticks: Decimal,
}

/// A single order to submit for one leg
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderIntent {
    pub leg: Leg,
    pub side: Side,
    pub quantity: u32,
    pub limit_price: Decimal,
    /// Stable identifier of leg and phase, echoed back on order updates
    pub tag: String,
}

impl OrderIntent {
    /// Tag used for a leg/phase combination, e.g. `leg-A-entry`
    pub fn tag_for(leg: Leg, phase: Phase) -> String {
        format!("leg-{}-{}", leg, phase)
    }
}

/// The two legs of one trading decision
///
/// Legs are only ever handed to a transport together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentPair {
    pub direction: TradeDirection,
    pub phase: Phase,
    pub a: OrderIntent,
    pub b: OrderIntent,
}

impl IntentPair {
    pub fn legs(&self) -> [&OrderIntent; 2] {
        [&self.a, &self.b]
    }

    pub fn leg(&self, leg: Leg) -> &OrderIntent {
        match leg {
            Leg::A => &self.a,
            Leg::B => &self.b,
        }
    }
}

/// Outcome of feeding one quote into the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// At least one leg lacks a two-sided quote; nothing was evaluated
    Deferred,
    /// Evaluated, no transition
    Hold,
    /// An entry pair was emitted
    Enter(IntentPair),
    /// An exit pair was emitted
    Exit(IntentPair),
}

impl Decision {
    pub fn intents(&self) -> Option<&IntentPair> {
        match self {
            Self::Enter(pair) | Self::Exit(pair) => Some(pair),
            _ => None,
        }
    }
}

/// Slippage report for a filled order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillReport {
    pub tag: String,
    pub instrument_label: String,
    pub average_fill_price: Decimal,
    pub slippage_in_ticks: Decimal,
}
