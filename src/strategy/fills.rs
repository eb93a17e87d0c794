use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::common::types::{Leg, OrderState, OrderUpdate};
use crate::strategy::events::Diagnostic;
use crate::strategy::types::{FillReport, IntentPair};

/// What an order update amounted to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillObservation {
    /// The order filled; slippage computed
    Report(FillReport),
    /// Something the host should hear about, no report possible
    Diagnostic(Diagnostic),
    /// Non-terminal update for a known tag
    Pending,
}

/// Computes fill slippage against the requested limit
///
/// Only reports; never touches trading state. Tags repeat across pairs, so
/// each tag carries a count of orders still awaiting a terminal update. Every
/// registration adds one and every terminal update retires one; a fill
/// arriving with nothing outstanding for its tag is treated as unknown.
#[derive(Debug, Clone)]
pub struct FillObserver {
    tick_size: Decimal,
    label_a: String,
    label_b: String,
    outstanding: HashMap<String, (Leg, usize)>,
}

impl FillObserver {
    pub fn new(tick_size: Decimal, label_a: impl Into<String>, label_b: impl Into<String>) -> Self {
        Self {
            tick_size,
            label_a: label_a.into(),
            label_b: label_b.into(),
            outstanding: HashMap::new(),
        }
    }

    pub fn label(&self, leg: Leg) -> &str {
        match leg {
            Leg::A => &self.label_a,
            Leg::B => &self.label_b,
        }
    }

    /// Start tracking both legs of an emitted pair
    pub fn register(&mut self, pair: &IntentPair) {
        for intent in pair.legs() {
            let entry = self
                .outstanding
                .entry(intent.tag.clone())
                .or_insert((intent.leg, 0));
            entry.1 += 1;
        }
    }

    pub fn is_outstanding(&self, tag: &str) -> bool {
        self.outstanding.contains_key(tag)
    }

    /// Orders awaiting a terminal update, across all tags
    pub fn outstanding_count(&self) -> usize {
        self.outstanding.values().map(|(_, count)| count).sum()
    }

    /// `|average_fill_price - limit_price|` in ticks, `None` on overflow
    pub fn slippage_ticks(&self, limit_price: Decimal, average_fill_price: Decimal) -> Option<Decimal> {
        average_fill_price
            .checked_sub(limit_price)?
            .abs()
            .checked_div(self.tick_size)
    }

    pub fn observe(&mut self, update: &OrderUpdate) -> FillObservation {
        let Some(&(leg, _)) = self.outstanding.get(&update.tag) else {
            return FillObservation::Diagnostic(Diagnostic::UnknownOrderTag {
                tag: update.tag.clone(),
                state: update.state,
            });
        };

        if update.state.is_terminal() {
            self.retire(&update.tag);
        }

        match update.state {
            OrderState::Filled => match self.slippage_ticks(update.limit_price, update.average_fill_price) {
                Some(slippage_in_ticks) => FillObservation::Report(FillReport {
                    tag: update.tag.clone(),
                    instrument_label: self.label(leg).to_string(),
                    average_fill_price: update.average_fill_price,
                    slippage_in_ticks,
                }),
                None => FillObservation::Diagnostic(Diagnostic::PriceOverflow {
                    context: format!("slippage for {}", update.tag),
                }),
            },
            OrderState::Rejected => FillObservation::Diagnostic(Diagnostic::OrderRejected {
                tag: update.tag.clone(),
            }),
            OrderState::Cancelled => FillObservation::Diagnostic(Diagnostic::OrderCancelled {
                tag: update.tag.clone(),
            }),
            OrderState::Working | OrderState::PartFilled => {
                debug!(
                    tag = %update.tag,
                    state = %update.state,
                    filled = update.filled_quantity,
                    "order update"
                );
                FillObservation::Pending
            }
        }
    }

    fn retire(&mut self, tag: &str) {
        if let Some((_, count)) = self.outstanding.get_mut(tag) {
            *count -= 1;
            if *count == 0 {
                self.outstanding.remove(tag);
            }
        }
    }

    pub fn clear(&mut self) {
        self.outstanding.clear();
    }
}
