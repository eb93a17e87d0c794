use rust_decimal::Decimal;

use crate::common::types::{Leg, Side};
use crate::strategy::quote_store::{SpreadSnapshot, TwoSidedQuote};
use crate::strategy::types::{IntentPair, OrderIntent, Phase, TradeDirection};

/// Turns a transition into the two concrete leg orders
///
/// Quantities are a fixed ratio. Limits sit one tick through the touch
/// (`ask + tick` to buy, `bid - tick` to sell), the same prices the
/// evaluator priced the spread at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderIntentBuilder {
    tick_size: Decimal,
    quantity_a: u32,
    quantity_b: u32,
}

impl OrderIntentBuilder {
    pub fn new(tick_size: Decimal, quantity_a: u32, quantity_b: u32) -> Self {
        Self {
            tick_size,
            quantity_a,
            quantity_b,
        }
    }

    pub fn quantity(&self, leg: Leg) -> u32 {
        match leg {
            Leg::A => self.quantity_a,
            Leg::B => self.quantity_b,
        }
    }

    /// Marketable limit for one side of a quote, `None` on overflow
    pub fn limit_price(&self, side: Side, quote: &TwoSidedQuote) -> Option<Decimal> {
        match side {
            Side::Buy => quote.ask.checked_add(self.tick_size),
            Side::Sell => quote.bid.checked_sub(self.tick_size),
        }
    }

    /// Build the pair opening or closing `direction`.
    ///
    /// Returns `None` for `Flat` or when a limit price overflows.
    pub fn build(
        &self,
        direction: TradeDirection,
        phase: Phase,
        snapshot: &SpreadSnapshot,
    ) -> Option<IntentPair> {
        let (side_a, side_b) = direction.entry_sides()?;
        let (side_a, side_b) = match phase {
            Phase::Entry => (side_a, side_b),
            Phase::Exit => (side_a.opposite(), side_b.opposite()),
        };

        Some(IntentPair {
            direction,
            phase,
            a: self.leg_intent(Leg::A, side_a, phase, snapshot)?,
            b: self.leg_intent(Leg::B, side_b, phase, snapshot)?,
        })
    }

    fn leg_intent(
        &self,
        leg: Leg,
        side: Side,
        phase: Phase,
        snapshot: &SpreadSnapshot,
    ) -> Option<OrderIntent> {
        Some(OrderIntent {
            leg,
            side,
            quantity: self.quantity(leg),
            limit_price: self.limit_price(side, snapshot.quote(leg))?,
            tag: OrderIntent::tag_for(leg, phase),
        })
    }
}
