use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::types::{Leg, QuoteSide, QuoteEvent};

/// Latest best bid/ask for one leg
///
/// Any price `<= 0` means "not yet known".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoSidedQuote {
    pub bid: Decimal,
    pub ask: Decimal,
}

impl TwoSidedQuote {
    pub fn new(bid: Decimal, ask: Decimal) -> Self {
        Self { bid, ask }
    }

    /// Both sides have been observed with a positive price
    pub fn is_valid(&self) -> bool {
        self.bid > Decimal::ZERO && self.ask > Decimal::ZERO
    }
}

/// Complete quotes for both legs, the only input the evaluator accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpreadSnapshot {
    pub a: TwoSidedQuote,
    pub b: TwoSidedQuote,
}

impl SpreadSnapshot {
    pub fn new(a: TwoSidedQuote, b: TwoSidedQuote) -> Self {
        Self { a, b }
    }

    pub fn quote(&self, leg: Leg) -> &TwoSidedQuote {
        match leg {
            Leg::A => &self.a,
            Leg::B => &self.b,
        }
    }

    /// The same market with the two instruments swapped
    pub fn mirrored(&self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }
}

/// Holds the most recent bid and ask of the two tracked legs
///
/// Values are overwritten in place; no history is kept.
#[derive(Debug, Clone, Default)]
pub struct QuoteStore {
    a: TwoSidedQuote,
    b: TwoSidedQuote,
}

impl QuoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite one side of one leg. Prices are stored as-is.
    pub fn update(&mut self, leg: Leg, side: QuoteSide, price: Decimal) {
        let quote = match leg {
            Leg::A => &mut self.a,
            Leg::B => &mut self.b,
        };

        match side {
            QuoteSide::Bid => quote.bid = price,
            QuoteSide::Ask => quote.ask = price,
        }
    }

    pub fn apply(&mut self, event: &QuoteEvent) {
        self.update(event.leg, event.side, event.price);
    }

    pub fn quote(&self, leg: Leg) -> &TwoSidedQuote {
        match leg {
            Leg::A => &self.a,
            Leg::B => &self.b,
        }
    }

    /// True only when both legs have strictly positive bid and ask
    pub fn has_complete_quotes(&self) -> bool {
        self.a.is_valid() && self.b.is_valid()
    }

    /// Snapshot for evaluation, `None` while quotes are incomplete
    pub fn snapshot(&self) -> Option<SpreadSnapshot> {
        self.has_complete_quotes()
            .then(|| SpreadSnapshot::new(self.a, self.b))
    }

    /// Forget every price
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
