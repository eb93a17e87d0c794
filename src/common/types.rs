//! Event and identifier types shared by the engine and its host

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One of the two instruments of the traded pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Leg {
    A,
    B,
}

impl std::fmt::Display for Leg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Leg::A => write!(f, "A"),
            Leg::B => write!(f, "B"),
        }
    }
}

/// Which side of the top of book a quote tick updates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteSide {
    Bid,
    Ask,
}

impl std::fmt::Display for QuoteSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuoteSide::Bid => write!(f, "bid"),
            QuoteSide::Ask => write!(f, "ask"),
        }
    }
}

/// Order side (buy or sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// A single best bid or best ask tick for one leg
///
/// The host resolves its own instrument identifiers to a [`Leg`] before the
/// event reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteEvent {
    pub leg: Leg,
    pub side: QuoteSide,
    pub price: Decimal,
}

impl QuoteEvent {
    pub fn new(leg: Leg, side: QuoteSide, price: Decimal) -> Self {
        Self { leg, side, price }
    }

    pub fn bid(leg: Leg, price: Decimal) -> Self {
        Self::new(leg, QuoteSide::Bid, price)
    }

    pub fn ask(leg: Leg, price: Decimal) -> Self {
        Self::new(leg, QuoteSide::Ask, price)
    }
}

/// Order lifecycle state reported by the transport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderState {
    /// Accepted and resting
    Working,
    /// Some quantity filled, remainder working
    PartFilled,
    /// Completely filled
    Filled,
    /// Cancelled before completing
    Cancelled,
    /// Refused by the venue
    Rejected,
}

impl OrderState {
    /// Returns true once no further updates are expected for the order
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            OrderState::Filled | OrderState::Cancelled | OrderState::Rejected
        )
    }
}

impl std::fmt::Display for OrderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderState::Working => write!(f, "working"),
            OrderState::PartFilled => write!(f, "part_filled"),
            OrderState::Filled => write!(f, "filled"),
            OrderState::Cancelled => write!(f, "cancelled"),
            OrderState::Rejected => write!(f, "rejected"),
        }
    }
}

/// Order state change notification delivered by the transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderUpdate {
    /// Tag of the intent this update belongs to
    pub tag: String,
    /// Limit price the order was submitted with
    pub limit_price: Decimal,
    /// Average price of the filled quantity
    pub average_fill_price: Decimal,
    /// Quantity filled so far
    #[serde(default)]
    pub filled_quantity: u32,
    pub state: OrderState,
}

impl OrderUpdate {
    /// Convenience constructor for a complete fill
    pub fn filled(
        tag: impl Into<String>,
        limit_price: Decimal,
        average_fill_price: Decimal,
        filled_quantity: u32,
    ) -> Self {
        Self {
            tag: tag.into(),
            limit_price,
            average_fill_price,
            filled_quantity,
            state: OrderState::Filled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_terminal_states() {
        assert!(OrderState::Filled.is_terminal());
        assert!(OrderState::Rejected.is_terminal());
        assert!(OrderState::Cancelled.is_terminal());
        assert!(!OrderState::Working.is_terminal());
        assert!(!OrderState::PartFilled.is_terminal());
    }

    #[test]
    fn test_order_update_deserialize_without_quantity() {
        let json = r#"{
            "tag": "leg-A-entry",
            "limit_price": "5000.50",
            "average_fill_price": "5000.75",
            "state": "filled"
        }"#;

        let update: OrderUpdate = serde_json::from_str(json).unwrap();
        assert_eq!(update.tag, "leg-A-entry");
        assert_eq!(update.limit_price, dec!(5000.50));
        assert_eq!(update.filled_quantity, 0);
        assert_eq!(update.state, OrderState::Filled);
    }
}
