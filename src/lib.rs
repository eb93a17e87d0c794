//! PairsSpread Library
//!
//! A real-time spread arbitrage decision engine for two correlated
//! instruments, driven by best bid/ask quotes.

pub mod common;
pub mod config;
pub mod host;
pub mod strategy;

// Re-export commonly used types
pub use common::errors::{EngineError, Result};
pub use common::traits::{EventFeed, HostEvent, OrderTransport};
pub use common::types::{Leg, OrderState, OrderUpdate, QuoteEvent, QuoteSide, Side};
pub use config::types::{AppConfig, EngineConfig, LegConfig};
pub use host::{run_engine, ChannelTransport, LineFeed, RunSummary};

// Strategy types
pub use strategy::{
    Decision, Diagnostic, EngineEvent, EventSink, FillReport, IntentPair,
    OrderIntent, PairStrategy, Phase, RecordingSink, SpreadEngine, TracingSink, TradeDirection,
};
