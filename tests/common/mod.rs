//! Common test utilities and fixtures

#![allow(dead_code)]

use pairs_spread::{
    EngineConfig, EngineError, IntentPair, Leg, OrderTransport, QuoteEvent, RecordingSink,
    Result, SpreadEngine,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Transport that keeps every submitted pair and can be told to refuse
#[derive(Debug, Default)]
pub struct RecordingTransport {
    pub pairs: Vec<IntentPair>,
    pub refuse: bool,
}

impl OrderTransport for RecordingTransport {
    fn submit_pair(&mut self, pair: &IntentPair) -> Result<()> {
        if self.refuse {
            return Err(EngineError::Submission("transport offline".to_string()));
        }
        self.pairs.push(pair.clone());
        Ok(())
    }
}

pub type TestEngine = SpreadEngine<RecordingTransport, RecordingSink>;

/// Tick 0.25, entry 4 ticks, exit 1 tick, MES x10 / ES x1
pub fn test_config() -> EngineConfig {
    EngineConfig {
        tick_size: dec!(0.25),
        entry_threshold_ticks: 4,
        exit_threshold_ticks: 1,
        ..Default::default()
    }
}

pub fn test_engine() -> TestEngine {
    SpreadEngine::new(test_config(), RecordingTransport::default(), RecordingSink::new())
        .expect("valid test config")
}

/// The four ticks that make both legs two-sided, B last
pub fn quotes(a_bid: Decimal, a_ask: Decimal, b_bid: Decimal, b_ask: Decimal) -> Vec<QuoteEvent> {
    vec![
        QuoteEvent::bid(Leg::A, a_bid),
        QuoteEvent::ask(Leg::A, a_ask),
        QuoteEvent::bid(Leg::B, b_bid),
        QuoteEvent::ask(Leg::B, b_ask),
    ]
}

/// Leg B six and a half points rich: 23 executable ticks
pub fn b_rich_quotes() -> Vec<QuoteEvent> {
    quotes(dec!(5000.00), dec!(5000.25), dec!(5006.50), dec!(5006.75))
}

/// Leg A six and a half points rich: -23 executable ticks
pub fn a_rich_quotes() -> Vec<QuoteEvent> {
    quotes(dec!(5006.50), dec!(5006.75), dec!(5000.00), dec!(5000.25))
}

/// Sample JSON-lines session for the host feed
pub mod feed_lines {
    pub const SESSION: &str = r#"
{"type":"quote","symbol":"MES","side":"bid","price":"5000.00"}
{"type":"quote","symbol":"MES","side":"ask","price":"5000.25"}
{"type":"quote","symbol":"ES","side":"bid","price":"5006.50"}
{"type":"quote","symbol":"ES","side":"ask","price":"5006.75"}
{"type":"order_update","tag":"leg-A-entry","limit_price":"5000.50","average_fill_price":"5000.75","filled_quantity":10,"state":"filled"}
{"type":"quote","symbol":"NQ","side":"bid","price":"18000.00"}
this line is not json
{"type":"quote","symbol":"ES","side":"ask","price":"5001.25"}
{"type":"quote","symbol":"ES","side":"bid","price":"5001.00"}
{"type":"order_update","tag":"leg-A-entry","limit_price":"5000.50","average_fill_price":"5000.75","filled_quantity":10,"state":"filled"}
"#;
}
