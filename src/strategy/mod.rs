//! Strategy module for two-leg spread decisions
//!
//! This module holds the whole decision core. Nothing here performs I/O or
//! waits; order transport and fill delivery belong to the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    HOT PATH (sync, single writer)           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  QuoteEvent arrives                                         │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  QuoteStore.update() ── incomplete? ──► Decision::Deferred  │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  SpreadEvaluator.evaluate(snapshot, direction)              │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  PositionStateMachine.apply(signal) ── none? ──► Hold       │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  OrderIntentBuilder.build() ──► OrderTransport.submit_pair  │
//! └─────────────────────────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    OUT OF BAND                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  OrderUpdate arrives ──► FillObserver ──► FillReport        │
//! │  (reporting only, trading state untouched)                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Components
//!
//! - [`QuoteStore`]: latest bid/ask per leg, gate on complete quotes
//! - [`SpreadEvaluator`]: executable spreads and entry/exit classification
//! - [`PositionStateMachine`]: `Flat` / `LongCheapLeg` / `ShortCheapLeg`
//! - [`OrderIntentBuilder`]: fixed-ratio, one-tick-through intent pairs
//! - [`FillObserver`]: slippage of fills against requested limits
//! - [`SpreadEngine`]: the above wired behind [`PairStrategy`]
//!
//! # Known limitation
//!
//! The position follows submitted intents, not fills. An exit returns the
//! engine to `Flat` at once, so a re-entry can be emitted before the exit
//! pair has filled, and a refused submission does not roll the transition
//! back.

mod engine;
mod evaluator;
mod events;
mod fills;
mod intents;
mod position;
mod quote_store;
mod traits;
mod types;

pub use types::{
    Decision,
    FillReport,
    IntentPair,
    OrderIntent,
    Phase,
    Signal,
    SpreadDecision,
    TradeDirection,
};

pub use engine::SpreadEngine;
pub use evaluator::{ExecutableSpreads, SpreadEvaluator};
pub use events::{Diagnostic, EngineEvent, EventSink, RecordingSink, TracingSink};
pub use fills::{FillObservation, FillObserver};
pub use intents::OrderIntentBuilder;
pub use position::{PositionStateMachine, Transition};
pub use quote_store::{QuoteStore, SpreadSnapshot, TwoSidedQuote};
pub use traits::{PairStrategy};
