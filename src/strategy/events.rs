//! Structured events emitted by the engine
//!
//! The decision path never formats log lines itself. Every evaluation,
//! transition, fill and diagnostic is handed to an [`EventSink`]; the host
//! picks how to render or store them.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::common::types::OrderState;
use crate::strategy::types::{FillReport, IntentPair, Phase, SpreadDecision, TradeDirection};

/// Non-fatal conditions the host should know about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Diagnostic {
    /// Order update for a tag with no outstanding intent (duplicate or stray)
    UnknownOrderTag { tag: String, state: OrderState },
    /// The venue rejected a submitted leg
    OrderRejected { tag: String },
    /// A submitted leg was cancelled before filling
    OrderCancelled { tag: String },
    /// Prices too large to compute with; the event was skipped
    PriceOverflow { context: String },
    /// The transport refused an intent pair; the transition stands
    SubmissionFailed {
        direction: TradeDirection,
        phase: Phase,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// A complete snapshot was evaluated while holding `direction`
    SpreadEvaluated {
        direction: TradeDirection,
        decision: SpreadDecision,
    },
    Entered(IntentPair),
    Exited(IntentPair),
    Filled(FillReport),
    Diagnostic(Diagnostic),
}

/// Receiver of engine events
///
/// Called synchronously from the decision path, so implementations must not
/// block.
pub trait EventSink: Send {
    fn emit(&mut self, event: EngineEvent);
}

/// Renders events through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::SpreadEvaluated { direction, decision } => debug!(
                %direction,
                spread = %decision.executable_spread,
                spread_ticks = %decision.spread_in_ticks,
                candidate = ?decision.candidate,
                "spread evaluated"
            ),
            EngineEvent::Entered(pair) | EngineEvent::Exited(pair) => info!(
                direction = %pair.direction,
                phase = %pair.phase,
                leg_a_side = %pair.a.side,
                leg_a_qty = pair.a.quantity,
                leg_a_limit = %pair.a.limit_price,
                leg_b_side = %pair.b.side,
                leg_b_qty = pair.b.quantity,
                leg_b_limit = %pair.b.limit_price,
                "intent pair emitted"
            ),
            EngineEvent::Filled(report) => info!(
                tag = %report.tag,
                instrument = %report.instrument_label,
                fill_price = %report.average_fill_price,
                slippage_ticks = %report.slippage_in_ticks.round_dp(2),
                "order filled"
            ),
            EngineEvent::Diagnostic(diagnostic) => warn!(?diagnostic, "engine diagnostic"),
        }
    }
}

/// Keeps every event in memory
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Vec<EngineEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[EngineEvent] {
        &self.events
    }

    /// Drain recorded events
    pub fn take(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn fills(&self) -> Vec<&FillReport> {
        self.events
            .iter()
            .filter_map(|e| match e {
                EngineEvent::Filled(report) => Some(report),
                _ => None,
            })
            .collect()
    }

    pub fn diagnostics(&self) -> Vec<&Diagnostic> {
        self.events
            .iter()
            .filter_map(|e| match e {
                EngineEvent::Diagnostic(diagnostic) => Some(diagnostic),
                _ => None,
            })
            .collect()
    }

    /// Number of evaluations seen
    pub fn evaluations(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, EngineEvent::SpreadEvaluated { .. }))
            .count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: EngineEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::types::Signal;
    use rust_decimal_macros::dec;

    fn evaluated() -> EngineEvent {
        EngineEvent::SpreadEvaluated {
            direction: TradeDirection::Flat,
            decision: SpreadDecision {
                candidate: Signal::Hold,
                executable_spread: dec!(0.5),
                spread_in_ticks: dec!(2),
            },
        }
    }

    #[test]
    fn test_recording_sink_filters() {
        let mut sink = RecordingSink::new();
        sink.emit(evaluated());
        sink.emit(EngineEvent::Diagnostic(Diagnostic::OrderRejected {
            tag: "leg-A-entry".to_string(),
        }));
        sink.emit(EngineEvent::Filled(FillReport {
            tag: "leg-B-entry".to_string(),
            instrument_label: "ES".to_string(),
            average_fill_price: dec!(5006.25),
            slippage_in_ticks: dec!(0),
        }));

        assert_eq!(sink.evaluations(), 1);
        assert_eq!(sink.diagnostics().len(), 1);
        assert_eq!(sink.fills()[0].instrument_label, "ES");

        assert_eq!(sink.take().len(), 3);
        assert!(sink.events().is_empty());
    }

    #[test_log::test]
    fn test_tracing_sink_accepts_every_event() {
        let mut sink = TracingSink;
        sink.emit(evaluated());
        sink.emit(EngineEvent::Diagnostic(Diagnostic::UnknownOrderTag {
            tag: "stray".to_string(),
            state: OrderState::Filled,
        }));
    }

    #[test]
    fn test_event_serializes() {
        let json = serde_json::to_string(&evaluated()).unwrap();
        assert!(json.contains("SpreadEvaluated"));
        assert!(json.contains("\"Flat\""));
    }
}
