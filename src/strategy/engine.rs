use tracing::{debug, instrument, warn};

use crate::common::errors::{EngineError, Result};
use crate::common::traits::OrderTransport;
use crate::common::types::{OrderUpdate, QuoteEvent};
use crate::config::types::EngineConfig;
use crate::strategy::events::{Diagnostic, EngineEvent, EventSink};
use crate::strategy::evaluator::SpreadEvaluator;
use crate::strategy::fills::{FillObservation, FillObserver};
use crate::strategy::intents::OrderIntentBuilder;
use crate::strategy::position::{PositionStateMachine, Transition};
use crate::strategy::quote_store::QuoteStore;
use crate::strategy::traits::PairStrategy;
use crate::strategy::types::{Decision, FillReport, Phase, TradeDirection};

/// Two-leg spread engine for one trading session
///
/// Owns all trading state. Quotes flow through the store, the evaluator and
/// the position state machine; transitions are turned into intent pairs and
/// handed to the transport. Fills only feed the observer.
pub struct SpreadEngine<T, S> {
    config: EngineConfig,
    quotes: QuoteStore,
    evaluator: SpreadEvaluator,
    position: PositionStateMachine,
    builder: OrderIntentBuilder,
    fills: FillObserver,
    transport: T,
    sink: S,
}

impl<T: OrderTransport, S: EventSink> SpreadEngine<T, S> {
    /// Validate `config` and build a flat engine
    pub fn new(config: EngineConfig, transport: T, sink: S) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            quotes: QuoteStore::new(),
            evaluator: SpreadEvaluator::new(
                config.tick_size,
                config.entry_threshold_ticks,
                config.exit_threshold_ticks,
            ),
            position: PositionStateMachine::new(),
            builder: OrderIntentBuilder::new(
                config.tick_size,
                config.leg_a.quantity,
                config.leg_b.quantity,
            ),
            fills: FillObserver::new(
                config.tick_size,
                config.leg_a.symbol.clone(),
                config.leg_b.symbol.clone(),
            ),
            config,
            transport,
            sink,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn quotes(&self) -> &QuoteStore {
        &self.quotes
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Evaluate the current quotes and act on the result
    fn evaluate(&mut self) -> Result<Decision> {
        let Some(snapshot) = self.quotes.snapshot() else {
            return Ok(Decision::Deferred);
        };

        let direction = self.position.direction();
        let Some(decision) = self.evaluator.evaluate(&snapshot, direction) else {
            let context = format!("spread evaluation while {}", direction);
            warn!(%direction, ?snapshot, "quoted prices overflow, quote skipped");
            self.sink.emit(EngineEvent::Diagnostic(Diagnostic::PriceOverflow {
                context: context.clone(),
            }));
            return Err(EngineError::PriceOverflow(context));
        };
        self.sink.emit(EngineEvent::SpreadEvaluated { direction, decision });

        let Some(transition) = self.position.apply(decision.candidate) else {
            return Ok(Decision::Hold);
        };

        let pair = self
            .builder
            .build(transition.direction(), transition.phase(), &snapshot)
            .ok_or_else(|| EngineError::Internal(format!("no legs for {:?}", transition)))?;

        self.fills.register(&pair);
        self.sink.emit(match transition {
            Transition::Entered(_) => EngineEvent::Entered(pair.clone()),
            Transition::Exited(_) => EngineEvent::Exited(pair.clone()),
        });

        if let Err(e) = self.transport.submit_pair(&pair) {
            warn!(
                direction = %pair.direction,
                phase = %pair.phase,
                error = %e,
                "intent pair not submitted"
            );
            self.sink.emit(EngineEvent::Diagnostic(Diagnostic::SubmissionFailed {
                direction: pair.direction,
                phase: pair.phase,
                reason: e.to_string(),
            }));
            return Err(EngineError::Submission(e.to_string()));
        }

        Ok(match pair.phase {
            Phase::Entry => Decision::Enter(pair),
            Phase::Exit => Decision::Exit(pair),
        })
    }
}

impl<T: OrderTransport, S: EventSink> PairStrategy for SpreadEngine<T, S> {
    fn name(&self) -> &str {
        "pairs_spread"
    }

    #[instrument(level = "trace", skip(self))]
    fn on_quote(&mut self, event: &QuoteEvent) -> Result<Decision> {
        self.quotes.apply(event);

        if !self.quotes.has_complete_quotes() {
            debug!(leg = %event.leg, side = %event.side, "quotes incomplete, evaluation deferred");
            return Ok(Decision::Deferred);
        }

        self.evaluate()
    }

    fn on_order_update(&mut self, update: &OrderUpdate) -> Option<FillReport> {
        match self.fills.observe(update) {
            FillObservation::Report(report) => {
                self.sink.emit(EngineEvent::Filled(report.clone()));
                Some(report)
            }
            FillObservation::Diagnostic(diagnostic) => {
                self.sink.emit(EngineEvent::Diagnostic(diagnostic));
                None
            }
            FillObservation::Pending => None,
        }
    }

    fn current_direction(&self) -> TradeDirection {
        self.position.direction()
    }

    fn reset(&mut self) {
        self.quotes.clear();
        self.position.reset();
        self.fills.clear();
    }
}
