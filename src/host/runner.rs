//! Single-writer event loop driving a strategy

use tokio::sync::mpsc;
use tracing::{info, instrument, warn};

use crate::common::traits::HostEvent;
use crate::strategy::{Decision, PairStrategy};

/// Counts of what a run processed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub quotes: u64,
    pub deferred: u64,
    pub entries: u64,
    pub exits: u64,
    pub order_updates: u64,
    pub fills: u64,
    pub errors: u64,
}

/// Feed every event from `events` to `strategy` until the channel closes
///
/// All strategy state is touched from this task only. Per-event errors are
/// logged and counted, never fatal.
#[instrument(skip_all, fields(strategy = strategy.name()))]
pub async fn run_engine<P>(strategy: &mut P, mut events: mpsc::Receiver<HostEvent>) -> RunSummary
where
    P: PairStrategy + ?Sized,
{
    let mut summary = RunSummary::default();

    while let Some(event) = events.recv().await {
        match event {
            HostEvent::Quote(quote) => {
                summary.quotes += 1;
                match strategy.on_quote(&quote) {
                    Ok(Decision::Deferred) => summary.deferred += 1,
                    Ok(Decision::Hold) => {}
                    Ok(Decision::Enter(_)) => summary.entries += 1,
                    Ok(Decision::Exit(_)) => summary.exits += 1,
                    Err(e) => {
                        summary.errors += 1;
                        warn!(
                            error = %e,
                            direction = %strategy.current_direction(),
                            "quote processing failed, continuing"
                        );
                    }
                }
            }
            HostEvent::OrderUpdate(update) => {
                summary.order_updates += 1;
                if strategy.on_order_update(&update).is_some() {
                    summary.fills += 1;
                }
            }
        }
    }

    info!(?summary, direction = %strategy.current_direction(), "event stream closed");
    summary
}
