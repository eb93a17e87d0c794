use crate::common::errors::Result;
use crate::common::types::{OrderUpdate, QuoteEvent};
use crate::strategy::types::{Decision, FillReport, TradeDirection};

/// Capability interface a host drives a pair strategy through
///
/// A strategy is configured once at construction and then fed one ordered
/// stream of quote and order-update events from a single task.
///
/// # Implementation Notes
///
/// - `on_quote` and `on_order_update` must not block or perform I/O
/// - Intent pairs leave through the strategy's transport; the call returns
///   as soon as the pair is handed off
/// - Errors are per-event; the host logs them and keeps feeding events
///
/// # Example
///
/// ```ignore
/// let mut engine = SpreadEngine::new(config, transport, TracingSink)?;
///
/// for event in feed {
///     match engine.on_quote(&event) {
///         Ok(Decision::Enter(pair)) => info!(?pair, "entered"),
///         Ok(_) => {}
///         Err(e) => warn!(error = %e, "quote handling failed"),
///     }
/// }
/// ```
pub trait PairStrategy: Send {
    /// Unique identifier for this strategy
    fn name(&self) -> &str;

    /// Called on every best bid/ask change of either leg
    ///
    /// # Returns
    /// * `Decision::Deferred` - quotes incomplete, nothing evaluated
    /// * `Decision::Hold` - evaluated, no transition
    /// * `Decision::Enter` / `Decision::Exit` - a pair was emitted
    /// * `Err(_)` - a pair was built but the transport refused it
    fn on_quote(&mut self, event: &QuoteEvent) -> Result<Decision>;

    /// Called on every order state change reported by the transport
    ///
    /// Returns the slippage report when the update is a fill of a known tag.
    fn on_order_update(&mut self, update: &OrderUpdate) -> Option<FillReport>;

    /// Direction of the last submitted pair
    fn current_direction(&self) -> TradeDirection;

    /// Return to a fresh session: `Flat`, no quotes, no outstanding tags
    fn reset(&mut self);

    /// Called when the host is shutting down
    ///
    /// Default implementation resets the strategy.
    fn on_shutdown(&mut self) {
        self.reset();
    }
}
