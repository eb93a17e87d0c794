//! Trait definitions for the engine's external collaborators

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::errors::Result;
use super::types::{OrderUpdate, QuoteEvent};
use crate::strategy::IntentPair;

/// Accepts intent pairs for transmission
///
/// Called from the decision path, so `submit_pair` must hand the pair off
/// without blocking. Acknowledgements and fills come back out of band as
/// [`OrderUpdate`]s. Pairs are the only unit of submission; a transport never
/// sees a lone leg.
#[cfg_attr(test, mockall::automock)]
pub trait OrderTransport: Send {
    /// Queue both legs of a decision. An error means neither leg was queued.
    fn submit_pair(&mut self, pair: &IntentPair) -> Result<()>;
}

/// Inbound event delivered by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Quote(QuoteEvent),
    OrderUpdate(OrderUpdate),
}

/// Source of quote and order-update events (feed adapters)
///
/// Implementations push into a single channel so the engine sees one
/// consistent event order.
#[async_trait]
pub trait EventFeed: Send {
    /// Read events until the source is exhausted, forwarding each one
    ///
    /// # Arguments
    /// * `sender` - Channel sender for forwarding events
    ///
    /// # Returns
    /// Number of events forwarded
    async fn run(&mut self, sender: mpsc::Sender<HostEvent>) -> Result<usize>;

    /// Name of the feed, for logging
    fn feed_name(&self) -> &'static str;
}
