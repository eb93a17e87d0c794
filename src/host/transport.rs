//! Order transport backed by a bounded channel

use tokio::sync::mpsc;
use tracing::debug;

use crate::common::errors::Result;
use crate::common::traits::OrderTransport;
use crate::strategy::IntentPair;

/// Hands intent pairs to an outbound task without waiting
///
/// A full or closed channel is reported as a submission failure; the pair is
/// dropped whole.
#[derive(Debug, Clone)]
pub struct ChannelTransport {
    sender: mpsc::Sender<IntentPair>,
    submitted: u64,
}

impl ChannelTransport {
    pub fn new(sender: mpsc::Sender<IntentPair>) -> Self {
        Self {
            sender,
            submitted: 0,
        }
    }

    /// Pairs accepted so far
    pub fn submitted(&self) -> u64 {
        self.submitted
    }
}

impl OrderTransport for ChannelTransport {
    fn submit_pair(&mut self, pair: &IntentPair) -> Result<()> {
        self.sender.try_send(pair.clone())?;
        self.submitted += 1;
        debug!(
            direction = %pair.direction,
            phase = %pair.phase,
            submitted = self.submitted,
            "intent pair queued"
        );
        Ok(())
    }
}
