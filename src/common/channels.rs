//! Channel type definitions for inter-task communication

use tokio::sync::mpsc;

use super::traits::HostEvent;
use crate::strategy::IntentPair;

/// Default channel buffer size
pub const DEFAULT_CHANNEL_SIZE: usize = 1000;

/// Create a new host event channel with a custom buffer size
pub fn create_event_channel_with_size(
    size: usize,
) -> (mpsc::Sender<HostEvent>, mpsc::Receiver<HostEvent>) {
    mpsc::channel(size)
}

/// Create a new outbound intent channel with a custom buffer size
pub fn create_intent_channel_with_size(
    size: usize,
) -> (mpsc::Sender<IntentPair>, mpsc::Receiver<IntentPair>) {
    mpsc::channel(size)
}
