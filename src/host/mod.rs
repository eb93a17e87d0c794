//! Host module - Reference hosting layer around the decision core
//!
//! JSON-lines feed in, intent pairs out through a bounded channel, one task
//! driving the strategy.

pub mod feed;
pub mod messages;
pub mod runner;
pub mod transport;

pub use feed::LineFeed;
pub use messages::{HostMessage, IntentRecord, IntentRecordLeg};
pub use runner::{run_engine, RunSummary};
pub use transport::ChannelTransport;
