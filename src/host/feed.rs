//! Line-oriented event feed

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use super::messages::HostMessage;
use crate::common::errors::{EngineError, Result};
use crate::common::traits::{EventFeed, HostEvent};
use crate::config::types::EngineConfig;

/// Reads newline-delimited [`HostMessage`]s from any async reader
///
/// Blank lines are skipped. Lines that fail to parse or name an unknown
/// symbol are logged and dropped; the feed keeps reading.
pub struct LineFeed<R> {
    reader: R,
    config: EngineConfig,
    skipped: usize,
}

impl<R: AsyncBufRead + Unpin + Send> LineFeed<R> {
    pub fn new(reader: R, config: EngineConfig) -> Self {
        Self {
            reader,
            config,
            skipped: 0,
        }
    }

    /// Lines dropped so far
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> EventFeed for LineFeed<R> {
    #[instrument(skip(self, sender))]
    async fn run(&mut self, sender: mpsc::Sender<HostEvent>) -> Result<usize> {
        let mut lines = (&mut self.reader).lines();
        let mut line_no = 0usize;
        let mut forwarded = 0usize;

        while let Some(line) = lines.next_line().await? {
            line_no += 1;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let event = match HostMessage::parse(line).and_then(|msg| msg.into_event(&self.config)) {
                Ok(event) => event,
                Err(e) => {
                    self.skipped += 1;
                    warn!(line = line_no, error = %e, "skipping feed line");
                    continue;
                }
            };

            sender
                .send(event)
                .await
                .map_err(|e| EngineError::ChannelSend(e.to_string()))?;
            forwarded += 1;
        }

        info!(forwarded, skipped = self.skipped, "feed exhausted");
        debug!(lines = line_no, "feed closed");
        Ok(forwarded)
    }

    fn feed_name(&self) -> &'static str {
        "json-lines"
    }
}
