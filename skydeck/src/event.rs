//! Terminal event plumbing
//!
//! A background task polls crossterm and forwards key/resize events to
//! the runtime loop over a channel; the token tears it down on exit.

use std::time::Duration;

use crossterm::event::{self, KeyEvent};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Events the runtime cares about.
#[derive(Debug, Clone)]
pub enum EventKind {
    Key(KeyEvent),
    Resize(u16, u16),
}

/// Timeout passed to each `crossterm::event::poll` call.
const POLL_TIMEOUT: Duration = Duration::from_millis(10);
/// Sleep between poll cycles.
const LOOP_SLEEP: Duration = Duration::from_millis(16);
/// Upper bound on events handled per cycle so a paste cannot starve
/// the loop.
const MAX_EVENTS_PER_BATCH: usize = 20;

/// Spawn the event polling task with cancellation support.
pub fn spawn_event_poller(
    tx: mpsc::UnboundedSender<EventKind>,
    cancel_token: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    // Drain whatever crossterm still buffers before exiting.
                    while event::poll(Duration::ZERO).unwrap_or(false) {
                        let _ = event::read();
                    }
                    break;
                }
                _ = tokio::time::sleep(LOOP_SLEEP) => {
                    let mut handled = 0;
                    while handled < MAX_EVENTS_PER_BATCH
                        && event::poll(POLL_TIMEOUT).unwrap_or(false)
                    {
                        handled += 1;
                        let kind = match event::read() {
                            Ok(event::Event::Key(key)) => Some(EventKind::Key(key)),
                            Ok(event::Event::Resize(w, h)) => Some(EventKind::Resize(w, h)),
                            _ => None,
                        };
                        if let Some(kind) = kind {
                            if tx.send(kind).is_err() {
                                debug!("event channel closed, stopping poller");
                                return;
                            }
                        }
                    }
                }
            }
        }
    })
}
