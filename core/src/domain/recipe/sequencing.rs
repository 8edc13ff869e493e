use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::mpsc;

/// Quiet period the search box waits for before issuing a query.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QueryTicket(u64);

/// Orders overlapping catalog queries. A response may only be applied while
/// the ticket it was issued under is still the newest one.
#[derive(Debug, Default)]
pub struct QuerySequencer {
    latest: AtomicU64,
}

impl QuerySequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> QueryTicket {
        QueryTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: QueryTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

/// Forwards only the last value of each burst on `input`, once `quiet` has
/// elapsed without a newer one. A pending value is flushed when `input` closes.
pub async fn debounce<T: Send>(
    mut input: mpsc::Receiver<T>,
    output: mpsc::Sender<T>,
    quiet: Duration,
) {
    while let Some(mut pending) = input.recv().await {
        loop {
            match tokio::time::timeout(quiet, input.recv()).await {
                Ok(Some(next)) => pending = next,
                Ok(None) => {
                    let _ = output.send(pending).await;
                    return;
                }
                Err(_) => break,
            }
        }

        if output.send(pending).await.is_err() {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_newest_ticket_is_current() {
        let sequencer = QuerySequencer::new();
        let first = sequencer.issue();
        let second = sequencer.issue();

        assert!(first < second);
        assert!(!sequencer.is_current(first));
        assert!(sequencer.is_current(second));
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_coalesces_keystrokes() {
        let (keys_tx, keys_rx) = mpsc::channel(16);
        let (query_tx, mut query_rx) = mpsc::channel(16);
        let task = tokio::spawn(debounce(keys_rx, query_tx, SEARCH_DEBOUNCE));

        for partial in ["s", "sp", "spi"] {
            keys_tx.send(partial.to_string()).await.unwrap();
        }
        assert_eq!(query_rx.recv().await.as_deref(), Some("spi"));

        keys_tx.send("spicy".to_string()).await.unwrap();
        assert_eq!(query_rx.recv().await.as_deref(), Some("spicy"));

        drop(keys_tx);
        task.await.unwrap();
        assert_eq!(query_rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_flushes_on_close() {
        let (keys_tx, keys_rx) = mpsc::channel(4);
        let (query_tx, mut query_rx) = mpsc::channel(4);

        keys_tx.send("curry").await.unwrap();
        drop(keys_tx);
        debounce(keys_rx, query_tx, SEARCH_DEBOUNCE).await;

        assert_eq!(query_rx.recv().await.as_deref(), Some("curry"));
    }
}
