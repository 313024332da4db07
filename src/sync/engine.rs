//! Coalesced-write engine - one pending-write state machine between local
//! edits and remote saves.
//!
//! Two triggers feed a single save action: a short debounce that fires once
//! an edit burst settles, and a slow periodic tick that retries while changes
//! are still pending (a failed save keeps the pending flag set, so the next
//! tick picks it up with a freshly read revision token). Each firing
//! snapshots the shared ledger and transmits the snapshot whole, so a burst
//! of N edits becomes one write carrying the final state.

use super::client::SyncClient;
use crate::entities::Ledger;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{RwLock, mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at, sleep};
use tracing::{debug, info, warn};

/// Quiet period after the last edit before a write fires.
const DEBOUNCE: Duration = Duration::from_secs(1);
/// Periodic retry tick while changes are pending.
const SYNC_INTERVAL: Duration = Duration::from_secs(30);
/// How long a terminal status stays visible before decaying to idle.
const STATUS_RESET: Duration = Duration::from_secs(2);

/// Observable sync state, cycling back to [`SyncStatus::Idle`] shortly after
/// each save settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    Idle,
    Syncing,
    Success,
    Error,
}

enum Trigger {
    Change,
    Flush(oneshot::Sender<bool>),
    Stop,
}

/// Handle to the engine task.
pub struct SyncEngine {
    tx: mpsc::UnboundedSender<Trigger>,
    status: watch::Receiver<SyncStatus>,
    task: JoinHandle<()>,
}

impl SyncEngine {
    /// Spawns the engine over a shared ledger and sync client.
    pub fn start(client: Arc<SyncClient>, ledger: Arc<RwLock<Ledger>>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let (status_tx, status) = watch::channel(SyncStatus::Idle);
        let task = tokio::spawn(run(client, ledger, rx, status_tx));
        Self { tx, status, task }
    }

    /// Records that the ledger changed, arming (or extending) the debounce.
    pub fn note_change(&self) {
        let _ = self.tx.send(Trigger::Change);
    }

    /// Saves immediately, bypassing the debounce. Returns whether the save
    /// succeeded; `false` also covers an engine that already stopped.
    pub async fn flush_now(&self) -> bool {
        let (reply_tx, reply_rx) = oneshot::channel();
        if self.tx.send(Trigger::Flush(reply_tx)).is_err() {
            return false;
        }
        reply_rx.await.unwrap_or(false)
    }

    /// Watchable sync status for the UI.
    pub fn status(&self) -> watch::Receiver<SyncStatus> {
        self.status.clone()
    }

    /// Stops the engine. Pending unsaved changes are not flushed; call
    /// [`flush_now`](Self::flush_now) first when they must land.
    pub fn stop(&self) {
        let _ = self.tx.send(Trigger::Stop);
    }
}

impl Drop for SyncEngine {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run(
    client: Arc<SyncClient>,
    ledger: Arc<RwLock<Ledger>>,
    mut rx: mpsc::UnboundedReceiver<Trigger>,
    status_tx: watch::Sender<SyncStatus>,
) {
    let mut pending = false;
    let mut debounce_armed = false;
    let mut debounce = Box::pin(sleep(DEBOUNCE));
    let mut tick = interval_at(Instant::now() + SYNC_INTERVAL, SYNC_INTERVAL);
    tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            trigger = rx.recv() => match trigger {
                None | Some(Trigger::Stop) => break,
                Some(Trigger::Change) => {
                    pending = true;
                    debounce_armed = true;
                    debounce.as_mut().reset(Instant::now() + DEBOUNCE);
                }
                Some(Trigger::Flush(reply)) => {
                    let ok = save_snapshot(&client, &ledger, &status_tx).await;
                    if ok {
                        pending = false;
                        debounce_armed = false;
                    }
                    let _ = reply.send(ok);
                }
            },
            () = debounce.as_mut(), if debounce_armed => {
                debounce_armed = false;
                if save_snapshot(&client, &ledger, &status_tx).await {
                    pending = false;
                } else {
                    warn!("Debounced sync failed; will retry on the next tick");
                }
            }
            _ = tick.tick(), if pending && !debounce_armed => {
                if save_snapshot(&client, &ledger, &status_tx).await {
                    pending = false;
                }
            }
        }
    }
    debug!("Sync engine stopped");
}

async fn save_snapshot(
    client: &SyncClient,
    ledger: &RwLock<Ledger>,
    status_tx: &watch::Sender<SyncStatus>,
) -> bool {
    let _ = status_tx.send(SyncStatus::Syncing);
    let snapshot = ledger.read().await.clone();
    let ok = client.save_ledger(snapshot).await;
    if ok {
        info!("Ledger synced to remote");
    }
    let _ = status_tx.send(if ok { SyncStatus::Success } else { SyncStatus::Error });

    // Decay the terminal status back to idle unless a newer save already
    // took over.
    let status_tx = status_tx.clone();
    tokio::spawn(async move {
        sleep(STATUS_RESET).await;
        status_tx.send_if_modified(|status| {
            if matches!(status, SyncStatus::Success | SyncStatus::Error) {
                *status = SyncStatus::Idle;
                true
            } else {
                false
            }
        });
    });
    ok
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp)]
    use super::*;
    use crate::entities::Member;
    use crate::store::LocalStore;
    use crate::test_utils::{MemoryStore, test_seed};
    use tokio::time::advance;

    async fn settle() {
        for _ in 0..50 {
            tokio::task::yield_now().await;
        }
    }

    fn engine_fixture(
        remote: Arc<MemoryStore>,
    ) -> (tempfile::TempDir, Arc<RwLock<Ledger>>, SyncEngine) {
        let dir = tempfile::tempdir().unwrap();
        let local = LocalStore::new(dir.path().join("data")).unwrap();
        let client = SyncClient::new(remote, local.clone(), test_seed());
        local.save(crate::store::TOKEN_KEY, &"test-token");
        let ledger = Arc::new(RwLock::new(Ledger::seeded(test_seed().to_user())));
        let engine = SyncEngine::start(Arc::new(client), Arc::clone(&ledger));
        (dir, ledger, engine)
    }

    fn member(name: &str) -> Member {
        Member::new(
            name.to_string(),
            "সদস্য".to_string(),
            "017".to_string(),
            String::new(),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn burst_of_edits_coalesces_into_one_save() {
        let remote = Arc::new(MemoryStore::default());
        let (_dir, ledger, engine) = engine_fixture(Arc::clone(&remote));

        for i in 0..5 {
            ledger.write().await.members.push(member(&format!("Member {i}")));
            engine.note_change();
            advance(Duration::from_millis(100)).await;
        }
        assert_eq!(remote.put_count(), 0, "nothing fires inside the burst");

        advance(DEBOUNCE).await;
        settle().await;

        assert_eq!(remote.put_count(), 1);
        let saved: Ledger = serde_json::from_str(&remote.file_content().unwrap()).unwrap();
        assert_eq!(saved.members.len(), 5, "the single write carries the final state");
    }

    #[tokio::test(start_paused = true)]
    async fn failed_save_retries_on_the_periodic_tick() {
        let remote = Arc::new(MemoryStore::default());
        remote.fail_puts(true);
        let (_dir, ledger, engine) = engine_fixture(Arc::clone(&remote));

        ledger.write().await.members.push(member("Only"));
        engine.note_change();
        settle().await;
        advance(DEBOUNCE + Duration::from_millis(10)).await;
        settle().await;
        assert_eq!(remote.put_count(), 0);
        assert!(remote.put_attempts() >= 1);

        remote.fail_puts(false);
        advance(SYNC_INTERVAL).await;
        settle().await;
        assert_eq!(remote.put_count(), 1, "pending change lands on the tick");
    }

    #[tokio::test(start_paused = true)]
    async fn tick_does_nothing_without_pending_changes() {
        let remote = Arc::new(MemoryStore::default());
        let (_dir, _ledger, _engine) = engine_fixture(Arc::clone(&remote));

        advance(SYNC_INTERVAL * 3).await;
        settle().await;
        assert_eq!(remote.put_attempts(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn flush_bypasses_the_debounce() {
        let remote = Arc::new(MemoryStore::default());
        let (_dir, ledger, engine) = engine_fixture(Arc::clone(&remote));

        ledger.write().await.members.push(member("Now"));
        engine.note_change();
        assert!(engine.flush_now().await);
        assert_eq!(remote.put_count(), 1);

        // The armed debounce was disarmed by the flush; nothing fires later.
        advance(DEBOUNCE * 2).await;
        settle().await;
        assert_eq!(remote.put_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn status_cycles_through_success_back_to_idle() {
        let remote = Arc::new(MemoryStore::default());
        let (_dir, _ledger, engine) = engine_fixture(Arc::clone(&remote));
        let status = engine.status();

        assert_eq!(*status.borrow(), SyncStatus::Idle);
        assert!(engine.flush_now().await);
        assert_eq!(*status.borrow(), SyncStatus::Success);

        advance(STATUS_RESET + Duration::from_millis(10)).await;
        settle().await;
        assert_eq!(*status.borrow(), SyncStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn status_reports_error_on_failed_save() {
        let remote = Arc::new(MemoryStore::default());
        remote.fail_puts(true);
        let (_dir, _ledger, engine) = engine_fixture(Arc::clone(&remote));
        let status = engine.status();

        assert!(!engine.flush_now().await);
        assert_eq!(*status.borrow(), SyncStatus::Error);
    }
}
