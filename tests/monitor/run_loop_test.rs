// =============================================================================
// INTEGRATION TESTS - RUN LOOP
// Drives MonitorEngine::run on a paused clock and counts fetches
// =============================================================================

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use github_status::services::monitor::{MonitorEngine, PollingStrategy, StatusSource, UnknownPolicy};
use github_status::services::status::{Status, StatusError, StatusReport};

use crate::common::{MemoryStore, RecordingNotifier};

const LOW: Duration = Duration::from_secs(60);
const HIGH: Duration = Duration::from_secs(5);

/// Replays a script, then keeps returning its last status
#[derive(Clone)]
struct CountingSource {
    script: Arc<Mutex<VecDeque<Status>>>,
    last: Arc<Mutex<Status>>,
    fetches: Arc<AtomicUsize>,
}

impl CountingSource {
    fn new(script: &[Status]) -> Self {
        Self {
            script: Arc::new(Mutex::new(script.iter().copied().collect())),
            last: Arc::new(Mutex::new(Status::Unknown)),
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StatusSource for CountingSource {
    async fn fetch(&self) -> Result<StatusReport, StatusError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        let mut last = self.last.lock().unwrap();
        if let Some(next) = self.script.lock().unwrap().pop_front() {
            *last = next;
        }

        Ok(StatusReport {
            status: *last,
            last_updated: None,
        })
    }
}

/// Let the spawned loop run until it parks on its next sleep
async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

async fn advance(by: Duration) {
    tokio::time::advance(by).await;
    settle().await;
}

#[tokio::test(start_paused = true)]
async fn test_run_sleeps_selected_interval_between_fetches() {
    let source = CountingSource::new(&[Status::Good, Status::Good, Status::Major, Status::Major, Status::Good]);
    let store = MemoryStore::with_initial(None);
    let notifier = RecordingNotifier::default();

    let monitor = MonitorEngine::start(
        source.clone(),
        store.clone(),
        notifier.clone(),
        PollingStrategy::new(LOW, HIGH),
        UnknownPolicy::Track,
    )
    .await;
    let handle = tokio::spawn(monitor.run());

    // First fetch happens immediately: good, so the low interval follows
    settle().await;
    assert_eq!(source.fetches(), 1);

    advance(LOW - Duration::from_secs(1)).await;
    assert_eq!(source.fetches(), 1);

    // t = 61s: second fetch, still good
    advance(Duration::from_secs(2)).await;
    assert_eq!(source.fetches(), 2);

    advance(Duration::from_secs(58)).await;
    assert_eq!(source.fetches(), 2);

    // t = 122s: third fetch, major, switches to the high interval
    advance(Duration::from_secs(3)).await;
    assert_eq!(source.fetches(), 3);

    advance(HIGH - Duration::from_secs(1)).await;
    assert_eq!(source.fetches(), 3);

    // t = 128s: fourth fetch, major again, high interval kept
    advance(Duration::from_secs(2)).await;
    assert_eq!(source.fetches(), 4);

    // t = 134s: fifth fetch, good again, back to the low interval
    advance(HIGH + Duration::from_secs(1)).await;
    assert_eq!(source.fetches(), 5);

    advance(LOW - Duration::from_secs(1)).await;
    assert_eq!(source.fetches(), 5);

    advance(Duration::from_secs(2)).await;
    assert_eq!(source.fetches(), 6);

    assert_eq!(notifier.calls(), vec![Status::Good, Status::Major, Status::Good]);
    assert_eq!(store.saves(), vec![Status::Good, Status::Major, Status::Good]);

    handle.abort();
}
