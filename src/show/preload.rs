//! Background asset preloading.
//!
//! Every clip the show may play is checked on a worker thread before the
//! start button appears. The UI thread polls for results between frames;
//! the worker never touches UI state.

use std::collections::BTreeSet;
use std::fs::File;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use crate::audio::{AssetRequest, Clip};

/// Result of a background load operation
pub struct LoadResult<K, V> {
    /// The key that was requested
    pub key: K,
    /// The loaded value, or None if loading failed
    pub value: Option<V>,
}

/// Background worker loop that processes load requests.
///
/// Receives keys from `request_rx`, calls `loader` for each key,
/// and sends `LoadResult` back via `result_tx`. Exits when the
/// request channel is closed (all senders dropped).
pub fn worker_loop<K, V>(
    request_rx: Receiver<K>,
    result_tx: Sender<LoadResult<K, V>>,
    loader: impl Fn(&K) -> Option<V>,
) {
    while let Ok(key) = request_rx.recv() {
        let value = loader(&key);
        // Ignore send errors (main thread may have exited)
        let _ = result_tx.send(LoadResult { key, value });
    }
}

/// Check that a clip can be loaded.
///
/// Clips without a backing file (bell or muted backends) are always ready.
pub fn check_asset(request: &AssetRequest) -> Option<()> {
    match &request.path {
        None => Some(()),
        Some(path) => match File::open(path) {
            Ok(_) => Some(()),
            Err(e) => {
                tracing::warn!(clip = ?request.clip, path = %path.display(), "asset not loadable: {}", e);
                None
            }
        },
    }
}

/// Tracks the preload of a fixed set of clips.
///
/// Completes once every clip has reported ready. A clip that fails to load
/// never reports ready; the caller decides how long to wait.
pub struct AssetPreloader {
    total: usize,
    ready: BTreeSet<Clip>,
    failed: BTreeSet<Clip>,
    result_rx: Option<Receiver<LoadResult<AssetRequest, ()>>>,
}

impl AssetPreloader {
    /// Start checking `plan` on a worker thread.
    pub fn spawn(plan: Vec<AssetRequest>) -> Self {
        let (request_tx, request_rx) = mpsc::channel();
        let (result_tx, result_rx) = mpsc::channel();
        let total = plan.len();

        thread::spawn(move || worker_loop(request_rx, result_tx, check_asset));
        for request in plan {
            // The worker outlives this loop; a send only fails if it panicked
            let _ = request_tx.send(request);
        }
        // Dropping the sender lets the worker exit after the last request

        Self::from_receiver(total, result_rx)
    }

    /// Track results arriving on `result_rx` (for testing).
    pub fn from_receiver(total: usize, result_rx: Receiver<LoadResult<AssetRequest, ()>>) -> Self {
        Self {
            total,
            ready: BTreeSet::new(),
            failed: BTreeSet::new(),
            result_rx: Some(result_rx),
        }
    }

    /// A preloader with nothing to wait for.
    pub fn ready() -> Self {
        Self {
            total: 0,
            ready: BTreeSet::new(),
            failed: BTreeSet::new(),
            result_rx: None,
        }
    }

    /// Drain finished checks. Returns true once every clip is ready.
    pub fn poll(&mut self) -> bool {
        if let Some(rx) = self.result_rx.as_ref() {
            loop {
                match rx.try_recv() {
                    Ok(result) => {
                        let clip = result.key.clip;
                        if result.value.is_some() {
                            self.ready.insert(clip);
                        } else {
                            self.failed.insert(clip);
                        }
                    }
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        self.result_rx = None;
                        break;
                    }
                }
            }
        }
        self.is_complete()
    }

    pub fn is_complete(&self) -> bool {
        self.ready.len() >= self.total
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn ready_count(&self) -> usize {
        self.ready.len()
    }

    /// Clips that reported a load failure.
    pub fn failed(&self) -> impl Iterator<Item = &Clip> {
        self.failed.iter()
    }
}
