use log::{debug, error, info, warn};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};

use super::depreciation_traits::DepreciationServiceTrait;

/// Periodic driver for the batch recomputation.
///
/// Runs the batch once per interval tick. Overlapping runs are skipped
/// rather than queued: a tick that fires while the previous run is still in
/// progress does nothing. Stopping the job lets an in-flight run finish;
/// per-row commits make an interrupted cycle harmless since the next run
/// recomputes the same values.
pub struct DepreciationJob {
    service: Arc<dyn DepreciationServiceTrait>,
    is_running: Arc<RwLock<bool>>,
    run_guard: Arc<Mutex<()>>,
}

impl DepreciationJob {
    pub fn new(service: Arc<dyn DepreciationServiceTrait>) -> Self {
        Self {
            service,
            is_running: Arc::new(RwLock::new(false)),
            run_guard: Arc::new(Mutex::new(())),
        }
    }

    /// Starts the interval loop. Returns immediately; the first batch runs on
    /// the first tick, then once per `every` until `stop` is called.
    pub async fn start(&self, every: Duration) {
        {
            let mut is_running = self.is_running.write().await;
            if *is_running {
                warn!("Depreciation job is already running");
                return;
            }
            *is_running = true;
        }

        let service = self.service.clone();
        let is_running = self.is_running.clone();
        let run_guard = self.run_guard.clone();

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            while *is_running.read().await {
                interval.tick().await;
                if !*is_running.read().await {
                    break;
                }
                Self::run_guarded(&service, &run_guard).await;
            }
            debug!("Depreciation job stopped");
        });
    }

    pub async fn stop(&self) {
        *self.is_running.write().await = false;
    }

    pub async fn is_active(&self) -> bool {
        *self.is_running.read().await
    }

    /// Runs one batch immediately, subject to the same overlap guard.
    pub async fn run_once(&self) {
        Self::run_guarded(&self.service, &self.run_guard).await;
    }

    async fn run_guarded(
        service: &Arc<dyn DepreciationServiceTrait>,
        run_guard: &Arc<Mutex<()>>,
    ) {
        let _guard = match run_guard.try_lock() {
            Ok(guard) => guard,
            Err(_) => {
                debug!("Previous depreciation run still in progress, skipping this tick");
                return;
            }
        };

        match service.recompute_all().await {
            Ok(summary) => {
                if summary.is_clean() {
                    info!(
                        "Depreciation batch finished: {} assets processed, {} updated",
                        summary.processed, summary.updated
                    );
                } else {
                    warn!(
                        "Depreciation batch finished with {} failures ({} assets processed)",
                        summary.failures.len(),
                        summary.processed
                    );
                }
            }
            Err(e) => error!("Depreciation batch failed: {}", e),
        }
    }
}
