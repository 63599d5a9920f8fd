use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::assets::assets_model::Asset;
use crate::errors::Result;

use super::depreciation_model::{BatchSummary, ScheduleRow};

/// Source of "now" for as-of computations. Injected so tests can pin time.
pub trait Clock: Send + Sync {
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Wall-clock implementation used outside tests.
#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Invalidation hook for a read cache in front of the asset collection.
/// The batch run notifies it once per completed cycle.
pub trait CacheInvalidator: Send + Sync {
    fn invalidate(&self, endpoint: &str);
}

/// Invalidator for deployments without a cache layer.
#[derive(Debug, Clone, Default)]
pub struct NoopCacheInvalidator;

impl CacheInvalidator for NoopCacheInvalidator {
    fn invalidate(&self, _endpoint: &str) {}
}

/// Trait defining the contract for depreciation engine operations.
#[async_trait]
pub trait DepreciationServiceTrait: Send + Sync {
    /// Recomputes and persists one asset's derived fields. A no-op for
    /// assets without usable depreciation inputs.
    async fn recompute_asset(&self, asset_id: &str) -> Result<Asset>;

    /// Recomputes every non-deleted asset. Per-asset failures are collected
    /// in the summary; one bad row never aborts the rest of the batch.
    async fn recompute_all(&self) -> Result<BatchSummary>;

    /// Projected month-by-month schedule for one asset, ordered by month
    /// ascending. Empty when the asset has no usable depreciation inputs.
    fn amortization_schedule(&self, asset_id: &str) -> Result<Vec<ScheduleRow>>;
}
