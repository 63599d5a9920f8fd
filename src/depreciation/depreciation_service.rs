use async_trait::async_trait;
use chrono::NaiveDate;
use log::{error, info};
use std::sync::Arc;

use crate::assets::assets_constants::ASSETS_ENDPOINT;
use crate::assets::assets_model::Asset;
use crate::assets::assets_traits::AssetRepositoryTrait;
use crate::categories::categories_model::Category;
use crate::categories::categories_traits::CategoryRepositoryTrait;
use crate::errors::{Error, Result};

use super::depreciation_calculator::{amortization_schedule, derived_update};
use super::depreciation_model::{BatchFailure, BatchSummary, DepreciationInput, ScheduleRow};
use super::depreciation_traits::{CacheInvalidator, Clock, DepreciationServiceTrait};

/// Depreciation engine over the asset store.
///
/// Stateless between invocations: every recomputation derives the values
/// afresh from the stored inputs and the injected clock, so repeated runs are
/// idempotent and accumulate no error.
pub struct DepreciationService {
    assets: Arc<dyn AssetRepositoryTrait>,
    categories: Arc<dyn CategoryRepositoryTrait>,
    clock: Arc<dyn Clock>,
    cache: Arc<dyn CacheInvalidator>,
}

impl DepreciationService {
    pub fn new(
        assets: Arc<dyn AssetRepositoryTrait>,
        categories: Arc<dyn CategoryRepositoryTrait>,
        clock: Arc<dyn Clock>,
        cache: Arc<dyn CacheInvalidator>,
    ) -> Self {
        Self {
            assets,
            categories,
            clock,
            cache,
        }
    }

    /// Re-reads the asset's category so economic-age changes are picked up.
    /// A dangling category reference is a lookup failure, not a skip.
    fn category_for(&self, asset: &Asset) -> Result<Option<Category>> {
        match &asset.category_id {
            Some(id) => {
                let category = self
                    .categories
                    .get_category_by_id(id)?
                    .ok_or_else(|| Error::Category(format!("Category not found: {}", id)))?;
                Ok(Some(category))
            }
            None => Ok(None),
        }
    }

    /// Refreshes one asset. Returns whether the derived fields were written.
    fn recompute_one(&self, asset: &Asset, as_of: NaiveDate) -> Result<bool> {
        let category = self.category_for(asset)?;
        let input = DepreciationInput::from_asset(asset, category.as_ref());
        match derived_update(&input, as_of) {
            Some(update) => {
                self.assets.update_depreciation(&asset.id, update)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl DepreciationServiceTrait for DepreciationService {
    async fn recompute_asset(&self, asset_id: &str) -> Result<Asset> {
        let asset = self.assets.get_by_id(asset_id)?;
        let as_of = self.clock.now_utc().date_naive();
        if self.recompute_one(&asset, as_of)? {
            Ok(self.assets.get_by_id(asset_id)?)
        } else {
            Ok(asset)
        }
    }

    async fn recompute_all(&self) -> Result<BatchSummary> {
        let assets = self.assets.list_active()?;
        let as_of = self.clock.now_utc().date_naive();

        let mut updated = 0;
        let mut skipped = 0;
        let mut failures: Vec<BatchFailure> = Vec::new();
        let processed = assets.len();

        for asset in &assets {
            match self.recompute_one(asset, as_of) {
                Ok(true) => updated += 1,
                Ok(false) => skipped += 1,
                Err(e) => {
                    // keep going, remaining assets still get refreshed
                    error!("Failed to recompute depreciation for asset {}: {}", asset.id, e);
                    failures.push(BatchFailure {
                        asset_id: asset.id.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }

        self.cache.invalidate(ASSETS_ENDPOINT);

        info!(
            "Depreciation batch: {} processed, {} updated, {} skipped, {} failed",
            processed,
            updated,
            skipped,
            failures.len()
        );

        Ok(BatchSummary {
            processed,
            updated,
            skipped,
            failures,
            completed_at: self.clock.now_utc(),
        })
    }

    fn amortization_schedule(&self, asset_id: &str) -> Result<Vec<ScheduleRow>> {
        let asset = self.assets.get_by_id(asset_id)?;
        // a missing category simply leaves the economic age unset
        let category = match &asset.category_id {
            Some(id) => self.categories.get_category_by_id(id)?,
            None => None,
        };
        let input = DepreciationInput::from_asset(&asset, category.as_ref());
        Ok(amortization_schedule(&input))
    }
}
