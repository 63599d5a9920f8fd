#[cfg(test)]
mod tests {
    use crate::assets::assets_errors::{AssetError, Result as AssetResult};
    use crate::assets::assets_model::{Asset, AssetDepreciationUpdate, NewAsset, UpdateAsset};
    use crate::assets::assets_traits::AssetRepositoryTrait;
    use crate::categories::categories_model::{Category, NewCategory, UpdateCategory};
    use crate::categories::categories_traits::CategoryRepositoryTrait;
    use crate::depreciation::depreciation_service::DepreciationService;
    use crate::depreciation::depreciation_traits::{
        CacheInvalidator, Clock, DepreciationServiceTrait,
    };
    use crate::errors::{Error, Result};
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    // --- Mock asset repository ---

    struct MockAssetRepository {
        assets: Mutex<Vec<Asset>>,
        updates: Mutex<Vec<(String, AssetDepreciationUpdate)>>,
    }

    impl MockAssetRepository {
        fn new(assets: Vec<Asset>) -> Arc<Self> {
            Arc::new(Self {
                assets: Mutex::new(assets),
                updates: Mutex::new(Vec::new()),
            })
        }

        fn recorded_updates(&self) -> Vec<(String, AssetDepreciationUpdate)> {
            self.updates.lock().unwrap().clone()
        }
    }

    impl AssetRepositoryTrait for MockAssetRepository {
        fn create(&self, _new_asset: NewAsset) -> AssetResult<Asset> {
            Err(AssetError::DatabaseError("not implemented".to_string()))
        }

        fn update(&self, _asset_id: &str, _payload: UpdateAsset) -> AssetResult<Asset> {
            Err(AssetError::DatabaseError("not implemented".to_string()))
        }

        fn get_by_id(&self, asset_id: &str) -> AssetResult<Asset> {
            self.assets
                .lock()
                .unwrap()
                .iter()
                .find(|a| a.id == asset_id)
                .cloned()
                .ok_or_else(|| AssetError::NotFound(format!("Asset not found: {}", asset_id)))
        }

        fn list_active(&self) -> AssetResult<Vec<Asset>> {
            Ok(self.assets.lock().unwrap().clone())
        }

        fn soft_delete(&self, _asset_id: &str) -> AssetResult<()> {
            Err(AssetError::DatabaseError("not implemented".to_string()))
        }

        fn update_depreciation(
            &self,
            asset_id: &str,
            update: AssetDepreciationUpdate,
        ) -> AssetResult<Asset> {
            let mut assets = self.assets.lock().unwrap();
            let asset = assets
                .iter_mut()
                .find(|a| a.id == asset_id)
                .ok_or_else(|| AssetError::NotFound(format!("Asset not found: {}", asset_id)))?;
            asset.salvage_amount = Some(update.salvage_amount);
            asset.depreciation_amount_per_month = Some(update.depreciation_amount_per_month);
            asset.depreciation_amount = Some(update.depreciation_amount);
            asset.current_value = Some(update.current_value);
            self.updates
                .lock()
                .unwrap()
                .push((asset_id.to_string(), update));
            Ok(asset.clone())
        }

        fn count(&self) -> AssetResult<i64> {
            Ok(self.assets.lock().unwrap().len() as i64)
        }
    }

    // --- Mock category repository ---

    struct MockCategoryRepository {
        categories: HashMap<String, Category>,
        fail_for: Option<String>,
    }

    impl MockCategoryRepository {
        fn new(categories: Vec<Category>) -> Arc<Self> {
            Arc::new(Self {
                categories: categories.into_iter().map(|c| (c.id.clone(), c)).collect(),
                fail_for: None,
            })
        }

        fn failing_for(categories: Vec<Category>, category_id: &str) -> Arc<Self> {
            Arc::new(Self {
                categories: categories.into_iter().map(|c| (c.id.clone(), c)).collect(),
                fail_for: Some(category_id.to_string()),
            })
        }
    }

    impl CategoryRepositoryTrait for MockCategoryRepository {
        fn get_all_categories(&self) -> Result<Vec<Category>> {
            Err(Error::Unexpected("not implemented".to_string()))
        }

        fn get_category_by_id(&self, id: &str) -> Result<Option<Category>> {
            if self.fail_for.as_deref() == Some(id) {
                return Err(Error::Unexpected(format!(
                    "Category lookup failed for {}",
                    id
                )));
            }
            Ok(self.categories.get(id).cloned())
        }

        fn create_category(&self, _new_category: NewCategory) -> Result<Category> {
            Err(Error::Unexpected("not implemented".to_string()))
        }

        fn update_category(&self, _id: &str, _update: UpdateCategory) -> Result<Category> {
            Err(Error::Unexpected("not implemented".to_string()))
        }

        fn delete_category(&self, _id: &str) -> Result<()> {
            Err(Error::Unexpected("not implemented".to_string()))
        }

        fn count_assets_in_category(&self, _category_id: &str) -> Result<i64> {
            Err(Error::Unexpected("not implemented".to_string()))
        }
    }

    // --- Fixed clock and recording cache ---

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now_utc(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[derive(Default)]
    struct RecordingCache {
        invalidated: Mutex<Vec<String>>,
    }

    impl CacheInvalidator for RecordingCache {
        fn invalidate(&self, endpoint: &str) {
            self.invalidated.lock().unwrap().push(endpoint.to_string());
        }
    }

    // --- Fixtures ---

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn category(id: &str, economic_age_months: i32) -> Category {
        let now = date(2024, 1, 1).and_hms_opt(0, 0, 0).unwrap();
        Category {
            id: id.to_string(),
            code: format!("CAT-{}", id.to_uppercase()),
            name: format!("Category {}", id),
            description: None,
            economic_age_months,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    fn asset(
        id: &str,
        price: Decimal,
        salvage: Option<Decimal>,
        input_date: Option<NaiveDate>,
        category_id: Option<&str>,
    ) -> Asset {
        let now = date(2024, 1, 1).and_hms_opt(0, 0, 0).unwrap();
        Asset {
            id: id.to_string(),
            code: format!("AST-{}", id.to_uppercase()),
            name: format!("Asset {}", id),
            price,
            salvage_amount: salvage,
            input_date,
            category_id: category_id.map(|c| c.to_string()),
            status: "available".to_string(),
            depreciation_amount_per_month: None,
            depreciation_amount: None,
            current_value: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    fn service(
        assets: Arc<MockAssetRepository>,
        categories: Arc<MockCategoryRepository>,
        cache: Arc<RecordingCache>,
    ) -> DepreciationService {
        // 2024-07-20: six anniversaries after a 2024-01-15 input date
        let clock = Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2024, 7, 20, 12, 0, 0).unwrap(),
        ));
        DepreciationService::new(assets, categories, clock, cache)
    }

    // --- Tests ---

    #[tokio::test]
    async fn batch_refreshes_every_depreciable_asset() {
        let assets = MockAssetRepository::new(vec![
            asset("a1", dec!(12_000_000), None, Some(date(2024, 1, 15)), Some("laptops")),
            asset(
                "a2",
                dec!(5_000_000),
                Some(dec!(1_000_000)),
                Some(date(2024, 1, 1)),
                Some("laptops"),
            ),
        ]);
        let categories = MockCategoryRepository::new(vec![category("laptops", 12)]);
        let cache = Arc::new(RecordingCache::default());
        let service = service(assets.clone(), categories, cache);

        let summary = service.recompute_all().await.unwrap();

        assert_eq!(summary.processed, 2);
        assert_eq!(summary.updated, 2);
        assert_eq!(summary.skipped, 0);
        assert!(summary.is_clean());

        let a1 = assets.get_by_id("a1").unwrap();
        assert_eq!(a1.depreciation_amount_per_month, Some(dec!(1_000_000)));
        assert_eq!(a1.depreciation_amount, Some(dec!(6_000_000)));
        assert_eq!(a1.current_value, Some(dec!(6_000_000)));
        // salvage default written back
        assert_eq!(a1.salvage_amount, Some(Decimal::ZERO));
    }

    #[tokio::test]
    async fn batch_continues_past_failing_rows() {
        let assets = MockAssetRepository::new(vec![
            asset("a1", dec!(12_000_000), None, Some(date(2024, 1, 15)), Some("laptops")),
            asset("a2", dec!(12_000_000), None, Some(date(2024, 1, 15)), Some("broken")),
            asset("a3", dec!(12_000_000), None, Some(date(2024, 1, 15)), Some("laptops")),
        ]);
        let categories = MockCategoryRepository::failing_for(
            vec![category("laptops", 12), category("broken", 12)],
            "broken",
        );
        let cache = Arc::new(RecordingCache::default());
        let service = service(assets.clone(), categories, cache);

        let summary = service.recompute_all().await.unwrap();

        assert_eq!(summary.processed, 3);
        assert_eq!(summary.updated, 2);
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].asset_id, "a2");

        // the rows around the failure were still refreshed
        let updated_ids: Vec<String> = assets
            .recorded_updates()
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(updated_ids, vec!["a1".to_string(), "a3".to_string()]);
    }

    #[tokio::test]
    async fn batch_skips_assets_without_depreciation_inputs() {
        let assets = MockAssetRepository::new(vec![
            // no category, no input date, zero price
            asset("a1", dec!(12_000_000), None, Some(date(2024, 1, 15)), None),
            asset("a2", dec!(12_000_000), None, None, Some("laptops")),
            asset("a3", dec!(0), None, Some(date(2024, 1, 15)), Some("laptops")),
        ]);
        let categories = MockCategoryRepository::new(vec![category("laptops", 12)]);
        let cache = Arc::new(RecordingCache::default());
        let service = service(assets.clone(), categories, cache);

        let summary = service.recompute_all().await.unwrap();

        assert_eq!(summary.processed, 3);
        assert_eq!(summary.updated, 0);
        assert_eq!(summary.skipped, 3);
        assert!(summary.is_clean());
        assert!(assets.recorded_updates().is_empty());
    }

    #[tokio::test]
    async fn batch_invalidates_the_asset_collection_cache() {
        let assets = MockAssetRepository::new(vec![]);
        let categories = MockCategoryRepository::new(vec![]);
        let cache = Arc::new(RecordingCache::default());
        let service = service(assets, categories, cache.clone());

        service.recompute_all().await.unwrap();

        assert_eq!(*cache.invalidated.lock().unwrap(), vec!["assets".to_string()]);
    }

    #[tokio::test]
    async fn batch_is_idempotent_for_a_fixed_clock() {
        let assets = MockAssetRepository::new(vec![asset(
            "a1",
            dec!(12_000_000),
            None,
            Some(date(2024, 1, 15)),
            Some("laptops"),
        )]);
        let categories = MockCategoryRepository::new(vec![category("laptops", 12)]);
        let cache = Arc::new(RecordingCache::default());
        let service = service(assets.clone(), categories, cache);

        service.recompute_all().await.unwrap();
        let first = assets.get_by_id("a1").unwrap();
        service.recompute_all().await.unwrap();
        let second = assets.get_by_id("a1").unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn recompute_asset_returns_the_refreshed_row() {
        let assets = MockAssetRepository::new(vec![asset(
            "a1",
            dec!(12_000_000),
            None,
            Some(date(2024, 1, 15)),
            Some("laptops"),
        )]);
        let categories = MockCategoryRepository::new(vec![category("laptops", 12)]);
        let cache = Arc::new(RecordingCache::default());
        let service = service(assets, categories, cache);

        let refreshed = service.recompute_asset("a1").await.unwrap();
        assert_eq!(refreshed.current_value, Some(dec!(6_000_000)));
    }

    #[tokio::test]
    async fn recompute_asset_fails_for_unknown_ids() {
        let assets = MockAssetRepository::new(vec![]);
        let categories = MockCategoryRepository::new(vec![]);
        let cache = Arc::new(RecordingCache::default());
        let service = service(assets, categories, cache);

        let err = service.recompute_asset("missing").await.unwrap_err();
        assert!(matches!(err, Error::Asset(_)));
    }

    #[tokio::test]
    async fn schedule_comes_from_the_assets_own_category() {
        let assets = MockAssetRepository::new(vec![
            asset("a1", dec!(12_000_000), None, Some(date(2024, 1, 15)), Some("laptops")),
            asset("a2", dec!(12_000_000), None, Some(date(2024, 1, 15)), None),
        ]);
        let categories = MockCategoryRepository::new(vec![category("laptops", 12)]);
        let cache = Arc::new(RecordingCache::default());
        let service = service(assets, categories, cache);

        let rows = service.amortization_schedule("a1").unwrap();
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[11].economic_amount, Decimal::ZERO);

        // no category means no economic age and therefore no schedule
        assert!(service.amortization_schedule("a2").unwrap().is_empty());
    }
}
