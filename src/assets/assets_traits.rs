use async_trait::async_trait;

use super::assets_errors::Result;
use super::assets_model::{Asset, AssetDepreciationUpdate, NewAsset, UpdateAsset};

/// Trait defining the contract for Asset repository operations.
pub trait AssetRepositoryTrait: Send + Sync {
    fn create(&self, new_asset: NewAsset) -> Result<Asset>;
    fn update(&self, asset_id: &str, payload: UpdateAsset) -> Result<Asset>;
    fn get_by_id(&self, asset_id: &str) -> Result<Asset>;
    /// Lists all non-deleted assets.
    fn list_active(&self) -> Result<Vec<Asset>>;
    fn soft_delete(&self, asset_id: &str) -> Result<()>;
    /// Overwrites the derived depreciation fields of one asset.
    fn update_depreciation(
        &self,
        asset_id: &str,
        update: AssetDepreciationUpdate,
    ) -> Result<Asset>;
    fn count(&self) -> Result<i64>;
}

/// Trait defining the contract for Asset service operations.
#[async_trait]
pub trait AssetServiceTrait: Send + Sync {
    fn get_assets(&self) -> Result<Vec<Asset>>;
    fn get_asset_by_id(&self, asset_id: &str) -> Result<Asset>;
    async fn create_asset(&self, new_asset: NewAsset) -> Result<Asset>;
    async fn update_asset(&self, asset_id: &str, payload: UpdateAsset) -> Result<Asset>;
    async fn delete_asset(&self, asset_id: &str) -> Result<()>;
}
