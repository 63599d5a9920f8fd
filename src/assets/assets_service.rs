use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::categories::categories_model::Category;
use crate::categories::categories_traits::CategoryRepositoryTrait;
use crate::depreciation::depreciation_calculator::derived_update;
use crate::depreciation::depreciation_model::DepreciationInput;
use crate::depreciation::depreciation_traits::Clock;

use super::assets_errors::{AssetError, Result};
use super::assets_model::{Asset, NewAsset, UpdateAsset};
use super::assets_traits::{AssetRepositoryTrait, AssetServiceTrait};

/// Service for managing assets.
///
/// Create and update run the depreciation refresh inline, so the persisted
/// row already carries the derived values when the call returns.
pub struct AssetService {
    repository: Arc<dyn AssetRepositoryTrait>,
    categories: Arc<dyn CategoryRepositoryTrait>,
    clock: Arc<dyn Clock>,
}

impl AssetService {
    pub fn new(
        repository: Arc<dyn AssetRepositoryTrait>,
        categories: Arc<dyn CategoryRepositoryTrait>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            categories,
            clock,
        }
    }

    /// Resolves the referenced category, failing when the reference is dangling.
    fn resolve_category(&self, category_id: Option<&String>) -> Result<Option<Category>> {
        match category_id {
            Some(id) => {
                let category = self
                    .categories
                    .get_category_by_id(id)?
                    .ok_or_else(|| AssetError::InvalidData(format!("Unknown category: {}", id)))?;
                Ok(Some(category))
            }
            None => Ok(None),
        }
    }

    /// Recomputes and persists the derived depreciation fields of `asset`.
    /// A no-op when the asset has no usable depreciation inputs.
    fn refresh_depreciation(&self, asset: Asset, category: Option<&Category>) -> Result<Asset> {
        let input = DepreciationInput::from_asset(&asset, category);
        match derived_update(&input, self.clock.now_utc().date_naive()) {
            Some(update) => self.repository.update_depreciation(&asset.id, update),
            None => {
                debug!("Asset {} has no depreciation inputs, skipping", asset.id);
                Ok(asset)
            }
        }
    }
}

#[async_trait]
impl AssetServiceTrait for AssetService {
    fn get_assets(&self) -> Result<Vec<Asset>> {
        self.repository.list_active()
    }

    fn get_asset_by_id(&self, asset_id: &str) -> Result<Asset> {
        self.repository.get_by_id(asset_id)
    }

    async fn create_asset(&self, new_asset: NewAsset) -> Result<Asset> {
        new_asset.validate()?;

        let category = self.resolve_category(new_asset.category_id.as_ref())?;

        let mut new_asset = new_asset;
        if new_asset.code.is_none() {
            let sequence = self.repository.count()? + 1;
            new_asset.code = Some(generate_code(&new_asset.name, sequence));
        }

        let asset = self.repository.create(new_asset)?;
        self.refresh_depreciation(asset, category.as_ref())
    }

    async fn update_asset(&self, asset_id: &str, payload: UpdateAsset) -> Result<Asset> {
        payload.validate()?;

        let old = self.repository.get_by_id(asset_id)?;

        // cross-field check against the merged row
        let merged_price = payload.price.unwrap_or(old.price);
        let merged_salvage = payload
            .salvage_amount
            .or(old.salvage_amount)
            .unwrap_or_default();
        if merged_salvage > merged_price {
            return Err(AssetError::InvalidData(
                "Salvage amount cannot exceed the asset price".to_string(),
            ));
        }

        let category_ref = payload.category_id.as_ref().or(old.category_id.as_ref());
        let category = self.resolve_category(category_ref)?;

        let asset = self.repository.update(asset_id, payload)?;
        self.refresh_depreciation(asset, category.as_ref())
    }

    async fn delete_asset(&self, asset_id: &str) -> Result<()> {
        self.repository.soft_delete(asset_id)
    }
}

/// Builds an asset code from the name initials and a running sequence,
/// e.g. "Dell Latitude Laptop" -> "DLL-0042".
fn generate_code(name: &str, sequence: i64) -> String {
    let prefix: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
        .take(3)
        .collect::<String>()
        .to_uppercase();
    let prefix = if prefix.is_empty() {
        "AST".to_string()
    } else {
        prefix
    };
    format!("{}-{:04}", prefix, sequence)
}
