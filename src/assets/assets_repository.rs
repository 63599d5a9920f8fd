use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use crate::constants::DECIMAL_PRECISION;
use crate::db::get_connection;
use crate::schema::assets;

use super::assets_constants::AVAILABLE_STATUS;
use super::assets_errors::{AssetError, Result};
use super::assets_model::{Asset, AssetDB, AssetDepreciationUpdate, NewAsset, UpdateAsset};
use super::assets_traits::AssetRepositoryTrait;

/// Repository for managing asset data in the database
pub struct AssetRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
}

impl AssetRepository {
    pub fn new(pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }
}

impl AssetRepositoryTrait for AssetRepository {
    fn create(&self, new_asset: NewAsset) -> Result<Asset> {
        new_asset.validate()?;
        let mut conn = get_connection(&self.pool)?;

        let now = Utc::now().naive_utc();
        let id = new_asset.id.unwrap_or_else(|| Uuid::new_v4().to_string());
        let code = new_asset
            .code
            .unwrap_or_else(|| format!("AST-{}", &id[..8].to_uppercase()));

        let asset_db = AssetDB {
            id,
            code,
            name: new_asset.name,
            price: new_asset.price.round_dp(DECIMAL_PRECISION).to_string(),
            salvage_amount: new_asset
                .salvage_amount
                .map(|d| d.round_dp(DECIMAL_PRECISION).to_string()),
            // acquisition date falls back to the creation date
            input_date: new_asset.input_date.or(Some(now.date())),
            category_id: new_asset.category_id,
            status: new_asset
                .status
                .unwrap_or_else(|| AVAILABLE_STATUS.to_string()),
            depreciation_amount_per_month: None,
            depreciation_amount: None,
            current_value: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        let result = diesel::insert_into(assets::table)
            .values(&asset_db)
            .get_result::<AssetDB>(&mut conn)?;

        Ok(result.into())
    }

    fn update(&self, asset_id: &str, payload: UpdateAsset) -> Result<Asset> {
        payload.validate()?;
        let mut conn = get_connection(&self.pool)?;

        let mut asset_db = active_by_id(&mut conn, asset_id)?;
        if let Some(name) = payload.name {
            asset_db.name = name;
        }
        if let Some(price) = payload.price {
            asset_db.price = price.round_dp(DECIMAL_PRECISION).to_string();
        }
        if let Some(salvage) = payload.salvage_amount {
            asset_db.salvage_amount = Some(salvage.round_dp(DECIMAL_PRECISION).to_string());
        }
        if let Some(input_date) = payload.input_date {
            asset_db.input_date = Some(input_date);
        }
        if let Some(category_id) = payload.category_id {
            asset_db.category_id = Some(category_id);
        }
        if let Some(status) = payload.status {
            asset_db.status = status;
        }
        asset_db.updated_at = Utc::now().naive_utc();

        let result = diesel::update(assets::table.find(asset_id))
            .set(&asset_db)
            .get_result::<AssetDB>(&mut conn)?;

        Ok(result.into())
    }

    fn get_by_id(&self, asset_id: &str) -> Result<Asset> {
        let mut conn = get_connection(&self.pool)?;
        Ok(active_by_id(&mut conn, asset_id)?.into())
    }

    fn list_active(&self) -> Result<Vec<Asset>> {
        let mut conn = get_connection(&self.pool)?;

        let results = assets::table
            .filter(assets::deleted_at.is_null())
            .order(assets::updated_at.desc())
            .load::<AssetDB>(&mut conn)?;

        Ok(results.into_iter().map(Asset::from).collect())
    }

    fn soft_delete(&self, asset_id: &str) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;

        // confirm the row exists and is not already deleted
        active_by_id(&mut conn, asset_id)?;

        diesel::update(assets::table.find(asset_id))
            .set(assets::deleted_at.eq(Some(Utc::now().naive_utc())))
            .execute(&mut conn)?;

        Ok(())
    }

    fn update_depreciation(
        &self,
        asset_id: &str,
        update: AssetDepreciationUpdate,
    ) -> Result<Asset> {
        let mut conn = get_connection(&self.pool)?;

        let result = diesel::update(
            assets::table
                .find(asset_id)
                .filter(assets::deleted_at.is_null()),
        )
        .set((
            assets::salvage_amount
                .eq(Some(update.salvage_amount.round_dp(DECIMAL_PRECISION).to_string())),
            assets::depreciation_amount_per_month.eq(Some(
                update
                    .depreciation_amount_per_month
                    .round_dp(DECIMAL_PRECISION)
                    .to_string(),
            )),
            assets::depreciation_amount.eq(Some(
                update
                    .depreciation_amount
                    .round_dp(DECIMAL_PRECISION)
                    .to_string(),
            )),
            assets::current_value
                .eq(Some(update.current_value.round_dp(DECIMAL_PRECISION).to_string())),
        ))
        .get_result::<AssetDB>(&mut conn)?;

        Ok(result.into())
    }

    fn count(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        Ok(assets::table.count().get_result(&mut conn)?)
    }
}

fn active_by_id(conn: &mut SqliteConnection, asset_id: &str) -> Result<AssetDB> {
    assets::table
        .find(asset_id)
        .filter(assets::deleted_at.is_null())
        .first::<AssetDB>(conn)
        .optional()?
        .ok_or_else(|| AssetError::NotFound(format!("Asset not found: {}", asset_id)))
}
