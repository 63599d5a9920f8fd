use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::constants::DECIMAL_PRECISION;

use super::assets_constants::ASSET_STATUSES;
use super::assets_errors::{AssetError, Result};

/// Domain model representing an asset in the system.
///
/// `depreciation_amount_per_month`, `depreciation_amount` and `current_value`
/// are derived fields. They are recomputed from `price`, `salvage_amount`,
/// the category economic age and elapsed time, never mutated incrementally.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub code: String,
    pub name: String,
    pub price: Decimal,
    pub salvage_amount: Option<Decimal>,
    pub input_date: Option<NaiveDate>,
    pub category_id: Option<String>,
    pub status: String,
    pub depreciation_amount_per_month: Option<Decimal>,
    pub depreciation_amount: Option<Decimal>,
    pub current_value: Option<Decimal>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

/// Input model for creating a new asset
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewAsset {
    pub id: Option<String>,
    pub code: Option<String>,
    pub name: String,
    pub price: Decimal,
    pub salvage_amount: Option<Decimal>,
    pub input_date: Option<NaiveDate>,
    pub category_id: Option<String>,
    pub status: Option<String>,
}

impl NewAsset {
    /// Validates the new asset data
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AssetError::InvalidData(
                "Asset name cannot be empty".to_string(),
            ));
        }
        if self.price < Decimal::ZERO {
            return Err(AssetError::InvalidData(
                "Asset price cannot be negative".to_string(),
            ));
        }
        if let Some(salvage) = self.salvage_amount {
            if salvage < Decimal::ZERO {
                return Err(AssetError::InvalidData(
                    "Salvage amount cannot be negative".to_string(),
                ));
            }
            if salvage > self.price {
                return Err(AssetError::InvalidData(
                    "Salvage amount cannot exceed the asset price".to_string(),
                ));
            }
        }
        if let Some(status) = &self.status {
            if !ASSET_STATUSES.contains(&status.as_str()) {
                return Err(AssetError::InvalidData(format!(
                    "Unknown asset status: {}",
                    status
                )));
            }
        }
        Ok(())
    }
}

/// Input model for updating an asset
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAsset {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub salvage_amount: Option<Decimal>,
    pub input_date: Option<NaiveDate>,
    pub category_id: Option<String>,
    pub status: Option<String>,
}

impl UpdateAsset {
    /// Validates the asset update data
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(AssetError::InvalidData(
                    "Asset name cannot be empty".to_string(),
                ));
            }
        }
        if let Some(price) = self.price {
            if price < Decimal::ZERO {
                return Err(AssetError::InvalidData(
                    "Asset price cannot be negative".to_string(),
                ));
            }
        }
        if let Some(salvage) = self.salvage_amount {
            if salvage < Decimal::ZERO {
                return Err(AssetError::InvalidData(
                    "Salvage amount cannot be negative".to_string(),
                ));
            }
        }
        if let Some(status) = &self.status {
            if !ASSET_STATUSES.contains(&status.as_str()) {
                return Err(AssetError::InvalidData(format!(
                    "Unknown asset status: {}",
                    status
                )));
            }
        }
        Ok(())
    }
}

/// Derived depreciation fields persisted in one partial-row update.
/// Salvage is written back with its default applied so the stored row is
/// self-consistent with the derived values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetDepreciationUpdate {
    pub salvage_amount: Decimal,
    pub depreciation_amount_per_month: Decimal,
    pub depreciation_amount: Decimal,
    pub current_value: Decimal,
}

/// Database model for assets
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Default,
)]
#[diesel(table_name = crate::schema::assets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AssetDB {
    pub id: String,
    pub code: String,
    pub name: String,
    pub price: String,
    pub salvage_amount: Option<String>,
    pub input_date: Option<NaiveDate>,
    pub category_id: Option<String>,
    pub status: String,
    pub depreciation_amount_per_month: Option<String>,
    pub depreciation_amount: Option<String>,
    pub current_value: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

// Conversion implementations
impl From<AssetDB> for Asset {
    fn from(db: AssetDB) -> Self {
        Self {
            id: db.id,
            code: db.code,
            name: db.name,
            price: Decimal::from_str(&db.price).unwrap_or_default(),
            salvage_amount: db
                .salvage_amount
                .and_then(|s| Decimal::from_str(&s).ok()),
            input_date: db.input_date,
            category_id: db.category_id,
            status: db.status,
            depreciation_amount_per_month: db
                .depreciation_amount_per_month
                .and_then(|s| Decimal::from_str(&s).ok()),
            depreciation_amount: db
                .depreciation_amount
                .and_then(|s| Decimal::from_str(&s).ok()),
            current_value: db.current_value.and_then(|s| Decimal::from_str(&s).ok()),
            created_at: db.created_at,
            updated_at: db.updated_at,
            deleted_at: db.deleted_at,
        }
    }
}

impl From<Asset> for AssetDB {
    fn from(domain: Asset) -> Self {
        Self {
            id: domain.id,
            code: domain.code,
            name: domain.name,
            price: domain.price.round_dp(DECIMAL_PRECISION).to_string(),
            salvage_amount: domain
                .salvage_amount
                .map(|d| d.round_dp(DECIMAL_PRECISION).to_string()),
            input_date: domain.input_date,
            category_id: domain.category_id,
            status: domain.status,
            depreciation_amount_per_month: domain
                .depreciation_amount_per_month
                .map(|d| d.round_dp(DECIMAL_PRECISION).to_string()),
            depreciation_amount: domain
                .depreciation_amount
                .map(|d| d.round_dp(DECIMAL_PRECISION).to_string()),
            current_value: domain
                .current_value
                .map(|d| d.round_dp(DECIMAL_PRECISION).to_string()),
            created_at: domain.created_at,
            updated_at: domain.updated_at,
            deleted_at: domain.deleted_at,
        }
    }
}
