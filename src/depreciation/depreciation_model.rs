use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assets::assets_model::Asset;
use crate::categories::categories_model::Category;

/// The subset of asset and category fields the depreciation engine reads.
#[derive(Debug, Clone, PartialEq)]
pub struct DepreciationInput {
    pub price: Decimal,
    /// Residual value floor; absent salvage defaults to zero.
    pub salvage_amount: Decimal,
    pub input_date: Option<NaiveDate>,
    /// Months over which the asset depreciates to salvage, owned by the category.
    pub economic_age_months: i32,
}

impl DepreciationInput {
    pub fn from_asset(asset: &Asset, category: Option<&Category>) -> Self {
        Self {
            price: asset.price,
            salvage_amount: asset.salvage_amount.unwrap_or_default(),
            input_date: asset.input_date,
            economic_age_months: category.map(|c| c.economic_age_months).unwrap_or(0),
        }
    }
}

/// Straight-line depreciation values derived for a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepreciationValues {
    pub monthly_rate: Decimal,
    pub months_elapsed: u32,
    pub cumulative_depreciation: Decimal,
    pub current_value: Decimal,
}

/// One row of the month-by-month amortization schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRow {
    /// 1-based month counter.
    pub month_index: u32,
    pub date: NaiveDate,
    pub initial_price: Decimal,
    /// Book value entering this month.
    pub asset_amount: Decimal,
    pub depreciation: Decimal,
    /// Book value after this month's depreciation, floored per salvage rule.
    pub economic_amount: Decimal,
}

/// A single asset the batch run could not refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchFailure {
    pub asset_id: String,
    pub message: String,
}

/// Aggregate outcome of one batch recomputation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub processed: usize,
    pub updated: usize,
    /// Assets with no usable depreciation inputs; skipped, not failed.
    pub skipped: usize,
    pub failures: Vec<BatchFailure>,
    pub completed_at: DateTime<Utc>,
}

impl BatchSummary {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
