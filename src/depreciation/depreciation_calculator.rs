use chrono::{Datelike, Months, NaiveDate};
use log::warn;
use rust_decimal::Decimal;

use crate::assets::assets_model::AssetDepreciationUpdate;

use super::depreciation_model::{DepreciationInput, DepreciationValues, ScheduleRow};

/// Straight-line monthly depreciation rate: `(price - salvage) / economic age`.
///
/// Zero when the economic age or price is not positive. A salvage amount
/// above the price would yield a negative rate and make the book value grow
/// over time; the rate is clamped to zero in that case.
pub fn monthly_rate(price: Decimal, salvage_amount: Decimal, economic_age_months: i32) -> Decimal {
    if economic_age_months <= 0 || price <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    if salvage_amount > price {
        warn!(
            "Salvage amount {} exceeds price {}, clamping monthly rate to zero",
            salvage_amount, price
        );
        return Decimal::ZERO;
    }
    (price - salvage_amount) / Decimal::from(economic_age_months)
}

/// Whole calendar months elapsed between `input_date` and `as_of`.
///
/// A month counts once `as_of` reaches the same day-of-month anniversary, so
/// the current partial month is excluded. Month-end acquisitions (e.g. the
/// 31st) complete a month only when a month with that day is reached; shorter
/// months in between do not count early. Never negative.
pub fn elapsed_months(input_date: NaiveDate, as_of: NaiveDate) -> u32 {
    let mut months = (as_of.year() as i64 - input_date.year() as i64) * 12
        + (as_of.month() as i64 - input_date.month() as i64);
    if (as_of.day() as i64) < (input_date.day() as i64) {
        months -= 1;
    }
    months.max(0) as u32
}

/// Derives the book value and cumulative depreciation of an asset at `as_of`.
///
/// Returns `None` when the asset carries no usable depreciation inputs
/// (missing input date, non-positive price, or zero rate). Absent values are
/// valid, not an error: depreciation is optional metadata and must not block
/// the asset's lifecycle.
pub fn derive_values(input: &DepreciationInput, as_of: NaiveDate) -> Option<DepreciationValues> {
    let input_date = input.input_date?;
    if input.price <= Decimal::ZERO {
        return None;
    }
    let rate = monthly_rate(input.price, input.salvage_amount, input.economic_age_months);
    if rate <= Decimal::ZERO {
        return None;
    }

    let months = elapsed_months(input_date, as_of);
    let raw = rate * Decimal::from(months);
    let depreciable = input.price - input.salvage_amount;

    Some(DepreciationValues {
        monthly_rate: rate,
        months_elapsed: months,
        cumulative_depreciation: raw.min(depreciable),
        current_value: (input.price - raw).max(input.salvage_amount),
    })
}

/// Derived fields ready to persist, with the salvage default applied.
pub fn derived_update(
    input: &DepreciationInput,
    as_of: NaiveDate,
) -> Option<AssetDepreciationUpdate> {
    derive_values(input, as_of).map(|values| AssetDepreciationUpdate {
        salvage_amount: input.salvage_amount,
        depreciation_amount_per_month: values.monthly_rate,
        depreciation_amount: values.cumulative_depreciation,
        current_value: values.current_value,
    })
}

/// Month-by-month amortization schedule, one row per month from 1 to the
/// economic age inclusive.
///
/// Empty (not an error) when the inputs are degenerate. Row dates advance by
/// calendar months from the input date; a month-end input date clamps to the
/// last day of shorter months. The value floor is the salvage amount when it
/// is nonzero, otherwise zero: a zero-salvage asset may reach exactly zero
/// but never a negative value.
pub fn amortization_schedule(input: &DepreciationInput) -> Vec<ScheduleRow> {
    let input_date = match input.input_date {
        Some(date) => date,
        None => return Vec::new(),
    };
    if input.price <= Decimal::ZERO || input.economic_age_months <= 0 {
        return Vec::new();
    }
    let rate = monthly_rate(input.price, input.salvage_amount, input.economic_age_months);
    if rate <= Decimal::ZERO {
        return Vec::new();
    }

    let floor = if input.salvage_amount != Decimal::ZERO {
        input.salvage_amount
    } else {
        Decimal::ZERO
    };

    let mut rows = Vec::with_capacity(input.economic_age_months as usize);
    let mut asset_amount = input.price;
    for month_index in 1..=input.economic_age_months as u32 {
        if month_index > 1 {
            asset_amount = (asset_amount - rate).max(floor);
        }
        let date = match input_date.checked_add_months(Months::new(month_index - 1)) {
            Some(date) => date,
            None => break,
        };
        rows.push(ScheduleRow {
            month_index,
            date,
            initial_price: input.price,
            asset_amount,
            depreciation: rate,
            economic_amount: (asset_amount - rate).max(floor),
        });
    }
    rows
}
