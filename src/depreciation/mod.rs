pub mod depreciation_calculator;
pub mod depreciation_job;
pub mod depreciation_model;
pub mod depreciation_service;
pub mod depreciation_traits;

#[cfg(test)]
mod depreciation_service_tests;

// Re-export the public interface
pub use depreciation_calculator::{
    amortization_schedule, derive_values, derived_update, elapsed_months, monthly_rate,
};
pub use depreciation_job::DepreciationJob;
pub use depreciation_model::{
    BatchFailure, BatchSummary, DepreciationInput, DepreciationValues, ScheduleRow,
};
pub use depreciation_service::DepreciationService;
pub use depreciation_traits::{
    CacheInvalidator, Clock, DepreciationServiceTrait, NoopCacheInvalidator, SystemClock,
};
