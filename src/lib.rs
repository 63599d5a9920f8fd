pub mod db;

pub mod assets;
pub mod categories;
pub mod constants;
pub mod depreciation;
pub mod errors;
pub mod schema;
