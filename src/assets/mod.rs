pub(crate) mod assets_constants;
pub mod assets_errors;
pub mod assets_model;
pub mod assets_repository;
pub mod assets_service;
pub mod assets_traits;

// Re-export the public interface
pub use assets_constants::*;
pub use assets_model::{Asset, AssetDepreciationUpdate, NewAsset, UpdateAsset};
pub use assets_repository::AssetRepository;
pub use assets_service::AssetService;
pub use assets_traits::{AssetRepositoryTrait, AssetServiceTrait};

// Re-export error types for convenience
pub use assets_errors::AssetError;
