/// Endpoint name of the asset collection, used as cache invalidation key
pub const ASSETS_ENDPOINT: &str = "assets";

pub const AVAILABLE_STATUS: &str = "available";
pub const RESERVED_STATUS: &str = "reserved";
pub const LOST_STATUS: &str = "lost";

/// Accepted asset status values
pub const ASSET_STATUSES: [&str; 3] = [AVAILABLE_STATUS, RESERVED_STATUS, LOST_STATUS];
