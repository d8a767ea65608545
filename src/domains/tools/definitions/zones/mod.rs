//! Zone tools: listing, details and analytics.

pub mod analytics;
pub mod get;
pub mod list;

pub use analytics::{GetZoneAnalyticsParams, GetZoneAnalyticsTool};
pub use get::{GetZoneParams, GetZoneTool};
pub use list::{ListZonesParams, ListZonesTool};
