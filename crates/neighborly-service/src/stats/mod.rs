//! Contribution statistics and achievement badges.

pub mod badges;
pub mod report;
pub mod service;

pub use badges::Badge;
pub use report::{CommunityStats, StatsReport, compute_stats};
pub use service::StatsService;
