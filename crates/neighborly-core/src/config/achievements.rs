//! Achievement badge threshold configuration.
//!
//! Every badge threshold is configurable so that deployments can tune the
//! progression curve without a code change. The defaults match the
//! production progression.

use serde::{Deserialize, Serialize};

/// Thresholds for achievement badges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementConfig {
    /// Requests created for the "Request Creator" badge.
    #[serde(default = "default_request_creator")]
    pub request_creator: u64,
    /// Requests created for the "Request Master" badge.
    #[serde(default = "default_request_master")]
    pub request_master: u64,
    /// Completions for the "Super Helper" badge.
    #[serde(default = "default_super_helper")]
    pub super_helper: u64,
    /// Completions for the "Helper Elite" badge.
    #[serde(default = "default_helper_elite")]
    pub helper_elite: u64,
    /// Combined activity for the "Community Champion" badge.
    #[serde(default = "default_community_champion")]
    pub community_champion: u64,
    /// Impact score for the "Community Legend" badge.
    #[serde(default = "default_community_legend")]
    pub community_legend: u64,
    /// Response rate percentage for the "Reliable Helper" badge.
    #[serde(default = "default_reliable_helper")]
    pub reliable_helper_rate: f64,
    /// Response rate percentage for the "Dependable Pillar" badge.
    #[serde(default = "default_dependable_pillar")]
    pub dependable_pillar_rate: f64,
    /// Consecutive active days for the "Weekly Warrior" badge.
    #[serde(default = "default_weekly_warrior")]
    pub weekly_warrior_streak: u64,
    /// Consecutive active days for the "Monthly Maven" badge.
    #[serde(default = "default_monthly_maven")]
    pub monthly_maven_streak: u64,
    /// Five-star ratings for the "Five Star Excellence" badge.
    #[serde(default = "default_five_star")]
    pub five_star_excellence: u64,
    /// Weekend completions for the "Weekend Warrior" badge.
    #[serde(default = "default_weekend_warrior")]
    pub weekend_warrior: u64,
    /// Weekend completions in one category for the "Weekend Hero" tier.
    #[serde(default = "default_category_weekend_hero")]
    pub category_weekend_hero: u64,
    /// High-urgency completions for the "Premium Helper" badge.
    #[serde(default = "default_premium_helper")]
    pub premium_helper: u64,
    /// Completions in one category for the "Specialist" tier.
    #[serde(default = "default_specialist")]
    pub category_specialist: u64,
    /// Completions in one category for the "Expert" tier.
    #[serde(default = "default_expert")]
    pub category_expert: u64,
    /// Completions in one category for the "Master" tier.
    #[serde(default = "default_master")]
    pub category_master: u64,
    /// Five-star ratings in one category for the "Excellence" tier.
    #[serde(default = "default_category_excellence")]
    pub category_excellence: u64,
    /// Minimum completions per category for the "Versatile Helper" badge.
    #[serde(default = "default_versatile_per_category")]
    pub versatile_per_category: u64,
    /// Minimum distinct categories for the "Versatile Helper" badge.
    #[serde(default = "default_versatile_categories")]
    pub versatile_categories: u64,
}

impl Default for AchievementConfig {
    fn default() -> Self {
        Self {
            request_creator: default_request_creator(),
            request_master: default_request_master(),
            super_helper: default_super_helper(),
            helper_elite: default_helper_elite(),
            community_champion: default_community_champion(),
            community_legend: default_community_legend(),
            reliable_helper_rate: default_reliable_helper(),
            dependable_pillar_rate: default_dependable_pillar(),
            weekly_warrior_streak: default_weekly_warrior(),
            monthly_maven_streak: default_monthly_maven(),
            five_star_excellence: default_five_star(),
            weekend_warrior: default_weekend_warrior(),
            category_weekend_hero: default_category_weekend_hero(),
            premium_helper: default_premium_helper(),
            category_specialist: default_specialist(),
            category_expert: default_expert(),
            category_master: default_master(),
            category_excellence: default_category_excellence(),
            versatile_per_category: default_versatile_per_category(),
            versatile_categories: default_versatile_categories(),
        }
    }
}

fn default_request_creator() -> u64 {
    5
}

fn default_request_master() -> u64 {
    20
}

fn default_super_helper() -> u64 {
    5
}

fn default_helper_elite() -> u64 {
    20
}

fn default_community_champion() -> u64 {
    10
}

fn default_community_legend() -> u64 {
    50
}

fn default_reliable_helper() -> f64 {
    50.0
}

fn default_dependable_pillar() -> f64 {
    80.0
}

fn default_weekly_warrior() -> u64 {
    7
}

fn default_monthly_maven() -> u64 {
    30
}

fn default_five_star() -> u64 {
    10
}

fn default_weekend_warrior() -> u64 {
    10
}

fn default_category_weekend_hero() -> u64 {
    8
}

fn default_premium_helper() -> u64 {
    100
}

fn default_specialist() -> u64 {
    10
}

fn default_expert() -> u64 {
    25
}

fn default_master() -> u64 {
    50
}

fn default_category_excellence() -> u64 {
    15
}

fn default_versatile_per_category() -> u64 {
    5
}

fn default_versatile_categories() -> u64 {
    3
}
