//! Achievement badge evaluation.
//!
//! Badges are recomputed from statistics on every request; none are
//! stored. Thresholds come from [`AchievementConfig`].

use std::collections::BTreeMap;

use serde::Serialize;

use neighborly_core::config::achievements::AchievementConfig;

use super::report::StatsReport;

/// An earned achievement badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    /// Badge name shown to the user.
    pub name: String,
    /// What the badge was earned for.
    pub description: String,
}

impl Badge {
    fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Evaluate which badges a user has earned.
///
/// `category_five_star` counts five-star ratings per category name.
pub fn evaluate(
    report: &StatsReport,
    category_five_star: &BTreeMap<String, u64>,
    config: &AchievementConfig,
) -> Vec<Badge> {
    let mut badges = Vec::new();

    if report.requests_created >= config.request_creator {
        badges.push(Badge::new(
            "Request Creator",
            format!("Posted {} help requests", config.request_creator),
        ));
    }
    if report.requests_created >= config.request_master {
        badges.push(Badge::new(
            "Request Master",
            format!("Posted {} help requests", config.request_master),
        ));
    }

    if report.completions >= config.super_helper {
        badges.push(Badge::new(
            "Super Helper",
            format!("Completed {} requests", config.super_helper),
        ));
    }
    if report.completions >= config.helper_elite {
        badges.push(Badge::new(
            "Helper Elite",
            format!("Completed {} requests", config.helper_elite),
        ));
    }

    // Completions weigh double in the impact score shared by both
    // community tiers.
    let impact = report.requests_created + report.completions * 2;
    if impact >= config.community_champion {
        badges.push(Badge::new(
            "Community Champion",
            format!("Reached an impact score of {}", config.community_champion),
        ));
    }
    if impact >= config.community_legend {
        badges.push(Badge::new(
            "Community Legend",
            format!("Reached an impact score of {}", config.community_legend),
        ));
    }

    if report.requests_claimed > 0 {
        if report.response_rate >= config.reliable_helper_rate {
            badges.push(Badge::new(
                "Reliable Helper",
                format!(
                    "Kept a response rate of at least {:.0}%",
                    config.reliable_helper_rate
                ),
            ));
        }
        if report.response_rate >= config.dependable_pillar_rate {
            badges.push(Badge::new(
                "Dependable Pillar",
                format!(
                    "Kept a response rate of at least {:.0}%",
                    config.dependable_pillar_rate
                ),
            ));
        }
    }

    if report.longest_streak_days >= config.weekly_warrior_streak {
        badges.push(Badge::new(
            "Weekly Warrior",
            format!("Active {} days in a row", config.weekly_warrior_streak),
        ));
    }
    if report.longest_streak_days >= config.monthly_maven_streak {
        badges.push(Badge::new(
            "Monthly Maven",
            format!("Active {} days in a row", config.monthly_maven_streak),
        ));
    }

    if report.five_star_count >= config.five_star_excellence {
        badges.push(Badge::new(
            "Five Star Excellence",
            format!("Received {} five-star ratings", config.five_star_excellence),
        ));
    }

    if report.weekend_completions >= config.weekend_warrior {
        badges.push(Badge::new(
            "Weekend Warrior",
            format!("Completed {} requests on weekends", config.weekend_warrior),
        ));
    }

    if report.high_urgency_completions >= config.premium_helper {
        badges.push(Badge::new(
            "Premium Helper",
            format!(
                "Completed {} high-urgency requests",
                config.premium_helper
            ),
        ));
    }

    for (category, &count) in &report.category_completions {
        if count >= config.category_specialist {
            badges.push(Badge::new(
                format!("{category} Specialist"),
                format!("Completed {} {category} requests", config.category_specialist),
            ));
        }
        if count >= config.category_expert {
            badges.push(Badge::new(
                format!("{category} Expert"),
                format!("Completed {} {category} requests", config.category_expert),
            ));
        }
        if count >= config.category_master {
            badges.push(Badge::new(
                format!("{category} Master"),
                format!("Completed {} {category} requests", config.category_master),
            ));
        }
    }
    for (category, &count) in &report.category_weekend_completions {
        if count >= config.category_weekend_hero {
            badges.push(Badge::new(
                format!("{category} Weekend Hero"),
                format!(
                    "Completed {} {category} requests on weekends",
                    config.category_weekend_hero
                ),
            ));
        }
    }
    for (category, &count) in category_five_star {
        if count >= config.category_excellence {
            badges.push(Badge::new(
                format!("{category} Excellence"),
                format!(
                    "Received {} five-star ratings in {category}",
                    config.category_excellence
                ),
            ));
        }
    }

    let versatile_categories = report
        .category_completions
        .values()
        .filter(|&&count| count >= config.versatile_per_category)
        .count() as u64;
    if versatile_categories >= config.versatile_categories {
        badges.push(Badge::new(
            "Versatile Helper",
            format!(
                "Completed at least {} requests in {} different categories",
                config.versatile_per_category, config.versatile_categories
            ),
        ));
    }

    badges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> StatsReport {
        StatsReport {
            requests_created: 0,
            requests_claimed: 0,
            completions: 0,
            response_rate: 0.0,
            average_rating: None,
            ratings_received: 0,
            five_star_count: 0,
            longest_streak_days: 0,
            weekend_completions: 0,
            high_urgency_completions: 0,
            category_completions: BTreeMap::new(),
            category_weekend_completions: BTreeMap::new(),
            badges: Vec::new(),
        }
    }

    fn names(badges: &[Badge]) -> Vec<&str> {
        badges.iter().map(|b| b.name.as_str()).collect()
    }

    #[test]
    fn test_no_activity_earns_nothing() {
        let badges = evaluate(&report(), &BTreeMap::new(), &AchievementConfig::default());
        assert!(badges.is_empty());
    }

    #[test]
    fn test_creation_and_completion_tiers() {
        let mut r = report();
        r.requests_created = 20;
        r.completions = 5;
        let badges = evaluate(&r, &BTreeMap::new(), &AchievementConfig::default());
        let names = names(&badges);
        assert!(names.contains(&"Request Creator"));
        assert!(names.contains(&"Request Master"));
        assert!(names.contains(&"Super Helper"));
        assert!(!names.contains(&"Helper Elite"));
        assert!(names.contains(&"Community Champion"));
    }

    #[test]
    fn test_response_rate_needs_claims() {
        let mut r = report();
        r.response_rate = 90.0;
        let badges = evaluate(&r, &BTreeMap::new(), &AchievementConfig::default());
        assert!(badges.is_empty());

        r.requests_claimed = 1;
        let badges = evaluate(&r, &BTreeMap::new(), &AchievementConfig::default());
        let names = names(&badges);
        assert!(names.contains(&"Reliable Helper"));
        assert!(names.contains(&"Dependable Pillar"));
    }

    #[test]
    fn test_category_tiers_use_category_name() {
        let mut r = report();
        r.category_completions.insert("Pet Care".into(), 25);
        let badges = evaluate(&r, &BTreeMap::new(), &AchievementConfig::default());
        let names = names(&badges);
        assert!(names.contains(&"Pet Care Specialist"));
        assert!(names.contains(&"Pet Care Expert"));
        assert!(!names.contains(&"Pet Care Master"));
    }

    #[test]
    fn test_community_tiers_share_impact_score() {
        // 4 posts + 3 completions at double weight is an impact of 10,
        // exactly the Champion threshold and short of Legend's 50.
        let mut r = report();
        r.requests_created = 4;
        r.completions = 3;
        let badges = evaluate(&r, &BTreeMap::new(), &AchievementConfig::default());
        let names = names(&badges);
        assert!(names.contains(&"Community Champion"));
        assert!(!names.contains(&"Community Legend"));

        r.requests_created = 10;
        r.completions = 20;
        let badges = evaluate(&r, &BTreeMap::new(), &AchievementConfig::default());
        assert!(self::names(&badges).contains(&"Community Legend"));
    }

    #[test]
    fn test_weekend_hero_is_per_category() {
        let mut r = report();
        r.weekend_completions = 9;
        r.category_weekend_completions.insert("Pet Care".into(), 8);
        r.category_weekend_completions.insert("Yard Work".into(), 2);
        let badges = evaluate(&r, &BTreeMap::new(), &AchievementConfig::default());
        let names = names(&badges);
        assert!(names.contains(&"Pet Care Weekend Hero"));
        assert!(!names.contains(&"Yard Work Weekend Hero"));
        // 9 weekend completions overall is still short of Weekend Warrior.
        assert!(!names.contains(&"Weekend Warrior"));
    }

    #[test]
    fn test_versatile_helper() {
        let mut r = report();
        r.category_completions.insert("Pet Care".into(), 5);
        r.category_completions.insert("Yard Work".into(), 6);
        r.category_completions.insert("General Help".into(), 5);
        r.category_completions.insert("Childcare".into(), 1);
        let badges = evaluate(&r, &BTreeMap::new(), &AchievementConfig::default());
        assert!(names(&badges).contains(&"Versatile Helper"));
    }

    #[test]
    fn test_thresholds_are_configurable() {
        let mut r = report();
        r.requests_created = 2;
        let config = AchievementConfig {
            request_creator: 2,
            ..AchievementConfig::default()
        };
        let badges = evaluate(&r, &BTreeMap::new(), &config);
        assert!(names(&badges).contains(&"Request Creator"));
    }
}
