//! Contribution statistics derived from a user's request history.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use serde::Serialize;

use neighborly_core::config::achievements::AchievementConfig;
use neighborly_core::types::UserId;
use neighborly_entity::request::{HelpRequest, HistoryEventType, RequestStatus};

use super::badges::{self, Badge};

/// A user's contribution statistics and earned badges.
///
/// Derived entirely from stored requests; nothing here is persisted, so
/// threshold changes take effect on the next computation.
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    /// Requests the user has posted.
    pub requests_created: u64,
    /// Requests the user has ever claimed.
    pub requests_claimed: u64,
    /// Claimed requests that reached completion.
    pub completions: u64,
    /// Claims as a percentage of claims plus the user's still-open posts.
    pub response_rate: f64,
    /// Mean stars across received ratings, if any.
    pub average_rating: Option<f64>,
    /// Ratings received.
    pub ratings_received: u64,
    /// Five-star ratings received.
    pub five_star_count: u64,
    /// Longest run of consecutive active days.
    pub longest_streak_days: u64,
    /// Completions on a Saturday or Sunday.
    pub weekend_completions: u64,
    /// Completions of high-urgency requests.
    pub high_urgency_completions: u64,
    /// Completions per category, keyed by category name.
    pub category_completions: BTreeMap<String, u64>,
    /// Weekend completions per category, keyed by category name.
    pub category_weekend_completions: BTreeMap<String, u64>,
    /// Earned achievement badges.
    pub badges: Vec<Badge>,
}

/// Platform-wide activity snapshot for the community dashboard.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CommunityStats {
    /// All requests ever posted.
    pub total_requests: u64,
    /// Requests whose completion was confirmed.
    pub total_completed: u64,
}

/// Compute a user's statistics from their authored and claimed requests.
///
/// Pure function of its inputs; callers fetch the request lists.
pub fn compute_stats(
    user_id: UserId,
    authored: &[HelpRequest],
    claimed: &[HelpRequest],
    config: &AchievementConfig,
) -> StatsReport {
    let requests_created = authored.len() as u64;
    let requests_claimed = claimed.len() as u64;

    let completed: Vec<&HelpRequest> = claimed
        .iter()
        .filter(|r| r.status == RequestStatus::Completed && r.is_claimant(user_id))
        .collect();
    let completions = completed.len() as u64;

    let open_authored = authored
        .iter()
        .filter(|r| r.status == RequestStatus::Open)
        .count() as u64;
    let response_rate = if requests_claimed + open_authored == 0 {
        0.0
    } else {
        requests_claimed as f64 / (requests_claimed + open_authored) as f64 * 100.0
    };

    let ratings: Vec<u8> = completed
        .iter()
        .filter_map(|r| r.rating.as_ref())
        .filter(|rating| rating.rated_user_id == user_id)
        .map(|rating| rating.stars)
        .collect();
    let ratings_received = ratings.len() as u64;
    let five_star_count = ratings.iter().filter(|&&s| s == 5).count() as u64;
    let average_rating = if ratings.is_empty() {
        None
    } else {
        Some(ratings.iter().map(|&s| s as f64).sum::<f64>() / ratings.len() as f64)
    };

    let weekend_completions = completed
        .iter()
        .filter(|r| is_weekend(completion_time(r)))
        .count() as u64;
    let high_urgency_completions = completed
        .iter()
        .filter(|r| r.urgency.weight() == 3)
        .count() as u64;

    let mut category_completions: BTreeMap<String, u64> = BTreeMap::new();
    let mut category_weekend_completions: BTreeMap<String, u64> = BTreeMap::new();
    let mut category_five_star: BTreeMap<String, u64> = BTreeMap::new();
    for request in &completed {
        let key = request.category.as_str().to_string();
        *category_completions.entry(key.clone()).or_default() += 1;
        if is_weekend(completion_time(request)) {
            *category_weekend_completions.entry(key.clone()).or_default() += 1;
        }
        if request
            .rating
            .as_ref()
            .is_some_and(|rating| rating.stars == 5 && rating.rated_user_id == user_id)
        {
            *category_five_star.entry(key).or_default() += 1;
        }
    }

    let active_dates: BTreeSet<NaiveDate> = authored
        .iter()
        .chain(claimed.iter())
        .flat_map(|r| r.history.iter())
        .filter(|entry| entry.actor_id == user_id)
        .map(|entry| entry.timestamp.date_naive())
        .collect();
    let longest_streak_days = longest_streak(&active_dates);

    let mut report = StatsReport {
        requests_created,
        requests_claimed,
        completions,
        response_rate,
        average_rating,
        ratings_received,
        five_star_count,
        longest_streak_days,
        weekend_completions,
        high_urgency_completions,
        category_completions,
        category_weekend_completions,
        badges: Vec::new(),
    };
    report.badges = badges::evaluate(&report, &category_five_star, config);
    report
}

/// When a completed request was confirmed, falling back to its last
/// modification time for rows without the history entry.
fn completion_time(request: &HelpRequest) -> DateTime<Utc> {
    request
        .history
        .iter()
        .rev()
        .find(|entry| entry.event == HistoryEventType::VerifiedComplete)
        .map(|entry| entry.timestamp)
        .unwrap_or(request.updated_at)
}

fn is_weekend(at: DateTime<Utc>) -> bool {
    matches!(at.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Longest run of consecutive days in a set of active dates.
fn longest_streak(dates: &BTreeSet<NaiveDate>) -> u64 {
    let mut longest: u64 = 0;
    let mut current: u64 = 0;
    let mut previous: Option<NaiveDate> = None;
    for &date in dates {
        current = match previous {
            Some(prev) if (date - prev).num_days() == 1 => current + 1,
            _ => 1,
        };
        longest = longest.max(current);
        previous = Some(date);
    }
    longest
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use neighborly_entity::request::{
        Category, CreateRequest, HistoryEntry, Location, Rating, Urgency,
    };

    fn make_request(requester: UserId, category: Category, urgency: Urgency) -> HelpRequest {
        HelpRequest::create(
            CreateRequest {
                title: "Help carrying groceries".into(),
                description: "Need a hand carrying bags up three flights of stairs.".into(),
                category,
                urgency,
                location: Location::PlainText {
                    address: "4 Maple Ave".into(),
                },
                contact_info: None,
                estimated_time: None,
            },
            requester,
            "ana@example.com",
        )
    }

    fn completed_by(
        helper: UserId,
        category: Category,
        urgency: Urgency,
        stars: Option<u8>,
        completed_at: DateTime<Utc>,
    ) -> HelpRequest {
        let requester = UserId::new();
        let mut request = make_request(requester, category, urgency);
        request.status = RequestStatus::Completed;
        request.claimant_id = Some(helper);
        request.claimant_label = Some("ben@example.com".into());
        request.verified_by = Some(requester);
        request.history.push(HistoryEntry {
            event: HistoryEventType::Claimed,
            actor_id: helper,
            actor_label: "ben@example.com".into(),
            timestamp: completed_at,
        });
        request.history.push(HistoryEntry {
            event: HistoryEventType::VerifiedComplete,
            actor_id: requester,
            actor_label: "ana@example.com".into(),
            timestamp: completed_at,
        });
        request.rating = stars.map(|stars| Rating {
            stars,
            review: None,
            rated_user_id: helper,
            rated_user_email: "ben@example.com".into(),
            rated_at: completed_at,
        });
        request
    }

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).single().unwrap()
    }

    #[test]
    fn test_longest_streak_breaks_on_gap() {
        let dates: BTreeSet<NaiveDate> = [
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, 4).unwrap(),
        ]
        .into_iter()
        .collect();
        assert_eq!(longest_streak(&dates), 2);
        assert_eq!(longest_streak(&BTreeSet::new()), 0);
    }

    #[test]
    fn test_counts_and_average_rating() {
        let helper = UserId::new();
        // 2026-08-22 is a Saturday.
        let claimed = vec![
            completed_by(
                helper,
                Category::GroceriesShopping,
                Urgency::High,
                Some(5),
                day(2026, 8, 22),
            ),
            completed_by(
                helper,
                Category::GroceriesShopping,
                Urgency::Medium,
                Some(3),
                day(2026, 8, 24),
            ),
        ];
        let report = compute_stats(helper, &[], &claimed, &AchievementConfig::default());

        assert_eq!(report.completions, 2);
        assert_eq!(report.ratings_received, 2);
        assert_eq!(report.five_star_count, 1);
        assert_eq!(report.average_rating, Some(4.0));
        assert_eq!(report.weekend_completions, 1);
        assert_eq!(report.high_urgency_completions, 1);
        assert_eq!(
            report.category_completions.get("Groceries & Shopping"),
            Some(&2)
        );
        // Only the Saturday completion counts toward the weekend map.
        assert_eq!(
            report.category_weekend_completions.get("Groceries & Shopping"),
            Some(&1)
        );
    }

    #[test]
    fn test_response_rate() {
        let user = UserId::new();
        let authored = vec![
            make_request(user, Category::GeneralHelp, Urgency::Low),
            make_request(user, Category::GeneralHelp, Urgency::Low),
        ];
        let claimed = vec![completed_by(
            user,
            Category::PetCare,
            Urgency::Low,
            None,
            day(2026, 8, 20),
        )];
        let report = compute_stats(user, &authored, &claimed, &AchievementConfig::default());
        // 1 claim against 2 still-open posts.
        assert!((report.response_rate - 100.0 / 3.0).abs() < 1e-9);

        let empty = compute_stats(user, &[], &[], &AchievementConfig::default());
        assert_eq!(empty.response_rate, 0.0);
        assert_eq!(empty.average_rating, None);
    }
}
