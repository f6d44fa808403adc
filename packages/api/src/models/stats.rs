//! Dashboard aggregate and its count-up animation.

use std::time::Duration;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

pub const STATS_PATH: &str = "/stats";

/// Counts per resource plus last-modified markers, from `GET /stats`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stats {
    pub users: u64,
    pub articles: u64,
    pub projects: u64,
    pub reviews: u64,
    pub last_article_date: Option<String>,
    pub last_review_date: Option<String>,
}

impl Stats {
    /// The counts to display on frame `step` of a `steps`-frame count-up.
    /// Markers are carried over unchanged.
    pub fn frame(&self, steps: u32, step: u32) -> Self {
        let at = |target| CountUp::new(target, steps).value_at(step);
        Self {
            users: at(self.users),
            articles: at(self.articles),
            projects: at(self.projects),
            reviews: at(self.reviews),
            ..self.clone()
        }
    }
}

/// Render a last-modified marker as `YYYY-MM-DD`, or `—` when there is none.
///
/// Strings that are neither RFC 3339 timestamps nor plain dates are shown as-is.
pub fn format_marker(marker: Option<&str>) -> String {
    let Some(raw) = marker.map(str::trim).filter(|s| !s.is_empty()) else {
        return "—".to_string();
    };
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.date_naive().format("%Y-%m-%d").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}

/// Linear count from zero to `target` over a fixed number of frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountUp {
    pub target: u64,
    pub steps: u32,
}

impl CountUp {
    pub fn new(target: u64, steps: u32) -> Self {
        Self { target, steps }
    }

    /// Value shown on frame `step` (1-based); the last frame shows `target` exactly.
    pub fn value_at(&self, step: u32) -> u64 {
        if self.steps == 0 || step >= self.steps {
            return self.target;
        }
        (self.target as f64 / f64::from(self.steps) * f64::from(step)).floor() as u64
    }

    /// Delay between frames so the whole count takes `total`.
    pub fn frame_interval(&self, total: Duration) -> Duration {
        if self.steps == 0 {
            return Duration::ZERO;
        }
        total / self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_wire_format() {
        let stats: Stats = serde_json::from_str(
            r#"{"articles":12,"reviews":3,"users":2,"lastArticleDate":"2024-03-05T10:00:00.000Z","lastReviewDate":null}"#,
        )
        .unwrap();
        assert_eq!(stats.articles, 12);
        assert_eq!(stats.reviews, 3);
        assert_eq!(stats.users, 2);
        assert_eq!(stats.projects, 0);
        assert_eq!(stats.last_article_date.as_deref(), Some("2024-03-05T10:00:00.000Z"));
        assert!(stats.last_review_date.is_none());
    }

    #[test]
    fn test_format_marker() {
        assert_eq!(format_marker(Some("2024-03-05T10:00:00.000Z")), "2024-03-05");
        assert_eq!(format_marker(Some("2024-01-01")), "2024-01-01");
        assert_eq!(format_marker(Some("yesterday")), "yesterday");
        assert_eq!(format_marker(Some("  ")), "—");
        assert_eq!(format_marker(None), "—");
    }

    #[test]
    fn test_count_up_frames() {
        let count = CountUp::new(12, 60);
        assert_eq!(count.value_at(0), 0);
        assert_eq!(count.value_at(5), 1);
        assert_eq!(count.value_at(30), 6);
        assert_eq!(count.value_at(59), 11);
        assert_eq!(count.value_at(60), 12);

        let values: Vec<u64> = (1..=60).map(|s| count.value_at(s)).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_stats_frames() {
        let stats = Stats {
            users: 2,
            articles: 60,
            projects: 0,
            reviews: 30,
            last_article_date: Some("2024-01-01".to_string()),
            last_review_date: None,
        };
        let start = stats.frame(60, 0);
        assert_eq!((start.users, start.articles, start.reviews), (0, 0, 0));
        assert_eq!(start.last_article_date, stats.last_article_date);

        let middle = stats.frame(60, 30);
        assert_eq!((middle.users, middle.articles, middle.reviews), (1, 30, 15));

        assert_eq!(stats.frame(60, 60), stats);
    }

    #[test]
    fn test_count_up_degenerate() {
        assert_eq!(CountUp::new(0, 60).value_at(30), 0);
        assert_eq!(CountUp::new(7, 0).value_at(0), 7);
        assert_eq!(
            CountUp::new(7, 0).frame_interval(Duration::from_secs(1)),
            Duration::ZERO
        );
        assert_eq!(
            CountUp::new(7, 60).frame_interval(Duration::from_millis(1200)),
            Duration::from_millis(20)
        );
    }
}
