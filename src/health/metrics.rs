//! Daily metric widgets: readings, goals and the text shown with them.

use chrono::{DateTime, Duration, Timelike, Utc};
use serde::Serialize;

use crate::config::GoalsConfig;

/// Greeting for an hour of the day (0–23).
pub fn greeting_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 18 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

/// Greeting for the given moment in the caller's time zone.
pub fn greeting<Tz: chrono::TimeZone>(now: &DateTime<Tz>) -> &'static str {
    greeting_for_hour(now.hour())
}

/// Relative age of a reading, e.g. "15 mins ago".
pub fn format_last_updated(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let mins = (now - then).num_minutes();
    if mins < 1 {
        return "Just now".to_string();
    }
    if mins < 60 {
        return format!("{mins} min{} ago", plural(mins));
    }
    let hours = mins / 60;
    if hours < 24 {
        return format!("{hours} hour{} ago", plural(hours));
    }
    let days = hours / 24;
    format!("{days} day{} ago", plural(days))
}

fn plural(n: i64) -> &'static str {
    if n > 1 { "s" } else { "" }
}

/// `n` with comma thousands separators.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn steps_remaining(current: u32, goal: u32) -> String {
    if current >= goal {
        return "Goal achieved! 🎉".to_string();
    }
    format!("{} steps to goal", format_thousands(u64::from(goal - current)))
}

/// Whole-number percentage of `goal` reached (may exceed 100).
pub fn progress_percent(value: u32, goal: u32) -> u32 {
    if goal == 0 {
        return 0;
    }
    (f64::from(value) / f64::from(goal) * 100.0).round() as u32
}

/// One timestamped metric value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricReading {
    pub value: u32,
    pub last_updated: DateTime<Utc>,
}

impl MetricReading {
    fn minutes_before(value: u32, now: DateTime<Utc>, minutes: i64) -> Self {
        Self {
            value,
            last_updated: now - Duration::minutes(minutes),
        }
    }
}

/// Today's readings for the dashboard widgets.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMetrics {
    pub steps: MetricReading,
    /// Glasses.
    pub water: MetricReading,
    /// Beats per minute.
    pub heart_rate: MetricReading,
    /// Kilocalories burned.
    pub calories: MetricReading,
}

impl DailyMetrics {
    /// Demo readings until a device integration supplies real ones.
    pub fn simulated(now: DateTime<Utc>) -> Self {
        Self {
            steps: MetricReading::minutes_before(8_432, now, 15),
            water: MetricReading::minutes_before(6, now, 30),
            heart_rate: MetricReading::minutes_before(72, now, 5),
            calories: MetricReading::minutes_before(1_840, now, 45),
        }
    }
}

/// A rendered dashboard widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricWidget {
    pub title: &'static str,
    pub value: String,
    pub subtitle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u32>,
    pub last_updated: String,
}

/// Build the four metric widgets from readings and goals.
pub fn metric_widgets(metrics: &DailyMetrics, goals: &GoalsConfig, now: DateTime<Utc>) -> Vec<MetricWidget> {
    vec![
        MetricWidget {
            title: "Steps",
            value: format_thousands(u64::from(metrics.steps.value)),
            subtitle: steps_remaining(metrics.steps.value, goals.steps),
            progress: Some(progress_percent(metrics.steps.value, goals.steps)),
            last_updated: format_last_updated(metrics.steps.last_updated, now),
        },
        MetricWidget {
            title: "Water",
            value: metrics.water.value.to_string(),
            subtitle: format!(
                "{} glasses to goal",
                goals.water.saturating_sub(metrics.water.value)
            ),
            progress: Some(progress_percent(metrics.water.value, goals.water)),
            last_updated: format_last_updated(metrics.water.last_updated, now),
        },
        MetricWidget {
            title: "Heart Rate",
            value: metrics.heart_rate.value.to_string(),
            subtitle: "bpm average".to_string(),
            progress: None,
            last_updated: format_last_updated(metrics.heart_rate.last_updated, now),
        },
        MetricWidget {
            title: "Calories",
            value: format_thousands(u64::from(metrics.calories.value)),
            subtitle: "kcal burned".to_string(),
            progress: Some(progress_percent(metrics.calories.value, goals.calories)),
            last_updated: format_last_updated(metrics.calories.last_updated, now),
        },
    ]
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, hour, min, 0).unwrap()
    }

    #[test]
    fn greeting_boundaries() {
        assert_eq!(greeting_for_hour(0), "Good morning");
        assert_eq!(greeting_for_hour(11), "Good morning");
        assert_eq!(greeting_for_hour(12), "Good afternoon");
        assert_eq!(greeting_for_hour(17), "Good afternoon");
        assert_eq!(greeting_for_hour(18), "Good evening");
        assert_eq!(greeting_for_hour(23), "Good evening");
        assert_eq!(greeting(&at(9, 30)), "Good morning");
    }

    #[test]
    fn last_updated_wording() {
        let now = at(12, 0);
        assert_eq!(format_last_updated(now, now), "Just now");
        assert_eq!(format_last_updated(now - Duration::seconds(59), now), "Just now");
        assert_eq!(format_last_updated(now - Duration::minutes(1), now), "1 min ago");
        assert_eq!(format_last_updated(now - Duration::minutes(15), now), "15 mins ago");
        assert_eq!(format_last_updated(now - Duration::minutes(60), now), "1 hour ago");
        assert_eq!(format_last_updated(now - Duration::hours(5), now), "5 hours ago");
        assert_eq!(format_last_updated(now - Duration::hours(24), now), "1 day ago");
        assert_eq!(format_last_updated(now - Duration::days(3), now), "3 days ago");
        // Clock skew: a reading from the future is "just now"
        assert_eq!(format_last_updated(now + Duration::minutes(5), now), "Just now");
    }

    #[test]
    fn thousands_separators() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(8_432), "8,432");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn steps_remaining_text() {
        assert_eq!(steps_remaining(8_432, 10_000), "1,568 steps to goal");
        assert_eq!(steps_remaining(10_000, 10_000), "Goal achieved! 🎉");
        assert_eq!(steps_remaining(12_000, 10_000), "Goal achieved! 🎉");
    }

    #[test]
    fn progress_rounds_and_handles_zero_goal() {
        assert_eq!(progress_percent(8_432, 10_000), 84);
        assert_eq!(progress_percent(6, 8), 75);
        assert_eq!(progress_percent(1_840, 2_000), 92);
        assert_eq!(progress_percent(3, 0), 0);
        assert_eq!(progress_percent(12, 8), 150);
    }

    #[test]
    fn widgets_from_simulated_metrics() {
        let now = at(12, 0);
        let widgets = metric_widgets(&DailyMetrics::simulated(now), &GoalsConfig::default(), now);
        assert_eq!(widgets.len(), 4);

        assert_eq!(widgets[0].value, "8,432");
        assert_eq!(widgets[0].subtitle, "1,568 steps to goal");
        assert_eq!(widgets[0].progress, Some(84));
        assert_eq!(widgets[0].last_updated, "15 mins ago");

        assert_eq!(widgets[1].subtitle, "2 glasses to goal");
        assert_eq!(widgets[1].progress, Some(75));

        assert_eq!(widgets[2].title, "Heart Rate");
        assert!(widgets[2].progress.is_none());
        assert_eq!(widgets[2].last_updated, "5 mins ago");

        assert_eq!(widgets[3].value, "1,840");
        assert_eq!(widgets[3].progress, Some(92));
    }
}
