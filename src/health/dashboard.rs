//! Dashboard warnings, motivation and the combined summary payload.

use chrono::{DateTime, TimeZone, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use super::activity::{DEFAULT_TARGET_WEIGHT_KG, WeightTrend, simulate_weight_trend};
use super::bmi::{BmiCategory, BmiStatus};
use super::metrics::{DailyMetrics, MetricWidget, greeting, metric_widgets};
use crate::config::GoalsConfig;
use crate::profile::UserProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    Warning,
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthWarning {
    pub id: &'static str,
    pub kind: WarningKind,
    pub title: String,
    pub description: String,
}

/// Dashboard notices for a profile. The BMI notice only appears once both
/// weight and height are known.
pub fn health_warnings(profile: &UserProfile) -> Vec<HealthWarning> {
    let mut warnings = Vec::with_capacity(3);

    let bmi = profile.bmi();
    if bmi > 0.0 {
        let status = BmiStatus::from_bmi(bmi);
        let (kind, title) = match status.category {
            BmiCategory::Normal | BmiCategory::Unknown => {
                (WarningKind::Success, format!("Healthy BMI - {bmi}"))
            }
            category => (WarningKind::Warning, format!("{category} - BMI {bmi}")),
        };
        warnings.push(HealthWarning {
            id: "bmi",
            kind,
            title,
            description: status.description.to_string(),
        });
    }

    warnings.push(HealthWarning {
        id: "iron",
        kind: WarningKind::Info,
        title: "Low Iron Levels".to_string(),
        description: "Consider adding iron-rich foods to your diet.".to_string(),
    });
    warnings.push(HealthWarning {
        id: "activity",
        kind: WarningKind::Success,
        title: "Great Activity!".to_string(),
        description: "You've exceeded your step goal 5 days this week.".to_string(),
    });

    warnings
}

pub const MOTIVATIONS: [&str; 3] = [
    "You're making great progress! Keep up the healthy habits.",
    "Remember to drink water – you're 2 glasses away from your goal!",
    "A 15-minute walk can boost your mood and energy levels.",
];

pub fn pick_motivation<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    MOTIVATIONS.choose(rng).copied().unwrap_or(MOTIVATIONS[0])
}

/// Everything the dashboard page renders in one payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub greeting: &'static str,
    pub name: String,
    pub bmi: f64,
    pub bmi_status: BmiStatus,
    pub widgets: Vec<MetricWidget>,
    pub warnings: Vec<HealthWarning>,
    pub motivation: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_trend: Option<WeightTrend>,
}

/// Build the dashboard for `profile`. `now` carries the caller's time zone,
/// which only affects the greeting.
pub fn dashboard_summary<Tz, R>(
    profile: &UserProfile,
    metrics: &DailyMetrics,
    goals: &GoalsConfig,
    now: &DateTime<Tz>,
    rng: &mut R,
) -> DashboardSummary
where
    Tz: TimeZone,
    R: Rng + ?Sized,
{
    let now_utc = now.with_timezone(&Utc);
    let bmi = profile.bmi();
    let weight_trend = (profile.weight > 0.0)
        .then(|| simulate_weight_trend(profile.weight, DEFAULT_TARGET_WEIGHT_KG, rng));

    DashboardSummary {
        greeting: greeting(now),
        name: profile.display_name().to_string(),
        bmi,
        bmi_status: BmiStatus::from_bmi(bmi),
        widgets: metric_widgets(metrics, goals, now_utc),
        warnings: health_warnings(profile),
        motivation: pick_motivation(rng),
        weight_trend,
    }
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::health::Tone;

    fn profile(weight: f64, height: f64) -> UserProfile {
        UserProfile {
            name: "Ana".to_string(),
            age: 30,
            weight,
            height,
            onboarding_complete: true,
            ..Default::default()
        }
    }

    #[test]
    fn healthy_bmi_is_a_success_notice() {
        let warnings = health_warnings(&profile(65.0, 170.0));
        assert_eq!(warnings.len(), 3);
        assert_eq!(warnings[0].kind, WarningKind::Success);
        assert_eq!(warnings[0].title, "Healthy BMI - 22.5");
        assert_eq!(warnings[1].title, "Low Iron Levels");
        assert_eq!(warnings[2].title, "Great Activity!");
    }

    #[test]
    fn out_of_range_bmi_is_a_warning() {
        let warnings = health_warnings(&profile(100.0, 160.0));
        assert_eq!(warnings[0].kind, WarningKind::Warning);
        assert_eq!(warnings[0].title, "Obese - BMI 39.1");
        assert_eq!(warnings[0].description, "Consult a healthcare professional");

        let warnings = health_warnings(&profile(45.0, 170.0));
        assert_eq!(warnings[0].title, "Underweight - BMI 15.6");
    }

    #[test]
    fn no_bmi_notice_without_measurements() {
        let warnings = health_warnings(&UserProfile::default());
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().all(|w| w.id != "bmi"));
    }

    #[test]
    fn motivation_comes_from_the_fixed_list() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            assert!(MOTIVATIONS.contains(&pick_motivation(&mut rng)));
        }
    }

    #[test]
    fn summary_uses_local_hour_for_greeting() {
        // 10:00 UTC is 19:00 at +09:00
        let tz = FixedOffset::east_opt(9 * 3600).unwrap();
        let now = Utc.with_ymd_and_hms(2026, 3, 14, 10, 0, 0).unwrap().with_timezone(&tz);
        let mut rng = StdRng::seed_from_u64(3);

        let summary = dashboard_summary(
            &profile(65.0, 170.0),
            &DailyMetrics::simulated(now.with_timezone(&Utc)),
            &GoalsConfig::default(),
            &now,
            &mut rng,
        );

        assert_eq!(summary.greeting, "Good evening");
        assert_eq!(summary.name, "Ana");
        assert_eq!(summary.bmi, 22.5);
        assert_eq!(summary.bmi_status.tone, Tone::Success);
        assert_eq!(summary.widgets[0].last_updated, "15 mins ago");
        assert!(summary.weight_trend.is_some());
    }

    #[test]
    fn summary_for_empty_profile() {
        let now = Utc.with_ymd_and_hms(2026, 3, 14, 8, 0, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let summary = dashboard_summary(
            &UserProfile::default(),
            &DailyMetrics::simulated(now),
            &GoalsConfig::default(),
            &now,
            &mut rng,
        );

        assert_eq!(summary.name, "User");
        assert_eq!(summary.bmi, 0.0);
        assert_eq!(summary.bmi_status.category, BmiCategory::Unknown);
        assert!(summary.weight_trend.is_none());

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["greeting"], "Good morning");
        assert!(json.get("weightTrend").is_none());
        assert_eq!(json["bmiStatus"]["tone"], "warning");
    }
}
