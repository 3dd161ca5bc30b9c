//! Derived health figures shown on the dashboard, diet, activity and tips pages.

pub mod activity;
pub mod bmi;
pub mod dashboard;
pub mod diet;
pub mod metrics;
pub mod tips;

pub use activity::{SAMPLE_WEEK, WeeklySummary, WeightTrend, simulate_weight_trend};
pub use bmi::{BmiCategory, BmiStatus, Tone, calculate_bmi};
pub use dashboard::{DashboardSummary, HealthWarning, WarningKind, dashboard_summary, health_warnings};
pub use diet::{DietPlan, Meal, MealCategory};
pub use metrics::{DailyMetrics, MetricWidget, greeting, metric_widgets};
pub use tips::{FEATURED_TIP, HealthTip, TIPS, TipsPage};
