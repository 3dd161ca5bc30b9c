//! Weekly activity summary and the simulated weight trend.

use rand::Rng;
use serde::Serialize;

use super::bmi::round_to_tenth;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayActivity {
    pub day: &'static str,
    pub steps: u32,
    /// Kilocalories burned.
    pub calories: u32,
}

/// Demo week shown until a tracker integration supplies real data.
pub static SAMPLE_WEEK: [DayActivity; 7] = [
    DayActivity { day: "Mon", steps: 8_500, calories: 320 },
    DayActivity { day: "Tue", steps: 7_200, calories: 280 },
    DayActivity { day: "Wed", steps: 9_800, calories: 380 },
    DayActivity { day: "Thu", steps: 6_500, calories: 250 },
    DayActivity { day: "Fri", steps: 10_200, calories: 420 },
    DayActivity { day: "Sat", steps: 11_500, calories: 480 },
    DayActivity { day: "Sun", steps: 8_432, calories: 340 },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySummary {
    pub days: Vec<DayActivity>,
    pub total_steps: u32,
    pub average_steps: u32,
    pub total_calories: u32,
    /// Days on which the step goal was met.
    pub goal_days: usize,
}

impl WeeklySummary {
    pub fn from_days(days: &[DayActivity], steps_goal: u32) -> Self {
        let total_steps: u32 = days.iter().map(|d| d.steps).sum();
        let total_calories: u32 = days.iter().map(|d| d.calories).sum();
        let average_steps = if days.is_empty() {
            0
        } else {
            (f64::from(total_steps) / days.len() as f64).round() as u32
        };
        Self {
            days: days.to_vec(),
            total_steps,
            average_steps,
            total_calories,
            goal_days: days.iter().filter(|d| d.steps >= steps_goal).count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightPoint {
    pub week: u32,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightTrend {
    pub points: Vec<WeightPoint>,
    pub target: f64,
    /// Last minus first weight.
    pub change: f64,
    /// Whether the trend ends closer to `target` than it started.
    pub improving: bool,
}

pub const DEFAULT_TARGET_WEIGHT_KG: f64 = 70.0;
const TREND_WEEKS: u32 = 6;

/// Six weeks of gradually decreasing weight ending near `current`.
pub fn simulate_weight_trend<R: Rng + ?Sized>(current: f64, target: f64, rng: &mut R) -> WeightTrend {
    let mut weight = current + 2.0;
    let mut points = Vec::with_capacity(TREND_WEEKS as usize);
    for week in 1..=TREND_WEEKS {
        points.push(WeightPoint {
            week,
            weight: round_to_tenth(weight),
        });
        weight -= 0.3 + rng.gen_range(0.0..0.2);
    }

    let start = points[0].weight;
    let end = points[points.len() - 1].weight;
    WeightTrend {
        change: round_to_tenth(end - start),
        improving: (end - target).abs() < (start - target).abs(),
        points,
        target,
    }
}
