//! Wellness tips page content.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthTip {
    pub id: &'static str,
    pub category: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static FEATURED_TIP: HealthTip = HealthTip {
    id: "featured",
    category: "Featured Tip",
    title: "Start Your Day Right",
    description: "Begin each morning with a glass of warm lemon water. It aids digestion, \
                  boosts immunity, and helps you stay hydrated throughout the day.",
};

pub static TIPS: [HealthTip; 6] = [
    HealthTip {
        id: "1",
        category: "Hydration",
        title: "Stay Hydrated",
        description: "Drink at least 8 glasses of water daily. Set reminders every 2 hours \
                      to maintain consistent hydration levels.",
    },
    HealthTip {
        id: "2",
        category: "Sleep",
        title: "Quality Sleep",
        description: "Aim for 7-9 hours of sleep. Maintain a consistent sleep schedule and \
                      avoid screens 1 hour before bed.",
    },
    HealthTip {
        id: "3",
        category: "Nutrition",
        title: "Balanced Diet",
        description: "Include colorful vegetables in every meal. They provide essential \
                      vitamins and antioxidants for optimal health.",
    },
    HealthTip {
        id: "4",
        category: "Exercise",
        title: "Move Daily",
        description: "Even 30 minutes of moderate exercise can significantly improve your \
                      cardiovascular health and mood.",
    },
    HealthTip {
        id: "5",
        category: "Mental Health",
        title: "Mindfulness Practice",
        description: "Take 10 minutes daily for meditation or deep breathing. It reduces \
                      stress and improves focus.",
    },
    HealthTip {
        id: "6",
        category: "Heart Health",
        title: "Monitor Your Heart",
        description: "Regular check-ups and tracking your heart rate helps in early \
                      detection of potential issues.",
    },
];

/// Payload of the tips page: one featured tip and the grid below it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TipsPage {
    pub featured: HealthTip,
    pub tips: Vec<HealthTip>,
}

impl TipsPage {
    pub fn new() -> Self {
        Self {
            featured: FEATURED_TIP,
            tips: TIPS.to_vec(),
        }
    }
}

impl Default for TipsPage {
    fn default() -> Self {
        Self::new()
    }
}
