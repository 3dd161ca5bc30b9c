//! Daily meal plan built from a fixed catalogue.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MealCategory {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealCategory {
    pub const ALL: [MealCategory; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snacks];

    /// Catalogue entries for this category, preferred meal first.
    pub fn meals(&self) -> &'static [Meal] {
        match self {
            Self::Breakfast => BREAKFAST,
            Self::Lunch => LUNCH,
            Self::Dinner => DINNER,
            Self::Snacks => SNACKS,
        }
    }
}

/// A meal with its macronutrients (grams) and energy (kcal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub name: &'static str,
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    pub is_veg: bool,
}

const fn meal(name: &'static str, calories: u32, protein: u32, carbs: u32, fat: u32, is_veg: bool) -> Meal {
    Meal {
        name,
        calories,
        protein,
        carbs,
        fat,
        is_veg,
    }
}

static BREAKFAST: &[Meal] = &[
    meal("Oatmeal with Berries", 350, 12, 55, 8, true),
    meal("Eggs Benedict", 450, 22, 30, 25, false),
];
static LUNCH: &[Meal] = &[
    meal("Quinoa Buddha Bowl", 480, 18, 65, 15, true),
    meal("Grilled Chicken Salad", 420, 35, 25, 18, false),
];
static DINNER: &[Meal] = &[
    meal("Vegetable Stir Fry", 380, 14, 45, 12, true),
    meal("Salmon with Asparagus", 520, 42, 18, 28, false),
];
static SNACKS: &[Meal] = &[
    meal("Greek Yogurt Parfait", 180, 15, 22, 4, true),
    meal("Turkey Wrap", 220, 18, 20, 8, false),
];

/// Pick the meal for a category. Veg mode takes the first vegetarian meal,
/// falling back to the first meal when a category has none.
pub fn select_meal(category: MealCategory, veg_mode: bool) -> &'static Meal {
    let meals = category.meals();
    let first = &meals[0];
    if veg_mode {
        meals.iter().find(|m| m.is_veg).unwrap_or(first)
    } else {
        first
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NutrientTotals {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

impl NutrientTotals {
    fn add(mut self, meal: &Meal) -> Self {
        self.calories += meal.calories;
        self.protein += meal.protein;
        self.carbs += meal.carbs;
        self.fat += meal.fat;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedMeal {
    pub category: MealCategory,
    pub meal: Meal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlan {
    pub veg_mode: bool,
    pub meals: Vec<PlannedMeal>,
    pub totals: NutrientTotals,
}

impl DietPlan {
    pub fn for_profile(veg_mode: bool) -> Self {
        let meals: Vec<PlannedMeal> = MealCategory::ALL
            .into_iter()
            .map(|category| PlannedMeal {
                category,
                meal: *select_meal(category, veg_mode),
            })
            .collect();
        let totals = meals
            .iter()
            .fold(NutrientTotals::default(), |acc, planned| acc.add(&planned.meal));
        Self {
            veg_mode,
            meals,
            totals,
        }
    }
}
