//! The 7-day dietary plan: three meal slots per day, day and week totals,
//! and progress against the customer's daily goals.

use crate::model::{Macros, MenuItem};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::ops::Add;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("Please enter a meal name")]
    MissingName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// The day picker's right arrow. Sunday wraps to Monday.
    pub fn next(self) -> Weekday {
        Self::ALL[(self.index() + 1) % 7]
    }

    /// The day picker's left arrow. Monday wraps to Sunday.
    pub fn prev(self) -> Weekday {
        Self::ALL[(self.index() + 6) % 7]
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];
}

/// Calories plus macros, the unit every total on the plan page is counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: u32,
    pub macros: Macros,
}

impl Add for Nutrition {
    type Output = Nutrition;

    fn add(self, rhs: Nutrition) -> Nutrition {
        Nutrition {
            calories: self.calories.saturating_add(rhs.calories),
            macros: self.macros + rhs.macros,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    pub nutrition: Nutrition,
}

impl Meal {
    pub fn new(name: impl Into<String>, calories: u32, macros: Macros) -> Self {
        Self {
            name: name.into(),
            nutrition: Nutrition { calories, macros },
        }
    }
}

/// Planning a dish straight from a restaurant menu.
impl From<&MenuItem> for Meal {
    fn from(dish: &MenuItem) -> Self {
        Meal::new(dish.name.clone(), dish.calories, dish.macros)
    }
}

/// Daily targets the progress bars are drawn against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionGoals {
    pub calories: u32,
    pub macros: Macros,
}

impl Default for NutritionGoals {
    fn default() -> Self {
        Self {
            calories: 2000,
            macros: Macros::new(150, 200, 65),
        }
    }
}

/// Percent of each daily goal reached. Values above 100 mean the goal was
/// exceeded; a zero goal reads as 0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct GoalProgress {
    pub calories: f32,
    pub protein: f32,
    pub carbs: f32,
    pub fat: f32,
}

fn percent(value: u32, goal: u32) -> f32 {
    if goal == 0 {
        return 0.0;
    }
    value as f32 * 100.0 / goal as f32
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DayPlan {
    meals: [Option<Meal>; 3],
}

impl DayPlan {
    pub fn new(breakfast: Option<Meal>, lunch: Option<Meal>, dinner: Option<Meal>) -> Self {
        Self {
            meals: [breakfast, lunch, dinner],
        }
    }

    pub fn meal(&self, slot: MealSlot) -> Option<&Meal> {
        self.meals[slot as usize].as_ref()
    }

    pub fn total(&self) -> Nutrition {
        self.meals
            .iter()
            .flatten()
            .fold(Nutrition::default(), |acc, meal| acc + meal.nutrition)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MealPlan {
    days: [DayPlan; 7],
    pub goals: NutritionGoals,
}

impl MealPlan {
    /// An empty week.
    pub fn new(goals: NutritionGoals) -> Self {
        Self {
            days: Default::default(),
            goals,
        }
    }

    /// A week filled Monday first.
    pub fn with_days(goals: NutritionGoals, days: [DayPlan; 7]) -> Self {
        Self { days, goals }
    }

    pub fn day(&self, day: Weekday) -> &DayPlan {
        &self.days[day.index()]
    }

    /// Puts `meal` in a slot, returning whatever was planned there before.
    pub fn save_meal(
        &mut self,
        day: Weekday,
        slot: MealSlot,
        meal: Meal,
    ) -> Result<Option<Meal>, PlanError> {
        if meal.name.trim().is_empty() {
            return Err(PlanError::MissingName);
        }
        let previous = self.days[day.index()].meals[slot as usize].replace(meal);
        info!(%day, ?slot, "Meal saved successfully!");
        Ok(previous)
    }

    pub fn remove_meal(&mut self, day: Weekday, slot: MealSlot) -> Option<Meal> {
        let removed = self.days[day.index()].meals[slot as usize].take();
        if removed.is_some() {
            info!(%day, ?slot, "Meal removed from plan");
        }
        removed
    }

    pub fn day_total(&self, day: Weekday) -> Nutrition {
        self.day(day).total()
    }

    /// One entry per day, Monday first: the weekly overview bar chart.
    pub fn weekly_totals(&self) -> Vec<(Weekday, Nutrition)> {
        Weekday::ALL
            .iter()
            .map(|&day| (day, self.day_total(day)))
            .collect()
    }

    pub fn week_total(&self) -> Nutrition {
        self.days
            .iter()
            .fold(Nutrition::default(), |acc, day| acc + day.total())
    }

    /// How far `day` gets towards the daily goals.
    pub fn progress(&self, day: Weekday) -> GoalProgress {
        let total = self.day_total(day);
        GoalProgress {
            calories: percent(total.calories, self.goals.calories),
            protein: percent(total.macros.protein, self.goals.macros.protein),
            carbs: percent(total.macros.carbs, self.goals.macros.carbs),
            fat: percent(total.macros.fat, self.goals.macros.fat),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn day_totals_skip_empty_slots() {
        let plan = seed::meal_plan();

        let monday = plan.day_total(Weekday::Mon);
        assert_eq!(monday.calories, 1420);
        assert_eq!(monday.macros, Macros::new(91, 129, 60));

        // No lunch planned on Wednesday.
        assert!(plan.day(Weekday::Wed).meal(MealSlot::Lunch).is_none());
        assert_eq!(plan.day_total(Weekday::Wed).calories, 1170);
    }

    #[test]
    fn weekly_totals_follow_the_calendar() {
        let plan = seed::meal_plan();
        let calories: Vec<u32> = plan
            .weekly_totals()
            .iter()
            .map(|(_, total)| total.calories)
            .collect();
        assert_eq!(calories, [1420, 1380, 1170, 760, 1200, 1420, 940]);
        assert_eq!(plan.week_total().calories, 8290);
        assert_eq!(plan.weekly_totals()[6].0, Weekday::Sun);
    }

    #[test]
    fn saving_and_removing_meals() {
        let mut plan = seed::meal_plan();

        let previous = plan
            .save_meal(
                Weekday::Wed,
                MealSlot::Lunch,
                Meal::new("Grilled Salad", 300, Macros::new(20, 15, 12)),
            )
            .unwrap();
        assert_eq!(previous, None);
        assert_eq!(plan.day_total(Weekday::Wed).calories, 1470);

        let replaced = plan
            .save_meal(
                Weekday::Mon,
                MealSlot::Breakfast,
                Meal::new("Oats", 250, Macros::new(8, 40, 5)),
            )
            .unwrap();
        assert_eq!(replaced.map(|m| m.name), Some("Paratha with Eggs".to_string()));

        let blank = Meal::new("  ", 100, Macros::default());
        assert_eq!(
            plan.save_meal(Weekday::Mon, MealSlot::Dinner, blank),
            Err(PlanError::MissingName)
        );
        let dinner = plan.day(Weekday::Mon).meal(MealSlot::Dinner);
        assert_eq!(dinner.map(|m| m.name.as_str()), Some("Grilled Chicken Salad"));

        assert!(plan.remove_meal(Weekday::Sun, MealSlot::Lunch).is_some());
        assert!(plan.remove_meal(Weekday::Sun, MealSlot::Lunch).is_none());
        assert_eq!(plan.day_total(Weekday::Sun).calories, 420);
    }

    #[test]
    fn progress_against_goals() {
        let plan = seed::meal_plan();
        let progress = plan.progress(Weekday::Mon);
        assert_eq!(progress.calories, 71.0);
        assert_eq!(progress.carbs, 64.5);

        // Saturday's fat overshoots the 65 g goal.
        assert!(plan.progress(Weekday::Sat).fat > 100.0);

        let mut no_goals = MealPlan::new(NutritionGoals {
            calories: 0,
            macros: Macros::default(),
        });
        no_goals
            .save_meal(
                Weekday::Mon,
                MealSlot::Lunch,
                Meal::new("Chicken Biryani", 650, Macros::new(35, 75, 22)),
            )
            .unwrap();
        assert_eq!(no_goals.progress(Weekday::Mon), GoalProgress::default());
    }

    #[test]
    fn day_picker_wraps() {
        assert_eq!(Weekday::Sun.next(), Weekday::Mon);
        assert_eq!(Weekday::Mon.prev(), Weekday::Sun);
        assert_eq!(Weekday::Wed.to_string(), "Wed");
    }
}
