//! Dishes on a partner's menu, with the nutrition info the customer app shows.

use crate::framework::Searchable;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuItemId(pub u32);

impl From<u32> for MenuItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

crate::status_enum! {
    /// Whether customers can currently order the dish.
    pub enum Availability {
        Available = "available" => [Unavailable],
        Unavailable = "unavailable" => [Available],
    }
}

impl Availability {
    pub fn toggled(self) -> Self {
        match self {
            Availability::Available => Availability::Unavailable,
            Availability::Unavailable => Availability::Available,
        }
    }
}

impl From<bool> for Availability {
    fn from(available: bool) -> Self {
        if available {
            Availability::Available
        } else {
            Availability::Unavailable
        }
    }
}

/// Grams of each macronutrient per serving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Macros {
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

impl Macros {
    pub fn new(protein: u32, carbs: u32, fat: u32) -> Self {
        Self {
            protein,
            carbs,
            fat,
        }
    }

    pub fn scaled(self, quantity: u32) -> Self {
        Self::new(
            self.protein.saturating_mul(quantity),
            self.carbs.saturating_mul(quantity),
            self.fat.saturating_mul(quantity),
        )
    }
}

impl std::ops::Add for Macros {
    type Output = Macros;

    fn add(self, rhs: Macros) -> Macros {
        Macros::new(
            self.protein.saturating_add(rhs.protein),
            self.carbs.saturating_add(rhs.carbs),
            self.fat.saturating_add(rhs.fat),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Starters,
    #[serde(rename = "Main Course")]
    MainCourse,
    Sides,
    Drinks,
    Desserts,
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Category::Starters => "Starters",
            Category::MainCourse => "Main Course",
            Category::Sides => "Sides",
            Category::Drinks => "Drinks",
            Category::Desserts => "Desserts",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietTag {
    #[serde(rename = "High Protein")]
    HighProtein,
    #[serde(rename = "Low Carb")]
    LowCarb,
    #[serde(rename = "Low Fat")]
    LowFat,
    Balanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Allergen {
    Gluten,
    Dairy,
    Nuts,
    Eggs,
    Soy,
    Shellfish,
    Fish,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    /// Rupees.
    pub price: u32,
    pub calories: u32,
    pub macros: Macros,
    pub category: Category,
    pub tags: Vec<DietTag>,
    pub allergens: Vec<Allergen>,
    pub prep_minutes: u32,
    pub availability: Availability,
}

impl Searchable for MenuItem {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![self.name.as_str().into(), Cow::Owned(self.category.to_string())]
    }
}

/// The add-item dialog. `category` is `None` until the partner picks one.
#[derive(Debug, Clone)]
pub struct MenuItemCreate {
    pub name: String,
    pub description: String,
    pub price: u32,
    pub calories: u32,
    pub macros: Macros,
    pub category: Option<Category>,
    pub tags: Vec<DietTag>,
    pub allergens: Vec<Allergen>,
    pub prep_minutes: u32,
    pub available: bool,
}

/// The edit-item dialog; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<u32>,
    pub calories: Option<u32>,
    pub macros: Option<Macros>,
    pub category: Option<Category>,
    pub tags: Option<Vec<DietTag>>,
    pub allergens: Option<Vec<Allergen>>,
    pub prep_minutes: Option<u32>,
}
