//! Multi-select categories and their option lists.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the three multi-select questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Dessert,
    Activities,
}

impl Category {
    /// All categories in questionnaire order.
    pub const ALL: [Category; 3] = [Category::Food, Category::Dessert, Category::Activities];

    /// Field name used in stored records and email templates.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Dessert => "dessert",
            Category::Activities => "activities",
        }
    }

    /// Short capitalized label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Dessert => "Dessert",
            Category::Activities => "Activities",
        }
    }

    /// Label used in the plain-text results.
    pub fn results_label(&self) -> &'static str {
        match self {
            Category::Food => "Food Preferences",
            Category::Dessert => "Dessert Preferences",
            Category::Activities => "Activities",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "food" => Ok(Category::Food),
            "dessert" => Ok(Category::Dessert),
            "activities" | "activity" => Ok(Category::Activities),
            _ => Err(format!("Invalid category: {s}")),
        }
    }
}

/// The fixed option lists offered for each category.
///
/// Defaults are built in; any list may be replaced from the `[options]`
/// section of the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionCatalog {
    pub food: Vec<String>,
    pub dessert: Vec<String>,
    pub activities: Vec<String>,
}

impl OptionCatalog {
    /// Options offered for `category`, in display order.
    pub fn options(&self, category: Category) -> &[String] {
        match category {
            Category::Food => &self.food,
            Category::Dessert => &self.dessert,
            Category::Activities => &self.activities,
        }
    }

    /// Looks up an option by its 1-based position.
    pub fn option_at(&self, category: Category, position: usize) -> Option<&str> {
        position
            .checked_sub(1)
            .and_then(|index| self.options(category).get(index))
            .map(String::as_str)
    }
}

impl Default for OptionCatalog {
    fn default() -> Self {
        fn owned(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| (*s).to_string()).collect()
        }

        Self {
            food: owned(&[
                "Pizza", "Sushi", "Pasta", "Tacos", "Burgers", "Thai", "Steak", "Ramen",
            ]),
            dessert: owned(&[
                "Chocolate Cake",
                "Ice Cream",
                "Tiramisu",
                "Cheesecake",
                "Macarons",
                "Chocolate-Covered Strawberries",
            ]),
            activities: owned(&[
                "Movie Night",
                "Dinner Date",
                "Picnic",
                "Stargazing",
                "Dancing",
                "Museum Visit",
                "Cooking Together",
                "Spa Day",
            ]),
        }
    }
}
