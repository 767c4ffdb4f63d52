// ============================================================================
// Food Explorer Core - Dish Category
// File: crates/foodexplorer-core/src/domain/category.rs
// Description: The three fixed menu categories
// ============================================================================

use serde::{Deserialize, Serialize};

use foodexplorer_shared::constants::{CATEGORY_DESSERTS, CATEGORY_DRINKS, CATEGORY_MEALS};

/// Menu category enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Refeições")]
    Meals,
    #[serde(rename = "Sobremesas")]
    Desserts,
    #[serde(rename = "Bebidas")]
    Drinks,
}

impl Category {
    /// Display order of the home carousels
    pub const ALL: [Category; 3] = [Category::Meals, Category::Desserts, Category::Drinks];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Meals => CATEGORY_MEALS,
            Category::Desserts => CATEGORY_DESSERTS,
            Category::Drinks => CATEGORY_DRINKS,
        }
    }

    /// Exact match on the backend label; anything else is unrecognized.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            CATEGORY_MEALS => Some(Category::Meals),
            CATEGORY_DESSERTS => Some(Category::Desserts),
            CATEGORY_DRINKS => Some(Category::Drinks),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
