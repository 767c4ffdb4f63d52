//! Dish domain entity

use serde::{Deserialize, Serialize};

use super::Category;

pub type DishId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
}

/// Menu item as served by `GET /dishes`.
///
/// `category` stays a raw string so that dishes with labels outside the three
/// known categories still decode; the catalog filter drops them later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: DishId,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "image", default)]
    pub image_url: Option<String>,
}

impl Dish {
    pub fn category(&self) -> Option<Category> {
        Category::from_str(&self.category)
    }

    /// Case-insensitive substring match on the name, then on each ingredient
    /// name. `needle` must already be lowercase.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        if self.name.to_lowercase().contains(needle) {
            return true;
        }

        self.ingredients
            .iter()
            .any(|ingredient| ingredient.name.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(name: &str, ingredients: &[&str]) -> Dish {
        Dish {
            id: 1,
            name: name.to_string(),
            category: "Refeições".to_string(),
            ingredients: ingredients
                .iter()
                .map(|n| Ingredient { name: n.to_string() })
                .collect(),
            price: 10.0,
            description: String::new(),
            image_url: None,
        }
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        let d = dish("Salada Ravanello", &[]);
        assert!(d.matches_lowercase("ravan"));
        assert!(d.matches_lowercase("salada"));
        assert!(!d.matches_lowercase("torrada"));
    }

    #[test]
    fn test_matches_ingredient() {
        let d = dish("Spaguetti Gambe", &["Camarão", "Massa fresca"]);
        assert!(d.matches_lowercase("camar"));
        assert!(d.matches_lowercase("fresca"));
        assert!(!d.matches_lowercase("alface"));
    }

    #[test]
    fn test_decode_backend_payload() {
        let json = r#"{
            "id": 7,
            "name": "Torradas de Parma",
            "category": "Refeições",
            "ingredients": [{"id": 1, "name": "Presunto de parma", "dish_id": 7}],
            "price": 25.97,
            "description": "Presunto de parma e rúcula em um pão com fermentação natural.",
            "image": "parma.png"
        }"#;
        let d: Dish = serde_json::from_str(json).unwrap();
        assert_eq!(d.id, 7);
        assert_eq!(d.category(), Some(Category::Meals));
        assert_eq!(d.ingredients[0].name, "Presunto de parma");
        assert_eq!(d.image_url.as_deref(), Some("parma.png"));
    }

    #[test]
    fn test_decode_unknown_category() {
        let json = r#"{"id": 2, "name": "Pastel", "category": "Lanches", "price": 8}"#;
        let d: Dish = serde_json::from_str(json).unwrap();
        assert_eq!(d.category(), None);
        assert!(d.ingredients.is_empty());
    }
}
