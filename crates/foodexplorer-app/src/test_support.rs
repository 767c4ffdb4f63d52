//! Shared fixtures for view-model tests

use async_trait::async_trait;
use foodexplorer_core::{Dish, DishRepository, DomainError, Ingredient, NewDish};

mockall::mock! {
    pub DishRepo {}

    #[async_trait]
    impl DishRepository for DishRepo {
        async fn list(&self) -> Result<Vec<Dish>, DomainError>;
        async fn search(&self, item_search: &str) -> Result<Vec<Dish>, DomainError>;
        async fn create(&self, dish: &NewDish) -> Result<(), DomainError>;
    }
}

pub fn dish(id: i64, name: &str, category: &str, ingredients: &[&str]) -> Dish {
    Dish {
        id,
        name: name.to_string(),
        category: category.to_string(),
        ingredients: ingredients
            .iter()
            .map(|n| Ingredient { name: n.to_string() })
            .collect(),
        price: 25.97,
        description: String::new(),
        image_url: Some(format!("{}.png", id)),
    }
}

pub fn catalog() -> Vec<Dish> {
    vec![
        dish(1, "Salada Ravanello", "Refeições", &["Rabanete", "Alface"]),
        dish(2, "Prugna Pie", "Sobremesas", &["Ameixa", "Massa"]),
        dish(3, "Suco de maracujá", "Bebidas", &["Maracujá"]),
    ]
}
