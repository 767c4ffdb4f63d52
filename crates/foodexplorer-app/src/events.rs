//! Application Events
//!
//! Messages sent from background tasks back to the view-model owner.

use foodexplorer_core::Dish;

use crate::navigation::Route;

/// Identifies one AddDish form instance. Results tagged with an older
/// generation belong to a form the user already left.
pub type FormGeneration = u64;

#[derive(Debug)]
pub enum AppEvent {
    /// Home catalog fetch finished
    DishesLoaded(Vec<Dish>),
    DishesLoadFailed(String),
    /// AddDish header-search catalog fetch finished
    SearchCatalogLoaded { generation: FormGeneration, dishes: Vec<Dish> },
    SearchCatalogFailed { generation: FormGeneration, error: String },
    /// Dish submission finished
    DishCreated { generation: FormGeneration },
    DishCreateFailed { generation: FormGeneration, error: String },
    /// Delayed navigation requested by an AddDish form
    Navigate { generation: FormGeneration, route: Route },
}
