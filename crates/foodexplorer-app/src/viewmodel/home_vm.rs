//! Home ViewModel
//!
//! Catalog carousels, live search and add-to-cart.

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use foodexplorer_core::services::{filter_dishes, CartService, CatalogSections, EmptyState};
use foodexplorer_core::{Category, Dish, DishRepository, OrderLine, OrderStore};
use foodexplorer_shared::constants::{
    MSG_ADD_TO_CART_FAILED, MSG_FETCH_DISHES_FAILED, MSG_ITEM_ADDED, MSG_NO_DISHES, MSG_NO_RESULTS,
};

use crate::events::AppEvent;
use crate::notification::Notifier;

pub struct HomeViewModel {
    /// Unfiltered catalog from the last successful fetch
    pub dishes: Vec<Dish>,
    pub item_search: String,
    pub sections: CatalogSections,
    pub is_loading: bool,
    /// Items added during this session. Not re-read from storage.
    pub order_items: u64,
    pub notifications: Notifier,
    repository: Arc<dyn DishRepository>,
    cart: CartService<dyn OrderStore>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl HomeViewModel {
    pub fn new(
        repository: Arc<dyn DishRepository>,
        store: Arc<dyn OrderStore>,
        event_tx: mpsc::UnboundedSender<AppEvent>,
        toast_auto_close_ms: u64,
    ) -> Self {
        Self {
            dishes: Vec::new(),
            item_search: String::new(),
            sections: CatalogSections::default(),
            is_loading: true,
            order_items: 0,
            notifications: Notifier::new(toast_auto_close_ms),
            repository,
            cart: CartService::new(store),
            event_tx,
        }
    }

    /// Fetch the catalog once. The server-side search term is always empty;
    /// filtering happens locally in `set_search`.
    pub fn load(&mut self) {
        self.is_loading = true;

        let repository = Arc::clone(&self.repository);
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            let event = match repository.search("").await {
                Ok(dishes) => AppEvent::DishesLoaded(dishes),
                Err(e) => AppEvent::DishesLoadFailed(e.to_string()),
            };
            let _ = tx.send(event);
        });
    }

    pub fn on_dishes_loaded(&mut self, dishes: Vec<Dish>) {
        info!("Home catalog loaded with {} dishes", dishes.len());
        self.is_loading = false;
        self.dishes = dishes;
        self.sections = filter_dishes(&self.dishes, &self.item_search);
    }

    pub fn on_load_failed(&mut self, error: String) {
        error!("Failed to load home catalog: {}", error);
        self.is_loading = false;
        self.notifications.error(MSG_FETCH_DISHES_FAILED);
    }

    /// Recompute the carousels for `query` synchronously
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.item_search = query.into();
        self.sections = filter_dishes(&self.dishes, &self.item_search);
        debug!(
            "Search {:?} matched {} dishes",
            self.item_search,
            self.sections.len()
        );
    }

    pub fn carousels(&self) -> impl Iterator<Item = (Category, &[Dish])> + '_ {
        self.sections.carousels()
    }

    pub fn empty_state(&self) -> EmptyState {
        EmptyState::evaluate(&self.dishes, self.is_loading, &self.item_search, &self.sections)
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        match self.empty_state() {
            EmptyState::None => None,
            EmptyState::NoResults => Some(MSG_NO_RESULTS),
            EmptyState::NoDishesRegistered => Some(MSG_NO_DISHES),
        }
    }

    /// Line for `dish` carrying the display fields a card copies into the cart
    pub fn order_line(dish: &Dish, amount: u32) -> OrderLine {
        let line = OrderLine::new(dish.id, amount)
            .with_detail("name", dish.name.clone())
            .with_detail("price", dish.price);
        match &dish.image_url {
            Some(image) => line.with_detail("image", image.clone()),
            None => line,
        }
    }

    pub fn add_to_cart(&mut self, line: OrderLine) {
        let amount = line.amount;

        match self.cart.add(line) {
            Ok(_) => {
                self.order_items += u64::from(amount);
                self.notifications.info(MSG_ITEM_ADDED);
            }
            Err(e) => {
                warn!("Could not add to cart: {}", e);
                self.notifications.error(MSG_ADD_TO_CART_FAILED);
            }
        }
    }
}
