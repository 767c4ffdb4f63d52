//! AddDish ViewModel
//!
//! Draft editing plus the submission state machine:
//! `Idle -> Submitting -> Succeeded -> NavigatedAway`, with a failed
//! submission falling back to `Idle` and the draft untouched.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use foodexplorer_core::{Category, Dish, DishDraft, DishRepository, DomainError, ImageAttachment};
use foodexplorer_shared::constants::{
    MSG_BLANK_INGREDIENT, MSG_CREATE_DISH_FAILED, MSG_DISH_CREATED, MSG_FETCH_DISHES_FAILED_SEARCH,
    MSG_INVALID_IMAGE, MSG_INVALID_PRICE,
};

use crate::events::{AppEvent, FormGeneration};
use crate::navigation::Route;
use crate::notification::Notifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Succeeded,
    NavigatedAway,
}

pub struct AddDishViewModel {
    pub draft: DishDraft,
    /// Catalog for the header search box
    pub dishes: Vec<Dish>,
    pub state: SubmissionState,
    pub notifications: Notifier,
    generation: FormGeneration,
    repository: Arc<dyn DishRepository>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    navigate_delay: Duration,
}

impl AddDishViewModel {
    pub fn new(
        generation: FormGeneration,
        repository: Arc<dyn DishRepository>,
        event_tx: mpsc::UnboundedSender<AppEvent>,
        navigate_delay_ms: u64,
        toast_auto_close_ms: u64,
    ) -> Self {
        Self {
            draft: DishDraft::new(),
            dishes: Vec::new(),
            state: SubmissionState::Idle,
            notifications: Notifier::new(toast_auto_close_ms),
            generation,
            repository,
            event_tx,
            navigate_delay: Duration::from_millis(navigate_delay_ms),
        }
    }

    /// Values for the category select, the empty "select an option" first
    pub fn category_options() -> [&'static str; 4] {
        [
            "",
            Category::Meals.as_str(),
            Category::Desserts.as_str(),
            Category::Drinks.as_str(),
        ]
    }

    pub fn generation(&self) -> FormGeneration {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn is_submittable(&self) -> bool {
        self.draft.is_submittable()
    }

    // ------------------------------------------------------------------
    // Header search catalog
    // ------------------------------------------------------------------

    pub fn load_search_catalog(&self) {
        let repository = Arc::clone(&self.repository);
        let tx = self.event_tx.clone();
        let generation = self.generation;

        tokio::spawn(async move {
            let event = match repository.list().await {
                Ok(dishes) => AppEvent::SearchCatalogLoaded { generation, dishes },
                Err(e) => AppEvent::SearchCatalogFailed {
                    generation,
                    error: e.to_string(),
                },
            };
            let _ = tx.send(event);
        });
    }

    pub fn on_search_catalog_loaded(&mut self, dishes: Vec<Dish>) {
        debug!("Search catalog loaded with {} dishes", dishes.len());
        self.dishes = dishes;
    }

    pub fn on_search_catalog_failed(&mut self, error: String) {
        error!("Failed to load search catalog: {}", error);
        self.notifications.warning(MSG_FETCH_DISHES_FAILED_SEARCH);
    }

    // ------------------------------------------------------------------
    // Draft editing
    // ------------------------------------------------------------------

    pub fn select_image(&mut self, attachment: ImageAttachment) {
        if let Err(e) = self.draft.select_image(attachment) {
            warn!("Rejected image: {}", e);
            self.notifications.warning(MSG_INVALID_IMAGE);
        }
    }

    pub fn remove_image(&mut self) {
        self.draft.remove_image();
    }

    /// Commit the pending ingredient input
    pub fn add_ingredient(&mut self) {
        if let Err(DomainError::BlankIngredient) = self.draft.add_pending_ingredient() {
            self.notifications.warning(MSG_BLANK_INGREDIENT);
        }
    }

    pub fn remove_ingredient(&mut self, value: &str) {
        let removed = self.draft.remove_ingredient(value);
        debug!("Removed {} ingredient entries equal to {:?}", removed, value);
    }

    // ------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------

    /// Start the upload. Returns `false` when nothing was sent.
    pub fn submit(&mut self) -> bool {
        if self.state != SubmissionState::Idle {
            debug!("Submit ignored in state {:?}", self.state);
            return false;
        }

        let dish = match self.draft.to_new_dish() {
            Ok(dish) => dish,
            Err(DomainError::InvalidPrice(price)) => {
                warn!("Rejected price {:?}", price);
                self.notifications.warning(MSG_INVALID_PRICE);
                return false;
            }
            Err(e) => {
                warn!("Draft not submittable: {}", e);
                return false;
            }
        };

        self.state = SubmissionState::Submitting;
        info!("Submitting dish {}", dish.name);

        let repository = Arc::clone(&self.repository);
        let tx = self.event_tx.clone();
        let generation = self.generation;

        tokio::spawn(async move {
            let event = match repository.create(&dish).await {
                Ok(()) => AppEvent::DishCreated { generation },
                Err(e) => AppEvent::DishCreateFailed {
                    generation,
                    error: e.to_string(),
                },
            };
            let _ = tx.send(event);
        });

        true
    }

    pub fn on_dish_created(&mut self) {
        info!("Dish created, returning home in {:?}", self.navigate_delay);
        self.state = SubmissionState::Succeeded;
        self.notifications.info(MSG_DISH_CREATED);

        let tx = self.event_tx.clone();
        let delay = self.navigate_delay;
        let generation = self.generation;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(AppEvent::Navigate {
                generation,
                route: Route::Home,
            });
        });
    }

    pub fn on_dish_create_failed(&mut self, error: String) {
        error!("Failed to create dish: {}", error);
        self.state = SubmissionState::Idle;
        self.notifications.error(MSG_CREATE_DISH_FAILED);
    }

    /// Leaving the page discards the draft
    pub fn on_navigated_away(&mut self) {
        self.state = SubmissionState::NavigatedAway;
        self.draft = DishDraft::new();
    }
}
