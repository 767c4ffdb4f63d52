//! Root Application
//!
//! Owns the view models and the event channel. A presentation layer calls
//! `process_events` once per frame (or awaits `next_event`) and renders the
//! page for `route`.

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use foodexplorer_core::services::CartService;
use foodexplorer_core::{DishRepository, DomainError, OrderStore};
use foodexplorer_infrastructure::{DishApiClient, JsonFileOrderStore};
use foodexplorer_shared::telemetry::init_telemetry;
use foodexplorer_shared::AppConfig;

use crate::events::{AppEvent, FormGeneration};
use crate::navigation::Route;
use crate::viewmodel::{AddDishViewModel, HomeViewModel};

pub struct App {
    pub route: Route,
    pub home_vm: HomeViewModel,
    pub add_dish_vm: AddDishViewModel,
    /// Bumped every time a fresh AddDish form is opened
    add_dish_generation: FormGeneration,
    config: AppConfig,
    repository: Arc<dyn DishRepository>,
    store: Arc<dyn OrderStore>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl App {
    /// Load configuration, install logging and wire the real adapters
    pub fn bootstrap() -> anyhow::Result<Self> {
        let config = AppConfig::load()?;
        init_telemetry(&config.logging)?;

        info!(
            "Starting {} ({}) against {}",
            config.app.name, config.app.env, config.api.base_url
        );

        let repository: Arc<dyn DishRepository> = Arc::new(DishApiClient::from_settings(&config.api)?);
        let store: Arc<dyn OrderStore> = Arc::new(JsonFileOrderStore::from_settings(&config.storage));

        Ok(Self::with_ports(config, repository, store))
    }

    pub fn with_ports(
        config: AppConfig,
        repository: Arc<dyn DishRepository>,
        store: Arc<dyn OrderStore>,
    ) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        Self {
            route: Route::Home,
            home_vm: HomeViewModel::new(
                Arc::clone(&repository),
                Arc::clone(&store),
                event_tx.clone(),
                config.ui.toast_auto_close_ms,
            ),
            add_dish_vm: Self::new_add_dish_vm(0, &config, &repository, &event_tx),
            add_dish_generation: 0,
            config,
            repository,
            store,
            event_tx,
            event_rx,
        }
    }

    fn new_add_dish_vm(
        generation: FormGeneration,
        config: &AppConfig,
        repository: &Arc<dyn DishRepository>,
        event_tx: &mpsc::UnboundedSender<AppEvent>,
    ) -> AddDishViewModel {
        AddDishViewModel::new(
            generation,
            Arc::clone(repository),
            event_tx.clone(),
            config.ui.navigate_delay_ms,
            config.ui.toast_auto_close_ms,
        )
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Make sure an order exists in storage, then open the home page
    pub fn start(&mut self) -> Result<(), DomainError> {
        CartService::new(Arc::clone(&self.store)).initialize()?;
        self.navigate(Route::Home);
        Ok(())
    }

    pub fn navigate(&mut self, route: Route) {
        if self.route == Route::AddDish && route != Route::AddDish {
            self.add_dish_vm.on_navigated_away();
        }

        info!("Navigating to {}", route);
        self.route = route;

        match route {
            Route::Home => self.home_vm.load(),
            Route::AddDish => {
                self.add_dish_generation += 1;
                self.add_dish_vm = Self::new_add_dish_vm(
                    self.add_dish_generation,
                    &self.config,
                    &self.repository,
                    &self.event_tx,
                );
                self.add_dish_vm.load_search_catalog();
            }
        }
    }

    /// Apply every event already queued. Returns how many were handled.
    pub fn process_events(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
            handled += 1;
        }
        handled
    }

    /// Wait for the next event and apply it
    pub async fn next_event(&mut self) -> bool {
        match self.event_rx.recv().await {
            Some(event) => {
                self.handle_event(event);
                true
            }
            None => false,
        }
    }

    /// AddDish results only apply to the form that is open right now
    fn is_current_form(&self, generation: FormGeneration) -> bool {
        let current = self.route == Route::AddDish && generation == self.add_dish_vm.generation();
        if !current {
            debug!(
                "Dropping result from AddDish form {} (open form {}, route {})",
                generation,
                self.add_dish_vm.generation(),
                self.route
            );
        }
        current
    }

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::DishesLoaded(dishes) => self.home_vm.on_dishes_loaded(dishes),
            AppEvent::DishesLoadFailed(msg) => self.home_vm.on_load_failed(msg),
            AppEvent::SearchCatalogLoaded { generation, dishes } => {
                if self.is_current_form(generation) {
                    self.add_dish_vm.on_search_catalog_loaded(dishes);
                }
            }
            AppEvent::SearchCatalogFailed { generation, error } => {
                if self.is_current_form(generation) {
                    self.add_dish_vm.on_search_catalog_failed(error);
                }
            }
            AppEvent::DishCreated { generation } => {
                if self.is_current_form(generation) {
                    self.add_dish_vm.on_dish_created();
                }
            }
            AppEvent::DishCreateFailed { generation, error } => {
                if self.is_current_form(generation) {
                    self.add_dish_vm.on_dish_create_failed(error);
                }
            }
            AppEvent::Navigate { generation, route } => {
                if !self.is_current_form(generation) {
                    return;
                }
                if self.route == route {
                    warn!("Already on {}", route);
                    return;
                }
                self.navigate(route);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{catalog, MockDishRepo};
    use crate::viewmodel::SubmissionState;
    use foodexplorer_infrastructure::MemoryOrderStore;
    use foodexplorer_shared::constants::ORDER_STORAGE_KEY;

    fn config() -> AppConfig {
        let mut config = AppConfig::from_defaults().unwrap();
        config.ui.navigate_delay_ms = 10;
        config
    }

    #[tokio::test]
    async fn test_start_initializes_order_and_loads_home() {
        let mut repo = MockDishRepo::new();
        repo.expect_search().times(1).returning(|_| Ok(catalog()));
        let store = Arc::new(MemoryOrderStore::new());

        let mut app = App::with_ports(config(), Arc::new(repo), store.clone());
        app.start().unwrap();
        assert!(store.get(ORDER_STORAGE_KEY).unwrap().is_some());

        assert!(app.next_event().await);
        assert_eq!(app.home_vm.sections.len(), 3);
        assert_eq!(app.process_events(), 0);
    }

    #[tokio::test]
    async fn test_create_dish_returns_home() {
        let mut repo = MockDishRepo::new();
        repo.expect_search().times(2).returning(|_| Ok(catalog()));
        repo.expect_list().times(1).returning(|| Ok(catalog()));
        repo.expect_create().times(1).returning(|_| Ok(()));

        let mut app = App::with_ports(config(), Arc::new(repo), Arc::new(MemoryOrderStore::new()));
        app.start().unwrap();
        assert!(app.next_event().await);

        app.navigate(Route::AddDish);
        assert!(app.next_event().await);
        assert_eq!(app.add_dish_vm.dishes.len(), 3);

        let vm = &mut app.add_dish_vm;
        vm.draft.set_name("Prugna Pie");
        vm.draft.set_category("Sobremesas");
        vm.draft.set_pending_ingredient("ameixa");
        vm.add_ingredient();
        vm.draft.set_price("79,97");
        vm.draft.set_description("Torta de ameixa.");
        assert!(vm.submit());

        // DishCreated, then the delayed Navigate(Home)
        assert!(app.next_event().await);
        assert_eq!(app.add_dish_vm.state, SubmissionState::Succeeded);
        assert!(app.next_event().await);
        assert_eq!(app.route, Route::Home);
        assert_eq!(app.add_dish_vm.state, SubmissionState::NavigatedAway);

        // Home reloads its catalog on arrival
        assert!(app.next_event().await);
        assert!(!app.home_vm.is_loading);
    }

    #[tokio::test]
    async fn test_late_upload_result_skips_reopened_form() {
        let mut repo = MockDishRepo::new();
        repo.expect_search().times(2).returning(|_| Ok(catalog()));
        repo.expect_list().times(2).returning(|| Ok(catalog()));
        repo.expect_create().times(1).returning(|_| Ok(()));

        let mut app = App::with_ports(config(), Arc::new(repo), Arc::new(MemoryOrderStore::new()));
        app.start().unwrap();
        assert!(app.next_event().await);

        app.navigate(Route::AddDish);
        assert!(app.next_event().await);
        let vm = &mut app.add_dish_vm;
        vm.draft.set_name("Prugna Pie");
        vm.draft.set_category("Sobremesas");
        vm.draft.set_pending_ingredient("ameixa");
        vm.add_ingredient();
        vm.draft.set_price("79,97");
        vm.draft.set_description("Torta de ameixa.");
        assert!(vm.submit());

        // Leave before the upload result is applied, then open a new form
        app.navigate(Route::Home);
        app.navigate(Route::AddDish);
        app.add_dish_vm.draft.set_name("Novo prato");

        // DishCreated for the old form, Home catalog, new form's search catalog
        for _ in 0..3 {
            assert!(app.next_event().await);
        }
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        assert_eq!(app.process_events(), 0);

        assert_eq!(app.route, Route::AddDish);
        assert_eq!(app.add_dish_vm.state, SubmissionState::Idle);
        assert_eq!(app.add_dish_vm.draft.name(), "Novo prato");
        assert_eq!(app.add_dish_vm.dishes.len(), 3);
    }
}
