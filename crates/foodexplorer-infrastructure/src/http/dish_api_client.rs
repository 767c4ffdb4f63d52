// ============================================================================
// Food Explorer Infrastructure - Dish API Client
// File: crates/foodexplorer-infrastructure/src/http/dish_api_client.rs
// ============================================================================

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::{debug, error, info};

use foodexplorer_core::domain::{Dish, NewDish};
use foodexplorer_core::error::DomainError;
use foodexplorer_core::repositories::DishRepository;
use foodexplorer_shared::config::ApiSettings;
use foodexplorer_shared::constants::{DISHES_PATH, ITEM_SEARCH_PARAM};

use crate::error::InfraError;

/// reqwest-backed `DishRepository` talking to the Food Explorer backend
#[derive(Clone)]
pub struct DishApiClient {
    client: Client,
    base_url: String,
}

impl DishApiClient {
    pub fn new(base_url: impl Into<String>, timeout_seconds: u64) -> Result<Self, InfraError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| {
                error!("Failed to build HTTP client: {}", e);
                InfraError::from(e)
            })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_settings(settings: &ApiSettings) -> Result<Self, InfraError> {
        Self::new(settings.base_url.clone(), settings.timeout_seconds)
    }

    fn dishes_url(&self, item_search: Option<&str>) -> Result<Url, InfraError> {
        let raw = format!("{}{}", self.base_url, DISHES_PATH);
        let url = match item_search {
            Some(query) => Url::parse_with_params(&raw, &[(ITEM_SEARCH_PARAM, query)]),
            None => Url::parse(&raw),
        };
        url.map_err(|e| InfraError::InvalidUrl(format!("{}: {}", raw, e)))
    }

    async fn fetch_dishes(&self, url: Url) -> Result<Vec<Dish>, InfraError> {
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(InfraError::UnexpectedStatus { status, body });
        }

        Ok(response.json::<Vec<Dish>>().await?)
    }

    async fn post_dish(&self, dish: &NewDish, ingredients_json: String) -> Result<(), InfraError> {
        let url = self.dishes_url(None)?;

        let mut form = Form::new();
        if let Some(image) = &dish.image {
            let part = Part::bytes(image.bytes.to_vec())
                .file_name(image.file_name.clone())
                .mime_str(&image.content_type)?;
            form = form.part("image", part);
        }

        let form = form
            .text("name", dish.name.clone())
            .text("category", dish.category.clone())
            .text("ingredients", ingredients_json)
            .text("price", dish.price.to_form_value())
            .text("description", dish.description.clone());

        debug!("POST {} (image attached: {})", url, dish.image.is_some());

        let response = self.client.post(url).multipart(form).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(InfraError::UnexpectedStatus { status, body });
        }

        Ok(())
    }
}

#[async_trait]
impl DishRepository for DishApiClient {
    async fn list(&self) -> Result<Vec<Dish>, DomainError> {
        let url = self.dishes_url(None)?;
        let dishes = self.fetch_dishes(url).await.map_err(|e| {
            error!("Failed to fetch dishes: {}", e);
            DomainError::from(e)
        })?;

        info!("Fetched {} dishes", dishes.len());
        Ok(dishes)
    }

    async fn search(&self, item_search: &str) -> Result<Vec<Dish>, DomainError> {
        let url = self.dishes_url(Some(item_search))?;
        let dishes = self.fetch_dishes(url).await.map_err(|e| {
            error!("Failed to search dishes for {:?}: {}", item_search, e);
            DomainError::from(e)
        })?;

        info!("Fetched {} dishes for search {:?}", dishes.len(), item_search);
        Ok(dishes)
    }

    async fn create(&self, dish: &NewDish) -> Result<(), DomainError> {
        info!("Creating dish: {}", dish.name);

        let ingredients_json = dish.ingredients_json()?;
        self.post_dish(dish, ingredients_json).await.map_err(|e| {
            error!("Failed to create dish {}: {}", dish.name, e);
            DomainError::from(e)
        })?;

        info!("Dish created successfully: {}", dish.name);
        Ok(())
    }
}
