//! Application-wide constants

/// Local storage key holding the JSON-encoded order.
pub const ORDER_STORAGE_KEY: &str = "@foodexplorer:order";

pub const CATEGORY_MEALS: &str = "Refeições";
pub const CATEGORY_DESSERTS: &str = "Sobremesas";
pub const CATEGORY_DRINKS: &str = "Bebidas";

pub const DISHES_PATH: &str = "/dishes";
pub const ITEM_SEARCH_PARAM: &str = "itemSearch";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3333";
pub const DEFAULT_API_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_STORAGE_PATH: &str = "data/local_storage.json";
pub const DEFAULT_NAVIGATE_DELAY_MS: u64 = 2000;
pub const DEFAULT_TOAST_AUTO_CLOSE_MS: u64 = 1500;

// User-facing messages
pub const MSG_FETCH_DISHES_FAILED: &str =
    "Não foi possível buscar os pratos. Por favor, tente novamente.";
pub const MSG_FETCH_DISHES_FAILED_SEARCH: &str =
    "Não foi possível buscar os pratos. Talvez a busca não funcione corretamente.";
pub const MSG_ITEM_ADDED: &str = "Item adicionado ao pedido.";
pub const MSG_ADD_TO_CART_FAILED: &str =
    "Não foi possível adicionar o item ao pedido. Por favor, tente novamente.";
pub const MSG_BLANK_INGREDIENT: &str = "Digite um ingrediente antes de adicionar.";
pub const MSG_INVALID_PRICE: &str = "Digite o preço num formato válido. Ex: 12,99";
pub const MSG_INVALID_IMAGE: &str = "Selecione um arquivo de imagem.";
pub const MSG_DISH_CREATED: &str = "Prato criado com sucesso!";
pub const MSG_CREATE_DISH_FAILED: &str =
    "Não foi possível criar o prato. Por favor, tente novamente.";
pub const MSG_NO_RESULTS: &str = "Nenhum resultado encontrado!";
pub const MSG_NO_DISHES: &str = "Nenhum prato cadastrado!";
