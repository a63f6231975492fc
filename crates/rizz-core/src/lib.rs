pub mod cache;
pub mod languages;
pub mod service;
pub mod state;
pub mod validate;

pub use cache::TranslationCache;
pub use service::TranslationService;
pub use state::AppState;
pub use validate::ValidationError;
