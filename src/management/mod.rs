mod auth;
mod saved;

pub use auth::SAFETY_MARGIN_SECS;
pub use auth::TokenManager;
pub use saved::SavedSearchSet;
