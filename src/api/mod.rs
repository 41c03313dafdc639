mod auth;
pub mod client;
mod data;
pub mod mock;
pub mod types;

pub use auth::{validate_registration, REDIRECT_DELAY_MS, REGISTER_TOKEN_FALLBACK, RESET_DELAY_MS};
pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
