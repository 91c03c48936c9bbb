

pub mod config;
pub mod error;

pub use config::StorefrontConfig;
pub use error::{Result, StorefrontError};
