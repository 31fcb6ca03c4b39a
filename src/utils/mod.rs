pub mod error;
pub mod logger;
pub mod markdown;
pub mod validation;
