pub mod authority_manager;
pub mod authority_token;
pub mod error;
