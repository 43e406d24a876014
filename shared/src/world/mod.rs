pub mod delegation;
pub mod replicate;
