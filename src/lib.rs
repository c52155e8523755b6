pub mod config;
pub mod core;
pub mod terminal;
pub mod user_config;
pub mod vi;
