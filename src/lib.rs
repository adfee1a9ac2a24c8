pub mod api;
pub mod backends;
pub mod config;
pub mod observability;
pub mod resolver;
