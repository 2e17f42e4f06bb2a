pub mod auth;
pub mod common;
pub mod content;
pub mod dashboard;
pub mod order;
pub mod product;
pub mod profile;
