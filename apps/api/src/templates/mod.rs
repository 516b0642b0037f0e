pub mod catalog;
pub mod export;
pub mod handlers;
pub mod render;
