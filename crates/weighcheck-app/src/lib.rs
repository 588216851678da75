//! Application service layer - use cases, config, scanning, export

pub mod app;
pub mod config;
pub mod export;
pub mod repository;
pub mod scanner;
