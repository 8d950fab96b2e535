//! Application service layer - comparison use case, config, report tables, export

pub mod app;
pub mod config;
pub mod export;
pub mod report;
pub mod repository;
