//! Application services and business logic orchestration
//!
//! This module contains application services that coordinate
//! domain logic and infrastructure components.

pub mod app;
pub mod progression_service;

pub use app::Application;
pub use progression_service::ProgressionService;
