//! Application services - orchestrate use cases.

pub mod generate_service;

pub use generate_service::GenerateService;
