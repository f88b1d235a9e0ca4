//! Built-in Go templates, one builder per artifact kind.

pub mod controller;
pub mod entity;
pub mod gateway;
pub mod repository;
pub mod usecase;
