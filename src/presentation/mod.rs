//! Presentation layer: view models and template rendering.

pub mod views;
