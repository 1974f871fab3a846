//! Shared fixtures and assertions for integration tests.

#![allow(dead_code)]

pub mod formula_assertions;
pub mod image_fixtures;
