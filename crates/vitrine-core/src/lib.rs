//! # vitrine-core
//!
//! Core types, configuration, translation resolution, and error handling
//! for the Vitrine content engine.

pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod partners;
