//! # cleaner-core
//!
//! Core types, traits, and error definitions for the text cleaner pipelines.
//!
//! This crate provides the foundational abstractions shared by the cleaners
//! and the front ends that call them:
//!
//! - Language and pipeline selectors (`Lang`, `CleanerKind`)
//! - The cleaned-text result type (`NormText`)
//! - The `TextCleaner` trait
//! - Unified error handling via `NormError`
//! - Configuration structures

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use config::{CleanerConfig, LoggingConfig};
pub use error::{NormError, NormResult};
pub use traits::TextCleaner;
pub use types::{CleanerKind, Lang, NormText};
