//! Domain layer containing scoring, classification and profile logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `instrument` - Instrument definitions, classification strategies and the registry
//! - `scoring` - Item scoring, normalization and classification
//! - `draft` - In-progress answer sets and their lifecycle
//! - `profile` - The user profile and cross-instrument synthesis

pub mod draft;
pub mod foundation;
pub mod instrument;
pub mod profile;
pub mod scoring;
