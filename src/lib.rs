//! Psyche Profile - Psychometric Scoring and Profile Synthesis
//!
//! This crate scores standardized psychometric instruments, classifies the
//! results into published levels or quadrants, tracks resumable drafts and
//! merges completed instruments into a per-user profile.
//!
//! # Layers
//!
//! - `domain` - Instruments, scoring, drafts and the profile; pure and synchronous
//! - `ports` - The key-value persistence contract
//! - `adapters` - In-memory and file-backed stores
//! - `application` - Command and query handlers exposed to the UI
//! - `config` - Environment configuration and tracing setup

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
