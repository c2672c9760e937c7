//! # ic-base
//!
//! Pure structural atoms shared across the interaction-calculus workspace:
//! [`Span`] for source locations and [`SpannedError`]/[`Result`] for errors
//! that carry one.
//!
//! This crate has no knowledge of IC surface syntax or the term model. It
//! provides only generic, reusable infrastructure that the `ic-kernel` and
//! `ic-syntax` crates build upon.

pub mod error;
pub mod span;

pub use error::{Result, SpannedError};
pub use span::Span;
