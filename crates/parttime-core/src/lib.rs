//! # parttime-core
//!
//! Core types and error definitions for parttime.
//!
//! This crate provides the building blocks shared across the workspace: type
//! aliases, the error enum with its `ensure!` macro, and the
//! process-wide `Settings` holding the evaluation date.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Process-wide settings (evaluation date).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the workspace.
pub type Real = f64;

/// A percentage expressed in per cent (e.g. 20.0 = 20 %).
pub type Percent = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{ScopedEvaluationDate, Settings};
