//! BuildCost Estimator library
//!
//! This module exposes the core functionality for use in tests
//! and as a library.

pub mod core;
pub mod estimator;
pub mod format;
pub mod i18n;
pub mod pricing;
pub mod report;
