//! Pivot translation routing.
//!
//! Each configured model translates one language pair directly. The catalog
//! links them into a directed graph and finds, for any requested pair, the
//! shortest chain of models that realizes the translation.

pub mod backend;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod metrics;
pub mod models;
pub mod routing;
pub mod server;
