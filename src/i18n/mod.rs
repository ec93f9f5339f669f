//! Language identifiers and their display names.
//!
//! - `language`: opaque `LanguageToken` used as graph node keys
//! - `registry`: built-in ISO 639-1 name table and the `NameResolver` seam
//!
//! # Example
//!
//! ```rust
//! use pivot_translate::i18n::{LanguageRegistry, LanguageToken, NameResolver};
//!
//! let token = LanguageToken::new("fr");
//! assert_eq!(LanguageRegistry::get().display_name(token.as_str()), "French");
//! ```

mod language;
mod registry;

pub use language::LanguageToken;
pub use registry::{IdentityNames, LanguageConfig, LanguageRegistry, NameResolver};
