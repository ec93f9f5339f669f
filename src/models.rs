//! Model descriptors and registry entries.
//!
//! A `ModelConfig` is the typed form of one entry in the models file. Building
//! a `ModelEntry` from it validates the required fields and fixes the model's
//! display title; entries are immutable afterwards and shared via `Arc`.

use crate::error::{Result, RoutingError};
use crate::i18n::{LanguageToken, NameResolver};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One model descriptor as declared in the models file.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    /// Unique model identifier
    pub model: String,

    pub source: LanguageToken,
    pub target: LanguageToken,

    /// Marks the model served when no (or an unknown) model name is requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,

    /// Free-text domain such as "medical" or "legal"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Label overriding the generated "Source->Target" text in the title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    /// Backend address template, e.g. "{TRANSLATION_HOST}:9000"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,

    /// Name of the problem/model hosted by the translation backend
    pub problem: String,
}

impl ModelConfig {
    /// Minimal descriptor, handy for tests and programmatic catalogs.
    pub fn new(
        model: impl Into<String>,
        source: impl Into<LanguageToken>,
        target: impl Into<LanguageToken>,
    ) -> Self {
        let model = model.into();
        Self {
            problem: model.clone(),
            model,
            source: source.into(),
            target: target.into(),
            default: None,
            domain: None,
            display: None,
            server: None,
        }
    }
}

/// Opaque reference to whatever performs the translation for a model.
///
/// The router never looks inside; `backend::resolve_backend_address` does
/// when a caller is about to invoke the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendRef {
    pub problem: String,
    pub server: Option<String>,
}

/// A validated, directly capable translation model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelEntry {
    pub id: String,
    pub source: LanguageToken,
    pub target: LanguageToken,
    pub is_default: Option<bool>,
    pub domain: Option<String>,
    pub display: Option<String>,
    pub title: String,
    pub backend: BackendRef,
}

impl ModelEntry {
    /// Validate a descriptor and compute its title.
    pub fn from_config(config: ModelConfig, names: &dyn NameResolver) -> Result<Self> {
        let invalid = |reason: &str| RoutingError::InvalidModel {
            model: config.model.clone(),
            reason: reason.to_string(),
        };

        if config.model.trim().is_empty() {
            return Err(invalid("model name is empty"));
        }
        if config.source.is_empty() {
            return Err(invalid("source language is empty"));
        }
        if config.target.is_empty() {
            return Err(invalid("target language is empty"));
        }
        if config.problem.trim().is_empty() {
            return Err(invalid("problem is empty"));
        }

        let title = model_title(&config, names);

        Ok(Self {
            id: config.model,
            source: config.source,
            target: config.target,
            is_default: config.default,
            domain: config.domain,
            display: config.display,
            title,
            backend: BackendRef {
                problem: config.problem,
                server: config.server,
            },
        })
    }

    /// Summary of the model for presentation.
    pub fn info(&self) -> ModelInfo {
        ModelInfo {
            model: self.id.clone(),
            source: self.source.clone(),
            target: self.target.clone(),
            title: self.title.clone(),
            default: self.is_default,
            domain: self.domain.clone(),
        }
    }
}

/// Build "{id} ({display}{ (domain)})".
fn model_title(config: &ModelConfig, names: &dyn NameResolver) -> String {
    let display = match &config.display {
        Some(display) => display.clone(),
        None => format!(
            "{}->{}",
            names.display_name(config.source.as_str()),
            names.display_name(config.target.as_str())
        ),
    };
    let domain = match config.domain.as_deref() {
        Some(domain) if !domain.is_empty() => format!(" ({})", domain),
        _ => String::new(),
    };
    format!("{} ({}{})", config.model, display, domain)
}

/// Public view of a model, as returned by the serving layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub model: String,
    pub source: LanguageToken,
    pub target: LanguageToken,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

/// Parse a JSON array of model descriptors.
pub fn parse_models(json: &str) -> anyhow::Result<Vec<ModelConfig>> {
    serde_json::from_str(json).context("Failed to parse model descriptors")
}

/// Read and parse the models file.
pub fn load_models_file(path: &Path) -> anyhow::Result<Vec<ModelConfig>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read models file {}", path.display()))?;
    parse_models(&contents).with_context(|| format!("Invalid models file {}", path.display()))
}
