use crate::error::{Result, RoutingError};
use crate::models::ModelEntry;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Runtime settings used to turn backend templates into addresses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Address used by models that declare no `server` template
    pub default_server: String,
    /// Values substituted for `{NAME}` placeholders
    pub values: HashMap<String, String>,
}

impl RuntimeConfig {
    pub fn new(default_server: impl Into<String>) -> Self {
        Self {
            default_server: default_server.into(),
            values: HashMap::new(),
        }
    }

    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Default server plus every process environment variable as a value.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn from_env(default_server: impl Into<String>) -> Self {
        let values = std::env::vars_os()
            .filter_map(|(key, value)| {
                Some((key.into_string().ok()?, value.into_string().ok()?))
            })
            .collect();

        Self {
            default_server: default_server.into(),
            values,
        }
    }
}

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is valid")
    })
}

/// Concrete network address of the backend serving `model`.
///
/// Every `{NAME}` in the model's server template is replaced with the runtime
/// value for `NAME`; a missing value is an error. Models without a template
/// use the runtime's default server.
pub fn resolve_backend_address(model: &ModelEntry, runtime: &RuntimeConfig) -> Result<String> {
    let Some(template) = &model.backend.server else {
        return Ok(runtime.default_server.clone());
    };

    let mut address = String::with_capacity(template.len());
    let mut last = 0;
    for captures in placeholder_pattern().captures_iter(template) {
        let (Some(whole), Some(key)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        let value = runtime
            .values
            .get(key.as_str())
            .ok_or_else(|| RoutingError::UnresolvedPlaceholder {
                model: model.id.clone(),
                key: key.as_str().to_string(),
            })?;
        address.push_str(&template[last..whole.start()]);
        address.push_str(value);
        last = whole.end();
    }
    address.push_str(&template[last..]);

    Ok(address)
}
