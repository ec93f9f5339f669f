//! Model catalog: the set of configured models and the routes between them.
//!
//! A `ModelCatalog` is built once from descriptors and never mutated. Callers
//! that need to reload configuration build a fresh catalog and swap it into a
//! `SharedCatalog`; readers holding the previous snapshot keep a consistent view.

use crate::error::{Result, RoutingError};
use crate::i18n::NameResolver;
use crate::models::{load_models_file, ModelConfig, ModelEntry};
use crate::routing::{
    derive_directions, CapabilityGraph, Chain, Direction, DuplicateDirectionPolicy, Router,
};
use anyhow::Context;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, RwLock};
use tracing::{info, warn};

/// Immutable registry of models with precomputed routes.
#[derive(Debug)]
pub struct ModelCatalog {
    models: Vec<Arc<ModelEntry>>,
    by_name: HashMap<String, usize>,
    default_model: usize,
    router: Router,
    directions: Vec<Direction>,
}

impl ModelCatalog {
    /// Validate descriptors, build the capability graph and compute routes.
    ///
    /// Fails on duplicate model names, on invalid descriptors, on an empty
    /// descriptor list, and on duplicate directions when `policy` rejects them.
    pub fn build(
        configs: Vec<ModelConfig>,
        names: &dyn NameResolver,
        policy: DuplicateDirectionPolicy,
    ) -> Result<Self> {
        if configs.is_empty() {
            return Err(RoutingError::EmptyCatalog);
        }

        let models = configs
            .into_iter()
            .map(|config| ModelEntry::from_config(config, names).map(Arc::new))
            .collect::<Result<Vec<_>>>()?;

        let graph = CapabilityGraph::build(&models, policy)?;

        let by_name = models
            .iter()
            .enumerate()
            .map(|(idx, model)| (model.id.clone(), idx))
            .collect();

        let default_model = pick_default(&models);
        let router = Router::new(graph);
        let directions = derive_directions(&router, names);

        info!(
            "Loaded {} models covering {} languages, {} reachable directions",
            models.len(),
            router.graph().node_count(),
            directions.len()
        );

        Ok(Self {
            models,
            by_name,
            default_model,
            router,
            directions,
        })
    }

    /// Read a models file and build the catalog from it.
    pub fn from_file(
        path: &Path,
        names: &dyn NameResolver,
        policy: DuplicateDirectionPolicy,
    ) -> anyhow::Result<Self> {
        let configs = load_models_file(path)?;
        Self::build(configs, names, policy)
            .with_context(|| format!("Invalid model configuration in {}", path.display()))
    }

    /// Models to run, in order, to translate `source` into `target`.
    ///
    /// An empty list means the direction is unsupported.
    pub fn get_model_list(&self, source: &str, target: &str) -> Chain {
        self.router.chain(source, target)
    }

    /// All reachable directions, sorted by label.
    pub fn get_possible_directions(&self) -> &[Direction] {
        &self.directions
    }

    pub fn get_default_model_name(&self) -> &str {
        &self.models[self.default_model].id
    }

    /// Model names in configuration order.
    pub fn get_model_names(&self) -> Vec<&str> {
        self.models.iter().map(|model| model.id.as_str()).collect()
    }

    /// Models in configuration order.
    pub fn get_models(&self) -> &[Arc<ModelEntry>] {
        &self.models
    }

    /// The named model, or the default model when the name is unknown.
    pub fn get_model(&self, name: &str) -> &Arc<ModelEntry> {
        let idx = self.by_name.get(name).copied().unwrap_or(self.default_model);
        &self.models[idx]
    }

    pub fn router(&self) -> &Router {
        &self.router
    }
}

/// First model flagged `default`, else the first model.
fn pick_default(models: &[Arc<ModelEntry>]) -> usize {
    let flagged: Vec<usize> = models
        .iter()
        .enumerate()
        .filter(|(_, model)| model.is_default == Some(true))
        .map(|(idx, _)| idx)
        .collect();

    if flagged.len() > 1 {
        warn!(
            "{} models are marked default, using '{}'",
            flagged.len(),
            models[flagged[0]].id
        );
    }

    flagged.first().copied().unwrap_or(0)
}

/// Catalog handle that can be swapped atomically while readers are active.
#[derive(Debug)]
pub struct SharedCatalog {
    current: RwLock<Arc<ModelCatalog>>,
}

impl SharedCatalog {
    pub fn new(catalog: ModelCatalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    /// Snapshot of the live catalog.
    pub fn load(&self) -> Arc<ModelCatalog> {
        let guard = self.current.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&guard)
    }

    /// Publish a fully built catalog, returning the one it replaced.
    pub fn replace(&self, catalog: ModelCatalog) -> Arc<ModelCatalog> {
        let mut guard = self.current.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        std::mem::replace(&mut *guard, Arc::new(catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{IdentityNames, LanguageRegistry};

    fn config(id: &str, source: &str, target: &str) -> ModelConfig {
        ModelConfig::new(id, source, target)
    }

    fn catalog(configs: Vec<ModelConfig>) -> ModelCatalog {
        ModelCatalog::build(configs, LanguageRegistry::get(), DuplicateDirectionPolicy::Reject)
            .unwrap()
    }

    fn ids(chain: &Chain) -> Vec<&str> {
        chain.iter().map(|model| model.id.as_str()).collect()
    }

    // ==================== Build Tests ====================

    #[test]
    fn test_unique_names_build() {
        let catalog = catalog(vec![config("en-fr", "en", "fr"), config("fr-de", "fr", "de")]);
        assert_eq!(catalog.get_model_names(), vec!["en-fr", "fr-de"]);
    }

    #[test]
    fn test_duplicate_names_fail() {
        let result = ModelCatalog::build(
            vec![config("m", "en", "fr"), config("m", "fr", "de")],
            &IdentityNames,
            DuplicateDirectionPolicy::Reject,
        );
        assert_eq!(result.unwrap_err(), RoutingError::DuplicateModel("m".to_string()));
    }

    #[test]
    fn test_empty_catalog_fails() {
        let result =
            ModelCatalog::build(Vec::new(), &IdentityNames, DuplicateDirectionPolicy::Reject);
        assert_eq!(result.unwrap_err(), RoutingError::EmptyCatalog);
    }

    #[test]
    fn test_invalid_descriptor_fails() {
        let result = ModelCatalog::build(
            vec![config("en-fr", "en", "fr"), config("bad", "", "de")],
            &IdentityNames,
            DuplicateDirectionPolicy::Reject,
        );
        assert!(matches!(result, Err(RoutingError::InvalidModel { .. })));
    }

    // ==================== Routing Tests ====================

    #[test]
    fn test_pivot_scenario() {
        let catalog = catalog(vec![config("en-fr", "en", "fr"), config("fr-de", "fr", "de")]);

        assert_eq!(ids(&catalog.get_model_list("en", "de")), vec!["en-fr", "fr-de"]);
        assert!(catalog.get_model_list("de", "en").is_empty());

        let pairs: Vec<(&str, &str)> = catalog
            .get_possible_directions()
            .iter()
            .map(|d| (d.source.as_str(), d.target.as_str()))
            .collect();
        assert!(pairs.contains(&("en", "fr")));
        assert!(pairs.contains(&("fr", "de")));
        assert!(pairs.contains(&("en", "de")));
    }

    #[test]
    fn test_chain_shares_entries_with_catalog() {
        let catalog = catalog(vec![config("en-fr", "en", "fr")]);
        let chain = catalog.get_model_list("en", "fr");
        assert!(Arc::ptr_eq(&chain[0], catalog.get_model("en-fr")));
    }

    // ==================== Default Model Tests ====================

    #[test]
    fn test_default_is_first_without_flag() {
        let catalog = catalog(vec![config("en-fr", "en", "fr"), config("fr-de", "fr", "de")]);
        assert_eq!(catalog.get_default_model_name(), "en-fr");
    }

    #[test]
    fn test_default_flag_wins() {
        let mut flagged = config("fr-de", "fr", "de");
        flagged.default = Some(true);
        let catalog = catalog(vec![config("en-fr", "en", "fr"), flagged]);
        assert_eq!(catalog.get_default_model_name(), "fr-de");
    }

    #[test]
    fn test_first_of_many_flags_wins() {
        let mut first = config("fr-de", "fr", "de");
        first.default = Some(true);
        let mut second = config("de-cs", "de", "cs");
        second.default = Some(true);
        let catalog = catalog(vec![config("en-fr", "en", "fr"), first, second]);
        assert_eq!(catalog.get_default_model_name(), "fr-de");
    }

    #[test]
    fn test_explicit_false_is_not_default() {
        let mut model = config("en-fr", "en", "fr");
        model.default = Some(false);
        let catalog = catalog(vec![model, config("fr-de", "fr", "de")]);
        assert_eq!(catalog.get_default_model_name(), "en-fr");
    }

    #[test]
    fn test_get_model_falls_back_to_default() {
        let catalog = catalog(vec![config("en-fr", "en", "fr"), config("fr-de", "fr", "de")]);
        let fallback = catalog.get_model("nonexistent");
        let default = catalog.get_model(catalog.get_default_model_name());
        assert!(Arc::ptr_eq(fallback, default));
        assert_eq!(catalog.get_model("fr-de").id, "fr-de");
    }

    // ==================== Shared Catalog Tests ====================

    #[test]
    fn test_replace_swaps_snapshot() {
        let shared = SharedCatalog::new(catalog(vec![config("en-fr", "en", "fr")]));
        let before = shared.load();

        let previous = shared.replace(catalog(vec![config("en-de", "en", "de")]));

        assert!(Arc::ptr_eq(&before, &previous));
        assert_eq!(before.get_model_names(), vec!["en-fr"]);
        assert_eq!(shared.load().get_model_names(), vec!["en-de"]);
    }

    #[test]
    fn test_concurrent_readers() {
        let shared = Arc::new(SharedCatalog::new(catalog(vec![
            config("en-fr", "en", "fr"),
            config("fr-de", "fr", "de"),
        ])));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = Arc::clone(&shared);
                std::thread::spawn(move || shared.load().get_model_list("en", "de").len())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 2);
        }
    }
}
