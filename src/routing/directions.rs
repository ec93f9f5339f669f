//! Direction catalog: every reachable language pair, labelled for display.

use crate::i18n::{LanguageToken, NameResolver};
use crate::routing::router::Router;
use serde::Serialize;

/// A reachable (source, target) pair with a human-readable label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Direction {
    pub source: LanguageToken,
    pub target: LanguageToken,
    pub label: String,
}

/// Label every pair the router connects and sort by label.
///
/// Ordering is by label first; pairs that share a label (two tokens resolving
/// to the same name) fall back to token order so the result is stable.
pub fn derive_directions(router: &Router, names: &dyn NameResolver) -> Vec<Direction> {
    let mut directions: Vec<Direction> = router
        .reachable_pairs()
        .map(|(source, target)| Direction {
            label: format!(
                "{}->{}",
                names.display_name(source.as_str()),
                names.display_name(target.as_str())
            ),
            source: source.clone(),
            target: target.clone(),
        })
        .collect();

    directions.sort_by(|a, b| {
        a.label
            .cmp(&b.label)
            .then_with(|| a.source.cmp(&b.source))
            .then_with(|| a.target.cmp(&b.target))
    });

    directions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{IdentityNames, LanguageRegistry};
    use crate::models::{ModelConfig, ModelEntry};
    use crate::routing::graph::{CapabilityGraph, DuplicateDirectionPolicy};
    use std::sync::Arc;

    fn router(pairs: &[(&str, &str)]) -> Router {
        let entries: Vec<Arc<ModelEntry>> = pairs
            .iter()
            .map(|(source, target)| {
                let id = format!("{}-{}", source, target);
                let config = ModelConfig::new(id, *source, *target);
                Arc::new(ModelEntry::from_config(config, &IdentityNames).unwrap())
            })
            .collect();
        Router::new(CapabilityGraph::build(&entries, DuplicateDirectionPolicy::Reject).unwrap())
    }

    fn labels(directions: &[Direction]) -> Vec<&str> {
        directions.iter().map(|d| d.label.as_str()).collect()
    }

    #[test]
    fn test_directions_include_synthesized_pairs() {
        let router = router(&[("en", "fr"), ("fr", "de")]);
        let directions = derive_directions(&router, LanguageRegistry::get());
        assert_eq!(
            labels(&directions),
            vec!["English->French", "English->German", "French->German"]
        );
        assert_eq!(directions[1].source.as_str(), "en");
        assert_eq!(directions[1].target.as_str(), "de");
    }

    #[test]
    fn test_sorted_by_label_not_token() {
        // Token order would put "cs" first; label order puts "English" first.
        let czech = router(&[("cs", "en"), ("en", "cs")]);
        let directions = derive_directions(&czech, LanguageRegistry::get());
        assert_eq!(labels(&directions), vec!["Czech->English", "English->Czech"]);

        let arabic = router(&[("de", "ar"), ("ar", "de")]);
        let directions = derive_directions(&arabic, LanguageRegistry::get());
        assert_eq!(labels(&directions), vec!["Arabic->German", "German->Arabic"]);
    }

    #[test]
    fn test_unknown_tokens_use_fallback_label() {
        let directions = derive_directions(&router(&[("en", "tlh")]), LanguageRegistry::get());
        assert_eq!(labels(&directions), vec!["English->tlh"]);
    }

    #[test]
    fn test_no_self_directions() {
        let directions = derive_directions(&router(&[("en", "fr"), ("fr", "en")]), &IdentityNames);
        assert!(directions.iter().all(|d| d.source != d.target));
        assert_eq!(labels(&directions), vec!["en->fr", "fr->en"]);
    }

    #[test]
    fn test_labels_are_non_decreasing() {
        let directions = derive_directions(
            &router(&[("sv", "en"), ("en", "de"), ("de", "it"), ("it", "sv"), ("cs", "en")]),
            LanguageRegistry::get(),
        );
        assert!(directions.windows(2).all(|pair| pair[0].label <= pair[1].label));
        // every language reaches every other language of the cycle
        assert_eq!(directions.len(), 4 * 3 + 4);
    }

    #[test]
    fn test_empty_router() {
        assert!(derive_directions(&router(&[]), &IdentityNames).is_empty());
    }
}
