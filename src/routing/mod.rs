//! Multi-hop routing between languages.
//!
//! - `graph`: capability graph built from model entries
//! - `router`: shortest routes between every pair of languages
//! - `directions`: sorted, labelled list of reachable pairs

mod directions;
mod graph;
mod router;

pub use directions::{derive_directions, Direction};
pub use graph::{CapabilityGraph, DuplicateDirectionPolicy};
pub use router::{Chain, Route, Router};
