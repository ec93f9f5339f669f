//! Directions binary - prints every reachable direction and its model chain
//!
//! Usage:
//!   cargo run --bin directions
//!   cargo run --bin directions -- --addresses   # also resolve backend addresses
//!
//! Optional environment variables:
//! - MODELS_FILE (defaults to models.json)
//! - DUPLICATE_DIRECTIONS (reject | last-wins, defaults to reject)
//! - DEFAULT_SERVER (defaults to localhost:9000)

use anyhow::Result;
use pivot_translate::{
    backend::resolve_backend_address, catalog::ModelCatalog, config::Config,
    i18n::LanguageRegistry,
};
use tracing::info;

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pivot_translate=warn".parse()?),
        )
        .init();

    let show_addresses = std::env::args().any(|arg| arg == "--addresses");

    let config = Config::from_env()?;
    let catalog = ModelCatalog::from_file(
        &config.models_file,
        LanguageRegistry::get(),
        config.duplicate_directions,
    )?;
    let runtime = config.runtime();

    info!("Loaded {}", config.models_file.display());

    let router = catalog.router();
    let languages: Vec<&str> = router.graph().languages().iter().map(|l| l.as_str()).collect();

    println!("\n{}", "=".repeat(60));
    println!(
        "{} models, default: {}",
        catalog.get_models().len(),
        catalog.get_default_model_name()
    );
    println!("Languages: {}", languages.join(", "));
    println!("{}\n", "=".repeat(60));

    for direction in catalog.get_possible_directions() {
        let (source, target) = (direction.source.as_str(), direction.target.as_str());
        let Some(route) = router.route(source, target) else {
            continue;
        };
        let path: Vec<&str> = route.languages().iter().map(|l| l.as_str()).collect();
        let chain = catalog.get_model_list(source, target);
        let models: Vec<&str> = chain.iter().map(|model| model.id.as_str()).collect();

        println!(
            "{:<40} {:<20} {} hop(s) [{}]",
            direction.label,
            path.join("->"),
            route.hops(),
            models.join(", ")
        );

        if show_addresses {
            for model in &chain {
                match resolve_backend_address(model, &runtime) {
                    Ok(address) => println!("    {} @ {}", model.id, address),
                    Err(e) => println!("    {} @ <{}>", model.id, e),
                }
            }
        }
    }

    Ok(())
}
