use anyhow::Result;
use pivot_translate::{
    catalog::ModelCatalog,
    config::Config,
    i18n::LanguageRegistry,
    server::{self, AppState},
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pivot_translate=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    info!("Loading models from {}", config.models_file.display());

    // Configuration errors stop startup here, before anything is served
    let names = LanguageRegistry::get();
    let catalog = ModelCatalog::from_file(&config.models_file, names, config.duplicate_directions)?;
    info!("Default model: {}", catalog.get_default_model_name());

    let state = Arc::new(AppState::new(catalog, &config, names));
    server::serve(state, config.port).await
}
