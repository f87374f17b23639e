use anyhow::{Context, Result};
use folio::{catalog::Catalog, cli::args_from_env, config::Config, logging::init_tracing, server};

#[tokio::main]
async fn main() -> Result<()> {
    let args = args_from_env()?;
    let config = Config::load(&args.config_path)
        .with_context(|| format!("failed to load config from {}", args.config_path.display()))?;
    let logging_guard =
        init_tracing(&config.logging).context("failed to initialize logging")?;

    let catalog = Catalog::load(&config.dataset.path).with_context(|| {
        format!(
            "failed to load dataset from {}",
            config.dataset.path.display()
        )
    })?;

    if args.check_only {
        eprintln!(
            "folio check passed: {} items, dataset {}, run {}",
            catalog.all_items().len(),
            catalog.fingerprint(),
            logging_guard.run_id()
        );
        return Ok(());
    }

    server::run(config, catalog).await
}
