use {
    crate::{Arguments, Configuration},
    anyhow::{Context, Result},
    clap::Parser,
};

pub fn start(args: impl IntoIterator<Item = String>) -> Result<()> {
    // Variables already set in the environment take precedence over `.env`.
    let dotenv = dotenvy::dotenv();
    let args = Arguments::parse_from(args);
    observe::tracing::initialize(&observe::Config::new(&args.log_filter, args.log_json));
    match dotenv {
        Ok(path) => tracing::debug!(?path, "loaded environment file"),
        Err(err) if err.not_found() => (),
        Err(err) => tracing::warn!(?err, "failed to load environment file"),
    }
    run(args)
}

/// Assembles the configuration and writes it out as JSON. Unlike [`start`]
/// this does not read `.env`.
pub fn run(args: Arguments) -> Result<()> {
    tracing::info!("running deploy-config with validated arguments:\n{}", args);

    let mut config =
        Configuration::load(&args).context("failed to load deployment configuration")?;
    if let Some(chain) = args.network {
        let deployer = config.deployer(chain)?;
        tracing::info!(
            %chain,
            label = chain.label(),
            chain_id = chain.chain_id(),
            %deployer,
            "network ready for deployment"
        );
        config = config.only(chain);
    }

    let json = serde_json::to_string_pretty(&config)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, json).with_context(|| format!("failed to write {path:?}"))?;
            tracing::info!(?path, "wrote deployment configuration");
        }
        None => println!("{json}"),
    }
    Ok(())
}
