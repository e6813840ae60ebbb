use {
    crate::{foundry, secret::Secret},
    chain::Chain,
    std::path::PathBuf,
};

/// Assembles the deployment configuration for all supported networks and
/// prints it as JSON.
#[derive(clap::Parser)]
#[clap(name = "deploy-config")]
pub struct Arguments {
    #[clap(long, env, default_value = "warn,deploy_config=info")]
    pub log_filter: String,

    /// Output log events as JSON.
    #[clap(long, env)]
    pub log_json: bool,

    /// Path to the Foundry project file the compiler settings are read from.
    #[clap(long, env, default_value = foundry::DEFAULT_PATH)]
    pub foundry_config: PathBuf,

    /// Profile of the Foundry project file to read. Its settings are layered
    /// over the `default` profile.
    #[clap(long, default_value = foundry::DEFAULT_PROFILE)]
    pub foundry_profile: String,

    /// The private key transactions are signed with on every network.
    /// Expects a 32-byte hex encoded string.
    #[clap(long, env)]
    pub private_key: Option<Secret>,

    /// RPC endpoint of Ethereum mainnet. Passed on unchecked.
    #[clap(long, env)]
    pub ethereum_rpc: Option<Secret>,

    /// RPC endpoint of the Sepolia test network. Passed on unchecked.
    #[clap(long, env)]
    pub ethereum_sepolia_rpc: Option<Secret>,

    /// API key of the Etherscan contract verification service.
    #[clap(long, env)]
    pub etherscan_api_key: Option<Secret>,

    /// Only output the entry of this network and check that it is ready for
    /// deployments.
    #[clap(long)]
    pub network: Option<Chain>,

    /// Write the configuration to this file instead of stdout.
    #[clap(long)]
    pub output: Option<PathBuf>,
}

/// Arg types have custom `Display` impls instead of relying on `Debug` to avoid
/// accidentally printing secrets. Secret values are printed as "SECRET".
impl std::fmt::Display for Arguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self {
            log_filter,
            log_json,
            foundry_config,
            foundry_profile,
            private_key,
            ethereum_rpc,
            ethereum_sepolia_rpc,
            etherscan_api_key,
            network,
            output,
        } = self;

        writeln!(f, "log_filter: {log_filter}")?;
        writeln!(f, "log_json: {log_json}")?;
        writeln!(f, "foundry_config: {foundry_config:?}")?;
        writeln!(f, "foundry_profile: {foundry_profile}")?;
        writeln!(f, "private_key: {private_key:?}")?;
        writeln!(f, "ethereum_rpc: {ethereum_rpc:?}")?;
        writeln!(f, "ethereum_sepolia_rpc: {ethereum_sepolia_rpc:?}")?;
        writeln!(f, "etherscan_api_key: {etherscan_api_key:?}")?;
        writeln!(f, "network: {network:?}")?;
        writeln!(f, "output: {output:?}")?;
        Ok(())
    }
}
