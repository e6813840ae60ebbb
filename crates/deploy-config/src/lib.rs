//! Assembles the network, compiler and verification settings contracts are
//! deployed with.
//!
//! The configuration is built once from the process environment and the
//! Foundry project file and then handed to the deployment toolchain as JSON.

pub mod arguments;
pub mod compiler;
pub mod foundry;
pub mod network;
pub mod run;
pub mod secret;

pub use {
    arguments::Arguments,
    compiler::CompilerProfile,
    network::NetworkProfile,
    run::{run, start},
    secret::Secret,
};
use {
    alloy::{primitives::Address, signers::local::PrivateKeySigner},
    chain::Chain,
    indexmap::IndexMap,
    serde::Serialize,
    thiserror::Error,
};

/// The values of the configuration that come from the process environment.
/// Each one is `None` when the corresponding variable is not set.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    pub private_key: Option<Secret>,
    pub ethereum_rpc: Option<Secret>,
    pub ethereum_sepolia_rpc: Option<Secret>,
    pub etherscan_api_key: Option<Secret>,
}

impl From<&Arguments> for Environment {
    fn from(args: &Arguments) -> Self {
        Self {
            private_key: args.private_key.clone(),
            ethereum_rpc: args.ethereum_rpc.clone(),
            ethereum_sepolia_rpc: args.ethereum_sepolia_rpc.clone(),
            etherscan_api_key: args.etherscan_api_key.clone(),
        }
    }
}

/// Credentials of the contract verification service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<Secret>,
}

/// The complete deployment configuration.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Configuration {
    pub etherscan: Verification,
    pub networks: IndexMap<Chain, NetworkProfile>,
    pub solidity: CompilerProfile,
}

impl Configuration {
    /// Builds the configuration for every supported network.
    ///
    /// Nothing is validated here: values missing from the environment stay
    /// `None` and only fail once something tries to use them, see
    /// [`Configuration::deployer`].
    pub fn assemble(environment: &Environment, profile: &foundry::FoundryProfile) -> Self {
        Self {
            etherscan: Verification {
                api_key: environment.etherscan_api_key.clone(),
            },
            networks: Chain::iter()
                .map(|chain| (chain, NetworkProfile::new(chain, environment)))
                .collect(),
            solidity: profile.into(),
        }
    }

    /// Reads the Foundry project file and assembles the configuration. Fails
    /// without producing any configuration if the file can't be loaded.
    pub fn load(args: &Arguments) -> Result<Self, foundry::LoadError> {
        let profile = foundry::load(&args.foundry_config, &args.foundry_profile)?;
        Ok(Self::assemble(&Environment::from(args), &profile))
    }

    pub fn network(&self, chain: Chain) -> Option<&NetworkProfile> {
        self.networks.get(&chain)
    }

    /// Drops every network but `chain`.
    pub fn only(mut self, chain: Chain) -> Self {
        self.networks.retain(|candidate, _| *candidate == chain);
        self
    }

    /// Checks that contracts can be deployed to `chain` and returns the
    /// address deployments will be sent from.
    pub fn deployer(&self, chain: Chain) -> Result<Address, DeploymentError> {
        let network = self
            .network(chain)
            .ok_or(DeploymentError::UnknownNetwork(chain))?;
        if !network.url.as_ref().is_some_and(|url| !url.expose().is_empty()) {
            return Err(DeploymentError::MissingRpc(chain));
        }
        let key = network
            .signing_key()
            .filter(|key| !key.expose().is_empty())
            .ok_or(DeploymentError::MissingSigningKey(chain))?;
        let signer = key
            .expose()
            .parse::<PrivateKeySigner>()
            .map_err(|_| DeploymentError::InvalidSigningKey(chain))?;
        Ok(signer.address())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeploymentError {
    #[error("network {0} is not configured")]
    UnknownNetwork(Chain),
    #[error("no RPC endpoint configured for network {0}")]
    MissingRpc(Chain),
    #[error("no signing key configured for network {0}")]
    MissingSigningKey(Chain),
    // Never include the key itself.
    #[error("signing key for network {0} is not a valid private key")]
    InvalidSigningKey(Chain),
}
