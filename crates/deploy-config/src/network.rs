use {
    crate::{Environment, secret::Secret},
    chain::Chain,
    serde::Serialize,
};

/// Connection and deployment parameters of one network.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkProfile {
    /// RPC endpoint, passed on exactly as configured. `None` if the endpoint
    /// comes from the environment and was not set. Kept secret because
    /// provider URLs commonly embed API keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<Secret>,
    pub chain_id: u64,
    /// Real chain (as opposed to an ephemeral development node).
    pub live: bool,
    /// Whether deployment records are kept after each deploy.
    pub save_deployments: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_multiplier: Option<f64>,
    /// Keys signing transactions on this network. Always exactly one entry,
    /// which is `None` when no signing key was configured.
    pub accounts: Vec<Option<Secret>>,
}

impl NetworkProfile {
    pub fn new(chain: Chain, environment: &Environment) -> Self {
        let url = match chain {
            Chain::Ethereum => environment.ethereum_rpc.clone(),
            Chain::Sepolia => environment.ethereum_sepolia_rpc.clone(),
            _ => chain.default_rpc().map(Secret::new),
        };
        Self {
            url,
            chain_id: chain.chain_id(),
            live: chain.is_live(),
            save_deployments: true,
            gas_multiplier: chain.gas_multiplier(),
            accounts: vec![environment.private_key.clone()],
        }
    }

    /// The key transactions on this network are signed with.
    pub fn signing_key(&self) -> Option<&Secret> {
        self.accounts.first().and_then(Option::as_ref)
    }
}
