use {
    serde::{Deserialize, Deserializer, Serialize, de},
    thiserror::Error,
};

/// Represents each network contracts can be deployed to.
///
/// Variants are declared in the order the networks appear in the assembled
/// deployment configuration.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[repr(u64)]
pub enum Chain {
    Ethereum = 1,
    Sepolia = 11155111,
    Polygon = 137,
    Mumbai = 80001,
    Avalanche = 43114,
    Fuji = 43113,
    Zkevm = 1101,
    ZkevmTestnet = 1442,
    Arbitrum = 42161,
    ArbiTestnet = 421611,
}

impl Chain {
    /// Returns the network's chain ID.
    pub fn chain_id(&self) -> u64 {
        *self as u64
    }

    /// Returns the key the network is configured under, e.g.
    /// `zkevm_testnet`.
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Returns a human readable name of the network.
    pub fn label(&self) -> &'static str {
        // You can find a list of available networks by network and chain id here:
        // https://chainid.network/chains.json
        match &self {
            Self::Ethereum => "Ethereum / Mainnet",
            Self::Sepolia => "Ethereum / Sepolia",
            Self::Polygon => "Polygon / Mainnet",
            Self::Mumbai => "Polygon / Mumbai",
            Self::Avalanche => "Avalanche / C-Chain",
            Self::Fuji => "Avalanche / Fuji",
            Self::Zkevm => "Polygon zkEVM",
            Self::ZkevmTestnet => "Polygon zkEVM / Testnet",
            Self::Arbitrum => "Arbitrum One",
            Self::ArbiTestnet => "Arbitrum / Goerli",
        }
    }

    /// Returns the public RPC endpoint used for the network. `None` for
    /// networks whose endpoint has to be provided by the operator because no
    /// public endpoint is good enough.
    pub fn default_rpc(&self) -> Option<&'static str> {
        match self {
            Self::Ethereum | Self::Sepolia => None,
            Self::Polygon => Some("https://rpc-mainnet.maticvigil.com"),
            Self::Mumbai => Some("https://rpc-mumbai.maticvigil.com/"),
            Self::Avalanche => Some("https://api.avax.network/ext/bc/C/rpc"),
            Self::Fuji => Some("https://api.avax-test.network/ext/bc/C/rpc"),
            Self::Zkevm => Some("https://zkevm-rpc.com"),
            Self::ZkevmTestnet => Some("https://rpc.public.zkevm-test.net"),
            Self::Arbitrum => Some("https://arb1.arbitrum.io/rpc"),
            Self::ArbiTestnet => Some("https://goerli-rollup.arbitrum.io/rpc"),
        }
    }

    /// Returns the factor estimated gas is multiplied with before sending a
    /// transaction. Only set for networks whose nodes underestimate gas.
    pub fn gas_multiplier(&self) -> Option<f64> {
        match self {
            Self::Mumbai | Self::ZkevmTestnet | Self::ArbiTestnet => Some(2.0),
            _ => None,
        }
    }

    /// Whether the network is a real chain whose deployments should be kept
    /// track of. Every supported network currently is.
    pub fn is_live(&self) -> bool {
        true
    }

    /// Iterates over all supported networks in declaration order.
    pub fn iter() -> impl Iterator<Item = Self> {
        <Self as strum::IntoEnumIterator>::iter()
    }
}

impl TryFrom<u64> for Chain {
    type Error = Error;

    /// Initializes `Chain` from a chain ID, returns error if the chain id is
    /// not supported
    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::iter()
            .find(|chain| chain.chain_id() == value)
            .ok_or(Error::ChainIdNotSupported(value))
    }
}

impl<'de> Deserialize<'de> for Chain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ChainVisitor;

        impl de::Visitor<'_> for ChainVisitor {
            type Value = Chain;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a chain id or a network name")
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Chain::try_from(value).map_err(de::Error::custom)
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                let value = u64::try_from(value).map_err(de::Error::custom)?;
                self.visit_u64(value)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                match value.parse::<u64>() {
                    Ok(chain_id) => Chain::try_from(chain_id).map_err(de::Error::custom),
                    Err(_) => value
                        .parse::<Chain>()
                        .map_err(|_| de::Error::custom(Error::UnknownName(value.to_owned()))),
                }
            }
        }

        deserializer.deserialize_any(ChainVisitor)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("chain id {0} not supported")]
    ChainIdNotSupported(u64),
    #[error("unknown network {0:?}")]
    UnknownName(String),
}

#[cfg(test)]
mod test {
    use {super::*, serde_json::json};

    #[test]
    fn chain_ids_match_canonical_values() {
        let expected = [
            (Chain::Ethereum, 1),
            (Chain::Sepolia, 11155111),
            (Chain::Polygon, 137),
            (Chain::Mumbai, 80001),
            (Chain::Avalanche, 43114),
            (Chain::Fuji, 43113),
            (Chain::Zkevm, 1101),
            (Chain::ZkevmTestnet, 1442),
            (Chain::Arbitrum, 42161),
            (Chain::ArbiTestnet, 421611),
        ];
        assert_eq!(Chain::iter().count(), expected.len());
        for (chain, chain_id) in expected {
            assert_eq!(chain.chain_id(), chain_id, "{chain}");
            assert_eq!(Chain::try_from(chain_id).unwrap(), chain);
        }
    }

    #[test]
    fn unsupported_chain_id() {
        assert_eq!(Chain::try_from(5), Err(Error::ChainIdNotSupported(5)));
    }

    #[test]
    fn names_are_snake_case_keys() {
        let names: Vec<_> = Chain::iter().map(|chain| chain.name()).collect();
        assert_eq!(
            names,
            [
                "ethereum",
                "sepolia",
                "polygon",
                "mumbai",
                "avalanche",
                "fuji",
                "zkevm",
                "zkevm_testnet",
                "arbitrum",
                "arbi_testnet",
            ]
        );
        for chain in Chain::iter() {
            assert_eq!(chain.name().parse::<Chain>().unwrap(), chain);
            assert_eq!(chain.to_string(), chain.name());
        }
    }

    #[test]
    fn only_slow_estimating_networks_have_gas_multiplier() {
        let multiplied: Vec<_> = Chain::iter()
            .filter(|chain| chain.gas_multiplier().is_some())
            .collect();
        assert_eq!(
            multiplied,
            [Chain::Mumbai, Chain::ZkevmTestnet, Chain::ArbiTestnet]
        );
        for chain in multiplied {
            assert_eq!(chain.gas_multiplier(), Some(2.0));
        }
    }

    #[test]
    fn default_rpc_endpoints_are_kept_verbatim() {
        let endpoints: Vec<_> = Chain::iter()
            .filter_map(|chain| Some((chain, chain.default_rpc()?)))
            .collect();
        assert_eq!(
            endpoints,
            [
                (Chain::Polygon, "https://rpc-mainnet.maticvigil.com"),
                (Chain::Mumbai, "https://rpc-mumbai.maticvigil.com/"),
                (Chain::Avalanche, "https://api.avax.network/ext/bc/C/rpc"),
                (Chain::Fuji, "https://api.avax-test.network/ext/bc/C/rpc"),
                (Chain::Zkevm, "https://zkevm-rpc.com"),
                (Chain::ZkevmTestnet, "https://rpc.public.zkevm-test.net"),
                (Chain::Arbitrum, "https://arb1.arbitrum.io/rpc"),
                (Chain::ArbiTestnet, "https://goerli-rollup.arbitrum.io/rpc"),
            ]
        );
        assert!(Chain::Ethereum.default_rpc().is_none());
        assert!(Chain::Sepolia.default_rpc().is_none());
    }

    #[test]
    fn labels() {
        assert_eq!(Chain::Ethereum.label(), "Ethereum / Mainnet");
        assert_eq!(Chain::ZkevmTestnet.label(), "Polygon zkEVM / Testnet");
    }

    #[test]
    fn every_network_is_live() {
        assert!(Chain::iter().all(|chain| chain.is_live()));
    }

    #[test]
    fn deserialize_from_u64() {
        let chain: Chain = serde_json::from_value(json!(1)).unwrap();
        assert_eq!(chain, Chain::Ethereum);

        let chain: Chain = serde_json::from_value(json!(1442)).unwrap();
        assert_eq!(chain, Chain::ZkevmTestnet);

        let result: Result<Chain, _> = serde_json::from_value(json!(9999999));
        assert!(result.is_err());
    }

    #[test]
    fn deserialize_from_str() {
        let chain: Chain = serde_json::from_value(json!("11155111")).unwrap();
        assert_eq!(chain, Chain::Sepolia);

        let chain: Chain = serde_json::from_value(json!("arbi_testnet")).unwrap();
        assert_eq!(chain, Chain::ArbiTestnet);

        let result: Result<Chain, _> = serde_json::from_value(json!("goerli"));
        assert!(result.is_err());
    }

    #[test]
    fn serialize_as_name() {
        assert_eq!(
            serde_json::to_value(Chain::ZkevmTestnet).unwrap(),
            json!("zkevm_testnet")
        );
    }
}
