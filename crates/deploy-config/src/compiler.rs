use {crate::foundry::FoundryProfile, serde::Serialize};

/// Solidity compiler version and options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CompilerProfile {
    pub version: String,
    pub settings: Settings,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Compile through the Yul intermediate representation.
    #[serde(rename = "viaIR")]
    pub via_ir: bool,
    pub optimizer: Optimizer,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Optimizer {
    pub enabled: bool,
    /// How often the deployed code is expected to run. Higher values make
    /// deployment more expensive and calls cheaper.
    pub runs: u64,
}

impl From<&FoundryProfile> for CompilerProfile {
    fn from(profile: &FoundryProfile) -> Self {
        Self {
            version: profile.solc_version.clone(),
            settings: Settings {
                via_ir: profile.via_ir,
                optimizer: Optimizer {
                    enabled: true,
                    runs: profile.optimizer_runs,
                },
            },
        }
    }
}
