use {
    crate::{PairConfig, StdResult, TokenMetadata},
    serde::{Deserialize, Serialize},
};

/// Configuration of the state machine: what pairs are instantiated with, and
/// what the registries' accounting token looks like.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub pair: PairConfig,
    pub registry_token: TokenMetadata,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pair: PairConfig::default(),
            registry_token: TokenMetadata::registry_token(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> StdResult<()> {
        self.pair.validate()
    }
}
