//! BlendScore CLI configuration
//!
//! Network keys are read as `BLENDSCORE_<KEY>`, falling back to the
//! `NEXT_PUBLIC_<KEY>` spelling used by existing deployments. Unset keys
//! resolve to Blend testnet values.

use std::collections::HashMap;

use anyhow::Result;
use blendscore_common::ReserveError;
use blendscore_lending::PoolReserve;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Primary env prefix
pub const ENV_PREFIX: &str = "BLENDSCORE_";

/// Fallback env prefix
pub const LEGACY_ENV_PREFIX: &str = "NEXT_PUBLIC_";

/// Values treated as unset during validation
const UNSET_SENTINEL: &str = "NOT SET";

/// Recognized network configuration keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigKey {
    StellarExpertUrl,
    RpcUrl,
    HorizonUrl,
    Passphrase,
    WalletConnectUrl,
    WalletConnectName,
    Backstop,
    BackstopV2,
    UsdcIssuer,
    BlndIssuer,
    BlendPoolContract,
    OraclePriceFetcher,
    BlockedPools,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 13] = [
        ConfigKey::StellarExpertUrl,
        ConfigKey::RpcUrl,
        ConfigKey::HorizonUrl,
        ConfigKey::Passphrase,
        ConfigKey::WalletConnectUrl,
        ConfigKey::WalletConnectName,
        ConfigKey::Backstop,
        ConfigKey::BackstopV2,
        ConfigKey::UsdcIssuer,
        ConfigKey::BlndIssuer,
        ConfigKey::BlendPoolContract,
        ConfigKey::OraclePriceFetcher,
        ConfigKey::BlockedPools,
    ];

    /// Unprefixed key name
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::StellarExpertUrl => "STELLAR_EXPERT_URL",
            ConfigKey::RpcUrl => "RPC_URL",
            ConfigKey::HorizonUrl => "HORIZON_URL",
            ConfigKey::Passphrase => "PASSPHRASE",
            ConfigKey::WalletConnectUrl => "WALLET_CONNECT_URL",
            ConfigKey::WalletConnectName => "WALLET_CONNECT_NAME",
            ConfigKey::Backstop => "BACKSTOP",
            ConfigKey::BackstopV2 => "BACKSTOP_V2",
            ConfigKey::UsdcIssuer => "USDC_ISSUER",
            ConfigKey::BlndIssuer => "BLND_ISSUER",
            ConfigKey::BlendPoolContract => "BLEND_POOL_CONTRACT",
            ConfigKey::OraclePriceFetcher => "ORACLE_PRICE_FETCHER",
            ConfigKey::BlockedPools => "BLOCKED_POOLS",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, ConfigKey::OraclePriceFetcher | ConfigKey::BlockedPools)
    }

    /// Testnet value used when the key is unset
    pub fn testnet_default(&self) -> &'static str {
        match self {
            ConfigKey::StellarExpertUrl => "https://stellar.expert/explorer/testnet",
            ConfigKey::RpcUrl => "https://soroban-testnet.stellar.org",
            ConfigKey::HorizonUrl => "https://horizon-testnet.stellar.org",
            ConfigKey::Passphrase => "Test SDF Network ; September 2015",
            ConfigKey::WalletConnectUrl => "https://testnet.blend.capital",
            ConfigKey::WalletConnectName => "Blend Testnet",
            ConfigKey::Backstop | ConfigKey::BackstopV2 => {
                "CC4TSDVQKBAYMK4BEDM65CSNB3ISI2A54OOBRO6IPSTFHJY3DEEKHRKV"
            }
            ConfigKey::UsdcIssuer | ConfigKey::BlndIssuer => {
                "GATALTGTWIOT6BUDBCZM3Q4OQ4BO2COLOAZ7IYSKPLC2PMSOPPGF5V56"
            }
            ConfigKey::BlendPoolContract => {
                "CCLBPEYS3XFK65MYYXSBMOGKUI4ODN5S7SUZBGD7NALUQF64QILLX5B5"
            }
            ConfigKey::OraclePriceFetcher | ConfigKey::BlockedPools => "",
        }
    }
}

impl std::fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of checking the network configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValidation {
    /// Required keys that are unset, empty, or `NOT SET`
    pub missing: Vec<ConfigKey>,
    pub warnings: Vec<String>,
}

impl ConfigValidation {
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Stellar network and Blend contract settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Values explicitly set in the environment
    explicit: HashMap<ConfigKey, String>,
}

impl NetworkConfig {
    /// Read every key through `lookup`, trying the primary prefix first
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let explicit = ConfigKey::ALL
            .iter()
            .filter_map(|key| {
                lookup(&format!("{}{}", ENV_PREFIX, key.name()))
                    .filter(|value| is_set(value))
                    .or_else(|| lookup(&format!("{}{}", LEGACY_ENV_PREFIX, key.name())))
                    .map(|value| (*key, value))
            })
            .collect();
        Self { explicit }
    }

    /// Value for a key, or its testnet default
    pub fn get(&self, key: ConfigKey) -> &str {
        match self.explicit.get(&key) {
            Some(value) if is_set(value) => value,
            _ => key.testnet_default(),
        }
    }

    pub fn rpc_url(&self) -> &str {
        self.get(ConfigKey::RpcUrl)
    }

    pub fn horizon_url(&self) -> &str {
        self.get(ConfigKey::HorizonUrl)
    }

    pub fn passphrase(&self) -> &str {
        self.get(ConfigKey::Passphrase)
    }

    pub fn pool_contract(&self) -> &str {
        self.get(ConfigKey::BlendPoolContract)
    }

    /// Comma-separated pool ids excluded from display
    pub fn blocked_pools(&self) -> Vec<String> {
        self.get(ConfigKey::BlockedPools)
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn validate(&self) -> ConfigValidation {
        let missing = ConfigKey::ALL
            .iter()
            .filter(|key| key.is_required())
            .filter(|key| !self.explicit.get(*key).is_some_and(|v| is_set(v)))
            .copied()
            .collect();

        let mut warnings = Vec::new();
        if !self
            .explicit
            .get(&ConfigKey::OraclePriceFetcher)
            .is_some_and(|v| is_set(v))
        {
            warnings.push(format!(
                "{} is not set (optional but recommended)",
                ConfigKey::OraclePriceFetcher
            ));
        }

        ConfigValidation { missing, warnings }
    }
}

fn is_set(value: &str) -> bool {
    !value.is_empty() && value != UNSET_SENTINEL
}

/// Base terms used when scoring without live reserve data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermsDefaults {
    pub base_ltv: f64,
    pub base_interest_rate: f64,
    pub base_liquidation_threshold: f64,
    pub base_max_borrow: f64,
    /// Collateral assumed when the caller supplies none
    pub collateral_value: f64,
}

impl Default for TermsDefaults {
    fn default() -> Self {
        let reserve = PoolReserve::default();
        Self {
            base_ltv: reserve.base_ltv,
            base_interest_rate: reserve.base_interest_rate,
            base_liquidation_threshold: reserve.base_liquidation_threshold,
            base_max_borrow: reserve.base_max_borrow,
            collateral_value: 1_000_000.0,
        }
    }
}

impl TermsDefaults {
    /// Defaults with `BLENDSCORE_*` overrides applied
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut terms = Self::default();
        let fields: [(&str, &mut f64); 5] = [
            ("BASE_LTV", &mut terms.base_ltv),
            ("BASE_INTEREST_RATE", &mut terms.base_interest_rate),
            ("BASE_LIQUIDATION_THRESHOLD", &mut terms.base_liquidation_threshold),
            ("BASE_MAX_BORROW", &mut terms.base_max_borrow),
            ("COLLATERAL_VALUE", &mut terms.collateral_value),
        ];

        for (name, slot) in fields {
            let var = format!("{}{}", ENV_PREFIX, name);
            if let Some(raw) = lookup(&var) {
                match raw.trim().parse::<f64>() {
                    Ok(v) => *slot = v,
                    Err(_) => warn!(%var, value = %raw, "Ignoring unparseable override"),
                }
            }
        }

        terms
    }

    /// Validated reserve built from these terms
    pub fn reserve(&self) -> std::result::Result<PoolReserve, ReserveError> {
        PoolReserve::new(
            self.base_ltv,
            self.base_interest_rate,
            self.base_liquidation_threshold,
            self.base_max_borrow,
        )
    }
}

/// Full CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    pub network: NetworkConfig,
    pub terms: TermsDefaults,
}

impl CliConfig {
    /// Load configuration from `.env` and the process environment
    pub fn load() -> Result<Self> {
        // Try to load .env file
        let _ = dotenvy::dotenv();

        let lookup = |name: &str| std::env::var(name).ok();
        Ok(Self {
            network: NetworkConfig::from_lookup(lookup),
            terms: TermsDefaults::from_lookup(lookup),
        })
    }
}
