use {
    crate::{TestSuite, setup_tracing_subscriber, to_wei},
    anyhow::ensure,
    pairswap_app::App,
    pairswap_ledger::MintAuthority,
    pairswap_types::{Addr, AppConfig, TokenMetadata, Uint256, ledger},
    std::path::PathBuf,
    tracing::Level,
};

const DEFAULT_TRACING_LEVEL: Level = Level::INFO;
const DEFAULT_INITIAL_BALANCE: u128 = 1_000_000;
const REGISTRY_SALT: &str = "registry";

/// Externally owned accounts of the test setup.
#[derive(Debug, Clone, Copy)]
pub struct TestAccounts {
    /// Deployer of every contract, and owner of the registry.
    pub owner: Addr,
    pub user: Addr,
}

/// Contracts deployed by the test setup.
#[derive(Debug, Clone, Copy)]
pub struct Contracts {
    pub registry: Addr,
    pub token0: Addr,
    pub token1: Addr,
}

pub struct TestBuilder {
    tracing_level: Option<Level>,
    config: AppConfig,
    config_file: Option<PathBuf>,
    initial_balance: Uint256,
}

// Clippy incorrectly thinks we can derive `Default` here, which we can't.
#[allow(clippy::new_without_default)]
impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tracing_level: Some(DEFAULT_TRACING_LEVEL),
            config: AppConfig::default(),
            config_file: None,
            initial_balance: to_wei(DEFAULT_INITIAL_BALANCE),
        }
    }

    /// Set the tracing level, or `None` to not print any log.
    pub fn set_tracing_level(mut self, level: Option<Level>) -> Self {
        self.tracing_level = level;
        self
    }

    pub fn set_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Load the config from a TOML file instead. Takes precedence over
    /// [`set_config`](Self::set_config).
    pub fn set_config_file<P>(mut self, path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        self.config_file = Some(path.into());
        self
    }

    /// Amount of both fixture tokens minted to each account.
    pub fn set_initial_balance(mut self, amount: Uint256) -> Self {
        self.initial_balance = amount;
        self
    }

    pub fn build(self) -> anyhow::Result<(TestSuite, TestAccounts, Contracts)> {
        if let Some(level) = self.tracing_level {
            setup_tracing_subscriber(level);
        }

        let mut app = match self.config_file {
            Some(path) => App::from_config_file(path)?,
            None => App::new(self.config)?,
        };

        let accounts = TestAccounts {
            owner: Addr::mock(1),
            user: Addr::mock(2),
        };

        let registry = app.instantiate_registry(accounts.owner, REGISTRY_SALT)?;
        let token0 = app.instantiate_token(
            accounts.owner,
            "token0",
            TokenMetadata::new("QWERTY", "QWE", 18),
            MintAuthority::Anyone,
        )?;
        let token1 = app.instantiate_token(
            accounts.owner,
            "token1",
            TokenMetadata::new("ASDFG", "ASD", 18),
            MintAuthority::Anyone,
        )?;

        for token in [token0, token1] {
            for to in [accounts.owner, accounts.user] {
                app.execute(accounts.owner, token, ledger::ExecuteMsg::Mint {
                    to,
                    amount: self.initial_balance,
                })?;
            }
        }

        ensure!(
            app.query_balance(token0, accounts.user)? == self.initial_balance,
            "initial balance not minted"
        );

        Ok((TestSuite::new(app), accounts, Contracts {
            registry,
            token0,
            token1,
        }))
    }
}

/// Deploy a registry and two fixture tokens, with the default config.
pub fn setup_test() -> (TestSuite, TestAccounts, Contracts) {
    TestBuilder::new().build().unwrap()
}

/// Same as [`setup_test`], and additionally create the pair of the two
/// fixture tokens. Returns the pair's address.
pub fn setup_test_with_pair() -> (TestSuite, TestAccounts, Contracts, Addr) {
    let (mut suite, accounts, contracts) = setup_test();

    let pair = suite
        .create_pair(
            accounts.owner,
            contracts.registry,
            contracts.token0,
            contracts.token1,
        )
        .unwrap();

    (suite, accounts, contracts, pair)
}
