use {
    pairswap_app::{App, AppResult},
    pairswap_types::{
        Addr, AssetsResponse, Response, Uint256, from_json_value, ledger,
        pair::{ExecuteMsg, QueryMsg},
        registry,
    },
    std::ops::{Deref, DerefMut},
};

/// Wrapper over the [`App`] with shorthands for the multi-message flows tests
/// run over and over, e.g. approving a pair and then adding liquidity.
#[derive(Debug)]
pub struct TestSuite {
    pub app: App,
}

impl Deref for TestSuite {
    type Target = App;

    fn deref(&self) -> &Self::Target {
        &self.app
    }
}

impl DerefMut for TestSuite {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.app
    }
}

impl TestSuite {
    pub fn new(app: App) -> Self {
        Self { app }
    }

    pub fn balance(&self, token: Addr, owner: Addr) -> Uint256 {
        self.app.query_balance(token, owner).unwrap()
    }

    pub fn approve(
        &mut self,
        owner: Addr,
        token: Addr,
        spender: Addr,
        amount: Uint256,
    ) -> AppResult<Response> {
        self.app
            .execute(owner, token, ledger::ExecuteMsg::Approve { spender, amount })
    }

    /// Create a pair and return its address.
    pub fn create_pair(
        &mut self,
        sender: Addr,
        registry: Addr,
        asset_a: Addr,
        asset_b: Addr,
    ) -> AppResult<Addr> {
        let response = self.app.execute(
            sender,
            registry,
            registry::ExecuteMsg::CreatePair { asset_a, asset_b },
        )?;

        Ok(from_json_value(response.data.unwrap_or_default())?)
    }

    /// Approve the pair to spend both amounts, then add liquidity.
    pub fn add_liquidity(
        &mut self,
        provider: Addr,
        pair: Addr,
        amount0: Uint256,
        amount1: Uint256,
    ) -> AppResult<Response> {
        let (asset0, asset1) = self.assets_of(pair);

        self.approve(provider, asset0, pair, amount0)?;
        self.approve(provider, asset1, pair, amount1)?;

        self.app
            .execute(provider, pair, ExecuteMsg::AddLiquidity { amount0, amount1 })
    }

    pub fn remove_liquidity(
        &mut self,
        provider: Addr,
        pair: Addr,
        lp_amount: Uint256,
    ) -> AppResult<Response> {
        self.app
            .execute(provider, pair, ExecuteMsg::RemoveLiquidity { lp_amount })
    }

    /// Approve the pair to spend the input, then swap.
    pub fn swap(
        &mut self,
        trader: Addr,
        pair: Addr,
        asset_in: Addr,
        amount_in: Uint256,
    ) -> AppResult<Response> {
        self.approve(trader, asset_in, pair, amount_in)?;

        self.app.execute(trader, pair, ExecuteMsg::Swap {
            asset_in,
            amount_in,
        })
    }

    pub fn withdraw(&mut self, holder: Addr, pair: Addr) -> AppResult<Response> {
        self.app.execute(holder, pair, ExecuteMsg::Withdraw {})
    }

    /// The pair's two assets, in the order its reserves are reported.
    pub fn assets_of(&self, pair: Addr) -> (Addr, Addr) {
        let assets: AssetsResponse =
            from_json_value(self.app.query(pair, QueryMsg::Assets {}).unwrap()).unwrap();

        (assets.asset0, assets.asset1)
    }
}
