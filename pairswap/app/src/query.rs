use {
    crate::{App, AppError, AppResult, ContractRef},
    pairswap_types::{
        Addr, Json, PairKey, PairResponse, QueryMsg, ReservesResponse, SwapOutcome,
        TokenMetadata, Uint256, from_json_value, ledger, pair, registry,
    },
    serde::de::DeserializeOwned,
};

impl App {
    /// Query a contract. A ledger query sent to a registry or a pair is
    /// answered by its accounting token or its LP token, respectively.
    pub fn query<M>(&self, contract: Addr, msg: M) -> AppResult<Json>
    where
        M: Into<QueryMsg>,
    {
        let contract_ref = self
            .state()
            .get(contract)
            .ok_or(AppError::ContractNotFound { address: contract })?;

        match (contract_ref, msg.into()) {
            (ContractRef::Token(token), QueryMsg::Ledger(msg)) => Ok(token.query(msg)?),
            (ContractRef::Registry(registry), QueryMsg::Ledger(msg)) => {
                Ok(registry.token().query(msg)?)
            },
            (ContractRef::Registry(registry), QueryMsg::Registry(msg)) => {
                Ok(registry.query(msg)?)
            },
            (ContractRef::Pair(pair), QueryMsg::Ledger(msg)) => Ok(pair.lp().query(msg)?),
            (ContractRef::Pair(pair), QueryMsg::Pair(msg)) => {
                Ok(pair.query(msg, self.block_time())?)
            },
            (contract_ref, _) => Err(AppError::UnsupportedMessage {
                address: contract,
                kind: contract_ref.kind().as_str(),
            }),
        }
    }

    fn query_as<M, R>(&self, contract: Addr, msg: M) -> AppResult<R>
    where
        M: Into<QueryMsg>,
        R: DeserializeOwned,
    {
        let json = self.query(contract, msg)?;

        Ok(from_json_value(json)?)
    }

    pub fn query_metadata(&self, token: Addr) -> AppResult<TokenMetadata> {
        self.query_as(token, ledger::QueryMsg::Metadata {})
    }

    pub fn query_balance(&self, token: Addr, owner: Addr) -> AppResult<Uint256> {
        self.query_as(token, ledger::QueryMsg::Balance { owner })
    }

    pub fn query_allowance(&self, token: Addr, owner: Addr, spender: Addr) -> AppResult<Uint256> {
        self.query_as(token, ledger::QueryMsg::Allowance { owner, spender })
    }

    pub fn query_total_supply(&self, token: Addr) -> AppResult<Uint256> {
        self.query_as(token, ledger::QueryMsg::TotalSupply {})
    }

    pub fn query_pair(&self, registry: Addr, asset_a: Addr, asset_b: Addr) -> AppResult<Addr> {
        self.query_as(registry, registry::QueryMsg::Pair { asset_a, asset_b })
    }

    pub fn query_pairs(
        &self,
        registry: Addr,
        start_after: Option<PairKey>,
        limit: Option<u32>,
    ) -> AppResult<Vec<PairResponse>> {
        self.query_as(registry, registry::QueryMsg::Pairs { start_after, limit })
    }

    pub fn query_reserves(&self, pair: Addr) -> AppResult<ReservesResponse> {
        self.query_as(pair, pair::QueryMsg::Reserves {})
    }

    pub fn query_accrued_reward(&self, pair: Addr, holder: Addr) -> AppResult<Uint256> {
        self.query_as(pair, pair::QueryMsg::AccruedReward { holder })
    }

    pub fn query_simulate_swap(
        &self,
        pair: Addr,
        asset_in: Addr,
        amount_in: Uint256,
    ) -> AppResult<SwapOutcome> {
        self.query_as(pair, pair::QueryMsg::SimulateSwap {
            asset_in,
            amount_in,
        })
    }
}
