use {
    crate::FungibleLedger,
    pairswap_types::{Json, StdResult, ledger::QueryMsg, to_json_value},
};

impl FungibleLedger {
    pub fn query(&self, msg: QueryMsg) -> StdResult<Json> {
        match msg {
            QueryMsg::Metadata {} => to_json_value(self.metadata()),
            QueryMsg::Name {} => to_json_value(&self.metadata().name),
            QueryMsg::Symbol {} => to_json_value(&self.metadata().symbol),
            QueryMsg::Decimals {} => to_json_value(&self.metadata().decimals),
            QueryMsg::TotalSupply {} => to_json_value(&self.total_supply()),
            QueryMsg::Balance { owner } => to_json_value(&self.balance_of(owner)),
            QueryMsg::Allowance { owner, spender } => {
                to_json_value(&self.allowance(owner, spender))
            },
        }
    }
}
