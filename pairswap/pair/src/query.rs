use {
    crate::{PairEngine, PairResult},
    pairswap_types::{
        AssetsResponse, Json, ReservesResponse, Timestamp, pair::QueryMsg, to_json_value,
    },
};

impl PairEngine {
    /// Answer a query. `now` is the current block time, against which staking
    /// rewards are computed.
    pub fn query(&self, msg: QueryMsg, now: Timestamp) -> PairResult<Json> {
        let (reserve0, reserve1) = self.reserves();

        let json = match msg {
            QueryMsg::Config {} => to_json_value(self.config())?,
            QueryMsg::Assets {} => {
                let (asset0, asset1) = self.assets();
                to_json_value(&AssetsResponse { asset0, asset1 })?
            },
            QueryMsg::Reserves {} => to_json_value(&ReservesResponse { reserve0, reserve1 })?,
            QueryMsg::Reserve0 {} => to_json_value(&reserve0)?,
            QueryMsg::Reserve1 {} => to_json_value(&reserve1)?,
            QueryMsg::AccruedReward { holder } => {
                to_json_value(&self.accrued_reward(holder, now)?)?
            },
            QueryMsg::SimulateSwap {
                asset_in,
                amount_in,
            } => to_json_value(&self.simulate_swap(asset_in, amount_in)?)?,
        };

        Ok(json)
    }
}
