use {
    crate::{Registry, RegistryResult},
    pairswap_types::{Json, PairKey, PairResponse, registry::QueryMsg, to_json_value},
    std::ops::Bound,
};

pub const DEFAULT_PAGE_LIMIT: u32 = 30;

impl Registry {
    pub fn query(&self, msg: QueryMsg) -> RegistryResult<Json> {
        match msg {
            QueryMsg::Pair { asset_a, asset_b } => {
                let res = self.get_pair(asset_a, asset_b);
                to_json_value(&res)
            },
            QueryMsg::Pairs { start_after, limit } => {
                let res = self.all_pairs(start_after, limit);
                to_json_value(&res)
            },
        }
        .map_err(Into::into)
    }

    /// Enumerate pairs in ascending order of their canonical asset pair.
    pub fn all_pairs(&self, start_after: Option<PairKey>, limit: Option<u32>) -> Vec<PairResponse> {
        let start = start_after.map_or(Bound::Unbounded, Bound::Excluded);
        let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT) as usize;

        self.pairs()
            .range((start, Bound::Unbounded))
            .take(limit)
            .map(|(key, pair)| PairResponse {
                key: *key,
                pair: *pair,
            })
            .collect()
    }
}
