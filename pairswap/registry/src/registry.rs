use {
    crate::{RegistryError, RegistryResult},
    pairswap_ledger::{FungibleLedger, MintAuthority},
    pairswap_pair::PairEngine,
    pairswap_types::{
        Addr, Context, Event, EvtPairCreated, PairConfig, PairKey, Response, TokenMetadata,
        ledger,
    },
    std::collections::BTreeMap,
};

/// Factory and index of pairs.
///
/// A registry is also the ledger of its accounting token, in which the pairs
/// it creates pay out staking rewards. The token is minted by the registry's
/// owner and by those pairs.
#[derive(Debug, Clone)]
pub struct Registry {
    address: Addr,
    token: FungibleLedger,
    pairs: BTreeMap<PairKey, Addr>,
    pair_config: PairConfig,
}

impl Registry {
    pub fn new(
        address: Addr,
        owner: Addr,
        token_metadata: TokenMetadata,
        pair_config: PairConfig,
    ) -> Self {
        Self {
            address,
            token: FungibleLedger::new(address, token_metadata, MintAuthority::only([owner])),
            pairs: BTreeMap::new(),
            pair_config,
        }
    }

    pub fn address(&self) -> Addr {
        self.address
    }

    pub fn token(&self) -> &FungibleLedger {
        &self.token
    }

    /// Address of the pair of the two assets, in either order, or the zero
    /// address if there isn't one.
    pub fn get_pair(&self, asset_a: Addr, asset_b: Addr) -> Addr {
        self.pairs
            .get(&PairKey::new(asset_a, asset_b))
            .copied()
            .unwrap_or(Addr::ZERO)
    }

    pub(crate) fn pairs(&self) -> &BTreeMap<PairKey, Addr> {
        &self.pairs
    }

    /// Create the pair of two assets, and return the new pair engine to be
    /// stored by the caller at its address. The response data is the pair's
    /// address.
    ///
    /// The address is derived from the registry's address and the unordered
    /// pair of assets only, so it's known before the pair is created.
    pub fn create_pair(
        &mut self,
        asset_a: Addr,
        asset_b: Addr,
    ) -> RegistryResult<(Response, PairEngine)> {
        for asset in [asset_a, asset_b] {
            if asset.is_zero() {
                return Err(RegistryError::InvalidAsset { asset });
            }
        }

        if asset_a == asset_b {
            return Err(RegistryError::InvalidAsset { asset: asset_b });
        }

        let key = PairKey::new(asset_a, asset_b);

        if let Some(pair) = self.pairs.get(&key) {
            return Err(RegistryError::PairExists { pair: *pair });
        }

        let address = Addr::derive(self.address, &key.to_salt());
        let engine = PairEngine::new(
            address,
            self.address,
            asset_a,
            asset_b,
            self.pair_config.clone(),
        )?;

        self.pairs.insert(key, address);
        self.token.authorize_minter(address);

        #[cfg(feature = "tracing")]
        tracing::info!(
            registry = self.address.to_string(),
            pair = address.to_string(),
            asset0 = asset_a.to_string(),
            asset1 = asset_b.to_string(),
            "Created pair"
        );

        let response = Response::new()
            .add_event(Event::PairCreated(EvtPairCreated {
                registry: self.address,
                pair: address,
                asset0: asset_a,
                asset1: asset_b,
            }))
            .set_data(&address)?;

        Ok((response, engine))
    }

    /// Handle a message addressed to the accounting token.
    pub fn execute_ledger(
        &mut self,
        ctx: Context,
        msg: ledger::ExecuteMsg,
    ) -> RegistryResult<Response> {
        let event = self.token.execute(ctx.sender, msg)?;

        Ok(Response::new().add_event(event))
    }
}

// ----------------------------------- tests -----------------------------------
