use {
    crate::{AppError, AppResult, ContractKind, State, TransferHook},
    config_parser::ConfigParser,
    pairswap_ledger::{FungibleLedger, MintAuthority},
    pairswap_pair::{PairEngine, PairResult},
    pairswap_registry::Registry,
    pairswap_types::{
        Addr, AppConfig, Context, Duration, ExecuteMsg, Response, Timestamp, TokenMetadata,
        ledger, registry,
    },
    std::{collections::BTreeMap, fmt, path::Path, sync::Arc},
};

/// Maximum number of chained messages.
///
/// E.g. a pair emits a message to transfer a token, whose hook executes a
/// message on another pair, which emits a message to transfer... so on.
const MAX_MESSAGE_DEPTH: usize = 30;

/// The state machine. Owns every contract, and executes messages against them
/// one at a time.
///
/// A message either succeeds as a whole, including the messages emitted by
/// the contracts it reaches, or fails without changing anything.
pub struct App {
    state: State,
    block_time: Timestamp,
    config: AppConfig,
    hooks: BTreeMap<Addr, Arc<dyn TransferHook>>,
    msg_depth: usize,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("state", &self.state)
            .field("block_time", &self.block_time)
            .field("config", &self.config)
            .field("hooks", &self.hooks.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl App {
    pub fn new(config: AppConfig) -> AppResult<Self> {
        config.validate()?;

        Ok(Self {
            state: State::default(),
            block_time: Timestamp::ZERO,
            config,
            hooks: BTreeMap::new(),
            msg_depth: 0,
        })
    }

    /// Create an app with the configuration found in a TOML file, with
    /// environment overrides.
    pub fn from_config_file<P>(path: P) -> AppResult<Self>
    where
        P: AsRef<Path>,
    {
        let config: AppConfig =
            ConfigParser::parse(path).map_err(|err| AppError::Config(err.to_string()))?;

        Self::new(config)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn block_time(&self) -> Timestamp {
        self.block_time
    }

    pub fn increase_time(&mut self, duration: Duration) {
        self.block_time += duration;
    }

    /// Attach a hook to a token. Replaces the previous hook, if any.
    pub fn set_hook<H>(&mut self, token: Addr, hook: H)
    where
        H: TransferHook + 'static,
    {
        self.hooks.insert(token, Arc::new(hook));
    }

    // ---------------------------------- genesis ----------------------------------

    /// Deploy a plain token at an address derived from the deployer and the
    /// salt.
    pub fn instantiate_token(
        &mut self,
        deployer: Addr,
        salt: &str,
        metadata: TokenMetadata,
        mint_authority: MintAuthority,
    ) -> AppResult<Addr> {
        let address = self.new_contract_address(deployer, salt)?;

        #[cfg(feature = "tracing")]
        tracing::info!(
            address = address.to_string(),
            symbol = %metadata.symbol,
            "Instantiated token"
        );

        self.state.tokens.insert(
            address,
            FungibleLedger::new(address, metadata, mint_authority),
        );

        Ok(address)
    }

    /// Deploy a registry at an address derived from the owner and the salt.
    /// The registry's token and the pairs it creates follow the app's config.
    pub fn instantiate_registry(&mut self, owner: Addr, salt: &str) -> AppResult<Addr> {
        let address = self.new_contract_address(owner, salt)?;

        #[cfg(feature = "tracing")]
        tracing::info!(
            address = address.to_string(),
            owner = owner.to_string(),
            "Instantiated registry"
        );

        self.state.registries.insert(
            address,
            Registry::new(
                address,
                owner,
                self.config.registry_token.clone(),
                self.config.pair.clone(),
            ),
        );

        Ok(address)
    }

    fn new_contract_address(&self, deployer: Addr, salt: &str) -> AppResult<Addr> {
        let address = Addr::derive(deployer, salt.as_bytes());

        if self.state.contains(address) {
            return Err(AppError::AccountExists { address });
        }

        Ok(address)
    }

    // ---------------------------------- execute ----------------------------------

    /// Execute a message. On error, every change the message made is
    /// reverted.
    ///
    /// The sender must not be a contract. Contracts only act through the
    /// messages they emit.
    ///
    /// The returned response carries the data and messages of the contract
    /// the message was sent to, and the events of every contract reached
    /// during execution, in order.
    pub fn execute<M>(&mut self, sender: Addr, contract: Addr, msg: M) -> AppResult<Response>
    where
        M: Into<ExecuteMsg>,
    {
        let msg = msg.into();

        self.ensure_external_sender(sender)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sender = sender.to_string(),
            contract = contract.to_string(),
            msg = ?msg,
            "Executing message"
        );

        let snapshot = self.state.clone();

        match self.do_execute(sender, contract, msg) {
            Ok(response) => Ok(response),
            Err(err) => {
                self.state = snapshot;

                #[cfg(feature = "tracing")]
                tracing::warn!(
                    sender = sender.to_string(),
                    contract = contract.to_string(),
                    err = err.to_string(),
                    "Failed to execute message"
                );

                Err(err)
            },
        }
    }

    /// Execute a message, then revert all its changes regardless of the
    /// outcome.
    pub fn simulate<M>(&mut self, sender: Addr, contract: Addr, msg: M) -> AppResult<Response>
    where
        M: Into<ExecuteMsg>,
    {
        self.ensure_external_sender(sender)?;

        let snapshot = self.state.clone();
        let result = self.do_execute(sender, contract, msg.into());
        self.state = snapshot;

        result
    }

    fn ensure_external_sender(&self, sender: Addr) -> AppResult<()> {
        if self.state.contains(sender) {
            return Err(AppError::SenderIsContract { sender });
        }

        Ok(())
    }

    fn do_execute(
        &mut self,
        sender: Addr,
        contract: Addr,
        msg: ExecuteMsg,
    ) -> AppResult<Response> {
        if self.msg_depth >= MAX_MESSAGE_DEPTH {
            return Err(AppError::ExceedMaxMessageDepth);
        }

        self.msg_depth += 1;
        let result = self._do_execute(sender, contract, msg);
        self.msg_depth -= 1;

        result
    }

    fn _do_execute(
        &mut self,
        sender: Addr,
        contract: Addr,
        msg: ExecuteMsg,
    ) -> AppResult<Response> {
        let kind = self
            .state
            .kind_of(contract)
            .ok_or(AppError::ContractNotFound { address: contract })?;

        let ctx = Context {
            contract,
            sender,
            block_time: self.block_time,
        };

        match (kind, msg) {
            (ContractKind::Token, ExecuteMsg::Ledger(msg)) => self.execute_token(ctx, msg),
            (ContractKind::Registry, ExecuteMsg::Ledger(msg)) => {
                let response = self.registry_mut(contract)?.execute_ledger(ctx, msg)?;
                self.handle_response(contract, response)
            },
            (ContractKind::Registry, ExecuteMsg::Registry(msg)) => {
                self.execute_registry(ctx, msg)
            },
            (ContractKind::Pair, ExecuteMsg::Ledger(msg)) => {
                self.call_pair(contract, |pair| pair.execute_ledger(ctx, msg))
            },
            (ContractKind::Pair, ExecuteMsg::Pair(msg)) => {
                self.call_pair(contract, |pair| pair.execute(ctx, msg))
            },
            (kind, _) => Err(AppError::UnsupportedMessage {
                address: contract,
                kind: kind.as_str(),
            }),
        }
    }

    fn execute_token(&mut self, ctx: Context, msg: ledger::ExecuteMsg) -> AppResult<Response> {
        let token = self
            .state
            .tokens
            .get_mut(&ctx.contract)
            .ok_or(AppError::ContractNotFound {
                address: ctx.contract,
            })?;

        let event = token.execute(ctx.sender, msg)?;

        if let Some(hook) = self.hooks.get(&ctx.contract).cloned() {
            if let Some(transfer) = event.as_transfer() {
                hook.on_transfer(self, transfer)?;
            }
        }

        Ok(Response::new().add_event(event))
    }

    fn execute_registry(
        &mut self,
        ctx: Context,
        msg: registry::ExecuteMsg,
    ) -> AppResult<Response> {
        match msg {
            registry::ExecuteMsg::CreatePair { asset_a, asset_b } => {
                let (response, engine) =
                    self.registry_mut(ctx.contract)?.create_pair(asset_a, asset_b)?;

                let address = engine.address();
                if self.state.contains(address) {
                    return Err(AppError::AccountExists { address });
                }

                self.state.pairs.insert(address, engine);

                self.handle_response(ctx.contract, response)
            },
        }
    }

    /// Call a pair, then execute the messages it emits, with the pair locked
    /// throughout. A message that reaches the pair while it's locked fails.
    fn call_pair<F>(&mut self, contract: Addr, action: F) -> AppResult<Response>
    where
        F: FnOnce(&mut PairEngine) -> PairResult<Response>,
    {
        let pair = self.pair_mut(contract)?;
        pair.lock()?;

        let result = action(pair)
            .map_err(AppError::from)
            .and_then(|response| self.handle_response(contract, response));

        if let Some(pair) = self.state.pairs.get_mut(&contract) {
            pair.unlock();
        }

        result
    }

    /// Execute the messages a contract emitted, with the contract as sender,
    /// and collect their events.
    fn handle_response(&mut self, contract: Addr, response: Response) -> AppResult<Response> {
        let Response {
            messages,
            mut events,
            data,
        } = response;

        for msg in &messages {
            let sub_response = self.do_execute(contract, msg.contract, msg.msg.clone())?;
            events.extend(sub_response.events);
        }

        Ok(Response {
            messages,
            events,
            data,
        })
    }

    fn registry_mut(&mut self, address: Addr) -> AppResult<&mut Registry> {
        self.state
            .registries
            .get_mut(&address)
            .ok_or(AppError::ContractNotFound { address })
    }

    fn pair_mut(&mut self, address: Addr) -> AppResult<&mut PairEngine> {
        self.state
            .pairs
            .get_mut(&address)
            .ok_or(AppError::ContractNotFound { address })
    }
}
