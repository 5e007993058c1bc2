use {
    crate::{PairError, PairResult, Staking, xyk},
    pairswap_ledger::{FungibleLedger, LedgerError, MintAuthority},
    pairswap_types::{
        Addr, Context, Event, EvtLiquidity, EvtRewardWithdrawn, EvtSwapped, Message, PairConfig,
        Response, SwapOutcome, Timestamp, Uint256, ledger,
        pair::ExecuteMsg,
    },
};

/// A constant product pool of two assets.
///
/// The engine is also the ledger of its own LP share token, at the same
/// address as the pair. LP holders accrue a staking reward, paid out in the
/// accounting token of the registry that created the pair.
///
/// Operations change the engine's own state first, and return the asset
/// transfers they need as [`Message`]s, which the caller must execute with the
/// pair as sender. While the caller does that, the pair must be
/// [locked](Self::lock).
#[derive(Debug, Clone)]
pub struct PairEngine {
    address: Addr,
    registry: Addr,
    asset0: Addr,
    asset1: Addr,
    reserve0: Uint256,
    reserve1: Uint256,
    lp: FungibleLedger,
    staking: Staking,
    config: PairConfig,
    locked: bool,
}

impl PairEngine {
    pub fn new(
        address: Addr,
        registry: Addr,
        asset0: Addr,
        asset1: Addr,
        config: PairConfig,
    ) -> PairResult<Self> {
        for asset in [asset0, asset1] {
            if asset.is_zero() {
                return Err(PairError::InvalidAsset { asset });
            }
        }

        if asset0 == asset1 {
            return Err(PairError::InvalidAsset { asset: asset1 });
        }

        config.validate()?;

        // The registry may mint and burn LP shares. So may the pair itself,
        // which it does when liquidity is added or removed.
        let lp = FungibleLedger::new(
            address,
            config.lp_token.clone(),
            MintAuthority::only([registry, address]),
        );

        Ok(Self {
            address,
            registry,
            asset0,
            asset1,
            reserve0: Uint256::ZERO,
            reserve1: Uint256::ZERO,
            lp,
            staking: Staking::new(config.reward_rate_bps),
            config,
            locked: false,
        })
    }

    pub fn address(&self) -> Addr {
        self.address
    }

    pub fn registry(&self) -> Addr {
        self.registry
    }

    pub fn assets(&self) -> (Addr, Addr) {
        (self.asset0, self.asset1)
    }

    pub fn reserves(&self) -> (Uint256, Uint256) {
        (self.reserve0, self.reserve1)
    }

    pub fn config(&self) -> &PairConfig {
        &self.config
    }

    pub fn lp(&self) -> &FungibleLedger {
        &self.lp
    }

    pub fn staking(&self) -> &Staking {
        &self.staking
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Mark the pair as having an operation in flight. Fails if it already
    /// does, i.e. if the call is reentrant.
    pub fn lock(&mut self) -> PairResult<()> {
        if self.locked {
            return Err(PairError::Reentrancy { pair: self.address });
        }

        self.locked = true;

        Ok(())
    }

    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// The holder's claimable staking reward as of `now`.
    pub fn accrued_reward(&self, holder: Addr, now: Timestamp) -> PairResult<Uint256> {
        let balance = self.lp.balance_of(holder);

        Ok(self.staking.accrued_reward(holder, balance, now)?)
    }

    /// Quote a swap against the current reserves.
    pub fn simulate_swap(&self, asset_in: Addr, amount_in: Uint256) -> PairResult<SwapOutcome> {
        if amount_in.is_zero() {
            return Err(PairError::ZeroAmount);
        }

        let (asset_out, reserve_in, reserve_out) = if asset_in == self.asset0 {
            (self.asset1, self.reserve0, self.reserve1)
        } else if asset_in == self.asset1 {
            (self.asset0, self.reserve1, self.reserve0)
        } else {
            return Err(PairError::InvalidAsset { asset: asset_in });
        };

        let (amount_out, fee) = xyk::swap_exact_amount_in(
            reserve_in,
            reserve_out,
            amount_in,
            self.config.swap_fee_rate_bps,
        )?;

        if amount_out.is_zero() || amount_out >= reserve_out {
            return Err(PairError::InsufficientReserve {
                amount_out,
                reserve: reserve_out,
            });
        }

        Ok(SwapOutcome {
            asset_out,
            amount_out,
            fee,
        })
    }

    // ---------------------------------- execute ----------------------------------

    pub fn execute(&mut self, ctx: Context, msg: ExecuteMsg) -> PairResult<Response> {
        match msg {
            ExecuteMsg::AddLiquidity { amount0, amount1 } => {
                self.add_liquidity(ctx, amount0, amount1)
            },
            ExecuteMsg::RemoveLiquidity { lp_amount } => self.remove_liquidity(ctx, lp_amount),
            ExecuteMsg::Swap {
                asset_in,
                amount_in,
            } => self.swap(ctx, asset_in, amount_in),
            ExecuteMsg::Withdraw {} => self.withdraw(ctx),
            ExecuteMsg::SendLp { to, amount } => {
                self.execute_ledger(ctx, ledger::ExecuteMsg::Transfer { to, amount })
            },
        }
    }

    /// Handle a message addressed to the pair's LP token. Every holder whose
    /// balance is about to change is checkpointed first.
    pub fn execute_ledger(
        &mut self,
        ctx: Context,
        msg: ledger::ExecuteMsg,
    ) -> PairResult<Response> {
        match &msg {
            ledger::ExecuteMsg::Transfer { to, .. } => {
                self.checkpoint(ctx.sender, ctx.block_time)?;
                self.checkpoint(*to, ctx.block_time)?;
            },
            ledger::ExecuteMsg::TransferFrom { from, to, .. } => {
                self.checkpoint(*from, ctx.block_time)?;
                self.checkpoint(*to, ctx.block_time)?;
            },
            ledger::ExecuteMsg::Mint { to, .. } => {
                self.checkpoint(*to, ctx.block_time)?;
            },
            ledger::ExecuteMsg::Burn { from, .. } => {
                self.checkpoint(*from, ctx.block_time)?;
            },
            ledger::ExecuteMsg::Approve { .. } | ledger::ExecuteMsg::ApproveFor { .. } => {},
        }

        let event = self.lp.execute(ctx.sender, msg)?;

        Ok(Response::new().add_event(event))
    }

    fn add_liquidity(
        &mut self,
        ctx: Context,
        amount0: Uint256,
        amount1: Uint256,
    ) -> PairResult<Response> {
        let shares = if self.reserve0.is_zero() && self.reserve1.is_zero() {
            xyk::initial_shares(amount0, amount1)?
        } else {
            if !xyk::is_proportional(amount0, amount1, self.reserve0, self.reserve1)? {
                return Err(PairError::RatioMismatch {
                    amount0,
                    amount1,
                    reserve0: self.reserve0,
                    reserve1: self.reserve1,
                });
            }

            xyk::subsequent_shares(
                amount0,
                amount1,
                self.reserve0,
                self.reserve1,
                self.lp.total_supply(),
            )?
        };

        if shares.is_zero() {
            return Err(PairError::ZeroLiquidity);
        }

        let reserve0 = self.reserve0.checked_add(amount0)?;
        let reserve1 = self.reserve1.checked_add(amount1)?;

        self.checkpoint(ctx.sender, ctx.block_time)?;
        let mint_event = self.lp.mint(self.address, ctx.sender, shares)?;

        self.reserve0 = reserve0;
        self.reserve1 = reserve1;

        #[cfg(feature = "tracing")]
        tracing::info!(
            pair = self.address.to_string(),
            provider = ctx.sender.to_string(),
            amount0 = amount0.to_string(),
            amount1 = amount1.to_string(),
            shares = shares.to_string(),
            "Added liquidity"
        );

        Ok(Response::new()
            .add_message(Message::transfer_from(
                self.asset0,
                ctx.sender,
                self.address,
                amount0,
            ))
            .add_message(Message::transfer_from(
                self.asset1,
                ctx.sender,
                self.address,
                amount1,
            ))
            .add_event(mint_event)
            .add_event(Event::LiquidityAdded(EvtLiquidity {
                pair: self.address,
                provider: ctx.sender,
                amount0,
                amount1,
                shares,
            }))
            .set_data(&shares)?)
    }

    fn remove_liquidity(&mut self, ctx: Context, lp_amount: Uint256) -> PairResult<Response> {
        if lp_amount.is_zero() {
            return Err(PairError::ZeroLiquidity);
        }

        let balance = self.lp.balance_of(ctx.sender);
        if balance < lp_amount {
            return Err(LedgerError::InsufficientBalance {
                holder: ctx.sender,
                balance,
                required: lp_amount,
            }
            .into());
        }

        let (amount0, amount1) = xyk::withdrawal(
            lp_amount,
            self.reserve0,
            self.reserve1,
            self.lp.total_supply(),
        )?;

        let reserve0 = self.reserve0.checked_sub(amount0)?;
        let reserve1 = self.reserve1.checked_sub(amount1)?;

        self.checkpoint(ctx.sender, ctx.block_time)?;
        let burn_event = self.lp.burn(self.address, ctx.sender, lp_amount)?;

        self.reserve0 = reserve0;
        self.reserve1 = reserve1;

        #[cfg(feature = "tracing")]
        tracing::info!(
            pair = self.address.to_string(),
            provider = ctx.sender.to_string(),
            amount0 = amount0.to_string(),
            amount1 = amount1.to_string(),
            shares = lp_amount.to_string(),
            "Removed liquidity"
        );

        let mut response = Response::new();

        for (asset, amount) in [(self.asset0, amount0), (self.asset1, amount1)] {
            if amount.is_non_zero() {
                response = response.add_message(Message::transfer(asset, ctx.sender, amount));
            }
        }

        Ok(response
            .add_event(burn_event)
            .add_event(Event::LiquidityRemoved(EvtLiquidity {
                pair: self.address,
                provider: ctx.sender,
                amount0,
                amount1,
                shares: lp_amount,
            }))
            .set_data(&(amount0, amount1))?)
    }

    fn swap(&mut self, ctx: Context, asset_in: Addr, amount_in: Uint256) -> PairResult<Response> {
        let outcome = self.simulate_swap(asset_in, amount_in)?;

        if asset_in == self.asset0 {
            self.reserve0 = self.reserve0.checked_add(amount_in)?;
            self.reserve1 = self.reserve1.checked_sub(outcome.amount_out)?;
        } else {
            self.reserve1 = self.reserve1.checked_add(amount_in)?;
            self.reserve0 = self.reserve0.checked_sub(outcome.amount_out)?;
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            pair = self.address.to_string(),
            trader = ctx.sender.to_string(),
            asset_in = asset_in.to_string(),
            amount_in = amount_in.to_string(),
            amount_out = outcome.amount_out.to_string(),
            fee = outcome.fee.to_string(),
            "Swapped"
        );

        Ok(Response::new()
            .add_message(Message::transfer_from(
                asset_in,
                ctx.sender,
                self.address,
                amount_in,
            ))
            .add_message(Message::transfer(
                outcome.asset_out,
                ctx.sender,
                outcome.amount_out,
            ))
            .add_event(Event::Swapped(EvtSwapped {
                pair: self.address,
                trader: ctx.sender,
                asset_in,
                amount_in,
                asset_out: outcome.asset_out,
                amount_out: outcome.amount_out,
            }))
            .set_data(&outcome)?)
    }

    fn withdraw(&mut self, ctx: Context) -> PairResult<Response> {
        self.checkpoint(ctx.sender, ctx.block_time)?;

        let amount = self.staking.take_accrued(ctx.sender);

        if amount.is_zero() {
            return Err(PairError::ZeroWithdraw);
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            pair = self.address.to_string(),
            holder = ctx.sender.to_string(),
            amount = amount.to_string(),
            "Withdrew staking reward"
        );

        Ok(Response::new()
            .add_message(Message::mint(self.registry, ctx.sender, amount))
            .add_event(Event::RewardWithdrawn(EvtRewardWithdrawn {
                pair: self.address,
                holder: ctx.sender,
                amount,
            }))
            .set_data(&amount)?)
    }

    fn checkpoint(&mut self, holder: Addr, now: Timestamp) -> PairResult<()> {
        let balance = self.lp.balance_of(holder);
        self.staking.checkpoint(holder, balance, now)?;

        Ok(())
    }
}

// ----------------------------------- tests -----------------------------------
