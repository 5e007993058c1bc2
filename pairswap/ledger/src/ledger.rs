use {
    crate::{LedgerError, LedgerResult},
    pairswap_types::{Addr, Event, TokenMetadata, Uint256, ledger::ExecuteMsg},
    std::collections::{BTreeMap, BTreeSet},
};

/// Who may mint and burn a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MintAuthority {
    /// Anyone. Only meant for fixture tokens.
    Anyone,
    /// Only the listed addresses.
    Only(BTreeSet<Addr>),
}

impl MintAuthority {
    pub fn only<I>(minters: I) -> Self
    where
        I: IntoIterator<Item = Addr>,
    {
        Self::Only(minters.into_iter().collect())
    }

    pub fn permits(&self, sender: Addr) -> bool {
        match self {
            MintAuthority::Anyone => true,
            MintAuthority::Only(minters) => minters.contains(&sender),
        }
    }
}

/// Balances, allowances and total supply of a fungible token.
///
/// Every mutating method validates all of its preconditions before touching
/// any state, so a method that returns an error leaves the ledger unchanged.
#[derive(Debug, Clone)]
pub struct FungibleLedger {
    address: Addr,
    metadata: TokenMetadata,
    mint_authority: MintAuthority,
    total_supply: Uint256,
    balances: BTreeMap<Addr, Uint256>,
    allowances: BTreeMap<(Addr, Addr), Uint256>,
}

impl FungibleLedger {
    pub fn new(address: Addr, metadata: TokenMetadata, mint_authority: MintAuthority) -> Self {
        Self {
            address,
            metadata,
            mint_authority,
            total_supply: Uint256::ZERO,
            balances: BTreeMap::new(),
            allowances: BTreeMap::new(),
        }
    }

    pub fn address(&self) -> Addr {
        self.address
    }

    pub fn metadata(&self) -> &TokenMetadata {
        &self.metadata
    }

    pub fn total_supply(&self) -> Uint256 {
        self.total_supply
    }

    pub fn balance_of(&self, owner: Addr) -> Uint256 {
        self.balances.get(&owner).copied().unwrap_or_default()
    }

    pub fn allowance(&self, owner: Addr, spender: Addr) -> Uint256 {
        self.allowances
            .get(&(owner, spender))
            .copied()
            .unwrap_or_default()
    }

    /// Add an address to the mint authority. No-op if anyone may mint.
    pub fn authorize_minter(&mut self, minter: Addr) {
        if let MintAuthority::Only(minters) = &mut self.mint_authority {
            minters.insert(minter);
        }
    }

    pub fn execute(&mut self, sender: Addr, msg: ExecuteMsg) -> LedgerResult<Event> {
        match msg {
            ExecuteMsg::Transfer { to, amount } => self.transfer(sender, to, amount),
            ExecuteMsg::Approve { spender, amount } => Ok(self.approve(sender, spender, amount)),
            ExecuteMsg::ApproveFor {
                owner,
                spender,
                amount,
            } => self.approve_for(sender, owner, spender, amount),
            ExecuteMsg::TransferFrom { from, to, amount } => {
                self.transfer_from(sender, from, to, amount)
            },
            ExecuteMsg::Mint { to, amount } => self.mint(sender, to, amount),
            ExecuteMsg::Burn { from, amount } => self.burn(sender, from, amount),
        }
    }

    pub fn mint(&mut self, minter: Addr, to: Addr, amount: Uint256) -> LedgerResult<Event> {
        self.ensure_authorized(minter, "mint")?;

        let total_supply = self.total_supply.checked_add(amount)?;
        let balance = self.balance_of(to).checked_add(amount)?;

        self.total_supply = total_supply;
        self.set_balance(to, balance);

        Ok(Event::transfer(self.address, Addr::ZERO, to, amount))
    }

    pub fn burn(&mut self, burner: Addr, from: Addr, amount: Uint256) -> LedgerResult<Event> {
        self.ensure_authorized(burner, "burn")?;

        let balance = self.checked_debit(from, amount)?;
        let total_supply = self.total_supply.checked_sub(amount)?;

        self.total_supply = total_supply;
        self.set_balance(from, balance);

        Ok(Event::transfer(self.address, from, Addr::ZERO, amount))
    }

    pub fn transfer(&mut self, from: Addr, to: Addr, amount: Uint256) -> LedgerResult<Event> {
        self.move_balance(from, to, amount)?;

        Ok(Event::transfer(self.address, from, to, amount))
    }

    pub fn approve(&mut self, owner: Addr, spender: Addr, amount: Uint256) -> Event {
        self.allowances.insert((owner, spender), amount);

        Event::approval(self.address, owner, spender, amount)
    }

    /// Set an allowance on behalf of `owner`. The sender must be the owner.
    pub fn approve_for(
        &mut self,
        sender: Addr,
        owner: Addr,
        spender: Addr,
        amount: Uint256,
    ) -> LedgerResult<Event> {
        if sender != owner {
            return Err(LedgerError::Unauthorized {
                contract: self.address,
                sender,
                action: "approve on behalf of another holder of",
            });
        }

        Ok(self.approve(owner, spender, amount))
    }

    pub fn transfer_from(
        &mut self,
        spender: Addr,
        from: Addr,
        to: Addr,
        amount: Uint256,
    ) -> LedgerResult<Event> {
        let allowance = self.allowance(from, spender);
        let remaining = allowance
            .checked_sub(amount)
            .map_err(|_| LedgerError::InsufficientAllowance {
                owner: from,
                spender,
                allowance,
                required: amount,
            })?;

        self.move_balance(from, to, amount)?;
        self.allowances.insert((from, spender), remaining);

        Ok(Event::transfer(self.address, from, to, amount))
    }

    fn move_balance(&mut self, from: Addr, to: Addr, amount: Uint256) -> LedgerResult<()> {
        let from_balance = self.checked_debit(from, amount)?;

        if from == to {
            return Ok(());
        }

        let to_balance = self.balance_of(to).checked_add(amount)?;

        self.set_balance(from, from_balance);
        self.set_balance(to, to_balance);

        Ok(())
    }

    fn checked_debit(&self, holder: Addr, amount: Uint256) -> LedgerResult<Uint256> {
        let balance = self.balance_of(holder);
        balance
            .checked_sub(amount)
            .map_err(|_| LedgerError::InsufficientBalance {
                holder,
                balance,
                required: amount,
            })
    }

    fn set_balance(&mut self, holder: Addr, balance: Uint256) {
        if balance.is_zero() {
            self.balances.remove(&holder);
        } else {
            self.balances.insert(holder, balance);
        }
    }

    fn ensure_authorized(&self, sender: Addr, action: &'static str) -> LedgerResult<()> {
        if !self.mint_authority.permits(sender) {
            return Err(LedgerError::Unauthorized {
                contract: self.address,
                sender,
                action,
            });
        }

        Ok(())
    }
}

// ----------------------------------- tests -----------------------------------
