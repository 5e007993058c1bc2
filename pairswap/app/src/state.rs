use {
    pairswap_ledger::FungibleLedger,
    pairswap_pair::PairEngine,
    pairswap_registry::Registry,
    pairswap_types::Addr,
    std::{collections::BTreeMap, fmt},
};

/// What kind of contract lives at an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractKind {
    Token,
    Registry,
    Pair,
}

impl ContractKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractKind::Token => "token",
            ContractKind::Registry => "registry",
            ContractKind::Pair => "pair",
        }
    }
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every contract known to the state machine, keyed by address. An address
/// appears in at most one of the maps.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub tokens: BTreeMap<Addr, FungibleLedger>,
    pub registries: BTreeMap<Addr, Registry>,
    pub pairs: BTreeMap<Addr, PairEngine>,
}

/// A borrowed contract of any kind.
#[derive(Debug, Clone, Copy)]
pub enum ContractRef<'a> {
    Token(&'a FungibleLedger),
    Registry(&'a Registry),
    Pair(&'a PairEngine),
}

impl ContractRef<'_> {
    pub fn kind(&self) -> ContractKind {
        match self {
            ContractRef::Token(_) => ContractKind::Token,
            ContractRef::Registry(_) => ContractKind::Registry,
            ContractRef::Pair(_) => ContractKind::Pair,
        }
    }
}

impl State {
    pub fn get(&self, address: Addr) -> Option<ContractRef<'_>> {
        if let Some(token) = self.tokens.get(&address) {
            return Some(ContractRef::Token(token));
        }

        if let Some(registry) = self.registries.get(&address) {
            return Some(ContractRef::Registry(registry));
        }

        self.pairs.get(&address).map(ContractRef::Pair)
    }

    pub fn kind_of(&self, address: Addr) -> Option<ContractKind> {
        self.get(address).map(|contract| contract.kind())
    }

    pub fn contains(&self, address: Addr) -> bool {
        self.kind_of(address).is_some()
    }
}
