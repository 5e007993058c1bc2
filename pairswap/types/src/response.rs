use {
    crate::{Addr, Event, ExecuteMsg, Json, StdError, StdResult, Timestamp, Uint256, ledger},
    serde::Serialize,
};

/// Information about the call a contract is handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    /// The contract being executed.
    pub contract: Addr,
    /// The account or contract that sent the message.
    pub sender: Addr,
    pub block_time: Timestamp,
}

/// A message a contract asks the state machine to execute on its behalf,
/// after the contract's own state changes have been applied. The contract is
/// the sender of the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub contract: Addr,
    pub msg: ExecuteMsg,
}

impl Message {
    pub fn execute<M>(contract: Addr, msg: M) -> Self
    where
        M: Into<ExecuteMsg>,
    {
        Self {
            contract,
            msg: msg.into(),
        }
    }

    /// Send `amount` of `asset` held by the calling contract to `to`.
    pub fn transfer(asset: Addr, to: Addr, amount: Uint256) -> Self {
        Self::execute(asset, ledger::ExecuteMsg::Transfer { to, amount })
    }

    /// Pull `amount` of `asset` from `from`, spending the calling contract's
    /// allowance.
    pub fn transfer_from(asset: Addr, from: Addr, to: Addr, amount: Uint256) -> Self {
        Self::execute(asset, ledger::ExecuteMsg::TransferFrom { from, to, amount })
    }

    /// Mint `amount` of `asset`, with the calling contract as the minter.
    pub fn mint(asset: Addr, to: Addr, amount: Uint256) -> Self {
        Self::execute(asset, ledger::ExecuteMsg::Mint { to, amount })
    }
}

/// The outcome of a successful contract call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
    pub messages: Vec<Message>,
    pub events: Vec<Event>,
    pub data: Option<Json>,
}

impl Response {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_message(mut self, msg: Message) -> Self {
        self.messages.push(msg);
        self
    }

    pub fn add_event(mut self, event: Event) -> Self {
        self.events.push(event);
        self
    }

    pub fn set_data<T>(mut self, data: &T) -> StdResult<Self>
    where
        T: Serialize,
    {
        let json = serde_json::to_value(data).map_err(StdError::serialize::<T, _>)?;
        self.data = Some(json);
        Ok(self)
    }
}
