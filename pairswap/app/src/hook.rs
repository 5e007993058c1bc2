use {
    crate::{App, AppResult},
    pairswap_types::EvtTransfer,
};

/// Logic attached to a token that runs after each of its successful
/// transfers, with full access to the state machine.
///
/// This is how tokens that call back into their recipient are modeled, which
/// is also how a malicious token would attempt to reenter a pair in the middle
/// of an operation. Any error returned aborts the message that caused the
/// transfer.
pub trait TransferHook: Send + Sync {
    fn on_transfer(&self, app: &mut App, transfer: &EvtTransfer) -> AppResult<()>;
}

impl<F> TransferHook for F
where
    F: Fn(&mut App, &EvtTransfer) -> AppResult<()> + Send + Sync,
{
    fn on_transfer(&self, app: &mut App, transfer: &EvtTransfer) -> AppResult<()> {
        self(app, transfer)
    }
}
