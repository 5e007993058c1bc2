use {
    pairswap_types::{Addr, BPS_DENOMINATOR, Duration, MathResult, Timestamp, Uint256},
    std::collections::BTreeMap,
};

/// Reward earned by holding `balance` LP shares for `elapsed` time, at a rate
/// of `reward_rate_bps` basis points of the balance per day. Rounds down.
pub fn pending_reward(
    balance: Uint256,
    elapsed: Duration,
    reward_rate_bps: u32,
) -> MathResult<Uint256> {
    let numerator = Uint256::from(u128::from(elapsed.into_seconds()))
        .checked_mul(Uint256::from(u128::from(reward_rate_bps)))?;
    let denominator = Uint256::from(u128::from(BPS_DENOMINATOR))
        .checked_mul(Uint256::from(u128::from(Duration::SECONDS_PER_DAY)))?;

    balance.checked_multiply_ratio_floor(numerator, denominator)
}

/// Staking state of a single LP holder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StakeInfo {
    /// When the reward was last folded into `accrued`.
    pub last_checkpoint: Timestamp,
    /// Reward earned up to `last_checkpoint` and not yet withdrawn.
    pub accrued: Uint256,
}

/// Per-holder staking ledger of a pair.
///
/// The ledger doesn't track balances itself; the caller passes in the LP
/// balance the holder has held since their last checkpoint. For this to be
/// correct, every change to a holder's balance must be preceded by a call to
/// [`checkpoint`](Self::checkpoint) with the balance from before the change.
#[derive(Debug, Clone)]
pub struct Staking {
    reward_rate_bps: u32,
    holders: BTreeMap<Addr, StakeInfo>,
}

impl Staking {
    pub fn new(reward_rate_bps: u32) -> Self {
        Self {
            reward_rate_bps,
            holders: BTreeMap::new(),
        }
    }

    pub fn stake_info(&self, holder: Addr) -> Option<StakeInfo> {
        self.holders.get(&holder).copied()
    }

    /// The holder's total claimable reward as of `now`, without mutating
    /// anything.
    pub fn accrued_reward(
        &self,
        holder: Addr,
        balance: Uint256,
        now: Timestamp,
    ) -> MathResult<Uint256> {
        let Some(info) = self.holders.get(&holder) else {
            return Ok(Uint256::ZERO);
        };

        let elapsed = now.saturating_since(info.last_checkpoint);
        let pending = pending_reward(balance, elapsed, self.reward_rate_bps)?;

        info.accrued.checked_add(pending)
    }

    /// Fold the reward earned since the last checkpoint into the accrued
    /// amount, and restart the clock. Returns the new accrued amount.
    pub fn checkpoint(
        &mut self,
        holder: Addr,
        balance: Uint256,
        now: Timestamp,
    ) -> MathResult<Uint256> {
        let accrued = self.accrued_reward(holder, balance, now)?;

        self.holders.insert(holder, StakeInfo {
            last_checkpoint: now,
            accrued,
        });

        Ok(accrued)
    }

    /// Reset the holder's accrued reward to zero, returning what it was.
    /// Callers should checkpoint first.
    pub fn take_accrued(&mut self, holder: Addr) -> Uint256 {
        match self.holders.get_mut(&holder) {
            Some(info) => std::mem::take(&mut info.accrued),
            None => Uint256::ZERO,
        }
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, test_case::test_case};

    const WEI: u128 = 1_000_000_000_000_000_000;
    const HOLDER: Addr = Addr::mock(1);
    const OTHER: Addr = Addr::mock(2);

    fn wei(amount: u128) -> Uint256 {
        Uint256::new(amount * WEI)
    }

    fn at(seconds: u64) -> Timestamp {
        Timestamp::from_seconds(seconds)
    }

    #[test_case(300, Duration::from_days(1), 30; "one day")]
    #[test_case(300, Duration::from_days(2), 60; "two days")]
    #[test_case(300, Duration::from_hours(12), 15; "half a day")]
    #[test_case(0, Duration::from_days(1), 0; "zero balance")]
    #[test_case(300, Duration::ZERO, 0; "no time")]
    fn pending_reward_is_linear(balance: u128, elapsed: Duration, expect: u128) {
        assert_eq!(
            pending_reward(wei(balance), elapsed, 1_000).unwrap(),
            wei(expect)
        );
    }

    #[test]
    fn unknown_holder_has_nothing() {
        let staking = Staking::new(1_000);

        assert_eq!(
            staking.accrued_reward(HOLDER, wei(300), at(86_400)).unwrap(),
            Uint256::ZERO
        );
    }

    #[test]
    fn checkpoint_uses_balance_before_change() {
        let mut staking = Staking::new(1_000);

        // Holder receives 300 shares at t = 0.
        staking.checkpoint(HOLDER, Uint256::ZERO, at(0)).unwrap();

        // One day later, they receive 100 more. Checkpoint with the old balance.
        let accrued = staking.checkpoint(HOLDER, wei(300), at(86_400)).unwrap();
        assert_eq!(accrued, wei(30));

        // No time has passed since: the new balance has earned nothing yet.
        assert_eq!(
            staking.accrued_reward(HOLDER, wei(400), at(86_400)).unwrap(),
            wei(30)
        );

        // Another day: 30 from before + 40 on the new balance.
        assert_eq!(
            staking.accrued_reward(HOLDER, wei(400), at(172_800)).unwrap(),
            wei(70)
        );
    }

    #[test]
    fn zero_balance_keeps_earned_reward() {
        let mut staking = Staking::new(1_000);

        staking.checkpoint(HOLDER, Uint256::ZERO, at(0)).unwrap();
        staking.checkpoint(HOLDER, wei(100), at(86_400)).unwrap();

        // Balance is now zero; the reward stays put.
        assert_eq!(
            staking
                .accrued_reward(HOLDER, Uint256::ZERO, at(10 * 86_400))
                .unwrap(),
            wei(10)
        );
    }

    #[test]
    fn holders_are_independent() {
        let mut staking = Staking::new(1_000);

        staking.checkpoint(HOLDER, Uint256::ZERO, at(0)).unwrap();
        let before = staking.accrued_reward(HOLDER, wei(100), at(3_600)).unwrap();

        staking.checkpoint(OTHER, Uint256::ZERO, at(1_000)).unwrap();
        staking.checkpoint(OTHER, wei(500), at(2_000)).unwrap();
        staking.take_accrued(OTHER);

        assert_eq!(
            staking.accrued_reward(HOLDER, wei(100), at(3_600)).unwrap(),
            before
        );
    }

    #[test]
    fn take_accrued_resets() {
        let mut staking = Staking::new(1_000);

        staking.checkpoint(HOLDER, Uint256::ZERO, at(0)).unwrap();
        staking.checkpoint(HOLDER, wei(300), at(86_400)).unwrap();

        assert_eq!(staking.take_accrued(HOLDER), wei(30));
        assert_eq!(staking.take_accrued(HOLDER), Uint256::ZERO);
        assert_eq!(staking.stake_info(HOLDER).unwrap().last_checkpoint, at(86_400));
    }
}
