//! Constant product (a.k.a. xyk) curve math.
//!
//! All divisions round down, so that rounding errors always favor the pool
//! over the user.

use pairswap_types::{BPS_DENOMINATOR, MathResult, Uint256};

/// LP shares minted for the first deposit into an empty pool: the geometric
/// mean of the two amounts.
pub fn initial_shares(amount0: Uint256, amount1: Uint256) -> MathResult<Uint256> {
    Ok(amount0.checked_mul(amount1)?.isqrt())
}

/// Whether a deposit matches the current reserve ratio exactly, i.e.
/// `amount0 / amount1 == reserve0 / reserve1`.
pub fn is_proportional(
    amount0: Uint256,
    amount1: Uint256,
    reserve0: Uint256,
    reserve1: Uint256,
) -> MathResult<bool> {
    Ok(amount0.checked_mul(reserve1)? == amount1.checked_mul(reserve0)?)
}

/// LP shares minted for a deposit into a non-empty pool.
pub fn subsequent_shares(
    amount0: Uint256,
    amount1: Uint256,
    reserve0: Uint256,
    reserve1: Uint256,
    share_supply: Uint256,
) -> MathResult<Uint256> {
    let shares0 = amount0.checked_multiply_ratio_floor(share_supply, reserve0)?;
    let shares1 = amount1.checked_multiply_ratio_floor(share_supply, reserve1)?;

    Ok(shares0.min(shares1))
}

/// Amounts of both assets released by burning `shares`.
pub fn withdrawal(
    shares: Uint256,
    reserve0: Uint256,
    reserve1: Uint256,
    share_supply: Uint256,
) -> MathResult<(Uint256, Uint256)> {
    let amount0 = shares.checked_multiply_ratio_floor(reserve0, share_supply)?;
    let amount1 = shares.checked_multiply_ratio_floor(reserve1, share_supply)?;

    Ok((amount0, amount1))
}

/// Output of a swap with an exact input amount, and the fee withheld from the
/// input. The fee stays in the pool.
///
/// Solves `A * B = (A + effective_input) * (B - output)` for `output`, where
/// `effective_input` is the input after deducting the fee:
///
/// ```plain
/// output = B * effective_input / (A + effective_input)
/// ```
pub fn swap_exact_amount_in(
    input_reserve: Uint256,
    output_reserve: Uint256,
    input_amount: Uint256,
    fee_rate_bps: u32,
) -> MathResult<(Uint256, Uint256)> {
    let effective_input = input_amount.checked_multiply_ratio_floor(
        Uint256::from(u128::from(BPS_DENOMINATOR - fee_rate_bps)),
        Uint256::from(u128::from(BPS_DENOMINATOR)),
    )?;
    let fee = input_amount.checked_sub(effective_input)?;

    let output = output_reserve.checked_multiply_ratio_floor(
        effective_input,
        input_reserve.checked_add(effective_input)?,
    )?;

    Ok((output, fee))
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, proptest::prelude::*, std::str::FromStr, test_case::test_case};

    const WEI: u128 = 1_000_000_000_000_000_000;

    fn wei(amount: u128) -> Uint256 {
        Uint256::new(amount * WEI)
    }

    fn dec(s: &str) -> Uint256 {
        Uint256::from_str(s).unwrap()
    }

    #[test_case(200, 200, 200; "balanced")]
    #[test_case(9, 4, 6; "unbalanced")]
    #[test_case(0, 100, 0; "zero amount")]
    fn initial_shares_is_geometric_mean(amount0: u128, amount1: u128, expect: u128) {
        assert_eq!(initial_shares(wei(amount0), wei(amount1)).unwrap(), wei(expect));
    }

    #[test]
    fn subsequent_shares_takes_the_smaller_side() {
        // Reserves 9:4 with 6 shares; depositing 9:4 again mints another 6.
        assert_eq!(
            subsequent_shares(wei(9), wei(4), wei(9), wei(4), wei(6)).unwrap(),
            wei(6)
        );

        // If the deposit is off-ratio, the depositor is credited for the
        // less valuable side only.
        assert_eq!(
            subsequent_shares(wei(10), wei(1), wei(10), wei(10), wei(10)).unwrap(),
            wei(1)
        );
    }

    #[test]
    fn proportionality() {
        assert!(is_proportional(wei(10), wei(10), wei(10), wei(10)).unwrap());
        assert!(is_proportional(wei(9), wei(4), wei(18), wei(8)).unwrap());
        assert!(!is_proportional(wei(15), wei(5), wei(10), wei(10)).unwrap());
    }

    #[test]
    fn withdrawal_is_proportional() {
        assert_eq!(
            withdrawal(wei(20), wei(200), wei(200), wei(200)).unwrap(),
            (wei(20), wei(20))
        );
        // Rounds down.
        assert_eq!(
            withdrawal(Uint256::new(1), Uint256::new(5), Uint256::new(7), Uint256::new(3))
                .unwrap(),
            (Uint256::new(1), Uint256::new(2))
        );
    }

    #[test_case(
        wei(100), wei(25), wei(25),
        dec("4987992795677406443");
        "swap 25 of asset0 into 100/25 pool"
    )]
    #[test_case(
        wei(25), wei(100), wei(10),
        dec("28510151558478696025");
        "swap 10 of asset1 into 100/25 pool"
    )]
    fn swap_fixture(
        input_reserve: Uint256,
        output_reserve: Uint256,
        input: Uint256,
        expect: Uint256,
    ) {
        let (output, fee) =
            swap_exact_amount_in(input_reserve, output_reserve, input, 30).unwrap();

        assert_eq!(output, expect);
        assert_eq!(
            fee,
            input.checked_multiply_ratio_floor(Uint256::new(3), Uint256::new(1_000)).unwrap()
        );
    }

    #[test]
    fn fee_of_30_bps_matches_997_over_1000() {
        for amount in [1_u128, 7, 999, 1_001, 123_456_789, 10 * WEI + 3] {
            let input = Uint256::new(amount);
            let (_, fee) = swap_exact_amount_in(wei(1), wei(1), input, 30).unwrap();
            let effective = input
                .checked_multiply_ratio_floor(Uint256::new(997), Uint256::new(1_000))
                .unwrap();

            assert_eq!(input.checked_sub(fee).unwrap(), effective);
        }
    }

    proptest! {
        /// Executing a swap never decreases the product of the reserves.
        #[test]
        fn swap_never_decreases_invariant(
            input_reserve in 1_u128..1_000_000_000 * WEI,
            output_reserve in 1_u128..1_000_000_000 * WEI,
            input in 1_u128..1_000_000_000 * WEI,
        ) {
            let input_reserve = Uint256::new(input_reserve);
            let output_reserve = Uint256::new(output_reserve);
            let input = Uint256::new(input);

            let (output, _) =
                swap_exact_amount_in(input_reserve, output_reserve, input, 30).unwrap();
            prop_assert!(output < output_reserve);

            let before = input_reserve.checked_mul(output_reserve).unwrap();
            let after = input_reserve
                .checked_add(input)
                .unwrap()
                .checked_mul(output_reserve.checked_sub(output).unwrap())
                .unwrap();
            prop_assert!(after > before);
        }
    }
}
