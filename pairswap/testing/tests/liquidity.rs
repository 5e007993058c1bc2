use {
    pairswap_testing::{Contracts, ResultExt, TestSuite, setup_test_with_pair, to_wei},
    pairswap_types::{Addr, ReservesResponse, Uint256, pair},
    proptest::prelude::*,
    test_case::test_case,
};

/// The pair's reserves must always equal what it actually holds.
fn assert_reserves_match_balances(suite: &TestSuite, contracts: &Contracts, pair: Addr) {
    let reserves = suite.query_reserves(pair).should_succeed();

    assert_eq!(reserves, ReservesResponse {
        reserve0: suite.balance(contracts.token0, pair),
        reserve1: suite.balance(contracts.token1, pair),
    });
}

#[test_case(200, 200, 200; "balanced")]
#[test_case(9, 4, 6; "unbalanced")]
fn first_deposit(amount0: u128, amount1: u128, shares: u128) {
    let (mut suite, accounts, contracts, pair) = setup_test_with_pair();

    suite
        .add_liquidity(accounts.owner, pair, to_wei(amount0), to_wei(amount1))
        .should_succeed();

    suite
        .query_balance(pair, accounts.owner)
        .should_succeed_and_equal(to_wei(shares));
    suite
        .query_total_supply(pair)
        .should_succeed_and_equal(to_wei(shares));
    suite
        .query_reserves(pair)
        .should_succeed_and_equal(ReservesResponse {
            reserve0: to_wei(amount0),
            reserve1: to_wei(amount1),
        });
    assert_eq!(
        suite.balance(contracts.token0, accounts.owner),
        to_wei(1_000_000 - amount0)
    );
    assert_reserves_match_balances(&suite, &contracts, pair);
}

#[test]
fn zero_first_deposit_fails() {
    let (mut suite, accounts, _, pair) = setup_test_with_pair();

    suite
        .add_liquidity(accounts.owner, pair, Uint256::ZERO, Uint256::ZERO)
        .should_fail_with_error("liquidity tokens = 0");
}

#[test]
fn proportional_deposit() {
    let (mut suite, accounts, contracts, pair) = setup_test_with_pair();

    suite
        .add_liquidity(accounts.owner, pair, to_wei(100), to_wei(100))
        .should_succeed();
    suite
        .add_liquidity(accounts.user, pair, to_wei(50), to_wei(50))
        .should_succeed();

    suite
        .query_balance(pair, accounts.user)
        .should_succeed_and_equal(to_wei(50));
    suite
        .query_total_supply(pair)
        .should_succeed_and_equal(to_wei(150));
    assert_reserves_match_balances(&suite, &contracts, pair);
}

#[test]
fn non_proportional_deposit_fails() {
    let (mut suite, accounts, contracts, pair) = setup_test_with_pair();

    suite
        .add_liquidity(accounts.owner, pair, to_wei(10), to_wei(10))
        .should_succeed();

    suite
        .add_liquidity(accounts.owner, pair, to_wei(15), to_wei(5))
        .should_fail_with_error("x / y != dx / dy");

    suite
        .query_total_supply(pair)
        .should_succeed_and_equal(to_wei(10));
    assert_reserves_match_balances(&suite, &contracts, pair);
}

#[test]
fn deposit_without_approval_is_rolled_back() {
    let (mut suite, accounts, contracts, pair) = setup_test_with_pair();

    // Shares are minted before the assets are pulled. When pulling fails, the
    // mint must be undone too.
    suite
        .execute(accounts.owner, pair, pair::ExecuteMsg::AddLiquidity {
            amount0: to_wei(100),
            amount1: to_wei(100),
        })
        .should_fail_with_error("insufficient allowance");

    suite
        .query_total_supply(pair)
        .should_succeed_and_equal(Uint256::ZERO);
    suite
        .query_reserves(pair)
        .should_succeed_and_equal(ReservesResponse {
            reserve0: Uint256::ZERO,
            reserve1: Uint256::ZERO,
        });
    assert_eq!(
        suite.balance(contracts.token0, accounts.owner),
        to_wei(1_000_000)
    );
}

#[test]
fn deposit_beyond_balance_fails() {
    let (mut suite, accounts, _, pair) = setup_test_with_pair();

    suite
        .add_liquidity(accounts.owner, pair, to_wei(2_000_000), to_wei(2_000_000))
        .should_fail_with_error("not enough tokens");
}

#[test]
fn remove_some_liquidity() {
    let (mut suite, accounts, contracts, pair) = setup_test_with_pair();

    suite
        .add_liquidity(accounts.owner, pair, to_wei(200), to_wei(200))
        .should_succeed();
    suite
        .remove_liquidity(accounts.owner, pair, to_wei(20))
        .should_succeed();

    suite
        .query_balance(pair, accounts.owner)
        .should_succeed_and_equal(to_wei(180));
    suite
        .query_reserves(pair)
        .should_succeed_and_equal(ReservesResponse {
            reserve0: to_wei(180),
            reserve1: to_wei(180),
        });
    assert_eq!(
        suite.balance(contracts.token1, accounts.owner),
        to_wei(1_000_000 - 180)
    );
    assert_reserves_match_balances(&suite, &contracts, pair);
}

#[test]
fn remove_all_liquidity() {
    let (mut suite, accounts, contracts, pair) = setup_test_with_pair();

    suite
        .add_liquidity(accounts.owner, pair, to_wei(200), to_wei(200))
        .should_succeed();
    suite
        .remove_liquidity(accounts.owner, pair, to_wei(200))
        .should_succeed();

    suite
        .query_total_supply(pair)
        .should_succeed_and_equal(Uint256::ZERO);
    assert_eq!(
        suite.balance(contracts.token0, accounts.owner),
        to_wei(1_000_000)
    );
    assert_reserves_match_balances(&suite, &contracts, pair);
}

#[test]
fn remove_more_than_held_fails() {
    let (mut suite, accounts, _, pair) = setup_test_with_pair();

    suite
        .add_liquidity(accounts.owner, pair, to_wei(100), to_wei(100))
        .should_succeed();
    suite
        .add_liquidity(accounts.user, pair, to_wei(100), to_wei(100))
        .should_succeed();

    suite
        .remove_liquidity(accounts.user, pair, to_wei(150))
        .should_fail_with_error("not enough tokens");

    suite
        .remove_liquidity(accounts.user, pair, Uint256::ZERO)
        .should_fail_with_error("liquidity tokens = 0");
}

#[test]
fn lp_shares_are_transferable() {
    let (mut suite, accounts, _, pair) = setup_test_with_pair();

    suite
        .add_liquidity(accounts.owner, pair, to_wei(50), to_wei(50))
        .should_succeed();

    suite
        .execute(accounts.owner, pair, pair::ExecuteMsg::SendLp {
            to: accounts.user,
            amount: to_wei(20),
        })
        .should_succeed();

    suite
        .query_balance(pair, accounts.owner)
        .should_succeed_and_equal(to_wei(30));
    suite
        .query_balance(pair, accounts.user)
        .should_succeed_and_equal(to_wei(20));

    // The new holder can redeem them.
    suite
        .remove_liquidity(accounts.user, pair, to_wei(20))
        .should_succeed();
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Depositing and then withdrawing the shares received never returns more
    /// than was deposited.
    #[test]
    fn add_then_remove_never_gains(
        initial0 in 1_u128..1_000_000_000_000,
        initial1 in 1_u128..1_000_000_000_000,
        multiple in 1_u128..1_000,
    ) {
        let (mut suite, accounts, contracts, pair) = setup_test_with_pair();

        suite
            .add_liquidity(accounts.owner, pair, Uint256::new(initial0), Uint256::new(initial1))
            .should_succeed();

        let before0 = suite.balance(contracts.token0, accounts.user);
        let before1 = suite.balance(contracts.token1, accounts.user);

        suite
            .add_liquidity(
                accounts.user,
                pair,
                Uint256::new(initial0 * multiple),
                Uint256::new(initial1 * multiple),
            )
            .should_succeed();

        let shares = suite.query_balance(pair, accounts.user).should_succeed();
        suite.remove_liquidity(accounts.user, pair, shares).should_succeed();

        prop_assert!(suite.balance(contracts.token0, accounts.user) <= before0);
        prop_assert!(suite.balance(contracts.token1, accounts.user) <= before1);
        assert_reserves_match_balances(&suite, &contracts, pair);
    }
}
