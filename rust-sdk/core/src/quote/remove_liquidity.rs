//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use crate::{
    ConstantProductSwap, CoreError, ExitSide, PairFacade, RemovalQuote, CONSTANT_PRODUCT_FEE_PER_MILLE, DIVISION_BY_ZERO, QUOTE_PRECISION,
    ZERO_TOTAL_SUPPLY,
};
use bigdecimal::{BigDecimal, RoundingMode, Zero};
use log::{debug, warn};

fn round_quote(value: &BigDecimal) -> BigDecimal {
    value.with_scale_round(QUOTE_PRECISION, RoundingMode::HalfUp)
}

/// Simulates selling `amount_in` into a constant-product pair with a 0.3% fee on the input.
///
/// # Parameters
/// - `reserve_in`: The reserve of the token sold.
/// - `reserve_out`: The reserve of the token bought.
/// - `amount_in`: The amount sold.
///
/// # Returns
/// The reserves after the swap and the amount bought, rounded to 4 decimal places.
pub fn simulate_constant_product_swap(reserve_in: &BigDecimal, reserve_out: &BigDecimal, amount_in: &BigDecimal) -> Result<ConstantProductSwap, CoreError> {
    let fee_mul = BigDecimal::from(1000 - CONSTANT_PRODUCT_FEE_PER_MILLE) / BigDecimal::from(1000);
    let purchasing_power = amount_in * fee_mul;
    let new_reserve_in = reserve_in + &purchasing_power;
    if new_reserve_in.is_zero() {
        return Err(DIVISION_BY_ZERO);
    }

    let invariant = reserve_in * reserve_out;
    let new_reserve_out = &invariant / &new_reserve_in;
    let amount_out = round_quote(&(reserve_out - &new_reserve_out));

    let new_invariant = &new_reserve_in * &new_reserve_out;
    if round_quote(&new_invariant) != round_quote(&invariant) {
        warn!(target: "log", "Constant product invariant mismatch: {} != {}", new_invariant, invariant);
    }

    Ok(ConstantProductSwap {
        new_reserve_in,
        new_reserve_out,
        amount_out,
    })
}

/// Computes the payout of burning `lp_amount` pool tokens of a constant-product pair
/// and receiving everything in one asset.
///
/// The burned share entitles the holder to both reserves. The entitlement of the other side is
/// sold into the pair for the exit asset. A native-currency exit from a pair without the wrapped
/// native token is valued through the pair's tracked native reserve instead.
///
/// # Parameters
/// - `lp_amount`: The amount of LP tokens burned.
/// - `pair`: The pair reserves and supply.
/// - `exit`: The asset to receive.
///
/// # Returns
/// A `RemovalQuote` whose `amount` is rounded to 4 decimal places. An unknown exit asset quotes zero.
pub fn remove_liquidity_quote(lp_amount: &BigDecimal, pair: &PairFacade, exit: ExitSide) -> Result<RemovalQuote, CoreError> {
    if pair.total_supply.is_zero() {
        return Err(ZERO_TOTAL_SUPPLY);
    }

    let share = lp_amount / &pair.total_supply;
    let entitlement_a = &share * &pair.reserve_a;
    let entitlement_b = &share * &pair.reserve_b;
    debug!(target: "log", "Pool share {} entitles to {} token A and {} token B", share, entitlement_a, entitlement_b);

    let (swap, amount) = match exit {
        ExitSide::TokenA => {
            let swap = simulate_constant_product_swap(&pair.reserve_b, &pair.reserve_a, &entitlement_b)?;
            let amount = &entitlement_a + &swap.amount_out;
            (Some(swap), amount)
        }
        ExitSide::TokenB => {
            let swap = simulate_constant_product_swap(&pair.reserve_a, &pair.reserve_b, &entitlement_a)?;
            let amount = &entitlement_b + &swap.amount_out;
            (Some(swap), amount)
        }
        ExitSide::TrackedReserve => (None, &share * &pair.tracked_reserve_native),
        ExitSide::Unknown => {
            warn!(target: "log", "Unknown exit token, quoting zero");
            (None, BigDecimal::zero())
        }
    };

    Ok(RemovalQuote {
        share,
        entitlement_a,
        entitlement_b,
        swap_amount_out: swap.as_ref().map(|swap| swap.amount_out.clone()).unwrap_or_else(BigDecimal::zero),
        swap,
        amount: round_quote(&amount),
    })
}
