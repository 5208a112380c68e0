//! Integer replicas of the programs' settlement and pricing arithmetic.
//!
//! All products are taken in `u128` before dividing, and every division
//! rounds down, as on chain.

use crate::constants::{BASIS_POINTS, MAX_FEE_BPS, MINIMUM_LIQUIDITY};

/// What a new wager would return if its side won with the pools as they
/// stand after the wager lands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PayoutPreview {
    pub payout: u64,
    /// Portion of the losing pool owed to the wager, before fees.
    pub share: u64,
    pub fee: u64,
    /// Implied probability of the chosen side after the wager.
    pub odds_bps: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SwapQuote {
    pub amount_out: u64,
    /// `amount_in * fee_bps / 10000`, truncated. `amount_out` is priced with
    /// the exact fractional fee, so this can read 0 on a small trade that
    /// still paid one.
    pub fee: u64,
    /// `amount_in - fee`. Informational only; the pool receives the whole
    /// `amount_in`.
    pub amount_in_net: u64,
    /// Shortfall of the execution price against the spot price.
    pub price_impact_bps: u64,
}

fn clamp_fee(fee_bps: u16) -> u128 {
    fee_bps.min(MAX_FEE_BPS) as u128
}

/// `side / (side + other)` in basis points; an even split when both are empty.
pub fn odds_bps(side_pool: u64, other_pool: u64) -> u64 {
    let total = side_pool as u128 + other_pool as u128;
    if total == 0 {
        return BASIS_POINTS / 2;
    }
    (side_pool as u128 * BASIS_POINTS as u128 / total) as u64
}

/// Pari-mutuel preview. Pools are taken *before* the wager is added.
/// `None` when the payout does not fit in a `u64`.
pub fn preview_payout(
    wager: u64,
    chosen_pool: u64,
    opposing_pool: u64,
    fee_bps: u16,
) -> Option<PayoutPreview> {
    let winning = chosen_pool as u128 + wager as u128;
    let losing = opposing_pool as u128;
    let odds = if winning + losing == 0 {
        BASIS_POINTS / 2
    } else {
        (winning * BASIS_POINTS as u128 / (winning + losing)) as u64
    };

    if winning == 0 {
        return Some(PayoutPreview {
            payout: wager,
            odds_bps: odds,
            ..Default::default()
        });
    }

    let share = wager as u128 * losing / winning;
    let fee = share * clamp_fee(fee_bps) / BASIS_POINTS as u128;
    // share <= losing and fee <= share, so both fit.
    let payout = u64::try_from(wager as u128 + share - fee).ok()?;

    Some(PayoutPreview {
        payout,
        share: share as u64,
        fee: fee as u64,
        odds_bps: odds,
    })
}

/// `(payout, fee)` for a winning bet against resolved pools. `None` when the
/// winning pool is empty, which the program treats as nothing to claim.
pub fn settled_payout(
    bet_amount: u64,
    winning_pool: u64,
    losing_pool: u64,
    fee_bps: u16,
) -> Option<(u64, u64)> {
    if winning_pool == 0 {
        return None;
    }
    let share = bet_amount as u128 * losing_pool as u128 / winning_pool as u128;
    let fee = share * clamp_fee(fee_bps) / BASIS_POINTS as u128;
    let payout = (bet_amount as u128).checked_add(share - fee)?;
    Some((u64::try_from(payout).ok()?, fee as u64))
}

/// Constant-product swap quote.
///
/// `amount_out` uses the program's scaled form
/// `a * (10000 - f) * R_out / (R_in * 10000 + a * (10000 - f))`, which keeps
/// the fee fraction exact instead of truncating it first. A trade that would
/// overflow on chain quotes as zero.
pub fn quote_swap(amount_in: u64, reserve_in: u64, reserve_out: u64, fee_bps: u64) -> SwapQuote {
    if amount_in == 0 || reserve_in == 0 || reserve_out == 0 {
        return SwapQuote::default();
    }
    let bps = BASIS_POINTS as u128;
    let fee_bps = (fee_bps as u128).min(bps);
    let a = amount_in as u128;
    let r_in = reserve_in as u128;
    let r_out = reserve_out as u128;
    let kept = bps - fee_bps;

    let quote = || -> Option<SwapQuote> {
        let scaled_in = a.checked_mul(kept)?;
        let denominator = r_in.checked_mul(bps)?.checked_add(scaled_in)?;
        let amount_out = scaled_in.checked_mul(r_out)? / denominator;
        // Execution over spot price, exact before rounding the output.
        let price_ratio_bps = kept.checked_mul(r_in)?.checked_mul(bps)? / denominator;
        let fee = a * fee_bps / bps;
        Some(SwapQuote {
            amount_out: amount_out as u64,
            fee: fee as u64,
            amount_in_net: (a - fee) as u64,
            price_impact_bps: (bps - price_ratio_bps) as u64,
        })
    };
    quote().unwrap_or_default()
}

/// LP tokens minted for a deposit. The first deposit mints the geometric
/// mean of the amounts; later ones mint by the scarcer of the two ratios.
pub fn lp_tokens_for_deposit(
    doom_amount: u64,
    life_amount: u64,
    doom_reserve: u64,
    life_reserve: u64,
    lp_supply: u64,
) -> u64 {
    if doom_amount == 0 || life_amount == 0 {
        return 0;
    }
    if lp_supply == 0 {
        return isqrt(doom_amount as u128 * life_amount as u128) as u64;
    }
    if doom_reserve == 0 || life_reserve == 0 {
        return 0;
    }
    let supply = lp_supply as u128;
    let by_doom = doom_amount as u128 * supply / doom_reserve as u128;
    let by_life = life_amount as u128 * supply / life_reserve as u128;
    u64::try_from(by_doom.min(by_life)).unwrap_or(0)
}

/// `(doom, life)` released by burning `lp_amount`.
pub fn withdrawal_for_lp(
    lp_amount: u64,
    doom_reserve: u64,
    life_reserve: u64,
    lp_supply: u64,
) -> (u64, u64) {
    if lp_amount == 0 || lp_supply == 0 || lp_amount > lp_supply {
        return (0, 0);
    }
    let lp = lp_amount as u128;
    let supply = lp_supply as u128;
    (
        (lp * doom_reserve as u128 / supply) as u64,
        (lp * life_reserve as u128 / supply) as u64,
    )
}

/// The program refuses a first deposit minting `MINIMUM_LIQUIDITY` or fewer.
pub fn meets_initial_liquidity(lp_tokens: u64) -> bool {
    lp_tokens > MINIMUM_LIQUIDITY
}

/// Floor square root.
pub fn isqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }
    let mut x = 1u128 << ((128 - n.leading_zeros() + 1) / 2);
    loop {
        let y = (x + n / x) / 2;
        if y >= x {
            return x;
        }
        x = y;
    }
}
