use sdk::cosmwasm_std::{Uint128, Uint256};

use crate::{coin::Coin, duration::Duration, ratio::Ratio};

/// Computes how much interest is accrued for `period` on `principal` at the annual `rate`
///
/// Simple, non-compounding interest over whole seconds:
/// `principal * rate.nominator * secs / (SECONDS_IN_YEAR * rate.denominator)`.
/// All multiplications precede the single division and are carried in 256 bits,
/// the result is truncated toward zero. Returns `None` if it does not fit in a [`Coin`].
pub fn interest(rate: Ratio, principal: Coin, period: Duration) -> Option<Coin> {
    let dividend = Uint256::from(Uint128::from(principal))
        .checked_mul(Uint256::from(rate.nominator()))
        .and_then(|product| product.checked_mul(Uint256::from(period.secs())))
        .ok()?;

    let divisor = Uint256::from(rate.denominator())
        .checked_mul(Uint256::from(Duration::SECONDS_IN_YEAR))
        .ok()?;

    dividend
        .checked_div(divisor)
        .ok()
        .and_then(|quotient| Uint128::try_from(quotient).ok())
        .map(Coin::from)
}
