//! Integer helpers contrasting plain, multi-result and named-result signatures.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithError {
    #[error("cannot divide by 0")]
    DivideByZero,
}

/// Truncating division that yields `0` for a zero divisor instead of failing.
pub fn div(num: i64, den: i64) -> i64 {
    if den == 0 {
        return 0;
    }
    num.wrapping_div(den)
}

pub fn add(i: i64, j: i64) -> i64 {
    i.wrapping_add(j)
}

pub fn sub(i: i64, j: i64) -> i64 {
    i.wrapping_sub(j)
}

pub fn mul(i: i64, j: i64) -> i64 {
    i.wrapping_mul(j)
}

/// Raw truncating division. Panics on a zero divisor; callers guard it.
pub fn divs(i: i64, j: i64) -> i64 {
    i.wrapping_div(j)
}

/// Sum any number of integers; an empty slice sums to `0`.
pub fn add_nums(nums: &[i64]) -> i64 {
    nums.iter().fold(0i64, |acc, n| acc.wrapping_add(*n))
}

/// Quotient and remainder as a positional pair.
pub fn divmod(num: i64, den: i64) -> Result<(i64, i64), ArithError> {
    if den == 0 {
        return Err(ArithError::DivideByZero);
    }
    Ok((num.wrapping_div(den), num.wrapping_rem(den)))
}

/// Named results of [`divmod_named`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DivMod {
    pub res: i64,
    pub modulo: i64,
}

/// Quotient and remainder with each result addressed by name.
pub fn divmod_named(num: i64, den: i64) -> Result<DivMod, ArithError> {
    let mut out = DivMod::default();
    if den == 0 {
        return Err(ArithError::DivideByZero);
    }
    out.res = num.wrapping_div(den);
    out.modulo = num.wrapping_rem(den);
    Ok(out)
}
