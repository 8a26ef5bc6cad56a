//! Restoring binary division.
//!
//! Domain violations are surfaced three ways, independently selectable:
//! the `try_` forms return a typed [`DomainError`] and let the call site
//! decide; the plain forms apply the build-time policy: clamp-and-continue
//! by default, diagnostic-and-terminate under `abort-on-domain-error`.

use thiserror::Error;

#[cfg(not(feature = "abort-on-domain-error"))]
use crate::core::arith16::abs_s;
use crate::core::types::{l_deposit_h, Word16, Word32, MAX_16};

/// Domain violations of the division operators.
///
/// Never produced by any other operator: ordinary out-of-range results are
/// an overflow condition (saturated value plus indicator), not an error.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DomainError {
    #[error("division by zero")]
    DivideByZero,
    #[error("negative division operand (num={num}, den={den})")]
    NegativeOperand { num: Word32, den: Word32 },
    #[error("numerator exceeds denominator (num={num}, den={den})")]
    NumeratorTooLarge { num: Word32, den: Word32 },
}

/// Q15 fractional division `num / den` under the domain
/// `0 <= num <= den`, `den != 0`.
///
/// The quotient is truncated (not rounded) at 15 fraction bits:
/// `floor(num * 32768 / den)`, with `num == den` saturating to 32767
/// (1.0 is not representable in Q15).
pub fn try_div_s(var1: Word16, var2: Word16) -> Result<Word16, DomainError> {
    if var2 == 0 {
        return Err(DomainError::DivideByZero);
    }
    if var1 < 0 || var2 < 0 {
        return Err(DomainError::NegativeOperand {
            num: var1 as Word32,
            den: var2 as Word32,
        });
    }
    if var1 > var2 {
        return Err(DomainError::NumeratorTooLarge {
            num: var1 as Word32,
            den: var2 as Word32,
        });
    }
    Ok(div_s_unchecked(var1, var2))
}

/// Policy-applying form of [`try_div_s`].
pub fn div_s(var1: Word16, var2: Word16) -> Word16 {
    match try_div_s(var1, var2) {
        Ok(quotient) => quotient,
        Err(err) => div_s_fallback(var1, var2, err),
    }
}

/// 32/16 restoring division: `l_num` against `den` deposited in the high
/// word. Same domain policy as [`try_div_s`]; `l_num` at or above
/// `den << 16` saturates to `MAX_16`.
pub fn try_div_l(l_num: Word32, den: Word16) -> Result<Word16, DomainError> {
    if den == 0 {
        return Err(DomainError::DivideByZero);
    }
    if l_num < 0 || den < 0 {
        return Err(DomainError::NegativeOperand {
            num: l_num,
            den: den as Word32,
        });
    }
    Ok(div_l_unchecked(l_num, den))
}

/// Policy-applying form of [`try_div_l`].
pub fn div_l(l_num: Word32, den: Word16) -> Word16 {
    match try_div_l(l_num, den) {
        Ok(quotient) => quotient,
        Err(err) => div_l_fallback(l_num, den, err),
    }
}

// 15 iterations of restoring division; operands already vetted to the
// valid domain. Each step doubles the running quotient and numerator and
// subtracts the denominator when it fits, setting the quotient's low bit.
fn div_s_unchecked(var1: Word16, var2: Word16) -> Word16 {
    if var1 == 0 {
        return 0;
    }
    if var1 >= var2 {
        return MAX_16;
    }
    let mut l_num = var1 as Word32;
    let l_denom = var2 as Word32;
    let mut var_out: Word16 = 0;
    for _ in 0..15 {
        var_out <<= 1;
        l_num <<= 1;
        if l_num >= l_denom {
            l_num -= l_denom;
            var_out += 1;
        }
    }
    var_out
}

fn div_l_unchecked(l_num: Word32, den: Word16) -> Word16 {
    let mut l_num = l_num;
    let mut l_den = l_deposit_h(den);
    if l_num >= l_den {
        return MAX_16;
    }
    // Halve both so the doubling below cannot leave the 32-bit range.
    l_num >>= 1;
    l_den >>= 1;
    let mut var_out: Word16 = 0;
    for _ in 0..15 {
        var_out <<= 1;
        l_num <<= 1;
        if l_num >= l_den {
            l_num -= l_den;
            var_out += 1;
        }
    }
    var_out
}

#[cfg(feature = "abort-on-domain-error")]
fn div_s_fallback(var1: Word16, var2: Word16, err: DomainError) -> Word16 {
    panic!("div_s({var1}, {var2}): {err}");
}

#[cfg(feature = "abort-on-domain-error")]
fn div_l_fallback(l_num: Word32, den: Word16, err: DomainError) -> Word16 {
    panic!("div_l({l_num}, {den}): {err}");
}

// Clamp-and-continue: renormalize by magnitude and divide what is left.
// A zero denominator, or a numerator at or past the denominator, yields
// the largest representable quotient.
#[cfg(not(feature = "abort-on-domain-error"))]
fn div_s_fallback(var1: Word16, var2: Word16, err: DomainError) -> Word16 {
    #[cfg(feature = "evs-hooks")]
    tracing::warn!(
        target: "satq::divide",
        %err,
        num = var1 as i32,
        den = var2 as i32,
        "domain violation, continuing"
    );
    let _ = err;
    if var2 == 0 {
        return MAX_16;
    }
    let num = abs_s(var1);
    let den = abs_s(var2);
    if num >= den {
        MAX_16
    } else {
        div_s_unchecked(num, den)
    }
}

#[cfg(not(feature = "abort-on-domain-error"))]
fn div_l_fallback(l_num: Word32, den: Word16, err: DomainError) -> Word16 {
    #[cfg(feature = "evs-hooks")]
    tracing::warn!(
        target: "satq::divide",
        %err,
        num = l_num,
        den = den as i32,
        "domain violation, continuing"
    );
    let _ = err;
    if den == 0 {
        return MAX_16;
    }
    let num = crate::core::arith32::l_abs(l_num);
    div_l_unchecked(num, abs_s(den))
}
