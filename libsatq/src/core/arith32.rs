//! 32-bit arithmetic.
//!
//! No wider native type is assumed here: overflow of `l_add` / `l_sub` is
//! detected purely from sign bits, the way an accumulator register would
//! report it.

use crate::core::flags::{Ambient, FlagSink};
use crate::core::hooks;
use crate::core::shift::l_shr_ovf;
use crate::core::types::{extract_h, Word16, Word32, MAX_32, MIN_32};

/// Saturating 32-bit addition.
///
/// Overflow occurred iff both operands share a sign bit and the raw sum's
/// sign differs from theirs; the result then clamps toward the operand
/// sign.
#[inline]
pub fn l_add_ovf<F: FlagSink>(l_var1: Word32, l_var2: Word32, flags: &mut F) -> Word32 {
    let l_var_out = l_var1.wrapping_add(l_var2);
    if ((l_var1 ^ l_var2) & MIN_32) == 0 && ((l_var_out ^ l_var1) & MIN_32) != 0 {
        flags.set_overflow();
        hooks::saturation_event("l_add");
        return if l_var1 < 0 { MIN_32 } else { MAX_32 };
    }
    l_var_out
}

/// [`l_add_ovf`] against the ambient sink.
#[inline]
pub fn l_add(l_var1: Word32, l_var2: Word32) -> Word32 {
    l_add_ovf(l_var1, l_var2, &mut Ambient)
}

/// Saturating 32-bit subtraction.
///
/// Overflow occurred iff the operands differ in sign and the raw
/// difference's sign differs from `l_var1`'s.
#[inline]
pub fn l_sub_ovf<F: FlagSink>(l_var1: Word32, l_var2: Word32, flags: &mut F) -> Word32 {
    let l_var_out = l_var1.wrapping_sub(l_var2);
    if ((l_var1 ^ l_var2) & MIN_32) != 0 && ((l_var_out ^ l_var1) & MIN_32) != 0 {
        flags.set_overflow();
        hooks::saturation_event("l_sub");
        return if l_var1 < 0 { MIN_32 } else { MAX_32 };
    }
    l_var_out
}

/// [`l_sub_ovf`] against the ambient sink.
#[inline]
pub fn l_sub(l_var1: Word32, l_var2: Word32) -> Word32 {
    l_sub_ovf(l_var1, l_var2, &mut Ambient)
}

/// 32-bit negation; `MIN_32` has no positive counterpart and saturates to
/// `MAX_32` with the overflow indicator raised.
#[inline]
pub fn l_negate_ovf<F: FlagSink>(l_var1: Word32, flags: &mut F) -> Word32 {
    if l_var1 == MIN_32 {
        flags.set_overflow();
        hooks::saturation_event("l_negate");
        MAX_32
    } else {
        -l_var1
    }
}

/// [`l_negate_ovf`] against the ambient sink.
#[inline]
pub fn l_negate(l_var1: Word32) -> Word32 {
    l_negate_ovf(l_var1, &mut Ambient)
}

/// 32-bit absolute value; `l_abs(MIN_32)` is `MAX_32`. Does not signal.
#[inline]
pub fn l_abs(l_var1: Word32) -> Word32 {
    if l_var1 == MIN_32 {
        MAX_32
    } else {
        l_var1.abs()
    }
}

/// Q15 x Q15 -> Q31 multiply: the exact product doubled.
///
/// The doubling makes `-32768 * -32768` the one clampable case; it
/// saturates to `MAX_32`.
#[inline]
pub fn l_mult_ovf<F: FlagSink>(var1: Word16, var2: Word16, flags: &mut F) -> Word32 {
    let l_var_out = var1 as Word32 * var2 as Word32;
    if l_var_out != 0x4000_0000 {
        l_var_out * 2
    } else {
        flags.set_overflow();
        hooks::saturation_event("l_mult");
        MAX_32
    }
}

/// [`l_mult_ovf`] against the ambient sink.
#[inline]
pub fn l_mult(var1: Word16, var2: Word16) -> Word32 {
    l_mult_ovf(var1, var2, &mut Ambient)
}

/// Shiftless 32-bit multiply: the exact product, no doubling. Cannot clamp.
#[inline]
pub fn l_mult0(var1: Word16, var2: Word16) -> Word32 {
    var1 as Word32 * var2 as Word32
}

/// Multiply-accumulate: `l_var3 + l_mult(var1, var2)` under the 32-bit
/// saturation rules.
#[inline]
pub fn l_mac_ovf<F: FlagSink>(l_var3: Word32, var1: Word16, var2: Word16, flags: &mut F) -> Word32 {
    let l_product = l_mult_ovf(var1, var2, flags);
    l_add_ovf(l_var3, l_product, flags)
}

/// [`l_mac_ovf`] against the ambient sink.
#[inline]
pub fn l_mac(l_var3: Word32, var1: Word16, var2: Word16) -> Word32 {
    l_mac_ovf(l_var3, var1, var2, &mut Ambient)
}

/// Multiply-subtract: `l_var3 - l_mult(var1, var2)` under the 32-bit
/// saturation rules.
#[inline]
pub fn l_msu_ovf<F: FlagSink>(l_var3: Word32, var1: Word16, var2: Word16, flags: &mut F) -> Word32 {
    let l_product = l_mult_ovf(var1, var2, flags);
    l_sub_ovf(l_var3, l_product, flags)
}

/// [`l_msu_ovf`] against the ambient sink.
#[inline]
pub fn l_msu(l_var3: Word32, var1: Word16, var2: Word16) -> Word32 {
    l_msu_ovf(l_var3, var1, var2, &mut Ambient)
}

/// Non-saturating multiply-accumulate: the accumulate wraps modulo 2^32,
/// for codec stages that tolerate transient wraparound. The product itself
/// keeps `l_mult` semantics.
#[inline]
pub fn l_mac_ns_ovf<F: FlagSink>(
    l_var3: Word32,
    var1: Word16,
    var2: Word16,
    flags: &mut F,
) -> Word32 {
    l_var3.wrapping_add(l_mult_ovf(var1, var2, flags))
}

/// [`l_mac_ns_ovf`] against the ambient sink.
#[inline]
pub fn l_mac_ns(l_var3: Word32, var1: Word16, var2: Word16) -> Word32 {
    l_mac_ns_ovf(l_var3, var1, var2, &mut Ambient)
}

/// Non-saturating multiply-subtract; see [`l_mac_ns_ovf`].
#[inline]
pub fn l_msu_ns_ovf<F: FlagSink>(
    l_var3: Word32,
    var1: Word16,
    var2: Word16,
    flags: &mut F,
) -> Word32 {
    l_var3.wrapping_sub(l_mult_ovf(var1, var2, flags))
}

/// [`l_msu_ns_ovf`] against the ambient sink.
#[inline]
pub fn l_msu_ns(l_var3: Word32, var1: Word16, var2: Word16) -> Word32 {
    l_msu_ns_ovf(l_var3, var1, var2, &mut Ambient)
}

/// Shiftless multiply-accumulate: `l_var3 + l_mult0(var1, var2)`.
#[inline]
pub fn l_mac0_ovf<F: FlagSink>(
    l_var3: Word32,
    var1: Word16,
    var2: Word16,
    flags: &mut F,
) -> Word32 {
    l_add_ovf(l_var3, l_mult0(var1, var2), flags)
}

/// [`l_mac0_ovf`] against the ambient sink.
#[inline]
pub fn l_mac0(l_var3: Word32, var1: Word16, var2: Word16) -> Word32 {
    l_mac0_ovf(l_var3, var1, var2, &mut Ambient)
}

/// Shiftless multiply-subtract: `l_var3 - l_mult0(var1, var2)`.
#[inline]
pub fn l_msu0_ovf<F: FlagSink>(
    l_var3: Word32,
    var1: Word16,
    var2: Word16,
    flags: &mut F,
) -> Word32 {
    l_sub_ovf(l_var3, l_mult0(var1, var2), flags)
}

/// [`l_msu0_ovf`] against the ambient sink.
#[inline]
pub fn l_msu0(l_var3: Word32, var1: Word16, var2: Word16) -> Word32 {
    l_msu0_ovf(l_var3, var1, var2, &mut Ambient)
}

/// Round a Q31 accumulator to Q15: add 0x8000 (saturating) and keep the
/// high word.
#[inline]
pub fn round_fx_ovf<F: FlagSink>(l_var1: Word32, flags: &mut F) -> Word16 {
    extract_h(l_add_ovf(l_var1, 0x8000, flags))
}

/// [`round_fx_ovf`] against the ambient sink.
#[inline]
pub fn round_fx(l_var1: Word32) -> Word16 {
    round_fx_ovf(l_var1, &mut Ambient)
}

/// `l_mac` followed by `round_fx`.
#[inline]
pub fn mac_r_ovf<F: FlagSink>(l_var3: Word32, var1: Word16, var2: Word16, flags: &mut F) -> Word16 {
    let acc = l_mac_ovf(l_var3, var1, var2, flags);
    round_fx_ovf(acc, flags)
}

/// [`mac_r_ovf`] against the ambient sink.
#[inline]
pub fn mac_r(l_var3: Word32, var1: Word16, var2: Word16) -> Word16 {
    mac_r_ovf(l_var3, var1, var2, &mut Ambient)
}

/// `l_msu` followed by `round_fx`.
#[inline]
pub fn msu_r_ovf<F: FlagSink>(l_var3: Word32, var1: Word16, var2: Word16, flags: &mut F) -> Word16 {
    let acc = l_msu_ovf(l_var3, var1, var2, flags);
    round_fx_ovf(acc, flags)
}

/// [`msu_r_ovf`] against the ambient sink.
#[inline]
pub fn msu_r(l_var3: Word32, var1: Word16, var2: Word16) -> Word16 {
    msu_r_ovf(l_var3, var1, var2, &mut Ambient)
}

/// Mixed 32 x 16 multiply (Q31 x Q15 -> Q31): the low half of `l_var2`
/// times `var1`, shifted down 15, then mac with the high half.
#[inline]
pub fn l_mls_ovf<F: FlagSink>(l_var2: Word32, var1: Word16, flags: &mut F) -> Word32 {
    let mut l_var_out = l_var2 & 0x0000_ffff;
    l_var_out *= var1 as Word32;
    l_var_out = l_shr_ovf(l_var_out, 15, flags);
    l_mac_ovf(l_var_out, var1, extract_h(l_var2), flags)
}

/// [`l_mls_ovf`] against the ambient sink.
#[inline]
pub fn l_mls(l_var2: Word32, var1: Word16) -> Word32 {
    l_mls_ovf(l_var2, var1, &mut Ambient)
}
