//! Carry-chained 32-bit arithmetic.
//!
//! These operators emulate a hardware add-with-carry / subtract-with-borrow
//! pair over 32-bit words, for codecs that build multi-word accumulators:
//! results wrap, the carry indicator records the unsigned carry-out of bit
//! 31 (for subtraction, "no borrow"), and the overflow indicator records
//! two's-complement signed overflow of the full three-operand sum. `l_sat`
//! closes a chain by clamping a wrapped result from the pending flags.

use crate::core::flags::FlagSink;
use crate::core::types::{Word32, MAX_32, MIN_32};

#[cfg(feature = "shared-flags")]
use crate::core::flags::Ambient;

/// Add with carry-in: `l_var1 + l_var2 + carry`, wrapping.
#[inline]
pub fn l_add_c_ovf<F: FlagSink>(l_var1: Word32, l_var2: Word32, flags: &mut F) -> Word32 {
    let carry_in = flags.carry() as u32;
    let (partial, c1) = (l_var1 as u32).overflowing_add(l_var2 as u32);
    let (sum, c2) = partial.overflowing_add(carry_in);
    let l_var_out = sum as Word32;
    // Signed overflow: operands agree in sign, the result does not.
    if (l_var1 ^ l_var2) >= 0 && (l_var_out ^ l_var1) < 0 {
        flags.set_overflow();
    }
    flags.put_carry(c1 || c2);
    l_var_out
}

/// [`l_add_c_ovf`] against the ambient sink.
#[cfg(feature = "shared-flags")]
#[inline]
pub fn l_add_c(l_var1: Word32, l_var2: Word32) -> Word32 {
    l_add_c_ovf(l_var1, l_var2, &mut Ambient)
}

/// Subtract with borrow: `l_var1 - l_var2 - (1 - carry)`, wrapping.
///
/// A raised carry going in means "no borrow pending"; the carry coming out
/// means the subtraction did not borrow.
#[inline]
pub fn l_sub_c_ovf<F: FlagSink>(l_var1: Word32, l_var2: Word32, flags: &mut F) -> Word32 {
    let carry_in = flags.carry() as u32;
    let not_var2 = !l_var2;
    let (partial, c1) = (l_var1 as u32).overflowing_add(not_var2 as u32);
    let (sum, c2) = partial.overflowing_add(carry_in);
    let l_var_out = sum as Word32;
    if (l_var1 ^ not_var2) >= 0 && (l_var_out ^ l_var1) < 0 {
        flags.set_overflow();
    }
    flags.put_carry(c1 || c2);
    l_var_out
}

/// [`l_sub_c_ovf`] against the ambient sink.
#[cfg(feature = "shared-flags")]
#[inline]
pub fn l_sub_c(l_var1: Word32, l_var2: Word32) -> Word32 {
    l_sub_c_ovf(l_var1, l_var2, &mut Ambient)
}

/// Saturate a wrapped carry-chain result from the pending flags, then
/// clear them.
///
/// The one operator that consumes flag state: with overflow pending the
/// result is `MIN_32` when the carry indicates a wrap from below, `MAX_32`
/// otherwise, and both indicators are lowered.
#[inline]
pub fn l_sat_ovf<F: FlagSink>(l_var1: Word32, flags: &mut F) -> Word32 {
    if !flags.overflow() {
        return l_var1;
    }
    let l_var_out = if flags.carry() { MIN_32 } else { MAX_32 };
    flags.clear();
    l_var_out
}

/// [`l_sat_ovf`] against the ambient sink.
#[cfg(feature = "shared-flags")]
#[inline]
pub fn l_sat(l_var1: Word32) -> Word32 {
    l_sat_ovf(l_var1, &mut Ambient)
}
