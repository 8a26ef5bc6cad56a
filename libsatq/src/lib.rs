//! # libsatq
//!
//! Bit-exact saturating fixed-point basic operators, the computational
//! substrate of narrowband and wideband speech codecs (GSM-class, G.7xx,
//! EVS-class). Every operator is a pure function over [`Word16`]/[`Word32`]
//! two's-complement words: out-of-range results never wrap, they saturate
//! to the nearest representable bound and raise an overflow indicator.
//!
//! Identical numeric results are guaranteed across platforms and across
//! both flag-propagation modes:
//!
//! * **Explicit-flag mode**: every clampable operator has an `_ovf` form
//!   taking a caller-owned [`Flags`] sink. No shared state, so codec
//!   instances run concurrently without coordination.
//! * **Shared-flag mode** (`shared-flags` feature, on by default): the
//!   plain call forms write process-wide indicators in
//!   [`core::flags::shared`], the classic single-codec-per-process setup.
//!
//! ```
//! use libsatq::{add, add_ovf, Flags, MAX_16};
//!
//! let mut flags = Flags::new();
//! assert_eq!(add_ovf(32767, 1, &mut flags), MAX_16);
//! assert!(flags.overflow);
//!
//! // Same arithmetic, ambient signaling.
//! assert_eq!(add(32767, 1), MAX_16);
//! ```
//!
//! Indicators are raised by operations and never cleared by them; reset
//! responsibility belongs to the caller.

pub mod core;

pub use self::core::arith16::{
    abs_s, add, add_ovf, i_mult, i_mult_ovf, mult, mult_ovf, mult_r, mult_r_ovf, negate,
    negate_ovf, saturate, saturate_ovf, sub, sub_ovf,
};
pub use self::core::arith32::{
    l_abs, l_add, l_add_ovf, l_mac, l_mac0, l_mac0_ovf, l_mac_ns, l_mac_ns_ovf, l_mac_ovf, l_mls,
    l_mls_ovf, l_msu, l_msu0, l_msu0_ovf, l_msu_ns, l_msu_ns_ovf, l_msu_ovf, l_mult, l_mult0,
    l_mult_ovf, l_negate, l_negate_ovf, l_sub, l_sub_ovf, mac_r, mac_r_ovf, msu_r, msu_r_ovf,
    round_fx, round_fx_ovf,
};
#[cfg(all(feature = "carry-ops", feature = "shared-flags"))]
pub use self::core::carry::{l_add_c, l_sat, l_sub_c};
#[cfg(feature = "carry-ops")]
pub use self::core::carry::{l_add_c_ovf, l_sat_ovf, l_sub_c_ovf};
pub use self::core::divide::{div_l, div_s, try_div_l, try_div_s, DomainError};
pub use self::core::flags::{Ambient, FlagSink, Flags};
pub use self::core::norm::{norm_l, norm_s};
pub use self::core::shift::{
    l_shl, l_shl_ovf, l_shr, l_shr_ovf, l_shr_r, l_shr_r_ovf, shl, shl_ovf, shl_pos, shl_pos_ovf,
    shr, shr_ovf, shr_r, shr_r_ovf,
};
pub use self::core::types::{
    extract_h, extract_l, l_deposit_h, l_deposit_l, Word16, Word32, MAX_16, MAX_32, MIN_16, MIN_32,
};
