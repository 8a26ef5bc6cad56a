//! Overflow and carry signaling.
//!
//! Every operator that can clamp takes a flag sink in its `_ovf` form. Two
//! sinks exist:
//!
//! * [`Flags`], a caller-owned location (a stack variable or a field of a
//!   codec-instance context). No global state is touched, so any number of
//!   codec instances may run on independent threads without coordination.
//! * [`Ambient`], the legacy process-wide indicators. With the
//!   `shared-flags` feature the plain (sink-less) call forms write the
//!   [`shared`] statics; without it they compute the identical result and
//!   discard the signal.
//!
//! Indicators are raised by operations and never cleared by them (the one
//! deliberate exception is `l_sat`, which exists to consume flag state).
//! Resetting is the caller's job.

/// Destination for overflow/carry signals raised by the operators.
pub trait FlagSink {
    /// Raise the overflow indicator. Operations never lower it.
    fn set_overflow(&mut self);

    /// Record the carry-out of a carry-chained operation. Unlike overflow,
    /// carry is rewritten on every carry-chained call.
    fn put_carry(&mut self, carry: bool);

    /// Current overflow indicator.
    fn overflow(&self) -> bool;

    /// Current carry indicator.
    fn carry(&self) -> bool;

    /// Lower both indicators.
    fn clear(&mut self);
}

/// Caller-owned flag storage for the thread-safe call forms.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flags {
    pub overflow: bool,
    pub carry: bool,
}

impl Flags {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FlagSink for Flags {
    #[inline]
    fn set_overflow(&mut self) {
        self.overflow = true;
    }

    #[inline]
    fn put_carry(&mut self, carry: bool) {
        self.carry = carry;
    }

    #[inline]
    fn overflow(&self) -> bool {
        self.overflow
    }

    #[inline]
    fn carry(&self) -> bool {
        self.carry
    }

    #[inline]
    fn clear(&mut self) {
        self.overflow = false;
        self.carry = false;
    }
}

/// Sink used by the plain call forms.
///
/// Routes to the process-wide indicators when `shared-flags` is enabled and
/// is a no-op otherwise. Zero-sized either way; the choice is made at
/// compile time, never by a runtime branch.
#[derive(Debug, Default, Clone, Copy)]
pub struct Ambient;

/// Process-wide indicator storage.
///
/// Valid only while at most one logical codec thread runs per process (or
/// while callers serialize access themselves): concurrent codec instances
/// sharing these race on the indicators. The stores are relaxed atomics, so
/// a race garbles the signal, never the arithmetic.
#[cfg(feature = "shared-flags")]
pub mod shared {
    use std::sync::atomic::{AtomicBool, Ordering};

    static OVERFLOW: AtomicBool = AtomicBool::new(false);
    static CARRY: AtomicBool = AtomicBool::new(false);

    pub fn overflow() -> bool {
        OVERFLOW.load(Ordering::Relaxed)
    }

    pub fn carry() -> bool {
        CARRY.load(Ordering::Relaxed)
    }

    pub fn set_overflow(value: bool) {
        OVERFLOW.store(value, Ordering::Relaxed);
    }

    pub fn set_carry(value: bool) {
        CARRY.store(value, Ordering::Relaxed);
    }

    /// Lower both indicators. Typically called once per frame by the codec.
    pub fn reset() {
        set_overflow(false);
        set_carry(false);
    }
}

#[cfg(feature = "shared-flags")]
impl FlagSink for Ambient {
    #[inline]
    fn set_overflow(&mut self) {
        shared::set_overflow(true);
    }

    #[inline]
    fn put_carry(&mut self, carry: bool) {
        shared::set_carry(carry);
    }

    #[inline]
    fn overflow(&self) -> bool {
        shared::overflow()
    }

    #[inline]
    fn carry(&self) -> bool {
        shared::carry()
    }

    #[inline]
    fn clear(&mut self) {
        shared::reset();
    }
}

#[cfg(not(feature = "shared-flags"))]
impl FlagSink for Ambient {
    #[inline]
    fn set_overflow(&mut self) {}

    #[inline]
    fn put_carry(&mut self, _carry: bool) {}

    #[inline]
    fn overflow(&self) -> bool {
        false
    }

    #[inline]
    fn carry(&self) -> bool {
        false
    }

    #[inline]
    fn clear(&mut self) {}
}
