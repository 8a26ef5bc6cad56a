//! Codec-profile diagnostic hooks.
//!
//! Some codec families instrument every saturation site during conformance
//! work. The hook is compiled to nothing unless `evs-hooks` is enabled, and
//! in either case it cannot alter a numeric result.

#[cfg(feature = "evs-hooks")]
#[inline]
pub(crate) fn saturation_event(op: &'static str) {
    tracing::trace!(target: "satq::saturate", op, "result clamped");
}

#[cfg(not(feature = "evs-hooks"))]
#[inline]
pub(crate) fn saturation_event(_op: &'static str) {}
