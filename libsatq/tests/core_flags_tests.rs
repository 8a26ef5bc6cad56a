#![cfg(feature = "shared-flags")]

mod shared_flags_tests {
    use libsatq::core::flags::shared;
    use libsatq::*;

    // Single test on purpose: the process-wide indicators are one piece of
    // state per test binary, and the harness runs #[test] fns on threads.
    #[test]
    fn ambient_indicator_lifecycle() {
        shared::reset();
        assert!(!shared::overflow());

        // plain call forms write the shared indicator on clamp
        assert_eq!(add(32767, 1), 32767);
        assert!(shared::overflow());

        // sticky across subsequent clean operations
        assert_eq!(add(1, 2), 3);
        assert_eq!(mult(100, 200), 0);
        assert!(shared::overflow());

        // reset is the caller's move, never the library's
        shared::reset();
        assert!(!shared::overflow());
        assert_eq!(l_add(MAX_32, 1), MAX_32);
        assert!(shared::overflow());
        shared::reset();

        // explicit sinks bypass the shared state entirely
        let mut flags = Flags::new();
        assert_eq!(add_ovf(32767, 1, &mut flags), 32767);
        assert!(flags.overflow);
        assert!(!shared::overflow());

        // both modes produce the identical numeric result
        assert_eq!(add(32767, 1), add_ovf(32767, 1, &mut Flags::new()));
        shared::reset();
    }
}
