mod shift_tests {
    use libsatq::*;

    const PROBES_16: [Word16; 11] = [
        -32768, -16385, -16384, -2, -1, 0, 1, 2, 16383, 16384, 32767,
    ];
    const PROBES_32: [Word32; 11] = [
        i32::MIN,
        -0x4000_0001,
        -0x4000_0000,
        -2,
        -1,
        0,
        1,
        2,
        0x3fff_ffff,
        0x4000_0000,
        i32::MAX,
    ];

    #[test]
    fn shl_saturates_with_the_operand_sign() {
        let mut flags = Flags::new();
        assert_eq!(shl_ovf(16384, 1, &mut flags), 32767);
        assert!(flags.overflow);

        let mut flags = Flags::new();
        assert_eq!(shl_ovf(-16385, 1, &mut flags), -32768);
        assert!(flags.overflow);

        // -32768 << 0 and -16384 << 1 stay exact
        let mut flags = Flags::new();
        assert_eq!(shl_ovf(-16384, 1, &mut flags), -32768);
        assert_eq!(shl_ovf(-32768, 0, &mut flags), -32768);
        assert_eq!(shl_ovf(1, 14, &mut flags), 16384);
        assert!(!flags.overflow);

        // large counts: zero passes through, anything else rails
        let mut flags = Flags::new();
        assert_eq!(shl_ovf(0, 100, &mut flags), 0);
        assert!(!flags.overflow);
        assert_eq!(shl_ovf(5, 100, &mut flags), 32767);
        assert!(flags.overflow);
    }

    #[test]
    fn shr_sign_fills_from_count_15() {
        assert_eq!(shr(-12345, 15), -1);
        assert_eq!(shr(-12345, 16), -1);
        assert_eq!(shr(-1, 15), -1);
        assert_eq!(shr(12345, 15), 0);
        assert_eq!(shr(32767, 15), 0);
    }

    #[test]
    fn shr_is_arithmetic_for_negatives() {
        assert_eq!(shr(-32768, 1), -16384);
        assert_eq!(shr(-5, 1), -3);
        assert_eq!(shr(-1, 1), -1);
        assert_eq!(shr(5, 1), 2);
        assert_eq!(shr(5, 0), 5);
    }

    #[test]
    fn shift_direction_is_symmetric_in_the_count_sign() {
        for &a in &PROBES_16 {
            for n in -20..=20 {
                let mut f1 = Flags::new();
                let mut f2 = Flags::new();
                assert_eq!(
                    shl_ovf(a, -n, &mut f1),
                    shr_ovf(a, n, &mut f2),
                    "shl({a},{}) vs shr({a},{n})",
                    -n
                );
                assert_eq!(f1.overflow, f2.overflow);

                let mut f1 = Flags::new();
                let mut f2 = Flags::new();
                assert_eq!(shr_ovf(a, -n, &mut f1), shl_ovf(a, n, &mut f2));
                assert_eq!(f1.overflow, f2.overflow);
            }
        }
    }

    #[test]
    fn shr_r_rounds_the_dropped_bit() {
        assert_eq!(shr_r(5, 1), 3);
        assert_eq!(shr_r(4, 1), 2);
        assert_eq!(shr_r(-5, 1), -2);
        assert_eq!(shr_r(-1, 1), 0);
        assert_eq!(shr_r(7, 2), 2);
        assert_eq!(shr_r(6, 2), 2);
        assert_eq!(shr_r(12345, 0), 12345);
        assert_eq!(shr_r(-12345, 100), 0);
    }

    #[test]
    fn l_shl_saturates_with_the_operand_sign() {
        let mut flags = Flags::new();
        assert_eq!(l_shl_ovf(0x4000_0000, 1, &mut flags), MAX_32);
        assert!(flags.overflow);

        let mut flags = Flags::new();
        assert_eq!(l_shl_ovf(-0x4000_0001, 1, &mut flags), MIN_32);
        assert!(flags.overflow);

        let mut flags = Flags::new();
        assert_eq!(l_shl_ovf(1, 30, &mut flags), 0x4000_0000);
        assert_eq!(l_shl_ovf(-1, 31, &mut flags), MIN_32);
        assert_eq!(l_shl_ovf(-0x4000_0000, 1, &mut flags), MIN_32);
        assert!(!flags.overflow);

        let mut flags = Flags::new();
        assert_eq!(l_shl_ovf(1, 31, &mut flags), MAX_32);
        assert!(flags.overflow);
    }

    #[test]
    fn l_shr_sign_fills_from_count_31() {
        assert_eq!(l_shr(MIN_32, 31), -1);
        assert_eq!(l_shr(-1, 31), -1);
        assert_eq!(l_shr(MAX_32, 31), 0);
        assert_eq!(l_shr(-2, 1), -1);
        assert_eq!(l_shr(MIN_32, 1), -0x4000_0000);
    }

    #[test]
    fn long_shift_direction_is_symmetric_in_the_count_sign() {
        for &a in &PROBES_32 {
            for n in -36..=36 {
                let mut f1 = Flags::new();
                let mut f2 = Flags::new();
                assert_eq!(
                    l_shl_ovf(a, -n, &mut f1),
                    l_shr_ovf(a, n, &mut f2),
                    "l_shl({a},{}) vs l_shr({a},{n})",
                    -n
                );
                assert_eq!(f1.overflow, f2.overflow);
            }
        }
    }

    #[test]
    fn l_shr_r_rounds_the_dropped_bit() {
        assert_eq!(l_shr_r(5, 1), 3);
        assert_eq!(l_shr_r(-5, 1), -2);
        assert_eq!(l_shr_r(-1, 1), 0);
        assert_eq!(l_shr_r(-2, 1), -1);
        assert_eq!(l_shr_r(0x7fff_ffff, 1), 0x4000_0000);
        assert_eq!(l_shr_r(123, 0), 123);
        assert_eq!(l_shr_r(-1, 100), 0);
    }
}
