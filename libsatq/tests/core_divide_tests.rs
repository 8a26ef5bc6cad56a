// Clamp-and-continue policy coverage; the abort policy has its own
// feature-gated suite in core_divide_abort_tests.rs.
#![cfg(not(feature = "abort-on-domain-error"))]

mod divide_tests {
    use libsatq::*;

    #[test]
    fn div_s_is_truncated_q15() {
        assert_eq!(div_s(1, 2), 16384);
        assert_eq!(div_s(0, 5), 0);
        assert_eq!(div_s(5, 5), 32767);
        assert_eq!(div_s(1, 3), 10922);
        assert_eq!(div_s(2, 3), 21845);
        assert_eq!(div_s(32766, 32767), 32766);
        assert_eq!(div_s(1, 32767), 1);
    }

    #[test]
    fn div_s_matches_floor_reference() {
        for den in [1i16, 2, 3, 7, 160, 255, 4095, 32767] {
            for num in [0i16, 1, 2, 3, 5, 100, 4095, 16384, 32766, 32767] {
                if num > den {
                    continue;
                }
                let expect = ((num as i64 * 32768) / den as i64).min(32767) as Word16;
                assert_eq!(div_s(num, den), expect, "div_s({num},{den})");
                assert_eq!(try_div_s(num, den), Ok(expect));
            }
        }
    }

    #[test]
    fn try_div_s_reports_the_violation() {
        assert_eq!(try_div_s(1, 0), Err(DomainError::DivideByZero));
        assert_eq!(
            try_div_s(-1, 5),
            Err(DomainError::NegativeOperand { num: -1, den: 5 })
        );
        assert_eq!(
            try_div_s(5, -5),
            Err(DomainError::NegativeOperand { num: 5, den: -5 })
        );
        assert_eq!(
            try_div_s(6, 5),
            Err(DomainError::NumeratorTooLarge { num: 6, den: 5 })
        );
    }

    #[test]
    fn continue_policy_returns_defined_values() {
        // zero denominator rails
        assert_eq!(div_s(1, 0), 32767);
        assert_eq!(div_s(0, 0), 32767);
        assert_eq!(div_s(-7, 0), 32767);

        // magnitudes re-enter the valid domain
        assert_eq!(div_s(-8, 16), 16384);
        assert_eq!(div_s(8, -16), 16384);
        assert_eq!(div_s(-8, -16), 16384);

        // magnitude at or past the denominator rails
        assert_eq!(div_s(17, 16), 32767);
        assert_eq!(div_s(-17, 16), 32767);
        assert_eq!(div_s(-16, 16), 32767);
    }

    #[test]
    fn div_l_is_the_32_bit_analogue() {
        assert_eq!(div_l(1 << 16, 2), 16384);
        assert_eq!(div_l(1 << 15, 1), 16384);
        assert_eq!(div_l(0, 123), 0);
        // numerator at or past den << 16 rails
        assert_eq!(div_l(32767 << 16, 32767), 32767);
        assert_eq!(div_l(MAX_32, 1), 32767);
    }

    #[test]
    fn try_div_l_reports_the_violation() {
        assert_eq!(try_div_l(5, 0), Err(DomainError::DivideByZero));
        assert_eq!(
            try_div_l(-1, 4),
            Err(DomainError::NegativeOperand { num: -1, den: 4 })
        );
        assert_eq!(
            try_div_l(4, -1),
            Err(DomainError::NegativeOperand { num: 4, den: -1 })
        );
    }

    #[test]
    fn div_l_continue_policy() {
        assert_eq!(div_l(5, 0), 32767);
        assert_eq!(div_l(-(1 << 16), 2), 16384);
    }
}
