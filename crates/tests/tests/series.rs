// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use proptest::prelude::*;
use ratpoly_rational::{cfrac_bound, get_cfrac, set_cfrac, RationalPolynomial};
use ratpoly_tests::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn series_inverse(a in arb_unit_series(8), n in 1usize..40) {
        let inverse = a.inv_series(n);
        prop_assert!(inverse.is_canonical());
        prop_assert!(inverse.len() <= n);
        prop_assert_eq!(a.mullow(&inverse, n), RationalPolynomial::one());
    }

    #[test]
    fn inversion_branches_agree(a in arb_unit_series(8), n in 1usize..40) {
        prop_assert_eq!(a.inv_series_basecase(n), a.inv_series_newton(n));
    }

    #[test]
    fn div_series_inverts_mullow(a in arb_polynomial(8), b in arb_unit_series(6), n in 1usize..20) {
        let quotient = a.div_series(&b, n);
        prop_assert_eq!(quotient.mullow(&b, n), a.truncated(n));
    }

    #[test]
    fn horner_matches_brent_kung(a in arb_polynomial(30), inner in arb_zero_constant_series(6), n in 0usize..30) {
        let horner = a.compose_series_horner(&inner, n);
        let brent_kung = a.compose_series_brent_kung(&inner, n);
        prop_assert!(brent_kung.is_canonical());
        prop_assert_eq!(&horner, &brent_kung);
        prop_assert_eq!(a.compose_series(&inner, n), horner);
    }

    #[test]
    fn compose_series_truncates_compose(a in arb_polynomial(8), inner in arb_zero_constant_series(4), n in 0usize..16) {
        prop_assert_eq!(a.compose_series(&inner, n), a.compose(&inner).truncated(n));
    }

    #[test]
    fn exp_log_round_trip(h in arb_zero_constant_series(6), n in 1usize..24) {
        let e = h.exp_series(n);
        prop_assert!(e.is_canonical());
        prop_assert_eq!(e.log_series(n), h.truncated(n));
    }

    #[test]
    fn exp_branches_agree(h in arb_zero_constant_series(6), n in 1usize..24) {
        prop_assert_eq!(h.exp_series_basecase(n), h.exp_series_newton(n));
    }

    #[test]
    fn exp_is_a_homomorphism(a in arb_zero_constant_series(4), b in arb_zero_constant_series(4), n in 1usize..16) {
        prop_assert_eq!(
            a.add(&b).exp_series(n),
            a.exp_series(n).mullow(&b.exp_series(n), n)
        );
    }

    #[test]
    fn invsqrt_squares_to_inverse(h in arb_one_constant_series(6), n in 1usize..24) {
        let y = h.invsqrt_series(n);
        prop_assert_eq!(h.mullow(&y.mullow(&y, n), n), RationalPolynomial::one());
        prop_assert_eq!(y, h.invsqrt_series_basecase(n));
        let s = h.sqrt_series(n);
        prop_assert_eq!(s.mullow(&s, n), h.truncated(n));
    }

    #[test]
    fn reversion_is_compositional_inverse(f in arb_revertible_series(5), n in 1usize..12) {
        let g = f.revert_series(n);
        prop_assert_eq!(f.compose_series(&g, n), RationalPolynomial::x().truncated(n));
    }

    #[test]
    fn trig_inverses(h in arb_zero_constant_series(4), n in 1usize..12) {
        prop_assert_eq!(h.tan_series(n).atan_series(n), h.truncated(n));
        let s = h.sin_series(n);
        let c = h.cos_series(n);
        prop_assert_eq!(s.mullow(&s, n).add(&c.mullow(&c, n)), RationalPolynomial::one());
        let sh = h.sinh_series(n);
        let ch = h.cosh_series(n);
        prop_assert_eq!(ch.add(&sh), h.exp_series(n));
    }

    #[test]
    fn continued_fraction_round_trip(x in arb_fraction()) {
        let bound = cfrac_bound(&x);
        let (terms, remainder) = get_cfrac(&x, bound);
        prop_assert!(terms.len() <= bound);
        prop_assert!(remainder == num_rational::BigRational::from(num_bigint::BigInt::from(0)));
        prop_assert_eq!(set_cfrac(&terms), x);
    }
}
