// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use num_bigint::BigInt;
use num_rational::BigRational;
use proptest::prelude::*;
use ratpoly_config::Thresholds;
use ratpoly_polynomial::{mul, vector, MulAlgorithm};
use ratpoly_rational::{canonical_fraction, RationalPolynomial};
use ratpoly_tests::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn canonical_closure(a in arb_polynomial(8), b in arb_polynomial(8), c in arb_rational()) {
        prop_assert!(a.add(&b).is_canonical());
        prop_assert!(a.sub(&b).is_canonical());
        prop_assert!(a.mul(&b).is_canonical());
        prop_assert!(a.neg().is_canonical());
        prop_assert!(a.mullow(&b, 5).is_canonical());
        prop_assert!(a.scalar_mul_rational(&c).is_canonical());
        prop_assert!(a.scalar_mul_integer(c.numer()).is_canonical());
        prop_assert!(a.derivative().is_canonical());
        prop_assert!(a.integral().is_canonical());
        prop_assert!(a.pow(3).is_canonical());
        prop_assert!(a.gcd(&b).is_canonical());
        prop_assert!(a.make_monic().is_canonical());
        prop_assert!(a.truncated(3).is_canonical());
        prop_assert!(a.shift_right(1).is_canonical());
        if !b.is_zero() {
            let (q, r) = a.divrem(&b);
            prop_assert!(q.is_canonical());
            prop_assert!(r.is_canonical());
        }
    }

    #[test]
    fn identities(a in arb_polynomial(10)) {
        prop_assert_eq!(a.add(&RationalPolynomial::zero()), a.clone());
        prop_assert_eq!(a.mul(&RationalPolynomial::one()), a.clone());
        prop_assert!(a.sub(&a).is_zero());
        prop_assert!(a.sub(&a.clone()).is_zero());
        prop_assert_eq!(a.neg().neg(), a);
    }

    #[test]
    fn fraction_round_trip(p in arb_bigint(), q in arb_bigint()) {
        prop_assume!(q != BigInt::from(0));
        let poly = RationalPolynomial::from_fraction(p.clone(), q.clone());
        prop_assert!(poly.is_canonical());
        prop_assert_eq!(poly.coefficient(0), BigRational::new(p.clone(), q.clone()));
        prop_assert_eq!(canonical_fraction(p, q), poly.coefficient(0));
    }

    #[test]
    fn ring_laws(a in arb_polynomial(6), b in arb_polynomial(6), c in arb_polynomial(6)) {
        prop_assert_eq!(a.add(&b), b.add(&a));
        prop_assert_eq!(a.mul(&b), b.mul(&a));
        prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        prop_assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
        prop_assert_eq!(&a - &b, a.add(&b.neg()));
    }

    #[test]
    fn division_consistency(a in arb_polynomial(10), b in arb_nonzero_polynomial(6)) {
        let (q, r) = a.divrem(&b);
        prop_assert_eq!(q.mul(&b).add(&r), a.clone());
        prop_assert!(r.is_zero() || r.degree() < b.degree());
        prop_assert_eq!(a.div(&b), q);
        prop_assert_eq!(a.rem(&b), r);
    }

    #[test]
    fn divides_recovers_factor(a in arb_polynomial(6), b in arb_nonzero_polynomial(6)) {
        prop_assert_eq!(a.mul(&b).divides(&b), Some(a));
    }

    #[test]
    fn gcd_divisibility(a in arb_polynomial(6), b in arb_polynomial(6), c in arb_nonzero_polynomial(4)) {
        let a = a.mul(&c);
        let b = b.mul(&c);
        let g = a.gcd(&b);
        if g.is_zero() {
            prop_assert!(a.is_zero() && b.is_zero());
        } else {
            prop_assert!(g.is_monic());
            prop_assert!(a.divides(&g).is_some());
            prop_assert!(b.divides(&g).is_some());
            prop_assert!(g.divides(&c.make_monic()).is_some());
        }
    }

    #[test]
    fn xgcd_bezout(a in arb_polynomial(6), b in arb_polynomial(6)) {
        let (g, s, t) = a.xgcd(&b);
        prop_assert_eq!(g.clone(), a.gcd(&b));
        prop_assert_eq!(s.mul(&a).add(&t.mul(&b)), g);
    }

    #[test]
    fn lcm_is_common_multiple(a in arb_nonzero_polynomial(5), b in arb_nonzero_polynomial(5)) {
        let l = a.lcm(&b);
        prop_assert!(l.divides(&a).is_some());
        prop_assert!(l.divides(&b).is_some());
        prop_assert_eq!(l.mul(&a.gcd(&b)), a.mul(&b).make_monic());
    }

    #[test]
    fn resultant_antisymmetry(a in arb_nonzero_polynomial(6), b in arb_nonzero_polynomial(6)) {
        let (Some(da), Some(db)) = (a.degree(), b.degree()) else {
            unreachable!("nonzero polynomials have a degree");
        };
        let forward = a.resultant(&b);
        let backward = b.resultant(&a);
        if (da * db) % 2 == 1 {
            prop_assert_eq!(forward, -backward);
        } else {
            prop_assert_eq!(forward, backward);
        }
    }

    #[test]
    fn resultant_vanishes_on_common_factor(a in arb_polynomial(4), b in arb_polynomial(4), c in arb_nonzero_polynomial(3)) {
        prop_assume!(c.len() >= 2);
        prop_assert_eq!(a.mul(&c).resultant(&b.mul(&c)), BigRational::from(BigInt::from(0)));
    }

    #[test]
    fn add_series_is_canonical(a in arb_polynomial(10), b in arb_polynomial(10), n in 0usize..12) {
        let sum = a.add_series(&b, n);
        prop_assert!(sum.is_canonical());
        prop_assert_eq!(sum, a.add(&b).truncated(n));
        let difference = a.sub_series(&b, n);
        prop_assert!(difference.is_canonical());
        prop_assert_eq!(difference, a.sub(&b).truncated(n));
    }

    #[test]
    fn pow_trunc_matches_pow(a in arb_polynomial(4), e in 0usize..6, n in 0usize..10) {
        prop_assert_eq!(a.pow_trunc(e, n), a.pow(e).truncated(n));
    }

    #[test]
    fn evaluation_is_a_homomorphism(a in arb_polynomial(6), b in arb_polynomial(6), x in arb_rational()) {
        prop_assert_eq!(a.mul(&b).evaluate_rational(&x), a.evaluate_rational(&x) * b.evaluate_rational(&x));
        prop_assert_eq!(a.compose(&b).evaluate_rational(&x), a.evaluate_rational(&b.evaluate_rational(&x)));
        prop_assert_eq!(a.rescale(&x).evaluate_integer(&BigInt::from(1)), a.evaluate_rational(&x));
    }

    #[test]
    fn text_round_trip(a in arb_polynomial(8)) {
        let text = a.to_coefficient_string();
        prop_assert_eq!(text.parse::<RationalPolynomial>(), Ok(a));
    }

    #[test]
    fn mul_backends_agree(a in arb_int_vec(24), b in arb_int_vec(24)) {
        let thresholds = Thresholds::default();
        let classical = mul::mul_classical(&a, &b);
        for algorithm in [MulAlgorithm::Karatsuba, MulAlgorithm::KroneckerSubstitution] {
            prop_assert!(vector::equal(&mul::mul_using(algorithm, &a, &b, &thresholds), &classical));
        }
        prop_assert!(vector::equal(&mul::mul_karatsuba(&a, &b, 1), &classical));
        prop_assert!(vector::equal(&mul::mul(&a, &b), &classical));
    }

    #[test]
    fn mullow_matches_truncated_product(a in arb_int_vec(24), b in arb_int_vec(24), n in 0usize..50) {
        let mut full = mul::mul_classical(&a, &b);
        full.truncate(n);
        prop_assert!(vector::equal(&mul::mullow(&a, &b, n), &full));
        prop_assert!(vector::equal(&mul::mullow_classical(&a, &b, n), &full));
    }
}
