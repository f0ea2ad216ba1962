// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use num_bigint::BigInt;
use num_rational::BigRational;
use ratpoly_rational::{
    cfrac_bound, get_cfrac, set_cfrac, RationalPolynomial, RationalPolynomialError,
};
use tracing_test::traced_test;

fn q(p: i64, d: i64) -> BigRational {
    BigRational::new(p.into(), d.into())
}

fn poly(coeffs: &[(i64, i64)]) -> RationalPolynomial {
    let coeffs: Vec<BigRational> = coeffs.iter().map(|&(p, d)| q(p, d)).collect();
    RationalPolynomial::from_rationals(&coeffs)
}

fn ints(values: &[i64]) -> Vec<BigInt> {
    values.iter().map(|&v| BigInt::from(v)).collect()
}

#[test]
fn test_sum_over_common_denominator() {
    let a = poly(&[(1, 2), (3, 4)]);
    let b = poly(&[(1, 3), (1, 2)]);
    assert_eq!(a.denominator(), &BigInt::from(4));
    assert_eq!(b.denominator(), &BigInt::from(6));

    let sum = a.add(&b);
    assert_eq!(sum, poly(&[(5, 6), (5, 4)]));
    assert_eq!(sum.numerator(), ints(&[10, 15]).as_slice());
    assert_eq!(sum.denominator(), &BigInt::from(12));
    assert_eq!(sum.to_string(), "(15x + 10)/12");
}

#[test]
fn test_exact_division() {
    let a = poly(&[(-1, 1), (0, 1), (1, 1)]);
    let b = poly(&[(-1, 1), (1, 1)]);
    let (quotient, remainder) = a.divrem(&b);
    assert_eq!(quotient, poly(&[(1, 1), (1, 1)]));
    assert!(remainder.is_zero());
    assert_eq!(a.divides(&b), Some(quotient));
    assert_eq!(a.divides(&poly(&[(1, 1), (0, 1), (1, 1)])), None);
}

#[test]
fn test_fibonacci_continued_fraction() {
    let x = q(89, 55);
    let bound = cfrac_bound(&x);
    let (terms, remainder) = get_cfrac(&x, bound);
    assert_eq!(terms, ints(&[1, 1, 1, 1, 1, 1, 1, 1, 2]));
    assert_eq!(remainder, q(0, 1));
    assert_eq!(set_cfrac(&terms), x);

    let (head, rest) = get_cfrac(&x, 3);
    assert_eq!(head, ints(&[1, 1, 1]));
    assert_ne!(rest, q(0, 1));
}

#[test]
fn test_series_pipeline() {
    // log(1 / (1 - x)) = sum x^k / k
    let one_minus_x = poly(&[(1, 1), (-1, 1)]);
    let geometric = one_minus_x.inv_series(6);
    assert_eq!(geometric, poly(&[(1, 1); 6]));
    assert_eq!(
        geometric.log_series(6),
        poly(&[(0, 1), (1, 1), (1, 2), (1, 3), (1, 4), (1, 5)])
    );
    assert_eq!(geometric.log_series(6).exp_series(6), geometric);
}

#[test]
fn test_text_round_trip() {
    let p = poly(&[(-1, 2), (0, 1), (7, 3)]);
    let text = p.to_coefficient_string();
    assert_eq!(text, "3  -1/2 0 7/3");
    assert_eq!(text.parse::<RationalPolynomial>(), Ok(p));
    assert!(matches!(
        "2  1".parse::<RationalPolynomial>(),
        Err(RationalPolynomialError::Parse { .. })
    ));
}

#[test]
fn test_bincode_round_trip() {
    let p = poly(&[(3, 4), (0, 1), (-5, 6)]);
    let bytes = bincode::serialize(&p).expect("Failed to serialize");
    let restored: RationalPolynomial = bincode::deserialize(&bytes).expect("Failed to deserialize");
    assert_eq!(restored, p);
    assert!(restored.is_canonical());
}

#[test]
#[traced_test]
fn test_dispatch_is_logged() {
    let a = poly(&[(1, 1), (1, 2), (1, 3)]);
    let _ = a.inv_series(40);
    assert!(logs_contain("inv_series dispatch"));
    assert!(logs_contain("newton step"));

    let inner = poly(&[(0, 1), (1, 1), (1, 1)]);
    let _ = a.compose_series(&inner, 8);
    assert!(logs_contain("compose_series dispatch"));
}
