// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Precision-doubling driver shared by the Newton series algorithms.
//!
//! A [`NewtonSchedule`] for target length `n` is the chain of precisions
//! `m_0 < m_1 < ... < m_k = n` obtained by repeatedly halving `n` (rounding up) until it
//! drops below the base cutoff. The driver computes the base case at `m_0` directly and
//! then lifts the approximation from each `m_i` to `m_{i+1}`; since
//! `m_{i+1} <= 2 * m_i`, one Newton step always suffices for each lift.

use tracing::trace;

use crate::polynomial::RationalPolynomial;

/// One stage of a [`NewtonSchedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewtonStage {
    /// Direct computation to this many terms.
    Base(usize),
    /// Refinement from `from` correct terms to `to` correct terms.
    Doubling { from: usize, to: usize },
}

/// Stages of a Newton iteration for a given target length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewtonSchedule {
    precisions: Vec<usize>,
}

impl NewtonSchedule {
    /// Schedule for `n` terms with base case below `cutoff` terms. Cutoffs under two are
    /// raised to two.
    pub fn new(n: usize, cutoff: usize) -> Self {
        let cutoff = cutoff.max(2);
        let mut precisions = vec![n];
        let mut m = n;
        while m >= cutoff {
            m = m.div_ceil(2);
            precisions.push(m);
        }
        precisions.reverse();
        Self { precisions }
    }

    /// Precisions from the base case up to the target.
    pub fn precisions(&self) -> &[usize] {
        &self.precisions
    }

    /// Number of doubling steps.
    pub fn doublings(&self) -> usize {
        self.precisions.len() - 1
    }

    pub fn stages(&self) -> impl Iterator<Item = NewtonStage> + '_ {
        std::iter::once(NewtonStage::Base(self.precisions[0])).chain(
            self.precisions
                .windows(2)
                .map(|w| NewtonStage::Doubling { from: w[0], to: w[1] }),
        )
    }
}

/// A series computed by Newton lifting.
pub trait NewtonLift {
    /// The result to `m` terms, computed directly.
    fn base_case(&self, m: usize) -> RationalPolynomial;

    /// Refines `approx`, correct to `from` terms, into a result correct to `to` terms.
    /// The returned value is canonical and has length at most `to`.
    fn lift(&self, approx: &RationalPolynomial, from: usize, to: usize) -> RationalPolynomial;
}

/// Runs `lift` through the schedule for `n` terms with base cutoff `cutoff`.
pub fn newton_iterate<L: NewtonLift + ?Sized>(
    lift: &L,
    n: usize,
    cutoff: usize,
) -> RationalPolynomial {
    let schedule = NewtonSchedule::new(n, cutoff);
    let mut approx = RationalPolynomial::zero();
    for stage in schedule.stages() {
        match stage {
            NewtonStage::Base(m) => {
                trace!(m, "newton base case");
                approx = lift.base_case(m);
            }
            NewtonStage::Doubling { from, to } => {
                trace!(from, to, "newton step");
                approx = lift.lift(&approx, from, to);
            }
        }
    }
    approx
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use proptest::prelude::*;
    use tracing_test::traced_test;

    #[test]
    fn test_schedule_precisions() {
        assert_eq!(NewtonSchedule::new(100, 24).precisions(), &[13, 25, 50, 100]);
        assert_eq!(NewtonSchedule::new(10, 24).precisions(), &[10]);
        assert_eq!(NewtonSchedule::new(24, 24).precisions(), &[12, 24]);
        assert_eq!(NewtonSchedule::new(5, 0).precisions(), &[1, 2, 3, 5]);
    }

    #[test]
    fn test_schedule_doubles_at_most() {
        for n in 1..300 {
            let schedule = NewtonSchedule::new(n, 3);
            let p = schedule.precisions();
            assert_eq!(*p.last().unwrap(), n);
            assert!(p[0] < 3 || p.len() == 1);
            for w in p.windows(2) {
                assert!(w[0] < w[1] && w[1] <= 2 * w[0]);
            }
        }
    }

    #[test]
    fn test_stages() {
        let stages: Vec<_> = NewtonSchedule::new(20, 6).stages().collect();
        assert_eq!(
            stages,
            vec![
                NewtonStage::Base(5),
                NewtonStage::Doubling { from: 5, to: 10 },
                NewtonStage::Doubling { from: 10, to: 20 },
            ]
        );
    }

    /// `1 / (1 - x)`: the base case is the truncated geometric series and each lift
    /// applies `g + g (1 - (1 - x) g)`.
    struct Geometric;

    impl NewtonLift for Geometric {
        fn base_case(&self, m: usize) -> RationalPolynomial {
            RationalPolynomial::from_coefficients(vec![BigInt::from(1); m], BigInt::from(1))
        }

        fn lift(&self, approx: &RationalPolynomial, _from: usize, to: usize) -> RationalPolynomial {
            let one_minus_x = RationalPolynomial::from_coefficients(
                vec![BigInt::from(1), BigInt::from(-1)],
                BigInt::from(1),
            );
            let error = RationalPolynomial::one().sub_series(&one_minus_x.mullow(approx, to), to);
            approx.add_series(&approx.mullow(&error, to), to)
        }
    }

    #[test]
    #[traced_test]
    fn test_newton_iterate() {
        let result = newton_iterate(&Geometric, 37, 4);
        assert_eq!(
            result,
            RationalPolynomial::from_coefficients(vec![BigInt::from(1); 37], BigInt::from(1))
        );
        assert!(logs_contain("newton step"));
    }

    proptest! {
        #[test]
        fn test_schedule_lifts_at_most_double(n in 1usize..5000, cutoff in 0usize..64) {
            let schedule = NewtonSchedule::new(n, cutoff);
            let p = schedule.precisions();
            prop_assert_eq!(p[p.len() - 1], n);
            prop_assert!(p[0] < cutoff.max(2));
            for w in p.windows(2) {
                prop_assert!(w[0] < w[1]);
                prop_assert!(w[1] <= 2 * w[0]);
            }
            prop_assert_eq!(schedule.doublings(), p.len() - 1);
            prop_assert_eq!(schedule.stages().count(), p.len());
        }
    }
}
