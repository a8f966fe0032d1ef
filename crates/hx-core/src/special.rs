//! Modified Bessel functions of the first kind, orders 0 and 1.
//!
//! Tapered fin profiles need `I1(z)/I0(z)` for arguments ranging from zero up to
//! a few hundred. Both functions grow like `e^z`, so everything is evaluated in
//! exponentially scaled form `e^{-|z|} I_n(|z|)`:
//!
//! - `|z| <= 15`: ascending power series (always convergent, cheap at this size)
//! - `|z| > 15`: Hankel asymptotic expansion, truncated at its smallest term
//!
//! The ratio taken from the scaled forms stays finite where `I0`/`I1` themselves
//! overflow (`z > ~709`).

use std::f64::consts::PI;

use crate::Real;

const SERIES_LIMIT: Real = 15.0;
const EPS: Real = 1e-16;
const MAX_TERMS: usize = 200;

/// `e^{-|x|} I0(x)`
pub fn bessel_i0e(x: Real) -> Real {
    scaled(0, x.abs())
}

/// `e^{-|x|} I1(x)`
pub fn bessel_i1e(x: Real) -> Real {
    x.signum() * scaled(1, x.abs())
}

/// Modified Bessel function of the first kind, order 0.
pub fn bessel_i0(x: Real) -> Real {
    bessel_i0e(x) * x.abs().exp()
}

/// Modified Bessel function of the first kind, order 1.
pub fn bessel_i1(x: Real) -> Real {
    bessel_i1e(x) * x.abs().exp()
}

/// `I1(x) / I0(x)`, finite for every finite `x`.
pub fn bessel_i1_over_i0(x: Real) -> Real {
    if x == 0.0 {
        return 0.0;
    }
    bessel_i1e(x) / bessel_i0e(x)
}

/// `tanh(x) / x` with the removable singularity at zero filled in.
pub fn tanh_over_x(x: Real) -> Real {
    if x.abs() < 1e-4 {
        let x2 = x * x;
        1.0 - x2 / 3.0 + 2.0 * x2 * x2 / 15.0
    } else {
        x.tanh() / x
    }
}

fn scaled(nu: u32, ax: Real) -> Real {
    if ax <= SERIES_LIMIT {
        series(nu, ax) * (-ax).exp()
    } else {
        asymptotic(nu, ax)
    }
}

// I_nu(x) = sum_k (x/2)^(2k+nu) / (k! (k+nu)!)
fn series(nu: u32, x: Real) -> Real {
    let half = 0.5 * x;
    let q = half * half;
    let nu_f = nu as Real;
    let mut term = if nu == 0 { 1.0 } else { half };
    let mut sum = term;
    for k in 1..MAX_TERMS {
        let kf = k as Real;
        term *= q / (kf * (kf + nu_f));
        sum += term;
        if term <= EPS * sum {
            break;
        }
    }
    sum
}

// e^{-x} I_nu(x) ~ (2 pi x)^{-1/2} sum_k (-1)^k prod_{j<=k} (mu - (2j-1)^2) / (k! (8x)^k)
fn asymptotic(nu: u32, x: Real) -> Real {
    let mu = 4.0 * (nu * nu) as Real;
    let mut term: Real = 1.0;
    let mut sum: Real = 1.0;
    for k in 1..MAX_TERMS {
        let kf = k as Real;
        let odd = 2.0 * kf - 1.0;
        let next = -term * (mu - odd * odd) / (8.0 * kf * x);
        // asymptotic series: stop before terms start growing again
        if next.abs() >= term.abs() {
            break;
        }
        term = next;
        sum += term;
        if term.abs() <= EPS * sum.abs() {
            break;
        }
    }
    sum / (2.0 * PI * x).sqrt()
}
