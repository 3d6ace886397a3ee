//! Reduction of gradient components into an edge intensity.

/// Returns `floor(sqrt(n))` computed by Newton's method.
///
/// Values greater than or equal to `65535²` give `65535`.
pub fn int_sqrt_newton(n: u32) -> u32 {
    const MAX_ROOT: u32 = u16::MAX as u32;
    if n == 0 {
        return 0;
    }
    if n >= MAX_ROOT * MAX_ROOT {
        return MAX_ROOT;
    }
    let mut prev = 0;
    let mut x = n;
    loop {
        let next = (x + n / x) / 2;
        // The sequence either converges or oscillates between two values.
        if next == x || next == prev {
            return x;
        }
        prev = x;
        x = next;
    }
}

/// Returns `floor(sqrt(n))` found by binary search over `[1, n]`.
pub fn int_sqrt_bisect(n: u32) -> u32 {
    if n < 2 {
        return n;
    }
    bisect(n, 1, n)
}

/// The same as [int_sqrt_bisect] but searches over `[0, n / 2]`.
/// The root of `n > 1` can't be greater than `n / 2`.
pub fn int_sqrt_bisect_half(n: u32) -> u32 {
    if n < 2 {
        return n;
    }
    bisect(n, 0, n / 2)
}

#[inline(always)]
fn bisect(n: u32, mut start: u32, mut end: u32) -> u32 {
    let target = n as u64;
    let mut root = 0;
    while start <= end {
        let mid = start + (end - start) / 2;
        let square = mid as u64 * mid as u64;
        if square == target {
            return mid;
        }
        if square < target {
            root = mid;
            start = mid + 1;
        } else {
            // `mid` is never 0 here because 0 < target.
            end = mid - 1;
        }
    }
    root
}

/// Strategy of combining gradient components into a pixel value.
pub trait MagnitudeEstimator {
    fn magnitude(gx: u32, gy: u32) -> u8;
}

/// Integer Newton's method, result is rounded up.
#[derive(Debug, Clone, Copy)]
pub struct NewtonSqrt;

/// Binary search over `[1, n]`, result is rounded up.
#[derive(Debug, Clone, Copy)]
pub struct BisectSqrt;

/// Binary search over `[0, n / 2]`, result is rounded up.
#[derive(Debug, Clone, Copy)]
pub struct BisectHalfSqrt;

/// `f64::sqrt()`, result is truncated.
#[derive(Debug, Clone, Copy)]
pub struct FloatSqrt;

#[inline(always)]
fn sum_of_squares(gx: u32, gy: u32) -> u32 {
    gx.saturating_mul(gx).saturating_add(gy.saturating_mul(gy))
}

/// Turns `floor(sqrt(n))` into `ceil(sqrt(n))` and clips it by 255.
#[inline(always)]
fn ceil_and_clip(n: u32, root: u32) -> u8 {
    let root = if root * root == n { root } else { root + 1 };
    root.min(255) as u8
}

impl MagnitudeEstimator for NewtonSqrt {
    #[inline(always)]
    fn magnitude(gx: u32, gy: u32) -> u8 {
        let n = sum_of_squares(gx, gy);
        ceil_and_clip(n, int_sqrt_newton(n))
    }
}

impl MagnitudeEstimator for BisectSqrt {
    #[inline(always)]
    fn magnitude(gx: u32, gy: u32) -> u8 {
        let n = sum_of_squares(gx, gy);
        ceil_and_clip(n, int_sqrt_bisect(n))
    }
}

impl MagnitudeEstimator for BisectHalfSqrt {
    #[inline(always)]
    fn magnitude(gx: u32, gy: u32) -> u8 {
        let n = sum_of_squares(gx, gy);
        ceil_and_clip(n, int_sqrt_bisect_half(n))
    }
}

impl MagnitudeEstimator for FloatSqrt {
    #[inline(always)]
    fn magnitude(gx: u32, gy: u32) -> u8 {
        magnitude_f64(gx as f64, gy as f64)
    }
}

/// Euclidean norm of gradient components truncated to an integer
/// and clipped by 255.
#[inline(always)]
pub fn magnitude_f64(gx: f64, gy: f64) -> u8 {
    (gx * gx + gy * gy).sqrt().min(255.) as u8
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum MagnitudeStrategy {
    #[default]
    Newton,
    Bisect,
    BisectHalf,
    Float,
}

impl MagnitudeStrategy {
    pub const ALL: [MagnitudeStrategy; 4] =
        [Self::Newton, Self::Bisect, Self::BisectHalf, Self::Float];

    /// Value of the output pixel for gradient components.
    pub fn magnitude(&self, gx: u32, gy: u32) -> u8 {
        match self {
            Self::Newton => NewtonSqrt::magnitude(gx, gy),
            Self::Bisect => BisectSqrt::magnitude(gx, gy),
            Self::BisectHalf => BisectHalfSqrt::magnitude(gx, gy),
            Self::Float => FloatSqrt::magnitude(gx, gy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_squares() {
        for root in [0u32, 1, 2, 3, 15, 16, 255, 1020, 4095, 65534] {
            let n = root * root;
            assert_eq!(int_sqrt_newton(n), root, "newton({n})");
            assert_eq!(int_sqrt_bisect(n), root, "bisect({n})");
            assert_eq!(int_sqrt_bisect_half(n), root, "bisect_half({n})");
        }
    }

    #[test]
    fn neighbours_of_squares() {
        for root in [2u32, 3, 100, 2087, 40000] {
            let below = root * root - 1;
            let above = root * root + 1;
            for f in [int_sqrt_newton, int_sqrt_bisect, int_sqrt_bisect_half] {
                assert_eq!(f(below), root - 1);
                assert_eq!(f(above), root);
            }
        }
    }

    #[test]
    fn bisect_does_not_overflow() {
        assert_eq!(int_sqrt_bisect(u32::MAX), 65535);
        assert_eq!(int_sqrt_bisect_half(u32::MAX), 65535);
    }

    #[test]
    fn flat_region_has_zero_magnitude() {
        for strategy in MagnitudeStrategy::ALL {
            assert_eq!(strategy.magnitude(0, 0), 0);
        }
    }

    #[test]
    fn rounding_policy() {
        // sqrt(2) = 1.41
        assert_eq!(NewtonSqrt::magnitude(1, 1), 2);
        assert_eq!(BisectSqrt::magnitude(1, 1), 2);
        assert_eq!(FloatSqrt::magnitude(1, 1), 1);
        // sqrt(3² + 4²) = 5
        for strategy in MagnitudeStrategy::ALL {
            assert_eq!(strategy.magnitude(3, 4), 5);
        }
    }

    #[test]
    fn clipping() {
        for strategy in MagnitudeStrategy::ALL {
            assert_eq!(strategy.magnitude(0, 1020), 255);
            assert_eq!(strategy.magnitude(u32::MAX, u32::MAX), 255);
        }
    }
}
