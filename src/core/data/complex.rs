use std::ops::{Add, Mul};

/// A point on the complex plane, kept as two plain `f64` parts.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self {
        real: 0.0,
        imag: 0.0,
    };

    #[must_use]
    pub fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    /// `z² + c`, the escape-time step.
    #[must_use]
    pub fn square_add(self, c: Self) -> Self {
        Self {
            real: self.real * self.real - self.imag * self.imag + c.real,
            imag: 2.0 * self.real * self.imag + c.imag,
        }
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_squared() {
        assert_eq!(Complex::new(3.0, 4.0).magnitude_squared(), 25.0);
        assert_eq!(Complex::new(-3.0, -4.0).magnitude_squared(), 25.0);
        assert_eq!(Complex::ZERO.magnitude_squared(), 0.0);
    }

    #[test]
    fn test_mul() {
        // (1 + 2i)(3 + 4i) = 3 + 4i + 6i + 8i² = -5 + 10i
        let result = Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0);

        assert_eq!(result, Complex::new(-5.0, 10.0));
    }

    #[test]
    fn test_square_add_matches_mul_then_add() {
        let z = Complex::new(2.0, 3.0);
        let c = Complex::new(-0.5, 0.25);

        assert_eq!(z.square_add(c), z * z + c);
    }

    #[test]
    fn test_square_add_from_zero_yields_c() {
        let c = Complex::new(3.0, 0.0);

        assert_eq!(Complex::ZERO.square_add(c), c);
    }

    #[test]
    fn test_square_add_overflows_to_infinity_without_panicking() {
        let z = Complex::new(1e200, 1e200);
        let next = z.square_add(Complex::ZERO);

        assert!(next.imag.is_infinite());
        assert!(!(next.magnitude_squared() < 4.0));
    }
}
