//! Dual numbers for forward-mode automatic differentiation.
//!
//! A [`DualNumber`] carries a value together with its derivative with respect
//! to one seed variable. Every operation returns a new number whose `dvalue`
//! follows the matching derivative rule, so evaluating an expression once
//! yields both `f(x)` and `f'(x)`.
//!
//! ```
//! use dual::{DualNumber, sin};
//!
//! let x = DualNumber::variable(0.5);
//! let y = DualNumber::constant(4.2);
//! let z = x * y + sin(x);
//!
//! assert!((z.dvalue() - (4.2 + 0.5_f64.cos())).abs() < 1e-15);
//! ```

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

pub mod elementary;
mod error;

pub use elementary::{
    ElementaryFn, Registry, acos, asin, atan, cos, cosh, exp, ln, powf, powi, sin, sinh, sqrt,
    tan, tanh,
};
pub use error::DualError;

/// A value paired with its derivative, `value + dvalue·ε` with `ε² = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DualNumber {
    value: f64,
    dvalue: f64,
}

impl DualNumber {
    /// Builds a dual from a value and a derivative. Any float is accepted.
    pub const fn new(value: f64, dvalue: f64) -> Self {
        Self { value, dvalue }
    }

    /// A constant, or a variable held fixed: derivative 0.
    pub const fn constant(value: f64) -> Self {
        Self::new(value, 0.0)
    }

    /// The variable being differentiated against: derivative 1.
    pub const fn variable(value: f64) -> Self {
        Self::new(value, 1.0)
    }

    pub const fn value(&self) -> f64 {
        self.value
    }

    pub const fn dvalue(&self) -> f64 {
        self.dvalue
    }

    /// Sum rule: `d(u + v) = du + dv`.
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, rhs: Self) -> Self {
        Self {
            value: self.value + rhs.value,
            dvalue: self.dvalue + rhs.dvalue,
        }
    }

    /// Product rule: `d(u·v) = du·v + dv·u`.
    pub fn multiply(self, rhs: Self) -> Self {
        Self {
            value: self.value * rhs.value,
            dvalue: self.dvalue * rhs.value + rhs.dvalue * self.value,
        }
    }

    pub fn subtract(self, rhs: Self) -> Self {
        Self {
            value: self.value - rhs.value,
            dvalue: self.dvalue - rhs.dvalue,
        }
    }

    /// Quotient rule: `d(u/v) = (du·v - u·dv) / v²`.
    pub fn divide(self, rhs: Self) -> Self {
        Self {
            value: self.value / rhs.value,
            dvalue: (self.dvalue * rhs.value - self.value * rhs.dvalue) / (rhs.value * rhs.value),
        }
    }

    /// `1/x`, with derivative `-dx/x²`.
    pub fn recip(self) -> Self {
        Self {
            value: self.value.recip(),
            dvalue: -self.dvalue / (self.value * self.value),
        }
    }
}

impl From<f64> for DualNumber {
    fn from(value: f64) -> Self {
        Self::constant(value)
    }
}

impl Add for DualNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        DualNumber::add(self, rhs)
    }
}

impl Sub for DualNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.subtract(rhs)
    }
}

impl Mul for DualNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(rhs)
    }
}

impl Div for DualNumber {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self.divide(rhs)
    }
}

impl Neg for DualNumber {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            value: -self.value,
            dvalue: -self.dvalue,
        }
    }
}

// Mixed operands: the plain float is a constant.
macro_rules! impl_scalar_ops {
    ($($trait:ident :: $method:ident),*) => {
        $(
            impl $trait<f64> for DualNumber {
                type Output = DualNumber;

                fn $method(self, rhs: f64) -> DualNumber {
                    $trait::$method(self, DualNumber::constant(rhs))
                }
            }

            impl $trait<DualNumber> for f64 {
                type Output = DualNumber;

                fn $method(self, rhs: DualNumber) -> DualNumber {
                    $trait::$method(DualNumber::constant(self), rhs)
                }
            }
        )*
    };
}

impl_scalar_ops!(Add::add, Sub::sub, Mul::mul, Div::div);

impl fmt::Display for DualNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} + {:?}ε", self.value, self.dvalue)
    }
}
