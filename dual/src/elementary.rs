//! Elementary functions over [`DualNumber`].
//!
//! Each function is a pair `(f, f')` of plain real functions. Applying it to
//! a dual uses the chain rule:
//!
//! ```text
//! f(u + u′·ε) = f(u) + f′(u)·u′·ε
//! ```
//!
//! New functions are added by building an [`ElementaryFn`] and, if they should
//! be found by name, registering it in a [`Registry`].

use std::collections::BTreeMap;

use tracing::debug;

use crate::{DualError, DualNumber};

/// A unary real function together with its analytic derivative.
#[derive(Debug, Clone, Copy)]
pub struct ElementaryFn {
    name: &'static str,
    f: fn(f64) -> f64,
    df: fn(f64) -> f64,
}

impl ElementaryFn {
    pub const fn new(name: &'static str, f: fn(f64) -> f64, df: fn(f64) -> f64) -> Self {
        Self { name, f, df }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// `(f(x.value), f'(x.value) * x.dvalue)`.
    pub fn apply(&self, x: DualNumber) -> DualNumber {
        DualNumber::new((self.f)(x.value()), (self.df)(x.value()) * x.dvalue())
    }
}

fn neg_sin(x: f64) -> f64 {
    -x.sin()
}

fn sec2(x: f64) -> f64 {
    let c = x.cos();
    1.0 / (c * c)
}

fn half_rsqrt(x: f64) -> f64 {
    0.5 / x.sqrt()
}

fn sech2(x: f64) -> f64 {
    let t = x.tanh();
    1.0 - t * t
}

fn d_asin(x: f64) -> f64 {
    1.0 / (1.0 - x * x).sqrt()
}

fn d_acos(x: f64) -> f64 {
    -d_asin(x)
}

fn d_atan(x: f64) -> f64 {
    1.0 / (1.0 + x * x)
}

pub const SIN: ElementaryFn = ElementaryFn::new("sin", f64::sin, f64::cos);
pub const COS: ElementaryFn = ElementaryFn::new("cos", f64::cos, neg_sin);
pub const TAN: ElementaryFn = ElementaryFn::new("tan", f64::tan, sec2);
pub const EXP: ElementaryFn = ElementaryFn::new("exp", f64::exp, f64::exp);
pub const LN: ElementaryFn = ElementaryFn::new("ln", f64::ln, f64::recip);
pub const SQRT: ElementaryFn = ElementaryFn::new("sqrt", f64::sqrt, half_rsqrt);
pub const SINH: ElementaryFn = ElementaryFn::new("sinh", f64::sinh, f64::cosh);
pub const COSH: ElementaryFn = ElementaryFn::new("cosh", f64::cosh, f64::sinh);
pub const TANH: ElementaryFn = ElementaryFn::new("tanh", f64::tanh, sech2);
pub const ASIN: ElementaryFn = ElementaryFn::new("asin", f64::asin, d_asin);
pub const ACOS: ElementaryFn = ElementaryFn::new("acos", f64::acos, d_acos);
pub const ATAN: ElementaryFn = ElementaryFn::new("atan", f64::atan, d_atan);

const BUILTIN: [ElementaryFn; 12] = [
    SIN, COS, TAN, EXP, LN, SQRT, SINH, COSH, TANH, ASIN, ACOS, ATAN,
];

pub fn sin(x: DualNumber) -> DualNumber {
    SIN.apply(x)
}

pub fn cos(x: DualNumber) -> DualNumber {
    COS.apply(x)
}

pub fn tan(x: DualNumber) -> DualNumber {
    TAN.apply(x)
}

pub fn exp(x: DualNumber) -> DualNumber {
    EXP.apply(x)
}

pub fn ln(x: DualNumber) -> DualNumber {
    LN.apply(x)
}

pub fn sqrt(x: DualNumber) -> DualNumber {
    SQRT.apply(x)
}

pub fn sinh(x: DualNumber) -> DualNumber {
    SINH.apply(x)
}

pub fn cosh(x: DualNumber) -> DualNumber {
    COSH.apply(x)
}

pub fn tanh(x: DualNumber) -> DualNumber {
    TANH.apply(x)
}

pub fn asin(x: DualNumber) -> DualNumber {
    ASIN.apply(x)
}

pub fn acos(x: DualNumber) -> DualNumber {
    ACOS.apply(x)
}

pub fn atan(x: DualNumber) -> DualNumber {
    ATAN.apply(x)
}

/// `x^n` for a constant integer exponent.
pub fn powi(x: DualNumber, n: i32) -> DualNumber {
    if n == 0 {
        return DualNumber::constant(1.0);
    }
    let v = x.value();
    let lowered = n
        .checked_sub(1)
        .map_or_else(|| v.powf(f64::from(n) - 1.0), |m| v.powi(m));
    DualNumber::new(v.powi(n), f64::from(n) * lowered * x.dvalue())
}

/// `x^p` for a constant real exponent.
pub fn powf(x: DualNumber, p: f64) -> DualNumber {
    if p == 0.0 {
        return DualNumber::constant(1.0);
    }
    let v = x.value();
    DualNumber::new(v.powf(p), p * v.powf(p - 1.0) * x.dvalue())
}

/// Elementary functions looked up by name.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    functions: BTreeMap<&'static str, ElementaryFn>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in function of this module.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for function in BUILTIN {
            registry.register(function);
        }
        registry
    }

    /// Adds `function`, replacing any previous entry with the same name.
    pub fn register(&mut self, function: ElementaryFn) -> Option<ElementaryFn> {
        debug!(name = function.name(), "registering elementary function");
        self.functions.insert(function.name(), function)
    }

    pub fn get(&self, name: &str) -> Option<&ElementaryFn> {
        self.functions.get(name)
    }

    pub fn apply(&self, name: &str, x: DualNumber) -> Result<DualNumber, DualError> {
        self.get(name)
            .map(|function| function.apply(x))
            .ok_or_else(|| DualError::UnknownFunction(name.to_string()))
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.functions.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
