//! Seeding helpers for forward-mode differentiation.
//!
//! Each helper runs ordinary scalar forward passes: exactly one input is
//! seeded with derivative 1 and every other input is held constant with
//! derivative 0. Several partial derivatives mean several passes.

use dual::DualNumber;
use nalgebra::SVector;
use named_vars::NamedVars;
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForwardError {
    #[error("variable index {index} out of range for {size} variables")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("no variable named `{0}`")]
    UnknownVariable(String),
}

/// Evaluates `f` at `x` with `x` seeded as the variable; the result carries
/// `f(x)` and `f'(x)`.
pub fn derivative<F>(f: F, x: f64) -> DualNumber
where
    F: Fn(DualNumber) -> DualNumber,
{
    f(DualNumber::variable(x))
}

/// Holds every variable of `point` constant.
pub fn constants<VT, DT, const N: usize>(point: &VT) -> DT
where
    VT: NamedVars<f64, N>,
    DT: NamedVars<DualNumber, N>,
{
    DT::from_svector(&point.to_svector().map(DualNumber::constant))
}

/// Seeds variable `index` of `point` with derivative 1 and all others with 0.
pub fn seed<VT, DT, const N: usize>(point: &VT, index: usize) -> Result<DT, ForwardError>
where
    VT: NamedVars<f64, N>,
    DT: NamedVars<DualNumber, N>,
{
    if index >= N {
        return Err(ForwardError::IndexOutOfRange { index, size: N });
    }
    Ok(seeded(point.to_svector(), index))
}

fn seeded<DT, const N: usize>(values: SVector<f64, N>, index: usize) -> DT
where
    DT: NamedVars<DualNumber, N>,
{
    let mut duals = values.map(DualNumber::constant);
    duals[index] = DualNumber::variable(values[index]);
    DT::from_svector(&duals)
}

/// Partial derivative of `f` with respect to variable `index`, in one pass.
pub fn partial<F, VT, DT, const N: usize>(
    f: F,
    point: &VT,
    index: usize,
) -> Result<DualNumber, ForwardError>
where
    VT: NamedVars<f64, N>,
    DT: NamedVars<DualNumber, N>,
    F: Fn(&DT) -> DualNumber,
{
    let z = f(&seed(point, index)?);
    trace!(variable = VT::NAMES[index], value = z.value(), dvalue = z.dvalue(), "forward pass");
    Ok(z)
}

/// Like [`partial`], with the variable picked by field name.
pub fn partial_by_name<F, VT, DT, const N: usize>(
    f: F,
    point: &VT,
    name: &str,
) -> Result<DualNumber, ForwardError>
where
    VT: NamedVars<f64, N>,
    DT: NamedVars<DualNumber, N>,
    F: Fn(&DT) -> DualNumber,
{
    let index = VT::index_of(name).ok_or_else(|| ForwardError::UnknownVariable(name.to_string()))?;
    partial(f, point, index)
}

/// The value of `f` at `point` and its partial derivative with respect to
/// every variable, one forward pass per variable.
pub fn partials<F, VT, DT, const N: usize>(f: F, point: &VT) -> (f64, SVector<f64, N>)
where
    VT: NamedVars<f64, N>,
    DT: NamedVars<DualNumber, N>,
    F: Fn(&DT) -> DualNumber,
{
    let value = f(&constants(point)).value();

    let mut gradient = SVector::<f64, N>::zeros();
    let values = point.to_svector();
    for i in 0..N {
        gradient[i] = f(&seeded(values, i)).dvalue();
    }

    debug!(variables = N, value, "computed partial derivatives");
    (value, gradient)
}
