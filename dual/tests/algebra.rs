//! Algebraic properties of the dual arithmetic, checked against `num-dual`.

use approx::assert_relative_eq;
use dual::{DualNumber, Registry, cos, exp, ln, sin, sqrt, tan};
use num_dual::{Dual64, DualNum};
use proptest::prelude::*;

fn finite() -> impl Strategy<Value = f64> {
    -1.0e3..1.0e3
}

fn dual_number() -> impl Strategy<Value = DualNumber> {
    (finite(), finite()).prop_map(|(v, d)| DualNumber::new(v, d))
}

fn reference(x: DualNumber) -> Dual64 {
    Dual64::new(x.value(), x.dvalue())
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn sum_rule(a in dual_number(), b in dual_number()) {
        let s = a.add(b);
        prop_assert_eq!(s.value(), a.value() + b.value());
        prop_assert_eq!(s.dvalue(), a.dvalue() + b.dvalue());
    }

    #[test]
    fn product_rule(a in dual_number(), b in dual_number()) {
        let p = a.multiply(b);
        prop_assert_eq!(p.value(), a.value() * b.value());
        prop_assert_eq!(p.dvalue(), a.dvalue() * b.value() + b.dvalue() * a.value());
    }

    #[test]
    fn multiply_commutes(a in dual_number(), b in dual_number()) {
        let ab = a * b;
        let ba = b * a;
        prop_assert!(close(ab.value(), ba.value()));
        prop_assert!(close(ab.dvalue(), ba.dvalue()));
    }

    #[test]
    fn add_commutes_and_associates(a in dual_number(), b in dual_number(), c in dual_number()) {
        prop_assert_eq!(a + b, b + a);
        let left = (a + b) + c;
        let right = a + (b + c);
        prop_assert!((left.value() - right.value()).abs() <= 1e-9);
        prop_assert!((left.dvalue() - right.dvalue()).abs() <= 1e-9);
    }

    #[test]
    fn sine_chain_rule(x in dual_number()) {
        let s = sin(x);
        prop_assert_eq!(s.value(), x.value().sin());
        prop_assert_eq!(s.dvalue(), x.value().cos() * x.dvalue());
    }

    #[test]
    fn operands_are_unchanged(a in dual_number(), b in dual_number()) {
        let (a0, b0) = (a, b);
        let _ = (a + b, a * b, a - b, sin(a));
        prop_assert_eq!(a, a0);
        prop_assert_eq!(b, b0);
    }

    #[test]
    fn arithmetic_agrees_with_num_dual(a in dual_number(), b in dual_number()) {
        let (ra, rb) = (reference(a), reference(b));

        let sum = a + b;
        let expected = ra + rb;
        prop_assert!(close(sum.value(), expected.re) && close(sum.dvalue(), expected.eps));

        let product = a * b;
        let expected = ra * rb;
        prop_assert!(close(product.value(), expected.re) && close(product.dvalue(), expected.eps));

        let difference = a - b;
        let expected = ra - rb;
        prop_assert!(
            close(difference.value(), expected.re) && close(difference.dvalue(), expected.eps)
        );
    }

    #[test]
    fn elementary_functions_agree_with_num_dual(x in dual_number()) {
        let rx = reference(x);
        let scaled = DualNumber::new(x.value() / 100.0, x.dvalue());
        let pairs = [
            (sin(x), rx.sin()),
            (cos(x), rx.cos()),
            (exp(scaled), reference(scaled).exp()),
        ];
        for (ours, theirs) in pairs {
            prop_assert!(close(ours.value(), theirs.re));
            prop_assert!(close(ours.dvalue(), theirs.eps));
        }
    }

    #[test]
    fn positive_domain_functions_agree_with_num_dual(v in 1.0e-3..1.0e3f64, d in finite()) {
        let x = DualNumber::new(v, d);
        let rx = Dual64::new(v, d);
        for (ours, theirs) in [(ln(x), rx.ln()), (sqrt(x), rx.sqrt())] {
            prop_assert!(close(ours.value(), theirs.re));
            prop_assert!(close(ours.dvalue(), theirs.eps));
        }
    }
}

#[test]
fn tangent_matches_num_dual() {
    let x = DualNumber::new(0.3, 2.0);
    let theirs = Dual64::new(0.3, 2.0).tan();
    assert_relative_eq!(tan(x).value(), theirs.re, epsilon = 1e-14);
    assert_relative_eq!(tan(x).dvalue(), theirs.eps, epsilon = 1e-14);
}

#[test]
fn nan_and_infinity_propagate() {
    let nan = DualNumber::new(f64::NAN, 1.0);
    let one = DualNumber::variable(1.0);
    assert!((nan + one).value().is_nan());
    assert!((nan * one).dvalue().is_nan());

    let inf = DualNumber::constant(f64::INFINITY);
    assert_eq!((inf + one).value(), f64::INFINITY);
    assert_eq!((inf * one).value(), f64::INFINITY);
}

#[test]
fn builtin_registry_agrees_with_free_functions() {
    let registry = Registry::builtin();
    let x = DualNumber::new(0.4, -1.5);
    assert_eq!(registry.apply("sin", x).unwrap(), sin(x));
    assert_eq!(registry.apply("cos", x).unwrap(), cos(x));
    assert_eq!(registry.apply("exp", x).unwrap(), exp(x));
    assert_eq!(registry.apply("tan", x).unwrap(), tan(x));
}
