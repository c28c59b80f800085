//! End-to-end evaluations of `z = x·y + sin(x)`.

use dual::{DualNumber, sin};

fn z(x: DualNumber, y: DualNumber) -> DualNumber {
    x.multiply(y).add(sin(x))
}

#[test]
fn derivative_with_respect_to_x() {
    let x = DualNumber::new(0.5, 1.0);
    let y = DualNumber::new(4.2, 0.0);
    let z = z(x, y);

    assert!((z.value() - 2.579425538604203).abs() <= 1e-15);
    assert!((z.dvalue() - (y.value() + x.value().cos())).abs() <= 1e-15);
}

#[test]
fn derivative_with_respect_to_y() {
    let x = DualNumber::new(0.5, 0.0);
    let y = DualNumber::new(4.2, 1.0);
    let z = z(x, y);

    assert!((z.dvalue() - x.value()).abs() <= 1e-15);
}

#[test]
fn operator_form_matches_named_form() {
    let x = DualNumber::variable(0.5);
    let y = DualNumber::constant(4.2);
    assert_eq!(x * y + sin(x), z(x, y));
}

#[test]
fn operands_are_untouched() {
    let x = DualNumber::new(0.5, 1.0);
    let y = DualNumber::new(4.2, 0.0);
    let _ = z(x, y);

    assert_eq!(x, DualNumber::new(0.5, 1.0));
    assert_eq!(y, DualNumber::new(4.2, 0.0));
}

#[test]
fn renders_result() {
    let x = DualNumber::variable(0.5);
    let y = DualNumber::constant(4.2);
    assert_eq!(z(x, y).to_string(), "2.579425538604203 + 5.077582561890373ε");
}

#[test]
fn shared_across_threads() {
    let x = DualNumber::variable(0.5);
    let y = DualNumber::constant(4.2);
    let expected = z(x, y);

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || z(x, y)))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
