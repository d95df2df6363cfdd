use pretty_assertions::assert_eq;
use tally::{
    ast::Expr,
    error::RuntimeError,
    get_results,
    interpreter::{evaluator::Context, lexer::tokenize, operator::Operator, parser::parse},
    util::num::{SAFE_INTEGER_BOUNDARY, check_safe_range, snap_to_integer},
};

fn expr(src: &str) -> Expr {
    parse(&tokenize(src).unwrap()).unwrap().unwrap()
}

fn context_with(bindings: &[(&str, f64)]) -> Context {
    let mut context = Context::new();
    for (name, value) in bindings {
        context.set_variable(name, *value);
    }
    context
}

#[test]
fn variables_are_bound_and_replaced() {
    let mut context = Context::new();
    assert_eq!(context.get_variable("x"), None);
    assert_eq!(context.variables().count(), 0);

    context.set_variable("x", 1.5);
    assert_eq!(context.get_variable("x"), Some(1.5));

    context.set_variable("x", -3.0);
    assert_eq!(context.get_variable("x"), Some(-3.0));
    assert_eq!(context.variables().collect::<Vec<_>>(), vec![("x", -3.0)]);
}

#[test]
fn evaluates_with_variables() {
    let context = context_with(&[("x", 1.6), ("y", 0.25), ("rate", 3.0)]);
    assert_eq!(context.eval(&expr("rate * 2 + 1")), Ok(7.0));
    assert_eq!(context.eval(&expr("-rate")), Ok(-3.0));
    assert_eq!(context.eval(&expr("-((2.5 * x) ** 6) ** y / .5 ** 3")), Ok(-64.0));
}

#[test]
fn evaluation_does_not_snap() {
    let context = Context::new();
    assert_eq!(context.eval(&expr("0.1 + 0.2")), Ok(0.1 + 0.2));
    assert_eq!(context.eval(&expr("1.99999999999")), Ok(1.999_999_999_99));
}

#[test]
fn undefined_variable() {
    let context = context_with(&[("x", 1.0)]);
    assert_eq!(context.eval(&expr("x + y")),
               Err(RuntimeError::UndefinedVariable { name: "y".to_string() }));
}

#[test]
fn left_operand_fails_first() {
    let context = Context::new();
    assert_eq!(context.eval(&expr("a / b")),
               Err(RuntimeError::UndefinedVariable { name: "a".to_string() }));
    assert_eq!(context.eval(&expr("(1 / 0) + b")), Err(RuntimeError::DivisionByZero));
}

#[test]
fn range_is_checked_on_leaves_and_variables() {
    let context = context_with(&[("big", SAFE_INTEGER_BOUNDARY)]);
    assert_eq!(context.eval(&Expr::Number(SAFE_INTEGER_BOUNDARY)),
               Err(RuntimeError::OutOfRange { value: SAFE_INTEGER_BOUNDARY }));
    assert_eq!(context.eval(&expr("big * 0")),
               Err(RuntimeError::OutOfRange { value: SAFE_INTEGER_BOUNDARY }));
}

#[test]
fn range_is_checked_on_intermediate_values() {
    let context = Context::new();
    assert_eq!(context.eval(&expr("10 ** 20 - 10 ** 20")),
               Err(RuntimeError::OutOfRange { value: 1e20 }));
    assert_eq!(context.eval(&expr("0 - 9007199254740991 - 1")),
               Err(RuntimeError::OutOfRange { value: -SAFE_INTEGER_BOUNDARY }));
}

#[test]
fn nan_passes_the_range_check() {
    assert!(check_safe_range(f64::NAN).unwrap().is_nan());
    assert!(Context::new().eval(&Expr::Number(f64::NAN)).unwrap().is_nan());
}

#[test]
fn pseudo_operators_are_not_evaluable() {
    let context = Context::new();
    for op in [Operator::Assign, Operator::LeftParen, Operator::RightParen] {
        let tree = Expr::operation(op, Expr::Variable("unbound".to_string()), Expr::Number(1.0));
        assert_eq!(context.eval(&tree), Err(RuntimeError::NotEvaluable { operator: op }));
    }
}

#[test]
fn negative_zero_is_reported_as_zero() {
    assert!(snap_to_integer(-0.0).is_sign_positive());
    assert!(snap_to_integer(-0.000_000_000_01).is_sign_positive());

    let results = get_results("0 * -1").unwrap();
    assert_eq!(results, vec![0.0]);
    assert!(results[0].is_sign_positive());
}
