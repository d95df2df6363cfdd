use tally::{
    error::{Error, LexError, ParseError, RuntimeError, StatementError},
    get_results,
    interpreter::session::Session,
};

fn assert_results(src: &str, expected: &[f64]) {
    match get_results(src) {
        Ok(results) => assert_eq!(results, expected, "results of {src:?}"),
        Err(e) => panic!("Script {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) -> StatementError {
    match get_results(src) {
        Ok(results) => panic!("Script {src:?} succeeded with {results:?} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn precedence_and_associativity() {
    assert_results("1 + 2 * 3", &[7.0]);
    assert_results("(1 + 2) * 3", &[9.0]);
    assert_results("8 / 2 / 2", &[2.0]);
    assert_results("10 - 4 - 3", &[3.0]);
    assert_results("2 + 3 * 4 - 6 / 2", &[11.0]);
    assert_results("2 * (3 + (4 - 2))", &[10.0]);
}

#[test]
fn prefix_operators() {
    assert_results("-5 + 3", &[-2.0]);
    assert_results("-1 + -2 * -3", &[5.0]);
    assert_results("(-5 + 3) * 2", &[-4.0]);
    assert_results("-.5 + 2", &[1.5]);
    assert_results("-5 * (2 + +.5)", &[-12.5]);
    assert_results("--3", &[3.0]);
}

#[test]
fn power_binds_tighter_than_sign() {
    assert_results("-2 ** 3", &[-8.0]);
    assert_results("(2 + 3) ** 2", &[25.0]);
    assert_results("(2.5 + 3) ** 2", &[30.25]);

    let results = get_results("2 ** 0.5").unwrap();
    assert!((results[0] - std::f64::consts::SQRT_2).abs() < 1e-12);

    assert_results("x = 1.6; y = .25; -((2.5 * x) ** 6) ** y / .5 ** 3", &[-64.0]);
}

#[test]
fn power_of_negative_base_with_fraction_is_nan() {
    let results = get_results("(0 - 8) ** 0.5").unwrap();
    assert!(results[0].is_nan());
}

#[test]
fn assignment_and_variable_persistence() {
    assert_results("x = 10; y = x / 2; y + 3", &[8.0]);
    assert_results("  x = 10;  y = x / 2 ;  y + 3 ", &[8.0]);
    assert_results("a = 5; a * 2", &[10.0]);
    assert_results("a=1;b=2;c=a+b;c*2", &[6.0]);
    assert_results("a = 5; b = a * 2", &[]);
    assert_results("y = 12; x = -y + 2; x", &[-10.0]);
}

#[test]
fn assignment_overwrites_previous_value() {
    assert_results("var = 15; var - 5; var = 1; var", &[10.0, 1.0]);
}

#[test]
fn assignment_chains_bind_every_target() {
    let mut session = Session::new();
    assert_eq!(session.run("x = y = 3").unwrap(), Vec::<f64>::new());
    assert_eq!(session.context().get_variable("x"), Some(3.0));
    assert_eq!(session.context().get_variable("y"), Some(3.0));
}

#[test]
fn variables_persist_across_runs() {
    let mut session = Session::new();
    session.run("rate = 3").unwrap();
    assert_eq!(session.run("rate * 2; rate ** 2").unwrap(), vec![6.0, 9.0]);
}

#[test]
fn empty_statements_are_skipped() {
    assert_results("", &[]);
    assert_results(";;;", &[]);
    assert_results("1+1;", &[2.0]);
    assert_results(";1+1", &[2.0]);
    assert_results("a=1;;b=a+1;;b*2", &[4.0]);
    assert_results("()", &[]);
    assert_results("1 + 1; 2 * 3", &[2.0, 6.0]);
}

#[test]
fn results_near_integers_are_snapped() {
    assert_results("1.99999999999", &[2.0]);
    assert_results("-1.99999999999", &[-2.0]);
    assert_results("-2.00000000001", &[-2.0]);
    assert_results("1.9999999999", &[1.999_999_999_9]);
    assert_results("-1.9999999999", &[-1.999_999_999_9]);
    assert_results("0.1 * 3", &[0.300_000_000_000_000_04]);
}

#[test]
fn range_guard() {
    assert_results("9007199254740991", &[9_007_199_254_740_991.0]);

    for src in ["9007199254740992",
                "-9007199254740992",
                "9007199254740991 + 1",
                "-9007199254740991 - 1",
                "10 ** 20 / 10 ** 19"]
    {
        let err = assert_failure(src);
        assert!(matches!(err.kind, Error::Runtime(RuntimeError::OutOfRange { .. })),
                "{src:?} failed with {err}");
    }
}

#[test]
fn division_and_remainder() {
    let err = assert_failure("1 / 0");
    assert_eq!(err.kind, Error::Runtime(RuntimeError::DivisionByZero));

    assert_results("5 % 2", &[1.0]);
    assert_results("-5 % 3", &[-2.0]);
    assert_results("7.0000000001 % 4", &[3.0]);

    let err = assert_failure("5.5 % 2");
    assert!(matches!(err.kind,
                     Error::Runtime(RuntimeError::InvalidOperand { value, .. }) if value == 5.5));

    let err = assert_failure("5 % 0");
    assert_eq!(err.kind, Error::Runtime(RuntimeError::DivisionByZero));
}

#[test]
fn first_error_stops_the_batch() {
    let mut session = Session::new();
    let err = session.run("1 / 0; a = 1").unwrap_err();
    assert_eq!(err.kind, Error::Runtime(RuntimeError::DivisionByZero));
    assert_eq!(err.index, 1);
    assert_eq!(session.context().get_variable("a"), None);

    let mut session = Session::new();
    let err = session.run("a = 1; 1 / 0").unwrap_err();
    assert_eq!(err.kind, Error::Runtime(RuntimeError::DivisionByZero));
    assert_eq!(err.index, 2);
    assert_eq!(err.statement, "1 / 0");
    assert_eq!(session.context().get_variable("a"), Some(1.0));
}

#[test]
fn parenthesis_errors() {
    assert_eq!(assert_failure("(1 + 2").kind,
               Error::Parse(ParseError::MissingRightParenthesis));
    assert_eq!(assert_failure(")").kind,
               Error::Parse(ParseError::MissingLeftParenthesis));
    assert_eq!(assert_failure("1 + (2 * 3))").kind,
               Error::Parse(ParseError::MissingLeftParenthesis));
    assert_eq!(assert_failure("(1 * (2 + 3))) - 4").kind,
               Error::Parse(ParseError::MissingLeftParenthesis));
}

#[test]
fn undefined_variable_names_the_variable() {
    let err = assert_failure("y = x + 1");
    assert_eq!(err.kind,
               Error::Runtime(RuntimeError::UndefinedVariable { name: "x".to_string() }));
}

#[test]
fn invalid_assignment_targets_are_errors() {
    for src in ["1 = 2", "-x = 3", "x + 1 = 2", "x = 1 = 2"] {
        let err = assert_failure(src);
        assert!(matches!(err.kind, Error::Parse(ParseError::InvalidAssignmentTarget { .. })),
                "{src:?} failed with {err}");
    }
}

#[test]
fn nested_assignment_is_not_evaluable() {
    let err = assert_failure("1 + (x = 2)");
    assert!(matches!(err.kind, Error::Runtime(RuntimeError::NotEvaluable { .. })));
}

#[test]
fn lexical_errors_are_reported() {
    assert!(matches!(assert_failure("1 @ 2").kind,
                     Error::Lex(LexError::IllegalCharacter { character: '@', .. })));
    assert!(matches!(assert_failure("1.2.3").kind, Error::Lex(LexError::MalformedNumber { .. })));
}

#[test]
fn missing_operands_are_errors() {
    for src in ["2 +", "x =", "-", "* 3", "() + 1", "1 2"] {
        assert!(matches!(assert_failure(src).kind, Error::Parse(_)), "{src:?}");
    }
}

#[test]
fn error_message_identifies_the_statement() {
    let err = assert_failure("a = 1; b = a / 0");
    assert_eq!(err.to_string(), "Error in statement 2 `b = a / 0`: Division by zero.");
}

#[test]
fn deeply_nested_input_fails_without_crashing() {
    let src = format!("{}1{}", "(".repeat(100_000), ")".repeat(100_000));
    assert!(matches!(assert_failure(&src).kind,
                     Error::Parse(ParseError::NestingTooDeep { .. })));

    let mut session = Session::new();
    assert!(session.run(&format!("a = 1; {}a", "-".repeat(100_000))).is_err());
    assert_eq!(session.run("a + 1").unwrap(), vec![2.0]);
}

#[test]
fn long_sums_within_the_nesting_limit() {
    assert_results(&vec!["1"; 500].join(" + "), &[500.0]);
}
