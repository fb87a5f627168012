//! Unit tests for the evaluator module.

use rstest::rstest;

use crate::{
    ast::{
        expressions::{BinaryOperator, Expr, UnaryOperator, Variable},
        statements::{Compound, FunctionDef, Program, Stmt},
        types::{DeclaredType, NumberKind},
    },
    errors::errors::{ErrorImpl, ErrorKind},
    lexer::lexer::Lexer,
    parser::parser::parse,
};

use super::{
    environment::Environment,
    evaluator::{evaluate, Evaluation},
    value::Value,
};

fn setup_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parses and evaluates without running the scope checker.
fn evaluate_source(source: &str) -> Result<Evaluation, crate::errors::errors::Error> {
    setup_logger();
    let program = parse(Lexer::new(source.to_string(), None)).unwrap();
    evaluate(&program)
}

fn program_with_body(statements: Vec<Stmt>) -> Program {
    Program {
        function: FunctionDef {
            name: "main".to_string(),
            params: vec![],
            body: Compound { statements },
        },
    }
}

#[rstest]
#[case("3 + 4 * 2", 11.0)]
#[case("(3 + 4) * 2", 14.0)]
#[case("--5", 5.0)]
#[case("-5 + 3", -2.0)]
#[case("+7", 7.0)]
#[case("10 - 4 - 3", 3.0)]
#[case("7 / 2", 3.5)]
#[case("2 * -(1 + 2)", -6.0)]
fn test_integer_expressions(#[case] expr: &str, #[case] expected: f64) {
    let evaluation = evaluate_source(&format!("function main(int a) {{ r = {}; }}", expr)).unwrap();

    assert_eq!(evaluation.result.kind(), NumberKind::Int);
    assert_eq!(evaluation.result.as_f64(), expected);
    assert_eq!(evaluation.binding("r"), Some(evaluation.result));
}

#[rstest]
#[case("1.5 + 2.25", 3.75)]
#[case("0.5 * 4.0 - 1.0", 1.0)]
#[case("-2.5", -2.5)]
fn test_float_expressions(#[case] expr: &str, #[case] expected: f64) {
    let evaluation = evaluate_source(&format!("function main(int a) {{ r = {}; }}", expr)).unwrap();

    assert_eq!(evaluation.result.kind(), NumberKind::Float);
    assert_eq!(evaluation.result.as_f64(), expected);
}

#[test]
fn test_declare_then_assign() {
    let evaluation =
        evaluate_source("function main(int a) { int y; y = 5; y = y + 1; }").unwrap();

    assert_eq!(evaluation.binding("y").unwrap().as_f64(), 6.0);
    assert_eq!(evaluation.result.as_f64(), 6.0);
    assert_eq!(evaluation.bindings.len(), 1);
}

#[test]
fn test_declarations_start_at_zero() {
    let evaluation = evaluate_source("function main(int a) { int i; float f; }").unwrap();

    assert_eq!(
        evaluation.bindings,
        vec![
            ("i".to_string(), Value::int(0)),
            ("f".to_string(), Value::float(0.0)),
        ]
    );
}

#[test]
fn test_bindings_keep_insertion_order() {
    let evaluation =
        evaluate_source("function main(int a) { int c; int b; c = 1; int a; b = 2; }").unwrap();

    let names: Vec<&str> = evaluation
        .bindings
        .iter()
        .map(|(name, _)| name.as_str())
        .collect();
    assert_eq!(names, vec!["c", "b", "a"]);
}

#[test]
fn test_mixed_kinds_are_rejected() {
    let error = evaluate_source(
        "function main(int a) { int x; float y; x = 1; y = 1.5; x = x + y; }",
    )
    .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Runtime);
    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::TypeMatchError {
            operator: "+".to_string(),
            left: "int".to_string(),
            right: "float".to_string()
        }
    );
}

#[test]
fn test_declared_float_assigned_int_literal() {
    // Declared types do not constrain what an assignment stores.
    let evaluation = evaluate_source("function main(int a) { float y; y = 2; }").unwrap();

    assert_eq!(evaluation.binding("y").unwrap().kind(), NumberKind::Int);
}

#[test]
fn test_assign_creates_missing_binding() {
    let evaluation = evaluate_source("function main(int a) { x = 1; }").unwrap();

    assert_eq!(evaluation.binding("x"), Some(Value::int(1)));
}

#[test]
fn test_reading_unbound_variable_fails() {
    let error = evaluate_source("function main(int a) { x = a; }").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Runtime);
    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::VariableNotBound {
            variable: "a".to_string()
        }
    );
}

#[test]
fn test_redeclaration_fails_at_runtime() {
    let error = evaluate_source("function main(int a) { int x; x = 3; int x; }").unwrap_err();

    assert_eq!(error.get_error_name(), "VariableAlreadyBound");
}

#[test]
fn test_division_by_zero_follows_float_rules() {
    let evaluation = evaluate_source("function main(int a) { p = 1.0 / 0.0; z = 0 / 0; }").unwrap();

    assert_eq!(evaluation.binding("p").unwrap().as_f64(), f64::INFINITY);
    assert!(evaluation.binding("z").unwrap().as_f64().is_nan());
}

#[test]
fn test_empty_body_yields_zero() {
    let evaluation = evaluate_source("function main(int a) { }").unwrap();

    assert_eq!(evaluation.result, Value::int(0));
    assert!(evaluation.bindings.is_empty());
}

#[test]
fn test_result_is_last_statement() {
    let evaluation = evaluate_source("function main(int a) { x = 4; { y = x * 2; } }").unwrap();
    assert_eq!(evaluation.result, Value::int(8));

    let evaluation = evaluate_source("function main(int a) { x = 4; float f; }").unwrap();
    assert_eq!(evaluation.result, Value::float(0.0));
}

#[test]
fn test_hand_built_tree() {
    let program = program_with_body(vec![
        Stmt::Declare {
            name: "v".to_string(),
            declared_type: DeclaredType::Float,
        },
        Stmt::Assign {
            target: Variable::new("v"),
            value: Expr::unary(
                UnaryOperator::Sub,
                Expr::binary(BinaryOperator::Div, Expr::float("9.0"), Expr::float("4.5")),
            ),
        },
    ]);

    let evaluation = evaluate(&program).unwrap();
    assert_eq!(evaluation.binding("v"), Some(Value::float(-2.0)));
}

#[test]
fn test_malformed_literal_in_hand_built_tree() {
    let program = program_with_body(vec![Stmt::Assign {
        target: Variable::new("v"),
        value: Expr::int("1.5"),
    }]);

    assert_eq!(
        evaluate(&program).unwrap_err().get_error_name(),
        "NumberParseError"
    );
}

#[rstest]
#[case(Value::int(6), "6")]
#[case(Value::int(-2), "-2")]
#[case(Value::new(NumberKind::Int, 3.5), "3.5")]
#[case(Value::new(NumberKind::Int, 1e20), "100000000000000000000")]
#[case(Value::new(NumberKind::Int, -1e20), "-100000000000000000000")]
#[case(Value::float(6.0), "6.0")]
#[case(Value::float(1.5), "1.5")]
#[case(Value::float(f64::INFINITY), "inf")]
fn test_value_display(#[case] value: Value, #[case] expected: &str) {
    assert_eq!(value.to_string(), expected);
}

#[test]
fn test_product_beyond_i64_prints_exactly() {
    let evaluation =
        evaluate_source("function main(int a) { int x; x = 10000000000 * 10000000000; }").unwrap();

    assert_eq!(evaluation.result.kind(), NumberKind::Int);
    assert_eq!(evaluation.result.to_string(), "100000000000000000000");
}

#[test]
fn test_environment_operations() {
    let mut environment = Environment::new();
    assert!(environment.is_empty());

    environment.declare("x", Value::int(0)).unwrap();
    assert!(environment.declare("x", Value::int(1)).is_err());

    environment.assign("x", Value::int(5));
    environment.assign("y", Value::float(2.0));

    assert_eq!(environment.get("x").unwrap(), Value::int(5));
    assert!(environment.contains("y"));
    assert_eq!(environment.len(), 2);
    assert_eq!(
        environment.get("z").unwrap_err().get_error_name(),
        "VariableNotBound"
    );
}
