//! Unit tests for the canonical AST printer.

use super::{
    expressions::{BinaryOperator, Expr, UnaryOperator, Variable},
    statements::{Compound, FunctionDef, Param, Program, Stmt},
    types::DeclaredType,
};

#[test]
fn test_print_nested_binary_expression() {
    let expr = Expr::binary(
        BinaryOperator::Add,
        Expr::int("3"),
        Expr::binary(BinaryOperator::Mul, Expr::int("4"), Expr::float("2.5")),
    );

    assert_eq!(expr.to_string(), "(3 + (4 * 2.5))");
}

#[test]
fn test_print_chained_unary() {
    let expr = Expr::unary(
        UnaryOperator::Sub,
        Expr::unary(UnaryOperator::Sub, Expr::variable("x")),
    );

    assert_eq!(expr.to_string(), "--x");
}

#[test]
fn test_print_statements() {
    let declare = Stmt::Declare {
        name: "y".to_string(),
        declared_type: DeclaredType::Float,
    };
    let assign = Stmt::Assign {
        target: Variable::new("y"),
        value: Expr::float("1.5"),
    };

    assert_eq!(declare.to_string(), "float y;");
    assert_eq!(assign.to_string(), "y = 1.5;");
    assert_eq!(Stmt::Empty.to_string(), "");
}

#[test]
fn test_print_program() {
    let program = Program {
        function: FunctionDef {
            name: "main".to_string(),
            params: vec![
                Param {
                    declared_type: DeclaredType::Int,
                    name: "a".to_string(),
                },
                Param {
                    declared_type: DeclaredType::Float,
                    name: "b".to_string(),
                },
            ],
            body: Compound {
                statements: vec![
                    Stmt::Declare {
                        name: "x".to_string(),
                        declared_type: DeclaredType::Int,
                    },
                    Stmt::Compound(Compound {
                        statements: vec![Stmt::Empty],
                    }),
                ],
            },
        },
    };

    assert_eq!(
        program.to_string(),
        "function main(int a, float b) { int x; {  } }\n"
    );
}

#[test]
fn test_declared_type_number_kind() {
    use super::types::NumberKind;

    assert_eq!(DeclaredType::Int.number_kind(), NumberKind::Int);
    assert_eq!(DeclaredType::Float.number_kind(), NumberKind::Float);
}
