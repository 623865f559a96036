use pretty_assertions::assert_eq;

use super::*;
use crate::{Span, TokenKind};

fn tok(kind: TokenKind, literal: &str) -> Token {
    Token::new(kind, literal, Span::default())
}

fn ident_expr(name: &str) -> Expression {
    Expression::new(
        tok(TokenKind::Ident, name),
        ExpressionKind::Identifier(name.to_string()),
    )
}

fn int_expr(value: i64) -> Expression {
    Expression::new(
        tok(TokenKind::Int, &value.to_string()),
        ExpressionKind::Integer(value),
    )
}

#[test]
fn test_let_statement_string() {
    let program = Program {
        statements: vec![Statement::new(
            tok(TokenKind::Let, "let"),
            StatementKind::Let {
                name: Identifier::new(tok(TokenKind::Ident, "myVar")),
                value: ident_expr("anotherVar"),
            },
        )],
    };

    assert_eq!(program.to_string(), "let myVar = anotherVar;");
    assert_eq!(program.token_literal(), "let");
}

#[test]
fn test_return_statement_string() {
    let with_value = Statement::new(
        tok(TokenKind::Return, "return"),
        StatementKind::Return {
            value: Some(int_expr(5)),
        },
    );
    let bare = Statement::new(
        tok(TokenKind::Return, "return"),
        StatementKind::Return { value: None },
    );

    assert_eq!(with_value.to_string(), "return 5;");
    assert_eq!(bare.to_string(), "return;");
}

#[test]
fn test_operator_expressions_are_parenthesized() {
    let neg = Expression::new(
        tok(TokenKind::Minus, "-"),
        ExpressionKind::Prefix {
            operator: PrefixOp::Neg,
            operand: Box::new(ident_expr("a")),
        },
    );
    let product = Expression::new(
        tok(TokenKind::Asterisk, "*"),
        ExpressionKind::Infix {
            operator: InfixOp::Mul,
            left: Box::new(neg),
            right: Box::new(int_expr(2)),
        },
    );

    assert_eq!(product.to_string(), "((-a) * 2)");
}

#[test]
fn test_composite_expression_strings() {
    let array = Expression::new(
        tok(TokenKind::LBracket, "["),
        ExpressionKind::Array(vec![int_expr(1), int_expr(2)]),
    );
    let index = Expression::new(
        tok(TokenKind::LBracket, "["),
        ExpressionKind::Index {
            collection: Box::new(array),
            index: Box::new(int_expr(0)),
        },
    );
    let call = Expression::new(
        tok(TokenKind::LParen, "("),
        ExpressionKind::Call {
            callee: Box::new(ident_expr("add")),
            arguments: vec![index, ident_expr("b")],
        },
    );
    let hash = Expression::new(
        tok(TokenKind::LBrace, "{"),
        ExpressionKind::Hash(vec![(ident_expr("k"), int_expr(1))]),
    );

    assert_eq!(call.to_string(), "add(([1, 2][0]), b)");
    assert_eq!(hash.to_string(), "{k:1}");
}

#[test]
fn test_function_literal_string() {
    let body = BlockStatement {
        token: tok(TokenKind::LBrace, "{"),
        statements: vec![Statement::new(
            tok(TokenKind::Ident, "x"),
            StatementKind::Expression(ident_expr("x")),
        )],
    };
    let function = Expression::new(
        tok(TokenKind::Function, "fn"),
        ExpressionKind::Function(Rc::new(FunctionLiteral {
            parameters: vec![
                Identifier::new(tok(TokenKind::Ident, "x")),
                Identifier::new(tok(TokenKind::Ident, "y")),
            ],
            body,
        })),
    );

    assert_eq!(function.to_string(), "fn(x, y) { x }");
    assert_eq!(function.token_literal(), "fn");
}

#[test]
fn test_empty_program_token_literal() {
    assert_eq!(Program::new().token_literal(), "");
}

fn expr_statement(expr: Expression) -> Statement {
    Statement::new(expr.token.clone(), StatementKind::Expression(expr))
}

fn block(statements: Vec<Statement>) -> BlockStatement {
    BlockStatement {
        token: tok(TokenKind::LBrace, "{"),
        statements,
    }
}

#[test]
fn test_string_literals_print_quoted_and_escaped() {
    let string = Expression::new(
        tok(TokenKind::String, "say \"hi\"\n"),
        ExpressionKind::String("say \"hi\"\n\t\\".to_string()),
    );
    assert_eq!(string.to_string(), r#""say \"hi\"\n\t\\""#);
}

#[test]
fn test_expression_statements_are_separated() {
    let program = Program {
        statements: vec![
            expr_statement(ident_expr("a")),
            expr_statement(ident_expr("b")),
            Statement::new(
                tok(TokenKind::Let, "let"),
                StatementKind::Let {
                    name: Identifier::new(tok(TokenKind::Ident, "c")),
                    value: int_expr(1),
                },
            ),
            expr_statement(ident_expr("c")),
        ],
    };
    assert_eq!(program.to_string(), "a;b;let c = 1;c");
}

#[test]
fn test_if_expression_strings() {
    let bare_condition = Expression::new(
        tok(TokenKind::If, "if"),
        ExpressionKind::If {
            condition: Box::new(ident_expr("x")),
            consequence: block(vec![expr_statement(int_expr(1))]),
            alternative: Some(block(Vec::new())),
        },
    );
    assert_eq!(bare_condition.to_string(), "if (x) { 1 } else {}");

    let comparison = Expression::new(
        tok(TokenKind::Lt, "<"),
        ExpressionKind::Infix {
            operator: InfixOp::Lt,
            left: Box::new(ident_expr("x")),
            right: Box::new(ident_expr("y")),
        },
    );
    let parenthesized_condition = Expression::new(
        tok(TokenKind::If, "if"),
        ExpressionKind::If {
            condition: Box::new(comparison),
            consequence: block(vec![
                expr_statement(ident_expr("x")),
                expr_statement(ident_expr("y")),
            ]),
            alternative: None,
        },
    );
    assert_eq!(parenthesized_condition.to_string(), "if (x < y) { x;y }");
}

fn negation_chain(depth: usize) -> Expression {
    let mut expr = int_expr(1);
    for _ in 0..depth {
        expr = Expression::new(
            tok(TokenKind::Minus, "-"),
            ExpressionKind::Prefix {
                operator: PrefixOp::Neg,
                operand: Box::new(expr),
            },
        );
    }
    expr
}

#[test]
fn test_deep_expression_prints_and_drops() {
    let depth = 200_000;
    let expr = negation_chain(depth);
    let printed = expr.to_string();
    assert!(printed.starts_with("(-(-"));
    assert_eq!(printed.len(), depth * 3 + 1);
    drop(expr);
}

#[test]
fn test_deep_nesting_through_blocks_drops() {
    let mut expr = int_expr(0);
    for _ in 0..100_000 {
        let inner = Rc::new(FunctionLiteral {
            parameters: Vec::new(),
            body: block(vec![expr_statement(expr)]),
        });
        expr = Expression::new(
            tok(TokenKind::LBracket, "["),
            ExpressionKind::Array(vec![Expression::new(
                tok(TokenKind::Function, "fn"),
                ExpressionKind::Function(inner),
            )]),
        );
    }
    drop(expr);
}

#[test]
fn test_shared_function_literal_survives_tree_drop() {
    let literal = Rc::new(FunctionLiteral {
        parameters: Vec::new(),
        body: block(vec![expr_statement(negation_chain(3))]),
    });
    let expr = Expression::new(
        tok(TokenKind::Function, "fn"),
        ExpressionKind::Function(Rc::clone(&literal)),
    );
    drop(expr);
    assert_eq!(literal.body.to_string(), "{ (-(-(-1))) }");
}
