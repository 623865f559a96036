use pretty_assertions::assert_eq;

use super::{eval, eval_inspect, parse_program};
use crate::print_handler::buffer_handler;
use crate::{Environment, HashKey, Interpreter, Value};

#[test]
fn test_integer_expressions() {
    let cases = [
        ("5", 5),
        ("10", 10),
        ("-5", -5),
        ("-10", -10),
        ("5 + 5 + 5 + 5 - 10", 10),
        ("2 * 2 * 2 * 2 * 2", 32),
        ("-50 + 100 + -50", 0),
        ("5 * 2 + 10", 20),
        ("5 + 2 * 10", 25),
        ("20 + 2 * -10", 0),
        ("50 / 2 * 2 + 10", 60),
        ("2 * (5 + 10)", 30),
        ("3 * 3 * 3 + 10", 37),
        ("3 * (3 * 3) + 10", 37),
        ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50),
        ("10 - 5 - 2", 3),
        ("7 / 2", 3),
        ("-7 / 2", -3),
    ];
    for (source, expected) in cases {
        assert_eq!(eval(source), Value::Integer(expected), "{source}");
    }
}

#[test]
fn test_boolean_expressions() {
    let cases = [
        ("true", true),
        ("false", false),
        ("1 < 2", true),
        ("1 > 2", false),
        ("1 < 1", false),
        ("1 == 1", true),
        ("1 != 1", false),
        ("1 == 2", false),
        ("1 != 2", true),
        ("true == true", true),
        ("false == false", true),
        ("true == false", false),
        ("true != false", true),
        ("(1 < 2) == true", true),
        ("(1 < 2) == false", false),
        ("(1 > 2) == true", false),
    ];
    for (source, expected) in cases {
        assert_eq!(eval(source), Value::from_bool(expected), "{source}");
    }
}

#[test]
fn test_bang_operator() {
    let cases = [
        ("!true", false),
        ("!false", true),
        ("!5", false),
        ("!!true", true),
        ("!!false", false),
        ("!!5", true),
        ("!0", false),
        ("!!0", true),
        ("!\"\"", false),
        ("!if (false) { 1 }", true),
    ];
    for (source, expected) in cases {
        assert_eq!(eval(source), Value::from_bool(expected), "{source}");
    }
}

#[test]
fn test_if_else_expressions() {
    let cases = [
        ("if (true) { 10 }", Value::Integer(10)),
        ("if (false) { 10 }", Value::NULL),
        ("if (1) { 10 }", Value::Integer(10)),
        ("if (0) { 10 }", Value::Integer(10)),
        ("if (1 < 2) { 10 }", Value::Integer(10)),
        ("if (1 > 2) { 10 }", Value::NULL),
        ("if (1 > 2) { 10 } else { 20 }", Value::Integer(20)),
        ("if (1 < 2) { 10 } else { 20 }", Value::Integer(10)),
        ("if (true) { }", Value::NULL),
    ];
    for (source, expected) in cases {
        assert_eq!(eval(source), expected, "{source}");
    }
}

#[test]
fn test_return_statements() {
    let cases = [
        ("return 10;", Value::Integer(10)),
        ("return 10; 9;", Value::Integer(10)),
        ("return 2 * 5; 9;", Value::Integer(10)),
        ("9; return 2 * 5; 9;", Value::Integer(10)),
        (
            "if (10 > 1) { if (10 > 1) { return 10; } return 1; }",
            Value::Integer(10),
        ),
        ("return;", Value::NULL),
        ("let f = fn() { return; 5 }; f()", Value::NULL),
    ];
    for (source, expected) in cases {
        assert_eq!(eval(source), expected, "{source}");
    }
}

#[test]
fn test_error_messages() {
    let cases = [
        ("5 + true;", "type mismatch: INTEGER + BOOLEAN"),
        ("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN"),
        ("1 == true", "type mismatch: INTEGER == BOOLEAN"),
        ("-true", "unknown operator: -BOOLEAN"),
        ("-\"a\"", "unknown operator: -STRING"),
        ("true + false;", "unknown operator: BOOLEAN + BOOLEAN"),
        ("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN"),
        ("true < false", "unknown operator: BOOLEAN < BOOLEAN"),
        (
            "if (10 > 1) { true + false; }",
            "unknown operator: BOOLEAN + BOOLEAN",
        ),
        (
            "if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
            "unknown operator: BOOLEAN + BOOLEAN",
        ),
        ("foobar", "identifier not found: foobar"),
        (r#""Hello" - "World""#, "unknown operator: STRING - STRING"),
        (r#""a" == "a""#, "unknown operator: STRING == STRING"),
        ("[1] + [2]", "unknown operator: ARRAY + ARRAY"),
        (
            r#"{"name": "Monkey"}[fn(x) { x }];"#,
            "unusable as hash key: FUNCTION",
        ),
        ("{[1]: 2}", "unusable as hash key: ARRAY"),
        ("1[0]", "index operator not supported: INTEGER"),
        ("[1, 2][true]", "index operator not supported: ARRAY"),
        ("5()", "not a function: INTEGER"),
        ("let x = 1; x(2)", "not a function: INTEGER"),
        ("fn(x) { x }(1, 2)", "wrong number of arguments: want=1, got=2"),
        ("fn(x, y) { x }(1)", "wrong number of arguments: want=2, got=1"),
    ];
    for (source, expected) in cases {
        assert_eq!(eval(source), Value::error(expected), "{source}");
    }
}

#[test]
fn test_arithmetic_edge_cases() {
    let cases = [
        ("1 / 0", "division by zero"),
        ("9223372036854775807 + 1", "integer overflow in addition"),
        ("-9223372036854775807 - 2", "integer overflow in subtraction"),
        ("4611686018427387904 * 2", "integer overflow in multiplication"),
        ("-(-9223372036854775807 - 1)", "integer overflow in negation"),
        ("(-9223372036854775807 - 1) / -1", "integer overflow in division"),
    ];
    for (source, expected) in cases {
        assert_eq!(eval(source), Value::error(expected), "{source}");
    }
}

#[test]
fn test_error_short_circuits_remaining_statements() {
    let env = Environment::new();
    let mut interpreter = Interpreter::builder()
        .print_handler(buffer_handler())
        .build();
    let program = parse_program("let before = 1; let bad = 5 + true; let after = 2;");

    let result = interpreter.eval_program(&program, &env);

    assert_eq!(result, Value::error("type mismatch: INTEGER + BOOLEAN"));
    assert_eq!(env.get("before"), Some(Value::Integer(1)));
    assert_eq!(env.get("bad"), None);
    assert_eq!(env.get("after"), None);
}

#[test]
fn test_failing_argument_stops_later_arguments() {
    let handler = buffer_handler();
    let mut interpreter = Interpreter::builder()
        .print_handler(handler.clone())
        .build();
    let program = parse_program(r#"len(puts("first"), missing, puts("never"))"#);

    let result = interpreter.eval_program(&program, &Environment::new());

    assert_eq!(result, Value::error("identifier not found: missing"));
    assert_eq!(handler.get_output(), "first\n");
}

#[test]
fn test_let_statements() {
    let cases = [
        ("let a = 5; a;", 5),
        ("let a = 5 * 5; a;", 25),
        ("let a = 5; let b = a; b;", 5),
        ("let a = 5; let b = a; let c = a + b + 5; c;", 15),
    ];
    for (source, expected) in cases {
        assert_eq!(eval(source), Value::Integer(expected), "{source}");
    }
    assert_eq!(eval("let a = 1;"), Value::NULL);
}

#[test]
fn test_let_inside_if_binds_in_enclosing_scope() {
    assert_eq!(eval("if (true) { let leaked = 3; } leaked"), Value::Integer(3));
}

#[test]
fn test_string_expressions() {
    assert_eq!(eval(r#""Hello World!""#), Value::string("Hello World!"));
    assert_eq!(
        eval(r#""Hello" + " " + "World!""#),
        Value::string("Hello World!")
    );
    assert_eq!(eval(r#""tab\there""#), Value::string("tab\there"));
}

#[test]
fn test_function_value_inspect() {
    assert_eq!(eval_inspect("fn(x) { x + 2; };"), "fn(x) {\n(x + 2)\n}");
    assert_eq!(eval_inspect("fn() { }"), "fn() {\n\n}");
    assert_eq!(eval_inspect("len"), "builtin function");
}

#[test]
fn test_array_literals_and_indexing() {
    assert_eq!(eval_inspect("[1, 2 * 2, 3 + 3]"), "[1, 4, 6]");
    assert_eq!(eval_inspect("[]"), "[]");

    let cases = [
        ("[1, 2, 3][0]", Value::Integer(1)),
        ("[1, 2, 3][1]", Value::Integer(2)),
        ("[1, 2, 3][2]", Value::Integer(3)),
        ("let i = 0; [1][i];", Value::Integer(1)),
        ("[1, 2, 3][1 + 1];", Value::Integer(3)),
        ("let myArray = [1, 2, 3]; myArray[2];", Value::Integer(3)),
        (
            "let myArray = [1, 2, 3]; myArray[0] + myArray[1] + myArray[2];",
            Value::Integer(6),
        ),
        ("[1, 2, 3][3]", Value::NULL),
        ("[1, 2, 3][5]", Value::NULL),
        ("[1, 2, 3][-1]", Value::NULL),
    ];
    for (source, expected) in cases {
        assert_eq!(eval(source), expected, "{source}");
    }
}

#[test]
fn test_hash_literal() {
    let source = r#"
        let two = "two";
        {
            "one": 10 - 9,
            two: 1 + 1,
            "thr" + "ee": 6 / 2,
            4: 4,
            true: 5,
            false: 6
        }
    "#;
    let Value::Hash(pairs) = eval(source) else {
        panic!("expected a hash");
    };

    let expected = [
        (HashKey::string("one"), 1),
        (HashKey::string("two"), 2),
        (HashKey::string("three"), 3),
        (HashKey::integer(4), 4),
        (HashKey::boolean(true), 5),
        (HashKey::boolean(false), 6),
    ];
    assert_eq!(pairs.len(), expected.len());
    for (key, value) in expected {
        assert_eq!(pairs[&key].value, Value::Integer(value), "{key:?}");
    }
}

#[test]
fn test_hash_indexing() {
    let cases = [
        (r#"{"foo": 5}["foo"]"#, Value::Integer(5)),
        (r#"{"foo": 5}["bar"]"#, Value::NULL),
        (r#"let key = "foo"; {"foo": 5}[key]"#, Value::Integer(5)),
        (r#"{}["foo"]"#, Value::NULL),
        ("{5: 5}[5]", Value::Integer(5)),
        ("{true: 5}[true]", Value::Integer(5)),
        ("{false: 5}[false]", Value::Integer(5)),
        ("{1: 5}[true]", Value::NULL),
        (r#"{"a": 1, "a": 2}["a"]"#, Value::Integer(2)),
        (r#"len({"a": 1, "a": 2})"#, Value::Integer(1)),
    ];
    for (source, expected) in cases {
        assert_eq!(eval(source), expected, "{source}");
    }
}

#[test]
fn test_hash_keys_by_content_not_identity() {
    let source = r#"
        let stored = "fo" + "o";
        let h = {stored: "found"};
        let probe = "f" + "oo";
        h[probe]
    "#;
    assert_eq!(eval(source), Value::string("found"));
}

#[test]
fn test_builtin_functions() {
    let cases = [
        (r#"len("")"#, Value::Integer(0)),
        (r#"len("four")"#, Value::Integer(4)),
        (r#"len("hello world")"#, Value::Integer(11)),
        ("len([1, 2, 3])", Value::Integer(3)),
        ("len([])", Value::Integer(0)),
        ("first([1, 2, 3])", Value::Integer(1)),
        ("first([])", Value::NULL),
        ("last([1, 2, 3])", Value::Integer(3)),
        ("last([])", Value::NULL),
        ("rest([])", Value::NULL),
        ("len(rest([1, 2, 3]))", Value::Integer(2)),
        ("push([], 1)[0]", Value::Integer(1)),
        (
            "len(1)",
            Value::error("argument to `len` not supported, got INTEGER"),
        ),
        (
            r#"len("one", "two")"#,
            Value::error("wrong number of arguments. got=2, want=1"),
        ),
        (
            "first(1)",
            Value::error("argument to `first` must be ARRAY, got INTEGER"),
        ),
        (
            "push(1, 1)",
            Value::error("argument to `push` must be ARRAY, got INTEGER"),
        ),
    ];
    for (source, expected) in cases {
        assert_eq!(eval(source), expected, "{source}");
    }
    assert_eq!(eval_inspect("rest([1, 2, 3])"), "[2, 3]");
    assert_eq!(eval_inspect("let a = [1]; push(a, 2); a"), "[1]");
}

#[test]
fn test_user_binding_shadows_builtin() {
    assert_eq!(
        eval(r#"let len = fn(x) { 42 }; len("abc")"#),
        Value::Integer(42)
    );
}

#[test]
fn test_puts_writes_through_print_handler() {
    let handler = buffer_handler();
    let mut interpreter = Interpreter::builder()
        .print_handler(handler.clone())
        .build();
    let program = parse_program(r#"puts("a", 1); puts([1, "b"]); puts()"#);

    let result = interpreter.eval_program(&program, &Environment::new());

    assert_eq!(result, Value::NULL);
    assert_eq!(handler.get_output(), "a\n1\n[1, b]\n");
}

#[test]
fn test_environment_persists_across_programs() {
    let env = Environment::new();
    let mut interpreter = Interpreter::builder()
        .print_handler(buffer_handler())
        .build();

    interpreter.eval_program(&parse_program("let x = 40;"), &env);
    interpreter.eval_program(&parse_program("let add = fn(a) { a + x };"), &env);
    let result = interpreter.eval_program(&parse_program("add(2)"), &env);

    assert_eq!(result, Value::Integer(42));
}
