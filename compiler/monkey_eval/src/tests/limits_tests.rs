use pretty_assertions::assert_eq;

use super::parse_program;
use crate::print_handler::buffer_handler;
use crate::{EvalConfig, Environment, Interpreter, Value};

const COUNT_DOWN: &str = "
    let down = fn(n) { if (n == 0) { 0 } else { down(n - 1) } };
";

fn interpreter(config: EvalConfig) -> Interpreter {
    Interpreter::builder()
        .config(config)
        .print_handler(buffer_handler())
        .build()
}

fn run(interpreter: &mut Interpreter, source: &str) -> Value {
    interpreter.eval_program(&parse_program(source), &Environment::new())
}

#[test]
fn test_default_config() {
    let config = EvalConfig::default();
    assert_eq!(config.max_call_depth, Some(10_000));
    assert_eq!(config.step_budget, None);
    assert_eq!(Interpreter::new().config(), &config);
}

#[test]
fn test_runaway_recursion_is_an_error() {
    let mut interp = interpreter(EvalConfig {
        max_call_depth: Some(100),
        step_budget: None,
    });
    assert_eq!(
        run(&mut interp, "let f = fn(n) { f(n + 1) }; f(0)"),
        Value::error("maximum recursion depth exceeded (limit: 100)")
    );
}

#[test]
fn test_recursion_within_limit_succeeds() {
    let mut interp = interpreter(EvalConfig {
        max_call_depth: Some(2_000),
        step_budget: None,
    });
    let source = format!("{COUNT_DOWN} down(1999)");
    assert_eq!(run(&mut interp, &source), Value::Integer(0));

    let source = format!("{COUNT_DOWN} down(2000)");
    assert_eq!(
        run(&mut interp, &source),
        Value::error("maximum recursion depth exceeded (limit: 2000)")
    );
}

#[test]
fn test_depth_resets_between_programs() {
    let mut interp = interpreter(EvalConfig {
        max_call_depth: Some(50),
        step_budget: None,
    });
    let runaway = "let f = fn() { f() }; f()";
    let expected = Value::error("maximum recursion depth exceeded (limit: 50)");

    assert_eq!(run(&mut interp, runaway), expected);
    assert_eq!(run(&mut interp, "fn(x) { x }(7)"), Value::Integer(7));
    assert_eq!(run(&mut interp, runaway), expected);
}

#[test]
fn test_unlimited_depth() {
    let mut interp = interpreter(EvalConfig {
        max_call_depth: None,
        step_budget: None,
    });
    let source = format!("{COUNT_DOWN} down(3000)");
    assert_eq!(run(&mut interp, &source), Value::Integer(0));
}

#[test]
fn test_step_budget_counts_expressions() {
    // `1 + 2` is three expressions: the sum and both operands.
    let mut enough = interpreter(EvalConfig {
        max_call_depth: None,
        step_budget: Some(3),
    });
    assert_eq!(run(&mut enough, "1 + 2"), Value::Integer(3));

    let mut short = interpreter(EvalConfig {
        max_call_depth: None,
        step_budget: Some(2),
    });
    assert_eq!(
        run(&mut short, "1 + 2"),
        Value::error("evaluation step budget exceeded (limit: 2)")
    );
}

#[test]
fn test_step_budget_stops_infinite_recursion() {
    let mut interp = interpreter(EvalConfig {
        max_call_depth: None,
        step_budget: Some(1_000),
    });
    assert_eq!(
        run(&mut interp, "let f = fn() { f() }; f()"),
        Value::error("evaluation step budget exceeded (limit: 1000)")
    );
    // refilled for the next program
    assert_eq!(run(&mut interp, "1 + 2"), Value::Integer(3));
}

#[test]
fn test_builder_setters() {
    let interp = Interpreter::builder()
        .max_call_depth(Some(7))
        .step_budget(Some(99))
        .print_handler(buffer_handler())
        .build();
    assert_eq!(
        interp.config(),
        &EvalConfig {
            max_call_depth: Some(7),
            step_budget: Some(99),
        }
    );
}

#[test]
fn test_deeply_nested_expression() {
    let source = format!("{}1", "-".repeat(10_000));
    let mut interp = interpreter(EvalConfig::default());
    assert_eq!(run(&mut interp, &source), Value::Integer(1));
}

#[test]
fn test_very_deep_program_is_evaluated_and_freed() {
    let source = format!("{}1", "-".repeat(300_000));
    let mut interp = interpreter(EvalConfig::default());
    assert_eq!(run(&mut interp, &source), Value::Integer(1));

    let nested_calls = format!("{}1{}", "fn(x) { x }(".repeat(20_000), ")".repeat(20_000));
    assert_eq!(run(&mut interp, &nested_calls), Value::Integer(1));
}
