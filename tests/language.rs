use std::fs;

use vabna::{
    error::Error,
    interpreter::value::core::{FALSE, NULL, TRUE, Value},
    run,
};

fn assert_value(src: &str, expected: &Value) {
    match run(src) {
        Ok(Some(value)) => assert_eq!(&value, expected, "wrong value for script:\n{src}"),
        Ok(None) => panic!("Script produced no value:\n{src}"),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_integer(src: &str, expected: i64) {
    assert_value(src, &Value::Integer(expected));
}

fn assert_success(src: &str) {
    if let Err(e) = run(src) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    assert!(run(src).is_err(), "Script succeeded but was expected to fail:\n{src}");
}

fn runtime_error(src: &str) -> String {
    match run(src) {
        Err(Error::Runtime(e)) => e.to_string(),
        Err(Error::Parse(errors)) => panic!("Script did not parse: {errors:?}"),
        Ok(value) => panic!("Script succeeded with {value:?} but was expected to fail"),
    }
}

#[test]
fn integer_arithmetic_and_precedence() {
    assert_integer("5", 5);
    assert_integer("-5", -5);
    assert_integer("5 + 5 + 5 + 5 - 10", 10);
    assert_integer("2 * 2 * 2 * 2 * 2", 32);
    assert_integer("-50 + 100 + -50", 0);
    assert_integer("5 + 2 * 10", 25);
    assert_integer("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50);
    assert_integer("10 - 4 - 3", 3);
}

#[test]
fn division_truncates_toward_zero() {
    assert_integer("7 / 2", 3);
    assert_integer("-7 / 2", -3);
    assert_integer("7 / -2", -3);
    assert_integer("-7 / -2", 3);
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(runtime_error("let x = 1 / 0;"), "Error on line 1: division by zero");
    assert_failure("0 / 0");
}

#[test]
fn overflow_is_error() {
    assert_eq!(runtime_error("9223372036854775807 + 1"), "Error on line 1: integer overflow");
    assert_failure("-9223372036854775807 - 2");
    assert_failure("4611686018427387904 * 2");
}

#[test]
fn bang_operator_uses_truthiness() {
    assert_value("!true", &FALSE);
    assert_value("!false", &TRUE);
    assert_value("!5", &FALSE);
    assert_value("!0", &FALSE);
    assert_value("!!true", &TRUE);
    assert_value("!!5", &TRUE);
    assert_value("!\"\"", &FALSE);
}

#[test]
fn minus_requires_integer() {
    assert_eq!(runtime_error("-true"), "Error on line 1: unknown operator: -BOOLEAN");
    assert_failure("-\"a\"");
}

#[test]
fn comparisons() {
    assert_value("1 < 2", &TRUE);
    assert_value("1 > 2", &FALSE);
    assert_value("1 == 1", &TRUE);
    assert_value("1 != 1", &FALSE);
    assert_value("true == true", &TRUE);
    assert_value("true != false", &TRUE);
    assert_value("(1 < 2) == true", &TRUE);
    assert_value("(1 > 2) == true", &FALSE);
}

#[test]
fn mismatched_and_unknown_operators() {
    assert_eq!(runtime_error("5 + true;"), "Error on line 1: type mismatch: INTEGER + BOOLEAN");
    assert_eq!(runtime_error("5 == true"), "Error on line 1: type mismatch: INTEGER == BOOLEAN");
    assert_eq!(runtime_error("true + false;"),
               "Error on line 1: unknown operator: BOOLEAN + BOOLEAN");
    assert_eq!(runtime_error("\"a\" - \"b\""),
               "Error on line 1: unknown operator: STRING - STRING");
    assert_eq!(runtime_error("\"a\" == \"a\""),
               "Error on line 1: unknown operator: STRING == STRING");
}

#[test]
fn errors_stop_evaluation() {
    assert_eq!(runtime_error("5; true + false; 5"),
               "Error on line 1: unknown operator: BOOLEAN + BOOLEAN");
    assert_eq!(runtime_error("if (10 > 1) { if (10 > 1) { return true + false; } return 1; }"),
               "Error on line 1: unknown operator: BOOLEAN + BOOLEAN");
    assert_eq!(runtime_error("let f = fn() { 1 / 0 }; f() + 1"),
               "Error on line 1: division by zero");
}

#[test]
fn errors_report_their_line() {
    assert_eq!(runtime_error("let a = 1;\nlet b = 2;\nfoobar"),
               "Error on line 3: identifier not found: foobar");
}

#[test]
fn string_concatenation() {
    assert_value("\"Hello\" + \" \" + \"World!\"", &Value::from("Hello World!"));
    assert_value("\"ভাষা\"", &Value::from("ভাষা"));
}

#[test]
fn if_else_expressions() {
    assert_integer("if (true) { 10 }", 10);
    assert_value("if (false) { 10 }", &NULL);
    assert_integer("if (1) { 10 }", 10);
    assert_integer("if (0) { 10 } else { 20 }", 10);
    assert_integer("if (1 > 2) { 10 } else { 20 }", 20);
    assert_value("if (1 > 2) { 10 } else { }", &NULL);
    assert_value("if (true) { let x = 1; }", &NULL);
}

#[test]
fn if_shares_the_enclosing_scope() {
    assert_integer("let x = 1; if (true) { let x = 2; } x", 2);
}

#[test]
fn return_statements() {
    assert_integer("return 10;", 10);
    assert_integer("return 10; 9;", 10);
    assert_integer("return 2 * 5; 9;", 10);
    assert_integer("9; return 2 * 5; 9;", 10);
    assert_integer("return 10", 10);
}

#[test]
fn nested_return_leaves_every_block() {
    assert_integer("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", 10);
    assert_integer("let f = fn(x) { if (x > 1) { if (x > 2) { return 3; } return 2; } 1 }; f(5)",
                   3);
    assert_integer("let f = fn() { return 1; 2 }; f() + 10", 11);
}

#[test]
fn return_only_leaves_the_innermost_function() {
    assert_integer("let inner = fn() { return 1; };
                    let outer = fn() { inner(); 2 };
                    outer()",
                   2);
}

#[test]
fn let_statements() {
    assert_integer("let a = 5; a;", 5);
    assert_integer("let a = 5 * 5; a;", 25);
    assert_integer("let a = 5; let b = a; b;", 5);
    assert_integer("let a = 5; let b = a; let c = a + b + 5; c;", 15);
    assert_eq!(run("let a = 5;").unwrap(), None);
    assert_eq!(run("let x = 1; 5; let y = 2;").unwrap(), None);
    assert_eq!(run("let x = 1; 5; let y = 2; y").unwrap(), Some(Value::Integer(2)));
}

#[test]
fn runtime_errors_carry_a_single_marker() {
    let message = runtime_error("len(1)");
    assert!(message.starts_with("Error on line 1: "), "{message}");
    assert_eq!(message.matches("Error").count(), 1, "{message}");
}

#[test]
fn unknown_identifier_is_error() {
    assert_eq!(runtime_error("foobar"), "Error on line 1: identifier not found: foobar");
}

#[test]
fn shadowing_does_not_touch_the_outer_binding() {
    assert_integer("let x = 1; fn(){ let x = 2; x }(); x", 1);
    assert_integer("let x = 1; fn(){ let x = 2; x }();", 2);
    assert_integer("let x = 1; let f = fn(x) { x }; f(3); x", 1);
}

#[test]
fn function_application() {
    assert_integer("let identity = fn(x) { x; }; identity(5);", 5);
    assert_integer("let identity = fn(x) { return x; }; identity(5);", 5);
    assert_integer("let double = fn(x) { x * 2; }; double(5);", 10);
    assert_integer("let add = fn(x, y) { x + y; }; add(5, 5);", 10);
    assert_integer("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20);
    assert_integer("fn(x) { x; }(5)", 5);
    assert_value("fn() { }()", &NULL);
    assert_value("fn() { let a = 1; }()", &NULL);
}

#[test]
fn closures() {
    assert_integer("let adder = fn(x){ fn(y){ x + y } }; let add2 = adder(2); add2(3);", 5);
    assert_integer("let newAdder = fn(x) { fn(y) { x + y } }; newAdder(2)(8)", 10);
}

#[test]
fn closures_see_later_bindings() {
    assert_integer("let f = fn() { y }; let y = 7; f()", 7);
    assert_integer("let make = fn() { let g = fn() { z }; let z = 3; g }; make()()", 3);
}

#[test]
fn recursion() {
    assert_integer("let fib = fn(n) { if (n < 2) { n } else { fib(n - 1) + fib(n - 2) } };
                    fib(15)",
                   610);
    assert_integer("let counter = fn(x) { if (x > 100) { return x; } counter(x + 1) }; counter(0)",
                   101);
}

#[test]
fn higher_order_functions() {
    assert_integer("let map = fn(arr, f) {
                        let iter = fn(arr, acc) {
                            if (len(arr) == 0) { acc }
                            else { iter(rest(arr), push(acc, f(first(arr)))) }
                        };
                        iter(arr, [])
                    };
                    let doubled = map([1, 2, 3, 4], fn(x) { x * 2 });
                    doubled[3]",
                   8);
    assert_integer("let reduce = fn(arr, initial, f) {
                        let iter = fn(arr, result) {
                            if (len(arr) == 0) { result }
                            else { iter(rest(arr), f(result, first(arr))) }
                        };
                        iter(arr, initial)
                    };
                    reduce([1, 2, 3, 4, 5], 0, fn(acc, el) { acc + el })",
                   15);
}

#[test]
fn wrong_function_arity_is_error() {
    assert_eq!(runtime_error("let f = fn(x, y) { x + y }; f(3)"),
               "Error on line 1: wrong number of arguments: want=2, got=1");
    assert_failure("fn() { 1 }(1)");
}

#[test]
fn calling_a_non_function_is_error() {
    assert_eq!(runtime_error("let x = 5; x(1)"), "Error on line 1: not a function: INTEGER");
    assert_failure("\"f\"()");
}

#[test]
fn arguments_are_evaluated_left_to_right_and_stop_at_errors() {
    assert_eq!(runtime_error("let f = fn(a, b) { a }; f(missing, 1 / 0)"),
               "Error on line 1: identifier not found: missing");
}

#[test]
fn arrays_and_indexing() {
    assert_value("[1, 2 * 2, 3 + 3]",
                 &Value::from(vec![Value::Integer(1), Value::Integer(4), Value::Integer(6)]));
    assert_integer("[1, 2, 3][0]", 1);
    assert_integer("[1, 2, 3][1]", 2);
    assert_integer("let i = 0; [1][i];", 1);
    assert_integer("[1, 2, 3][1 + 1];", 3);
    assert_integer("let myArray = [1, 2, 3]; myArray[0] + myArray[1] + myArray[2];", 6);
    assert_integer("[[1, 2], [3, 4]][1][0]", 3);
}

#[test]
fn out_of_bounds_index_is_null() {
    assert_value("[1, 2, 3][5]", &NULL);
    assert_value("[1, 2, 3][3]", &NULL);
    assert_value("[1, 2, 3][-1]", &NULL);
    assert_value("[][0]", &NULL);
}

#[test]
fn unsupported_index_is_error() {
    assert_eq!(runtime_error("1[0]"),
               "Error on line 1: index operator not supported: INTEGER[INTEGER]");
    assert_failure("[1][true]");
    assert_failure("\"abc\"[0]");
}

#[test]
fn array_equality_is_identity() {
    assert_value("let a = [1]; a == a", &TRUE);
    assert_value("[1] == [1]", &FALSE);
    assert_value("let f = fn() { 1 }; f == f", &TRUE);
    assert_value("len == len", &TRUE);
}

#[test]
fn builtin_len() {
    assert_integer("len(\"\")", 0);
    assert_integer("len(\"four\")", 4);
    assert_integer("len(\"hello world\")", 11);
    assert_integer("len(\"abc\")", 3);
    assert_integer("len([1, 2, 3])", 3);
    assert_eq!(runtime_error("len(1)"),
               "Error on line 1: argument to `len` not supported, got INTEGER");
    assert_eq!(runtime_error("len(\"one\", \"two\")"),
               "Error on line 1: wrong number of arguments: want=1, got=2");
}

#[test]
fn builtin_array_helpers() {
    assert_integer("first([1, 2, 3])", 1);
    assert_integer("head([1, 2, 3])", 1);
    assert_value("first([])", &NULL);
    assert_integer("last([1, 2, 3])", 3);
    assert_value("last([])", &NULL);
    assert_value("rest([1, 2, 3])", &Value::from(vec![Value::Integer(2), Value::Integer(3)]));
    assert_value("tail([1])", &Value::from(Vec::new()));
    assert_value("rest([])", &NULL);
    assert_value("push([], 1)", &Value::from(vec![Value::Integer(1)]));
    assert_integer("let a = [1]; let b = append(a, 2); len(a) + len(b)", 3);
    assert_eq!(runtime_error("first(1)"),
               "Error on line 1: argument to `first` not supported, got INTEGER");
    assert_eq!(runtime_error("tail(\"x\")"),
               "Error on line 1: argument to `tail` not supported, got STRING");
    assert_failure("push(1, 1)");
}

#[test]
fn builtin_print_yields_null() {
    assert_value("print(1, \"two\", [3])", &NULL);
    assert_value("puts()", &NULL);
    assert_success("let greet = fn(name) { print(\"hello \" + name); }; greet(\"world\");");
}

#[test]
fn bindings_shadow_builtins() {
    assert_integer("let len = fn(x) { 42 }; len([1])", 42);
}

#[test]
fn builtins_are_values() {
    assert_integer("let size = len; size([1, 2])", 2);
    assert_integer("let apply = fn(f, x) { f(x) }; apply(last, [7, 8])", 8);
}

#[test]
fn keyword_spellings_are_interchangeable() {
    assert_integer("dhori x = 5; jodi (x > 1) { ferau x * 2; } nahole { 0 }", 10);
    assert_integer("ধরি যোগ = কাজ(ক, খ) { ক + খ }; যোগ(20, 1)", 21);
    assert_value("sotto == সত্য", &TRUE);
    assert_value("mittha == মিথ্যা", &TRUE);
    assert_integer("let f = kaj(x) { ফেরাও x; }; f(4)", 4);
}

#[test]
fn syntax_errors_are_reported_and_nothing_runs() {
    let Err(Error::Parse(errors)) = run("print(1); let = 5; let y 10;") else {
        panic!("expected parse errors");
    };
    assert!(errors.len() >= 2);
}

#[test]
fn test_script_file() {
    let script = fs::read_to_string("tests/example.vabna").expect("missing file");
    assert_integer(&script, 120);
}
