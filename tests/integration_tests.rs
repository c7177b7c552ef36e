//! Integration tests for end-to-end compilation.
//!
//! These tests run the complete pipeline from the expression string through
//! tokenization, parsing, and code generation, then execute the emitted
//! assembly with a small interpreter over the instruction text and check
//! the value that would be in the accumulator when `main` returns.

use exprc::compile;

/// Execute the generated assembly text.
///
/// Only the instruction forms the code generator emits are understood:
/// immediate loads into `%rax`, push/pop, add/sub/imul, and cqo/idiv.
fn run_asm(asm: &str) -> i64 {
    let mut rax: i64 = 0;
    let mut rdi: i64 = 0;
    let mut stack: Vec<i64> = Vec::new();

    for line in asm.lines() {
        let line = line.trim();

        if line == ".globl main" || line == "main:" {
            continue;
        }
        if line == "ret" {
            break;
        }

        if let Some(rest) = line.strip_prefix("mov $") {
            let value = rest
                .strip_suffix(", %rax")
                .expect("immediate load targets %rax");
            rax = value.parse().expect("immediate operand is an integer");
        } else if line == "push %rax" {
            stack.push(rax);
        } else if line == "pop %rdi" {
            rdi = stack.pop().expect("pop from empty operand stack");
        } else if line == "add %rdi, %rax" {
            rax += rdi;
        } else if line == "sub %rdi, %rax" {
            rax -= rdi;
        } else if line == "imul %rdi, %rax" {
            rax *= rdi;
        } else if line == "cqo" {
            // Sign extension into %rdx; the interpreter computes on i64
            // directly, so there is nothing to do.
        } else if line == "idiv %rdi" {
            rax /= rdi;
        } else {
            panic!("unexpected instruction: {line}");
        }
    }

    assert!(stack.is_empty(), "operand stack must balance");
    rax
}

fn compile_and_run(source: &str) -> i64 {
    run_asm(&compile(source).unwrap())
}

#[test]
fn test_compile_literal() {
    assert_eq!(compile_and_run("0"), 0);
    assert_eq!(compile_and_run("42"), 42);
    assert_eq!(compile_and_run("9223372036854775807"), i64::MAX);
}

#[test]
fn test_compile_simple_arithmetic() {
    assert_eq!(compile_and_run("1+2"), 3);
    assert_eq!(compile_and_run("5-3"), 2);
    assert_eq!(compile_and_run("4*6"), 24);
    assert_eq!(compile_and_run("8/2"), 4);
}

#[test]
fn test_left_associativity() {
    assert_eq!(compile_and_run("1-2-3"), -4);
    assert_eq!(compile_and_run("8/4/2"), 1);
}

#[test]
fn test_precedence() {
    assert_eq!(compile_and_run("2+3*4"), 14);
    assert_eq!(compile_and_run("(2+3)*4"), 20);
}

#[test]
fn test_division_truncates_toward_zero() {
    assert_eq!(compile_and_run("7/2"), 3);
    assert_eq!(compile_and_run("(1-8)/2"), -3);
}

#[test]
fn test_whitespace_insensitivity() {
    assert_eq!(compile("1 + 2").unwrap(), compile("1+2").unwrap());
    assert_eq!(compile_and_run(" 12 + 34 - 5 "), 41);
}

#[test]
fn test_deeply_nested_grouping() {
    assert_eq!(compile_and_run("((((((1+2))))))*3"), 9);
    assert_eq!(compile_and_run("(1+(2+(3+(4+5))))"), 15);
}

#[test]
fn test_longer_expression() {
    assert_eq!(compile_and_run("5+6*7-8/4"), 45);
    assert_eq!(compile_and_run("(5+6)*(7-8/4)"), 55);
}

#[test]
fn test_frame_structure() {
    let asm = compile("1+1").unwrap();

    assert!(asm.starts_with("  .globl main\nmain:\n"));
    assert!(asm.ends_with("  ret\n"));
}

#[test]
fn test_lex_error_produces_no_assembly() {
    let result = compile("1@2");

    assert!(result.is_err());
    let error = result.err().unwrap();
    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
    assert_eq!(error.get_position().0, 1);
}

#[test]
fn test_parse_error_missing_operand() {
    let result = compile("1+");

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "ExpectedExpression");
}

#[test]
fn test_parse_error_unclosed_parenthesis() {
    let result = compile("(1+2");

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "ExpectedPunctuator");
}

#[test]
fn test_parse_error_trailing_input() {
    let result = compile("1 2");

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().get_error_name(),
        "UnexpectedTrailingInput"
    );
}

#[test]
fn test_number_out_of_range() {
    let result = compile("92233720368547758080");

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "NumberOutOfRange");
}
