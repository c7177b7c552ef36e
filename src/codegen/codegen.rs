use crate::ast::expressions::{BinaryOp, Expr};

/// Emit a complete assembly program that evaluates the expression and
/// returns its value from `main` in `%rax`.
pub fn generate(expr: &Expr) -> String {
    let mut asm = String::new();
    asm.push_str("  .globl main\n");
    asm.push_str("main:\n");

    emit_expr(expr, &mut asm);

    asm.push_str("  ret\n");

    asm
}

/// Post-order emission for one node.
///
/// The right subtree is evaluated first and parked on the machine stack, so
/// the left operand is already sitting in `%rax` when the combining
/// instruction runs. Swapping the evaluation order also requires swapping
/// the operand roles in every combining instruction below.
fn emit_expr(node: &Expr, asm: &mut String) {
    match node {
        Expr::Number { value } => {
            asm.push_str(&format!("  mov ${value}, %rax\n"));
        }
        Expr::Binary { op, lhs, rhs } => {
            emit_expr(rhs, asm);
            asm.push_str("  push %rax\n");
            emit_expr(lhs, asm);
            asm.push_str("  pop %rdi\n");
            match op {
                BinaryOp::Add => asm.push_str("  add %rdi, %rax\n"),
                BinaryOp::Sub => asm.push_str("  sub %rdi, %rax\n"),
                BinaryOp::Mul => asm.push_str("  imul %rdi, %rax\n"),
                BinaryOp::Div => {
                    // idiv divides %rdx:%rax, so the accumulator has to be
                    // sign-extended into %rdx first.
                    asm.push_str("  cqo\n");
                    asm.push_str("  idiv %rdi\n");
                }
            }
        }
    }
}
