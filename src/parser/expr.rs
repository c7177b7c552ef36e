use crate::{
    ast::expressions::{BinaryOp, Expr},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

/// Pratt loop: parse a prefix (NUD) expression, then keep folding infix
/// (LED) operators into the left-hand side while the next operator binds
/// tighter than `bp`. The strict `>` comparison is what makes repeated
/// same-tier operators group from the left.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    if !parser.get_nud_lookup().contains_key(&token_kind) {
        return Err(Error::new(
            ErrorImpl::ExpectedExpression {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        ));
    }

    let nud_handler = *parser.get_nud_lookup().get(&token_kind).unwrap();
    let mut left = nud_handler(parser)?;

    // While LED and current BP is higher than the BP of the enclosing
    // operator, continue folding into the left-hand side
    while *parser
        .get_bp_lookup()
        .get(&parser.current_token_kind())
        .unwrap_or(&BindingPower::Default)
        > bp
    {
        let token_kind = parser.current_token_kind();
        if !parser.get_led_lookup().contains_key(&token_kind) {
            return Err(Error::new(
                ErrorImpl::ExpectedExpression {
                    token: parser.current_token().value.clone(),
                },
                parser.get_position(),
            ));
        }

        let led_handler = *parser.get_led_lookup().get(&token_kind).unwrap();
        let operator_bp = *parser.get_bp_lookup().get(&token_kind).unwrap();
        left = led_handler(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let result = parser.current_token().value.parse::<i64>();

            if result.is_err() {
                Err(Error::new(
                    ErrorImpl::NumberParseError {
                        token: parser.current_token().value.clone(),
                    },
                    parser.get_position(),
                ))
            } else {
                parser.advance();
                Ok(Expr::number(result.unwrap()))
            }
        }
        _ => Err(Error::new(
            ErrorImpl::ExpectedExpression {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();

    let right = parse_expr(parser, bp)?;

    let op = match operator_token.kind {
        TokenKind::Plus => BinaryOp::Add,
        TokenKind::Dash => BinaryOp::Sub,
        TokenKind::Star => BinaryOp::Mul,
        TokenKind::Slash => BinaryOp::Div,
        _ => unreachable!("binary handler registered for a non-operator token"),
    };

    Ok(Expr::binary(op, left, right))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}
