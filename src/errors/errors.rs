use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::NumberOutOfRange { .. } => "NumberOutOfRange",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::ExpectedExpression { .. } => "ExpectedExpression",
            ErrorImpl::ExpectedPunctuator { .. } => "ExpectedPunctuator",
            ErrorImpl::UnexpectedTrailingInput { .. } => "UnexpectedTrailingInput",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::NumberOutOfRange { token } => ErrorTip::Suggestion(format!(
                "Literal `{}` does not fit in a 64-bit integer",
                token
            )),
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
            ErrorImpl::ExpectedExpression { token } => ErrorTip::Suggestion(format!(
                "Expected a number or `(`, but found `{}`",
                token
            )),
            ErrorImpl::ExpectedPunctuator { expected, got } => ErrorTip::Suggestion(format!(
                "Expected `{}`, but found `{}`",
                expected, got
            )),
            ErrorImpl::UnexpectedTrailingInput { token } => ErrorTip::Suggestion(format!(
                "Input continues with `{}` after a complete expression",
                token
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("number out of range: {token:?}")]
    NumberOutOfRange { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("expected an expression, found: {token:?}")]
    ExpectedExpression { token: String },
    #[error("expected {expected:?}, found: {got:?}")]
    ExpectedPunctuator { expected: String, got: String },
    #[error("unexpected trailing input: {token:?}")]
    UnexpectedTrailingInput { token: String },
}
