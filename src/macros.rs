//! Utility macros for the compiler.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PUNCTUATOR_HANDLER!` - Creates a lexer handler for one-symbol tokens
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's source text
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a lexer handler for a single punctuator symbol.
///
/// Generates a handler function that pushes a token of the given kind and
/// advances the lexer position past the symbol.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
/// * `$value` - The literal symbol text (used for length calculation)
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("\\+").unwrap(),
///     handler: MK_PUNCTUATOR_HANDLER!(TokenKind::Plus, "+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_PUNCTUATOR_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: Regex| -> Result<(), Error> {
            lexer.push(MK_TOKEN!(
                $kind,
                String::from($value),
                Span {
                    start: Position(lexer.pos as u32, Rc::clone(&lexer.label)),
                    end: Position(
                        lexer.pos as u32 + $value.len() as u32,
                        Rc::clone(&lexer.label)
                    )
                }
            ));
            lexer.advance_n($value.len() as i32);
            Ok(())
        }
    };
}
