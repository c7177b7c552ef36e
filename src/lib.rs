#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod codegen;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Compile one expression string into x86-64 assembly text.
///
/// The three stages run strictly in sequence and the assembly only exists
/// once all of them have succeeded, so a caller can never observe partial
/// output from a failed compilation.
pub fn compile(source: &str) -> Result<String, Error> {
    let tokens = lexer::lexer::tokenize(source.to_string(), None)?;
    let ast = parser::parser::parse(tokens)?;
    Ok(codegen::codegen::generate(&ast))
}

/// Find the source line containing `offset` along with the offset's position
/// inside that line. Offsets at the very end of the input (where "unexpected
/// end of input" style errors point) resolve to one past the last line.
pub fn get_line_at_offset(source: &str, offset: u32) -> (String, usize) {
    let pos = (offset as usize).min(source.len());

    let mut start = 0;
    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return (line.trim_end_matches('\n').to_string(), pos - start);
        }

        start = end;
    }

    let last = source.rsplit('\n').next().unwrap_or_default();
    (last.to_string(), pos - (source.len() - last.len()))
}

pub fn display_error(source: &str, error: &Error) {
    /*
        1+(2*3
              ^ ExpectedPunctuator (Expected `)`, but found `EOF`)
    */

    let position = error.get_position();
    let (line_text, line_offset) = get_line_at_offset(source, position.0);

    let message = match error.get_tip() {
        ErrorTip::None => error.get_error_name().to_string(),
        tip => format!("{} ({})", error.get_error_name(), tip),
    };

    let caret_column = line_text
        .get(..line_offset)
        .map(|prefix| prefix.chars().count())
        .unwrap_or(line_offset);

    eprintln!("{}", line_text);
    eprintln!("{}^ {}", " ".repeat(caret_column), message);
}
