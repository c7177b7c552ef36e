use std::rc::Rc;

use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_PUNCTUATOR_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind};

pub type RegexHandler = fn(&mut Lexer, Regex) -> Result<(), Error>;

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

#[derive(Clone)]
pub struct Lexer {
    patterns: Vec<RegexPattern>,
    tokens: Vec<Token>,
    source: String,
    pos: i32,
    label: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, label: Option<String>) -> Lexer {
        let label = if let Some(label) = label {
            Rc::new(label)
        } else {
            Rc::new(String::from("<expression>"))
        };

        Lexer {
            pos: 0,
            tokens: vec![],
            patterns: vec![
                RegexPattern { regex: Regex::new("[0-9]+").unwrap(), handler: number_handler },
                RegexPattern { regex: Regex::new("\\s+").unwrap(), handler: skip_handler },
                RegexPattern { regex: Regex::new("\\+").unwrap(), handler: MK_PUNCTUATOR_HANDLER!(TokenKind::Plus, "+") },
                RegexPattern { regex: Regex::new("-").unwrap(), handler: MK_PUNCTUATOR_HANDLER!(TokenKind::Dash, "-") },
                RegexPattern { regex: Regex::new("\\*").unwrap(), handler: MK_PUNCTUATOR_HANDLER!(TokenKind::Star, "*") },
                RegexPattern { regex: Regex::new("/").unwrap(), handler: MK_PUNCTUATOR_HANDLER!(TokenKind::Slash, "/") },
                RegexPattern { regex: Regex::new("\\(").unwrap(), handler: MK_PUNCTUATOR_HANDLER!(TokenKind::OpenParen, "(") },
                RegexPattern { regex: Regex::new("\\)").unwrap(), handler: MK_PUNCTUATOR_HANDLER!(TokenKind::CloseParen, ")") },
            ],
            source,
            label,
        }
    }

    pub fn advance_n(&mut self, n: i32) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos as usize..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos as usize >= self.source.len()
    }
}

fn number_handler(lexer: &mut Lexer, regex: Regex) -> Result<(), Error> {
    let remaining = lexer.remainder().to_string();
    let matched = regex.find(&remaining).unwrap().as_str().to_string();

    // Literals outside the i64 range are rejected here instead of wrapping.
    if matched.parse::<i64>().is_err() {
        return Err(Error::new(
            ErrorImpl::NumberOutOfRange { token: matched },
            Position(lexer.pos as u32, Rc::clone(&lexer.label)),
        ));
    }

    lexer.push(MK_TOKEN!(
        TokenKind::Number,
        matched.clone(),
        Span {
            start: Position(lexer.pos as u32, Rc::clone(&lexer.label)),
            end: Position(lexer.pos as u32 + matched.len() as u32, Rc::clone(&lexer.label))
        }
    ));
    lexer.advance_n(matched.len() as i32);
    Ok(())
}

fn skip_handler(lexer: &mut Lexer, regex: Regex) -> Result<(), Error> {
    let remaining = lexer.remainder().to_string();
    let matched = regex.find(&remaining).unwrap().end();
    lexer.advance_n(matched as i32);
    Ok(())
}

/// Lex the input into a flat token vector terminated by a single zero-length
/// `EndOfInput` sentinel. Total: either every character is consumed or the
/// whole tokenization fails, never a partial list.
pub fn tokenize(source: String, label: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, label);

    while !lex.at_eof() {
        let mut matched = false;

        for pattern in lex.clone().patterns.iter() {
            let remaining = lex.remainder().to_string();
            let match_here = pattern.regex.find(&remaining);

            if match_here.is_some() && match_here.unwrap().start() == 0 {
                (pattern.handler)(&mut lex, pattern.regex.clone())?;
                matched = true;
                break;
            }
        }

        if !matched {
            return Err(Error::new(
                ErrorImpl::UnrecognisedCharacter { character: lex.at() },
                Position(lex.pos as u32, Rc::clone(&lex.label)),
            ));
        }
    }

    lex.push(MK_TOKEN!(
        TokenKind::EndOfInput,
        String::from("EOF"),
        Span {
            start: Position(lex.pos as u32, Rc::clone(&lex.label)),
            end: Position(lex.pos as u32, Rc::clone(&lex.label))
        }
    ));
    Ok(lex.tokens)
}
