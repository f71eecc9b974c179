// Copyright 2026 The Eqclass Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use regex::{CaptureMatches, Captures, Regex};

use crate::common::ErrorCode::*;
use crate::common::{EquationError, EquationResult, ErrorCode};
use crate::config::Config;


/// A symbol occurrence with its surface kind: wrapped in the configured
/// delimiter pair (`Parameter`) or bare (`Variable`). Exactly one kind per
/// token; the tokenizer itself enforces this.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Token<'input> {
    Parameter(&'input str),
    Variable(&'input str),
}

impl<'input> Token<'input> {
    pub fn symbol(&self) -> &'input str {
        match self {
            Token::Parameter(name) => name,
            Token::Variable(name) => name,
        }
    }
}

fn error<T>(code: ErrorCode, start: usize, end: usize) -> Result<T, EquationError> {
    Err(EquationError {
        start,
        end,
        code,
        details: None,
    })
}

pub type Spanned<T> = (usize, T, usize);

/// A compiled tokenization grammar. The pattern is an alternation of the
/// delimiter-wrapped form and the bare form of the configured identifier,
/// with one named capture group per token kind.
#[derive(Clone, Debug)]
pub struct Grammar {
    pattern: Regex,
}

impl Grammar {
    pub fn new(config: &Config) -> EquationResult<Grammar> {
        let (open, close) = config.delimiters;
        let pattern = format!(
            "(?:{open}(?P<parameter>{ident}){close})|(?P<variable>{ident})",
            open = regex::escape(&open.to_string()),
            close = regex::escape(&close.to_string()),
            ident = config.identifier,
        );

        match Regex::new(&pattern) {
            Ok(pattern) => Ok(Grammar { pattern }),
            Err(err) => Err(EquationError {
                start: 0,
                end: 0,
                code: BadGrammar,
                details: Some(err.to_string()),
            }),
        }
    }

    /// Lazily scan `text` for tokens, left to right. Matches are
    /// non-overlapping and never recurse into nested delimiters; numeric
    /// literals, operators and punctuation yield no tokens at all.
    pub fn tokenize<'g, 'input>(&'g self, text: &'input str) -> Tokenizer<'g, 'input> {
        Tokenizer {
            matches: self.pattern.captures_iter(text),
        }
    }
}

pub struct Tokenizer<'g, 'input> {
    matches: CaptureMatches<'g, 'input>,
}

impl<'input> Tokenizer<'_, 'input> {
    fn token(caps: Captures<'input>) -> Result<Spanned<Token<'input>>, EquationError> {
        // group 0 is the whole match and is always present
        let whole = caps.get(0).unwrap();

        // a match populating zero or both kinds means the configured
        // grammar is broken, not that the input is; fail fast
        match (caps.name("parameter"), caps.name("variable")) {
            (Some(name), None) => Ok((whole.start(), Token::Parameter(name.as_str()), whole.end())),
            (None, Some(name)) => Ok((whole.start(), Token::Variable(name.as_str()), whole.end())),
            (None, None) => error(NoTokenKind, whole.start(), whole.end()),
            (Some(_), Some(_)) => error(MultipleTokenKinds, whole.start(), whole.end()),
        }
    }
}

impl<'input> Iterator for Tokenizer<'_, 'input> {
    type Item = Result<Spanned<Token<'input>>, EquationError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.matches.next().map(Self::token)
    }
}
