// Copyright 2026 The Eqclass Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::{error, fmt, result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    NoError, // will never be produced
    MissingEquals,
    ExtraEquals,
    BadGrammar,
    NoTokenKind,
    MultipleTokenKinds,
    Generic,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ErrorCode::*;
        let name = match self {
            NoError => "no_error",
            MissingEquals => "missing_equals",
            ExtraEquals => "extra_equals",
            BadGrammar => "bad_grammar",
            NoTokenKind => "no_token_kind",
            MultipleTokenKinds => "multiple_token_kinds",
            Generic => "generic",
        };

        write!(f, "{name}")
    }
}

impl ErrorCode {
    /// True for the codes that mean an equation script had no unambiguous
    /// `=` boundary, as opposed to a broken grammar configuration.
    pub fn is_malformed_equation(&self) -> bool {
        matches!(self, ErrorCode::MissingEquals | ErrorCode::ExtraEquals)
    }
}

/// An error classifying a single equation script, with a byte span into
/// the offending text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EquationError {
    pub start: usize,
    pub end: usize,
    pub code: ErrorCode,
    pub details: Option<String>,
}

impl EquationError {
    /// Shift the span by `base` bytes; used when an error produced against
    /// one side of an equation is reported against the whole script.
    pub(crate) fn offset(mut self, base: usize) -> Self {
        self.start += base;
        self.end += base;
        self
    }
}

impl fmt::Display for EquationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.details {
            Some(ref details) => write!(f, "{}:{}:{} -- {}", self.start, self.end, self.code, details),
            None => write!(f, "{}:{}:{}", self.start, self.end, self.code),
        }
    }
}

impl error::Error for EquationError {}

/// An error constructing a `Model`: the first per-equation failure, tagged
/// with the position of the offending script in the input collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelError {
    pub index: usize,
    pub source: EquationError,
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "equation {}: {}", self.index, self.source)
    }
}

impl error::Error for ModelError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.source)
    }
}

pub type EquationResult<T> = result::Result<T, EquationError>;
pub type ModelResult<T> = result::Result<T, ModelError>;

#[macro_export]
macro_rules! eqn_err(
    ($code:tt, $start:expr, $end:expr) => {{
        use $crate::common::{EquationError, ErrorCode};
        Err(EquationError {
            start: $start,
            end: $end,
            code: ErrorCode::$code,
            details: None,
        })
    }};
    ($code:tt, $start:expr, $end:expr, $details:expr) => {{
        use $crate::common::{EquationError, ErrorCode};
        Err(EquationError {
            start: $start,
            end: $end,
            code: ErrorCode::$code,
            details: Some($details),
        })
    }};
);

#[test]
fn test_error_display() {
    let err = EquationError {
        start: 2,
        end: 3,
        code: ErrorCode::ExtraEquals,
        details: None,
    };
    assert_eq!("2:3:extra_equals", format!("{err}"));

    let err = EquationError {
        details: Some("x = y = z;".to_string()),
        ..err
    };
    assert_eq!("2:3:extra_equals -- x = y = z;", format!("{err}"));

    let err = ModelError {
        index: 4,
        source: err,
    };
    assert_eq!("equation 4: 2:3:extra_equals -- x = y = z;", format!("{err}"));
}

#[test]
fn test_malformed_equation_codes() {
    assert!(ErrorCode::MissingEquals.is_malformed_equation());
    assert!(ErrorCode::ExtraEquals.is_malformed_equation());
    assert!(!ErrorCode::NoTokenKind.is_malformed_equation());
    assert!(!ErrorCode::BadGrammar.is_malformed_equation());
}
