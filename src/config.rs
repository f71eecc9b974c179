// Copyright 2026 The Eqclass Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub const DEFAULT_IDENTIFIER: &str = "[A-Za-z][A-Za-z0-9_]*";

/// The knobs of the classifier: the delimiter pair marking parameter
/// symbols, the identifier grammar for bare names, and the set of symbols
/// that always classify as functions.
///
/// A `Config` is plain immutable data; it is compiled into a
/// [`Grammar`](crate::token::Grammar) before any tokenization happens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub delimiters: (char, char),
    pub identifier: String,
    pub functions: BTreeSet<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            delimiters: ('{', '}'),
            identifier: DEFAULT_IDENTIFIER.to_string(),
            functions: ["exp".to_string()].into(),
        }
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(('{', '}'), config.delimiters);
    assert_eq!(DEFAULT_IDENTIFIER, config.identifier);
    assert!(config.functions.contains("exp"));
    assert_eq!(1, config.functions.len());
}

#[test]
fn test_config_serde_roundtrip() {
    let config = Config {
        delimiters: ('<', '>'),
        identifier: DEFAULT_IDENTIFIER.to_string(),
        functions: ["exp".to_string(), "log".to_string()].into(),
    };
    let serialized = serde_json::to_string(&config).unwrap();
    let deserialized: Config = serde_json::from_str(&serialized).unwrap();
    assert_eq!(config, deserialized);
}
