// Copyright 2026 The Eqclass Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::collections::BTreeSet;

use lazy_static::lazy_static;

use crate::common::EquationResult;
use crate::config::Config;
use crate::eqn_err;
use crate::roles::Roles;
use crate::token::{Grammar, Token};

/// The capability `Model` composes over: anything that can turn one
/// equation script into role sets. Implementations must be pure; a given
/// script always classifies to the same roles.
pub trait EquationClassifier {
    fn classify(&self, script: &str) -> EquationResult<Roles>;
}

lazy_static! {
    // the default config is a known-good grammar
    static ref DEFAULT_GRAMMAR: Grammar = Grammar::new(&Config::default()).unwrap();
}

/// The standard side-of-equation classifier: LHS bare symbols are
/// endogenous candidates, RHS bare symbols are exogenous candidates,
/// delimiter-wrapped symbols on either side are parameter candidates, and
/// configured function names override everything.
#[derive(Clone, Debug)]
pub struct Classifier {
    config: Config,
    grammar: Grammar,
}

impl Classifier {
    pub fn new(config: Config) -> EquationResult<Classifier> {
        let grammar = Grammar::new(&config)?;
        Ok(Classifier { config, grammar })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Classifier {
            config: Config::default(),
            grammar: DEFAULT_GRAMMAR.clone(),
        }
    }
}

/// Split a script at its single `=`. Zero or multiple separators leave the
/// equation boundary ambiguous, which fails classification outright.
fn split_sides(script: &str) -> EquationResult<(&str, &str, usize)> {
    let mut separators = script.match_indices('=');
    match (separators.next(), separators.next()) {
        (Some((i, _)), None) => Ok((&script[..i], &script[i + 1..], i + 1)),
        (None, _) => eqn_err!(MissingEquals, 0, script.len(), script.to_string()),
        (Some(_), Some((j, _))) => eqn_err!(ExtraEquals, j, j + 1, script.to_string()),
    }
}

impl EquationClassifier for Classifier {
    fn classify(&self, script: &str) -> EquationResult<Roles> {
        let (lhs, rhs, rhs_base) = split_sides(script)?;

        let mut endogenous: BTreeSet<String> = BTreeSet::new();
        let mut exogenous: BTreeSet<String> = BTreeSet::new();
        let mut parameters: BTreeSet<String> = BTreeSet::new();

        for token in self.grammar.tokenize(lhs) {
            match token? {
                (_, Token::Variable(name), _) => endogenous.insert(name.to_string()),
                (_, Token::Parameter(name), _) => parameters.insert(name.to_string()),
            };
        }
        for token in self.grammar.tokenize(rhs) {
            // report tokenizer errors against the whole script, not the side
            match token.map_err(|err| err.offset(rhs_base))? {
                (_, Token::Variable(name), _) => exogenous.insert(name.to_string()),
                (_, Token::Parameter(name), _) => parameters.insert(name.to_string()),
            };
        }

        let functions: BTreeSet<String> = endogenous
            .iter()
            .chain(exogenous.iter())
            .chain(parameters.iter())
            .filter(|symbol| self.config.functions.contains(*symbol))
            .cloned()
            .collect();

        Ok(Roles::resolve(endogenous, exogenous, parameters, functions))
    }
}

/// One classified equation script. Classification happens exactly once at
/// construction; there is no mutation API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Equation {
    script: String,
    roles: Roles,
}

impl Equation {
    pub fn new(script: &str) -> EquationResult<Equation> {
        Self::with_classifier(script, &Classifier::default())
    }

    pub fn with_classifier(
        script: &str,
        classifier: &impl EquationClassifier,
    ) -> EquationResult<Equation> {
        let roles = classifier.classify(script)?;
        Ok(Equation {
            script: script.to_string(),
            roles,
        })
    }

    pub fn script(&self) -> &str {
        &self.script
    }

    pub fn roles(&self) -> &Roles {
        &self.roles
    }

    pub fn endogenous(&self) -> &[String] {
        &self.roles.endogenous
    }

    pub fn exogenous(&self) -> &[String] {
        &self.roles.exogenous
    }

    pub fn parameters(&self) -> &[String] {
        &self.roles.parameters
    }

    pub fn functions(&self) -> &[String] {
        &self.roles.functions
    }
}
