// Copyright 2026 The Eqclass Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::collections::BTreeSet;

use crate::common::{ModelError, ModelResult};
use crate::equation::{Classifier, EquationClassifier};
use crate::roles::Roles;

/// A classified system of equations. Every script is classified
/// independently, the per-equation role sets are unioned, and the role
/// precedence is applied once more over the unions: a symbol endogenous in
/// any one equation is endogenous to the model, even where another
/// equation sees it only on a right-hand side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Model {
    scripts: Vec<String>,
    roles: Roles,
}

impl Model {
    pub fn new<S: Into<String>>(scripts: impl IntoIterator<Item = S>) -> ModelResult<Model> {
        Self::with_classifier(scripts, &Classifier::default())
    }

    pub fn with_classifier<S: Into<String>>(
        scripts: impl IntoIterator<Item = S>,
        classifier: &impl EquationClassifier,
    ) -> ModelResult<Model> {
        let scripts: Vec<String> = scripts.into_iter().map(Into::into).collect();

        // all-or-nothing: the first bad equation fails the whole model,
        // tagged with its position in the input
        let mut equations = Vec::with_capacity(scripts.len());
        for (index, script) in scripts.iter().enumerate() {
            let roles = classifier
                .classify(script)
                .map_err(|source| ModelError { index, source })?;
            equations.push(roles);
        }

        let mut endogenous: BTreeSet<String> = BTreeSet::new();
        let mut exogenous: BTreeSet<String> = BTreeSet::new();
        let mut parameters: BTreeSet<String> = BTreeSet::new();
        let mut functions: BTreeSet<String> = BTreeSet::new();
        for roles in equations {
            endogenous.extend(roles.endogenous);
            exogenous.extend(roles.exogenous);
            parameters.extend(roles.parameters);
            functions.extend(roles.functions);
        }

        let roles = Roles::resolve(endogenous, exogenous, parameters, functions);

        Ok(Model { scripts, roles })
    }

    pub fn scripts(&self) -> &[String] {
        &self.scripts
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
