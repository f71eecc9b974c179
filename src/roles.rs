// Copyright 2026 The Eqclass Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The four mutually exclusive symbol roles of a classified equation or
/// model. Each sequence is lexicographically sorted and duplicate-free;
/// the ordering is part of the contract, not an implementation detail.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roles {
    pub endogenous: Vec<String>,
    pub exogenous: Vec<String>,
    pub parameters: Vec<String>,
    pub functions: Vec<String>,
}

impl Roles {
    /// Resolve candidate sets into disjoint roles by the fixed precedence:
    /// function beats parameter beats endogenous beats exogenous.
    pub(crate) fn resolve(
        endogenous: BTreeSet<String>,
        exogenous: BTreeSet<String>,
        parameters: BTreeSet<String>,
        functions: BTreeSet<String>,
    ) -> Roles {
        let parameters: BTreeSet<String> =
            parameters.difference(&functions).cloned().collect();
        let endogenous: BTreeSet<String> = endogenous
            .difference(&parameters)
            .filter(|symbol| !functions.contains(*symbol))
            .cloned()
            .collect();
        let exogenous: BTreeSet<String> = exogenous
            .difference(&endogenous)
            .filter(|symbol| !parameters.contains(*symbol) && !functions.contains(*symbol))
            .cloned()
            .collect();

        // BTreeSet iteration gives us the sorted order for free
        Roles {
            endogenous: endogenous.into_iter().collect(),
            exogenous: exogenous.into_iter().collect(),
            parameters: parameters.into_iter().collect(),
            functions: functions.into_iter().collect(),
        }
    }
}
