// Copyright 2026 The Eqclass Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

// End-to-end scenarios over the nine-equation real-business-cycle system
// from Chapter 3 of Tommaso Mancini Griffoli's Dynare User Guide.

use std::collections::BTreeSet;

use proptest::prelude::*;

use eqclass::{Equation, Model, Roles};

const RBC: [&str; 9] = [
    "(1/c) = beta*(1/c(+1))*(1+r(+1)-delta);",
    "psi*c/(1-l) = w;",
    "c+i = y;",
    "y = (k(-1)^alpha)*(exp(z)*l)^(1-alpha);",
    "w = y*((epsilon-1)/epsilon)*(1-alpha)/l;",
    "r = y*((epsilon-1)/epsilon)*alpha/k(-1);",
    "i = k-(1-delta)*k(-1);",
    "y_l = y/l;",
    "z = rho*z(-1)+e;",
];

const RBC_PARAMETERIZED: [&str; 9] = [
    "(1/c) = {beta}*(1/c(+1))*(1+r(+1)-{delta});",
    "{psi}*c/(1-l) = w;",
    "c+i = y;",
    "y = (k(-1)^{alpha})*(exp(z)*l)^(1-{alpha});",
    "w = y*(({epsilon}-1)/{epsilon})*(1-{alpha})/l;",
    "r = y*(({epsilon}-1)/{epsilon})*{alpha}/k(-1);",
    "i = k-(1-{delta})*k(-1);",
    "y_l = y/l;",
    "z = {rho}*z(-1)+e;",
];

#[test]
fn test_rbc_model() {
    let model = Model::new(RBC).unwrap();

    assert_eq!(
        &["c", "i", "l", "psi", "r", "w", "y", "y_l", "z"],
        model.endogenous()
    );
    assert_eq!(
        &["alpha", "beta", "delta", "e", "epsilon", "k", "rho"],
        model.exogenous()
    );
    assert!(model.parameters().is_empty());
    assert_eq!(&["exp"], model.functions());
}

#[test]
fn test_rbc_model_with_parameters() {
    let model = Model::new(RBC_PARAMETERIZED).unwrap();

    assert_eq!(
        &["c", "i", "l", "r", "w", "y", "y_l", "z"],
        model.endogenous()
    );
    assert_eq!(&["e", "k"], model.exogenous());
    assert_eq!(
        &["alpha", "beta", "delta", "epsilon", "psi", "rho"],
        model.parameters()
    );
    assert_eq!(&["exp"], model.functions());
}

#[test]
fn test_model_idempotent() {
    assert_eq!(Model::new(RBC), Model::new(RBC));
}

#[test]
fn test_rbc_roles_partition_all_symbols() {
    let model = Model::new(RBC).unwrap();
    assert_disjoint(model.roles());

    let all: BTreeSet<&str> = model
        .endogenous()
        .iter()
        .chain(model.exogenous())
        .chain(model.parameters())
        .chain(model.functions())
        .map(String::as_str)
        .collect();
    let expected: BTreeSet<&str> = [
        "alpha", "beta", "c", "delta", "e", "epsilon", "exp", "i", "k", "l", "psi", "r", "rho",
        "w", "y", "y_l", "z",
    ]
    .into();
    assert_eq!(expected, all);
}

#[test]
fn test_roles_serde_roundtrip() {
    let equation = Equation::new(RBC_PARAMETERIZED[0]).unwrap();
    let serialized = serde_json::to_string(equation.roles()).unwrap();
    let deserialized: Roles = serde_json::from_str(&serialized).unwrap();
    assert_eq!(equation.roles(), &deserialized);
}

fn assert_disjoint(roles: &Roles) {
    let sets: [BTreeSet<&String>; 4] = [
        roles.endogenous.iter().collect(),
        roles.exogenous.iter().collect(),
        roles.parameters.iter().collect(),
        roles.functions.iter().collect(),
    ];
    for (i, a) in sets.iter().enumerate() {
        for b in sets.iter().skip(i + 1) {
            assert_eq!(0, a.intersection(b).count(), "role sets overlap: {roles:?}");
        }
    }
}

fn assert_sorted_and_unique(symbols: &[String]) {
    for pair in symbols.windows(2) {
        assert!(pair[0] < pair[1], "not strictly sorted: {symbols:?}");
    }
}

fn ident() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,6}"
}

proptest! {
    #[test]
    fn prop_equation_roles_are_disjoint_sorted_and_complete(
        lhs in prop::collection::vec(ident(), 1..4),
        rhs in prop::collection::vec(ident(), 1..4),
        params in prop::collection::vec(ident(), 0..3),
    ) {
        let script = format!(
            "{} = {} + {};",
            lhs.join("+"),
            rhs.join("*"),
            params
                .iter()
                .map(|p| format!("{{{p}}}"))
                .collect::<Vec<_>>()
                .join("*"),
        );

        let equation = Equation::new(&script).unwrap();
        let roles = equation.roles();

        assert_disjoint(roles);
        assert_sorted_and_unique(&roles.endogenous);
        assert_sorted_and_unique(&roles.exogenous);
        assert_sorted_and_unique(&roles.parameters);
        assert_sorted_and_unique(&roles.functions);

        // every distinct input symbol lands in exactly one role
        let expected: BTreeSet<&String> = lhs.iter().chain(&rhs).chain(&params).collect();
        let classified: BTreeSet<&String> = roles
            .endogenous
            .iter()
            .chain(&roles.exogenous)
            .chain(&roles.parameters)
            .chain(&roles.functions)
            .collect();
        prop_assert_eq!(expected, classified);
    }

    #[test]
    fn prop_lhs_symbols_never_exogenous(
        lhs in prop::collection::vec(ident(), 1..4),
        rhs in prop::collection::vec(ident(), 1..4),
    ) {
        let script = format!("{} = {};", lhs.join("+"), rhs.join("+"));
        let equation = Equation::new(&script).unwrap();

        for symbol in &lhs {
            prop_assert!(!equation.exogenous().contains(symbol));
        }
    }

    #[test]
    fn prop_function_list_always_wins(
        rhs in prop::collection::vec(ident(), 1..4),
    ) {
        let script = format!("y = exp({});", rhs.join("+"));
        let equation = Equation::new(&script).unwrap();

        prop_assert_eq!(&["exp"], equation.functions());
        prop_assert!(!equation.endogenous().contains(&"exp".to_string()));
        prop_assert!(!equation.exogenous().contains(&"exp".to_string()));
        prop_assert!(!equation.parameters().contains(&"exp".to_string()));
    }
}
