// Copyright 2026 The Eqclass Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Classify the symbols of algebraic equation scripts, as written in
//! macroeconomic modelling languages, into four mutually exclusive roles:
//! endogenous variables, exogenous variables, parameters and functions.
//!
//! Bare symbols on an equation's left-hand side are endogenous candidates,
//! bare symbols on its right-hand side are exogenous candidates, symbols
//! wrapped in the configured delimiter pair (`{` / `}` by default) are
//! parameter candidates, and configured function names (`exp` by default)
//! always classify as functions. Conflicts resolve by a fixed precedence:
//! function beats parameter beats endogenous beats exogenous. The same
//! rule is re-applied over the union of role sets when a whole system of
//! equations is classified as a [`Model`].

#![forbid(unsafe_code)]

pub mod common;
mod config;
mod equation;
mod model;
mod roles;
pub mod token;

pub use self::common::{EquationError, EquationResult, ErrorCode, ModelError, ModelResult};
pub use self::config::Config;
pub use self::equation::{Classifier, Equation, EquationClassifier};
pub use self::model::Model;
pub use self::roles::Roles;
