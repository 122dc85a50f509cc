//! # SCIM Filter - Abstract Syntax Tree
//!
//! This module defines the tokens and the Abstract Syntax Tree (AST) for
//! SCIM filter and path expressions as specified by RFC 7644 §3.4.2.2.
//!
//! ## Architecture Overview
//!
//! The AST module is organized into focused submodules:
//!
//! - **[tokens]** - Lexical tokens and reserved words produced by the lexer
//! - **[operators]** - Comparison (`eq`, `co`, ...) and logical (`and`, `or`) operators
//! - **[expressions]** - Attribute paths, attribute expressions and value paths
//! - **[filters]** - The precedence-shaped filter and value filter trees
//! - **[path]** - The three shapes of a `PATH`
//!
//! Comparison values live in [`crate::value`].
//!
//! ## Quick Start
//!
//! ```text
//! userType eq "Employee" and (emails co "example.com" or emails.value co "example.org")
//! ```
//!
//! This filter is represented as one `and` group holding an attribute
//! comparison and a grouped filter, which itself holds two `or` operands.
//!
//! ## Core Concepts
//!
//! ### Precedence
//!
//! `and` binds tighter than `or`, and both are left associative. Instead of
//! a binary tree the AST stores the two levels directly:
//!
//! ```text
//! a eq 1 and b eq 2 or c eq 3   =>   Any[ All[a, b], All[c] ]
//! ```
//!
//! Parentheses introduce a nested [`FilterExpression`], optionally negated
//! with `not`.
//!
//! ### Value filters
//!
//! A value path filters the elements of a multi-valued attribute:
//!
//! ```text
//! emails[type eq "work" and value co "@example.com"]
//! ```
//!
//! The bracketed filter has the same shape as a top-level filter, except that
//! it cannot contain another value path.
//!
//! ### Literals
//!
//! Strings and numbers keep their source text exactly, so rendering a parsed
//! expression reproduces the input when it was written canonically.
pub mod expressions;
pub mod filters;
pub mod operators;
pub mod path;
pub mod tokens;

pub use expressions::{AttributeExpression, AttributePath, ValuePathExpression};
pub use filters::{
    AllExpression, AnyExpression, FilterAllExpression, FilterAnyExpression, FilterExpression,
    FilterValueExpression, ValueFilterAllExpression, ValueFilterAnyExpression,
    ValueFilterExpression, ValueFilterValueExpression,
};
pub use operators::{ComparativeOperator, LogicalOperator};
pub use path::PathExpression;
pub use tokens::{Keyword, Token};
