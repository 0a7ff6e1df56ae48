#![forbid(unsafe_code)]

//! Core domain types for gql-doc-lint
//!
//! This module defines the closed set of rule flags that a rule configuration
//! can toggle. Each flag enables exactly one checker.

use std::fmt;

/// A rule flag from the `rules` object of the configuration file
///
/// The variant order is the checker-declaration order: violations are always
/// reported grouped in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleName {
    ValidateQueryType,
    ValidateMutationType,
    ValidateSubscriptionType,
    ValidateQueryFields,
    ValidateMutationFields,
    ValidateSubscriptionFields,
    ValidateTypeType,
    ValidateBasicTypeFields,
    AlphabeticalOrderFields,
}

impl RuleName {
    /// Every rule flag, in checker-declaration order
    pub const ALL: [RuleName; 9] = [
        RuleName::ValidateQueryType,
        RuleName::ValidateMutationType,
        RuleName::ValidateSubscriptionType,
        RuleName::ValidateQueryFields,
        RuleName::ValidateMutationFields,
        RuleName::ValidateSubscriptionFields,
        RuleName::ValidateTypeType,
        RuleName::ValidateBasicTypeFields,
        RuleName::AlphabeticalOrderFields,
    ];

    /// Returns the configuration key for this flag
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleName::ValidateQueryType => "validateQueryType",
            RuleName::ValidateMutationType => "validateMutationType",
            RuleName::ValidateSubscriptionType => "validateSubscriptionType",
            RuleName::ValidateQueryFields => "validateQueryFields",
            RuleName::ValidateMutationFields => "validateMutationFields",
            RuleName::ValidateSubscriptionFields => "validateSubscriptionFields",
            RuleName::ValidateTypeType => "validateTypeType",
            RuleName::ValidateBasicTypeFields => "validateBasicTypeFields",
            RuleName::AlphabeticalOrderFields => "alphabeticalOrderFields",
        }
    }

    /// Looks up a flag by its configuration key
    ///
    /// Keys are case-sensitive. Returns None for unrecognized keys.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rule| rule.as_str() == key)
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
