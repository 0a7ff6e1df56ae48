#![forbid(unsafe_code)]

//! Rule registry: the ordered table mapping each rule flag to its checker
//!
//! Table order is checker-declaration order. The engine runs enabled
//! checkers in this order, which fixes the order violations are reported in.

use crate::config::RulesConfig;
use crate::rules::documentation;
use crate::rules::ordering;
use crate::rules::rule::Checker;
use crate::types::RuleName;

/// One row of the dispatch table
#[derive(Clone, Copy)]
pub struct RuleEntry {
    pub name: RuleName,
    /// Policy the checker enforces, logged when it runs
    pub description: &'static str,
    pub check: Checker,
}

/// Every available checker, in checker-declaration order
pub const RULES: &[RuleEntry] = &[
    RuleEntry {
        name: RuleName::ValidateQueryType,
        description: "The Query root type has a description",
        check: documentation::check_query_type,
    },
    RuleEntry {
        name: RuleName::ValidateMutationType,
        description: "The Mutation root type has a description",
        check: documentation::check_mutation_type,
    },
    RuleEntry {
        name: RuleName::ValidateSubscriptionType,
        description: "The Subscription root type has a description",
        check: documentation::check_subscription_type,
    },
    RuleEntry {
        name: RuleName::ValidateQueryFields,
        description: "Every Query field has a description",
        check: documentation::check_query_fields,
    },
    RuleEntry {
        name: RuleName::ValidateMutationFields,
        description: "Every Mutation field has a description",
        check: documentation::check_mutation_fields,
    },
    RuleEntry {
        name: RuleName::ValidateSubscriptionFields,
        description: "Every Subscription field has a description",
        check: documentation::check_subscription_fields,
    },
    RuleEntry {
        name: RuleName::ValidateTypeType,
        description: "Every non-root, user-defined type has a description",
        check: documentation::check_types,
    },
    RuleEntry {
        name: RuleName::ValidateBasicTypeFields,
        description: "Every field of a non-root, user-defined type has a description",
        check: documentation::check_type_fields,
    },
    RuleEntry {
        name: RuleName::AlphabeticalOrderFields,
        description: "Fields of non-root, user-defined types are declared in alphabetical order",
        check: ordering::check_field_order,
    },
];

/// The checkers selected by a rule configuration
pub struct RuleRegistry {
    rules: Vec<&'static RuleEntry>,
}

impl RuleRegistry {
    /// Selects the table rows whose flag is enabled, keeping table order
    pub fn build_from_config(config: &RulesConfig) -> Self {
        Self {
            rules: RULES
                .iter()
                .filter(|entry| config.is_enabled(entry.name))
                .collect(),
        }
    }

    /// Iterate over selected rules in table order
    pub fn iter_rules(&self) -> impl Iterator<Item = &'static RuleEntry> + '_ {
        self.rules.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
