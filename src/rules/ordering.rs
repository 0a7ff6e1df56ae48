#![forbid(unsafe_code)]

//! Alphabetical field order checker
//!
//! Field names are compared by Unicode code point (plain `str` ordering), so
//! results do not depend on locale. Root types are exempt.

use crate::rules::documentation::general_types;
use crate::rules::rule::ViolationSink;
use crate::schema::Schema;

/// Fields of every general type must be declared in strictly ascending order
///
/// Each adjacent pair that is not ascending yields one violation naming the
/// later field.
pub fn check_field_order(schema: &Schema, sink: &mut ViolationSink<'_>) {
    for ty in general_types(schema).filter(|ty| ty.kind.has_fields()) {
        for pair in ty.fields.windows(2) {
            let (previous, current) = (&pair[0], &pair[1]);
            if current.name <= previous.name {
                sink.field_violation(
                    ty,
                    current,
                    format!(
                        "Field `{}.{}` is not in alphabetical order (follows `{}`)",
                        ty.name, current.name, previous.name
                    ),
                );
            }
        }
    }
}
