#![forbid(unsafe_code)]

//! Documentation checkers
//!
//! Root types and their fields are checked by the per-root checkers. Every
//! other user-defined type goes through the general type and field checkers.
//! Introspection types and the standard scalars are never checked.

use crate::rules::rule::ViolationSink;
use crate::schema::{RootOperation, Schema, TypeDefinition};

/// User-defined, non-root types in declaration order
pub(crate) fn general_types(schema: &Schema) -> impl Iterator<Item = &TypeDefinition> {
    schema
        .types()
        .filter(move |ty| !ty.is_builtin() && !schema.is_root_type(&ty.name))
}

fn check_root_type(schema: &Schema, operation: RootOperation, sink: &mut ViolationSink<'_>) {
    if let Some(ty) = schema.root_type(operation)
        && !ty.is_documented()
    {
        sink.type_violation(
            ty,
            format!(
                "The {} type `{}` is missing a description",
                operation, ty.name
            ),
        );
    }
}

fn check_root_fields(schema: &Schema, operation: RootOperation, sink: &mut ViolationSink<'_>) {
    let Some(ty) = schema.root_type(operation) else {
        return;
    };

    for field in ty.fields.iter().filter(|f| !f.is_documented()) {
        sink.field_violation(
            ty,
            field,
            format!(
                "{} field `{}.{}` is missing a description",
                operation, ty.name, field.name
            ),
        );
    }
}

pub fn check_query_type(schema: &Schema, sink: &mut ViolationSink<'_>) {
    check_root_type(schema, RootOperation::Query, sink);
}

pub fn check_mutation_type(schema: &Schema, sink: &mut ViolationSink<'_>) {
    check_root_type(schema, RootOperation::Mutation, sink);
}

pub fn check_subscription_type(schema: &Schema, sink: &mut ViolationSink<'_>) {
    check_root_type(schema, RootOperation::Subscription, sink);
}

pub fn check_query_fields(schema: &Schema, sink: &mut ViolationSink<'_>) {
    check_root_fields(schema, RootOperation::Query, sink);
}

pub fn check_mutation_fields(schema: &Schema, sink: &mut ViolationSink<'_>) {
    check_root_fields(schema, RootOperation::Mutation, sink);
}

pub fn check_subscription_fields(schema: &Schema, sink: &mut ViolationSink<'_>) {
    check_root_fields(schema, RootOperation::Subscription, sink);
}

/// Every general type must carry a description
pub fn check_types(schema: &Schema, sink: &mut ViolationSink<'_>) {
    for ty in general_types(schema).filter(|ty| !ty.is_documented()) {
        sink.type_violation(
            ty,
            format!("Type `{}` is missing a description", ty.name),
        );
    }
}

/// Every field of a general object, interface or input type must carry a description
pub fn check_type_fields(schema: &Schema, sink: &mut ViolationSink<'_>) {
    for ty in general_types(schema).filter(|ty| ty.kind.has_fields()) {
        for field in ty.fields.iter().filter(|f| !f.is_documented()) {
            sink.field_violation(
                ty,
                field,
                format!("Field `{}.{}` is missing a description", ty.name, field.name),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::rule::{Checker, Violation};
    use crate::schema::parse_schema;
    use crate::types::RuleName;

    fn run(checker: Checker, sdl: &str) -> Vec<Violation> {
        let schema = parse_schema(sdl).unwrap();
        let mut violations = Vec::new();
        let mut sink = ViolationSink::new(RuleName::ValidateTypeType, &mut violations);
        checker(&schema, &mut sink);
        violations
    }

    fn messages(violations: &[Violation]) -> Vec<&str> {
        violations.iter().map(|v| v.message.as_str()).collect()
    }

    #[test]
    fn test_undocumented_query_type() {
        let violations = run(check_query_type, "type Query { a: Int }");
        assert_eq!(
            messages(&violations),
            vec!["The Query type `Query` is missing a description"]
        );
        assert_eq!(violations[0].type_name, "Query");
    }

    #[test]
    fn test_documented_root_types_pass() {
        let sdl = r#"
"Reads" type Query { a: Int }
"Writes" type Mutation { b: Int }
"Streams" type Subscription { c: Int }
"#;
        assert!(run(check_query_type, sdl).is_empty());
        assert!(run(check_mutation_type, sdl).is_empty());
        assert!(run(check_subscription_type, sdl).is_empty());
    }

    #[test]
    fn test_absent_roots_are_not_violations() {
        let sdl = "type Query { a: Int }";
        assert!(run(check_mutation_type, sdl).is_empty());
        assert!(run(check_subscription_type, sdl).is_empty());
        assert!(run(check_mutation_fields, sdl).is_empty());
        assert!(run(check_subscription_fields, sdl).is_empty());

        let no_roots = "\"A widget\" type Widget { id: ID }";
        assert!(run(check_query_type, no_roots).is_empty());
        assert!(run(check_query_fields, no_roots).is_empty());
    }

    #[test]
    fn test_empty_description_is_undocumented() {
        let violations = run(check_mutation_type, r#""" type Mutation { b: Int }"#);
        assert_eq!(
            messages(&violations),
            vec!["The Mutation type `Mutation` is missing a description"]
        );
    }

    #[test]
    fn test_renamed_root_type() {
        let sdl = "schema { subscription: Events } type Events { tick: Int }";
        assert_eq!(
            messages(&run(check_subscription_type, sdl)),
            vec!["The Subscription type `Events` is missing a description"]
        );
        assert_eq!(
            messages(&run(check_subscription_fields, sdl)),
            vec!["Subscription field `Events.tick` is missing a description"]
        );
    }

    #[test]
    fn test_root_fields_reports_every_undocumented_field() {
        let sdl = r#"
type Query {
  "Documented" a: Int
  b: Int
  c: Int
}
"#;
        let violations = run(check_query_fields, sdl);
        assert_eq!(
            messages(&violations),
            vec![
                "Query field `Query.b` is missing a description",
                "Query field `Query.c` is missing a description",
            ]
        );
        assert_eq!(violations[1].field_name.as_deref(), Some("c"));
    }

    #[test]
    fn test_types_skips_roots_and_builtins() {
        let sdl = r#"
type Query { a: Widget }
type Mutation { b: Int }
type Widget { id: ID }
"Documented" type Gadget { id: ID }
enum Color { RED }
input WidgetInput { id: ID }
interface Node { id: ID }
union Thing = Widget | Gadget
scalar Date
"#;
        let violations = run(check_types, sdl);
        assert_eq!(
            messages(&violations),
            vec![
                "Type `Widget` is missing a description",
                "Type `Color` is missing a description",
                "Type `WidgetInput` is missing a description",
                "Type `Node` is missing a description",
                "Type `Thing` is missing a description",
                "Type `Date` is missing a description",
            ]
        );
    }

    #[test]
    fn test_types_never_flags_builtins() {
        let violations = run(check_types, "\"Documented\" type Widget { id: ID name: String }");
        assert!(violations.is_empty());

        let violations = run(check_types, "scalar ID type __Hidden { a: Int }");
        assert!(violations.is_empty());
    }

    #[test]
    fn test_type_fields_across_kinds() {
        let sdl = r#"
type Query { a: Int }
"Widget" type Widget { "Documented" id: ID, name: String }
"Input" input WidgetInput { size: Int }
"Node" interface Node { id: ID }
"Color" enum Color { RED GREEN }
"#;
        let violations = run(check_type_fields, sdl);
        assert_eq!(
            messages(&violations),
            vec![
                "Field `Widget.name` is missing a description",
                "Field `WidgetInput.size` is missing a description",
                "Field `Node.id` is missing a description",
            ]
        );
    }

    #[test]
    fn test_whitespace_description_is_documented() {
        let sdl = "\" \" type Widget { \" \" id: ID }";
        assert!(run(check_types, sdl).is_empty());
        assert!(run(check_type_fields, sdl).is_empty());

        let sdl = "\"\\t\" type Query { \" \" a: Int }";
        assert!(run(check_query_type, sdl).is_empty());
        assert!(run(check_query_fields, sdl).is_empty());
    }

    #[test]
    fn test_violations_carry_declaration_location() {
        let violations = run(check_type_fields, "type Widget {\n  id: ID\n}\n");
        let location = violations[0].location.as_ref().unwrap();
        assert_eq!((location.line, location.column), (2, 3));
    }

    #[test]
    fn test_type_fields_skips_root_fields() {
        let violations = run(check_type_fields, "type Query { a: Int } type Mutation { b: Int }");
        assert!(violations.is_empty());
    }

    #[test]
    fn test_checkers_are_idempotent() {
        let schema = parse_schema("type Widget { id: ID name: String } enum Color { RED }").unwrap();

        let mut first = Vec::new();
        check_type_fields(
            &schema,
            &mut ViolationSink::new(RuleName::ValidateBasicTypeFields, &mut first),
        );
        let mut second = Vec::new();
        check_type_fields(
            &schema,
            &mut ViolationSink::new(RuleName::ValidateBasicTypeFields, &mut second),
        );

        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }
}
