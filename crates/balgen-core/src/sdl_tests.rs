use indoc::indoc;

use crate::{Schema, SchemaError, TypeBody, TypeKind, TypeRef};

#[test]
fn parse_object_with_arguments() {
    let schema = Schema::parse(indoc! {r#"
        type Query {
            user(id: ID!, tags: [String!]): User
        }

        type User {
            name: String
        }
    "#})
    .unwrap();

    let query = schema.query_type().unwrap();
    assert_eq!(query.fields.len(), 1);

    let user = &query.fields[0];
    assert_eq!(user.name, "user");
    assert_eq!(user.ty, TypeRef::named("User"));
    assert_eq!(user.arguments.len(), 2);
    assert_eq!(user.arguments[0].name, "id");
    assert_eq!(user.arguments[0].ty, TypeRef::non_null(TypeRef::named("ID")));
    assert_eq!(
        user.arguments[1].ty,
        TypeRef::list(TypeRef::non_null(TypeRef::named("String")))
    );
}

#[test]
fn parse_preserves_table_order() {
    let schema = Schema::parse(indoc! {r#"
        enum Color { RED GREEN BLUE }
        input Filter { color: Color }
        type Query { ok: Boolean }
    "#})
    .unwrap();

    let declared: Vec<_> = schema
        .types()
        .filter(|t| t.kind() != TypeKind::Scalar)
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(declared, ["Color", "Filter", "Query"]);

    let Some(TypeBody::Enum(color)) = schema.get("Color").map(|t| &t.body) else {
        panic!("Color should be an enum");
    };
    assert_eq!(color.values, ["RED", "GREEN", "BLUE"]);
}

#[test]
fn parse_interface_chain_and_union() {
    let schema = Schema::parse(indoc! {r#"
        interface Node { id: ID! }
        interface Entity implements Node { id: ID! kind: String }
        type Book implements Entity & Node { id: ID! kind: String title: String }
        type Film { title: String }
        union Media = Book | Film
        type Query { media: [Media] }
    "#})
    .unwrap();

    assert_eq!(schema.interface("Entity").unwrap().interfaces, ["Node"]);
    assert_eq!(schema.object("Book").unwrap().interfaces, ["Entity", "Node"]);

    let Some(TypeBody::Union(media)) = schema.get("Media").map(|t| &t.body) else {
        panic!("Media should be a union");
    };
    assert_eq!(media.members, ["Book", "Film"]);
}

#[test]
fn builtin_scalars_are_added() {
    let schema = Schema::parse("type Query { a: Int }").unwrap();
    for scalar in ["String", "Int", "Float", "Boolean", "ID"] {
        assert_eq!(schema.kind_of(scalar), Some(TypeKind::Scalar), "{scalar}");
    }
}

#[test]
fn custom_scalar_is_kept() {
    let schema = Schema::parse("scalar DateTime\ntype Query { at: DateTime }").unwrap();
    assert_eq!(schema.kind_of("DateTime"), Some(TypeKind::Scalar));
}

#[test]
fn schema_block_overrides_roots() {
    let schema = Schema::parse(indoc! {r#"
        schema { query: RootQuery subscription: Events }
        type RootQuery { a: Int }
        type Events { tick: Int }
        type Mutation { b: Int }
    "#})
    .unwrap();

    assert!(schema.is_root_operation("RootQuery"));
    assert!(schema.is_root_operation("Events"));
    assert!(!schema.is_root_operation("Mutation"));
    assert!(schema.query_type().is_some());
    assert!(schema.mutation_type().is_none());
    assert!(schema.subscription_type().is_some());
}

#[test]
fn directive_definitions_are_skipped() {
    let schema = Schema::parse(indoc! {r#"
        directive @auth(role: String) on FIELD_DEFINITION
        type Query { a: Int @auth(role: "admin") }
    "#})
    .unwrap();
    assert!(schema.query_type().is_some());
}

#[test]
fn syntax_error_is_reported() {
    let err = Schema::parse("type Query {").unwrap_err();
    assert!(matches!(err, SchemaError::Parse(_)));
    assert!(!err.to_string().is_empty());
}
