use indoc::indoc;

use super::Config;
use super::classify::{Representation, TypeClassifier, UnionMembership, is_record_eligible};
use crate::test_utils::schema;

const SHAPES: &str = indoc! {r#"
    interface Node { id: ID! }
    type Plain { a: String b: Int }
    type WithArgs { items(first: Int): [String] }
    type Implementer implements Node { id: ID! }
    type Member { x: Int }
    type Other { y: Int }
    union Result = Member | Other
    type Query { plain: Plain }
    type Mutation { touch: Plain }
"#};

#[test]
fn membership_collects_every_union_member() {
    let schema = schema(SHAPES);
    let membership = UnionMembership::collect(&schema);

    assert!(membership.contains("Member"));
    assert!(membership.contains("Other"));
    assert!(!membership.contains("Plain"));
    assert!(!membership.contains("Result"));
}

#[test]
fn membership_ignores_introspection_unions() {
    let schema = schema(indoc! {r#"
        type A { x: Int }
        union __Meta = A
        type Query { a: A }
    "#});

    assert!(!UnionMembership::collect(&schema).contains("A"));
}

#[test]
fn eligibility_rules() {
    let schema = schema(SHAPES);
    let membership = UnionMembership::collect(&schema);
    let eligible = |name: &str| is_record_eligible(name, schema.object(name).unwrap(), &membership);

    assert!(eligible("Plain"));
    assert!(!eligible("WithArgs"));
    assert!(!eligible("Implementer"));
    assert!(!eligible("Member"));
    assert!(!eligible("Other"));
}

#[test]
fn everything_is_behavior_by_default() {
    let schema = schema(SHAPES);
    let membership = UnionMembership::collect(&schema);
    let classification = TypeClassifier::new(&schema, &Config::new()).classify(&membership);

    assert!(
        classification
            .iter()
            .all(|(_, r)| r == Representation::Behavior)
    );
}

#[test]
fn forced_records_apply_to_eligible_objects_only() {
    let schema = schema(SHAPES);
    let membership = UnionMembership::collect(&schema);
    let config = Config::new().records_forced(true);
    let classification = TypeClassifier::new(&schema, &config).classify(&membership);

    let decisions: Vec<_> = classification.iter().collect();
    assert_eq!(
        decisions,
        [
            ("Plain", Representation::Record),
            ("WithArgs", Representation::Behavior),
            ("Implementer", Representation::Behavior),
            ("Member", Representation::Behavior),
            ("Other", Representation::Behavior),
        ]
    );
}

#[test]
fn roots_and_non_objects_are_not_classified() {
    let schema = schema(SHAPES);
    let membership = UnionMembership::collect(&schema);
    let classification = TypeClassifier::new(&schema, &Config::new()).classify(&membership);

    assert_eq!(classification.len(), 5);
    assert_eq!(classification.get("Query"), None);
    assert_eq!(classification.get("Mutation"), None);
    assert_eq!(classification.get("Node"), None);
    assert_eq!(classification.get("Result"), None);
}

#[test]
fn custom_root_names_are_excluded() {
    let schema = schema(indoc! {r#"
        schema { query: Root }
        type Root { a: Int }
        type Query { b: Int }
    "#});
    let membership = UnionMembership::collect(&schema);
    let classification = TypeClassifier::new(&schema, &Config::new()).classify(&membership);

    assert_eq!(classification.get("Root"), None);
    assert_eq!(
        classification.get("Query"),
        Some(Representation::Behavior)
    );
}

#[test]
fn union_member_stays_behavior_even_when_forced() {
    let schema = schema(indoc! {r#"
        type Cat { name: String }
        type Dog { name: String }
        union Pet = Cat | Dog
        type Query { pet: Pet }
    "#});
    let membership = UnionMembership::collect(&schema);
    let config = Config::new().records_forced(true);
    let classifier = TypeClassifier::new(&schema, &config);

    let cat = schema.object("Cat").unwrap();
    assert_eq!(
        classifier.decide("Cat", cat, &membership),
        Representation::Behavior
    );
}

#[test]
fn empty_schema_has_no_decisions() {
    let schema = schema("type Query { a: Int }");
    let membership = UnionMembership::collect(&schema);
    let classification = TypeClassifier::new(&schema, &Config::new()).classify(&membership);

    assert!(classification.is_empty());
}
