use balgen_core::Colors;

use super::decl::{
    BehaviorDecl, Declaration, EnumDecl, Import, InterfaceDecl, Method, MethodKind, Module, Param,
    RecordDecl, RecordField, RootDecl, UnionAlternatives, UnionDecl,
};
use super::descriptor::{Primitive, TypeDescriptor};
use super::render::{BallerinaFormatter, FormatError, Formatter, identifier};

fn module(declarations: Vec<Declaration>) -> Module {
    Module {
        import: Import::graphql(),
        declarations,
    }
}

fn format(declarations: Vec<Declaration>) -> String {
    BallerinaFormatter::default()
        .format(&module(declarations))
        .unwrap()
}

fn prim(p: Primitive) -> TypeDescriptor {
    TypeDescriptor::Primitive(p)
}

fn named(name: &str) -> TypeDescriptor {
    TypeDescriptor::Named(name.to_string())
}

fn get(name: &str, returns: TypeDescriptor) -> Method {
    Method {
        kind: MethodKind::Get,
        name: name.to_string(),
        params: vec![],
        returns,
    }
}

fn members(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn empty_module_is_just_the_import() {
    assert_eq!(format(vec![]), "import ballerina/graphql;\n");
}

#[test]
fn root_contract() {
    let root = RootDecl {
        name: "Shop".to_string(),
        base: "graphql:Service".to_string(),
        methods: vec![
            get("products", named("Product").optional().array()),
            Method {
                kind: MethodKind::Remote,
                name: "order".to_string(),
                params: vec![
                    Param {
                        name: "id".to_string(),
                        ty: prim(Primitive::String),
                    },
                    Param {
                        name: "count".to_string(),
                        ty: prim(Primitive::Int).optional(),
                    },
                ],
                returns: prim(Primitive::Boolean),
            },
            Method {
                kind: MethodKind::Subscribe,
                name: "restocks".to_string(),
                params: vec![],
                returns: named("Product").optional().stream(),
            },
        ],
    };

    insta::assert_snapshot!(format(vec![Declaration::Root(root)]), @r"
    import ballerina/graphql;

    type Shop service object {
        *graphql:Service;
        resource function get products() returns Product?[];
        remote function order(string id, int? count) returns boolean;
        resource function subscribe restocks() returns stream<Product?>;
    };
    ");
}

#[test]
fn closed_and_open_records() {
    let input = RecordDecl {
        name: "NewUser".to_string(),
        closed: true,
        fields: vec![
            RecordField {
                name: "name".to_string(),
                ty: prim(Primitive::String),
            },
            RecordField {
                name: "scores".to_string(),
                ty: prim(Primitive::Float).array().optional(),
            },
        ],
    };
    let point = RecordDecl {
        name: "Point".to_string(),
        closed: false,
        fields: vec![RecordField {
            name: "x".to_string(),
            ty: prim(Primitive::Int).optional(),
        }],
    };

    let out = format(vec![Declaration::Record(input), Declaration::Record(point)]);
    insta::assert_snapshot!(out, @r"
    import ballerina/graphql;

    type NewUser record {|
        string name;
        float[]? scores;
    |};

    type Point record {
        int? x;
    };
    ");
}

#[test]
fn interface_enum_and_union() {
    let node = InterfaceDecl {
        name: "Entity".to_string(),
        includes: members(&["Node"]),
        methods: vec![get("createdAt", prim(Primitive::String).optional())],
    };
    let color = EnumDecl {
        name: "Color".to_string(),
        members: members(&["RED", "GREEN"]),
    };
    let any = UnionDecl {
        name: "Any".to_string(),
        alternatives: UnionAlternatives::from_members(&members(&["A", "B", "C"])).unwrap(),
    };

    insta::assert_snapshot!(format(vec![
        Declaration::Interface(node),
        Declaration::Enum(color),
        Declaration::Union(any),
    ]), @r"
    import ballerina/graphql;

    type Entity distinct service object {
        *Node;
        resource function get createdAt() returns string?;
    };

    enum Color {
        RED,
        GREEN
    }

    type Any A|B|C;
    ");
}

#[test]
fn service_classes() {
    let user = BehaviorDecl {
        name: "User".to_string(),
        distinct: true,
        includes: members(&["Node"]),
        methods: vec![get("name", prim(Primitive::String).optional())],
    };
    let empty = BehaviorDecl {
        name: "Empty".to_string(),
        distinct: false,
        includes: vec![],
        methods: vec![],
    };

    let out = format(vec![Declaration::Behavior(user), Declaration::Behavior(empty)]);
    insta::assert_snapshot!(out, @r"
    import ballerina/graphql;

    distinct service class User {
        *Node;
        resource function get name() returns string? {
        }
    }

    service class Empty {
    }
    ");
}

#[test]
fn reserved_words_are_quoted() {
    assert_eq!(identifier("type").unwrap(), "'type");
    assert_eq!(identifier("string").unwrap(), "'string");
    assert_eq!(identifier("typeName").unwrap(), "typeName");

    let record = RecordDecl {
        name: "Item".to_string(),
        closed: false,
        fields: vec![RecordField {
            name: "type".to_string(),
            ty: prim(Primitive::String),
        }],
    };
    insta::assert_snapshot!(format(vec![Declaration::Record(record)]), @r"
    import ballerina/graphql;

    type Item record {
        string 'type;
    };
    ");
}

#[test]
fn invalid_identifier_fails_formatting() {
    let root = RootDecl {
        name: "my-service".to_string(),
        base: "graphql:Service".to_string(),
        methods: vec![],
    };

    let err = BallerinaFormatter::default()
        .format(&module(vec![Declaration::Root(root)]))
        .unwrap_err();
    assert_eq!(err, FormatError::InvalidIdentifier("my-service".to_string()));
    assert_eq!(err.to_string(), "`my-service` is not a valid identifier");
}

#[test]
fn colors_wrap_names_and_keywords() {
    let color = EnumDecl {
        name: "Color".to_string(),
        members: members(&["RED"]),
    };
    let out = BallerinaFormatter::new(Colors::ON)
        .format(&module(vec![Declaration::Enum(color)]))
        .unwrap();

    assert!(out.contains("\x1b[34mColor\x1b[0m"));
    assert!(out.contains("\x1b[2menum\x1b[0m"));
    assert!(out.ends_with("}\n"));
}
