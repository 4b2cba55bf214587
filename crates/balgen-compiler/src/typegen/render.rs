//! Ballerina source rendering.

use balgen_core::Colors;
use balgen_core::utils::is_identifier;

use super::decl::{
    BehaviorDecl, Declaration, EnumDecl, Import, InterfaceDecl, Method, MethodKind, Module, Param,
    RecordDecl, RootDecl, UnionAlternatives, UnionDecl,
};
use super::descriptor::TypeDescriptor;

const INDENT: &str = "    ";

/// Reserved words that must be written as quoted identifiers (`'type`).
const RESERVED: &[&str] = &[
    "abstract", "any", "anydata", "boolean", "break", "byte", "check", "checkpanic", "class",
    "client", "configurable", "const", "continue", "decimal", "default", "distinct", "do", "else",
    "enum", "error", "fail", "false", "final", "float", "foreach", "fork", "from", "function",
    "future", "handle", "if", "import", "in", "int", "is", "isolated", "join", "json", "let",
    "listener", "lock", "map", "match", "never", "new", "null", "object", "on", "panic", "private",
    "public", "readonly", "record", "remote", "resource", "retry", "return", "returns", "select",
    "service", "start", "stream", "string", "table", "transaction", "trap", "true", "typedesc",
    "type", "typeof", "var", "wait", "where", "while", "worker", "xml", "xmlns",
];

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("`{0}` is not a valid identifier")]
    InvalidIdentifier(String),
}

/// Renders a declaration tree as source text.
pub trait Formatter {
    fn format(&self, module: &Module) -> Result<String, FormatError>;
}

/// Formatter for Ballerina source.
#[derive(Clone, Copy, Debug, Default)]
pub struct BallerinaFormatter {
    colors: Colors,
}

impl BallerinaFormatter {
    pub fn new(colors: Colors) -> Self {
        Self { colors }
    }
}

impl Formatter for BallerinaFormatter {
    fn format(&self, module: &Module) -> Result<String, FormatError> {
        let mut w = Writer {
            c: self.colors,
            out: String::new(),
        };
        w.import(&module.import)?;
        for decl in &module.declarations {
            w.out.push('\n');
            w.declaration(decl)?;
        }
        Ok(w.out)
    }
}

/// Quote reserved words; reject anything that is not an identifier.
pub fn identifier(name: &str) -> Result<String, FormatError> {
    if !is_identifier(name) {
        return Err(FormatError::InvalidIdentifier(name.to_string()));
    }
    if RESERVED.contains(&name) {
        Ok(format!("'{name}"))
    } else {
        Ok(name.to_string())
    }
}

struct Writer {
    c: Colors,
    out: String,
}

impl Writer {
    fn import(&mut self, import: &Import) -> Result<(), FormatError> {
        let org = identifier(&import.org)?;
        let module = identifier(&import.module)?;
        self.out
            .push_str(&format!("{} {org}/{module};\n", self.c.keyword("import")));
        Ok(())
    }

    fn declaration(&mut self, decl: &Declaration) -> Result<(), FormatError> {
        match decl {
            Declaration::Root(d) => self.root(d),
            Declaration::Record(d) => self.record(d),
            Declaration::Interface(d) => self.interface(d),
            Declaration::Enum(d) => self.enumeration(d),
            Declaration::Union(d) => self.union(d),
            Declaration::Behavior(d) => self.behavior(d),
        }
    }

    fn root(&mut self, d: &RootDecl) -> Result<(), FormatError> {
        self.type_header(&d.name, "service object {")?;
        self.line(&format!("*{};", self.c.builtin(&d.base)));
        for method in &d.methods {
            let sig = self.signature(method)?;
            self.line(&format!("{sig};"));
        }
        self.out.push_str("};\n");
        Ok(())
    }

    fn record(&mut self, d: &RecordDecl) -> Result<(), FormatError> {
        let (open, close) = if d.closed { ("{|", "|}") } else { ("{", "}") };
        self.type_header(&d.name, &format!("record {open}"))?;
        for field in &d.fields {
            let ty = self.descriptor(&field.ty)?;
            let name = identifier(&field.name)?;
            self.line(&format!("{ty} {name};"));
        }
        self.out.push_str(&format!("{close};\n"));
        Ok(())
    }

    fn interface(&mut self, d: &InterfaceDecl) -> Result<(), FormatError> {
        self.type_header(&d.name, "distinct service object {")?;
        self.includes(&d.includes)?;
        for method in &d.methods {
            let sig = self.signature(method)?;
            self.line(&format!("{sig};"));
        }
        self.out.push_str("};\n");
        Ok(())
    }

    fn enumeration(&mut self, d: &EnumDecl) -> Result<(), FormatError> {
        let name = identifier(&d.name)?;
        self.out.push_str(&format!(
            "{} {} {{\n",
            self.c.keyword("enum"),
            self.c.name(&name)
        ));
        let members = d
            .members
            .iter()
            .map(|m| identifier(m).map(|m| format!("{INDENT}{m}")))
            .collect::<Result<Vec<_>, _>>()?;
        if !members.is_empty() {
            self.out.push_str(&members.join(",\n"));
            self.out.push('\n');
        }
        self.out.push_str("}\n");
        Ok(())
    }

    fn union(&mut self, d: &UnionDecl) -> Result<(), FormatError> {
        let alternatives = self.alternatives(&d.alternatives)?;
        self.type_header(&d.name, &format!("{alternatives};"))
    }

    fn behavior(&mut self, d: &BehaviorDecl) -> Result<(), FormatError> {
        let name = identifier(&d.name)?;
        if d.distinct {
            self.out.push_str(&format!("{} ", self.c.keyword("distinct")));
        }
        self.out.push_str(&format!(
            "{} {} {{\n",
            self.c.keyword("service class"),
            self.c.name(&name)
        ));
        self.includes(&d.includes)?;
        for method in &d.methods {
            let sig = self.signature(method)?;
            self.line(&format!("{sig} {{"));
            self.line("}");
        }
        self.out.push_str("}\n");
        Ok(())
    }

    /// `type <Name> <rest>` on its own line.
    fn type_header(&mut self, name: &str, rest: &str) -> Result<(), FormatError> {
        let name = identifier(name)?;
        self.out.push_str(&format!(
            "{} {} {rest}\n",
            self.c.keyword("type"),
            self.c.name(&name)
        ));
        Ok(())
    }

    fn includes(&mut self, includes: &[String]) -> Result<(), FormatError> {
        for include in includes {
            let name = identifier(include)?;
            self.line(&format!("*{};", self.c.name(&name)));
        }
        Ok(())
    }

    fn line(&mut self, text: &str) {
        self.out.push_str(INDENT);
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn signature(&self, method: &Method) -> Result<String, FormatError> {
        let qualifiers = match method.kind {
            MethodKind::Get => "resource function get",
            MethodKind::Remote => "remote function",
            MethodKind::Subscribe => "resource function subscribe",
        };
        let name = identifier(&method.name)?;
        let params = method
            .params
            .iter()
            .map(|p| self.param(p))
            .collect::<Result<Vec<_>, _>>()?
            .join(", ");
        let returns = self.descriptor(&method.returns)?;
        Ok(format!(
            "{} {name}({params}) {} {returns}",
            self.c.keyword(qualifiers),
            self.c.keyword("returns")
        ))
    }

    fn param(&self, param: &Param) -> Result<String, FormatError> {
        let ty = self.descriptor(&param.ty)?;
        let name = identifier(&param.name)?;
        Ok(format!("{ty} {name}"))
    }

    fn descriptor(&self, ty: &TypeDescriptor) -> Result<String, FormatError> {
        Ok(match ty {
            TypeDescriptor::Primitive(p) => self.c.builtin(p.keyword()),
            TypeDescriptor::Named(name) => self.c.name(&identifier(name)?),
            TypeDescriptor::Array(inner) => format!("{}[]", self.descriptor(inner)?),
            TypeDescriptor::Optional(inner) => format!("{}?", self.descriptor(inner)?),
            TypeDescriptor::Stream(inner) => {
                format!("{}<{}>", self.c.builtin("stream"), self.descriptor(inner)?)
            }
        })
    }

    fn alternatives(&self, alternatives: &UnionAlternatives) -> Result<String, FormatError> {
        Ok(match alternatives {
            UnionAlternatives::Member(name) => self.c.name(&identifier(name)?),
            UnionAlternatives::Either(left, right) => {
                format!("{}|{}", self.alternatives(left)?, self.alternatives(right)?)
            }
        })
    }
}
