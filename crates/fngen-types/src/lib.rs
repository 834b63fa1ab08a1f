//! Type-shape model shared by the fngen crates.
//!
//! A [`TypeShape`] is the closed set of generic type expressions an adapter signature can
//! mention. Type variables are identities into a [`TypeVarTable`]; their bounds live in the table
//! so that self-referential declarations (`T extends Comparable<T>`) can be represented without
//! building a cyclic tree.

#![forbid(unsafe_code)]

use std::collections::{HashSet, VecDeque};
use std::fmt;

use serde::{Deserialize, Serialize};

mod diagnostic;
mod operation;

pub use diagnostic::{Diagnostic, Severity};
pub use operation::{CandidateOperation, ClassMetadata, NamingPolicy, OperationKind, Parameter};

/// Package whose members are referenced without qualification in generated source.
pub const JAVA_LANG_PACKAGE: &str = "java.lang";

/// A class name split into its package and (possibly nested, dot separated) simple path.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClassName {
    pub package: String,
    pub simple: String,
}

impl ClassName {
    pub fn new(package: impl Into<String>, simple: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            simple: simple.into(),
        }
    }

    /// Split a dotted name using the Java naming convention: leading lowercase segments form the
    /// package, the rest is the (nested) class path.
    ///
    /// `java.lang.Thread.State` -> package `java.lang`, simple `Thread.State`.
    pub fn from_qualified(qualified: &str) -> Self {
        let segments: Vec<&str> = qualified.split('.').collect();
        let split = segments
            .iter()
            .position(|seg| seg.chars().next().is_some_and(char::is_uppercase))
            .unwrap_or(segments.len().saturating_sub(1));
        Self {
            package: segments[..split].join("."),
            simple: segments[split..].join("."),
        }
    }

    pub fn qualified(&self) -> String {
        if self.package.is_empty() {
            self.simple.clone()
        } else {
            format!("{}.{}", self.package, self.simple)
        }
    }

    /// The innermost simple name (`Inner` for `Outer.Inner`).
    pub fn simple_name(&self) -> &str {
        self.simple.rsplit('.').next().unwrap_or(&self.simple)
    }

    pub fn is_java_lang(&self) -> bool {
        self.package == JAVA_LANG_PACKAGE
    }

    /// The name as written in generated source: `java.lang` members drop their package (nested
    /// ones keep the outer class path), everything else stays fully qualified.
    pub fn source_name(&self) -> String {
        if self.is_java_lang() {
            self.simple.clone()
        } else {
            self.qualified()
        }
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.package.is_empty() {
            f.write_str(&self.simple)
        } else {
            write!(f, "{}.{}", self.package, self.simple)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

impl PrimitiveType {
    pub fn keyword(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Short => "short",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Char => "char",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
        }
    }

    /// The reference type a value of this primitive is boxed into.
    pub fn boxed(self) -> ClassName {
        let simple = match self {
            PrimitiveType::Boolean => "Boolean",
            PrimitiveType::Byte => "Byte",
            PrimitiveType::Short => "Short",
            PrimitiveType::Int => "Integer",
            PrimitiveType::Long => "Long",
            PrimitiveType::Char => "Character",
            PrimitiveType::Float => "Float",
            PrimitiveType::Double => "Double",
        };
        ClassName::new(JAVA_LANG_PACKAGE, simple)
    }
}

/// Identity of a declared type variable (index into a [`TypeVarTable`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeVarId(pub u32);

impl TypeVarId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "bound")]
pub enum WildcardBound {
    Unbounded,
    Extends(Box<TypeShape>),
    Super(Box<TypeShape>),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeShape {
    Primitive(PrimitiveType),
    /// A class or interface type. `direct_bounds` holds the components when the type stands for
    /// an intersection (`Number & Comparable<T>`).
    Declared {
        name: ClassName,
        #[serde(default)]
        args: Vec<TypeShape>,
        #[serde(default)]
        direct_bounds: Vec<TypeShape>,
    },
    Array(Box<TypeShape>),
    Wildcard(WildcardBound),
    TypeVariable(TypeVarId),
    Void,
    /// The root reference type. Carries no information and is never rendered.
    UniversalTop,
}

impl TypeShape {
    pub fn class(name: ClassName, args: Vec<TypeShape>) -> Self {
        TypeShape::Declared {
            name,
            args,
            direct_bounds: Vec::new(),
        }
    }

    /// Shorthand for a non-generic class reference from its qualified name.
    pub fn named(qualified: &str) -> Self {
        TypeShape::class(ClassName::from_qualified(qualified), Vec::new())
    }

    pub fn array(component: TypeShape) -> Self {
        TypeShape::Array(Box::new(component))
    }

    /// An intersection of `bounds`, represented as a declared type whose direct supertypes are
    /// the components.
    pub fn intersection(bounds: Vec<TypeShape>) -> Self {
        let name = bounds
            .iter()
            .find_map(|bound| match bound {
                TypeShape::Declared { name, .. } => Some(name.clone()),
                _ => None,
            })
            .unwrap_or_else(|| ClassName::new(JAVA_LANG_PACKAGE, "Object"));
        TypeShape::Declared {
            name,
            args: Vec::new(),
            direct_bounds: bounds,
        }
    }

    pub fn extends(bound: TypeShape) -> Self {
        TypeShape::Wildcard(WildcardBound::Extends(Box::new(bound)))
    }

    pub fn super_of(bound: TypeShape) -> Self {
        TypeShape::Wildcard(WildcardBound::Super(Box::new(bound)))
    }

    pub fn is_intersection(&self) -> bool {
        matches!(self, TypeShape::Declared { args, direct_bounds, .. } if args.is_empty() && direct_bounds.len() > 1)
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeShape::Primitive(_))
    }

    /// Replace a top-level primitive by its boxed reference type.
    pub fn boxed(&self) -> TypeShape {
        match self {
            TypeShape::Primitive(prim) => TypeShape::class(prim.boxed(), Vec::new()),
            other => other.clone(),
        }
    }

    /// Java-style canonical text: fully qualified names, type variables by declared name.
    ///
    /// Unlike the signature renderer this never fails and never emits bound clauses; it is used
    /// for stable sort keys and diagnostics.
    pub fn canonical_text(&self, table: &TypeVarTable) -> String {
        let mut out = String::new();
        self.write_canonical(table, &mut out);
        out
    }

    fn write_canonical(&self, table: &TypeVarTable, out: &mut String) {
        match self {
            TypeShape::Primitive(prim) => out.push_str(prim.keyword()),
            TypeShape::Declared {
                name,
                args,
                direct_bounds,
            } => {
                if args.is_empty() && direct_bounds.len() > 1 {
                    for (idx, bound) in direct_bounds.iter().enumerate() {
                        if idx != 0 {
                            out.push('&');
                        }
                        bound.write_canonical(table, out);
                    }
                    return;
                }
                out.push_str(&name.qualified());
                if !args.is_empty() {
                    out.push('<');
                    for (idx, arg) in args.iter().enumerate() {
                        if idx != 0 {
                            out.push(',');
                        }
                        arg.write_canonical(table, out);
                    }
                    out.push('>');
                }
            }
            TypeShape::Array(component) => {
                component.write_canonical(table, out);
                out.push_str("[]");
            }
            TypeShape::Wildcard(bound) => {
                out.push('?');
                match bound {
                    WildcardBound::Unbounded => {}
                    WildcardBound::Extends(ty) => {
                        out.push_str(" extends ");
                        ty.write_canonical(table, out);
                    }
                    WildcardBound::Super(ty) => {
                        out.push_str(" super ");
                        ty.write_canonical(table, out);
                    }
                }
            }
            TypeShape::TypeVariable(id) => match table.get(*id) {
                Some(def) => out.push_str(&def.name),
                None => out.push_str(&format!("#{}", id.0)),
            },
            TypeShape::Void => out.push_str("void"),
            TypeShape::UniversalTop => out.push_str("java.lang.Object"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeParamDef {
    pub name: String,
    #[serde(default = "universal_top")]
    pub upper_bound: TypeShape,
    #[serde(default)]
    pub lower_bound: Option<TypeShape>,
}

fn universal_top() -> TypeShape {
    TypeShape::UniversalTop
}

/// Storage for every type variable a class and its operations declare.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeVarTable {
    params: Vec<TypeParamDef>,
}

impl TypeVarTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a type variable with the given upper bound.
    ///
    /// Self-referential bounds need the id before the bound can be spelled out: allocate with
    /// [`TypeShape::UniversalTop`] first, then call [`TypeVarTable::define_type_param`].
    pub fn add_type_param(&mut self, name: impl Into<String>, upper_bound: TypeShape) -> TypeVarId {
        let id = TypeVarId(self.params.len() as u32);
        self.params.push(TypeParamDef {
            name: name.into(),
            upper_bound,
            lower_bound: None,
        });
        id
    }

    pub fn define_type_param(&mut self, id: TypeVarId, def: TypeParamDef) {
        if let Some(slot) = self.params.get_mut(id.index()) {
            *slot = def;
        }
    }

    pub fn get(&self, id: TypeVarId) -> Option<&TypeParamDef> {
        self.params.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// Every type variable reachable from `roots`, in breadth-first first-seen order.
///
/// Bounds of visited variables are followed (except [`TypeShape::UniversalTop`]), so
/// `<T extends Comparable<U>>` reports both `T` and `U`. Each variable is expanded once, which
/// keeps the walk finite for self-referential bounds.
pub fn collect_type_vars<'a>(
    table: &'a TypeVarTable,
    roots: impl IntoIterator<Item = &'a TypeShape>,
) -> Vec<TypeVarId> {
    let mut out = Vec::new();
    let mut seen: HashSet<TypeVarId> = HashSet::new();
    let mut queue: VecDeque<&TypeShape> = roots.into_iter().collect();

    while let Some(current) = queue.pop_front() {
        match current {
            TypeShape::TypeVariable(id) => {
                if !seen.insert(*id) {
                    continue;
                }
                out.push(*id);
                let Some(def) = table.get(*id) else {
                    continue;
                };
                if let Some(lower) = &def.lower_bound {
                    if *lower != TypeShape::UniversalTop {
                        queue.push_back(lower);
                    }
                }
                if def.upper_bound != TypeShape::UniversalTop {
                    queue.push_back(&def.upper_bound);
                }
            }
            TypeShape::Declared {
                args,
                direct_bounds,
                ..
            } => {
                queue.extend(args.iter());
                queue.extend(direct_bounds.iter());
            }
            TypeShape::Wildcard(WildcardBound::Extends(bound))
            | TypeShape::Wildcard(WildcardBound::Super(bound)) => queue.push_back(bound),
            TypeShape::Array(component) => queue.push_back(component),
            TypeShape::Wildcard(WildcardBound::Unbounded)
            | TypeShape::Primitive(_)
            | TypeShape::Void
            | TypeShape::UniversalTop => {}
        }
    }

    out
}
