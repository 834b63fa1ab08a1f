use std::collections::HashSet;

use fngen_types::{
    CandidateOperation, ClassName, OperationKind, PrimitiveType, TypeShape, TypeVarTable,
    WildcardBound,
};

/// Methods every class inherits from the root type, with erased parameter types.
const ROOT_TYPE_METHODS: &[(&str, &[&str])] = &[
    ("clone", &[]),
    ("equals", &["java.lang.Object"]),
    ("finalize", &[]),
    ("getClass", &[]),
    ("hashCode", &[]),
    ("notify", &[]),
    ("notifyAll", &[]),
    ("toString", &[]),
    ("wait", &[]),
    ("wait", &["long"]),
    ("wait", &["long", "int"]),
];

/// The name a candidate asks for before overload resolution.
///
/// Constructors become `new<SimpleName>`. Methods use their requested name, else the declared
/// one, with `_` appended when the generated factory would clash with a root-type method.
pub fn generated_name(class: &ClassName, table: &TypeVarTable, op: &CandidateOperation) -> String {
    if op.kind == OperationKind::Constructor {
        return format!("new{}", class.simple_name());
    }

    let name = op.generated_name.as_deref().unwrap_or(&op.name);
    if clashes_with_root_method(table, op, name) {
        format!("{name}_")
    } else {
        name.to_string()
    }
}

fn clashes_with_root_method(table: &TypeVarTable, op: &CandidateOperation, name: &str) -> bool {
    let mut candidates = ROOT_TYPE_METHODS
        .iter()
        .filter(|(root_name, _)| *root_name == name);

    if op.kind.is_static() {
        return candidates.any(|(_, params)| params.is_empty());
    }

    if op.name != name {
        return false;
    }
    let erased: Vec<String> = op
        .parameters
        .iter()
        .map(|param| erased_text(table, &param.ty))
        .collect();
    candidates.any(|(_, params)| params.iter().copied().eq(erased.iter().map(String::as_str)))
}

/// Erasure of `ty` as a qualified name (`java.util.List`, `int[]`, bound of a type variable).
pub fn erased_text(table: &TypeVarTable, ty: &TypeShape) -> String {
    let mut seen = HashSet::new();
    let mut current = ty;
    loop {
        match current {
            TypeShape::TypeVariable(id) => {
                let next = table.get(*id).map(|def| &def.upper_bound);
                match next {
                    Some(bound) if seen.insert(*id) => current = bound,
                    _ => return "java.lang.Object".to_string(),
                }
            }
            TypeShape::Declared {
                name,
                args,
                direct_bounds,
            } => {
                if args.is_empty() && direct_bounds.len() > 1 {
                    current = &direct_bounds[0];
                    continue;
                }
                return name.qualified();
            }
            TypeShape::Array(component) => return format!("{}[]", erased_text(table, component)),
            TypeShape::Primitive(prim) => return prim.keyword().to_string(),
            TypeShape::Void => return "void".to_string(),
            TypeShape::Wildcard(WildcardBound::Extends(bound)) => current = bound.as_ref(),
            TypeShape::Wildcard(WildcardBound::Unbounded | WildcardBound::Super(_))
            | TypeShape::UniversalTop => return "java.lang.Object".to_string(),
        }
    }
}

/// Short tag for a parameter's shape, used to build disambiguation suffixes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KindTag {
    Bool,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
    Void,
    Array,
    Obj,
    TypeVar,
    Unknown,
}

impl KindTag {
    pub fn of(ty: &TypeShape) -> Self {
        match ty {
            TypeShape::Primitive(prim) => match prim {
                PrimitiveType::Boolean => KindTag::Bool,
                PrimitiveType::Byte => KindTag::Byte,
                PrimitiveType::Short => KindTag::Short,
                PrimitiveType::Int => KindTag::Int,
                PrimitiveType::Long => KindTag::Long,
                PrimitiveType::Char => KindTag::Char,
                PrimitiveType::Float => KindTag::Float,
                PrimitiveType::Double => KindTag::Double,
            },
            TypeShape::Void => KindTag::Void,
            TypeShape::Array(_) => KindTag::Array,
            TypeShape::Declared { .. } => KindTag::Obj,
            TypeShape::TypeVariable(_) => KindTag::TypeVar,
            TypeShape::Wildcard(_) | TypeShape::UniversalTop => KindTag::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            KindTag::Bool => "Bool",
            KindTag::Byte => "Byte",
            KindTag::Short => "Short",
            KindTag::Int => "Int",
            KindTag::Long => "Long",
            KindTag::Char => "Char",
            KindTag::Float => "Float",
            KindTag::Double => "Double",
            KindTag::Void => "Void",
            KindTag::Array => "Array",
            KindTag::Obj => "Obj",
            KindTag::TypeVar => "TypeVar",
            KindTag::Unknown => "Unknown",
        }
    }
}

/// `<name>$<Tag>_<Tag>..` over the declared parameter kinds of `op`.
pub fn disambiguated_name(name: &str, op: &CandidateOperation) -> String {
    let suffix = op
        .parameters
        .iter()
        .map(|param| KindTag::of(&param.ty).as_str())
        .collect::<Vec<_>>()
        .join("_");
    format!("{name}${suffix}")
}
