use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{ClassName, TypeShape, TypeVarId, TypeVarTable};

/// How the generated adapter reaches the wrapped operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Called on a receiver; the adapter takes the receiver as its only argument.
    Instance,
    Static,
    Constructor,
}

impl OperationKind {
    /// Static call sites carry no class type context.
    pub fn is_static(self) -> bool {
        matches!(self, OperationKind::Static)
    }
}

/// How colliding generated names inside one class are resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum NamingPolicy {
    /// Later overloads get a `$`-suffix derived from their parameter kinds.
    #[default]
    Rename,
    /// Later overloads are dropped.
    Exclude,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub ty: TypeShape,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: TypeShape) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// One exposed method or constructor, as handed over by metadata discovery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateOperation {
    pub kind: OperationKind,
    /// Declared name. Constructors conventionally use `<init>`.
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default = "void")]
    pub return_type: TypeShape,
    /// Type parameters declared by the operation itself, in declaration order.
    #[serde(default)]
    pub type_params: Vec<TypeVarId>,
    #[serde(default)]
    pub doc: Option<String>,
    /// Requested name for the generated adapter factory, replacing `name`.
    #[serde(default)]
    pub generated_name: Option<String>,
}

fn void() -> TypeShape {
    TypeShape::Void
}

impl CandidateOperation {
    pub fn method(
        kind: OperationKind,
        name: impl Into<String>,
        parameters: Vec<Parameter>,
        return_type: TypeShape,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            parameters,
            return_type,
            type_params: Vec::new(),
            doc: None,
            generated_name: None,
        }
    }

    pub fn constructor(parameters: Vec<Parameter>) -> Self {
        Self::method(OperationKind::Constructor, "<init>", parameters, TypeShape::Void)
    }

    pub fn with_type_params(mut self, type_params: Vec<TypeVarId>) -> Self {
        self.type_params = type_params;
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn with_generated_name(mut self, name: impl Into<String>) -> Self {
        self.generated_name = Some(name.into());
        self
    }

    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    pub fn returns_void(&self) -> bool {
        matches!(self.return_type, TypeShape::Void)
    }
}

/// Everything the planner needs to know about one class.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassMetadata {
    pub name: ClassName,
    /// Type parameters declared by the class, in declaration order.
    #[serde(default)]
    pub type_params: Vec<TypeVarId>,
    /// Definitions for every type variable referenced by the class or its operations.
    #[serde(default)]
    pub type_vars: TypeVarTable,
    #[serde(default)]
    pub operations: Vec<CandidateOperation>,
}

impl ClassMetadata {
    pub fn new(name: ClassName) -> Self {
        Self {
            name,
            type_params: Vec::new(),
            type_vars: TypeVarTable::new(),
            operations: Vec::new(),
        }
    }

    /// The class as a parameterized type over its own type variables.
    pub fn self_type(&self) -> TypeShape {
        TypeShape::class(
            self.name.clone(),
            self.type_params
                .iter()
                .copied()
                .map(TypeShape::TypeVariable)
                .collect(),
        )
    }
}
