use fngen_signature::{relevant_type_vars, RenderError, RenderMode, SignatureRenderer, TypeVarNames};
use fngen_types::{CandidateOperation, ClassMetadata, OperationKind};
use serde::Serialize;

/// Highest arity with a dedicated adapter type; above it the variadic member is used.
pub const MAX_FIXED_ARITY: usize = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdapterFamily {
    /// Side-effecting operations (`Action0..Action9`, `ActionN`).
    Action,
    /// Value-producing operations and constructors (`Func0..Func9`, `FuncN`).
    Func,
}

impl AdapterFamily {
    fn prefix(self) -> &'static str {
        match self {
            AdapterFamily::Action => "Action",
            AdapterFamily::Func => "Func",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "count")]
pub enum AdapterArity {
    Fixed(usize),
    Variadic,
}

impl AdapterArity {
    pub fn for_parameter_count(count: usize) -> Self {
        if count > MAX_FIXED_ARITY {
            AdapterArity::Variadic
        } else {
            AdapterArity::Fixed(count)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AdapterType {
    pub family: AdapterFamily,
    pub arity: AdapterArity,
    /// Full type text, e.g. `Func2<Integer, String, Point>`.
    pub text: String,
}

impl AdapterType {
    /// `type_args` are the parameter types followed, for `Func`, by the result type.
    fn new(family: AdapterFamily, arity: AdapterArity, type_args: &[String]) -> Self {
        let head = match arity {
            AdapterArity::Fixed(count) => format!("{}{count}", family.prefix()),
            AdapterArity::Variadic => format!("{}N", family.prefix()),
        };
        let text = if type_args.is_empty() {
            head
        } else {
            format!("{head}<{}>", type_args.join(", "))
        };
        Self {
            family,
            arity,
            text,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RenderedParameter {
    /// Declared name, or the positional access expression (`args[3]`) above the fixed arity.
    pub name: String,
    /// Type as written at the call site.
    pub ty: String,
    pub boxed_ty: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "parameters")]
pub enum ParameterList {
    Named(Vec<RenderedParameter>),
    /// More than [`MAX_FIXED_ARITY`] parameters: all of them arrive boxed through one
    /// `Object... args` collection, whatever the adapter.
    Positional(Vec<RenderedParameter>),
}

impl ParameterList {
    pub fn parameters(&self) -> &[RenderedParameter] {
        match self {
            ParameterList::Named(params) | ParameterList::Positional(params) => params,
        }
    }

    pub fn is_positional(&self) -> bool {
        matches!(self, ParameterList::Positional(_))
    }
}

/// A finalized adapter factory, ready for the emission template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OperationPlan {
    pub generated_name: String,
    /// Name of the wrapped operation; `None` for constructors.
    pub called_name: Option<String>,
    pub call_kind: OperationKind,
    pub adapter: AdapterType,
    /// Return type of the adapter's call method.
    pub return_type: String,
    pub parameters: ParameterList,
    /// Type parameter declaration clauses of the generated factory.
    pub generics: Vec<String>,
    pub doc: Option<String>,
    pub doc_comment: Option<String>,
}

/// Owner type text over synthetic class variables, e.g. `com.example.Box<C0, C1>`.
pub fn owner_type(class: &ClassMetadata) -> Result<String, RenderError> {
    let names = TypeVarNames::for_class(&class.type_vars, &class.type_params);
    SignatureRenderer::new(&class.type_vars, &names).render(&class.self_type(), RenderMode::Suppressed)
}

/// Render every type-level piece of one candidate's adapter.
pub fn plan_operation(
    class: &ClassMetadata,
    op: &CandidateOperation,
    generated_name: String,
) -> Result<OperationPlan, RenderError> {
    let table = &class.type_vars;
    let names = TypeVarNames::for_operation(table, &class.type_params, &op.type_params);
    let mut renderer = SignatureRenderer::new(table, &names);

    let generics = relevant_type_vars(table, &class.type_params, op)
        .into_iter()
        .map(|id| renderer.declare(id))
        .collect::<Result<Vec<_>, _>>()?;

    let owner = renderer.render(&class.self_type(), RenderMode::Suppressed)?;
    let return_type = match op.kind {
        OperationKind::Constructor => owner.clone(),
        OperationKind::Instance | OperationKind::Static => {
            renderer.render(&op.return_type, RenderMode::Suppressed)?
        }
    };

    let receiver_adapter = op.kind == OperationKind::Instance;
    let arity = if receiver_adapter {
        AdapterArity::Fixed(1)
    } else {
        AdapterArity::for_parameter_count(op.arity())
    };
    let positional = op.arity() > MAX_FIXED_ARITY;

    let mut parameters = Vec::with_capacity(op.arity());
    for (idx, param) in op.parameters.iter().enumerate() {
        let boxed_ty = renderer.render(&param.ty, RenderMode::Suppressed)?;
        let (name, ty) = if positional {
            (format!("args[{idx}]"), boxed_ty.clone())
        } else {
            (param.name.clone(), renderer.render_declared_parameter(&param.ty)?)
        };
        parameters.push(RenderedParameter { name, ty, boxed_ty });
    }

    let family = if op.kind != OperationKind::Constructor && op.returns_void() {
        AdapterFamily::Action
    } else {
        AdapterFamily::Func
    };
    let mut type_args: Vec<String> = match (receiver_adapter, arity) {
        (true, _) => vec![owner],
        (false, AdapterArity::Fixed(_)) => {
            parameters.iter().map(|param| param.boxed_ty.clone()).collect()
        }
        (false, AdapterArity::Variadic) => Vec::new(),
    };
    if family == AdapterFamily::Func {
        type_args.push(return_type.clone());
    }
    let adapter = AdapterType::new(family, arity, &type_args);

    let parameters = if positional {
        ParameterList::Positional(parameters)
    } else {
        ParameterList::Named(parameters)
    };

    let doc = op.doc.clone().filter(|doc| !doc.is_empty());
    let doc_comment = doc.as_deref().map(render_doc_comment);

    Ok(OperationPlan {
        generated_name,
        called_name: match op.kind {
            OperationKind::Constructor => None,
            OperationKind::Instance | OperationKind::Static => Some(op.name.clone()),
        },
        call_kind: op.kind,
        adapter,
        return_type,
        parameters,
        generics,
        doc,
        doc_comment,
    })
}

/// Re-indent raw documentation text as a member doc comment.
pub fn render_doc_comment(raw: &str) -> String {
    let mut comment = String::from("    /**\n");
    for line in raw.split('\n') {
        comment.push_str("     *");
        comment.push_str(line.trim_end_matches('\r'));
        comment.push('\n');
    }
    comment.push_str("     */");
    comment
}
