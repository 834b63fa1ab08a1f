use fngen_types::{collect_type_vars, CandidateOperation, OperationKind, TypeShape, TypeVarTable};

/// Sort key for one candidate: name, parameter count, then the boxed canonical parameter types.
///
/// The trailing components only break ties between candidates that share the first three.
/// Type variables enter the canonical text by declared name alone, so their bounds are part of
/// the tie-breakers (`<T> foo(T)` vs `<T extends Number> foo(T)`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct CanonicalKey {
    pub name: String,
    pub arity: usize,
    pub parameter_types: String,
    type_var_bounds: Vec<String>,
    kind: u8,
    return_type: String,
    parameter_names: Vec<String>,
    generated_name: Option<String>,
    doc: Option<String>,
}

impl CanonicalKey {
    pub fn of(table: &TypeVarTable, op: &CandidateOperation) -> Self {
        let parameter_types = op
            .parameters
            .iter()
            .map(|param| param.ty.boxed().canonical_text(table))
            .collect::<String>();
        let kind = match op.kind {
            OperationKind::Constructor => 0,
            OperationKind::Static => 1,
            OperationKind::Instance => 2,
        };
        let roots = op
            .parameters
            .iter()
            .map(|param| &param.ty)
            .chain([&op.return_type]);
        let type_var_bounds = collect_type_vars(table, roots)
            .into_iter()
            .map(|id| match table.get(id) {
                Some(def) => format!(
                    "{}:{}:{}",
                    def.name,
                    def.upper_bound.canonical_text(table),
                    def.lower_bound
                        .as_ref()
                        .map(|lower| lower.canonical_text(table))
                        .unwrap_or_default()
                ),
                None => TypeShape::TypeVariable(id).canonical_text(table),
            })
            .collect();
        Self {
            name: op.name.clone(),
            arity: op.arity(),
            parameter_types,
            type_var_bounds,
            kind,
            return_type: op.return_type.canonical_text(table),
            parameter_names: op.parameters.iter().map(|param| param.name.clone()).collect(),
            generated_name: op.generated_name.clone(),
            doc: op.doc.clone(),
        }
    }
}

/// Candidates in canonical order, independent of the order they were discovered in.
pub fn canonical_order<'a>(
    table: &TypeVarTable,
    ops: impl IntoIterator<Item = &'a CandidateOperation>,
) -> Vec<&'a CandidateOperation> {
    let mut ops: Vec<&CandidateOperation> = ops.into_iter().collect();
    ops.sort_by_cached_key(|op| CanonicalKey::of(table, op));
    ops
}
