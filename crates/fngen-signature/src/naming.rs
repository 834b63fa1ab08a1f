use std::collections::{HashMap, HashSet};

use fngen_types::{collect_type_vars, CandidateOperation, TypeShape, TypeVarId, TypeVarTable};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeVarScope {
    Class,
    Method,
}

/// Synthetic names for the type variables visible in one operation's signature.
///
/// Built fresh for every operation; numbering depends only on the declaration order of the
/// class and operation parameter lists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypeVarNames {
    names: HashMap<TypeVarId, (String, TypeVarScope)>,
}

impl TypeVarNames {
    /// Names for a class signature alone (`C0..Cn-1`).
    pub fn for_class(table: &TypeVarTable, class_params: &[TypeVarId]) -> Self {
        Self::for_operation(table, class_params, &[])
    }

    /// Class-scoped variables get `C0, C1, ..`; operation-declared variables that are not already
    /// class scoped get `M0, M1, ..`.
    ///
    /// Variables only reachable through bounds are numbered after the declared ones of the same
    /// scope.
    pub fn for_operation(
        table: &TypeVarTable,
        class_params: &[TypeVarId],
        op_params: &[TypeVarId],
    ) -> Self {
        let mut names = HashMap::new();

        let class_vars = reachable(table, class_params);
        for (idx, id) in class_vars.iter().enumerate() {
            names.insert(*id, (format!("C{idx}"), TypeVarScope::Class));
        }

        let method_vars: Vec<TypeVarId> = reachable(table, op_params)
            .into_iter()
            .filter(|id| !names.contains_key(id))
            .collect();
        for (idx, id) in method_vars.into_iter().enumerate() {
            names.insert(id, (format!("M{idx}"), TypeVarScope::Method));
        }

        Self { names }
    }

    pub fn name(&self, id: TypeVarId) -> Option<&str> {
        self.names.get(&id).map(|(name, _)| name.as_str())
    }

    pub fn scope(&self, id: TypeVarId) -> Option<TypeVarScope> {
        self.names.get(&id).map(|(_, scope)| *scope)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

fn reachable(table: &TypeVarTable, params: &[TypeVarId]) -> Vec<TypeVarId> {
    let roots: Vec<TypeShape> = params.iter().copied().map(TypeShape::TypeVariable).collect();
    collect_type_vars(table, roots.iter())
}

/// The type variables the generated signature has to declare, in declaration order.
///
/// Static operations only see what their parameters and return type mention. Instance operations
/// and constructors are generated against the parameterized class, so every class variable comes
/// first.
pub fn relevant_type_vars(
    table: &TypeVarTable,
    class_params: &[TypeVarId],
    op: &CandidateOperation,
) -> Vec<TypeVarId> {
    let mut out = Vec::new();
    let mut seen = HashSet::new();
    let mut push_all = |ids: Vec<TypeVarId>| {
        for id in ids {
            if seen.insert(id) {
                out.push(id);
            }
        }
    };

    if !op.kind.is_static() {
        push_all(reachable(table, class_params));
    }
    for param in &op.parameters {
        push_all(collect_type_vars(table, [&param.ty]));
    }
    push_all(collect_type_vars(table, [&op.return_type]));

    out
}
