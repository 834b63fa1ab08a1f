//! Per-class adapter planning.
//!
//! The pipeline for one class is: sort candidates into canonical order, render each candidate's
//! signature, then resolve colliding generated names. The result is a [`ClassPlan`] with the
//! finalized operations, handed to the emission template.
//!
//! Classes are independent of each other; [`plan_classes`] is a plain map over them.

#![forbid(unsafe_code)]

mod adapter;
mod error;
mod names;
mod ordering;
mod resolve;

use fngen_config::{ClassOptions, GeneratorConfig, PLAN_TARGET};
use fngen_types::{ClassMetadata, Diagnostic};
use serde::Serialize;

pub use crate::adapter::{
    owner_type, plan_operation, render_doc_comment, AdapterArity, AdapterFamily, AdapterType,
    OperationPlan, ParameterList, RenderedParameter, MAX_FIXED_ARITY,
};
pub use crate::error::PlanError;
pub use crate::names::{disambiguated_name, erased_text, generated_name, KindTag};
pub use crate::ordering::{canonical_order, CanonicalKey};
pub use crate::resolve::{OverloadGroupResolver, EXCLUDED_OVERLOAD, RENAMED_OVERLOAD};

pub const UNSUPPORTED_SHAPE: &str = "unsupported-shape";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClassPlan {
    /// Qualified name of the originating class.
    pub class_name: String,
    pub generated_class_name: String,
    /// The originating class over its synthetic type variables (`com.example.Box<C0>`).
    pub owner_type: String,
    pub operations: Vec<OperationPlan>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Plan the adapters of one class.
///
/// Operations whose types cannot be rendered are dropped with a warning; a name collision the
/// naming policy cannot resolve fails the whole class.
pub fn plan_class(class: &ClassMetadata, options: &ClassOptions) -> Result<ClassPlan, PlanError> {
    let class_name = class.name.qualified();
    let _span = tracing::debug_span!(target: PLAN_TARGET, "plan_class", class = %class_name).entered();

    let owner_type = owner_type(class).map_err(|source| PlanError::OwnerType {
        class: class_name.clone(),
        source,
    })?;
    let generated_class_name = options
        .generated_name
        .clone()
        .unwrap_or_else(|| format!("{}_", class.name.simple_name()));

    let mut diagnostics = Vec::new();
    let mut resolver = OverloadGroupResolver::new(&class_name, options.policy);
    for op in canonical_order(&class.type_vars, &class.operations) {
        let requested = generated_name(&class.name, &class.type_vars, op);
        let plan = match plan_operation(class, op, requested) {
            Ok(plan) => plan,
            Err(err) => {
                tracing::warn!(target: PLAN_TARGET, operation = %op.name, error = %err, "dropping operation");
                diagnostics.push(Diagnostic::warning(
                    UNSUPPORTED_SHAPE,
                    format!("skipping `{}` in `{class_name}`: {err}", op.name),
                    Some(&op.name),
                ));
                continue;
            }
        };
        resolver.push(op, plan)?;
    }

    let (operations, resolver_diagnostics) = resolver.finish();
    diagnostics.extend(resolver_diagnostics);

    tracing::debug!(
        target: PLAN_TARGET,
        operations = operations.len(),
        diagnostics = diagnostics.len(),
        "planned class"
    );

    Ok(ClassPlan {
        class_name,
        generated_class_name,
        owner_type,
        operations,
        diagnostics,
    })
}

/// Plan every class with its configured options.
pub fn plan_classes<'a, I>(
    classes: I,
    config: &'a GeneratorConfig,
) -> impl Iterator<Item = Result<ClassPlan, PlanError>> + 'a
where
    I: IntoIterator<Item = &'a ClassMetadata>,
    I::IntoIter: 'a,
{
    classes
        .into_iter()
        .map(move |class| plan_class(class, &config.options_for(&class.name)))
}
