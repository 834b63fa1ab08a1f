use fngen_config::PLAN_TARGET;
use fngen_types::{CandidateOperation, Diagnostic, NamingPolicy};
use indexmap::IndexMap;

use crate::names::disambiguated_name;
use crate::{OperationPlan, PlanError};

pub const RENAMED_OVERLOAD: &str = "renamed-overload";
pub const EXCLUDED_OVERLOAD: &str = "excluded-overload";

/// Finalizes generated names for one class.
///
/// Candidates must arrive in canonical order: the first claimant of a name keeps it, later ones
/// are renamed or dropped according to the policy.
pub struct OverloadGroupResolver<'a> {
    class: &'a str,
    policy: NamingPolicy,
    groups: IndexMap<String, OperationPlan>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> OverloadGroupResolver<'a> {
    pub fn new(class: &'a str, policy: NamingPolicy) -> Self {
        Self {
            class,
            policy,
            groups: IndexMap::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Offer the next candidate. `plan.generated_name` is the name it asks for.
    pub fn push(&mut self, op: &CandidateOperation, mut plan: OperationPlan) -> Result<(), PlanError> {
        if !self.groups.contains_key(&plan.generated_name) {
            self.groups.insert(plan.generated_name.clone(), plan);
            return Ok(());
        }

        let requested = plan.generated_name.clone();
        match self.policy {
            NamingPolicy::Rename => {
                let renamed = disambiguated_name(&requested, op);
                if self.groups.contains_key(&renamed) {
                    tracing::error!(
                        target: PLAN_TARGET,
                        class = self.class,
                        from = %requested,
                        to = %renamed,
                        "disambiguated name is already taken"
                    );
                    return Err(PlanError::NamingCollisionUnresolvable {
                        class: self.class.to_string(),
                        name: requested,
                        renamed,
                    });
                }

                let message = format!(
                    "renaming method in `{}` from `{requested}` to `{renamed}`",
                    self.class
                );
                tracing::info!(target: PLAN_TARGET, class = self.class, from = %requested, to = %renamed, "renamed overload");
                self.diagnostics
                    .push(Diagnostic::info(RENAMED_OVERLOAD, message, Some(&op.name)));
                plan.generated_name = renamed.clone();
                self.groups.insert(renamed, plan);
            }
            NamingPolicy::Exclude => {
                let message = format!(
                    "filtering ambiguous method `{requested}` in `{}`",
                    self.class
                );
                tracing::warn!(target: PLAN_TARGET, class = self.class, name = %requested, "excluded overload");
                self.diagnostics
                    .push(Diagnostic::warning(EXCLUDED_OVERLOAD, message, Some(&op.name)));
            }
        }
        Ok(())
    }

    /// Kept operations in first-seen order, plus the diagnostics raised while resolving.
    pub fn finish(self) -> (Vec<OperationPlan>, Vec<Diagnostic>) {
        (self.groups.into_values().collect(), self.diagnostics)
    }
}
