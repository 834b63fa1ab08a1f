/// A class whose adapters cannot be generated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// Two overloads erase to the same parameter kind sequence, so the `$`-suffix does not
    /// separate them.
    #[error("generated name `{name}` in `{class}` collides and its disambiguated form `{renamed}` is already taken")]
    NamingCollisionUnresolvable {
        class: String,
        name: String,
        renamed: String,
    },
    #[error("cannot render owner type of `{class}`: {source}")]
    OwnerType {
        class: String,
        #[source]
        source: fngen_signature::RenderError,
    },
}
