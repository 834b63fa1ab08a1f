/// A type shape that has no textual form where it was requested.
///
/// Fatal for the operation being rendered, never for its class.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("unsupported type shape `{shape}` in {position} position")]
    UnsupportedShape { shape: String, position: &'static str },
}
