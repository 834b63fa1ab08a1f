//! Java-like signature text for adapter declarations.
//!
//! [`TypeVarNames`] assigns the synthetic `C0..`/`M0..` identifiers for one operation and
//! [`SignatureRenderer`] turns [`fngen_types::TypeShape`]s into source text using them.

#![forbid(unsafe_code)]

mod error;
mod naming;
mod render;

pub use crate::error::RenderError;
pub use crate::naming::{relevant_type_vars, TypeVarNames, TypeVarScope};
pub use crate::render::{RenderMode, SignatureRenderer};
