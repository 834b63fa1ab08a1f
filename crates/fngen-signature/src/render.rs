use std::collections::HashSet;

use fngen_types::{TypeShape, TypeVarId, TypeVarTable, WildcardBound};

use crate::{RenderError, TypeVarNames};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// Declaration site: a type variable gets its bound clause the first time it is rendered.
    Full,
    /// Usage site: bare identifiers and instantiations only.
    Suppressed,
}

/// Where in the surrounding text a shape is being written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Position {
    /// A whole type: parameter, return type, adapter argument.
    Root,
    /// A type argument inside `<..>`.
    Argument,
    /// The bound clause of a declared type variable.
    Bound,
    /// A wildcard bound or an intersection component.
    Nested,
    ArrayComponent,
}

impl Position {
    fn describe(self) -> &'static str {
        match self {
            Position::Root => "type",
            Position::Argument => "type argument",
            Position::Bound => "bound",
            Position::Nested => "nested bound",
            Position::ArrayComponent => "array component",
        }
    }
}

/// Renders the type shapes of one signature.
///
/// The renderer remembers which type variables already had their bound clause emitted, so a
/// variable is declared at most once however many times it is rendered in [`RenderMode::Full`].
/// Create one renderer per generated signature.
pub struct SignatureRenderer<'a> {
    table: &'a TypeVarTable,
    names: &'a TypeVarNames,
    declared: HashSet<TypeVarId>,
}

impl<'a> SignatureRenderer<'a> {
    pub fn new(table: &'a TypeVarTable, names: &'a TypeVarNames) -> Self {
        Self {
            table,
            names,
            declared: HashSet::new(),
        }
    }

    /// Render `ty` as a complete type. Primitives are boxed.
    pub fn render(&mut self, ty: &TypeShape, mode: RenderMode) -> Result<String, RenderError> {
        let mut out = String::new();
        self.write(ty, mode, Position::Root, &mut out)?;
        Ok(out)
    }

    /// Render the declared type of a named parameter: a top-level primitive stays a keyword.
    pub fn render_declared_parameter(&mut self, ty: &TypeShape) -> Result<String, RenderError> {
        match ty {
            TypeShape::Primitive(prim) => Ok(prim.keyword().to_string()),
            _ => self.render(ty, RenderMode::Suppressed),
        }
    }

    /// The declaration clause for `id` (`M0 extends Comparable<M0>`).
    pub fn declare(&mut self, id: TypeVarId) -> Result<String, RenderError> {
        self.render(&TypeShape::TypeVariable(id), RenderMode::Full)
    }

    fn write(
        &mut self,
        ty: &TypeShape,
        mode: RenderMode,
        position: Position,
        out: &mut String,
    ) -> Result<(), RenderError> {
        let table = self.table;
        let names = self.names;
        match ty {
            TypeShape::Primitive(prim) => {
                if position == Position::ArrayComponent {
                    out.push_str(prim.keyword());
                } else {
                    out.push_str(&prim.boxed().source_name());
                }
            }
            TypeShape::Declared {
                name,
                args,
                direct_bounds,
            } => {
                if position == Position::Bound && args.is_empty() && direct_bounds.len() > 1 {
                    for (idx, bound) in direct_bounds.iter().enumerate() {
                        if idx != 0 {
                            out.push_str(" & ");
                        }
                        self.write(bound, RenderMode::Suppressed, Position::Nested, out)?;
                    }
                    return Ok(());
                }

                out.push_str(&name.source_name());
                if !args.is_empty() {
                    out.push('<');
                    for (idx, arg) in args.iter().enumerate() {
                        if idx != 0 {
                            out.push_str(", ");
                        }
                        self.write(arg, RenderMode::Suppressed, Position::Argument, out)?;
                    }
                    out.push('>');
                }
            }
            TypeShape::Array(component) => {
                self.write(
                    component,
                    RenderMode::Suppressed,
                    Position::ArrayComponent,
                    out,
                )?;
                out.push_str("[]");
            }
            TypeShape::Wildcard(bound) => {
                if position != Position::Argument {
                    return Err(self.unsupported(ty, position));
                }
                out.push('?');
                match bound {
                    WildcardBound::Unbounded => {}
                    WildcardBound::Extends(bound) => {
                        out.push_str(" extends ");
                        self.write(bound, RenderMode::Suppressed, Position::Nested, out)?;
                    }
                    WildcardBound::Super(bound) => {
                        out.push_str(" super ");
                        self.write(bound, RenderMode::Suppressed, Position::Nested, out)?;
                    }
                }
            }
            TypeShape::TypeVariable(id) => {
                let Some(def) = table.get(*id) else {
                    return Err(self.unsupported(ty, position));
                };
                out.push_str(names.name(*id).unwrap_or(&def.name));

                if mode == RenderMode::Full && self.declared.insert(*id) {
                    if def.upper_bound != TypeShape::UniversalTop {
                        out.push_str(" extends ");
                        self.write(&def.upper_bound, RenderMode::Suppressed, Position::Bound, out)?;
                    } else if let Some(lower) = def
                        .lower_bound
                        .as_ref()
                        .filter(|lower| **lower != TypeShape::UniversalTop)
                    {
                        out.push_str(" super ");
                        self.write(lower, RenderMode::Suppressed, Position::Bound, out)?;
                    }
                }
            }
            TypeShape::Void => {
                if position != Position::Root {
                    return Err(self.unsupported(ty, position));
                }
                out.push_str("void");
            }
            TypeShape::UniversalTop => return Err(self.unsupported(ty, position)),
        }
        Ok(())
    }

    fn unsupported(&self, ty: &TypeShape, position: Position) -> RenderError {
        RenderError::UnsupportedShape {
            shape: ty.canonical_text(self.table),
            position: position.describe(),
        }
    }
}
