//! Compiled interpolation expressions.

use std::sync::Arc;

use crate::binding::{Binding, BindingMode};
use crate::error::{Error, Result};
use crate::parts::PartSequence;

/// Seam to the external expression language.
///
/// Placeholder bodies are opaque to this crate; whatever understands them
/// implements this trait and turns raw source into an evaluable handle.
pub trait ExpressionCompiler {
    /// Compiled form of one embedded expression.
    type Compiled;
    /// Failure raised for malformed expression source.
    type Error: std::error::Error + Send + Sync + 'static;

    fn compile(&self, source: &str) -> std::result::Result<Self::Compiled, Self::Error>;
}

/// A parsed interpolation with every embedded expression compiled.
///
/// Built once per distinct attribute or text value during view-template
/// compilation, then shared read-only (via [`Arc`]) by every binding
/// instantiated from it. Nothing mutates it after construction.
#[derive(Debug)]
pub struct InterpolationExpression<E> {
    parts: PartSequence,
    compiled: Vec<E>,
    mode: BindingMode,
}

impl<E> InterpolationExpression<E> {
    /// Compile every expression part of `parts` through `compiler`.
    ///
    /// A compiler failure aborts the build and surfaces as
    /// [`Error::Compile`] naming the offending source; a malformed
    /// expression is an authoring error, not a runtime condition, so there
    /// is no partial result.
    pub fn build<C>(parts: PartSequence, compiler: &C) -> Result<Self>
    where
        C: ExpressionCompiler<Compiled = E>,
    {
        let mut compiled = Vec::with_capacity(parts.expression_count());
        for source in parts.expressions() {
            let expression = compiler.compile(source).map_err(|err| Error::Compile {
                expression: source.to_owned(),
                source: Box::new(err),
            })?;
            compiled.push(expression);
        }
        Ok(Self {
            parts,
            compiled,
            mode: BindingMode::default(),
        })
    }

    pub fn with_mode(mut self, mode: BindingMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn parts(&self) -> &PartSequence {
        &self.parts
    }

    /// Compiled handles, index-aligned with [`PartSequence::expressions`].
    pub fn compiled(&self) -> &[E] {
        &self.compiled
    }

    pub fn mode(&self) -> BindingMode {
        self.mode
    }

    /// The single compiled expression when the value is exactly `${...}`
    /// with no surrounding text.
    pub fn single_expression(&self) -> Option<&E> {
        if self.parts.single_expression().is_some() {
            self.compiled.first()
        } else {
            None
        }
    }

    /// Materialize a live binding of this interpolation to one attribute of
    /// `target`. The binding holds this shared expression read-only and owns
    /// its own per-instance state; clone the [`Arc`] to bind the same
    /// expression elsewhere.
    pub fn create_binding<T>(
        self: Arc<Self>,
        target: T,
        attribute: impl Into<String>,
    ) -> Binding<E, T> {
        Binding::new(self, target, attribute.into())
    }
}
