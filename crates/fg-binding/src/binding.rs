//! Live bindings between compiled interpolations and render targets.

use std::fmt::Display;
use std::sync::Arc;

use crate::error::Result;
use crate::expr::InterpolationExpression;

/// How a binding tracks its scope after the first render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum BindingMode {
    /// Re-render whenever the host signals a scope change.
    OneWay,
    /// Render once and never observe the scope again.
    OneTime,
}

impl Default for BindingMode {
    fn default() -> Self {
        BindingMode::OneWay
    }
}

/// Evaluation of a compiled expression against a scope.
pub trait Evaluate<S: ?Sized> {
    /// Result of evaluation, rendered through [`Display`] when joined into
    /// surrounding text.
    type Value: Display;

    fn evaluate(&self, scope: &S) -> Result<Self::Value>;
}

/// Receiver of rendered values, usually a DOM attribute or text node.
pub trait BindingTarget<V> {
    /// Write a raw evaluated value. Used when the whole bound value is a
    /// single expression, so the target sees the value untouched rather
    /// than its string rendering.
    fn bind_value(&mut self, attribute: &str, value: V) -> Result<()>;

    /// Write joined literal and expression text.
    fn bind_text(&mut self, attribute: &str, text: &str) -> Result<()>;
}

const STYLE_ATTRIBUTE: &str = "style";

/// One instantiation of an [`InterpolationExpression`] against a concrete
/// target attribute.
///
/// The expression is shared read-only across instances; the target and
/// attribute are owned per binding. Rendering is driven by the host through
/// [`Binding::update`]; the [`BindingMode`] tells the host whether to keep
/// driving it after the first render.
#[derive(Debug)]
pub struct Binding<E, T> {
    expression: Arc<InterpolationExpression<E>>,
    target: T,
    attribute: String,
    mode: BindingMode,
}

impl<E, T> Binding<E, T> {
    pub(crate) fn new(
        expression: Arc<InterpolationExpression<E>>,
        target: T,
        attribute: String,
    ) -> Self {
        advise_target(&attribute);
        let mode = expression.mode();
        Self {
            expression,
            target,
            attribute,
            mode,
        }
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn mode(&self) -> BindingMode {
        self.mode
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn expression(&self) -> &Arc<InterpolationExpression<E>> {
        &self.expression
    }

    /// Evaluate against `scope` and push the result into the target.
    ///
    /// A value that is exactly one expression goes through
    /// [`BindingTarget::bind_value`] with the evaluated value itself.
    /// Anything else joins literals and rendered expression values in part
    /// order and goes through [`BindingTarget::bind_text`]. The first
    /// evaluation failure aborts the render and nothing reaches the target.
    pub fn update<S>(&mut self, scope: &S) -> Result<()>
    where
        S: ?Sized,
        E: Evaluate<S>,
        T: BindingTarget<E::Value>,
    {
        if let Some(expression) = self.expression.single_expression() {
            let value = expression.evaluate(scope)?;
            return self.target.bind_value(&self.attribute, value);
        }
        let parts = self.expression.parts();
        let mut literals = parts.literals();
        let mut text = String::new();
        if let Some(first) = literals.next() {
            text.push_str(first);
        }
        for (expression, literal) in self.expression.compiled().iter().zip(literals) {
            let value = expression.evaluate(scope)?;
            text.push_str(&value.to_string());
            text.push_str(literal);
        }
        self.target.bind_text(&self.attribute, &text)
    }
}

// Interpolating the style attribute works, but replaces the whole inline
// style on every update. Surface that once, at binding creation.
fn advise_target(attribute: &str) {
    if attribute == STYLE_ATTRIBUTE {
        tracing::info!(
            "interpolating `style` rewrites the entire inline style on each update; \
             bind individual declarations through a dedicated style binding to compose them"
        );
    }
}
