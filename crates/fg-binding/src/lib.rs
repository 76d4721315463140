//! Interpolation parsing and binding for Filigree view templates.
//!
//! Attribute and text-node values may embed `${...}` expressions inside
//! ordinary text. This crate finds the placeholder boundaries ([`scan`]),
//! compiles every embedded source through an injected
//! [`ExpressionCompiler`], and materializes [`Binding`]s that keep a target
//! attribute in sync with the rendered result.
//!
//! The expression language itself lives elsewhere: placeholder bodies are
//! passed through verbatim and compiled behind the [`ExpressionCompiler`]
//! seam, so this crate stays independent of the expression parser and of the
//! observer infrastructure that decides *when* a binding re-renders.

pub mod binding;
pub mod error;
pub mod expr;
pub mod parts;
pub mod scan;

pub use binding::{Binding, BindingMode, BindingTarget, Evaluate};
pub use expr::{ExpressionCompiler, InterpolationExpression};
pub use parts::{Content, Part, PartSequence};
pub use scan::scan;

// Alias for error types
pub type Error = crate::error::Error;
pub type Result<T> = crate::error::Result<T>;
