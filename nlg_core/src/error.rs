//! Renderer error types.

use thiserror::Error;

use fact_base::KbError;

use crate::grammar::LinearizeError;

/// Errors that can surface from a render stream.
///
/// Missing facts are not errors; they shrink the output. Everything here
/// propagates to the embedding application unhandled.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// The knowledge-base backend failed.
    #[error(transparent)]
    Knowledge(#[from] KbError),

    /// The grammar engine failed to linearize a phrase.
    #[error(transparent)]
    Linearize(#[from] LinearizeError),

    /// A quantity has no integer digit form (not finite).
    #[error("quantity {0} has no integer digit form")]
    NumericCoercion(f64),
}
