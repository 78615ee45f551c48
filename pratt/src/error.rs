use anyhow::Result;
use std::fmt::Debug;
use thiserror::Error;

/// Errors raised by the grammar and the parser themselves.
///
/// Errors from user-supplied functions (denotations, the token source, and the
/// unexpected token handler) are passed through unchanged. All errors travel
/// as [anyhow::Error], so use `downcast_ref::<PrattError>()` to find out
/// whether the failure came from this crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrattError {
    /// A second null denotation was registered for the same token type.
    #[error("null denotation already defined for {0}")]
    NullDenotationDefined(String),
    /// A second left denotation was registered for the same token type.
    #[error("left denotation already defined for {0}")]
    LeftDenotationDefined(String),
    /// A token was found that is not expected at all, or not in this position.
    #[error("unexpected token: {0}")]
    UnexpectedToken(String),
    /// The unexpected token handler returned normally.
    #[error("expected handle_unexpected_token to return an error")]
    HandlerDidNotAbort,
    /// A denotation required a token (such as a closing parenthesis) that is
    /// not there.
    #[error("expected {expected}, but got {found}")]
    MissingToken { expected: String, found: String },
    /// The token stream ended where an expression should start.
    #[error("unexpected end of token stream")]
    EndOfInput,
}

impl PrattError {
    /// Whether the error was raised while setting up a grammar.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            PrattError::NullDenotationDefined(_) | PrattError::LeftDenotationDefined(_)
        )
    }
}

/// Default unexpected token handler that fails with
/// [PrattError::UnexpectedToken].
///
/// Pass it to [crate::Grammar::new] when there is no need for custom error
/// reporting. The error only keeps the `Debug` text of the token, since
/// [anyhow::Error] requires `'static + Send + Sync`. Pass a handler that
/// builds its own error if the token itself is needed.
pub fn unexpected_token<T: Debug>(token: &T) -> Result<()> {
    Err(PrattError::UnexpectedToken(format!("{token:?}")).into())
}
