//! Request contracts and the handler and validator seams.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// A unit of dispatch: a command or query with a declared response type.
pub trait Request: Send + Sync + 'static {
    /// Value produced by the request's handler on success.
    type Response: Send + 'static;

    /// Stable request name used in logs and configuration errors.
    const NAME: &'static str;
}

/// Business logic for exactly one request shape.
///
/// `E` is the handler error type shared by every handler behind one
/// dispatcher.
#[async_trait]
pub trait RequestHandler<R, E>: Send + Sync
where
    R: Request,
    E: Send + 'static,
{
    /// Handles the request.
    ///
    /// Implementations should stop early and report cancellation when
    /// `cancellation` fires while they wait on storage.
    ///
    /// # Errors
    ///
    /// Returns the handler's error type when the request cannot be served.
    async fn handle(&self, request: R, cancellation: &CancellationToken)
    -> Result<R::Response, E>;
}

/// A set of rules applied to one request shape before it is handled.
pub trait RequestValidator<R>: Send + Sync {
    /// Returns every rule failure for `request`, in rule order.
    ///
    /// An empty vector means the request passed.
    fn validate(&self, request: &R) -> Vec<String>;
}
