//! Stateless request dispatcher.

use super::config::{Route, RouteSlot};
use super::{PipelineConfig, PipelineConfigError, Request, ValidationFailure};
use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, debug, error, warn};

/// Errors returned by [`Dispatcher::send`].
#[derive(Debug, Error)]
pub enum DispatchError<E>
where
    E: std::error::Error + 'static,
{
    /// One or more validators rejected the request; no handler ran.
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    /// No handler is configured for the request shape.
    #[error("no handler registered for request {0}")]
    HandlerNotRegistered(&'static str),

    /// The handler ran and failed; its error is passed through unchanged.
    #[error(transparent)]
    Handler(E),
}

/// Routes each request through its validators and then its handler.
///
/// Cloning is cheap: the route table is shared and never mutated after
/// [`Dispatcher::new`].
pub struct Dispatcher<E> {
    routes: Arc<HashMap<TypeId, RouteSlot>>,
    marker: std::marker::PhantomData<fn() -> E>,
}

impl<E> Clone for Dispatcher<E> {
    fn clone(&self) -> Self {
        Self {
            routes: Arc::clone(&self.routes),
            marker: std::marker::PhantomData,
        }
    }
}

impl<E> fmt::Debug for Dispatcher<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.routes.values().map(|slot| slot.request_name).collect();
        names.sort_unstable();
        f.debug_struct("Dispatcher").field("routes", &names).finish()
    }
}

impl<E> Dispatcher<E>
where
    E: std::error::Error + Send + 'static,
{
    /// Freezes a pipeline configuration into a dispatcher.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineConfigError::DuplicateHandler`] when a request shape
    /// was given two handlers, or [`PipelineConfigError::MissingHandler`]
    /// when a request shape has validators but no handler.
    pub fn new(config: PipelineConfig<E>) -> Result<Self, PipelineConfigError> {
        let routes = config.routes;

        if let Some(first) = config.errors.into_iter().next() {
            return Err(first);
        }

        let mut missing: Vec<&'static str> = routes
            .values()
            .filter(|slot| !slot.has_handler)
            .map(|slot| slot.request_name)
            .collect();
        missing.sort_unstable();
        if let Some(&name) = missing.first() {
            return Err(PipelineConfigError::MissingHandler(name));
        }

        Ok(Self {
            routes: Arc::new(routes),
            marker: std::marker::PhantomData,
        })
    }

    /// Returns `true` when a handler is configured for request shape `R`.
    #[must_use]
    pub fn handles<R>(&self) -> bool
    where
        R: Request,
    {
        self.route::<R>().is_some_and(|route| route.handler.is_some())
    }

    /// Validates `request` and, if it passes, invokes its handler.
    ///
    /// `cancellation` is forwarded to the handler untouched.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Validation`] with every collected message
    /// when any validator rejects the request,
    /// [`DispatchError::HandlerNotRegistered`] when the request shape is not
    /// configured, or [`DispatchError::Handler`] with the handler's own
    /// error.
    pub async fn send<R>(
        &self,
        request: R,
        cancellation: &CancellationToken,
    ) -> Result<R::Response, DispatchError<E>>
    where
        R: Request,
    {
        let span = tracing::debug_span!("dispatch", request = R::NAME);
        self.dispatch(request, cancellation).instrument(span).await
    }

    async fn dispatch<R>(
        &self,
        request: R,
        cancellation: &CancellationToken,
    ) -> Result<R::Response, DispatchError<E>>
    where
        R: Request,
    {
        let Some(route) = self.route::<R>() else {
            error!("request reached the dispatcher without a configured route");
            return Err(DispatchError::HandlerNotRegistered(R::NAME));
        };

        let failures: Vec<String> = route
            .validators
            .iter()
            .flat_map(|validator| validator.validate(&request))
            .collect();
        if let Some(failure) = ValidationFailure::from_messages(failures) {
            warn!(errors = ?failure.messages(), "request rejected by validation");
            return Err(DispatchError::Validation(failure));
        }

        let Some(handler) = route.handler.as_ref() else {
            error!("request reached the dispatcher without a handler");
            return Err(DispatchError::HandlerNotRegistered(R::NAME));
        };

        debug!("invoking handler");
        handler
            .handle(request, cancellation)
            .await
            .map_err(DispatchError::Handler)
    }

    fn route<R>(&self) -> Option<&Route<R, E>>
    where
        R: Request,
    {
        self.routes
            .get(&TypeId::of::<R>())
            .and_then(|slot| slot.route.downcast_ref::<Route<R, E>>())
    }
}
