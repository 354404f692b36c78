//! Startup configuration listing every validator and handler.

use super::{Request, RequestHandler, RequestValidator};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;
use thiserror::Error;

/// Errors detected while turning a [`PipelineConfig`] into a dispatcher.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PipelineConfigError {
    /// Validators were registered for a request shape that has no handler.
    #[error("no handler registered for request {0}")]
    MissingHandler(&'static str),

    /// A second handler was registered for the same request shape.
    #[error("more than one handler registered for request {0}")]
    DuplicateHandler(&'static str),
}

/// Validators and the handler for one request shape.
pub(super) struct Route<R, E>
where
    R: Request,
    E: Send + 'static,
{
    pub(super) validators: Vec<Arc<dyn RequestValidator<R>>>,
    pub(super) handler: Option<Arc<dyn RequestHandler<R, E>>>,
}

impl<R, E> Route<R, E>
where
    R: Request,
    E: Send + 'static,
{
    const fn empty() -> Self {
        Self {
            validators: Vec::new(),
            handler: None,
        }
    }
}

/// Type-erased route keyed by the request's `TypeId`.
pub(super) struct RouteSlot {
    pub(super) request_name: &'static str,
    pub(super) has_handler: bool,
    pub(super) route: Box<dyn Any + Send + Sync>,
}

/// Explicit mapping from request shape to validators and handler.
///
/// Built once at startup and handed to
/// [`Dispatcher::new`](super::Dispatcher::new). Validators run in the order
/// they were registered.
///
/// # Examples
///
/// ```
/// use todo_grpc::pipeline::{PipelineConfig, PipelineConfigError};
///
/// let config: PipelineConfig<PipelineConfigError> = PipelineConfig::new();
/// assert!(config.is_empty());
/// ```
pub struct PipelineConfig<E> {
    pub(super) routes: HashMap<TypeId, RouteSlot>,
    pub(super) errors: Vec<PipelineConfigError>,
    marker: PhantomData<fn() -> E>,
}

impl<E> PipelineConfig<E>
where
    E: Send + 'static,
{
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
            errors: Vec::new(),
            marker: PhantomData,
        }
    }

    /// Appends a validator for request shape `R`.
    #[must_use]
    pub fn validator<R>(mut self, validator: impl RequestValidator<R> + 'static) -> Self
    where
        R: Request,
    {
        if let Some(route) = self.slot::<R>().route.downcast_mut::<Route<R, E>>() {
            route.validators.push(Arc::new(validator));
        }
        self
    }

    /// Registers the handler for request shape `R`.
    ///
    /// Registering a second handler for the same shape is recorded and
    /// reported by [`Dispatcher::new`](super::Dispatcher::new).
    #[must_use]
    pub fn handler<R>(mut self, handler: impl RequestHandler<R, E> + 'static) -> Self
    where
        R: Request,
    {
        let slot = self.slot::<R>();
        if slot.has_handler {
            self.errors
                .push(PipelineConfigError::DuplicateHandler(R::NAME));
            return self;
        }
        slot.has_handler = true;
        if let Some(route) = slot.route.downcast_mut::<Route<R, E>>() {
            route.handler = Some(Arc::new(handler));
        }
        self
    }

    /// Returns `true` when nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    fn slot<R>(&mut self) -> &mut RouteSlot
    where
        R: Request,
    {
        self.routes
            .entry(TypeId::of::<R>())
            .or_insert_with(|| RouteSlot {
                request_name: R::NAME,
                has_handler: false,
                route: Box::new(Route::<R, E>::empty()),
            })
    }
}

impl<E> Default for PipelineConfig<E>
where
    E: Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
