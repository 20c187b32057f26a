use std::collections::BTreeMap;
use std::fmt::{Debug, Display};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    /// Ordered so that listing follows assignment order.
    type Id: Ord + Clone + Send + Sync + Display + Debug;
    type CreateParams: Send + Sync + Debug;
    /// Why the entity refused a create request.
    type Rejection: std::error::Error + Clone + PartialEq + Send + Sync + 'static;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Checks the params before an id is spent on them.
    fn validate(params: &Self::CreateParams) -> Result<(), Self::Rejection>;

    /// Construct the full Entity from the ID and already validated params
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Self;
}

/// Errors surfaced by [`ResourceClient`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError<R> {
    #[error("Request rejected: {0}")]
    Rejected(R),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T, E> = oneshot::Sender<Result<T, E>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T, T::Rejection>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>, T::Rejection>,
    },
    List {
        respond_to: Response<Vec<T>, T::Rejection>,
    },
    /// Answers `true` when something was removed; a missing id is not an error.
    Delete {
        id: T::Id,
        respond_to: Response<bool, T::Rejection>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        // A zero-capacity mpsc channel panics on construction.
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Serves requests until every client has been dropped.
    #[instrument(name = "resource_actor", skip(self), fields(entity = std::any::type_name::<T>()))]
    pub async fn run(mut self) {
        info!("ResourceActor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let _ = respond_to.send(self.handle_create(params));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let items: Vec<T> = self.store.values().cloned().collect();
                    debug!(count = items.len(), "Listed items");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let removed = self.handle_delete(id);
                    let _ = respond_to.send(Ok(removed));
                }
            }
        }
        info!("ResourceActor stopped");
    }

    fn handle_create(&mut self, params: T::CreateParams) -> Result<T, T::Rejection> {
        if let Err(e) = T::validate(&params) {
            warn!(error = %e, "Create rejected");
            return Err(e);
        }
        let id = (self.next_id_fn)();
        let item = T::from_create_params(id.clone(), params);
        self.store.insert(id.clone(), item.clone());
        info!(id = %id, "Item created");
        Ok(item)
    }

    fn handle_delete(&mut self, id: T::Id) -> bool {
        match self.store.remove(&id) {
            Some(_) => {
                info!(id = %id, "Item deleted");
                true
            }
            None => {
                debug!(id = %id, "Delete of unknown id ignored");
                false
            }
        }
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

// Derive would demand `T: Clone` on the bound rather than on the sender.
impl<T: Entity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T, FrameworkError<T::Rejection>> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError<T::Rejection>> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError<T::Rejection>> {
        self.request(|respond_to| ResourceRequest::List { respond_to })
            .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<bool, FrameworkError<T::Rejection>> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R, T::Rejection>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError<T::Rejection>> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response
            .await
            .map_err(|_| FrameworkError::ActorDropped)?
            .map_err(FrameworkError::Rejected)
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
