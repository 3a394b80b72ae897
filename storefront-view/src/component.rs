use std::future::Future;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use storefront_client::{FetchError, StorefrontApi};
use storefront_shared::{Masked, OrderLine, OrderRequest};
use crate::app::{is_usable_order_id, reducer, render, Screen, ViewEvent, ViewState};

/// The order "Create Order" submits. Fixed per component.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub customer_id: Masked<String>,
    pub lines: Vec<OrderLine>,
}

impl OrderDraft {
    pub fn new(customer_id: impl Into<String>, lines: Vec<OrderLine>) -> Self {
        Self {
            customer_id: Masked(customer_id.into()),
            lines,
        }
    }

    fn request(&self) -> OrderRequest {
        OrderRequest {
            customer_id: self.customer_id.clone(),
            products: self.lines.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ActionError {
    #[error("Component is no longer mounted")]
    Unmounted,

    #[error("Catalog was already loaded for this component")]
    AlreadyMounted,

    #[error("No order to check")]
    NoOrder,

    #[error("A newer request replaced this one")]
    Superseded,

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// User-triggered operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Mount,
    CreateOrder,
    CheckOrderStatus,
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mount" => Ok(Action::Mount),
            "order" | "create" => Ok(Action::CreateOrder),
            "status" | "check" => Ok(Action::CheckOrderStatus),
            other => Err(format!("unknown command: {}", other)),
        }
    }
}

// Latest ticket issued per slot; only the holder of the latest may write.
#[derive(Default)]
struct Tickets {
    catalog: AtomicU64,
    order: AtomicU64,
    status: AtomicU64,
}

fn issue(slot: &AtomicU64) -> u64 {
    slot.fetch_add(1, Ordering::SeqCst) + 1
}

struct Inner<A> {
    api: A,
    draft: OrderDraft,
    state: RwLock<ViewState>,
    lifetime: CancellationToken,
    mounted: AtomicBool,
    tickets: Tickets,
}

/// Handle to one mounted storefront. Clones share state and lifetime.
///
/// Every backend call races the component's lifetime token: after
/// [`Storefront::unmount`] nothing is written to the view state. A completion
/// that is not the latest request issued for its slot is dropped, so a slow
/// response never overwrites a newer one.
pub struct Storefront<A> {
    inner: Arc<Inner<A>>,
}

impl<A> Clone for Storefront<A> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<A: StorefrontApi + 'static> Storefront<A> {
    pub fn new(api: A, draft: OrderDraft) -> Self {
        Self {
            inner: Arc::new(Inner {
                api,
                draft,
                state: RwLock::new(ViewState::default()),
                lifetime: CancellationToken::new(),
                mounted: AtomicBool::new(false),
                tickets: Tickets::default(),
            }),
        }
    }

    /// Loads the catalog. Runs once per component.
    pub async fn mount(&self) -> Result<(), ActionError> {
        self.ensure_visible()?;
        if self.inner.mounted.swap(true, Ordering::SeqCst) {
            return Err(ActionError::AlreadyMounted);
        }

        let ticket = issue(&self.inner.tickets.catalog);
        let event = match self.request(self.inner.api.list_products()).await? {
            Ok(products) => {
                info!("Catalog loaded: {} products", products.len());
                ViewEvent::CatalogLoaded(products)
            }
            Err(e) => ViewEvent::CatalogFailed(e),
        };
        self.commit(&self.inner.tickets.catalog, ticket, event).await
    }

    /// Submits the draft order. Not deduplicated: two calls, two orders.
    pub async fn create_order(&self) -> Result<(), ActionError> {
        self.ensure_visible()?;

        let ticket = issue(&self.inner.tickets.order);
        let request = self.inner.draft.request();
        let event = match self.request(self.inner.api.create_order(&request)).await? {
            Ok(record) if !is_usable_order_id(&record.id) => {
                ViewEvent::OrderFailed(FetchError::Decode(format!("unusable order id {:?}", record.id)))
            }
            Ok(record) => {
                info!("Order created: {}", record.id);
                ViewEvent::OrderCreated(record)
            }
            Err(e) => ViewEvent::OrderFailed(e),
        };
        self.commit(&self.inner.tickets.order, ticket, event).await
    }

    /// Fetches the status of the current order. Never touches the network
    /// without an order id.
    pub async fn check_order_status(&self) -> Result<(), ActionError> {
        self.ensure_visible()?;
        let order_id = self
            .inner
            .state
            .read()
            .await
            .current_order()
            .map(str::to_string)
            .ok_or(ActionError::NoOrder)?;

        let ticket = issue(&self.inner.tickets.status);
        let event = match self.request(self.inner.api.order_status(&order_id)).await? {
            Ok(status) => {
                info!("Order {} is {}", order_id, status.status);
                ViewEvent::StatusLoaded { order_id, status }
            }
            Err(error) => ViewEvent::StatusFailed { order_id, error },
        };
        self.commit(&self.inner.tickets.status, ticket, event).await
    }

    /// Runs an action on its own task, the way a button handler would
    pub fn dispatch(&self, action: Action) -> JoinHandle<Result<(), ActionError>> {
        let storefront = self.clone();
        tokio::spawn(async move {
            match action {
                Action::Mount => storefront.mount().await,
                Action::CreateOrder => storefront.create_order().await,
                Action::CheckOrderStatus => storefront.check_order_status().await,
            }
        })
    }

    /// Ends the component's lifetime; in-flight requests are abandoned
    pub fn unmount(&self) {
        debug!("Storefront unmounted");
        self.inner.lifetime.cancel();
    }

    pub fn is_visible(&self) -> bool {
        !self.inner.lifetime.is_cancelled()
    }

    pub async fn snapshot(&self) -> ViewState {
        self.inner.state.read().await.clone()
    }

    pub async fn screen(&self) -> Screen {
        render(&*self.inner.state.read().await)
    }

    fn ensure_visible(&self) -> Result<(), ActionError> {
        if self.is_visible() {
            Ok(())
        } else {
            Err(ActionError::Unmounted)
        }
    }

    async fn request<T, F>(&self, call: F) -> Result<Result<T, FetchError>, ActionError>
    where
        F: Future<Output = Result<T, FetchError>>,
    {
        tokio::select! {
            biased;
            _ = self.inner.lifetime.cancelled() => Err(ActionError::Unmounted),
            result = call => Ok(result),
        }
    }

    async fn commit(&self, slot: &AtomicU64, ticket: u64, event: ViewEvent) -> Result<(), ActionError> {
        let mut state = self.inner.state.write().await;

        self.ensure_visible()?;
        if slot.load(Ordering::SeqCst) != ticket || event.is_stale_for(&state) {
            debug!("Dropping stale completion: {:?}", event);
            return Err(ActionError::Superseded);
        }

        let failure = event.error().cloned();
        if let Some(error) = &failure {
            warn!("Storefront request failed ({}): {}", error.kind(), error);
        }
        reducer::reduce(&mut state, event);

        match failure {
            Some(error) => Err(error.into()),
            None => Ok(()),
        }
    }
}
