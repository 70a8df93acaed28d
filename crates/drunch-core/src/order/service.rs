//! Order placement: the `Submitting` leg of the checkout flow.
//!
//! Validates customer details, snapshots the session's cart into an
//! [`Order`] with the total computed at the moment of submission, makes
//! exactly one insert attempt against the order sink, and clears the cart
//! (persisting the empty snapshot) only on confirmed success.
//!
//! The error surface is flat: any sink failure collapses to
//! [`OrderError::SubmissionFailed`], and the cart is left untouched so the
//! user can retry. There is no timeout or backoff around the single insert
//! attempt -- a hung store leaves the caller waiting.
//!
//! At most one submission may be in flight per session: a second
//! [`OrderService::place_order`] while the first is still running is
//! rejected with [`OrderError::SubmissionInFlight`] and changes nothing,
//! mirroring the gate [`crate::cart::checkout::CheckoutFlow::begin_submit`]
//! applies to the client-side flow.

use dashmap::DashSet;
use drunch_types::error::OrderError;
use drunch_types::order::{CustomerDetails, Order};
use tracing::{info, warn};
use uuid::Uuid;

use crate::cart::service::CartService;
use crate::repository::order::OrderRepository;
use crate::storage::kv_store::KvStore;

/// Drives checkout submissions against the real order sink and cart store.
///
/// Generic over both ports to keep the pipeline testable with in-memory
/// fakes (drunch-core never depends on drunch-infra).
pub struct OrderService<O: OrderRepository, K: KvStore> {
    orders: O,
    carts: CartService<K>,
    in_flight: DashSet<Uuid>,
}

/// Occupies a session's submission slot; dropping releases it, so every
/// exit path out of `place_order` frees the session for the next submit.
struct InFlightSlot<'a> {
    sessions: &'a DashSet<Uuid>,
    session_id: Uuid,
}

impl Drop for InFlightSlot<'_> {
    fn drop(&mut self) {
        self.sessions.remove(&self.session_id);
    }
}

impl<O: OrderRepository, K: KvStore> OrderService<O, K> {
    pub fn new(orders: O, carts: CartService<K>) -> Self {
        Self {
            orders,
            carts,
            in_flight: DashSet::new(),
        }
    }

    pub fn orders(&self) -> &O {
        &self.orders
    }

    /// Place an order for the session's current cart.
    ///
    /// An empty cart is permitted but meaningless -- the review UI guards
    /// against it; the pipeline does not.
    pub async fn place_order(
        &self,
        session_id: &Uuid,
        details: &CustomerDetails,
    ) -> Result<Order, OrderError> {
        // The in-flight gate comes before validation, matching the state
        // machine where Submitting beats everything else.
        if !self.in_flight.insert(*session_id) {
            return Err(OrderError::SubmissionInFlight);
        }
        let _slot = InFlightSlot {
            sessions: &self.in_flight,
            session_id: *session_id,
        };

        details.validate()?;

        let cart = self.carts.load(session_id).await;
        let order = Order::new(details, cart.lines().to_vec(), cart.total_price());

        if let Err(e) = self.orders.insert(&order).await {
            warn!(session_id = %session_id, error = %e, "order insert failed");
            return Err(OrderError::SubmissionFailed);
        }

        // Local state is cleared only after the sink confirmed the write.
        // A failure here leaves a stale cart behind but the order stands.
        if let Err(e) = self.carts.clear(session_id).await {
            warn!(session_id = %session_id, order_id = %order.id, error = %e, "cart clear after checkout failed");
        }

        info!(
            order_id = %order.id,
            items = order.items.len(),
            total = %order.total_amount,
            "order placed"
        );
        Ok(order)
    }
}
