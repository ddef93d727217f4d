//! Collaborator-boundary traits and in-memory fixtures: stand-ins for the
//! orders/order-lines/products/inventory tables. No SQL, no HTTP —
//! persistence itself is an explicit non-goal.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{Result, ServiceError};

/// One order line: a product's physical attributes plus quantity ordered.
#[derive(Debug, Clone)]
pub struct OrderLineFixture {
    pub sku: String,
    pub name: String,
    pub w: u32,
    pub d: u32,
    pub h: u32,
    pub weight: f64,
    pub is_fragile: bool,
    pub allow_tipping: bool,
    pub quantity: u32,
}

/// Order status: a trigger only acts on orders still in `New`, and marks
/// them `Ready` once packing succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    New,
    Ready,
}

#[derive(Debug, Clone)]
pub struct OrderFixture {
    pub order_number: u64,
    pub status: OrderStatus,
    pub lines: Vec<OrderLineFixture>,
}

/// Loads an order and reports its outcome back. Stands in for the
/// orders/order-lines/products tables.
pub trait OrderSource: Send + Sync {
    fn fetch_new_order(&self, order_number: u64) -> Result<OrderFixture>;
    fn mark_ready(&self, order_number: u64) -> Result<()>;
}

/// Resolves a product SKU to its warehouse location. Stands in for the
/// inventory table the input builder reads when resolving each order line's
/// pick location.
pub trait InventoryIndex: Send + Sync {
    fn locate(&self, sku: &str) -> Option<String>;
}

/// In-memory [`OrderSource`] used by tests and the CLI fixture. A
/// SQL-backed implementation is explicitly out of scope.
#[derive(Default)]
pub struct InMemoryOrderSource {
    orders: Mutex<HashMap<u64, OrderFixture>>,
}

impl InMemoryOrderSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an order, in `NEW` status.
    pub fn seed(&self, order: OrderFixture) {
        self.orders
            .lock()
            .expect("order fixture lock poisoned")
            .insert(order.order_number, order);
    }
}

impl OrderSource for InMemoryOrderSource {
    fn fetch_new_order(&self, order_number: u64) -> Result<OrderFixture> {
        self.orders
            .lock()
            .expect("order fixture lock poisoned")
            .get(&order_number)
            .cloned()
            .ok_or(ServiceError::OrderNotFound(order_number))
    }

    fn mark_ready(&self, order_number: u64) -> Result<()> {
        let mut orders = self.orders.lock().expect("order fixture lock poisoned");
        let order = orders
            .get_mut(&order_number)
            .ok_or(ServiceError::OrderNotFound(order_number))?;
        order.status = OrderStatus::Ready;
        Ok(())
    }
}

/// In-memory [`InventoryIndex`] used by tests and the CLI fixture.
#[derive(Default)]
pub struct InMemoryInventoryIndex {
    locations: Mutex<HashMap<String, String>>,
}

impl InMemoryInventoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, sku: impl Into<String>, location: impl Into<String>) {
        self.locations
            .lock()
            .expect("inventory fixture lock poisoned")
            .insert(sku.into(), location.into());
    }
}

impl InventoryIndex for InMemoryInventoryIndex {
    fn locate(&self, sku: &str) -> Option<String> {
        self.locations
            .lock()
            .expect("inventory fixture lock poisoned")
            .get(sku)
            .cloned()
    }
}
