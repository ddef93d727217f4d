//! Seeds a small in-memory order and inventory so `run` has something to
//! pack. Stands in for the FastAPI process's manual-trigger endpoint,
//! which would normally read this from the orders/inventory tables.

use warehouse_service::{
    InMemoryInventoryIndex, InMemoryOrderSource, OrderFixture, OrderLineFixture, OrderStatus,
};

/// Seeds one demo order: a mix of stackable boxes, an upright-only item,
/// and a fragile item, spread across three pick locations.
pub fn seed(orders: &InMemoryOrderSource, inventory: &InMemoryInventoryIndex, order_number: u64) {
    inventory.seed("CRATE-STD", "A-01-01");
    inventory.seed("TOWER-TALL", "A-02-03");
    inventory.seed("VASE-FRAGILE", "B-01-02");

    orders.seed(OrderFixture {
        order_number,
        status: OrderStatus::New,
        lines: vec![
            OrderLineFixture {
                sku: "CRATE-STD".into(),
                name: "Standard crate".into(),
                w: 40,
                d: 40,
                h: 30,
                weight: 8.0,
                is_fragile: false,
                allow_tipping: true,
                quantity: 6,
            },
            OrderLineFixture {
                sku: "TOWER-TALL".into(),
                name: "Tall tower box".into(),
                w: 15,
                d: 15,
                h: 70,
                weight: 4.0,
                is_fragile: false,
                allow_tipping: false,
                quantity: 2,
            },
            OrderLineFixture {
                sku: "VASE-FRAGILE".into(),
                name: "Fragile vase".into(),
                w: 20,
                d: 20,
                h: 25,
                weight: 1.5,
                is_fragile: true,
                allow_tipping: true,
                quantity: 3,
            },
        ],
    });
}
