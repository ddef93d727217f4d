//! The job queue, per-job pipeline, and JSON artifact writer around the
//! pallet-packing engine. Order storage, authentication, and HTTP transport
//! are explicit non-goals: this crate only defines the collaborator traits
//! at that boundary, plus in-memory fixtures for tests and the CLI demo.

mod artifact;
mod collaborators;
mod error;
mod service;

pub use artifact::ArtifactWriter;
pub use collaborators::{
    InMemoryInventoryIndex, InMemoryOrderSource, InventoryIndex, OrderFixture, OrderLineFixture,
    OrderSource, OrderStatus,
};
pub use error::{Result, ServiceError};
pub use service::PackingService;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use warehouse_primitives::{PalletSpec, SolverLimits, SolverWeights};

    use super::*;

    fn seeded_service(dir: &std::path::Path) -> (Arc<PackingService>, Arc<InMemoryOrderSource>) {
        let orders = Arc::new(InMemoryOrderSource::new());
        let inventory = Arc::new(InMemoryInventoryIndex::new());
        inventory.seed("WIDGET", "A-01-01");

        orders.seed(OrderFixture {
            order_number: 7,
            status: OrderStatus::New,
            lines: vec![OrderLineFixture {
                sku: "WIDGET".into(),
                name: "Widget".into(),
                w: 40,
                d: 30,
                h: 30,
                weight: 3.5,
                is_fragile: false,
                allow_tipping: true,
                quantity: 2,
            }],
        });

        let service = Arc::new(PackingService::new(
            orders.clone() as Arc<dyn OrderSource>,
            inventory as Arc<dyn InventoryIndex>,
            PalletSpec::default(),
            SolverWeights::default(),
            SolverLimits::default(),
            ArtifactWriter::new(dir),
        ));

        (service, orders)
    }

    #[tokio::test]
    async fn run_job_packs_writes_artifact_and_marks_ready() {
        let dir = tempfile::tempdir().unwrap();
        let (service, orders) = seeded_service(dir.path());

        service.run_job(7).await.expect("job succeeds");

        let order = orders.fetch_new_order(7).expect("order still present");
        assert_eq!(order.status, OrderStatus::Ready);

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1, "exactly one artifact written");
    }

    #[tokio::test]
    async fn run_job_rejects_an_order_not_in_new_status() {
        let dir = tempfile::tempdir().unwrap();
        let (service, _orders) = seeded_service(dir.path());

        service.run_job(7).await.expect("first run succeeds");
        let second = service.run_job(7).await;
        assert!(matches!(second, Err(ServiceError::WrongStatus(7))));
    }

    #[tokio::test]
    async fn enqueue_and_consumer_process_a_job_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let (service, orders) = seeded_service(dir.path());

        let handle = service.spawn_consumer();
        service.enqueue(7);

        for _ in 0..50 {
            if orders.fetch_new_order(7).unwrap().status == OrderStatus::Ready {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        }

        assert_eq!(orders.fetch_new_order(7).unwrap().status, OrderStatus::Ready);
        handle.abort();
    }
}
