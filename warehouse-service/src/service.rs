//! The in-process job queue: replaces the source's module-global
//! `asyncio.Queue` with a `PackingService` value that owns its queue and
//! its collaborator handles, constructed once at startup and moved into the
//! single consumer task.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, Mutex};
use tokio::task::JoinHandle;

use warehouse_engine::{assign_picking_order, build_items, pack_order, presort_items, OrderLine};
use warehouse_primitives::{PalletSpec, SolverLimits, SolverWeights};

use crate::artifact::ArtifactWriter;
use crate::collaborators::{InventoryIndex, OrderLineFixture, OrderSource, OrderStatus};
use crate::error::{Result, ServiceError};

/// Owns the order-id queue, the collaborator handles, and the solver
/// configuration for one process. Only one [`PackingService::spawn_consumer`]
/// call is expected per instance — jobs are processed strictly FIFO, one
/// engine call at a time.
pub struct PackingService {
    sender: mpsc::UnboundedSender<u64>,
    receiver: Mutex<Option<mpsc::UnboundedReceiver<u64>>>,
    order_source: Arc<dyn OrderSource>,
    inventory: Arc<dyn InventoryIndex>,
    pallet: PalletSpec,
    weights: SolverWeights,
    limits: SolverLimits,
    artifacts: ArtifactWriter,
    /// Completion channels for callers that asked to be told how a
    /// specific job turned out, keyed by order number. Populated by
    /// [`PackingService::wait_for`], drained by [`PackingService::run_job`].
    completions: Mutex<HashMap<u64, oneshot::Sender<std::result::Result<(), String>>>>,
}

impl PackingService {
    pub fn new(
        order_source: Arc<dyn OrderSource>,
        inventory: Arc<dyn InventoryIndex>,
        pallet: PalletSpec,
        weights: SolverWeights,
        limits: SolverLimits,
        artifacts: ArtifactWriter,
    ) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        PackingService {
            sender,
            receiver: Mutex::new(Some(receiver)),
            order_source,
            inventory,
            pallet,
            weights,
            limits,
            artifacts,
            completions: Mutex::new(HashMap::new()),
        }
    }

    /// Enqueues an order id for packing. Acknowledgement is synchronous;
    /// processing happens asynchronously on the consumer task.
    pub fn enqueue(&self, order_number: u64) {
        if self.sender.send(order_number).is_err() {
            log::error!("queue receiver already dropped, order {order_number} not enqueued");
        } else {
            log::info!("queued order {order_number} for packing");
        }
    }

    /// Registers interest in one job's eventual outcome and returns a
    /// receiver that resolves once [`PackingService::run_job`] finishes
    /// processing `order_number`, successfully or not. Lets a caller that
    /// enqueues a job learn about a failure directly instead of polling the
    /// order's status forever when a job never reaches `Ready`.
    pub async fn wait_for(&self, order_number: u64) -> oneshot::Receiver<std::result::Result<(), String>> {
        let (tx, rx) = oneshot::channel();
        self.completions.lock().await.insert(order_number, tx);
        rx
    }

    /// Starts the single long-running consumer task. Panics if called more
    /// than once on the same service (the receiver can only be taken once).
    pub fn spawn_consumer(self: &Arc<Self>) -> JoinHandle<()> {
        let service = Arc::clone(self);
        tokio::spawn(async move {
            let mut receiver = service
                .receiver
                .lock()
                .await
                .take()
                .expect("spawn_consumer called more than once on the same PackingService");

            while let Some(order_number) = receiver.recv().await {
                if let Err(err) = service.run_job(order_number).await {
                    log::error!("job for order {order_number} failed: {err}");
                }
            }
        })
    }

    /// Runs one job's lifecycle: load order, build items, run the engine
    /// off the async executor, write the artifact, report status. Failures
    /// are logged by the caller loop and never retried. Whatever the
    /// outcome, any waiter registered via [`PackingService::wait_for`] for
    /// this order is resolved before returning.
    pub async fn run_job(&self, order_number: u64) -> Result<()> {
        let result = self.run_job_inner(order_number).await;

        if let Some(tx) = self.completions.lock().await.remove(&order_number) {
            let outcome = result.as_ref().map(|_| ()).map_err(|err| err.to_string());
            let _ = tx.send(outcome);
        }

        result
    }

    async fn run_job_inner(&self, order_number: u64) -> Result<()> {
        let order = self.order_source.fetch_new_order(order_number)?;
        if order.status != OrderStatus::New {
            return Err(ServiceError::WrongStatus(order_number));
        }

        let lines: Vec<OrderLine> = order
            .lines
            .iter()
            .map(|line: &OrderLineFixture| OrderLine {
                sku: line.sku.clone(),
                name: line.name.clone(),
                w: line.w,
                d: line.d,
                h: line.h,
                weight: line.weight,
                is_fragile: line.is_fragile,
                allow_tipping: line.allow_tipping,
                quantity: line.quantity,
                location: self.inventory.locate(&line.sku),
            })
            .collect();

        let mut items = build_items(&lines);
        if items.is_empty() {
            return Err(ServiceError::EmptyInput(order_number));
        }
        assign_picking_order(&mut items);
        presort_items(&mut items);

        let pallet = self.pallet;
        let weights = self.weights;
        let limits = self.limits;
        let pallets = tokio::task::spawn_blocking(move || pack_order(items, &pallet, &weights, &limits))
            .await
            .expect("packing worker task panicked")?;

        self.artifacts.write(order_number, &pallets)?;
        self.order_source.mark_ready(order_number)?;

        log::info!(
            "order {order_number} packed onto {} pallet(s)",
            pallets.len()
        );
        Ok(())
    }
}
