//! Demo entry point for the pallet-packing pipeline: seeds an in-memory
//! order/inventory fixture, runs one job through [`PackingService`]
//! end-to-end, and writes the resulting JSON artifact. Stands in for the
//! FastAPI process's manual-trigger endpoint without implementing HTTP
//! transport or order persistence.

mod fixtures;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use warehouse_primitives::{PalletSpec, SolverLimits, SolverWeights};
use warehouse_service::{
    ArtifactWriter, InMemoryInventoryIndex, InMemoryOrderSource, InventoryIndex, OrderSource,
    PackingService,
};

#[derive(Parser)]
#[command(name = "warehouse-cli", version, about = "Pallet-packing engine demo runner")]
struct Cli {
    /// Raise the log level (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Seed a demo order and pack it onto one or more pallets.
    Run {
        /// Order number to pack.
        #[arg(long, default_value_t = 1)]
        order_number: u64,

        /// Directory the JSON artifact is written into.
        #[arg(long, default_value = "pallet-json")]
        artifact_dir: PathBuf,

        /// Pallet footprint width, centimeters.
        #[arg(long, default_value_t = PalletSpec::default().w)]
        pallet_w: u32,

        /// Pallet footprint depth, centimeters.
        #[arg(long, default_value_t = PalletSpec::default().d)]
        pallet_d: u32,

        /// Pallet stacking height, centimeters.
        #[arg(long, default_value_t = PalletSpec::default().h)]
        pallet_h: u32,

        /// Wall-clock budget per pallet solve, in seconds.
        #[arg(long, default_value_t = SolverLimits::default().timeout_secs)]
        timeout_secs: f64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).init();

    match cli.command {
        Command::Run {
            order_number,
            artifact_dir,
            pallet_w,
            pallet_d,
            pallet_h,
            timeout_secs,
        } => run(order_number, artifact_dir, pallet_w, pallet_d, pallet_h, timeout_secs).await,
    }
}

async fn run(
    order_number: u64,
    artifact_dir: PathBuf,
    pallet_w: u32,
    pallet_d: u32,
    pallet_h: u32,
    timeout_secs: f64,
) -> anyhow::Result<()> {
    let orders = Arc::new(InMemoryOrderSource::new());
    let inventory = Arc::new(InMemoryInventoryIndex::new());
    fixtures::seed(&orders, &inventory, order_number);

    let pallet = PalletSpec::new(pallet_w, pallet_d, pallet_h)?;
    let mut limits = SolverLimits::default();
    limits.timeout_secs = timeout_secs;

    let service = Arc::new(PackingService::new(
        orders.clone() as Arc<dyn OrderSource>,
        inventory as Arc<dyn InventoryIndex>,
        pallet,
        SolverWeights::default(),
        limits,
        ArtifactWriter::new(&artifact_dir),
    ));

    let consumer = service.spawn_consumer();
    let completion = service.wait_for(order_number).await;
    service.enqueue(order_number);

    // This demo has no second producer competing for the consumer: wait for
    // this one job's own completion signal, success or failure, rather than
    // polling the order's status forever (a job that never reaches `Ready`
    // would otherwise hang the CLI with no feedback).
    let outcome = completion.await;
    consumer.abort();
    match outcome {
        Ok(Ok(())) => {}
        Ok(Err(reason)) => {
            anyhow::bail!("packing job for order {order_number} failed: {reason}");
        }
        Err(_) => {
            anyhow::bail!("packing job for order {order_number} was dropped before completing");
        }
    }

    println!(
        "order {order_number} packed; artifact written under {}",
        artifact_dir.display()
    );
    Ok(())
}
