//! Orchestrator for a complete export run
//!
//! This module coordinates the fetch, merge and write stages:
//! 1. Refuse to start if the output file already exists
//! 2. Fetch orders and shipments for every id, both batches concurrently
//! 3. Merge them into flat rows
//! 4. Write the rows to the output file

use std::time::{Duration, Instant};

use log::info;

use crate::collector::ConcurrentCollector;
use crate::config::RunConfig;
use crate::entity::{Order, Shipment};
use crate::error::{Error, Result};
use crate::fetcher::EntityFetcher;
use crate::merge::RecordMerger;
use crate::store::EntityStore;
use crate::writer::{TableWriter, WriteOutcome};

/// What a run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub requested: usize,
    pub orders: usize,
    pub shipments: usize,
    pub rows: usize,
    pub outcome: WriteOutcome,
    pub elapsed: Duration,
}

/// Execute a complete export run against `store`.
pub fn run(config: &RunConfig, store: &dyn EntityStore) -> Result<RunSummary> {
    run_with_progress(config, store, &|| {})
}

/// Like [`run`], calling `on_fetch` once after every completed fetch.
///
/// There are two fetches per order id, one per entity kind.
pub fn run_with_progress(
    config: &RunConfig,
    store: &dyn EntityStore,
    on_fetch: &(dyn Fn() + Sync),
) -> Result<RunSummary> {
    let start = Instant::now();

    if config.output.exists() {
        return Err(Error::OutputCollision {
            path: config.output.clone(),
        });
    }

    let collector = ConcurrentCollector::new(config.workers)?;
    let fetcher = EntityFetcher::new(store);
    let ids = &config.order_ids;

    info!(
        "Getting {} orders and shipments on {} workers",
        ids.len(),
        collector.workers()
    );
    let (orders, shipments): (Vec<Order>, Vec<Shipment>) = collector.join(
        || {
            collector.collect_all(ids, |id| {
                let order = fetcher.fetch(id);
                on_fetch();
                order
            })
        },
        || {
            collector.collect_all(ids, |id| {
                let shipment = fetcher.fetch(id);
                on_fetch();
                shipment
            })
        },
    );

    let rows = RecordMerger::new()
        .with_separator(config.description_separator.as_str())
        .merge(&orders, &shipments);

    let outcome = TableWriter::new()
        .with_delimiter(config.delimiter)
        .write(&rows, &config.output)?;

    info!("Done");
    Ok(RunSummary {
        requested: ids.len(),
        orders: orders.len(),
        shipments: shipments.len(),
        rows: rows.len(),
        outcome,
        elapsed: start.elapsed(),
    })
}
