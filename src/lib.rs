//! # Order Export Library
//!
//! This library fetches orders and shipments from a remote entity store,
//! joins them into flat rows and writes those rows to a delimited file. It
//! is designed to be used by the `order-export` command-line tool but the
//! stages can also be driven individually.
//!
//! ## Quick Example
//!
//! ```
//! use order_export::entity::{Order, Shipment};
//! use order_export::merge::RecordMerger;
//!
//! let order: Order = serde_json::from_str(r#"{
//!     "id": 1001,
//!     "order_items": [{"item": {"id": "A", "variation_attributes": [{"name": "Color", "value_name": "Red"}]}}]
//! }"#).unwrap();
//! let shipment: Shipment = serde_json::from_str(r#"{
//!     "order_id": 1001,
//!     "status": "shipped",
//!     "receiver_address": {"address_line": "Main St", "city": {"name": "Springfield"}, "zip_code": "00000"}
//! }"#).unwrap();
//!
//! let rows = RecordMerger::new().merge(&[order], &[shipment]);
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].description, "Color: Red");
//! assert_eq!(rows[0].destination_kind.as_deref(), Some("Domicilio"));
//! assert_eq!(rows[0].destination_address.as_deref(), Some("Main St Springfield 00000"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Entities (`entity`)**: typed orders and shipments, including the
//!   agency/individual receiver address.
//! - **Store (`store`)**: the `EntityStore` trait and its HTTP implementation.
//! - **Fetching (`fetcher`)**: one timed, identity-checked read per entity.
//! - **Collection (`collector`)**: a bounded worker pool that runs a fetch
//!   function over many ids.
//! - **Merging (`merge`)**: the order/shipment join and flattening into
//!   `MergedRow`s.
//! - **Writing (`writer`)**: the write-once delimited table.
//!
//! ## Execution Flow
//!
//! The main entry point is `pipeline::run`, which executes:
//!
//! 1.  **Guard**: stop if the output file already exists.
//! 2.  **Fetch**: collect orders and shipments for every id concurrently.
//! 3.  **Merge**: join shipments onto order items by order id.
//! 4.  **Write**: persist the rows, or report that there was nothing to write.

pub mod collector;
pub mod config;
pub mod defaults;
pub mod entity;
pub mod error;
pub mod fetcher;
pub mod merge;
pub mod output;
pub mod pipeline;
pub mod store;
pub mod writer;

#[cfg(test)]
mod merge_proptest;
