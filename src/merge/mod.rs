//! # Record Merging
//!
//! This module joins fetched orders with their shipments and flattens the
//! result into fixed-schema [`MergedRow`]s, one per order item.
//!
//! ## Join Semantics
//!
//! - The join key is the order id. A shipment matches the order whose id
//!   equals the shipment's `order_id`.
//! - When several shipments share an id, the first one in the input wins.
//! - An order without a shipment still yields its rows; the shipment columns
//!   are left empty.
//! - Rows come out in order-then-item traversal of the `orders` input, so the
//!   output does not depend on the order in which shipments arrived.
//!
//! ## Flattening
//!
//! - `description` ([`description`]): variation attributes rendered as
//!   `"{name}: {value}"`.
//! - `destination_kind` / `destination_address` ([`destination`]): derived
//!   from the receiver address variant.

pub mod description;
pub mod destination;

use std::collections::HashMap;

use log::info;
use serde::Serialize;

use crate::entity::{Order, Shipment};

pub use description::build_description;
pub use destination::{destination_address, destination_label, AGENCY_LABEL, HOME_LABEL};

/// One output row: an order item with the data of its shipment.
///
/// Field names serialize to the column headers of the exported table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergedRow {
    #[serde(rename = "ID Order")]
    pub order_id: u64,
    #[serde(rename = "ID Item")]
    pub item_id: String,
    #[serde(rename = "Descripcion producto")]
    pub description: String,
    #[serde(rename = "ID Envio")]
    pub shipment_id: Option<u64>,
    #[serde(rename = "Estado")]
    pub status: Option<String>,
    #[serde(rename = "Subestado")]
    pub substatus: Option<String>,
    #[serde(rename = "Tipo de logistica")]
    pub logistic_type: Option<String>,
    #[serde(rename = "Destino del envio")]
    pub destination_kind: Option<String>,
    #[serde(rename = "Direccion Receptor")]
    pub destination_address: Option<String>,
}

/// Column headers of [`MergedRow`], in output order.
pub const COLUMNS: [&str; 9] = [
    "ID Order",
    "ID Item",
    "Descripcion producto",
    "ID Envio",
    "Estado",
    "Subestado",
    "Tipo de logistica",
    "Destino del envio",
    "Direccion Receptor",
];

/// Joins orders with shipments into [`MergedRow`]s.
#[derive(Debug, Clone, Default)]
pub struct RecordMerger {
    separator: String,
}

impl RecordMerger {
    /// A merger that concatenates description pairs with no separator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `separator` between `"{name}: {value}"` pairs in descriptions.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Produces one row per item of every order.
    pub fn merge(&self, orders: &[Order], shipments: &[Shipment]) -> Vec<MergedRow> {
        info!(
            "Merging {} orders with {} shipments",
            orders.len(),
            shipments.len()
        );

        let mut by_order: HashMap<u64, &Shipment> = HashMap::with_capacity(shipments.len());
        for shipment in shipments {
            by_order.entry(shipment.order_id).or_insert(shipment);
        }

        orders
            .iter()
            .flat_map(|order| {
                let shipment = by_order.get(&order.id).copied();
                order
                    .order_items
                    .iter()
                    .map(move |item| MergedRow {
                        order_id: order.id,
                        item_id: item.id.clone(),
                        description: build_description(&item.variation_attributes, &self.separator),
                        shipment_id: shipment.map(|s| s.order_id),
                        status: shipment.and_then(|s| s.status.clone()),
                        substatus: shipment.and_then(|s| s.substatus.clone()),
                        logistic_type: shipment.and_then(|s| s.logistic_type.clone()),
                        destination_kind: shipment
                            .map(|s| destination_label(&s.receiver_address).to_string()),
                        destination_address: shipment
                            .map(|s| destination_address(&s.receiver_address)),
                    })
            })
            .collect()
    }
}
