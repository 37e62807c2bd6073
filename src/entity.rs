//! # Entity Model
//!
//! Typed representations of the two record kinds served by the remote
//! entity store, and the glue that maps raw JSON documents onto them.
//!
//! ## Document Shapes
//!
//! An order document looks like:
//!
//! ```json
//! {
//!   "id": 1001,
//!   "order_items": [
//!     { "item": { "id": "A", "variation_attributes": [ { "name": "Color", "value_name": "Red" } ] } }
//!   ]
//! }
//! ```
//!
//! A shipment document is keyed by the order that owns it:
//!
//! ```json
//! {
//!   "order_id": 1001,
//!   "status": "shipped",
//!   "receiver_address": { "address_line": "Main St", "city": { "name": "Springfield" }, "zip_code": "00000" }
//! }
//! ```
//!
//! The receiver address is polymorphic. When `agency` is present and holds
//! data, the address is an [`ReceiverAddress::Agency`]; otherwise it is an
//! [`ReceiverAddress::Individual`]. The decision is taken once, during
//! deserialization.

use std::fmt;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// The collections exposed by the remote entity store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Order,
    Shipment,
}

impl EntityKind {
    /// Path segment of the collection, as in `{base_url}/{path}/{id}`.
    pub fn path(self) -> &'static str {
        match self {
            EntityKind::Order => "orders",
            EntityKind::Shipment => "shipments",
        }
    }

    /// Name of the response field that must echo the requested id.
    ///
    /// Shipments are addressed by the id of the order that owns them, so
    /// their identity field is `order_id` rather than `id`.
    pub fn identity_field(self) -> &'static str {
        match self {
            EntityKind::Order => "id",
            EntityKind::Shipment => "order_id",
        }
    }

    /// Reads the identity field of a raw document.
    ///
    /// Returns `None` when the field is absent or is not an unsigned integer.
    pub fn identity_of(self, document: &Value) -> Option<u64> {
        document.get(self.identity_field()).and_then(Value::as_u64)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Order => write!(f, "order"),
            EntityKind::Shipment => write!(f, "shipment"),
        }
    }
}

/// A record that can be fetched from the entity store.
pub trait Entity: DeserializeOwned + Send {
    /// The collection this entity lives in.
    const KIND: EntityKind;

    /// The value of the entity's identity field.
    fn identity(&self) -> u64;
}

/// An order and its line items.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Order {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub order_items: Vec<OrderItem>,
}

impl Entity for Order {
    const KIND: EntityKind = EntityKind::Order;

    fn identity(&self) -> u64 {
        self.id
    }
}

/// A single line item of an order.
///
/// On the wire each line wraps its data in an `item` object; that wrapper is
/// removed here. A missing item id becomes the empty string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "OrderLine")]
pub struct OrderItem {
    pub id: String,
    pub variation_attributes: Vec<VariationAttribute>,
}

/// A name/value pair describing a product variation (e.g. `Color: Red`).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct VariationAttribute {
    #[serde(default, deserialize_with = "text_or_number")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub value_name: Option<String>,
}

/// A shipment, identified by the order it belongs to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Shipment {
    pub order_id: u64,
    #[serde(default, deserialize_with = "text_or_number")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub substatus: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub logistic_type: Option<String>,
    #[serde(default)]
    pub receiver_address: ReceiverAddress,
}

impl Entity for Shipment {
    const KIND: EntityKind = EntityKind::Shipment;

    fn identity(&self) -> u64 {
        self.order_id
    }
}

/// Where a shipment is delivered.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Option<RawAddress>")]
pub enum ReceiverAddress {
    /// Pick-up at a carrier agency.
    Agency {
        agency_id: Option<String>,
        carrier_id: Option<String>,
    },
    /// Delivery to a street address.
    Individual {
        address_line: Option<String>,
        city_name: Option<String>,
        zip_code: Option<String>,
    },
}

impl ReceiverAddress {
    pub fn is_agency(&self) -> bool {
        matches!(self, ReceiverAddress::Agency { .. })
    }
}

impl Default for ReceiverAddress {
    fn default() -> Self {
        ReceiverAddress::Individual {
            address_line: None,
            city_name: None,
            zip_code: None,
        }
    }
}

#[derive(Deserialize)]
struct OrderLine {
    #[serde(default)]
    item: Option<ItemBody>,
}

#[derive(Deserialize, Default)]
struct ItemBody {
    #[serde(default, deserialize_with = "text_or_number")]
    id: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    variation_attributes: Vec<VariationAttribute>,
}

impl From<OrderLine> for OrderItem {
    fn from(line: OrderLine) -> Self {
        let body = line.item.unwrap_or_default();
        OrderItem {
            id: body.id.unwrap_or_default(),
            variation_attributes: body.variation_attributes,
        }
    }
}

#[derive(Deserialize)]
struct RawAddress {
    #[serde(default)]
    agency: Option<Value>,
    #[serde(default, deserialize_with = "text_or_number")]
    address_line: Option<String>,
    #[serde(default)]
    city: Option<RawCity>,
    #[serde(default, deserialize_with = "text_or_number")]
    zip_code: Option<String>,
}

#[derive(Deserialize)]
struct RawCity {
    #[serde(default, deserialize_with = "text_or_number")]
    name: Option<String>,
}

impl From<Option<RawAddress>> for ReceiverAddress {
    fn from(raw: Option<RawAddress>) -> Self {
        let Some(raw) = raw else {
            return ReceiverAddress::default();
        };

        match raw.agency {
            Some(Value::Object(agency)) if !agency.is_empty() => ReceiverAddress::Agency {
                agency_id: agency.get("agency_id").and_then(value_text),
                carrier_id: agency.get("carrier_id").and_then(value_text),
            },
            _ => ReceiverAddress::Individual {
                address_line: raw.address_line,
                city_name: raw.city.and_then(|c| c.name),
                zip_code: raw.zip_code,
            },
        }
    }
}

/// Renders a scalar JSON value as text. Identifiers in the store are
/// sometimes strings and sometimes numbers.
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn text_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value_text(&value)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("expected a string or number, got {value}"))),
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
