//! Destination columns derived from a shipment's receiver address.

use crate::entity::ReceiverAddress;

/// Label for deliveries picked up at a carrier agency.
pub const AGENCY_LABEL: &str = "Agencia";

/// Label for deliveries to a street address.
pub const HOME_LABEL: &str = "Domicilio";

/// The destination kind label of an address.
pub fn destination_label(address: &ReceiverAddress) -> &'static str {
    match address {
        ReceiverAddress::Agency { .. } => AGENCY_LABEL,
        ReceiverAddress::Individual { .. } => HOME_LABEL,
    }
}

/// The printable destination of an address.
///
/// Agencies render as `"{agency_id} {carrier_id}"`, street addresses as
/// `"{address_line} {city} {zip_code}"`. Missing parts are empty strings and
/// the separating spaces are kept.
pub fn destination_address(address: &ReceiverAddress) -> String {
    let parts: Vec<&str> = match address {
        ReceiverAddress::Agency {
            agency_id,
            carrier_id,
        } => vec![text(agency_id), text(carrier_id)],
        ReceiverAddress::Individual {
            address_line,
            city_name,
            zip_code,
        } => vec![text(address_line), text(city_name), text(zip_code)],
    };
    parts.join(" ")
}

fn text(part: &Option<String>) -> &str {
    part.as_deref().unwrap_or_default()
}
