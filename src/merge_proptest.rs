//! Property-based tests for the record merger.
//!
//! These tests use proptest to generate random order/shipment sets and
//! verify that the join invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::entity::{Order, OrderItem, ReceiverAddress, Shipment, VariationAttribute};
    use crate::merge::RecordMerger;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn attribute() -> impl Strategy<Value = VariationAttribute> {
        (
            proptest::option::of("[A-Za-z]{1,8}"),
            proptest::option::of("[A-Za-z0-9 ]{0,8}"),
        )
            .prop_map(|(name, value_name)| VariationAttribute { name, value_name })
    }

    fn item() -> impl Strategy<Value = OrderItem> {
        ("[A-Z0-9]{1,6}", prop::collection::vec(attribute(), 0..4)).prop_map(
            |(id, variation_attributes)| OrderItem {
                id,
                variation_attributes,
            },
        )
    }

    fn order() -> impl Strategy<Value = Order> {
        (1u64..50, prop::collection::vec(item(), 0..5))
            .prop_map(|(id, order_items)| Order { id, order_items })
    }

    fn address() -> impl Strategy<Value = ReceiverAddress> {
        prop_oneof![
            (
                proptest::option::of("[A-Z0-9]{1,5}"),
                proptest::option::of("[0-9]{1,3}")
            )
                .prop_map(|(agency_id, carrier_id)| ReceiverAddress::Agency {
                    agency_id,
                    carrier_id
                }),
            (
                proptest::option::of("[A-Za-z ]{1,10}"),
                proptest::option::of("[A-Za-z]{1,8}"),
                proptest::option::of("[0-9]{4,5}")
            )
                .prop_map(|(address_line, city_name, zip_code)| {
                    ReceiverAddress::Individual {
                        address_line,
                        city_name,
                        zip_code,
                    }
                }),
        ]
    }

    fn shipment() -> impl Strategy<Value = Shipment> {
        (1u64..50, proptest::option::of("[a-z_]{1,10}"), address()).prop_map(
            |(order_id, status, receiver_address)| Shipment {
                order_id,
                status,
                substatus: None,
                logistic_type: None,
                receiver_address,
            },
        )
    }

    proptest! {
        /// Property: one row per order item, whatever shipments are available
        #[test]
        fn row_count_equals_item_count(
            orders in prop::collection::vec(order(), 0..8),
            shipments in prop::collection::vec(shipment(), 0..8),
        ) {
            let rows = RecordMerger::new().merge(&orders, &shipments);
            let items: usize = orders.iter().map(|o| o.order_items.len()).sum();
            prop_assert_eq!(rows.len(), items);
        }

        /// Property: merging the same inputs twice yields the same rows
        #[test]
        fn merge_is_deterministic(
            orders in prop::collection::vec(order(), 0..8),
            shipments in prop::collection::vec(shipment(), 0..8),
        ) {
            let merger = RecordMerger::new();
            prop_assert_eq!(merger.merge(&orders, &shipments), merger.merge(&orders, &shipments));
        }

        /// Property: rows follow order-then-item traversal of the input
        #[test]
        fn rows_follow_input_traversal(
            orders in prop::collection::vec(order(), 0..8),
            shipments in prop::collection::vec(shipment(), 0..8),
        ) {
            let rows = RecordMerger::new().merge(&orders, &shipments);
            let expected: Vec<(u64, String)> = orders
                .iter()
                .flat_map(|o| o.order_items.iter().map(move |i| (o.id, i.id.clone())))
                .collect();
            let actual: Vec<(u64, String)> =
                rows.iter().map(|r| (r.order_id, r.item_id.clone())).collect();
            prop_assert_eq!(actual, expected);
        }

        /// Property: shipment columns are filled exactly when a shipment shares the order id
        #[test]
        fn shipment_columns_follow_join_key(
            orders in prop::collection::vec(order(), 0..8),
            shipments in prop::collection::vec(shipment(), 0..8),
        ) {
            let shipment_ids: HashSet<u64> = shipments.iter().map(|s| s.order_id).collect();
            for row in RecordMerger::new().merge(&orders, &shipments) {
                let matched = shipment_ids.contains(&row.order_id);
                prop_assert_eq!(row.shipment_id.is_some(), matched);
                prop_assert_eq!(row.destination_kind.is_some(), matched);
                prop_assert_eq!(row.destination_address.is_some(), matched);
                if matched {
                    prop_assert_eq!(row.shipment_id, Some(row.order_id));
                }
            }
        }
    }
}
