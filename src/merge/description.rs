//! Product description built from variation attributes.

use crate::entity::VariationAttribute;

/// Renders `"{name}: {value}"` for every attribute, in list order, joined by
/// `separator`. Missing names or values render as empty text.
pub fn build_description(attributes: &[VariationAttribute], separator: &str) -> String {
    attributes
        .iter()
        .map(|attr| {
            format!(
                "{}: {}",
                attr.name.as_deref().unwrap_or_default(),
                attr.value_name.as_deref().unwrap_or_default()
            )
        })
        .collect::<Vec<_>>()
        .join(separator)
}
