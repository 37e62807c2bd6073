//! # Entity Fetching
//!
//! `EntityFetcher` performs exactly one read per call against an
//! [`EntityStore`], times it, and checks that the response really belongs to
//! the identifier that was requested before decoding it.
//!
//! The identity check reads the kind-specific identity field from the raw
//! document (`id` for orders, `order_id` for shipments) and compares it with
//! the requested id. A response that fails the check is discarded.
//!
//! Two entry points are provided:
//!
//! - [`EntityFetcher::try_fetch`] returns the reason a fetch failed.
//! - [`EntityFetcher::fetch`] logs that reason and returns `None`, which is
//!   what the collector wants: one bad response must never fail a batch.

use std::time::Instant;

use log::{debug, error, info, warn};

use crate::entity::{Entity, EntityKind};
use crate::error::{Error, Result};
use crate::store::EntityStore;

/// Fetches and validates single entities from an [`EntityStore`].
pub struct EntityFetcher<'a> {
    store: &'a dyn EntityStore,
}

impl<'a> EntityFetcher<'a> {
    pub fn new(store: &'a dyn EntityStore) -> Self {
        Self { store }
    }

    /// Fetches entity `id`, returning why it could not be used on failure.
    ///
    /// Emits one `info` record with the duration of the read.
    pub fn try_fetch<E: Entity>(&self, id: u64) -> Result<E> {
        let kind = E::KIND;
        let start = Instant::now();
        let document = self.store.get(kind, id);
        let elapsed = start.elapsed();

        info!(
            "Retrieving data from {} for {} {} took {:.4} secs",
            self.store.locate(kind, id),
            kind,
            id,
            elapsed.as_secs_f64()
        );

        let document = document?;
        let returned = kind.identity_of(&document);
        if returned != Some(id) {
            return Err(Error::IdentityMismatch {
                kind,
                requested: id,
                returned,
            });
        }

        serde_json::from_value(document).map_err(|e| Error::Decode {
            kind,
            id,
            message: e.to_string(),
        })
    }

    /// Fetches entity `id`, logging and discarding any failure.
    pub fn fetch<E: Entity>(&self, id: u64) -> Option<E> {
        match self.try_fetch(id) {
            Ok(entity) => Some(entity),
            Err(Error::IdentityMismatch {
                kind,
                requested,
                returned,
            }) => {
                let got = returned
                    .map(|r| r.to_string())
                    .unwrap_or_else(|| "no identifier".to_string());
                // Orders are the primary records; a wrong order is louder.
                match kind {
                    EntityKind::Order => error!(
                        "Discarding response: requested {} {} but got {} instead",
                        kind, requested, got
                    ),
                    EntityKind::Shipment => warn!(
                        "Discarding response: requested {} {} but got {} instead",
                        kind, requested, got
                    ),
                }
                None
            }
            Err(e) => {
                warn!("Discarding {} {}: {}", E::KIND, id, e);
                debug!("fetch failure detail: {:?}", e);
                None
            }
        }
    }
}
