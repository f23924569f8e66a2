//! Boundary normalization from API models to table records
//!
//! The table core never sees contact references. Quotes whose customer is a
//! bare id are resolved through a [`ContactCache`] here, and every embedded
//! contact refreshes the cache on the way through.

use serde::Serialize;

use super::Record;
use super::types::ContactRef;
use super::types::Quote;
use crate::cache::ContactCache;
use crate::error::NormalizeError;

/// Resolves the quote's customer into an embedded contact.
///
/// Embedded contacts are remembered in `cache`. A bare id is looked up in
/// `cache` and fails with [`NormalizeError::UnresolvedContact`] on a miss.
pub fn normalize_quote(mut quote: Quote, cache: &ContactCache) -> Result<Quote, NormalizeError> {
    let resolved = match &quote.customer {
        ContactRef::Embedded(contact) => {
            cache.remember(contact);
            None
        }
        ContactRef::Id(id) => match cache.resolve(id) {
            Some(contact) => Some(contact),
            None => {
                log::warn!("Quote '{}' references unknown contact '{}'", quote.id, id);
                return Err(NormalizeError::UnresolvedContact { id: id.clone() });
            }
        },
    };
    if let Some(contact) = resolved {
        quote.customer = ContactRef::Embedded(contact);
    }
    Ok(quote)
}

/// Normalizes quotes and converts them into records.
///
/// Stops at the first quote whose contact cannot be resolved.
pub fn quote_records(
    quotes: impl IntoIterator<Item = Quote>,
    cache: &ContactCache,
) -> Result<Vec<Record>, NormalizeError> {
    quotes
        .into_iter()
        .map(|quote| {
            let quote = normalize_quote(quote, cache)?;
            Ok(Record::from_serialize(&quote)?)
        })
        .collect()
}

/// Converts already-normalized models into records.
pub fn to_records<'a, T: Serialize + 'a>(
    models: impl IntoIterator<Item = &'a T>,
) -> Result<Vec<Record>, NormalizeError> {
    models
        .into_iter()
        .map(|model| Record::from_serialize(model).map_err(NormalizeError::from))
        .collect()
}
