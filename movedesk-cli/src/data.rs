//! Loading dashboard data from JSON files

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use movedesk_lib::Record;
use movedesk_lib::cache::CacheConfig;
use movedesk_lib::cache::ContactCache;
use movedesk_lib::model::normalize_quote;
use movedesk_lib::model::to_records;
use movedesk_lib::model::types::Contact;
use movedesk_lib::model::types::Customer;
use movedesk_lib::model::types::MovingRequest;
use movedesk_lib::model::types::Quote;
use movedesk_lib::model::types::QuoteUpdate;
use movedesk_lib::model::types::RequestUpdate;
use movedesk_lib::model::types::Status;
use movedesk_lib::presets::TableKind;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// The typed contents of one data file.
///
/// Quotes are already normalized: every customer is embedded.
#[derive(Debug, Clone)]
pub enum Dataset {
    Customers(Vec<Customer>),
    Quotes(Vec<Quote>),
    Requests(Vec<MovingRequest>),
}

impl Dataset {
    /// Converts the models into table records.
    pub fn records(&self) -> Result<Vec<Record>> {
        let records = match self {
            Dataset::Customers(customers) => to_records(customers)?,
            Dataset::Quotes(quotes) => to_records(quotes)?,
            Dataset::Requests(requests) => to_records(requests)?,
        };
        Ok(records)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid JSON in {}", path.display()))
}

/// Reads `path` as a list of `kind` records.
///
/// Quote customers given by id are resolved through a contact cache seeded
/// from the `customers` file.
pub fn load(
    kind: TableKind,
    path: &Path,
    customers: Option<&Path>,
    cache: &CacheConfig,
) -> Result<Dataset> {
    let dataset = match kind {
        TableKind::Customers => Dataset::Customers(read_json(path)?),
        TableKind::Requests => Dataset::Requests(read_json(path)?),
        TableKind::Quotes => {
            let contacts = ContactCache::new(cache);
            if let Some(customers) = customers {
                let customers: Vec<Customer> = read_json(customers)?;
                let seeded: Vec<Contact> = customers.iter().map(Contact::from).collect();
                contacts.remember_all(&seeded);
                log::debug!("Seeded contact cache with {} customers", contacts.len());
            }
            let quotes = read_json::<Quote>(path)?
                .into_iter()
                .map(|quote| normalize_quote(quote, &contacts))
                .collect::<Result<Vec<_>, _>>()?;
            Dataset::Quotes(quotes)
        }
    };
    log::info!("Loaded {} from {}", kind, path.display());
    Ok(dataset)
}

/// One admin edit given on the command line.
#[derive(Debug, Clone, Default)]
pub struct Edit {
    pub status: Option<Status>,
    pub notes: Option<String>,
    /// Price as typed; unreadable or zero input keeps the old price.
    pub price: Option<String>,
}

/// Applies `edit` to the record `id` in `path` and rewrites the file.
///
/// Quotes take status, notes and price; requests take status and notes;
/// customers take notes only.
pub fn apply_edit(kind: TableKind, path: &Path, id: &str, edit: Edit) -> Result<()> {
    match kind {
        TableKind::Quotes => {
            let update = QuoteUpdate {
                status: edit.status,
                admin_notes: edit.notes,
                price_input: edit.price,
            };
            if update.is_empty() {
                bail!("Nothing to update: pass --status, --notes or --price");
            }
            edit_file::<Quote>(path, id, |q| q.id.as_str(), |q| q.apply_update(&update))
        }
        TableKind::Requests => {
            if edit.price.is_some() {
                bail!("Moving requests have no price");
            }
            let update = RequestUpdate {
                status: edit.status,
                notes: edit.notes,
            };
            if update.is_empty() {
                bail!("Nothing to update: pass --status or --notes");
            }
            edit_file::<MovingRequest>(path, id, |r| r.id.as_str(), |r| r.apply_update(&update))
        }
        TableKind::Customers => {
            if edit.status.is_some() || edit.price.is_some() {
                bail!("Customers only take --notes");
            }
            let Some(notes) = edit.notes else {
                bail!("Nothing to update: pass --notes");
            };
            edit_file::<Customer>(path, id, |c| c.id.as_str(), |c| c.set_notes(notes))
        }
    }
}

fn edit_file<T: DeserializeOwned + Serialize>(
    path: &Path,
    id: &str,
    id_of: impl Fn(&T) -> &str,
    apply: impl FnOnce(&mut T),
) -> Result<()> {
    let mut items: Vec<T> = read_json(path)?;
    let item = items
        .iter_mut()
        .find(|item| id_of(item) == id)
        .with_context(|| format!("No record '{}' in {}", id, path.display()))?;
    apply(item);

    let mut text = serde_json::to_string_pretty(&items)?;
    text.push('\n');
    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Updated '{}' in {}", id, path.display());
    Ok(())
}

/// The quotes behind `rows`, in row order.
pub fn quotes_in_order(quotes: &[Quote], rows: &[&Record]) -> Vec<Quote> {
    let by_id: HashMap<&str, &Quote> = quotes.iter().map(|q| (q.id.as_str(), q)).collect();
    rows.iter()
        .filter_map(|record| record.id().and_then(|id| by_id.get(id)))
        .map(|quote| (*quote).clone())
        .collect()
}
