//! Background fetch tasks
//!
//! Each fetch runs as its own task and reports back to the UI loop over an
//! unbounded channel. Failures are carried in the event and handled by the
//! controller; a failed path never affects the others.

use tokio::sync::mpsc::UnboundedSender;

use shared::models::{Category, Product, Tag};
use stockroom_client::{CatalogClient, ClientResult, ProductQuery};

/// Result of one fetch path, delivered to the UI loop
#[derive(Debug)]
pub enum FetchEvent {
    /// Product listing response; `seq` orders overlapping requests
    Products {
        seq: u64,
        result: ClientResult<Vec<Product>>,
    },
    Categories(ClientResult<Vec<Category>>),
    Tags(ClientResult<Vec<Tag>>),
}

/// Spawn the three independent initial-load fetches
///
/// The product fetch takes the first sequence number so that a filter
/// issued before the initial load resolves cannot be clobbered by it.
pub fn spawn_initial_load(
    client: &CatalogClient,
    tx: &UnboundedSender<FetchEvent>,
    products_seq: u64,
) {
    spawn_product_fetch(client, tx, products_seq, ProductQuery::new());

    let categories_client = client.clone();
    let categories_tx = tx.clone();
    tokio::spawn(async move {
        let result = categories_client.list_categories().await;
        let _ = categories_tx.send(FetchEvent::Categories(result));
    });

    let tags_client = client.clone();
    let tags_tx = tx.clone();
    tokio::spawn(async move {
        let result = tags_client.list_tags().await;
        let _ = tags_tx.send(FetchEvent::Tags(result));
    });
}

/// Spawn a product-listing fetch for the given query
///
/// Overlapping requests all run to completion; ordering is enforced at
/// apply time via `seq`.
pub fn spawn_product_fetch(
    client: &CatalogClient,
    tx: &UnboundedSender<FetchEvent>,
    seq: u64,
    query: ProductQuery,
) {
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = client.list_products(&query).await;
        let _ = tx.send(FetchEvent::Products { seq, result });
    });
}
