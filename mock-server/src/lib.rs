use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use log::info;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

pub const AUTHORIZATION_HEADER: &str = "X-Authorization";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    pub price: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ItemList {
    pub items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct ItemQuery {
    pub query: String,
}

pub type Catalog = Arc<Vec<Item>>;

/// The fixed catalog served by every endpoint, in listing order.
pub fn catalog() -> Vec<Item> {
    [
        ("Mac", 3_888_000),
        ("iPad", 1_230_000),
        ("iPhone", 1_550_000),
        ("Watch", 450_000),
        ("AirPods", 350_000),
    ]
    .into_iter()
    .map(|(title, price)| Item {
        title: title.to_string(),
        price,
    })
    .collect()
}

pub fn app() -> Router {
    app_with(catalog())
}

pub fn app_with(items: Vec<Item>) -> Router {
    let catalog: Catalog = Arc::new(items);
    Router::new()
        .route("/api/server/get-call-obj", get(get_call_object))
        .route("/api/server/get-call-list", get(get_call_list))
        .route("/api/server/post-call/{query}", post(post_call))
        .route("/api/server/exchange-call", post(exchange_call))
        .with_state(catalog)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn find(catalog: &Catalog, title: &str) -> Result<Json<Item>, StatusCode> {
    catalog
        .iter()
        .find(|item| item.title == title)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn get_call_object(
    State(catalog): State<Catalog>,
    Query(params): Query<ItemQuery>,
) -> Result<Json<Item>, StatusCode> {
    find(&catalog, &params.query)
}

async fn get_call_list(State(catalog): State<Catalog>) -> Json<ItemList> {
    Json(ItemList {
        items: catalog.to_vec(),
    })
}

async fn post_call(
    State(catalog): State<Catalog>,
    Path(query): Path<String>,
    Json(user): Json<Credentials>,
) -> Result<Json<Item>, StatusCode> {
    info!("post-call from {} ({} char password)", user.username, user.password.len());
    find(&catalog, &query)
}

async fn exchange_call(
    State(catalog): State<Catalog>,
    headers: HeaderMap,
    Json(user): Json<Credentials>,
) -> Result<Json<ItemList>, StatusCode> {
    let token = headers
        .get(AUTHORIZATION_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(StatusCode::BAD_REQUEST)?;
    info!("exchange-call token = {token}, user = {}", user.username);
    Ok(Json(ItemList {
        items: catalog.to_vec(),
    }))
}
