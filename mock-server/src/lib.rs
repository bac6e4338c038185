use std::{collections::BTreeMap, collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{header, StatusCode, Uri},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;

const ROOT: &str = include_str!("../../fixtures/root.json");
const COLLECTIONS: [(&str, &str); 6] = [
    ("films", include_str!("../../fixtures/films.json")),
    ("people", include_str!("../../fixtures/people.json")),
    ("planets", include_str!("../../fixtures/planets.json")),
    ("species", include_str!("../../fixtures/species.json")),
    ("starships", include_str!("../../fixtures/starships.json")),
    ("vehicles", include_str!("../../fixtures/vehicles.json")),
];

/// Fixture documents served by the mock API, keyed by collection and index.
#[derive(Clone, Debug)]
pub struct Fixtures {
    pub root: Value,
    pub collections: HashMap<String, BTreeMap<u32, Value>>,
}

impl Fixtures {
    /// The fixture set compiled into this crate from `fixtures/`.
    pub fn embedded() -> Result<Self, serde_json::Error> {
        let root = serde_json::from_str(ROOT)?;
        let mut collections = HashMap::new();
        for (kind, raw) in COLLECTIONS {
            collections.insert(kind.to_string(), serde_json::from_str(raw)?);
        }
        Ok(Self { root, collections })
    }
}

/// The paginated envelope wrapping every collection listing.
#[derive(Debug, Serialize)]
pub struct Page {
    pub count: usize,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<Value>,
}

pub type Db = Arc<Fixtures>;

/// Canonical paths end in `/`; the bare forms answer `301` to them, as the
/// live API does.
pub fn app(fixtures: Fixtures) -> Router {
    let db: Db = Arc::new(fixtures);
    Router::new()
        .route("/api", get(add_trailing_slash))
        .route("/api/", get(root))
        .route("/api/{kind}", get(add_trailing_slash))
        .route("/api/{kind}/", get(list_resources))
        .route("/api/{kind}/{id}", get(add_trailing_slash))
        .route("/api/{kind}/{id}/", get(get_resource))
        .with_state(db)
}

pub async fn run(listener: TcpListener, fixtures: Fixtures) -> Result<(), std::io::Error> {
    axum::serve(listener, app(fixtures)).await
}

type NotFound = (StatusCode, Json<Value>);

fn not_found() -> NotFound {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not found" })))
}

async fn add_trailing_slash(uri: Uri) -> impl IntoResponse {
    let location = match uri.query() {
        Some(query) => format!("{}/?{query}", uri.path()),
        None => format!("{}/", uri.path()),
    };
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)])
}

async fn root(State(db): State<Db>) -> Json<Value> {
    Json(db.root.clone())
}

async fn list_resources(
    State(db): State<Db>,
    Path(kind): Path<String>,
) -> Result<Json<Page>, NotFound> {
    let collection = db.collections.get(&kind).ok_or_else(not_found)?;
    tracing::debug!(%kind, count = collection.len(), "serving collection");
    let page = Page {
        count: collection.len(),
        next: None,
        previous: None,
        results: collection.values().cloned().collect(),
    };
    Ok(Json(page))
}

async fn get_resource(
    State(db): State<Db>,
    Path((kind, id)): Path<(String, u32)>,
) -> Result<Json<Value>, NotFound> {
    let resource = db
        .collections
        .get(&kind)
        .and_then(|collection| collection.get(&id))
        .ok_or_else(not_found)?;
    tracing::debug!(%kind, id, "serving resource");
    Ok(Json(resource.clone()))
}
