//! In-memory backend for the `/juegos` collection.
//!
//! Stands in for the reference deployment during development and in the
//! client's integration tests. Records live in a `BTreeMap` keyed by a
//! monotonically increasing id, so listings come back in creation order.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;

pub use axum::http::StatusCode;

const DEFAULT_LIMIT: usize = 10;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Juego {
    pub id: i64,
    pub titulo: String,
    pub genero: String,
    pub fecha_lanzamiento: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desarrollador: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJuego {
    pub titulo: String,
    pub genero: String,
    pub fecha_lanzamiento: String,
    pub descripcion: Option<String>,
    pub desarrollador: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JuegoPatch {
    pub titulo: Option<String>,
    pub genero: Option<String>,
    pub fecha_lanzamiento: Option<String>,
    pub descripcion: Option<String>,
    pub desarrollador: Option<String>,
}

/// Query string accepted by `GET /juegos`.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<usize>,
    pub limit: Option<usize>,
    pub titulo: Option<String>,
}

#[derive(Default)]
struct Store {
    last_id: i64,
    juegos: BTreeMap<i64, Juego>,
}

type Db = Arc<RwLock<Store>>;

#[derive(Clone)]
struct AppState {
    db: Db,
    delete_status: StatusCode,
}

type HandlerResult<T> = Result<T, (StatusCode, &'static str)>;

const NOT_FOUND: (StatusCode, &str) = (StatusCode::NOT_FOUND, "juego not found");
const BLANK_TITULO: (StatusCode, &str) = (StatusCode::BAD_REQUEST, "titulo must not be blank");

pub fn app() -> Router {
    app_with_delete_status(StatusCode::OK)
}

/// Same routes as `app`, but successful deletes answer with `status`.
/// A 204 carries no body.
pub fn app_with_delete_status(status: StatusCode) -> Router {
    let state = AppState {
        db: Arc::new(RwLock::new(Store::default())),
        delete_status: status,
    };
    Router::new()
        .route("/juegos", get(list_juegos).post(create_juego))
        .route(
            "/juegos/{id}",
            get(get_juego).patch(update_juego).delete(delete_juego),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, app()).await
}

pub async fn serve(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router).await
}

async fn list_juegos(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<Vec<Juego>> {
    let store = state.db.read().await;
    Json(select(store.juegos.values(), &params))
}

/// Applies the `titulo` filter (case-insensitive substring), then 1-based
/// `page`/`limit` slicing when either is present.
fn select<'a>(juegos: impl Iterator<Item = &'a Juego>, params: &ListParams) -> Vec<Juego> {
    let needle = params
        .titulo
        .as_deref()
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase);
    let matching = juegos.filter(|j| match &needle {
        Some(needle) => j.titulo.to_lowercase().contains(needle),
        None => true,
    });

    if params.page.is_none() && params.limit.is_none() {
        return matching.cloned().collect();
    }
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    let page = params.page.unwrap_or(1).max(1);
    matching
        .skip((page - 1).saturating_mul(limit))
        .take(limit)
        .cloned()
        .collect()
}

async fn create_juego(
    State(state): State<AppState>,
    Json(input): Json<NewJuego>,
) -> HandlerResult<(StatusCode, Json<Juego>)> {
    if input.titulo.trim().is_empty() {
        return Err(BLANK_TITULO);
    }
    let mut store = state.db.write().await;
    store.last_id += 1;
    let juego = Juego {
        id: store.last_id,
        titulo: input.titulo,
        genero: input.genero,
        fecha_lanzamiento: input.fecha_lanzamiento,
        descripcion: input.descripcion,
        desarrollador: input.desarrollador,
    };
    store.juegos.insert(juego.id, juego.clone());
    tracing::info!(id = juego.id, "juego created");
    Ok((StatusCode::CREATED, Json(juego)))
}

async fn get_juego(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HandlerResult<Json<Juego>> {
    let store = state.db.read().await;
    store.juegos.get(&id).cloned().map(Json).ok_or(NOT_FOUND)
}

async fn update_juego(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<JuegoPatch>,
) -> HandlerResult<Json<Juego>> {
    if input.titulo.as_deref().is_some_and(|t| t.trim().is_empty()) {
        return Err(BLANK_TITULO);
    }
    let mut store = state.db.write().await;
    let juego = store.juegos.get_mut(&id).ok_or(NOT_FOUND)?;
    if let Some(titulo) = input.titulo {
        juego.titulo = titulo;
    }
    if let Some(genero) = input.genero {
        juego.genero = genero;
    }
    if let Some(fecha) = input.fecha_lanzamiento {
        juego.fecha_lanzamiento = fecha;
    }
    if let Some(descripcion) = input.descripcion {
        juego.descripcion = Some(descripcion);
    }
    if let Some(desarrollador) = input.desarrollador {
        juego.desarrollador = Some(desarrollador);
    }
    tracing::info!(id, "juego updated");
    Ok(Json(juego.clone()))
}

async fn delete_juego(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HandlerResult<Response> {
    let removed = state.db.write().await.juegos.remove(&id).ok_or(NOT_FOUND)?;
    tracing::info!(id, "juego deleted");
    if state.delete_status == StatusCode::NO_CONTENT {
        return Ok(state.delete_status.into_response());
    }
    Ok((state.delete_status, Json(removed)).into_response())
}
