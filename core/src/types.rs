//! Domain DTOs for the juegos catalog API.
//!
//! # Design
//! These types mirror the backend's schema but are defined independently of
//! the mock-server crate; integration tests catch schema drift. Wire names
//! are camelCase (`fechaLanzamiento`). The id only ever appears on `Juego`:
//! creation input and patches cannot carry one, so the client has no way to
//! invent or rewrite an id.

use serde::{Deserialize, Serialize};

/// A stored catalog record returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
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

/// Request payload for creating a new record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewJuego {
    pub titulo: String,
    pub genero: String,
    pub fecha_lanzamiento: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desarrollador: Option<String>,
}

/// Partial update. Only the fields present in the JSON are applied; omitted
/// fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JuegoPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub titulo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genero: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_lanzamiento: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desarrollador: Option<String>,
}

impl JuegoPatch {
    pub fn is_empty(&self) -> bool {
        self == &JuegoPatch::default()
    }
}

/// Title filter for paginated searches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub titulo: Option<String>,
}

/// Per-call pagination descriptor. Defaults to page 1, 10 items, no filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub items_per_page: u32,
    pub search: SearchFilter,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 1,
            items_per_page: 10,
            search: SearchFilter::default(),
        }
    }
}

impl PageQuery {
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn items_per_page(mut self, items_per_page: u32) -> Self {
        self.items_per_page = items_per_page;
        self
    }

    pub fn titulo(mut self, titulo: impl Into<String>) -> Self {
        self.search.titulo = Some(titulo.into());
        self
    }
}

/// One page of results.
///
/// `total` is the number of items in this page, not a catalog-wide count:
/// the backend returns a bare array and no total, so it cannot be used to
/// derive a page count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> From<Vec<T>> for Page<T> {
    fn from(items: Vec<T>) -> Self {
        let total = items.len();
        Self { items, total }
    }
}
