//! Stateless HTTP request builder and response parser for the juegos API.
//!
//! # Design
//! `JuegoClient` holds only the collection endpoint and carries no mutable
//! state between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. Executing the round-trip is left to a `Transport`, which
//! keeps this module deterministic and free of I/O.

use serde::de::DeserializeOwned;
use serde::Serialize;
use url::form_urlencoded;

use crate::error::{ApiError, Operation};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Juego, JuegoPatch, NewJuego, Page, PageQuery};

/// Collection endpoint of the reference deployment.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3333/juegos";

/// Synchronous, stateless request builder for the juegos collection.
#[derive(Debug, Clone)]
pub struct JuegoClient {
    endpoint: String,
}

impl Default for JuegoClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl JuegoClient {
    /// `endpoint` is the collection URL itself, e.g. `http://host/juegos`.
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn build_list(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.endpoint.clone(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create(&self, input: &NewJuego) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Post, self.endpoint.clone(), input)
    }

    pub fn build_update(&self, id: i64, input: &JuegoPatch) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Patch, self.record_path(id), input)
    }

    pub fn build_destroy(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.record_path(id),
            headers: Vec::new(),
            body: None,
        }
    }

    /// `titulo` is only sent when the search filter holds a non-empty value.
    pub fn build_get_paginated(&self, query: &PageQuery) -> HttpRequest {
        let mut params = form_urlencoded::Serializer::new(String::new());
        params.append_pair("page", &query.page.to_string());
        params.append_pair("limit", &query.items_per_page.to_string());
        if let Some(titulo) = query.search.titulo.as_deref().filter(|t| !t.is_empty()) {
            params.append_pair("titulo", titulo);
        }
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}?{}", self.endpoint, params.finish()),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<Juego>, ApiError> {
        parse_json(Operation::List, response)
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<Juego, ApiError> {
        parse_json(Operation::Create, response)
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<Juego, ApiError> {
        parse_json(Operation::Update, response)
    }

    /// Any 2xx is accepted, but only an exact 200 reports `true`. A 204 No
    /// Content therefore yields `Ok(false)`.
    pub fn parse_destroy(&self, response: HttpResponse) -> Result<bool, ApiError> {
        check_status(Operation::Destroy, &response)?;
        Ok(response.status == 200)
    }

    /// `total` counts the items of this page only.
    pub fn parse_get_paginated(&self, response: HttpResponse) -> Result<Page<Juego>, ApiError> {
        let items: Vec<Juego> = parse_json(Operation::GetPaginated, response)?;
        Ok(Page::from(items))
    }

    fn record_path(&self, id: i64) -> String {
        format!("{}/{id}", self.endpoint)
    }
}

fn json_request<T: Serialize>(
    method: HttpMethod,
    path: String,
    input: &T,
) -> Result<HttpRequest, ApiError> {
    let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
    Ok(HttpRequest {
        method,
        path,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    })
}

fn parse_json<T: DeserializeOwned>(
    operation: Operation,
    response: HttpResponse,
) -> Result<T, ApiError> {
    check_status(operation, &response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Reject any non-2xx status.
fn check_status(operation: Operation, response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Response {
        operation,
        status: response.status,
        body: response.body.clone(),
    })
}
