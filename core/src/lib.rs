//! Blocking API client for the juegos (video game) catalog service.
//!
//! # Overview
//! Lists, creates, updates, deletes and paginates catalog records over the
//! `/juegos` REST collection.
//!
//! # Design
//! - `JuegoClient` is stateless: it holds only the collection endpoint and
//!   splits every operation into `build_*` (produces a request) and
//!   `parse_*` (consumes a response), so the I/O boundary is explicit.
//! - `Transport` executes requests; `UreqTransport` is the network-backed
//!   implementation.
//! - `JuegoService` strings the three steps together, logs failures with the
//!   operation name and hands the original `ApiError` back to the caller.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod service;
pub mod transport;
pub mod types;

pub use client::{JuegoClient, DEFAULT_ENDPOINT};
pub use error::{ApiError, Operation};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use service::JuegoService;
pub use transport::{Transport, UreqTransport};
pub use types::{Juego, JuegoPatch, NewJuego, Page, PageQuery, SearchFilter};
