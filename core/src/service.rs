//! Stateless facade that runs each catalog operation end to end.
//!
//! Every operation is one linear cycle: build the request, execute it on
//! the transport, parse the response. A failure at any step is logged once
//! with the operation name and then returned unchanged; nothing is retried
//! or swallowed.

use crate::client::{JuegoClient, DEFAULT_ENDPOINT};
use crate::error::{ApiError, Operation};
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::{Juego, JuegoPatch, NewJuego, Page, PageQuery};

#[derive(Debug, Clone)]
pub struct JuegoService<T = UreqTransport> {
    client: JuegoClient,
    transport: T,
}

impl Default for JuegoService<UreqTransport> {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl JuegoService<UreqTransport> {
    pub fn new(endpoint: &str) -> Self {
        Self::with_transport(JuegoClient::new(endpoint), UreqTransport::new())
    }
}

impl<T: Transport> JuegoService<T> {
    pub fn with_transport(client: JuegoClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &JuegoClient {
        &self.client
    }

    pub fn list(&self) -> Result<Vec<Juego>, ApiError> {
        self.run(Operation::List, Ok(self.client.build_list()), JuegoClient::parse_list)
    }

    /// Not idempotent: each successful call stores one new record.
    pub fn create(&self, input: &NewJuego) -> Result<Juego, ApiError> {
        self.run(
            Operation::Create,
            self.client.build_create(input),
            JuegoClient::parse_create,
        )
    }

    pub fn update(&self, id: i64, input: &JuegoPatch) -> Result<Juego, ApiError> {
        self.run(
            Operation::Update,
            self.client.build_update(id, input),
            JuegoClient::parse_update,
        )
    }

    /// `Ok(true)` only when the server answers exactly 200.
    pub fn destroy(&self, id: i64) -> Result<bool, ApiError> {
        self.run(
            Operation::Destroy,
            Ok(self.client.build_destroy(id)),
            JuegoClient::parse_destroy,
        )
    }

    pub fn get_paginated(&self, query: &PageQuery) -> Result<Page<Juego>, ApiError> {
        self.run(
            Operation::GetPaginated,
            Ok(self.client.build_get_paginated(query)),
            JuegoClient::parse_get_paginated,
        )
    }

    fn run<R>(
        &self,
        operation: Operation,
        request: Result<HttpRequest, ApiError>,
        parse: impl FnOnce(&JuegoClient, HttpResponse) -> Result<R, ApiError>,
    ) -> Result<R, ApiError> {
        request
            .and_then(|request| {
                tracing::debug!(
                    operation = %operation,
                    method = %request.method,
                    url = %request.path,
                    "sending juego request"
                );
                self.transport.execute(request)
            })
            .and_then(|response| parse(&self.client, response))
            .inspect_err(|error| {
                tracing::error!(operation = %operation, error = %error, "juego request failed");
            })
    }
}
