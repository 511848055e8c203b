//! Catalog lifecycle tests against the live mock server.
//!
//! Each test starts its own mock server on a random port and drives it over
//! real HTTP through `JuegoService<UreqTransport>`, so request building,
//! transport and response parsing are checked end to end.

use std::net::SocketAddr;
use std::thread;

use axum::Router;
use juegos_core::{ApiError, JuegoPatch, JuegoService, NewJuego, Operation, PageQuery};
use mock_server::StatusCode;

/// Start `router` on a random local port and return its address.
fn spawn_server(router: Router) -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::serve(listener, router).await
        })
        .unwrap();
    });

    addr
}

fn service_for(router: Router) -> JuegoService {
    let addr = spawn_server(router);
    JuegoService::new(&format!("http://{addr}/juegos"))
}

fn new_juego(titulo: &str) -> NewJuego {
    NewJuego {
        titulo: titulo.to_string(),
        genero: "Aventura".to_string(),
        fecha_lanzamiento: "1991-11-21".to_string(),
        descripcion: Some("Hyrule otra vez".to_string()),
        desarrollador: Some("Nintendo".to_string()),
    }
}

#[test]
fn crud_lifecycle() {
    let service = service_for(mock_server::app());

    // Step 1: list is empty.
    assert!(service.list().unwrap().is_empty(), "expected empty list");

    // Step 2: create, and the server assigns an id.
    let input = new_juego("A Link to the Past");
    let created = service.create(&input).unwrap();
    assert_eq!(created.titulo, input.titulo);
    assert_eq!(created.genero, input.genero);
    assert_eq!(created.fecha_lanzamiento, input.fecha_lanzamiento);
    assert_eq!(created.descripcion, input.descripcion);
    assert_eq!(created.desarrollador, input.desarrollador);
    let id = created.id;

    // Step 3: list includes the created record.
    let juegos = service.list().unwrap();
    assert_eq!(juegos, vec![created.clone()]);

    // Step 4: update only titulo, every other field is left alone.
    let patch = JuegoPatch {
        titulo: Some("X".to_string()),
        ..JuegoPatch::default()
    };
    let updated = service.update(id, &patch).unwrap();
    assert_eq!(updated.titulo, "X");

    let listed = service.list().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, id);
    assert_eq!(listed[0].titulo, "X");
    assert_eq!(listed[0].genero, created.genero);
    assert_eq!(listed[0].fecha_lanzamiento, created.fecha_lanzamiento);
    assert_eq!(listed[0].descripcion, created.descripcion);
    assert_eq!(listed[0].desarrollador, created.desarrollador);

    // Step 5: destroy answers exactly 200.
    assert!(service.destroy(id).unwrap());

    // Step 6: destroy again is a response failure, not `false`.
    let err = service.destroy(id).unwrap_err();
    assert!(err.is_not_found(), "{err:?}");

    // Step 7: update of a missing record fails the same way.
    let err = service.update(id, &patch).unwrap_err();
    assert!(matches!(
        err,
        ApiError::Response {
            operation: Operation::Update,
            status: 404,
            ..
        }
    ));

    // Step 8: list is empty again.
    assert!(service.list().unwrap().is_empty(), "expected empty list after destroy");
}

#[test]
fn destroy_with_no_content_reports_false() {
    let service = service_for(mock_server::app_with_delete_status(StatusCode::NO_CONTENT));

    let created = service.create(&new_juego("Pong")).unwrap();
    assert!(!service.destroy(created.id).unwrap());
    assert!(service.list().unwrap().is_empty(), "record was still removed");
}

#[test]
fn paginated_total_counts_only_the_page() {
    let service = service_for(mock_server::app());
    for n in 0..12 {
        service.create(&new_juego(&format!("Juego {n}"))).unwrap();
    }

    let first = service.get_paginated(&PageQuery::default()).unwrap();
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.total, first.items.len());
    assert_ne!(first.total, service.list().unwrap().len());

    let second = service
        .get_paginated(&PageQuery::default().page(2))
        .unwrap();
    assert_eq!(second.total, 2);
}

#[test]
fn paginated_search_filters_by_titulo() {
    let service = service_for(mock_server::app());
    for titulo in ["Zelda", "Metroid", "Zelda II", "Kirby"] {
        service.create(&new_juego(titulo)).unwrap();
    }

    let found = service
        .get_paginated(&PageQuery::default().titulo("Zelda"))
        .unwrap();
    assert_eq!(found.total, 2);
    assert!(found.items.iter().all(|j| j.titulo.contains("Zelda")));

    // An empty titulo applies no filter.
    let everything = service
        .get_paginated(&PageQuery::default().titulo(""))
        .unwrap();
    assert_eq!(everything.total, 4);
}

#[test]
fn backend_rejection_surfaces_as_response_failure() {
    let service = service_for(mock_server::app());

    let err = service.create(&new_juego("   ")).unwrap_err();
    assert!(matches!(
        err,
        ApiError::Response {
            operation: Operation::Create,
            status: 400,
            ..
        }
    ));
}

#[test]
fn concurrent_creates_get_distinct_ids() {
    let service = service_for(mock_server::app());

    let mut ids: Vec<i64> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|n| {
                let service = &service;
                scope.spawn(move || service.create(&new_juego(&format!("Hilo {n}"))).unwrap().id)
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    ids.sort_unstable();
    ids.dedup();

    assert_eq!(ids.len(), 8);
    assert_eq!(service.list().unwrap().len(), 8);
}

#[test]
fn unreachable_backend_is_a_transport_failure() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let service = JuegoService::new(&format!("http://{addr}/juegos"));
    assert!(service.list().unwrap_err().is_transport());
    assert!(service.destroy(1).unwrap_err().is_transport());
}
