//! End-to-end lookups against the mock localidades service.
//!
//! # Design
//! Each test starts the mock server on an OS-assigned loopback port and
//! drives the client through its production transport, so the whole
//! URL-construction / GET / body-pass-through path runs over real HTTP.
//! The mock plays the reachable service endpoint; nothing here touches
//! the internet.

use std::net::SocketAddr;

use localidades_core::{ApiError, LocalidadesClient};

/// Start the mock server on a random port and return its address.
///
/// The std listener is bound (and therefore accepting) before the server
/// thread spawns, so requests issued right after this returns cannot race
/// the startup.
fn spawn_mock_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn client_for(addr: SocketAddr) -> LocalidadesClient {
    LocalidadesClient::with_base_url(&format!("http://{addr}/api/v1/localidades"))
}

#[test]
fn estado_lookups_return_the_matching_sigla() {
    let client = client_for(spawn_mock_server());

    for uf in ["SP", "RJ", "MG"] {
        let resp = client.fetch_estado(uf).unwrap();
        assert_eq!(resp.status, 200, "{uf}: expected 200");
        assert!(!resp.body.is_empty(), "{uf}: body should not be empty");

        let json: serde_json::Value = serde_json::from_str(&resp.body).unwrap();
        assert_eq!(json["sigla"], uf, "{uf}: sigla mismatch");
    }
}

#[test]
fn distrito_lookups_return_the_seeded_payloads() {
    let client = client_for(spawn_mock_server());

    for id in [520005005_u32, 310010405, 520010005] {
        let resp = client.fetch_distrito(id).unwrap();
        assert_eq!(resp.status, 200, "{id}: expected 200");
        assert!(!resp.body.is_empty(), "{id}: body should not be empty");

        let json: serde_json::Value = serde_json::from_str(&resp.body).unwrap();
        assert_eq!(json["id"], id, "{id}: id mismatch");
    }
}

#[test]
fn unknown_estado_passes_the_status_through() {
    let client = client_for(spawn_mock_server());

    let resp = client.fetch_estado("XX").unwrap();
    assert_eq!(resp.status, 404);
    assert!(!resp.is_success());
}

#[test]
fn connection_refused_is_a_network_error() {
    // Bind to learn a free port number, then release it before connecting.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = LocalidadesClient::with_base_url(&format!("http://{addr}"));
    let err = client.fetch_estado("SP").unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}
