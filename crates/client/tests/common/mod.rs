//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

#[allow(unused_imports)]
pub use docgen_client::testing::load_fixture;

#[allow(unused_imports)]
pub use docgen_client::{ClientError, DocgenClient, endpoints};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a client pointed at a mock server.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> DocgenClient {
    DocgenClient::builder()
        .base_url(server.uri())
        .build()
        .expect("client should build")
}

/// A base URL nothing is listening on.
#[allow(dead_code)]
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
