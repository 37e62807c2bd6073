//! Shared test utilities for integration and E2E tests.
//!
//! This module provides fixtures for a scratch working directory and for a
//! mock entity store served over HTTP by `wiremock`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let store = StoreFixture::start();
//!     store.serve_order(1001, documents::order(1001, &["A"]));
//!     let fixture = TestFixture::new();
//!     fixture.export(&store).arg("--ids").arg("1001").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::documents;
    #[allow(unused_imports)]
    pub use super::StoreFixture;
    pub use super::TestFixture;
}

/// Environment variables read by the CLI; cleared so the developer's own
/// settings cannot leak into tests.
const CLI_ENV: [&str; 6] = [
    "ORDER_EXPORT_CONFIG",
    "ORDER_EXPORT_BASE_URL",
    "ORDER_EXPORT_IDS",
    "ORDER_EXPORT_WORKERS",
    "ORDER_EXPORT_OUTPUT",
    "ORDER_EXPORT_LOG",
];

/// Canned entity documents.
#[allow(dead_code)]
pub mod documents {
    use serde_json::{json, Value};

    /// An order whose items each carry a single `Color: Red` attribute.
    pub fn order(id: u64, items: &[&str]) -> Value {
        let items: Vec<Value> = items
            .iter()
            .map(|item| {
                json!({"item": {"id": item, "variation_attributes": [{"name": "Color", "value_name": "Red"}]}})
            })
            .collect();
        json!({"id": id, "order_items": items})
    }

    /// A shipment delivered to a street address.
    pub fn home_shipment(order_id: u64, status: &str) -> Value {
        json!({
            "order_id": order_id,
            "status": status,
            "substatus": null,
            "logistic_type": "drop_off",
            "receiver_address": {
                "address_line": "Main St",
                "city": {"name": "Springfield"},
                "zip_code": "00000"
            }
        })
    }

    /// A shipment picked up at a carrier agency.
    pub fn agency_shipment(order_id: u64, status: &str) -> Value {
        json!({
            "order_id": order_id,
            "status": status,
            "substatus": "ready_to_pick_up",
            "logistic_type": "cross_docking",
            "receiver_address": {
                "agency": {"agency_id": "AG-7", "carrier_id": 17}
            }
        })
    }
}

/// A mock entity store listening on a local port.
///
/// Every mounted document expects exactly one request; the expectation is
/// verified when the fixture is dropped.
#[allow(dead_code)]
pub struct StoreFixture {
    server: MockServer,
    runtime: Runtime,
}

#[allow(dead_code)]
impl StoreFixture {
    /// Start a new mock store.
    pub fn start() -> Self {
        let runtime = Runtime::new().expect("Failed to create runtime");
        let server = runtime.block_on(MockServer::start());
        Self { server, runtime }
    }

    /// Base URL to hand to the CLI or the library.
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Serve `document` at `/orders/{id}`.
    pub fn serve_order(&self, id: u64, document: Value) -> &Self {
        self.serve(&format!("/orders/{}", id), ResponseTemplate::new(200).set_body_json(document), 1)
    }

    /// Serve `document` at `/shipments/{id}`.
    pub fn serve_shipment(&self, id: u64, document: Value) -> &Self {
        self.serve(&format!("/shipments/{}", id), ResponseTemplate::new(200).set_body_json(document), 1)
    }

    /// Answer `route` with a bare status code.
    pub fn serve_status(&self, route: &str, status: u16) -> &Self {
        self.serve(route, ResponseTemplate::new(status), 1)
    }

    /// Assert that `route` is never requested.
    pub fn forbid(&self, route: &str) -> &Self {
        self.serve(route, ResponseTemplate::new(500), 0)
    }

    fn serve(&self, route: &str, response: ResponseTemplate, times: u64) -> &Self {
        self.runtime.block_on(
            Mock::given(method("GET"))
                .and(path(route))
                .respond_with(response)
                .expect(times)
                .mount(&self.server),
        );
        self
    }
}

/// A scratch working directory for a CLI run.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The default output file inside the fixture directory.
    pub fn output_path(&self) -> PathBuf {
        self.temp_dir.path().join("orders.csv")
    }

    /// Read a file from the fixture directory.
    pub fn read(&self, path: &str) -> String {
        std::fs::read_to_string(self.temp_dir.path().join(path)).expect("Failed to read file")
    }

    /// Create a command running in this fixture's directory with a clean
    /// environment and plain output.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("order-export");
        cmd.current_dir(self.path());
        for var in CLI_ENV {
            cmd.env_remove(var);
        }
        cmd.env("NO_COLOR", "1");
        cmd
    }

    /// An `export` command pointed at `store`, writing to `orders.csv`.
    pub fn export(&self, store: &StoreFixture) -> assert_cmd::Command {
        let mut cmd = self.command();
        cmd.arg("export")
            .arg("--base-url")
            .arg(store.uri())
            .arg("--output")
            .arg(self.output_path());
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
