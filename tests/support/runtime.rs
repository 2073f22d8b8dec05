//! Tokio runtime and mock server slots for behavioural tests.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use rstest_bdd::Slot;
use tokio::runtime::Runtime;
use wiremock::MockServer;

/// Runtime handle that can live in an `rstest-bdd` slot.
#[derive(Clone)]
pub struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    pub fn new(runtime: Runtime) -> Self {
        Self(Rc::new(RefCell::new(runtime)))
    }

    pub fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

/// Returns the scenario runtime, creating it on first use.
///
/// # Errors
///
/// Returns an error if the Tokio runtime cannot be created.
pub fn ensure_runtime(runtime: &Slot<SharedRuntime>) -> Result<SharedRuntime, io::Error> {
    if let Some(existing) = runtime.get() {
        return Ok(existing);
    }

    let created = SharedRuntime::new(Runtime::new()?);
    runtime.set(created.clone());
    Ok(created)
}

/// Starts a mock server in `server` unless one is already running, and
/// returns its base URI.
pub fn ensure_server(runtime: &SharedRuntime, server: &Slot<MockServer>) -> String {
    if let Some(uri) = server.with_ref(MockServer::uri) {
        return uri;
    }

    let started = runtime.block_on(MockServer::start());
    let uri = started.uri();
    server.set(started);
    uri
}
