use std::{
	collections::HashMap,
	net::SocketAddr,
	sync::{Arc, Mutex, MutexGuard},
};

use axum::{
	Router,
	body::Bytes,
	extract::State,
	http::{HeaderMap, Method, StatusCode, Uri, header},
	response::{IntoResponse, Response},
};
use filedesk_sdk::{Client, ClientConfig};
use tokio::sync::oneshot;

/// Installs `env_logger` for tests, honoring `RUST_LOG`.
pub fn init_logger() {
	let _ = env_logger::builder().is_test(true).try_init();
}

/// A request as the mock backend received it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
	pub method: String,
	pub path: String,
	pub query: Option<String>,
	pub content_type: Option<String>,
	pub body: Vec<u8>,
}

impl RecordedRequest {
	/// Decoded query entries, in the order they were sent.
	pub fn query_pairs(&self) -> Vec<(String, String)> {
		self.query
			.as_deref()
			.map(|q| {
				url::form_urlencoded::parse(q.as_bytes())
					.into_owned()
					.collect()
			})
			.unwrap_or_default()
	}

	pub fn json(&self) -> serde_json::Value {
		serde_json::from_slice(&self.body).expect("request body is not JSON")
	}
}

#[derive(Debug, Clone)]
pub struct CannedResponse {
	status: StatusCode,
	content_type: &'static str,
	body: String,
}

impl CannedResponse {
	pub fn json(value: serde_json::Value) -> Self {
		Self::raw(StatusCode::OK, "application/json", value.to_string())
	}

	pub fn text(status: u16, body: impl Into<String>) -> Self {
		Self::raw(
			StatusCode::from_u16(status).expect("invalid status code"),
			"text/plain",
			body.into(),
		)
	}

	/// Error body in the shape the backend uses, `{"detail": "..."}`.
	pub fn detail(status: u16, detail: &str) -> Self {
		Self::raw(
			StatusCode::from_u16(status).expect("invalid status code"),
			"application/json",
			serde_json::json!({ "detail": detail }).to_string(),
		)
	}

	pub fn raw(status: StatusCode, content_type: &'static str, body: impl Into<String>) -> Self {
		Self {
			status,
			content_type,
			body: body.into(),
		}
	}

	fn not_found() -> Self {
		Self::detail(404, "Not Found")
	}
}

#[derive(Default)]
struct Shared {
	routes: HashMap<(String, String), CannedResponse>,
	requests: Vec<RecordedRequest>,
}

type SharedState = Arc<Mutex<Shared>>;

fn lock(shared: &SharedState) -> MutexGuard<'_, Shared> {
	shared.lock().unwrap_or_else(|e| e.into_inner())
}

/// Stand-in for the file backend. Records every request and answers with the
/// response registered for its method and path, or a 404 detail body.
pub struct MockBackend {
	addr: SocketAddr,
	shared: SharedState,
	shutdown: Option<oneshot::Sender<()>>,
}

impl MockBackend {
	pub async fn start() -> Self {
		let shared = SharedState::default();
		let app = Router::new().fallback(record).with_state(shared.clone());

		let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
			.await
			.expect("Failed to bind mock backend");
		let addr = listener.local_addr().expect("mock backend has no address");
		let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
		tokio::spawn(async move {
			let server = axum::serve(listener, app).with_graceful_shutdown(async {
				let _ = shutdown_rx.await;
			});
			if let Err(e) = server.await {
				eprintln!("mock backend stopped: {e}");
			}
		});

		Self {
			addr,
			shared,
			shutdown: Some(shutdown_tx),
		}
	}

	pub fn origin(&self) -> String {
		format!("http://{}", self.addr)
	}

	pub fn client(&self) -> Client {
		Client::from_config(ClientConfig::default().with_origin(self.origin()))
			.expect("Failed to build client")
	}

	pub fn on(&self, method: &str, path: &str, response: CannedResponse) -> &Self {
		lock(&self.shared)
			.routes
			.insert((method.to_uppercase(), path.to_owned()), response);
		self
	}

	pub fn requests(&self) -> Vec<RecordedRequest> {
		lock(&self.shared).requests.clone()
	}

	/// The only request received so far, panics if there were more or none.
	pub fn single_request(&self) -> RecordedRequest {
		let mut requests = self.requests();
		assert_eq!(requests.len(), 1, "expected exactly one request: {requests:?}");
		requests.remove(0)
	}
}

impl Drop for MockBackend {
	fn drop(&mut self) {
		if let Some(tx) = self.shutdown.take() {
			let _ = tx.send(());
		}
	}
}

async fn record(
	State(shared): State<SharedState>,
	method: Method,
	uri: Uri,
	headers: HeaderMap,
	body: Bytes,
) -> Response {
	let content_type = headers
		.get(header::CONTENT_TYPE)
		.and_then(|v| v.to_str().ok())
		.map(str::to_owned);

	let mut shared = lock(&shared);
	shared.requests.push(RecordedRequest {
		method: method.as_str().to_owned(),
		path: uri.path().to_owned(),
		query: uri.query().map(str::to_owned),
		content_type,
		body: body.to_vec(),
	});
	let canned = shared
		.routes
		.get(&(method.as_str().to_owned(), uri.path().to_owned()))
		.cloned()
		.unwrap_or_else(CannedResponse::not_found);
	drop(shared);

	(
		canned.status,
		[(header::CONTENT_TYPE, canned.content_type)],
		canned.body,
	)
		.into_response()
}

/// A `log::Log` that keeps every record so tests can assert on diagnostics.
pub struct CapturingLogger {
	records: Mutex<Vec<(log::Level, String)>>,
}

static LOGGER: CapturingLogger = CapturingLogger {
	records: Mutex::new(Vec::new()),
};

/// Installs the capturing logger as the global logger. Must run before
/// anything else in the test binary sets a logger.
pub fn capture_logs() -> &'static CapturingLogger {
	if log::set_logger(&LOGGER).is_ok() {
		log::set_max_level(log::LevelFilter::Trace);
	}
	&LOGGER
}

impl CapturingLogger {
	pub fn records(&self) -> Vec<(log::Level, String)> {
		self.records
			.lock()
			.unwrap_or_else(|e| e.into_inner())
			.clone()
	}

	pub fn contains(&self, level: log::Level, message: &str) -> bool {
		self.records()
			.iter()
			.any(|(l, m)| *l == level && m == message)
	}
}

impl log::Log for CapturingLogger {
	fn enabled(&self, _metadata: &log::Metadata) -> bool {
		true
	}

	fn log(&self, record: &log::Record) {
		self.records
			.lock()
			.unwrap_or_else(|e| e.into_inner())
			.push((record.level(), record.args().to_string()));
	}

	fn flush(&self) {}
}
