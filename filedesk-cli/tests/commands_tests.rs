use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::{TempDir, prelude::*};
use predicates::prelude::PredicateBooleanExt as _;
use serde_json::json;
use test_utils::{CannedResponse, MockBackend};

// The mock backend runs on the worker threads while the CLI blocks the test thread.

#[tokio::test(flavor = "multi_thread")]
async fn cmd_ls() {
	let backend = MockBackend::start().await;
	backend.on(
		"GET",
		"/files",
		CannedResponse::json(json!([
			{"name": "notes.txt", "full_path": "/data/notes.txt", "type": "text/plain", "size": 2048},
		])),
	);

	cargo_bin_cmd!("filedesk")
		.args(["--origin", backend.origin().as_str(), "ls", "/data"])
		.assert()
		.success()
		.stdout(
			predicates::str::contains("notes.txt")
				.and(predicates::str::contains("text/plain"))
				.and(predicates::str::contains("2 KiB")),
		);
	assert_eq!(
		backend.single_request().query.as_deref(),
		Some("dir_path=%2Fdata")
	);
}

#[tokio::test(flavor = "multi_thread")]
async fn cmd_ls_json_from_env_origin() {
	let backend = MockBackend::start().await;
	backend.on("GET", "/files", CannedResponse::json(json!(["a.txt", "b.txt"])));

	let output = cargo_bin_cmd!("filedesk")
		.env("FILEDESK_ORIGIN", backend.origin())
		.args(["ls", "/tmp", "--json"])
		.assert()
		.success()
		.get_output()
		.stdout
		.clone();
	let printed: serde_json::Value = serde_json::from_slice(&output).unwrap();
	assert_eq!(printed, json!(["a.txt", "b.txt"]));
}

#[tokio::test(flavor = "multi_thread")]
async fn cmd_count() {
	let backend = MockBackend::start().await;
	backend.on("GET", "/files/count", CannedResponse::json(json!({"count": 42})));

	cargo_bin_cmd!("filedesk")
		.args(["--origin", backend.origin().as_str(), "count", "/data"])
		.assert()
		.success()
		.stdout(predicates::str::diff("42\n"));
}

#[tokio::test(flavor = "multi_thread")]
async fn cmd_mv() {
	let backend = MockBackend::start().await;
	backend.on(
		"POST",
		"/files/move",
		CannedResponse::json(json!({"success": true, "new_path": "/dest/a.txt"})),
	);

	cargo_bin_cmd!("filedesk")
		.args(["--origin", backend.origin().as_str(), "mv", "/a.txt", "/dest"])
		.assert()
		.success()
		.stdout(predicates::str::contains("Moved /a.txt to /dest/a.txt"));
	assert_eq!(
		backend.single_request().json(),
		json!({"src_path": "/a.txt", "dest_dir": "/dest"})
	);
}

#[tokio::test(flavor = "multi_thread")]
async fn cmd_rename() {
	let backend = MockBackend::start().await;
	backend.on(
		"POST",
		"/files/rename",
		CannedResponse::json(json!({"success": true, "new_path": "/docs/final.md"})),
	);

	cargo_bin_cmd!("filedesk")
		.args([
			"--origin",
			backend.origin().as_str(),
			"rename",
			"/docs/draft.md",
			"final.md",
		])
		.assert()
		.success()
		.stdout(predicates::str::contains("Renamed /docs/draft.md to /docs/final.md"));
	assert_eq!(
		backend.single_request().json(),
		json!({"src_path": "/docs/draft.md", "new_name": "final.md"})
	);
}

#[tokio::test(flavor = "multi_thread")]
async fn cmd_preview_text() {
	let backend = MockBackend::start().await;
	backend.on(
		"GET",
		"/files/preview",
		CannedResponse::json(json!({
			"type": "text",
			"preview_data": "data:text/plain;base64,aGVsbG8gd29ybGQ="
		})),
	);

	cargo_bin_cmd!("filedesk")
		.args(["--origin", backend.origin().as_str(), "preview", "/hello.txt"])
		.assert()
		.success()
		.stdout(predicates::str::contains("hello world"));
}

#[tokio::test(flavor = "multi_thread")]
async fn cmd_preview_image_to_file() {
	let backend = MockBackend::start().await;
	backend.on(
		"GET",
		"/files/preview",
		CannedResponse::json(json!({
			"type": "image",
			"preview_data": "data:image/png;base64,iVBORw=="
		})),
	);
	let dir = TempDir::new().unwrap();
	let out = dir.child("preview.png");

	cargo_bin_cmd!("filedesk")
		.args(["--origin", backend.origin().as_str(), "preview", "/pic.png", "-o"])
		.arg(out.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("image/png"));
	out.assert(predicates::path::exists());
	assert_eq!(std::fs::read(out.path()).unwrap(), b"\x89PNG");
}

#[tokio::test(flavor = "multi_thread")]
async fn cmd_preview_other() {
	let backend = MockBackend::start().await;
	backend.on(
		"GET",
		"/files/preview",
		CannedResponse::json(json!({"type": "other", "name": "movie.mkv"})),
	);

	cargo_bin_cmd!("filedesk")
		.args(["--origin", backend.origin().as_str(), "preview", "/movie.mkv"])
		.assert()
		.success()
		.stdout(predicates::str::contains("movie.mkv").and(predicates::str::contains("not available")));
}

#[tokio::test(flavor = "multi_thread")]
async fn cmd_config_get() {
	let backend = MockBackend::start().await;
	backend.on("GET", "/config", CannedResponse::json(json!({"root": "/srv"})));

	cargo_bin_cmd!("filedesk")
		.args([
			"--origin",
			backend.origin().as_str(),
			"config",
			"get",
			"--path",
			"/etc/viewer.json",
		])
		.assert()
		.success()
		.stdout(predicates::str::contains(r#""root": "/srv""#));
	assert_eq!(
		backend.single_request().query_pairs(),
		vec![("path".to_string(), "/etc/viewer.json".to_string())]
	);
}

#[tokio::test(flavor = "multi_thread")]
async fn cmd_config_set_from_file() {
	let backend = MockBackend::start().await;
	backend.on(
		"POST",
		"/config",
		CannedResponse::json(json!({"success": true, "path": "config.json"})),
	);
	let dir = TempDir::new().unwrap();
	let file = dir.child("config.json");
	file.write_str(r#"{"theme": "dark"}"#).unwrap();

	cargo_bin_cmd!("filedesk")
		.args(["--origin", backend.origin().as_str(), "config", "set"])
		.arg(format!("@{}", file.path().display()))
		.assert()
		.success()
		.stdout(predicates::str::contains("Saved config to config.json"));
	assert_eq!(
		backend.single_request().json(),
		json!({"config": {"theme": "dark"}, "path": null})
	);
}

#[tokio::test(flavor = "multi_thread")]
async fn cmd_config_set_rejects_invalid_json() {
	let backend = MockBackend::start().await;

	cargo_bin_cmd!("filedesk")
		.args(["--origin", backend.origin().as_str(), "config", "set", "{nope"])
		.assert()
		.failure()
		.stderr(predicates::str::contains("Config is not valid JSON"));
	assert!(backend.requests().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn backend_detail_is_printed() {
	let backend = MockBackend::start().await;
	backend.on(
		"GET",
		"/files/count",
		CannedResponse::detail(400, "Invalid directory path"),
	);

	cargo_bin_cmd!("filedesk")
		.args(["--origin", backend.origin().as_str(), "count", "/nope"])
		.assert()
		.failure()
		.stderr(predicates::str::contains("✘ Invalid directory path"));
}

#[tokio::test(flavor = "multi_thread")]
async fn backend_failure_is_logged() {
	let backend = MockBackend::start().await;
	backend.on("GET", "/files", CannedResponse::text(500, "disk full"));

	let stderr = cargo_bin_cmd!("filedesk")
		.env_remove("RUST_LOG")
		.args(["--origin", backend.origin().as_str(), "ls", "/data"])
		.assert()
		.failure()
		.stderr(
			predicates::str::contains("API Error (500): disk full")
				.and(predicates::str::contains("✘ disk full")),
		)
		.get_output()
		.stderr
		.clone();
	// one diagnostic line and one failure line, nothing repeated
	let stderr = String::from_utf8(stderr).unwrap();
	assert_eq!(stderr.lines().count(), 2, "{stderr}");
	assert_eq!(backend.requests().len(), 1);
}
