use filedesk_sdk::config::SaveResponse;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use test_utils::{CannedResponse, MockBackend};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct ViewerConfig {
	root: String,
	show_hidden: bool,
}

#[tokio::test]
async fn load_default_config_sends_no_query() {
	test_utils::init_logger();
	let backend = MockBackend::start().await;
	backend.on("GET", "/config", CannedResponse::json(json!({"root": "/srv"})));

	let config: Value = backend.client().load_config(None).await.unwrap();
	assert_eq!(config, json!({"root": "/srv"}));

	let request = backend.single_request();
	assert_eq!(request.method, "GET");
	assert_eq!(request.path, "/config");
	assert_eq!(request.query, None);
}

#[tokio::test]
async fn load_config_with_empty_path_sends_no_query() {
	test_utils::init_logger();
	let backend = MockBackend::start().await;
	backend.on("GET", "/config", CannedResponse::json(json!({"root": "/srv"})));

	let config: Value = backend.client().load_config(Some("")).await.unwrap();
	assert_eq!(config, json!({"root": "/srv"}));
	assert_eq!(backend.single_request().query, None);
}

#[tokio::test]
async fn load_config_from_path() {
	test_utils::init_logger();
	let backend = MockBackend::start().await;
	backend.on(
		"GET",
		"/config",
		CannedResponse::json(json!({"root": "/home", "show_hidden": true})),
	);

	let config: ViewerConfig = backend
		.client()
		.load_config(Some("/etc/viewer.json"))
		.await
		.unwrap();
	assert_eq!(
		config,
		ViewerConfig {
			root: "/home".to_string(),
			show_hidden: true
		}
	);
	assert_eq!(
		backend.single_request().query_pairs(),
		vec![("path".to_string(), "/etc/viewer.json".to_string())]
	);
}

#[tokio::test]
async fn missing_config_is_not_found() {
	test_utils::init_logger();
	let backend = MockBackend::start().await;
	backend.on("GET", "/config", CannedResponse::detail(404, "Config not found"));

	let e = backend
		.client()
		.load_config::<Value>(None)
		.await
		.unwrap_err();
	assert!(e.is_not_found());
	assert_eq!(e.detail().as_deref(), Some("Config not found"));
}

#[tokio::test]
async fn save_config_without_path_sends_null() {
	test_utils::init_logger();
	let backend = MockBackend::start().await;
	backend.on(
		"POST",
		"/config",
		CannedResponse::json(json!({"success": true, "path": "config.json"})),
	);

	let config = ViewerConfig {
		root: "/srv".to_string(),
		show_hidden: false,
	};
	let saved: SaveResponse = backend.client().save_config(&config, None).await.unwrap();
	assert_eq!(
		saved,
		SaveResponse {
			success: true,
			path: "config.json".to_string()
		}
	);

	let request = backend.single_request();
	assert_eq!(request.method, "POST");
	assert_eq!(request.content_type.as_deref(), Some("application/json"));
	assert_eq!(
		request.json(),
		json!({"config": {"root": "/srv", "show_hidden": false}, "path": null})
	);
}

#[tokio::test]
async fn save_config_to_path() {
	test_utils::init_logger();
	let backend = MockBackend::start().await;
	backend.on(
		"POST",
		"/config",
		CannedResponse::json(json!({"success": true, "path": "/tmp/c.json"})),
	);

	let config = json!({"theme": "dark"});
	let saved: Value = backend
		.client()
		.save_config(&config, Some("/tmp/c.json"))
		.await
		.unwrap();
	assert_eq!(saved, json!({"success": true, "path": "/tmp/c.json"}));

	let request = backend.single_request();
	assert_eq!(request.query, None);
	assert_eq!(
		request.json(),
		json!({"config": {"theme": "dark"}, "path": "/tmp/c.json"})
	);
}
