pub const DEFAULT_ORIGIN: &str = "http://localhost:8000";

/// Endpoints are appended verbatim, no slash normalization happens here.
pub fn origin_url(origin: &str, endpoint: &str) -> String {
	format!("{origin}{endpoint}")
}
