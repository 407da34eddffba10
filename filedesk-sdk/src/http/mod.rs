use std::{borrow::Cow, fmt::Debug, task::Poll, time::Duration};

use bytes::Bytes;
use reqwest::{RequestBuilder, header::HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use tower::{ServiceBuilder, ServiceExt};

use crate::{
	Error,
	consts::{DEFAULT_ORIGIN, origin_url},
};

mod deserialize;
mod download_body;
mod logging;
mod request;
mod serialize;
mod url_parser;

pub use request::{Method, ParamValue, Params, RequestConfig};

#[derive(Clone, Debug)]
pub struct ClientConfig {
	origin: Cow<'static, str>,
	timeout: Option<Duration>,
	log_level: log::LevelFilter,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			origin: Cow::Borrowed(DEFAULT_ORIGIN),
			timeout: None,
			log_level: log::LevelFilter::Debug,
		}
	}
}

impl ClientConfig {
	/// Scheme, host and port every endpoint is appended to.
	pub fn with_origin(mut self, origin: impl Into<Cow<'static, str>>) -> Self {
		self.origin = origin.into();
		self
	}

	/// Requests are unbounded unless a timeout is set here.
	pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
		self.timeout = timeout;
		self
	}

	pub fn with_log_level(mut self, log_level: log::LevelFilter) -> Self {
		self.log_level = log_level;
		self
	}

	pub fn origin(&self) -> &str {
		&self.origin
	}

	pub fn timeout(&self) -> Option<Duration> {
		self.timeout
	}

	pub fn log_level(&self) -> log::LevelFilter {
		self.log_level
	}
}

#[derive(Clone, Debug)]
pub(crate) struct HttpClient {
	origin: Cow<'static, str>,
	log_level: log::LevelFilter,
	reqwest_client: reqwest::Client,
}

impl HttpClient {
	pub(crate) fn new(config: ClientConfig) -> Result<Self, Error> {
		let mut builder = reqwest::Client::builder();
		if let Some(timeout) = config.timeout {
			builder = builder.timeout(timeout);
		}
		Ok(Self {
			origin: config.origin,
			log_level: config.log_level,
			reqwest_client: builder.build()?,
		})
	}

	pub(crate) fn origin(&self) -> &str {
		&self.origin
	}

	/// Sends exactly one request and decodes the JSON response.
	pub(crate) async fn call<B, Res>(
		&self,
		endpoint: Cow<'static, str>,
		config: RequestConfig<'_, B>,
	) -> Result<Res, Error>
	where
		B: Serialize + ?Sized,
		Res: DeserializeOwned + Debug,
	{
		let RequestConfig {
			method,
			params,
			body,
		} = config;

		let request = Request {
			method: match method {
				Method::Get => RequestMethod::Get,
				Method::Post => RequestMethod::Post(()),
			},
			url: origin_url(&self.origin, &endpoint),
			params,
			client: self.reqwest_client.clone(),
		};

		ServiceBuilder::new()
			.layer(logging::LogLayer::new(self.log_level, method, endpoint)) // diagnostics
			.layer(serialize::SerializeLayer::new(body)) // POST body to JSON bytes
			.layer(url_parser::UrlParseLayer) // origin + endpoint + GET params
			.layer(deserialize::DeserializeLayer::<Res>::new()) // JSON bytes to Res
			.layer(download_body::DownloadLayer) // status check and full body
			.map_request(|request: Request<Option<Bytes>, reqwest::Url>| {
				request.into_builder()
			})
			.service_fn(execute_request)
			.oneshot(request)
			.await
	}
}

async fn execute_request(request: RequestBuilder) -> Result<reqwest::Response, Error> {
	let (client, request) = request.build_split();
	Ok(client.execute(request?).await?)
}

#[derive(Clone, Debug)]
enum RequestMethod<Body> {
	Get,
	Post(Body),
}

#[derive(Clone, Debug)]
struct Request<Body, Url> {
	method: RequestMethod<Body>,
	url: Url,
	params: Params,
	client: reqwest::Client,
}

impl<Body, Url> Request<Body, Url> {
	fn try_map_body<B, E>(
		self,
		map_body: impl FnOnce(Body) -> Result<B, E>,
	) -> Result<Request<B, Url>, E> {
		let method = match self.method {
			RequestMethod::Get => RequestMethod::Get,
			RequestMethod::Post(body) => RequestMethod::Post(map_body(body)?),
		};
		Ok(Request {
			method,
			url: self.url,
			params: self.params,
			client: self.client,
		})
	}

	fn with_url<U>(self, url: U) -> Request<Body, U> {
		Request {
			method: self.method,
			url,
			params: self.params,
			client: self.client,
		}
	}
}

impl Request<Option<Bytes>, reqwest::Url> {
	fn into_builder(self) -> RequestBuilder {
		match self.method {
			RequestMethod::Get => self.client.get(self.url),
			RequestMethod::Post(Some(body)) => self.client.post(self.url).body(body).header(
				reqwest::header::CONTENT_TYPE,
				HeaderValue::from_static("application/json"),
			),
			RequestMethod::Post(None) => self.client.post(self.url),
		}
	}
}

/// Future of a layer that can fail before calling its inner service.
#[pin_project::pin_project(project = LayerFutureProj)]
pub(crate) enum LayerFuture<F> {
	Inner(#[pin] F),
	Error(Option<Error>),
}

impl<F, Resp> Future for LayerFuture<F>
where
	F: Future<Output = Result<Resp, Error>>,
{
	type Output = F::Output;

	fn poll(self: std::pin::Pin<&mut Self>, cx: &mut std::task::Context<'_>) -> Poll<Self::Output> {
		match self.project() {
			LayerFutureProj::Inner(fut) => fut.poll(cx),
			LayerFutureProj::Error(err_opt) => {
				Poll::Ready(Err(err_opt.take().expect("polled after ready")))
			}
		}
	}
}
