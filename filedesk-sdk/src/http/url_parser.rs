use std::task::{Context, Poll};

use tower::Service;

use crate::Error;

use super::{LayerFuture, Params, Request, RequestMethod};

#[derive(Clone)]
pub(crate) struct UrlParseLayer;

impl<S> tower::Layer<S> for UrlParseLayer {
	type Service = UrlParseService<S>;

	fn layer(&self, inner: S) -> Self::Service {
		UrlParseService { inner }
	}
}

#[derive(Clone)]
pub(crate) struct UrlParseService<S> {
	inner: S,
}

impl<S, Body, Url> Service<Request<Body, Url>> for UrlParseService<S>
where
	S: Service<Request<Body, reqwest::Url>, Error = Error>,
	Url: AsRef<str>,
{
	type Response = S::Response;
	type Error = S::Error;
	type Future = LayerFuture<S::Future>;

	fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
		self.inner.poll_ready(cx)
	}

	fn call(&mut self, req: Request<Body, Url>) -> Self::Future {
		let is_get = matches!(req.method, RequestMethod::Get);
		let parsed = parse_url(req.url.as_ref(), is_get.then_some(&req.params));
		match parsed {
			Ok(url) => LayerFuture::Inner(self.inner.call(req.with_url(url))),
			Err(e) => LayerFuture::Error(Some(e)),
		}
	}
}

fn parse_url(url_str: &str, params: Option<&Params>) -> Result<reqwest::Url, Error> {
	let mut url = reqwest::Url::parse(url_str).map_err(|source| Error::Url {
		url: url_str.to_owned(),
		source,
	})?;
	if let Some(params) = params.filter(|p| !p.is_empty()) {
		let mut query = url.query_pairs_mut();
		for (key, value) in params.iter() {
			query.append_pair(key, &value.to_string());
		}
	}
	Ok(url)
}
