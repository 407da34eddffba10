use std::task::{Context, Poll};

use bytes::Bytes;
use futures::future::BoxFuture;
use tower::{Layer, Service};

use crate::Error;

/// Downloads the full response body. Failing statuses are turned into
/// [`Error::Api`] carrying the response text.
#[derive(Clone, Copy, Default)]
pub(crate) struct DownloadLayer;

impl<S> Layer<S> for DownloadLayer {
	type Service = DownloadService<S>;

	fn layer(&self, inner: S) -> Self::Service {
		DownloadService { inner }
	}
}

#[derive(Clone)]
pub(crate) struct DownloadService<S> {
	inner: S,
}

impl<S, Req> Service<Req> for DownloadService<S>
where
	S: Service<Req, Response = reqwest::Response, Error = Error>,
	S::Future: Send + 'static,
{
	type Response = Bytes;
	type Error = Error;
	type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

	fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
		self.inner.poll_ready(cx)
	}

	fn call(&mut self, req: Req) -> Self::Future {
		let fut = self.inner.call(req);
		Box::pin(async move { read_body(fut.await?).await })
	}
}

async fn read_body(response: reqwest::Response) -> Result<Bytes, Error> {
	let status = response.status();
	if !status.is_success() {
		let message = response.text().await?;
		return Err(Error::Api { status, message });
	}
	Ok(response.bytes().await?)
}
