use std::task::{Context, Poll};

use bytes::Bytes;
use tower::Service;

use crate::Error;

use super::{LayerFuture, Request};

pub(crate) struct SerializeLayer<'a, B: ?Sized> {
	body: Option<&'a B>,
}

impl<B: ?Sized> Clone for SerializeLayer<'_, B> {
	fn clone(&self) -> Self {
		Self { body: self.body }
	}
}

impl<'a, B: ?Sized> SerializeLayer<'a, B> {
	pub(crate) fn new(body: Option<&'a B>) -> Self {
		Self { body }
	}
}

impl<'a, S, B: ?Sized> tower::Layer<S> for SerializeLayer<'a, B> {
	type Service = SerializeService<'a, S, B>;

	fn layer(&self, inner: S) -> Self::Service {
		SerializeService {
			inner,
			body: self.body,
		}
	}
}

pub(crate) struct SerializeService<'a, S, B: ?Sized> {
	inner: S,
	body: Option<&'a B>,
}

impl<S: Clone, B: ?Sized> Clone for SerializeService<'_, S, B> {
	fn clone(&self) -> Self {
		Self {
			inner: self.inner.clone(),
			body: self.body,
		}
	}
}

impl<S, B, Url> Service<Request<(), Url>> for SerializeService<'_, S, B>
where
	S: Service<Request<Option<Bytes>, Url>, Error = Error>,
	B: serde::Serialize + ?Sized,
{
	type Response = S::Response;
	type Error = S::Error;
	type Future = LayerFuture<S::Future>;

	fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
		self.inner.poll_ready(cx)
	}

	fn call(&mut self, req: Request<(), Url>) -> Self::Future {
		// GET requests never reach the closure, so their body is dropped unserialized
		let body = self.body;
		match req.try_map_body(|()| body.map_or(Ok(None), serialize_body)) {
			Ok(req) => LayerFuture::Inner(self.inner.call(req)),
			Err(e) => LayerFuture::Error(Some(e)),
		}
	}
}

/// A body serializing to JSON `null` counts as no body at all.
fn serialize_body<B>(body: &B) -> Result<Option<Bytes>, Error>
where
	B: serde::Serialize + ?Sized,
{
	let bytes = serde_json::to_vec(body).map_err(Error::Encode)?;
	if bytes == b"null" {
		return Ok(None);
	}
	Ok(Some(Bytes::from(bytes)))
}
