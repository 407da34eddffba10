use std::{
	marker::PhantomData,
	pin::Pin,
	task::{Context, Poll},
};

use serde::de::DeserializeOwned;
use tower::Service;

use crate::Error;

pub(crate) struct DeserializeLayer<Res> {
	_phantom: PhantomData<fn() -> Res>,
}

impl<Res> Clone for DeserializeLayer<Res> {
	fn clone(&self) -> Self {
		Self::new()
	}
}

impl<Res> DeserializeLayer<Res> {
	pub(crate) fn new() -> Self {
		Self {
			_phantom: PhantomData,
		}
	}
}

impl<S, Res> tower::Layer<S> for DeserializeLayer<Res> {
	type Service = DeserializeService<S, Res>;

	fn layer(&self, inner: S) -> Self::Service {
		DeserializeService {
			inner,
			_phantom: PhantomData,
		}
	}
}

pub(crate) struct DeserializeService<S, Res> {
	inner: S,
	_phantom: PhantomData<fn() -> Res>,
}

impl<S: Clone, Res> Clone for DeserializeService<S, Res> {
	fn clone(&self) -> Self {
		Self {
			inner: self.inner.clone(),
			_phantom: PhantomData,
		}
	}
}

impl<S, Res, Req> Service<Req> for DeserializeService<S, Res>
where
	S: Service<Req, Error = Error>,
	S::Response: AsRef<[u8]>,
	Res: DeserializeOwned,
{
	type Response = Res;
	type Error = Error;
	type Future = DeserializeFuture<S::Future, Res>;

	fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
		self.inner.poll_ready(cx)
	}

	fn call(&mut self, req: Req) -> Self::Future {
		DeserializeFuture {
			fut: self.inner.call(req),
			_phantom: PhantomData,
		}
	}
}

#[pin_project::pin_project]
pub(crate) struct DeserializeFuture<F, Res> {
	#[pin]
	fut: F,
	_phantom: PhantomData<fn() -> Res>,
}

impl<F, Res, InRes> Future for DeserializeFuture<F, Res>
where
	F: Future<Output = Result<InRes, Error>>,
	InRes: AsRef<[u8]>,
	Res: DeserializeOwned,
{
	type Output = Result<Res, Error>;

	fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
		match self.project().fut.poll(cx) {
			// decode errors surface as-is, without extra context
			Poll::Ready(Ok(body)) => Poll::Ready(serde_json::from_slice(body.as_ref()).map_err(Error::Decode)),
			Poll::Ready(Err(e)) => Poll::Ready(Err(e)),
			Poll::Pending => Poll::Pending,
		}
	}
}
