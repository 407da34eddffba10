use std::{
	borrow::Cow,
	pin::Pin,
	task::{Context, Poll},
};

use tower::Service;

use crate::Error;

use super::Method;

#[derive(Clone)]
pub(crate) struct LogLayer {
	level_filter: log::LevelFilter,
	method: Method,
	endpoint: Cow<'static, str>,
}

impl LogLayer {
	pub fn new(
		level_filter: log::LevelFilter,
		method: Method,
		endpoint: impl Into<Cow<'static, str>>,
	) -> Self {
		Self {
			level_filter,
			method,
			endpoint: endpoint.into(),
		}
	}
}

impl<S> tower::Layer<S> for LogLayer {
	type Service = LogService<S>;

	fn layer(&self, inner: S) -> Self::Service {
		LogService {
			inner,
			level_filter: self.level_filter,
			method: self.method,
			endpoint: self.endpoint.clone(),
		}
	}
}

#[derive(Clone)]
pub(crate) struct LogService<S> {
	inner: S,
	level_filter: log::LevelFilter,
	method: Method,
	endpoint: Cow<'static, str>,
}

impl<S, Req> Service<Req> for LogService<S>
where
	S: Service<Req, Error = Error>,
	S::Response: std::fmt::Debug,
{
	type Response = S::Response;
	type Error = S::Error;
	type Future = LoggedFuture<S::Future>;

	fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
		self.inner.poll_ready(cx)
	}

	fn call(&mut self, req: Req) -> Self::Future {
		if self.level_filter >= log::LevelFilter::Debug {
			log::debug!("calling {} {}", self.method, self.endpoint);
		}
		LoggedFuture {
			inner: self.inner.call(req),
			filter: self.level_filter,
			method: self.method,
			endpoint: self.endpoint.clone(),
		}
	}
}

#[pin_project::pin_project]
pub struct LoggedFuture<F> {
	#[pin]
	inner: F,
	filter: log::LevelFilter,
	method: Method,
	endpoint: Cow<'static, str>,
}

impl<F, Res> Future for LoggedFuture<F>
where
	F: Future<Output = Result<Res, Error>>,
	Res: std::fmt::Debug,
{
	type Output = F::Output;

	fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
		let this = self.project();
		let output = match this.inner.poll(cx) {
			Poll::Ready(output) => output,
			Poll::Pending => return Poll::Pending,
		};
		match &output {
			Ok(res) => {
				if *this.filter >= log::LevelFilter::Trace {
					log::trace!(
						"call to {} {} succeeded with response: {:?}",
						this.method,
						this.endpoint,
						res
					);
				}
			}
			Err(Error::Api { status, message }) => {
				if *this.filter >= log::LevelFilter::Error {
					log::error!("API Error ({}): {}", status.as_u16(), message);
				}
			}
			Err(e) => {
				if *this.filter >= log::LevelFilter::Error {
					log::error!("call to {} {} failed: {}", this.method, this.endpoint, e);
				}
			}
		}
		Poll::Ready(output)
	}
}
