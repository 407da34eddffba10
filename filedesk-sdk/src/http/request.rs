use std::{borrow::Cow, fmt};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Method {
	#[default]
	Get,
	Post,
}

impl Method {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Get => "GET",
			Self::Post => "POST",
		}
	}
}

impl fmt::Display for Method {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A query parameter value, either a string or a number.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
	String(String),
	Int(i64),
	UInt(u64),
	Float(f64),
}

impl fmt::Display for ParamValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::String(s) => f.write_str(s),
			Self::Int(i) => write!(f, "{i}"),
			Self::UInt(u) => write!(f, "{u}"),
			// whole floats print without a fraction, `2.0` is sent as `2`
			Self::Float(x) if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e15 => {
				write!(f, "{}", *x as i64)
			}
			Self::Float(x) => write!(f, "{x}"),
		}
	}
}

impl From<String> for ParamValue {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

impl From<&str> for ParamValue {
	fn from(value: &str) -> Self {
		Self::String(value.to_owned())
	}
}

impl From<Cow<'_, str>> for ParamValue {
	fn from(value: Cow<'_, str>) -> Self {
		Self::String(value.into_owned())
	}
}

impl From<i32> for ParamValue {
	fn from(value: i32) -> Self {
		Self::Int(value.into())
	}
}

impl From<i64> for ParamValue {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<u32> for ParamValue {
	fn from(value: u32) -> Self {
		Self::UInt(value.into())
	}
}

impl From<u64> for ParamValue {
	fn from(value: u64) -> Self {
		Self::UInt(value)
	}
}

impl From<usize> for ParamValue {
	fn from(value: usize) -> Self {
		Self::UInt(value as u64)
	}
}

impl From<f64> for ParamValue {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

/// Insertion ordered query parameters.
///
/// This is a mapping: inserting a key twice overwrites the first value in
/// place, so every key ends up in the query string exactly once.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params(Vec<(Cow<'static, str>, ParamValue)>);

impl Params {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, key: impl Into<Cow<'static, str>>, value: impl Into<ParamValue>) {
		let key = key.into();
		let value = value.into();
		match self.0.iter_mut().find(|(k, _)| *k == key) {
			Some((_, existing)) => *existing = value,
			None => self.0.push((key, value)),
		}
	}

	pub fn with(mut self, key: impl Into<Cow<'static, str>>, value: impl Into<ParamValue>) -> Self {
		self.insert(key, value);
		self
	}

	pub fn get(&self, key: &str) -> Option<&ParamValue> {
		self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
		self.0.iter().map(|(k, v)| (k.as_ref(), v))
	}
}

impl<K, V> FromIterator<(K, V)> for Params
where
	K: Into<Cow<'static, str>>,
	V: Into<ParamValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut params = Self::new();
		for (k, v) in iter {
			params.insert(k, v);
		}
		params
	}
}

/// Per call configuration for [`crate::Client::call`].
///
/// Defaults to a GET with no parameters and no body. `params` are only sent
/// with GET, `body` only with POST.
#[derive(Debug)]
pub struct RequestConfig<'a, B: ?Sized = ()> {
	pub method: Method,
	pub params: Params,
	pub body: Option<&'a B>,
}

impl<B: ?Sized> Clone for RequestConfig<'_, B> {
	fn clone(&self) -> Self {
		Self {
			method: self.method,
			params: self.params.clone(),
			body: self.body,
		}
	}
}

impl Default for RequestConfig<'_, ()> {
	fn default() -> Self {
		Self::get()
	}
}

impl RequestConfig<'_, ()> {
	pub fn get() -> Self {
		Self {
			method: Method::Get,
			params: Params::new(),
			body: None,
		}
	}
}

impl<'a, B: ?Sized> RequestConfig<'a, B> {
	pub fn post(body: &'a B) -> Self {
		Self {
			method: Method::Post,
			params: Params::new(),
			body: Some(body),
		}
	}

	pub fn method(mut self, method: Method) -> Self {
		self.method = method;
		self
	}

	pub fn param(mut self, key: impl Into<Cow<'static, str>>, value: impl Into<ParamValue>) -> Self {
		self.params.insert(key, value);
		self
	}

	pub fn params(mut self, params: Params) -> Self {
		self.params = params;
		self
	}

	pub fn body<T: ?Sized>(self, body: &'a T) -> RequestConfig<'a, T> {
		RequestConfig {
			method: self.method,
			params: self.params,
			body: Some(body),
		}
	}
}
