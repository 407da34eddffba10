pub(crate) mod api;
pub mod client;
pub mod config;
pub mod consts;
pub mod error;
pub mod fs;
pub mod http;

pub use client::Client;
pub use error::Error;
pub use http::{ClientConfig, Method, ParamValue, Params, RequestConfig};
