//! Client side of the storefront REST surface.
//!
//! [`StorefrontApi`] is the seam the view layer talks to; [`HttpStorefront`]
//! implements it over HTTP. Every call resolves to either the decoded body or
//! a [`FetchError`] naming what went wrong.

pub mod api;
pub mod error;
pub mod http;

pub use api::StorefrontApi;
pub use error::{BuildError, FetchError};
pub use http::HttpStorefront;
