//! Fetch Module
//!
//! Every catalog read goes through [`CachedFetcher`], which answers from the
//! shared response cache when it can and from a [`Transport`] otherwise.

mod fetcher;
mod transport;

#[cfg(test)]
pub(crate) mod stub;

pub use fetcher::CachedFetcher;
pub use transport::{HttpTransport, Transport};
