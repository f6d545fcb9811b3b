mod client;
mod error;
pub mod models;
mod trait_def;

pub use client::HttpContentApi;
pub use error::{FetchError, FetchResult};
pub use trait_def::ContentApi;

#[cfg(feature = "mock")]
pub use trait_def::MockContentApi;
