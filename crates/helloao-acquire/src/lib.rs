pub mod client;
pub mod error;
pub mod identify;
pub mod lookup;
pub mod source;
pub mod verse;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::ApiClient;
pub use error::LookupError;
pub use source::Source;
