//! Affiliate link resolution engine.
//!
//! A three-stage pipeline of pure functions:
//!
//! - [`detect`] - infer the [`Merchant`](crate::domain::entities::Merchant) from a hostname
//! - [`clean`] - strip tracking parameters and shorten marketplace product URLs
//! - [`resolve`] - pick an affiliate program and tag or wrap the URL
//!
//! Nothing here performs I/O or keeps state; all functions are safe to call
//! from any number of tasks at once. Malformed input never produces an error,
//! it degrades to returning the input unchanged.

pub mod detector;
pub mod normalizer;
pub mod rules;
pub mod tagger;

pub use detector::detect;
pub use normalizer::clean;
pub use tagger::resolve;
