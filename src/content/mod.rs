//! Remote content: record types, the HTTP source, and lenient response
//! parsing.
//!
//! Fetch failures never surface past this layer — every error is logged
//! and rendered as an empty collection.

mod error;
mod parse;
mod source;
mod types;

pub use error::SourceError;
pub use parse::parse_collection_response;
pub use source::HttpContentSource;
pub use types::{ContentRecord, CountryGuide, Testimonial};
