// Cache module for local filesystem caching.
// Stores fetched tag data as JSON so later runs skip the API.

pub mod store;

pub use store::{read_json, write_json};
