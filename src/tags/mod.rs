// Tag loading.
// Produces the per-bookmark tag sets, from the local cache when present.

pub mod loader;

pub use loader::load_tags;

/// Tags of one bookmark, in entry order. Duplicates are kept.
pub type TagSet = Vec<String>;

/// One tag set per bookmark, in fetch order.
pub type TagSetCollection = Vec<TagSet>;
