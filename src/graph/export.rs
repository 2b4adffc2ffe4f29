// Edge list export.
// Writes the co-occurrence graph as CSV for graph visualization tools.

use std::io;
use std::path::Path;

use log::info;

use crate::config::Config;
use crate::error::Result;
use crate::tags::TagSet;

use super::edges::{EdgeMap, EdgeRecord};

/// Header row of the edge list.
pub const HEADER: [&str; 4] = ["Source", "Target", "Weight", "Type"];

/// Write `records` as CSV to any writer, header first.
pub fn write_records<W: io::Write>(writer: W, records: &[EdgeRecord]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(HEADER)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `records` to the file at `path`, replacing it.
pub fn write_edges(path: &Path, records: &[EdgeRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::File::create(path)?;
    write_records(io::BufWriter::new(file), records)
}

/// Count tag co-occurrences and write the edge list to `config.edges_file`.
///
/// Callers decide whether to run this at all; an existing file is overwritten.
/// Returns the number of edges written.
pub fn build_edges(config: &Config, tags: &[TagSet]) -> Result<usize> {
    let records = EdgeMap::from_tag_sets(tags).records();
    write_edges(&config.edges_file, &records)?;

    info!(
        "wrote {} edges to {}",
        records.len(),
        config.edges_file.display()
    );
    Ok(records.len())
}
