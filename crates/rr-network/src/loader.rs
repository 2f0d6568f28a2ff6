//! Road-data loader.
//!
//! # Format
//!
//! One comma-separated record per line, no header, no quoting:
//!
//! ```text
//! V,30198538,53.618369,-113.602987
//! V,314080060,53.601436,-113.617012
//! V,314080061,53.601434,-113.616154
//! E,314080060,314080061,23 Avenue NW
//! ```
//!
//! | Tag | Fields                                   | Effect                               |
//! |-----|------------------------------------------|--------------------------------------|
//! | `V` | id, latitude, longitude (decimal degrees)| vertex + fixed-point coordinate      |
//! | `E` | from-id, to-id, street name              | directed edge + street name          |
//! | *other* | anything                             | ignored                              |
//!
//! Ids are signed 64-bit integers.  Coordinates are truncated to fixed
//! point (see [`rr_core::coord`]); street names are trimmed.
//!
//! # Failure policy
//!
//! A malformed `V` or `E` record (wrong field count, non-numeric id or
//! coordinate, coordinate beyond ±360°, edge to an undeclared vertex)
//! aborts the load with [`NetworkError::Load`].  No partially built map is
//! ever returned.

use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use tracing::{debug, info};

use rr_core::{FixedCoord, VertexId};

use crate::network::{RoadMap, RoadMapBuilder};
use crate::{NetworkError, NetworkResult};

const VERTEX_TAG: &str = "V";
const EDGE_TAG:   &str = "E";

/// Every recognized record has a tag plus three fields.
const RECORD_FIELDS: usize = 4;

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`RoadMap`] from a road-data file.
pub fn load_road_map(path: &Path) -> NetworkResult<RoadMap> {
    let file = std::fs::File::open(path)?;
    debug!(path = %path.display(), "loading road map");
    load_road_map_reader(file)
}

/// Like [`load_road_map`] but accepts any `Read` source.
///
/// The source is read once, front to back.  Useful for testing (pass a
/// `std::io::Cursor`) or loading from a network stream.
pub fn load_road_map_reader<R: Read>(reader: R) -> NetworkResult<RoadMap> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut builder = RoadMapBuilder::new();
    let mut ignored = 0usize;

    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());

        match record.get(0).map(str::trim) {
            Some(VERTEX_TAG) => {
                let (id, pos) = parse_vertex(&record, line)?;
                builder
                    .add_vertex(id, pos)
                    .map_err(|e| load_error(line, e.to_string()))?;
            }
            Some(EDGE_TAG) => {
                let (from, to, street) = parse_edge(&record, line)?;
                builder
                    .add_directed_edge(from, to, street)
                    .map_err(|e| load_error(line, e.to_string()))?;
            }
            tag => {
                debug!(line, tag = tag.unwrap_or_default(), "ignoring road data record");
                ignored += 1;
            }
        }
    }

    let map = builder.build();
    info!(
        vertices = map.vertex_count(),
        edges = map.edge_count(),
        ignored,
        "road map loaded"
    );
    Ok(map)
}

// ── Record parsing ────────────────────────────────────────────────────────────

fn parse_vertex(record: &StringRecord, line: u64) -> NetworkResult<(VertexId, FixedCoord)> {
    let [_, id, lat, lon] = fields(record, line, "V,<id>,<lat>,<lon>")?;
    let id = parse_id(id, line)?;
    let pos = FixedCoord::parse(lat, lon).map_err(|e| load_error(line, e.to_string()))?;
    Ok((id, pos))
}

fn parse_edge(record: &StringRecord, line: u64) -> NetworkResult<(VertexId, VertexId, String)> {
    let [_, from, to, street] = fields(record, line, "E,<from>,<to>,<name>")?;
    Ok((
        parse_id(from, line)?,
        parse_id(to, line)?,
        street.trim().to_owned(),
    ))
}

fn fields<'r>(
    record: &'r StringRecord,
    line: u64,
    expected: &str,
) -> NetworkResult<[&'r str; RECORD_FIELDS]> {
    if record.len() != RECORD_FIELDS {
        return Err(load_error(
            line,
            format!("expected {expected}, found {} fields", record.len()),
        ));
    }
    Ok([&record[0], &record[1], &record[2], &record[3]])
}

fn parse_id(s: &str, line: u64) -> NetworkResult<VertexId> {
    s.parse::<VertexId>()
        .map_err(|_| load_error(line, format!("invalid vertex id {:?}", s.trim())))
}

fn load_error(line: u64, message: String) -> NetworkError {
    NetworkError::Load { line, message }
}
