use std::{
    fs::File,
    hash::Hash,
    io::{BufWriter, Write},
    path::Path,
};

use serde::Serialize;
use tracing::info;

use crate::{
    error::WaypointError,
    search::{Frame, SearchOutcome},
    statistics::SearchStats,
};

#[derive(Serialize)]
#[serde(bound(serialize = "T: Serialize"))]
struct FrameDump<'a, T>
where
    T: Eq + Hash + Clone,
{
    found: bool,
    stats: &'a SearchStats,
    frames: &'a [Frame<T>],
}

/// Writes a search outcome as pretty-printed JSON:
/// `{"found": .., "stats": {..}, "frames": [{"path": [..], "traversed": [[a, b], ..]}, ..]}`.
pub fn write_outcome_json<T, W>(outcome: &SearchOutcome<T>, writer: W) -> Result<(), WaypointError>
where
    T: Eq + Hash + Clone + Serialize,
    W: Write,
{
    let dump = FrameDump {
        found: outcome.found,
        stats: &outcome.stats,
        frames: &outcome.frames,
    };
    let mut writer = writer;
    serde_json::to_writer_pretty(&mut writer, &dump)?;
    writer.flush()?;
    Ok(())
}

/// Saves a search outcome as JSON at `path`; see [`write_outcome_json`].
pub fn save_outcome_json<T, P>(outcome: &SearchOutcome<T>, path: P) -> Result<(), WaypointError>
where
    T: Eq + Hash + Clone + Serialize,
    P: AsRef<Path>,
{
    let file = File::create(path.as_ref())?;
    write_outcome_json(outcome, BufWriter::new(file))?;
    info!(path = %path.as_ref().display(), frames = outcome.frames.len(), "saved frame dump");
    Ok(())
}
