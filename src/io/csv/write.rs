//! CSV writing operations.

use std::{fs::{self, File}, path::Path};

use anyhow::{ensure, Context, Result};
use polars::{frame::DataFrame, io::SerWriter, prelude::{CsvWriter, NamedFrom}, series::Series};

/// Build a two-column frame from crosswalk entries. `None` targets become nulls.
fn crosswalk_frame(mapping: &[(String, Option<String>)], header: (&str, &str)) -> Result<DataFrame> {
    ensure!(header.0 != header.1, "[io::csv::write] Header columns must differ, got {:?} twice", header.0);

    let (sources, targets) = mapping.iter()
        .map(|(source, target)| (source.as_str(), target.as_deref()))
        .unzip::<_, _, Vec<_>, Vec<_>>();

    Ok(DataFrame::new(vec![
        Series::new(header.0.into(), sources).into(),
        Series::new(header.1.into(), targets).into(),
    ])?)
}

/// Write a crosswalk to `path` with a header row. Missing targets are written as empty cells.
/// Parent directories are created as needed.
pub fn write_crosswalk(mapping: &[(String, Option<String>)], path: &Path, header: (&str, &str)) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("[io::csv::write] Failed to create directory {}", parent.display()))?;
    }

    let mut df = crosswalk_frame(mapping, header)?;
    let file = File::create(path)
        .with_context(|| format!("[io::csv::write] Failed to create CSV file: {}", path.display()))?;
    CsvWriter::new(file)
        .finish(&mut df)
        .with_context(|| format!("[io::csv::write] Failed to write CSV to {:?}", path))
}

/// Write a crosswalk to a CSV string.
pub fn write_crosswalk_string(mapping: &[(String, Option<String>)], header: (&str, &str)) -> Result<String> {
    let mut df = crosswalk_frame(mapping, header)?;
    let mut buffer = Vec::new();
    CsvWriter::new(&mut buffer)
        .finish(&mut df)
        .context("[io::csv::write] Failed to write CSV to string")?;
    String::from_utf8(buffer)
        .context("[io::csv::write] CSV output is not valid UTF-8")
}
