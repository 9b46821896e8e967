//! Serialization round-trip exercise
//!
//! Bug class: incorrect library API usage. The "buffered" variants build
//! the entire JSON document as an in-memory string before writing, and
//! slurp the whole file into a string before parsing. The output is
//! byte-identical to the streaming variants, so nothing fails - the defect
//! is an inefficiency that only an API-usage review catches.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde_json::{json, Value};
use tracing::debug;

use crate::common::{Error, Result};
use crate::report;

/// Persist a configuration record to `path` as pretty-printed JSON.
///
/// Streams directly into a buffered writer; the document is never
/// materialized as an intermediate string.
pub fn save_config(config: &Value, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::ConfigWrite {
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, config)?;
    writer.flush()?;
    debug!(path = %path.display(), "config written");
    Ok(())
}

/// Reconstruct a configuration record from the JSON file at `path`.
///
/// Streams from a buffered reader. Fails with [`Error::ConfigRead`] if the
/// path is unreadable and [`Error::Json`] if the content is malformed;
/// remediation is the caller's decision.
pub fn load_config(path: &Path) -> Result<Value> {
    let file = File::open(path).map_err(|e| Error::ConfigRead {
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    let config = serde_json::from_reader(BufReader::new(file))?;
    Ok(config)
}

/// Same contract as [`save_config`], done the roundabout way.
///
/// BUG (inefficiency, not incorrectness): renders the whole document to a
/// `String` and then writes that string out, instead of serializing
/// straight into the file.
pub fn save_config_buffered(config: &Value, path: &Path) -> Result<()> {
    let json_string = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json_string).map_err(|e| Error::ConfigWrite {
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    Ok(())
}

/// Same contract as [`load_config`], done the roundabout way.
///
/// BUG (inefficiency, not incorrectness): reads the entire file into a
/// `String` and parses that, instead of parsing from the reader.
pub fn load_config_buffered(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    let config = serde_json::from_str(&content)?;
    Ok(config)
}

/// The configuration record used by the demo
pub fn sample_config() -> Value {
    json!({
        "app_name": "MyApp",
        "version": "1.0.0",
        "settings": {
            "debug": true,
            "port": 8080
        }
    })
}

/// Demonstration harness: round-trips the sample config through both
/// variant pairs and compares the persisted bytes.
pub fn demo() -> Result<()> {
    report::heading(
        "serialization round-trip",
        "bug class: incorrect library API usage",
    );

    let config = sample_config();
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("config.json");

    report::section("Buffered variants (string detour)");
    save_config_buffered(&config, &path)?;
    let loaded = load_config_buffered(&path)?;
    report::comparison("load(save(config)) == config", true, loaded == config);
    report::note("correct result, but the whole document is held in memory twice");
    let buffered_bytes = std::fs::read(&path)?;

    report::section("Streaming variants");
    save_config(&config, &path)?;
    let loaded = load_config(&path)?;
    report::comparison("load(save(config)) == config", true, loaded == config);
    report::comparison(
        "persisted files byte-identical",
        true,
        buffered_bytes == std::fs::read(&path)?,
    );

    // The scratch file is removed when `dir` drops.
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested_config() -> Value {
        json!({
            "name": "lab",
            "enabled": true,
            "retries": null,
            "threshold": 0.75,
            "tags": ["a", "b", "c"],
            "nested": {
                "port": 8080,
                "hosts": [{"name": "alpha"}, {"name": "beta"}]
            }
        })
    }

    #[test]
    fn round_trip_streaming() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = nested_config();

        save_config(&config, &path).unwrap();
        assert_eq!(load_config(&path).unwrap(), config);
    }

    #[test]
    fn round_trip_buffered() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = nested_config();

        save_config_buffered(&config, &path).unwrap();
        assert_eq!(load_config_buffered(&path).unwrap(), config);
    }

    #[test]
    fn variants_are_interchangeable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = nested_config();

        save_config(&config, &path).unwrap();
        assert_eq!(load_config_buffered(&path).unwrap(), config);

        save_config_buffered(&config, &path).unwrap();
        assert_eq!(load_config(&path).unwrap(), config);
    }

    #[test]
    fn persisted_files_are_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let streamed = dir.path().join("streamed.json");
        let buffered = dir.path().join("buffered.json");
        let config = nested_config();

        save_config(&config, &streamed).unwrap();
        save_config_buffered(&config, &buffered).unwrap();

        assert_eq!(
            std::fs::read(&streamed).unwrap(),
            std::fs::read(&buffered).unwrap()
        );
    }

    #[test]
    fn malformed_content_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(load_config(&path), Err(Error::Json(_))));
        assert!(matches!(load_config_buffered(&path), Err(Error::Json(_))));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.json");

        assert!(matches!(
            load_config(&path),
            Err(Error::ConfigRead { .. })
        ));
    }

    #[test]
    fn unwritable_path_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("config.json");

        assert!(matches!(
            save_config(&nested_config(), &path),
            Err(Error::ConfigWrite { .. })
        ));
    }
}
