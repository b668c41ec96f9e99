//! Record loading from files, HTTP endpoints and the bundled demo data set
//!
//! A feed is a JSON array of player game objects (or a CSV file with the
//! same column names). Individual records that fail to deserialize are
//! skipped with a warning; only a feed that cannot be read or is not an
//! array at all is an error.

use miette::Diagnostic;
use rust_embed::Embed;
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

use crate::entities::player_game::PlayerGameRecord;

#[derive(Embed)]
#[folder = "data/"]
struct DemoData;

/// File name of the bundled data set inside `data/`
const DEMO_FILE: &str = "player_games.json";

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors raised while loading a record feed
#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", path.display())]
    #[diagnostic(code(statline::load::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {origin}: {source}")]
    #[diagnostic(code(statline::load::json))]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Expected a JSON array of player games in {origin}")]
    #[diagnostic(
        code(statline::load::shape),
        help("The feed must be a top-level array: [{{\"playerName\": ...}}, ...]")
    )]
    NotAnArray { origin: String },

    #[error("Invalid CSV in {origin}: {source}")]
    #[diagnostic(code(statline::load::csv))]
    Csv {
        origin: String,
        #[source]
        source: csv::Error,
    },

    #[error("Request to {url} failed: {source}")]
    #[diagnostic(
        code(statline::load::http),
        help("Check the URL and your network connection")
    )]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    #[diagnostic(code(statline::load::status))]
    Status { url: String, status: u16 },

    #[error("The demo data set is missing from this build")]
    #[diagnostic(code(statline::load::demo))]
    MissingDemoData,
}

/// Where a record feed comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// A local `.json` or `.csv` file
    File(PathBuf),
    /// An `http(s)://` endpoint returning a JSON array
    Url(String),
    /// The data set compiled into the binary
    Demo,
}

impl DataSource {
    /// Interpret a user-supplied location: `demo`, a URL, or a file path
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("demo") {
            DataSource::Demo
        } else if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            DataSource::Url(trimmed.to_string())
        } else {
            DataSource::File(PathBuf::from(trimmed))
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => write!(f, "{}", url),
            DataSource::Demo => write!(f, "demo data set"),
        }
    }
}

/// Result of a successful load
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    pub records: Vec<PlayerGameRecord>,
    /// Entries dropped because they did not match the record schema
    pub skipped: usize,
}

/// Load every record from `source`
pub fn load(source: &DataSource) -> Result<LoadOutcome, LoadError> {
    let outcome = match source {
        DataSource::File(path) => load_file(path)?,
        DataSource::Url(url) => fetch(url)?,
        DataSource::Demo => {
            let file = DemoData::get(DEMO_FILE).ok_or(LoadError::MissingDemoData)?;
            parse_json(&file.data, "demo data set")?
        }
    };

    info!(
        source = %source,
        records = outcome.records.len(),
        skipped = outcome.skipped,
        "loaded player games"
    );
    Ok(outcome)
}

fn load_file(path: &Path) -> Result<LoadOutcome, LoadError> {
    let origin = path.display().to_string();
    let is_csv = path
        .extension()
        .map_or(false, |e| e.eq_ignore_ascii_case("csv"));

    let file = fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if is_csv {
        return parse_csv(file, &origin);
    }

    let mut bytes = Vec::new();
    std::io::BufReader::new(file)
        .read_to_end(&mut bytes)
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    parse_json(&bytes, &origin)
}

fn fetch(url: &str) -> Result<LoadOutcome, LoadError> {
    let http_err = |source| LoadError::Http {
        url: url.to_string(),
        source,
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .map_err(http_err)?;
    let response = client.get(url).send().map_err(http_err)?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let bytes = response.bytes().map_err(http_err)?;
    parse_json(&bytes, url)
}

/// Parse a JSON array feed, skipping entries that don't fit the schema
pub fn parse_json(bytes: &[u8], origin: &str) -> Result<LoadOutcome, LoadError> {
    let value: Value = serde_json::from_slice(bytes).map_err(|source| LoadError::Json {
        origin: origin.to_string(),
        source,
    })?;

    let Value::Array(entries) = value else {
        return Err(LoadError::NotAnArray {
            origin: origin.to_string(),
        });
    };

    let mut outcome = LoadOutcome::default();
    for (i, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<PlayerGameRecord>(entry) {
            Ok(record) => outcome.records.push(record),
            Err(e) => {
                warn!(origin, entry = i, error = %e, "skipping malformed record");
                outcome.skipped += 1;
            }
        }
    }

    Ok(outcome)
}

/// Parse a CSV feed whose headers use the JSON field names
pub fn parse_csv<R: Read>(reader: R, origin: &str) -> Result<LoadOutcome, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    // A missing or unreadable header row means the file isn't a feed at all
    rdr.headers().map_err(|source| LoadError::Csv {
        origin: origin.to_string(),
        source,
    })?;

    let mut outcome = LoadOutcome::default();
    for (i, row) in rdr.deserialize::<PlayerGameRecord>().enumerate() {
        match row {
            Ok(record) => outcome.records.push(record),
            Err(e) => {
                warn!(origin, row = i + 1, error = %e, "skipping malformed record");
                outcome.skipped += 1;
            }
        }
    }

    Ok(outcome)
}
