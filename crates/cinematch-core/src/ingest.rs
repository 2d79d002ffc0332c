//! CSV ingestion of the movie, keyword and rating tables
//!
//! Parsing is lenient: rows that cannot be decoded, or whose identifier is
//! blank, are skipped with a warning. Only a missing file or a missing
//! required column is an error.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, warn};

use crate::error::{CinematchError, Result};
use crate::id::MovieId;

/// One row of the movie metadata table
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRow {
    pub id: MovieId,
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub overview: Option<String>,
}

/// One row of the keyword table; `keywords` is the raw serialized list
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordRow {
    pub id: MovieId,
    pub keywords: Option<String>,
}

/// One user rating
#[derive(Debug, Clone, PartialEq)]
pub struct RatingRow {
    pub movie_id: MovieId,
    pub rating: f64,
}

/// Column positions resolved from a table header
struct Header {
    table: &'static str,
    record: StringRecord,
}

impl Header {
    fn position(&self, column: &str) -> Option<usize> {
        self.record
            .iter()
            .position(|h| h.trim_start_matches('\u{feff}').trim() == column)
    }

    fn required(&self, column: &str) -> Result<usize> {
        self.position(column)
            .ok_or_else(|| CinematchError::missing_column(self.table, column))
    }
}

/// Non-empty cell text
fn cell(record: &StringRecord, idx: Option<usize>) -> Option<String> {
    let value = record.get(idx?)?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Walk every decodable record of a table, skipping the rest
fn read_table<R, T>(
    reader: R,
    table: &'static str,
    mut decode: impl FnMut(&Header, &StringRecord) -> Result<Option<T>>,
    prepare: impl FnOnce(&Header) -> Result<()>,
) -> Result<Vec<T>>
where
    R: Read,
{
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);
    let header = Header {
        table,
        record: rdr.headers()?.clone(),
    };
    prepare(&header)?;

    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for (line, result) in rdr.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!(table, line = line + 2, error = %e, "skipping undecodable row");
                skipped += 1;
                continue;
            }
        };

        match decode(&header, &record)? {
            Some(row) => rows.push(row),
            None => skipped += 1,
        }
    }

    debug!(table, rows = rows.len(), skipped, "table_loaded");
    Ok(rows)
}

/// Read the movie metadata table
pub fn read_movies<R: Read>(reader: R) -> Result<Vec<MovieRow>> {
    read_table(
        reader,
        "movies",
        |header, record| {
            let id = record
                .get(header.required("id")?)
                .and_then(MovieId::parse);
            let Some(id) = id else {
                return Ok(None);
            };
            Ok(Some(MovieRow {
                id,
                title: cell(record, header.position("title")),
                release_date: cell(record, header.position("release_date")),
                overview: cell(record, header.position("overview")),
            }))
        },
        |header| {
            header.required("id")?;
            header.required("title")?;
            Ok(())
        },
    )
}

/// Read the keyword table
pub fn read_keywords<R: Read>(reader: R) -> Result<Vec<KeywordRow>> {
    read_table(
        reader,
        "keywords",
        |header, record| {
            let id = record
                .get(header.required("id")?)
                .and_then(MovieId::parse);
            Ok(id.map(|id| KeywordRow {
                id,
                keywords: cell(record, header.position("keywords")),
            }))
        },
        |header| {
            header.required("id")?;
            header.required("keywords")?;
            Ok(())
        },
    )
}

/// Read the ratings table; rows with a non-numeric rating are skipped
pub fn read_ratings<R: Read>(reader: R) -> Result<Vec<RatingRow>> {
    read_table(
        reader,
        "ratings",
        |header, record| {
            let movie_id = record
                .get(header.required("movieId")?)
                .and_then(MovieId::parse);
            let rating = record
                .get(header.required("rating")?)
                .and_then(|r| r.trim().parse::<f64>().ok())
                .filter(|r| r.is_finite());
            Ok(match (movie_id, rating) {
                (Some(movie_id), Some(rating)) => Some(RatingRow { movie_id, rating }),
                _ => None,
            })
        },
        |header| {
            header.required("movieId")?;
            header.required("rating")?;
            Ok(())
        },
    )
}

fn open_table(path: &Path) -> Result<File> {
    if !path.exists() {
        return Err(CinematchError::DataFileNotFound {
            path: path.to_path_buf(),
        });
    }
    File::open(path).map_err(|e| CinematchError::io_operation("open", path.display(), e))
}

/// Read the movie metadata table from disk
pub fn load_movies(path: &Path) -> Result<Vec<MovieRow>> {
    read_movies(open_table(path)?)
}

/// Read the keyword table from disk
pub fn load_keywords(path: &Path) -> Result<Vec<KeywordRow>> {
    read_keywords(open_table(path)?)
}

/// Read the ratings table from disk
pub fn load_ratings(path: &Path) -> Result<Vec<RatingRow>> {
    read_ratings(open_table(path)?)
}
