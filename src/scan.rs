//! Recovers article metadata from an already-emitted site. The preferred
//! source is the JSON sidecar written next to each page; pages without one
//! (e.g. emitted by an older run) fall back to ordered marker extraction
//! from the HTML itself.
//!
//! The marker contract with the emitter is deliberately small: the page
//! contains `<title>`, then `<meta name="description" content="`, then
//! `<time datetime="`, in that relative order. A page missing a marker is a
//! typed error, not a panic.

use crate::content::Category;
use crate::record::Record;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

const TITLE_START: &str = "<title>";
const TITLE_END: &str = "</title>";
const DESCRIPTION_START: &str = "<meta name=\"description\" content=\"";
const DESCRIPTION_END: &str = "\">";
const DATE_START: &str = "<time datetime=\"";
const DATE_END: &str = "\"";

/// The `<title>` element carries a site suffix after the article title.
const TITLE_SEPARATOR: &str = " | ";

/// Metadata recovered from one page.
#[derive(Debug, PartialEq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub date: String,
}

/// Extracts [`PageMeta`] from page markup by ordered substring search. Each
/// marker is searched for after the previous one, so marker order is part of
/// the contract.
pub fn extract(html: &str) -> Result<PageMeta> {
    let (raw_title, rest) = between(html, TITLE_START, TITLE_END)?;
    let title = match raw_title.split(TITLE_SEPARATOR).next() {
        Some(title) => title,
        None => raw_title,
    };
    let (description, rest) = between(rest, DESCRIPTION_START, DESCRIPTION_END)?;
    let (date, _) = between(rest, DATE_START, DATE_END)?;
    Ok(PageMeta {
        title: title.to_owned(),
        description: description.to_owned(),
        date: date.to_owned(),
    })
}

/// Returns the slice between `start` and `end`, plus the remainder of the
/// input after `end`.
fn between<'a>(
    html: &'a str,
    start: &'static str,
    end: &'static str,
) -> Result<(&'a str, &'a str)> {
    let from = html
        .find(start)
        .ok_or(Error::MissingMarker { marker: start })?
        + start.len();
    let len = html[from..]
        .find(end)
        .ok_or(Error::MissingMarker { marker: end })?;
    Ok((&html[from..from + len], &html[from + len + end.len()..]))
}

/// Collects one [`Record`] per article page in a category's output
/// directory, sidecar-first. `index.html` is the category's own listing and
/// is skipped. A missing directory yields an empty list so passes can run
/// against categories that have not been emitted yet.
pub fn scan_category(dir: &Path, category: &Category) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(records),
        Err(err) => {
            return Err(Error::Io {
                path: dir.to_owned(),
                err,
            })
        }
    };

    for result in entries {
        let entry = result.map_err(|err| Error::Io {
            path: dir.to_owned(),
            err,
        })?;
        let os_file_name = entry.file_name();
        let file_name = os_file_name.to_string_lossy();
        if !file_name.ends_with(".html") || file_name == "index.html" {
            continue;
        }
        let slug = file_name.trim_end_matches(".html").to_owned();
        records.push(read_record(&entry.path(), category, &slug)?);
    }

    // Directory order is platform-dependent; keep the scan deterministic.
    records.sort_by(|a, b| a.slug.cmp(&b.slug));
    Ok(records)
}

/// Collects records for every category. Used by the sitemap re-derivation
/// path, where the filesystem (not an in-memory manifest) is the source of
/// truth.
pub fn scan_site(output_directory: &Path, categories: &[Category]) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for category in categories {
        let dir = output_directory.join("articles").join(category.key);
        records.extend(scan_category(&dir, category)?);
    }
    Ok(records)
}

fn read_record(page_path: &Path, category: &Category, slug: &str) -> Result<Record> {
    let read = |path: &Path| {
        fs::read_to_string(path).map_err(|err| Error::Io {
            path: path.to_owned(),
            err,
        })
    };

    let sidecar = page_path.with_extension("json");
    if sidecar.exists() {
        let record = serde_json::from_str(&read(&sidecar)?).map_err(|err| Error::Sidecar {
            path: sidecar,
            err,
        })?;
        return Ok(record);
    }

    let meta = extract(&read(page_path)?)?;
    Ok(Record {
        title: meta.title,
        category: category.key.to_owned(),
        category_title: category.display.to_owned(),
        slug: slug.to_owned(),
        url: format!("/articles/{}/{}.html", category.key, slug),
        date: meta.date,
        description: meta.description,
    })
}

/// The result of a metadata-recovery operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error recovering metadata from emitted pages.
#[derive(Debug)]
pub enum Error {
    /// A marker the extraction contract depends on was absent.
    MissingMarker { marker: &'static str },

    /// A sidecar record failed to parse.
    Sidecar {
        path: PathBuf,
        err: serde_json::Error,
    },

    /// An I/O problem reading pages or sidecars.
    Io { path: PathBuf, err: std::io::Error },
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::MissingMarker { marker } => {
                write!(f, "Page is missing the '{}' marker", marker)
            }
            Error::Sidecar { path, err } => {
                write!(f, "Reading sidecar '{}': {}", path.display(), err)
            }
            Error::Io { path, err } => write!(f, "Reading '{}': {}", path.display(), err),
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::MissingMarker { .. } => None,
            Error::Sidecar { path: _, err } => Some(err),
            Error::Io { path: _, err } => Some(err),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::template::{self, ARTICLE_TEMPLATE};
    use std::collections::HashMap;

    fn bound_page(title: &str, description: &str, date: &str) -> String {
        let mut fields: HashMap<&str, String> = HashMap::new();
        fields.insert("title", title.to_owned());
        fields.insert("description", description.to_owned());
        fields.insert("date", date.to_owned());
        for name in [
            "category",
            "category_title",
            "slug",
            "author",
            "date_formatted",
            "read_time",
            "keywords",
            "toc",
            "content",
            "tags",
        ]
        .iter()
        {
            fields.insert(*name, "x".to_owned());
        }
        template::bind(ARTICLE_TEMPLATE, &fields).unwrap()
    }

    #[test]
    fn test_round_trip_through_binder_output() {
        let html = bound_page(
            "Umami: The Fifth Taste",
            "A deep dive into glutamate.",
            "2025-03-14",
        );
        let meta = extract(&html).unwrap();
        assert_eq!(
            PageMeta {
                title: "Umami: The Fifth Taste".to_owned(),
                description: "A deep dive into glutamate.".to_owned(),
                date: "2025-03-14".to_owned(),
            },
            meta
        );
    }

    #[test]
    fn test_missing_marker_is_a_typed_error() {
        match extract("<html><body>no head here</body></html>") {
            Err(Error::MissingMarker { marker }) => assert_eq!(TITLE_START, marker),
            other => panic!("expected MissingMarker, got {:?}", other),
        }
    }

    #[test]
    fn test_markers_must_appear_in_order() {
        // A datetime before the description marker is not found by the
        // ordered search.
        let html = "<title>T | Deitheon</title>\
                    <time datetime=\"2025-01-01\">\
                    <meta name=\"description\" content=\"D\">";
        match extract(html) {
            Err(Error::MissingMarker { marker }) => assert_eq!(DATE_START, marker),
            other => panic!("expected MissingMarker, got {:?}", other),
        }
    }

    #[test]
    fn test_scan_missing_directory_is_empty() {
        let category = &crate::content::CATALOG[0];
        let records =
            scan_category(Path::new("/nonexistent/deitheon-test"), category).unwrap();
        assert!(records.is_empty());
    }
}
