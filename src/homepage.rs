//! The homepage updater: rewrites the featured-articles section of the
//! site's `index.html` in place with a fresh random sample of articles from
//! each category. Only the content between the featured-articles marker div
//! and its closing tag is touched; the rest of the homepage is preserved
//! byte-for-byte.

use crate::content::Category;
use crate::record::Record;
use crate::scan;
use log::info;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::fmt;
use std::fs;
use std::path::Path;

const START_MARKER: &str = "<div id=\"featured-articles\">";
const END_MARKER: &str = "</div>";

/// Refreshes the featured-articles section of `{output_directory}/index.html`
/// with `per_category` randomly sampled articles per category. Categories
/// with fewer emitted articles than `per_category` contribute what they have.
pub fn update_homepage(
    output_directory: &Path,
    categories: &[Category],
    per_category: usize,
    rng: &mut StdRng,
) -> Result<()> {
    let path = output_directory.join("index.html");
    let homepage = fs::read_to_string(&path)?;

    let mut sections = Vec::new();
    for category in categories {
        let dir = output_directory.join("articles").join(category.key);
        let records = scan::scan_category(&dir, category)?;
        let sample: Vec<&Record> = records.choose_multiple(rng, per_category).collect();
        sections.push(render_section(category, &sample)?);
    }

    fs::write(&path, splice_featured(&homepage, &sections.join("\n"))?)?;
    info!("homepage: {} featured sections", categories.len());
    Ok(())
}

/// Replaces the content between the featured-articles marker and its
/// matching closing `</div>` with `inner`, leaving everything around it
/// untouched. The spliced content itself contains nested divs, so the
/// closing tag is matched by depth, not by first occurrence; a rerun
/// replaces the whole previously spliced region.
pub fn splice_featured(homepage: &str, inner: &str) -> Result<String> {
    let start = homepage
        .find(START_MARKER)
        .ok_or(Error::MissingMarker { marker: START_MARKER })?
        + START_MARKER.len();
    let end = matching_close(&homepage[start..])
        .ok_or(Error::MissingMarker { marker: END_MARKER })?
        + start;
    Ok(format!(
        "{}{}{}",
        &homepage[..start],
        inner,
        &homepage[end..]
    ))
}

/// Finds the offset of the `</div>` closing the already-open marker div,
/// counting nested `<div` openings along the way.
fn matching_close(html: &str) -> Option<usize> {
    let mut depth = 1;
    let mut pos = 0;
    loop {
        let close = pos + html[pos..].find(END_MARKER)?;
        match html[pos..close].find("<div") {
            Some(open) => {
                depth += 1;
                pos += open + "<div".len();
            }
            None => {
                depth -= 1;
                if depth == 0 {
                    return Some(close);
                }
                pos = close + END_MARKER.len();
            }
        }
    }
}

fn render_section(category: &Category, records: &[&Record]) -> Result<String> {
    let cards = records
        .iter()
        .map(|record| render_card(record))
        .collect::<Result<Vec<_>>>()?
        .join("\n");
    Ok(format!(
        r#"
        <section class="py-12">
            <div class="flex justify-between items-center mb-8">
                <h2 class="text-2xl md:text-3xl font-bold">{display}</h2>
                <a href="/articles/{key}" class="text-blue-600 dark:text-blue-400 hover:underline">View All &rarr;</a>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
{cards}
            </div>
        </section>"#,
        display = category.display,
        key = category.key,
        cards = cards,
    ))
}

fn render_card(record: &Record) -> Result<String> {
    Ok(format!(
        r#"                <article class="bg-white dark:bg-gray-800 rounded-lg shadow-md overflow-hidden">
                    <div class="p-6">
                        <div class="text-sm text-blue-600 dark:text-blue-400 mb-2">{category_title}</div>
                        <h3 class="text-xl font-bold mb-2">
                            <a href="{url}" class="hover:text-blue-600 dark:hover:text-blue-400">{title}</a>
                        </h3>
                        <p class="text-gray-600 dark:text-gray-300 mb-4">{description}</p>
                        <div class="flex justify-between items-center">
                            <time datetime="{date}" class="text-sm text-gray-500 dark:text-gray-400">
                                {date_formatted}
                            </time>
                            <a href="{url}" class="text-blue-600 dark:text-blue-400 hover:underline">Read More &rarr;</a>
                        </div>
                    </div>
                </article>"#,
        category_title = record.category_title,
        url = record.url,
        title = record.title,
        description = record.description,
        date = record.date,
        date_formatted = record.date_formatted()?,
    ))
}

/// The result of a homepage-updating operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error refreshing the homepage.
#[derive(Debug)]
pub enum Error {
    /// The homepage is missing the featured-articles marker pair.
    MissingMarker { marker: &'static str },

    /// An error recovering article metadata.
    Scan(scan::Error),

    /// A record carried a date the card renderer could not parse.
    Date(chrono::ParseError),

    /// An error reading or writing the homepage file.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::MissingMarker { marker } => {
                write!(f, "Homepage is missing the '{}' marker", marker)
            }
            Error::Scan(err) => err.fmt(f),
            Error::Date(err) => err.fmt(f),
            Error::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::MissingMarker { .. } => None,
            Error::Scan(err) => Some(err),
            Error::Date(err) => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}

impl From<scan::Error> for Error {
    /// Converts [`scan::Error`]s into [`Error`]. This allows us to use the
    /// `?` operator.
    fn from(err: scan::Error) -> Error {
        Error::Scan(err)
    }
}

impl From<chrono::ParseError> for Error {
    /// Converts [`chrono::ParseError`]s into [`Error`]. This allows us to
    /// use the `?` operator.
    fn from(err: chrono::ParseError) -> Error {
        Error::Date(err)
    }
}

impl From<std::io::Error> for Error {
    /// Converts [`std::io::Error`]s into [`Error`]. This allows us to use
    /// the `?` operator.
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}
