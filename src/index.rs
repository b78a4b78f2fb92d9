//! The category index builder: a second pass over the already-emitted site
//! that re-collects each category's records, sorts them newest-first, and
//! writes `articles/<category>/index.html`.

use crate::content::Category;
use crate::record::Record;
use crate::scan;
use crate::template::{self, INDEX_TEMPLATE};
use log::info;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// Rebuilds the index page for every category.
pub fn write_category_indexes(output_directory: &Path, categories: &[Category]) -> Result<()> {
    for category in categories {
        write_category_index(output_directory, category)?;
    }
    Ok(())
}

/// Rebuilds one category's index page from its emitted articles.
pub fn write_category_index(output_directory: &Path, category: &Category) -> Result<()> {
    let dir = output_directory.join("articles").join(category.key);
    let mut records = scan::scan_category(&dir, category)?;
    records.sort_by(|a, b| b.date.cmp(&a.date));

    // A category that has not been emitted yet still gets its (empty)
    // listing page.
    fs::create_dir_all(&dir)?;

    let cards = records
        .iter()
        .map(|record| render_card(record))
        .collect::<Result<Vec<_>>>()?
        .join("\n");

    let mut fields: HashMap<&str, String> = HashMap::new();
    fields.insert("category", category.key.to_owned());
    fields.insert("category_title", category.display.to_owned());
    fields.insert("category_title_lower", category.display.to_lowercase());
    fields.insert("cards", cards);

    fs::write(
        dir.join("index.html"),
        template::bind(INDEX_TEMPLATE, &fields)?,
    )?;
    info!(
        "category '{}': index page with {} cards",
        category.key,
        records.len()
    );
    Ok(())
}

fn render_card(record: &Record) -> Result<String> {
    Ok(format!(
        r#"            <article class="bg-white dark:bg-gray-800 rounded-lg shadow-md overflow-hidden">
                <div class="p-6">
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
        url = record.url,
        title = record.title,
        description = record.description,
        date = record.date,
        date_formatted = record.date_formatted()?,
    ))
}

/// The result of an index-building operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error rebuilding category index pages.
#[derive(Debug)]
pub enum Error {
    /// An error recovering article metadata.
    Scan(scan::Error),

    /// An error binding the index template.
    Template(template::Error),

    /// A record carried a date the card renderer could not parse.
    Date(chrono::ParseError),

    /// An error writing the output files.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Scan(err) => err.fmt(f),
            Error::Template(err) => err.fmt(f),
            Error::Date(err) => err.fmt(f),
            Error::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Scan(err) => Some(err),
            Error::Template(err) => Some(err),
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

impl From<template::Error> for Error {
    /// Converts [`template::Error`]s into [`Error`]. This allows us to use
    /// the `?` operator.
    fn from(err: template::Error) -> Error {
        Error::Template(err)
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
