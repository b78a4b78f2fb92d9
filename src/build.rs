//! Exports the [`build_site`] function which stitches together the high-level
//! steps of generating the site's article content: emitting the article pages
//! from the built-in catalog ([`crate::emit`]), writing `sitemap.xml`
//! ([`crate::sitemap`]), rebuilding the category index pages
//! ([`crate::index`]), and refreshing the homepage's featured sections
//! ([`crate::homepage`]).

use crate::config::Config;
use crate::content::CATALOG;
use crate::emit::{Emitter, Error as EmitError};
use crate::homepage::{self, Error as HomepageError};
use crate::index::{self, Error as IndexError};
use crate::record::Record;
use crate::scan::{self, Error as ScanError};
use crate::sitemap::{self, Error as SitemapError};
use log::warn;
use rand::rngs::StdRng;
use std::fmt;
use std::fs::File;
use std::io::BufWriter;

/// Runs the full pipeline from a [`Config`] object: emits every article page,
/// then makes a second pass over the emitted site to regenerate the sitemap,
/// the category indexes, and the homepage. The homepage pass is skipped with
/// a warning when the output directory has no `index.html`; the other steps
/// create their outputs from scratch.
pub fn build_site(config: &Config, rng: &mut StdRng) -> Result<()> {
    let records = {
        let mut emitter = Emitter {
            output_directory: &config.output_directory,
            base_date: config.base_date,
            rng: &mut *rng,
        };
        emitter.emit_all(CATALOG)?
    };

    write_sitemap_file(config, &records)?;
    index::write_category_indexes(&config.output_directory, CATALOG)?;

    if config.output_directory.join("index.html").exists() {
        homepage::update_homepage(
            &config.output_directory,
            CATALOG,
            config.featured_per_category,
            rng,
        )?;
    } else {
        warn!(
            "no index.html in '{}', skipping homepage update",
            config.output_directory.display()
        );
    }

    Ok(())
}

/// Writes `sitemap.xml` into the output directory from the given records.
/// The fixed (non-article) entries take the configured base date as their
/// `lastmod`; article entries carry their own publish dates.
pub fn write_sitemap_file(config: &Config, records: &[Record]) -> Result<()> {
    let file = File::create(config.output_directory.join("sitemap.xml"))?;
    sitemap::write_sitemap(
        BufWriter::new(file),
        &config.site_root,
        &config.base_date.format("%Y-%m-%d").to_string(),
        CATALOG,
        records,
    )?;
    Ok(())
}

/// Recovers the records of an already-emitted site. Used by the standalone
/// subcommands that regenerate one artifact without re-emitting articles.
pub fn collect_records(config: &Config) -> Result<Vec<Record>> {
    Ok(scan::scan_site(&config.output_directory, CATALOG)?)
}

pub type Result<T> = std::result::Result<T, Error>;

/// The error type for building a site. Errors can be during article emission,
/// metadata recovery, or any of the second-pass artifact writers.
#[derive(Debug)]
pub enum Error {
    /// Returned for errors emitting article pages.
    Emit(EmitError),

    /// Returned for errors recovering metadata from an emitted site.
    Scan(ScanError),

    /// Returned for errors writing the sitemap.
    Sitemap(SitemapError),

    /// Returned for errors rebuilding category index pages.
    Index(IndexError),

    /// Returned for errors refreshing the homepage.
    Homepage(HomepageError),

    /// Returned for other I/O errors.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Emit(err) => err.fmt(f),
            Error::Scan(err) => err.fmt(f),
            Error::Sitemap(err) => err.fmt(f),
            Error::Index(err) => err.fmt(f),
            Error::Homepage(err) => err.fmt(f),
            Error::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Emit(err) => Some(err),
            Error::Scan(err) => Some(err),
            Error::Sitemap(err) => Some(err),
            Error::Index(err) => Some(err),
            Error::Homepage(err) => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}

impl From<EmitError> for Error {
    /// Converts [`EmitError`]s into [`Error`]. This allows us to use the `?`
    /// operator.
    fn from(err: EmitError) -> Error {
        Error::Emit(err)
    }
}

impl From<ScanError> for Error {
    /// Converts [`ScanError`]s into [`Error`]. This allows us to use the `?`
    /// operator.
    fn from(err: ScanError) -> Error {
        Error::Scan(err)
    }
}

impl From<SitemapError> for Error {
    /// Converts [`SitemapError`]s into [`Error`]. This allows us to use the
    /// `?` operator.
    fn from(err: SitemapError) -> Error {
        Error::Sitemap(err)
    }
}

impl From<IndexError> for Error {
    /// Converts [`IndexError`]s into [`Error`]. This allows us to use the `?`
    /// operator.
    fn from(err: IndexError) -> Error {
        Error::Index(err)
    }
}

impl From<HomepageError> for Error {
    /// Converts [`HomepageError`]s into [`Error`]. This allows us to use the
    /// `?` operator.
    fn from(err: HomepageError) -> Error {
        Error::Homepage(err)
    }
}

impl From<std::io::Error> for Error {
    /// Converts [`std::io::Error`]s into [`Error`]. This allows us to use the
    /// `?` operator.
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use std::fs;
    use url::Url;

    fn config(output_directory: std::path::PathBuf) -> Config {
        Config {
            site_root: Url::parse("https://deitheon.com").unwrap(),
            output_directory,
            base_date: NaiveDate::from_ymd_opt(2025, 11, 8).unwrap(),
            seed: Some(1),
            featured_per_category: 2,
        }
    }

    #[test]
    fn test_full_build_produces_every_artifact() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join("index.html"),
            "<html><div id=\"featured-articles\"></div></html>",
        )
        .unwrap();

        let config = config(tmp.path().to_path_buf());
        let mut rng = StdRng::seed_from_u64(1);
        build_site(&config, &mut rng).unwrap();

        let sitemap = fs::read_to_string(tmp.path().join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("<loc>https://deitheon.com/</loc>"));

        for key in ["philosophy", "science", "tech"].iter() {
            let dir = tmp.path().join("articles").join(key);
            assert!(dir.join("index.html").exists(), "missing {} index", key);
        }

        let homepage = fs::read_to_string(tmp.path().join("index.html")).unwrap();
        // 8 categories, 2 featured apiece.
        assert_eq!(16, homepage.matches("Read More").count());
    }

    #[test]
    fn test_build_without_homepage_still_succeeds() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config(tmp.path().to_path_buf());
        let mut rng = StdRng::seed_from_u64(2);
        build_site(&config, &mut rng).unwrap();
        assert!(!tmp.path().join("index.html").exists());
        assert!(tmp.path().join("sitemap.xml").exists());
    }

    #[test]
    fn test_collect_records_matches_emission() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config(tmp.path().to_path_buf());
        let mut rng = StdRng::seed_from_u64(3);
        let mut emitted = {
            let mut emitter = Emitter {
                output_directory: &config.output_directory,
                base_date: config.base_date,
                rng: &mut rng,
            };
            emitter.emit_all(CATALOG).unwrap()
        };
        let mut recovered = collect_records(&config).unwrap();
        emitted.sort_by(|a, b| a.url.cmp(&b.url));
        recovered.sort_by(|a, b| a.url.cmp(&b.url));
        assert_eq!(emitted, recovered);
    }
}
