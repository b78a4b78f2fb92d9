//! Builds `sitemap.xml`. The document is regenerated wholesale on every run
//! from the manifest (or from records re-derived by [`crate::scan`]): the
//! site root and fixed top-level pages, one entry per category index, and
//! one entry per article.

use crate::content::Category;
use crate::record::Record;
use std::fmt;
use std::io::Write;
use url::Url;

/// The `changefreq` values the site uses.
pub enum ChangeFreq {
    Daily,
    Weekly,
    Monthly,
}

impl fmt::Display for ChangeFreq {
    /// Renders the enum as the sitemap protocol's lower-case token.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
        })
    }
}

/// Writes the complete sitemap document to `w`.
///
/// * `site_root` is the absolute base URL every `loc` is joined against.
/// * `today` is the `lastmod` for the fixed (non-article) entries.
/// * `records` contribute one entry each, with the article's own date.
pub fn write_sitemap<W: Write>(
    mut w: W,
    site_root: &Url,
    today: &str,
    categories: &[Category],
    records: &[Record],
) -> Result<()> {
    writeln!(w, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(
        w,
        "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"
    )?;

    write_entry(&mut w, site_root.join("/")?, today, ChangeFreq::Daily, "1.0")?;
    write_entry(
        &mut w,
        site_root.join("/about.html")?,
        today,
        ChangeFreq::Monthly,
        "0.8",
    )?;
    write_entry(
        &mut w,
        site_root.join("/contact.html")?,
        today,
        ChangeFreq::Monthly,
        "0.8",
    )?;
    write_entry(
        &mut w,
        site_root.join("/articles/")?,
        today,
        ChangeFreq::Daily,
        "0.9",
    )?;

    for category in categories {
        write_entry(
            &mut w,
            site_root.join(&format!("/articles/{}/", category.key))?,
            today,
            ChangeFreq::Daily,
            "0.8",
        )?;
    }

    for record in records {
        write_entry(
            &mut w,
            site_root.join(&record.url)?,
            &record.date,
            ChangeFreq::Monthly,
            "0.7",
        )?;
    }

    writeln!(w, "</urlset>")?;
    Ok(())
}

fn write_entry<W: Write>(
    w: &mut W,
    loc: Url,
    lastmod: &str,
    changefreq: ChangeFreq,
    priority: &str,
) -> Result<()> {
    writeln!(w, "    <url>")?;
    writeln!(w, "        <loc>{}</loc>", loc)?;
    writeln!(w, "        <lastmod>{}</lastmod>", lastmod)?;
    writeln!(w, "        <changefreq>{}</changefreq>", changefreq)?;
    writeln!(w, "        <priority>{}</priority>", priority)?;
    writeln!(w, "    </url>")?;
    Ok(())
}

/// The result of a sitemap-writing operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error building the sitemap.
#[derive(Debug)]
pub enum Error {
    /// A record URL could not be joined against the site root.
    Url(url::ParseError),

    /// An error writing the output document.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Url(err) => err.fmt(f),
            Error::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Url(err) => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}

impl From<url::ParseError> for Error {
    /// Converts [`url::ParseError`]s into [`Error`]. This allows us to use
    /// the `?` operator.
    fn from(err: url::ParseError) -> Error {
        Error::Url(err)
    }
}

impl From<std::io::Error> for Error {
    /// Converts [`std::io::Error`]s into [`Error`]. This allows us to use
    /// the `?` operator.
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}
