//! Defines [`Record`], the per-article metadata record. One record is
//! produced for every emitted page, appended to the run's manifest, and
//! written next to the page as a JSON sidecar so downstream passes (index
//! pages, homepage, sitemap) never have to re-parse markup.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Metadata for one emitted article page. `url` is the site-absolute path,
/// `date` is the ISO 8601 publish date.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub title: String,
    pub category: String,
    pub category_title: String,
    pub slug: String,
    pub url: String,
    pub date: String,
    pub description: String,
}

impl Record {
    /// The long-form rendering of the publish date ("November 08, 2025"),
    /// as shown on listing cards.
    pub fn date_formatted(&self) -> Result<String, chrono::ParseError> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")?;
        Ok(date.format("%B %d, %Y").to_string())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_round_trips_through_json() {
        let record = Record {
            title: "Umami: The Fifth Taste".to_owned(),
            category: "food".to_owned(),
            category_title: "Food".to_owned(),
            slug: "umami-the-fifth-taste".to_owned(),
            url: "/articles/food/umami-the-fifth-taste.html".to_owned(),
            date: "2025-06-01".to_owned(),
            description: "A short description.".to_owned(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(record, serde_json::from_str(&json).unwrap());
    }

    #[test]
    fn test_date_formatted_long_form() {
        let record = Record {
            title: String::new(),
            category: String::new(),
            category_title: String::new(),
            slug: String::new(),
            url: String::new(),
            date: "2025-06-01".to_owned(),
            description: String::new(),
        };
        assert_eq!("June 01, 2025", record.date_formatted().unwrap());
    }
}
