//! The slug normalizer. Every slug on the site (article file names, section
//! anchors, tag links) must be produced by [`slugify`] so that every producer
//! and consumer of a link computes the same identifier for the same title.

/// Converts a title into a URL-safe slug: lower-cased, spaces replaced by
/// hyphens, and a fixed set of punctuation characters stripped. The function
/// is idempotent. There is no collision detection and no Unicode
/// normalization; non-ASCII titles are passed through lower-cased.
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('-'),
            ':' | ',' | '?' | '\'' | '(' | ')' => None,
            c => Some(c),
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_lowercases_and_hyphenates() {
        assert_eq!(
            "the-metaphysics-revolution",
            slugify("The Metaphysics Revolution")
        );
    }

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(
            "platos-cave-understanding-reality-and-illusion",
            slugify("Plato's Cave: Understanding Reality and Illusion")
        );
        assert_eq!(
            "the-metaverse-hype-or-future",
            slugify("The Metaverse: Hype or Future?")
        );
        assert_eq!(
            "wine-and-terroir-geography-in-a-glass",
            slugify("Wine and Terroir: Geography in a Glass")
        );
    }

    #[test]
    fn test_idempotent() {
        let titles = [
            "The Simulation Hypothesis: Are We Living in a Computer",
            "Umami: The Fifth Taste",
            "Democracy in the Digital Age: Social Media and Political Polarization",
            "already-a-slug",
        ];
        for title in titles.iter() {
            let once = slugify(title);
            assert_eq!(once, slugify(&once));
        }
    }

    #[test]
    fn test_no_forbidden_characters() {
        let slug = slugify("What's This: A, Question? (Maybe)");
        for forbidden in [' ', ':', ',', '?', '\'', '(', ')'].iter() {
            assert!(!slug.contains(*forbidden), "slug contains {:?}", forbidden);
        }
    }
}
