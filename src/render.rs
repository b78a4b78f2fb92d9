//! Renders article fragments: section blocks, the table of contents, and tag
//! pills. Section anchors and tag links are slugified with [`slugify`] so
//! they line up with every other consumer of the same titles.

use crate::slug::slugify;
use std::fmt::Write;

/// Renders one `<section>` block. The body prose is split on the literal
/// `". "` into sentence fragments, each wrapped in its own paragraph (with a
/// trailing period re-appended when the fragment lacks one). The split is
/// purely mechanical: it does not understand abbreviations, decimals, or
/// quoted periods, so "e.g. " and "3.14" fragment incorrectly. That is an
/// accepted content-formatting limitation, not something to paper over here.
pub fn render_section<S: AsRef<str>>(heading: S, prose: S) -> String {
    let heading = heading.as_ref();
    let mut body = String::new();
    for fragment in prose.as_ref().split(". ") {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            continue;
        }
        let period = if fragment.ends_with('.') { "" } else { "." };
        // String formatting into a String can't fail.
        let _ = write!(body, "<p class=\"mb-4\">{}{}</p>", fragment, period);
    }
    format!(
        "<section id=\"{}\" class=\"mb-8\"><h2 class=\"text-2xl font-bold mb-4\">{}</h2>{}</section>",
        slugify(heading),
        heading,
        body
    )
}

/// Renders all sections in input order, one block per entry.
pub fn render_sections<S: AsRef<str>>(sections: &[(S, S)]) -> String {
    sections
        .iter()
        .map(|(heading, prose)| render_section(heading.as_ref(), prose.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the table of contents for the given sections. The anchor ids are
/// pairwise identical to (and in the same order as) the ids produced by
/// [`render_sections`].
pub fn render_toc<S: AsRef<str>>(sections: &[(S, S)]) -> String {
    sections
        .iter()
        .map(|(heading, _)| {
            format!(
                "<li><a href=\"#{}\" class=\"text-blue-600 dark:text-blue-400 hover:underline\">{}</a></li>",
                slugify(heading.as_ref()),
                heading.as_ref()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders tag pills, in tag order. Duplicate tags render twice; uniqueness
/// is the content author's concern.
pub fn render_tags<S: AsRef<str>>(tags: &[S]) -> String {
    tags.iter()
        .map(|tag| {
            format!(
                "<a href=\"/tags/{}\" class=\"px-4 py-2 bg-blue-100 dark:bg-blue-900 text-blue-800 dark:text-blue-200 rounded-full text-sm hover:bg-blue-200 dark:hover:bg-blue-800 transition\">{}</a>",
                slugify(tag.as_ref()),
                tag.as_ref()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_naive_sentence_split() {
        let html = render_section("How It Works", "CRISPR works. It cuts DNA. It is precise.");
        assert_eq!(3, html.matches("<p class=\"mb-4\">").count());
        assert!(html.contains("<p class=\"mb-4\">CRISPR works.</p>"));
        assert!(html.contains("<p class=\"mb-4\">It cuts DNA.</p>"));
        assert!(html.contains("<p class=\"mb-4\">It is precise.</p>"));
    }

    #[test]
    fn test_trailing_period_reappended() {
        let html = render_section("Heading", "No trailing period here");
        assert!(html.contains("<p class=\"mb-4\">No trailing period here.</p>"));
    }

    #[test]
    fn test_abbreviations_fragment_incorrectly() {
        // Known limitation of the mechanical split: "e.g. " is treated as a
        // sentence boundary. This test pins the behavior down so nobody
        // "fixes" it silently and drifts from the emitted corpus.
        let html = render_section("Heading", "Some tools, e.g. hammers, are simple.");
        assert_eq!(2, html.matches("<p class=\"mb-4\">").count());
        assert!(html.contains("<p class=\"mb-4\">Some tools, e.g.</p>"));
    }

    #[test]
    fn test_toc_and_content_anchors_match() {
        let sections = vec![
            ("Introduction", "First."),
            ("Key Concepts: A Primer", "Second."),
            ("What's Next?", "Third."),
        ];
        let toc = render_toc(&sections);
        let content = render_sections(&sections);

        let toc_anchors: Vec<&str> = toc
            .split("href=\"#")
            .skip(1)
            .map(|rest| rest.split('"').next().unwrap())
            .collect();
        let content_anchors: Vec<&str> = content
            .split("<section id=\"")
            .skip(1)
            .map(|rest| rest.split('"').next().unwrap())
            .collect();

        assert_eq!(toc_anchors, content_anchors);
        assert_eq!(
            vec!["introduction", "key-concepts-a-primer", "whats-next"],
            toc_anchors
        );
    }

    #[test]
    fn test_sections_render_in_input_order() {
        let sections = vec![("Zeta", "One."), ("Alpha", "Two.")];
        let content = render_sections(&sections);
        let zeta = content.find("id=\"zeta\"").unwrap();
        let alpha = content.find("id=\"alpha\"").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn test_tags_preserve_order_and_duplicates() {
        let tags = vec!["Research", "Analysis", "Research"];
        let html = render_tags(&tags);
        assert_eq!(2, html.matches("/tags/research").count());
        assert!(html.find("/tags/research").unwrap() < html.find("/tags/analysis").unwrap());
    }
}
