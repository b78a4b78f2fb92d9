//! The fixed page templates and the binder that fills them. A placeholder is
//! `{name}` where `name` is lower-case ASCII and underscores; anything else
//! between braces (CSS, inline JavaScript) is passed through verbatim.
//!
//! The binder performs no escaping. Field values are author-controlled
//! literal data, never external input, so callers are responsible for not
//! breaking the surrounding markup.

use std::collections::HashMap;
use std::fmt;

/// The article page template. Placeholders: title, category, category_title,
/// slug, author, date, date_formatted, read_time, description, keywords,
/// toc, content, tags.
pub const ARTICLE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en" class="scroll-smooth">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | Deitheon</title>
    <meta name="description" content="{description}">
    <meta name="keywords" content="{keywords}">
    <link rel="icon" href="/assets/images/favicon.png" type="image/x-icon">

    <!-- Open Graph / Facebook -->
    <meta property="og:type" content="article">
    <meta property="og:url" content="https://deitheon.com/articles/{category}/{slug}.html">
    <meta property="og:title" content="{title} | Deitheon">
    <meta property="og:description" content="{description}">

    <!-- Twitter -->
    <meta property="twitter:card" content="summary_large_image">
    <meta property="twitter:url" content="https://deitheon.com/articles/{category}/{slug}.html">
    <meta property="twitter:title" content="{title} | Deitheon">
    <meta property="twitter:description" content="{description}">

    <!-- Styles -->
    <link rel="stylesheet" href="/assets/css/styles.css">
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.0.0/css/all.min.css">

    <!-- Fonts -->
    <link rel="preconnect" href="https://fonts.googleapis.com">
    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&family=Merriweather:wght@400;700&display=swap" rel="stylesheet">
    <script>
        if (localStorage.theme === 'dark' || (!('theme' in localStorage) && window.matchMedia('(prefers-color-scheme: dark)').matches)) {
            document.documentElement.classList.add('dark');
        } else {
            document.documentElement.classList.remove('dark');
        }
    </script>
</head>
<body class="min-h-screen bg-white dark:bg-gray-900 text-gray-800 dark:text-gray-200">
    <!-- Navbar Container (loaded dynamically) -->
    <div id="navbar-container"></div>

    <!-- Article Content -->
    <main class="container mx-auto px-4 max-w-4xl pt-24 pb-16">
        <!-- Breadcrumbs -->
        <nav class="text-sm mb-8" aria-label="Breadcrumb">
            <ol class="list-none p-0 flex flex-wrap items-center space-x-2">
                <li><a href="/" class="text-blue-600 dark:text-blue-400 hover:underline">Home</a></li>
                <li class="text-gray-500 dark:text-gray-400">/</li>
                <li><a href="/articles" class="text-blue-600 dark:text-blue-400 hover:underline">Articles</a></li>
                <li class="text-gray-500 dark:text-gray-400">/</li>
                <li><a href="/articles/{category}" class="text-blue-600 dark:text-blue-400 hover:underline">{category_title}</a></li>
                <li class="text-gray-500 dark:text-gray-400">/</li>
                <li class="text-gray-600 dark:text-gray-300">{title}</li>
            </ol>
        </nav>

        <!-- Article Header -->
        <header class="mb-12">
            <h1 class="text-4xl md:text-5xl font-bold mb-6 leading-tight">{title}</h1>
            <div class="flex flex-wrap items-center gap-4 text-sm text-gray-600 dark:text-gray-400 mb-6">
                <span><i class="fas fa-user mr-2"></i>{author}</span>
                <span>&bull;</span>
                <time datetime="{date}"><i class="fas fa-calendar mr-2"></i>{date_formatted}</time>
                <span>&bull;</span>
                <span><i class="fas fa-clock mr-2"></i>{read_time} min read</span>
            </div>
            <p class="text-xl text-gray-700 dark:text-gray-300 leading-relaxed">{description}</p>
        </header>

        <!-- Table of Contents -->
        <aside class="bg-gradient-to-br from-blue-50 to-indigo-50 dark:from-gray-800 dark:to-gray-700 p-6 rounded-lg mb-12 border border-blue-100 dark:border-gray-600">
            <h2 class="text-lg font-bold mb-4 flex items-center">
                <i class="fas fa-list-ul mr-2 text-blue-600 dark:text-blue-400"></i>
                Table of Contents
            </h2>
            <nav>
                <ol class="list-decimal list-inside space-y-2">
                    {toc}
                </ol>
            </nav>
        </aside>

        <!-- Article Content -->
        <article class="prose prose-lg dark:prose-invert max-w-none prose-headings:font-bold prose-h2:text-3xl prose-h2:mt-12 prose-h2:mb-6 prose-p:mb-4 prose-p:leading-relaxed prose-a:text-blue-600 dark:prose-a:text-blue-400 prose-a:no-underline hover:prose-a:underline">
            {content}
        </article>

        <!-- Tags -->
        <div class="mt-16 pt-8 border-t border-gray-200 dark:border-gray-700">
            <h3 class="text-lg font-bold mb-4 flex items-center">
                <i class="fas fa-tags mr-2 text-blue-600 dark:text-blue-400"></i>
                Tags
            </h3>
            <div class="flex flex-wrap gap-2">
                {tags}
            </div>
        </div>

        <!-- Author Bio -->
        <div class="mt-12 p-6 bg-gray-50 dark:bg-gray-800 rounded-lg border border-gray-200 dark:border-gray-700">
            <h3 class="text-lg font-bold mb-3">About the Author</h3>
            <p class="text-gray-700 dark:text-gray-300"><strong>{author}</strong> is a contributor to DeiTheon, specializing in {category_title} and related topics.</p>
        </div>

        <!-- Share Section -->
        <div class="mt-12 text-center">
            <p class="text-gray-600 dark:text-gray-400 mb-4">Found this article helpful? Share it with others!</p>
            <div class="flex justify-center gap-4">
                <a href="https://twitter.com/intent/tweet?url=https://deitheon.com/articles/{category}/{slug}.html&text={title}"
                   target="_blank" rel="noopener"
                   class="px-6 py-3 bg-blue-500 text-white rounded-lg hover:bg-blue-600 transition">
                    <i class="fab fa-twitter mr-2"></i>Share on Twitter
                </a>
                <a href="https://www.linkedin.com/sharing/share-offsite/?url=https://deitheon.com/articles/{category}/{slug}.html"
                   target="_blank" rel="noopener"
                   class="px-6 py-3 bg-blue-700 text-white rounded-lg hover:bg-blue-800 transition">
                    <i class="fab fa-linkedin mr-2"></i>Share on LinkedIn
                </a>
            </div>
        </div>
    </main>

    <!-- Footer Container (loaded dynamically) -->
    <div id="footer-container"></div>

    <!-- Component Loader & Core Scripts -->
    <script src="/assets/js/components.js"></script>
</body>
</html>
"##;

/// The category index page template. Placeholders: category, category_title,
/// category_title_lower, cards.
pub const INDEX_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en" class="scroll-smooth">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{category_title} Articles - Deitheon</title>
    <meta name="description" content="Explore our collection of articles about {category_title_lower}.">

    <!-- Open Graph / Facebook -->
    <meta property="og:type" content="website">
    <meta property="og:url" content="https://deitheon.com/articles/{category}/">
    <meta property="og:title" content="{category_title} Articles - Deitheon">
    <meta property="og:description" content="Explore our collection of articles about {category_title_lower}.">

    <!-- Styles -->
    <link rel="stylesheet" href="/assets/css/styles.css">

    <!-- Fonts -->
    <link rel="preconnect" href="https://fonts.googleapis.com">
    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&family=Merriweather:wght@400;700&display=swap" rel="stylesheet">
</head>
<body class="min-h-screen bg-white dark:bg-gray-900">
    <!-- Navbar Container (loaded dynamically) -->
    <div id="navbar-container"></div>

    <!-- Main Content -->
    <main class="container-custom pt-20">
        <!-- Breadcrumbs -->
        <nav class="text-sm mb-8" aria-label="Breadcrumb">
            <ol class="list-none p-0 flex flex-wrap items-center space-x-2">
                <li><a href="/" class="text-blue-600 dark:text-blue-400">Home</a></li>
                <li class="text-gray-500 dark:text-gray-400">/</li>
                <li><a href="/articles" class="text-blue-600 dark:text-blue-400">Articles</a></li>
                <li class="text-gray-500 dark:text-gray-400">/</li>
                <li class="text-gray-600 dark:text-gray-300">{category_title}</li>
            </ol>
        </nav>

        <!-- Category Header -->
        <header class="mb-12">
            <h1 class="text-4xl md:text-5xl font-bold mb-4">{category_title} Articles</h1>
            <p class="text-xl text-gray-600 dark:text-gray-300">
                Explore our collection of articles about {category_title_lower}.
            </p>
        </header>

        <!-- Articles Grid -->
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
            {cards}
        </div>
    </main>

    <!-- Footer Container (loaded dynamically) -->
    <div id="footer-container"></div>

    <!-- Component Loader & Core Scripts -->
    <script src="/assets/js/components.js"></script>
</body>
</html>
"##;

/// Fills every `{name}` placeholder in `template` from `fields`. A
/// placeholder with no matching field fails with [`Error::MissingField`];
/// fields that match no placeholder are silently ignored.
pub fn bind(template: &str, fields: &HashMap<&str, String>) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) if is_placeholder(&after[..end]) => {
                let name = &after[..end];
                match fields.get(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        return Err(Error::MissingField {
                            name: name.to_owned(),
                        })
                    }
                }
                rest = &after[end + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    Ok(out)
}

fn is_placeholder(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_lowercase() || b == b'_')
}

/// The result of a template-binding operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents a template-binding error.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// A placeholder in the template has no corresponding field.
    MissingField { name: String },
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::MissingField { name } => {
                write!(f, "Template placeholder '{{{}}}' has no field", name)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod test {
    use super::*;

    fn fields(pairs: &[(&'static str, &str)]) -> HashMap<&'static str, String> {
        pairs.iter().map(|(k, v)| (*k, (*v).to_owned())).collect()
    }

    #[test]
    fn test_bind_substitutes_fields() {
        let out = bind(
            "<h1>{title}</h1><p>{description}</p>",
            &fields(&[("title", "Umami"), ("description", "The fifth taste.")]),
        )
        .unwrap();
        assert_eq!("<h1>Umami</h1><p>The fifth taste.</p>", out);
    }

    #[test]
    fn test_missing_field_fails_with_name() {
        let err = bind("<h1>{title}</h1>", &fields(&[])).unwrap_err();
        assert_eq!(
            Error::MissingField {
                name: "title".to_owned()
            },
            err
        );
    }

    #[test]
    fn test_extra_fields_ignored() {
        let out = bind(
            "{title}",
            &fields(&[("title", "A"), ("unused", "B")]),
        )
        .unwrap();
        assert_eq!("A", out);
    }

    #[test]
    fn test_non_placeholder_braces_pass_through() {
        // Inline JavaScript and CSS blocks are not placeholders.
        let template = "<script>if (x) { go(); } else { stop(); }</script>{title}";
        let out = bind(template, &fields(&[("title", "T")])).unwrap();
        assert_eq!(
            "<script>if (x) { go(); } else { stop(); }</script>T",
            out
        );
    }

    #[test]
    fn test_article_template_placeholders_are_exactly_the_contract() {
        let names = [
            "title",
            "category",
            "category_title",
            "slug",
            "author",
            "date",
            "date_formatted",
            "read_time",
            "description",
            "keywords",
            "toc",
            "content",
            "tags",
        ];
        let fields: HashMap<&str, String> =
            names.iter().map(|n| (*n, format!("[{}]", n))).collect();
        let out = bind(ARTICLE_TEMPLATE, &fields).unwrap();
        for name in names.iter() {
            assert!(
                out.contains(&format!("[{}]", name)),
                "template never used field '{}'",
                name
            );
        }
        // Nothing unreplaced remains.
        assert!(!out.contains("{title}"));
    }

    #[test]
    fn test_index_template_binds() {
        let out = bind(
            INDEX_TEMPLATE,
            &fields(&[
                ("category", "food"),
                ("category_title", "Food"),
                ("category_title_lower", "food"),
                ("cards", "<article></article>"),
            ]),
        )
        .unwrap();
        assert!(out.contains("<title>Food Articles - Deitheon</title>"));
        assert!(out.contains("<article></article>"));
    }
}
