//! The library code for the `deitheon` content generator. The architecture
//! can be generally broken down into two distinct steps:
//!
//! 1. Emitting article pages from the built-in catalog ([`crate::emit`])
//! 2. Re-deriving site-wide artifacts from the emitted pages
//!
//! The first step walks the catalog ([`crate::content`]): each category
//! contributes its fully-written articles and then stub articles generated
//! from topic titles, up to the category's target count. Every page gets a
//! JSON metadata sidecar written next to it.
//!
//! The second step never looks at the catalog again. The sitemap
//! ([`crate::sitemap`]), the category index pages ([`crate::index`]), and the
//! homepage's featured sections ([`crate::homepage`]) are all rebuilt from
//! records recovered off disk ([`crate::scan`]), so they stay correct for
//! whatever set of articles is actually present in the output directory.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod build;
pub mod config;
pub mod content;
pub mod emit;
pub mod homepage;
pub mod index;
pub mod record;
pub mod render;
pub mod scan;
pub mod sitemap;
pub mod slug;
pub mod template;
