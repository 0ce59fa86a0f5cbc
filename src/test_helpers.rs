//! Shared test utilities for inspecting rendered HTML.
//!
//! Maud output is compact and attribute order is fixed by the templates, so
//! plain string scanning is enough to pull out ids, hrefs, and per-section
//! slices without an HTML parser.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let html = render_page(&SiteConfig::default(), &ctx, "").into_string();
//! assert_eq!(nav_hrefs(&html).len(), 6);
//! let gallery = section_slice(&html, "gallery");
//! assert_eq!(attr_values(gallery, "alt").len(), 3);
//! ```

/// All values of `attr="..."` in document order.
///
/// Matches only when the attribute is preceded by a space, so `alt` does not
/// match inside `data-alt`.
pub fn attr_values(html: &str, attr: &str) -> Vec<String> {
    let needle = format!(" {attr}=\"");
    let mut values = Vec::new();
    let mut rest = html;
    while let Some(start) = rest.find(&needle) {
        let after = &rest[start + needle.len()..];
        let end = after.find('"').expect("unterminated attribute value");
        values.push(after[..end].to_string());
        rest = &after[end..];
    }
    values
}

/// Every `id` attribute in the document.
pub fn element_ids(html: &str) -> Vec<String> {
    attr_values(html, "id")
}

/// Every `href` that starts with `prefix`, in document order.
pub fn hrefs_starting_with(html: &str, prefix: &str) -> Vec<String> {
    attr_values(html, "href")
        .into_iter()
        .filter(|h| h.starts_with(prefix))
        .collect()
}

/// Hrefs inside the header `<nav class="site-nav">`. Panics if missing.
pub fn nav_hrefs(html: &str) -> Vec<String> {
    let start = html
        .find(r#"<nav class="site-nav">"#)
        .unwrap_or_else(|| panic!("site nav not found"));
    let nav = &html[start..];
    let end = nav.find("</nav>").expect("unterminated nav");
    attr_values(&nav[..end], "href")
}

/// The `<section id="...">` element with the given id. Panics if missing.
///
/// Sections are never nested, so the slice ends at the first `</section>`.
pub fn section_slice<'a>(html: &'a str, id: &str) -> &'a str {
    let needle = format!("<section id=\"{id}\"");
    let start = html.find(&needle).unwrap_or_else(|| {
        let ids = element_ids(html);
        panic!("section '{id}' not found. Ids present: {ids:?}")
    });
    let section = &html[start..];
    let end = section.find("</section>").expect("unterminated section");
    &section[..end + "</section>".len()]
}

/// Text of each `<h3>` in a section, raw (still HTML-escaped).
pub fn section_h3_texts(html: &str, id: &str) -> Vec<String> {
    let section = section_slice(html, id);
    let mut titles = Vec::new();
    let mut rest = section;
    while let Some(start) = rest.find("<h3>") {
        let after = &rest[start + "<h3>".len()..];
        let end = after.find("</h3>").expect("unterminated h3");
        titles.push(after[..end].to_string());
        rest = &after[end..];
    }
    titles
}
