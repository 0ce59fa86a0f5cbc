//! CLI output formatting.
//!
//! Output is **information-first**: each section of the page is listed by
//! position and title, with its anchor and item count as context. The same
//! inventory is shown by `check` and `build`, so a config change can be
//! reviewed before anything is written.
//!
//! # Output Format
//!
//! ## Site inventory
//!
//! ```text
//! Sections
//! 001 Home (#home) [nav]
//! 002 About Us (#about) [nav]
//! 003 Products & Services (#products) [nav]
//!     3 products
//! ...
//!
//! Links
//!     WhatsApp: https://wa.me/916380756104
//!     Phone: tel:+91 6380756104
//!     Email: mailto:shivasakthibiocompany@gmail.com
//!     Maps: https://maps.google.com/?q=Virudhachalam,Tamilnadu,India
//!
//! Form
//!     inert (no action configured)
//! ```
//!
//! ## Generate
//!
//! ```text
//! Page → dist/index.html
//! Assets
//!     favicon.ico
//!
//! Generated 1 page, 1 asset
//! ```
//!
//! # Architecture
//!
//! Each `format_*` function returns `Vec<String>` and does no I/O; the
//! `print_*` wrappers write the lines to stdout.

use crate::config::SiteConfig;
use crate::generate::GenerateReport;
use crate::links::ContactLinks;
use crate::types::SectionId;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Title and item count line for a section, if it has repeated items.
fn section_summary(config: &SiteConfig, section: SectionId) -> (String, Option<String>) {
    match section {
        SectionId::Home => (config.hero.heading.clone(), None),
        SectionId::About => (config.about.heading.title.clone(), None),
        SectionId::Products => (
            config.products.heading.title.clone(),
            Some(plural(config.products.items.len(), "product", "products")),
        ),
        SectionId::Gallery => (
            config.gallery.heading.title.clone(),
            Some(plural(config.gallery.images.len(), "image", "images")),
        ),
        SectionId::Testimonials => (
            config.testimonials.heading.title.clone(),
            Some(plural(config.testimonials.items.len(), "quote", "quotes")),
        ),
        SectionId::Contact => (config.contact.heading.title.clone(), None),
        SectionId::Blog => (
            config.blog.heading.title.clone(),
            Some(plural(config.blog.posts.len(), "post", "posts")),
        ),
    }
}

/// Format the section inventory, derived links, and form state.
pub fn format_site_output(config: &SiteConfig) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Sections".to_string());
    let rendered = SectionId::ALL
        .into_iter()
        .filter(|s| *s != SectionId::Blog || !config.blog.posts.is_empty());
    for (i, section) in rendered.enumerate() {
        let (title, detail) = section_summary(config, section);
        let anchor = section.anchor();
        let in_nav = config.nav.iter().any(|l| l.href == anchor);
        let nav_marker = if in_nav { " [nav]" } else { "" };
        lines.push(format!(
            "{} {} ({}){}",
            format_index(i + 1),
            title,
            anchor,
            nav_marker
        ));
        if let Some(detail) = detail {
            lines.push(format!("{}{}", indent(1), detail));
        }
    }

    let links = ContactLinks::from_profile(&config.company);
    lines.push(String::new());
    lines.push("Links".to_string());
    lines.push(format!("{}WhatsApp: {}", indent(1), links.whatsapp));
    lines.push(format!("{}Phone: {}", indent(1), links.tel));
    lines.push(format!("{}Email: {}", indent(1), links.mailto));
    lines.push(format!("{}Maps: {}", indent(1), links.location));

    lines.push(String::new());
    lines.push("Form".to_string());
    match &config.contact.form.action {
        Some(action) => lines.push(format!("{}posts to {}", indent(1), action)),
        None => lines.push(format!("{}inert (no action configured)", indent(1))),
    }

    lines
}

pub fn print_site_output(config: &SiteConfig) {
    for line in format_site_output(config) {
        println!("{}", line);
    }
}

/// Format what a generate run wrote.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = vec![format!("Page → {}", report.index.display())];
    if !report.assets.is_empty() {
        lines.push("Assets".to_string());
        for asset in &report.assets {
            lines.push(format!("{}{}", indent(1), asset.display()));
        }
    }
    lines.push(String::new());
    lines.push(format!(
        "Generated 1 page, {}",
        plural(report.assets.len(), "asset", "assets")
    ));
    lines
}

pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn format_index_pads_to_three_digits() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
    }

    #[test]
    fn site_output_lists_sections_in_order() {
        let lines = format_site_output(&SiteConfig::default());
        assert_eq!(lines[0], "Sections");
        assert_eq!(lines[1], "001 Premium Vetiver-Based Products (#home) [nav]");
        assert_eq!(lines[2], "002 About Us (#about) [nav]");
        assert_eq!(lines[3], "003 Products & Services (#products) [nav]");
        assert_eq!(lines[4], "    3 products");
    }

    #[test]
    fn testimonials_are_not_marked_nav() {
        let lines = format_site_output(&SiteConfig::default());
        assert!(lines.contains(&"005 Testimonials (#testimonials)".to_string()));
    }

    #[test]
    fn site_output_shows_derived_links() {
        let lines = format_site_output(&SiteConfig::default());
        assert!(lines.contains(&"    WhatsApp: https://wa.me/916380756104".to_string()));
        assert!(lines.contains(&"    Phone: tel:+91 6380756104".to_string()));
        assert!(lines.contains(&"    Email: mailto:shivasakthibiocompany@gmail.com".to_string()));
    }

    #[test]
    fn site_output_reports_form_state() {
        let mut config = SiteConfig::default();
        let lines = format_site_output(&config);
        assert_eq!(lines.last().unwrap(), "    inert (no action configured)");

        config.contact.form.action = Some("https://forms.example.com".to_string());
        let lines = format_site_output(&config);
        assert_eq!(lines.last().unwrap(), "    posts to https://forms.example.com");
    }

    #[test]
    fn site_output_skips_empty_blog() {
        let mut config = SiteConfig::default();
        config.blog.posts.clear();
        let lines = format_site_output(&config);
        assert!(!lines.iter().any(|l| l.contains("(#blog)")));
    }

    #[test]
    fn generate_output_lists_assets() {
        let report = GenerateReport {
            index: PathBuf::from("dist/index.html"),
            assets: vec![PathBuf::from("favicon.ico")],
        };
        let lines = format_generate_output(&report);
        assert_eq!(
            lines,
            vec![
                "Page → dist/index.html",
                "Assets",
                "    favicon.ico",
                "",
                "Generated 1 page, 1 asset",
            ]
        );
    }

    #[test]
    fn generate_output_without_assets() {
        let report = GenerateReport {
            index: PathBuf::from("dist/index.html"),
            assets: vec![],
        };
        let lines = format_generate_output(&report);
        assert_eq!(lines.last().unwrap(), "Generated 1 page, 0 assets");
        assert!(!lines.contains(&"Assets".to_string()));
    }
}
