//! Layout primitives: container, titled section, card, and inline icons.
//!
//! These are stateless Maud templates. They take their parameters and
//! children as arguments and return `Markup`; nothing here reads config
//! directly, so the page module decides every value that reaches the HTML.

use crate::types::{Icon, SectionId};
use maud::{Markup, PreEscaped, html};

/// Centered, width-capped, horizontally padded wrapper.
///
/// `class_ext` is appended to the `container` class for per-use layout
/// tweaks (e.g. `"header-bar"`).
pub fn container(class_ext: Option<&str>, children: Markup) -> Markup {
    let class = match class_ext {
        Some(ext) if !ext.is_empty() => format!("container {ext}"),
        _ => "container".to_string(),
    };
    html! {
        div class=(class) { (children) }
    }
}

/// Padded, shadowed, rounded panel.
pub fn card(children: Markup) -> Markup {
    html! {
        div.card { (children) }
    }
}

/// Parameters for [`section`].
///
/// ```rust
/// use vetiver_site::components::SectionProps;
/// use vetiver_site::types::{Icon, SectionId};
///
/// let props = SectionProps::new(SectionId::Gallery, "Gallery")
///     .subtitle("From our fields")
///     .icon(Icon::Images);
/// ```
#[derive(Debug, Clone)]
pub struct SectionProps<'a> {
    pub id: SectionId,
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    pub icon: Icon,
    pub class: Option<&'a str>,
}

impl<'a> SectionProps<'a> {
    pub fn new(id: SectionId, title: &'a str) -> Self {
        Self {
            id,
            title,
            subtitle: None,
            icon: Icon::Leaf,
            class: None,
        }
    }

    pub fn subtitle(mut self, subtitle: &'a str) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = icon;
        self
    }

    pub fn class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }
}

/// Anchored, vertically padded block with a label + title heading.
///
/// The label shows `props.subtitle`, or `default_subtitle` (the company
/// name) when none is set. The heading carries the `reveal` class; the
/// page script fades it in the first time it scrolls into view. Without
/// JavaScript it is simply visible.
pub fn section(props: &SectionProps, default_subtitle: &str, children: Markup) -> Markup {
    let label = props.subtitle.unwrap_or(default_subtitle);
    let class = match props.class {
        Some(ext) => format!("section {ext}"),
        None => "section".to_string(),
    };
    html! {
        section id=(props.id.id()) class=(class) {
            (container(None, html! {
                div.section-heading.reveal {
                    div.section-label {
                        (icon(props.icon, "icon-md"))
                        span { (label) }
                    }
                    h2.section-title { (props.title) }
                }
                (children)
            }))
        }
    }
}

/// Inline SVG for a glyph, sized by `class` (`icon-sm`, `icon-md`, ...).
pub fn icon(glyph: Icon, class: &str) -> Markup {
    html! {
        svg class={ "icon " (class) } xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2"
            stroke-linecap="round" stroke-linejoin="round" aria-hidden="true" {
            (PreEscaped(icon_paths(glyph)))
        }
    }
}

fn icon_paths(glyph: Icon) -> &'static str {
    match glyph {
        Icon::Leaf => concat!(
            r#"<path d="M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10Z"/>"#,
            r#"<path d="M2 21c0-3 1.85-5.36 5.08-6C9.5 14.52 12 13 13 12"/>"#,
        ),
        Icon::Phone => {
            r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"/>"#
        }
        Icon::Mail => concat!(
            r#"<rect width="20" height="16" x="2" y="4" rx="2"/>"#,
            r#"<path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#,
        ),
        Icon::MapPin => concat!(
            r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/>"#,
            r#"<circle cx="12" cy="10" r="3"/>"#,
        ),
        Icon::MessageCircle => r#"<path d="M7.9 20A9 9 0 1 0 4 16.1L2 22Z"/>"#,
        Icon::ChevronRight => r#"<path d="m9 18 6-6-6-6"/>"#,
        Icon::Images => concat!(
            r#"<path d="M18 22H4a2 2 0 0 1-2-2V6"/>"#,
            r#"<path d="m22 13-1.296-1.296a2.41 2.41 0 0 0-3.408 0L11 18"/>"#,
            r#"<circle cx="12" cy="8" r="2"/>"#,
            r#"<rect width="16" height="16" x="6" y="2" rx="2"/>"#,
        ),
        Icon::Factory => concat!(
            r#"<path d="M2 20a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V8l-7 5V8l-7 5V4a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2Z"/>"#,
            r#"<path d="M17 18h1"/><path d="M12 18h1"/><path d="M7 18h1"/>"#,
        ),
        Icon::Send => concat!(
            r#"<path d="m22 2-7 20-4-9-9-4Z"/>"#,
            r#"<path d="M22 2 11 13"/>"#,
        ),
    }
}
