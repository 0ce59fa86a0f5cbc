//! Content types shared by config loading, page composition, and CLI output.
//!
//! Every type here is plain data: it is deserialized from `config.toml` (merged
//! over the stock defaults), handed down to the renderers by reference, and
//! never mutated during a render.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Company identity shown across the header, contact block, and footer.
///
/// The stock profile lives in [`crate::config`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompanyProfile {
    pub name: String,
    pub tagline: String,
    /// Display-formatted phone number, used verbatim in the `tel:` link.
    pub phone: String,
    pub email: String,
    pub address: String,
    /// Display-formatted WhatsApp number; only its digits reach `wa.me`.
    pub whatsapp: String,
    /// Maps query URL for the company's town.
    pub location_link: String,
    /// Short place name shown above the address on the About card.
    pub location_label: String,
    /// Platform name → profile URL. Rendered in key order.
    pub socials: BTreeMap<String, String>,
}

/// One entry in the header navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    pub label: String,
    /// In-page anchor, e.g. `#products`.
    pub href: String,
}

impl NavLink {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

/// A labelled link rendered as a button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CallToAction {
    pub label: String,
    pub href: String,
}

impl CallToAction {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

/// Heading parameters for a titled section.
///
/// `subtitle` falls back to the company name and `icon` to the leaf glyph
/// when left out of the config.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionHeading {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub icon: Icon,
}

impl SectionHeading {
    pub fn new(title: &str, subtitle: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: Some(subtitle.to_string()),
            icon: Icon::default(),
        }
    }
}

/// A short icon-led line under the hero copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Highlight {
    pub icon: Icon,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductEntry {
    pub title: String,
    pub description: String,
    /// Image path; `None` renders a leaf placeholder tile instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub image_alt: String,
    pub cta: CallToAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GalleryImage {
    pub src: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Testimonial {
    pub quote: String,
    /// Attribution; `None` renders as `Client {n}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlogPost {
    pub label: String,
    pub title: String,
    pub excerpt: String,
    pub href: String,
}

/// Every anchor the page defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Products,
    Gallery,
    Testimonials,
    Contact,
    Blog,
}

impl SectionId {
    /// Document order.
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Products,
        SectionId::Gallery,
        SectionId::Testimonials,
        SectionId::Contact,
        SectionId::Blog,
    ];

    pub fn id(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Products => "products",
            SectionId::Gallery => "gallery",
            SectionId::Testimonials => "testimonials",
            SectionId::Contact => "contact",
            SectionId::Blog => "blog",
        }
    }

    /// The `#id` form used by hash-fragment links.
    pub fn anchor(self) -> String {
        format!("#{}", self.id())
    }

    /// Resolve an `#id` href to a section, if it names one.
    pub fn from_anchor(href: &str) -> Option<SectionId> {
        let id = href.strip_prefix('#')?;
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// Glyphs available to sections, highlights, and buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    #[default]
    Leaf,
    Phone,
    Mail,
    MapPin,
    MessageCircle,
    ChevronRight,
    Images,
    Factory,
    Send,
}
