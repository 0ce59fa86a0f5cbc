//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Everything the page
//! shows (company identity, navigation, section copy, the product, gallery,
//! testimonial and blog lists, theme colors) lives in [`SiteConfig`]. Its stock
//! defaults are the published Shiva Sakthi Bio Company site, so an empty
//! content directory still builds the full page.
//!
//! ## Config File Location
//!
//! ```text
//! content/
//! ├── config.toml     # Optional, overrides stock defaults
//! └── assets/         # Optional, copied to the output root
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! [company]
//! phone = "+91 98765 43210"
//!
//! [theme]
//! primary = "#14532d"
//! ```
//!
//! Tables merge key by key; arrays (`nav`, `products.items`, ...) replace the
//! stock array wholesale. Unknown keys are rejected to catch typos early.

use crate::links::digits_only;
use crate::types::{
    BlogPost, CallToAction, CompanyProfile, GalleryImage, Highlight, Icon, NavLink, ProductEntry,
    SectionHeading, SectionId, Testimonial,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

const HERO_IMAGE: &str = "/mnt/data/IMG-20250813-WA0008.jpg";
const FIELD_IMAGE: &str = "/mnt/data/IMG-20250730-WA0020.jpg";

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub company: CompanyProfile,
    /// Header navigation, in display order.
    pub nav: Vec<NavLink>,
    pub hero: HeroConfig,
    pub about: AboutConfig,
    pub products: ProductsConfig,
    pub gallery: GalleryConfig,
    pub testimonials: TestimonialsConfig,
    pub contact: ContactConfig,
    pub blog: BlogConfig,
    pub theme: ThemeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            company: CompanyProfile::default(),
            nav: default_nav(),
            hero: HeroConfig::default(),
            about: AboutConfig::default(),
            products: ProductsConfig::default(),
            gallery: GalleryConfig::default(),
            testimonials: TestimonialsConfig::default(),
            contact: ContactConfig::default(),
            blog: BlogConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Reject configurations that would render a broken page.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.company.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "company.name must not be empty".into(),
            ));
        }
        if digits_only(&self.company.whatsapp).is_empty() {
            return Err(ConfigError::Validation(format!(
                "company.whatsapp {:?} contains no digits",
                self.company.whatsapp
            )));
        }

        let mut seen = HashSet::new();
        for link in &self.nav {
            match SectionId::from_anchor(&link.href) {
                None => {
                    return Err(ConfigError::Validation(format!(
                        "nav link {:?} points to {:?}, which is not a section anchor",
                        link.label, link.href
                    )));
                }
                Some(SectionId::Blog) if self.blog.posts.is_empty() => {
                    return Err(ConfigError::Validation(format!(
                        "nav link {:?} points to #blog, but blog.posts is empty",
                        link.label
                    )));
                }
                Some(_) => {}
            }
            if !seen.insert(link.href.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "nav href {:?} is listed more than once",
                    link.href
                )));
            }
        }

        if self.products.items.is_empty() {
            return Err(ConfigError::Validation(
                "products.items must not be empty".into(),
            ));
        }
        if self.gallery.images.is_empty() {
            return Err(ConfigError::Validation(
                "gallery.images must not be empty".into(),
            ));
        }
        if self.testimonials.items.is_empty() {
            return Err(ConfigError::Validation(
                "testimonials.items must not be empty".into(),
            ));
        }
        for (key, value) in self.theme.entries() {
            if value.trim().is_empty() || value.contains(THEME_FORBIDDEN) {
                return Err(ConfigError::Validation(format!(
                    "theme.{key} {value:?} is not a plain CSS value"
                )));
            }
        }
        Ok(())
    }
}

impl Default for CompanyProfile {
    fn default() -> Self {
        let socials = ["facebook", "instagram", "linkedin"]
            .into_iter()
            .map(|p| (p.to_string(), "#".to_string()))
            .collect::<BTreeMap<_, _>>();
        Self {
            name: "Shiva Sakthi Bio Company".to_string(),
            tagline: "Grow more with Less — the future of Farming is here".to_string(),
            phone: "+91 6380756104".to_string(),
            email: "shivasakthibiocompany@gmail.com".to_string(),
            address: "Krishnabalaambigai complex, Virudhachalam, Tamilnadu, India".to_string(),
            whatsapp: "+91 6380756104".to_string(),
            location_link: "https://maps.google.com/?q=Virudhachalam,Tamilnadu,India".to_string(),
            location_label: "Virudhachalam, Tamil Nadu, India".to_string(),
            socials,
        }
    }
}

/// Stock navigation: one link per section except Testimonials.
pub fn default_nav() -> Vec<NavLink> {
    vec![
        NavLink::new("Home", "#home"),
        NavLink::new("About", "#about"),
        NavLink::new("Products", "#products"),
        NavLink::new("Gallery", "#gallery"),
        NavLink::new("Contact", "#contact"),
        NavLink::new("Blog", "#blog"),
    ]
}

// =============================================================================
// Section configs
// =============================================================================

/// Hero banner copy, calls to action, and image.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeroConfig {
    pub heading: String,
    /// Follows the company tagline in the hero paragraph.
    pub blurb: String,
    pub primary_cta: CallToAction,
    pub secondary_cta: CallToAction,
    pub highlights: Vec<Highlight>,
    pub image: String,
    pub image_alt: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            heading: "Premium Vetiver-Based Products".to_string(),
            blurb: "We cultivate and craft world-class vetiver (Khus) products with \
                    sustainability at the core — serving customers across the globe."
                .to_string(),
            primary_cta: CallToAction::new("Explore Products", "#products"),
            secondary_cta: CallToAction::new("Get a Quote", "#contact"),
            highlights: vec![
                Highlight {
                    icon: Icon::Factory,
                    text: "Sustainable cultivation".to_string(),
                },
                Highlight {
                    icon: Icon::Leaf,
                    text: "Ethical sourcing".to_string(),
                },
                Highlight {
                    icon: Icon::Images,
                    text: "Strict quality control".to_string(),
                },
            ],
            image: HERO_IMAGE.to_string(),
            image_alt: "Vetiver grow bags at Shiva Sakthi Bio Company".to_string(),
        }
    }
}

/// About section. `body` and `mission` are Markdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AboutConfig {
    pub heading: SectionHeading,
    pub body: String,
    pub mission_title: String,
    pub mission: String,
    pub image: String,
    pub image_alt: String,
}

impl Default for AboutConfig {
    fn default() -> Self {
        Self {
            heading: SectionHeading::new("About Us", "Who we are"),
            body: STOCK_ABOUT_BODY.to_string(),
            mission_title: "Our Mission".to_string(),
            mission: STOCK_MISSION.to_string(),
            image: FIELD_IMAGE.to_string(),
            image_alt: "Vetiver cultivation rows".to_string(),
        }
    }
}

const STOCK_ABOUT_BODY: &str = "\
Shiva Sakthi Bio Company specializes in the production of premium vetiver-based products, proudly serving clients across the globe. Our unwavering commitment to quality and sustainability ensures that every product we deliver meets the highest international standards.

Vetiver, also known as Khus, is a remarkable plant renowned for its wide-ranging applications—from aromatic essential oils to therapeutic uses and eco-friendly materials. We harness its full potential through responsible cultivation and sustainable practices, delivering natural solutions that promote wellness and environmental harmony.

At Shiva Sakthi Bio Company, innovation meets tradition. While we continue to explore and develop new applications of vetiver, we remain deeply rooted in preserving its cultural and ecological legacy. Every stage—from soil to shelf—is guided by strict quality control, ensuring purity, potency, and consistency.

Whether you're seeking natural wellness solutions, green alternatives, or artisanal craftsmanship, our diverse portfolio of vetiver products is designed to meet the needs of modern global markets.
";

const STOCK_MISSION: &str = "\
To deliver world-class vetiver products through sustainable, ethical, and innovative practices. We are committed to enhancing well-being, fostering relaxation, and supporting environmentally responsible living by offering a diverse range of high-quality vetiver-based solutions to customers around the globe.
";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProductsConfig {
    pub heading: SectionHeading,
    pub items: Vec<ProductEntry>,
}

impl Default for ProductsConfig {
    fn default() -> Self {
        Self {
            heading: SectionHeading::new("Products & Services", "What we offer"),
            items: vec![
                ProductEntry {
                    title: "V2 Vetiver – Planting Material".to_string(),
                    description: "High-quality vetiver slips (V2). Ideal for commercial \
                                  cultivation, soil conservation and aroma industry use."
                        .to_string(),
                    image: Some(HERO_IMAGE.to_string()),
                    image_alt: "V2 Vetiver in grow bags".to_string(),
                    cta: CallToAction::new("Request Quote", "#contact"),
                },
                ProductEntry {
                    title: "Cultivation Support & Advisory".to_string(),
                    description: "Guidance on land prep, spacing, irrigation, and harvest \
                                  for optimal oil content and root yield."
                        .to_string(),
                    image: Some(FIELD_IMAGE.to_string()),
                    image_alt: "Vetiver cultivation services".to_string(),
                    cta: CallToAction::new("Talk to Us", "#contact"),
                },
                ProductEntry {
                    title: "Bulk Vetiver Roots / Oil (Enquiries)".to_string(),
                    description: "Tell us your volume and specs. We follow strict \
                                  post-harvest and quality protocols."
                        .to_string(),
                    image: None,
                    image_alt: String::new(),
                    cta: CallToAction::new("Send Requirements", "#contact"),
                },
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    pub heading: SectionHeading,
    /// Alt text is `"{alt_prefix} {n}"`, counting from 1.
    pub alt_prefix: String,
    pub images: Vec<GalleryImage>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        // Entries 1 and 3 share a path in the published site; kept as-is.
        let images = [HERO_IMAGE, FIELD_IMAGE, HERO_IMAGE]
            .into_iter()
            .map(|src| GalleryImage {
                src: src.to_string(),
            })
            .collect();
        Self {
            heading: SectionHeading::new("Gallery", "From our fields"),
            alt_prefix: "Vetiver".to_string(),
            images,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TestimonialsConfig {
    pub heading: SectionHeading,
    pub items: Vec<Testimonial>,
}

impl Default for TestimonialsConfig {
    fn default() -> Self {
        let items = [
            "High-quality slips and excellent guidance.",
            "Reliable partner for our vetiver program.",
            "Healthy plants and timely delivery.",
        ]
        .into_iter()
        .map(|quote| Testimonial {
            quote: quote.to_string(),
            author: None,
        })
        .collect();
        Self {
            heading: SectionHeading::new("Testimonials", "What clients say"),
            items,
        }
    }
}

/// Contact section: map embed plus the enquiry form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    pub heading: SectionHeading,
    pub map_title: String,
    pub map_embed_url: String,
    pub form: FormConfig,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            heading: SectionHeading::new("Contact Us", "We're here to help"),
            map_title: "Map".to_string(),
            map_embed_url:
                "https://www.google.com/maps?q=Virudhachalam%2C%20Tamil%20Nadu%2C%20India&output=embed"
                    .to_string(),
            form: FormConfig::default(),
        }
    }
}

/// Enquiry form labels and optional submission endpoint.
///
/// Without an `action` the form is inert: nothing is sent anywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    pub name_label: String,
    pub name_placeholder: String,
    pub email_label: String,
    pub email_placeholder: String,
    pub message_label: String,
    pub message_placeholder: String,
    pub button_label: String,
    /// External endpoint that receives a `POST` of `name`, `email`, `message`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            name_label: "Name".to_string(),
            name_placeholder: "Your name".to_string(),
            email_label: "Email".to_string(),
            email_placeholder: "name@example.com".to_string(),
            message_label: "Message".to_string(),
            message_placeholder: "Tell us what you need".to_string(),
            button_label: "Send Enquiry".to_string(),
            action: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlogConfig {
    pub heading: SectionHeading,
    pub read_more_label: String,
    /// May be empty, in which case the section is left out and `#blog`
    /// must not appear in `nav`.
    pub posts: Vec<BlogPost>,
}

impl Default for BlogConfig {
    fn default() -> Self {
        let posts = (1..=3)
            .map(|i| BlogPost {
                label: "Update".to_string(),
                title: format!("Post Title {i}"),
                excerpt: "Add your latest harvest notes, expo announcements, or product \
                          releases here."
                    .to_string(),
                href: "#".to_string(),
            })
            .collect();
        Self {
            heading: SectionHeading::new("News & Updates", "From the field"),
            read_more_label: "Read more".to_string(),
            posts,
        }
    }
}

/// Theme colors and layout width, emitted as CSS custom properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Buttons, brand mark, and icons.
    pub primary: String,
    pub primary_hover: String,
    /// Hero banner background.
    pub hero_background: String,
    /// Floating WhatsApp button.
    pub accent: String,
    pub accent_hover: String,
    pub background: String,
    pub text: String,
    pub text_muted: String,
    pub heading: String,
    /// Maximum width of the centered container (CSS value).
    pub max_width: String,
}

impl ThemeConfig {
    /// Theme values keyed by their config name, in declaration order.
    pub fn entries(&self) -> [(&'static str, &str); 10] {
        [
            ("primary", self.primary.as_str()),
            ("primary_hover", self.primary_hover.as_str()),
            ("hero_background", self.hero_background.as_str()),
            ("accent", self.accent.as_str()),
            ("accent_hover", self.accent_hover.as_str()),
            ("background", self.background.as_str()),
            ("text", self.text.as_str()),
            ("text_muted", self.text_muted.as_str()),
            ("heading", self.heading.as_str()),
            ("max_width", self.max_width.as_str()),
        ]
    }
}

/// Characters that would let a theme value escape its CSS declaration
/// or the inline `<style>` element.
const THEME_FORBIDDEN: &[char] = &['<', '>', '{', '}', ';', '\\'];

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary: "#1e3a8a".to_string(),
            primary_hover: "#1e40af".to_string(),
            hero_background: "#172554".to_string(),
            accent: "#16a34a".to_string(),
            accent_hover: "#15803d".to_string(),
            background: "#f8fafc".to_string(),
            text: "#1e293b".to_string(),
            text_muted: "#475569".to_string(),
            heading: "#0f172a".to_string(),
            max_width: "80rem".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged on top of.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(SiteConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely, arrays included.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// A missing directory or file yields the validated stock config.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Generate CSS custom properties from theme config.
pub fn generate_theme_css(theme: &ThemeConfig) -> String {
    format!(
        r#":root {{
    --color-primary: {primary};
    --color-primary-hover: {primary_hover};
    --color-hero-bg: {hero_background};
    --color-accent: {accent};
    --color-accent-hover: {accent_hover};
    --color-bg: {background};
    --color-text: {text};
    --color-text-muted: {text_muted};
    --color-heading: {heading};
    --container-max-width: {max_width};
}}"#,
        primary = theme.primary,
        primary_hover = theme.primary_hover,
        hero_background = theme.hero_background,
        accent = theme.accent,
        accent_hover = theme.accent_hover,
        background = theme.background,
        text = theme.text,
        text_muted = theme.text_muted,
        heading = theme.heading,
        max_width = theme.max_width,
    )
}

/// Returns a commented starter `config.toml`.
///
/// Used by the `gen-config` CLI command. Every key is optional; the values
/// shown are the stock defaults.
pub fn stock_config_toml() -> &'static str {
    r##"# vetiver-site configuration
# =========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Tables merge key by key over the defaults. Arrays (nav, highlights,
# products.items, gallery.images, testimonials.items, blog.posts) replace
# the default array entirely. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Company identity
# ---------------------------------------------------------------------------
[company]
name = "Shiva Sakthi Bio Company"
tagline = "Grow more with Less — the future of Farming is here"
# Used verbatim in tel: links.
phone = "+91 6380756104"
email = "shivasakthibiocompany@gmail.com"
address = "Krishnabalaambigai complex, Virudhachalam, Tamilnadu, India"
# Only the digits are used for https://wa.me/ links.
whatsapp = "+91 6380756104"
location_link = "https://maps.google.com/?q=Virudhachalam,Tamilnadu,India"
location_label = "Virudhachalam, Tamil Nadu, India"

# Platform name -> URL. Rendered in the footer in alphabetical order.
[company.socials]
facebook = "#"
instagram = "#"
linkedin = "#"

# ---------------------------------------------------------------------------
# Header navigation. Each href must be a section anchor:
# #home #about #products #gallery #testimonials #contact #blog
# ---------------------------------------------------------------------------
# [[nav]]
# label = "Home"
# href = "#home"

# ---------------------------------------------------------------------------
# Hero banner
# ---------------------------------------------------------------------------
[hero]
heading = "Premium Vetiver-Based Products"
# Shown after the company tagline.
blurb = "We cultivate and craft world-class vetiver (Khus) products with sustainability at the core — serving customers across the globe."
image = "/mnt/data/IMG-20250813-WA0008.jpg"
image_alt = "Vetiver grow bags at Shiva Sakthi Bio Company"

[hero.primary_cta]
label = "Explore Products"
href = "#products"

[hero.secondary_cta]
label = "Get a Quote"
href = "#contact"

# Icons: leaf, phone, mail, map-pin, message-circle, chevron-right,
#        images, factory, send
# [[hero.highlights]]
# icon = "factory"
# text = "Sustainable cultivation"

# ---------------------------------------------------------------------------
# Sections. Each has a heading with an optional subtitle and an optional
# icon (defaults to "leaf"). The stock headings carry their own subtitles;
# set subtitle = "" to show the company name instead.
# ---------------------------------------------------------------------------
[about.heading]
title = "About Us"
subtitle = "Who we are"

# [about]
# body = """Markdown paragraphs..."""
# mission_title = "Our Mission"
# mission = """Markdown..."""
# image = "/mnt/data/IMG-20250730-WA0020.jpg"
# image_alt = "Vetiver cultivation rows"

[products.heading]
title = "Products & Services"
subtitle = "What we offer"

# Omit `image` for a leaf placeholder tile.
# [[products.items]]
# title = "V2 Vetiver – Planting Material"
# description = "High-quality vetiver slips (V2)."
# image = "/mnt/data/IMG-20250813-WA0008.jpg"
# image_alt = "V2 Vetiver in grow bags"
# cta = { label = "Request Quote", href = "#contact" }

[gallery]
alt_prefix = "Vetiver"

[gallery.heading]
title = "Gallery"
subtitle = "From our fields"

# [[gallery.images]]
# src = "/mnt/data/IMG-20250813-WA0008.jpg"

[testimonials.heading]
title = "Testimonials"
subtitle = "What clients say"

# Omit `author` to show "Client N".
# [[testimonials.items]]
# quote = "High-quality slips and excellent guidance."

[contact]
map_title = "Map"
map_embed_url = "https://www.google.com/maps?q=Virudhachalam%2C%20Tamil%20Nadu%2C%20India&output=embed"

[contact.heading]
title = "Contact Us"
subtitle = "We're here to help"

[contact.form]
name_label = "Name"
name_placeholder = "Your name"
email_label = "Email"
email_placeholder = "name@example.com"
message_label = "Message"
message_placeholder = "Tell us what you need"
button_label = "Send Enquiry"
# Without an action the form is inert and sends nothing. Set an external
# endpoint to POST name, email and message there.
# action = "https://forms.example.com/submit"

[blog]
read_more_label = "Read more"

[blog.heading]
title = "News & Updates"
subtitle = "From the field"

# An empty list removes the blog section (drop #blog from nav too).
# [[blog.posts]]
# label = "Update"
# title = "Post Title 1"
# excerpt = "Add your latest harvest notes here."
# href = "#"

# ---------------------------------------------------------------------------
# Theme (CSS values)
# ---------------------------------------------------------------------------
# Plain CSS values; <, >, {, }, ; and backslashes are rejected.
[theme]
primary = "#1e3a8a"
primary_hover = "#1e40af"
hero_background = "#172554"
accent = "#16a34a"          # Floating WhatsApp button
accent_hover = "#15803d"
background = "#f8fafc"
text = "#1e293b"
text_muted = "#475569"
heading = "#0f172a"
max_width = "80rem"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_is_valid() {
        SiteConfig::default().validate().unwrap();
    }

    #[test]
    fn default_company_profile() {
        let config = SiteConfig::default();
        assert_eq!(config.company.name, "Shiva Sakthi Bio Company");
        assert_eq!(config.company.phone, "+91 6380756104");
        assert_eq!(config.company.whatsapp, "+91 6380756104");
        assert_eq!(config.company.email, "shivasakthibiocompany@gmail.com");
        let platforms: Vec<&str> = config.company.socials.keys().map(String::as_str).collect();
        assert_eq!(platforms, vec!["facebook", "instagram", "linkedin"]);
    }

    #[test]
    fn default_nav_has_six_section_links() {
        let hrefs: Vec<String> = default_nav().into_iter().map(|l| l.href).collect();
        assert_eq!(
            hrefs,
            vec!["#home", "#about", "#products", "#gallery", "#contact", "#blog"]
        );
    }

    #[test]
    fn default_content_lists_have_three_entries() {
        let config = SiteConfig::default();
        assert_eq!(config.products.items.len(), 3);
        assert_eq!(config.gallery.images.len(), 3);
        assert_eq!(config.testimonials.items.len(), 3);
        assert_eq!(config.blog.posts.len(), 3);
        assert_eq!(config.blog.posts[2].title, "Post Title 3");
    }

    #[test]
    fn default_gallery_keeps_duplicate_paths() {
        let config = SiteConfig::default();
        assert_eq!(config.gallery.images[0], config.gallery.images[2]);
        assert_ne!(config.gallery.images[0], config.gallery.images[1]);
    }

    #[test]
    fn default_third_product_has_no_image() {
        let config = SiteConfig::default();
        assert!(config.products.items[2].image.is_none());
        assert!(
            config
                .products
                .items
                .iter()
                .all(|p| p.cta.href == "#contact")
        );
    }

    #[test]
    fn default_form_is_inert() {
        assert!(FormConfig::default().action.is_none());
    }

    // =========================================================================
    // Merging
    // =========================================================================

    #[test]
    fn merge_toml_overrides_leaf_and_keeps_siblings() {
        let base: toml::Value = toml::from_str("[a]\nx = 1\ny = 2").unwrap();
        let overlay: toml::Value = toml::from_str("[a]\ny = 3").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["a"]["x"].as_integer(), Some(1));
        assert_eq!(merged["a"]["y"].as_integer(), Some(3));
    }

    #[test]
    fn merge_toml_replaces_arrays() {
        let base: toml::Value = toml::from_str("list = [1, 2, 3]").unwrap();
        let overlay: toml::Value = toml::from_str("list = [9]").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["list"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn stock_defaults_value_round_trips() {
        let value = stock_defaults_value().unwrap();
        let config = resolve_config(value, None).unwrap();
        assert_eq!(config.company.name, "Shiva Sakthi Bio Company");
        assert_eq!(config.nav, default_nav());
        assert!(config.products.items[2].image.is_none());
    }

    // =========================================================================
    // load_config
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.company.name, "Shiva Sakthi Bio Company");
        assert_eq!(config.nav.len(), 6);
    }

    #[test]
    fn load_config_partial_override() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r##"
[company]
phone = "+91 98765 43210"

[theme]
primary = "#14532d"
"##,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.company.phone, "+91 98765 43210");
        assert_eq!(config.theme.primary, "#14532d");
        // Untouched values keep their defaults
        assert_eq!(config.company.whatsapp, "+91 6380756104");
        assert_eq!(config.theme.accent, "#16a34a");
        assert_eq!(config.products.items.len(), 3);
    }

    #[test]
    fn load_config_array_override_replaces_list() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r##"
[[gallery.images]]
src = "assets/one.jpg"

[[gallery.images]]
src = "assets/two.jpg"
"##,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        let srcs: Vec<&str> = config.gallery.images.iter().map(|i| i.src.as_str()).collect();
        assert_eq!(srcs, vec!["assets/one.jpg", "assets/two.jpg"]);
        assert_eq!(config.gallery.alt_prefix, "Vetiver");
    }

    #[test]
    fn load_config_socials_merge_by_platform() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r##"
[company.socials]
instagram = "https://instagram.com/vetiver"
youtube = "https://youtube.com/@vetiver"
"##,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        let socials = &config.company.socials;
        assert_eq!(socials["instagram"], "https://instagram.com/vetiver");
        assert_eq!(socials["facebook"], "#");
        assert_eq!(socials.len(), 4);
    }

    #[test]
    fn load_config_rejects_unknown_keys() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "[company]\nfax = \"123\"\n").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "this is not valid toml [[[").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn product_without_image_parses() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r##"
[[products.items]]
title = "Vetiver Oil"
description = "Steam distilled."
cta = { label = "Ask", href = "#contact" }
"##,
        )
        .unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.products.items.len(), 1);
        assert!(config.products.items[0].image.is_none());
        assert_eq!(config.products.items[0].image_alt, "");
    }

    // =========================================================================
    // Validation
    // =========================================================================

    #[test]
    fn validate_rejects_whatsapp_without_digits() {
        let mut config = SiteConfig::default();
        config.company.whatsapp = "call us".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(msg)) if msg.contains("whatsapp")
        ));
    }

    #[test]
    fn validate_rejects_theme_value_breaking_out_of_style() {
        let mut config = SiteConfig::default();
        config.theme.primary = "red}</style><script>alert(1)</script><style>".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(msg)) if msg.contains("theme.primary")
        ));
    }

    #[test]
    fn validate_rejects_theme_value_with_extra_declaration() {
        let mut config = SiteConfig::default();
        config.theme.max_width = "80rem; background: url(x)".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(msg)) if msg.contains("theme.max_width")
        ));
    }

    #[test]
    fn load_config_rejects_injected_theme() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "[theme]\nprimary = \"red}</style><script>alert(1)</script><style>\"\n",
        )
        .unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn validate_accepts_css_functions_in_theme() {
        let mut config = SiteConfig::default();
        config.theme.primary = "rgb(20, 83, 45)".to_string();
        config.theme.max_width = "min(80rem, 100%)".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_company_name() {
        let mut config = SiteConfig::default();
        config.company.name = "  ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_rejects_nav_to_unknown_anchor() {
        let mut config = SiteConfig::default();
        config.nav.push(NavLink::new("Careers", "#careers"));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(msg)) if msg.contains("#careers")
        ));
    }

    #[test]
    fn validate_rejects_external_nav_href() {
        let mut config = SiteConfig::default();
        config.nav[0].href = "https://example.com".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_rejects_duplicate_nav_href() {
        let mut config = SiteConfig::default();
        config.nav.push(NavLink::new("Home again", "#home"));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(msg)) if msg.contains("more than once")
        ));
    }

    #[test]
    fn validate_allows_testimonials_in_nav() {
        let mut config = SiteConfig::default();
        config
            .nav
            .push(NavLink::new("Testimonials", "#testimonials"));
        config.validate().unwrap();
    }

    #[test]
    fn validate_rejects_empty_gallery() {
        let mut config = SiteConfig::default();
        config.gallery.images.clear();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_rejects_nav_to_empty_blog() {
        let mut config = SiteConfig::default();
        config.blog.posts.clear();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(msg)) if msg.contains("blog.posts")
        ));
    }

    #[test]
    fn validate_allows_empty_blog_without_nav_link() {
        let mut config = SiteConfig::default();
        config.blog.posts.clear();
        config.nav.retain(|l| l.href != "#blog");
        config.validate().unwrap();
    }

    // =========================================================================
    // Stock config text and CSS
    // =========================================================================

    #[test]
    fn stock_config_toml_parses_to_defaults() {
        let overlay: toml::Value = toml::from_str(stock_config_toml()).unwrap();
        let config = resolve_config(stock_defaults_value().unwrap(), Some(overlay)).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(config.company.name, defaults.company.name);
        assert_eq!(config.company.socials, defaults.company.socials);
        assert_eq!(config.hero.blurb, defaults.hero.blurb);
        assert_eq!(config.contact.map_embed_url, defaults.contact.map_embed_url);
        assert_eq!(config.theme.primary, defaults.theme.primary);
        assert_eq!(config.nav, defaults.nav);
    }

    #[test]
    fn generate_theme_css_includes_all_variables() {
        let css = generate_theme_css(&ThemeConfig::default());
        assert!(css.contains("--color-primary: #1e3a8a"));
        assert!(css.contains("--color-hero-bg: #172554"));
        assert!(css.contains("--color-accent: #16a34a"));
        assert!(css.contains("--container-max-width: 80rem"));
    }
}
