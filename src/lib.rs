//! # vetiver-site
//!
//! A static site generator for the Shiva Sakthi Bio Company landing page: a
//! single `index.html` with a hero banner, about copy, product showcase,
//! gallery, testimonials, contact block, blog placeholders, and footer.
//!
//! # Pipeline
//!
//! ```text
//! content/config.toml ─┐
//!   stock defaults ────┴─> SiteConfig ─> render_page ─> dist/index.html
//! content/assets/ ─────────────────────────────────────> dist/
//! ```
//!
//! There is no intermediate manifest: the config is small, and rendering is
//! a pure function of the config plus the render year.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `config.toml` loading over stock defaults, validation, theme CSS |
//! | [`types`] | Content records: company profile, nav links, products, gallery, ... |
//! | [`links`] | `wa.me`, `tel:`, and `mailto:` link construction |
//! | [`components`] | Layout primitives: container, section, card, icons |
//! | [`page`] | Composes the full page from config |
//! | [`generate`] | Writes the page and copies assets |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Content as Config
//!
//! Every string and list on the page comes from [`config::SiteConfig`]. The
//! stock defaults are the published site's copy, so `vetiver-site build` with
//! an empty content directory reproduces it exactly; a sparse `config.toml`
//! swaps out only what it names.
//!
//! ## One Source for Outbound Links
//!
//! The WhatsApp link appears three times on the page. [`links::ContactLinks`]
//! derives it once per render and all three render sites read that value.
//!
//! ## Render Year Is an Input
//!
//! The footer year is the only time-dependent output. It is read once in the
//! CLI and passed down as [`page::RenderContext`], which keeps rendering
//! deterministic under test.
//!
//! ## Inert Contact Form
//!
//! The enquiry form submits nowhere unless `contact.form.action` names an
//! external endpoint. Handling submissions is outside this crate.

pub mod components;
pub mod config;
pub mod generate;
pub mod links;
pub mod output;
pub mod page;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
