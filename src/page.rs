//! Page composition.
//!
//! Assembles the single landing page from a [`SiteConfig`]:
//!
//! ```text
//! header (brand, nav, WhatsApp)
//! #home          hero banner
//! #about         copy, mission, address card
//! #products      one card per product
//! #gallery       one image per entry
//! #testimonials  one card per quote
//! #contact       details, map, enquiry form
//! #blog          one card per post (omitted when empty)
//! footer         © year, social links
//! floating WhatsApp button
//! ```
//!
//! Rendering is pure: the only time-dependent value, the copyright year,
//! arrives through [`RenderContext`], and every outbound link comes from one
//! [`ContactLinks`] built per render.

use crate::components::{SectionProps, card, container, icon, section};
use crate::config::{FormConfig, SiteConfig};
use crate::links::ContactLinks;
use crate::types::{Icon, SectionHeading, SectionId};
use chrono::{Datelike, Local};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Event, Parser, html as md_html};

const REVEAL_JS: &str = include_str!("../static/reveal.js");

/// Per-render inputs that don't come from config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    /// Calendar year printed in the footer.
    pub year: i32,
}

impl RenderContext {
    /// Context for rendering right now, in local time.
    pub fn now() -> Self {
        Self {
            year: Local::now().year(),
        }
    }
}

/// Render the full HTML document. `css` is inlined into `<head>`.
pub fn render_page(config: &SiteConfig, ctx: &RenderContext, css: &str) -> Markup {
    let links = ContactLinks::from_profile(&config.company);
    let company = &config.company.name;

    let content = html! {
        (site_header(config, &links))
        main {
            (hero(config))
            (about(config))
            (products(config))
            (gallery(config))
            (testimonials(config))
            (contact(config, &links))
            @if !config.blog.posts.is_empty() {
                (blog(config))
            }
        }
        (footer(config, ctx))
        (floating_whatsapp(&links))
    };

    base_document(company, &config.company.tagline, css, content)
}

fn base_document(title: &str, description: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(description);
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
                script { (PreEscaped(REVEAL_JS)) }
            }
        }
    }
}

/// Section props from a configured heading.
fn props_for<'a>(id: SectionId, heading: &'a SectionHeading) -> SectionProps<'a> {
    let props = SectionProps::new(id, &heading.title).icon(heading.icon);
    // An empty subtitle falls back to the company name, since TOML cannot unset a key
    match heading.subtitle.as_deref() {
        Some(subtitle) if !subtitle.trim().is_empty() => props.subtitle(subtitle),
        _ => props,
    }
}

/// Markdown to HTML, for the About copy.
///
/// Raw HTML in the source is emitted as escaped text.
fn markdown(source: &str) -> Markup {
    let parser = Parser::new(source).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    PreEscaped(out)
}

// ============================================================================
// Header and hero
// ============================================================================

fn site_header(config: &SiteConfig, links: &ContactLinks) -> Markup {
    html! {
        header.site-header {
            (container(Some("header-bar"), html! {
                a.brand href=(SectionId::Home.anchor()) {
                    span.brand-mark { (icon(Icon::Leaf, "icon-lg")) }
                    span.brand-name { (config.company.name) }
                }
                nav.site-nav {
                    @for link in &config.nav {
                        a href=(link.href) { (link.label) }
                    }
                }
                a.btn.btn-primary.header-whatsapp href=(links.whatsapp) {
                    (icon(Icon::MessageCircle, "icon-sm")) " WhatsApp"
                }
            }))
        }
    }
}

fn hero(config: &SiteConfig) -> Markup {
    let hero = &config.hero;
    html! {
        section.hero id=(SectionId::Home.id()) {
            div.hero-glow {}
            (container(Some("hero-grid"), html! {
                div.hero-copy {
                    h1 { (hero.heading) }
                    p.hero-blurb { (config.company.tagline) ". " (hero.blurb) }
                    div.hero-actions {
                        a.btn.btn-light href=(hero.primary_cta.href) {
                            (hero.primary_cta.label) " " (icon(Icon::ChevronRight, "icon-md"))
                        }
                        a.btn.btn-outline href=(hero.secondary_cta.href) {
                            (hero.secondary_cta.label)
                        }
                    }
                    div.hero-highlights {
                        @for highlight in &hero.highlights {
                            div { (icon(highlight.icon, "icon-sm")) " " (highlight.text) }
                        }
                    }
                }
                div.hero-media {
                    div.media-frame {
                        img src=(hero.image) alt=(hero.image_alt);
                    }
                }
            }))
        }
    }
}

// ============================================================================
// Content sections
// ============================================================================

fn about(config: &SiteConfig) -> Markup {
    let about = &config.about;
    let props = props_for(SectionId::About, &about.heading);
    section(
        &props,
        &config.company.name,
        html! {
            div.split {
                div.split-main {
                    (card(html! { div.prose { (markdown(&about.body)) } }))
                    (card(html! {
                        h3 { (about.mission_title) }
                        div.prose { (markdown(&about.mission)) }
                    }))
                }
                div.split-side {
                    img.framed src=(about.image) alt=(about.image_alt);
                    (card(html! {
                        div.detail {
                            (icon(Icon::MapPin, "icon-md"))
                            div {
                                p.detail-title { (config.company.location_label) }
                                p.muted { (config.company.address) }
                            }
                        }
                    }))
                }
            }
        },
    )
}

fn products(config: &SiteConfig) -> Markup {
    let props = props_for(SectionId::Products, &config.products.heading);
    section(
        &props,
        &config.company.name,
        html! {
            div.grid.grid-3 {
                @for product in &config.products.items {
                    (card(html! {
                        div.product {
                            div.product-media {
                                @if let Some(src) = &product.image {
                                    img src=(src) alt=(product.image_alt);
                                } @else {
                                    div.placeholder { (icon(Icon::Leaf, "icon-xl")) }
                                }
                            }
                            h3 { (product.title) }
                            p { (product.description) }
                            div.spacer {}
                            a.btn.btn-primary href=(product.cta.href) {
                                (product.cta.label) " " (icon(Icon::ChevronRight, "icon-sm"))
                            }
                        }
                    }))
                }
            }
        },
    )
}

fn gallery(config: &SiteConfig) -> Markup {
    let gallery = &config.gallery;
    let props = props_for(SectionId::Gallery, &gallery.heading);
    section(
        &props,
        &config.company.name,
        html! {
            div.grid.grid-3.gallery {
                @for (i, image) in gallery.images.iter().enumerate() {
                    div.reveal {
                        img.framed src=(image.src) alt={ (gallery.alt_prefix) " " (i + 1) } loading="lazy";
                    }
                }
            }
        },
    )
}

fn testimonials(config: &SiteConfig) -> Markup {
    let props = props_for(SectionId::Testimonials, &config.testimonials.heading);
    section(
        &props,
        &config.company.name,
        html! {
            div.grid.grid-3 {
                @for (i, testimonial) in config.testimonials.items.iter().enumerate() {
                    (card(html! {
                        blockquote.quote { "“" (testimonial.quote) "”" }
                        p.attribution {
                            "— "
                            @match &testimonial.author {
                                Some(author) => { (author) }
                                None => { "Client " (i + 1) }
                            }
                        }
                    }))
                }
            }
        },
    )
}

fn contact(config: &SiteConfig, links: &ContactLinks) -> Markup {
    let contact = &config.contact;
    let company = &config.company;
    let props = props_for(SectionId::Contact, &contact.heading);
    section(
        &props,
        &company.name,
        html! {
            div.split {
                div.split-side {
                    (card(html! {
                        div.details {
                            div.detail {
                                (icon(Icon::Phone, "icon-md"))
                                div {
                                    p.detail-title { "Phone / WhatsApp" }
                                    a.block href=(links.tel) { (company.phone) }
                                    a.block href=(links.whatsapp) { "Chat on WhatsApp" }
                                }
                            }
                            div.detail {
                                (icon(Icon::Mail, "icon-md"))
                                div {
                                    p.detail-title { "Email" }
                                    a href=(links.mailto) { (company.email) }
                                }
                            }
                            div.detail {
                                (icon(Icon::MapPin, "icon-md"))
                                div {
                                    p.detail-title { "Address" }
                                    p { (company.address) }
                                    a.block href=(links.location) target="_blank" rel="noopener" {
                                        "Open in Maps"
                                    }
                                }
                            }
                        }
                    }))
                    div.map {
                        iframe title=(contact.map_title) src=(contact.map_embed_url) loading="lazy" {}
                    }
                }
                div.split-main {
                    (card(enquiry_form(&contact.form)))
                }
            }
        },
    )
}

/// The enquiry form.
///
/// With no `action` configured the form is inert: the button is
/// `type="button"`, submission is cancelled, and there are two single-line
/// fields so browsers never submit implicitly.
pub fn enquiry_form(form: &FormConfig) -> Markup {
    let live = form.action.is_some();
    html! {
        @if let Some(action) = &form.action {
            form.enquiry method="post" action=(action) {
                (form_fields(form, live))
            }
        } @else {
            form.enquiry onsubmit="return false;" {
                (form_fields(form, live))
            }
        }
    }
}

fn form_fields(form: &FormConfig, live: bool) -> Markup {
    html! {
        div.field {
            label for="enquiry-name" { (form.name_label) }
            input id="enquiry-name" type="text" name=[live.then_some("name")] placeholder=(form.name_placeholder);
        }
        div.field {
            label for="enquiry-email" { (form.email_label) }
            input id="enquiry-email" type="email" name=[live.then_some("email")] placeholder=(form.email_placeholder);
        }
        div.field.field-wide {
            label for="enquiry-message" { (form.message_label) }
            textarea id="enquiry-message" name=[live.then_some("message")] placeholder=(form.message_placeholder) {}
        }
        div.field-wide {
            button.btn.btn-primary type=(if live { "submit" } else { "button" }) {
                (icon(Icon::Send, "icon-sm")) " " (form.button_label)
            }
        }
    }
}

fn blog(config: &SiteConfig) -> Markup {
    let blog = &config.blog;
    let props = props_for(SectionId::Blog, &blog.heading);
    section(
        &props,
        &config.company.name,
        html! {
            div.grid.grid-3 {
                @for post in &blog.posts {
                    (card(html! {
                        p.eyebrow { (post.label) }
                        h3 { (post.title) }
                        p { (post.excerpt) }
                        a.read-more href=(post.href) {
                            (blog.read_more_label) " " (icon(Icon::ChevronRight, "icon-sm"))
                        }
                    }))
                }
            }
        },
    )
}

// ============================================================================
// Footer and floating button
// ============================================================================

/// Display name for a social platform key.
fn platform_label(key: &str) -> String {
    match key {
        "linkedin" => "LinkedIn".to_string(),
        "youtube" => "YouTube".to_string(),
        _ => {
            let mut chars = key.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

fn footer(config: &SiteConfig, ctx: &RenderContext) -> Markup {
    html! {
        footer.site-footer {
            (container(Some("footer-bar"), html! {
                p.copyright {
                    "© " (ctx.year) " " (config.company.name) ". All rights reserved."
                }
                div.socials {
                    @for (platform, url) in &config.company.socials {
                        a href=(url) { (platform_label(platform)) }
                    }
                }
            }))
        }
    }
}

fn floating_whatsapp(links: &ContactLinks) -> Markup {
    html! {
        a.floating-whatsapp href=(links.whatsapp) aria-label="Chat on WhatsApp" {
            (icon(Icon::MessageCircle, "icon-md")) " Chat"
        }
    }
}
