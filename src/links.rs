//! Outbound link construction.
//!
//! The WhatsApp link is needed in three places on the page (header button,
//! contact block, floating button). It is built exactly once into
//! [`ContactLinks`] and every render site reads that value, so the three
//! copies cannot drift apart.

use crate::types::CompanyProfile;

/// Keep only ASCII digits: `"+91 6380-756104"` → `"916380756104"`.
pub fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// `https://wa.me/<digits>` for a display-formatted number.
pub fn whatsapp_link(number: &str) -> String {
    format!("https://wa.me/{}", digits_only(number))
}

/// `tel:` link. The number is used verbatim, formatting included.
pub fn tel_link(phone: &str) -> String {
    format!("tel:{phone}")
}

pub fn mailto_link(email: &str) -> String {
    format!("mailto:{email}")
}

/// All derived outbound links for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLinks {
    pub whatsapp: String,
    pub tel: String,
    pub mailto: String,
    pub location: String,
}

impl ContactLinks {
    pub fn from_profile(company: &CompanyProfile) -> Self {
        Self {
            whatsapp: whatsapp_link(&company.whatsapp),
            tel: tel_link(&company.phone),
            mailto: mailto_link(&company.email),
            location: company.location_link.clone(),
        }
    }
}
