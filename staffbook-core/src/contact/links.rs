// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! External Links
//!
//! Builds messaging and social profile URLs from stored contact values.

use super::Contact;

const WHATSAPP_BASE: &str = "https://wa.me/";
const INSTAGRAM_BASE: &str = "https://instagram.com/";
const LINKEDIN_BASE: &str = "https://linkedin.com/in/";

/// Builds a WhatsApp chat link. Every non-digit is stripped from the phone.
///
/// # Examples
///
/// ```
/// use staffbook_core::contact::whatsapp_url;
///
/// assert_eq!(
///     whatsapp_url("+1 (555) 010-0199").as_deref(),
///     Some("https://wa.me/15550100199")
/// );
/// assert_eq!(whatsapp_url("n/a"), None);
/// ```
pub fn whatsapp_url(phone: &str) -> Option<String> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    Some(format!("{}{}", WHATSAPP_BASE, digits))
}

/// Builds an Instagram profile link. The handle is used as stored.
pub fn instagram_url(handle: &str) -> Option<String> {
    profile_url(INSTAGRAM_BASE, handle)
}

/// Builds a LinkedIn profile link. The profile slug is used as stored.
pub fn linkedin_url(profile: &str) -> Option<String> {
    profile_url(LINKEDIN_BASE, profile)
}

fn profile_url(base: &str, value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    Some(format!("{}{}", base, value))
}

/// All external links available for one contact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactLinks {
    pub whatsapp: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
}

impl ContactLinks {
    /// Collects the links derivable from a contact's stored values.
    pub fn for_contact(contact: &Contact) -> Self {
        ContactLinks {
            whatsapp: whatsapp_url(&contact.phone),
            instagram: contact.instagram.as_deref().and_then(instagram_url),
            linkedin: contact.linkedin.as_deref().and_then(linkedin_url),
        }
    }
}
