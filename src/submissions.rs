//! Normalisation of form-intake payloads before they are persisted to the CMS.
//!
//! The contact, booking and newsletter endpoints accept near-identical JSON
//! bodies and previously each carried their own trimming and validation
//! logic. This module is the single shared path: every endpoint deserialises
//! its raw payload, normalises it here, and persists the resulting document.

use regex::Regex;
use serde::{Deserialize, Serialize};

fn email_pattern() -> &'static Regex {
    use std::sync::OnceLock;

    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("invalid email regex"))
}

/// Errors produced while normalising an intake payload.
///
/// Unlike image resolution, intake endpoints surface validation failures to
/// the caller so the form can display them.
#[derive(Debug)]
pub enum SubmissionError {
    /// A required field was absent or blank after trimming.
    MissingField {
        /// Name of the offending field.
        field: &'static str,
    },
    /// The supplied email address does not look like an email address.
    InvalidEmail {
        /// The rejected value.
        value: String,
    },
}

impl std::fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "missing required field `{field}`"),
            Self::InvalidEmail { value } => write!(f, "invalid email address: {value}"),
        }
    }
}

impl std::error::Error for SubmissionError {}

/// Raw contact-form payload as posted by the site.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactSubmission {
    /// Visitor name.
    pub name: Option<String>,
    /// Visitor email address.
    pub email: Option<String>,
    /// Optional phone number.
    pub phone: Option<String>,
    /// Optional message subject.
    pub subject: Option<String>,
    /// Message body.
    pub message: Option<String>,
}

/// Raw booking-enquiry payload as posted by the site.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSubmission {
    /// Visitor name.
    pub name: Option<String>,
    /// Visitor email address.
    pub email: Option<String>,
    /// Optional phone number.
    pub phone: Option<String>,
    /// Slug of the package being booked.
    pub package: Option<String>,
    /// Requested travel date as entered in the form.
    pub travel_date: Option<String>,
    /// Number of travellers.
    pub travelers: Option<u32>,
    /// Optional free-form notes.
    pub notes: Option<String>,
}

/// Raw newsletter-signup payload as posted by the site.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsletterSubmission {
    /// Subscriber email address.
    pub email: Option<String>,
    /// Optional subscriber name.
    pub name: Option<String>,
}

/// Contact document ready to persist to the CMS.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDocument {
    /// CMS document type tag.
    #[serde(rename = "_type")]
    pub document_type: &'static str,
    /// Trimmed visitor name.
    pub name: String,
    /// Trimmed, lowercased email address.
    pub email: String,
    /// Trimmed phone number, dropped when blank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Trimmed subject, dropped when blank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Trimmed message body.
    pub message: String,
}

/// Booking document ready to persist to the CMS.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDocument {
    /// CMS document type tag.
    #[serde(rename = "_type")]
    pub document_type: &'static str,
    /// Trimmed visitor name.
    pub name: String,
    /// Trimmed, lowercased email address.
    pub email: String,
    /// Trimmed phone number, dropped when blank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Trimmed package slug.
    pub package: String,
    /// Trimmed travel date, dropped when blank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travel_date: Option<String>,
    /// Number of travellers, at least one.
    pub travelers: u32,
    /// Trimmed notes, dropped when blank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Newsletter-signup document ready to persist to the CMS.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterDocument {
    /// CMS document type tag.
    #[serde(rename = "_type")]
    pub document_type: &'static str,
    /// Trimmed, lowercased email address.
    pub email: String,
    /// Trimmed subscriber name, dropped when blank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ContactSubmission {
    /// Normalise the payload into a persistable contact document.
    pub fn normalise(self) -> Result<ContactDocument, SubmissionError> {
        Ok(ContactDocument {
            document_type: "contactSubmission",
            name: required_text(self.name, "name")?,
            email: normalise_email(self.email)?,
            phone: optional_text(self.phone),
            subject: optional_text(self.subject),
            message: required_text(self.message, "message")?,
        })
    }
}

impl BookingSubmission {
    /// Normalise the payload into a persistable booking document.
    pub fn normalise(self) -> Result<BookingDocument, SubmissionError> {
        Ok(BookingDocument {
            document_type: "bookingSubmission",
            name: required_text(self.name, "name")?,
            email: normalise_email(self.email)?,
            phone: optional_text(self.phone),
            package: required_text(self.package, "package")?,
            travel_date: optional_text(self.travel_date),
            travelers: self.travelers.unwrap_or(1).max(1),
            notes: optional_text(self.notes),
        })
    }
}

impl NewsletterSubmission {
    /// Normalise the payload into a persistable signup document.
    pub fn normalise(self) -> Result<NewsletterDocument, SubmissionError> {
        Ok(NewsletterDocument {
            document_type: "newsletterSignup",
            email: normalise_email(self.email)?,
            name: optional_text(self.name),
        })
    }
}

fn required_text(value: Option<String>, field: &'static str) -> Result<String, SubmissionError> {
    match value.as_deref().map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed.to_string()),
        _ => Err(SubmissionError::MissingField { field }),
    }
}

fn optional_text(value: Option<String>) -> Option<String> {
    let trimmed = value.as_deref().map(str::trim)?;
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn normalise_email(value: Option<String>) -> Result<String, SubmissionError> {
    let email = required_text(value, "email")?.to_lowercase();
    if email_pattern().is_match(&email) {
        Ok(email)
    } else {
        Err(SubmissionError::InvalidEmail { value: email })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalises_contact_payloads() {
        let raw = ContactSubmission {
            name: Some("  Ada Lovelace ".into()),
            email: Some(" Ada@Example.COM ".into()),
            phone: Some("   ".into()),
            subject: None,
            message: Some("Planning a trip to Zanzibar.".into()),
        };

        let document = raw.normalise().expect("payload should normalise");
        assert_eq!(document.document_type, "contactSubmission");
        assert_eq!(document.name, "Ada Lovelace");
        assert_eq!(document.email, "ada@example.com");
        assert!(document.phone.is_none());
        assert_eq!(document.message, "Planning a trip to Zanzibar.");
    }

    #[test]
    fn rejects_blank_required_fields() {
        let raw = ContactSubmission {
            name: Some("   ".into()),
            email: Some("ada@example.com".into()),
            message: Some("hello".into()),
            ..Default::default()
        };

        match raw.normalise() {
            Err(SubmissionError::MissingField { field }) => assert_eq!(field, "name"),
            other => panic!("expected missing-field error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_email_addresses() {
        for value in ["not-an-email", "two words@example.com", "missing-domain@"] {
            let raw = NewsletterSubmission {
                email: Some(value.into()),
                name: None,
            };
            assert!(
                matches!(raw.normalise(), Err(SubmissionError::InvalidEmail { .. })),
                "{value:?} should be rejected"
            );
        }
    }

    fn booking(travelers: Option<u32>) -> BookingSubmission {
        BookingSubmission {
            name: Some("Ada".into()),
            email: Some("ada@example.com".into()),
            package: Some("serengeti-safari".into()),
            travelers,
            ..Default::default()
        }
    }

    #[test]
    fn bookings_default_to_a_single_traveller() {
        let document = booking(None).normalise().expect("payload should normalise");
        assert_eq!(document.travelers, 1);
        assert_eq!(document.package, "serengeti-safari");

        assert_eq!(booking(Some(0)).normalise().unwrap().travelers, 1);
        assert_eq!(booking(Some(4)).normalise().unwrap().travelers, 4);
    }

    #[test]
    fn serialised_documents_carry_the_cms_type_tag() {
        let raw = NewsletterSubmission {
            email: Some("ada@example.com".into()),
            name: Some(" Ada ".into()),
        };
        let json = serde_json::to_value(raw.normalise().unwrap()).unwrap();

        assert_eq!(json["_type"], "newsletterSignup");
        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json["name"], "Ada");
    }

    #[test]
    fn blank_optionals_are_omitted_from_serialised_documents() {
        let raw = ContactSubmission {
            name: Some("Ada".into()),
            email: Some("ada@example.com".into()),
            phone: Some("  ".into()),
            subject: None,
            message: Some("hello".into()),
        };
        let json = serde_json::to_value(raw.normalise().unwrap()).unwrap();

        assert!(json.get("phone").is_none());
        assert!(json.get("subject").is_none());
    }
}
