//! Typed form fields and validation for the submission pages.
//!
//! Submissions arrive as `application/x-www-form-urlencoded` strings and are
//! validated here before anything touches the database. Required fields and
//! decimal parsing are the only hard rules; the store and unit choice lists
//! are suggestions for the UI, any submitted value is accepted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Suggested stores, rendered as the select options on the item form.
pub const STORE_CHOICES: [&str; 4] = ["Woolworths", "Coles", "Aldi", "Harris Farm"];

/// Suggested units, rendered as the select options on the item form.
pub const UNIT_CHOICES: [&str; 4] = ["kgs", "grams", "litres", "packets"];

const REQUIRED_MESSAGE: &str = "This field is required.";
const DECIMAL_MESSAGE: &str = "Not a valid decimal value.";

/// Raw landing page submission.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NameSubmission {
    #[serde(default)]
    pub name: String,
}

/// Raw item submission, one string per form input.
///
/// `special` is a checkbox and is absent from the body when unticked.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ItemSubmission {
    #[serde(default)]
    pub product: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub store: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub volume: String,
    #[serde(default)]
    pub units: String,
    #[serde(default)]
    pub special: Option<String>,
    #[serde(default)]
    pub brand: String,
}

/// Validation failures keyed by field name.
#[derive(Clone, Debug, Default, Serialize)]
pub struct FieldErrors(BTreeMap<&'static str, Vec<String>>);

impl FieldErrors {
    fn push(&mut self, field: &'static str, message: &str) {
        self.0.entry(field).or_default().push(message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }
}

/// An accepted item submission with typed numeric fields. The date stays a
/// raw string here; turning it into a calendar date is the normalizer's job.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedItem {
    pub product: String,
    pub price: f64,
    pub date: String,
    pub store: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub volume: Option<f64>,
    pub units: Option<String>,
    pub special: bool,
    pub brand: Option<String>,
}

enum Decimal {
    Value(f64),
    Missing,
    Invalid,
}

fn parse_decimal(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Decimal::Missing;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Decimal::Value(value),
        _ => Decimal::Invalid,
    }
}

fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Checkboxes submit nothing when unticked; an empty or literal `"false"`
/// value also counts as unticked.
fn checkbox_checked(value: Option<&str>) -> bool {
    match value {
        None => false,
        Some(v) => !matches!(v.trim(), "" | "false"),
    }
}

/// Checks an item submission, collecting every field failure rather than
/// stopping at the first.
pub fn validate_item(submission: &ItemSubmission) -> Result<ValidatedItem, FieldErrors> {
    let mut errors = FieldErrors::default();

    let product = submission.product.trim();
    if product.is_empty() {
        errors.push("product", REQUIRED_MESSAGE);
    }

    let price = match parse_decimal(&submission.price) {
        Decimal::Value(value) => Some(value),
        Decimal::Missing => {
            errors.push("price", REQUIRED_MESSAGE);
            None
        }
        Decimal::Invalid => {
            errors.push("price", DECIMAL_MESSAGE);
            None
        }
    };

    let volume = match parse_decimal(&submission.volume) {
        Decimal::Value(value) => Some(value),
        Decimal::Missing => None,
        Decimal::Invalid => {
            errors.push("volume", DECIMAL_MESSAGE);
            None
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidatedItem {
        product: product.to_string(),
        // Present whenever no price error was recorded above.
        price: price.unwrap_or_default(),
        date: submission.date.trim().to_string(),
        store: optional_text(&submission.store),
        location: optional_text(&submission.location),
        category: optional_text(&submission.category),
        volume,
        units: optional_text(&submission.units),
        special: checkbox_checked(submission.special.as_deref()),
        brand: optional_text(&submission.brand),
    })
}

/// Checks the landing page name field.
pub fn validate_name(submission: &NameSubmission) -> Result<String, FieldErrors> {
    let name = submission.name.trim();
    if name.is_empty() {
        let mut errors = FieldErrors::default();
        errors.push("name", REQUIRED_MESSAGE);
        return Err(errors);
    }
    Ok(name.to_string())
}
