//! HTML form binding for adding and editing sneakers.
//!
//! Browsers submit every field as text, so [`SneakerForm`] keeps the raw
//! values. That lets a rejected form be shown again exactly as typed, with
//! one message per field.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use validator::{Validate, ValidationErrors};

use crate::models::{Brand, Category, Condition, Sneaker, SneakerId, SneakerInput};

/// Raw values of the add/edit form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SneakerForm {
    /// Hidden field on the edit form
    pub id: String,
    pub brand: String,
    pub model: String,
    pub colorway: String,
    pub size: String,
    pub price: String,
    pub condition: String,
    pub category: String,
    pub release_date: String,
    pub image_url: String,
    pub description: String,
    /// Checkbox, absent when unchecked
    pub is_limited: Option<String>,
    pub stock_quantity: String,
}

/// Message to show next to each rejected field, keyed by field name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors(BTreeMap<String, String>);

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.0
    }

    /// First message wins, so parse failures are not overwritten by range
    /// checks on placeholder values.
    fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    fn merge(&mut self, validation: &ValidationErrors) {
        for (field, field_errors) in validation.field_errors() {
            if let Some(error) = field_errors.first() {
                self.insert(&field.to_string(), describe(error));
            }
        }
    }

    fn required<T: FromStr>(&mut self, field: &str, raw: &str, message: &str) -> Option<T> {
        match raw.trim().parse() {
            Ok(value) => Some(value),
            Err(_) => {
                self.insert(field, message);
                None
            }
        }
    }

    fn optional<T: FromStr>(&mut self, field: &str, raw: &str, message: &str) -> Option<T> {
        if raw.trim().is_empty() {
            None
        } else {
            self.required(field, raw, message)
        }
    }
}

impl From<&ValidationErrors> for FormErrors {
    fn from(validation: &ValidationErrors) -> Self {
        let mut errors = FormErrors::default();
        errors.merge(validation);
        errors
    }
}

fn describe(error: &validator::ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }

    let min = error.params.get("min");
    let max = error.params.get("max");
    match (&*error.code, min, max) {
        ("blank", _, _) => "This field is required.".to_string(),
        ("length", Some(min), Some(max)) => {
            format!("Must be between {} and {} characters.", min, max)
        }
        ("length", None, Some(max)) => format!("Must be at most {} characters.", max),
        ("range", Some(min), Some(max)) => format!("Must be between {} and {}.", min, max),
        ("range", None, Some(max)) => format!("Must be at most {}.", max),
        ("url", _, _) => "Must be a valid URL.".to_string(),
        _ => "Invalid value.".to_string(),
    }
}

fn text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl SneakerForm {
    /// Id carried by the hidden field, if it is a number
    pub fn sneaker_id(&self) -> Option<SneakerId> {
        self.id.trim().parse().ok()
    }

    /// Parse and validate every field.
    ///
    /// All problems are reported together: fields that fail to parse get a
    /// format message, the rest go through the usual input validation.
    pub fn parse(&self) -> Result<SneakerInput, FormErrors> {
        let mut errors = FormErrors::default();

        let brand = errors.required::<Brand>("brand", &self.brand, "Choose a brand.");
        let condition =
            errors.required::<Condition>("condition", &self.condition, "Choose a condition.");
        let category =
            errors.required::<Category>("category", &self.category, "Choose a category.");
        let size = errors.required::<f64>("size", &self.size, "Enter a US size such as 9.5.");
        let price = errors.required::<f64>("price", &self.price, "Enter a price such as 180.00.");
        let release_date = errors.required::<NaiveDate>(
            "release_date",
            &self.release_date,
            "Enter a date as YYYY-MM-DD.",
        );
        let stock_quantity = errors.optional::<u32>(
            "stock_quantity",
            &self.stock_quantity,
            "Enter a whole number of pairs.",
        );

        // Unparsed fields already carry an error; placeholders only let the
        // remaining fields be checked.
        let input = SneakerInput {
            brand: brand.unwrap_or(Brand::Other),
            model: self.model.trim().to_string(),
            colorway: self.colorway.trim().to_string(),
            size: size.unwrap_or_default(),
            price: price.unwrap_or_default(),
            condition: condition.unwrap_or(Condition::DeadStock),
            category: category.unwrap_or(Category::Lifestyle),
            release_date: release_date.unwrap_or_default(),
            image_url: text(&self.image_url),
            description: text(&self.description),
            is_limited: self.is_limited.is_some(),
            stock_quantity,
        };

        if let Err(validation) = input.validate() {
            errors.merge(&validation);
        }

        if errors.is_empty() {
            Ok(input)
        } else {
            Err(errors)
        }
    }
}

impl From<&Sneaker> for SneakerForm {
    fn from(sneaker: &Sneaker) -> Self {
        Self {
            id: sneaker.id.to_string(),
            brand: sneaker.brand.to_string(),
            model: sneaker.model.clone(),
            colorway: sneaker.colorway.clone(),
            size: sneaker.size.to_string(),
            price: sneaker.price.to_string(),
            condition: sneaker.condition.to_string(),
            category: sneaker.category.to_string(),
            release_date: sneaker.release_date.to_string(),
            image_url: sneaker.image_url.clone().unwrap_or_default(),
            description: sneaker.description.clone().unwrap_or_default(),
            is_limited: sneaker.is_limited.then(|| "on".to_string()),
            stock_quantity: sneaker
                .stock_quantity
                .map(|n| n.to_string())
                .unwrap_or_default(),
        }
    }
}
