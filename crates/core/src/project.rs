//! Project input shape and validation.
//!
//! [`ProjectInput`] is what both "add" and "edit" accept. Edits are full
//! replacements, so the same struct serves both.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateUrl, ValidationError, ValidationErrors};

use crate::error::CoreError;
use crate::types::DbId;

/// Field order used to pick the first reported validation message.
const FIELD_ORDER: [&str; 3] = ["title", "feature_img_url", "original_source_url"];

/// Every editable column of a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ProjectInput {
    #[validate(length(min = 1, max = 255, message = "Title must be between 1 and 255 characters"))]
    pub title: String,
    #[validate(
        length(max = 255, message = "Feature image URL must be at most 255 characters"),
        custom(function = "feature_img_url_format")
    )]
    pub feature_img_url: String,
    pub summary_short: String,
    pub intro_short: String,
    pub impact: String,
    #[validate(
        length(max = 255, message = "Original source URL must be at most 255 characters"),
        custom(function = "original_source_url_format")
    )]
    pub original_source_url: String,
    pub sector_id: Option<DbId>,
}

impl ProjectInput {
    /// Run field validation, reducing failures to the first message.
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate()
            .map_err(|errors| CoreError::Validation(first_message(&errors)))
    }
}

fn feature_img_url_format(value: &str) -> Result<(), ValidationError> {
    url_if_present(value, "Feature image URL is not a valid URL")
}

fn original_source_url_format(value: &str) -> Result<(), ValidationError> {
    url_if_present(value, "Original source URL is not a valid URL")
}

/// Empty URLs are allowed; non-empty ones must be well-formed `http(s)` URLs.
fn url_if_present(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.is_empty() || (has_web_scheme(value) && value.validate_url()) {
        Ok(())
    } else {
        Err(ValidationError::new("url").with_message(Cow::Borrowed(message)))
    }
}

/// Stored URLs end up in `href`/`src` attributes, so only web schemes pass.
fn has_web_scheme(value: &str) -> bool {
    value.split_once("://").is_some_and(|(scheme, _)| {
        scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")
    })
}

fn first_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    FIELD_ORDER
        .iter()
        .find_map(|field| {
            field_errors
                .get(*field)
                .and_then(|errs| errs.first())
                .map(|err| {
                    err.message
                        .clone()
                        .unwrap_or_else(|| Cow::Owned(format!("{field} is invalid")))
                        .into_owned()
                })
        })
        .unwrap_or_else(|| errors.to_string())
}
