//! Explicit validation of incoming create-order requests.
//!
//! Checks are presence and format level only; a request that passes is
//! converted into a [`CreateOrderCommand`] so downstream code never sees
//! optional fields.

use crate::model::{CreateOrderCommand, CreateOrderItem, CreateOrderRequest, NewOrderItem};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// A single failed constraint on the incoming request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

// Same permissive shape as the HTML5 email input pattern.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

/// Validates the raw request, returning the validated command or the full
/// list of field errors. Numeric positivity is intentionally not checked;
/// only presence, blankness and email format are enforced.
pub fn validate_create_order(
    request: CreateOrderRequest,
) -> Result<CreateOrderCommand, Vec<FieldError>> {
    let mut errors = Vec::new();

    let customer_email = match request.customer_email {
        Some(email) if email.trim().is_empty() => {
            errors.push(FieldError::new("customerEmail", "must not be blank"));
            None
        }
        Some(email) if !EMAIL_RE.is_match(&email) => {
            errors.push(FieldError::new(
                "customerEmail",
                "is not a valid email address",
            ));
            None
        }
        Some(email) => Some(email),
        None => {
            errors.push(FieldError::new("customerEmail", "must not be blank"));
            None
        }
    };

    let items = match request.items {
        Some(items) if !items.is_empty() => Some(
            items
                .into_iter()
                .enumerate()
                .filter_map(|(index, item)| validate_item(index, item, &mut errors))
                .collect::<Vec<_>>(),
        ),
        _ => {
            errors.push(FieldError::new("items", "must contain at least one item"));
            None
        }
    };

    match (customer_email, items) {
        (Some(customer_email), Some(items)) if errors.is_empty() => Ok(CreateOrderCommand {
            customer_email,
            items,
        }),
        _ => Err(errors),
    }
}

fn validate_item(
    index: usize,
    item: CreateOrderItem,
    errors: &mut Vec<FieldError>,
) -> Option<NewOrderItem> {
    let CreateOrderItem {
        product_name,
        unit_price,
        quantity,
    } = item;

    let product_name = match product_name {
        Some(name) if !name.trim().is_empty() => Some(name),
        _ => {
            errors.push(FieldError::new(
                format!("items[{index}].product_name"),
                "must not be blank",
            ));
            None
        }
    };
    if unit_price.is_none() {
        errors.push(FieldError::new(
            format!("items[{index}].unit_price"),
            "must be present",
        ));
    }
    if quantity.is_none() {
        errors.push(FieldError::new(
            format!("items[{index}].quantity"),
            "must be present",
        ));
    }

    Some(NewOrderItem {
        product_name: product_name?,
        unit_price: unit_price?,
        quantity: quantity?,
    })
}
