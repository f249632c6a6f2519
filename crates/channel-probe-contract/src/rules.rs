// crates/channel-probe-contract/src/rules.rs
// ============================================================================
// Module: Body Constraint Rules
// Description: Declared field/constraint table for create-channel bodies.
// Purpose: Reproduce the server's validation-detail list byte for byte.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! The server reports every violated constraint, field by field, in a fixed
//! order. Each constraint looks at the raw JSON value on its own; a failure of
//! one never suppresses another. Before constraints run, a trim step rewrites
//! string `name` values and throws on non-string ones.
//! Invariants:
//! - [`field_rules`] order is the reporting order.
//! - Length constraints fail for any non-string value.
//! - Length counts Unicode scalar values, ignoring variation selectors.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::messages::TRIM_TYPE_ERROR;

// ============================================================================
// SECTION: Fields
// ============================================================================

/// Body fields validated by the create-channel endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Field {
    /// Target workspace identifier.
    WorkspaceId,
    /// Channel display name.
    Name,
}

impl Field {
    /// Returns the JSON key (and message prefix) for the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WorkspaceId => "workspaceId",
            Self::Name => "name",
        }
    }
}

// ============================================================================
// SECTION: Constraints
// ============================================================================

/// A single declared constraint on a body field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Constraint {
    /// Value must be present and not null.
    Defined,
    /// Value must strictly equal the given string literal.
    EqualsLiteral(&'static str),
    /// Value must be a JSON string.
    IsString,
    /// Value must not be `""`, null, or missing.
    NotEmpty,
    /// Value must be a string no longer than the bound.
    MaxLength(usize),
    /// Value must be a string at least as long as the bound.
    MinLength(usize),
}

impl Constraint {
    /// Returns true when the raw value fails this constraint.
    ///
    /// `None` stands for a missing key and is treated like JSON null.
    #[must_use]
    pub fn violated_by(self, value: Option<&Value>) -> bool {
        let value = value.filter(|value| !value.is_null());
        match self {
            Self::Defined => value.is_none(),
            Self::EqualsLiteral(literal) => value.and_then(Value::as_str) != Some(literal),
            Self::IsString => !matches!(value, Some(Value::String(_))),
            Self::NotEmpty => match value {
                None => true,
                Some(Value::String(text)) => text.is_empty(),
                Some(_) => false,
            },
            Self::MaxLength(max) => {
                value.and_then(Value::as_str).is_none_or(|text| text_length(text) > max)
            }
            Self::MinLength(min) => {
                value.and_then(Value::as_str).is_none_or(|text| text_length(text) < min)
            }
        }
    }

    /// Renders the validation detail for a failure on `field`.
    #[must_use]
    pub fn message(self, field: Field) -> String {
        let name = field.as_str();
        match self {
            Self::Defined => format!("{name} should not be null or undefined"),
            Self::EqualsLiteral(literal) => format!("{name} must be equal to {literal}"),
            Self::IsString => format!("{name} must be a string"),
            Self::NotEmpty => format!("{name} should not be empty"),
            Self::MaxLength(max) => {
                format!("{name} must be shorter than or equal to {max} characters")
            }
            Self::MinLength(min) => {
                format!("{name} must be longer than or equal to {min} characters")
            }
        }
    }
}

/// Counts characters the way the server's length validator does.
fn text_length(text: &str) -> usize {
    text.chars().filter(|ch| !matches!(ch, '\u{FE0E}' | '\u{FE0F}')).count()
}

// ============================================================================
// SECTION: Rule Table
// ============================================================================

/// Maximum channel name length after trimming.
pub const NAME_MAX_LENGTH: usize = 255;
/// Minimum channel name length after trimming.
pub const NAME_MIN_LENGTH: usize = 3;
/// The only accepted workspace identifier.
pub const WORKSPACE_ID_LITERAL: &str = "0";

/// Ordered constraints declared for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldRule {
    /// Field the constraints apply to.
    pub field: Field,
    /// Constraints in reporting order.
    pub constraints: &'static [Constraint],
}

/// Declared rule table, in reporting order.
static FIELD_RULES: [FieldRule; 2] = [
    FieldRule {
        field: Field::WorkspaceId,
        constraints: &[
            Constraint::Defined,
            Constraint::EqualsLiteral(WORKSPACE_ID_LITERAL),
            Constraint::IsString,
            Constraint::NotEmpty,
        ],
    },
    FieldRule {
        field: Field::Name,
        constraints: &[
            Constraint::Defined,
            Constraint::MaxLength(NAME_MAX_LENGTH),
            Constraint::MinLength(NAME_MIN_LENGTH),
            Constraint::IsString,
            Constraint::NotEmpty,
        ],
    },
];

/// Returns the declared field rules in reporting order.
#[must_use]
pub fn field_rules() -> &'static [FieldRule] {
    &FIELD_RULES
}

// ============================================================================
// SECTION: Evaluation
// ============================================================================

/// Returns true for the characters the server's string trim strips.
///
/// This is the ECMAScript `WhiteSpace` and `LineTerminator` set. It differs
/// from [`char::is_whitespace`]: U+FEFF is included and U+0085 is not.
#[must_use]
pub const fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Applies the trim step that runs before constraint evaluation.
///
/// String `name` values are trimmed; null or missing names pass through.
///
/// # Errors
///
/// Returns the runtime detail string when `name` is present but not a string.
pub fn normalize_body(body: &Map<String, Value>) -> Result<Map<String, Value>, String> {
    let mut normalized = body.clone();
    if let Some(value) = normalized.get_mut(Field::Name.as_str()) {
        match value {
            Value::Null => {}
            Value::String(text) => {
                let trimmed = text.trim_matches(is_js_whitespace).to_string();
                *text = trimmed;
            }
            _ => return Err(TRIM_TYPE_ERROR.to_string()),
        }
    }
    Ok(normalized)
}

/// Evaluates every rule against a (normalized) body and collects details.
///
/// An empty result means the body is valid.
#[must_use]
pub fn validation_details(body: &Map<String, Value>) -> Vec<String> {
    let mut details = Vec::new();
    for rule in field_rules() {
        let value = body.get(rule.field.as_str());
        for constraint in rule.constraints {
            if constraint.violated_by(value) {
                details.push(constraint.message(rule.field));
            }
        }
    }
    details
}
