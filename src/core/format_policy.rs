//! Policy for template/argument mismatches

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a logger does when a message template cannot be expanded.
///
/// # Example
///
/// ```
/// use tagged_logger::FormatErrorAction;
///
/// let action: FormatErrorAction = "append_as_string".parse().unwrap();
/// assert_eq!(action, FormatErrorAction::AppendAsString);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormatErrorAction {
    /// Return the formatting error to the caller; nothing is emitted
    #[default]
    Throw,

    /// Emit the raw template followed by ` (arg1, arg2, ...)`
    AppendAsString,
}

impl fmt::Display for FormatErrorAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatErrorAction::Throw => write!(f, "THROW"),
            FormatErrorAction::AppendAsString => write!(f, "APPEND_AS_STRING"),
        }
    }
}

impl FromStr for FormatErrorAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace('-', "_").as_str() {
            "THROW" => Ok(FormatErrorAction::Throw),
            "APPEND_AS_STRING" => Ok(FormatErrorAction::AppendAsString),
            _ => Err(format!("Invalid format error action: '{}'", s)),
        }
    }
}
