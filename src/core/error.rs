//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Failure raised while expanding a message template.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// A directive refers to an argument that was not supplied
    #[error("Format specifier '{directive}' has no matching argument")]
    MissingArgument { directive: String },

    /// The argument type cannot be rendered by the conversion
    #[error("Conversion '{conversion}' cannot format argument of type {arg_type}")]
    IllegalConversion { conversion: char, arg_type: &'static str },

    /// Conversion character not recognised
    #[error("Unknown format conversion '{conversion}'")]
    UnknownConversion { conversion: String },

    /// Template ended in the middle of a directive
    #[error("Incomplete format specifier at end of template: '{directive}'")]
    TruncatedDirective { directive: String },

    /// `-` or `0` flag given without a width
    #[error("Format specifier '{directive}' requires a width")]
    MissingWidth { directive: String },

    /// Flags that conflict or do not apply to the conversion
    #[error("Flags '{flags}' are not valid for conversion '{conversion}'")]
    IllegalFlags { flags: String, conversion: char },

    /// Precision given to a conversion that takes none
    #[error("Format specifier '{directive}' does not accept a precision")]
    IllegalPrecision { directive: String },

    /// Width given to a conversion that takes none
    #[error("Format specifier '{directive}' does not accept a width")]
    IllegalWidth { directive: String },

    /// Width or precision above the supported maximum
    #[error("Width or precision in '{directive}' exceeds {max}")]
    FieldTooLarge { directive: String, max: usize },

    /// Argument index `0$` or `<` with no previous argument
    #[error("Illegal argument index in '{directive}'")]
    IllegalIndex { directive: String },

    /// The argument's own `Display` implementation failed
    #[error("Argument display failed: {0}")]
    Display(#[from] std::fmt::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Template/argument mismatch under the throwing policy
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    /// Emitter rejected a message
    #[error("Emitter '{emitter}' failed: {message}")]
    Emitter { emitter: String, message: String },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoggerError {
    /// Create an emitter failure
    pub fn emitter(emitter: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Emitter {
            emitter: emitter.into(),
            message: message.into(),
        }
    }

    pub fn is_format(&self) -> bool {
        matches!(self, LoggerError::Format(_))
    }
}
