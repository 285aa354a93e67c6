//! Positional arguments for message templates
//!
//! A template call takes a slice of [`FormatArg`], one per positional value.
//! Conversions from the common primitive, string and `chrono` types are
//! provided; anything else implementing [`fmt::Display`] can be passed by
//! reference with [`FormatArg::display`].

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::borrow::Cow;
use std::fmt::{self, Write};

#[derive(Clone)]
pub enum FormatArg<'a> {
    Null,
    Bool(bool),
    Char(char),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(Cow<'a, str>),
    DateTime(DateTime<FixedOffset>),
    NaiveDateTime(NaiveDateTime),
    NaiveDate(NaiveDate),
    Display(&'a (dyn fmt::Display + 'a)),
}

impl<'a> FormatArg<'a> {
    /// Wrap any displayable value; it is only rendered by `%s`-like conversions.
    pub fn display<T: fmt::Display + 'a>(value: &'a T) -> Self {
        FormatArg::Display(value)
    }

    /// Short type name used in conversion errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            FormatArg::Null => "null",
            FormatArg::Bool(_) => "bool",
            FormatArg::Char(_) => "char",
            FormatArg::Int(_) => "signed integer",
            FormatArg::UInt(_) => "unsigned integer",
            FormatArg::Float(_) => "float",
            FormatArg::Str(_) => "string",
            FormatArg::DateTime(_) => "date-time",
            FormatArg::NaiveDateTime(_) => "local date-time",
            FormatArg::NaiveDate(_) => "date",
            FormatArg::Display(_) => "display value",
        }
    }

    /// Plain string form, as `%s` with no flags renders it.
    pub fn write_plain<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        match self {
            FormatArg::Null => out.write_str("null"),
            FormatArg::Bool(v) => write!(out, "{}", v),
            FormatArg::Char(v) => out.write_char(*v),
            FormatArg::Int(v) => write!(out, "{}", v),
            FormatArg::UInt(v) => write!(out, "{}", v),
            FormatArg::Float(v) => write!(out, "{}", v),
            FormatArg::Str(v) => out.write_str(v),
            FormatArg::DateTime(v) => write!(out, "{}", v.to_rfc3339()),
            FormatArg::NaiveDateTime(v) => write!(out, "{}", v.format("%Y-%m-%dT%H:%M:%S%.f")),
            FormatArg::NaiveDate(v) => write!(out, "{}", v),
            FormatArg::Display(v) => write!(out, "{}", v),
        }
    }
}

impl fmt::Debug for FormatArg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatArg::Display(_) => f.write_str("Display(..)"),
            other => {
                let mut text = String::new();
                other.write_plain(&mut text)?;
                write!(f, "{}({:?})", other.type_name(), text)
            }
        }
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for FormatArg<'_> {
            fn from(v: $t) -> Self {
                FormatArg::Int(v as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for FormatArg<'_> {
            fn from(v: $t) -> Self {
                FormatArg::UInt(v as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for FormatArg<'_> {
    fn from(v: f32) -> Self {
        FormatArg::Float(v as f64)
    }
}

impl From<f64> for FormatArg<'_> {
    fn from(v: f64) -> Self {
        FormatArg::Float(v)
    }
}

impl From<bool> for FormatArg<'_> {
    fn from(v: bool) -> Self {
        FormatArg::Bool(v)
    }
}

impl From<char> for FormatArg<'_> {
    fn from(v: char) -> Self {
        FormatArg::Char(v)
    }
}

impl<'a> From<&'a str> for FormatArg<'a> {
    fn from(v: &'a str) -> Self {
        FormatArg::Str(Cow::Borrowed(v))
    }
}

impl<'a> From<&'a String> for FormatArg<'a> {
    fn from(v: &'a String) -> Self {
        FormatArg::Str(Cow::Borrowed(v.as_str()))
    }
}

impl From<String> for FormatArg<'_> {
    fn from(v: String) -> Self {
        FormatArg::Str(Cow::Owned(v))
    }
}

impl From<DateTime<Utc>> for FormatArg<'_> {
    fn from(v: DateTime<Utc>) -> Self {
        FormatArg::DateTime(v.fixed_offset())
    }
}

impl From<DateTime<Local>> for FormatArg<'_> {
    fn from(v: DateTime<Local>) -> Self {
        FormatArg::DateTime(v.fixed_offset())
    }
}

impl From<DateTime<FixedOffset>> for FormatArg<'_> {
    fn from(v: DateTime<FixedOffset>) -> Self {
        FormatArg::DateTime(v)
    }
}

impl From<NaiveDateTime> for FormatArg<'_> {
    fn from(v: NaiveDateTime) -> Self {
        FormatArg::NaiveDateTime(v)
    }
}

impl From<NaiveDate> for FormatArg<'_> {
    fn from(v: NaiveDate) -> Self {
        FormatArg::NaiveDate(v)
    }
}

impl From<std::time::SystemTime> for FormatArg<'_> {
    fn from(v: std::time::SystemTime) -> Self {
        FormatArg::DateTime(DateTime::<Utc>::from(v).fixed_offset())
    }
}

impl<'a, T> From<Option<T>> for FormatArg<'a>
where
    T: Into<FormatArg<'a>>,
{
    fn from(v: Option<T>) -> Self {
        v.map_or(FormatArg::Null, Into::into)
    }
}

/// Resolve an epoch-millisecond integer into a UTC timestamp.
pub(crate) fn datetime_from_millis(millis: i64) -> Option<DateTime<FixedOffset>> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.fixed_offset())
}

/// Build an argument list from heterogeneous values.
///
/// ```
/// use tagged_logger::{args, FormatArg};
///
/// let list: Vec<FormatArg> = args!["abc", 42, 1.5];
/// assert_eq!(list.len(), 3);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::FormatArg>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::FormatArg::from($arg)),+]
    };
}
