//! printf-style template expansion
//!
//! Directive syntax: `%[index$|<][flags][width][.precision]conversion`.
//! Ordinary directives consume arguments left to right; `n$` picks the n-th
//! argument (1-based) and `<` reuses the previous one without advancing the
//! ordinary cursor. Unused trailing arguments are ignored.

use super::error::FormatError;
use super::format_arg::{datetime_from_millis, FormatArg};
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime};
use std::fmt::Write;

/// Largest accepted width or precision.
pub const MAX_FIELD_WIDTH: usize = u16::MAX as usize;

#[derive(Debug, Default, Clone, Copy)]
struct Flags {
    left: bool,
    zero: bool,
    plus: bool,
    space: bool,
    group: bool,
    paren: bool,
    alt: bool,
}

impl Flags {
    fn any(&self) -> bool {
        self.left || self.alt || self.any_numeric()
    }

    fn any_numeric(&self) -> bool {
        self.zero || self.plus || self.space || self.group || self.paren
    }
}

#[derive(Debug, Clone, Copy)]
enum ArgIndex {
    Ordinary,
    Explicit(usize),
    Previous,
}

#[derive(Debug)]
struct Directive<'t> {
    text: &'t str,
    index: ArgIndex,
    flags: Flags,
    width: Option<usize>,
    precision: Option<usize>,
    conversion: char,
    date_suffix: Option<char>,
}

impl Directive<'_> {
    fn upper(&self) -> bool {
        self.conversion.is_ascii_uppercase()
    }

    fn illegal_flags(&self) -> FormatError {
        let f = self.flags;
        let mut flags = String::new();
        for (set, c) in [
            (f.left, '-'),
            (f.alt, '#'),
            (f.plus, '+'),
            (f.space, ' '),
            (f.zero, '0'),
            (f.group, ','),
            (f.paren, '('),
        ] {
            if set {
                flags.push(c);
            }
        }
        FormatError::IllegalFlags {
            flags,
            conversion: self.conversion,
        }
    }

    fn illegal_conversion(&self, arg: &FormatArg<'_>) -> FormatError {
        FormatError::IllegalConversion {
            conversion: self.conversion,
            arg_type: arg.type_name(),
        }
    }
}

/// Expand `template` with `args`, appending the result to `out`.
///
/// On error `out` may hold partially written text; callers decide whether to
/// keep or discard it.
pub fn format_into(
    out: &mut String,
    template: &str,
    args: &[FormatArg<'_>],
) -> Result<(), FormatError> {
    let bytes = template.as_bytes();
    let mut pos = 0;
    let mut ordinary = 0usize;
    let mut last: Option<usize> = None;

    while pos < bytes.len() {
        let Some(offset) = template[pos..].find('%') else {
            out.push_str(&template[pos..]);
            break;
        };
        out.push_str(&template[pos..pos + offset]);
        let start = pos + offset;
        let (directive, next) = parse_directive(template, start)?;
        pos = next;

        match directive.conversion {
            '%' => {
                if directive.flags.any_numeric() || directive.flags.alt {
                    return Err(directive.illegal_flags());
                }
                pad_into(out, "%", &directive);
                continue;
            }
            'n' => {
                out.push('\n');
                continue;
            }
            _ => {}
        }

        let slot = match directive.index {
            ArgIndex::Ordinary => {
                let slot = ordinary;
                ordinary += 1;
                slot
            }
            ArgIndex::Explicit(n) => n - 1,
            ArgIndex::Previous => last.ok_or_else(|| FormatError::IllegalIndex {
                directive: directive.text.to_string(),
            })?,
        };
        let arg = args.get(slot).ok_or_else(|| FormatError::MissingArgument {
            directive: directive.text.to_string(),
        })?;
        last = Some(slot);

        let rendered = render(&directive, arg)?;
        pad_into(out, &rendered, &directive);
    }

    Ok(())
}

/// Expand `template` into a new string.
pub fn sprintf(template: &str, args: &[FormatArg<'_>]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len() + 16);
    format_into(&mut out, template, args)?;
    Ok(out)
}

fn parse_directive(template: &str, start: usize) -> Result<(Directive<'_>, usize), FormatError> {
    let bytes = template.as_bytes();
    let truncated = || FormatError::TruncatedDirective {
        directive: template[start..].to_string(),
    };
    let mut pos = start + 1;

    // argument index: digits followed by '$'
    let mut index = ArgIndex::Ordinary;
    let digits = count_digits(&bytes[pos..]);
    if digits > 0 && bytes.get(pos + digits) == Some(&b'$') {
        let n: usize = template[pos..pos + digits].parse().unwrap_or(0);
        if n == 0 {
            return Err(FormatError::IllegalIndex {
                directive: template[start..pos + digits + 1].to_string(),
            });
        }
        index = ArgIndex::Explicit(n);
        pos += digits + 1;
    }

    let mut flags = Flags::default();
    while let Some(&b) = bytes.get(pos) {
        match b {
            b'-' => flags.left = true,
            b'0' => flags.zero = true,
            b'+' => flags.plus = true,
            b' ' => flags.space = true,
            b',' => flags.group = true,
            b'(' => flags.paren = true,
            b'#' => flags.alt = true,
            b'<' => index = ArgIndex::Previous,
            _ => break,
        }
        pos += 1;
    }

    let mut width = None;
    let digits = count_digits(&bytes[pos..]);
    if digits > 0 {
        width = Some(template[pos..pos + digits].parse().unwrap_or(usize::MAX));
        pos += digits;
    }

    let mut precision = None;
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        let digits = count_digits(&bytes[pos..]);
        if digits == 0 {
            return match template[pos..].chars().next() {
                Some(c) => Err(FormatError::UnknownConversion {
                    conversion: format!(".{}", c),
                }),
                None => Err(truncated()),
            };
        }
        precision = Some(template[pos..pos + digits].parse().unwrap_or(usize::MAX));
        pos += digits;
    }

    let conversion = template[pos..].chars().next().ok_or_else(truncated)?;
    pos += conversion.len_utf8();

    if !is_conversion(conversion) {
        return Err(FormatError::UnknownConversion {
            conversion: conversion.to_string(),
        });
    }

    let mut date_suffix = None;
    if conversion == 't' || conversion == 'T' {
        let suffix = template[pos..].chars().next().ok_or_else(truncated)?;
        pos += suffix.len_utf8();
        if date_pattern(suffix).is_none() {
            return Err(FormatError::UnknownConversion {
                conversion: format!("{}{}", conversion, suffix),
            });
        }
        date_suffix = Some(suffix);
    }

    let directive = Directive {
        text: &template[start..pos],
        index,
        flags,
        width,
        precision,
        conversion,
        date_suffix,
    };

    if width.max(precision).is_some_and(|n| n > MAX_FIELD_WIDTH) {
        return Err(FormatError::FieldTooLarge {
            directive: directive.text.to_string(),
            max: MAX_FIELD_WIDTH,
        });
    }
    let takes_precision = !matches!(
        conversion,
        'c' | 'C' | 'd' | 'x' | 'X' | 'o' | 't' | 'T' | '%' | 'n'
    );
    if precision.is_some() && !takes_precision {
        return Err(FormatError::IllegalPrecision {
            directive: directive.text.to_string(),
        });
    }
    if conversion == 'n' {
        if width.is_some() {
            return Err(FormatError::IllegalWidth {
                directive: directive.text.to_string(),
            });
        }
        if flags.any() {
            return Err(directive.illegal_flags());
        }
    }
    if (flags.left || flags.zero) && width.is_none() {
        return Err(FormatError::MissingWidth {
            directive: directive.text.to_string(),
        });
    }
    if (flags.left && flags.zero) || (flags.plus && flags.space) {
        return Err(directive.illegal_flags());
    }

    Ok((directive, pos))
}

fn is_conversion(c: char) -> bool {
    matches!(
        c,
        '%' | 'n'
            | 's' | 'S'
            | 'b' | 'B'
            | 'c' | 'C'
            | 'd'
            | 'x' | 'X'
            | 'o'
            | 'f'
            | 'e' | 'E'
            | 'g' | 'G'
            | 't' | 'T'
    )
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn render(d: &Directive<'_>, arg: &FormatArg<'_>) -> Result<String, FormatError> {
    let conv = d.conversion.to_ascii_lowercase();
    if conv == 'b' {
        check_flags(d, Flags { left: true, ..Flags::default() })?;
        let value = match arg {
            FormatArg::Null => false,
            FormatArg::Bool(v) => *v,
            _ => true,
        };
        return Ok(finish_text(d, value.to_string()));
    }

    if matches!(arg, FormatArg::Null) {
        return Ok(finish_text(d, "null".to_string()));
    }

    match conv {
        's' => {
            check_flags(d, Flags { left: true, ..Flags::default() })?;
            let mut text = String::new();
            arg.write_plain(&mut text)?;
            Ok(finish_text(d, text))
        }
        'c' => {
            check_flags(d, Flags { left: true, ..Flags::default() })?;
            let c = match arg {
                FormatArg::Char(c) => Some(*c),
                FormatArg::Int(v) => u32::try_from(*v).ok().and_then(char::from_u32),
                FormatArg::UInt(v) => u32::try_from(*v).ok().and_then(char::from_u32),
                _ => return Err(d.illegal_conversion(arg)),
            };
            let c = c.ok_or_else(|| d.illegal_conversion(arg))?;
            Ok(finish_text(d, c.to_string()))
        }
        'd' => {
            check_flags(
                d,
                Flags {
                    left: true,
                    zero: true,
                    plus: true,
                    space: true,
                    group: true,
                    paren: true,
                    alt: false,
                },
            )?;
            let (negative, magnitude) = match arg {
                FormatArg::Int(v) => (*v < 0, v.unsigned_abs()),
                FormatArg::UInt(v) => (false, *v),
                _ => return Err(d.illegal_conversion(arg)),
            };
            Ok(finish_number(d, negative, magnitude.to_string()))
        }
        'x' | 'o' => {
            check_flags(
                d,
                Flags {
                    left: true,
                    zero: true,
                    alt: true,
                    ..Flags::default()
                },
            )?;
            let bits = match arg {
                FormatArg::Int(v) => *v as u64,
                FormatArg::UInt(v) => *v,
                _ => return Err(d.illegal_conversion(arg)),
            };
            let (prefix, digits) = if conv == 'x' {
                ("0x", format!("{:x}", bits))
            } else {
                ("0", format!("{:o}", bits))
            };
            let prefix = if d.flags.alt { prefix } else { "" };
            let mut text = String::with_capacity(prefix.len() + digits.len());
            text.push_str(prefix);
            if let (true, Some(width)) = (d.flags.zero, d.width) {
                let fill = width.saturating_sub(prefix.len() + digits.len());
                text.extend(std::iter::repeat('0').take(fill));
            }
            text.push_str(&digits);
            if d.upper() {
                text = text.to_uppercase();
            }
            Ok(text)
        }
        'f' | 'e' | 'g' => {
            let allowed = Flags {
                left: true,
                zero: true,
                plus: true,
                space: true,
                group: conv != 'e',
                paren: true,
                alt: conv != 'g',
            };
            check_flags(d, allowed)?;
            let FormatArg::Float(value) = arg else {
                return Err(d.illegal_conversion(arg));
            };
            Ok(render_float(d, conv, *value))
        }
        't' => {
            check_flags(d, Flags { left: true, ..Flags::default() })?;
            render_date(d, arg)
        }
        _ => Err(FormatError::UnknownConversion {
            conversion: d.conversion.to_string(),
        }),
    }
}

fn check_flags(d: &Directive<'_>, allowed: Flags) -> Result<(), FormatError> {
    let f = d.flags;
    let violates = (f.left && !allowed.left)
        || (f.zero && !allowed.zero)
        || (f.plus && !allowed.plus)
        || (f.space && !allowed.space)
        || (f.group && !allowed.group)
        || (f.paren && !allowed.paren)
        || (f.alt && !allowed.alt);
    if violates {
        Err(d.illegal_flags())
    } else {
        Ok(())
    }
}

/// Apply precision truncation and upper-casing for textual conversions.
fn finish_text(d: &Directive<'_>, mut text: String) -> String {
    if let Some(precision) = d.precision {
        if let Some((cut, _)) = text.char_indices().nth(precision) {
            text.truncate(cut);
        }
    }
    if d.upper() {
        text = text.to_uppercase();
    }
    text
}

/// Sign, grouping, parentheses and zero padding for decimal output.
fn finish_number(d: &Directive<'_>, negative: bool, digits: String) -> String {
    let f = d.flags;
    let body = if f.group { group_digits(&digits) } else { digits };

    let (lead, trail) = match (negative, f.paren) {
        (true, true) => ("(", ")"),
        (true, false) => ("-", ""),
        (false, _) if f.plus => ("+", ""),
        (false, _) if f.space => (" ", ""),
        _ => ("", ""),
    };

    let mut text = String::with_capacity(lead.len() + body.len() + trail.len());
    text.push_str(lead);
    if let (true, Some(width)) = (f.zero, d.width) {
        let used = lead.len() + body.chars().count() + trail.len();
        text.extend(std::iter::repeat('0').take(width.saturating_sub(used)));
    }
    text.push_str(&body);
    text.push_str(trail);
    text
}

/// Insert `,` separators into the integer part of a decimal string.
fn group_digits(digits: &str) -> String {
    let (int_part, rest) = match digits.find('.') {
        Some(dot) => digits.split_at(dot),
        None => (digits, ""),
    };
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + rest.len());
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped.push_str(rest);
    grouped
}

fn render_float(d: &Directive<'_>, conv: char, value: f64) -> String {
    if value.is_nan() || value.is_infinite() {
        let text = if value.is_nan() {
            "NaN".to_string()
        } else if value.is_sign_negative() {
            let text = if d.flags.paren { "(Infinity)" } else { "-Infinity" };
            text.to_string()
        } else if d.flags.plus {
            "+Infinity".to_string()
        } else {
            "Infinity".to_string()
        };
        return if d.upper() { text.to_uppercase() } else { text };
    }

    let negative = value.is_sign_negative();
    let magnitude = value.abs();
    let precision = d.precision.unwrap_or(6);

    let digits = match conv {
        'f' => format!("{:.*}", precision, magnitude),
        'e' => scientific(magnitude, precision),
        _ => general(magnitude, precision),
    };
    let text = finish_number(d, negative, digits);
    if d.upper() {
        text.to_uppercase()
    } else {
        text
    }
}

/// `1.500000e+03` style output with a signed, two-digit exponent.
fn scientific(magnitude: f64, precision: usize) -> String {
    let raw = format!("{:.*e}", precision, magnitude);
    match raw.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.abs())
        }
        None => raw,
    }
}

fn general(magnitude: f64, precision: usize) -> String {
    let precision = precision.max(1);
    if magnitude == 0.0 {
        return format!("{:.*}", precision - 1, magnitude);
    }
    // exponent after rounding to `precision` significant digits
    let rounded = scientific(magnitude, precision - 1);
    let exp: i32 = rounded
        .split_once('e')
        .and_then(|(_, e)| e.parse().ok())
        .unwrap_or(0);
    if (-4..precision as i32).contains(&exp) {
        let decimals = (precision as i32 - 1 - exp).max(0) as usize;
        format!("{:.*}", decimals, magnitude)
    } else {
        rounded
    }
}

enum DateValue {
    Zoned(DateTime<FixedOffset>),
    Local(NaiveDateTime),
    Date(NaiveDate),
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Needs {
    Date,
    Time,
    Zone,
}

fn date_pattern(suffix: char) -> Option<(&'static str, Needs)> {
    let entry = match suffix {
        'H' => ("%H", Needs::Time),
        'I' => ("%I", Needs::Time),
        'k' => ("%-H", Needs::Time),
        'l' => ("%-I", Needs::Time),
        'M' => ("%M", Needs::Time),
        'S' => ("%S", Needs::Time),
        'L' => ("%3f", Needs::Time),
        'N' => ("%9f", Needs::Time),
        'p' => ("%P", Needs::Time),
        'R' => ("%H:%M", Needs::Time),
        'T' => ("%H:%M:%S", Needs::Time),
        'r' => ("%I:%M:%S %p", Needs::Time),
        'z' => ("%z", Needs::Zone),
        'Z' => ("", Needs::Zone),
        's' => ("%s", Needs::Zone),
        'Q' => ("", Needs::Zone),
        'c' => ("", Needs::Zone),
        'B' => ("%B", Needs::Date),
        'b' | 'h' => ("%b", Needs::Date),
        'A' => ("%A", Needs::Date),
        'a' => ("%a", Needs::Date),
        'C' => ("", Needs::Date),
        'Y' => ("%Y", Needs::Date),
        'y' => ("%y", Needs::Date),
        'j' => ("%j", Needs::Date),
        'm' => ("%m", Needs::Date),
        'd' => ("%d", Needs::Date),
        'e' => ("%-d", Needs::Date),
        'D' => ("%m/%d/%y", Needs::Date),
        'F' => ("%Y-%m-%d", Needs::Date),
        _ => return None,
    };
    Some(entry)
}

fn zone_name(dt: &DateTime<FixedOffset>) -> String {
    if dt.offset().local_minus_utc() == 0 {
        "UTC".to_string()
    } else {
        dt.format("%:z").to_string()
    }
}

fn render_date(d: &Directive<'_>, arg: &FormatArg<'_>) -> Result<String, FormatError> {
    let suffix = d.date_suffix.unwrap_or('?');
    let (pattern, needs) = date_pattern(suffix).ok_or_else(|| FormatError::UnknownConversion {
        conversion: format!("{}{}", d.conversion, suffix),
    })?;

    let value = match arg {
        FormatArg::DateTime(dt) => DateValue::Zoned(*dt),
        FormatArg::NaiveDateTime(dt) => DateValue::Local(*dt),
        FormatArg::NaiveDate(date) => DateValue::Date(*date),
        FormatArg::Int(millis) => {
            DateValue::Zoned(datetime_from_millis(*millis).ok_or_else(|| d.illegal_conversion(arg))?)
        }
        FormatArg::UInt(millis) => {
            let millis = i64::try_from(*millis).map_err(|_| d.illegal_conversion(arg))?;
            DateValue::Zoned(datetime_from_millis(millis).ok_or_else(|| d.illegal_conversion(arg))?)
        }
        _ => return Err(d.illegal_conversion(arg)),
    };

    let supported = match (&value, needs) {
        (DateValue::Zoned(_), _) => true,
        (DateValue::Local(_), Needs::Date | Needs::Time) => true,
        (DateValue::Date(_), Needs::Date) => true,
        _ => false,
    };
    if !supported {
        return Err(d.illegal_conversion(arg));
    }

    let mut text = String::new();
    match (&value, suffix) {
        (DateValue::Zoned(dt), 'Z') => text.push_str(&zone_name(dt)),
        (DateValue::Zoned(dt), 'Q') => write!(text, "{}", dt.timestamp_millis())?,
        (DateValue::Zoned(dt), 'c') => write!(
            text,
            "{} {} {}",
            dt.format("%a %b %d %H:%M:%S"),
            zone_name(dt),
            dt.format("%Y")
        )?,
        (DateValue::Zoned(dt), 'C') => write!(text, "{:02}", dt.year() / 100)?,
        (DateValue::Local(dt), 'C') => write!(text, "{:02}", dt.year() / 100)?,
        (DateValue::Date(date), 'C') => write!(text, "{:02}", date.year() / 100)?,
        (DateValue::Zoned(dt), _) => write!(text, "{}", dt.format(pattern))?,
        (DateValue::Local(dt), _) => write!(text, "{}", dt.format(pattern))?,
        (DateValue::Date(date), _) => write!(text, "{}", date.format(pattern))?,
    }

    if d.upper() {
        text = text.to_uppercase();
    }
    Ok(text)
}

fn pad_into(out: &mut String, text: &str, d: &Directive<'_>) {
    let len = text.chars().count();
    let fill = d.width.map_or(0, |w| w.saturating_sub(len));
    if d.flags.left {
        out.push_str(text);
        out.extend(std::iter::repeat(' ').take(fill));
    } else {
        out.extend(std::iter::repeat(' ').take(fill));
        out.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use chrono::{TimeZone, Utc};
    use std::fmt;

    fn fmt(template: &str, args: &[FormatArg<'_>]) -> String {
        sprintf(template, args).unwrap()
    }

    #[test]
    fn test_literal_text_passes_through() {
        assert_eq!(fmt("hello world", &[]), "hello world");
        assert_eq!(fmt("100%% sure%n", &[]), "100% sure\n");
        assert_eq!(fmt("größe: %s", &args!["ü"]), "größe: ü");
    }

    #[test]
    fn test_strings_and_integers() {
        assert_eq!(fmt("%s=%d", &args!["count", 42]), "count=42");
        assert_eq!(fmt("[%5s|%-5s]", &args!["ab", "cd"]), "[   ab|cd   ]");
        assert_eq!(fmt("%.2s", &args!["abcdef"]), "ab");
        assert_eq!(fmt("%S", &args!["shout"]), "SHOUT");
        assert_eq!(fmt("%s", &args![3.5]), "3.5");
    }

    #[test]
    fn test_integer_flags() {
        assert_eq!(fmt("%05d", &args![42]), "00042");
        assert_eq!(fmt("%+d", &args![7]), "+7");
        assert_eq!(fmt("% d", &args![7]), " 7");
        assert_eq!(fmt("%,d", &args![1234567]), "1,234,567");
        assert_eq!(fmt("%(d", &args![-15]), "(15)");
        assert_eq!(fmt("%06d", &args![-42]), "-00042");
        assert_eq!(fmt("%d", &args![i64::MIN]), "-9223372036854775808");
        assert_eq!(fmt("%x %X %#x %o", &args![255, 255, 255, 8]), "ff FF 0xff 10");
        assert_eq!(fmt("%x", &args![-1i32]), "ffffffffffffffff");
    }

    #[test]
    fn test_floats() {
        assert_eq!(fmt("%f", &args![1.5]), "1.500000");
        assert_eq!(fmt("%.2f", &args![3.14159]), "3.14");
        assert_eq!(fmt("%,.1f", &args![12345.67]), "12,345.7");
        assert_eq!(fmt("%.3e", &args![1234.56]), "1.235e+03");
        assert_eq!(fmt("%E", &args![0.00012]), "1.200000E-04");
        assert_eq!(fmt("%g", &args![0.0001]), "0.000100000");
        assert_eq!(fmt("%g", &args![1234567.0]), "1.23457e+06");
        assert_eq!(fmt("%f", &args![f64::NAN]), "NaN");
        assert_eq!(fmt("%8.2f", &args![-2.5]), "   -2.50");
    }

    #[test]
    fn test_chars_and_booleans() {
        assert_eq!(fmt("%c%c", &args!['o', 107]), "ok");
        assert_eq!(fmt("%b %b %b", &args![true, FormatArg::Null, "x"]), "true false true");
        assert_eq!(fmt("%B", &args![false]), "FALSE");
    }

    #[test]
    fn test_null_renders_as_null() {
        assert_eq!(fmt("%s %d %f", &args![None::<i32>, None::<i32>, None::<f64>]), "null null null");
    }

    #[test]
    fn test_argument_indexing() {
        assert_eq!(fmt("%2$s %1$s", &args!["a", "b"]), "b a");
        assert_eq!(fmt("%s %<s %s", &args!["a", "b"]), "a a b");
        assert_eq!(fmt("%1$s %s %s", &args!["a", "b"]), "a a b");
        assert_eq!(fmt("%s", &args!["a", "unused"]), "a");
    }

    #[test]
    fn test_date_directives() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(fmt("%tY-%<tm-%<td", &args![dt]), "2024-03-09");
        assert_eq!(fmt("%1$tH:%1$tM:%1$tS", &args![dt]), "14:05:07");
        assert_eq!(fmt("%tF %<tT", &args![dt]), "2024-03-09 14:05:07");
        assert_eq!(fmt("%tB %<te, %<tA", &args![dt]), "March 9, Saturday");
        assert_eq!(fmt("%tZ", &args![dt]), "UTC");
        assert_eq!(fmt("%tc", &args![dt]), "Sat Mar 09 14:05:07 UTC 2024");
        assert_eq!(fmt("%Tb", &args![dt]), "MAR");
        assert_eq!(fmt("%tQ", &args![dt]), dt.timestamp_millis().to_string());
        assert_eq!(fmt("%tY", &args![0i64]), "1970");

        let date = NaiveDate::from_ymd_opt(2020, 12, 31).unwrap();
        assert_eq!(fmt("%tD", &args![date]), "12/31/20");
        assert_eq!(fmt("%tj", &args![date]), "366");
    }

    #[test]
    fn test_missing_argument() {
        let err = sprintf("%s", &[]).unwrap_err();
        assert_eq!(
            err,
            FormatError::MissingArgument {
                directive: "%s".into()
            }
        );
        assert!(sprintf("%s %s", &args!["one"]).is_err());
        assert!(sprintf("%3$s", &args!["one"]).is_err());
    }

    #[test]
    fn test_type_mismatch() {
        let err = sprintf("%d", &args!["abc"]).unwrap_err();
        assert!(matches!(
            err,
            FormatError::IllegalConversion {
                conversion: 'd',
                arg_type: "string"
            }
        ));
        assert!(sprintf("%f", &args![1]).is_err());
        assert!(sprintf("%tY", &args!["2024"]).is_err());
        assert!(sprintf("%c", &args![-1]).is_err());
    }

    #[test]
    fn test_malformed_templates() {
        assert!(matches!(
            sprintf("trailing %", &[]),
            Err(FormatError::TruncatedDirective { .. })
        ));
        assert!(matches!(
            sprintf("%q", &args![1]),
            Err(FormatError::UnknownConversion { .. })
        ));
        assert!(matches!(
            sprintf("%-d", &args![1]),
            Err(FormatError::MissingWidth { .. })
        ));
        assert!(matches!(
            sprintf("%#d", &args![1]),
            Err(FormatError::IllegalFlags { .. })
        ));
        assert!(matches!(
            sprintf("%<s", &args![1]),
            Err(FormatError::IllegalIndex { .. })
        ));
        assert!(matches!(
            sprintf("%tq", &args![0]),
            Err(FormatError::UnknownConversion { .. })
        ));
    }

    #[test]
    fn test_precision_rejected_where_meaningless() {
        for (template, args) in [
            ("%.2d", args![5]),
            ("%.2x", args![5]),
            ("%.1o", args![5]),
            ("%.2c", args!['a']),
            ("%.3tY", args![0]),
            ("%.1%", args![]),
        ] {
            assert!(
                matches!(
                    sprintf(template, &args),
                    Err(FormatError::IllegalPrecision { .. })
                ),
                "{} was accepted",
                template
            );
        }
        assert_eq!(fmt("%.2s|%.1f|%.3b", &args!["abc", 1.26, true]), "ab|1.3|tru");
    }

    #[test]
    fn test_line_separator_takes_no_modifiers() {
        assert!(matches!(
            sprintf("%5n", &[]),
            Err(FormatError::IllegalWidth { .. })
        ));
        assert!(matches!(
            sprintf("%-5n", &[]),
            Err(FormatError::IllegalWidth { .. })
        ));
        assert!(matches!(
            sprintf("%+n", &[]),
            Err(FormatError::IllegalFlags { .. })
        ));
        assert!(matches!(
            sprintf("%.2n", &[]),
            Err(FormatError::IllegalPrecision { .. })
        ));
    }

    #[test]
    fn test_oversized_fields_rejected() {
        let err = sprintf("%999999999999s", &args!["x"]).unwrap_err();
        assert_eq!(
            err,
            FormatError::FieldTooLarge {
                directive: "%999999999999s".into(),
                max: MAX_FIELD_WIDTH
            }
        );
        assert!(sprintf("%.65536f", &args![1.0]).is_err());
        assert!(sprintf("%99999999999999999999999d", &args![1]).is_err());
        assert_eq!(fmt("%65535s", &args!["x"]).len(), MAX_FIELD_WIDTH);
    }

    #[test]
    fn test_negative_zero_keeps_sign() {
        assert_eq!(fmt("%f", &args![-0.0]), "-0.000000");
        assert_eq!(fmt("%.1f", &args![0.0]), "0.0");
    }

    #[test]
    fn test_zone_directive_needs_zoned_value() {
        let naive = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        assert_eq!(fmt("%tT", &args![naive]), "03:04:05");
        assert!(sprintf("%tz", &args![naive]).is_err());
        assert!(sprintf("%tH", &args![naive.date()]).is_err());
    }

    struct Broken;

    impl fmt::Display for Broken {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_display_failure_is_format_error() {
        let broken = Broken;
        let err = sprintf("%s", &[FormatArg::display(&broken)]).unwrap_err();
        assert_eq!(err, FormatError::Display(fmt::Error));
    }
}
