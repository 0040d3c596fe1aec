//! Polygon files (`.pol`): the vertex count on the first line, then one
//! `x y` pair per line.
//!
//! Coordinates are exact rationals. Accepted forms are integers (`-12`),
//! decimals with optional exponent (`0.125`, `1.5e-3`) and fractions
//! (`7/3`). Writing uses the fraction form, so a file round-trips exactly.

use std::fmt::Write as _;

use num::{BigInt, One, Zero};

use crate::error::{Error, Result};
use crate::kernel::{Point, Polygon, Scalar};

/// Parse the contents of a `.pol` file. Orientation and simplicity are not
/// checked here.
pub fn parse_pol(text: &str) -> Result<Polygon> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let (first, header) = lines.next().ok_or_else(|| Error::Parse {
        line: 1,
        message: "empty file".into(),
    })?;
    let count: usize = header.parse().map_err(|_| Error::Parse {
        line: first,
        message: format!("expected vertex count, found '{header}'"),
    })?;

    let mut polygon = Polygon::default();
    let mut last = first;
    for (line, content) in lines {
        last = line;
        let fields: Vec<&str> = content.split_whitespace().collect();
        let [x, y] = fields.as_slice() else {
            return Err(Error::Parse {
                line,
                message: format!("expected 2 coordinates, found {}", fields.len()),
            });
        };
        let x = parse_scalar(x).map_err(|message| Error::Parse { line, message })?;
        let y = parse_scalar(y).map_err(|message| Error::Parse { line, message })?;
        polygon.push(Point::new(x, y));
    }
    if polygon.len() != count {
        return Err(Error::Parse {
            line: last,
            message: format!("header announces {count} vertices, found {}", polygon.len()),
        });
    }
    Ok(polygon)
}

/// Render a polygon in `.pol` format.
pub fn format_pol(polygon: &Polygon) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", polygon.len());
    for p in polygon.vertices() {
        let _ = writeln!(out, "{p}");
    }
    out
}

/// Largest accepted decimal exponent magnitude.
const MAX_EXPONENT: u32 = 4096;

/// Exact value of a decimal, scientific or fractional literal.
pub fn parse_scalar(s: &str) -> std::result::Result<Scalar, String> {
    let bad = || format!("malformed number '{s}'");
    if let Some((num, den)) = s.split_once('/') {
        let num: BigInt = num.parse().map_err(|_| bad())?;
        let den: BigInt = den.parse().map_err(|_| bad())?;
        if den.is_zero() {
            return Err(format!("zero denominator in '{s}'"));
        }
        return Ok(Scalar::new(num, den));
    }

    let (mantissa, exp) = match s.find(|c: char| c == 'e' || c == 'E') {
        Some(i) => (&s[..i], s[i + 1..].parse::<i32>().map_err(|_| bad())?),
        None => (s, 0),
    };
    if exp.unsigned_abs() > MAX_EXPONENT {
        return Err(format!("exponent out of range in '{s}'"));
    }
    let (negative, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, mantissa.strip_prefix('+').unwrap_or(mantissa)),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(bad());
    }
    if !int_part.chars().chain(frac_part.chars()).all(|c| c.is_ascii_digit()) {
        return Err(bad());
    }
    let digits: BigInt = format!("{int_part}{frac_part}").parse().map_err(|_| bad())?;
    let scale = exp - i32::try_from(frac_part.len()).map_err(|_| bad())?;
    let ten = BigInt::from(10);
    let mut value = Scalar::from_integer(digits);
    if scale >= 0 {
        value *= Scalar::from_integer(num::pow(ten, scale as usize));
    } else {
        value /= Scalar::from_integer(num::pow(ten, scale.unsigned_abs() as usize));
    }
    if negative {
        value = -value;
    }
    debug_assert!(value.denom() >= &BigInt::one());
    Ok(value)
}
