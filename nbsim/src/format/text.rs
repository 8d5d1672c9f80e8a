//! Plain-text universe format
//!
//! Whitespace-delimited tokens:
//!
//! ```text
//! <body count>
//! <radius>
//! <x> <y> <vx> <vy> <mass> <visual id>     (one line per body)
//! ```
//!
//! Floats are written in C-stream `scientific` layout (`1.000000e+01`) and
//! read back with any standard float spelling. Line breaks carry no meaning
//! on input.

use std::fmt;
use std::str::{FromStr, SplitWhitespace};

use crate::error::{NbodyError, Result};
use crate::simulation::states::{Body, NVec2};

/// Display adapter writing `x` as `d.dddddde±XX`
#[derive(Debug, Clone, Copy)]
pub struct Scientific(pub f64);

impl fmt::Display for Scientific {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = format!("{:.6e}", self.0);
        match s.split_once('e') {
            Some((mantissa, exp)) => {
                let (sign, digits) = match exp.strip_prefix('-') {
                    Some(d) => ('-', d),
                    None => ('+', exp),
                };
                write!(f, "{mantissa}e{sign}{digits:0>2}")
            }
            // inf / NaN have no exponent
            None => f.write_str(&s),
        }
    }
}

/// Token cursor over a universe text that remembers how far it got, so
/// errors can point at the offending token.
pub struct Tokens<'a> {
    iter: SplitWhitespace<'a>,
    consumed: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            iter: text.split_whitespace(),
            consumed: 0,
        }
    }

    /// Number of tokens handed out so far
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn next_token(&mut self, field: &str) -> Result<&'a str> {
        match self.iter.next() {
            Some(tok) => {
                self.consumed += 1;
                Ok(tok)
            }
            None => Err(NbodyError::MalformedInput(format!(
                "input ended after {} tokens while reading {field}",
                self.consumed
            ))),
        }
    }

    pub fn next_f64(&mut self, field: &str) -> Result<f64> {
        let tok = self.next_token(field)?;
        tok.parse::<f64>().map_err(|_| {
            NbodyError::MalformedInput(format!(
                "token {}: {field} `{tok}` is not a number",
                self.consumed
            ))
        })
    }

    pub fn next_count(&mut self, field: &str) -> Result<usize> {
        let tok = self.next_token(field)?;
        tok.parse::<usize>().map_err(|_| {
            NbodyError::MalformedInput(format!(
                "token {}: {field} `{tok}` is not an unsigned integer",
                self.consumed
            ))
        })
    }

    /// Count the tokens left over (drains the cursor)
    pub fn remaining(self) -> usize {
        self.iter.count()
    }
}

/// Read one `<x> <y> <vx> <vy> <mass> <visual id>` record
pub fn read_body(tokens: &mut Tokens<'_>) -> Result<Body> {
    let x = NVec2::new(tokens.next_f64("position.x")?, tokens.next_f64("position.y")?);
    let v = NVec2::new(tokens.next_f64("velocity.x")?, tokens.next_f64("velocity.y")?);
    let m = tokens.next_f64("mass")?;
    if !(m > 0.0 && m.is_finite()) {
        return Err(NbodyError::MalformedInput(format!(
            "token {}: mass must be positive and finite, got {m}",
            tokens.consumed()
        )));
    }
    let visual_id = tokens.next_token("visual id")?;

    Ok(Body::new(x, v, m, visual_id))
}

/// Read the header and exactly `count` bodies
///
/// Returns the radius and the bodies in file order. Tokens past the last
/// body are left in the cursor.
pub fn read_universe(tokens: &mut Tokens<'_>) -> Result<(f64, Vec<Body>)> {
    let count = tokens.next_count("body count")?;
    let radius = tokens.next_f64("radius")?;
    if !(radius >= 0.0 && radius.is_finite()) {
        return Err(NbodyError::MalformedInput(format!(
            "radius must be non-negative and finite, got {radius}"
        )));
    }

    // The count comes from the input; don't trust it for a huge allocation
    let mut bodies = Vec::with_capacity(count.min(1024));
    for _ in 0..count {
        bodies.push(read_body(tokens)?);
    }

    Ok((radius, bodies))
}

/// A visual id must be a single non-empty token to survive a round trip
pub fn check_visual_id(id: &str) -> Result<()> {
    if id.is_empty() || id.chars().any(char::is_whitespace) {
        return Err(NbodyError::MalformedInput(format!(
            "visual id {id:?} must be one non-empty token without whitespace"
        )));
    }
    Ok(())
}

/// Write one body record
///
/// Fails with `fmt::Error` instead of emitting a visual id the reader would
/// split or skip; see [`check_visual_id`].
pub fn write_body<W: fmt::Write>(out: &mut W, body: &Body) -> fmt::Result {
    check_visual_id(&body.visual_id).map_err(|_| fmt::Error)?;
    write!(
        out,
        "{} {} {} {} {} {}",
        Scientific(body.x.x),
        Scientific(body.x.y),
        Scientific(body.v.x),
        Scientific(body.v.y),
        Scientific(body.m),
        body.visual_id
    )
}

pub fn write_universe<W: fmt::Write>(out: &mut W, radius: f64, bodies: &[Body]) -> fmt::Result {
    writeln!(out, "{}", bodies.len())?;
    writeln!(out, "{}", Scientific(radius))?;
    for body in bodies {
        write_body(out, body)?;
        writeln!(out)?;
    }
    Ok(())
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_body(f, self)
    }
}

impl FromStr for Body {
    type Err = NbodyError;

    fn from_str(s: &str) -> Result<Self> {
        let mut tokens = Tokens::new(s);
        let body = read_body(&mut tokens)?;

        // A single record has no stream after it
        let consumed = tokens.consumed();
        let extra = tokens.remaining();
        if extra > 0 {
            return Err(NbodyError::MalformedInput(format!(
                "{extra} unexpected tokens after body record ({consumed} tokens)"
            )));
        }
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scientific_matches_stream_layout() {
        assert_eq!(Scientific(10.0).to_string(), "1.000000e+01");
        assert_eq!(Scientific(0.0).to_string(), "0.000000e+00");
        assert_eq!(Scientific(-1.5e-7).to_string(), "-1.500000e-07");
        assert_eq!(Scientific(5.974e24).to_string(), "5.974000e+24");
        assert_eq!(Scientific(1.0e100).to_string(), "1.000000e+100");
    }

    #[test]
    fn scientific_passes_through_non_finite() {
        assert_eq!(Scientific(f64::INFINITY).to_string(), "inf");
        assert!(Scientific(f64::NAN).to_string().eq_ignore_ascii_case("nan"));
    }

    #[test]
    fn body_line_parses_any_float_spelling() {
        let body: Body = "10 2.0e1 +2 1.0E+00 1e20 earth.gif".parse().unwrap();
        assert_eq!(body.x, NVec2::new(10.0, 20.0));
        assert_eq!(body.v, NVec2::new(2.0, 1.0));
        assert_eq!(body.m, 1e20);
        assert_eq!(body.visual_id, "earth.gif");
    }

    #[test]
    fn body_line_round_trips() {
        let body = Body::new(NVec2::new(1.4960e11, -3.0), NVec2::new(0.0, 2.98e4), 5.974e24, "earth.gif");
        let back: Body = body.to_string().parse().unwrap();
        assert_eq!(back, body);
        assert_eq!(back.visual_id, "earth.gif");
    }

    #[test]
    fn non_positive_mass_is_rejected() {
        for line in ["0 0 0 0 0 a.gif", "0 0 0 0 -5 a.gif", "0 0 0 0 nan a.gif"] {
            let err = line.parse::<Body>().unwrap_err();
            assert!(matches!(err, NbodyError::MalformedInput(_)), "{line}: {err}");
        }
    }

    #[test]
    fn missing_visual_id_is_rejected() {
        let err = "0 0 0 0 1".parse::<Body>().unwrap_err();
        assert!(err.to_string().contains("visual id"));
    }

    #[test]
    fn body_line_rejects_leftover_tokens() {
        let err = "1 2 3 4 5 a b".parse::<Body>().unwrap_err();
        assert!(matches!(err, NbodyError::MalformedInput(_)), "{err}");
    }

    #[test]
    fn unwritable_visual_ids_fail_to_format() {
        for id in ["", "two words", "tab\there", "line\nbreak"] {
            let body = Body::new(NVec2::zeros(), NVec2::zeros(), 1.0, id);
            let mut out = String::new();
            assert!(write_body(&mut out, &body).is_err(), "{id:?} was written");
            assert!(out.is_empty());
            assert!(check_visual_id(id).is_err());
        }
        assert!(check_visual_id("earth.gif").is_ok());
    }

    #[test]
    fn bad_count_is_rejected() {
        let mut tokens = Tokens::new("-1 100");
        assert!(matches!(read_universe(&mut tokens), Err(NbodyError::MalformedInput(_))));
    }
}
