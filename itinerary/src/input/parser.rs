//! Itinerary text parser.
//!
//! The format is line oriented:
//!
//! ```text
//! BASED: SVQ
//!
//! RESERVATION
//! SEGMENT: Flight SVQ 2023-03-02 06:40 -> BCN 09:10
//!
//! RESERVATION
//! SEGMENT: Hotel BCN 2023-01-05 -> 2023-01-10
//! ```
//!
//! Blank lines and `RESERVATION` headers carry no data. Anything that is not
//! one of the recognised line kinds is rejected rather than skipped.

use tracing::{debug, trace};

use super::Itinerary;
use super::error::ParseError;
use crate::domain::{Location, Mode, Segment, Stay, Transit, parse_clock, parse_date};

const BASE_PREFIX: &str = "BASED:";
const SEGMENT_PREFIX: &str = "SEGMENT:";
const RESERVATION_HEADER: &str = "RESERVATION";
const ARROW: &str = "->";

/// Parses itinerary text into segments (in input order) and the base.
///
/// # Examples
///
/// ```
/// use itinerary::input::parse_itinerary;
///
/// let text = "BASED: SVQ\n\nRESERVATION\nSEGMENT: Train SVQ 2023-02-15 09:30 -> MAD 11:00\n";
/// let parsed = parse_itinerary(text).unwrap();
/// assert_eq!(parsed.base.as_str(), "SVQ");
/// assert_eq!(parsed.segments.len(), 1);
///
/// assert!(parse_itinerary("RESERVATION\n").is_err());
/// ```
pub fn parse_itinerary(text: &str) -> Result<Itinerary, ParseError> {
    let mut base: Option<Location> = None;
    let mut segments = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();

        if trimmed.is_empty() || trimmed == RESERVATION_HEADER {
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix(BASE_PREFIX) {
            if base.is_some() {
                return Err(ParseError::DuplicateBase { line });
            }
            base = Some(location(rest.trim(), line)?);
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix(SEGMENT_PREFIX) {
            let segment = parse_segment(rest, line)?;
            trace!(line, mode = %segment.mode(), start = %segment.start(), "parsed segment");
            segments.push(segment);
            continue;
        }

        return Err(ParseError::UnexpectedLine {
            line,
            content: trimmed.to_string(),
        });
    }

    let base = base.ok_or(ParseError::MissingBase)?;
    debug!(base = %base, segments = segments.len(), "parsed itinerary");
    Ok(Itinerary { segments, base })
}

/// Parses the part of a `SEGMENT:` line after the prefix.
pub fn parse_segment(s: &str, line: usize) -> Result<Segment, ParseError> {
    let tokens: Vec<&str> = s.split_whitespace().collect();

    let Some((&mode, rest)) = tokens.split_first() else {
        return Err(ParseError::MalformedSegment {
            line,
            reason: "missing segment mode",
        });
    };

    match parse_mode(mode, line)? {
        Mode::Hotel => parse_stay(rest, line).map(Segment::Hotel),
        Mode::Flight => parse_transit(rest, line).map(Segment::Flight),
        Mode::Train => parse_transit(rest, line).map(Segment::Train),
    }
}

fn parse_mode(s: &str, line: usize) -> Result<Mode, ParseError> {
    match s {
        "Hotel" => Ok(Mode::Hotel),
        "Flight" => Ok(Mode::Flight),
        "Train" => Ok(Mode::Train),
        other => Err(ParseError::UnknownMode {
            line,
            mode: other.to_string(),
        }),
    }
}

/// `<where> <date> -> <date>`
fn parse_stay(tokens: &[&str], line: usize) -> Result<Stay, ParseError> {
    let &[at, check_in, arrow, check_out] = tokens else {
        return Err(ParseError::MalformedSegment {
            line,
            reason: "expected: Hotel <location> <YYYY-MM-DD> -> <YYYY-MM-DD>",
        });
    };
    expect_arrow(arrow, line)?;

    Ok(Stay::new(
        location(at, line)?,
        date(check_in, line)?,
        date(check_out, line)?,
    ))
}

/// `<from> <date> <time> -> <to> <time>`
fn parse_transit(tokens: &[&str], line: usize) -> Result<Transit, ParseError> {
    let &[from, on, departs, arrow, to, arrives] = tokens else {
        return Err(ParseError::MalformedSegment {
            line,
            reason: "expected: <mode> <from> <YYYY-MM-DD> <HH:MM> -> <to> <HH:MM>",
        });
    };
    expect_arrow(arrow, line)?;

    Ok(Transit::new(
        location(from, line)?,
        location(to, line)?,
        date(on, line)?,
        clock(departs, line)?,
        clock(arrives, line)?,
    ))
}

fn expect_arrow(token: &str, line: usize) -> Result<(), ParseError> {
    if token == ARROW {
        Ok(())
    } else {
        Err(ParseError::MalformedSegment {
            line,
            reason: "expected \"->\" separator",
        })
    }
}

fn location(s: &str, line: usize) -> Result<Location, ParseError> {
    Location::parse(s).map_err(|source| ParseError::InvalidLocation { line, source })
}

fn date(s: &str, line: usize) -> Result<chrono::NaiveDate, ParseError> {
    parse_date(s).map_err(|source| ParseError::InvalidDate { line, source })
}

fn clock(s: &str, line: usize) -> Result<chrono::NaiveTime, ParseError> {
    parse_clock(s).map_err(|source| ParseError::InvalidTime { line, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    const SAMPLE: &str = "\
BASED: SVQ

RESERVATION
SEGMENT: Flight SVQ 2023-03-02 06:40 -> BCN 09:10

RESERVATION
SEGMENT: Hotel BCN 2023-01-05 -> 2023-01-10

RESERVATION
SEGMENT: Flight SVQ 2023-01-05 20:40 -> BCN 22:10
SEGMENT: Flight BCN 2023-01-10 10:30 -> SVQ 11:50

RESERVATION
SEGMENT: Train SVQ 2023-02-15 09:30 -> MAD 11:00
SEGMENT: Train MAD 2023-02-17 17:00 -> SVQ 19:30
";

    fn loc(s: &str) -> Location {
        Location::parse(s).unwrap()
    }

    fn err(text: &str) -> ParseError {
        parse_itinerary(text).unwrap_err()
    }

    #[test]
    fn parse_sample() {
        let itinerary = parse_itinerary(SAMPLE).unwrap();

        assert_eq!(itinerary.base, loc("SVQ"));
        assert_eq!(itinerary.segments.len(), 6);

        let modes: Vec<Mode> = itinerary.segments.iter().map(Segment::mode).collect();
        assert_eq!(
            modes,
            vec![
                Mode::Flight,
                Mode::Hotel,
                Mode::Flight,
                Mode::Flight,
                Mode::Train,
                Mode::Train
            ]
        );
    }

    #[test]
    fn parse_hotel_fields() {
        let segment = parse_segment(" Hotel BCN 2023-01-05 -> 2023-01-10", 1).unwrap();
        let stay = segment.as_stay().unwrap();
        assert_eq!(stay.location(), &loc("BCN"));
        assert_eq!(stay.check_in(), NaiveDate::from_ymd_opt(2023, 1, 5).unwrap());
        assert_eq!(stay.check_out(), NaiveDate::from_ymd_opt(2023, 1, 10).unwrap());
    }

    #[test]
    fn parse_transit_fields() {
        let segment = parse_segment("Train SVQ 2023-02-15 09:30 -> MAD 11:00", 1).unwrap();
        assert_eq!(segment.mode(), Mode::Train);

        let transit = segment.as_transit().unwrap();
        assert_eq!(transit.from(), &loc("SVQ"));
        assert_eq!(transit.to(), &loc("MAD"));
        assert_eq!(transit.date(), NaiveDate::from_ymd_opt(2023, 2, 15).unwrap());
        assert_eq!(transit.departs(), NaiveTime::from_hms_opt(9, 30, 0).unwrap());
        assert_eq!(transit.arrives(), NaiveTime::from_hms_opt(11, 0, 0).unwrap());
    }

    #[test]
    fn base_may_follow_segments() {
        let text = "SEGMENT: Hotel BCN 2023-01-05 -> 2023-01-10\nBASED: SVQ\n";
        let itinerary = parse_itinerary(text).unwrap();
        assert_eq!(itinerary.base, loc("SVQ"));
        assert_eq!(itinerary.segments.len(), 1);
    }

    #[test]
    fn base_only_has_no_segments() {
        let itinerary = parse_itinerary("BASED: SVQ\n").unwrap();
        assert!(itinerary.segments.is_empty());
    }

    #[test]
    fn surrounding_whitespace_ignored() {
        let text = "   BASED:   SVQ  \r\n\tRESERVATION\r\n  SEGMENT:  Train  SVQ 2023-02-15 09:30 ->  MAD 11:00 \r\n";
        let itinerary = parse_itinerary(text).unwrap();
        assert_eq!(itinerary.base, loc("SVQ"));
        assert_eq!(itinerary.segments.len(), 1);
    }

    #[test]
    fn missing_base() {
        assert_eq!(err(""), ParseError::MissingBase);
        assert_eq!(
            err("SEGMENT: Hotel BCN 2023-01-05 -> 2023-01-10\n"),
            ParseError::MissingBase
        );
    }

    #[test]
    fn duplicate_base() {
        assert_eq!(
            err("BASED: SVQ\n\nBASED: MAD\n"),
            ParseError::DuplicateBase { line: 3 }
        );
    }

    #[test]
    fn empty_base() {
        assert!(matches!(
            err("BASED:\n"),
            ParseError::InvalidLocation { line: 1, .. }
        ));
        assert!(matches!(
            err("BASED: New York\n"),
            ParseError::InvalidLocation { line: 1, .. }
        ));
    }

    #[test]
    fn unexpected_line() {
        assert_eq!(
            err("BASED: SVQ\nhello\n"),
            ParseError::UnexpectedLine {
                line: 2,
                content: "hello".into()
            }
        );
    }

    #[test]
    fn unknown_mode() {
        assert_eq!(
            err("BASED: SVQ\nSEGMENT: Bus SVQ 2023-02-15 09:30 -> MAD 11:00\n"),
            ParseError::UnknownMode {
                line: 2,
                mode: "Bus".into()
            }
        );
        // Mode keywords are case sensitive
        assert!(matches!(
            err("BASED: SVQ\nSEGMENT: hotel BCN 2023-01-05 -> 2023-01-10\n"),
            ParseError::UnknownMode { line: 2, .. }
        ));
    }

    #[test]
    fn malformed_segments() {
        let cases = [
            "SEGMENT:",
            "SEGMENT: Hotel BCN 2023-01-05",
            "SEGMENT: Hotel BCN 2023-01-05 2023-01-10 extra",
            "SEGMENT: Hotel BCN 2023-01-05 => 2023-01-10",
            "SEGMENT: Flight SVQ 2023-03-02 06:40 BCN 09:10",
            "SEGMENT: Train SVQ 2023-03-02 06:40 -> BCN 09:10 late",
            "SEGMENT: Train SVQ 2023-03-02 06:40 to BCN 09:10",
        ];
        for case in cases {
            let text = format!("BASED: SVQ\n{case}\n");
            assert!(
                matches!(err(&text), ParseError::MalformedSegment { line: 2, .. }),
                "expected malformed segment for {case:?}"
            );
        }
    }

    #[test]
    fn invalid_date_and_time() {
        assert!(matches!(
            err("BASED: SVQ\nSEGMENT: Hotel BCN 2023-02-30 -> 2023-03-01\n"),
            ParseError::InvalidDate { line: 2, .. }
        ));
        assert!(matches!(
            err("BASED: SVQ\nSEGMENT: Flight SVQ 2023-03-02 6:40 -> BCN 09:10\n"),
            ParseError::InvalidTime { line: 2, .. }
        ));
        assert!(matches!(
            err("BASED: SVQ\nSEGMENT: Flight SVQ 2023-03-02 06:40 -> BCN 24:10\n"),
            ParseError::InvalidTime { line: 2, .. }
        ));
    }

    #[test]
    fn first_error_wins() {
        let text = "BASED: SVQ\nSEGMENT: Bus\nnonsense\n";
        assert!(matches!(err(text), ParseError::UnknownMode { line: 2, .. }));
    }
}
