//! Segment builders and proptest strategies shared by planner tests.

use chrono::{NaiveDate, NaiveTime};
use proptest::prelude::*;

use crate::domain::{Location, Segment, Stay, Transit};

/// Small pool so that generated segments often share locations.
pub const POOL: [&str; 4] = ["AAA", "BBB", "CCC", "DDD"];

pub fn loc(s: &str) -> Location {
    Location::parse(s).unwrap()
}

pub fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, d).unwrap()
}

pub fn time(s: &str) -> NaiveTime {
    crate::domain::parse_clock(s).unwrap()
}

pub fn hotel(at: &str, check_in: u32, check_out: u32) -> Segment {
    Segment::Hotel(Stay::new(loc(at), date(check_in), date(check_out)))
}

pub fn flight(from: &str, to: &str, d: u32, departs: &str, arrives: &str) -> Segment {
    Segment::Flight(Transit::new(
        loc(from),
        loc(to),
        date(d),
        time(departs),
        time(arrives),
    ))
}

pub fn train(from: &str, to: &str, d: u32, departs: &str, arrives: &str) -> Segment {
    Segment::Train(Transit::new(
        loc(from),
        loc(to),
        date(d),
        time(departs),
        time(arrives),
    ))
}

fn transit_at(from: Location, to: Location, d: u32, hour: u32, minute: u32, hours: u32) -> Transit {
    Transit::new(
        from,
        to,
        date(d),
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap(),
        NaiveTime::from_hms_opt(hour + hours, minute, 0).unwrap(),
    )
}

/// Strategy for one segment drawn from the location pool in January 2023.
pub fn arb_segment() -> impl Strategy<Value = Segment> {
    let idx = 0..POOL.len();
    prop_oneof![
        (idx.clone(), 1u32..28, 0u32..4)
            .prop_map(|(l, d, nights)| hotel(POOL[l], d, d + nights)),
        (idx.clone(), idx.clone(), 1u32..28, 0u32..22, 0u32..60, 1u32..2).prop_map(
            |(f, t, d, h, m, len)| Segment::Flight(transit_at(
                loc(POOL[f]),
                loc(POOL[t]),
                d,
                h,
                m,
                len
            ))
        ),
        (idx.clone(), idx, 1u32..28, 0u32..22, 0u32..60, 1u32..2).prop_map(
            |(f, t, d, h, m, len)| Segment::Train(transit_at(
                loc(POOL[f]),
                loc(POOL[t]),
                d,
                h,
                m,
                len
            ))
        ),
    ]
}

/// Strategy for an unsorted itinerary and a base drawn from the same pool.
pub fn arb_itinerary() -> impl Strategy<Value = (Vec<Segment>, Location)> {
    (
        proptest::collection::vec(arb_segment(), 0..24),
        (0..POOL.len()).prop_map(|i| loc(POOL[i])),
    )
}

/// Strategy for segments whose only distinguishing field is a per-index
/// destination, with start instants drawn from a tiny set so ties are common.
///
/// The destination of segment `i` is `L{i}`, letting tests recover the
/// original input position after sorting.
pub fn arb_tagged_segments() -> impl Strategy<Value = Vec<Segment>> {
    proptest::collection::vec((any::<bool>(), 1u32..3, 8u32..10), 0..20).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (is_hotel, d, h))| {
                let tag = loc(&format!("L{i}"));
                if is_hotel {
                    Segment::Hotel(Stay::new(tag, date(d), date(d)))
                } else {
                    Segment::Train(transit_at(loc("AAA"), tag, d, h, 0, 1))
                }
            })
            .collect()
    })
}

/// Recovers the input index from a segment built by `arb_tagged_segments`.
pub fn tag_of(segment: &Segment) -> usize {
    let tag = segment
        .stay_location()
        .or_else(|| segment.destination())
        .unwrap();
    tag.as_str()[1..].parse().unwrap()
}
