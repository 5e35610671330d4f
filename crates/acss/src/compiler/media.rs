//! Width-range rewriting for overlapping media queries ("last one wins").
//!
//! A set of plain `min-width` breakpoints overlaps: at 2100px wide, both
//! `(min-width: 1000px)` and `(min-width: 2000px)` match, and whichever rule
//! the emitter happened to write last wins. This module rewrites every
//! non-extreme breakpoint into a closed range so exactly one query matches
//! any viewport width, making the visual result independent of declaration
//! order:
//!
//! ```text
//! @media (min-width: 1000px)   ->  @media (min-width: 1000px) and (max-width: 1999.99px)
//! @media (min-width: 2000px)   ->  @media (min-width: 2000px)            (extreme, open)
//! ```
//!
//! Only single-feature width queries in px/em/rem participate; anything else
//! (compound queries, other features, mixed units) passes through unchanged.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1, multispace0},
    combinator::{all_consuming, map, map_res, opt, recognize},
    sequence::{delimited, pair, tuple},
};

/// Direction of a width constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthDirection {
    Min,
    Max,
}

/// Length unit of a width constraint. The rewrite epsilon (0.01) is applied
/// in the query's own unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthUnit {
    Px,
    Em,
    Rem,
}

impl WidthUnit {
    fn as_str(self) -> &'static str {
        match self {
            WidthUnit::Px => "px",
            WidthUnit::Em => "em",
            WidthUnit::Rem => "rem",
        }
    }
}

/// A parsed single-feature width query, e.g. `@media (min-width: 1000px)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthQuery {
    pub direction: WidthDirection,
    pub value: f64,
    pub unit: WidthUnit,
}

fn parse_number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((
            digit1,
            opt(pair(char('.'), digit1)),
        ))),
        |s: &str| s.parse::<f64>(),
    )(input)
}

fn parse_unit(input: &str) -> IResult<&str, WidthUnit> {
    alt((
        map(tag("rem"), |_| WidthUnit::Rem),
        map(tag("em"), |_| WidthUnit::Em),
        map(tag("px"), |_| WidthUnit::Px),
    ))(input)
}

fn parse_direction(input: &str) -> IResult<&str, WidthDirection> {
    alt((
        map(tag("min-width"), |_| WidthDirection::Min),
        map(tag("max-width"), |_| WidthDirection::Max),
    ))(input)
}

fn parse_width_feature(input: &str) -> IResult<&str, WidthQuery> {
    let (input, (direction, _, _, _, value, unit)) = tuple((
        parse_direction,
        multispace0,
        char(':'),
        multispace0,
        parse_number,
        parse_unit,
    ))(input)?;
    Ok((
        input,
        WidthQuery {
            direction,
            value,
            unit,
        },
    ))
}

/// Parses an at-rule string iff it is exactly one parenthesized width
/// feature under `@media`. Everything else returns `None`.
pub fn parse_width_query(at_rule: &str) -> Option<WidthQuery> {
    let mut parser = all_consuming(delimited(
        tuple((multispace0, tag("@media"), multispace0)),
        delimited(
            char('('),
            delimited(multispace0, parse_width_feature, multispace0),
            char(')'),
        ),
        multispace0,
    ));
    parser(at_rule).ok().map(|(_, q)| q)
}

/// Formats a breakpoint bound: integers without a decimal point, fractional
/// bounds with up to two decimals, trailing zeros trimmed.
pub fn format_bound(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        let s = format!("{:.2}", rounded);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

fn render_range(query: &WidthQuery, bound: f64) -> String {
    let unit = query.unit.as_str();
    match query.direction {
        WidthDirection::Min => format!(
            "@media (min-width: {}{}) and (max-width: {}{})",
            format_bound(query.value),
            unit,
            format_bound(bound),
            unit
        ),
        WidthDirection::Max => format!(
            "@media (max-width: {}{}) and (min-width: {}{})",
            format_bound(query.value),
            unit,
            format_bound(bound),
            unit
        ),
    }
}

/// Rewrites a condition set's at-rule keys so that overlapping width queries
/// become mutually exclusive ranges. Returns the keys in their original
/// order; keys that do not participate come back unchanged.
///
/// A direction group participates only when it holds at least two queries of
/// one unit; the extreme entry (largest min / smallest max) stays open-ended.
pub fn enforce_exclusive_ranges(keys: &[String]) -> Vec<String> {
    let parsed: Vec<Option<WidthQuery>> =
        keys.iter().map(|k| parse_width_query(k)).collect();

    let mut out: Vec<String> = keys.to_vec();
    rewrite_group(&mut out, &parsed, WidthDirection::Min);
    rewrite_group(&mut out, &parsed, WidthDirection::Max);
    out
}

fn rewrite_group(out: &mut [String], parsed: &[Option<WidthQuery>], direction: WidthDirection) {
    let mut group: Vec<(usize, WidthQuery)> = parsed
        .iter()
        .enumerate()
        .filter_map(|(i, q)| match q {
            Some(q) if q.direction == direction => Some((i, *q)),
            _ => None,
        })
        .collect();
    if group.len() < 2 {
        return;
    }
    let unit = group[0].1.unit;
    if group.iter().any(|(_, q)| q.unit != unit) {
        // Mixed units cannot be ranged against each other.
        return;
    }

    // Neighbor lookup wants value order; output keeps declaration order.
    group.sort_by(|(_, a), (_, b)| {
        a.value
            .partial_cmp(&b.value)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    if direction == WidthDirection::Max {
        group.reverse();
    }

    // The extreme entry is the last in sorted order; it stays open-ended.
    for pos in 0..group.len() - 1 {
        let (idx, query) = group[pos];
        let neighbor = group[pos + 1].1;
        let bound = match direction {
            WidthDirection::Min => neighbor.value - 0.01,
            WidthDirection::Max => neighbor.value + 0.01,
        };
        out[idx] = render_range(&query, bound);
    }
}

/// Computes the complement query of a uniform width-breakpoint set: the media
/// query matching exactly the widths no declared breakpoint matches. Returns
/// `None` for mixed min/max shapes, mixed units, or sets without width
/// queries.
pub fn complement_query(keys: &[String]) -> Option<String> {
    let queries: Vec<WidthQuery> = keys
        .iter()
        .filter_map(|k| parse_width_query(k))
        .collect();
    if queries.is_empty() {
        return None;
    }
    let unit = queries[0].unit;
    let direction = queries[0].direction;
    if queries
        .iter()
        .any(|q| q.unit != unit || q.direction != direction)
    {
        return None;
    }
    match direction {
        WidthDirection::Min => {
            let lowest = queries
                .iter()
                .map(|q| q.value)
                .fold(f64::INFINITY, f64::min);
            Some(format!(
                "@media (max-width: {}{})",
                format_bound(lowest - 0.01),
                unit.as_str()
            ))
        }
        WidthDirection::Max => {
            let highest = queries
                .iter()
                .map(|q| q.value)
                .fold(f64::NEG_INFINITY, f64::max);
            Some(format!(
                "@media (min-width: {}{})",
                format_bound(highest + 0.01),
                unit.as_str()
            ))
        }
    }
}
