use std::{fmt, str::FromStr};

use super::WireValue;
use crate::error::{DecodeError, EncodeError, InvalidRange};

/// One inclusive range of a [`NumberList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberRange {
    pub lower: i64,
    pub upper: i64,
}

impl NumberRange {
    pub fn contains(&self, v: i64) -> bool {
        self.lower <= v && v <= self.upper
    }
}

impl fmt::Display for NumberRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lower == self.upper {
            write!(f, "{}", self.lower)
        } else {
            write!(f, "{}-{}", self.lower, self.upper)
        }
    }
}

/// A list of numbers and inclusive ranges, e.g. `100,105-110,200`.
///
/// A decoded list keeps its ranges in input order, so an unmodified value
/// encodes back to exactly the text it was decoded from. Every mutation sorts
/// the ranges and merges overlapping or adjacent ones.
///
/// This is a plain owned value. Share it between tasks behind your own lock;
/// only one writer may mutate it at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NumberList {
    ranges: Vec<NumberRange>,
}

impl NumberList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ranges in their current stored order.
    pub fn ranges(&self) -> &[NumberRange] {
        &self.ranges
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Add a single number.
    pub fn add(&mut self, v: i64) {
        self.ranges.push(NumberRange { lower: v, upper: v });
        self.optimize();
    }

    /// Add an inclusive range. Fails without modifying the list if `upper < lower`.
    pub fn add_range(&mut self, lower: i64, upper: i64) -> Result<(), InvalidRange> {
        if upper < lower {
            return Err(InvalidRange { lower, upper });
        }
        self.ranges.push(NumberRange { lower, upper });
        self.optimize();
        Ok(())
    }

    /// Remove a number, splitting any range that contains it.
    pub fn remove(&mut self, v: i64) {
        let mut out = Vec::with_capacity(self.ranges.len() + 1);
        for range in self.ranges.drain(..) {
            if !range.contains(v) {
                out.push(range);
                continue;
            }
            if let Some(upper) = v.checked_sub(1).filter(|u| *u >= range.lower) {
                out.push(NumberRange {
                    lower: range.lower,
                    upper,
                });
            }
            if let Some(lower) = v.checked_add(1).filter(|l| *l <= range.upper) {
                out.push(NumberRange {
                    lower,
                    upper: range.upper,
                });
            }
        }
        self.ranges = out;
        self.optimize();
    }

    pub fn contains(&self, v: i64) -> bool {
        self.ranges.iter().any(|r| r.contains(v))
    }

    /// Sort ranges by lower bound and merge overlapping or adjacent ones.
    pub fn optimize(&mut self) {
        self.ranges.sort_by_key(|r| r.lower);

        let mut merged: Vec<NumberRange> = Vec::with_capacity(self.ranges.len());
        for range in self.ranges.drain(..) {
            match merged.last_mut() {
                Some(last) if range.lower <= last.upper.saturating_add(1) => {
                    last.upper = last.upper.max(range.upper);
                }
                _ => merged.push(range),
            }
        }
        self.ranges = merged;
    }
}

impl FromStr for NumberList {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ranges = s
            .split(',')
            .map(parse_item)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(NumberList { ranges })
    }
}

fn parse_item(item: &str) -> Result<NumberRange, DecodeError> {
    let invalid = |reason| DecodeError::Range {
        value: item.to_string(),
        reason,
    };
    let bound = |s: &str| s.parse::<i64>().map_err(|_| invalid("bound is not an integer"));

    if !item.contains('-') {
        let v = bound(item)?;
        return Ok(NumberRange { lower: v, upper: v });
    }

    let mut parts = item.split('-');
    let (Some(lower), Some(upper), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid("expected exactly one '-'"));
    };
    let (lower, upper) = (bound(lower)?, bound(upper)?);
    if upper <= lower {
        return Err(invalid("upper bound must be greater than lower bound"));
    }
    Ok(NumberRange { lower, upper })
}

impl WireValue for NumberList {
    fn from_wire(s: &str) -> Result<Self, DecodeError> {
        s.parse()
    }

    fn to_wire(&self) -> Result<String, EncodeError> {
        Ok(self.to_string())
    }
}

impl fmt::Display for NumberList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, range) in self.ranges.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            range.fmt(f)?;
        }
        Ok(())
    }
}

impl FromIterator<i64> for NumberList {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut list = NumberList {
            ranges: iter
                .into_iter()
                .map(|v| NumberRange { lower: v, upper: v })
                .collect(),
        };
        list.optimize();
        list
    }
}

impl<const N: usize> From<[i64; N]> for NumberList {
    fn from(value: [i64; N]) -> Self {
        value.into_iter().collect()
    }
}
