//! Combination counting for phrase descriptions.
//!
//! A [`PhraseCombinations`] is the closed-form answer to "how many distinct
//! phrases could this description produce?", carried as a
//! shortest/longest/average triple. Every weighted random branch in the
//! generator has an exactly corresponding term here, so the two stay in
//! lock-step.

use std::fmt;
use std::ops::{Add, Mul};

/// Combination counts for a clause or a whole phrase description.
///
/// `shortest` counts the combinations along the stingiest random path,
/// `longest` along the most generous, and `average` is the expected count
/// weighted by branch probabilities. `average` is `None` when some
/// contributing count is unknown.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhraseCombinations {
    /// Combinations along the shortest generation path.
    pub shortest: f64,
    /// Combinations along the longest generation path.
    pub longest: f64,
    /// Probability-weighted average combinations, when known.
    pub average: Option<f64>,
}

impl PhraseCombinations {
    /// The multiplicative identity: exactly one way to produce nothing.
    pub const ONE: Self = Self {
        shortest: 1.0,
        longest: 1.0,
        average: Some(1.0),
    };

    /// A triple where every path yields exactly `count` combinations.
    #[must_use]
    pub fn fixed(count: usize) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let count = count as f64;
        Self {
            shortest: count,
            longest: count,
            average: Some(count),
        }
    }

    /// The factor contributed by a single optional element.
    ///
    /// The element offers `count` combinations and is present with
    /// probability `present / (present + absent)`. An element that can never
    /// appear (zero presence weight, or nothing to choose from) contributes
    /// the identity; an element that always appears contributes
    /// [`PhraseCombinations::fixed`].
    #[must_use]
    pub fn optional(count: usize, present: u32, absent: u32) -> Self {
        if present == 0 || count == 0 {
            return Self::ONE;
        }
        if absent == 0 {
            return Self::fixed(count);
        }
        #[allow(clippy::cast_precision_loss)]
        let count = count as f64;
        // Summed in f64 so maximal weights cannot overflow.
        let p = f64::from(present) / (f64::from(present) + f64::from(absent));
        Self {
            shortest: 1.0,
            longest: count,
            average: Some(p * count + (1.0 - p)),
        }
    }

    /// Combines mutually-exclusive in-slot options, each with a selection
    /// weight.
    ///
    /// Exactly one reachable option is realized per generation, so the
    /// longest counts add while the shortest is the cheapest reachable
    /// option. Returns the identity when no option is reachable.
    #[must_use]
    pub fn choice(options: &[(Self, u32)]) -> Self {
        // Summed in f64 so maximal weights cannot overflow.
        let total: f64 = options.iter().map(|&(_, w)| f64::from(w)).sum();
        if total == 0.0 {
            return Self::ONE;
        }
        let mut shortest = f64::INFINITY;
        let mut longest = 0.0;
        let mut average = Some(0.0);
        for (combos, weight) in options {
            if *weight == 0 {
                continue;
            }
            shortest = shortest.min(combos.shortest);
            longest += combos.longest;
            let p = f64::from(*weight) / total;
            average = match (average, combos.average) {
                (Some(acc), Some(avg)) => Some(acc + p * avg),
                _ => None,
            };
        }
        Self {
            shortest,
            longest,
            average,
        }
    }

    /// Combines alternative internal paths of one clause.
    ///
    /// Unlike [`PhraseCombinations::choice`], paths here are whole
    /// realizations of the clause: the longest is the most generous single
    /// path, and the shortest ignores trivial (`<= 1.0001`) paths so a
    /// degenerate alternative doesn't report the clause as contributing
    /// nothing. When every weight is zero the `fallback` path's triple is
    /// returned verbatim, which is how each call site's documented
    /// zero-weight fallback enters the math.
    #[must_use]
    pub fn alternatives(options: &[(Self, u32)], fallback: usize) -> Self {
        let total: f64 = options.iter().map(|&(_, w)| f64::from(w)).sum();
        if total == 0.0 {
            return options[fallback].0;
        }
        let mut shortest = f64::INFINITY;
        let mut longest = 0.0f64;
        let mut average = Some(0.0);
        for (combos, weight) in options {
            if *weight == 0 {
                continue;
            }
            if combos.shortest > 1.0001 {
                shortest = shortest.min(combos.shortest);
            }
            longest = longest.max(combos.longest);
            let p = f64::from(*weight) / total;
            average = match (average, combos.average) {
                (Some(acc), Some(avg)) => Some(acc + p * avg),
                _ => None,
            };
        }
        if shortest.is_infinite() {
            shortest = 1.0;
        }
        Self {
            shortest,
            longest,
            average,
        }
    }

    /// Combines the counts of several descriptions when one is drawn
    /// uniformly at random per generation.
    ///
    /// The generation paths are disjoint, so longests add; the average is
    /// blended geometrically in bit-space (the mean of the entropies, not of
    /// the raw counts).
    #[must_use]
    pub fn random_selection(all: &[Self]) -> Self {
        if all.is_empty() {
            return Self::ONE;
        }
        let mut shortest = f64::INFINITY;
        let mut longest = 0.0;
        let mut bits = 0.0;
        let mut known = 0usize;
        for combos in all {
            shortest = shortest.min(combos.shortest);
            longest += combos.longest;
            if let Some(avg) = combos.average {
                if avg > 0.0 {
                    bits += avg.log2();
                    known += 1;
                }
            }
        }
        #[allow(clippy::cast_precision_loss)]
        let average = if known == 0 {
            None
        } else {
            Some((bits / known as f64).exp2())
        };
        Self {
            shortest,
            longest,
            average,
        }
    }

    /// Entropy of the shortest-path count, in bits.
    #[must_use]
    pub fn shortest_bits(&self) -> f64 {
        entropy_bits(self.shortest)
    }

    /// Entropy of the longest-path count, in bits.
    #[must_use]
    pub fn longest_bits(&self) -> f64 {
        entropy_bits(self.longest)
    }

    /// Entropy of the average count, in bits; `-1.0` when unknown.
    #[must_use]
    pub fn average_bits(&self) -> f64 {
        self.average.map_or(-1.0, entropy_bits)
    }
}

/// `log2` with a `-1.0` sentinel for non-positive counts ("unknown").
#[must_use]
pub fn entropy_bits(count: f64) -> f64 {
    if count <= 0.0 { -1.0 } else { count.log2() }
}

/// Multiplies two count factors, treating non-positive values as absent.
///
/// A factor of zero means "this element contributed nothing", so it must
/// not erase the other factor the way ordinary multiplication would.
fn combine(a: f64, b: f64) -> f64 {
    if a <= 0.0 && b <= 0.0 {
        0.0
    } else if a <= 0.0 {
        b
    } else if b <= 0.0 {
        a
    } else {
        a * b
    }
}

impl Mul for PhraseCombinations {
    type Output = Self;

    /// Sequential composition: combinations of independent elements multiply.
    fn mul(self, rhs: Self) -> Self {
        Self {
            shortest: combine(self.shortest, rhs.shortest),
            longest: combine(self.longest, rhs.longest),
            average: match (self.average, rhs.average) {
                (Some(a), Some(b)) => Some(combine(a, b)),
                _ => None,
            },
        }
    }
}

impl Add for PhraseCombinations {
    type Output = Self;

    /// Union composition: counts of disjoint alternative paths add.
    fn add(self, rhs: Self) -> Self {
        Self {
            shortest: self.shortest + rhs.shortest,
            longest: self.longest + rhs.longest,
            average: match (self.average, rhs.average) {
                (Some(a), Some(b)) => Some(a + b),
                _ => None,
            },
        }
    }
}

impl fmt::Display for PhraseCombinations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}..{:.0}", self.shortest, self.longest)?;
        match self.average {
            Some(avg) => write!(f, " (avg {avg:.0}, {:.1} bits)", self.average_bits()),
            None => write!(f, " (avg unknown)"),
        }
    }
}
