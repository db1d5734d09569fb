//! Labels the numbers 100 down to 1 that have a divisor other than 1 and
//! themselves: `FooBar` for multiples of 15, `Bar` for multiples of 5, `Foo`
//! for multiples of 3, the number itself otherwise.

use std::fmt;

use tracing::debug;

/// Size of the generated sequence.
pub const RANGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    FooBar,
    Bar,
    Foo,
    Number(u32),
}

impl Label {
    pub fn of(n: u32) -> Self {
        match (n % 3 == 0, n % 5 == 0) {
            (true, true) => Label::FooBar,
            (false, true) => Label::Bar,
            (true, false) => Label::Foo,
            (false, false) => Label::Number(n),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::FooBar => f.write_str("FooBar"),
            Label::Bar => f.write_str("Bar"),
            Label::Foo => f.write_str("Foo"),
            Label::Number(n) => write!(f, "{n}"),
        }
    }
}

/// `RANGE_SIZE` down to 1.
pub fn sequence() -> Vec<u32> {
    (1..=RANGE_SIZE).rev().collect()
}

/// True when some `j` in `2..=n / 2` divides `n`. That is every composite
/// number; 1, 2, 3 and the primes are never matched.
pub fn has_small_divisor(n: u32) -> bool {
    (2..=n / 2).any(|j| n % j == 0)
}

/// Keeps the values with a small divisor, in their original order.
pub fn retain_with_divisor(values: &[u32]) -> Vec<u32> {
    values.iter().copied().filter(|&n| has_small_divisor(n)).collect()
}

/// The full output line, labels separated by single spaces, without a trailing newline.
pub fn generate_and_classify() -> String {
    let retained = retain_with_divisor(&sequence());
    debug!(retained = retained.len(), "filtered sequence");

    retained.iter().map(|&n| Label::of(n).to_string()).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_prime(n: u32) -> bool {
        n >= 2 && (2..n).take_while(|j| j * j <= n).all(|j| n % j != 0)
    }

    #[test]
    fn sequence_counts_down_from_range_size() {
        let seq = sequence();
        assert_eq!(seq.len(), 100);
        assert_eq!(seq[0], 100);
        assert_eq!(seq[99], 1);
        assert!(seq.windows(2).all(|w| w[0] == w[1] + 1));
    }

    #[test]
    fn small_numbers_have_no_divisor_range() {
        assert!(!has_small_divisor(1));
        assert!(!has_small_divisor(2));
        assert!(!has_small_divisor(3));
        assert!(has_small_divisor(4));
    }

    #[test]
    fn primes_are_dropped() {
        assert!(!has_small_divisor(7));
        assert!(!has_small_divisor(97));
    }

    #[test]
    fn retained_values_are_the_composites_in_descending_order() {
        let retained = retain_with_divisor(&sequence());
        let composites: Vec<u32> = (4..=100).rev().filter(|&n| !is_prime(n)).collect();

        assert_eq!(retained.len(), 74);
        assert_eq!(retained, composites);
        assert_eq!(retained.first(), Some(&100));
        assert_eq!(retained.last(), Some(&4));
    }

    #[test]
    fn labels_follow_divisibility() {
        assert_eq!(Label::of(9), Label::Foo);
        assert_eq!(Label::of(15), Label::FooBar);
        assert_eq!(Label::of(10), Label::Bar);
        assert_eq!(Label::of(4), Label::Number(4));

        assert_eq!(Label::of(9).to_string(), "Foo");
        assert_eq!(Label::of(15).to_string(), "FooBar");
        assert_eq!(Label::of(25).to_string(), "Bar");
        assert_eq!(Label::of(49).to_string(), "49");
    }

    #[test]
    fn output_line_starts_and_ends_as_expected() {
        let line = generate_and_classify();

        assert!(line.starts_with("Bar Foo 98 Foo Bar 94 Foo 92 91 FooBar "));
        assert!(line.ends_with(" FooBar 14 Foo Bar Foo 8 Foo 4"));
        assert!(!line.ends_with(' '));
        assert_eq!(line.split(' ').count(), 74);
        assert!(!line.split(' ').any(|token| token == "7" || token == "2"));
    }
}
