//! Core identifier and configuration types for the sorting engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// The sorting algorithms the engine can animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortAlgorithm {
    Bubble,
    Insertion,
    Selection,
    Quick,
    Merge,
    Heap,
    Radix,
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortAlgorithm::Bubble => write!(f, "bubble"),
            SortAlgorithm::Insertion => write!(f, "insertion"),
            SortAlgorithm::Selection => write!(f, "selection"),
            SortAlgorithm::Quick => write!(f, "quick"),
            SortAlgorithm::Merge => write!(f, "merge"),
            SortAlgorithm::Heap => write!(f, "heap"),
            SortAlgorithm::Radix => write!(f, "radix"),
        }
    }
}

impl SortAlgorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [SortAlgorithm; 7] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Insertion,
        SortAlgorithm::Selection,
        SortAlgorithm::Quick,
        SortAlgorithm::Merge,
        SortAlgorithm::Heap,
        SortAlgorithm::Radix,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bubble" => Some(SortAlgorithm::Bubble),
            "insertion" => Some(SortAlgorithm::Insertion),
            "selection" => Some(SortAlgorithm::Selection),
            "quick" => Some(SortAlgorithm::Quick),
            "merge" => Some(SortAlgorithm::Merge),
            "heap" => Some(SortAlgorithm::Heap),
            "radix" => Some(SortAlgorithm::Radix),
            _ => None,
        }
    }

    /// Human-readable name for menus and summaries.
    pub fn label(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "Bubble Sort",
            SortAlgorithm::Insertion => "Insertion Sort",
            SortAlgorithm::Selection => "Selection Sort",
            SortAlgorithm::Quick => "Quick Sort",
            SortAlgorithm::Merge => "Merge Sort",
            SortAlgorithm::Heap => "Heap Sort",
            SortAlgorithm::Radix => "Radix Sort (LSD)",
        }
    }

    /// Static complexity metadata for display purposes.
    pub fn complexity(&self) -> Complexity {
        match self {
            SortAlgorithm::Bubble => Complexity {
                best: "O(n)",
                average: "O(n²)",
                worst: "O(n²)",
                space: "O(1)",
                stable: true,
            },
            SortAlgorithm::Insertion => Complexity {
                best: "O(n)",
                average: "O(n²)",
                worst: "O(n²)",
                space: "O(1)",
                stable: true,
            },
            SortAlgorithm::Selection => Complexity {
                best: "O(n²)",
                average: "O(n²)",
                worst: "O(n²)",
                space: "O(1)",
                stable: false,
            },
            SortAlgorithm::Quick => Complexity {
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n²)",
                space: "O(log n)",
                stable: false,
            },
            SortAlgorithm::Merge => Complexity {
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n log n)",
                space: "O(n)",
                stable: true,
            },
            SortAlgorithm::Heap => Complexity {
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n log n)",
                space: "O(1)",
                stable: false,
            },
            SortAlgorithm::Radix => Complexity {
                best: "O(nk)",
                average: "O(nk)",
                worst: "O(nk)",
                space: "O(n + k)",
                stable: true,
            },
        }
    }
}

/// Complexity table entry for one algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complexity {
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
    pub space: &'static str,
    pub stable: bool,
}

/// Inclusive bounds for generated sequence values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    min: u32,
    max: u32,
}

impl ValueRange {
    /// Build a range from two endpoints in either order.
    pub fn new(a: u32, b: u32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }
}

impl Default for ValueRange {
    /// Default bar heights, 20 through 319.
    fn default() -> Self {
        Self { min: 20, max: 319 }
    }
}

/// How often a run suspends for one pacing interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PacingMode {
    /// Suspend after every comparison and every mutation. Keeps all
    /// algorithms observable at the same rhythm.
    #[default]
    EveryPrimitive,

    /// Suspend after mutations only; comparisons emit without pausing.
    /// Faster for comparison-heavy passes, at the cost of uneven rhythm.
    MutationsOnly,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_parse_round_trip() {
        for algorithm in SortAlgorithm::ALL {
            let token = algorithm.to_string();
            assert_eq!(SortAlgorithm::parse(&token), Some(algorithm));
        }
        assert_eq!(SortAlgorithm::parse("QUICK"), Some(SortAlgorithm::Quick));
        assert_eq!(SortAlgorithm::parse("bogo"), None);
    }

    #[test]
    fn test_value_range_normalizes_endpoints() {
        let range = ValueRange::new(300, 20);
        assert_eq!(range.min(), 20);
        assert_eq!(range.max(), 300);
    }

    #[test]
    fn test_default_range_matches_bar_heights() {
        let range = ValueRange::default();
        assert_eq!(range.min(), 20);
        assert_eq!(range.max(), 319);
    }

    #[test]
    fn test_complexity_table_space_bounds() {
        assert_eq!(SortAlgorithm::Merge.complexity().space, "O(n)");
        assert_eq!(SortAlgorithm::Radix.complexity().space, "O(n + k)");
        assert!(SortAlgorithm::Merge.complexity().stable);
        assert!(!SortAlgorithm::Quick.complexity().stable);
    }
}
