//! Properties every algorithm must hold, across input shapes

use super::{run_recorded, sorted_marks};
use crate::events::AnimationStep;
use crate::generator;
use crate::types::{SortAlgorithm, ValueRange};

fn assert_sorted_permutation(algorithm: SortAlgorithm, input: &[u32], output: &[u32]) {
    let mut expected = input.to_vec();
    expected.sort_unstable();
    assert_eq!(
        output, expected,
        "{algorithm} must produce the sorted permutation of its input"
    );
}

#[tokio::test]
async fn test_every_algorithm_sorts_seeded_random_input() {
    let input = generator::generate_seeded(40, ValueRange::default(), 7).unwrap();

    for algorithm in SortAlgorithm::ALL {
        let (output, steps, _) = run_recorded(algorithm, input.clone()).await;
        assert_sorted_permutation(algorithm, &input, &output);

        let marked = sorted_marks(&steps);
        for index in 0..input.len() {
            assert!(
                marked.contains(&index),
                "{algorithm} never marked index {index} sorted"
            );
        }
    }
}

#[tokio::test]
async fn test_every_algorithm_sorts_reversed_input() {
    let input: Vec<u32> = (1..=16).rev().collect();

    for algorithm in SortAlgorithm::ALL {
        let (output, _, _) = run_recorded(algorithm, input.clone()).await;
        assert_sorted_permutation(algorithm, &input, &output);
    }
}

#[tokio::test]
async fn test_every_algorithm_handles_all_equal_input() {
    let input = vec![5u32; 12];

    for algorithm in SortAlgorithm::ALL {
        let (output, steps, _) = run_recorded(algorithm, input.clone()).await;
        assert_eq!(output, input, "{algorithm} must leave equal values intact");

        let marked = sorted_marks(&steps);
        for index in 0..input.len() {
            assert!(
                marked.contains(&index),
                "{algorithm} never marked index {index} sorted"
            );
        }
    }
}

#[tokio::test]
async fn test_every_algorithm_preserves_duplicates() {
    let input = vec![3, 1, 3, 2, 1, 3];

    for algorithm in SortAlgorithm::ALL {
        let (output, _, _) = run_recorded(algorithm, input.clone()).await;
        assert_sorted_permutation(algorithm, &input, &output);
    }
}

#[tokio::test]
async fn test_empty_and_singleton_inputs_emit_nothing() {
    for algorithm in SortAlgorithm::ALL {
        let (output, steps, stats) = run_recorded(algorithm, vec![]).await;
        assert!(output.is_empty());
        assert!(steps.is_empty(), "{algorithm} emitted steps for an empty sequence");
        assert_eq!(stats.steps, 0);

        let (output, steps, _) = run_recorded(algorithm, vec![7]).await;
        assert_eq!(output, vec![7]);
        assert!(steps.is_empty(), "{algorithm} emitted steps for a singleton");
    }
}

#[tokio::test]
async fn test_sorted_input_is_left_untouched() {
    let input: Vec<u32> = (10..30).collect();

    for algorithm in SortAlgorithm::ALL {
        let (output, _, _) = run_recorded(algorithm, input.clone()).await;
        assert_eq!(output, input, "{algorithm} reordered an already sorted input");
    }
}

#[tokio::test]
async fn test_bubble_does_no_swaps_on_sorted_input() {
    let input: Vec<u32> = (1..=10).collect();
    let (_, steps, stats) = run_recorded(SortAlgorithm::Bubble, input).await;

    assert_eq!(stats.swaps, 0);
    assert_eq!(stats.comparisons, 45);
    assert!(steps
        .iter()
        .all(|step| !matches!(step, AnimationStep::Swap { .. })));
}

#[tokio::test]
async fn test_stats_add_up_for_a_known_bubble_run() {
    let (_, steps, stats) = run_recorded(SortAlgorithm::Bubble, vec![5, 3, 8, 1]).await;

    assert_eq!(stats.comparisons, 6);
    assert_eq!(stats.swaps, 4);
    assert_eq!(stats.writes, 0);
    assert_eq!(stats.steps, steps.len() as u64);
    assert_eq!(stats.steps, 14);
}
