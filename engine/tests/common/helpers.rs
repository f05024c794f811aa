//! Test helpers for driving engine runs

use std::time::Duration;

use engine::{AnimationStep, EngineConfig, RunEvent, SortEngine, SortRun};

/// Helper functions shared by the integration suites
pub struct TestHelpers;

impl TestHelpers {
    /// Engine with a zero pacing interval so runs finish as fast as the
    /// scheduler allows.
    pub fn fast_engine() -> SortEngine {
        SortEngine::with_config(EngineConfig {
            default_delay: Duration::ZERO,
            ..Default::default()
        })
    }

    /// Engine paced slowly enough that a started run is still in flight
    /// while the test pokes at the session.
    pub fn slow_engine() -> SortEngine {
        SortEngine::with_config(EngineConfig {
            default_delay: Duration::from_secs(5),
            ..Default::default()
        })
    }

    /// Engine paced at a rate where events trickle but a run still takes a
    /// while to finish.
    pub fn paced_engine(delay: Duration) -> SortEngine {
        SortEngine::with_config(EngineConfig {
            default_delay: delay,
            ..Default::default()
        })
    }

    /// Drain a run to its terminal event, returning the collected steps and
    /// the terminal. Panics if the stream ends without a terminal or emits
    /// anything after it.
    pub async fn drain(run: &mut SortRun) -> (Vec<AnimationStep>, RunEvent) {
        let mut steps = Vec::new();
        while let Some(event) = run.next_event().await {
            match event {
                RunEvent::Step(step) => steps.push(step),
                terminal => {
                    assert!(
                        run.next_event().await.is_none(),
                        "nothing may follow the terminal event"
                    );
                    return (steps, terminal);
                }
            }
        }
        panic!("event stream ended without a terminal event");
    }

    /// Multiset equality through sorting: `actual` must be a permutation of
    /// `expected`.
    pub fn assert_permutation(actual: &[u32], expected: &[u32]) {
        let mut actual = actual.to_vec();
        let mut expected = expected.to_vec();
        actual.sort_unstable();
        expected.sort_unstable();
        assert_eq!(actual, expected);
    }
}
