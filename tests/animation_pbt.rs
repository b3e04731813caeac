mod common;

use common::scattered_neurons;
use neuroplay_lib::model::algorithms::AlgorithmRunner;
use neuroplay_lib::model::living::{AlgorithmKind, Color};
use proptest::prelude::*;

fn arb_kind() -> impl Strategy<Value = AlgorithmKind> {
    prop::sample::select(AlgorithmKind::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_activation_stays_in_unit_range(
        kind in arb_kind(),
        count in 0usize..60,
        extent in 0.5f32..20.0,
        times in prop::collection::vec(-5.0f32..120.0, 1..80),
        seed in any::<u64>(),
    ) {
        let mut neurons = scattered_neurons(count, extent, seed);
        for neuron in &mut neurons {
            neuron.activation = 1.0;
        }
        let mut runner = AlgorithmRunner::new();
        runner.start(kind, &mut neurons);
        for elapsed in times {
            runner.update_at(elapsed, &mut neurons);
            for neuron in &neurons {
                prop_assert!((0.0..=1.0).contains(&neuron.activation));
                prop_assert!(neuron.color.r.is_finite());
            }
        }
    }

    #[test]
    fn test_stop_restores_original_colors(
        kind in arb_kind(),
        count in 1usize..40,
        frames in 1usize..200,
        seed in any::<u64>(),
    ) {
        let mut neurons = scattered_neurons(count, 8.0, seed);
        let before: Vec<Color> = neurons.iter().map(|n| n.color).collect();

        let mut runner = AlgorithmRunner::new();
        runner.start(kind, &mut neurons);
        for frame in 0..frames {
            runner.update_at(frame as f32 / 30.0, &mut neurons);
        }
        runner.stop(&mut neurons);

        let after: Vec<Color> = neurons.iter().map(|n| n.color).collect();
        prop_assert_eq!(before, after);
    }
}
