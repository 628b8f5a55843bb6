//! Property-based tests for the direct DFT pair.
//!
//! Length preservation, round-trip reconstruction and linearity over
//! randomized complex signals.

use fourier_workbench::generators::generate_square_wave;
use fourier_workbench::{forward_transform, inverse_transform, Signal};
use num_complex::Complex64;
use proptest::prelude::*;

fn complex_signal(max_len: usize) -> impl Strategy<Value = Signal> {
    prop::collection::vec((-10.0f64..10.0, -10.0f64..10.0), 1..max_len)
        .prop_map(|pairs| {
            pairs
                .into_iter()
                .map(|(re, im)| Complex64::new(re, im))
                .collect::<Signal>()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Forward and inverse transforms preserve the sample count.
    #[test]
    fn transform_preserves_length(signal in complex_signal(64)) {
        let spectrum = forward_transform(&signal).unwrap();
        prop_assert_eq!(spectrum.len(), signal.len());

        let restored = inverse_transform(&spectrum).unwrap();
        prop_assert_eq!(restored.len(), signal.len());
    }

    /// The forward transform carries the whole 1/N factor, so the unscaled
    /// inverse reconstructs the input at unit scale.
    #[test]
    fn round_trip_reconstructs_input(signal in complex_signal(64)) {
        let restored = inverse_transform(&forward_transform(&signal).unwrap()).unwrap();
        let error = restored.max_abs_difference(&signal).unwrap();

        prop_assert!(error < 1e-9, "round-trip error {} for N={}", error, signal.len());
    }

    /// Transforms are linear: F(a·x) = a·F(x).
    #[test]
    fn forward_is_linear(signal in complex_signal(32), factor in -5.0f64..5.0) {
        let lhs = forward_transform(&signal.scale(factor)).unwrap();
        let rhs = forward_transform(&signal).unwrap().scale(factor);

        prop_assert!(lhs.max_abs_difference(&rhs).unwrap() < 1e-9);
    }

    /// Square waves only ever take the values -1.0 and +1.0.
    #[test]
    fn square_wave_is_bipolar(samples in 0usize..300, period in 1usize..80) {
        let square = generate_square_wave(samples, period).unwrap();

        prop_assert_eq!(square.len(), samples);
        prop_assert!(square.real_parts().iter().all(|&s| s == 1.0 || s == -1.0));
    }
}
