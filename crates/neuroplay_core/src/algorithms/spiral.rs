use super::{intensity_color, Algorithm, ActivationUpdate, NeuronTarget};
use neuroplay_data::{AlgorithmKind, Color, LiveNeuron};
use std::f32::consts::TAU;

pub const RADIAL_TWIST: f32 = 0.3;
pub const ROTATION_SPEED: f32 = 0.35;
pub const EXPANSION_SPEED: f32 = 0.5;
pub const EXPANSION_FALLOFF: f32 = 0.2;
pub const PEAK: f32 = 0.9;
pub const HARD_THRESHOLD: f32 = 0.4;

/// Spiral arms rotating around the vertical axis while growing outward.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpiralGrowth;

/// Purple to cyan to green and back to purple over `t` in `[0, 1)`.
#[must_use]
pub fn palette(t: f32) -> Color {
    let t = t.rem_euclid(1.0) * 3.0;
    let (from, to) = match t as usize {
        0 => (Color::PURPLE, Color::CYAN),
        1 => (Color::CYAN, Color::GREEN),
        _ => (Color::GREEN, Color::PURPLE),
    };
    from.lerp(&to, t.fract())
}

impl Algorithm for SpiralGrowth {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::SpiralGrowth
    }

    fn targets(&self, elapsed: f32, neurons: &[LiveNeuron]) -> Vec<NeuronTarget> {
        neurons
            .iter()
            .map(|neuron| {
                let p = neuron.position;
                let angle = p.z.atan2(p.x);
                let planar = (p.x * p.x + p.z * p.z).sqrt();

                let phase = angle + planar * RADIAL_TWIST - elapsed * ROTATION_SPEED;
                let arm = (phase.sin() + 1.0) / 2.0;
                let growth =
                    ((elapsed * EXPANSION_SPEED - planar * EXPANSION_FALLOFF).sin() + 1.0) / 2.0;
                let activation = arm * growth * PEAK;

                let hue = (angle + elapsed * ROTATION_SPEED).rem_euclid(TAU) / TAU;
                NeuronTarget {
                    activation: ActivationUpdate::Set(activation),
                    color: intensity_color(palette(hue), activation, HARD_THRESHOLD),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::test_support::scattered;
    use crate::algorithms::ColorUpdate;

    #[test]
    fn test_palette_stops() {
        assert_eq!(palette(0.0), Color::PURPLE);
        let third = palette(1.0 / 3.0 + 1e-4);
        assert!((third.g - Color::CYAN.g).abs() < 0.01);
        assert_eq!(palette(1.0), Color::PURPLE);
    }

    #[test]
    fn test_activation_bounds_and_policy() {
        let neurons = scattered(60, 9);
        for elapsed in [0.0, 1.3, 7.9, 42.0] {
            for target in SpiralGrowth.targets(elapsed, &neurons) {
                let ActivationUpdate::Set(value) = target.activation else {
                    panic!("spiral always sets activation");
                };
                assert!((0.0..=PEAK).contains(&value));
                match target.color {
                    ColorUpdate::Set(_) => assert!(value > HARD_THRESHOLD),
                    ColorUpdate::Blend { .. } => assert!(value <= HARD_THRESHOLD),
                    ColorUpdate::FadeBack(_) => panic!("spiral never fades back"),
                }
            }
        }
    }
}
