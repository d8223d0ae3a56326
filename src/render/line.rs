//! Line-level render modes for lyrics that only carry line timestamps.

use crate::color::{Palette, Rgb, blend, unit};
use crate::easing::ease_in_out_cubic;

/// Eased blend from inactive to active.
pub fn smooth(palette: &Palette, progress: f64) -> Rgb {
    blend(
        palette.inactive,
        palette.active,
        unit(ease_in_out_cubic(unit(progress))),
    )
}

/// How much of the progress color shows through the transition tint.
///
/// Oscillates in `[0.4, 0.6]`.
pub fn wave_factor(animation_time: f64) -> f64 {
    let wave = (animation_time * 2.0).sin() * 0.1;
    (0.5 + wave).clamp(0.4, 0.6)
}

/// Progress color gently swaying towards the transition tint.
pub fn wave(palette: &Palette, progress: f64, animation_time: f64) -> Rgb {
    let base = blend(palette.inactive, palette.active, unit(progress));
    let factor = wave_factor(animation_time);
    if factor.is_nan() {
        return base;
    }
    blend(palette.transition, base, factor)
}

/// Glow strength for a line, capped at 0.4.
pub fn glow_strength(progress: f64, animation_time: f64) -> f64 {
    let pulse = ((animation_time * 2.0).sin() + 1.0) / 2.0;
    unit((0.1 + unit(progress) * 0.2 + pulse * 0.1).clamp(0.0, 0.4))
}

/// Progress color with a pulsing white glow.
pub fn glow(palette: &Palette, progress: f64, animation_time: f64) -> Rgb {
    let base = blend(palette.inactive, palette.active, unit(progress));
    blend(base, palette.white, glow_strength(progress, animation_time))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smooth_uses_eased_progress() {
        let p = Palette::default();
        assert_eq!(smooth(&p, 0.0), p.inactive);
        assert_eq!(smooth(&p, 1.0), p.active);
        assert_eq!(smooth(&p, 0.5), blend(p.inactive, p.active, 0.5));
        // 4 * 0.25^3 = 0.0625
        assert_eq!(smooth(&p, 0.25), blend(p.inactive, p.active, 0.0625));
        assert_eq!(smooth(&p, 7.0), p.active);
    }

    #[test]
    fn wave_factor_stays_in_band() {
        for step in 0..10_000 {
            let t = step as f64 * 0.0137 - 40.0;
            let f = wave_factor(t);
            assert!((0.4..=0.6).contains(&f), "t = {t}, factor = {f}");
        }
        assert_eq!(wave_factor(0.0), 0.5);
    }

    #[test]
    fn wave_blends_transition_with_progress_color() {
        let p = Palette::default();
        let base = blend(p.inactive, p.active, 0.8);
        assert_eq!(wave(&p, 0.8, 0.0), blend(p.transition, base, 0.5));
        assert_eq!(wave(&p, 0.8, f64::INFINITY), base);
    }

    #[test]
    fn glow_strength_is_bounded() {
        for progress in [0.0, 0.25, 0.5, 1.0, 3.0] {
            for step in 0..200 {
                let s = glow_strength(progress, step as f64 * 0.05);
                assert!((0.0..=0.4).contains(&s));
            }
        }
        // progress 0, pulse 0.5 -> 0.1 + 0.05
        assert!((glow_strength(0.0, 0.0) - 0.15).abs() < 1e-12);
    }

    #[test]
    fn glow_brightens_progress_color() {
        let p = Palette::default();
        let base = blend(p.inactive, p.active, 1.0);
        let expected = blend(base, p.white, glow_strength(1.0, 0.3));
        assert_eq!(glow(&p, 1.0, 0.3), expected);
        assert_ne!(glow(&p, 1.0, 0.3), p.active);
    }
}
