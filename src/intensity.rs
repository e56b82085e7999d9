use std::num::NonZeroUsize;

pub fn clamp(input: f64, min: f64, max: f64) -> f64 {
    if input < min {
        min
    } else if input > max {
        max
    } else {
        input
    }
}

/// Linear map of `current` from `[in_min, in_max]` onto `[out_min, out_max]`, clamped to the
/// output range.
pub fn map_range(current: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    let mapped = (current - in_min) * (out_max - out_min) / (in_max - in_min) + out_min;
    clamp(mapped, out_min, out_max)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntensityScale {
    pub start: f64,
    pub end: f64,
}

impl IntensityScale {
    /// Scale spanning the given intensities, or `fallback` when there are none. Explicit
    /// `start`/`end` overrides win over the observed bounds.
    pub fn from_intensities(
        intensities: impl IntoIterator<Item = f64>,
        fallback: IntensityScale,
        start: Option<f64>,
        end: Option<f64>,
    ) -> Self {
        let observed = intensities.into_iter().fold(None, |bounds, value| match bounds {
            None => Some((value, value)),
            Some((min, max)) => Some((f64::min(min, value), f64::max(max, value))),
        });
        let (min, max) = observed.unwrap_or((fallback.start, fallback.end));

        Self {
            start: start.unwrap_or(min),
            end: end.unwrap_or(max),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// 1-based shade index for `intensity` in a palette of `shades` colors. Non-finite
    /// intensities get the lowest shade.
    pub fn shade(&self, intensity: f64, shades: NonZeroUsize) -> usize {
        let shades = shades.get();
        if !intensity.is_finite() {
            return 1;
        }
        if self.is_degenerate() {
            return shades;
        }

        let mapped = map_range(intensity, self.start, self.end, 1.0, shades as f64).round();
        if mapped.is_nan() {
            return 1;
        }
        (mapped as usize).clamp(1, shades)
    }
}
