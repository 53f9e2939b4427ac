//! Nice-number grid spacing and tick generation for axis labeling
//!
//! [`GridSpec::fit`] snaps a raw data range to a spacing from the set
//! {1, 2, 5, 10} x 10^n and expands the bounds outward to multiples of
//! that spacing, so the returned spacing always evenly divides the grid
//! span and the division count is an integer.

/// Snapped grid layout for one axis
///
/// Stateless value object computed on demand from a data range and a target
/// division count; `spacing` and `minor_spacing` are always one of
/// {1, 2, 5, 10} x 10^n.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    pub spacing: f64, // major spacing, {1,2,5,10} x 10^n
    pub minor_spacing: f64, // minor subdivision, also on the nice lattice
    pub origin: f64, // offset applied when the grid is placed on a surface
    pub min: f64, // expanded lower bound, multiple of spacing
    pub max: f64, // expanded upper bound, multiple of spacing
    pub divisions: usize, // integer count, (max - min) / spacing
}

impl GridSpec {
    /// Fit a grid to `[min, max]` aiming for `target_divisions` intervals
    ///
    /// Preconditions (caller-enforced): `max > min`, `target_divisions >= 1`.
    /// Algorithm: raw spacing (max - min) / target, normalized to a
    /// power-of-ten magnitude, mantissa snapped up to the smallest of
    /// {1, 2, 5, 10} >= raw mantissa, bounds expanded outward to multiples
    /// of the snapped spacing.
    pub fn fit(min: f64, max: f64, target_divisions: usize) -> Self {
        let raw = (max - min) / target_divisions as f64;

        // Power-of-ten magnitude and mantissa in [1, 10)
        let exponent = raw.log10().floor();
        let magnitude = 10.0_f64.powf(exponent);
        let mantissa = raw / magnitude;

        // Snap the mantissa up to the nearest nice number
        let nice = if mantissa <= 1.0 {
            1.0
        } else if mantissa <= 2.0 {
            2.0
        } else if mantissa <= 5.0 {
            5.0
        } else {
            10.0
        };
        let spacing = nice * magnitude;

        // Minor subdivision that stays on the nice lattice: a mantissa of 2
        // splits into quarters (0.5 x 10^n), 1 and 5 into fifths
        let minor_spacing = if nice == 2.0 {
            spacing / 4.0
        } else {
            spacing / 5.0
        };

        // Expand the range outward to multiples of the snapped spacing
        let grid_min = (min / spacing).floor() * spacing;
        let grid_max = (max / spacing).ceil() * spacing;
        let divisions = ((grid_max - grid_min) / spacing).round() as usize;

        Self {
            spacing,
            minor_spacing,
            origin: 0.0,
            min: grid_min,
            max: grid_max,
            divisions,
        }
    }

    /// Shift the grid's placement origin; tick values are unaffected,
    /// surfaces add the offset when positioning the grid
    pub fn with_origin(mut self, origin: f64) -> Self {
        self.origin = origin;
        self
    }

    /// Major tick values covering this grid, inclusive of both bounds
    pub fn ticks(&self) -> Vec<f64> {
        generate_ticks(self.min, self.max, self.spacing)
    }

    /// Minor tick values, including positions shared with major ticks
    pub fn minor_ticks(&self) -> Vec<f64> {
        generate_ticks(self.min, self.max, self.minor_spacing)
    }
}

/// Ordered tick values: smallest multiple of `spacing` >= `min`, stepping
/// by `spacing`, inclusive of values <= `max`
///
/// Each value is produced as index * spacing (a fresh multiple, not an
/// accumulated sum), which keeps long tick runs free of floating-point
/// drift; no duplicate or off-grid values are emitted.
pub fn generate_ticks(min: f64, max: f64, spacing: f64) -> Vec<f64> {
    let mut ticks = Vec::new();
    if !(spacing > 0.0) || max < min {
        return ticks;
    }

    // Half-ulp slack so bounds that are exact multiples are kept
    let eps = spacing * 1e-9;
    let first = ((min - eps) / spacing).ceil() as i64;
    let last = ((max + eps) / spacing).floor() as i64;

    for k in first..=last {
        ticks.push(k as f64 * spacing);
    }
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn fit_snaps_to_nice_spacing() {
        let g = GridSpec::fit(0.0, 97.0, 10);
        assert_relative_eq!(g.spacing, 10.0, epsilon = 1e-12);
        assert_relative_eq!(g.min, 0.0, epsilon = 1e-12);
        assert_relative_eq!(g.max, 100.0, epsilon = 1e-12);
        assert_eq!(g.divisions, 10);
    }

    #[test]
    fn fit_spacing_divides_span() {
        for (lo, hi, n) in [(-3.7, 12.9, 8), (0.013, 0.094, 5), (5.0, 5000.0, 12)] {
            let g = GridSpec::fit(lo, hi, n);
            let ratio = (g.max - g.min) / g.spacing;
            assert_relative_eq!(ratio, ratio.round(), epsilon = 1e-9);
            assert_eq!(g.divisions as f64, ratio.round());
            assert!(g.min <= lo && g.max >= hi);
        }
    }

    #[test]
    fn fit_mantissa_is_nice() {
        for (lo, hi, n) in [(0.0, 97.0, 10), (0.0, 1.0, 7), (-250.0, 310.0, 9)] {
            let g = GridSpec::fit(lo, hi, n);
            let mantissa = g.spacing / 10.0_f64.powf(g.spacing.log10().floor());
            assert!(
                [1.0, 2.0, 5.0].iter().any(|m| (mantissa - m).abs() < 1e-9),
                "spacing {} has mantissa {}",
                g.spacing,
                mantissa
            );
        }
    }

    #[test]
    fn minor_spacing_stays_on_nice_lattice() {
        for (lo, hi, n) in [
            (0.0, 97.0, 10),  // spacing 10 -> minor 2
            (-1.0, 1.0, 4),   // spacing 0.5 -> minor 0.1
            (0.0, 1.9, 1),    // spacing 2 -> minor 0.5 (quarters)
            (0.0, 9.7, 10),   // spacing 1 -> minor 0.2
        ] {
            let g = GridSpec::fit(lo, hi, n);
            let ratio = g.spacing / g.minor_spacing;
            assert!(
                (ratio - 4.0).abs() < 1e-9 || (ratio - 5.0).abs() < 1e-9,
                "spacing {} / minor {} = {}",
                g.spacing,
                g.minor_spacing,
                ratio
            );
            let mantissa =
                g.minor_spacing / 10.0_f64.powf(g.minor_spacing.log10().floor());
            assert!(
                [1.0, 2.0, 5.0].iter().any(|m| (mantissa - m).abs() < 1e-9),
                "minor spacing {} has mantissa {}",
                g.minor_spacing,
                mantissa
            );
        }
        let g = GridSpec::fit(0.0, 97.0, 10);
        assert_relative_eq!(g.minor_spacing, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn minor_ticks_refine_major_ticks() {
        let g = GridSpec::fit(0.0, 97.0, 10);
        let minor = g.minor_ticks();
        assert_eq!(minor.len(), 51); // 0, 2, 4, ..., 100
        // every major tick is also a minor tick position
        for t in g.ticks() {
            assert!(minor.iter().any(|m| (m - t).abs() < 1e-9));
        }
    }

    #[test]
    fn origin_offset_is_carried_not_baked_in() {
        let g = GridSpec::fit(0.0, 97.0, 10);
        assert_eq!(g.origin, 0.0);
        let shifted = g.with_origin(12.5);
        assert_eq!(shifted.origin, 12.5);
        // tick values are placement-independent
        assert_eq!(shifted.ticks(), g.ticks());
    }

    #[test]
    fn ticks_cover_range_inclusively() {
        let ticks = generate_ticks(0.0, 100.0, 10.0);
        assert_eq!(ticks.len(), 11);
        assert_relative_eq!(ticks[0], 0.0);
        assert_relative_eq!(ticks[10], 100.0);
        for pair in ticks.windows(2) {
            assert_relative_eq!(pair[1] - pair[0], 10.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn ticks_stay_on_grid() {
        // 0.1 is not exactly representable; emitted values must still be
        // exact multiples of the snapped index
        let ticks = generate_ticks(-0.35, 0.35, 0.1);
        assert_eq!(ticks.len(), 7);
        for (i, t) in ticks.iter().enumerate() {
            assert_relative_eq!(*t, (i as f64 - 3.0) * 0.1, epsilon = 1e-15);
        }
    }

    #[test]
    fn ticks_empty_on_degenerate_input() {
        assert!(generate_ticks(0.0, 10.0, 0.0).is_empty());
        assert!(generate_ticks(10.0, 0.0, 1.0).is_empty());
    }
}
