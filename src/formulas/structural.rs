//! Closed-form beam, column and foundation formulas
//!
//! Single-expression engineering formulas in consistent SI units:
//! forces in N, lengths in m, distributed loads in N/m, moduli and
//! pressures in Pa, second moments of area in m^4, unit weights in N/m^3.
//!
//! No clamping anywhere: physically invalid inputs (zero length, negative
//! area) must be rejected by the caller before these are invoked.

use std::f64::consts::PI;

/// Tip deflection of a cantilever under end point load P: P L^3 / (3 E I), in m
#[inline]
pub fn cantilever_tip_deflection(p: f64, l: f64, e: f64, i: f64) -> f64 {
    p * l.powi(3) / (3.0 * e * i)
}

/// Fixed-end moment of a cantilever under end point load P: M = P L, in N m
#[inline]
pub fn cantilever_max_moment(p: f64, l: f64) -> f64 {
    p * l
}

/// Center deflection of a simply-supported beam under midspan point load:
/// P L^3 / (48 E I), in m
#[inline]
pub fn simply_supported_center_deflection(p: f64, l: f64, e: f64, i: f64) -> f64 {
    p * l.powi(3) / (48.0 * e * i)
}

/// Max deflection of a simply-supported beam under full uniform load w:
/// 5 w L^4 / (384 E I), at midspan, in m
#[inline]
pub fn uniform_load_max_deflection(w: f64, l: f64, e: f64, i: f64) -> f64 {
    5.0 * w * l.powi(4) / (384.0 * e * i)
}

/// Max moment of a simply-supported beam, midspan point load: P L / 4, in N m
#[inline]
pub fn point_load_max_moment(p: f64, l: f64) -> f64 {
    p * l / 4.0
}

/// Max moment of a simply-supported beam, full uniform load: w L^2 / 8, in N m
#[inline]
pub fn uniform_load_max_moment(w: f64, l: f64) -> f64 {
    w * l * l / 8.0
}

/// Euler buckling load of a column: pi^2 E I / (k L)^2, in N
///
/// `k` is the effective-length factor (1.0 pinned-pinned, 0.5 fixed-fixed,
/// 2.0 fixed-free).
#[inline]
pub fn euler_buckling_load(e: f64, i: f64, l: f64, k: f64) -> f64 {
    PI * PI * e * i / (k * l).powi(2)
}

/// Slenderness ratio k L / r, unitless
///
/// `r` is the radius of gyration sqrt(I / A), in m.
#[inline]
pub fn slenderness_ratio(k: f64, l: f64, radius_of_gyration: f64) -> f64 {
    k * l / radius_of_gyration
}

/// Radius of gyration sqrt(I / A), in m
#[inline]
pub fn radius_of_gyration(i: f64, area: f64) -> f64 {
    (i / area).sqrt()
}

/// Terzaghi ultimate bearing capacity of a strip footing:
/// q_ult = c Nc + gamma D Nq + 0.5 gamma B Ngamma, in Pa
///
/// `c` cohesion (Pa), `gamma` soil unit weight (N/m^3), `d` embedment depth
/// (m), `b` footing width (m); Nc, Nq, Ngamma are the unitless bearing
/// capacity factors for the soil friction angle.
#[inline]
pub fn bearing_capacity(c: f64, gamma: f64, d: f64, b: f64, nc: f64, nq: f64, ngamma: f64) -> f64 {
    c * nc + gamma * d * nq + 0.5 * gamma * b * ngamma
}

/// Seismic base shear V = Cs W, in N
///
/// `cs` is the unitless seismic response coefficient, `w` the effective
/// seismic weight in N.
#[inline]
pub fn base_shear(cs: f64, w: f64) -> f64 {
    cs * w
}

/// Story drift ratio (delta_top - delta_bottom) / h, unitless
///
/// Displacements and story height `h` in the same length unit.
#[inline]
pub fn story_drift_ratio(delta_top: f64, delta_bottom: f64, h: f64) -> f64 {
    (delta_top - delta_bottom) / h
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // W310x52-ish steel cantilever: E = 200 GPa, I = 1.19e-4 m^4
    const E: f64 = 200.0e9;
    const I: f64 = 1.19e-4;

    #[test]
    fn cantilever_deflection() {
        // 10 kN at the tip of a 3 m cantilever
        let d = cantilever_tip_deflection(10_000.0, 3.0, E, I);
        assert_relative_eq!(d, 10_000.0 * 27.0 / (3.0 * E * I), epsilon = 1e-12);
        assert_relative_eq!(cantilever_max_moment(10_000.0, 3.0), 30_000.0, epsilon = 1e-9);
    }

    #[test]
    fn simply_supported_is_sixteen_times_stiffer() {
        // same P, L, E, I: cantilever tip deflection / SS center deflection = 16
        let dc = cantilever_tip_deflection(5000.0, 4.0, E, I);
        let ds = simply_supported_center_deflection(5000.0, 4.0, E, I);
        assert_relative_eq!(dc / ds, 16.0, epsilon = 1e-9);
    }

    #[test]
    fn max_moments() {
        assert_relative_eq!(point_load_max_moment(1000.0, 10.0), 2500.0, epsilon = 1e-9);
        assert_relative_eq!(uniform_load_max_moment(100.0, 10.0), 1250.0, epsilon = 1e-9);
    }

    #[test]
    fn euler_buckling_end_conditions() {
        // fixed-free (k=2) carries a quarter of the pinned-pinned (k=1) load
        let pinned = euler_buckling_load(E, I, 5.0, 1.0);
        let fixed_free = euler_buckling_load(E, I, 5.0, 2.0);
        assert_relative_eq!(pinned / fixed_free, 4.0, epsilon = 1e-9);
    }

    #[test]
    fn slenderness_from_section() {
        let r = radius_of_gyration(I, 6.65e-3);
        assert_relative_eq!(slenderness_ratio(1.0, 4.0, r), 4.0 / r, epsilon = 1e-12);
    }

    #[test]
    fn bearing_capacity_cohesionless_surface_footing() {
        // c = 0, D = 0 leaves only the width term
        let q = bearing_capacity(0.0, 18_000.0, 0.0, 2.0, 37.2, 22.5, 19.7);
        assert_relative_eq!(q, 0.5 * 18_000.0 * 2.0 * 19.7, epsilon = 1e-9);
    }

    #[test]
    fn base_shear_and_drift() {
        assert_relative_eq!(base_shear(0.12, 5.0e6), 6.0e5, epsilon = 1e-9);
        assert_relative_eq!(story_drift_ratio(0.030, 0.012, 3.6), 0.005, epsilon = 1e-12);
    }
}
