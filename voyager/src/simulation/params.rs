//! Physical constants and numerical parameters for the simulation
//!
//! `PhysicalConstants` is built once at startup and handed to the scenario
//! builder; `Parameters` holds the per-run settings derived from it:
//! - time step `dt` and end time `t_end`,
//! - gravitational constant `g` used by the force model

use super::states::BodyKind;

/// Seconds in a Julian year
pub const JULIAN_YEAR_SECONDS: f64 = 365.25 * 86_400.0;

/// Baked-in physical constants. `Default` carries the real values used by
/// the reference scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalConstants {
    pub g: f64, // gravitational constant (m^3 kg^-1 s^-2)
    pub sun_mass: f64,
    pub earth_mass: f64,
    pub mars_mass: f64,
    pub jupiter_mass: f64,
    pub saturn_mass: f64,
    pub ship_mass: f64,
    pub earth_radius: f64, // m
    pub ship_altitude: f64, // m above the launch body's surface
    pub ship_launch_speed: f64, // m/s added to the launch body's speed
    pub saturnian_year: f64, // s
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            g: 6.693e-11,
            sun_mass: 1.98855e30,
            earth_mass: 5.972e24,
            mars_mass: 6.4171e23,
            jupiter_mass: 1.89813e27,
            saturn_mass: 5.68319e26,
            ship_mass: 721.0,
            earth_radius: 6_371.0 * 1_000.0,
            ship_altitude: 1_500.0 * 1_000.0,
            ship_launch_speed: 14_000.0,
            saturnian_year: 29.4571 * JULIAN_YEAR_SECONDS,
        }
    }
}

impl PhysicalConstants {
    /// Mass lookup by body identity
    pub fn mass_of(&self, kind: BodyKind) -> f64 {
        match kind {
            BodyKind::Sun => self.sun_mass,
            BodyKind::Earth => self.earth_mass,
            BodyKind::Mars => self.mars_mass,
            BodyKind::Jupiter => self.jupiter_mass,
            BodyKind::Saturn => self.saturn_mass,
            BodyKind::Ship => self.ship_mass,
        }
    }

    pub fn saturnian_years_to_seconds(&self, years: f64) -> f64 {
        years * self.saturnian_year
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub dt: f64, // time step (s)
    pub t_end: f64, // run duration (s)
    pub g: f64, // gravitational constant
}
