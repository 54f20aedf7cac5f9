// Copyright (c) 2026 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! iers-fcul
//!
//! [![License](https://img.shields.io/badge/License-MIT-blue)](https://opensource.org/license/mit/)
//!
//! A library for calculating the `FCULb` tropospheric mapping function of
//! [Mendes et al. (2002)](https://doi.org/10.1029/2001GL014394), as given in
//! Chapter 9 of the [IERS Conventions (2010)](https://iers-conventions.obspm.fr/).
//!
//! The atmosphere delays a signal travelling through it. The delay is
//! smallest at the zenith and grows as the signal path approaches the horizon.
//! A *mapping function* is the ratio of the delay along a slant path at a
//! given elevation angle to the delay at the zenith.
//!
//! `FCULb` is the mapping function recommended for Satellite Laser Ranging
//! (SLR). It depends only on the station latitude, height and the day of the
//! year, not on meteorological data, see *Equation 1*.
//!
//! *Equation 1 The Marini continued fraction*
//!
//! ```text
//!                 1 + a1 / (1 + a2 / (1 + a3))
//! m(e) = ---------------------------------------------
//!        sin(e) + a1 / (sin(e) + a2 / (sin(e) + a3))
//! ```
//!
//! where `e` is the elevation angle and `a1`, `a2` and `a3` are linear
//! functions of the seasonal term, latitude, height and cosine of latitude.
//!
//! ## Design
//!
//! `fcul_b` calculates the mapping factor in one call.
//! `MappingCoefficients` holds the continued fraction terms for a station
//! and day, so that many elevations can be mapped without recalculating them.
//! Both perform the floating point operations in the published order so that
//! they reproduce the published test value.
//!
//! Like the IERS software, `fcul_b` does not validate its inputs: degenerate
//! inputs produce infinite or `NaN` values. The `strict` module validates the
//! inputs and the result and returns an `Error` instead.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Degrees`
//!   and `Radians`;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres`;
//! - [libm](https://crates.io/crates/libm) - for trigonometric functions.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.

#![cfg_attr(not(test), no_std)]

extern crate angle_sc;
extern crate icao_units;

pub mod coefficients;
pub mod constants;
pub mod season;
pub mod strict;

pub use angle_sc::{Degrees, Radians, Validate};
pub use icao_units::si::Metres;
pub use season::DayOfYear;
pub use strict::Error;

use constants::DEGREES_TO_RADIANS;

/// The continued fraction terms of the `FCULb` mapping function for a
/// station on a day of the year.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MappingCoefficients {
    /// The first term of the continued fraction.
    a1: f64,
    /// The second term of the continued fraction.
    a2: f64,
    /// The third term of the continued fraction.
    a3: f64,
}

impl MappingCoefficients {
    /// Constructor.
    /// * `latitude` - the station latitude, north positive.
    /// * `height` - the station height above mean sea level.
    /// * `day_of_year` - the day of the year.
    #[must_use]
    pub fn new(latitude: Degrees, height: Metres, day_of_year: DayOfYear) -> Self {
        let day = season::adjust_for_hemisphere(latitude, day_of_year);
        let seasonal = season::calculate_seasonal_term(day);
        let cos_latitude = libm::cos(latitude.0 * DEGREES_TO_RADIANS);
        let latitude_sq = latitude.0 * latitude.0;

        let evaluate = |coeffs| {
            coefficients::evaluate_coefficient(
                coeffs,
                seasonal,
                latitude_sq,
                height.0,
                cos_latitude,
            )
        };
        Self {
            a1: evaluate(&coefficients::A1),
            a2: evaluate(&coefficients::A2),
            a3: evaluate(&coefficients::A3),
        }
    }

    /// The first term of the continued fraction.
    #[must_use]
    pub const fn a1(&self) -> f64 {
        self.a1
    }

    /// The second term of the continued fraction.
    #[must_use]
    pub const fn a2(&self) -> f64 {
        self.a2
    }

    /// The third term of the continued fraction.
    #[must_use]
    pub const fn a3(&self) -> f64 {
        self.a3
    }

    /// The numerator of the mapping function: the continued fraction at
    /// the zenith.
    #[must_use]
    pub fn map_zenith(&self) -> f64 {
        coefficients::continued_fraction(1.0, self.a1, self.a2, self.a3)
    }

    /// Calculate the mapping factor at an elevation angle.
    /// * `elevation` - the elevation angle above the horizon.
    ///
    /// returns the ratio of the slant delay to the zenith delay.
    #[must_use]
    pub fn mapping_factor(&self, elevation: Degrees) -> f64 {
        let sine = libm::sin(elevation.0 * DEGREES_TO_RADIANS);
        self.map_zenith() / coefficients::continued_fraction(sine, self.a1, self.a2, self.a3)
    }
}

/// Calculate the `FCULb` mapping function.
/// * `latitude` - the station latitude, north positive.
/// * `height` - the station height above mean sea level.
/// * `day_of_year` - the day of the year.
/// * `elevation` - the elevation angle above the horizon.
///
/// returns the factor to scale the total zenith delay to the slant delay.
/// Note: the inputs are not validated, see `strict::try_fcul_b`.
///
/// # Examples
/// ```
/// use iers_fcul::*;
///
/// // McDonald Observatory on 12 August
/// let latitude = Degrees(30.671_666_67);
/// let height = Metres(2075.0);
/// let day_of_year = DayOfYear(224.0);
///
/// let result = fcul_b(latitude, height, day_of_year, Degrees(15.0));
/// assert!((3.800_758_725_284_346 - result).abs() < 1.0e-14);
/// ```
#[must_use]
pub fn fcul_b(
    latitude: Degrees,
    height: Metres,
    day_of_year: DayOfYear,
    elevation: Degrees,
) -> f64 {
    MappingCoefficients::new(latitude, height, day_of_year).mapping_factor(elevation)
}

/// Calculate the total slant delay from the total zenith delay.
/// * `zenith_delay` - the total zenith delay.
/// * `latitude` - the station latitude, north positive.
/// * `height` - the station height above mean sea level.
/// * `day_of_year` - the day of the year.
/// * `elevation` - the elevation angle above the horizon.
///
/// returns the delay along the slant path.
#[must_use]
pub fn slant_delay(
    zenith_delay: Metres,
    latitude: Degrees,
    height: Metres,
    day_of_year: DayOfYear,
    elevation: Degrees,
) -> Metres {
    let factor = fcul_b(latitude, height, day_of_year, elevation);
    Metres(zenith_delay.0 * factor)
}
