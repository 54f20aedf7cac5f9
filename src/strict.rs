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

//! The strict module validates the inputs to, and the result of, the `FCULb`
//! mapping function.
//!
//! `fcul_b` accepts any inputs and may return an infinite or `NaN` value.
//! The functions in this module return an `Error` instead.

use crate::constants::{MAX_ELEVATION, MAX_LATITUDE};
use crate::{DayOfYear, Degrees, MappingCoefficients, Metres, Validate};
use log::debug;
use thiserror::Error;

/// The reasons for rejecting an `Observation` or its result.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum Error {
    /// The named input is infinite or `NaN`.
    #[error("{0} is not finite")]
    NonFiniteInput(&'static str),

    /// The latitude in degrees is outside -90° to 90°.
    #[error("latitude {0} is outside the range -90 to 90 degrees")]
    LatitudeOutOfRange(f64),

    /// The elevation in degrees is outside 0° (exclusive) to 90°.
    #[error("elevation {0} is outside the range 0 to 90 degrees")]
    ElevationOutOfRange(f64),

    /// The day of the year is outside 1.0 to 367.0 (exclusive).
    #[error("day of year {0} is outside the range 1 to 367")]
    DayOfYearOutOfRange(f64),

    /// The mapping factor is infinite or `NaN`.
    #[error("mapping factor is not finite")]
    NonFiniteResult,
}

/// An elevation angle observed from a station on a day of the year.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Observation {
    /// The station latitude, north positive.
    latitude: Degrees,
    /// The station height above mean sea level.
    height: Metres,
    /// The day of the year.
    day_of_year: DayOfYear,
    /// The elevation angle above the horizon.
    elevation: Degrees,
}

impl Validate for Observation {
    /// Test whether an `Observation` is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl Observation {
    /// Constructor.
    /// * `latitude` - the station latitude, north positive.
    /// * `height` - the station height above mean sea level.
    /// * `day_of_year` - the day of the year.
    /// * `elevation` - the elevation angle above the horizon.
    #[must_use]
    pub const fn new(
        latitude: Degrees,
        height: Metres,
        day_of_year: DayOfYear,
        elevation: Degrees,
    ) -> Self {
        Self {
            latitude,
            height,
            day_of_year,
            elevation,
        }
    }

    /// The station latitude, north positive.
    #[must_use]
    pub const fn latitude(&self) -> Degrees {
        self.latitude
    }

    /// The station height above mean sea level.
    #[must_use]
    pub const fn height(&self) -> Metres {
        self.height
    }

    /// The day of the year.
    #[must_use]
    pub const fn day_of_year(&self) -> DayOfYear {
        self.day_of_year
    }

    /// The elevation angle above the horizon.
    #[must_use]
    pub const fn elevation(&self) -> Degrees {
        self.elevation
    }

    /// Validate the `Observation`.
    ///
    /// # Errors
    ///
    /// `NonFiniteInput` if any value is infinite or `NaN`, otherwise the
    /// first value outside its range:
    /// -90° <= `latitude` <= 90°, 0° < `elevation` <= 90° and
    /// 1.0 <= `day_of_year` < 367.0
    pub fn validate(&self) -> Result<(), Error> {
        let inputs = [
            ("latitude", self.latitude.0),
            ("height", self.height.0),
            ("day of year", self.day_of_year.0),
            ("elevation", self.elevation.0),
        ];
        if let Some((name, _)) = inputs.into_iter().find(|(_, value)| !value.is_finite()) {
            return Err(Error::NonFiniteInput(name));
        }

        if MAX_LATITUDE < libm::fabs(self.latitude.0) {
            return Err(Error::LatitudeOutOfRange(self.latitude.0));
        }
        if self.elevation.0 <= 0.0 || MAX_ELEVATION < self.elevation.0 {
            return Err(Error::ElevationOutOfRange(self.elevation.0));
        }
        if !self.day_of_year.is_valid() {
            return Err(Error::DayOfYearOutOfRange(self.day_of_year.0));
        }

        Ok(())
    }

    /// Calculate the `FCULb` mapping factor of a valid `Observation`.
    ///
    /// # Errors
    ///
    /// The `validate` error if the `Observation` is invalid, or
    /// `NonFiniteResult` if the mapping factor is infinite or `NaN`.
    pub fn mapping_factor(&self) -> Result<f64, Error> {
        self.validate().inspect_err(|e| debug!("rejected {self:?}: {e}"))?;

        let result = MappingCoefficients::new(self.latitude, self.height, self.day_of_year)
            .mapping_factor(self.elevation);
        if result.is_finite() {
            Ok(result)
        } else {
            debug!("non-finite mapping factor for {self:?}");
            Err(Error::NonFiniteResult)
        }
    }
}

/// Calculate the `FCULb` mapping function of valid inputs.
/// * `latitude` - the station latitude, north positive.
/// * `height` - the station height above mean sea level.
/// * `day_of_year` - the day of the year.
/// * `elevation` - the elevation angle above the horizon.
///
/// returns the same value as `fcul_b` for valid inputs.
///
/// # Errors
///
/// See `Observation::mapping_factor`.
///
/// # Examples
/// ```
/// use iers_fcul::*;
/// use iers_fcul::strict::try_fcul_b;
///
/// let latitude = Degrees(30.671_666_67);
/// let height = Metres(2075.0);
/// let day_of_year = DayOfYear(224.0);
///
/// let result = try_fcul_b(latitude, height, day_of_year, Degrees(15.0));
/// assert_eq!(Ok(fcul_b(latitude, height, day_of_year, Degrees(15.0))), result);
///
/// let result = try_fcul_b(latitude, height, day_of_year, Degrees(-1.0));
/// assert_eq!(Err(Error::ElevationOutOfRange(-1.0)), result);
/// ```
pub fn try_fcul_b(
    latitude: Degrees,
    height: Metres,
    day_of_year: DayOfYear,
    elevation: Degrees,
) -> Result<f64, Error> {
    Observation::new(latitude, height, day_of_year, elevation).mapping_factor()
}

/// Calculate the total slant delay from the total zenith delay for valid
/// inputs.
/// * `zenith_delay` - the total zenith delay.
/// * `latitude` - the station latitude, north positive.
/// * `height` - the station height above mean sea level.
/// * `day_of_year` - the day of the year.
/// * `elevation` - the elevation angle above the horizon.
///
/// # Errors
///
/// `NonFiniteInput` if the `zenith_delay` is infinite or `NaN`,
/// otherwise see `Observation::mapping_factor`.
pub fn try_slant_delay(
    zenith_delay: Metres,
    latitude: Degrees,
    height: Metres,
    day_of_year: DayOfYear,
    elevation: Degrees,
) -> Result<Metres, Error> {
    if !zenith_delay.0.is_finite() {
        debug!("rejected zenith delay: {zenith_delay:?}");
        return Err(Error::NonFiniteInput("zenith delay"));
    }
    let factor = try_fcul_b(latitude, height, day_of_year, elevation)?;
    Ok(Metres(zenith_delay.0 * factor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fcul_b;

    const MCDONALD_LATITUDE: Degrees = Degrees(30.671_666_67);
    const MCDONALD_HEIGHT: Metres = Metres(2075.0);
    const AUGUST_12: DayOfYear = DayOfYear(224.0);

    #[test]
    fn test_observation_traits() {
        let observation =
            Observation::new(MCDONALD_LATITUDE, MCDONALD_HEIGHT, AUGUST_12, Degrees(15.0));
        assert!(observation.is_valid());

        let observation_clone = observation;
        assert_eq!(observation_clone, observation);

        assert_eq!(MCDONALD_LATITUDE, observation.latitude());
        assert_eq!(MCDONALD_HEIGHT, observation.height());
        assert_eq!(AUGUST_12, observation.day_of_year());
        assert_eq!(Degrees(15.0), observation.elevation());

        println!("Observation: {:?}", observation);
    }

    #[test]
    fn test_observation_validate() {
        let valid = [
            Observation::new(Degrees(90.0), Metres(0.0), DayOfYear(1.0), Degrees(90.0)),
            Observation::new(
                Degrees(-90.0),
                Metres(-400.0),
                DayOfYear(366.99),
                Degrees(0.001),
            ),
            Observation::new(Degrees(0.0), Metres(8848.0), DayOfYear(2.5), Degrees(45.0)),
        ];
        for observation in &valid {
            assert_eq!(Ok(()), observation.validate());
        }

        let latitude = MCDONALD_LATITUDE;
        let height = MCDONALD_HEIGHT;
        let day = AUGUST_12;
        let elevation = Degrees(15.0);

        let invalid = [
            (
                Observation::new(Degrees(f64::NAN), height, day, elevation),
                Error::NonFiniteInput("latitude"),
            ),
            (
                Observation::new(latitude, Metres(f64::INFINITY), day, elevation),
                Error::NonFiniteInput("height"),
            ),
            (
                Observation::new(latitude, height, DayOfYear(f64::NAN), elevation),
                Error::NonFiniteInput("day of year"),
            ),
            (
                Observation::new(latitude, height, day, Degrees(f64::NEG_INFINITY)),
                Error::NonFiniteInput("elevation"),
            ),
            (
                Observation::new(Degrees(90.5), height, day, elevation),
                Error::LatitudeOutOfRange(90.5),
            ),
            (
                Observation::new(Degrees(-91.0), height, day, elevation),
                Error::LatitudeOutOfRange(-91.0),
            ),
            (
                Observation::new(latitude, height, day, Degrees(0.0)),
                Error::ElevationOutOfRange(0.0),
            ),
            (
                Observation::new(latitude, height, day, Degrees(90.1)),
                Error::ElevationOutOfRange(90.1),
            ),
            (
                Observation::new(latitude, height, DayOfYear(0.5), elevation),
                Error::DayOfYearOutOfRange(0.5),
            ),
            (
                Observation::new(latitude, height, DayOfYear(367.0), elevation),
                Error::DayOfYearOutOfRange(367.0),
            ),
        ];
        for (observation, error) in &invalid {
            assert!(!observation.is_valid());
            assert_eq!(Err(*error), observation.validate());
            assert_eq!(Err(*error), observation.mapping_factor());
        }
    }

    #[test]
    fn test_try_fcul_b() {
        for i in 1..91 {
            let elevation = Degrees(f64::from(i));
            let expected = fcul_b(MCDONALD_LATITUDE, MCDONALD_HEIGHT, AUGUST_12, elevation);
            assert_eq!(
                Ok(expected),
                try_fcul_b(MCDONALD_LATITUDE, MCDONALD_HEIGHT, AUGUST_12, elevation)
            );
        }

        assert_eq!(
            Err(Error::LatitudeOutOfRange(100.0)),
            try_fcul_b(Degrees(100.0), MCDONALD_HEIGHT, AUGUST_12, Degrees(15.0))
        );
    }

    #[test]
    fn test_try_fcul_b_non_finite_result() {
        // At this height the zenith continued fraction divides by zero
        let height = Metres(-339_357_276.190_475_7);
        let day_of_year = DayOfYear(28.0);
        let result = fcul_b(Degrees(0.0), height, day_of_year, Degrees(5.0));
        assert!(result.is_infinite());

        let observation = Observation::new(Degrees(0.0), height, day_of_year, Degrees(5.0));
        assert!(observation.is_valid());
        assert_eq!(Err(Error::NonFiniteResult), observation.mapping_factor());
    }

    #[test]
    fn test_try_slant_delay() {
        let zenith_delay = Metres(2.3);
        let expected = crate::slant_delay(
            zenith_delay,
            MCDONALD_LATITUDE,
            MCDONALD_HEIGHT,
            AUGUST_12,
            Degrees(15.0),
        );
        assert_eq!(
            Ok(expected),
            try_slant_delay(
                zenith_delay,
                MCDONALD_LATITUDE,
                MCDONALD_HEIGHT,
                AUGUST_12,
                Degrees(15.0)
            )
        );

        assert_eq!(
            Err(Error::NonFiniteInput("zenith delay")),
            try_slant_delay(
                Metres(f64::NAN),
                MCDONALD_LATITUDE,
                MCDONALD_HEIGHT,
                AUGUST_12,
                Degrees(15.0)
            )
        );
        assert_eq!(
            Err(Error::ElevationOutOfRange(95.0)),
            try_slant_delay(
                zenith_delay,
                MCDONALD_LATITUDE,
                MCDONALD_HEIGHT,
                AUGUST_12,
                Degrees(95.0)
            )
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            "latitude is not finite",
            Error::NonFiniteInput("latitude").to_string()
        );
        assert_eq!(
            "elevation -1 is outside the range 0 to 90 degrees",
            Error::ElevationOutOfRange(-1.0).to_string()
        );
        assert_eq!(
            "latitude 90.5 is outside the range -90 to 90 degrees",
            Error::LatitudeOutOfRange(90.5).to_string()
        );
        assert_eq!(
            "day of year 0.5 is outside the range 1 to 367",
            Error::DayOfYearOutOfRange(0.5).to_string()
        );
        assert_eq!(
            "mapping factor is not finite",
            Error::NonFiniteResult.to_string()
        );
    }
}
