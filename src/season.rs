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

//! The season module contains the day of the year and the seasonal term of
//! the `FCULb` mapping function.
//!
//! The seasonal term is a cosine with a period of one Julian year that
//! peaks on day 28 in the northern hemisphere. The southern hemisphere uses
//! the same coefficients, with the day of the year shifted by half a year.

use crate::constants::{DAYS_PER_YEAR, END_OF_YEAR, FIRST_DAY, HALF_YEAR, PI, SEASONAL_PHASE_DAY};
use angle_sc::{Degrees, Validate};

/// The day of the year, 1.0 is the start of the 1st of January.
/// It may be fractional.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct DayOfYear(pub f64);

impl Validate for DayOfYear {
    /// Test whether a `DayOfYear` is valid.
    /// Whether 1.0 <= `day` < 367.0
    fn is_valid(&self) -> bool {
        (FIRST_DAY..END_OF_YEAR).contains(&self.0)
    }
}

/// Shift the day of the year by half a year in the southern hemisphere.
/// * `latitude` - the latitude, north positive.
/// * `day_of_year` - the day of the year.
///
/// returns the day of the year in phase with the northern hemisphere.
/// # Examples
/// ```
/// use iers_fcul::{Degrees, DayOfYear};
/// use iers_fcul::season::adjust_for_hemisphere;
///
/// assert_eq!(DayOfYear(224.0), adjust_for_hemisphere(Degrees(30.0), DayOfYear(224.0)));
/// assert_eq!(DayOfYear(406.625), adjust_for_hemisphere(Degrees(-30.0), DayOfYear(224.0)));
/// ```
#[must_use]
pub fn adjust_for_hemisphere(latitude: Degrees, day_of_year: DayOfYear) -> DayOfYear {
    if latitude.0 < 0.0 {
        DayOfYear(day_of_year.0 + HALF_YEAR)
    } else {
        day_of_year
    }
}

/// Calculate the seasonal term of the continued fraction coefficients.
/// * `day_of_year` - the day of the year, adjusted for the hemisphere.
///
/// returns the cosine of the annual phase relative to day 28.
#[must_use]
pub fn calculate_seasonal_term(day_of_year: DayOfYear) -> f64 {
    let days = day_of_year.0 - SEASONAL_PHASE_DAY;
    libm::cos(days * 2.0 * PI / DAYS_PER_YEAR)
}
