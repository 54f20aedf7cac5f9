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

//! The constants module contains the numerical constants used by the `FCULb`
//! mapping function, other than the empirical coefficients.

/// π, as used by the IERS Conventions software.
///
/// The literal `3.14159265358979323846` rounds to the same `f64` as
/// `core::f64::consts::PI`.
pub const PI: f64 = core::f64::consts::PI;

/// The factor to convert an angle in degrees to radians.
pub const DEGREES_TO_RADIANS: f64 = PI / 180.0;

/// The number of days in a Julian year.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Half a Julian year in days.
/// The seasonal phase shift applied in the southern hemisphere.
pub const HALF_YEAR: f64 = DAYS_PER_YEAR / 2.0;

/// The day of the year at which the seasonal term peaks in the northern
/// hemisphere.
pub const SEASONAL_PHASE_DAY: f64 = 28.0;

/// The maximum absolute latitude in degrees.
pub const MAX_LATITUDE: f64 = 90.0;

/// The maximum elevation angle in degrees: the zenith.
pub const MAX_ELEVATION: f64 = 90.0;

/// The first day of the year.
pub const FIRST_DAY: f64 = 1.0;

/// The end of the last day of a leap year, exclusive.
pub const END_OF_YEAR: f64 = 367.0;
