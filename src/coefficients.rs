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

//! This module contains the empirical coefficients of the `FCULb` mapping
//! function and the functions that evaluate them.
//!
//! The coefficients are from a least squares adjustment of 87766 (cleaned)
//! ray traces, using Ciddor's equations to compute refractivity according to
//! the IUGG recommendations (1999), see:
//! V.B. Mendes, G. Prates, E.C. Pavlis, D.E. Pavlis and R.B. Langley,
//! [Improved mapping functions for atmospheric refraction correction in SLR](https://doi.org/10.1029/2001GL014394),
//! Geophysical Research Letters, 29(10), 1414, 2002.

#![allow(clippy::suboptimal_flops)]

/// The coefficients of `a1`, the first term of the continued fraction.
/// In order: constant, seasonal, seasonal × latitude², height, cos latitude.
pub const A1: [f64; 5] = [
    0.116_131e-02,
    -0.933_8e-5,
    -0.595_8e-8,
    -0.246_27e-07,
    0.128_64e-03,
];

/// The coefficients of `a2`, the second term of the continued fraction.
pub const A2: [f64; 5] = [
    0.298_151e-02,
    -0.569e-05,
    -0.165_5e-07,
    -0.272_5e-07,
    0.302_0e-04,
];

/// The coefficients of `a3`, the third term of the continued fraction.
pub const A3: [f64; 5] = [
    0.681_839e-01,
    0.935e-04,
    -0.239_4e-06,
    0.304e-07,
    -0.230_8e-02,
];

/// Evaluate a continued fraction term from its coefficients.
///
/// Mendes et al. 2002, Eq. 6.
/// * `coeffs` - the coefficients: `A1`, `A2` or `A3`.
/// * `seasonal` - the seasonal term, see `season::calculate_seasonal_term`.
/// * `latitude_sq` - the square of the latitude in degrees.
/// * `height` - the height above mean sea level in metres.
/// * `cos_latitude` - the cosine of the latitude.
///
/// The terms are summed from left to right, as published.
#[must_use]
pub fn evaluate_coefficient(
    coeffs: &[f64; 5],
    seasonal: f64,
    latitude_sq: f64,
    height: f64,
    cos_latitude: f64,
) -> f64 {
    coeffs[0]
        + coeffs[1] * seasonal
        + coeffs[2] * latitude_sq * seasonal
        + coeffs[3] * height
        + coeffs[4] * cos_latitude
}

/// Evaluate the Marini continued fraction truncated at the third term.
///
/// Mendes et al. 2002, Eq. 5.
/// * `x` - the sine of the elevation angle, 1.0 at the zenith.
/// * `a1`, `a2`, `a3` - the continued fraction terms.
///
/// returns `x + a1 / (x + a2 / (x + a3))`.
/// Note: a zero denominator is not guarded against, it yields an infinite
/// or `NaN` value.
/// # Examples
/// ```
/// use iers_fcul::coefficients::continued_fraction;
///
/// assert_eq!(1.5, continued_fraction(1.0, 1.0, 1.0, 0.0));
/// ```
#[must_use]
pub fn continued_fraction(x: f64, a1: f64, a2: f64, a3: f64) -> f64 {
    x + a1 / (x + a2 / (x + a3))
}
