// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Provides the quaternion type and the small set of vector and matrix types it
//! exchanges data with.
//!
//! All angular functions in this module operate in **radians** unless explicitly
//! specified otherwise (e.g., `degrees_to_radians`).
//!
//! Arithmetic follows IEEE-754 semantics throughout: degenerate inputs such as a
//! zero-length rotation axis or a zero quaternion produce NaN or infinite
//! components instead of failing. Callers that prefer to fail fast use the
//! `try_*` operations on [`Quaternion`], which return a [`MathError`].

// --- Fundamental Constants ---

/// A small constant for floating-point comparisons of vectors and matrices.
pub const EPSILON: f32 = 1e-5;

/// Default per-component tolerance used by quaternion equality.
pub const QUAT_EPSILON: f32 = 1e-5;

/// Slerp switches to a plain linear blend once `1 - cos(omega)` drops to or
/// below this value.
pub const QUAT_DELTA: f32 = 0.001;

/// The identity rotation `(1, 0, 0, 0)`.
pub const QUAT_IDENT: Quaternion = Quaternion::IDENTITY;

pub use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

/// The factor to convert degrees to radians (PI / 180.0).
pub const DEG_TO_RAD: f32 = PI / 180.0;
/// The factor to convert radians to degrees (180.0 / PI).
pub const RAD_TO_DEG: f32 = 180.0 / PI;

// --- Declare Sub-Modules ---

pub mod error;
pub mod matrix;
pub mod quaternion;
pub mod vector;

// --- Re-export Principal Types ---

pub use self::error::MathError;
pub use self::matrix::Mat4;
pub use self::quaternion::Quaternion;
pub use self::vector::{Vec3, Vec4};

// --- Utility Functions ---

/// Converts an angle from degrees to radians.
///
/// # Examples
///
/// ```
/// use versor_core::math::{degrees_to_radians, PI};
/// assert_eq!(degrees_to_radians(180.0), PI);
/// ```
#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * DEG_TO_RAD
}

/// Converts an angle from radians to degrees.
///
/// # Examples
///
/// ```
/// use versor_core::math::{radians_to_degrees, PI};
/// assert_eq!(radians_to_degrees(PI), 180.0);
/// ```
#[inline]
pub fn radians_to_degrees(radians: f32) -> f32 {
    radians * RAD_TO_DEG
}

/// Compares two floats with a caller-supplied absolute tolerance.
///
/// Values that are bitwise equal (including equal infinities) always compare
/// equal; otherwise they are equal when they differ by at most `epsilon`. NaN is
/// never equal to anything.
///
/// # Examples
///
/// ```
/// use versor_core::math::approx_eq_eps;
/// assert!(approx_eq_eps(0.001, 0.002, 1e-2));
/// assert!(!approx_eq_eps(0.001, 0.002, 1e-4));
/// assert!(approx_eq_eps(f32::INFINITY, f32::INFINITY, 0.0));
/// assert!(!approx_eq_eps(f32::NAN, f32::NAN, 1.0));
/// ```
#[inline]
pub fn approx_eq_eps(a: f32, b: f32, epsilon: f32) -> bool {
    a == b || (a - b).abs() <= epsilon
}

/// Performs an approximate equality comparison using the module's default [`EPSILON`].
///
/// # Examples
///
/// ```
/// use versor_core::math::{approx_eq, EPSILON};
/// assert!(approx_eq(1.0, 1.0 + EPSILON / 2.0));
/// assert!(!approx_eq(1.0, 1.0 + EPSILON * 2.0));
/// ```
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    approx_eq_eps(a, b, EPSILON)
}
