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

//! Provides a Quaternion type for representing and interpolating 3D rotations.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{approx_eq_eps, Mat4, MathError, Vec3, EPSILON, QUAT_DELTA, QUAT_EPSILON};
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Represents a quaternion `w + xi + yj + zk`.
///
/// Quaternions represent rotations in 3D space without gimbal lock and compose
/// them with a single product. A quaternion of norm 1 (a "unit quaternion")
/// encodes a rotation of `2 * acos(w)` radians about the axis `(x, y, z)`.
///
/// The type is an immutable value: its components are fixed at construction and
/// every operation returns a new quaternion. Unit length is *not* enforced;
/// [`Quaternion::from_axis_angle`] and [`Quaternion::from_euler`] produce unit
/// quaternions, while `+` and scaling generally do not.
///
/// Components are laid out in memory as `(x, y, z, w)` so the value can be
/// uploaded to a GPU buffer as a `vec4<f32>`. Constructors take the scalar
/// part first.
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Quaternion {
    x: f32,
    y: f32,
    z: f32,
    w: f32,
}

impl Quaternion {
    /// The identity quaternion, representing no rotation.
    pub const IDENTITY: Quaternion = Quaternion::new(1.0, 0.0, 0.0, 0.0);

    /// Creates a new quaternion from its raw components, scalar part first.
    ///
    /// The components are stored verbatim. This does not produce a unit
    /// quaternion; for rotations prefer [`Quaternion::from_axis_angle`] or
    /// [`Quaternion::from_euler`].
    #[inline]
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a quaternion from a scalar part and a vector part.
    #[inline]
    pub const fn from_scalar_vector(w: f32, v: Vec3) -> Self {
        Self::new(w, v.x, v.y, v.z)
    }

    /// Creates a quaternion representing a rotation around `axis` by `angle_radians`.
    ///
    /// The axis does not need to be normalized: it is rescaled directly to the
    /// length `sin(angle / 2)`. A zero-length axis has no direction and yields
    /// NaN vector components; use [`Quaternion::try_from_axis_angle`] to reject
    /// it instead.
    #[inline]
    pub fn from_axis_angle(axis: Vec3, angle_radians: f32) -> Self {
        let half_angle = angle_radians / 2.0;
        let (s, c) = half_angle.sin_cos();
        Self::from_scalar_vector(c, axis.normalize_to(s))
    }

    /// Like [`Quaternion::from_axis_angle`], but fails on an axis with zero or
    /// non-finite length.
    pub fn try_from_axis_angle(axis: Vec3, angle_radians: f32) -> Result<Self, MathError> {
        let length = axis.length();
        if length > 0.0 && length.is_finite() {
            Self::from_axis_angle(axis, angle_radians).finite_or("from_axis_angle")
        } else {
            log::debug!("Rejected rotation axis {axis:?} with length {length}.");
            Err(MathError::DegenerateAxis { length })
        }
    }

    /// Creates a unit quaternion from Euler angles in radians.
    ///
    /// `pitch` rotates about X, `yaw` about Y and `roll` about Z. The rotations
    /// apply pitch first and roll last, so the result equals
    /// `Rz(roll) * Ry(yaw) * Rx(pitch)`.
    pub fn from_euler(pitch: f32, yaw: f32, roll: f32) -> Self {
        // Half-angle products are formed in f64 and rounded once at the end.
        let (sp, cp) = (f64::from(pitch) * 0.5).sin_cos();
        let (sy, cy) = (f64::from(yaw) * 0.5).sin_cos();
        let (sr, cr) = (f64::from(roll) * 0.5).sin_cos();

        Self::new(
            (cr * cy * cp + sr * sy * sp) as f32,
            (cr * cy * sp - sr * sy * cp) as f32,
            (cr * sy * cp + sr * cy * sp) as f32,
            (sr * cy * cp - cr * sy * sp) as f32,
        )
    }

    /// The scalar (real) part.
    #[inline]
    pub const fn w(&self) -> f32 {
        self.w
    }

    /// The `i` component of the vector part.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// The `j` component of the vector part.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// The `k` component of the vector part.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.z
    }

    /// The vector (imaginary) part as a `Vec3`.
    #[inline]
    pub const fn vector(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Returns the components as `[w, x, y, z]`.
    #[inline]
    pub const fn to_array(&self) -> [f32; 4] {
        [self.w, self.x, self.y, self.z]
    }

    /// Calculates the squared norm `w² + x² + y² + z²`.
    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.dot(*self)
    }

    /// Calculates the Euclidean norm of the quaternion as a 4-vector.
    #[inline]
    pub fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }

    /// Computes the four-component dot product of two quaternions.
    #[inline]
    pub fn dot(&self, other: Self) -> f32 {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns a version of the quaternion with a norm of 1.
    /// If the quaternion has a near-zero norm, it returns the identity quaternion.
    pub fn normalize(&self) -> Self {
        let norm_sq = self.norm_squared();
        if norm_sq > EPSILON * EPSILON {
            self.scale(1.0 / norm_sq.sqrt())
        } else {
            Self::IDENTITY
        }
    }

    /// Computes the conjugate of the quaternion, which negates the vector part.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Multiplies every component by `s`.
    #[inline]
    pub fn scale(&self, s: f32) -> Self {
        Self::new(self.w * s, self.x * s, self.y * s, self.z * s)
    }

    /// Computes the multiplicative inverse, `conjugate / norm²`.
    ///
    /// For a unit quaternion this equals the conjugate. A zero quaternion has no
    /// inverse; its components come out as NaN. See [`Quaternion::try_inverse`].
    #[inline]
    pub fn inverse(&self) -> Self {
        let d = self.norm_squared();
        Self::new(self.w / d, -self.x / d, -self.y / d, -self.z / d)
    }

    /// Like [`Quaternion::inverse`], but fails on a zero quaternion or a
    /// non-finite result.
    pub fn try_inverse(&self) -> Result<Self, MathError> {
        if self.norm_squared() == 0.0 {
            log::debug!("Refusing to invert zero-magnitude quaternion {self}.");
            return Err(MathError::ZeroMagnitude(*self));
        }
        self.inverse().finite_or("inverse")
    }

    /// Left division: `self.inverse() * other`.
    ///
    /// The operand order matters because the product is not commutative; this
    /// is *not* `self * other.inverse()`. For that reason the `/` operator is
    /// intentionally not implemented.
    #[inline]
    pub fn divide(&self, other: Self) -> Self {
        self.inverse() * other
    }

    /// Like [`Quaternion::divide`], but fails when `self` has no inverse or the
    /// result is not finite.
    pub fn try_divide(&self, other: Self) -> Result<Self, MathError> {
        let inverse = self.try_inverse()?;
        (inverse * other).finite_or("divide")
    }

    /// The rotation angle in radians, `2 * acos(w)`. Only meaningful for unit quaternions.
    #[inline]
    pub fn angle(&self) -> f32 {
        2.0 * self.w.acos()
    }

    /// The unit rotation axis, `(x, y, z) / sin(acos(w))`.
    ///
    /// Only meaningful for unit quaternions. The identity rotation has no axis
    /// and yields NaN components.
    #[inline]
    pub fn axis(&self) -> Vec3 {
        self.vector() / self.w.acos().sin()
    }

    /// Rotates a 3D vector by this quaternion, which must be of unit length.
    pub fn rotate_vec3(&self, v: Vec3) -> Vec3 {
        let u = self.vector();
        let t = 2.0 * u.cross(v);
        v + self.w * t + u.cross(t)
    }

    /// Converts the quaternion into a 4x4 homogeneous rotation matrix.
    ///
    /// The result is only a rotation when `self` has unit length; other inputs
    /// produce a non-orthonormal matrix without any diagnostic. Translation is
    /// zero and the homogeneous corner is `1`.
    pub fn to_mat4(&self) -> Mat4 {
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);
        let x2 = x + x;
        let y2 = y + y;
        let z2 = z + z;
        let xx = x * x2;
        let xy = x * y2;
        let xz = x * z2;
        let yy = y * y2;
        let yz = y * z2;
        let zz = z * z2;
        let wx = w * x2;
        let wy = w * y2;
        let wz = w * z2;

        // Rows here are the columns of the rotation; the transpose puts them in place.
        #[rustfmt::skip]
        let transposed = Mat4::new(
            1.0 - (yy + zz), xy + wz, xz - wy, 0.0,
            xy - wz, 1.0 - (xx + zz), yz + wx, 0.0,
            xz + wy, yz - wx, 1.0 - (xx + yy), 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
        transposed.transpose()
    }

    /// Performs a spherical linear interpolation from `self` towards `to`.
    ///
    /// Follows the shorter of the two arcs: when the inputs lie in opposite
    /// hemispheres `to` is negated, since `q` and `-q` encode the same rotation.
    /// When `1 - cos(omega)` is at most [`QUAT_DELTA`] the inputs are nearly
    /// identical and a plain linear blend is used instead.
    ///
    /// `t` is not clamped; values outside `[0, 1]` extrapolate along the arc.
    /// The result is not renormalized.
    pub fn slerp(&self, to: Self, t: f32) -> Self {
        let mut cosom = self.dot(to);
        let to1 = if cosom < 0.0 {
            cosom = -cosom;
            -to
        } else {
            to
        };

        let (scale0, scale1) = if (1.0 - cosom) > QUAT_DELTA {
            let omega = cosom.acos();
            let sinom = omega.sin();
            (
                ((1.0 - t) * omega).sin() / sinom,
                (t * omega).sin() / sinom,
            )
        } else {
            log::trace!("Slerp inputs nearly identical (cos = {cosom}), blending linearly.");
            (1.0 - t, t)
        };

        self.scale(scale0) + to1.scale(scale1)
    }

    /// Like [`Quaternion::slerp`], but fails when the result is not finite.
    pub fn try_slerp(&self, to: Self, t: f32) -> Result<Self, MathError> {
        self.slerp(to, t).finite_or("slerp")
    }

    /// Returns `true` if no component is NaN or infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.w.is_finite() && self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Passes the quaternion through if it is finite, fails otherwise.
    pub fn ensure_finite(self) -> Result<Self, MathError> {
        self.finite_or("ensure_finite")
    }

    fn finite_or(self, operation: &'static str) -> Result<Self, MathError> {
        if self.is_finite() {
            Ok(self)
        } else {
            log::debug!("{operation} produced non-finite quaternion {self}.");
            Err(MathError::NonFinite {
                operation,
                value: self,
            })
        }
    }

    /// Compares component-wise with a caller-supplied tolerance.
    pub fn equals_with_epsilon(&self, other: &Self, epsilon: f32) -> bool {
        approx_eq_eps(self.w, other.w, epsilon)
            && approx_eq_eps(self.x, other.x, epsilon)
            && approx_eq_eps(self.y, other.y, epsilon)
            && approx_eq_eps(self.z, other.z, epsilon)
    }
}

// --- Trait Implementations ---

impl Default for Quaternion {
    /// Returns the identity quaternion, representing no rotation.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl PartialEq for Quaternion {
    /// Tolerance equality: every component pair differs by at most [`QUAT_EPSILON`].
    fn eq(&self, other: &Self) -> bool {
        self.equals_with_epsilon(other, QUAT_EPSILON)
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}i + {}j + {}k", self.w, self.x, self.y, self.z)
    }
}

impl AbsDiffEq for Quaternion {
    type Epsilon = f32;

    fn default_epsilon() -> Self::Epsilon {
        QUAT_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.equals_with_epsilon(other, epsilon)
    }
}

impl RelativeEq for Quaternion {
    fn default_max_relative() -> Self::Epsilon {
        f32::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl UlpsEq for Quaternion {
    fn default_max_ulps() -> u32 {
        f32::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

// --- Operator Overloads ---

impl Add<Quaternion> for Quaternion {
    type Output = Self;
    /// Adds two quaternions component-wise. The sum of two unit quaternions is
    /// generally not a unit quaternion.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.w + rhs.w,
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
        )
    }
}

impl Sub<Quaternion> for Quaternion {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(
            self.w - rhs.w,
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
        )
    }
}

impl Mul<Quaternion> for Quaternion {
    type Output = Self;
    /// Combines two rotations using the Hamilton product. Not commutative:
    /// `a * b` applies `b` first, then `a`.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        )
    }
}

impl Mul<f32> for Quaternion {
    type Output = Self;
    /// Scales all components of the quaternion by a scalar.
    #[inline]
    fn mul(self, scalar: f32) -> Self::Output {
        self.scale(scalar)
    }
}

impl Mul<Vec3> for Quaternion {
    type Output = Vec3;
    /// Rotates a `Vec3` by the normalized form of this quaternion.
    #[inline]
    fn mul(self, rhs: Vec3) -> Self::Output {
        self.normalize().rotate_vec3(rhs)
    }
}

impl Neg for Quaternion {
    type Output = Self;
    /// Negates all components. The result encodes the same rotation.
    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}
