// src/numerics/types/quaternion.rs
// Rotation quaternions. (x, y, z) is the vector part, w the scalar part.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};

use super::matrix::Matrix3x3;
use super::traits::FloatingPoint;
use super::vector::{get_orthogonal, Vector3};
use crate::numerics::error::{NumericsError, Result};

/// Quaternion `x*i + y*j + z*k + w`.
///
/// `Default` is the identity rotation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Quaternion<T = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

pub type Quaternionf = Quaternion<f32>;
pub type Quaterniond = Quaternion<f64>;

// acos with the argument pulled back into [-1, 1] against rounding drift
fn clamped_acos<T: FloatingPoint>(value: T) -> T {
    let clamped = if value > T::ONE {
        T::ONE
    } else if value < -T::ONE {
        -T::ONE
    } else {
        value
    };
    clamped.acos()
}

impl<T: FloatingPoint> Default for Quaternion<T> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: FloatingPoint> Quaternion<T> {
    pub const IDENTITY: Self = Self {
        x: T::ZERO,
        y: T::ZERO,
        z: T::ZERO,
        w: T::ONE,
    };

    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Rotation of `angle` radians about `axis`. The axis need not be unit
    /// length, but must not be zero.
    pub fn from_axis_angle(axis: &Vector3<T>, angle: T) -> Result<Self> {
        let mut q = Self::IDENTITY;
        q.set_rotation(axis, angle)?;
        Ok(q)
    }

    /// Sets this quaternion to a rotation of `angle` radians about `axis`.
    /// On error the quaternion is left unchanged.
    pub fn set_rotation(&mut self, axis: &Vector3<T>, angle: T) -> Result<&mut Self> {
        let d = axis.length();
        if d == T::ZERO {
            return Err(NumericsError::ZeroLengthAxis);
        }
        let half = angle * T::ONE_HALF;
        let s = half.sin() / d;
        self.x = axis.x * s;
        self.y = axis.y * s;
        self.z = axis.z * s;
        self.w = half.cos();
        Ok(self)
    }

    /// Yaw about Y, pitch about X, roll about Z.
    pub fn from_euler(yaw: T, pitch: T, roll: T) -> Self {
        let mut q = Self::IDENTITY;
        q.set_euler(yaw, pitch, roll);
        q
    }

    pub fn set_euler(&mut self, yaw: T, pitch: T, roll: T) -> &mut Self {
        let (sin_yaw, cos_yaw) = half_sin_cos(yaw);
        let (sin_pitch, cos_pitch) = half_sin_cos(pitch);
        let (sin_roll, cos_roll) = half_sin_cos(roll);

        self.x = cos_roll * sin_pitch * cos_yaw + sin_roll * cos_pitch * sin_yaw;
        self.y = cos_roll * cos_pitch * sin_yaw - sin_roll * sin_pitch * cos_yaw;
        self.z = sin_roll * cos_pitch * cos_yaw - cos_roll * sin_pitch * sin_yaw;
        self.w = cos_roll * cos_pitch * cos_yaw + sin_roll * sin_pitch * sin_yaw;
        self
    }

    /// Yaw about Z, pitch about Y, roll about X.
    pub fn from_euler_zyx(yaw_z: T, pitch_y: T, roll_x: T) -> Self {
        let mut q = Self::IDENTITY;
        q.set_euler_zyx(yaw_z, pitch_y, roll_x);
        q
    }

    pub fn set_euler_zyx(&mut self, yaw_z: T, pitch_y: T, roll_x: T) -> &mut Self {
        let (sin_yaw, cos_yaw) = half_sin_cos(yaw_z);
        let (sin_pitch, cos_pitch) = half_sin_cos(pitch_y);
        let (sin_roll, cos_roll) = half_sin_cos(roll_x);

        self.x = sin_roll * cos_pitch * cos_yaw - cos_roll * sin_pitch * sin_yaw;
        self.y = cos_roll * sin_pitch * cos_yaw + sin_roll * cos_pitch * sin_yaw;
        self.z = cos_roll * cos_pitch * sin_yaw - sin_roll * sin_pitch * cos_yaw;
        self.w = cos_roll * cos_pitch * cos_yaw + sin_roll * sin_pitch * sin_yaw;
        self
    }

    /// Decomposes into `(yaw_z, pitch_y, roll_x)`, the inverse of
    /// [`Quaternion::from_euler_zyx`].
    ///
    /// At pitch ±π/2 only the sum of yaw and roll is defined; roll is then
    /// reported as zero and the whole rotation folded into yaw.
    pub fn euler_zyx(&self) -> (T, T, T) {
        let Self { x, y, z, w } = *self;
        let sarg = -T::TWO * (x * z - w * y);
        let threshold = T::from_f64(0.99999);

        if sarg <= -threshold {
            tracing::trace!(sarg = sarg.to_f64(), "euler decomposition at pitch -pi/2");
            (T::TWO * x.atan2(-y), -T::FRAC_PI_2, T::ZERO)
        } else if sarg >= threshold {
            tracing::trace!(sarg = sarg.to_f64(), "euler decomposition at pitch +pi/2");
            (T::TWO * (-x).atan2(y), T::FRAC_PI_2, T::ZERO)
        } else {
            let (sqx, sqy, sqz, sqw) = (x * x, y * y, z * z, w * w);
            let pitch = sarg.asin();
            let roll = (T::TWO * (y * z + w * x)).atan2(sqw - sqx - sqy + sqz);
            let yaw = (T::TWO * (x * y + w * z)).atan2(sqw + sqx - sqy - sqz);
            (yaw, pitch, roll)
        }
    }

    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// Normalizes in place. Zero length is only caught by a debug assertion.
    pub fn normalize(&mut self) -> &mut Self {
        *self /= self.length();
        self
    }

    pub fn normalized(&self) -> Self {
        *self / self.length()
    }

    /// Normalizes in place only when the squared length exceeds machine
    /// epsilon; otherwise leaves the quaternion as is.
    pub fn safe_normalize(&mut self) -> &mut Self {
        if self.length_squared() > T::EPSILON {
            self.normalize();
        }
        self
    }

    /// Conjugate. Equals the inverse for unit quaternions.
    pub fn inverse(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    fn magnitude_with(&self, other: &Self) -> T {
        let s = (self.length_squared() * other.length_squared()).sqrt();
        debug_assert!(s != T::ZERO, "angle with a zero quaternion");
        s
    }

    /// Half of the rotation angle between `self` and `other`.
    pub fn angle(&self, other: &Self) -> T {
        let s = self.magnitude_with(other);
        clamped_acos(self.dot(other) / s)
    }

    /// Rotation angle between `self` and `other` along the shorter path.
    pub fn angle_shortest_path(&self, other: &Self) -> T {
        let s = self.magnitude_with(other);
        let d = self.dot(other);
        let d = if d < T::ZERO { self.dot(&-*other) } else { d };
        clamped_acos(d / s) * T::TWO
    }

    /// Angle of the represented rotation, in `[0, 2π]`.
    pub fn rotation_angle(&self) -> T {
        T::TWO * clamped_acos(self.w)
    }

    /// Angle of the represented rotation along the shorter path, in `[0, π]`.
    pub fn rotation_angle_shortest_path(&self) -> T {
        T::TWO * clamped_acos(self.w.abs())
    }

    /// Rotation axis. Falls back to the x axis when the rotation angle is
    /// too small for the axis to be recovered.
    pub fn axis(&self) -> Vector3<T> {
        let s_squared = T::ONE - self.w * self.w;
        if s_squared < T::from_f64(10.0) * T::EPSILON {
            tracing::trace!(
                s_squared = s_squared.to_f64(),
                "rotation axis undefined, using x axis"
            );
            return Vector3::UNIT_X;
        }
        let s = T::ONE / s_squared.sqrt();
        Vector3::new(self.x * s, self.y * s, self.z * s)
    }

    /// `qd` or `-qd`, whichever is closer to `self`.
    pub fn nearest(&self, qd: &Self) -> Self {
        let diff = *self - *qd;
        let sum = *self + *qd;
        if diff.dot(&diff) < sum.dot(&sum) {
            *qd
        } else {
            -*qd
        }
    }

    /// `qd` or `-qd`, whichever is farther from `self`.
    pub fn farthest(&self, qd: &Self) -> Self {
        let diff = *self - *qd;
        let sum = *self + *qd;
        if diff.dot(&diff) > sum.dot(&sum) {
            *qd
        } else {
            -*qd
        }
    }

    /// Spherical interpolation from `self` (t = 0) towards `other` (t = 1),
    /// taking the shorter arc.
    ///
    /// When the two are parallel within machine epsilon, `self` is returned
    /// unchanged for every `t`.
    pub fn slerp(&self, other: &Self, t: T) -> Self {
        let magnitude = (self.length_squared() * other.length_squared()).sqrt();
        debug_assert!(magnitude > T::ZERO, "slerp with a zero quaternion");

        let product = self.dot(other) / magnitude;
        let abs_product = product.abs();

        if abs_product < T::ONE - T::EPSILON {
            let theta = abs_product.acos();
            let d = theta.sin();
            let sign = if product < T::ZERO { -T::ONE } else { T::ONE };
            let s0 = ((T::ONE - t) * theta).sin() / d;
            let s1 = (sign * t * theta).sin() / d;
            *self * s0 + *other * s1
        } else {
            tracing::trace!(
                product = product.to_f64(),
                "slerp endpoints parallel, returning start"
            );
            *self
        }
    }

    /// Rotation matrix acting on column vectors, `m * v == rotate_quaternion(q, v)`
    /// for unit `q`.
    pub fn to_matrix3x3(&self) -> Matrix3x3<T> {
        let Self { x, y, z, w } = *self;
        let two = T::TWO;
        Matrix3x3::new([
            [
                T::ONE - two * (y * y + z * z),
                two * (x * y - w * z),
                two * (x * z + w * y),
            ],
            [
                two * (x * y + w * z),
                T::ONE - two * (x * x + z * z),
                two * (y * z - w * x),
            ],
            [
                two * (x * z - w * y),
                two * (y * z + w * x),
                T::ONE - two * (x * x + y * y),
            ],
        ])
    }
}

fn half_sin_cos<T: FloatingPoint>(angle: T) -> (T, T) {
    let half = angle * T::ONE_HALF;
    (half.sin(), half.cos())
}

impl<T: FloatingPoint> Add for Quaternion<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl<T: FloatingPoint> Sub for Quaternion<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl<T: FloatingPoint> AddAssign for Quaternion<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: FloatingPoint> SubAssign for Quaternion<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: FloatingPoint> Neg for Quaternion<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl<T: FloatingPoint> Mul<T> for Quaternion<T> {
    type Output = Self;

    fn mul(self, s: T) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }
}

impl<T: FloatingPoint> MulAssign<T> for Quaternion<T> {
    fn mul_assign(&mut self, s: T) {
        *self = *self * s;
    }
}

impl<T: FloatingPoint> Div<T> for Quaternion<T> {
    type Output = Self;

    fn div(self, s: T) -> Self {
        debug_assert!(s != T::ZERO, "quaternion divided by zero");
        self * (T::ONE / s)
    }
}

impl<T: FloatingPoint> DivAssign<T> for Quaternion<T> {
    fn div_assign(&mut self, s: T) {
        *self = *self / s;
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),+) => {
        $(
            impl Mul<Quaternion<$t>> for $t {
                type Output = Quaternion<$t>;

                fn mul(self, q: Quaternion<$t>) -> Quaternion<$t> {
                    q * self
                }
            }
        )+
    };
}

impl_scalar_lhs_mul!(f32, f64);

/// Hamilton product: applying `self * rhs` to a vector rotates by `rhs`
/// first, then by `self`.
impl<T: FloatingPoint> Mul for Quaternion<T> {
    type Output = Self;

    fn mul(self, q2: Self) -> Self {
        let q1 = self;
        Self::new(
            q1.w * q2.x + q1.x * q2.w + q1.y * q2.z - q1.z * q2.y,
            q1.w * q2.y + q1.y * q2.w + q1.z * q2.x - q1.x * q2.z,
            q1.w * q2.z + q1.z * q2.w + q1.x * q2.y - q1.y * q2.x,
            q1.w * q2.w - q1.x * q2.x - q1.y * q2.y - q1.z * q2.z,
        )
    }
}

impl<T: FloatingPoint> MulAssign for Quaternion<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Product with the pure quaternion `(v, 0)` on the right.
impl<T: FloatingPoint> Mul<Vector3<T>> for Quaternion<T> {
    type Output = Self;

    fn mul(self, v: Vector3<T>) -> Self {
        let q = self;
        Self::new(
            q.w * v.x + q.y * v.z - q.z * v.y,
            q.w * v.y + q.z * v.x - q.x * v.z,
            q.w * v.z + q.x * v.y - q.y * v.x,
            -q.x * v.x - q.y * v.y - q.z * v.z,
        )
    }
}

/// Product with the pure quaternion `(v, 0)` on the left.
impl<T: FloatingPoint> Mul<Quaternion<T>> for Vector3<T> {
    type Output = Quaternion<T>;

    fn mul(self, q: Quaternion<T>) -> Quaternion<T> {
        let v = self;
        Quaternion::new(
            v.x * q.w + v.y * q.z - v.z * q.y,
            v.y * q.w + v.z * q.x - v.x * q.z,
            v.z * q.w + v.x * q.y - v.y * q.x,
            -v.x * q.x - v.y * q.y - v.z * q.z,
        )
    }
}

impl<T: FloatingPoint> AbsDiffEq for Quaternion<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
            && self.w.abs_diff_eq(&other.w, epsilon)
    }
}

impl<T: FloatingPoint> RelativeEq for Quaternion<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
            && self.w.relative_eq(&other.w, epsilon, max_relative)
    }
}

#[inline]
pub fn dot<T: FloatingPoint>(q1: &Quaternion<T>, q2: &Quaternion<T>) -> T {
    q1.dot(q2)
}

#[inline]
pub fn length<T: FloatingPoint>(q: &Quaternion<T>) -> T {
    q.length()
}

/// Half-angle between two quaternions, see [`Quaternion::angle`].
#[inline]
pub fn angle_between<T: FloatingPoint>(q1: &Quaternion<T>, q2: &Quaternion<T>) -> T {
    q1.angle(q2)
}

#[inline]
pub fn inverse<T: FloatingPoint>(q: &Quaternion<T>) -> Quaternion<T> {
    q.inverse()
}

#[inline]
pub fn slerp<T: FloatingPoint>(q1: &Quaternion<T>, q2: &Quaternion<T>, t: T) -> Quaternion<T> {
    q1.slerp(q2, t)
}

/// Rotates `v` by the unit quaternion `rotation`.
pub fn rotate_quaternion<T: FloatingPoint>(rotation: &Quaternion<T>, v: &Vector3<T>) -> Vector3<T> {
    let mut q = *rotation * *v;
    q *= rotation.inverse();
    Vector3::new(q.x, q.y, q.z)
}

/// Shortest-arc rotation taking unit vector `v0` onto unit vector `v1`.
///
/// For opposite vectors every half-turn about an axis orthogonal to `v0`
/// qualifies; the axis from [`get_orthogonal`] is used. Inputs count as
/// opposite when `dot + 1` is within a few ulps of zero, since normalized
/// vectors and their negation rarely produce a dot of exactly -1.
pub fn shortest_arc_quat<T: FloatingPoint>(v0: &Vector3<T>, v1: &Vector3<T>) -> Quaternion<T> {
    let cross = v0.cross(v1);
    let dot = v0.dot(v1);

    if dot + T::ONE <= T::from_f64(8.0) * T::EPSILON {
        tracing::trace!(dot = dot.to_f64(), "antiparallel vectors, picking orthogonal axis");
        let (n, _) = get_orthogonal(v0);
        return Quaternion::new(n.x, n.y, n.z, T::ZERO);
    }

    let s = ((T::ONE + dot) * T::TWO).sqrt();
    let rs = T::ONE / s;
    Quaternion::new(cross.x * rs, cross.y * rs, cross.z * rs, s * T::ONE_HALF)
}

/// [`shortest_arc_quat`] on normalized copies of the inputs.
pub fn shortest_arc_quat_normalized<T: FloatingPoint>(
    v0: &Vector3<T>,
    v1: &Vector3<T>,
) -> Quaternion<T> {
    shortest_arc_quat(&v0.normalized(), &v1.normalized())
}
