use std::{
    fmt,
    ops::{
        Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg,
        Sub, SubAssign,
    },
};

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Shorthand constructor for `IntVec2`.
pub const fn v2(x: i32, y: i32) -> IntVec2 {
    IntVec2::new(x, y)
}

/// Integer grid coordinate or displacement.
///
/// A plain value type, every operation returns a new vector. Floating-point
/// inputs are truncated toward zero when converted in.
#[derive(
    Copy,
    Clone,
    Default,
    Eq,
    PartialEq,
    Hash,
    Ord,
    PartialOrd,
    Debug,
    Serialize,
    Deserialize,
)]
pub struct IntVec2 {
    pub x: i32,
    pub y: i32,
}

impl IntVec2 {
    pub const ZERO: IntVec2 = v2(0, 0);
    pub const ONE: IntVec2 = v2(1, 1);

    pub const fn new(x: i32, y: i32) -> Self {
        IntVec2 { x, y }
    }

    /// Build from floating-point components, truncating toward zero.
    pub fn from_f32(x: f32, y: f32) -> Self {
        IntVec2::new(x as i32, y as i32)
    }

    /// Component by index, 0 is x and 1 is y.
    pub fn get(&self, i: usize) -> Result<i32> {
        match i {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(Error::IndexOutOfRange(i)),
        }
    }

    /// Set component by index, 0 is x and 1 is y.
    pub fn set(&mut self, i: usize, value: i32) -> Result<()> {
        match i {
            0 => self.x = value,
            1 => self.y = value,
            _ => return Err(Error::IndexOutOfRange(i)),
        }
        Ok(())
    }

    /// Component-wise division that reports a zero divisor instead of
    /// panicking.
    pub fn checked_div(self, rhs: IntVec2) -> Result<IntVec2> {
        if rhs.x == 0 || rhs.y == 0 {
            return Err(Error::DivideByZero);
        }
        Ok(v2(self.x / rhs.x, self.y / rhs.y))
    }

    pub fn checked_div_scalar(self, rhs: i32) -> Result<IntVec2> {
        self.checked_div(v2(rhs, rhs))
    }

    /// Clamp each component between the matching components of `min` and
    /// `max`.
    ///
    /// Never panics, if a lower bound exceeds the upper one the upper bound
    /// wins.
    pub fn clamp(self, min: IntVec2, max: IntVec2) -> IntVec2 {
        self.ivec().max(min.ivec()).min(max.ivec()).into()
    }

    /// Clamp both components to the same range.
    pub fn clamp_scalar(self, min: i32, max: i32) -> IntVec2 {
        self.clamp(v2(min, min), v2(max, max))
    }

    fn ivec(self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    pub fn signum(self) -> IntVec2 {
        self.ivec().signum().into()
    }

    pub fn abs(self) -> IntVec2 {
        self.ivec().abs().into()
    }

    /// Distance in taxicab metric.
    pub fn manhattan_distance(self, other: IntVec2) -> i32 {
        let d = (other - self).abs();
        d.x + d.y
    }

    /// Straight-line distance rounded down to an integer.
    ///
    /// Saturates at `i32::MAX` for points further apart than that.
    pub fn euclidean_distance(self, other: IntVec2) -> i32 {
        let (dx, dy) = (
            other.x as f64 - self.x as f64,
            other.y as f64 - self.y as f64,
        );
        dx.hypot(dy).floor() as i32
    }

    /// Linear interpolation towards `other`, truncated per axis.
    ///
    /// ```
    /// # use gridkit::v2;
    /// assert_eq!(v2(0, 0).lerp(v2(10, -10), 0.25), v2(2, -2));
    /// assert_eq!(v2(3, 4).lerp(v2(10, -10), 1.0), v2(10, -10));
    /// ```
    pub fn lerp(self, other: IntVec2, t: f32) -> IntVec2 {
        let t = t as f64;
        // Float math throughout, the difference of two i32s may not fit in
        // one.
        let axis = |a: i32, b: i32| {
            let (a, b) = (a as f64, b as f64);
            (a + (b - a) * t) as i32
        };
        v2(axis(self.x, other.x), axis(self.y, other.y))
    }

    /// Rotate around `origin` by an angle in radians.
    ///
    /// The rotation goes from the x axis towards the y axis, which is
    /// clockwise in screen coordinates. The result is rounded to the nearest
    /// cell, components that land outside the `i32` range saturate.
    ///
    /// ```
    /// # use gridkit::v2;
    /// use std::f32::consts::PI;
    ///
    /// assert_eq!(v2(3, 1).rotate_around(v2(1, 1), PI / 2.0), v2(1, 3));
    /// ```
    pub fn rotate_around(self, origin: IntVec2, radians: f32) -> IntVec2 {
        let (sin, cos) = (radians as f64).sin_cos();
        let (ox, oy) = (origin.x as f64, origin.y as f64);
        let (dx, dy) = (self.x as f64 - ox, self.y as f64 - oy);

        v2(
            (ox + (dx * cos - dy * sin).round()) as i32,
            (oy + (dx * sin + dy * cos).round()) as i32,
        )
    }
}

impl fmt::Display for IntVec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for IntVec2 {
    fn from((x, y): (i32, i32)) -> Self {
        v2(x, y)
    }
}

impl From<[i32; 2]> for IntVec2 {
    fn from([x, y]: [i32; 2]) -> Self {
        v2(x, y)
    }
}

impl From<IntVec2> for [i32; 2] {
    fn from(v: IntVec2) -> Self {
        [v.x, v.y]
    }
}

impl From<IVec2> for IntVec2 {
    fn from(v: IVec2) -> Self {
        v2(v.x, v.y)
    }
}

impl From<IntVec2> for IVec2 {
    fn from(v: IntVec2) -> Self {
        v.ivec()
    }
}

impl From<Vec2> for IntVec2 {
    fn from(v: Vec2) -> Self {
        IntVec2::from_f32(v.x, v.y)
    }
}

impl From<IntVec2> for Vec2 {
    fn from(v: IntVec2) -> Self {
        Vec2::new(v.x as f32, v.y as f32)
    }
}

impl Index<usize> for IntVec2 {
    type Output = i32;

    fn index(&self, i: usize) -> &i32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("{}", Error::IndexOutOfRange(i)),
        }
    }
}

impl IndexMut<usize> for IntVec2 {
    fn index_mut(&mut self, i: usize) -> &mut i32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("{}", Error::IndexOutOfRange(i)),
        }
    }
}

impl Neg for IntVec2 {
    type Output = IntVec2;

    fn neg(self) -> IntVec2 {
        (-self.ivec()).into()
    }
}

// Component-wise operators against both vectors and scalars, plus their
// assigning forms, computed by glam.
macro_rules! component_op {
    (
        $trait:ident,
        $method:ident,
        $assign_trait:ident,
        $assign_method:ident,
        $op:tt
    ) => {
        impl $trait for IntVec2 {
            type Output = IntVec2;

            fn $method(self, rhs: IntVec2) -> IntVec2 {
                (self.ivec() $op rhs.ivec()).into()
            }
        }

        impl $trait<i32> for IntVec2 {
            type Output = IntVec2;

            fn $method(self, rhs: i32) -> IntVec2 {
                (self.ivec() $op rhs).into()
            }
        }

        impl $assign_trait for IntVec2 {
            fn $assign_method(&mut self, rhs: IntVec2) {
                *self = *self $op rhs;
            }
        }

        impl $assign_trait<i32> for IntVec2 {
            fn $assign_method(&mut self, rhs: i32) {
                *self = *self $op rhs;
            }
        }
    };
}

component_op!(Add, add, AddAssign, add_assign, +);
component_op!(Sub, sub, SubAssign, sub_assign, -);
component_op!(Mul, mul, MulAssign, mul_assign, *);
component_op!(Div, div, DivAssign, div_assign, /);

#[cfg(test)]
impl quickcheck::Arbitrary for IntVec2 {
    fn arbitrary(g: &mut quickcheck::Gen) -> IntVec2 {
        // Keep components small enough that sums and products stay in range.
        v2(
            <i16 as quickcheck::Arbitrary>::arbitrary(g) as i32,
            <i16 as quickcheck::Arbitrary>::arbitrary(g) as i32,
        )
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(
            quickcheck::Arbitrary::shrink(&(self.x, self.y))
                .map(|(x, y)| v2(x, y)),
        )
    }
}
