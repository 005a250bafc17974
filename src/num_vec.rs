use core::ops::{Add, Sub, Mul, Div, Neg, Index};
use std::fmt;
use serde::{Deserialize, Serialize};




/**
 * A real vector with exactly three components. In 2D mode the z component is
 * carried as zero. Values are never mutated in place: every arithmetic
 * operation yields a new vector.
 */
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    data: [f64; 3]
}




// ============================================================================
impl Vector3 {

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { data: [x, y, z] }
    }

    /// A vector in the xy-plane.
    pub const fn planar(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn x(&self) -> f64 {
        self.data[0]
    }

    pub fn y(&self) -> f64 {
        self.data[1]
    }

    pub fn z(&self) -> f64 {
        self.data[2]
    }

    pub fn as_array(&self) -> [f64; 3] {
        self.data
    }

    /// Return a copy of this vector with the component on the given axis
    /// replaced.
    pub fn with_component(&self, axis: usize, value: f64) -> Self {
        let mut data = self.data;
        data[axis] = value;
        Self { data }
    }

    /// True if every component is exactly zero. This is the sentinel value
    /// for an undefined direction.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&x| x == 0.0)
    }

    pub fn dot(&self, other: &Vector3) -> f64 {
        dot(self, other)
    }

    pub fn magnitude(&self) -> f64 {
        magnitude(self)
    }

    pub fn normalize(&self) -> Vector3 {
        normalize(self)
    }

    pub fn project_onto(&self, onto: &Vector3) -> Vector3 {
        project(self, onto)
    }
}




// ============================================================================
pub fn add(a: &Vector3, b: &Vector3) -> Vector3 {
    *a + *b
}

pub fn subtract(a: &Vector3, b: &Vector3) -> Vector3 {
    *a - *b
}

pub fn scale(v: &Vector3, s: f64) -> Vector3 {
    *v * s
}

pub fn dot(a: &Vector3, b: &Vector3) -> f64 {
    a.data.iter().zip(b.data.iter()).map(|(x, y)| x * y).sum()
}

/// The Euclidean length of `v`. When the squared length under- or overflows,
/// the components are first scaled by the largest of them.
pub fn magnitude(v: &Vector3) -> f64 {
    let d = dot(v, v);

    if d.is_normal() {
        return d.sqrt();
    }
    let m = max_abs(v);

    if m == 0.0 || !m.is_finite() {
        m
    } else {
        let u = *v / m;
        m * dot(&u, &u).sqrt()
    }
}

fn max_abs(v: &Vector3) -> f64 {
    v.data.iter().fold(0.0, |m: f64, x| m.max(x.abs()))
}

/// Scale `v` to unit length. A zero-length vector yields the zero vector
/// rather than a division by zero.
pub fn normalize(v: &Vector3) -> Vector3 {
    let m = magnitude(v);

    if m == 0.0 {
        Vector3::zeros()
    } else {
        *v / m
    }
}

/// The component of `v` parallel to `onto`. Projecting onto the zero vector
/// contributes nothing.
pub fn project(v: &Vector3, onto: &Vector3) -> Vector3 {
    let denom = dot(onto, onto);

    if denom.is_normal() {
        return scale(onto, dot(v, onto) / denom);
    }
    let s = max_abs(onto);

    if s == 0.0 || !s.is_finite() {
        Vector3::zeros()
    } else {
        let unit = *onto / s;
        scale(&unit, dot(v, &unit) / dot(&unit, &unit))
    }
}




// ============================================================================
impl Add<Vector3> for Vector3 {
    type Output = Vector3;

    fn add(self, other: Vector3) -> Self::Output {
        let mut data = [0.0; 3];

        for (i, x) in data.iter_mut().enumerate() {
            *x = self[i] + other[i]
        }
        Self::Output { data }
    }
}

impl Sub<Vector3> for Vector3 {
    type Output = Vector3;

    fn sub(self, other: Vector3) -> Self::Output {
        let mut data = [0.0; 3];

        for (i, x) in data.iter_mut().enumerate() {
            *x = self[i] - other[i]
        }
        Self::Output { data }
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, other: f64) -> Self::Output {
        let mut data = [0.0; 3];

        for (i, x) in data.iter_mut().enumerate() {
            *x = self[i] * other
        }
        Self::Output { data }
    }
}

impl Div<f64> for Vector3 {
    type Output = Vector3;

    fn div(self, other: f64) -> Self::Output {
        let mut data = [0.0; 3];

        for (i, x) in data.iter_mut().enumerate() {
            *x = self[i] / other
        }
        Self::Output { data }
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Self::Output {
        self * -1.0
    }
}




// ============================================================================
impl Index<usize> for Vector3 {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(data: [f64; 3]) -> Self {
        Self { data }
    }
}




// ============================================================================
impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "[{:.*}, {:.*}, {:.*}]", p, self.x(), p, self.y(), p, self.z()),
            None => write!(f, "[{}, {}, {}]", self.x(), self.y(), self.z()),
        }
    }
}
