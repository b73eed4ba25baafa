use ndarray::{arr1, Array1, Array2};
use std::ops::*;
use crate::vec3::*;

// a point in spacetime, time first then the position; c = 1
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Event {
    pub time: f64,
    pub position: Point3,
}

impl Event {
    pub fn new(time: f64, position: Point3) -> Self {
	Event {
	    time,
	    position,
	}
    }

    // purely spatial event, for frame offsets
    pub fn at(position: Point3) -> Self {
	Event::new(0.0, position)
    }

    pub fn to_array(self) -> Array1<f64> {
	arr1(&[self.time, self.position.x, self.position.y, self.position.z])
    }

    pub fn from_array(values: &Array1<f64>) -> Self {
	Event::new(values[0], Point3::new(values[1], values[2], values[3]))
    }
}

impl Add<Event> for Event {
    type Output = Self;

    fn add(self, other: Self) -> Self {
	Event::new(self.time + other.time, self.position + other.position)
    }
}

impl Sub<Event> for Event {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
	Event::new(self.time - other.time, self.position - other.position)
    }
}

// 4x4 matrix acting on events, row and column 0 are time
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix4(Array2<f64>);

impl Matrix4 {
    pub fn identity() -> Self {
	Matrix4(Array2::eye(4))
    }

    pub fn from_fn<F: FnMut(usize, usize) -> f64>(mut f: F) -> Self {
	Matrix4(Array2::from_shape_fn((4, 4), |(i, j)| f(i, j)))
    }

    pub fn get(&self, row: usize, column: usize) -> f64 {
	self.0[[row, column]]
    }

    pub fn is_finite(&self) -> bool {
	self.0.iter().all(|value| value.is_finite())
    }

    // largest absolute difference over all entries
    pub fn max_deviation(&self, other: &Matrix4) -> f64 {
	self.0.iter()
	    .zip(other.0.iter())
	    .map(|(a, b)| (a - b).abs())
	    .fold(0.0, f64::max)
    }

    // the six 2x2 minors of rows 0,1 and of rows 2,3, shared by det and inverse
    fn minors(&self) -> ([f64; 6], [f64; 6]) {
	let m = |i, j| self.0[[i, j]];
	let s = [
	    m(0, 0)*m(1, 1) - m(1, 0)*m(0, 1),
	    m(0, 0)*m(1, 2) - m(1, 0)*m(0, 2),
	    m(0, 0)*m(1, 3) - m(1, 0)*m(0, 3),
	    m(0, 1)*m(1, 2) - m(1, 1)*m(0, 2),
	    m(0, 1)*m(1, 3) - m(1, 1)*m(0, 3),
	    m(0, 2)*m(1, 3) - m(1, 2)*m(0, 3),
	];
	let c = [
	    m(2, 0)*m(3, 1) - m(3, 0)*m(2, 1),
	    m(2, 0)*m(3, 2) - m(3, 0)*m(2, 2),
	    m(2, 0)*m(3, 3) - m(3, 0)*m(2, 3),
	    m(2, 1)*m(3, 2) - m(3, 1)*m(2, 2),
	    m(2, 1)*m(3, 3) - m(3, 1)*m(2, 3),
	    m(2, 2)*m(3, 3) - m(3, 2)*m(2, 3),
	];
	(s, c)
    }

    pub fn determinant(&self) -> f64 {
	let (s, c) = self.minors();
	s[0]*c[5] - s[1]*c[4] + s[2]*c[3] + s[3]*c[2] - s[4]*c[1] + s[5]*c[0]
    }

    // closed form inverse by the adjugate (Laplace expansion over 2x2 minors)
    // None when the matrix is numerically singular
    pub fn inverse(&self) -> Option<Matrix4> {
	let (s, c) = self.minors();
	let det = s[0]*c[5] - s[1]*c[4] + s[2]*c[3] + s[3]*c[2] - s[4]*c[1] + s[5]*c[0];
	if !det.is_finite() || det.abs() < 1e-300 {
	    return None;
	}
	let inv = 1.0 / det;
	let m = |i, j| self.0[[i, j]];

	let mut result = Array2::zeros((4, 4));
	result[[0, 0]] = ( m(1, 1)*c[5] - m(1, 2)*c[4] + m(1, 3)*c[3]) * inv;
	result[[0, 1]] = (-m(0, 1)*c[5] + m(0, 2)*c[4] - m(0, 3)*c[3]) * inv;
	result[[0, 2]] = ( m(3, 1)*s[5] - m(3, 2)*s[4] + m(3, 3)*s[3]) * inv;
	result[[0, 3]] = (-m(2, 1)*s[5] + m(2, 2)*s[4] - m(2, 3)*s[3]) * inv;

	result[[1, 0]] = (-m(1, 0)*c[5] + m(1, 2)*c[2] - m(1, 3)*c[1]) * inv;
	result[[1, 1]] = ( m(0, 0)*c[5] - m(0, 2)*c[2] + m(0, 3)*c[1]) * inv;
	result[[1, 2]] = (-m(3, 0)*s[5] + m(3, 2)*s[2] - m(3, 3)*s[1]) * inv;
	result[[1, 3]] = ( m(2, 0)*s[5] - m(2, 2)*s[2] + m(2, 3)*s[1]) * inv;

	result[[2, 0]] = ( m(1, 0)*c[4] - m(1, 1)*c[2] + m(1, 3)*c[0]) * inv;
	result[[2, 1]] = (-m(0, 0)*c[4] + m(0, 1)*c[2] - m(0, 3)*c[0]) * inv;
	result[[2, 2]] = ( m(3, 0)*s[4] - m(3, 1)*s[2] + m(3, 3)*s[0]) * inv;
	result[[2, 3]] = (-m(2, 0)*s[4] + m(2, 1)*s[2] - m(2, 3)*s[0]) * inv;

	result[[3, 0]] = (-m(1, 0)*c[3] + m(1, 1)*c[1] - m(1, 2)*c[0]) * inv;
	result[[3, 1]] = ( m(0, 0)*c[3] - m(0, 1)*c[1] + m(0, 2)*c[0]) * inv;
	result[[3, 2]] = (-m(3, 0)*s[3] + m(3, 1)*s[1] - m(3, 2)*s[0]) * inv;
	result[[3, 3]] = ( m(2, 0)*s[3] - m(2, 1)*s[1] + m(2, 2)*s[0]) * inv;

	let result = Matrix4(result);
	if result.is_finite() {
	    Some(result)
	} else {
	    None
	}
    }
}

impl Mul<Event> for &Matrix4 {
    type Output = Event;

    fn mul(self, event: Event) -> Event {
	Event::from_array(&self.0.dot(&event.to_array()))
    }
}

impl Mul<&Matrix4> for &Matrix4 {
    type Output = Matrix4;

    fn mul(self, other: &Matrix4) -> Matrix4 {
	Matrix4(self.0.dot(&other.0))
    }
}
