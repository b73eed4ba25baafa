use std::ops::*;
use std::str::FromStr;
use rand::Rng;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

// in the same order as the spatial rows of an event
pub const AXES: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

// vector representing direction and length, where length can be any float
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for Vec3 {
    fn default() -> Self {
	Vec3::new(0.0, 0.0, 0.0)
    }
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
	Vec3 {x, y, z}
    }

    pub fn length_squared(self) -> f64 {
	self.dot(self)
    }

    pub fn length(self) -> f64 {
	self.length_squared().sqrt()
    }

    pub fn normalized(self) -> Self {
	self / self.length()
    }

    pub fn dot(self, other: Self) -> f64 {
	self.x*other.x + self.y*other.y + self.z*other.z
    }

    pub fn is_finite(self) -> bool {
	self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub fn to_array(self) -> [f64; 3] {
	[self.x, self.y, self.z]
    }

    // components in [-1, 1)
    pub fn random() -> Self {
	let mut rng = rand::thread_rng();
	Vec3::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0))
    }

    pub fn random_unit() -> Self {
	loop {
	    let vector = Self::random();
	    if vector.length_squared() <= 1.0 && vector.length_squared() > 1e-160 {
		return vector.normalized();
	    }
	}
    }

    // largest absolute difference over the components
    pub fn max_deviation(self, other: Self) -> f64 {
	let d = self - other;
	d.x.abs().max(d.y.abs()).max(d.z.abs())
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
	Vec3::new(x, y, z)
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(vector: Vec3) -> Self {
	vector.to_array()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseVec3Error {
    #[error("expected three comma separated components, found {0}")]
    Count(usize),

    #[error("invalid component '{0}'")]
    Component(String),
}

// "x,y,z", whitespace around the components is ignored
impl FromStr for Vec3 {
    type Err = ParseVec3Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
	let parts: Vec<&str> = s.split(',').map(str::trim).collect();
	if parts.len() != 3 {
	    return Err(ParseVec3Error::Count(parts.len()));
	}

	let mut result = Vec3::default();
	for (axis, part) in AXES.into_iter().zip(parts) {
	    result[axis] = part.parse::<f64>()
		.map_err(|_| ParseVec3Error::Component(part.to_string()))?;
	}
	Ok(result)
    }
}

// implementing numeric traits, from ray tracing in one weekend
impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self {
	Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl Add<Vec3> for Vec3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
	Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign<Vec3> for Vec3 {
    fn add_assign(&mut self, other: Self) {
	*self = *self + other;
    }
}

impl Sub<Vec3> for Vec3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
	self + -other
    }
}

impl SubAssign<Vec3> for Vec3 {
    fn sub_assign(&mut self, other: Self) {
	*self = *self - other;
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, other: f64) -> Self {
	Vec3::new(self.x * other, self.y * other, self.z * other)
    }
}

impl MulAssign<f64> for Vec3 {
    fn mul_assign(&mut self, other: f64) {
	*self = *self * other;
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;

    fn mul(self, other: Vec3) -> Vec3 {
	other * self
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;

    fn div(self, other: f64) -> Self {
	self * (1.0 / other)
    }
}

impl DivAssign<f64> for Vec3 {
    fn div_assign(&mut self, other: f64) {
	*self = *self / other;
    }
}

// allows the Axis enum to be used to choose an axis
impl Index<Axis> for Vec3 {
    type Output = f64;

    fn index(&self, index: Axis) -> &f64 {
	match index {
	    Axis::X => &self.x,
	    Axis::Y => &self.y,
	    Axis::Z => &self.z,
	}
    }
}

impl IndexMut<Axis> for Vec3 {
    fn index_mut(&mut self, index: Axis) -> &mut f64 {
	match index {
	    Axis::X => &mut self.x,
	    Axis::Y => &mut self.y,
	    Axis::Z => &mut self.z,
	}
    }
}

// type aliases
pub type Point3 = Vec3;
pub type Velocity = Vec3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_components() {
	let v: Vec3 = " 0.5, -1,2e-1 ".parse().unwrap();
	assert_eq!(v, Vec3::new(0.5, -1.0, 0.2));
    }

    #[test]
    fn rejects_wrong_count() {
	assert_eq!("1,2".parse::<Vec3>(), Err(ParseVec3Error::Count(2)));
	assert_eq!("1,2,3,4".parse::<Vec3>(), Err(ParseVec3Error::Count(4)));
    }

    #[test]
    fn rejects_bad_component() {
	assert_eq!("1,x,3".parse::<Vec3>(), Err(ParseVec3Error::Component("x".to_string())));
    }

    #[test]
    fn converts_arrays() {
	let v = Vec3::from([1.0, -2.0, 3.5]);
	assert_eq!(v, Vec3::new(1.0, -2.0, 3.5));
	assert_eq!(<[f64; 3]>::from(v), [1.0, -2.0, 3.5]);
    }

    #[test]
    fn random_unit_has_unit_length() {
	for _ in 0..100 {
	    assert!((Vec3::random_unit().length() - 1.0).abs() < 1e-12);
	}
    }
}
