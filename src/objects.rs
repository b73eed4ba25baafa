use crate::vec3::*;

// polygon mesh, vertices in the object's local frame
// faces index into vertices, counter-clockwise seen from outside
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Point3>,
    pub faces: Vec<Vec<usize>>,
}

impl Mesh {
    pub fn new(vertices: Vec<Point3>, faces: Vec<Vec<usize>>) -> Self {
	Mesh {
	    vertices,
	    faces,
	}
    }

    // surface of the cube [-1, 1]^3, every side split into subdivisions^2 quads
    // sides don't share their edge vertices
    pub fn cube(subdivisions: usize) -> Self {
	let sides = [
	    (Point3::new(1.0, -1.0, -1.0), Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 0.0, 2.0)),
	    (Point3::new(-1.0, -1.0, -1.0), Vec3::new(0.0, 0.0, 2.0), Vec3::new(0.0, 2.0, 0.0)),
	    (Point3::new(-1.0, 1.0, -1.0), Vec3::new(0.0, 0.0, 2.0), Vec3::new(2.0, 0.0, 0.0)),
	    (Point3::new(-1.0, -1.0, -1.0), Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 2.0)),
	    (Point3::new(-1.0, -1.0, 1.0), Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0)),
	    (Point3::new(-1.0, -1.0, -1.0), Vec3::new(0.0, 2.0, 0.0), Vec3::new(2.0, 0.0, 0.0)),
	];

	let mut mesh = Mesh::default();
	for (origin, u, v) in sides {
	    mesh.push_patch(origin, u, v, subdivisions);
	}
	mesh
    }

    // the square [-1, 1]^2 in the xy plane, facing +z
    pub fn grid(subdivisions: usize) -> Self {
	let mut mesh = Mesh::default();
	mesh.push_patch(Point3::new(-1.0, -1.0, 0.0), Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0), subdivisions);
	mesh
    }

    // parallelogram origin + s*u + t*v for s, t in [0, 1], normal along u x v
    fn push_patch(&mut self, origin: Point3, u: Vec3, v: Vec3, subdivisions: usize) {
	let n = subdivisions.max(1);
	let base = self.vertices.len();
	for j in 0..=n {
	    for i in 0..=n {
		let s = i as f64 / n as f64;
		let t = j as f64 / n as f64;
		self.vertices.push(origin + s * u + t * v);
	    }
	}

	let index = |i: usize, j: usize| base + j * (n + 1) + i;
	for j in 0..n {
	    for i in 0..n {
		self.faces.push(vec![index(i, j), index(i + 1, j), index(i + 1, j + 1), index(i, j + 1)]);
	    }
	}
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ObjectKind {
    Mesh(Mesh),
    Empty,
    Camera,
}

impl ObjectKind {
    pub fn name(&self) -> &'static str {
	match self {
	    ObjectKind::Mesh(_) => "mesh",
	    ObjectKind::Empty => "empty",
	    ObjectKind::Camera => "camera",
	}
    }
}

// something the host handed over, located in the global frame
#[derive(Clone, Debug, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub location: Point3,
    pub kind: ObjectKind,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, location: Point3, kind: ObjectKind) -> Self {
	SceneObject {
	    name: name.into(),
	    location,
	    kind,
	}
    }

    pub fn mesh(&self) -> Option<&Mesh> {
	match &self.kind {
	    ObjectKind::Mesh(mesh) => Some(mesh),
	    _ => None,
	}
    }

    pub fn mesh_mut(&mut self) -> Option<&mut Mesh> {
	match &mut self.kind {
	    ObjectKind::Mesh(mesh) => Some(mesh),
	    _ => None,
	}
    }
}
