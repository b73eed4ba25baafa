use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use crate::objects::*;

// Wavefront OBJ text: one v line per vertex, then f lines (1-based indices)
pub fn to_obj(name: &str, mesh: &Mesh) -> Vec<u8> {
    let mut result = Vec::with_capacity(32 * (mesh.vertices.len() + mesh.faces.len()) + 16);
    result.extend_from_slice(format!("o {}\n", name).as_bytes());

    for vertex in &mesh.vertices {
	result.extend_from_slice(format!("v {} {} {}\n", vertex.x, vertex.y, vertex.z).as_bytes());
    }

    for face in &mesh.faces {
	result.push(b'f');
	for index in face {
	    result.push(b' ');
	    result.extend_from_slice((index + 1).to_string().as_bytes());
	}
	result.push(b'\n');
    }
    result
}

pub fn write_obj(filename: &Path, name: &str, mesh: &Mesh) -> io::Result<()> {
    let mut file = File::create(filename)?;
    file.write_all(&to_obj(name, mesh))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_records() {
	let text = String::from_utf8(to_obj("Grid", &Mesh::grid(1))).unwrap();
	let lines: Vec<&str> = text.lines().collect();
	assert_eq!(lines, vec![
	    "o Grid",
	    "v -1 -1 0",
	    "v 1 -1 0",
	    "v -1 1 0",
	    "v 1 1 0",
	    "f 1 2 4 3",
	]);
    }

    #[test]
    fn writes_file() {
	let path = std::env::temp_dir().join(format!("sr-polygon-{}.obj", std::process::id()));
	write_obj(&path, "Cube", &Mesh::cube(1)).unwrap();
	let text = std::fs::read_to_string(&path).unwrap();
	std::fs::remove_file(&path).unwrap();
	assert_eq!(text.lines().filter(|line| line.starts_with("v ")).count(), 24);
	assert_eq!(text.lines().filter(|line| line.starts_with("f ")).count(), 6);
    }
}
