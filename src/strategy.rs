use enum_dispatch::enum_dispatch;
use std::thread;
use crate::vec3::*;

// below this many vertices per worker, spawning threads costs more than it saves
const MIN_CHUNK: usize = 1024;

// maps every vertex independently, output index i always belongs to input index i
#[enum_dispatch]
pub trait VertexMap {
    fn map(&self, vertices: &[Point3], f: &(dyn Fn(Point3) -> Point3 + Sync)) -> Vec<Point3>;

    // upper bound on threads used by map
    fn workers(&self) -> usize;
}

#[derive(Copy, Clone, Debug)]
#[enum_dispatch(VertexMap)]
pub enum Strategy {
    Sequential(Sequential),
    Threaded(Threaded),
}

impl Default for Strategy {
    fn default() -> Self {
	Strategy::Sequential(Sequential)
    }
}

impl Strategy {
    // 0 or 1 threads means running inline
    pub fn with_threads(threads: usize) -> Self {
	if threads <= 1 {
	    Strategy::Sequential(Sequential)
	} else {
	    Strategy::Threaded(Threaded::new(threads))
	}
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct Sequential;

impl VertexMap for Sequential {
    fn map(&self, vertices: &[Point3], f: &(dyn Fn(Point3) -> Point3 + Sync)) -> Vec<Point3> {
	vertices.iter().map(|&vertex| f(vertex)).collect()
    }

    fn workers(&self) -> usize {
	1
    }
}

// contiguous chunks per scoped thread, joined back in order
#[derive(Copy, Clone, Debug)]
pub struct Threaded {
    threads: usize,
}

impl Default for Threaded {
    fn default() -> Self {
	Threaded::new(num_cpus::get())
    }
}

impl Threaded {
    pub fn new(threads: usize) -> Self {
	Threaded {
	    threads: threads.max(1),
	}
    }
}

impl VertexMap for Threaded {
    fn map(&self, vertices: &[Point3], f: &(dyn Fn(Point3) -> Point3 + Sync)) -> Vec<Point3> {
	let chunk = vertices.len().div_ceil(self.threads).max(MIN_CHUNK);
	if vertices.len() <= chunk {
	    return Sequential.map(vertices, f);
	}

	let mut result = Vec::with_capacity(vertices.len());
	thread::scope(|s| {
	    let threads: Vec<_> = vertices.chunks(chunk)
		.map(|part| s.spawn(move || Sequential.map(part, f)))
		.collect();

	    for thread in threads {
		match thread.join() {
		    Ok(part) => result.extend(part),
		    Err(panic) => std::panic::resume_unwind(panic),
		}
	    }
	});
	result
    }

    fn workers(&self) -> usize {
	self.threads
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(count: usize) -> Vec<Point3> {
	(0..count).map(|i| Point3::new(i as f64, 0.0, -(i as f64))).collect()
    }

    #[test]
    fn sequential_keeps_order() {
	let vertices = numbered(10);
	let result = Strategy::default().map(&vertices, &|v| v * 2.0);
	for (i, v) in result.iter().enumerate() {
	    assert_eq!(*v, Point3::new(2.0 * i as f64, 0.0, -2.0 * i as f64));
	}
    }

    #[test]
    fn threaded_matches_sequential() {
	let vertices = numbered(10 * MIN_CHUNK + 17);
	let f = |v: Point3| Point3::new(v.x.sin(), v.y + 1.0, v.z * v.x);
	let expected = Sequential.map(&vertices, &f);
	let result = Strategy::Threaded(Threaded::new(4)).map(&vertices, &f);
	assert_eq!(result, expected);
    }

    #[test]
    fn threaded_small_input_runs_inline() {
	let vertices = numbered(3);
	let result = Threaded::new(8).map(&vertices, &|v| -v);
	assert_eq!(result, vec![-vertices[0], -vertices[1], -vertices[2]]);
    }

    #[test]
    fn empty_input() {
	assert!(Threaded::default().map(&[], &|v| v).is_empty());
	assert!(Sequential.map(&[], &|v| v).is_empty());
    }

    #[test]
    fn thread_count_is_clamped() {
	assert_eq!(Threaded::new(0).workers(), 1);
	assert!(matches!(Strategy::with_threads(1), Strategy::Sequential(_)));
	assert_eq!(Strategy::with_threads(0).workers(), 1);
	assert_eq!(Strategy::with_threads(6).workers(), 6);
    }

    #[test]
    #[should_panic(expected = "bad vertex")]
    fn worker_panic_reaches_caller() {
	let vertices = numbered(10 * MIN_CHUNK);
	Threaded::new(4).map(&vertices, &|v| if v.x == 5000.0 {panic!("bad vertex")} else {v});
    }
}
