//! Writes a mesh as seen by an observer moving close to light speed.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use sr_polygon::*;
use sr_polygon::wavefront::write_obj;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Shape {
    Cube,
    Grid,
}

/// Special-relativistic polygon transformation of a demo mesh
#[derive(Parser)]
#[command(name = "sr-polygon")]
#[command(version)]
struct Cli {
    /// Velocity of the object as a fraction of light speed, "x,y,z"
    #[arg(short, long, default_value = "0.5,0,0", allow_hyphen_values = true)]
    beta: Vec3,

    /// Pick a random direction at this speed instead of --beta
    #[arg(long)]
    speed: Option<f64>,

    /// Observation time (c = 1)
    #[arg(short, long, default_value = "0")]
    t_obs: f64,

    /// Observer position in the global frame, "x,y,z"
    #[arg(long, default_value = "0,0,0", allow_hyphen_values = true)]
    observer: Point3,

    /// Object position in the global frame, "x,y,z"
    #[arg(long, default_value = "0,0,-5", allow_hyphen_values = true)]
    object: Point3,

    /// Demo mesh to distort
    #[arg(long, value_enum, default_value = "cube")]
    shape: Shape,

    /// Quads along every edge of the mesh
    #[arg(long, default_value = "16")]
    subdivisions: usize,

    /// Worker threads, 0 for one per cpu
    #[arg(long, default_value = "0")]
    threads: usize,

    /// Where to write the Wavefront OBJ file
    #[arg(short, long, default_value = "output.obj")]
    output: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn settings(&self) -> Settings {
	match self.speed {
	    Some(speed) => Settings::random_direction(self.t_obs, speed),
	    None => Settings::new(self.t_obs, self.beta),
	}
    }

    fn strategy(&self) -> Strategy {
	let threads = if self.threads == 0 {num_cpus::get()} else {self.threads};
	Strategy::with_threads(threads)
    }

    fn mesh(&self) -> Mesh {
	match self.shape {
	    Shape::Cube => Mesh::cube(self.subdivisions),
	    Shape::Grid => Mesh::grid(self.subdivisions),
	}
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
	EnvFilter::new("debug")
    } else {
	EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = cli.settings();
    let strategy = cli.strategy();
    info!(beta = ?settings.beta, t_obs = settings.t_obs, workers = strategy.workers(), "settings");

    let name = format!("{:?}", cli.shape);
    let mut selected = vec![SceneObject::new(name.clone(), cli.object, ObjectKind::Mesh(cli.mesh()))];

    apply(&settings, cli.observer, &mut selected, &strategy)?;

    if let Some(mesh) = selected[0].mesh() {
	write_obj(&cli.output, &name, mesh)?;
	info!(path = %cli.output.display(), "wrote mesh");
    }
    Ok(())
}
