use std::error::Error;
use std::str::FromStr;
use clap::Parser;
use log::info;
use scdg::dg::{Pde, NPOLY};
use scdg::mesh::Mesh;
use scdg::solvers::{Boundary, Configuration, ExecutionMode, RungeKuttaOrder, Solver};
use simple_logger::SimpleLogger;




#[derive(Debug, Parser)]
#[clap(version = "1.0", author = "J. Zrake <jzrake@clemson.edu>")]
struct Opts {
    /// advection or burgers
    #[clap(short = 'p', long, default_value = "advection")]
    pde: String,

    /// Wavespeed for linear advection
    #[clap(short = 'a', long, default_value = "1.0")]
    wavespeed: f64,

    #[clap(short = 'n', long, default_value = "200")]
    num_zones: usize,

    /// Runge-Kutta order: 1, 2, or 3
    #[clap(short = 'r', long, default_value = "3")]
    rk_order: usize,

    /// Time step in units of the zone spacing
    #[clap(short = 'd', long, default_value = "0.1")]
    dt_factor: f64,

    #[clap(short = 't', long, default_value = "1.0")]
    final_time: f64,

    #[clap(long)]
    serial: bool,

    #[clap(short = 'o', long, default_value = "state.cbor")]
    output: String,

    /// cbor or msgpack
    #[clap(short = 'f', long, default_value = "cbor")]
    format: String,

    #[clap(short = 'l', long, default_value = "info")]
    log_level: String,
}




#[derive(serde::Serialize)]

/**
 * The simulation solution state
 */
struct State<'a> {
    configuration: Configuration,
    iteration: u64,
    time: f64,
    cell_centers: Vec<f64>,
    conserved: &'a [f64],
}




// ============================================================================
fn write_state(state: &State, path: &str, format: &str) -> Result<(), Box<dyn Error>> {
    let file = std::fs::File::create(path)?;
    let mut buffer = std::io::BufWriter::new(file);

    match format {
        "cbor" => ciborium::ser::into_writer(state, &mut buffer).map_err(|e| format!("{:?}", e))?,
        "msgpack" => rmp_serde::encode::write(&mut buffer, state)?,
        _ => return Err(format!("unknown output format: {}", format).into()),
    }
    info!("write {}", path);
    Ok(())
}




// ============================================================================
fn main() -> Result<(), Box<dyn Error>> {
    let opts = Opts::parse();

    SimpleLogger::new()
        .with_level(log::LevelFilter::from_str(&opts.log_level)?)
        .init()?;

    info!("{:?}", opts);

    let pde = match Pde::from_str(&opts.pde)? {
        Pde::Advection { .. } => Pde::Advection { wavespeed: opts.wavespeed },
        Pde::Burgers => Pde::Burgers,
    };
    let rk_order = RungeKuttaOrder::from_order(opts.rk_order)
        .ok_or_else(|| format!("unsupported Runge-Kutta order: {}", opts.rk_order))?;
    let mode = if opts.serial {
        ExecutionMode::Serial
    } else {
        ExecutionMode::Parallel
    };

    let mesh = Mesh::from_interval(0.0, 1.0, opts.num_zones)?;
    let initial = mesh.project(|x| 0.1 + f64::exp(-1e2 * (x - 0.5).powi(2)));
    let dt = opts.dt_factor * mesh.dx;

    if !(dt > 0.0 && dt.is_finite()) {
        return Err(format!("time step must be positive and finite (dt-factor = {})", opts.dt_factor).into())
    }
    let mut solver = Solver::new(mesh.clone(), pde, mode, Boundary::Periodic, rk_order, initial)?;

    while solver.time() < opts.final_time {
        let remaining = opts.final_time - solver.time();
        solver.advance(if remaining < dt { remaining } else { dt })?;

        if solver.iteration() % 100 == 0 {
            let total = mesh.total(solver.conserved())?;
            info!("[{}] t={:.4} total={:.12e}", solver.iteration(), solver.time(), total);
        }
    }

    let physical = mesh.zone_range();
    let state = State {
        configuration: Configuration { pde, dx: mesh.dx, mode },
        iteration: solver.iteration(),
        time: solver.time(),
        cell_centers: mesh.cell_centers(),
        conserved: &solver.conserved()[physical.start * NPOLY..physical.end * NPOLY],
    };
    write_state(&state, &opts.output, &opts.format)
}
