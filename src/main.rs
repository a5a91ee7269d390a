use binary_switch::{BinarySwitch, Result};
use log::{error, info};

use clap::Parser;

/// Apply bit operations to a binary switch and print the result
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Initial state, a non-negative integer
    #[arg(short, long)]
    state: Option<String>,

    /// Bit indices to turn on, comma separated
    #[arg(long, value_delimiter = ',')]
    on: Vec<String>,

    /// Bit indices to toggle off, comma separated
    #[arg(long, value_delimiter = ',')]
    off: Vec<String>,

    /// Bit index to query after the batches
    #[arg(short, long)]
    query: Option<String>,

    /// Also print the state in base 2
    #[arg(short, long, default_value_t = false)]
    binary: bool,

    /// Debug mode
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

impl Args {
    /// With no operations given, falls back to the demo: state 31, turn on
    /// bits 0 to 3, then toggle bits 0 and 2.
    fn fill_demo(&mut self) {
        if self.state.is_none() && self.on.is_empty() && self.off.is_empty() {
            info!("no operations given, running demo");
            self.state = Some("31".to_string());
            self.on = ["0", "1", "2", "3"].map(String::from).to_vec();
            self.off = ["0", "2"].map(String::from).to_vec();
        }
    }
}

/// Applies the requested operations and returns the lines to print.
fn run(args: &Args) -> Result<Vec<String>> {
    let mut switch: BinarySwitch = BinarySwitch::new();

    let mut last = switch.state();
    if let Some(state) = &args.state {
        last = switch.set_state(state)?;
    }
    if !args.on.is_empty() {
        last = switch.batch_on(&args.on)?;
    }
    if !args.off.is_empty() {
        last = switch.batch_off(&args.off)?;
    }

    let mut lines = vec![format!("{} {}", switch.state(), last)];
    if args.binary {
        lines.push(switch.binary());
    }
    if let Some(idx) = &args.query {
        let bit = if switch.is_on(idx)? { "on" } else { "off" };
        lines.push(format!("bit {} is {}", idx, bit));
    }
    Ok(lines)
}

fn main() -> std::result::Result<(), String> {
    let mut args = Args::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if args.debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    args.fill_demo();
    let lines = run(&args).map_err(|e| {
        error!("{}", e);
        e.to_string()
    })?;
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}
