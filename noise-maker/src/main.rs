mod args;
mod generator;

use std::{
    fs::File,
    io::{self, BufWriter, Write},
};

use args::CliArgs;
use chrono::{Duration, Utc};
use clap::Parser;
use generator::generate_access_line;
use rand::{SeedableRng, rngs::StdRng};

fn main() -> io::Result<()> {
    let args = CliArgs::parse();
    let mut rng = match args.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };
    let mut out: Box<dyn Write> = match args.out() {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let lines = *args.lines();
    // One line per second, ending now, so timestamps read like a real tail.
    let start = Utc::now() - Duration::seconds(lines as i64);
    for i in 0..lines {
        let moment = start + Duration::seconds(i as i64);
        writeln!(out, "{}", generate_access_line(&mut rng, moment))?;
    }
    out.flush()
}
