use std::env;
use std::io;
use std::process;

use sll::harness::{self, Config};

fn main() -> anyhow::Result<()> {
    sll::init_logging();

    let args: Vec<String> = env::args().collect();
    let config = Config::build(&args).unwrap_or_else(|err| {
        log::debug!("problem parsing arguments: {err}");
        process::exit(1);
    });

    let stdout = io::stdout();
    harness::run(config, &mut stdout.lock())?;

    Ok(())
}
