use std::env;
use std::io::{self, Write};

fn main() -> io::Result<()> {
    sftpsync::init_logging();

    let config = sftpsync::configure_or_exit(env::args_os().skip(1))?;

    // hand the validated configuration to the sync engine as one JSON line
    let mut out = io::stdout().lock();
    serde_json::to_writer(&mut out, &config)?;
    writeln!(out)?;
    Ok(())
}
