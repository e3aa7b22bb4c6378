use tracing_subscriber::prelude::*;

use lightgrid::grid::Dimmable;
use lightgrid::input;
use lightgrid::runner;

fn run() -> Result<(), String> {
    let lines = input::read_lines()?;
    let brightness = runner::run::<Dimmable>(&lines).map_err(|e| e.to_string())?;
    println!("{}", brightness);
    Ok(())
}

fn main() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
    let filter_layer = match tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info"))
    {
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Ok(layer) => layer,
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    if let Err(e) = run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
