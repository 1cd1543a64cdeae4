use clap::Parser;

mod cli;
mod columns;
mod error;
mod render;
mod report;
mod update_center;

fn main() {
    if let Err(e) = run() {
        eprintln!("ERROR: {e}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Resolve the selection before touching the network so usage errors
    // never wait on a fetch.
    let selection = columns::resolve(
        &columns::REGISTRY,
        &cli.column_toggles(),
        !cli.no_header,
        cli.delimiter.clone(),
    )?;

    let document = update_center::load_document(&cli.source)?;

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    if cli.json {
        report::run_json(&mut out, &selection, &document, &cli.plugins)?;
    } else {
        report::run(&mut out, &selection, &document, &cli.plugins)?;
    }
    Ok(())
}
