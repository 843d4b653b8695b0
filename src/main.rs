use std::{
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use clap::Parser;
use wffcheck::validate_file;

/// wffcheck reports, for every formula of a batch file, whether it is a well
/// formed propositional-logic formula (`valida`) or not (`inválida`).
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Batch file: a formula count on the first line, then one formula per
    /// line.
    file: PathBuf,
}

fn main() {
    let args = Args::parse();

    let verdicts = validate_file(&args.file).unwrap_or_else(|e| {
                                                 eprintln!("Erro ao ler arquivo: {e}");
                                                 std::process::exit(1);
                                             });

    let mut out = BufWriter::new(io::stdout().lock());
    for verdict in verdicts {
        if writeln!(out, "{verdict}").is_err() {
            std::process::exit(1);
        }
    }
    if out.flush().is_err() {
        std::process::exit(1);
    }
}
