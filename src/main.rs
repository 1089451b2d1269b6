use std::io;
use std::process::ExitCode;

use clap::Parser;

use ctree::cli::Cli;
use ctree::core::{render, walk};
use ctree::fs::RealFileSystem;

fn main() -> ExitCode {
    let config = Cli::parse().into_config();

    let children = match walk::walk_dir(&RealFileSystem, &config.root, &config) {
        Ok(children) => children,
        Err(err) => {
            eprintln!("ctree: {err:#}");
            return ExitCode::from(1);
        }
    };

    let stdout = io::stdout();
    if let Err(err) = render::write_tree(&mut stdout.lock(), &children) {
        eprintln!("ctree: {err}");
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}
