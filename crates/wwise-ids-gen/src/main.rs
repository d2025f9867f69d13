//! Regeneration CLI for the Wwise ID bindings.
//!
//! Usage: wwise-ids-gen <Wwise_IDs.h> [--rust <out>] [--header <out>] [--check <ids.rs>]

use std::fs;
use std::path::{Path, PathBuf};

use wwise_ids_gen::{emit_header, emit_rust, load, GenError};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args[1].starts_with("--") {
        print_usage();
        std::process::exit(1);
    }

    if let Err(e) = run(&args[1..]) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn print_usage() {
    eprintln!("Usage: wwise-ids-gen <Wwise_IDs.h> [--rust <out>] [--header <out>] [--check <ids.rs>]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --rust <out>      Write the Rust ids module to <out>");
    eprintln!("  --header <out>    Re-emit the canonical header to <out>");
    eprintln!("  --check <ids.rs>  Verify that <ids.rs> matches the export; exit 1 if stale");
    eprintln!();
    eprintln!("With no options, the Rust module is written to stdout.");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  wwise-ids-gen GeneratedSoundBanks/Wwise_IDs.h --rust crates/wwise-ids/src/ids.rs");
    eprintln!("  wwise-ids-gen GeneratedSoundBanks/Wwise_IDs.h --check crates/wwise-ids/src/ids.rs");
}

fn run(args: &[String]) -> Result<(), GenError> {
    let input = PathBuf::from(&args[0]);
    let rust_out = option_value(args, "--rust");
    let header_out = option_value(args, "--header");
    let check = option_value(args, "--check");

    let src = read(&input)?;
    let ids = load(&src)?;
    log::info!(
        "parsed {} identifiers from {}",
        ids.def_count(),
        input.display()
    );

    let check_only = rust_out.is_none() && (check.is_some() || header_out.is_some());

    if let Some(path) = check {
        let current = read(&path)?;
        if current != emit_rust(&ids) {
            return Err(GenError::Stale { path });
        }
        println!("{} is up to date", path.display());
    }

    if let Some(path) = header_out {
        write(&path, &emit_header(&ids))?;
        println!("wrote {}", path.display());
    }

    match rust_out {
        Some(path) => {
            write(&path, &emit_rust(&ids))?;
            println!("wrote {}", path.display());
        }
        None if !check_only => print!("{}", emit_rust(&ids)),
        None => {}
    }

    Ok(())
}

fn option_value(args: &[String], name: &str) -> Option<PathBuf> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from)
}

fn read(path: &Path) -> Result<String, GenError> {
    fs::read_to_string(path).map_err(|source| GenError::Read {
        path: path.to_owned(),
        source,
    })
}

fn write(path: &Path, contents: &str) -> Result<(), GenError> {
    fs::write(path, contents).map_err(|source| GenError::Write {
        path: path.to_owned(),
        source,
    })
}
