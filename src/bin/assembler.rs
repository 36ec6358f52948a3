//! `assembler --source <path> --dest <path>`
//!
//! Reads a HACK assembly source file, runs the two-pass assembly pipeline,
//! and writes the resulting 16-bit binary instruction lines. Output is
//! buffered fully in memory and only written once the whole source has
//! assembled successfully — a failure midway never leaves a partial
//! `.hack` file on disk.

use hack_translator::assembler;
use std::env;
use std::fs;
use std::io::{BufRead, Write};
use std::process::ExitCode;

fn parse_args(args: &[String]) -> Option<(String, String)> {
    let mut source = None;
    let mut dest = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--source" if i + 1 < args.len() => {
                source = Some(args[i + 1].clone());
                i += 2;
            }
            "--dest" if i + 1 < args.len() => {
                dest = Some(args[i + 1].clone());
                i += 2;
            }
            _ => return None,
        }
    }
    Some((source?, dest?))
}

fn run(source_path: &str, dest_path: &str) -> Result<(), assembler::AssemblerError> {
    let file = fs::File::open(source_path)?;
    let lines: Vec<String> = std::io::BufReader::new(file)
        .lines()
        .collect::<Result<_, _>>()?;

    let output = assembler::assemble(&lines)?;

    let mut buffer = String::with_capacity(output.len() * 17);
    for line in &output {
        buffer.push_str(line);
        buffer.push('\n');
    }

    fs::File::create(dest_path)?.write_all(buffer.as_bytes())?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args: Vec<String> = env::args().skip(1).collect();

    let Some((source, dest)) = parse_args(&args) else {
        log::error!("usage: assembler --source <path> --dest <path>");
        return ExitCode::FAILURE;
    };

    match run(&source, &dest) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
