//! `compiler --source <path> --dest <path>`
//!
//! Tokenizes and parses a Jack source file and writes its canonical XML
//! parse tree. Output is buffered fully in memory and only written once
//! parsing has succeeded end to end.

use hack_translator::jack;
use std::env;
use std::fs;
use std::io::Write;
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

fn run(source_path: &str, dest_path: &str) -> Result<(), jack::JackError> {
    let source = fs::read_to_string(source_path)?;

    let mut buffer = Vec::new();
    jack::compile_to_xml(&source, &mut buffer)?;

    fs::File::create(dest_path)?.write_all(&buffer)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args: Vec<String> = env::args().skip(1).collect();

    let Some((source, dest)) = parse_args(&args) else {
        log::error!("usage: compiler --source <path> --dest <path>");
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
