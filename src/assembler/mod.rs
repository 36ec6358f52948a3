//! Hack Assembler - a two-pass assembler for Hack assembly (nand2tetris
//! Project 6).
//!
//! # Architecture
//! - **Source Cleaner** ([`cleaner`]): strips comments/whitespace.
//! - **Pass 1** ([`symbol_table::SymbolTable::first_pass`]): records label
//!   addresses.
//! - **Pass 2** (this module's [`assemble`]): resolves variables and
//!   encodes every instruction.
//! - **Encoder** ([`code`]): translates mnemonics to binary.

pub mod cleaner;
pub mod code;
pub mod error;
pub mod instructions;
pub mod symbol_table;

pub use error::AssemblerError;
pub use instructions::CommandType;
pub use symbol_table::SymbolTable;

/// Runs the full two-pass assembly pipeline over raw source lines, returning
/// one 16-character binary string per instruction line, in source order.
/// No partial output: either every line encodes successfully, or the first
/// failure is returned and nothing is produced.
pub fn assemble(lines: &[String]) -> Result<Vec<String>, AssemblerError> {
    let cleaned = cleaner::clean_lines(lines);

    let mut symbols = SymbolTable::new();
    symbols.first_pass(&cleaned)?;

    let mut ram_address: u16 = 16;
    let mut output = Vec::with_capacity(cleaned.len());

    for (idx, line) in cleaned.iter().enumerate() {
        let line_no = idx + 1;
        match instructions::classify(line) {
            CommandType::LCommand => {
                // Already resolved in pass 1; labels emit no code.
            }
            CommandType::ACommand => {
                let raw = instructions::symbol(line, CommandType::ACommand);
                let address = match raw.parse::<u64>() {
                    Ok(n) => (n % (1 << 15)) as u16,
                    Err(_) => symbols.get_or_insert(raw, &mut ram_address),
                };
                output.push(code::encode_a_instruction(address));
            }
            CommandType::CCommand => {
                let (dest, comp, jump) = instructions::split_c_command(line);
                output.push(code::encode_c_instruction(dest, comp, jump, line_no)?);
            }
        }
    }

    Ok(output)
}
