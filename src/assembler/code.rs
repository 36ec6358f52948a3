//! Code generation module for Hack assembly language
//!
//! Translates assembly mnemonics to binary machine code using perfect hash
//! functions (PHF). PHF provides O(1) lookup with zero runtime overhead -
//! the hash table is computed at compile time.

use super::error::AssemblerError;
use phf::phf_map;

/// Destination mnemonic to binary code mapping (3 bits).
static DEST_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "" => "000",
    "M" => "001",
    "D" => "010",
    "MD" => "011",
    "A" => "100",
    "AM" => "101",
    "AD" => "110",
    "AMD" => "111",
};

/// Computation mnemonic to binary code mapping (7 bits: 1 bit 'a' + 6 bits 'cccccc').
static COMP_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    // a=0 (A register operations)
    "0" => "0101010",
    "1" => "0111111",
    "-1" => "0111010",
    "D" => "0001100",
    "A" => "0110000",
    "!D" => "0001101",
    "!A" => "0110001",
    "-D" => "0001111",
    "-A" => "0110011",
    "D+1" => "0011111",
    "A+1" => "0110111",
    "D-1" => "0001110",
    "A-1" => "0110010",
    "D+A" => "0000010",
    "D-A" => "0010011",
    "A-D" => "0000111",
    "D&A" => "0000000",
    "D|A" => "0010101",

    // a=1 (M register operations)
    "M" => "1110000",
    "!M" => "1110001",
    "-M" => "1110011",
    "M+1" => "1110111",
    "M-1" => "1110010",
    "D+M" => "1000010",
    "D-M" => "1010011",
    "M-D" => "1000111",
    "D&M" => "1000000",
    "D|M" => "1010101",
};

/// Jump mnemonic to binary code mapping (3 bits).
static JUMP_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "" => "000",
    "JGT" => "001",
    "JEQ" => "010",
    "JGE" => "011",
    "JLT" => "100",
    "JNE" => "101",
    "JLE" => "110",
    "JMP" => "111",
};

/// Looks up a `dest` mnemonic. `None` means the mnemonic is not one of the
/// eight HACK destination codes.
#[inline]
#[must_use]
pub fn dest(mnemonic: &str) -> Option<&'static str> {
    DEST_MAP.get(mnemonic).copied()
}

/// Looks up a `comp` mnemonic.
#[inline]
#[must_use]
pub fn comp(mnemonic: &str) -> Option<&'static str> {
    COMP_MAP.get(mnemonic).copied()
}

/// Looks up a `jump` mnemonic.
#[inline]
#[must_use]
pub fn jump(mnemonic: &str) -> Option<&'static str> {
    JUMP_MAP.get(mnemonic).copied()
}

/// Encodes a complete C-instruction: `111accccccdddjjj` (16 bits).
///
/// # Errors
/// Returns [`AssemblerError::UnknownMnemonic`] if `dest`, `comp`, or `jump`
/// is not a recognized mnemonic. A bare `dest=` with no `comp` (empty
/// `comp_mnemonic`) is rejected the same way, since `""` is not a key in
/// [`COMP_MAP`].
pub fn encode_c_instruction(
    dest_mnemonic: &str,
    comp_mnemonic: &str,
    jump_mnemonic: &str,
    line: usize,
) -> Result<String, AssemblerError> {
    let d = dest(dest_mnemonic).ok_or_else(|| AssemblerError::UnknownMnemonic {
        field: "dest",
        mnemonic: dest_mnemonic.to_string(),
        line,
    })?;
    let c = comp(comp_mnemonic).ok_or_else(|| AssemblerError::UnknownMnemonic {
        field: "comp",
        mnemonic: comp_mnemonic.to_string(),
        line,
    })?;
    let j = jump(jump_mnemonic).ok_or_else(|| AssemblerError::UnknownMnemonic {
        field: "jump",
        mnemonic: jump_mnemonic.to_string(),
        line,
    })?;
    Ok(format!("111{c}{d}{j}"))
}

/// Encodes an A-instruction: `0vvvvvvvvvvvvvvv` (16 bits). Values wider than
/// 15 bits are truncated to their low 15 bits.
#[inline]
#[must_use]
pub fn encode_a_instruction(address: u16) -> String {
    format!("{:016b}", address & 0x7fff)
}
