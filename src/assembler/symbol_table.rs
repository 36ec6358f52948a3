//! Symbol table module for the Hack assembler
//!
//! Uses a hybrid approach for optimal performance:
//! - PHF (Perfect Hash Function) for predefined symbols - O(1) compile-time lookup
//! - Standard `HashMap` for user-defined symbols - dynamic insertion
//!
//! This gives us the best of both worlds: blazing fast lookups for common symbols
//! and flexibility for user-defined labels and variables.

use super::error::AssemblerError;
use super::instructions::{self, CommandType};
use phf::phf_map;
use std::collections::HashMap;
use std::fmt;

/// Predefined symbols with compile-time perfect hash
///
/// These symbols are built into the Hack platform and never change.
/// Using PHF gives us zero-cost lookups at runtime.
static PREDEFINED_SYMBOLS: phf::Map<&'static str, u16> = phf_map! {
    // Virtual registers
    "R0" => 0,
    "R1" => 1,
    "R2" => 2,
    "R3" => 3,
    "R4" => 4,
    "R5" => 5,
    "R6" => 6,
    "R7" => 7,
    "R8" => 8,
    "R9" => 9,
    "R10" => 10,
    "R11" => 11,
    "R12" => 12,
    "R13" => 13,
    "R14" => 14,
    "R15" => 15,

    // Special pointers
    "SP" => 0,
    "LCL" => 1,
    "ARG" => 2,
    "THIS" => 3,
    "THAT" => 4,

    // I/O pointers
    "SCREEN" => 16384,
    "KBD" => 24576,
};

/// Symbol table for the Hack assembler.
///
/// Maintains mappings between symbolic labels and numeric addresses.
/// Handles both predefined symbols (via PHF) and user-defined symbols
/// (labels and variables, via `HashMap`).
#[derive(Debug)]
pub struct SymbolTable {
    user_symbols: HashMap<String, u16>,
}

impl Default for SymbolTable {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolTable({} user symbols)", self.user_symbols.len())
    }
}

impl SymbolTable {
    /// Creates a new symbol table, pre-allocated for a typical label count.
    #[must_use]
    pub fn new() -> Self {
        Self {
            user_symbols: HashMap::with_capacity(32),
        }
    }

    /// Pass 1 of the two-pass resolver: binds every `(LABEL)` declaration to
    /// the program-counter address of the instruction that follows it.
    /// Label lines do not advance the program counter; every other line
    /// does. Fails with [`AssemblerError::DuplicateLabel`] if a label is
    /// declared twice.
    pub fn first_pass(&mut self, cleaned_lines: &[&str]) -> Result<(), AssemblerError> {
        let mut pc: u16 = 0;
        for (idx, line) in cleaned_lines.iter().enumerate() {
            match instructions::classify(line) {
                CommandType::LCommand => {
                    let label = instructions::symbol(line, CommandType::LCommand);
                    if PREDEFINED_SYMBOLS.contains_key(label) || self.user_symbols.contains_key(label) {
                        log::error!("line {}: duplicate label \"{label}\"", idx + 1);
                        return Err(AssemblerError::DuplicateLabel {
                            symbol: label.to_string(),
                            line: idx + 1,
                        });
                    }
                    log::trace!("label \"{label}\" bound to pc={pc}");
                    self.user_symbols.insert(label.to_string(), pc);
                }
                CommandType::ACommand | CommandType::CCommand => pc += 1,
            }
        }
        Ok(())
    }

    /// Adds a user-defined symbol to the table.
    #[inline]
    pub fn add_entry(&mut self, symbol: &str, address: u16) {
        self.user_symbols.insert(symbol.to_string(), address);
    }

    /// Checks if a symbol exists (either predefined or user-defined).
    #[inline]
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        PREDEFINED_SYMBOLS.contains_key(symbol) || self.user_symbols.contains_key(symbol)
    }

    /// Gets the address associated with a symbol, or `0` if it doesn't
    /// exist. Predefined symbols are checked first.
    #[inline]
    #[must_use]
    pub fn get_address(&self, symbol: &str) -> u16 {
        if let Some(&addr) = PREDEFINED_SYMBOLS.get(symbol) {
            return addr;
        }
        self.user_symbols.get(symbol).copied().unwrap_or(0)
    }

    /// Pass 2 hot path: resolves `symbol`, assigning it the next free RAM
    /// address (starting at whatever `next_address` currently holds) the
    /// first time it is seen. Predefined symbols and already-bound labels
    /// are returned as-is without consuming an address.
    pub fn get_or_insert(&mut self, symbol: &str, next_address: &mut u16) -> u16 {
        use std::collections::hash_map::Entry;

        if let Some(&addr) = PREDEFINED_SYMBOLS.get(symbol) {
            return addr;
        }

        match self.user_symbols.entry(symbol.to_string()) {
            Entry::Occupied(e) => *e.get(),
            Entry::Vacant(e) => {
                let addr = *next_address;
                *next_address += 1;
                log::trace!("variable \"{symbol}\" bound to ram={addr}");
                *e.insert(addr)
            }
        }
    }

    /// Number of user-defined symbols (labels and variables combined).
    #[inline]
    #[must_use]
    pub fn user_symbol_count(&self) -> usize {
        self.user_symbols.len()
    }

    /// Total number of predefined symbols (23).
    #[inline]
    #[must_use]
    pub const fn predefined_symbol_count() -> usize {
        PREDEFINED_SYMBOLS.len()
    }
}
