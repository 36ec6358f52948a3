//! Classification and field extraction for cleaned HACK assembly lines.
//!
//! Adapted from `project6::parser::ParserLines`: the zero-copy slicing is
//! kept, but cleaning (comment/whitespace stripping) now happens up front in
//! [`crate::assembler::cleaner`], so this module only classifies already
//! clean lines.

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CommandType {
    /// `@Xxx` where `Xxx` is either a symbol or a decimal number.
    ACommand,
    /// `dest=comp;jump`.
    CCommand,
    /// `(Xxx)` where `Xxx` is a symbol.
    LCommand,
}

/// Classifies a cleaned line based on its first byte.
#[inline]
#[must_use]
pub fn classify(line: &str) -> CommandType {
    match line.as_bytes()[0] {
        b'@' => CommandType::ACommand,
        b'(' => CommandType::LCommand,
        _ => CommandType::CCommand,
    }
}

/// Returns the symbol carried by an A- or L-command (the part after `@` or
/// between the parentheses).
#[inline]
#[must_use]
pub fn symbol(line: &str, command: CommandType) -> &str {
    match command {
        CommandType::ACommand => &line[1..],
        CommandType::LCommand => &line[1..line.len() - 1],
        CommandType::CCommand => unreachable!("symbol() called on a C-command"),
    }
}

/// Splits a C-command into its `dest`, `comp`, and `jump` mnemonics. Either
/// `dest` or `jump` may be empty when the corresponding clause is absent.
#[inline]
#[must_use]
pub fn split_c_command(line: &str) -> (&str, &str, &str) {
    let (dest, rest) = line.find('=').map_or(("", line), |pos| (&line[..pos], &line[pos + 1..]));
    let (comp, jump) = rest
        .find(';')
        .map_or((rest, ""), |pos| (&rest[..pos], &rest[pos + 1..]));
    (dest, comp, jump)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_each_command_type() {
        assert_eq!(classify("@100"), CommandType::ACommand);
        assert_eq!(classify("(LOOP)"), CommandType::LCommand);
        assert_eq!(classify("D=M"), CommandType::CCommand);
    }

    #[test]
    fn extracts_symbols() {
        assert_eq!(symbol("@100", CommandType::ACommand), "100");
        assert_eq!(symbol("@LOOP", CommandType::ACommand), "LOOP");
        assert_eq!(symbol("(LOOP)", CommandType::LCommand), "LOOP");
    }

    #[test]
    fn splits_full_c_command() {
        assert_eq!(split_c_command("MD=D+1;JMP"), ("MD", "D+1", "JMP"));
    }

    #[test]
    fn splits_c_command_missing_dest() {
        assert_eq!(split_c_command("D+1;JMP"), ("", "D+1", "JMP"));
    }

    #[test]
    fn splits_c_command_missing_jump() {
        assert_eq!(split_c_command("D=D+1"), ("D", "D+1", ""));
    }

    #[test]
    fn splits_bare_comp() {
        assert_eq!(split_c_command("0"), ("", "0", ""));
    }
}
