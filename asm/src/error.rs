use color_print::cprintln;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot parse statement: `{0}`")]
    SyntaxError(String),

    #[error("Unknown computation: `{0}`")]
    UnknownComp(String),

    #[error("Unknown destination: `{0}`")]
    UnknownDest(String),

    #[error("Unknown jump: `{0}`")]
    UnknownJump(String),

    #[error("Re-defined symbol: `{0}`")]
    RedefinedSymbol(String),

    #[error("Undefined symbol: `{0}`")]
    UndefinedSymbol(String),

    #[error("Cannot parse address literal: `{0}`")]
    InvalidImmediate(String),

    #[error("Address out of range: {0} (max 32767)")]
    AddressOutOfRange(u16),

    #[error("aborting due to {0} previous error(s)")]
    Abort(usize),

    #[error("Failed to dump symbol table")]
    SymbolDump(#[source] serde_yaml::Error),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read input")]
    FileRead(#[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),
}

impl Error {
    /// Print error with diagnostic information showing file location and line content
    pub fn print_diag(&self, file: &str, lines: &[&str], line_idx: usize) {
        // Print the error message
        cprintln!("<red,bold>error</>: {}", self);

        // Print file location (line_idx is 0-based, display as 1-based)
        let line_num = line_idx + 1;
        cprintln!("     <blue>--></> <underline>{}:{}</>", file, line_num);
        cprintln!("      <blue>|</>");

        let line_content = lines.get(line_idx).copied().unwrap_or("");

        cprintln!(" <blue>{:>4} |</> {}", line_num, line_content);
        cprintln!("      <blue>|</>");
    }
}
