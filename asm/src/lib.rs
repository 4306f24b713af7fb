pub mod codegen;
pub mod error;
pub mod parser;
pub mod symbols;
pub mod util;

pub use error::Error;

use parser::Line;
use symbols::SymbolTable;

/// Result of one successful run: the parsed lines, the resolved symbol
/// table and the encoded words in ROM order.
pub struct Assembly {
    pub lines: Vec<Line>,
    pub symbols: SymbolTable,
    pub words: Vec<u16>,
}

impl Assembly {
    /// Output text, one 16-character binary word per line.
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(|word| format!("{:016b}", word))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Translate a whole source text. Errors carry the 0-based index of the
/// line they occurred on. Parse errors abort before symbol resolution,
/// symbol errors abort before encoding.
pub fn assemble(source: &str) -> Result<Assembly, Vec<(usize, Error)>> {
    let mut lines = vec![];
    let mut errs = vec![];
    for (idx, raw) in source.lines().enumerate() {
        let (line, line_errs) = Line::parse(idx, raw);
        errs.extend(line_errs.into_iter().map(|err| (idx, err)));
        lines.push(line);
    }
    if !errs.is_empty() {
        return Err(errs);
    }

    let symbols = SymbolTable::collect(&lines)?;
    let words = codegen::generate(&lines, &symbols)?;
    Ok(Assembly {
        lines,
        symbols,
        words,
    })
}
