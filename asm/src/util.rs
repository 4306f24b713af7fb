use color_print::cformat;

use crate::codegen;
use crate::parser::Line;
use crate::symbols::SymbolTable;

/// Side-by-side listing: address and machine word on the left, source
/// on the right.
pub fn print_dump(path: &str, lines: &[Line], symbols: &SymbolTable) {
    println!(
        "{}+------[{}]{}",
        "-".repeat(24),
        path,
        "-".repeat(40usize.saturating_sub(path.len()))
    );
    let mut pc: u16 = 0;
    for line in lines {
        let bin = match codegen::resolve(line, symbols) {
            Ok(Some(inst)) => {
                let bin = format!("[{:04X}] {:016b}", pc, inst.to_bin());
                pc = pc.saturating_add(1);
                bin
            }
            Ok(None) => format!("{:23}", ""),
            Err(_) => {
                pc = pc.saturating_add(1);
                cformat!("<red,bold>[????] !!!!!!!!!!!!!!!!</>")
            }
        };
        let stmt = line
            .stmt()
            .map(|stmt| stmt.cformat(symbols))
            .unwrap_or_default();
        let comment = line
            .comment()
            .map(|comment| format!("//{}", comment))
            .unwrap_or_default();
        println!("{} | {:>4}: {} {}", bin, line.no(), stmt, comment);
    }
    println!("{}+{}", "-".repeat(24), "-".repeat(48));
}
