use arch::inst::{Inst, ADDR_MAX};

use crate::error::Error;
use crate::parser::{Addr, Line, Stmt};
use crate::symbols::SymbolTable;

/// Encode every instruction line, one word per A- or C-statement, in
/// source order.
pub fn generate(lines: &[Line], symbols: &SymbolTable) -> Result<Vec<u16>, Vec<(usize, Error)>> {
    let mut words = vec![];
    let mut errs = vec![];
    for line in lines {
        match resolve(line, symbols) {
            Ok(Some(inst)) => words.push(inst.to_bin()),
            Ok(None) => {}
            Err(err) => errs.push((line.idx(), err)),
        }
    }
    if errs.is_empty() {
        Ok(words)
    } else {
        Err(errs)
    }
}

/// Statement to instruction, symbols looked up. Labels and blank lines
/// resolve to nothing.
pub fn resolve(line: &Line, symbols: &SymbolTable) -> Result<Option<Inst>, Error> {
    let stmt = match line.stmt() {
        Some(stmt) => stmt,
        None => return Ok(None),
    };
    let inst = match stmt {
        Stmt::Label(_) => return Ok(None),
        Stmt::A(addr) => {
            let val = match addr {
                Addr::Num(val) => *val,
                Addr::Sym(name) => symbols
                    .get(name)
                    .ok_or_else(|| Error::UndefinedSymbol(name.clone()))?,
            };
            if val > ADDR_MAX {
                return Err(Error::AddressOutOfRange(val));
            }
            Inst::A(val)
        }
        Stmt::C { dest, comp, jump } => Inst::C {
            dest: *dest,
            comp: *comp,
            jump: *jump,
        },
    };
    Ok(Some(inst))
}
