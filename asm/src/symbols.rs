use arch::sym;
use indexmap::IndexMap;

use crate::error::Error;
use crate::parser::{Addr, Line, Stmt};

/// Name to address map for a single assembly run, built-ins preloaded.
#[derive(Debug)]
pub struct SymbolTable {
    map: IndexMap<String, u16>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            map: sym::predefined().collect(),
        }
    }

    /// Two passes over the parsed lines. Labels bind first so that a
    /// forward reference never turns into a variable.
    pub fn collect(lines: &[Line]) -> Result<SymbolTable, Vec<(usize, Error)>> {
        let mut table = SymbolTable::new();
        let mut errs = vec![];

        // A label binds to the address of the next instruction. The pc
        // clamps at 0xFFFF; anything bound there is past ADDR_MAX and
        // fails on reference.
        let mut pc: u16 = 0;
        for line in lines {
            match line.stmt() {
                Some(Stmt::Label(name)) => {
                    if table.map.contains_key(name) {
                        errs.push((line.idx(), Error::RedefinedSymbol(name.clone())));
                    } else {
                        table.map.insert(name.clone(), pc);
                    }
                }
                Some(_) => pc = pc.saturating_add(1),
                None => {}
            }
        }
        if !errs.is_empty() {
            return Err(errs);
        }

        // Whatever is still unknown is a variable. RAM slots go out in
        // first-occurrence order, starting at 16.
        let mut next = sym::VAR_BASE;
        for line in lines {
            if let Some(Stmt::A(Addr::Sym(name))) = line.stmt() {
                if !table.map.contains_key(name) {
                    table.map.insert(name.clone(), next);
                    next = next.saturating_add(1);
                }
            }
        }

        Ok(table)
    }

    pub fn get(&self, name: &str) -> Option<u16> {
        self.map.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Full table in insertion order, built-ins included.
    pub fn to_yaml(&self) -> Result<String, Error> {
        serde_yaml::to_string(&self.map).map_err(Error::SymbolDump)
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        SymbolTable::new()
    }
}
