use arch::{comp::Comp, dest::Dest, jump::Jump};
use color_print::cformat;

use crate::error::Error;
use crate::symbols::SymbolTable;

// ----------------------------------------------------------------------------
// Line

/// One source line, with whatever statement it carried.
#[derive(Debug, Clone)]
pub struct Line {
    idx: usize,
    raw: String,
    comment: Option<String>,
    stmt: Option<Stmt>,
}

impl Line {
    /// Strip the comment, delete all whitespace, classify the rest.
    pub fn parse(idx: usize, raw: &str) -> (Line, Vec<Error>) {
        let (code, comment) = match raw.split_once("//") {
            Some((code, comment)) => (code, Some(comment.to_string())),
            None => (raw, None),
        };
        let code: String = code.chars().filter(|c| !c.is_whitespace()).collect();

        let mut errs = vec![];
        let stmt = if code.is_empty() {
            None
        } else {
            match Stmt::parse(&code) {
                Ok(stmt) => Some(stmt),
                Err(err) => {
                    errs.push(err);
                    None
                }
            }
        };

        let line = Line {
            idx,
            raw: raw.to_string(),
            comment,
            stmt,
        };
        (line, errs)
    }

    pub fn idx(&self) -> usize {
        self.idx
    }

    /// 1-based line number for display.
    pub fn no(&self) -> usize {
        self.idx + 1
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn stmt(&self) -> Option<&Stmt> {
        self.stmt.as_ref()
    }
}

// ----------------------------------------------------------------------------
// Statement

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Label(String),
    A(Addr),
    C {
        dest: Option<Dest>,
        comp: Comp,
        jump: Option<Jump>,
    },
}

/// Operand of an A-instruction: a literal, or a name to look up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Addr {
    Num(u16),
    Sym(String),
}

impl Stmt {
    pub fn parse(code: &str) -> Result<Stmt, Error> {
        // (LOOP)
        if let Some(rest) = code.strip_prefix('(') {
            let name = rest
                .strip_suffix(')')
                .ok_or_else(|| Error::SyntaxError(code.to_string()))?;
            if name.is_empty() || name.contains('(') || name.contains(')') {
                return Err(Error::SyntaxError(code.to_string()));
            }
            return Ok(Stmt::Label(name.to_string()));
        }

        // @17 or @sum
        if let Some(operand) = code.strip_prefix('@') {
            if operand.is_empty() {
                return Err(Error::SyntaxError(code.to_string()));
            }
            if operand.chars().all(|c| c.is_ascii_digit()) {
                let val = operand
                    .parse()
                    .map_err(|_| Error::InvalidImmediate(operand.to_string()))?;
                return Ok(Stmt::A(Addr::Num(val)));
            }
            return Ok(Stmt::A(Addr::Sym(operand.to_string())));
        }

        // dest=comp;jump with dest and jump optional
        let (dest, rest) = match code.split_once('=') {
            Some((dest, rest)) => {
                let dest = Dest::parse(dest).ok_or_else(|| Error::UnknownDest(dest.to_string()))?;
                (Some(dest), rest)
            }
            None => (None, code),
        };
        let (comp, jump) = match rest.split_once(';') {
            Some((comp, jump)) => {
                let jump = Jump::parse(jump).ok_or_else(|| Error::UnknownJump(jump.to_string()))?;
                (comp, Some(jump))
            }
            None => (rest, None),
        };
        let comp = Comp::parse(comp).ok_or_else(|| Error::UnknownComp(comp.to_string()))?;
        Ok(Stmt::C { dest, comp, jump })
    }
}

impl Stmt {
    pub fn cformat(&self, symbols: &SymbolTable) -> String {
        match self {
            Stmt::Label(name) => cformat!("<green>({})</>", name),
            Stmt::A(Addr::Num(val)) => cformat!("<red>@</><yellow>{}</>", val),
            Stmt::A(Addr::Sym(name)) => match symbols.get(name) {
                Some(val) => cformat!("<red>@</><green>{}({})</>", name, val),
                None => cformat!("<red>@</><red,underline>{}</>", name),
            },
            Stmt::C { dest, comp, jump } => {
                let dest = dest
                    .map(|dest| cformat!("<blue>{}=</>", dest))
                    .unwrap_or_default();
                let jump = jump
                    .map(|jump| cformat!("<yellow>;{}</>", jump))
                    .unwrap_or_default();
                format!("{}{}{}", dest, cformat!("<red>{}</>", comp), jump)
            }
        }
    }
}
