use crate::{comp::Comp, dest::Dest, jump::Jump};

/// Largest address an A-instruction can hold (15 bits).
pub const ADDR_MAX: u16 = 0x7FFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    A(u16),
    C {
        dest: Option<Dest>,
        comp: Comp,
        jump: Option<Jump>,
    },
}

impl Inst {
    /// Encode as a 16-bit machine word. A-instructions keep the top bit
    /// clear, C-instructions carry the `111` prefix.
    pub fn to_bin(self) -> u16 {
        match self {
            Inst::A(addr) => addr & ADDR_MAX,
            Inst::C { dest, comp, jump } => {
                let d = dest.map_or(0, u8::from) as u16;
                let j = jump.map_or(0, u8::from) as u16;
                0b111 << 13 | comp.bits() << 6 | d << 3 | j
            }
        }
    }
}
