use num_enum::IntoPrimitive;
use strum::{Display, EnumString};

/// Jump field of a compute instruction. The discriminant is the 3-bit
/// field: bit 2 tests `< 0`, bit 1 tests `= 0`, bit 0 tests `> 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, EnumString, Display)]
#[repr(u8)]
pub enum Jump {
    JGT = 0b001,
    JEQ = 0b010,
    JGE = 0b011,
    JLT = 0b100,
    JNE = 0b101,
    JLE = 0b110,
    JMP = 0b111,
}

impl Jump {
    pub fn parse(s: &str) -> Option<Self> {
        s.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!(Jump::parse("JGT"), Some(Jump::JGT));
        assert_eq!(Jump::parse("JMP"), Some(Jump::JMP));
        assert_eq!(Jump::parse("jmp"), None);
        assert_eq!(Jump::parse("JXX"), None);
        assert_eq!(Jump::parse(""), None);
    }

    #[test]
    fn bits() {
        assert_eq!(u8::from(Jump::JGT), 0b001);
        assert_eq!(u8::from(Jump::JEQ), 0b010);
        assert_eq!(u8::from(Jump::JLT), 0b100);
        assert_eq!(u8::from(Jump::JMP), 0b111);
    }
}
