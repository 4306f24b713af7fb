use std::fmt;

use bimap::BiMap;
use once_cell::sync::Lazy;

/// Computation field of a compute instruction. The M variants address
/// memory through A (a-bit set) and reuse the c-bits of their A twin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comp {
    Zero,
    One,
    NegOne,
    D,
    A,
    NotD,
    NotA,
    NegD,
    NegA,
    DPlusOne,
    APlusOne,
    DMinusOne,
    AMinusOne,
    DPlusA,
    DMinusA,
    AMinusD,
    DAndA,
    DOrA,
    M,
    NotM,
    NegM,
    MPlusOne,
    MMinusOne,
    DPlusM,
    DMinusM,
    MMinusD,
    DAndM,
    DOrM,
}

static COMP_STR: Lazy<BiMap<Comp, &'static str>> = Lazy::new(|| {
    let mut map: BiMap<Comp, &'static str> = BiMap::new();
    map.insert(Comp::Zero, "0");
    map.insert(Comp::One, "1");
    map.insert(Comp::NegOne, "-1");
    map.insert(Comp::D, "D");
    map.insert(Comp::A, "A");
    map.insert(Comp::NotD, "!D");
    map.insert(Comp::NotA, "!A");
    map.insert(Comp::NegD, "-D");
    map.insert(Comp::NegA, "-A");
    map.insert(Comp::DPlusOne, "D+1");
    map.insert(Comp::APlusOne, "A+1");
    map.insert(Comp::DMinusOne, "D-1");
    map.insert(Comp::AMinusOne, "A-1");
    map.insert(Comp::DPlusA, "D+A");
    map.insert(Comp::DMinusA, "D-A");
    map.insert(Comp::AMinusD, "A-D");
    map.insert(Comp::DAndA, "D&A");
    map.insert(Comp::DOrA, "D|A");
    map.insert(Comp::M, "M");
    map.insert(Comp::NotM, "!M");
    map.insert(Comp::NegM, "-M");
    map.insert(Comp::MPlusOne, "M+1");
    map.insert(Comp::MMinusOne, "M-1");
    map.insert(Comp::DPlusM, "D+M");
    map.insert(Comp::DMinusM, "D-M");
    map.insert(Comp::MMinusD, "M-D");
    map.insert(Comp::DAndM, "D&M");
    map.insert(Comp::DOrM, "D|M");
    map
});

impl Comp {
    pub fn parse(s: &str) -> Option<Comp> {
        COMP_STR.get_by_right(s).copied()
    }

    /// The a-bit followed by the six c-bits.
    pub fn bits(self) -> u16 {
        match self {
            Comp::Zero => 0b0_101010,
            Comp::One => 0b0_111111,
            Comp::NegOne => 0b0_111010,
            Comp::D => 0b0_001100,
            Comp::A => 0b0_110000,
            Comp::NotD => 0b0_001101,
            Comp::NotA => 0b0_110001,
            Comp::NegD => 0b0_001111,
            Comp::NegA => 0b0_110011,
            Comp::DPlusOne => 0b0_011111,
            Comp::APlusOne => 0b0_110111,
            Comp::DMinusOne => 0b0_001110,
            Comp::AMinusOne => 0b0_110010,
            Comp::DPlusA => 0b0_000010,
            Comp::DMinusA => 0b0_010011,
            Comp::AMinusD => 0b0_000111,
            Comp::DAndA => 0b0_000000,
            Comp::DOrA => 0b0_010101,
            Comp::M => 0b1_110000,
            Comp::NotM => 0b1_110001,
            Comp::NegM => 0b1_110011,
            Comp::MPlusOne => 0b1_110111,
            Comp::MMinusOne => 0b1_110010,
            Comp::DPlusM => 0b1_000010,
            Comp::DMinusM => 0b1_010011,
            Comp::MMinusD => 0b1_000111,
            Comp::DAndM => 0b1_000000,
            Comp::DOrM => 0b1_010101,
        }
    }
}

impl fmt::Display for Comp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", COMP_STR.get_by_left(self).unwrap())
    }
}
