use num_enum::IntoPrimitive;
use strum::{Display, EnumString};

/// Destination field of a compute instruction. The discriminant is the
/// 3-bit field itself: bit 2 writes A, bit 1 writes D, bit 0 writes M.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, EnumString, Display)]
#[repr(u8)]
pub enum Dest {
    M = 0b001,
    D = 0b010,
    MD = 0b011,
    A = 0b100,
    AM = 0b101,
    AD = 0b110,
    AMD = 0b111,
}

impl Dest {
    pub fn parse(s: &str) -> Option<Self> {
        s.parse().ok()
    }
}
