//! Built-in symbols of the memory map.

pub const SP: u16 = 0;
pub const LCL: u16 = 1;
pub const ARG: u16 = 2;
pub const THIS: u16 = 3;
pub const THAT: u16 = 4;
pub const SCREEN: u16 = 16384;
pub const KBD: u16 = 24576;

/// First RAM address handed out to a variable.
pub const VAR_BASE: u16 = 16;

/// All built-in names with their addresses, R0 through R15 included.
pub fn predefined() -> impl Iterator<Item = (String, u16)> {
    let named = [
        ("SP", SP),
        ("LCL", LCL),
        ("ARG", ARG),
        ("THIS", THIS),
        ("THAT", THAT),
    ];
    named
        .into_iter()
        .map(|(name, addr)| (name.to_string(), addr))
        .chain((0..16).map(|n| (format!("R{}", n), n)))
        .chain([("SCREEN".to_string(), SCREEN), ("KBD".to_string(), KBD)])
}
