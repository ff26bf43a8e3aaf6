/// Byte manipulation.

pub mod u16 {
    pub const fn lo(val: u16) -> u8 {
        val as u8
    }

    pub const fn hi(val: u16) -> u8 {
        (val >> 8) as u8
    }

    pub const fn make(hi: u8, lo: u8) -> u16 {
        ((hi as u16) << 8) | (lo as u16)
    }
}
