/// Memory interface helpers.

/// Use this for devices which use an 8-bit base.
/// This has default impls for halfword access.
///
/// Lower bytes will be read/written first.
pub trait MemInterface8 {
    fn read_byte(&mut self, addr: u16) -> u8;
    fn write_byte(&mut self, addr: u16, data: u8);

    fn read_halfword(&mut self, addr: u16) -> u16 {
        use crate::utils::bytes::u16;
        let lo = self.read_byte(addr);
        let hi = self.read_byte(addr + 1);
        u16::make(hi, lo)
    }
    fn write_halfword(&mut self, addr: u16, data: u16) {
        use crate::utils::bytes::u16;
        self.write_byte(addr, u16::lo(data));
        self.write_byte(addr + 1, u16::hi(data));
    }
}
