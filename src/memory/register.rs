/// Bit-addressable register.

use crate::constants::register::SIZE;
use crate::error::{Error, Result};
use crate::memory::ram::RAM;
use crate::utils::{
    bits::u8,
    meminterface::MemInterface8,
};

/// A 16-bit register addressed as 2 bytes of 8 bits each.
///
/// Starts zeroed. Both indices are checked before memory is touched, so a
/// rejected access leaves the register exactly as it was.
pub struct Register {
    mem: RAM,
}

impl Register {
    pub fn new() -> Self {
        Self {
            mem: RAM::new(SIZE),
        }
    }

    /// Read a single bit.
    pub fn get_bit(&self, byte_index: usize, bit_index: usize) -> Result<bool> {
        check_indices(byte_index, bit_index)?;
        Ok(u8::test_bit(self.mem.read_byte(byte_index), bit_index))
    }

    /// Set or clear a single bit. Other bits keep their values.
    pub fn set_bit(&mut self, byte_index: usize, bit_index: usize, value: bool) -> Result<()> {
        check_indices(byte_index, bit_index)?;
        let byte = self.mem.read_byte(byte_index);
        let new_byte = if value {
            byte | u8::bit(bit_index)
        } else {
            byte & !u8::bit(bit_index)
        };
        self.mem.write_byte(byte_index, new_byte);
        Ok(())
    }
}

impl MemInterface8 for Register {
    fn read_byte(&mut self, addr: u16) -> u8 {
        self.mem.read_byte(addr as usize)
    }
    fn write_byte(&mut self, addr: u16, data: u8) {
        self.mem.write_byte(addr as usize, data);
    }
}

fn check_indices(byte_index: usize, bit_index: usize) -> Result<()> {
    if byte_index >= SIZE || bit_index > 7 {
        Err(Error::IndexOutOfRange { byte_index, bit_index })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_register_is_zeroed() {
        let reg = Register::new();
        for byte_index in 0..2 {
            for bit_index in 0..8 {
                assert_eq!(reg.get_bit(byte_index, bit_index), Ok(false));
            }
        }
    }

    #[test]
    fn set_and_clear_round_trip() {
        let mut reg = Register::new();
        for byte_index in 0..2 {
            for bit_index in 0..8 {
                reg.set_bit(byte_index, bit_index, true).unwrap();
                assert_eq!(reg.get_bit(byte_index, bit_index), Ok(true));
                reg.set_bit(byte_index, bit_index, false).unwrap();
                assert_eq!(reg.get_bit(byte_index, bit_index), Ok(false));
            }
        }
    }

    #[test]
    fn set_leaves_other_bits_alone() {
        let mut reg = Register::new();
        reg.set_bit(0, 0, true).unwrap();
        reg.set_bit(1, 7, true).unwrap();
        assert_eq!(reg.read_halfword(0), 0x8001);
        reg.set_bit(0, 4, true).unwrap();
        assert_eq!(reg.read_halfword(0), 0x8011);
        reg.set_bit(0, 0, false).unwrap();
        assert_eq!(reg.read_halfword(0), 0x8010);
    }

    #[test]
    fn out_of_range_access_is_rejected() {
        let mut reg = Register::new();
        reg.write_halfword(0, 0xBEEF);

        let bad = [
            (2_usize, 0_usize),
            (0, 8),
            (5, 12),
        ];

        for (byte_index, bit_index) in &bad {
            assert_eq!(
                reg.get_bit(*byte_index, *bit_index),
                Err(Error::IndexOutOfRange { byte_index: *byte_index, bit_index: *bit_index })
            );
            assert_eq!(
                reg.set_bit(*byte_index, *bit_index, true),
                Err(Error::IndexOutOfRange { byte_index: *byte_index, bit_index: *bit_index })
            );
        }

        // Nothing above may have touched the register.
        assert_eq!(reg.read_halfword(0), 0xBEEF);
    }

    #[test]
    fn register_bytes_view() {
        let mut reg = Register::new();
        reg.set_bit(0, 1, true).unwrap();
        reg.set_bit(0, 3, true).unwrap();
        assert_eq!(reg.read_byte(0), 0x0A);

        reg.write_byte(1, 0xF0);
        assert_eq!(reg.get_bit(1, 7), Ok(true));
        assert_eq!(reg.get_bit(1, 3), Ok(false));
    }
}
