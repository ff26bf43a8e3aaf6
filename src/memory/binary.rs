/// GBC cartridge image: integrity checks and header extraction.

use bitflags::bitflags;
use log::{debug, warn};

use std::fmt;

use crate::constants::header::*;
use crate::error::{Error, Result};
use crate::memory::ram::RAM;
use crate::utils::{
    ascii::{combined_char_based_value, trim_trailing_null_bytes},
    bits::u8,
    bytes::u16,
    meminterface::MemInterface8,
};

bitflags!{
    /// CGB support flags, encoded in the top bits of the gameboy type byte.
    #[derive(Default)]
    pub struct CgbFlag: u8 {
        const CGB_SUPPORT   = u8::bit(7);
        const CGB_EXCLUSIVE = u8::bit(6);
    }
}

/// Every field of the cartridge header, read from its fixed offset.
///
/// Byte fields hold the raw stored values. Only `licensee_new` is decoded,
/// from two ASCII digits to 0-99. Non-digit licensee bytes degrade to 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartHeader {
    pub title:              String,
    pub gameboy_type:       u8,
    pub licensee_new:       u8,
    pub sgb_compatibility:  u8,
    pub cartridge_type:     u8,
    pub rom_size:           u8,
    pub ram_size:           u8,
    pub japanese_code:      u8,
    pub licensee_old:       u8,
    pub mask_rom_version:   u8,
    pub complement_check:   u8,
    pub checksum:           u16,
}

impl CartHeader {
    /// CGB support flags of this cartridge.
    pub fn cgb_flag(&self) -> CgbFlag {
        CgbFlag::from_bits_truncate(self.gameboy_type)
    }
}

/// A parsed GBC ROM image.
///
/// Owns the full image bytes. Construction goes through [`GbcBinary::parse`],
/// which never accepts an image shorter than the header region, so every
/// header offset stays in range for the lifetime of the value.
pub struct GbcBinary {
    header:       CartHeader,
    logo_valid:   bool,
    header_valid: bool,
    rom:          RAM,
}

impl GbcBinary {
    /// Parse a ROM image.
    ///
    /// Checks the logo bitmap and the header checksum, and extracts the
    /// header fields. A failed check marks the image invalid but still
    /// yields a binary. Only an image shorter than the full header region
    /// is refused.
    pub fn parse(buffer: Vec<u8>) -> Result<Self> {
        if buffer.len() < HEADER_MIN_LEN {
            return Err(Error::BufferTooShort { min: HEADER_MIN_LEN, len: buffer.len() });
        }

        let logo_valid = Self::valid_logo(&buffer)?;
        let header_valid = Self::valid_header_checksum(&buffer)?;
        let header = Self::extract_header(&buffer)?;

        if !logo_valid {
            warn!("logo bitmap does not match the reference");
        }
        if !header_valid {
            warn!("header checksum mismatch");
        }
        debug!("parsed {} byte image, title {:?}", buffer.len(), trim_trailing_null_bytes(&header.title));

        Ok(Self {
            header:       header,
            logo_valid:   logo_valid,
            header_valid: header_valid,
            rom:          buffer.into(),
        })
    }

    /// Check the logo bitmap region against the reference bitmap.
    ///
    /// The final reference byte lies beyond the compared region and takes
    /// no part in the comparison.
    pub fn valid_logo(buffer: &[u8]) -> Result<bool> {
        if buffer.len() < LOGO_MIN_LEN {
            return Err(Error::BufferTooShort { min: LOGO_MIN_LEN, len: buffer.len() });
        }

        let matches = buffer[LOGO_START..LOGO_END].iter().zip(&NINTENDO_LOGO)
            .fold(true, |acc, (a, b)| acc && (*a == *b));
        Ok(matches)
    }

    /// Check the stored header checksum against one computed over the
    /// header fields.
    pub fn valid_header_checksum(buffer: &[u8]) -> Result<bool> {
        if buffer.len() < HEADER_MIN_LEN {
            return Err(Error::BufferTooShort { min: HEADER_MIN_LEN, len: buffer.len() });
        }

        let mut calculated = 0_u8;
        for byte in &buffer[TITLE_START..=MASK_ROM_VERSION] {
            calculated = calculated.wrapping_sub(*byte).wrapping_sub(1);
        }
        Ok(calculated == buffer[COMPLEMENT_CHECK])
    }

    /// Read every header field from its fixed offset.
    pub fn extract_header(buffer: &[u8]) -> Result<CartHeader> {
        if buffer.len() < HEADER_MIN_LEN {
            return Err(Error::BufferTooShort { min: HEADER_MIN_LEN, len: buffer.len() });
        }

        let title = String::from_utf8_lossy(&buffer[TITLE_START..TITLE_END]).into_owned();

        // A licensee code without two digits reads as 0.
        let licensee_new = combined_char_based_value(buffer[LICENSEE_NEW], buffer[LICENSEE_NEW + 1])
            .unwrap_or(0);

        // A minimum-length image stops one byte short of the checksum high
        // byte. It reads as 0 there.
        let checksum_hi = buffer.get(CHECKSUM + 1).copied().unwrap_or(0);

        Ok(CartHeader {
            title:              title,
            gameboy_type:       buffer[GAMEBOY_TYPE],
            licensee_new:       licensee_new,
            sgb_compatibility:  buffer[SGB_COMPATIBILITY],
            cartridge_type:     buffer[CARTRIDGE_TYPE],
            rom_size:           buffer[ROM_SIZE],
            ram_size:           buffer[RAM_SIZE],
            japanese_code:      buffer[JAPANESE_CODE],
            licensee_old:       buffer[LICENSEE_OLD],
            mask_rom_version:   buffer[MASK_ROM_VERSION],
            complement_check:   buffer[COMPLEMENT_CHECK],
            checksum:           u16::make(checksum_hi, buffer[CHECKSUM]),
        })
    }

    /// Extracted header fields.
    pub fn header(&self) -> &CartHeader {
        &self.header
    }

    /// Result of the logo check.
    pub fn logo_valid(&self) -> bool {
        self.logo_valid
    }

    /// Result of the header checksum check.
    pub fn header_valid(&self) -> bool {
        self.header_valid
    }

    /// The full image bytes.
    pub fn rom(&self) -> &[u8] {
        self.rom.ref_mem()
    }

    /// Image size in bytes.
    pub fn len(&self) -> usize {
        self.rom.len()
    }
}

impl MemInterface8 for GbcBinary {
    fn read_byte(&mut self, addr: u16) -> u8 {
        self.rom.read_byte(addr as usize)
    }

    fn write_byte(&mut self, _addr: u16, _data: u8) {
        // ROM: writes are ignored.
    }
}

impl fmt::Display for GbcBinary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Size:         {} B", self.rom.len())?;
        writeln!(f, "Logo:         {}", if self.logo_valid { "valid" } else { "not valid" })?;
        writeln!(f, "Header:       {}", if self.header_valid { "valid" } else { "not valid" })?;
        writeln!(f, "Title:        {}", trim_trailing_null_bytes(&self.header.title))?;
        writeln!(f, "GB type:      ${:02X}", self.header.gameboy_type)?;
        writeln!(f, "New licensee: ${:02X}", self.header.licensee_new)?;
        writeln!(f, "SGB support:  ${:02X}", self.header.sgb_compatibility)?;
        writeln!(f, "Cart type:    ${:02X}", self.header.cartridge_type)?;
        writeln!(f, "ROM size:     ${:02X}", self.header.rom_size)?;
        writeln!(f, "RAM size:     ${:02X}", self.header.ram_size)?;
        writeln!(f, "Japanese:     ${:02X}", self.header.japanese_code)?;
        writeln!(f, "Old licensee: ${:02X}", self.header.licensee_old)?;
        writeln!(f, "Version:      ${:02X}", self.header.mask_rom_version)?;
        writeln!(f, "Complement:   ${:02X}", self.header.complement_check)?;
        write!(f, "Checksum:     ${:04X}", self.header.checksum)
    }
}
