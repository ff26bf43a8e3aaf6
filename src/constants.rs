/// Constants of the GBC cartridge layout.

/// Fixed offsets and sizes of the cartridge header.
///
/// All offsets are relative to the start of the ROM image.
pub mod header {
    /// Start of the logo bitmap region.
    pub const LOGO_START: usize = 0x104;
    /// End of the compared logo region (exclusive).
    pub const LOGO_END: usize = 0x133;
    /// Start of the game title.
    pub const TITLE_START: usize = 0x134;
    /// End of the game title (exclusive).
    pub const TITLE_END: usize = 0x142;
    /// CGB support flag byte.
    pub const GAMEBOY_TYPE: usize = 0x143;
    /// New-style licensee code: two ASCII digits.
    pub const LICENSEE_NEW: usize = 0x144;
    /// SGB compatibility flag byte.
    pub const SGB_COMPATIBILITY: usize = 0x146;
    /// Cartridge hardware code.
    pub const CARTRIDGE_TYPE: usize = 0x147;
    /// ROM size code.
    pub const ROM_SIZE: usize = 0x148;
    /// RAM size code.
    pub const RAM_SIZE: usize = 0x149;
    /// Destination code. 0 means Japan.
    pub const JAPANESE_CODE: usize = 0x14A;
    /// Old-style licensee code.
    pub const LICENSEE_OLD: usize = 0x14B;
    /// Mask ROM version number.
    pub const MASK_ROM_VERSION: usize = 0x14C;
    /// Expected value of the header checksum.
    pub const COMPLEMENT_CHECK: usize = 0x14D;
    /// Global checksum, low byte first.
    pub const CHECKSUM: usize = 0x14E;

    /// Minimum image length for the logo check.
    pub const LOGO_MIN_LEN: usize = LOGO_END;
    /// Minimum image length for the checksum check and field extraction.
    pub const HEADER_MIN_LEN: usize = 0x14F;

    /// Reference logo bitmap. The final byte lies outside the compared region.
    pub const NINTENDO_LOGO: [u8; 48] = [
        0xCE, 0xED, 0x66, 0x66, 0xCC, 0x0D, 0x00, 0x0B,
        0x03, 0x73, 0x00, 0x83, 0x00, 0x0C, 0x00, 0x0D,
        0x00, 0x08, 0x11, 0x1F, 0x88, 0x89, 0x00, 0x0E,
        0xDC, 0xCC, 0x6E, 0xE6, 0xDD, 0xDD, 0xD9, 0x99,
        0xBB, 0xBB, 0x67, 0x63, 0x6E, 0x0E, 0xEC, 0xCC,
        0xDD, 0xDC, 0x99, 0x9F, 0xBB, 0xB9, 0x33, 0x3E,
    ];
}

/// Register constants.
pub mod register {
    /// Number of bytes in a register.
    pub const SIZE: usize = 2;
}
