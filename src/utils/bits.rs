/// Bit manipulation.

pub mod u8 {
    /// Set the nth bit.
    pub const fn bit(n: usize) -> u8 {
        1 << n
    }

    /// Check if the nth bit is set.
    pub const fn test_bit(val: u8, n: usize) -> bool {
        (val & bit(n)) != 0
    }
}
