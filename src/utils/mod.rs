/// Helpers.

pub mod bits;
pub mod bytes;

pub mod ascii;
pub mod meminterface;
