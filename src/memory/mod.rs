/// Memory components of the cartridge core.

mod binary;
mod ram;
mod register;

pub use binary::{CartHeader, CgbFlag, GbcBinary};
pub use ram::RAM;
pub use register::Register;
