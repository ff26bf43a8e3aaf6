mod constants;
mod error;
mod memory;
mod utils;

pub use error::{Error, Result};
pub use memory::{CartHeader, CgbFlag, GbcBinary, Register, RAM};
pub use utils::ascii::{combined_char_based_value, trim_trailing_null_bytes};
pub use utils::meminterface::MemInterface8;
