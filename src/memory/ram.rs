/// Generic, general purpose RAM. Used for ROM image backing and register
/// storage.
///
/// Reads and writes single bytes.
pub struct RAM(Vec<u8>);

impl From<Vec<u8>> for RAM {
    fn from(buffer: Vec<u8>) -> Self {
        Self(buffer)
    }
}

impl RAM {
    pub fn new(size: usize) -> Self {
        Self(vec![0; size])
    }

    /// Get the size of the memory in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn ref_mem<'a>(&'a self) -> &'a [u8] {
        &self.0
    }

    #[inline]
    pub fn read_byte(&self, addr: usize) -> u8 {
        self.0[addr]
    }
    #[inline]
    pub fn write_byte(&mut self, addr: usize, data: u8) {
        self.0[addr] = data;
    }
}
