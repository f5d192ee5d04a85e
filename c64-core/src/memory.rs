use crate::constants::processor_port;

pub const MEMORY_SIZE: usize = 0x10000;

/// The flat 64 KiB address space. Every access is indexed by a `u16`,
/// so address arithmetic wraps modulo 2^16 by construction and no read
/// or write can fault. The array is owned exclusively by the processor
/// that holds it; hosts reach it through the processor's public field.
pub struct Memory {
    data: [u8; MEMORY_SIZE],
}

impl Memory {
    pub fn new() -> Memory {
        let mut memory = Memory {
            data: [0; MEMORY_SIZE],
        };
        memory.initialize();
        memory
    }

    /// Zero the address space, then restore the two 6510 port
    /// registers that the hardware exposes at $0000/$0001.
    pub fn initialize(&mut self) {
        self.data = [0; MEMORY_SIZE];
        self.data[processor_port::DDR_ADDRESS as usize] = processor_port::DDR_RESET_VALUE;
        self.data[processor_port::DATA_ADDRESS as usize] = processor_port::DATA_RESET_VALUE;
    }

    pub fn read_u8(&self, address: u16) -> u8 {
        self.data[address as usize]
    }

    pub fn set_u8(&mut self, address: u16, value: u8) {
        self.data[address as usize] = value;
    }

    /// Read a little-endian word. The second byte wraps around the top
    /// of the address space rather than running off the end.
    pub fn read_u16(&self, address: u16) -> u16 {
        u16::from_le_bytes([
            self.read_u8(address),
            self.read_u8(address.wrapping_add(1)),
        ])
    }

    /// Copy a program image into the address space starting at
    /// `origin`. The destination wraps like every other access.
    pub fn load(&mut self, origin: u16, bytes: &[u8]) {
        for (offset, &byte) in bytes.iter().enumerate() {
            self.set_u8(origin.wrapping_add(offset as u16), byte);
        }
    }
}
