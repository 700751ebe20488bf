//! Volatile register access

use core::ptr::{read_volatile, write_volatile};

/// A single memory-mapped register
#[derive(Debug)]
pub struct Register<T> {
    addr: *mut T,
}

impl<T: Copy> Register<T> {
    /// Create a register handle at `addr`
    ///
    /// # Safety
    ///
    /// `addr` must be valid for volatile reads and writes of `T`, suitably
    /// aligned, and not accessed through any other handle while this one
    /// is in use.
    pub const unsafe fn new(addr: usize) -> Self {
        Self {
            addr: addr as *mut T,
        }
    }

    /// Read the register
    pub fn read(&self) -> T {
        // SAFETY: validity guaranteed by the contract of `new`
        unsafe { read_volatile(self.addr) }
    }

    /// Write the register
    pub fn write(&mut self, value: T) {
        // SAFETY: validity guaranteed by the contract of `new`
        unsafe { write_volatile(self.addr, value) }
    }
}
