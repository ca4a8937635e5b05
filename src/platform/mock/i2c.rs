//! Mock I2C implementation for testing

use crate::platform::{traits::I2cInterface, I2cError, PlatformError, Result};
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

/// I2C transaction type for logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I2cTransaction {
    /// Write transaction
    Write { addr: u8, data: Vec<u8> },
    /// Read transaction
    Read { addr: u8, len: usize },
    /// Write-Read transaction
    WriteRead {
        addr: u8,
        write_data: Vec<u8>,
        read_len: usize,
    },
}

/// Mock I2C implementation
///
/// Records all transactions for test verification, allows pre-programming
/// expected read data, and supports failure injection so short-circuiting
/// register sequences can be exercised.
#[derive(Debug, Default)]
pub struct MockI2c {
    transactions: RefCell<Vec<I2cTransaction>>,
    read_data: RefCell<Vec<u8>>,
    fail_after: Cell<Option<usize>>,
}

impl MockI2c {
    /// Create a new mock I2C
    pub fn new() -> Self {
        Self::default()
    }

    /// Get transaction log (for test verification)
    pub fn transactions(&self) -> Vec<I2cTransaction> {
        self.transactions.borrow().clone()
    }

    /// Clear transaction log
    pub fn clear_transactions(&mut self) {
        self.transactions.borrow_mut().clear();
    }

    /// Set data to return for read operations
    ///
    /// Bytes are consumed front-to-back across reads; reads beyond the queued
    /// data leave the caller's buffer untouched (zeros in practice).
    pub fn set_read_data(&mut self, data: &[u8]) {
        let mut read_data = self.read_data.borrow_mut();
        read_data.clear();
        read_data.extend_from_slice(data);
    }

    /// Fail every transaction after the next `ok_ops` successful ones
    ///
    /// Failed transactions return `I2cError::Nack` and are not recorded.
    pub fn fail_after(&self, ok_ops: usize) {
        self.fail_after.set(Some(ok_ops));
    }

    fn check_failure(&self) -> Result<()> {
        if let Some(remaining) = self.fail_after.get() {
            if remaining == 0 {
                return Err(PlatformError::I2c(I2cError::Nack));
            }
            self.fail_after.set(Some(remaining - 1));
        }
        Ok(())
    }

    fn fill_from_read_data(&self, buffer: &mut [u8]) {
        let mut read_data = self.read_data.borrow_mut();
        let to_read = core::cmp::min(buffer.len(), read_data.len());
        buffer[..to_read].copy_from_slice(&read_data[..to_read]);
        read_data.drain(..to_read);
    }
}

impl I2cInterface for MockI2c {
    fn write(&mut self, addr: u8, data: &[u8]) -> Result<()> {
        self.check_failure()?;
        self.transactions.borrow_mut().push(I2cTransaction::Write {
            addr,
            data: data.to_vec(),
        });
        Ok(())
    }

    fn read(&mut self, addr: u8, buffer: &mut [u8]) -> Result<()> {
        self.check_failure()?;
        self.transactions.borrow_mut().push(I2cTransaction::Read {
            addr,
            len: buffer.len(),
        });
        self.fill_from_read_data(buffer);
        Ok(())
    }

    fn write_read(&mut self, addr: u8, write_data: &[u8], read_buffer: &mut [u8]) -> Result<()> {
        self.check_failure()?;
        self.transactions
            .borrow_mut()
            .push(I2cTransaction::WriteRead {
                addr,
                write_data: write_data.to_vec(),
                read_len: read_buffer.len(),
            });
        self.fill_from_read_data(read_buffer);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_i2c_write() {
        let mut i2c = MockI2c::new();
        i2c.write(0x50, &[0x01, 0x02, 0x03]).unwrap();

        let transactions = i2c.transactions();
        assert_eq!(transactions.len(), 1);
        assert_eq!(
            transactions[0],
            I2cTransaction::Write {
                addr: 0x50,
                data: vec![0x01, 0x02, 0x03]
            }
        );
    }

    #[test]
    fn test_mock_i2c_read() {
        let mut i2c = MockI2c::new();
        i2c.set_read_data(&[0xAA, 0xBB, 0xCC]);

        let mut buffer = [0u8; 3];
        i2c.read(0x51, &mut buffer).unwrap();

        assert_eq!(buffer, [0xAA, 0xBB, 0xCC]);

        let transactions = i2c.transactions();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0], I2cTransaction::Read { addr: 0x51, len: 3 });
    }

    #[test]
    fn test_mock_i2c_write_read() {
        let mut i2c = MockI2c::new();
        i2c.set_read_data(&[0x12, 0x34]);

        let mut read_buf = [0u8; 2];
        i2c.write_read(0x52, &[0xA0], &mut read_buf).unwrap();

        assert_eq!(read_buf, [0x12, 0x34]);

        let transactions = i2c.transactions();
        assert_eq!(transactions.len(), 1);
        assert_eq!(
            transactions[0],
            I2cTransaction::WriteRead {
                addr: 0x52,
                write_data: vec![0xA0],
                read_len: 2
            }
        );
    }

    #[test]
    fn test_mock_i2c_empty_read_leaves_buffer() {
        let mut i2c = MockI2c::new();
        let mut buffer = [0u8; 2];
        i2c.read(0x53, &mut buffer).unwrap();
        assert_eq!(buffer, [0x00, 0x00]);
    }

    #[test]
    fn test_mock_i2c_fail_after() {
        let mut i2c = MockI2c::new();
        i2c.fail_after(2);

        i2c.write(0x50, &[0x01]).unwrap();
        i2c.write(0x50, &[0x02]).unwrap();
        assert_eq!(
            i2c.write(0x50, &[0x03]),
            Err(PlatformError::I2c(I2cError::Nack))
        );
        assert_eq!(
            i2c.write(0x50, &[0x04]),
            Err(PlatformError::I2c(I2cError::Nack))
        );

        // Failed transactions are not recorded
        assert_eq!(i2c.transactions().len(), 2);
    }
}
