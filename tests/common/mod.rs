#![allow(dead_code)]

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};

/// Records every write; fails all of them once `fail` is set.
#[derive(Default)]
pub struct MockI2c {
    pub writes: Vec<(u8, Vec<u8>)>,
    pub fail: bool,
}

impl MockI2c {
    pub fn failing() -> Self {
        Self {
            writes: Vec::new(),
            fail: true,
        }
    }

    pub fn bytes(&self) -> Vec<Vec<u8>> {
        self.writes.iter().map(|(_, data)| data.clone()).collect()
    }
}

impl ErrorType for MockI2c {
    type Error = ErrorKind;
}

impl I2c for MockI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if self.fail {
            return Err(ErrorKind::Bus);
        }
        for operation in operations {
            if let Operation::Write(data) = operation {
                self.writes.push((address, data.to_vec()));
            }
        }
        Ok(())
    }
}
