use crate::error::HackError;
use crate::traits::RamAccess;
use std::fmt::{self, Formatter};
use std::str::FromStr;

/// Size of the 2600's RIOT RAM
pub const RAM_SIZE: usize = 128;

/// Owned copy of the console RAM, the way a host hands it to the hooks
#[derive(Clone, PartialEq, Eq)]
pub struct AtariRam {
    cells: [u8; RAM_SIZE],
}

impl AtariRam {
    pub fn new() -> AtariRam {
        AtariRam {
            cells: [0; RAM_SIZE],
        }
    }

    /// Copies `slice` starting at cell 0, anything past `RAM_SIZE` is dropped
    pub fn from_slice(slice: &[u8]) -> AtariRam {
        let mut ram = AtariRam::new();
        ram.load(slice, 0);
        ram
    }

    pub fn load(&mut self, slice: &[u8], offset: usize) {
        let end = (offset + slice.len()).min(RAM_SIZE);
        if offset >= end {
            return;
        }
        self.cells[offset..end].copy_from_slice(&slice[..end - offset]);
    }

    /// Cells whose value differs from `other`, as `(offset, new value)`
    pub fn diff(&self, other: &AtariRam) -> Vec<(usize, u8)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, (_, b))| (i, *b))
            .collect()
    }
}

impl Default for AtariRam {
    fn default() -> Self {
        AtariRam::new()
    }
}

impl RamAccess for AtariRam {
    fn get_ram(&self) -> &[u8] {
        &self.cells
    }

    fn set_ram(&mut self, offset: usize, value: u8) {
        self.cells[offset] = value;
    }
}

impl fmt::Display for AtariRam {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, line) in self.cells.chunks(16).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{:02X} |", i * 16)?;
            for byte in line {
                write!(f, " {:02X}", byte)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for AtariRam {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "AtariRam {:02X?}", &self.cells[..])
    }
}

/// Parses 128 bytes written as hex digits; whitespace between bytes is ignored
impl FromStr for AtariRam {
    type Err = HackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: Vec<u8> = s.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
        if digits.len() != RAM_SIZE * 2 {
            return Err(HackError::BadRamDump(format!(
                "expected {} hex digits, got {}",
                RAM_SIZE * 2,
                digits.len()
            )));
        }
        let mut ram = AtariRam::new();
        for (i, pair) in digits.chunks(2).enumerate() {
            let text = String::from_utf8_lossy(pair);
            let bad = || HackError::BadRamDump(format!("'{}' at byte {} is not hex", text, i));
            // from_str_radix takes a leading sign
            if !pair.iter().all(u8::is_ascii_hexdigit) {
                return Err(bad());
            }
            ram.cells[i] = u8::from_str_radix(&text, 16).map_err(|_| bad())?;
        }
        Ok(ram)
    }
}
