use std::io::Read;

use crate::constants::MAX_ROM_SIZE;
use crate::error::RomError;

/// Reads a raw headerless ROM image to its end.
///
/// The bytes are loaded verbatim at 0x200 later, so anything longer than
/// the space above 0x200 is rejected here.
pub fn read_rom(reader: &mut dyn Read) -> Result<Vec<u8>, RomError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    if bytes.len() > MAX_ROM_SIZE {
        return Err(RomError::TooLarge {
            size: bytes.len(),
            max: MAX_ROM_SIZE,
        });
    }
    Ok(bytes)
}
