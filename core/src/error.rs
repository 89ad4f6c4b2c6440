use thiserror::Error;

/// Construction-time failures.
///
/// Anything that can go wrong at run time is a diagnostic plus a defined
/// state change, never an error value; see `Machine::step`.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("ROM is {size} bytes but only {max} fit above 0x200")]
    RomTooLarge { size: usize, max: usize },
}

/// Failures while reading a ROM image from its source.
#[derive(Debug, Error)]
pub enum RomError {
    #[error("failed to read ROM")]
    Io(#[from] std::io::Error),
    #[error("ROM is {size} bytes but only {max} fit above 0x200")]
    TooLarge { size: usize, max: usize },
}
