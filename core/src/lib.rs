pub use error::{InitError, RomError};
pub use machine::{Machine, Step};
pub use rom::read_rom;
pub use state::{FrameBuffer, State};

pub mod constants;
mod error;
mod instruction;
mod machine;
mod opcode;
mod operations;
mod rom;
mod state;
