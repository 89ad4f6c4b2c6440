use log::warn;

use crate::constants::{KEY_COUNT, MEMORY_SIZE};
use crate::error::InitError;
use crate::instruction::{self, Instruction};
use crate::opcode::Opcode;
use crate::operations;
use crate::state::{FrameBuffer, State};

/// Outcome of a single interpreter step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// An instruction was fetched and executed.
    Executed,
    /// Fx0A with nothing pressed; the pc stays put so the same instruction
    /// re-executes on the next step. The host just keeps stepping.
    AwaitingKey,
    /// The fetched word decodes to nothing. The pc deliberately stays put,
    /// matching the reference behavior for unknown opcodes.
    UnknownOpcode,
    /// The pc points past the end of memory; nothing was fetched.
    PcOutOfBounds,
}

/// # Machine
/// Owns the machine state and advances it one instruction at a time.
///
/// Interfaces for the host, which calls them in a fixed per-frame order:
/// - overwriting the keypad (`set_keys`)
/// - running a fixed number of steps (`step`, n times)
/// - decrementing the timers and collecting the audio cue (`tick_timers`)
/// - consuming the frame buffer when it changed (`take_frame`)
pub struct Machine {
    state: State,
}

impl Machine {
    pub fn new(rom: &[u8]) -> Result<Self, InitError> {
        Ok(Machine {
            state: State::new(rom)?,
        })
    }

    /// Fetches, decodes, and executes a single instruction.
    ///
    /// Never panics and never returns an error; every run-time fault is a
    /// diagnostic plus the defined state change for that fault.
    pub fn step(&mut self) -> Step {
        let op = match self.fetch() {
            Some(op) => op,
            None => {
                warn!(
                    "program counter {:#06X} is outside addressable memory",
                    self.state.pc
                );
                return Step::PcOutOfBounds;
            }
        };

        match instruction::from_op(op) {
            Instruction::Exec(exec) => {
                self.state = exec(op, &self.state);
                Step::Executed
            }
            Instruction::WaitKey => match operations::keyd(op, &self.state) {
                Some(next) => {
                    self.state = next;
                    Step::Executed
                }
                None => Step::AwaitingKey,
            },
            Instruction::Unknown => {
                warn!(
                    "unknown opcode {:#06X} at {:#05X}",
                    op.word(),
                    self.state.pc
                );
                Step::UnknownOpcode
            }
        }
    }

    /// Overwrites the pressed status of all 16 keys at once.
    pub fn set_keys(&mut self, keys: [bool; KEY_COUNT]) {
        self.state.keypad = keys;
    }

    /// Decrements both timers toward zero.
    ///
    /// Returns true exactly when the sound timer is observed at 1 before
    /// the decrement; that is the host's cue to play its tone.
    pub fn tick_timers(&mut self) -> bool {
        if self.state.delay_timer > 0 {
            self.state.delay_timer -= 1;
        }

        let cue = self.state.sound_timer == 1;
        if self.state.sound_timer > 0 {
            self.state.sound_timer -= 1;
        }
        cue
    }

    /// Returns the frame buffer and clears the redraw flag, or None when
    /// nothing changed since the last consumed frame.
    pub fn take_frame(&mut self) -> Option<FrameBuffer> {
        if self.state.redraw_flag {
            self.state.redraw_flag = false;
            Some(self.state.frame_buffer)
        } else {
            None
        }
    }

    /// Reads the two memory bytes at the pc as one big-endian word.
    fn fetch(&self) -> Option<Opcode> {
        let pc = self.state.pc as usize;
        if pc + 1 >= MEMORY_SIZE {
            return None;
        }
        let left = u16::from(self.state.memory[pc]);
        let right = u16::from(self.state.memory[pc + 1]);
        Some(Opcode::new(left << 8 | right))
    }
}
