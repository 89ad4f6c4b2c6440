use crate::constants::{
    DISPLAY_HEIGHT, DISPLAY_WIDTH, FONT_ADDR, FONT_SET, KEY_COUNT, MAX_ROM_SIZE, MEMORY_SIZE,
    PROGRAM_ADDR, STACK_DEPTH,
};
use crate::error::InitError;

/// The frame buffer is indexed as `[y][x]`; cells are 0 (off) or 1 (on).
pub type FrameBuffer = [[u8; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// The complete machine state.
///
/// ## CPU
/// - (v) 16 general purpose 8-bit registers; VF doubles as the flag register
///   for carry, borrow, shifted-out bits, and sprite collisions
/// - (i) a 16-bit address register; only the low 12 bits address memory but
///   no clamping is applied
/// - (pc) a 16-bit program counter, starting at 0x200
/// - (stack, sp) a 16-slot return-address stack; `sp` counts occupied slots
///
/// ## Timers
/// - two 8-bit timers (delay & sound), decremented once per frame by the
///   host and never below zero
///
/// ## Memory
/// - 4096 bytes, with the font sprites at 0x050..0x0A0 and the ROM at 0x200
///
/// ## I/O
/// - a 64x32 1-bit frame buffer plus a redraw flag the renderer consumes
/// - the pressed status of the 16 keypad keys, overwritten wholesale once
///   per frame by the host
pub struct State {
    pub memory: [u8; MEMORY_SIZE],
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub stack: [u16; STACK_DEPTH],
    pub sp: u8,
    pub delay_timer: u8,
    pub sound_timer: u8,
    pub frame_buffer: FrameBuffer,
    pub redraw_flag: bool,
    pub keypad: [bool; KEY_COUNT],
}

impl State {
    /// Builds a zeroed machine with the font installed and the ROM in place.
    pub fn new(rom: &[u8]) -> Result<Self, InitError> {
        if rom.len() > MAX_ROM_SIZE {
            return Err(InitError::RomTooLarge {
                size: rom.len(),
                max: MAX_ROM_SIZE,
            });
        }

        let mut memory = [0; MEMORY_SIZE];
        memory[FONT_ADDR..FONT_ADDR + FONT_SET.len()].copy_from_slice(&FONT_SET);
        memory[PROGRAM_ADDR..PROGRAM_ADDR + rom.len()].copy_from_slice(rom);

        Ok(State {
            memory,
            v: [0; 16],
            i: 0,
            pc: PROGRAM_ADDR as u16,
            stack: [0; STACK_DEPTH],
            sp: 0,
            delay_timer: 0,
            sound_timer: 0,
            frame_buffer: [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
            redraw_flag: false,
            keypad: [false; KEY_COUNT],
        })
    }
}

#[cfg(test)]
mod test_state {
    use super::*;

    #[test]
    fn test_installs_font() {
        let state = State::new(&[]).unwrap();
        assert_eq!(state.memory[FONT_ADDR..FONT_ADDR + 80], FONT_SET);
        // the "0" glyph sits at the very start of the table
        assert_eq!(state.memory[0x50..0x55], [0xF0, 0x90, 0x90, 0x90, 0xF0]);
    }

    #[test]
    fn test_zeroes_everything_else() {
        let state = State::new(&[]).unwrap();
        assert!(state.memory[..FONT_ADDR].iter().all(|&b| b == 0));
        assert!(state.memory[FONT_ADDR + 80..].iter().all(|&b| b == 0));
        assert_eq!(state.v, [0; 16]);
        assert_eq!(state.sp, 0);
        assert!(!state.redraw_flag);
    }

    #[test]
    fn test_loads_rom_at_0x200() {
        let state = State::new(&[0xAA, 0xBB]).unwrap();
        assert_eq!(state.memory[0x200..0x202], [0xAA, 0xBB]);
        assert_eq!(state.pc, 0x200);
    }

    #[test]
    fn test_accepts_largest_rom() {
        assert!(State::new(&[0xFF; MAX_ROM_SIZE]).is_ok());
    }

    #[test]
    fn test_rejects_oversized_rom() {
        match State::new(&[0xFF; MAX_ROM_SIZE + 1]) {
            Err(InitError::RomTooLarge { size, max }) => {
                assert_eq!(size, MAX_ROM_SIZE + 1);
                assert_eq!(max, MAX_ROM_SIZE);
            }
            _ => panic!("oversized ROM should be rejected"),
        }
    }
}
