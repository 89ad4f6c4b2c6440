/// Total addressable memory; valid addresses are 0x000..=0xFFF.
pub const MEMORY_SIZE: usize = 4096;

/// Where the font sprites are installed.
pub const FONT_ADDR: usize = 0x050;

/// Where ROMs are loaded and where execution begins.
pub const PROGRAM_ADDR: usize = 0x200;

/// The largest ROM that fits between PROGRAM_ADDR and the end of memory.
pub const MAX_ROM_SIZE: usize = MEMORY_SIZE - PROGRAM_ADDR;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Return addresses the call stack can hold.
pub const STACK_DEPTH: usize = 16;

/// Logical keys on the hexadecimal keypad.
pub const KEY_COUNT: usize = 16;

/// Bytes per font glyph; glyph `d` starts at `FONT_ADDR + d * FONT_GLYPH_SIZE`.
pub const FONT_GLYPH_SIZE: usize = 5;

/// The 16 hexadecimal digit sprites, 5 bytes each, 8 pixels wide with the
/// glyph in the high nibble of every row.
pub const FONT_SET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
