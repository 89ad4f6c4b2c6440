use log::warn;

use crate::constants::{
    DISPLAY_HEIGHT, DISPLAY_WIDTH, FONT_GLYPH_SIZE, KEY_COUNT, MEMORY_SIZE, STACK_DEPTH,
};
use crate::opcode::Opcode;
use crate::state::State;

/// clear the frame buffer
pub fn clr(_op: Opcode, state: &State) -> State {
    State {
        pc: state.pc + 0x2,
        frame_buffer: [[0; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
        redraw_flag: true,
        ..*state
    }
}

/// PC = STACK.pop()
pub fn rts(_op: Opcode, state: &State) -> State {
    if state.sp == 0 {
        warn!("return at {:#05X} with an empty call stack", state.pc);
        return State {
            pc: state.pc + 0x2,
            ..*state
        };
    }
    let sp = state.sp - 1;
    State {
        pc: state.stack[sp as usize] + 0x2,
        sp,
        ..*state
    }
}

/// PC = nnn
/// Also covers 0NNN machine-code routines, which are taken as plain jumps.
pub fn jump(op: Opcode, state: &State) -> State {
    State {
        pc: op.nnn(),
        ..*state
    }
}

/// STACK.push(PC); PC = nnn
pub fn call(op: Opcode, state: &State) -> State {
    if state.sp as usize == STACK_DEPTH {
        warn!("call at {:#05X} overflows the call stack", state.pc);
        return State {
            pc: state.pc + 0x2,
            ..*state
        };
    }
    let mut stack = state.stack;
    stack[state.sp as usize] = state.pc;
    State {
        pc: op.nnn(),
        sp: state.sp + 1,
        stack,
        ..*state
    }
}

/// if Vx == nn then pc += 2
pub fn ske(op: Opcode, state: &State) -> State {
    let pc = if state.v[op.x() as usize] == op.nn() {
        state.pc + 0x4
    } else {
        state.pc + 0x2
    };
    State { pc, ..*state }
}

/// if Vx != nn then pc += 2
pub fn skne(op: Opcode, state: &State) -> State {
    let pc = if state.v[op.x() as usize] != op.nn() {
        state.pc + 0x4
    } else {
        state.pc + 0x2
    };
    State { pc, ..*state }
}

/// if Vx == Vy then pc += 2
pub fn skre(op: Opcode, state: &State) -> State {
    let pc = if state.v[op.x() as usize] == state.v[op.y() as usize] {
        state.pc + 0x4
    } else {
        state.pc + 0x2
    };
    State { pc, ..*state }
}

/// Vx = nn
pub fn load(op: Opcode, state: &State) -> State {
    let mut v = state.v;
    v[op.x() as usize] = op.nn();
    State {
        pc: state.pc + 0x2,
        v,
        ..*state
    }
}

/// Vx += nn
/// Overflow is implicitly dropped; the flag register is untouched.
pub fn add(op: Opcode, state: &State) -> State {
    let mut v = state.v;
    v[op.x() as usize] = v[op.x() as usize].wrapping_add(op.nn());
    State {
        pc: state.pc + 0x2,
        v,
        ..*state
    }
}

/// Vx = Vy
pub fn mv(op: Opcode, state: &State) -> State {
    let mut v = state.v;
    v[op.x() as usize] = v[op.y() as usize];
    State {
        pc: state.pc + 0x2,
        v,
        ..*state
    }
}

/// Vx |= Vy
pub fn or(op: Opcode, state: &State) -> State {
    let mut v = state.v;
    v[op.x() as usize] |= v[op.y() as usize];
    State {
        pc: state.pc + 0x2,
        v,
        ..*state
    }
}

/// Vx &= Vy
pub fn and(op: Opcode, state: &State) -> State {
    let mut v = state.v;
    v[op.x() as usize] &= v[op.y() as usize];
    State {
        pc: state.pc + 0x2,
        v,
        ..*state
    }
}

/// Vx ^= Vy
pub fn xor(op: Opcode, state: &State) -> State {
    let mut v = state.v;
    v[op.x() as usize] ^= v[op.y() as usize];
    State {
        pc: state.pc + 0x2,
        v,
        ..*state
    }
}

/// Vx += Vy; VF = carry
pub fn addr(op: Opcode, state: &State) -> State {
    let (res, over) = state.v[op.x() as usize].overflowing_add(state.v[op.y() as usize]);
    let mut v = state.v;
    v[0xF] = if over { 0x1 } else { 0x0 };
    v[op.x() as usize] = res;
    State {
        pc: state.pc + 0x2,
        v,
        ..*state
    }
}

/// Vx -= Vy; VF = !borrow
pub fn sub(op: Opcode, state: &State) -> State {
    let (res, under) = state.v[op.x() as usize].overflowing_sub(state.v[op.y() as usize]);
    let mut v = state.v;
    v[0xF] = if under { 0x0 } else { 0x1 };
    v[op.x() as usize] = res;
    State {
        pc: state.pc + 0x2,
        v,
        ..*state
    }
}

/// Vx >>= 1; VF = the bit shifted out
/// Vy is ignored; the shift reads and writes Vx only.
pub fn shr(op: Opcode, state: &State) -> State {
    let mut v = state.v;
    v[0xF] = v[op.x() as usize] & 0x1;
    v[op.x() as usize] >>= 1;
    State {
        pc: state.pc + 0x2,
        v,
        ..*state
    }
}

/// Vx = Vy - Vx; VF = !borrow
pub fn subn(op: Opcode, state: &State) -> State {
    let (res, under) = state.v[op.y() as usize].overflowing_sub(state.v[op.x() as usize]);
    let mut v = state.v;
    v[0xF] = if under { 0x0 } else { 0x1 };
    v[op.x() as usize] = res;
    State {
        pc: state.pc + 0x2,
        v,
        ..*state
    }
}

/// Vx <<= 1; VF = the bit shifted out
/// Vy is ignored; the shift reads and writes Vx only.
pub fn shl(op: Opcode, state: &State) -> State {
    let mut v = state.v;
    v[0xF] = v[op.x() as usize] >> 7;
    v[op.x() as usize] <<= 1;
    State {
        pc: state.pc + 0x2,
        v,
        ..*state
    }
}

/// if Vx != Vy then pc += 2
pub fn skrne(op: Opcode, state: &State) -> State {
    let pc = if state.v[op.x() as usize] != state.v[op.y() as usize] {
        state.pc + 0x4
    } else {
        state.pc + 0x2
    };
    State { pc, ..*state }
}

/// I = nnn
pub fn loadi(op: Opcode, state: &State) -> State {
    State {
        pc: state.pc + 0x2,
        i: op.nnn(),
        ..*state
    }
}

/// PC = V0 + nnn
pub fn jumpi(op: Opcode, state: &State) -> State {
    State {
        pc: u16::from(state.v[0x0]) + op.nnn(),
        ..*state
    }
}

/// Vx = rand_byte & nn
pub fn rand(op: Opcode, state: &State) -> State {
    let rand_byte: u8 = rand::random();
    let mut v = state.v;
    v[op.x() as usize] = rand_byte & op.nn();
    State {
        pc: state.pc + 0x2,
        v,
        ..*state
    }
}

/// draw_sprite(x=Vx y=Vy rows=n)
/// XORs n sprite rows from memory[I..] into the frame buffer at (Vx, Vy),
/// wrapping on both axes. VF is set if any lit pixel is erased. Sprite rows
/// that would be read from outside memory are skipped.
pub fn draw(op: Opcode, state: &State) -> State {
    let mut v = state.v;
    let mut frame_buffer = state.frame_buffer;

    v[0xF] = 0x0;

    for row in 0..op.n() as usize {
        let addr = state.i as usize + row;
        if addr >= MEMORY_SIZE {
            warn!("sprite row read at {:#05X} is outside memory", addr);
            continue;
        }
        let byte = state.memory[addr];
        let y = (state.v[op.y() as usize] as usize + row) % DISPLAY_HEIGHT;
        for bit in 0..8 {
            let x = (state.v[op.x() as usize] as usize + bit) % DISPLAY_WIDTH;
            let pixel = (byte >> (7 - bit)) & 1;
            v[0xF] |= pixel & frame_buffer[y][x];
            frame_buffer[y][x] ^= pixel;
        }
    }

    State {
        pc: state.pc + 0x2,
        redraw_flag: true,
        v,
        frame_buffer,
        ..*state
    }
}

/// if Vx.pressed then pc += 2
pub fn skpr(op: Opcode, state: &State) -> State {
    let pc = if key_down(state.v[op.x() as usize], state) {
        state.pc + 0x4
    } else {
        state.pc + 0x2
    };
    State { pc, ..*state }
}

/// if !Vx.pressed then pc += 2
pub fn skup(op: Opcode, state: &State) -> State {
    let pc = if !key_down(state.v[op.x() as usize], state) {
        state.pc + 0x4
    } else {
        state.pc + 0x2
    };
    State { pc, ..*state }
}

/// Vx = DT
pub fn moved(op: Opcode, state: &State) -> State {
    let mut v = state.v;
    v[op.x() as usize] = state.delay_timer;
    State {
        pc: state.pc + 0x2,
        v,
        ..*state
    }
}

/// Vx = the lowest pressed key, or None while nothing is pressed
/// While this returns None the pc stays put and the instruction re-executes
/// on the next step; that is the whole suspension mechanism.
pub fn keyd(op: Opcode, state: &State) -> Option<State> {
    let key = state.keypad.iter().position(|&pressed| pressed)?;
    let mut v = state.v;
    v[op.x() as usize] = key as u8;
    Some(State {
        pc: state.pc + 0x2,
        v,
        ..*state
    })
}

/// DT = Vx
pub fn loadd(op: Opcode, state: &State) -> State {
    State {
        pc: state.pc + 0x2,
        delay_timer: state.v[op.x() as usize],
        ..*state
    }
}

/// ST = Vx
pub fn loads(op: Opcode, state: &State) -> State {
    State {
        pc: state.pc + 0x2,
        sound_timer: state.v[op.x() as usize],
        ..*state
    }
}

/// I += Vx
/// 16-bit wrapping arithmetic; I is not clamped to addressable memory.
pub fn addi(op: Opcode, state: &State) -> State {
    State {
        pc: state.pc + 0x2,
        i: state.i.wrapping_add(u16::from(state.v[op.x() as usize])),
        ..*state
    }
}

/// I = Vx * 5
/// The glyph base address for digit Vx; see constants::FONT_SET.
pub fn ldspr(op: Opcode, state: &State) -> State {
    State {
        pc: state.pc + 0x2,
        i: u16::from(state.v[op.x() as usize]) * FONT_GLYPH_SIZE as u16,
        ..*state
    }
}

/// mem[I..I+3] = bcd(Vx)
pub fn bcd(op: Opcode, state: &State) -> State {
    let vx = state.v[op.x() as usize];
    let digits = [vx / 100, vx / 10 % 10, vx % 10];
    let mut memory = state.memory;
    for (offset, digit) in digits.iter().enumerate() {
        match memory.get_mut(state.i as usize + offset) {
            Some(byte) => *byte = *digit,
            None => warn!(
                "BCD write at {:#05X} is outside memory",
                state.i as usize + offset
            ),
        }
    }
    State {
        pc: state.pc + 0x2,
        memory,
        ..*state
    }
}

/// mem[I..=I+x] = V0..=Vx; I += x + 1
pub fn stor(op: Opcode, state: &State) -> State {
    let mut memory = state.memory;
    for offset in 0..=op.x() as usize {
        match memory.get_mut(state.i as usize + offset) {
            Some(byte) => *byte = state.v[offset],
            None => warn!(
                "register store at {:#05X} is outside memory",
                state.i as usize + offset
            ),
        }
    }
    State {
        pc: state.pc + 0x2,
        i: state.i.wrapping_add(u16::from(op.x()) + 1),
        memory,
        ..*state
    }
}

/// V0..=Vx = mem[I..=I+x]; I += x + 1
pub fn read(op: Opcode, state: &State) -> State {
    let mut v = state.v;
    for offset in 0..=op.x() as usize {
        match state.memory.get(state.i as usize + offset) {
            Some(byte) => v[offset] = *byte,
            None => warn!(
                "register load at {:#05X} is outside memory",
                state.i as usize + offset
            ),
        }
    }
    State {
        pc: state.pc + 0x2,
        i: state.i.wrapping_add(u16::from(op.x()) + 1),
        v,
        ..*state
    }
}

/// Looks up a keypad key by register value. Register values past the 16
/// physical keys can't match a key; they are diagnosed and read as released.
fn key_down(vx: u8, state: &State) -> bool {
    let key = vx as usize;
    if key >= KEY_COUNT {
        warn!("key index {:#04X} is outside the keypad", key);
        return false;
    }
    state.keypad[key]
}
