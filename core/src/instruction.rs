use crate::opcode::Opcode;
use crate::operations::*;
use crate::state::State;

/// How a fetched word should be handled.
pub enum Instruction {
    /// A pure state transition from `operations`.
    Exec(fn(Opcode, &State) -> State),
    /// Fx0A; suspends by leaving the pc in place until a key is down.
    WaitKey,
    /// Nothing we recognize.
    Unknown,
}

/// Selects the Instruction for a given Opcode
pub fn from_op(op: Opcode) -> Instruction {
    use Instruction::{Exec, Unknown, WaitKey};

    match op.nibbles() {
        (0x0, 0x0, 0xE, 0x0) => Exec(clr),
        (0x0, 0x0, 0xE, 0xE) => Exec(rts),
        // 0NNN called a machine-code routine on the original hardware; here
        // it is taken as an unconditional jump
        (0x0, ..) => Exec(jump),
        (0x1, ..) => Exec(jump),
        (0x2, ..) => Exec(call),
        (0x3, ..) => Exec(ske),
        (0x4, ..) => Exec(skne),
        (0x5, .., 0x0) => Exec(skre),
        (0x6, ..) => Exec(load),
        (0x7, ..) => Exec(add),
        (0x8, .., 0x0) => Exec(mv),
        (0x8, .., 0x1) => Exec(or),
        (0x8, .., 0x2) => Exec(and),
        (0x8, .., 0x3) => Exec(xor),
        (0x8, .., 0x4) => Exec(addr),
        (0x8, .., 0x5) => Exec(sub),
        (0x8, .., 0x6) => Exec(shr),
        (0x8, .., 0x7) => Exec(subn),
        (0x8, .., 0xE) => Exec(shl),
        (0x9, .., 0x0) => Exec(skrne),
        (0xA, ..) => Exec(loadi),
        (0xB, ..) => Exec(jumpi),
        (0xC, ..) => Exec(rand),
        (0xD, ..) => Exec(draw),
        (0xE, _, 0x9, 0xE) => Exec(skpr),
        (0xE, _, 0xA, 0x1) => Exec(skup),
        (0xF, _, 0x0, 0x7) => Exec(moved),
        (0xF, _, 0x0, 0xA) => WaitKey,
        (0xF, _, 0x1, 0x5) => Exec(loadd),
        (0xF, _, 0x1, 0x8) => Exec(loads),
        (0xF, _, 0x1, 0xE) => Exec(addi),
        (0xF, _, 0x2, 0x9) => Exec(ldspr),
        (0xF, _, 0x3, 0x3) => Exec(bcd),
        (0xF, _, 0x5, 0x5) => Exec(stor),
        (0xF, _, 0x6, 0x5) => Exec(read),
        _ => Unknown,
    }
}
