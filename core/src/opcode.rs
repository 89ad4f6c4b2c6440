/// # Opcodes
///
/// A Chip-8 opcode is one big-endian 16-bit word. Dispatch is cased on some
/// combination of its nibbles:
/// - `(n, _, _, _)` broad categorization; applies to all opcodes
/// - `(_, _, _, n)` specific behavior within a category
/// - `(_, _, n, n)` more specific behavior within a category
/// - `(_, n, n, n)` some fixed function (e.g. 00E0; clear screen)
///
/// Nibbles not used to select the operation carry its data:
/// - `(_, n, n, n)` a 12-bit address
/// - `(_, _, n, n)` a byte assigned to and/or compared with Vx
/// - `(_, n, _, _)` the register Vx or the register range V0..Vx
/// - `(_, _, n, _)` the register Vy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode(u16);

impl Opcode {
    pub fn new(word: u16) -> Self {
        Opcode(word)
    }

    /// The raw instruction word.
    pub fn word(self) -> u16 {
        self.0
    }

    /// The component nibbles, most significant first.
    pub fn nibbles(self) -> (u8, u8, u8, u8) {
        (((self.0 & 0xF000) >> 12) as u8, self.x(), self.y(), self.n())
    }

    /// The second nibble. `[_x__]`
    pub fn x(self) -> u8 {
        ((self.0 & 0x0F00) >> 8) as u8
    }

    /// The third nibble. `[__y_]`
    pub fn y(self) -> u8 {
        ((self.0 & 0x00F0) >> 4) as u8
    }

    /// The fourth nibble. `[___n]`
    pub fn n(self) -> u8 {
        (self.0 & 0x000F) as u8
    }

    /// The least significant byte. `[__nn]`
    pub fn nn(self) -> u8 {
        (self.0 & 0x00FF) as u8
    }

    /// Everything but the most significant nibble. `[_nnn]`
    pub fn nnn(self) -> u16 {
        self.0 & 0x0FFF
    }
}

#[cfg(test)]
mod test_opcode {
    use super::*;

    #[test]
    fn test_nibbles() {
        assert_eq!(Opcode::new(0xABCD).nibbles(), (0xA, 0xB, 0xC, 0xD));
    }

    #[test]
    fn test_x() {
        assert_eq!(Opcode::new(0xABCD).x(), 0xB);
    }

    #[test]
    fn test_y() {
        assert_eq!(Opcode::new(0xABCD).y(), 0xC);
    }

    #[test]
    fn test_n() {
        assert_eq!(Opcode::new(0xABCD).n(), 0xD);
    }

    #[test]
    fn test_nn() {
        assert_eq!(Opcode::new(0xABCD).nn(), 0xCD);
    }

    #[test]
    fn test_nnn() {
        assert_eq!(Opcode::new(0xABCD).nnn(), 0x0BCD);
    }

    #[test]
    fn test_word() {
        assert_eq!(Opcode::new(0xABCD).word(), 0xABCD);
    }
}
