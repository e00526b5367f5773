use crate::mach::Vector;

/// ## Instruction set
///
/// Every character on the grid decodes to exactly one instruction.
/// Characters with no meaning decode to `Nop`, so decoding never fails.
///
/// Decoding is context free. String mode is handled by the machine
/// before the decoded instruction is considered.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instruction {
    // *** Movement
    /// Enter string mode until the same quote is seen again.
    Quote(Quote),
    /// Set the direction to a cardinal vector.
    Direction(Vector),
    /// Reflect the current direction.
    Mirror(Mirror),
    /// Choose one of the four cardinal directions at random.
    Random,
    /// Skip the next cell.
    Trampoline,
    /// Pop a value and skip the next cell if it is zero.
    Conditional,
    /// Pop y then x and set the position directly.
    Teleport,
    /// Stop the program.
    End,

    // *** Literals and arithmetic
    /// Push a hex digit.
    Digit(u8),
    /// Pop y then x and push `x op y`.
    Binary(Binary),

    // *** Stack manipulation
    Duplicate,
    Discard,
    Swap,
    RotateRight,
    RotateLeft,
    RotateThree,
    Reverse,
    Length,
    Register,
    Split,
    Merge,

    // *** I/O and self modification
    OutputNumber,
    OutputChar,
    Input,
    Get,
    Put,

    Nop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    Single,
    Double,
}

impl Quote {
    pub fn from_char(ch: char) -> Option<Quote> {
        match ch {
            '\'' => Some(Quote::Single),
            '"' => Some(Quote::Double),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirror {
    Slash,
    Backslash,
    Vertical,
    Horizontal,
    Hash,
}

impl Mirror {
    pub fn reflect(self, d: Vector) -> Vector {
        use Mirror::*;
        match self {
            Slash => Vector::new(-d.y, -d.x),
            Backslash => Vector::new(d.y, d.x),
            Vertical => Vector::new(-d.x, d.y),
            Horizontal => Vector::new(d.x, -d.y),
            Hash => Vector::new(-d.x, -d.y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binary {
    Add,
    Sub,
    Mul,
    Rem,
    Div,
    Eq,
    Lt,
    Gt,
}

impl Binary {
    pub fn apply(self, x: f64, y: f64) -> f64 {
        use Binary::*;
        match self {
            Add => x + y,
            Sub => x - y,
            Mul => x * y,
            Rem => x % y,
            Div => x / y,
            Eq => truth(x == y),
            Lt => truth(x < y),
            Gt => truth(x > y),
        }
    }
}

fn truth(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}

impl Instruction {
    pub fn decode(ch: char) -> Instruction {
        use Instruction::*;
        if let Some(quote) = self::Quote::from_char(ch) {
            return Quote(quote);
        }
        match ch {
            '^' => Direction(Vector::UP),
            '>' => Direction(Vector::RIGHT),
            'v' => Direction(Vector::DOWN),
            '<' => Direction(Vector::LEFT),

            '/' => Mirror(self::Mirror::Slash),
            '\\' => Mirror(self::Mirror::Backslash),
            '|' => Mirror(self::Mirror::Vertical),
            '_' => Mirror(self::Mirror::Horizontal),
            '#' => Mirror(self::Mirror::Hash),

            '0'..='9' | 'a'..='f' => match ch.to_digit(16) {
                Some(n) => Digit(n as u8),
                None => Nop,
            },

            '+' => Binary(self::Binary::Add),
            '-' => Binary(self::Binary::Sub),
            '*' => Binary(self::Binary::Mul),
            '%' => Binary(self::Binary::Rem),
            ',' => Binary(self::Binary::Div),
            '=' => Binary(self::Binary::Eq),
            '(' => Binary(self::Binary::Lt),
            ')' => Binary(self::Binary::Gt),

            ':' => Duplicate,
            '~' => Discard,
            '$' => Swap,
            '}' => RotateRight,
            '{' => RotateLeft,
            '@' => RotateThree,
            'r' => Reverse,
            'l' => Length,
            '&' => Register,
            '[' => Split,
            ']' => Merge,

            ';' => End,
            '.' => Teleport,
            'x' => Random,
            '!' => Trampoline,
            '?' => Conditional,

            'n' => OutputNumber,
            'o' => OutputChar,
            'i' => Input,
            'g' => Get,
            'p' => Put,

            _ => Nop,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_digits() {
        assert_eq!(Instruction::decode('0'), Instruction::Digit(0));
        assert_eq!(Instruction::decode('9'), Instruction::Digit(9));
        assert_eq!(Instruction::decode('a'), Instruction::Digit(10));
        assert_eq!(Instruction::decode('f'), Instruction::Digit(15));
        assert_eq!(Instruction::decode('F'), Instruction::Nop);
        assert_eq!(Instruction::decode('g'), Instruction::Get);
    }

    #[test]
    fn test_unknown_is_nop() {
        assert_eq!(Instruction::decode(' '), Instruction::Nop);
        assert_eq!(Instruction::decode('Z'), Instruction::Nop);
        assert_eq!(Instruction::decode('λ'), Instruction::Nop);
    }

    #[test]
    fn test_quotes() {
        assert_eq!(Instruction::decode('\''), Instruction::Quote(Quote::Single));
        assert_eq!(Instruction::decode('"'), Instruction::Quote(Quote::Double));
    }

    #[test]
    fn test_mirrors_from_right() {
        let r = Vector::RIGHT;
        assert_eq!(Mirror::Slash.reflect(r), Vector::UP);
        assert_eq!(Mirror::Backslash.reflect(r), Vector::DOWN);
        assert_eq!(Mirror::Vertical.reflect(r), Vector::LEFT);
        assert_eq!(Mirror::Horizontal.reflect(r), Vector::RIGHT);
        assert_eq!(Mirror::Hash.reflect(r), Vector::LEFT);
    }

    #[test]
    fn test_mirrors_are_involutive() {
        use Mirror::*;
        for m in [Slash, Backslash, Vertical, Horizontal, Hash].iter() {
            for d in Vector::CARDINALS.iter() {
                assert_eq!(m.reflect(m.reflect(*d)), *d);
                assert!(Vector::CARDINALS.contains(&m.reflect(*d)));
            }
        }
    }

    #[test]
    fn test_binary() {
        assert_eq!(Binary::Sub.apply(5.0, 3.0), 2.0);
        assert_eq!(Binary::Div.apply(1.0, 4.0), 0.25);
        assert_eq!(Binary::Rem.apply(-7.0, 3.0), -1.0);
        assert_eq!(Binary::Lt.apply(1.0, 2.0), 1.0);
        assert_eq!(Binary::Gt.apply(1.0, 2.0), 0.0);
        assert_eq!(Binary::Eq.apply(2.0, 2.0), 1.0);
        assert!(Binary::Div.apply(1.0, 0.0).is_infinite());
    }
}
