use super::{Channel, Cursor, Frame, Grid, Random, Randomness, Stacks, Vector};
use crate::lang::{Error, Instruction, Quote};
use tracing::{trace, warn};

type Result<T> = std::result::Result<T, Error>;

pub const ABS_EPSILON: f64 = 1e-12;
pub const REL_EPSILON: f64 = 1e-8;

/// ## Execution state of a machine

#[derive(Debug, Clone, PartialEq)]
pub enum State {
    Running,
    /// Reached `;`.
    Completed,
    /// Stopped by a fatal error. The machine will not execute again.
    Failed(Error),
}

/// ## The ><> machine
///
/// Owns the grid, cursor, stacks and I/O of one program.
/// The instruction under the cursor is executed immediately on
/// construction, then every `step` moves once and executes the new cell.
///
/// ```
/// use fish::mach::Machine;
/// let mut fish = Machine::new("\"olleh\"ooooo;", "");
/// while fish.is_running() {
///     fish.step().unwrap();
/// }
/// assert_eq!(fish.output(), "hello");
/// ```

pub struct Machine {
    grid: Grid,
    cursor: Cursor,
    stacks: Stacks,
    io: Channel,
    randomness: Box<dyn Randomness>,
    string_mode: Option<Quote>,
    state: State,
    steps: usize,
}

impl Machine {
    pub fn new(source: &str, input: &str) -> Machine {
        Machine::with_randomness(source, input, Box::new(Random::from_entropy()))
    }

    pub fn with_randomness(source: &str, input: &str, randomness: Box<dyn Randomness>) -> Machine {
        let mut machine = Machine {
            grid: Grid::new(source),
            cursor: Cursor::default(),
            stacks: Stacks::default(),
            io: Channel::new(input),
            randomness,
            string_mode: None,
            state: State::Running,
            steps: 0,
        };
        // A failure here is kept in the state.
        let _ = machine.execute_current();
        machine
    }

    /// Move once and execute the instruction landed on.
    /// Does nothing once completed. Once failed, returns the failure again.
    pub fn step(&mut self) -> Result<()> {
        match &self.state {
            State::Running => {}
            State::Completed => return Ok(()),
            State::Failed(error) => return Err(error.clone()),
        }
        self.cursor.advance(self.grid.size());
        self.execute_current()
    }

    /// Step until the program stops or `limit` steps have been taken.
    pub fn run(&mut self, limit: Option<usize>) -> Result<()> {
        let mut taken = 0;
        while self.is_running() {
            if let Some(limit) = limit {
                if taken >= limit {
                    break;
                }
            }
            self.step()?;
            taken += 1;
        }
        match &self.state {
            State::Failed(error) => Err(error.clone()),
            _ => Ok(()),
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    pub fn is_completed(&self) -> bool {
        self.state == State::Completed
    }

    pub fn error(&self) -> Option<&Error> {
        match &self.state {
            State::Failed(error) => Some(error),
            _ => None,
        }
    }

    pub fn position(&self) -> (isize, isize) {
        self.cursor.position().into()
    }

    pub fn direction(&self) -> (isize, isize) {
        self.cursor.direction().into()
    }

    pub fn in_string_mode(&self) -> bool {
        self.string_mode.is_some()
    }

    /// Number of instructions executed, including the first.
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn grid_size(&self) -> (isize, isize) {
        self.grid.size().into()
    }

    pub fn grid_snapshot(&self) -> Vec<String> {
        self.grid.rows()
    }

    pub fn stacks_snapshot(&self) -> Vec<Frame> {
        self.stacks.frames().to_vec()
    }

    pub fn input(&self) -> String {
        self.io.remaining()
    }

    pub fn output(&self) -> &str {
        self.io.output()
    }

    /// Removes and returns everything written so far.
    pub fn take_output(&mut self) -> String {
        self.io.take_output()
    }

    fn execute_current(&mut self) -> Result<()> {
        let position = self.cursor.position();
        let ch = self.grid.read(position.x, position.y);
        self.steps += 1;
        trace!(%position, instruction = ?ch, "execute");
        if let Err(error) = self.execute(ch) {
            let error = error.at(position).in_instruction(ch);
            warn!(%error, steps = self.steps, "program failed");
            self.state = State::Failed(error.clone());
            return Err(error);
        }
        Ok(())
    }

    fn execute(&mut self, ch: char) -> Result<()> {
        if let Some(quote) = self.string_mode {
            if Quote::from_char(ch) == Some(quote) {
                self.string_mode = None;
            } else {
                self.stacks.push(char_code(ch));
            }
            return Ok(());
        }
        match Instruction::decode(ch) {
            Instruction::Quote(quote) => self.string_mode = Some(quote),
            Instruction::Direction(d) => self.cursor.set_direction(d),
            Instruction::Mirror(m) => {
                let d = m.reflect(self.cursor.direction());
                self.cursor.set_direction(d);
            }
            Instruction::Random => {
                let d = self.randomness.cardinal();
                self.cursor.set_direction(d);
            }
            Instruction::Trampoline => self.cursor.skip(self.grid.size()),
            Instruction::Conditional => {
                if approximately_equal(self.stacks.pop()?, 0.0) {
                    self.cursor.skip(self.grid.size());
                }
            }
            Instruction::Teleport => {
                let (x, y) = self.stacks.pop_2()?;
                self.cursor.teleport(Vector::new(x as isize, y as isize));
            }
            Instruction::End => self.state = State::Completed,

            Instruction::Digit(n) => self.stacks.push(n as f64),
            Instruction::Binary(op) => {
                let (x, y) = self.stacks.pop_2()?;
                self.stacks.push(op.apply(x, y));
            }

            Instruction::Duplicate => self.stacks.duplicate()?,
            Instruction::Discard => self.stacks.discard()?,
            Instruction::Swap => self.stacks.swap()?,
            Instruction::RotateRight => self.stacks.rotate_right(),
            Instruction::RotateLeft => self.stacks.rotate_left(),
            Instruction::RotateThree => self.stacks.rotate_three()?,
            Instruction::Reverse => self.stacks.reverse(),
            Instruction::Length => self.stacks.length(),
            Instruction::Register => self.stacks.register_transfer()?,
            Instruction::Split => {
                let n = self.stacks.pop()?;
                let n = if n > 0.0 { n as usize } else { 0 };
                self.stacks.split(n)?;
            }
            Instruction::Merge => self.stacks.merge()?,

            Instruction::OutputNumber => {
                let v = self.stacks.pop()?;
                self.io.write_str(&v.to_string());
            }
            Instruction::OutputChar => {
                let v = self.stacks.pop()?;
                self.io.write_char(code_char(v));
            }
            Instruction::Input => match self.io.read() {
                Some(ch) => self.stacks.push(char_code(ch)),
                None => self.stacks.push(-1.0),
            },
            Instruction::Get => {
                let (x, y) = self.stacks.pop_2()?;
                let ch = self.grid.read(x as isize, y as isize);
                self.stacks.push(char_code(ch));
            }
            Instruction::Put => {
                let (x, y) = self.stacks.pop_2()?;
                let v = self.stacks.pop()?;
                let (x, y) = (x as isize, y as isize);
                if !self.grid.write(x, y, code_char(v))? {
                    warn!(x, y, "write outside the grid ignored");
                }
            }

            Instruction::Nop => {}
        }
        Ok(())
    }
}

fn char_code(ch: char) -> f64 {
    ch as u32 as f64
}

/// Values that are not Unicode scalars become U+FFFD.
fn code_char(v: f64) -> char {
    if v >= 0.0 && v <= u32::MAX as f64 {
        std::char::from_u32(v as u32).unwrap_or(std::char::REPLACEMENT_CHARACTER)
    } else {
        std::char::REPLACEMENT_CHARACTER
    }
}

pub fn approximately_equal(a: f64, b: f64) -> bool {
    let diff = (a - b).abs();
    if diff <= ABS_EPSILON {
        return true;
    }
    diff <= a.abs().max(b.abs()) * REL_EPSILON
}
