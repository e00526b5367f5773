/// ## Program input and output
///
/// Input is held reversed so reading pops from the end.

#[derive(Debug, Clone, Default)]
pub struct Channel {
    input: Vec<char>,
    output: String,
}

impl Channel {
    pub fn new(input: &str) -> Channel {
        Channel {
            input: input.chars().rev().collect(),
            output: String::new(),
        }
    }

    pub fn read(&mut self) -> Option<char> {
        self.input.pop()
    }

    /// Unconsumed input in reading order.
    pub fn remaining(&self) -> String {
        self.input.iter().rev().collect()
    }

    pub fn write_char(&mut self, ch: char) {
        self.output.push(ch);
    }

    pub fn write_str(&mut self, s: &str) {
        self.output.push_str(s);
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}
