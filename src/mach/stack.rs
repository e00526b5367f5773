use crate::error;
use crate::lang::Error;
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

/// ## One stack of values with its register

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    vec: Vec<f64>,
    register: Option<f64>,
}

impl Frame {
    pub fn values(&self) -> &[f64] {
        &self.vec
    }
    pub fn register(&self) -> Option<f64> {
        self.register
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
}

/// ## Stack of stacks
///
/// Never empty. The last frame is the active one and every value
/// operation applies to it.

#[derive(Debug, Clone, PartialEq)]
pub struct Stacks {
    frames: Vec<Frame>,
}

impl Default for Stacks {
    fn default() -> Stacks {
        Stacks {
            frames: vec![Frame::default()],
        }
    }
}

impl Stacks {
    fn underflow_error(&self) -> Error {
        error!(StackUnderflow)
    }
    fn active(&mut self) -> &mut Frame {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
    /// Values of the active frame.
    pub fn values(&self) -> &[f64] {
        self.frames[self.frames.len() - 1].values()
    }
    pub fn push(&mut self, val: f64) {
        self.active().vec.push(val)
    }
    pub fn pop(&mut self) -> Result<f64> {
        match self.active().vec.pop() {
            Some(v) => Ok(v),
            None => Err(self.underflow_error()),
        }
    }
    /// Returns (x, y) where y was on top.
    pub fn pop_2(&mut self) -> Result<(f64, f64)> {
        let two = self.pop()?;
        let one = self.pop()?;
        Ok((one, two))
    }
    /// Removes the top `len` values, keeping their order.
    pub fn pop_n(&mut self, len: usize) -> Result<Vec<f64>> {
        let vec = &mut self.active().vec;
        if len > vec.len() {
            Err(self.underflow_error())
        } else {
            let range = (vec.len() - len)..;
            Ok(vec.drain(range).collect())
        }
    }
    pub fn duplicate(&mut self) -> Result<()> {
        let v = self.pop()?;
        self.push(v);
        self.push(v);
        Ok(())
    }
    pub fn discard(&mut self) -> Result<()> {
        self.pop().map(|_| ())
    }
    pub fn swap(&mut self) -> Result<()> {
        let a = self.pop()?;
        let b = self.pop()?;
        self.push(a);
        self.push(b);
        Ok(())
    }
    /// Last element to the front.
    pub fn rotate_right(&mut self) {
        let vec = &mut self.active().vec;
        if !vec.is_empty() {
            vec.rotate_right(1);
        }
    }
    /// First element to the end.
    pub fn rotate_left(&mut self) {
        let vec = &mut self.active().vec;
        if !vec.is_empty() {
            vec.rotate_left(1);
        }
    }
    /// Third from the top moves to the top.
    pub fn rotate_three(&mut self) -> Result<()> {
        let mut top = self.pop_n(3)?;
        top.rotate_left(1);
        self.active().vec.append(&mut top);
        Ok(())
    }
    pub fn reverse(&mut self) {
        self.active().vec.reverse()
    }
    pub fn length(&mut self) {
        let len = self.active().vec.len();
        self.push(len as f64)
    }
    pub fn register_transfer(&mut self) -> Result<()> {
        match self.active().register.take() {
            Some(v) => self.push(v),
            None => {
                let v = self.pop()?;
                self.active().register = Some(v);
            }
        }
        Ok(())
    }
    /// Moves the top `len` values onto a new active frame.
    ///
    /// The values keep their order instead of being reversed by popping
    /// them one at a time, so a merge right after restores the stack.
    pub fn split(&mut self, len: usize) -> Result<()> {
        let vec = self.pop_n(len)?;
        debug!(len, depth = self.frames.len() + 1, "split frame");
        self.frames.push(Frame {
            vec,
            register: None,
        });
        Ok(())
    }
    /// Appends the active frame's values to the frame below it.
    pub fn merge(&mut self) -> Result<()> {
        if self.frames.len() == 1 {
            return Err(error!(BaseFrameRemoval));
        }
        let mut merger = match self.frames.pop() {
            Some(frame) => frame,
            None => return Err(error!(BaseFrameRemoval)),
        };
        debug!(len = merger.vec.len(), depth = self.frames.len(), "merge frame");
        self.active().vec.append(&mut merger.vec);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn stacks(values: &[f64]) -> Stacks {
        let mut s = Stacks::default();
        for v in values {
            s.push(*v);
        }
        s
    }

    #[test]
    fn test_pop_empty_underflows() {
        let mut s = Stacks::default();
        assert_eq!(s.pop().unwrap_err().code(), ErrorCode::StackUnderflow);
    }

    #[test]
    fn test_pop_2_order() {
        let mut s = stacks(&[1.0, 2.0]);
        assert_eq!(s.pop_2().unwrap(), (1.0, 2.0));
    }

    #[test]
    fn test_swap_and_duplicate() {
        let mut s = stacks(&[1.0, 2.0]);
        s.swap().unwrap();
        assert_eq!(s.values(), &[2.0, 1.0]);
        s.duplicate().unwrap();
        assert_eq!(s.values(), &[2.0, 1.0, 1.0]);
        s.discard().unwrap();
        s.discard().unwrap();
        s.discard().unwrap();
        assert!(s.discard().is_err());
    }

    #[test]
    fn test_rotations() {
        let mut s = stacks(&[1.0, 2.0, 3.0, 4.0]);
        s.rotate_right();
        assert_eq!(s.values(), &[4.0, 1.0, 2.0, 3.0]);
        s.rotate_left();
        assert_eq!(s.values(), &[1.0, 2.0, 3.0, 4.0]);
        s.rotate_three().unwrap();
        assert_eq!(s.values(), &[1.0, 3.0, 4.0, 2.0]);
        s.reverse();
        assert_eq!(s.values(), &[2.0, 4.0, 3.0, 1.0]);
    }

    #[test]
    fn test_rotations_on_short_stacks() {
        let mut s = Stacks::default();
        s.rotate_left();
        s.rotate_right();
        assert!(s.values().is_empty());
        let mut s = stacks(&[1.0, 2.0]);
        assert_eq!(s.rotate_three().unwrap_err().code(), ErrorCode::StackUnderflow);
    }

    #[test]
    fn test_length() {
        let mut s = stacks(&[7.0, 7.0]);
        s.length();
        assert_eq!(s.values(), &[7.0, 7.0, 2.0]);
    }

    #[test]
    fn test_register() {
        let mut s = stacks(&[5.0]);
        s.register_transfer().unwrap();
        assert!(s.values().is_empty());
        assert_eq!(s.frames()[0].register(), Some(5.0));
        s.register_transfer().unwrap();
        assert_eq!(s.values(), &[5.0]);
        assert_eq!(s.frames()[0].register(), None);
        s.discard().unwrap();
        assert!(s.register_transfer().is_err());
    }

    #[test]
    fn test_split_merge_round_trip() {
        let mut s = stacks(&[1.0, 2.0, 3.0, 4.0]);
        s.split(3).unwrap();
        assert_eq!(s.depth(), 2);
        assert_eq!(s.values(), &[2.0, 3.0, 4.0]);
        assert_eq!(s.frames()[0].values(), &[1.0]);
        s.merge().unwrap();
        assert_eq!(s.depth(), 1);
        assert_eq!(s.values(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_split_too_many() {
        let mut s = stacks(&[1.0]);
        assert_eq!(s.split(2).unwrap_err().code(), ErrorCode::StackUnderflow);
        assert_eq!(s.values(), &[1.0]);
        assert_eq!(s.depth(), 1);
    }

    #[test]
    fn test_frames_have_own_register() {
        let mut s = stacks(&[1.0, 2.0]);
        s.register_transfer().unwrap();
        s.split(1).unwrap();
        assert_eq!(s.frames()[1].register(), None);
        s.register_transfer().unwrap();
        assert_eq!(s.frames()[1].register(), Some(1.0));
        assert_eq!(s.frames()[0].register(), Some(2.0));
    }

    #[test]
    fn test_merge_base_frame() {
        let mut s = Stacks::default();
        assert_eq!(s.merge().unwrap_err().code(), ErrorCode::BaseFrameRemoval);
        assert_eq!(s.depth(), 1);
    }
}
