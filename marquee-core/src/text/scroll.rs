//! Horizontal scroll offsets

/// Text x positions from `start` down to `-text_width`, inclusive
///
/// One value per frame. The text enters from the right edge and the last
/// frame has its right edge just at x = 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollState {
    next: i32,
    end: i32,
    done: bool,
}

impl ScrollState {
    pub fn new(start: i32, text_width: i32) -> Self {
        let end = -text_width;
        Self {
            next: start,
            end,
            done: start < end,
        }
    }

    /// Total number of frames
    pub fn frames(&self) -> usize {
        if self.done {
            0
        } else {
            (self.next - self.end) as usize + 1
        }
    }
}

impl Iterator for ScrollState {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.done {
            return None;
        }
        let x = self.next;
        if x == self.end {
            self.done = true;
        } else {
            self.next -= 1;
        }
        Some(x)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.frames();
        (n, Some(n))
    }
}

impl ExactSizeIterator for ScrollState {}
