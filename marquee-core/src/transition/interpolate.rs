//! Linear interpolation for brightness ramps

/// Evenly spaced values from `start` to `stop`
///
/// Yields `steps` values. With one step the only value is `start`; with more
/// the first is `start` and the last is exactly `stop`. Zero steps yields
/// nothing.
pub fn interpolate(start: f32, stop: f32, steps: u16) -> Interpolate {
    Interpolate {
        start,
        stop,
        steps,
        index: 0,
    }
}

/// Iterator returned by [`interpolate`]
#[derive(Debug, Clone)]
pub struct Interpolate {
    start: f32,
    stop: f32,
    steps: u16,
    index: u16,
}

impl Iterator for Interpolate {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.index >= self.steps {
            return None;
        }
        let i = self.index;
        self.index += 1;

        if self.steps == 1 {
            return Some(self.start);
        }
        if i == self.steps - 1 {
            return Some(self.stop);
        }
        let delta = (self.stop - self.start) / (self.steps - 1) as f32;
        Some(self.start + delta * i as f32)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.steps - self.index) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Interpolate {}
