use std::collections::VecDeque;

/// Bounded moving-average history, newest sample first.
pub struct Window {
    samples: VecDeque<f64>,
    capacity: usize,
}

impl Window {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn push(&mut self, value: f64) {
        self.samples.push_front(value);
        if self.samples.len() > self.capacity {
            self.samples.pop_back();
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.samples.iter()
    }

    pub fn mean(&self) -> Option<f64> {
        if self.is_empty() {
            None
        } else {
            Some(self.iter().sum::<f64>() / self.len() as f64)
        }
    }
}

// 1400.5 -> 1401, -0.5 -> 0
pub fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_never_exceeds_capacity() {
        let mut window = Window::new(20);
        for i in 0..100 {
            window.push(i as f64);
            assert!(window.len() <= 20);
        }
        assert_eq!(window.len(), 20);
    }

    #[test]
    fn test_window_newest_first() {
        let mut window = Window::new(5);
        window.push(1.0);
        window.push(2.0);
        window.push(3.0);
        let contents: Vec<f64> = window.iter().copied().collect();
        assert_eq!(contents, vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_window_drops_oldest() {
        let mut window = Window::new(3);
        for v in [1.0, 2.0, 3.0, 4.0] {
            window.push(v);
        }
        let contents: Vec<f64> = window.iter().copied().collect();
        assert_eq!(contents, vec![4.0, 3.0, 2.0]);
    }

    #[test]
    fn test_mean() {
        let mut window = Window::new(4);
        assert_eq!(window.mean(), None);
        window.push(1.0);
        window.push(2.0);
        assert_eq!(window.mean(), Some(1.5));
        for v in [10.0, 10.0, 10.0, 10.0] {
            window.push(v);
        }
        assert_eq!(window.mean(), Some(10.0));
    }

    #[test]
    fn test_identical_values_display_rounded() {
        let mut window = Window::new(20);
        for _ in 0..20 {
            window.push(1399.7);
        }
        assert_eq!(round_half_up(window.mean().unwrap()), 1400);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(1400.5), 1401);
        assert_eq!(round_half_up(1400.49), 1400);
        assert_eq!(round_half_up(1399.5), 1400);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(-1.6), -2);
    }
}
