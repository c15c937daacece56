/*

    Responsible for creating a struct that represents
    ranges from a to b, grown one value at a time while
    scanning points.

    See also associated constants of Interval class:
    - EMPTY: (inf, -inf), grows to the first value expanded into it

    @author: Bartu
    @date: Sept 2025

*/

use crate::numeric::{Float};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: Float,
    pub max: Float,
}

impl Interval {

    pub const EMPTY: Self = Self {
        min: <Float as FloatConst>::INF,
        max: <Float as FloatConst>::NEG_INF,
    };

    pub fn new(min: Float, max: Float) -> Self {
        Self {
            min,
            max,
        }
    }

    /// Degenerate interval [x, x]
    pub fn point(x: Float) -> Self {
        Self::new(x, x)
    }

    pub fn validate(&self) -> bool {
        self.max >= self.min
    }

    pub fn center(&self) -> Float {
        (self.min + self.max) * 0.5
    }

    pub fn expand(&mut self, x: Float) {
        if x < self.min { self.min = x; }
        if x > self.max { self.max = x; }
    }

}


pub trait FloatConst: Copy {
    const INF: Self;
    const NEG_INF: Self;
}

impl FloatConst for f64 {
    const INF: Self = f64::INFINITY;
    const NEG_INF: Self = f64::NEG_INFINITY;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_invalid_until_expanded() {
        let mut int = Interval::EMPTY;
        assert!(!int.validate());

        int.expand(3.);
        assert!(int.validate());
        assert_eq!(int, Interval::point(3.));

        int.expand(-1.);
        int.expand(2.);
        assert_eq!(int.min, -1.);
        assert_eq!(int.max, 3.);
        assert_eq!(int.center(), 1.);
    }
}
