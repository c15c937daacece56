/*

    Per-axis switches. Almost every alignment option in the
    operator comes as an X/Y/Z triple of toggles, so they
    are grouped here once.

    @date: 14 Nov, 2025
    @author: bartu
*/

use crate::numeric::{Float, Vector3};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn get(self, v: &Vector3) -> Float {
        v[self.index()]
    }

    pub fn set(self, v: &mut Vector3, value: Float) {
        v[self.index()] = value;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisFlags {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

impl AxisFlags {
    pub const NONE: Self = Self { x: false, y: false, z: false };
    pub const ALL: Self = Self { x: true, y: true, z: true };

    pub fn new(x: bool, y: bool, z: bool) -> Self {
        Self { x, y, z }
    }

    pub fn only(axis: Axis) -> Self {
        let mut flags = Self::NONE;
        match axis {
            Axis::X => flags.x = true,
            Axis::Y => flags.y = true,
            Axis::Z => flags.z = true,
        }
        flags
    }

    pub fn is_enabled(&self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub fn any(&self) -> bool {
        self.x || self.y || self.z
    }

    /// Returns NONE when `master` is off, self otherwise
    pub fn gated(self, master: bool) -> Self {
        if master { self } else { Self::NONE }
    }

    pub fn enabled(self) -> impl Iterator<Item = Axis> {
        Axis::ALL.into_iter().filter(move |a| self.is_enabled(*a))
    }

    /// Copy enabled components of `src` into `dst`, leave the rest untouched
    pub fn assign(&self, dst: &mut Vector3, src: &Vector3) {
        for axis in self.enabled() {
            axis.set(dst, axis.get(src));
        }
    }

    /// Add enabled components of `delta` to `dst`
    pub fn add(&self, dst: &mut Vector3, delta: &Vector3) {
        for axis in self.enabled() {
            axis.set(dst, axis.get(dst) + axis.get(delta));
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_leaves_disabled_axes() {
        let mut dst = Vector3::new(1., 2., 3.);
        AxisFlags::new(true, false, true).assign(&mut dst, &Vector3::new(7., 8., 9.));
        assert_eq!(dst, Vector3::new(7., 2., 9.));
    }

    #[test]
    fn test_add_and_gate() {
        let mut dst = Vector3::ONE;
        AxisFlags::only(Axis::Y).add(&mut dst, &Vector3::splat(2.));
        assert_eq!(dst, Vector3::new(1., 3., 1.));

        assert_eq!(AxisFlags::ALL.gated(false), AxisFlags::NONE);
        assert!(!AxisFlags::ALL.gated(false).any());
        assert_eq!(AxisFlags::ALL.enabled().count(), 3);
    }
}
