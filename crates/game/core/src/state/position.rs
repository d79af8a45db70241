/// Opaque 2D screen coordinate.
///
/// The core never interprets positions; it only hands them to the renderer
/// as the start and end of a visual effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Linear interpolation between two positions, `t` clamped to `[0, 1]`.
    pub fn lerp(self, to: Position, t: f64) -> (f64, f64) {
        let t = t.clamp(0.0, 1.0);
        let x = f64::from(self.x) + f64::from(to.x - self.x) * t;
        let y = f64::from(self.y) + f64::from(to.y - self.y) * t;
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_hits_both_ends() {
        let from = Position::new(150, 150);
        let to = Position::new(650, 150);
        assert_eq!(from.lerp(to, 0.0), (150.0, 150.0));
        assert_eq!(from.lerp(to, 1.0), (650.0, 150.0));
        assert_eq!(from.lerp(to, 0.5), (400.0, 150.0));
        assert_eq!(from.lerp(to, 7.0), (650.0, 150.0));
    }
}
