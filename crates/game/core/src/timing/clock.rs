/// Host-supplied point in time, in seconds.
///
/// The epoch is whatever the host chooses (typically the moment its loop
/// started); only differences between timestamps carry meaning.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub f64);

impl Timestamp {
    pub const ZERO: Self = Self(0.0);

    pub const fn from_secs(secs: f64) -> Self {
        Self(secs)
    }

    pub const fn as_secs(self) -> f64 {
        self.0
    }

    /// Seconds from `earlier` to `self`; negative if `earlier` is in the future.
    pub fn elapsed_since(self, earlier: Timestamp) -> f64 {
        self.0 - earlier.0
    }

    /// The timestamp `secs` seconds after this one.
    #[must_use]
    pub fn after(self, secs: f64) -> Self {
        Self(self.0 + secs)
    }
}

impl From<core::time::Duration> for Timestamp {
    fn from(value: core::time::Duration) -> Self {
        Self(value.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let start = Timestamp::from_secs(2.0);
        let later = start.after(1.5);
        assert_eq!(later.as_secs(), 3.5);
        assert_eq!(later.elapsed_since(start), 1.5);
        assert!(later > start);
        assert_eq!(
            Timestamp::from(core::time::Duration::from_millis(250)),
            Timestamp(0.25)
        );
    }
}
