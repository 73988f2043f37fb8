use std::fmt;

/// Camera behavior derived from the orbit and follow toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CameraMode {
    /// Fixed authored pose.
    #[default]
    Disabled,
    /// User orbits a fixed pivot.
    OrbitOnly,
    /// Camera trails the character.
    FollowOnly,
    /// User orbits a pivot that trails the character.
    Hybrid,
}

impl CameraMode {
    /// Mode for a pair of toggles.
    #[must_use]
    pub fn from_toggles(orbit_enabled: bool, follow_enabled: bool) -> Self {
        match (orbit_enabled, follow_enabled) {
            (false, false) => Self::Disabled,
            (true, false) => Self::OrbitOnly,
            (false, true) => Self::FollowOnly,
            (true, true) => Self::Hybrid,
        }
    }

    /// Whether user orbit input applies.
    #[must_use]
    pub fn orbits(self) -> bool {
        matches!(self, Self::OrbitOnly | Self::Hybrid)
    }

    /// Whether the camera tracks the character.
    #[must_use]
    pub fn follows(self) -> bool {
        matches!(self, Self::FollowOnly | Self::Hybrid)
    }

    /// Short name for logs and the window title.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Disabled => "fixed",
            Self::OrbitOnly => "orbit",
            Self::FollowOnly => "follow",
            Self::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for CameraMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_map_to_modes() {
        assert_eq!(CameraMode::from_toggles(false, false), CameraMode::Disabled);
        assert_eq!(CameraMode::from_toggles(true, false), CameraMode::OrbitOnly);
        assert_eq!(CameraMode::from_toggles(false, true), CameraMode::FollowOnly);
        assert_eq!(CameraMode::from_toggles(true, true), CameraMode::Hybrid);
        assert!(CameraMode::Hybrid.orbits() && CameraMode::Hybrid.follows());
        assert!(!CameraMode::Disabled.orbits());
    }
}
