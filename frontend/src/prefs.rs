use web_sys::window;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const FINE_POINTER_QUERY: &str = "(hover: hover) and (pointer: fine)";

/// System preferences that switch whole effects on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserPreferences {
    pub reduced_motion: bool,
    pub fine_pointer: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            fine_pointer: true,
        }
    }
}

impl UserPreferences {
    pub fn detect() -> Self {
        Self {
            reduced_motion: media_matches(REDUCED_MOTION_QUERY),
            fine_pointer: media_matches(FINE_POINTER_QUERY),
        }
    }

    pub fn spotlight_enabled(&self) -> bool {
        !self.reduced_motion
    }

    pub fn reveal_enabled(&self, observer_supported: bool) -> bool {
        observer_supported && !self.reduced_motion
    }

    pub fn hover_pause_enabled(&self) -> bool {
        self.fine_pointer
    }

    pub fn smooth_scroll(&self) -> bool {
        !self.reduced_motion
    }
}

fn media_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|list| list.matches())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_motion_gates_only_motion_effects() {
        let prefs = UserPreferences {
            reduced_motion: true,
            fine_pointer: true,
        };
        assert!(!prefs.spotlight_enabled());
        assert!(!prefs.reveal_enabled(true));
        assert!(!prefs.smooth_scroll());
        assert!(prefs.hover_pause_enabled());
    }

    #[test]
    fn reveal_needs_observer_support() {
        let prefs = UserPreferences::default();
        assert!(prefs.reveal_enabled(true));
        assert!(!prefs.reveal_enabled(false));
    }

    #[test]
    fn touch_devices_skip_hover_pause() {
        let prefs = UserPreferences {
            reduced_motion: false,
            fine_pointer: false,
        };
        assert!(!prefs.hover_pause_enabled());
        assert!(prefs.spotlight_enabled());
    }
}
