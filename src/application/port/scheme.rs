// SPDX-License-Identifier: MPL-2.0
//! OS color scheme port definition.
//!
//! The theme controller consults this probe only when storage holds no valid
//! theme: a reported dark preference initializes the theme to dark,
//! anything else (light, no preference, detection failure) falls back to
//! light.

/// Port for the OS-level dark mode preference.
pub trait SchemeDetector {
    /// Returns `true` only when the host reports a dark preference.
    fn prefers_dark(&self) -> bool;
}

/// [`SchemeDetector`] with a fixed answer, for tests and explicit overrides.
#[derive(Debug, Clone, Copy)]
pub struct FixedScheme(pub bool);

impl SchemeDetector for FixedScheme {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_scheme_reports_its_value() {
        assert!(FixedScheme(true).prefers_dark());
        assert!(!FixedScheme(false).prefers_dark());
    }
}
