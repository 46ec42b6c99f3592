// SPDX-License-Identifier: MPL-2.0
//! OS color scheme detection via the `dark-light` crate.

use crate::application::port::SchemeDetector;

/// [`SchemeDetector`] backed by the operating system's reported mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemScheme;

impl SchemeDetector for SystemScheme {
    fn prefers_dark(&self) -> bool {
        // Unspecified or failed detection counts as "no dark preference".
        matches!(dark_light::detect(), Ok(dark_light::Mode::Dark))
    }
}
