//! Section backgrounds and navigation chrome, keyed off the scroll pair.

/// RGB triple, 0-255.
pub type Rgb = [u8; 3];

/// Three-stop vertical gradient (top, middle, bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionGradient {
    pub from: Rgb,
    pub via: Rgb,
    pub to: Rgb,
}

const fn gradient(from: Rgb, via: Rgb, to: Rgb) -> SectionGradient {
    SectionGradient { from, via, to }
}

pub const SLATE_950: Rgb = [0x02, 0x06, 0x17];
pub const SLATE_900: Rgb = [0x0f, 0x17, 0x2a];
pub const SLATE_800: Rgb = [0x1e, 0x29, 0x3b];
pub const SLATE_700: Rgb = [0x33, 0x41, 0x55];
pub const SLATE_600: Rgb = [0x47, 0x55, 0x69];
pub const SLATE_500: Rgb = [0x64, 0x74, 0x8b];
pub const SLATE_400: Rgb = [0x94, 0xa3, 0xb8];
pub const SLATE_300: Rgb = [0xcb, 0xd5, 0xe1];
pub const SLATE_200: Rgb = [0xe2, 0xe8, 0xf0];
pub const SLATE_100: Rgb = [0xf1, 0xf5, 0xf9];
pub const SLATE_50: Rgb = [0xf8, 0xfa, 0xfc];
pub const TEAL_900: Rgb = [0x13, 0x4e, 0x4a];
pub const TEAL_800: Rgb = [0x11, 0x5e, 0x59];
pub const TEAL_700: Rgb = [0x0f, 0x76, 0x6e];
pub const TEAL_200: Rgb = [0x99, 0xf6, 0xe4];
pub const EMERALD_800: Rgb = [0x06, 0x5f, 0x46];
pub const EMERALD_700: Rgb = [0x04, 0x78, 0x57];
pub const AMBER_900: Rgb = [0x78, 0x35, 0x0f];
pub const AMBER_700: Rgb = [0xb4, 0x53, 0x09];
pub const AMBER_600: Rgb = [0xd9, 0x77, 0x06];
pub const AMBER_500: Rgb = [0xf5, 0x9e, 0x0b];
pub const AMBER_400: Rgb = [0xfb, 0xbf, 0x24];
pub const AMBER_300: Rgb = [0xfc, 0xd3, 0x4d];
pub const AMBER_100: Rgb = [0xfe, 0xf3, 0xc7];
pub const AMBER_50: Rgb = [0xff, 0xfb, 0xeb];
pub const ORANGE_700: Rgb = [0xc2, 0x41, 0x0c];
pub const ORANGE_500: Rgb = [0xf9, 0x73, 0x16];
pub const ORANGE_400: Rgb = [0xfb, 0x92, 0x3c];
pub const ORANGE_300: Rgb = [0xfd, 0xba, 0x74];
pub const GREEN_700: Rgb = [0x15, 0x80, 0x3d];
pub const GREEN_600: Rgb = [0x16, 0xa3, 0x4a];
pub const GREEN_500: Rgb = [0x22, 0xc5, 0x5e];
pub const GREEN_100: Rgb = [0xdc, 0xfc, 0xe7];

/// Night at the trailhead to dawn at the summit, one entry per section.
pub const SECTION_BACKGROUNDS: [SectionGradient; 7] = [
    gradient(SLATE_950, SLATE_900, SLATE_950),
    gradient(SLATE_900, SLATE_800, SLATE_900),
    gradient(SLATE_800, TEAL_900, SLATE_800),
    gradient(TEAL_900, EMERALD_800, TEAL_900),
    gradient(EMERALD_800, TEAL_700, AMBER_900),
    gradient(TEAL_700, AMBER_700, ORANGE_700),
    gradient(AMBER_600, ORANGE_500, AMBER_400),
];

/// Background for a section; indices past the palette reuse the last entry.
pub fn section_background(section: usize) -> SectionGradient {
    SECTION_BACKGROUNDS[section.min(SECTION_BACKGROUNDS.len() - 1)]
}

pub const NAV_MAX_HOME_OPACITY: f32 = 0.9;
pub const NAV_PAGE_OPACITY: f32 = 0.95;

/// Navigation bar opacity: fades in over the first half of the home page,
/// solid on content pages.
pub fn nav_opacity(on_home: bool, progress: f32) -> f32 {
    if !on_home {
        return NAV_PAGE_OPACITY;
    }
    let progress = if progress.is_finite() { progress.max(0.0) } else { 0.0 };
    (progress * 2.0).min(NAV_MAX_HOME_OPACITY)
}

pub fn progress_bar_fill(progress: f32) -> f32 {
    if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_clamps_to_last_entry() {
        assert_eq!(section_background(0), SECTION_BACKGROUNDS[0]);
        assert_eq!(section_background(6), SECTION_BACKGROUNDS[6]);
        assert_eq!(section_background(42), SECTION_BACKGROUNDS[6]);
    }

    #[test]
    fn nav_fades_in_on_home_only() {
        assert_eq!(nav_opacity(true, 0.0), 0.0);
        assert!((nav_opacity(true, 0.25) - 0.5).abs() < 1e-6);
        assert_eq!(nav_opacity(true, 0.8), NAV_MAX_HOME_OPACITY);
        assert_eq!(nav_opacity(false, 0.0), NAV_PAGE_OPACITY);
        assert_eq!(nav_opacity(true, f32::NAN), 0.0);
    }

    #[test]
    fn progress_bar_fill_is_clamped() {
        assert_eq!(progress_bar_fill(-1.0), 0.0);
        assert_eq!(progress_bar_fill(0.4), 0.4);
        assert_eq!(progress_bar_fill(3.0), 1.0);
    }
}
