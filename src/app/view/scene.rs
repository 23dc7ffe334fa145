//! Canvas rendering of the mountain illustration behind the home page.
//!
//! Geometry is authored in a 1200x600 scene that is scaled to cover the
//! lower three quarters of the window, anchored to its bottom edge.

use super::style::{rgb, rgba};
use crate::presentation::palette::{
    AMBER_300, AMBER_400, EMERALD_700, EMERALD_800, ORANGE_300, ORANGE_400, SLATE_200, SLATE_400,
    SLATE_500, SLATE_600, SLATE_700, SLATE_800, TEAL_800,
};
use crate::presentation::{IllustrationState, RevealEffect};
use iced::mouse;
use iced::widget::canvas::{self, Frame, LineDash, Path, Stroke};
use iced::{Color, Point, Rectangle, Renderer, Size, Theme, Vector};

const SCENE_WIDTH: f32 = 1200.0;
const SCENE_HEIGHT: f32 = 600.0;
const SCENE_COVERAGE: f32 = 0.75;
const STAR_COUNT: u32 = 60;
const SUN_RADIUS: f32 = 64.0;

type Pt = (f32, f32);

const BACK_RIDGE: [Pt; 7] = [
    (0.0, 600.0),
    (200.0, 300.0),
    (400.0, 450.0),
    (600.0, 200.0),
    (800.0, 400.0),
    (1000.0, 250.0),
    (1200.0, 600.0),
];
const MAIN_RIDGE: [Pt; 7] = [
    (0.0, 600.0),
    (300.0, 350.0),
    (500.0, 500.0),
    (700.0, 180.0),
    (900.0, 450.0),
    (1100.0, 300.0),
    (1200.0, 600.0),
];
const FRONT_RIDGE: [Pt; 7] = [
    (0.0, 600.0),
    (150.0, 450.0),
    (350.0, 550.0),
    (550.0, 380.0),
    (750.0, 520.0),
    (950.0, 400.0),
    (1200.0, 600.0),
];

/// Quadratic trail: a start point followed by `(control, end)` pairs.
struct Trail {
    start: Pt,
    curves: &'static [(Pt, Pt)],
    alpha: f32,
    width: f32,
    dash: &'static [f32],
}

const SUMMIT_TRAIL: &[(Pt, Pt)] = &[
    ((650.0, 500.0), (700.0, 420.0)),
    ((720.0, 380.0), (700.0, 350.0)),
    ((680.0, 300.0), (700.0, 250.0)),
    ((720.0, 200.0), (700.0, 180.0)),
];

static SIDE_TRAILS: [Trail; 2] = [
    Trail {
        start: (400.0, 600.0),
        curves: &[
            ((450.0, 520.0), (500.0, 480.0)),
            ((550.0, 420.0), (520.0, 380.0)),
            ((500.0, 340.0), (530.0, 300.0)),
        ],
        alpha: 0.4,
        width: 2.0,
        dash: &[8.0, 4.0],
    },
    Trail {
        start: (800.0, 600.0),
        curves: &[
            ((820.0, 520.0), (850.0, 460.0)),
            ((900.0, 400.0), (880.0, 350.0)),
            ((860.0, 300.0), (900.0, 260.0)),
        ],
        alpha: 0.4,
        width: 2.0,
        dash: &[8.0, 4.0],
    },
];

static OUTER_TRAILS: [Trail; 3] = [
    Trail {
        start: (300.0, 600.0),
        curves: &[((350.0, 500.0), (400.0, 450.0)), ((450.0, 400.0), (420.0, 350.0))],
        alpha: 0.3,
        width: 2.0,
        dash: &[6.0, 4.0],
    },
    Trail {
        start: (950.0, 600.0),
        curves: &[((980.0, 520.0), (1000.0, 450.0)), ((1020.0, 380.0), (980.0, 320.0))],
        alpha: 0.3,
        width: 2.0,
        dash: &[6.0, 4.0],
    },
    Trail {
        start: (550.0, 450.0),
        curves: &[((600.0, 400.0), (650.0, 380.0)), ((700.0, 360.0), (720.0, 320.0))],
        alpha: 0.35,
        width: 2.0,
        dash: &[5.0, 3.0],
    },
];

/// `(center, radius, colour)`; each fire also gets a halo at twice the radius.
const CAMPFIRES: [(Pt, f32, [u8; 3]); 4] = [
    ((530.0, 300.0), 8.0, ORANGE_400),
    ((700.0, 250.0), 6.0, AMBER_400),
    ((880.0, 350.0), 7.0, ORANGE_300),
    ((420.0, 350.0), 5.0, AMBER_300),
];

const FIGURES: [Pt; 18] = [
    (520.0, 310.0),
    (540.0, 308.0),
    (535.0, 315.0),
    (690.0, 260.0),
    (710.0, 258.0),
    (705.0, 262.0),
    (695.0, 265.0),
    (870.0, 360.0),
    (890.0, 358.0),
    (885.0, 365.0),
    (410.0, 360.0),
    (430.0, 358.0),
    (650.0, 400.0),
    (670.0, 398.0),
    (750.0, 380.0),
    (600.0, 450.0),
    (620.0, 448.0),
    (500.0, 420.0),
];

const SUMMIT: Pt = (700.0, 180.0);

fn point((x, y): Pt) -> Point {
    Point::new(x, y)
}

fn polygon(points: &[Pt]) -> Path {
    Path::new(|builder| {
        if let Some((first, rest)) = points.split_first() {
            builder.move_to(point(*first));
            for next in rest {
                builder.line_to(point(*next));
            }
            builder.close();
        }
    })
}

fn trail_path(start: Pt, curves: &[(Pt, Pt)]) -> Path {
    Path::new(|builder| {
        builder.move_to(point(start));
        for (control, end) in curves {
            builder.quadratic_curve_to(point(*control), point(*end));
        }
    })
}

fn dashed(color: Color, width: f32, segments: &[f32]) -> Stroke<'_> {
    Stroke {
        line_dash: LineDash {
            segments,
            offset: 0,
        },
        ..Stroke::default().with_color(color).with_width(width)
    }
}

/// Cheap deterministic hash so the star field is stable between frames.
fn scatter(index: u32, salt: u32) -> f32 {
    let mut value = index.wrapping_mul(0x9E37_79B9) ^ salt.wrapping_mul(0x85EB_CA6B);
    value ^= value >> 15;
    value = value.wrapping_mul(0x2C1B_3C6D);
    value ^= value >> 12;
    (value % 10_000) as f32 / 10_000.0
}

/// Maps the illustration state onto a canvas; owns no interactive state.
pub(super) struct MountainScene {
    state: IllustrationState,
}

impl MountainScene {
    pub(super) fn new(state: IllustrationState) -> Self {
        MountainScene { state }
    }

    fn draw_stars(&self, frame: &mut Frame, size: Size) {
        if !self.state.stars_visible() {
            return;
        }
        for index in 0..STAR_COUNT {
            let x = scatter(index, 1) * size.width;
            let y = scatter(index, 2) * size.height * 0.5;
            // Stars thin out as the climb approaches daybreak.
            let alpha = (0.2 + scatter(index, 3) * 0.6) * (1.0 - self.state.progress);
            frame.fill(
                &Path::circle(Point::new(x, y), 1.5),
                Color::from_rgba(1.0, 1.0, 1.0, alpha),
            );
        }
    }

    fn draw_sun(&self, frame: &mut Frame, size: Size) {
        let daybreak = self.state.shows(RevealEffect::Daybreak);
        let (right_edge, top, core, glow, alpha) = if daybreak {
            (0.75, 80.0, AMBER_300, ORANGE_400, 0.8)
        } else {
            (2.0 / 3.0, 128.0, SLATE_400, SLATE_500, 0.2)
        };
        let center = Point::new(
            size.width * right_edge - SUN_RADIUS,
            top + SUN_RADIUS - self.state.sun_lift,
        );
        frame.fill(
            &Path::circle(center, SUN_RADIUS * 1.3),
            rgba(glow, alpha * 0.35),
        );
        frame.fill(&Path::circle(center, SUN_RADIUS), rgba(core, alpha));
    }

    fn draw_range(&self, frame: &mut Frame) {
        let green = self.state.shows(RevealEffect::GreenSlopes);
        let ridges: [(&[Pt], Color); 3] = if green {
            [
                (&BACK_RIDGE[..], rgba(EMERALD_800, 0.4)),
                (&MAIN_RIDGE[..], rgba(EMERALD_700, 0.5)),
                (&FRONT_RIDGE[..], rgba(TEAL_800, 0.6)),
            ]
        } else {
            [
                (&BACK_RIDGE[..], rgba(SLATE_800, 0.6)),
                (&MAIN_RIDGE[..], rgba(SLATE_700, 0.7)),
                (&FRONT_RIDGE[..], rgba(SLATE_600, 0.5)),
            ]
        };
        for (outline, fill) in ridges {
            frame.fill(&polygon(outline), fill);
        }

        let summit_ink = if self.state.shows(RevealEffect::LitTrail) {
            Color::from_rgba8(251, 191, 36, 0.6)
        } else {
            Color::from_rgba8(100, 116, 139, 0.3)
        };
        frame.stroke(
            &trail_path((600.0, 600.0), SUMMIT_TRAIL),
            dashed(summit_ink, 3.0, &[10.0, 5.0]),
        );

        let mut trails: Vec<&Trail> = Vec::new();
        if self.state.shows(RevealEffect::SideTrails) {
            trails.extend(SIDE_TRAILS.iter());
        }
        if self.state.shows(RevealEffect::OuterTrails) {
            trails.extend(OUTER_TRAILS.iter());
        }
        for trail in trails {
            frame.stroke(
                &trail_path(trail.start, trail.curves),
                dashed(
                    Color::from_rgba8(251, 191, 36, trail.alpha),
                    trail.width,
                    trail.dash,
                ),
            );
        }

        if self.state.shows(RevealEffect::Campfires) {
            for (center, radius, color) in CAMPFIRES {
                frame.fill(&Path::circle(point(center), radius * 2.0), rgba(color, 0.3));
                frame.fill(&Path::circle(point(center), radius), rgb(color));
            }
        }

        if self.state.shows(RevealEffect::Figures) {
            for (x, y) in FIGURES {
                frame.fill(&Path::circle(Point::new(x, y - 8.0), 4.0), rgb(SLATE_200));
                frame.stroke(
                    &Path::line(Point::new(x, y - 4.0), Point::new(x, y + 8.0)),
                    Stroke::default().with_color(rgb(SLATE_200)).with_width(2.0),
                );
            }
        }

        if self.state.shows(RevealEffect::SummitBeacon) {
            frame.fill(&Path::circle(point(SUMMIT), 25.0), rgba(AMBER_400, 0.4));
            frame.fill(&Path::circle(point(SUMMIT), 15.0), rgba(AMBER_300, 0.6));
            frame.fill(&Path::circle(point(SUMMIT), 8.0), Color::WHITE);
        }
    }
}

impl<Message> canvas::Program<Message> for MountainScene {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let size = bounds.size();
        let mut frame = Frame::new(renderer, size);

        self.draw_stars(&mut frame, size);

        // Cover the lower band, centred horizontally and pinned to the bottom.
        let band_height = size.height * SCENE_COVERAGE;
        let scale = (size.width / SCENE_WIDTH).max(band_height / SCENE_HEIGHT);
        let offset = Vector::new(
            (size.width - SCENE_WIDTH * scale) / 2.0,
            size.height - SCENE_HEIGHT * scale + self.state.mountain_shift,
        );
        frame.with_save(|frame| {
            frame.translate(offset);
            frame.scale(scale);
            self.draw_range(frame);
        });

        self.draw_sun(&mut frame, size);

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_scatter_is_stable_and_normalised() {
        for index in 0..STAR_COUNT {
            let value = scatter(index, 1);
            assert!((0.0..1.0).contains(&value));
            assert_eq!(value, scatter(index, 1));
        }
        assert_ne!(scatter(3, 1), scatter(3, 2));
    }
}
