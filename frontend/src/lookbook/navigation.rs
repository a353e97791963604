use std::f64::consts::PI;

use serde::Deserialize;

use crate::config::ORBIT_IMAGE_FRACTION;

/// Which navigation surface the lookbook uses. Chosen once from config,
/// the two models are never mixed on one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationModel {
    /// Horizontal strip with arrows, arrow keys and swipe.
    #[default]
    Carousel,
    /// Images on a circle, rotated by hover-drag, swipe and long-press.
    Orbit,
}

impl NavigationModel {
    pub fn strategy(self) -> &'static dyn NavigationStrategy {
        match self {
            NavigationModel::Carousel => &CarouselStrip,
            NavigationModel::Orbit => &OrbitRing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Prev,
    Next,
}

impl Step {
    pub fn delta(self) -> isize {
        match self {
            Step::Prev => -1,
            Step::Next => 1,
        }
    }
}

/// `(cursor + step + len) mod len`; an empty album keeps the cursor at 0.
pub fn step_cursor(cursor: usize, step: Step, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (cursor as isize + step.delta()).rem_euclid(len as isize) as usize
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutContext {
    pub touch: bool,
    pub surface: SurfaceSize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
    pub angle: f64,
    pub front: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Layout {
    Empty,
    Strip {
        translate_percent: f64,
        show_controls: bool,
    },
    Ring {
        image_size: f64,
        placements: Vec<Placement>,
    },
}

pub trait NavigationStrategy {
    /// Index of the image the cursor currently brings to the front.
    fn current_index(&self, len: usize, cursor: usize) -> Option<usize>;

    fn layout(&self, len: usize, cursor: usize, ctx: &LayoutContext) -> Layout;
}

pub struct CarouselStrip;

impl NavigationStrategy for CarouselStrip {
    fn current_index(&self, len: usize, cursor: usize) -> Option<usize> {
        (len > 0).then(|| cursor % len)
    }

    fn layout(&self, len: usize, cursor: usize, ctx: &LayoutContext) -> Layout {
        if len == 0 {
            return Layout::Empty;
        }
        Layout::Strip {
            translate_percent: -((cursor % len) as f64) * 100.0,
            // Touch screens swipe instead.
            show_controls: len > 1 && !ctx.touch,
        }
    }
}

pub struct OrbitRing;

impl OrbitRing {
    pub fn radius(surface: &SurfaceSize) -> f64 {
        let image_size = surface.width * ORBIT_IMAGE_FRACTION;
        (surface.width / 2.0 - image_size / 2.0).max(0.0)
    }
}

impl NavigationStrategy for OrbitRing {
    // The front slot sits at angle 0.
    fn current_index(&self, len: usize, cursor: usize) -> Option<usize> {
        (len > 0).then(|| (len - cursor % len) % len)
    }

    fn layout(&self, len: usize, cursor: usize, ctx: &LayoutContext) -> Layout {
        if len == 0 || ctx.surface.width <= 0.0 {
            return Layout::Empty;
        }
        let image_size = ctx.surface.width * ORBIT_IMAGE_FRACTION;
        let radius = Self::radius(&ctx.surface);
        let center_x = ctx.surface.width / 2.0;
        let center_y = ctx.surface.height / 2.0;
        let front = self.current_index(len, cursor);

        let placements = (0..len)
            .map(|i| {
                let angle = 2.0 * PI * ((i + cursor) % len) as f64 / len as f64;
                Placement {
                    left: center_x + radius * angle.cos() - image_size / 2.0,
                    top: center_y + radius * angle.sin() - image_size / 2.0,
                    angle,
                    front: front == Some(i),
                }
            })
            .collect();

        Layout::Ring {
            image_size,
            placements,
        }
    }
}
