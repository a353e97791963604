use wasm_bindgen::JsValue;
use web_sys::{js_sys, window};

use crate::config::{
    DRAG_DEAD_ZONE, DRAG_START_PX, DRAG_THROTTLE_MS, ORBIT_VERTICAL_TOLERANCE_PX,
    SWIPE_THRESHOLD_PX,
};
use crate::lookbook::navigation::{NavigationModel, Step};

pub fn is_touch_device() -> bool {
    window()
        .map(|w| {
            js_sys::Reflect::has(&w, &JsValue::from_str("ontouchstart")).unwrap_or(false)
                || w.navigator().max_touch_points() > 0
        })
        .unwrap_or(false)
}

/// Horizontal swipe recognizer. Each crossing of the threshold yields one
/// step and moves the reference point, so a long drag keeps stepping.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    origin: Option<(f64, f64)>,
    vertical_tolerance: Option<f64>,
}

impl SwipeTracker {
    pub fn for_model(model: NavigationModel) -> Self {
        Self {
            origin: None,
            vertical_tolerance: match model {
                NavigationModel::Carousel => None,
                NavigationModel::Orbit => Some(ORBIT_VERTICAL_TOLERANCE_PX),
            },
        }
    }

    pub fn start(&mut self, x: f64, y: f64) {
        self.origin = Some((x, y));
    }

    pub fn update(&mut self, x: f64, y: f64) -> Option<Step> {
        let (origin_x, origin_y) = self.origin?;
        let dx = x - origin_x;
        let dy = y - origin_y;
        if dx.abs() <= SWIPE_THRESHOLD_PX {
            return None;
        }
        if let Some(tolerance) = self.vertical_tolerance {
            if dy.abs() >= tolerance {
                return None;
            }
        }
        self.origin = Some((x, y));
        // Finger moving right drags the previous image into view.
        Some(if dx > 0.0 { Step::Prev } else { Step::Next })
    }

    pub fn end(&mut self) {
        self.origin = None;
    }
}

/// Which side of the surface a pointer is on, ignoring the centre band.
pub fn pointer_zone(x: f64, width: f64) -> Option<Step> {
    if width <= 0.0 {
        return None;
    }
    let relative = (x - width / 2.0) / width;
    if relative.abs() <= DRAG_DEAD_ZONE {
        None
    } else if relative > 0.0 {
        Some(Step::Next)
    } else {
        Some(Step::Prev)
    }
}

/// Press-and-drag rotation on a pointer device, throttled so a held pointer
/// outside the dead zone turns the orbit at most once per throttle window.
/// A press alone never rotates; the pointer has to leave the press point
/// first, so a plain click on any image reaches the zoom handler.
#[derive(Debug, Clone, Default)]
pub struct DragRotator {
    press_x: Option<f64>,
    dragging: bool,
    stepped: bool,
    last_step_at: Option<f64>,
}

impl DragRotator {
    pub fn press(&mut self, x: f64) {
        self.press_x = Some(x);
        self.dragging = false;
        self.stepped = false;
    }

    pub fn pointer_moved(&mut self, x: f64, width: f64, now_ms: f64) -> Option<Step> {
        let press_x = self.press_x?;
        if !self.dragging {
            if (x - press_x).abs() <= DRAG_START_PX {
                return None;
            }
            self.dragging = true;
        }
        let step = pointer_zone(x, width)?;
        if let Some(last) = self.last_step_at {
            if now_ms - last < DRAG_THROTTLE_MS {
                return None;
            }
        }
        self.last_step_at = Some(now_ms);
        self.stepped = true;
        Some(step)
    }

    pub fn release(&mut self) {
        self.press_x = None;
        self.dragging = false;
    }

    /// Whether the last press rotated the orbit. Cleared on read so the
    /// click that ends a drag is swallowed once.
    pub fn take_stepped(&mut self) -> bool {
        std::mem::take(&mut self.stepped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookbook::navigation::{
        Layout, LayoutContext, NavigationStrategy, OrbitRing, SurfaceSize,
    };

    #[test]
    fn short_swipe_does_not_step() {
        let mut swipe = SwipeTracker::for_model(NavigationModel::Carousel);
        swipe.start(100.0, 100.0);
        assert_eq!(swipe.update(140.0, 100.0), None);
        assert_eq!(swipe.update(150.0, 100.0), None);
        assert_eq!(swipe.update(60.0, 100.0), None);
    }

    #[test]
    fn swipe_direction_maps_to_step() {
        let mut swipe = SwipeTracker::for_model(NavigationModel::Carousel);
        swipe.start(200.0, 0.0);
        assert_eq!(swipe.update(260.0, 0.0), Some(Step::Prev));

        let mut swipe = SwipeTracker::for_model(NavigationModel::Carousel);
        swipe.start(200.0, 0.0);
        assert_eq!(swipe.update(140.0, 0.0), Some(Step::Next));
    }

    #[test]
    fn long_swipe_steps_once_per_threshold() {
        let mut swipe = SwipeTracker::for_model(NavigationModel::Carousel);
        swipe.start(400.0, 0.0);
        let steps: Vec<Step> = [380.0, 340.0, 320.0, 280.0, 230.0]
            .iter()
            .filter_map(|&x| swipe.update(x, 0.0))
            .collect();
        // 400 -> 340 steps, 340 -> 280 steps, 280 -> 230 stays under 50px.
        assert_eq!(steps, vec![Step::Next, Step::Next]);
    }

    #[test]
    fn orbit_ignores_mostly_vertical_swipes() {
        let mut swipe = SwipeTracker::for_model(NavigationModel::Orbit);
        swipe.start(100.0, 100.0);
        assert_eq!(swipe.update(200.0, 140.0), None);
        assert_eq!(swipe.update(200.0, 139.0), Some(Step::Prev));
    }

    #[test]
    fn carousel_accepts_diagonal_swipes() {
        let mut swipe = SwipeTracker::for_model(NavigationModel::Carousel);
        swipe.start(100.0, 100.0);
        assert_eq!(swipe.update(200.0, 300.0), Some(Step::Prev));
    }

    #[test]
    fn ended_swipe_is_inert() {
        let mut swipe = SwipeTracker::for_model(NavigationModel::Orbit);
        swipe.start(0.0, 0.0);
        swipe.end();
        assert_eq!(swipe.update(500.0, 0.0), None);
    }

    #[test]
    fn dead_zone_is_fifteen_percent_each_side() {
        assert_eq!(pointer_zone(500.0, 1000.0), None);
        assert_eq!(pointer_zone(650.0, 1000.0), None);
        assert_eq!(pointer_zone(350.0, 1000.0), None);
        assert_eq!(pointer_zone(651.0, 1000.0), Some(Step::Next));
        assert_eq!(pointer_zone(349.0, 1000.0), Some(Step::Prev));
        assert_eq!(pointer_zone(10.0, 0.0), None);
    }

    #[test]
    fn drag_is_throttled() {
        let mut drag = DragRotator::default();
        drag.press(880.0);
        assert_eq!(drag.pointer_moved(900.0, 1000.0, 0.0), Some(Step::Next));
        assert_eq!(drag.pointer_moved(950.0, 1000.0, 120.0), None);
        assert_eq!(drag.pointer_moved(950.0, 1000.0, 199.0), None);
        assert_eq!(drag.pointer_moved(950.0, 1000.0, 200.0), Some(Step::Next));
        assert_eq!(drag.pointer_moved(50.0, 1000.0, 450.0), Some(Step::Prev));
    }

    #[test]
    fn drag_only_steps_while_pressed() {
        let mut drag = DragRotator::default();
        assert_eq!(drag.pointer_moved(900.0, 1000.0, 0.0), None);
        drag.press(500.0);
        drag.release();
        assert_eq!(drag.pointer_moved(900.0, 1000.0, 1000.0), None);
    }

    #[test]
    fn jitter_around_the_press_point_is_not_a_drag() {
        let mut drag = DragRotator::default();
        drag.press(900.0);
        assert_eq!(drag.pointer_moved(903.0, 1000.0, 0.0), None);
        assert_eq!(drag.pointer_moved(897.0, 1000.0, 500.0), None);
        drag.release();
        assert!(!drag.take_stepped());
    }

    #[test]
    fn click_after_rotating_drag_is_swallowed_once() {
        let mut drag = DragRotator::default();
        drag.press(800.0);
        drag.pointer_moved(900.0, 1000.0, 0.0);
        drag.release();
        assert!(drag.take_stepped());
        assert!(!drag.take_stepped());

        drag.press(500.0);
        drag.release();
        assert!(!drag.take_stepped());
    }

    #[test]
    fn front_orbit_image_is_clickable_everywhere() {
        let surface = SurfaceSize {
            width: 1000.0,
            height: 1000.0,
        };
        let layout = OrbitRing.layout(3, 0, &LayoutContext { touch: false, surface });
        let Layout::Ring {
            image_size,
            placements,
        } = layout
        else {
            panic!("expected a ring layout, got {:?}", layout);
        };
        let front = placements.iter().find(|p| p.front).expect("a front image");
        for i in 0..=10 {
            let x = front.left + image_size * i as f64 / 10.0;
            let mut drag = DragRotator::default();
            drag.press(x);
            assert_eq!(drag.pointer_moved(x, surface.width, 0.0), None);
            drag.release();
            assert!(!drag.take_stepped(), "click at x={} rotated the orbit", x);
        }
    }
}
