use std::rc::Rc;

use log::{debug, info};
use yew::prelude::*;

use crate::lookbook::catalog::AlbumCatalog;
use crate::lookbook::navigation::{
    step_cursor, Layout, LayoutContext, NavigationModel, Step, SurfaceSize,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ActiveAlbum {
    pub album_id: String,
    pub images: Vec<String>,
    pub cursor: usize,
}

impl ActiveAlbum {
    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ZoomState {
    #[default]
    Closed,
    Open(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum LookbookAction {
    OpenAlbum(String),
    CloseAlbum,
    Advance(Step),
    /// The overlay has been laid out and its navigation surface measured.
    SurfaceMeasured(SurfaceSize),
    OpenZoom(String),
    CloseZoom,
}

/// Overlay, navigation cursor and zoom state for one page.
///
/// Closing the overlay keeps the last album and cursor around; the next open
/// overwrites them. Nothing is rendered until the surface of the current
/// open has been measured.
#[derive(Debug, Clone, PartialEq)]
pub struct LookbookState {
    catalog: Rc<AlbumCatalog>,
    model: NavigationModel,
    open: bool,
    active: Option<ActiveAlbum>,
    surface: Option<SurfaceSize>,
    generation: u32,
    zoom: ZoomState,
}

impl LookbookState {
    pub fn new(catalog: Rc<AlbumCatalog>, model: NavigationModel) -> Self {
        Self {
            catalog,
            model,
            open: false,
            active: None,
            surface: None,
            generation: 0,
            zoom: ZoomState::Closed,
        }
    }

    /// Returns the next state, or `None` when the action does not apply.
    pub fn apply(&self, action: LookbookAction) -> Option<Self> {
        match action {
            LookbookAction::OpenAlbum(album_id) => {
                let images = self.catalog.images_for(&album_id)?;
                info!("Opening album {} ({} images)", album_id, images.len());
                Some(Self {
                    open: true,
                    active: Some(ActiveAlbum {
                        album_id,
                        images,
                        cursor: 0,
                    }),
                    surface: None,
                    generation: self.generation.wrapping_add(1),
                    ..self.clone()
                })
            }
            LookbookAction::CloseAlbum => {
                if !self.open {
                    return None;
                }
                info!("Closing album overlay");
                Some(Self {
                    open: false,
                    ..self.clone()
                })
            }
            LookbookAction::Advance(step) => {
                if !self.open {
                    return None;
                }
                let active = self.active.as_ref().filter(|a| !a.is_empty())?;
                let cursor = step_cursor(active.cursor, step, active.len());
                debug!("Advance {:?}: {} -> {}", step, active.cursor, cursor);
                Some(Self {
                    active: Some(ActiveAlbum {
                        cursor,
                        ..active.clone()
                    }),
                    ..self.clone()
                })
            }
            LookbookAction::SurfaceMeasured(size) => {
                if !self.open || self.surface == Some(size) {
                    return None;
                }
                Some(Self {
                    surface: Some(size),
                    ..self.clone()
                })
            }
            LookbookAction::OpenZoom(image) => {
                debug!("Zooming {}", image);
                Some(Self {
                    zoom: ZoomState::Open(image),
                    ..self.clone()
                })
            }
            LookbookAction::CloseZoom => match self.zoom {
                ZoomState::Closed => None,
                ZoomState::Open(_) => Some(Self {
                    zoom: ZoomState::Closed,
                    ..self.clone()
                }),
            },
        }
    }

    pub fn model(&self) -> NavigationModel {
        self.model
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn active(&self) -> Option<&ActiveAlbum> {
        self.active.as_ref()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.active.as_ref().map(|a| a.cursor)
    }

    /// Bumped on every open; keys the deferred first render.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn zoom(&self) -> &ZoomState {
        &self.zoom
    }

    pub fn current_index(&self) -> Option<usize> {
        let active = self.active.as_ref()?;
        self.model
            .strategy()
            .current_index(active.len(), active.cursor)
    }

    pub fn current_image(&self) -> Option<&str> {
        let index = self.current_index()?;
        self.active.as_ref()?.images.get(index).map(String::as_str)
    }

    pub fn layout(&self, touch: bool) -> Layout {
        match (self.open, self.active.as_ref(), self.surface) {
            (true, Some(active), Some(surface)) => self.model.strategy().layout(
                active.len(),
                active.cursor,
                &LayoutContext { touch, surface },
            ),
            _ => Layout::Empty,
        }
    }
}

impl Reducible for LookbookState {
    type Action = LookbookAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.apply(action) {
            Some(next) => Rc::new(next),
            None => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::lookbook::catalog::sample_catalog;

    const SURFACE: SurfaceSize = SurfaceSize {
        width: 800.0,
        height: 600.0,
    };

    fn closed(model: NavigationModel) -> LookbookState {
        LookbookState::new(Rc::new(sample_catalog()), model)
    }

    fn run(state: LookbookState, actions: Vec<LookbookAction>) -> LookbookState {
        actions
            .into_iter()
            .fold(Rc::new(state), |state, action| state.reduce(action))
            .as_ref()
            .clone()
    }

    #[test]
    fn opening_shows_first_image() {
        let state = run(
            closed(NavigationModel::Carousel),
            vec![LookbookAction::OpenAlbum("album1".into())],
        );
        assert!(state.is_open());
        assert_eq!(state.cursor(), Some(0));
        assert_eq!(state.current_image(), Some("A"));
    }

    #[test]
    fn carousel_advances_and_wraps() {
        let mut state = run(
            closed(NavigationModel::Carousel),
            vec![LookbookAction::OpenAlbum("album1".into())],
        );
        state = run(state, vec![LookbookAction::Advance(Step::Next)]);
        assert_eq!(state.current_image(), Some("B"));
        state = run(
            state,
            vec![
                LookbookAction::Advance(Step::Next),
                LookbookAction::Advance(Step::Next),
            ],
        );
        assert_eq!(state.current_image(), Some("A"));
    }

    #[test]
    fn stepping_back_from_zero_wraps_to_last() {
        let state = run(
            closed(NavigationModel::Carousel),
            vec![
                LookbookAction::OpenAlbum("album1".into()),
                LookbookAction::Advance(Step::Prev),
            ],
        );
        assert_eq!(state.cursor(), Some(2));
        assert_eq!(state.current_image(), Some("C"));
    }

    #[test]
    fn orbit_rotation_brings_next_offset_to_front() {
        let state = run(
            closed(NavigationModel::Orbit),
            vec![
                LookbookAction::OpenAlbum("album1".into()),
                LookbookAction::Advance(Step::Next),
            ],
        );
        assert_eq!(state.cursor(), Some(1));
        assert_eq!(state.current_image(), Some("C"));
    }

    #[test]
    fn disabled_album_is_ignored() {
        let start = closed(NavigationModel::Carousel);
        assert_eq!(start.apply(LookbookAction::OpenAlbum("album2".into())), None);

        let state = run(
            start,
            vec![
                LookbookAction::OpenAlbum("album2".into()),
                LookbookAction::SurfaceMeasured(SURFACE),
            ],
        );
        assert!(!state.is_open());
        assert!(state.active().is_none());
        assert_eq!(state.layout(false), Layout::Empty);
    }

    #[test]
    fn unknown_album_is_ignored() {
        let state = closed(NavigationModel::Orbit);
        assert_eq!(state.apply(LookbookAction::OpenAlbum("nope".into())), None);
    }

    #[test]
    fn reopening_starts_from_zero() {
        let state = run(
            closed(NavigationModel::Carousel),
            vec![
                LookbookAction::OpenAlbum("album1".into()),
                LookbookAction::Advance(Step::Next),
                LookbookAction::CloseAlbum,
                LookbookAction::OpenAlbum("album3".into()),
            ],
        );
        assert!(state.is_open());
        assert_eq!(state.cursor(), Some(0));
        assert_eq!(state.current_image(), Some("E"));
    }

    #[test]
    fn closing_keeps_last_album() {
        let state = run(
            closed(NavigationModel::Carousel),
            vec![
                LookbookAction::OpenAlbum("album1".into()),
                LookbookAction::Advance(Step::Next),
                LookbookAction::CloseAlbum,
            ],
        );
        assert!(!state.is_open());
        assert_eq!(state.cursor(), Some(1));
    }

    #[test]
    fn advance_requires_open_overlay() {
        let state = closed(NavigationModel::Carousel);
        assert_eq!(state.apply(LookbookAction::Advance(Step::Next)), None);

        let state = run(
            state,
            vec![
                LookbookAction::OpenAlbum("album1".into()),
                LookbookAction::CloseAlbum,
            ],
        );
        assert_eq!(state.apply(LookbookAction::Advance(Step::Next)), None);
    }

    #[test]
    fn render_waits_for_measured_surface() {
        let state = run(
            closed(NavigationModel::Carousel),
            vec![LookbookAction::OpenAlbum("album1".into())],
        );
        assert_eq!(state.layout(false), Layout::Empty);

        let state = run(state, vec![LookbookAction::SurfaceMeasured(SURFACE)]);
        assert_eq!(
            state.layout(false),
            Layout::Strip {
                translate_percent: 0.0,
                show_controls: true
            }
        );
    }

    #[test]
    fn each_open_needs_a_fresh_measurement() {
        let state = run(
            closed(NavigationModel::Orbit),
            vec![
                LookbookAction::OpenAlbum("album1".into()),
                LookbookAction::SurfaceMeasured(SURFACE),
                LookbookAction::CloseAlbum,
            ],
        );
        let generation = state.generation();
        let state = run(state, vec![LookbookAction::OpenAlbum("album3".into())]);
        assert_eq!(state.generation(), generation + 1);
        assert_eq!(state.layout(false), Layout::Empty);
    }

    #[test]
    fn measurement_while_closed_is_ignored() {
        let state = closed(NavigationModel::Orbit);
        assert_eq!(state.apply(LookbookAction::SurfaceMeasured(SURFACE)), None);
    }

    #[test]
    fn zoom_is_independent_of_overlay() {
        let state = run(
            closed(NavigationModel::Carousel),
            vec![
                LookbookAction::OpenAlbum("album1".into()),
                LookbookAction::OpenZoom("B".into()),
                LookbookAction::CloseAlbum,
            ],
        );
        assert_eq!(state.zoom(), &ZoomState::Open("B".into()));

        let state = run(state, vec![LookbookAction::CloseZoom]);
        assert_eq!(state.zoom(), &ZoomState::Closed);
        assert_eq!(state.apply(LookbookAction::CloseZoom), None);
    }

    #[test]
    fn album_without_images_opens_to_nothing() {
        let catalog = SiteConfig::parse(r#"{"catalog": {"albums": [{"id": "soon", "images": []}]}}"#)
            .unwrap()
            .catalog;
        for model in [NavigationModel::Carousel, NavigationModel::Orbit] {
            let state = run(
                LookbookState::new(Rc::new(catalog.clone()), model),
                vec![
                    LookbookAction::OpenAlbum("soon".into()),
                    LookbookAction::SurfaceMeasured(SURFACE),
                    LookbookAction::Advance(Step::Next),
                    LookbookAction::Advance(Step::Prev),
                ],
            );
            assert!(state.is_open());
            assert_eq!(state.cursor(), Some(0));
            assert_eq!(state.current_image(), None);
            assert_eq!(state.layout(false), Layout::Empty);
        }
    }

    #[test]
    fn single_image_album_stays_put() {
        let catalog = AlbumCatalog::new(sample_catalog().albums().cloned().collect(), Vec::new());
        let state = run(
            LookbookState::new(Rc::new(catalog), NavigationModel::Carousel),
            vec![
                LookbookAction::OpenAlbum("album2".into()),
                LookbookAction::Advance(Step::Next),
                LookbookAction::Advance(Step::Prev),
            ],
        );
        assert_eq!(state.current_image(), Some("D"));
    }
}
