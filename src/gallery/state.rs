use std::rc::Rc;

use super::catalog::{Catalog, CategoryId, UnknownCategory};
use super::cursor::WrapCursor;
use super::media::MediaItem;

/// The modal viewer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Lightbox {
    #[default]
    Closed,
    Open { index: usize, item: MediaItem },
}

impl Lightbox {
    pub fn is_open(&self) -> bool {
        matches!(self, Lightbox::Open { .. })
    }

    pub fn item(&self) -> Option<&MediaItem> {
        match self {
            Lightbox::Open { item, .. } => Some(item),
            Lightbox::Closed => None,
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Lightbox::Open { index, .. } => Some(*index),
            Lightbox::Closed => None,
        }
    }
}

/// Per-instance state of a gallery browser.
///
/// Holds a shared handle on the read-only catalog; everything else is local
/// to the component that owns this value and is dropped with it.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryViewState {
    catalog: Rc<Catalog>,
    active_category: CategoryId,
    lightbox: Lightbox,
}

impl GalleryViewState {
    pub fn new(catalog: Rc<Catalog>) -> Self {
        Self {
            catalog,
            active_category: CategoryId::All,
            lightbox: Lightbox::Closed,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn active_category(&self) -> CategoryId {
        self.active_category
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    pub fn visible_items(&self) -> Vec<&MediaItem> {
        self.catalog.visible_items(self.active_category)
    }

    /// Switches the filter. Returns whether anything changed.
    ///
    /// An open lightbox is closed, so its index can never point into a
    /// list other than the one it was opened from.
    pub fn select_category(&mut self, id: CategoryId) -> bool {
        if id == self.active_category {
            return false;
        }
        log::debug!("Gallery filter {} -> {}", self.active_category, id);
        self.active_category = id;
        self.lightbox = Lightbox::Closed;
        true
    }

    /// Same as [`select_category`](Self::select_category) for a raw key.
    /// Unknown keys leave the state untouched.
    pub fn select_category_key(&mut self, key: &str) -> Result<bool, UnknownCategory> {
        let id = key.parse::<CategoryId>().map_err(|e| {
            log::warn!("{}", e);
            e
        })?;
        Ok(self.select_category(id))
    }

    /// Opens the viewer at `index` of the visible items.
    ///
    /// Out-of-range indices, including any index into an empty view, are
    /// refused and leave the state unchanged.
    pub fn open(&mut self, index: usize) -> bool {
        let Some(item) = self.catalog.item(self.active_category, index) else {
            log::warn!(
                "Refusing to open item {} of '{}' ({} items)",
                index,
                self.active_category,
                self.catalog.len(self.active_category)
            );
            return false;
        };
        log::debug!("Lightbox open at {} ({})", index, item.path());
        self.lightbox = Lightbox::Open {
            index,
            item: item.clone(),
        };
        true
    }

    pub fn close(&mut self) {
        self.lightbox = Lightbox::Closed;
    }

    /// Advances the viewer, wrapping from the last item to the first.
    /// Does nothing while closed.
    pub fn next(&mut self) {
        self.step(WrapCursor::next);
    }

    /// Moves the viewer back, wrapping from the first item to the last.
    /// Does nothing while closed.
    pub fn prev(&mut self) {
        self.step(WrapCursor::prev);
    }

    fn step(&mut self, advance: fn(WrapCursor) -> WrapCursor) {
        let Some(index) = self.lightbox.index() else {
            return;
        };
        let len = self.catalog.len(self.active_category);
        let Some(cursor) = WrapCursor::new(index, len) else {
            // Stale index; cannot happen while category switches close the viewer.
            self.lightbox = Lightbox::Closed;
            return;
        };
        let target = advance(cursor).index();
        if let Some(item) = self.catalog.item(self.active_category, target) {
            self.lightbox = Lightbox::Open {
                index: target,
                item: item.clone(),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::catalog::tests::sized_catalog;

    fn state() -> GalleryViewState {
        GalleryViewState::new(Rc::new(sized_catalog(16, 37, 7)))
    }

    fn open_at(state: &GalleryViewState) -> (usize, String) {
        match state.lightbox() {
            Lightbox::Open { index, item } => (*index, item.path().to_string()),
            Lightbox::Closed => panic!("lightbox should be open"),
        }
    }

    #[test]
    fn starts_on_all_with_lightbox_closed() {
        let state = state();
        assert_eq!(state.active_category(), CategoryId::All);
        assert_eq!(state.lightbox(), &Lightbox::Closed);
        assert_eq!(state.visible_items().len(), 66);
    }

    #[test]
    fn machines_scenario_wraps_past_the_end() {
        let mut state = state();
        assert!(state.select_category(CategoryId::Machines));
        assert!(state.open(0));
        assert_eq!(open_at(&state), (0, "/machine1.png".to_string()));

        for _ in 0..4 {
            state.next();
        }
        assert_eq!(open_at(&state), (4, "/machine5.png".to_string()));

        state.next();
        state.next();
        assert_eq!(open_at(&state), (0, "/machine1.png".to_string()));
    }

    #[test]
    fn all_view_starts_with_machines() {
        let mut state = state();
        state.select_category(CategoryId::Machines);
        let machines: Vec<MediaItem> = state.visible_items().into_iter().cloned().collect();

        state.select_category(CategoryId::All);
        let all = state.visible_items();
        assert_eq!(all.len(), 66);
        assert!(all.iter().zip(&machines).all(|(a, m)| *a == m));
    }

    #[test]
    fn prev_wraps_from_first_to_last() {
        let mut state = state();
        state.select_category(CategoryId::Videos);
        state.open(0);
        state.prev();
        assert_eq!(open_at(&state), (6, "/images/VID-7.mp4".to_string()));
    }

    #[test]
    fn n_steps_return_to_start() {
        let mut state = state();
        state.select_category(CategoryId::Books);
        let n = state.visible_items().len();
        for start in [0, 7, n - 1] {
            state.open(start);
            let origin = state.lightbox().clone();
            for _ in 0..n {
                state.next();
            }
            assert_eq!(state.lightbox(), &origin);
            for _ in 0..n {
                state.prev();
            }
            assert_eq!(state.lightbox(), &origin);
        }
    }

    #[test]
    fn next_then_prev_is_identity() {
        let mut state = state();
        state.open(10);
        let origin = state.lightbox().clone();
        state.next();
        assert_ne!(state.lightbox(), &origin);
        state.prev();
        assert_eq!(state.lightbox(), &origin);
        state.prev();
        state.next();
        assert_eq!(state.lightbox(), &origin);
    }

    #[test]
    fn single_item_navigation_is_a_no_op() {
        let catalog = Catalog::from_config(&[(CategoryId::Videos, &["/images/VID-1.mp4"])]);
        let mut state = GalleryViewState::new(Rc::new(catalog));
        state.select_category(CategoryId::Videos);
        assert!(state.open(0));
        let origin = state.lightbox().clone();
        state.next();
        assert_eq!(state.lightbox(), &origin);
        state.prev();
        assert_eq!(state.lightbox(), &origin);
    }

    #[test]
    fn navigation_while_closed_does_nothing() {
        let mut state = state();
        state.next();
        state.prev();
        assert_eq!(state.lightbox(), &Lightbox::Closed);
    }

    #[test]
    fn empty_view_refuses_to_open() {
        let catalog = Catalog::from_config(&[(CategoryId::Books, &["/books/1.jpg"])]);
        let mut state = GalleryViewState::new(Rc::new(catalog));
        state.select_category(CategoryId::Videos);
        assert!(!state.open(0));
        assert!(!state.lightbox().is_open());
        state.next();
        assert!(!state.lightbox().is_open());
    }

    #[test]
    fn out_of_range_open_is_refused() {
        let mut state = state();
        state.select_category(CategoryId::Machines);
        assert!(!state.open(6));
        assert_eq!(state.lightbox(), &Lightbox::Closed);
    }

    #[test]
    fn selecting_twice_is_idempotent() {
        let mut once = state();
        once.select_category(CategoryId::WorkSamples);

        let mut twice = state();
        assert!(twice.select_category(CategoryId::WorkSamples));
        assert!(!twice.select_category(CategoryId::WorkSamples));

        assert_eq!(once.visible_items(), twice.visible_items());
        assert_eq!(once, twice);
    }

    #[test]
    fn reselecting_active_category_keeps_lightbox() {
        let mut state = state();
        state.select_category(CategoryId::Books);
        state.open(3);
        state.select_category(CategoryId::Books);
        assert_eq!(state.lightbox().index(), Some(3));
    }

    #[test]
    fn switching_category_closes_lightbox() {
        let mut state = state();
        state.open(40);
        assert!(state.lightbox().is_open());
        state.select_category(CategoryId::Machines);
        assert_eq!(state.lightbox(), &Lightbox::Closed);
    }

    #[test]
    fn unknown_key_leaves_state_unchanged() {
        let mut state = state();
        state.select_category(CategoryId::Books);
        state.open(2);
        let before = state.clone();
        assert!(state.select_category_key("brochures").is_err());
        assert_eq!(state, before);

        assert_eq!(state.select_category_key("videos"), Ok(true));
        assert_eq!(state.active_category(), CategoryId::Videos);
    }

    #[test]
    fn instances_are_independent() {
        let catalog = Rc::new(sized_catalog(16, 37, 7));
        let mut first = GalleryViewState::new(Rc::clone(&catalog));
        let second = GalleryViewState::new(catalog);
        first.select_category(CategoryId::Books);
        first.open(1);
        assert_eq!(second.active_category(), CategoryId::All);
        assert!(!second.lightbox().is_open());
    }
}
