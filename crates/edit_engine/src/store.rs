//! Document store: the single source of truth for the active presentation
//!
//! All mutations go through [`DocumentStore::dispatch`], which runs the pure
//! [`reduce`] function and swaps the resulting state in. Operations are total:
//! a missing id or an out-of-range index leaves the state unchanged.

use crate::StoreAction;
use doc_model::{
    ColorScheme, Element, ElementId, ElementPatch, Presentation, Slide, SlideId, SlidePatch,
    Template,
};

/// Snapshot of everything the store holds
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreState {
    pub presentation: Option<Presentation>,
    pub is_generating: bool,
    pub generation_progress: String,
    /// Incremented on every effective change
    pub version: u64,
}

/// Compute the state that follows `action`.
///
/// Never fails; actions that do not apply produce an unchanged state.
pub fn reduce(state: &StoreState, action: StoreAction) -> StoreState {
    let mut next = state.clone();
    let name = action.display_name();
    if apply(&mut next, action) {
        next.version = state.version.wrapping_add(1);
    } else {
        tracing::debug!(action = name, "store action had no effect");
    }
    next
}

fn apply(state: &mut StoreState, action: StoreAction) -> bool {
    match action {
        StoreAction::SetPresentation { presentation } => {
            state.presentation = Some(*presentation);
            state.is_generating = false;
            true
        }
        StoreAction::SetGenerating {
            generating,
            progress,
        } => {
            state.is_generating = generating;
            state.generation_progress = progress.unwrap_or_default();
            true
        }
        StoreAction::Reset => {
            *state = StoreState {
                version: state.version,
                ..StoreState::default()
            };
            true
        }
        other => match state.presentation.as_mut() {
            Some(presentation) => apply_to_presentation(presentation, other),
            None => false,
        },
    }
}

fn apply_to_presentation(p: &mut Presentation, action: StoreAction) -> bool {
    match action {
        StoreAction::UpdateSlide { slide_id, patch } => match p.slide_mut(slide_id) {
            Some(slide) => {
                patch.apply_to(slide);
                true
            }
            None => false,
        },
        StoreAction::DeleteSlide { slide_id } => {
            let before = p.slides.len();
            p.slides.retain(|s| s.id != slide_id);
            p.slides.len() != before
        }
        StoreAction::AddSlide { slide, index } => {
            let at = index.map_or(p.slides.len(), |i| i.min(p.slides.len()));
            p.slides.insert(at, *slide);
            true
        }
        StoreAction::ReorderSlides { from, to } => {
            let len = p.slides.len();
            if from >= len || to >= len {
                return false;
            }
            let slide = p.slides.remove(from);
            p.slides.insert(to, slide);
            true
        }
        StoreAction::UpdateTemplate { template } => {
            p.template = template;
            true
        }
        StoreAction::UpdateColorScheme { color_scheme } => {
            p.color_scheme = color_scheme;
            true
        }
        StoreAction::UpdateTitle { title } => {
            p.title = title;
            true
        }
        StoreAction::AddElement { slide_id, element } => match p.slide_mut(slide_id) {
            Some(slide) => {
                slide.elements.push(*element);
                true
            }
            None => false,
        },
        StoreAction::UpdateElement {
            slide_id,
            element_id,
            patch,
        } => match p.slide_mut(slide_id).and_then(|s| s.element_mut(element_id)) {
            Some(element) => {
                patch.apply_to(element);
                true
            }
            None => false,
        },
        StoreAction::DeleteElement {
            slide_id,
            element_id,
        } => match p.slide_mut(slide_id) {
            Some(slide) => {
                let before = slide.elements.len();
                slide.elements.retain(|e| e.id != element_id);
                slide.elements.len() != before
            }
            None => false,
        },
        StoreAction::SetPresentation { .. } | StoreAction::SetGenerating { .. } | StoreAction::Reset => {
            false
        }
    }
}

/// Owner of the store state
#[derive(Debug, Default)]
pub struct DocumentStore {
    state: StoreState,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_presentation(presentation: Presentation) -> Self {
        let mut store = Self::new();
        store.set_presentation(presentation);
        store
    }

    /// Apply an action. Returns whether the state changed.
    pub fn dispatch(&mut self, action: StoreAction) -> bool {
        let next = reduce(&self.state, action);
        let changed = next.version != self.state.version;
        self.state = next;
        changed
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    pub fn presentation(&self) -> Option<&Presentation> {
        self.state.presentation.as_ref()
    }

    pub fn is_generating(&self) -> bool {
        self.state.is_generating
    }

    pub fn generation_progress(&self) -> &str {
        &self.state.generation_progress
    }

    pub fn version(&self) -> u64 {
        self.state.version
    }

    pub fn slide(&self, id: SlideId) -> Option<&Slide> {
        self.presentation().and_then(|p| p.slide(id))
    }

    pub fn set_presentation(&mut self, presentation: Presentation) -> bool {
        self.dispatch(StoreAction::SetPresentation {
            presentation: Box::new(presentation),
        })
    }

    pub fn update_slide(&mut self, slide_id: SlideId, patch: SlidePatch) -> bool {
        self.dispatch(StoreAction::UpdateSlide { slide_id, patch })
    }

    pub fn delete_slide(&mut self, slide_id: SlideId) -> bool {
        self.dispatch(StoreAction::DeleteSlide { slide_id })
    }

    pub fn add_slide(&mut self, slide: Slide, index: Option<usize>) -> bool {
        self.dispatch(StoreAction::AddSlide {
            slide: Box::new(slide),
            index,
        })
    }

    pub fn reorder_slides(&mut self, from: usize, to: usize) -> bool {
        self.dispatch(StoreAction::ReorderSlides { from, to })
    }

    pub fn update_template(&mut self, template: Template) -> bool {
        self.dispatch(StoreAction::UpdateTemplate { template })
    }

    pub fn update_color_scheme(&mut self, color_scheme: ColorScheme) -> bool {
        self.dispatch(StoreAction::UpdateColorScheme { color_scheme })
    }

    pub fn update_title(&mut self, title: impl Into<String>) -> bool {
        self.dispatch(StoreAction::UpdateTitle {
            title: title.into(),
        })
    }

    pub fn add_element(&mut self, slide_id: SlideId, element: Element) -> bool {
        self.dispatch(StoreAction::AddElement {
            slide_id,
            element: Box::new(element),
        })
    }

    pub fn update_element(&mut self, slide_id: SlideId, element_id: ElementId, patch: ElementPatch) -> bool {
        self.dispatch(StoreAction::UpdateElement {
            slide_id,
            element_id,
            patch,
        })
    }

    pub fn delete_element(&mut self, slide_id: SlideId, element_id: ElementId) -> bool {
        self.dispatch(StoreAction::DeleteElement {
            slide_id,
            element_id,
        })
    }

    pub fn set_generating(&mut self, generating: bool, progress: Option<String>) -> bool {
        self.dispatch(StoreAction::SetGenerating {
            generating,
            progress,
        })
    }

    pub fn reset(&mut self) -> bool {
        self.dispatch(StoreAction::Reset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::{ElementContent, ElementType, Point, Size};

    fn deck(n: usize) -> Presentation {
        let slides = (0..n).map(|i| Slide::new(format!("Slide {}", i + 1))).collect();
        Presentation::new("Deck", slides)
    }

    fn titles(store: &DocumentStore) -> Vec<String> {
        store
            .presentation()
            .map(|p| p.slides.iter().map(|s| s.title.clone()).collect())
            .unwrap_or_default()
    }

    fn text_element() -> Element {
        Element::new(
            ElementType::Text,
            ElementContent::text("hello"),
            Point::new(100.0, 150.0),
            Size::new(400.0, 80.0),
        )
    }

    #[test]
    fn test_operations_are_noops_without_presentation() {
        let mut store = DocumentStore::new();
        assert!(!store.update_title("x"));
        assert!(!store.add_slide(Slide::new("a"), None));
        assert!(!store.reorder_slides(0, 1));
        assert!(store.presentation().is_none());
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn test_set_presentation_clears_generating() {
        let mut store = DocumentStore::new();
        store.set_generating(true, Some("Generating slides...".into()));
        assert!(store.is_generating());
        assert_eq!(store.generation_progress(), "Generating slides...");

        store.set_presentation(deck(2));
        assert!(!store.is_generating());
        assert_eq!(store.presentation().map(|p| p.slide_count()), Some(2));
    }

    #[test]
    fn test_set_generating_defaults_progress_to_empty() {
        let mut store = DocumentStore::new();
        store.set_generating(true, Some("step".into()));
        store.set_generating(false, None);
        assert_eq!(store.generation_progress(), "");
    }

    #[test]
    fn test_reorder_moves_slide() {
        let mut store = DocumentStore::with_presentation(deck(3));
        assert!(store.reorder_slides(0, 2));
        assert_eq!(titles(&store), ["Slide 2", "Slide 3", "Slide 1"]);
    }

    #[test]
    fn test_reorder_out_of_range_is_noop() {
        let mut store = DocumentStore::with_presentation(deck(3));
        let version = store.version();
        assert!(!store.reorder_slides(0, 3));
        assert!(!store.reorder_slides(5, 0));
        assert_eq!(titles(&store), ["Slide 1", "Slide 2", "Slide 3"]);
        assert_eq!(store.version(), version);
    }

    #[test]
    fn test_add_slide_at_index_and_past_end() {
        let mut store = DocumentStore::with_presentation(deck(2));
        store.add_slide(Slide::new("Inserted"), Some(1));
        store.add_slide(Slide::new("Appended"), Some(99));
        store.add_slide(Slide::new("Pushed"), None);
        assert_eq!(
            titles(&store),
            ["Slide 1", "Inserted", "Slide 2", "Appended", "Pushed"]
        );
    }

    #[test]
    fn test_delete_slide_allows_emptying() {
        let mut store = DocumentStore::with_presentation(deck(1));
        let id = store.presentation().unwrap().slides[0].id;
        assert!(store.delete_slide(id));
        assert_eq!(store.presentation().unwrap().slide_count(), 0);
        assert!(!store.delete_slide(id));
    }

    #[test]
    fn test_update_slide_missing_id_is_noop() {
        let mut store = DocumentStore::with_presentation(deck(2));
        let before = store.state().clone();
        assert!(!store.update_slide(SlideId::new(), SlidePatch::title("x")));
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn test_element_lifecycle() {
        let mut store = DocumentStore::with_presentation(deck(1));
        let slide_id = store.presentation().unwrap().slides[0].id;
        let element = text_element();
        let element_id = element.id;

        assert!(store.add_element(slide_id, element));
        assert!(store.update_element(
            slide_id,
            element_id,
            ElementPatch::position(Point::new(10.0, 20.0))
        ));
        let el = store.slide(slide_id).and_then(|s| s.element(element_id)).unwrap();
        assert_eq!(el.position, Point::new(10.0, 20.0));
        assert_eq!(el.size, Size::new(400.0, 80.0));

        assert!(!store.update_element(slide_id, ElementId::new(), ElementPatch::default()));
        assert!(store.delete_element(slide_id, element_id));
        assert!(store.slide(slide_id).unwrap().elements.is_empty());
    }

    #[test]
    fn test_template_scheme_title_updates() {
        let mut store = DocumentStore::with_presentation(deck(1));
        store.update_template(Template::Creative);
        store.update_color_scheme(ColorScheme::sunset_orange());
        store.update_title("Renamed");
        let p = store.presentation().unwrap();
        assert_eq!(p.template, Template::Creative);
        assert_eq!(p.color_scheme.name, "Sunset Orange");
        assert_eq!(p.title, "Renamed");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut store = DocumentStore::with_presentation(deck(2));
        store.set_generating(true, Some("x".into()));
        store.reset();
        assert!(store.presentation().is_none());
        assert!(!store.is_generating());
        assert_eq!(store.generation_progress(), "");
    }

    #[test]
    fn test_reduce_is_pure() {
        let state = StoreState {
            presentation: Some(deck(2)),
            ..Default::default()
        };
        let snapshot = state.clone();
        let next = reduce(&state, StoreAction::UpdateTitle { title: "New".into() });
        assert_eq!(state, snapshot);
        assert_eq!(next.presentation.unwrap().title, "New");
        assert_eq!(next.version, 1);
    }
}
