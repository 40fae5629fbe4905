//! Editor session: the explicit context an editing UI works against
//!
//! Owns the document store, tracks which slide is open and routes canvas
//! events to the element editor for that slide.

use crate::{
    new_element, CanvasEditor, CanvasOutcome, CanvasSize, DocumentStore, EditError, EditorEvent,
    Result, StoreAction,
};
use doc_model::{
    ColorScheme, ElementContent, ElementId, ElementStyle, ElementType, FontWeight, Point,
    Presentation, Size, Slide, SlideId, SlideLayout, SlidePatch, Template,
};

#[derive(Debug, Default)]
pub struct EditorSession {
    store: DocumentStore,
    current_slide: usize,
    canvas: Option<CanvasEditor>,
    canvas_size: CanvasSize,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_presentation(presentation: Presentation) -> Self {
        let mut session = Self::new();
        session.load(presentation);
        session
    }

    pub fn with_canvas_size(mut self, canvas_size: CanvasSize) -> Self {
        self.canvas_size = canvas_size;
        self.canvas = None;
        self.sync_canvas();
        self
    }

    /// Replace the open presentation and go to its first slide
    pub fn load(&mut self, presentation: Presentation) {
        self.store.set_presentation(presentation);
        self.current_slide = 0;
        self.canvas = None;
        self.sync_canvas();
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    pub fn presentation(&self) -> Option<&Presentation> {
        self.store.presentation()
    }

    /// Dispatch a raw store action, keeping the open slide in range
    pub fn dispatch(&mut self, action: StoreAction) -> bool {
        let changed = self.store.dispatch(action);
        self.clamp_current();
        self.sync_canvas();
        changed
    }

    pub fn current_slide_index(&self) -> usize {
        self.current_slide
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        self.presentation()
            .and_then(|p| p.slides.get(self.current_slide))
    }

    fn slide_count(&self) -> usize {
        self.presentation().map_or(0, |p| p.slide_count())
    }

    fn clamp_current(&mut self) {
        let count = self.slide_count();
        self.current_slide = self.current_slide.min(count.saturating_sub(1));
    }

    /// Rebind the canvas editor when the open slide changed
    fn sync_canvas(&mut self) {
        let slide_id = self.current_slide().map(|s| s.id);
        match (slide_id, &self.canvas) {
            (Some(id), Some(canvas)) if canvas.slide_id() == id => {}
            (Some(id), _) => self.canvas = Some(CanvasEditor::with_canvas(id, self.canvas_size)),
            (None, _) => self.canvas = None,
        }
    }

    pub fn canvas(&self) -> Option<&CanvasEditor> {
        self.canvas.as_ref()
    }

    pub fn handle_canvas_event(&mut self, event: EditorEvent) -> CanvasOutcome {
        match self.canvas.as_mut() {
            Some(canvas) => canvas.handle_event(event, &mut self.store),
            None => CanvasOutcome::Unchanged,
        }
    }

    pub fn go_to_slide(&mut self, index: usize) -> Result<()> {
        let count = self.slide_count();
        if index >= count {
            return Err(EditError::SlideIndexOutOfRange { index, count });
        }
        if index != self.current_slide {
            self.current_slide = index;
            self.sync_canvas();
        }
        Ok(())
    }

    /// Move to the next slide. Returns false at the last slide.
    pub fn next_slide(&mut self) -> bool {
        let target = self.current_slide + 1;
        self.go_to_slide(target).is_ok()
    }

    /// Move to the previous slide. Returns false at the first slide.
    pub fn previous_slide(&mut self) -> bool {
        match self.current_slide.checked_sub(1) {
            Some(target) => self.go_to_slide(target).is_ok(),
            None => false,
        }
    }

    /// Delete a slide, refusing to remove the last remaining one
    pub fn delete_slide(&mut self, slide_id: SlideId) -> Result<()> {
        let presentation = self.presentation().ok_or(EditError::NoPresentation)?;
        let index = presentation
            .slide_index(slide_id)
            .ok_or(EditError::SlideNotFound(slide_id))?;
        if presentation.slide_count() <= 1 {
            return Err(EditError::LastSlide);
        }

        self.store.delete_slide(slide_id);
        if self.current_slide >= index && self.current_slide > 0 {
            self.current_slide -= 1;
        }
        self.clamp_current();
        self.sync_canvas();
        Ok(())
    }

    /// Move a slide; the moved slide becomes the open one
    pub fn reorder_slides(&mut self, from: usize, to: usize) -> Result<()> {
        let count = self.slide_count();
        for index in [from, to] {
            if index >= count {
                return Err(EditError::SlideIndexOutOfRange { index, count });
            }
        }
        self.store.reorder_slides(from, to);
        self.current_slide = to;
        self.sync_canvas();
        Ok(())
    }

    /// Insert a blank content slide after the open one and open it
    pub fn add_slide(&mut self) -> Result<SlideId> {
        let presentation = self.presentation().ok_or(EditError::NoPresentation)?;
        let theme = presentation.theme();
        let heading = doc_model::Element::new(
            ElementType::Heading,
            ElementContent::text("New Slide"),
            Point::new(60.0, 40.0),
            Size::new(840.0, 70.0),
        )
        .with_style(
            ElementStyle::default()
                .with_font_size(36.0)
                .with_font_weight(FontWeight::Bold)
                .with_color(theme.text),
        );
        let slide = Slide::new("New Slide")
            .with_content(["Add your content here"])
            .with_layout(SlideLayout::Content)
            .with_elements(vec![heading]);
        let slide_id = slide.id;
        let index = self.current_slide + 1;
        self.store.add_slide(slide, Some(index));
        self.go_to_slide(index.min(self.slide_count().saturating_sub(1)))?;
        Ok(slide_id)
    }

    /// Add a default element of `element_type` to the open slide and select it
    pub fn add_element(&mut self, element_type: ElementType) -> Result<ElementId> {
        let presentation = self.presentation().ok_or(EditError::NoPresentation)?;
        let theme = presentation.theme();
        let slide_id = self
            .current_slide()
            .map(|s| s.id)
            .ok_or(EditError::SlideIndexOutOfRange {
                index: self.current_slide,
                count: 0,
            })?;

        let element = new_element(element_type, &theme);
        let element_id = element.id;
        self.store.add_element(slide_id, element);
        if let Some(canvas) = self.canvas.as_mut() {
            canvas.select(element_id);
        }
        tracing::debug!(slide = %slide_id, element = %element_id, kind = element_type.label(), "element added");
        Ok(element_id)
    }

    /// Rename the presentation. Blank titles are ignored.
    pub fn rename_presentation(&mut self, title: &str) -> bool {
        let title = title.trim();
        if title.is_empty() {
            return false;
        }
        self.store.update_title(title)
    }

    pub fn update_speaker_notes(&mut self, notes: impl Into<String>) -> bool {
        match self.current_slide().map(|s| s.id) {
            Some(id) => self.store.update_slide(id, SlidePatch::speaker_notes(notes)),
            None => false,
        }
    }

    pub fn change_template(&mut self, template: Template) -> bool {
        self.store.update_template(template)
    }

    pub fn change_color_scheme(&mut self, scheme: ColorScheme) -> bool {
        self.store.update_color_scheme(scheme)
    }
}
