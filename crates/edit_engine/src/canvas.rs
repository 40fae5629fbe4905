//! Element editor: the interaction state machine for one slide's canvas
//!
//! Pointer and keyboard events drive selection, dragging, resizing and
//! inline text editing. Previews stay local to the editor; the document
//! store only sees one update when a gesture is released or an edit is
//! committed.

use crate::{
    handle_at, CanvasSize, DocumentStore, DragGesture, ResizeGesture, TextEditSession,
};
use doc_model::{Element, ElementId, ElementPatch, Point, Rect, Slide, SlideId};

/// Keys the canvas reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    Escape,
    Delete,
}

/// Input delivered to the canvas, in canvas coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp(Point),
    DoubleClick(Point),
    Key(EditorKey),
    /// New full contents of the inline editor
    TextInput(String),
    Blur,
    /// Close the inline editor and discard the buffer
    CancelEdit,
}

/// Interaction state of the canvas
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CanvasState {
    #[default]
    Idle,
    Selected(ElementId),
    /// Pointer is down on an element but has not moved yet
    Pressed { element_id: ElementId, pointer: Point },
    Dragging(DragGesture),
    Resizing(ResizeGesture),
    TextEditing(TextEditSession),
}

impl CanvasState {
    /// Element the state refers to, if any
    pub fn element_id(&self) -> Option<ElementId> {
        match self {
            CanvasState::Idle => None,
            CanvasState::Selected(id) => Some(*id),
            CanvasState::Pressed { element_id, .. } => Some(*element_id),
            CanvasState::Dragging(g) => Some(g.element_id),
            CanvasState::Resizing(g) => Some(g.element_id),
            CanvasState::TextEditing(s) => Some(s.element_id),
        }
    }
}

/// A store update issued by the canvas
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasCommit {
    Moved { element_id: ElementId, position: Point },
    Resized { element_id: ElementId, bounds: Rect },
    ContentEdited { element_id: ElementId },
    Deleted { element_id: ElementId },
}

/// What handling an event did
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasOutcome {
    /// Nothing changed
    Unchanged,
    /// Local state changed (selection, preview or edit buffer)
    Updated,
    /// The document store was updated
    Committed(CanvasCommit),
}

impl CanvasOutcome {
    pub fn is_commit(&self) -> bool {
        matches!(self, CanvasOutcome::Committed(_))
    }
}

/// Canvas editor bound to one slide
#[derive(Debug, Clone)]
pub struct CanvasEditor {
    slide_id: SlideId,
    canvas: CanvasSize,
    state: CanvasState,
}

impl CanvasEditor {
    pub fn new(slide_id: SlideId) -> Self {
        Self::with_canvas(slide_id, CanvasSize::default())
    }

    pub fn with_canvas(slide_id: SlideId, canvas: CanvasSize) -> Self {
        Self {
            slide_id,
            canvas,
            state: CanvasState::Idle,
        }
    }

    pub fn slide_id(&self) -> SlideId {
        self.slide_id
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    pub fn state(&self) -> &CanvasState {
        &self.state
    }

    pub fn selected(&self) -> Option<ElementId> {
        self.state.element_id()
    }

    pub fn text_session(&self) -> Option<&TextEditSession> {
        match &self.state {
            CanvasState::TextEditing(session) => Some(session),
            _ => None,
        }
    }

    /// Select an element programmatically (e.g. right after inserting it)
    pub fn select(&mut self, element_id: ElementId) {
        self.state = CanvasState::Selected(element_id);
    }

    pub fn clear_selection(&mut self) {
        self.state = CanvasState::Idle;
    }

    /// In-flight gesture box, for renderers to draw instead of the stored one
    pub fn preview_bounds(&self) -> Option<(ElementId, Rect)> {
        match &self.state {
            CanvasState::Dragging(g) => Some((g.element_id, g.preview())),
            CanvasState::Resizing(g) => Some((g.element_id, g.preview())),
            _ => None,
        }
    }

    /// Elements in paint order: document order with the selected one last
    pub fn paint_order<'a>(&self, slide: &'a Slide) -> Vec<&'a Element> {
        let selected = self.selected();
        let mut ordered: Vec<&Element> = slide
            .elements
            .iter()
            .filter(|e| Some(e.id) != selected)
            .collect();
        if let Some(el) = selected.and_then(|id| slide.element(id)) {
            ordered.push(el);
        }
        ordered
    }

    /// Topmost element under `point`, trying the selected element first
    pub fn hit_test(&self, slide: &Slide, point: Point) -> Option<ElementId> {
        if let Some(el) = self.selected().and_then(|id| slide.element(id)) {
            if el.contains(point) {
                return Some(el.id);
            }
        }
        slide
            .elements
            .iter()
            .rev()
            .find(|e| e.contains(point))
            .map(|e| e.id)
    }

    /// Feed one event through the state machine
    pub fn handle_event(&mut self, event: EditorEvent, store: &mut DocumentStore) -> CanvasOutcome {
        let Some(slide) = store.slide(self.slide_id).cloned() else {
            if self.state != CanvasState::Idle {
                self.state = CanvasState::Idle;
                return CanvasOutcome::Updated;
            }
            return CanvasOutcome::Unchanged;
        };

        let dropped = self.drop_vanished_selection(&slide);

        let outcome = match event {
            EditorEvent::PointerDown(p) => self.pointer_down(&slide, p, store),
            EditorEvent::PointerMove(p) => self.pointer_move(&slide, p),
            EditorEvent::PointerUp(_) => self.pointer_up(store),
            EditorEvent::DoubleClick(p) => self.double_click(&slide, p, store),
            EditorEvent::Key(key) => self.key(key, store),
            EditorEvent::TextInput(text) => self.text_input(text),
            EditorEvent::Blur => self.commit_text(store),
            EditorEvent::CancelEdit => self.cancel_text(),
        };

        match outcome {
            CanvasOutcome::Unchanged if dropped => CanvasOutcome::Updated,
            other => other,
        }
    }

    fn drop_vanished_selection(&mut self, slide: &Slide) -> bool {
        match self.state.element_id() {
            Some(id) if slide.element(id).is_none() => {
                tracing::debug!(element = %id, "selected element vanished; clearing selection");
                self.state = CanvasState::Idle;
                true
            }
            _ => false,
        }
    }

    fn pointer_down(&mut self, slide: &Slide, point: Point, store: &mut DocumentStore) -> CanvasOutcome {
        // A click outside the inline editor blurs it first.
        let mut committed = None;
        if let CanvasState::TextEditing(session) = &self.state {
            if session.overlay.bounds.contains(point) {
                return CanvasOutcome::Unchanged;
            }
            if let CanvasOutcome::Committed(commit) = self.commit_text(store) {
                committed = Some(commit);
            }
        }

        if let CanvasState::Selected(id) = self.state {
            if let Some(el) = slide.element(id) {
                if let Some(handle) = handle_at(&el.bounds(), point) {
                    self.state = CanvasState::Resizing(ResizeGesture::new(el, handle, point));
                    return committed.map_or(CanvasOutcome::Updated, CanvasOutcome::Committed);
                }
            }
        }

        self.state = match self.hit_test(slide, point) {
            Some(element_id) => CanvasState::Pressed {
                element_id,
                pointer: point,
            },
            None => CanvasState::Idle,
        };
        committed.map_or(CanvasOutcome::Updated, CanvasOutcome::Committed)
    }

    fn pointer_move(&mut self, slide: &Slide, point: Point) -> CanvasOutcome {
        match &mut self.state {
            CanvasState::Pressed { element_id, pointer } => {
                if *pointer == point {
                    return CanvasOutcome::Unchanged;
                }
                let Some(element) = slide.element(*element_id) else {
                    return CanvasOutcome::Unchanged;
                };
                let mut drag = DragGesture::new(element, *pointer);
                drag.update(point, &self.canvas);
                self.state = CanvasState::Dragging(drag);
                CanvasOutcome::Updated
            }
            CanvasState::Dragging(drag) => {
                drag.update(point, &self.canvas);
                CanvasOutcome::Updated
            }
            CanvasState::Resizing(resize) => {
                if resize.update(point) {
                    CanvasOutcome::Updated
                } else {
                    CanvasOutcome::Unchanged
                }
            }
            _ => CanvasOutcome::Unchanged,
        }
    }

    fn pointer_up(&mut self, store: &mut DocumentStore) -> CanvasOutcome {
        match std::mem::take(&mut self.state) {
            CanvasState::Pressed { element_id, .. } => {
                self.state = CanvasState::Selected(element_id);
                CanvasOutcome::Updated
            }
            CanvasState::Dragging(drag) => {
                self.state = CanvasState::Selected(drag.element_id);
                store.update_element(
                    self.slide_id,
                    drag.element_id,
                    ElementPatch::position(drag.current),
                );
                tracing::debug!(element = %drag.element_id, x = drag.current.x, y = drag.current.y, "drag committed");
                CanvasOutcome::Committed(CanvasCommit::Moved {
                    element_id: drag.element_id,
                    position: drag.current,
                })
            }
            CanvasState::Resizing(resize) => {
                self.state = CanvasState::Selected(resize.element_id);
                if !resize.has_changed() {
                    return CanvasOutcome::Updated;
                }
                let size = resize.committed_size();
                store.update_element(
                    self.slide_id,
                    resize.element_id,
                    ElementPatch::bounds(resize.position, size),
                );
                tracing::debug!(element = %resize.element_id, width = size.width, height = size.height, "resize committed");
                CanvasOutcome::Committed(CanvasCommit::Resized {
                    element_id: resize.element_id,
                    bounds: Rect::from_parts(resize.position, size),
                })
            }
            other => {
                self.state = other;
                CanvasOutcome::Unchanged
            }
        }
    }

    fn double_click(&mut self, slide: &Slide, point: Point, store: &mut DocumentStore) -> CanvasOutcome {
        if matches!(self.state, CanvasState::TextEditing(_)) {
            return CanvasOutcome::Unchanged;
        }
        let Some(element) = self.hit_test(slide, point).and_then(|id| slide.element(id)) else {
            return CanvasOutcome::Unchanged;
        };
        if !element.element_type.is_text_editable() {
            return CanvasOutcome::Unchanged;
        }
        let theme = match store.presentation() {
            Some(p) => p.theme(),
            None => return CanvasOutcome::Unchanged,
        };
        self.state = CanvasState::TextEditing(TextEditSession::open(element, &theme));
        CanvasOutcome::Updated
    }

    fn key(&mut self, key: EditorKey, store: &mut DocumentStore) -> CanvasOutcome {
        match (key, &self.state) {
            (EditorKey::Escape, CanvasState::TextEditing(_)) => self.commit_text(store),
            (EditorKey::Escape, CanvasState::Idle) => CanvasOutcome::Unchanged,
            (EditorKey::Escape, _) => {
                self.state = CanvasState::Idle;
                CanvasOutcome::Updated
            }
            (EditorKey::Delete, CanvasState::Selected(id)) => {
                let element_id = *id;
                self.state = CanvasState::Idle;
                store.delete_element(self.slide_id, element_id);
                CanvasOutcome::Committed(CanvasCommit::Deleted { element_id })
            }
            (EditorKey::Delete, _) => CanvasOutcome::Unchanged,
        }
    }

    fn text_input(&mut self, text: String) -> CanvasOutcome {
        match &mut self.state {
            CanvasState::TextEditing(session) => {
                session.buffer = text;
                CanvasOutcome::Updated
            }
            _ => CanvasOutcome::Unchanged,
        }
    }

    fn commit_text(&mut self, store: &mut DocumentStore) -> CanvasOutcome {
        let CanvasState::TextEditing(session) = &self.state else {
            return CanvasOutcome::Unchanged;
        };
        let element_id = session.element_id;
        let content = session.committed_content();
        self.state = CanvasState::Selected(element_id);
        store.update_element(self.slide_id, element_id, ElementPatch::content(content));
        CanvasOutcome::Committed(CanvasCommit::ContentEdited { element_id })
    }

    fn cancel_text(&mut self) -> CanvasOutcome {
        let CanvasState::TextEditing(session) = &self.state else {
            return CanvasOutcome::Unchanged;
        };
        self.state = CanvasState::Selected(session.element_id);
        CanvasOutcome::Updated
    }
}
