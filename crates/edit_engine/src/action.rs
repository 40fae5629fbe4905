//! Store actions: every mutation of the document is one of these

use doc_model::{
    ColorScheme, Element, ElementId, ElementPatch, Presentation, Slide, SlideId, SlidePatch,
    Template,
};
use serde::{Deserialize, Serialize};

/// A single state transition understood by the document store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum StoreAction {
    SetPresentation {
        presentation: Box<Presentation>,
    },
    UpdateSlide {
        slide_id: SlideId,
        patch: SlidePatch,
    },
    DeleteSlide {
        slide_id: SlideId,
    },
    AddSlide {
        slide: Box<Slide>,
        index: Option<usize>,
    },
    ReorderSlides {
        from: usize,
        to: usize,
    },
    UpdateTemplate {
        template: Template,
    },
    UpdateColorScheme {
        color_scheme: ColorScheme,
    },
    UpdateTitle {
        title: String,
    },
    AddElement {
        slide_id: SlideId,
        element: Box<Element>,
    },
    UpdateElement {
        slide_id: SlideId,
        element_id: ElementId,
        patch: ElementPatch,
    },
    DeleteElement {
        slide_id: SlideId,
        element_id: ElementId,
    },
    SetGenerating {
        generating: bool,
        progress: Option<String>,
    },
    Reset,
}

impl StoreAction {
    /// Get a display name for this action
    pub fn display_name(&self) -> &'static str {
        match self {
            StoreAction::SetPresentation { .. } => "Set Presentation",
            StoreAction::UpdateSlide { .. } => "Update Slide",
            StoreAction::DeleteSlide { .. } => "Delete Slide",
            StoreAction::AddSlide { .. } => "Add Slide",
            StoreAction::ReorderSlides { .. } => "Reorder Slides",
            StoreAction::UpdateTemplate { .. } => "Update Template",
            StoreAction::UpdateColorScheme { .. } => "Update Color Scheme",
            StoreAction::UpdateTitle { .. } => "Update Title",
            StoreAction::AddElement { .. } => "Add Element",
            StoreAction::UpdateElement { .. } => "Update Element",
            StoreAction::DeleteElement { .. } => "Delete Element",
            StoreAction::SetGenerating { .. } => "Set Generating",
            StoreAction::Reset => "Reset",
        }
    }

    /// Whether the action only makes sense with a loaded presentation
    pub fn requires_presentation(&self) -> bool {
        !matches!(
            self,
            StoreAction::SetPresentation { .. } | StoreAction::SetGenerating { .. } | StoreAction::Reset
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_json_tagging() {
        let action = StoreAction::ReorderSlides { from: 0, to: 2 };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], "reorderSlides");
        assert_eq!(json["to"], 2);
        let back: StoreAction = serde_json::from_value(json).unwrap();
        assert_eq!(back, action);
    }

    #[test]
    fn test_requires_presentation() {
        assert!(!StoreAction::Reset.requires_presentation());
        assert!(StoreAction::UpdateTitle { title: "x".into() }.requires_presentation());
    }
}
