//! Slide navigation for presenter mode
//!
//! A clamped index over the slides of a deck. The same rules drive the
//! navigation script embedded in HTML exports.

use doc_model::{Presentation, Slide};
use serde::{Deserialize, Serialize};

/// Keys understood by the presenter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavKey {
    Left,
    Up,
    Right,
    Down,
    Space,
    Home,
    End,
    Escape,
}

/// Result of a navigation key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// Index moved to the given slide
    Moved(usize),
    /// Already at the boundary
    Stayed(usize),
    /// Presenter should close
    Close,
}

/// Presenter navigation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideNavigator {
    index: usize,
    count: usize,
}

impl SlideNavigator {
    pub fn new(count: usize) -> Self {
        Self { index: 0, count }
    }

    /// Start at `index`, clamped into range
    pub fn starting_at(count: usize, index: usize) -> Self {
        let mut nav = Self::new(count);
        nav.go_to(index);
        nav
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.count
    }

    fn last_index(&self) -> usize {
        self.count.saturating_sub(1)
    }

    pub fn go_to(&mut self, index: usize) -> NavOutcome {
        let target = index.min(self.last_index());
        if target == self.index {
            NavOutcome::Stayed(self.index)
        } else {
            self.index = target;
            NavOutcome::Moved(target)
        }
    }

    pub fn next(&mut self) -> NavOutcome {
        self.go_to(self.index.saturating_add(1))
    }

    pub fn previous(&mut self) -> NavOutcome {
        self.go_to(self.index.saturating_sub(1))
    }

    pub fn handle_key(&mut self, key: NavKey) -> NavOutcome {
        match key {
            NavKey::Left | NavKey::Up => self.previous(),
            NavKey::Right | NavKey::Down | NavKey::Space => self.next(),
            NavKey::Home => self.go_to(0),
            NavKey::End => self.go_to(self.last_index()),
            NavKey::Escape => NavOutcome::Close,
        }
    }

    /// Human readable position, e.g. "3 / 7"
    pub fn counter_label(&self) -> String {
        if self.count == 0 {
            return "0 / 0".to_string();
        }
        format!("{} / {}", self.index + 1, self.count)
    }

    /// Slide at the current index
    pub fn current_slide<'a>(&self, presentation: &'a Presentation) -> Option<&'a Slide> {
        presentation.slides.get(self.index)
    }

    /// Speaker notes shown under the current slide
    pub fn speaker_notes<'a>(&self, presentation: &'a Presentation) -> Option<&'a str> {
        self.current_slide(presentation)
            .map(|s| s.speaker_notes.as_str())
            .filter(|notes| !notes.trim().is_empty())
    }

    /// Track a change in slide count, keeping the index in range
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        self.index = self.index.min(self.last_index());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_at_both_ends() {
        let mut nav = SlideNavigator::new(3);
        assert_eq!(nav.previous(), NavOutcome::Stayed(0));
        assert_eq!(nav.next(), NavOutcome::Moved(1));
        assert_eq!(nav.next(), NavOutcome::Moved(2));
        assert_eq!(nav.next(), NavOutcome::Stayed(2));
        assert!(nav.is_last());
    }

    #[test]
    fn test_keys() {
        let mut nav = SlideNavigator::new(7);
        assert_eq!(nav.handle_key(NavKey::End), NavOutcome::Moved(6));
        assert_eq!(nav.handle_key(NavKey::Space), NavOutcome::Stayed(6));
        assert_eq!(nav.handle_key(NavKey::Up), NavOutcome::Moved(5));
        assert_eq!(nav.handle_key(NavKey::Home), NavOutcome::Moved(0));
        assert_eq!(nav.handle_key(NavKey::Escape), NavOutcome::Close);
        assert_eq!(nav.counter_label(), "1 / 7");
    }

    #[test]
    fn test_speaker_notes_follow_index() {
        let deck = Presentation::new(
            "Deck",
            vec![Slide::new("A").with_notes("Say hello"), Slide::new("B")],
        );
        let mut nav = SlideNavigator::new(deck.slide_count());
        assert_eq!(nav.speaker_notes(&deck), Some("Say hello"));
        nav.next();
        assert_eq!(nav.speaker_notes(&deck), None);
    }

    #[test]
    fn test_empty_deck() {
        let mut nav = SlideNavigator::new(0);
        assert_eq!(nav.next(), NavOutcome::Stayed(0));
        assert_eq!(nav.counter_label(), "0 / 0");
    }

    #[test]
    fn test_set_count_clamps_index() {
        let mut nav = SlideNavigator::starting_at(5, 4);
        nav.set_count(2);
        assert_eq!(nav.index(), 1);
    }
}
