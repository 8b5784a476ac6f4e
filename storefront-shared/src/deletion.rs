//! # Card Deletion
//!
//! Optimistic deletion of product cards. A card is dimmed and disabled as soon
//! as the user confirms, animated out once the server agrees, and removed from
//! the list when the animation window closes. Every failure path puts the card
//! back into its interactive state.

use std::collections::HashMap;

use tracing::debug;

use crate::models::ProductCard;

/// Where a card is in its deletion lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeletionPhase {
    #[default]
    Idle,
    /// Request in flight; card dimmed and disabled.
    Pending,
    /// Server confirmed; removal animation running.
    Removing,
}

/// Inline presentation of a card for a given phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPresentation {
    pub opacity: f32,
    pub scale: f32,
    /// Whether the card accepts pointer events.
    pub interactive: bool,
    /// Whether the delete button is disabled.
    pub button_disabled: bool,
    /// Whether the scale/opacity transition is enabled.
    pub animated: bool,
}

impl CardPresentation {
    /// CSS for the card's `style` attribute.
    #[must_use]
    pub fn style(&self) -> String {
        let mut style = format!(
            "opacity: {}; transform: scale({}); pointer-events: {};",
            self.opacity,
            self.scale,
            if self.interactive { "auto" } else { "none" }
        );
        if self.animated {
            style.push_str(" transition: transform 0.3s ease, opacity 0.3s ease;");
        }
        style
    }
}

impl DeletionPhase {
    #[must_use]
    pub const fn presentation(self) -> CardPresentation {
        match self {
            Self::Idle => CardPresentation {
                opacity: 1.0,
                scale: 1.0,
                interactive: true,
                button_disabled: false,
                animated: false,
            },
            Self::Pending => CardPresentation {
                opacity: 0.5,
                scale: 1.0,
                interactive: false,
                button_disabled: true,
                animated: false,
            },
            Self::Removing => CardPresentation {
                opacity: 0.0,
                scale: 0.0,
                interactive: false,
                button_disabled: true,
                animated: true,
            },
        }
    }
}

/// Phase of every card that is not idle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionTracker {
    phases: HashMap<u64, DeletionPhase>,
}

impl DeletionTracker {
    #[must_use]
    pub fn phase(&self, id: u64) -> DeletionPhase {
        self.phases.get(&id).copied().unwrap_or_default()
    }

    /// Start deleting `id`. Returns `false` when a deletion is already in
    /// flight for that card, in which case nothing changes.
    pub fn begin(&mut self, id: u64) -> bool {
        if self.phase(id) != DeletionPhase::Idle {
            debug!(id, "deletion already in progress");
            return false;
        }
        self.phases.insert(id, DeletionPhase::Pending);
        true
    }

    /// The server confirmed the deletion; start the removal animation.
    pub fn confirm(&mut self, id: u64) {
        if self.phase(id) == DeletionPhase::Pending {
            self.phases.insert(id, DeletionPhase::Removing);
        }
    }

    /// The deletion failed; restore the card.
    pub fn roll_back(&mut self, id: u64) {
        debug!(id, "rolling back deletion");
        self.phases.remove(&id);
    }

    /// Drop the card once the animation window has closed. Returns whether a
    /// card was removed; a card that is no longer present is ignored.
    pub fn finish(&mut self, id: u64, cards: &mut Vec<ProductCard>) -> bool {
        if self.phase(id) != DeletionPhase::Removing {
            return false;
        }
        self.phases.remove(&id);
        let before = cards.len();
        cards.retain(|card| card.id != id);
        cards.len() < before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogView;

    fn cards() -> Vec<ProductCard> {
        (1..=3)
            .map(|id| ProductCard {
                id,
                title: format!("Producto {id}"),
                price: 10.0 * f64::from(u32::try_from(id).unwrap()),
                category: "Ropa".to_string(),
                category_id: 1,
                description: String::new(),
                image: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_successful_deletion_removes_exactly_one_card() {
        let mut list = cards();
        let view = CatalogView::default();
        let mut tracker = DeletionTracker::default();
        let before = view.counts(&list).total;

        assert!(tracker.begin(2));
        assert!((tracker.phase(2).presentation().opacity - 0.5).abs() < f32::EPSILON);
        tracker.confirm(2);
        assert_eq!(tracker.phase(2), DeletionPhase::Removing);
        assert!(tracker.finish(2, &mut list));

        assert_eq!(view.counts(&list).total, before - 1);
        assert!(list.iter().all(|card| card.id != 2));
        assert_eq!(tracker.phase(2), DeletionPhase::Idle);
    }

    #[test]
    fn test_failed_deletion_restores_card() {
        let mut list = cards();
        let mut tracker = DeletionTracker::default();

        assert!(tracker.begin(1));
        let pending = tracker.phase(1).presentation();
        assert!(!pending.interactive);
        assert!(pending.button_disabled);

        tracker.roll_back(1);
        let restored = tracker.phase(1).presentation();
        assert!((restored.opacity - 1.0).abs() < f32::EPSILON);
        assert!(restored.interactive);
        assert!(!restored.button_disabled);

        assert!(!tracker.finish(1, &mut list));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_second_begin_is_ignored_while_in_flight() {
        let mut tracker = DeletionTracker::default();
        assert!(tracker.begin(3));
        assert!(!tracker.begin(3));
        tracker.confirm(3);
        assert!(!tracker.begin(3));
    }

    #[test]
    fn test_finish_tolerates_already_removed_card() {
        let mut list = cards();
        let mut tracker = DeletionTracker::default();
        tracker.begin(2);
        tracker.confirm(2);
        list.retain(|card| card.id != 2);

        assert!(!tracker.finish(2, &mut list));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_confirm_without_begin_is_ignored() {
        let mut tracker = DeletionTracker::default();
        tracker.confirm(9);
        assert_eq!(tracker.phase(9), DeletionPhase::Idle);
    }

    #[test]
    fn test_presentation_style() {
        let idle = DeletionPhase::Idle.presentation().style();
        assert!(idle.contains("opacity: 1"));
        assert!(idle.contains("pointer-events: auto"));
        assert!(!idle.contains("transition"));

        let removing = DeletionPhase::Removing.presentation().style();
        assert!(removing.contains("scale(0)"));
        assert!(removing.contains("transition"));
    }
}
