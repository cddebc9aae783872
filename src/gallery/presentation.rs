// SPDX-License-Identifier: MPL-2.0
//! Per-item styling derived from the navigation view.
//!
//! Nothing here holds state: every function maps a [`NavigationView`] to
//! targets that the carousel animates toward.

use super::controller::NavigationView;

/// Where an item sits relative to the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Already scrolled past; parked below the viewport.
    Passed,
    Active,
    /// Not reached yet; waiting above the viewport.
    Upcoming,
}

impl Slot {
    pub fn for_index(index: usize, view: &NavigationView) -> Self {
        match index.cmp(&view.active_index) {
            std::cmp::Ordering::Less => Self::Passed,
            std::cmp::Ordering::Equal => Self::Active,
            std::cmp::Ordering::Greater => Self::Upcoming,
        }
    }

    pub fn target(self) -> SlotStyle {
        match self {
            Self::Active => SlotStyle {
                opacity: 1.0,
                scale: 1.0,
                offset: 0.0,
            },
            Self::Passed => SlotStyle {
                opacity: 0.0,
                scale: 0.9,
                offset: 1.0,
            },
            Self::Upcoming => SlotStyle {
                opacity: 0.0,
                scale: 0.9,
                offset: -1.0,
            },
        }
    }
}

/// Visual target for one item.
///
/// `offset` is measured in viewport heights; positive moves down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotStyle {
    pub opacity: f32,
    pub scale: f32,
    pub offset: f32,
}

impl SlotStyle {
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

/// One dot in the indicator column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub index: usize,
    pub active: bool,
    /// Clicks are ignored while a transition is running.
    pub enabled: bool,
}

pub fn indicators(view: &NavigationView) -> impl Iterator<Item = Indicator> + '_ {
    (0..view.len).map(move |index| Indicator {
        index,
        active: view.is_active(index),
        enabled: !view.transitioning,
    })
}

/// 1-based position and total, for the `N / M` counter.
pub fn counter(view: &NavigationView) -> Option<(usize, usize)> {
    (view.len > 0).then(|| (view.active_index + 1, view.len))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(active_index: usize, len: usize, transitioning: bool) -> NavigationView {
        NavigationView {
            active_index,
            transitioning,
            len,
        }
    }

    #[test]
    fn slots_follow_active_index() {
        let v = view(2, 5, false);
        let slots: Vec<_> = (0..5).map(|i| Slot::for_index(i, &v)).collect();
        assert_eq!(
            slots,
            [
                Slot::Passed,
                Slot::Passed,
                Slot::Active,
                Slot::Upcoming,
                Slot::Upcoming
            ]
        );
    }

    #[test]
    fn only_active_slot_is_visible() {
        assert!(Slot::Active.target().is_visible());
        assert!(!Slot::Passed.target().is_visible());
        assert!(!Slot::Upcoming.target().is_visible());
    }

    #[test]
    fn passed_and_upcoming_move_in_opposite_directions() {
        let passed = Slot::Passed.target();
        let upcoming = Slot::Upcoming.target();
        assert!(passed.offset > 0.0);
        assert!(upcoming.offset < 0.0);
        assert_eq!(passed.scale, upcoming.scale);
        assert_eq!(Slot::Active.target().scale, 1.0);
    }

    #[test]
    fn indicators_mark_active_and_lock_while_transitioning() {
        let idle: Vec<_> = indicators(&view(1, 3, false)).collect();
        assert_eq!(idle.len(), 3);
        assert!(idle[1].active);
        assert!(!idle[0].active && !idle[2].active);
        assert!(idle.iter().all(|i| i.enabled));

        let locked: Vec<_> = indicators(&view(1, 3, true)).collect();
        assert!(locked.iter().all(|i| !i.enabled));
    }

    #[test]
    fn counter_is_one_based() {
        assert_eq!(counter(&view(0, 6, false)), Some((1, 6)));
        assert_eq!(counter(&view(5, 6, true)), Some((6, 6)));
        assert_eq!(counter(&view(0, 0, false)), None);
    }
}
