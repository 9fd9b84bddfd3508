//! Select/deselect-all toggling for a checkbox group.
//!
//! # Design
//! - The checkbox group and the button label are injected as handles; nothing here looks up elements.
//! - One activation computes a single target state and applies it to every checkbox.
//! - An empty group counts as "nothing checked" and still flips the label to "Deselect All".

use std::fmt;

/// Label shown on the toggle button, naming the action the next click performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleLabel {
    /// Group is fully unchecked.
    SelectAll,
    /// Group is fully checked.
    DeselectAll,
}

impl ToggleLabel {
    /// Label rendered before the first activation.
    #[must_use]
    pub const fn initial() -> Self {
        Self::SelectAll
    }

    /// Label matching a uniform group state.
    #[must_use]
    pub const fn for_state(all_checked: bool) -> Self {
        if all_checked {
            Self::DeselectAll
        } else {
            Self::SelectAll
        }
    }

    /// Literal button text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SelectAll => "Select All",
            Self::DeselectAll => "Deselect All",
        }
    }
}

impl fmt::Display for ToggleLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// Whether any checkbox was checked before the activation.
    pub any_checked: bool,
    /// Uniform state written to every checkbox.
    pub checked: bool,
    /// Number of checkboxes written.
    pub affected: usize,
}

impl ToggleOutcome {
    const fn from_scan(any_checked: bool, affected: usize) -> Self {
        Self {
            any_checked,
            checked: !any_checked,
            affected,
        }
    }

    /// Button label after this activation.
    #[must_use]
    pub const fn label(&self) -> ToggleLabel {
        ToggleLabel::for_state(self.checked)
    }
}

/// Apply one activation to an in-memory group of checkbox states.
pub fn toggle_all(states: &mut [bool]) -> ToggleOutcome {
    let outcome = ToggleOutcome::from_scan(states.iter().any(|checked| *checked), states.len());
    states.fill(outcome.checked);
    outcome
}

/// A single checkbox whose checked state can be read and written.
pub trait CheckboxHandle {
    /// Current checked state.
    fn is_checked(&self) -> bool;
    /// Overwrite the checked state.
    fn set_checked(&self, checked: bool);
}

/// A control whose text label can be replaced.
pub trait LabelHandle {
    /// Replace the visible label text.
    fn set_label(&self, text: &str);
}

/// Toggles a fixed checkbox group and keeps the button label in sync.
#[derive(Debug)]
pub struct ToggleController<L, C> {
    label: L,
    checkboxes: Vec<C>,
}

impl<L, C> ToggleController<L, C>
where
    L: LabelHandle,
    C: CheckboxHandle,
{
    /// Bind the controller to a label and the checkboxes present at construction time.
    #[must_use]
    pub const fn new(label: L, checkboxes: Vec<C>) -> Self {
        Self { label, checkboxes }
    }

    /// Number of checkboxes in the group.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.checkboxes.len()
    }

    /// True when the group has no checkboxes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.checkboxes.is_empty()
    }

    /// Run one activation: scan, apply the uniform target state, relabel.
    pub fn activate(&self) -> ToggleOutcome {
        let any_checked = self.checkboxes.iter().any(CheckboxHandle::is_checked);
        let outcome = ToggleOutcome::from_scan(any_checked, self.checkboxes.len());
        for checkbox in &self.checkboxes {
            checkbox.set_checked(outcome.checked);
        }
        self.label.set_label(outcome.label().as_str());
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeCheckbox {
        checked: Rc<Cell<bool>>,
        reads: Rc<Cell<usize>>,
    }

    impl FakeCheckbox {
        fn new(checked: bool) -> Self {
            let fake = Self::default();
            fake.checked.set(checked);
            fake
        }
    }

    impl CheckboxHandle for FakeCheckbox {
        fn is_checked(&self) -> bool {
            self.reads.set(self.reads.get() + 1);
            self.checked.get()
        }

        fn set_checked(&self, checked: bool) {
            self.checked.set(checked);
        }
    }

    #[derive(Clone, Default)]
    struct FakeLabel {
        text: Rc<RefCell<String>>,
    }

    impl LabelHandle for FakeLabel {
        fn set_label(&self, text: &str) {
            *self.text.borrow_mut() = text.to_string();
        }
    }

    fn bind(
        states: &[bool],
    ) -> (
        ToggleController<FakeLabel, FakeCheckbox>,
        FakeLabel,
        Vec<FakeCheckbox>,
    ) {
        let label = FakeLabel::default();
        let boxes: Vec<_> = states.iter().copied().map(FakeCheckbox::new).collect();
        (
            ToggleController::new(label.clone(), boxes.clone()),
            label,
            boxes,
        )
    }

    fn snapshot(boxes: &[FakeCheckbox]) -> Vec<bool> {
        boxes.iter().map(|fake| fake.checked.get()).collect()
    }

    #[test]
    fn unchecked_group_becomes_checked() {
        let (controller, label, boxes) = bind(&[false, false, false]);
        let outcome = controller.activate();
        assert_eq!(snapshot(&boxes), vec![true, true, true]);
        assert_eq!(label.text.borrow().as_str(), "Deselect All");
        assert!(!outcome.any_checked);
        assert_eq!(outcome.affected, 3);
    }

    #[test]
    fn checked_group_becomes_unchecked() {
        let (controller, label, boxes) = bind(&[true, true, true]);
        controller.activate();
        assert_eq!(snapshot(&boxes), vec![false, false, false]);
        assert_eq!(label.text.borrow().as_str(), "Select All");
    }

    #[test]
    fn mixed_group_clears_everything() {
        let (controller, label, boxes) = bind(&[true, false, false]);
        let outcome = controller.activate();
        assert!(outcome.any_checked);
        assert_eq!(snapshot(&boxes), vec![false, false, false]);
        assert_eq!(label.text.borrow().as_str(), "Select All");
    }

    #[test]
    fn empty_group_still_reports_deselect_all() {
        let (controller, label, boxes) = bind(&[]);
        assert!(controller.is_empty());
        let outcome = controller.activate();
        assert!(boxes.is_empty());
        assert_eq!(outcome.affected, 0);
        assert_eq!(outcome.label(), ToggleLabel::DeselectAll);
        assert_eq!(label.text.borrow().as_str(), "Deselect All");
    }

    #[test]
    fn scan_stops_at_first_checked_box() {
        let (controller, _label, boxes) = bind(&[true, false, false]);
        controller.activate();
        let reads: Vec<usize> = boxes.iter().map(|fake| fake.reads.get()).collect();
        assert_eq!(reads, vec![1, 0, 0]);
    }

    #[test]
    fn two_activations_restore_uniform_state_and_label() {
        for initial in [false, true] {
            let (controller, label, boxes) = bind(&[initial; 4]);
            controller.activate();
            let first_label = label.text.borrow().clone();
            controller.activate();
            assert_eq!(snapshot(&boxes), vec![initial; 4]);
            let expected = ToggleLabel::for_state(!initial).as_str();
            assert_eq!(first_label, expected);
            assert_eq!(
                label.text.borrow().as_str(),
                ToggleLabel::for_state(initial).as_str()
            );
        }
    }

    #[test]
    fn label_always_matches_resulting_state() {
        let groups: [&[bool]; 5] = [
            &[false],
            &[true],
            &[false, true],
            &[true, false, true, false],
            &[false, false, false, false, true],
        ];
        for group in groups {
            let (controller, label, boxes) = bind(group);
            controller.activate();
            let after = snapshot(&boxes);
            let first = after[0];
            assert!(after.iter().all(|checked| *checked == first));
            assert_eq!(
                label.text.borrow().as_str(),
                ToggleLabel::for_state(first).as_str()
            );
        }
    }

    #[test]
    fn slice_toggle_matches_controller() {
        let mut states = vec![true, false, false];
        let outcome = toggle_all(&mut states);
        assert_eq!(states, vec![false, false, false]);
        assert_eq!(outcome.label(), ToggleLabel::SelectAll);

        let mut empty: Vec<bool> = Vec::new();
        assert_eq!(toggle_all(&mut empty).label(), ToggleLabel::DeselectAll);
    }

    #[test]
    fn label_text_is_literal() {
        assert_eq!(ToggleLabel::initial().to_string(), "Select All");
        assert_eq!(ToggleLabel::DeselectAll.to_string(), "Deselect All");
    }
}
