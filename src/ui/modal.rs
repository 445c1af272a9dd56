use crate::common::{Message, MessageDraft, MessageId};

/// Which dialog, if any, is on screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Create,
    Edit {
        id: MessageId,
    },
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    pub fn editing_id(&self) -> Option<&str> {
        match self {
            ModalState::Edit { id } => Some(id),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ModalState::Edit { .. } => "Edit message",
            _ => "New message",
        }
    }
}

/// Field values and the enabled flag of the dialog form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageForm {
    pub fields: MessageDraft,
    disabled: bool,
}

impl MessageForm {
    pub fn reset(&mut self) {
        self.fields = MessageDraft::default();
    }

    pub fn fill(&mut self, message: &Message) {
        self.fields = message.draft();
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

/// Whatever can report and move keyboard focus inside the open dialog.
pub trait FocusSurface {
    type Target: Copy + Eq;

    /// Focusable descendants of the dialog, in tab order.
    fn focusable(&self) -> Vec<Self::Target>;
    fn focused(&self) -> Option<Self::Target>;
    fn focus(&mut self, target: Self::Target);
}

/// Where Tab must land to keep focus inside `focusable`, or `None` to let it move normally.
pub fn wrap_target<T: Copy + Eq>(focusable: &[T], focused: Option<T>, backward: bool) -> Option<T> {
    let (first, last) = (*focusable.first()?, *focusable.last()?);
    match focused {
        Some(current) if backward && current == first => Some(last),
        Some(current) if !backward && current == last => Some(first),
        Some(current) if focusable.contains(&current) => None,
        _ if backward => Some(last),
        _ => Some(first),
    }
}

/// Applies the wrap for a Tab press. Returns true when focus was moved.
pub fn trap_tab<S: FocusSurface>(surface: &mut S, backward: bool) -> bool {
    let focusable = surface.focusable();
    match wrap_target(&focusable, surface.focused(), backward) {
        Some(target) => {
            surface.focus(target);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeDialog {
        widgets: Vec<u8>,
        focused: Option<u8>,
    }

    impl FocusSurface for FakeDialog {
        type Target = u8;

        fn focusable(&self) -> Vec<u8> {
            self.widgets.clone()
        }

        fn focused(&self) -> Option<u8> {
            self.focused
        }

        fn focus(&mut self, target: u8) {
            self.focused = Some(target);
        }
    }

    fn dialog(focused: Option<u8>) -> FakeDialog {
        FakeDialog {
            widgets: vec![1, 2, 3, 4, 5],
            focused,
        }
    }

    #[test]
    fn forward_tab_on_last_wraps_to_first() {
        let mut surface = dialog(Some(5));
        assert!(trap_tab(&mut surface, false));
        assert_eq!(surface.focused, Some(1));
    }

    #[test]
    fn backward_tab_on_first_wraps_to_last() {
        let mut surface = dialog(Some(1));
        assert!(trap_tab(&mut surface, true));
        assert_eq!(surface.focused, Some(5));
    }

    #[test]
    fn tab_in_the_middle_is_left_alone() {
        let mut surface = dialog(Some(3));
        assert!(!trap_tab(&mut surface, false));
        assert!(!trap_tab(&mut surface, true));
        assert_eq!(surface.focused, Some(3));
    }

    #[test]
    fn focus_outside_the_dialog_is_pulled_in() {
        let mut surface = dialog(Some(99));
        assert!(trap_tab(&mut surface, false));
        assert_eq!(surface.focused, Some(1));

        let mut surface = dialog(None);
        assert!(trap_tab(&mut surface, true));
        assert_eq!(surface.focused, Some(5));
    }

    #[test]
    fn empty_dialog_has_nowhere_to_go() {
        assert_eq!(wrap_target::<u8>(&[], Some(1), false), None);
    }

    #[test]
    fn edit_state_exposes_its_id() {
        let state = ModalState::Edit { id: "7".into() };
        assert!(state.is_open());
        assert_eq!(state.editing_id(), Some("7"));
        assert_eq!(ModalState::Create.editing_id(), None);
        assert!(!ModalState::Closed.is_open());
    }
}
