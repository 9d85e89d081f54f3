//! Transient notification state shared across pages.

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Neutral information.
    Info,
    /// Successful mutation.
    Success,
    /// Failed mutation.
    Error,
}

/// One transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic id used for dismissal.
    pub id: u64,
    /// Message shown to the user.
    pub message: String,
    /// Visual flavor.
    pub kind: ToastKind,
}

/// Toast queue kept in the app store so any page can push.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ToastState {
    /// Visible toasts, oldest first.
    pub toasts: Vec<Toast>,
    next_id: u64,
}

/// Cap on simultaneously visible toasts; older ones are dropped.
const MAX_VISIBLE: usize = 4;

impl ToastState {
    /// Append a toast, evicting the oldest beyond the visible cap.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.next_id += 1;
        self.toasts.push(Toast {
            id: self.next_id,
            message: message.into(),
            kind,
        });
        if self.toasts.len() > MAX_VISIBLE {
            let drain = self.toasts.len() - MAX_VISIBLE;
            self.toasts.drain(0..drain);
        }
    }

    /// Remove a toast by id.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::{ToastKind, ToastState};

    #[test]
    fn push_caps_visible_toasts() {
        let mut state = ToastState::default();
        for n in 0..6 {
            state.push(ToastKind::Info, format!("toast {n}"));
        }
        assert_eq!(state.toasts.len(), 4);
        assert_eq!(state.toasts[0].message, "toast 2");
    }

    #[test]
    fn dismiss_removes_by_id() {
        let mut state = ToastState::default();
        state.push(ToastKind::Success, "saved");
        state.push(ToastKind::Error, "failed");
        let id = state.toasts[0].id;
        state.dismiss(id);
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].message, "failed");
    }
}
