pub mod api;
pub mod controller;
pub mod session;

use shared_ui::{ToastOptions, Toasts};

use controller::{Notice, NoticeKind};

/// Push controller notices onto the toast stack.
pub fn show_notices(toast: Toasts, notices: &[Notice]) {
    for notice in notices {
        match notice.kind {
            NoticeKind::Success => toast.success(notice.message.clone(), ToastOptions::new()),
            NoticeKind::Error => toast.error(notice.message.clone(), ToastOptions::new()),
        }
    }
}
