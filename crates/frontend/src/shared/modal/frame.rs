use leptos::ev;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Dialog frame: overlay plus positioned surface with a corner close
/// button. Dialogs render their own header so create/edit titles stay with
/// the form that owns them.
#[component]
pub fn ModalFrame(
    /// Called when the frame should close (overlay click, close button).
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // We only close if both press and release happened on the overlay itself.
    // This prevents closing when the user selects text inside the dialog and
    // releases the mouse outside.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            on_close.run(());
        }
    };

    view! {
        <div
            class="modal-overlay"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class="modal">
                <button
                    type="button"
                    class="modal__close"
                    aria-label="Fechar"
                    on:click=move |_| on_close.run(())
                >
                    {icon("x")}
                </button>
                {children()}
            </div>
        </div>
    }
}
