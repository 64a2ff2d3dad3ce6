mod frame;

pub use frame::ModalFrame;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

#[derive(Clone)]
struct DialogEntry {
    id: u64,
    builder: Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>,
}

/// A handle returned by [`ModalService::open`].
///
/// Can be cloned and used inside event handlers to close the dialog.
#[derive(Clone)]
pub struct ModalHandle {
    id: u64,
    svc: ModalService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }
}

/// Centralized host for the admin form dialogs. One dialog at a time;
/// opening a new one replaces the current. Escape and the frame's close
/// affordances go through the same deferred-close path.
#[derive(Clone, Copy)]
pub struct ModalService {
    current: RwSignal<Option<DialogEntry>>,
    next_id: RwSignal<u64>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            next_id: RwSignal::new(1),
        }
    }

    pub fn is_open(&self) -> bool {
        self.current.with(|entry| entry.is_some())
    }

    /// Open a dialog. `builder` receives a [`ModalHandle`] so the dialog can
    /// close itself after a save or cancel.
    pub fn open<F>(&self, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        let handle = ModalHandle { id, svc: *self };
        self.current.set(Some(DialogEntry {
            id,
            builder: Arc::new(builder),
        }));

        handle
    }

    pub fn close_current(&self) {
        let open_id = self.current.with_untracked(|entry| entry.as_ref().map(|e| e.id));
        if let Some(id) = open_id {
            self.close_deferred(id);
        }
    }

    fn close_deferred(&self, id: u64) {
        let svc = *self;
        spawn_local(async move {
            // Defer to next tick to avoid "closure invoked ... after being dropped"
            // when the dialog is removed synchronously during the originating
            // DOM event dispatch.
            TimeoutFuture::new(0).await;
            svc.current.update(|entry| {
                if entry.as_ref().is_some_and(|e| e.id == id) {
                    *entry = None;
                }
            });
        });
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_modal() -> ModalService {
    use_context::<ModalService>().expect("ModalService not found in context")
}

/// Renders the currently open dialog. Mounted once, inside the site layout.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_modal();

    // Escape closes the open dialog. The host lives as long as the app, so
    // leaking one forgotten closure is fine.
    Effect::new(move |_| {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let closure = Closure::<dyn FnMut(KeyboardEvent)>::new(move |ev: KeyboardEvent| {
            if ev.key() == "Escape" {
                svc.close_current();
            }
        });
        let _ = document
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    });

    view! {
        {move || {
            svc.current.get().map(|entry| {
                let handle = ModalHandle { id: entry.id, svc };
                let content = (entry.builder)(handle.clone());
                let on_close = Callback::new(move |_| handle.close());
                view! { <ModalFrame on_close=on_close>{content}</ModalFrame> }
            })
        }}
    }
}
