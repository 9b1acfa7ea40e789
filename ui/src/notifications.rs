//! Transient user notifications (toasts).

use std::collections::HashMap;
use uuid::Uuid;
use yewdux::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    Error,
    Success,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub toast_type: ToastType,
    pub duration: Option<u32>, // milliseconds, None for no auto-dismiss
}

impl Toast {
    pub fn new(message: String, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            message,
            toast_type,
            duration: Some(5000),
        }
    }

    pub fn error(message: String) -> Self {
        Self::new(message, ToastType::Error)
    }

    pub fn success(message: String) -> Self {
        Self::new(message, ToastType::Success)
    }

    pub fn info(message: String) -> Self {
        Self::new(message, ToastType::Info)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Store)]
pub struct ToastState {
    pub toasts: HashMap<Uuid, Toast>,
}

impl ToastState {
    pub fn add(&mut self, toast: Toast) {
        self.toasts.insert(toast.id, toast);
    }

    pub fn remove(&mut self, id: &Uuid) {
        self.toasts.remove(id);
    }

    pub fn contains(&self, message: &str) -> bool {
        self.toasts.values().any(|t| t.message == message)
    }

    pub fn messages_of(&self, toast_type: ToastType) -> Vec<&str> {
        self.toasts
            .values()
            .filter(|t| t.toast_type == toast_type)
            .map(|t| t.message.as_str())
            .collect()
    }
}

/// Handle the stores report through.
#[derive(Clone)]
pub struct Notifier {
    dispatch: Dispatch<ToastState>,
}

impl Notifier {
    pub fn new(cx: &yewdux::Context) -> Self {
        Self {
            dispatch: Dispatch::new(cx),
        }
    }

    pub fn add(&self, toast: Toast) {
        #[cfg(target_arch = "wasm32")]
        let (toast_id, duration) = (toast.id, toast.duration);

        self.dispatch.reduce_mut(move |state| state.add(toast));

        #[cfg(target_arch = "wasm32")]
        if let Some(duration_ms) = duration {
            let dispatch = self.dispatch.clone();
            yew::platform::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(duration_ms).await;
                dispatch.reduce_mut(move |state| state.remove(&toast_id));
            });
        }
    }

    pub fn error(&self, message: impl Into<String>) {
        self.add(Toast::error(message.into()));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.add(Toast::success(message.into()));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.add(Toast::info(message.into()));
    }

    pub fn remove(&self, id: Uuid) {
        self.dispatch.reduce_mut(move |state| state.remove(&id));
    }}
