use std::time::Duration;

use leptos::prelude::*;

use super::icon::IconSvg;
use crate::{
    content::Icon,
    toast::{Toast, ToastQueue, ToastVariant},
};

/// Queues a toast and schedules its dismissal after `duration`.
pub fn show_toast(
    toasts: RwSignal<ToastQueue>,
    duration: Duration,
    title: &str,
    description: &str,
    variant: ToastVariant,
) {
    let Some(id) = toasts.try_update(|q| q.push(title, description, variant)) else {
        return;
    };
    set_timeout(move || toasts.update(|q| q.dismiss(id)), duration);
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    view! {
        <div class="fixed bottom-0 right-0 z-[100] flex flex-col gap-2 p-4 w-full md:max-w-[420px]">
            <For
                each=move || toasts.with(|q| q.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = match toast.variant {
                        ToastVariant::Default => {
                            "flex justify-between items-start gap-4 p-4 rounded-md border border-border bg-background shadow-lg"
                        }
                        ToastVariant::Destructive => {
                            "flex justify-between items-start gap-4 p-4 rounded-md border border-destructive bg-destructive text-destructive-foreground shadow-lg"
                        }
                    };
                    view! {
                        <div class=class role="status">
                            <div class="grid gap-1">
                                <div class="text-sm font-semibold">{toast.title}</div>
                                <div class="text-sm opacity-90">{toast.description}</div>
                            </div>
                            <button
                                class="opacity-70 hover:opacity-100"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.update(|q| q.dismiss(id))
                            >
                                <IconSvg icon=Icon::Close class="w-4 h-4" />
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
