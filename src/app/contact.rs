use chrono::Utc;
use leptos::{ev::SubmitEvent, html, prelude::*};

#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use crate::contact::{ContactSubmitter, ReqwestTransport};
use crate::{
    config::SiteConfig,
    contact::{ContactForm, ContactMessage},
    content::{Icon, SOCIAL_LINKS},
    toast::ToastQueue,
};

use super::icon::IconSvg;
#[cfg(feature = "hydrate")]
use super::toaster::show_toast;

const FIELD_CLASS: &str = "w-full px-4 py-2 rounded-md border bg-background/50 border-border/50 focus:outline-none focus:border-primary";

#[component]
pub fn ContactSection() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let form_ref = NodeRef::<html::Form>::new();
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (submitting, set_submitting) = signal(false);

    #[cfg(feature = "hydrate")]
    let submitter = StoredValue::new_local(Rc::new(ContactSubmitter::new(
        ReqwestTransport::default(),
        config.webhook_url,
        config.status_policy,
    )));
    #[cfg(feature = "hydrate")]
    let toast_duration = config.toast_duration;

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let (Some(form), Some(name), Some(email), Some(message)) = (
            form_ref.get_untracked(),
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            message_ref.get_untracked(),
        ) else {
            return;
        };
        let message = ContactMessage::new(
            ContactForm {
                name: name.value(),
                email: email.value(),
                message: message.value(),
            },
            Utc::now(),
        );

        #[cfg(feature = "hydrate")]
        {
            let submitter = submitter.get_value();
            set_submitting.set(true);
            leptos::task::spawn_local(async move {
                let outcome = submitter.submit(&message).await;
                if outcome.clears_form() {
                    form.reset();
                }
                if let Some((title, description, variant)) = outcome.notification() {
                    show_toast(toasts, toast_duration, title, description, variant);
                }
                set_submitting.set(submitter.is_pending());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (form, message, toasts, set_submitting);
    };

    view! {
        <section id="contact" class="py-20 px-4 bg-secondary/20">
            <div class="max-w-4xl mx-auto">
                <h2 class="text-4xl font-bold text-center mb-16 text-gradient animate-fade-in">
                    "Let's Connect"
                </h2>
                <div class="grid lg:grid-cols-2 gap-12">
                    <div class="card card-gradient shadow-elegant border-border/20 animate-slide-up p-8">
                        <h3 class="text-xl font-semibold mb-6">"Send me a message"</h3>
                        <form node_ref=form_ref class="space-y-6" on:submit=on_submit>
                            <input
                                node_ref=name_ref
                                name="name"
                                placeholder="Your Name"
                                required
                                class=FIELD_CLASS
                            />
                            <input
                                node_ref=email_ref
                                name="email"
                                type="email"
                                placeholder="Your Email"
                                required
                                class=FIELD_CLASS
                            />
                            <textarea
                                node_ref=message_ref
                                name="message"
                                placeholder="Your Message"
                                rows=4
                                required
                                class=format!("{FIELD_CLASS} resize-none")
                            ></textarea>
                            <button
                                type="submit"
                                class="btn-primary w-full shadow-glow"
                                disabled=move || submitting.get()
                            >
                                {move || if submitting.get() { "Sending..." } else { "Send Message" }}
                            </button>
                        </form>
                    </div>
                    <div class="space-y-8 animate-slide-up" style="animation-delay: 0.2s">
                        <div>
                            <h3 class="text-xl font-semibold mb-6">"Get in touch"</h3>
                            <div class="space-y-4">
                                <a
                                    href=config.mailto()
                                    class="flex items-center gap-3 text-muted-foreground hover:text-primary transition-smooth"
                                >
                                    <IconSvg icon=Icon::Mail class="w-5 h-5" />
                                    {config.email}
                                </a>
                                <div class="flex items-center gap-3 text-muted-foreground">
                                    <IconSvg icon=Icon::MapPin class="w-5 h-5" />
                                    {config.location}
                                </div>
                            </div>
                        </div>
                        <div>
                            <h3 class="text-xl font-semibold mb-6">"Follow me"</h3>
                            <div class="flex gap-4">
                                {SOCIAL_LINKS
                                    .iter()
                                    .map(|link| {
                                        view! {
                                            <a
                                                href=link.href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                aria-label=link.label
                                                class="p-3 bg-primary/10 rounded-full hover:bg-primary hover:text-primary-foreground transition-smooth shadow-glow"
                                            >
                                                <IconSvg icon=link.icon class="w-6 h-6" />
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                        <div class="card card-gradient shadow-elegant border-border/20 p-6 text-center">
                            <p class="text-muted-foreground mb-4">
                                "\"Let's build something amazing together!\""
                            </p>
                            <div class="text-sm text-primary font-medium">
                                "Available for freelance projects"
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
