use leptos::{ev::SubmitEvent, prelude::*};

use super::components::{ContactCard, Section, CARD};
use super::reveal::{Entrance, RevealOnScroll};
use crate::content::Portfolio;
use crate::state::{ContactDraft, ContactField};

const INPUT: &str = "w-full px-4 py-3 rounded-lg border border-gray-300 dark:border-gray-700 bg-white dark:bg-gray-900 focus:outline-none focus:ring-2 focus:ring-teal-500 transition-all";

#[component]
pub fn Contact(portfolio: &'static Portfolio) -> impl IntoView {
    view! {
        <Section id="contact" title="Get In Touch" subtitle="Contact Me">
            <div class="grid md:grid-cols-2 gap-12">
                <RevealOnScroll from=Entrance::Left class="relative">
                    <h3 class="text-2xl font-bold mb-4">"Let's Talk"</h3>
                    <p class="text-gray-600 dark:text-gray-400 mb-6 leading-relaxed">
                        {portfolio.profile.contact_intro.clone()}
                    </p>
                    <div class="space-y-6">
                        {portfolio
                            .contact
                            .iter()
                            .cloned()
                            .map(|channel| view! { <ContactCard channel /> })
                            .collect_view()}
                    </div>
                    <div class="absolute -bottom-20 -left-20 w-40 h-40 bg-gradient-to-br from-teal-500/10 to-purple-500/10 rounded-full blur-3xl" />
                </RevealOnScroll>
                <RevealOnScroll from=Entrance::Right class="relative">
                    <ContactForm />
                    <div class="absolute -top-10 -right-10 w-40 h-40 bg-gradient-to-br from-purple-500/10 to-teal-500/10 rounded-full blur-3xl" />
                </RevealOnScroll>
            </div>
        </Section>
    }
}

/// Message form without a delivery backend. Submission is swallowed; the
/// draft stays in place.
#[component]
fn ContactForm() -> impl IntoView {
    let draft = RwSignal::new(ContactDraft::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let complete = draft.with_untracked(|d| d.is_complete());
        log::info!("contact form submitted (complete: {complete}); no transport configured");
    };

    view! {
        <div class=format!("{CARD} rounded-2xl shadow-xl p-8")>
            <h3 class="text-2xl font-bold mb-6">"Send a Message"</h3>
            <form class="space-y-5" on:submit=on_submit>
                <div class="grid sm:grid-cols-2 gap-5">
                    <Field draft field=ContactField::Name id="name" label="Name" kind="text" placeholder="Your name" />
                    <Field draft field=ContactField::Email id="email" label="Email" kind="email" placeholder="Your email" />
                </div>
                <Field draft field=ContactField::Subject id="subject" label="Subject" kind="text" placeholder="Subject" />
                <div>
                    <label for="message" class="block text-sm font-medium mb-1">
                        "Message"
                    </label>
                    <textarea
                        id="message"
                        rows="4"
                        class=format!("{INPUT} resize-none")
                        placeholder="Your message"
                        prop:value=move || draft.with(|d| d.message.clone())
                        on:input=move |ev| {
                            draft.update(|d| d.set(ContactField::Message, event_target_value(&ev)))
                        }
                    />
                </div>
                <button
                    type="submit"
                    class="w-full px-6 py-3 bg-gradient-to-r from-teal-500 to-purple-600 hover:from-teal-600 hover:to-purple-700 text-white rounded-lg font-medium transition-all shadow-lg shadow-purple-500/20 hover:scale-[1.02] active:scale-[0.98]"
                >
                    "Send Message"
                </button>
            </form>
        </div>
    }
}

#[component]
fn Field(
    draft: RwSignal<ContactDraft>,
    field: ContactField,
    id: &'static str,
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="block text-sm font-medium mb-1">
                {label}
            </label>
            <input
                type=kind
                id=id
                class=INPUT
                placeholder=placeholder
                prop:value=move || draft.with(|d| d.get(field).to_string())
                on:input=move |ev| draft.update(|d| d.set(field, event_target_value(&ev)))
            />
        </div>
    }
}
