use leptos::{html, prelude::*};

use crate::{
    content::{Icon, CONTACT_METHODS, EMAIL_HREF, FAQS, FOOTER, PITCH, WHATSAPP_HREF},
    scroll::Anchor,
};

use super::{
    icons::LineIcon,
    reveal::{use_reveal, Reveal, SectionHeading},
};

#[component]
pub fn Contact() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let shown = use_reveal(section_ref);

    view! {
        <section
            node_ref=section_ref
            id=Anchor::Contact.id()
            data-section="contact"
            class="py-20 px-6 bg-background-secondary/30"
        >
            <div class="container mx-auto max-w-6xl">
                <Reveal shown>
                    <SectionHeading
                        title="Let's Collaborate"
                        subtitle="Ready to bring your vision to life? Get in touch and let's create something amazing together."
                    />

                    <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8 mb-16">
                        {CONTACT_METHODS
                            .iter()
                            .enumerate()
                            .map(|(i, method)| {
                                view! {
                                    <div
                                        class="neuro-elevated rounded-xl p-6 text-center hover:glow-effect transition-all duration-300 group"
                                        style=format!("animation-delay: {:.1}s", i as f32 * 0.1)
                                    >
                                        <div class="neuro-button w-16 h-16 rounded-2xl mx-auto mb-4 flex items-center justify-center group-hover:animate-pulse-glow">
                                            <LineIcon icon=method.icon class="w-8 h-8 text-primary" />
                                        </div>
                                        <h3 class="font-semibold text-foreground mb-2">{method.title}</h3>
                                        <p class="text-sm text-muted-foreground mb-4">
                                            {method.description}
                                        </p>
                                        <a
                                            href=method.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="neuro-button w-full py-2 rounded-md text-sm inline-block"
                                        >
                                            {method.value}
                                        </a>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="grid lg:grid-cols-2 gap-12">
                        <div class="neuro-elevated rounded-xl p-8">
                            <div class="text-center">
                                <div class="neuro-button w-20 h-20 rounded-2xl mx-auto mb-6 flex items-center justify-center animate-pulse-glow">
                                    <LineIcon icon=Icon::MessageCircle class="w-10 h-10 text-primary" />
                                </div>
                                <h3 class="text-2xl font-semibold text-primary mb-4">
                                    "Start Your Project"
                                </h3>
                                <p class="text-muted-foreground mb-6">{PITCH}</p>
                                <div class="space-y-4">
                                    <a
                                        href=EMAIL_HREF
                                        class="neuro-button w-full py-3 rounded-md hover:glow-effect flex items-center justify-center"
                                    >
                                        <LineIcon icon=Icon::Mail class="w-5 h-5 mr-2" />
                                        "Send Email"
                                    </a>
                                    <a
                                        href=WHATSAPP_HREF
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="neuro-button w-full py-3 rounded-md border border-border flex items-center justify-center"
                                    >
                                        <LineIcon icon=Icon::Phone class="w-5 h-5 mr-2" />
                                        "WhatsApp Chat"
                                    </a>
                                </div>
                            </div>
                        </div>

                        <div class="neuro-elevated rounded-xl p-8">
                            <h3 class="text-2xl font-semibold text-primary mb-6">
                                "Frequently Asked Questions"
                            </h3>
                            <div class="space-y-6">
                                {FAQS
                                    .iter()
                                    .map(|faq| {
                                        view! {
                                            <div class="neuro-inset rounded-xl p-4">
                                                <h4 class="font-semibold text-accent mb-2">{faq.question}</h4>
                                                <p class="text-sm text-muted-foreground">{faq.answer}</p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>

                    <footer class="text-center mt-16 pt-8 border-t border-border">
                        <p class="text-muted-foreground">{FOOTER}</p>
                    </footer>
                </Reveal>
            </div>
        </section>
    }
}
