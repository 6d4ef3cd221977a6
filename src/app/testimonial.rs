use leptos::{html, prelude::*};

use crate::content::{Icon, TESTIMONIAL};

use super::{
    icons::LineIcon,
    reveal::{use_reveal, Reveal, SectionHeading},
};

#[component]
pub fn Testimonial() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let shown = use_reveal(section_ref);

    view! {
        <section node_ref=section_ref data-section="testimonial" class="py-20 px-6">
            <div class="container mx-auto max-w-4xl">
                <Reveal shown>
                    <SectionHeading title="What Clients Say" />

                    <div class="neuro-elevated rounded-xl p-12 text-center relative overflow-hidden">
                        <div class="absolute top-8 left-8 opacity-10">
                            <LineIcon icon=Icon::Quote class="w-16 h-16 text-primary" />
                        </div>
                        <div class="absolute bottom-8 right-8 opacity-10 rotate-180">
                            <LineIcon icon=Icon::Quote class="w-16 h-16 text-primary" />
                        </div>

                        <div class="flex justify-center gap-1 mb-8">
                            {(0..5)
                                .map(|i| {
                                    view! {
                                        <span
                                            class="text-primary animate-pulse-glow"
                                            style=format!("animation-delay: {:.1}s", i as f32 * 0.1)
                                        >
                                            <LineIcon icon=Icon::Star class="w-6 h-6 fill-current" />
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <blockquote class="text-2xl md:text-3xl font-medium text-foreground mb-8 leading-relaxed relative z-10">
                            "\u{201c}" {TESTIMONIAL.text} "\u{201d}"
                        </blockquote>

                        <div class="neuro-inset rounded-2xl p-6 max-w-md mx-auto">
                            <div class="text-lg font-semibold text-primary mb-1">
                                {TESTIMONIAL.author}
                            </div>
                            <div class="text-muted-foreground">{TESTIMONIAL.role}</div>
                        </div>

                        <div class="absolute top-1/2 left-4 w-2 h-2 bg-primary rounded-full animate-float opacity-60" />
                        <div
                            class="absolute top-1/3 right-6 w-3 h-3 bg-accent rounded-full animate-float opacity-40"
                            style="animation-delay: 1s"
                        />
                        <div
                            class="absolute bottom-1/3 left-6 w-2 h-2 bg-primary-glow rounded-full animate-float opacity-50"
                            style="animation-delay: 2s"
                        />
                    </div>

                    <div class="text-center mt-12">
                        <p class="text-muted-foreground text-lg">
                            "Join satisfied clients who trust me to bring their vision to life"
                        </p>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
