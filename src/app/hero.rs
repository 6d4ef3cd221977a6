use leptos::{html, prelude::*};

use crate::{
    content::{HERO_BACKGROUND, HERO_LINKS, NAME, PROFILE_IMAGE, ROLE},
    scroll::Anchor,
};

use super::{
    icons::LineIcon,
    navigation::scroll_to_section,
    reveal::{use_reveal, Reveal},
};

#[component]
pub fn Hero() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let shown = use_reveal(section_ref);

    view! {
        <section
            node_ref=section_ref
            data-section="hero"
            class="relative min-h-screen flex items-center justify-center overflow-hidden pt-24"
        >
            <div
                class="absolute inset-0 bg-cover bg-center bg-no-repeat opacity-10"
                style=format!("background-image: url({HERO_BACKGROUND})")
            />
            <div class="absolute inset-0 bg-gradient-to-br from-background/80 to-background-secondary/80" />

            <div class="absolute top-20 left-10 w-20 h-20 neuro-elevated rounded-full animate-float opacity-60" />
            <div
                class="absolute top-40 right-20 w-16 h-16 neuro-elevated rounded-full animate-float opacity-40"
                style="animation-delay: 1s"
            />
            <div
                class="absolute bottom-40 left-20 w-24 h-24 neuro-elevated rounded-full animate-float opacity-50"
                style="animation-delay: 2s"
            />

            <div class="relative z-10 container mx-auto px-6 pt-8">
                <Reveal shown>
                    <div class="text-center">
                        <div class="mb-8 flex justify-center">
                            <div class="neuro-elevated rounded-full p-2 animate-pulse-glow">
                                <img
                                    src=PROFILE_IMAGE
                                    alt=NAME
                                    class="w-40 h-40 rounded-full object-cover"
                                />
                            </div>
                        </div>

                        <h1 class="text-5xl md:text-7xl font-bold mb-4 bg-gradient-to-r from-primary to-accent bg-clip-text text-transparent">
                            {NAME}
                        </h1>

                        <div class="neuro-inset rounded-2xl p-6 mb-8 max-w-2xl mx-auto bg-card/80">
                            <h2 class="text-2xl md:text-3xl font-semibold text-primary mb-4">
                                {ROLE}
                            </h2>
                            <p class="text-xl text-accent mb-4 font-medium">
                                "Crafting Visual Stories with Precision & Passion"
                            </p>
                            <p class="text-lg text-foreground">
                                "A dedicated video editor with a knack for transforming raw footage into compelling stories. Explore my work and see how I can bring your vision to life."
                            </p>
                        </div>

                        <div class="flex flex-col md:flex-row gap-4 justify-center items-center mb-8">
                            <button
                                class="neuro-button px-8 py-6 text-lg rounded-md hover:glow-effect"
                                on:click=move |_| scroll_to_section(Anchor::Portfolio)
                            >
                                "View My Work"
                            </button>
                            <button
                                class="neuro-button px-8 py-6 text-lg rounded-md border border-border"
                                on:click=move |_| scroll_to_section(Anchor::Contact)
                            >
                                "Get In Touch"
                            </button>
                        </div>

                        <div class="flex justify-center gap-6">
                            {HERO_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="neuro-button p-4 rounded-full hover:glow-effect transition-all duration-300"
                                            aria-label=link.label
                                        >
                                            <LineIcon icon=link.icon class="w-6 h-6 text-primary" />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
