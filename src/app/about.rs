use leptos::{html, prelude::*};

use crate::{
    content::{FEATURES, SETS_APART, SKILLS, STORY},
    scroll::Anchor,
};

use super::{
    icons::LineIcon,
    reveal::{use_reveal, Reveal, SectionHeading},
};

#[component]
pub fn About() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let shown = use_reveal(section_ref);

    view! {
        <section
            node_ref=section_ref
            id=Anchor::About.id()
            data-section="about"
            class="py-20 px-6"
        >
            <div class="container mx-auto max-w-6xl">
                <Reveal shown>
                    <SectionHeading title="About Me" />

                    <div class="grid lg:grid-cols-2 gap-12 items-start">
                        <div class="space-y-8">
                            <div class="neuro-elevated rounded-xl p-8">
                                <h3 class="text-2xl font-semibold text-primary mb-6">"My Story"</h3>
                                <div class="space-y-4 text-foreground leading-relaxed">
                                    {STORY.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                                </div>
                            </div>

                            <div class="neuro-elevated rounded-xl p-8 border border-primary/20">
                                <h3 class="text-xl font-semibold text-accent mb-4">
                                    "What Sets Me Apart"
                                </h3>
                                <p class="text-foreground">{SETS_APART}</p>
                            </div>
                        </div>

                        <div class="space-y-8">
                            <div class="neuro-elevated rounded-xl p-8">
                                <h3 class="text-2xl font-semibold text-primary mb-6">
                                    "Skills & Expertise"
                                </h3>
                                <div class="space-y-6">
                                    {SKILLS
                                        .iter()
                                        .map(|group| {
                                            view! {
                                                <div>
                                                    <h4 class="font-medium text-accent mb-3">
                                                        {group.category}
                                                    </h4>
                                                    <div class="flex flex-wrap gap-2">
                                                        {group
                                                            .items
                                                            .iter()
                                                            .map(|skill| {
                                                                view! {
                                                                    <span class="neuro-button rounded-full text-sm py-1 px-3">
                                                                        {*skill}
                                                                    </span>
                                                                }
                                                            })
                                                            .collect_view()}
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>

                            <div class="space-y-4">
                                {FEATURES
                                    .iter()
                                    .enumerate()
                                    .map(|(i, feature)| {
                                        view! {
                                            <div
                                                class="neuro-elevated rounded-xl p-6 hover:glow-effect transition-all duration-300"
                                                style=format!("animation-delay: {:.1}s", i as f32 * 0.1)
                                            >
                                                <div class="flex items-start gap-4">
                                                    <div class="neuro-button p-3 rounded-xl">
                                                        <LineIcon icon=feature.icon class="w-6 h-6 text-primary" />
                                                    </div>
                                                    <div>
                                                        <h4 class="font-semibold text-foreground mb-2">
                                                            {feature.title}
                                                        </h4>
                                                        <p class="text-sm text-muted-foreground">
                                                            {feature.description}
                                                        </p>
                                                    </div>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
