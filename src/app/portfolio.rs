use leptos::{html, prelude::*};

use crate::{
    content::{Icon, Project, Service, PITCH, PROJECTS, SERVICES},
    scroll::Anchor,
};

use super::{
    icons::LineIcon,
    navigation::scroll_to_section,
    reveal::{use_reveal, Reveal, SectionHeading},
};

#[component]
pub fn Portfolio() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let shown = use_reveal(section_ref);

    view! {
        <section
            node_ref=section_ref
            id=Anchor::Portfolio.id()
            data-section="portfolio"
            class="py-20 px-6 bg-background-secondary/30"
        >
            <div class="container mx-auto max-w-6xl">
                <Reveal shown>
                    <SectionHeading
                        title="My Work"
                        subtitle="A showcase of recent projects demonstrating storytelling excellence and technical expertise"
                    />

                    <div class="mb-16">
                        <h3 class="text-2xl font-semibold text-center mb-8 text-primary">
                            "Featured Projects"
                        </h3>
                        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                            {PROJECTS
                                .iter()
                                .enumerate()
                                .map(|(i, project)| view! { <ProjectCard project=*project index=i /> })
                                .collect_view()}
                        </div>
                    </div>

                    <div>
                        <h3 class="text-2xl font-semibold text-center mb-8 text-primary">
                            "Services Offered"
                        </h3>
                        <div class="grid md:grid-cols-3 gap-8">
                            {SERVICES
                                .iter()
                                .enumerate()
                                .map(|(i, service)| view! { <ServiceCard service=*service index=i /> })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="text-center mt-16">
                        <div class="neuro-elevated rounded-xl p-8 max-w-2xl mx-auto">
                            <h3 class="text-2xl font-semibold text-primary mb-4">
                                "Ready to Collaborate?"
                            </h3>
                            <p class="text-muted-foreground mb-6">{PITCH}</p>
                            <button
                                class="neuro-button px-8 py-3 rounded-md hover:glow-effect"
                                on:click=move |_| scroll_to_section(Anchor::Contact)
                            >
                                "Start Your Project"
                            </button>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, index: usize) -> impl IntoView {
    view! {
        <div
            class="neuro-elevated rounded-xl p-6 hover:glow-effect transition-all duration-300 group"
            style=format!("animation-delay: {:.1}s", index as f32 * 0.1)
        >
            <div class="space-y-4">
                <div class="flex items-start justify-between">
                    <span class="neuro-button rounded-full text-xs py-1 px-3">
                        {project.category}
                    </span>
                    <div class="neuro-button p-2 rounded-lg group-hover:animate-pulse-glow">
                        <LineIcon icon=Icon::Play class="w-4 h-4 text-primary" />
                    </div>
                </div>

                <div>
                    <h4 class="font-semibold text-foreground mb-2">{project.title}</h4>
                    <p class="text-sm text-foreground mb-3">{project.description}</p>
                </div>

                <div class="space-y-2">
                    <div class="flex justify-between text-sm">
                        <span class="text-accent">"Client:"</span>
                        <span class="text-foreground font-medium">{project.client}</span>
                    </div>
                    <div class="flex justify-between text-sm">
                        <span class="text-accent">"Type:"</span>
                        <span class="text-foreground">{project.kind}</span>
                    </div>
                    <div class="flex justify-between text-sm">
                        <span class="text-accent">"Result:"</span>
                        <span class="text-primary font-medium">{project.metrics}</span>
                    </div>
                </div>

                {project
                    .link
                    .map(|href| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="neuro-button w-full mt-4 py-2 rounded-md text-sm flex items-center justify-center"
                            >
                                <LineIcon icon=Icon::ExternalLink class="w-4 h-4 mr-2" />
                                "View Project"
                            </a>
                        }
                    })}
            </div>
        </div>
    }
}

#[component]
fn ServiceCard(service: Service, index: usize) -> impl IntoView {
    view! {
        <div
            class="neuro-elevated rounded-xl p-8 text-center hover:glow-effect transition-all duration-300"
            style=format!("animation-delay: {:.1}s", index as f32 * 0.2)
        >
            <div class="neuro-button w-16 h-16 rounded-2xl mx-auto mb-6 flex items-center justify-center">
                <LineIcon icon=Icon::Eye class="w-8 h-8 text-primary" />
            </div>
            <h4 class="text-xl font-semibold text-foreground mb-4">{service.title}</h4>
            <p class="text-muted-foreground mb-6">{service.description}</p>
            <ul class="space-y-2">
                {service
                    .features
                    .iter()
                    .map(|feature| view! { <li class="text-sm text-accent">"• " {*feature}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}
