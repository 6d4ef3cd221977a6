use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::scroll::{reveal_class, RevealLatch, REVEAL_THRESHOLD};

/// Watches `target` and flips to `true` the first time it is at least
/// `REVEAL_THRESHOLD` in view. The observer is stopped when the calling
/// component is cleaned up.
pub fn use_reveal(target: NodeRef<html::Section>) -> Signal<bool> {
    let latch = StoredValue::new(RevealLatch::default());
    let (shown, set_shown) = signal(false);

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let intersecting = entries.iter().any(|e| e.is_intersecting());
            let flipped = latch
                .try_update_value(|l| l.observe(intersecting))
                .unwrap_or(false);
            if flipped {
                log::debug!("section revealed");
                set_shown.try_set(true);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_THRESHOLD]),
    );

    on_cleanup(move || {
        latch.try_update_value(|l| l.release());
        stop();
    });

    shown.into()
}

/// Wrapper carrying the fade-and-rise entrance for a section's content.
#[component]
pub fn Reveal(shown: Signal<bool>, children: Children) -> impl IntoView {
    view! {
        <div class=move || {
            format!("transition-all duration-1000 {}", reveal_class(shown.get()))
        }>{children()}</div>
    }
}

/// Gradient section title with the short divider underneath.
#[component]
pub fn SectionHeading(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="text-4xl md:text-5xl font-bold mb-4 bg-gradient-to-r from-primary to-accent bg-clip-text text-transparent">
                {title}
            </h2>
            {subtitle
                .map(|s| {
                    view! { <p class="text-xl text-foreground max-w-2xl mx-auto">{s}</p> }
                })}
            <div class=if subtitle.is_some() {
                "w-24 h-1 bg-gradient-to-r from-primary to-accent mx-auto rounded-full mt-6"
            } else {
                "w-24 h-1 bg-gradient-to-r from-primary to-accent mx-auto rounded-full"
            } />
        </div>
    }
}
