use leptos::prelude::*;
use leptos_use::use_window_scroll;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::{
    content::Icon,
    scroll::{Anchor, MobileMenu, NavStyle, ScrollAction},
};

use super::icons::LineIcon;

/// Smooth-scrolls to `target`. A missing `home` element means the top of the
/// page; any other missing section is skipped.
pub fn scroll_to_section(target: Anchor) {
    let el = document().get_element_by_id(target.id());
    match (ScrollAction::plan(target, el.is_some()), el) {
        (ScrollAction::IntoView, Some(el)) => {
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
        }
        (ScrollAction::Top, _) => {
            let opts = ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(ScrollBehavior::Smooth);
            window().scroll_to_with_scroll_to_options(&opts);
        }
        _ => log::debug!("no section for {}", target.href()),
    }
}

#[component]
pub fn Navigation() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let style = Memo::new(move |_| NavStyle::from_offset(scroll_y.get()));
    let (menu, set_menu) = signal(MobileMenu::default());
    let menu_open = move || menu.with(|m| m.is_open());

    let go = move |target: Anchor| set_menu.update(|m| m.navigate(target, scroll_to_section));

    let nav_buttons = move |class: &'static str| {
        Anchor::ALL
            .into_iter()
            .map(|anchor| {
                view! {
                    <button class=class on:click=move |_| go(anchor)>
                        {anchor.label()}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <nav class=move || {
            format!(
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 {}",
                style.get().outer_class(),
            )
        }>
            <div class="container mx-auto px-6">
                <div class=move || {
                    format!(
                        "neuro-elevated rounded-2xl px-6 py-4 transition-all duration-300 {}",
                        style.get().bar_class(),
                    )
                }>
                    <div class="flex items-center justify-between">
                        <button
                            class="text-2xl font-bold bg-gradient-to-r from-primary to-accent bg-clip-text text-transparent hover:scale-105 transition-transform duration-200"
                            on:click=move |_| go(Anchor::Home)
                        >
                            "DV"
                        </button>
                        <div class="hidden md:flex items-center gap-8">
                            {nav_buttons(
                                "text-muted-foreground hover:text-primary transition-colors duration-200 font-medium",
                            )}
                        </div>
                        <div class="hidden md:block">
                            <button
                                class="neuro-button hover:glow-effect px-4 py-2 rounded-md font-medium"
                                on:click=move |_| go(Anchor::Contact)
                            >
                                "Get In Touch"
                            </button>
                        </div>
                        <button
                            class="md:hidden neuro-button p-2 rounded-md"
                            aria-label="Toggle menu"
                            on:click=move |_| {
                                set_menu.update(|m| m.toggle());
                                log::debug!("mobile menu open: {}", menu.get_untracked().is_open());
                            }
                        >
                            {move || {
                                let icon = if menu_open() { Icon::Close } else { Icon::Menu };
                                view! { <LineIcon icon class="w-5 h-5" /> }
                            }}
                        </button>
                    </div>
                    <Show when=menu_open>
                        <div class="md:hidden mt-4 pt-4 border-t border-border">
                            <div class="flex flex-col gap-4">
                                {nav_buttons(
                                    "text-left text-muted-foreground hover:text-primary transition-colors duration-200 font-medium py-2",
                                )}
                                <button
                                    class="neuro-button mt-2 w-full px-4 py-2 rounded-md font-medium"
                                    on:click=move |_| go(Anchor::Contact)
                                >
                                    "Get In Touch"
                                </button>
                            </div>
                        </div>
                    </Show>
                </div>
            </div>
        </nav>
    }
}
