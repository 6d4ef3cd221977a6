use leptos::prelude::*;

use super::{
    about::About, contact::Contact, hero::Hero, navigation::Navigation, portfolio::Portfolio,
    testimonial::Testimonial,
};

/// The whole site: navigation bar over the sections in reading order.
#[component]
pub fn IndexPage() -> impl IntoView {
    view! {
        <div class="min-h-screen">
            <Navigation />
            <main>
                <Hero />
                <About />
                <Portfolio />
                <Testimonial />
                <Contact />
            </main>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use leptos::reactive::owner::Owner;

    use super::*;
    use crate::content::HERO_LINKS;

    fn render() -> String {
        let owner = Owner::new();
        owner.with(|| view! { <IndexPage /> }.to_html())
    }

    fn hrefs(html: &str) -> Vec<&str> {
        html.split("href=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect()
    }

    #[test]
    fn test_anchor_targets_exist_once() {
        let html = render();
        for id in ["about", "portfolio", "contact"] {
            assert_eq!(
                html.matches(&format!("id=\"{id}\"")).count(),
                1,
                "expected exactly one #{id}"
            );
        }
        // home is virtual and maps to the page top
        assert!(!html.contains("id=\"home\""));
        assert_eq!(html.matches("<nav").count(), 1);
    }

    #[test]
    fn test_sections_render_in_order() {
        let html = render();
        let positions = ["hero", "about", "portfolio", "testimonial", "contact"]
            .map(|name| {
                html.find(&format!("data-section=\"{name}\""))
                    .unwrap_or_else(|| panic!("missing {name} section"))
            });
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn test_hero_icons_link_to_contact_uris() {
        let html = render();
        let start = html.find("data-section=\"hero\"").unwrap();
        let end = html.find("data-section=\"about\"").unwrap();
        let hero = &html[start..end];

        assert_eq!(
            hrefs(hero),
            vec![
                "mailto:devikavarshney0602@gmail.com",
                "tel:7505992112",
                "https://in.linkedin.com/in/devikavarshney",
                "https://www.instagram.com/naam.hai.devika/",
            ]
        );
        for link in HERO_LINKS {
            assert!(hero.contains(&format!("aria-label=\"{}\"", link.label)));
        }
    }

    #[test]
    fn test_sections_start_hidden_and_menu_closed() {
        let html = render();
        assert_eq!(html.matches("opacity-0 translate-y-10").count(), 5);
        assert!(!html.contains("animate-slide-up opacity-100"));
        assert_eq!(html.matches("Get In Touch").count(), 2);
        // top of the page renders the expanded bar
        assert!(html.contains("z-50 transition-all duration-300 py-4\""));
    }

    #[test]
    fn test_project_links_rendered_only_when_present() {
        let html = render();
        assert_eq!(html.matches("View Project").count(), 2);
        assert!(html.contains("https://www.youtube.com/@Beberryquiet/featured"));
        assert!(html.contains("https://wa.me/917505992112"));
    }
}
