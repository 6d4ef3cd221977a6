//! Literal page content. Everything here is `'static` and never mutated.

pub const EMAIL_HREF: &str = "mailto:devikavarshney0602@gmail.com";
pub const PHONE_HREF: &str = "tel:7505992112";
pub const WHATSAPP_HREF: &str = "https://wa.me/917505992112";
pub const LINKEDIN_HREF: &str = "https://in.linkedin.com/in/devikavarshney";
pub const INSTAGRAM_HREF: &str = "https://www.instagram.com/naam.hai.devika/";

pub const PROFILE_IMAGE: &str = "/devika-profile.jpg";
pub const HERO_BACKGROUND: &str = "/hero-background.jpg";

pub const NAME: &str = "Devika Varshney";
pub const ROLE: &str = "Video Editor";

/// Line icons used across the page. Rendered as inline SVG by the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Mail,
    Phone,
    Linkedin,
    Instagram,
    MessageCircle,
    Clapperboard,
    Palette,
    Wand,
    Play,
    Eye,
    ExternalLink,
    Quote,
    Star,
    Menu,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroLink {
    pub icon: Icon,
    pub href: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactMethod {
    pub icon: Icon,
    pub title: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub client: &'static str,
    pub link: Option<&'static str>,
    pub kind: &'static str,
    pub metrics: &'static str,
    pub category: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const HERO_LINKS: [HeroLink; 4] = [
    HeroLink {
        icon: Icon::Mail,
        href: EMAIL_HREF,
        label: "Email",
    },
    HeroLink {
        icon: Icon::Phone,
        href: PHONE_HREF,
        label: "Phone",
    },
    HeroLink {
        icon: Icon::Linkedin,
        href: LINKEDIN_HREF,
        label: "LinkedIn",
    },
    HeroLink {
        icon: Icon::Instagram,
        href: INSTAGRAM_HREF,
        label: "Instagram",
    },
];

pub const STORY: [&str; 3] = [
    "I've always been deeply captivated by the magic of films — the stories they tell, the emotions they evoke, and the worlds they create. That love turned into a quiet dream to become a part of that storytelling process. Editing became my way in.",
    "For me, video editing is not just about cutting clips or syncing music — it's about feeling every frame, understanding the emotion behind every scene, and stitching it all together in a way that moves people.",
    "I strive to add a touch of heart to every project I work on, creating narratives that hook the audience and stay with them long after the video ends.",
];

pub const SETS_APART: &str = "My ability to blend creativity with technical precision, ensuring each video not only meets but exceeds client expectations.";

pub const SKILLS: [SkillGroup; 2] = [
    SkillGroup {
        category: "Editing Software",
        items: &["DaVinci Resolve", "Canva", "VN"],
    },
    SkillGroup {
        category: "Specializations",
        items: &[
            "Narrative-driven editing",
            "Color grading",
            "Motion graphics",
            "Sound design",
        ],
    },
];

pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: Icon::Clapperboard,
        title: "Storytelling Excellence",
        description: "Every frame tells a story. I focus on the emotion and rhythm that makes viewers connect.",
    },
    Feature {
        icon: Icon::Palette,
        title: "Visual Artistry",
        description: "From color grading to motion graphics, I bring technical precision to creative vision.",
    },
    Feature {
        icon: Icon::Wand,
        title: "Technical Mastery",
        description: "Proficient in industry-standard tools with a focus on efficiency and quality.",
    },
];

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Funny Reels - Trippin with Trups",
        description: "Edited reels for the popular 'Trippin with Trups' series, focusing on comedic timing and engaging visual storytelling.",
        client: "BeBerryQuiet",
        link: Some("https://www.youtube.com/@Beberryquiet/featured"),
        kind: "YouTube Series",
        metrics: "Consistent engagement",
        category: "Comedy",
    },
    Project {
        title: "Viral Instagram Reel",
        description: "Created a compelling reel for Chulha Chauki da Dhabha that achieved exceptional viral success.",
        client: "Chulha Chauki da Dhabha",
        link: Some("https://www.instagram.com/reel/DB0k-VuvAa3/?igsh=MWg3dDIyNHdkczFzbw=="),
        kind: "Social Media",
        metrics: "5.5M Views",
        category: "Food & Lifestyle",
    },
    Project {
        title: "Client Projects",
        description: "Various editing projects for Morethankannadagottila, showcasing versatility in different content styles.",
        client: "Morethankannadagottila",
        link: None,
        kind: "Mixed Content",
        metrics: "Ongoing collaboration",
        category: "Branded Content",
    },
];

pub const SERVICES: [Service; 3] = [
    Service {
        title: "Video Editing",
        description: "Professional video editing with attention to pacing, storytelling, and visual flow.",
        features: &[
            "Narrative structure",
            "Pacing optimization",
            "Transition effects",
            "Audio sync",
        ],
    },
    Service {
        title: "Color Grading",
        description: "Enhance your footage with professional color correction and cinematic grading.",
        features: &[
            "Color correction",
            "Cinematic looks",
            "Mood enhancement",
            "Consistency",
        ],
    },
    Service {
        title: "Motion Graphics",
        description: "Add dynamic visual elements to elevate your content and engage viewers.",
        features: &[
            "Animated titles",
            "Lower thirds",
            "Transitions",
            "Visual effects",
        ],
    },
];

pub const PITCH: &str = "Whether it's a promotional video, short film, or documentary, I ensure high-quality results that captivate and engage your audience.";

pub const TESTIMONIAL: Quote = Quote {
    text: "Devika has speedy delivery, she delivers as per the script and notes provided. She also asks questions that help elevate the collaboration",
    author: "Trupti S",
    role: "Content Creator",
};

pub const CONTACT_METHODS: [ContactMethod; 4] = [
    ContactMethod {
        icon: Icon::Mail,
        title: "Email",
        value: "devikavarshney0602@gmail.com",
        href: EMAIL_HREF,
        description: "For project inquiries and collaborations",
    },
    ContactMethod {
        icon: Icon::Phone,
        title: "WhatsApp",
        value: "7505992112",
        href: WHATSAPP_HREF,
        description: "Quick discussions and urgent queries",
    },
    ContactMethod {
        icon: Icon::Linkedin,
        title: "LinkedIn",
        value: "Connect professionally",
        href: LINKEDIN_HREF,
        description: "Professional networking and portfolio",
    },
    ContactMethod {
        icon: Icon::Instagram,
        title: "Instagram",
        value: "@naam.hai.devika",
        href: INSTAGRAM_HREF,
        description: "Behind the scenes and creative updates",
    },
];

pub const FAQS: [Faq; 3] = [
    Faq {
        question: "What are your rates?",
        answer: "My rates vary based on the project complexity, duration, and requirements. Contact me for a detailed quote tailored to your specific needs.",
    },
    Faq {
        question: "What's your typical turnaround time?",
        answer: "I pride myself on speedy delivery while maintaining quality. Turnaround time depends on project scope, but I always communicate clear timelines upfront.",
    },
    Faq {
        question: "Do you work with international clients?",
        answer: "Absolutely! I work with clients globally and am comfortable with different time zones and communication preferences.",
    },
];

pub const FOOTER: &str =
    "© 2024 Devika Varshney. Crafting visual stories with passion and precision.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_links_are_the_literal_contact_uris() {
        let hrefs = HERO_LINKS.iter().map(|l| l.href).collect::<Vec<_>>();
        assert_eq!(
            hrefs,
            vec![
                "mailto:devikavarshney0602@gmail.com",
                "tel:7505992112",
                "https://in.linkedin.com/in/devikavarshney",
                "https://www.instagram.com/naam.hai.devika/",
            ]
        );
    }

    #[test]
    fn test_contact_methods_use_whatsapp_instead_of_tel() {
        assert_eq!(CONTACT_METHODS[1].title, "WhatsApp");
        assert_eq!(CONTACT_METHODS[1].href, "https://wa.me/917505992112");
        assert!(CONTACT_METHODS.iter().all(|m| m.href != PHONE_HREF));
    }

    #[test]
    fn test_only_last_project_has_no_link() {
        let linked = PROJECTS.iter().filter(|p| p.link.is_some()).count();
        assert_eq!(linked, 2);
        assert_eq!(PROJECTS[2].link, None);
    }

    #[test]
    fn test_lists_keep_authored_order() {
        assert_eq!(SKILLS[0].items, &["DaVinci Resolve", "Canva", "VN"]);
        assert_eq!(SERVICES[1].features[0], "Color correction");
        assert_eq!(FAQS[0].question, "What are your rates?");
        assert_eq!(FEATURES.map(|f| f.icon), [Icon::Clapperboard, Icon::Palette, Icon::Wand]);
    }
}
