//! Static page content: navigation anchors, skills, projects and contact links.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Zap,
    Code,
    Database,
    MapPin,
    Mail,
    Github,
    Linkedin,
    ExternalLink,
    ChevronDown,
    Menu,
    Close,
}

impl Icon {
    pub const ALL: &'static [Icon] = &[
        Self::Zap,
        Self::Code,
        Self::Database,
        Self::MapPin,
        Self::Mail,
        Self::Github,
        Self::Linkedin,
        Self::ExternalLink,
        Self::ChevronDown,
        Self::Menu,
        Self::Close,
    ];

    /// Stroke path data for a 24x24 viewBox.
    pub fn path(self) -> &'static str {
        match self {
            Self::Zap => "M13 2 3 14h9l-1 8 10-12h-9l1-8z",
            Self::Code => "M16 18l6-6-6-6 M8 6l-6 6 6 6",
            Self::Database => {
                "M3 5a9 3 0 1 0 18 0a9 3 0 1 0-18 0 M3 5v14a9 3 0 0 0 18 0V5 M3 12a9 3 0 0 0 18 0"
            }
            Self::MapPin => {
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z M9 10a3 3 0 1 0 6 0a3 3 0 1 0-6 0"
            }
            Self::Mail => {
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z m18 3-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"
            }
            Self::Github => {
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4 M9 18c-4.51 2-5-2-7-2"
            }
            Self::Linkedin => {
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z M2 9h4v12H2z M2 4a2 2 0 1 0 4 0a2 2 0 1 0-4 0"
            }
            Self::ExternalLink => {
                "M15 3h6v6 M10 14 21 3 M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"
            }
            Self::ChevronDown => "M6 9l6 6 6-6",
            Self::Menu => "M4 6h16 M4 12h16 M4 18h16",
            Self::Close => "M18 6 6 18 M6 6l12 12",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

/// Page sections in document order. Ids double as DOM anchors.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        id: "home",
        label: "Home",
    },
    NavItem {
        id: "about",
        label: "About",
    },
    NavItem {
        id: "skills",
        label: "Skills",
    },
    NavItem {
        id: "projects",
        label: "Projects",
    },
    NavItem {
        id: "contact",
        label: "Contact",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SKILLS: &[Skill] = &[
    Skill {
        icon: Icon::Zap,
        title: "Prompt Engineering",
        description: "AI workflow optimization and intelligent automation",
    },
    Skill {
        icon: Icon::Code,
        title: "Make.com",
        description: "Complex automation and integration workflows",
    },
    Skill {
        icon: Icon::Code,
        title: "lovable.dev & Vibecoding",
        description: "No-code website development and rapid prototyping",
    },
    Skill {
        icon: Icon::Database,
        title: "Supabase",
        description: "Backend-as-a-service and database management",
    },
    Skill {
        icon: Icon::Code,
        title: "CRM and Command Line Interface",
        description: "Customer relationship management and CLI automation",
    },
    Skill {
        icon: Icon::Code,
        title: "Postman",
        description: "API testing and development workflows",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static str,
    pub image: &'static str,
    pub image_alt: &'static str,
    pub link: &'static str,
    pub is_image_project: bool,
}

/// What "View Project" does for a given project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectAction {
    OpenLink(&'static str),
    ShowImage {
        src: &'static str,
        alt: &'static str,
    },
}

impl Project {
    pub fn action(&self) -> ProjectAction {
        if self.is_image_project {
            ProjectAction::ShowImage {
                src: self.image,
                alt: self.image_alt,
            }
        } else {
            ProjectAction::OpenLink(self.link)
        }
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Charlie Munger Investing Assistant",
        description: "AI-powered investment advisor providing Warren Buffett and Charlie Munger-inspired insights for stock analysis and market wisdom",
        tech: "OpenAI GPT, Custom AI Training, ChatGPT",
        image: "/api/placeholder/300/200",
        image_alt: "Charlie Munger Investing Assistant",
        link: "https://chatgpt.com/g/g-c8OT5xlXC-charlie-munger-investing-assistant",
        is_image_project: false,
    },
    Project {
        title: "Email Virus Scanner",
        description: "A Make.com automation that uses VirusTotal API to check if any URL mentioned inside emails is legitimate or contains scams/viruses",
        tech: "Make.com, VirusTotal API, Email Processing, URL Analysis",
        image: "/virustotal-flow.svg",
        image_alt: "Email Virus Scanner Automation Flow",
        link: "#",
        is_image_project: true,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub icon: Icon,
    pub text: &'static str,
}

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: Icon::MapPin,
        text: "Based in Canada",
    },
    Highlight {
        icon: Icon::Code,
        text: "1.5 year experience in tech-support and 1+ year building automations",
    },
    Highlight {
        icon: Icon::Zap,
        text: "50+ Automations Built",
    },
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I'm a passionate Prompt Engineer, Solutions Engineer, and No-Code Developer with expertise in building intelligent automation workflows that solve complex business challenges.",
    "My experience spans across Make.com integrations, Supabase backend development, and advanced prompt engineering techniques that maximize AI potential for enterprise solutions.",
    "As a Solutions Engineer, I bridge the gap between technical complexity and business needs, designing scalable automation architectures and implementing AI-driven workflows that streamline operations and enhance productivity.",
    "Through Vibecoding and lovable.dev, I create rapid prototypes and full-featured applications, helping businesses transition into the no-code future while maintaining enterprise-grade reliability and performance.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "LinkedIn Profile",
        href: "https://www.linkedin.com/in/panth-patel-139a63253/",
        icon: Icon::Linkedin,
    },
    SocialLink {
        label: "GitHub Profile",
        href: "https://github.com/Rodrique09",
        icon: Icon::Github,
    },
];

/// CSS animation delay for the card at `index` in a staggered grid.
pub fn stagger_delay(index: usize) -> String {
    format!("animation-delay: {:.1}s", index as f64 * 0.1)
}
