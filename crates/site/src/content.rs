//! Static portfolio content.
//!
//! Everything shown on the pages lives here as plain data so templates stay
//! markup-only.

/// Site owner.
pub const OWNER_NAME: &str = "Amal Maatoug";

/// Short headline under the name.
pub const HEADLINE: &str = "Software Engineer";

/// Introduction paragraph on the home page.
pub const INTRO: &str = "Passionate about building robust, scalable, and intelligent applications \
that solve real-world problems. I love creating elegant solutions to complex problems and turning \
ideas into reality through code. My journey in tech has been driven by curiosity and a constant \
desire to learn and grow.";

/// Page meta description.
pub const DESCRIPTION: &str = "Portfolio of Amal Maatoug, software engineer specialised in Python, \
full-stack development and AI.";

/// A link to an external profile.
#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

/// A group of skills.
#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

/// A dated entry on the about page (job or degree).
#[derive(Debug, Clone, Copy)]
pub struct TimelineEntry {
    pub title: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

/// A project card.
#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub github: Option<&'static str>,
    pub live: Option<&'static str>,
    pub featured: bool,
}

/// One line of contact information.
#[derive(Debug, Clone, Copy)]
pub struct ContactInfo {
    pub title: &'static str,
    pub content: &'static str,
    pub link: Option<&'static str>,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        url: "https://github.com/amal-maatoug",
    },
    SocialLink {
        name: "LinkedIn",
        url: "https://www.linkedin.com/in/amal-maatoug",
    },
    SocialLink {
        name: "Facebook",
        url: "https://www.facebook.com/amal.maatoug",
    },
];

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        category: "Frontend",
        items: &["React", "Next.js", "TypeScript", "Tailwind CSS", "Vue.js"],
    },
    SkillGroup {
        category: "Backend",
        items: &["Node.js", "Python", "Django", "PostgreSQL", "MongoDB"],
    },
    SkillGroup {
        category: "DevOps",
        items: &["Docker", "Kubernetes", "AWS", "CI/CD", "Linux"],
    },
    SkillGroup {
        category: "Tools",
        items: &["Git", "Figma", "VS Code", "Postman", "Jira"],
    },
];

pub const EXPERIENCE: &[TimelineEntry] = &[
    TimelineEntry {
        title: "Senior Software Engineer",
        organization: "Tech Innovations Inc.",
        period: "2022 - Present",
        description: "Leading development of scalable web applications and mentoring junior developers",
    },
    TimelineEntry {
        title: "Full Stack Developer",
        organization: "Digital Solutions Ltd.",
        period: "2020 - 2022",
        description: "Built responsive web applications and RESTful APIs for enterprise clients",
    },
    TimelineEntry {
        title: "Software Developer",
        organization: "StartUp Hub",
        period: "2018 - 2020",
        description: "Developed innovative features for SaaS products and mobile applications",
    },
];

pub const EDUCATION: &[TimelineEntry] = &[
    TimelineEntry {
        title: "Master of Computer Science",
        organization: "University of Technology",
        period: "2016 - 2018",
        description: "Specialized in Artificial Intelligence and Machine Learning",
    },
    TimelineEntry {
        title: "Bachelor of Software Engineering",
        organization: "Institute of Engineering",
        period: "2012 - 2016",
        description: "Focus on software development and system architecture",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "EchoParrot",
        description: "Intelligent customer call automation platform integrating real-time voice \
streaming (STT + TTS) via Twilio and an AI decision engine (NLP/RAG) to automatically interpret \
and respond to client requests.",
        tech: &["Next.js", "FastAPI", "React.js", "Twilio", "OpenAI"],
        github: None,
        live: None,
        featured: true,
    },
    Project {
        title: "VitamiNurse",
        description: "Backend of a web platform for promotions and nutritional recommendations, \
with REST API for user and product management and a Redis-based caching system to optimize \
response times.",
        tech: &["Express.js", "MongoDB", "Redis"],
        github: None,
        live: None,
        featured: true,
    },
    Project {
        title: "MatchMate",
        description: "Modern dating web application: user registration and authentication, \
profile matching, and instant messaging for connections.",
        tech: &[
            "React.js",
            "Tailwind CSS",
            "Material UI",
            "Express.js",
            "Node.js",
            "MongoDB",
        ],
        github: None,
        live: None,
        featured: false,
    },
    Project {
        title: "IntellVision",
        description: "Image classification web platform: built and evaluated image \
classification models, developed a user-friendly interface, and integrated and deployed \
trained models.",
        tech: &["React.js", "Flask"],
        github: None,
        live: None,
        featured: true,
    },
];

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        title: "Email",
        content: "amal.maatoug@example.com",
        link: Some("mailto:amal.maatoug@example.com"),
    },
    ContactInfo {
        title: "Location",
        content: "Sfax, Tunisia",
        link: None,
    },
];

/// Projects with featured ones first, otherwise in declaration order.
#[must_use]
pub fn projects_featured_first() -> Vec<Project> {
    let mut projects = PROJECTS.to_vec();
    // Stable sort keeps declaration order within each group
    projects.sort_by_key(|p| !p.featured);
    projects
}
