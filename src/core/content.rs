//! Display records for every page section
//!
//! Everything here is static: sections read these tables and never mutate
//! them. Icons are names of SVGs under `/icons`.

use derive_more::Display;

pub const OWNER_NAME: &str = "Rogemson Molina";
pub const OWNER_TITLE: &str = "Full-Stack Web Developer";
pub const BRAND: &str = "Jemsonnn";
pub const SITE_TITLE: &str = "Molina, Rogemson";
pub const SITE_DESCRIPTION: &str = "Portfolio Website";

// ============================================================================
// Hero
// ============================================================================

pub const HERO_HEADLINE: &str = "Crafting Seamless Web Solutions";
pub const HERO_SUMMARY: &str = "Specializing in building modern, scalable web applications \
    with cutting-edge technologies and best practices.";

/// Text shown before the typewriter takes over
pub const TYPEWRITER_PLACEHOLDER: &str = "I build web applications";
pub const TYPEWRITER_PREFIX: &str = "I build ";
pub const TYPEWRITER_PHRASES: [&str; 4] =
    ["Web Applications", "REST APIs", "Dynamic UIs", "UI/UX Design"];

/// Technology chip floating over the hero background
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TechChip {
    pub name: &'static str,
    pub image: &'static str,
    /// Horizontal position in percent of the hero width
    pub x_percent: u8,
    /// Vertical position in percent of the hero height
    pub y_percent: u8,
}

pub const TECH_STACK: [TechChip; 8] = [
    TechChip { name: "React", image: "/images/react.png", x_percent: 15, y_percent: 20 },
    TechChip { name: "Node.js", image: "/images/node.png", x_percent: 75, y_percent: 15 },
    TechChip { name: "TypeScript", image: "/images/typescript.png", x_percent: 85, y_percent: 65 },
    TechChip { name: "Python", image: "/images/python.png", x_percent: 10, y_percent: 70 },
    TechChip { name: "Django", image: "/images/django.png", x_percent: 20, y_percent: 45 },
    TechChip { name: "PostgreSQL", image: "/images/postgresql.png", x_percent: 70, y_percent: 40 },
    TechChip { name: "Next.js", image: "/images/nextjs.png", x_percent: 60, y_percent: 75 },
    TechChip { name: "TailwindCSS", image: "/images/tailwind.png", x_percent: 25, y_percent: 85 },
];

// ============================================================================
// About
// ============================================================================

pub const ABOUT_TAGLINE: &str = "Driven to design and develop high-performance, user-centric \
    web applications using cutting-edge technologies.";
pub const ABOUT_EXPERIENCE: &str = "1+ Years";
pub const ABOUT_EXPERIENCE_CAPTION: &str = "Proven experience in web development";
pub const CORE_TECHNOLOGIES: [&str; 4] = ["React/Next.js", "Python", "Tailwind CSS", "Django"];

/// Label/value pair rendered as a big number with a caption
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

pub const ABOUT_STATS: [Metric; 2] = [
    Metric { icon: "coffee", label: "Projects", value: "3+" },
    Metric { icon: "code", label: "Code lines", value: "10k+" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub href: &'static str,
    pub caption: &'static str,
}

pub const ABOUT_LINKS: [SocialLink; 3] = [
    SocialLink { icon: "github", label: "GitHub", href: "https://github.com", caption: "View projects" },
    SocialLink { icon: "linkedin", label: "LinkedIn", href: "https://linkedin.com", caption: "Connect" },
    SocialLink { icon: "mail", label: "Email", href: "mailto:your@email.com", caption: "Contact" },
];

// ============================================================================
// Projects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum ProjectCategory {
    #[default]
    #[display("all")]
    All,
    #[display("web")]
    Web,
    #[display("analytics")]
    Analytics,
    #[display("healthcare")]
    Healthcare,
}

impl ProjectCategory {
    /// Filter buttons in display order
    pub const ALL: [ProjectCategory; 4] = [
        ProjectCategory::All,
        ProjectCategory::Web,
        ProjectCategory::Analytics,
        ProjectCategory::Healthcare,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::All => "All Projects",
            ProjectCategory::Web => "Web Applications",
            ProjectCategory::Analytics => "Analytics",
            ProjectCategory::Healthcare => "Healthcare",
        }
    }

    /// Whether a project filed under `category` is shown by this filter
    pub fn includes(&self, category: ProjectCategory) -> bool {
        *self == ProjectCategory::All || *self == category
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub category: ProjectCategory,
    pub metrics: [Metric; 3],
    pub technologies: &'static [&'static str],
    pub outcomes: &'static [&'static str],
    pub duration: &'static str,
    pub client: &'static str,
    pub featured: bool,
    pub testimonial: Option<Testimonial>,
}

impl Project {
    /// Featured cards take the full row once the grid holds more than two cards
    pub fn spans_two_columns(&self, shown: usize) -> bool {
        self.featured && shown > 2
    }
}

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Enterprise E-commerce Platform",
        subtitle: "Full-stack Digital Transformation",
        description: "Developed a scalable e-commerce solution for a retail client with 100K+ monthly users.",
        image: "/images/placeholder-project.png",
        category: ProjectCategory::Web,
        metrics: [
            Metric { icon: "users", label: "Active Users", value: "100K+" },
            Metric { icon: "bar-chart", label: "Sales Increase", value: "45%" },
            Metric { icon: "clock", label: "Load Time", value: "0.8s" },
        ],
        technologies: &["React", "Node.js", "MongoDB", "AWS"],
        outcomes: &[
            "Increased conversion rate by 45%",
            "Reduced page load time by 60%",
            "Implemented real-time inventory management",
        ],
        duration: "6 months",
        client: "Major Retail Brand",
        featured: true,
        testimonial: Some(Testimonial {
            quote: "The platform transformed our digital presence and significantly boosted our online sales.",
            author: "John Smith",
            role: "Director of E-commerce",
        }),
    },
    Project {
        title: "Financial Analytics Dashboard",
        subtitle: "Data Visualization & Analytics",
        description: "Built a real-time analytics platform for financial data processing and visualization.",
        image: "/images/placeholder-project.png",
        category: ProjectCategory::Analytics,
        metrics: [
            Metric { icon: "clock", label: "Processing Time", value: "-75%" },
            Metric { icon: "users", label: "Daily Users", value: "5K+" },
            Metric { icon: "bar-chart", label: "Data Points", value: "1M+" },
        ],
        technologies: &["Next.js", "Python", "PostgreSQL", "Docker"],
        outcomes: &[
            "Reduced data processing time by 75%",
            "Automated report generation saving 20 hours/week",
            "Integrated machine learning predictions",
        ],
        duration: "4 months",
        client: "Financial Services Firm",
        featured: true,
        testimonial: None,
    },
    Project {
        title: "Healthcare Management System",
        subtitle: "Secure Patient Management",
        description: "Developed a HIPAA-compliant healthcare management system for patient data.",
        image: "/images/placeholder-project.png",
        category: ProjectCategory::Healthcare,
        metrics: [
            Metric { icon: "users", label: "Patients Managed", value: "50K+" },
            Metric { icon: "clock", label: "Time Saved", value: "30%" },
            Metric { icon: "award", label: "Compliance", value: "100%" },
        ],
        technologies: &["React", "Java", "PostgreSQL", "Azure"],
        outcomes: &[
            "Achieved HIPAA compliance certification",
            "Reduced administrative time by 30%",
            "Implemented secure patient data management",
        ],
        duration: "8 months",
        client: "Regional Healthcare Provider",
        featured: false,
        testimonial: None,
    },
];

/// Projects shown under `category`, in catalogue order
pub fn filter_projects(category: ProjectCategory) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|p| category.includes(p.category))
        .collect()
}

// ============================================================================
// Skills
// ============================================================================

pub const KEY_METRICS: [Metric; 4] = [
    Metric { icon: "trophy", label: "Projects Delivered", value: "50+" },
    Metric { icon: "clock", label: "Years Experience", value: "5+" },
    Metric { icon: "sparkles", label: "Success Rate", value: "98%" },
    Metric { icon: "gauge", label: "Client Satisfaction", value: "4.9/5" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpertiseArea {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
    pub experience: &'static str,
    pub key_projects: &'static [&'static str],
    pub highlight: &'static str,
}

pub const EXPERTISE: [ExpertiseArea; 4] = [
    ExpertiseArea {
        icon: "code",
        title: "Frontend Development",
        description: "Specialized in building responsive, performant web applications with modern frameworks",
        skills: &["React", "Next.js", "TypeScript"],
        experience: "5+ years",
        key_projects: &["E-commerce Platform", "SaaS Dashboard"],
        highlight: "Reduced load times by 60% for major e-commerce client",
    },
    ExpertiseArea {
        icon: "server",
        title: "Backend Development",
        description: "Building scalable server architectures and RESTful APIs",
        skills: &["Node.js", "Python", "Java"],
        experience: "4+ years",
        key_projects: &["Payment Processing System", "API Gateway"],
        highlight: "Handled 1M+ daily requests for financial services client",
    },
    ExpertiseArea {
        icon: "database",
        title: "Database Architecture",
        description: "Designing efficient database schemas and optimizing queries",
        skills: &["MongoDB", "PostgreSQL", "Redis"],
        experience: "4+ years",
        key_projects: &["Real-time Analytics Platform"],
        highlight: "Improved query performance by 75%",
    },
    ExpertiseArea {
        icon: "cloud",
        title: "Cloud & DevOps",
        description: "Cloud infrastructure and CI/CD pipeline implementation",
        skills: &["AWS", "Docker", "Git"],
        experience: "3+ years",
        key_projects: &["Cloud Migration Project"],
        highlight: "Reduced deployment time by 80%",
    },
];

pub const CONTINUOUS_LEARNING: [&str; 3] = ["Web3", "AI Integration", "Cloud Native Architecture"];

// ============================================================================
// Contact & footer
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDetail {
    pub icon: &'static str,
    pub text: &'static str,
}

pub const CONTACT_DETAILS: [ContactDetail; 3] = [
    ContactDetail { icon: "map-pin", text: "123 Business Avenue, City, Country" },
    ContactDetail { icon: "phone", text: "+1 (555) 123-4567" },
    ContactDetail { icon: "mail", text: "hello@example.com" },
];

pub const CONTACT_SOCIALS: [SocialLink; 3] = [
    SocialLink { icon: "github", label: "GitHub", href: "https://github.com", caption: "" },
    SocialLink { icon: "linkedin", label: "LinkedIn", href: "https://linkedin.com", caption: "" },
    SocialLink { icon: "mail", label: "Email", href: "mailto:hello@example.com", caption: "" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterColumn {
    pub title: &'static str,
    /// Paragraph shown instead of links when present
    pub blurb: Option<&'static str>,
    pub links: &'static [&'static str],
}

pub const FOOTER_COLUMNS: [FooterColumn; 3] = [
    FooterColumn {
        title: "About",
        blurb: Some("Creating meaningful digital experiences through innovative design and development."),
        links: &[],
    },
    FooterColumn {
        title: "Quick Links",
        blurb: None,
        links: &["Home", "About", "Services", "Portfolio"],
    },
    FooterColumn {
        title: "Services",
        blurb: None,
        links: &["Web Design", "Development", "UI/UX Design", "Consulting"],
    },
];

/// Copyright line; `year` is unknown until the client has mounted
pub fn copyright_line(year: Option<i32>) -> String {
    match year {
        Some(year) => format!("© {} {}. All rights reserved.", year, BRAND),
        None => format!("© {}. All rights reserved.", BRAND),
    }
}
