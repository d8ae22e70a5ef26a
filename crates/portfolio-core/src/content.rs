//! Static page content: skills, projects, education and contact details

/// Upper bound for a skill level, in percent
pub const MAX_SKILL_LEVEL: u8 = 100;

/// A single skill with a proficiency percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    level: u8,
}

impl Skill {
    /// Levels above 100 are clamped.
    pub const fn new(name: &'static str, level: u8) -> Self {
        let level = if level > MAX_SKILL_LEVEL {
            MAX_SKILL_LEVEL
        } else {
            level
        };
        Self { name, level }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Text shown next to the skill name (`"85%"`)
    pub fn percentage_label(&self) -> String {
        format!("{}%", self.level)
    }

    /// Inline style for the progress bar fill
    pub fn progress_style(&self) -> String {
        format!("width: {}%", self.level)
    }
}

/// A titled group of skills rendered as one card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: Vec<Skill>,
}

pub fn skill_categories() -> Vec<SkillCategory> {
    vec![
        SkillCategory {
            title: "Technical Skills",
            skills: vec![
                Skill::new("HTML/CSS", 90),
                Skill::new("JavaScript", 85),
                Skill::new("React", 80),
                Skill::new("TypeScript", 75),
                Skill::new("Node.js", 70),
                Skill::new("Git", 85),
            ],
        },
        SkillCategory {
            title: "Languages",
            skills: vec![Skill::new("Sinhala", 100), Skill::new("English", 85)],
        },
    ]
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
}

impl Project {
    /// Two-digit ordinal badge for the project at `index` (0-based)
    pub fn ordinal(index: usize) -> String {
        format!("{:02}", index + 1)
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "E-Commerce Platform",
            description: "A full-stack e-commerce website with payment integration and user authentication.",
            technologies: &["React", "Node.js", "MongoDB", "Stripe"],
        },
        Project {
            title: "Task Management App",
            description: "Real-time collaborative task management application with drag-and-drop functionality.",
            technologies: &["React", "Firebase", "Tailwind CSS"],
        },
        Project {
            title: "Weather Dashboard",
            description: "Interactive weather dashboard with geolocation and 7-day forecast.",
            technologies: &["JavaScript", "API Integration", "CSS3"],
        },
        Project {
            title: "Portfolio Website",
            description: "Responsive personal portfolio with dark mode and smooth animations.",
            technologies: &["Rust", "Leptos", "CSS3"],
        },
    ]
}

pub struct EducationEntry {
    pub title: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
    /// Rendered as a bullet list instead of the summary when non-empty
    pub highlights: &'static [&'static str],
}

pub fn education() -> Vec<EducationEntry> {
    vec![
        EducationEntry {
            title: "Bachelor of Science in Computer Science",
            institution: "University of Sri Lanka",
            period: "2020 - 2024",
            summary: "Focused on web development, software engineering, and database management systems.",
            highlights: &[],
        },
        EducationEntry {
            title: "Advanced Level Education",
            institution: "Mathematics Stream",
            period: "2018 - 2020",
            summary: "Specialized in Mathematics, Physics, and Information Technology.",
            highlights: &[],
        },
        EducationEntry {
            title: "Certifications",
            institution: "Online Learning Platforms",
            period: "2021 - Present",
            summary: "",
            highlights: &[
                "Full Stack Web Development - Udemy",
                "React Advanced Concepts - Coursera",
                "JavaScript Algorithms and Data Structures - freeCodeCamp",
            ],
        },
    ]
}

/// Owner identity and outbound contact links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDetails {
    pub name: &'static str,
    pub initials: &'static str,
    pub role: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static [&'static str],
    pub github_handle: &'static str,
}

impl ContactDetails {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        format!("tel:{}", self.phone)
    }

    pub fn github_url(&self) -> String {
        format!("https://github.com/{}", self.github_handle)
    }

    /// Single-line address for compact info rows
    pub fn address_line(&self) -> String {
        self.address.join(", ")
    }
}

pub const CONTACT: ContactDetails = ContactDetails {
    name: "Fathima Nafla",
    initials: "FN",
    role: "Full Stack Developer & Creative Designer",
    email: "Fathimanafla882@gmail.com",
    phone: "0759399144",
    address: &["529, Heli Road", "Haliwela, Galle"],
    github_handle: "TMCB-2025",
};

pub const HERO_DESCRIPTION: &str = "Passionate about creating beautiful, functional, and user-friendly digital experiences. \
     Specialized in modern web technologies and responsive design.";

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "I'm a passionate Full Stack Developer based in Galle, Sri Lanka, with a strong foundation in \
     both front-end and back-end technologies. I love turning complex problems into simple, \
     beautiful, and intuitive designs.",
    "When I'm not coding, you'll find me exploring new technologies, contributing to open-source \
     projects, or learning about the latest trends in web development.",
];
