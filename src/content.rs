//! Hand-authored site content. Tables render in declared order.

use std::collections::HashSet;

use thiserror::Error;

use crate::viewport::ViewportClass;

pub const OWNER: &str = "Akhil Pulukuri";
pub const LOGO: &str = "akhi_ak";
pub const PROFILE_IMAGE: &str = "/pictures/img1.jpg";
pub const RESUME_PDF: &str = "/assets/AKHIL.pdf";
pub const EMAIL: &str = "akhilpulukuri594@gmail.com";
pub const LOCATION: &str = "Ongole,Andhra Pradesh,India";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/pulukuri-akhil/";
pub const GITHUB_URL: &str = "https://github.com/akhi45-ak";
pub const PROJECT_IMAGE_FALLBACK: &str =
    "https://placehold.co/400x220/1f2937/d1d5db?text=Project+Image";

/// `rel` for every link that opens a new browsing context.
pub const EXTERNAL_REL: &str = "noopener noreferrer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialIcon {
    LinkedIn,
    GitHub,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub icon: SocialIcon,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "LinkedIn",
        icon: SocialIcon::LinkedIn,
        href: LINKEDIN_URL,
    },
    SocialLink {
        name: "GitHub",
        icon: SocialIcon::GitHub,
        href: GITHUB_URL,
    },
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "Hello! I'm Akhil, a passionate full-stack developer with a love for building clean, intuitive, and high-performance web applications. My journey in tech started with a curiosity for how things work, which evolved into a career dedicated to solving complex problems with elegant code.",
    "I specialize in the MERN stack (MongoDB, Express, React, Node.js) but I am always eager to learn new technologies and frameworks. I thrive in collaborative environments and am committed to writing maintainable, scalable, and well-documented code.",
];

pub const CORE_TECHNOLOGIES: &[&str] = &[
    "React.js",
    "Node.js",
    "JavaScript (ES6+)",
    "HTML5 & CSS3",
    "MongoDB",
    "Express.js",
    "REST APIs",
    "Git & GitHub",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
    pub percentage: u8,
}

impl Skill {
    pub fn fill_width(&self) -> String {
        format!("{}%", self.percentage)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, icon: &'static str, percentage: u8) -> Skill {
    Skill {
        name,
        icon,
        percentage,
    }
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Frontend Development",
        skills: &[
            skill("React.js", "⚛️", 95),
            skill("JavaScript (ES6+)", "📜", 90),
            skill("HTML5", "🌐", 98),
            skill("CSS3", "🎨", 95),
        ],
    },
    SkillGroup {
        title: "Backend Development",
        skills: &[
            skill("Node.js", "🟢", 85),
            skill("Express.js", "⚡", 80),
            skill("MongoDB", "🍃", 75),
        ],
    },
    SkillGroup {
        title: "Tools & Workflow",
        skills: &[
            skill("Git & GitHub", "🐙", 95),
            skill("Responsive Design", "📱", 98),
            skill("VS Code", "👨‍💻", 99),
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub image_url: &'static str,
    pub code_url: &'static str,
}

impl Project {
    /// Image to show, given whether the screenshot already failed to load.
    pub fn image_src(&self, failed: bool) -> &'static str {
        if failed {
            PROJECT_IMAGE_FALLBACK
        } else {
            self.image_url
        }
    }

    /// Whether an image element already gave up loading: finished but with no
    /// decoded pixels. Catches failures that happened before any `error`
    /// listener was attached.
    pub fn image_load_failed(complete: bool, natural_width: u32) -> bool {
        complete && natural_width == 0
    }

    pub fn image_alt(&self) -> String {
        format!("{} project screenshot", self.title)
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Personal Portfolio",
        description: "A fully responsive personal portfolio website built from scratch using React.js and advanced inline styling techniques to showcase my projects and skills.",
        tags: &["React.js", "Inline Styles", "Responsive Design"],
        image_url: "/pictures/port.png",
        code_url: "#",
    },
    Project {
        title: "Qisceet Reclaimithub",
        description: "QISCET ReclaimitHub is a simple and user-friendly platform built with HTML, CSS, JavaScript, Node.js, Express.js, and MongoDB that helps students post, find, and reclaim lost or found items on campus.",
        tags: &["HTML", "CSS", "JavaScript", "Node.js", "Express.js", "MongoDB"],
        image_url: "/pictures/lost.png",
        code_url: "https://github.com/akhi45-ak/lost-and-found",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Academic {
    pub degree: &'static str,
    pub institution: &'static str,
    pub date: &'static str,
    pub description: &'static str,
}

pub const ACADEMICS: &[Academic] = &[
    Academic {
        degree: "B.Tech in CSE-Artificial Intelligence & Machine Learning",
        institution: "Qis college of Engineering and Technology, Ongole",
        date: "2022 - 2026",
        description: "Graduated with a CGPA of 8.10/10.0.",
    },
    Academic {
        degree: "Board of Intermediate (Class XII)",
        institution: "Sri Sadhana junior college, Markapur",
        date: "2020-2022",
        description: "Completed with 75% in the Science stream (Physics, Chemistry, Maths).",
    },
    Academic {
        degree: "Board of Secondary Education (Class X)",
        institution: "ZPH School, Tarlupadu",
        date: "2019-2020",
        description: "Completed with a CGPA of 10.0/10.0.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineSide {
    Left,
    Right,
}

/// Odd entries sit on the right of the timeline above the breakpoint; at or
/// below it everything collapses into one left-aligned column.
pub fn timeline_side(index: usize, class: ViewportClass) -> TimelineSide {
    if !class.is_narrow() && index % 2 == 1 {
        TimelineSide::Right
    } else {
        TimelineSide::Left
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
    pub href: Option<&'static str>,
}

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        icon: "📧",
        title: "Email",
        text: EMAIL,
        href: Some("mailto:akhilpulukuri594@gmail.com"),
    },
    ContactInfo {
        icon: "📍",
        title: "Location",
        text: LOCATION,
        href: None,
    },
    ContactInfo {
        icon: "🔗",
        title: "LinkedIn",
        text: LINKEDIN_URL,
        href: Some(LINKEDIN_URL),
    },
];

pub fn copyright(year: i32) -> String {
    format!("© {year} {OWNER}. All rights reserved.")
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("{table} has an entry with an empty {field}")]
    Empty {
        table: &'static str,
        field: &'static str,
    },
    #[error("{table} lists `{key}` more than once")]
    Duplicate {
        table: &'static str,
        key: &'static str,
    },
    #[error("skill `{name}` is at {percentage}%, above 100")]
    Percentage { name: &'static str, percentage: u8 },
}

fn non_empty(table: &'static str, field: &'static str, value: &str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        Err(ContentError::Empty { table, field })
    } else {
        Ok(())
    }
}

fn unique(
    table: &'static str,
    keys: impl IntoIterator<Item = &'static str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(ContentError::Duplicate { table, key });
        }
    }
    Ok(())
}

/// Authoring-time check of every content table.
pub fn validate() -> Result<(), ContentError> {
    for group in SKILL_GROUPS {
        non_empty("skills", "category", group.title)?;
        for s in group.skills {
            non_empty("skills", "name", s.name)?;
            non_empty("skills", "icon", s.icon)?;
            if s.percentage > 100 {
                return Err(ContentError::Percentage {
                    name: s.name,
                    percentage: s.percentage,
                });
            }
        }
        unique("skills", group.skills.iter().map(|s| s.name))?;
    }
    unique("skill categories", SKILL_GROUPS.iter().map(|g| g.title))?;

    for p in PROJECTS {
        non_empty("projects", "title", p.title)?;
        non_empty("projects", "description", p.description)?;
        non_empty("projects", "image", p.image_url)?;
        non_empty("projects", "code link", p.code_url)?;
        p.tags.iter().try_for_each(|t| non_empty("projects", "tag", t))?;
        unique("project tags", p.tags.iter().copied())?;
    }
    unique("projects", PROJECTS.iter().map(|p| p.title))?;

    for a in ACADEMICS {
        non_empty("academics", "degree", a.degree)?;
        non_empty("academics", "institution", a.institution)?;
        non_empty("academics", "date", a.date)?;
    }

    for l in SOCIAL_LINKS {
        non_empty("social links", "href", l.href)?;
    }
    unique("social links", SOCIAL_LINKS.iter().map(|l| l.name))?;
    unique("core technologies", CORE_TECHNOLOGIES.iter().copied())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_is_valid() {
        assert_eq!(validate(), Ok(()));
    }

    #[test]
    fn test_timeline_alternates_when_wide() {
        let sides = (0..ACADEMICS.len())
            .map(|i| timeline_side(i, ViewportClass::from_width(900)))
            .collect::<Vec<_>>();
        assert_eq!(
            sides,
            vec![TimelineSide::Left, TimelineSide::Right, TimelineSide::Left]
        );
    }

    #[test]
    fn test_timeline_collapses_when_narrow() {
        for width in [500, 768] {
            let class = ViewportClass::from_width(width);
            assert!((0..ACADEMICS.len()).all(|i| timeline_side(i, class) == TimelineSide::Left));
        }
    }

    #[test]
    fn test_timeline_follows_resizes() {
        let sides = [500, 900, 500]
            .into_iter()
            .map(|w| timeline_side(1, ViewportClass::from_width(w)))
            .collect::<Vec<_>>();
        assert_eq!(
            sides,
            vec![TimelineSide::Left, TimelineSide::Right, TimelineSide::Left]
        );
    }

    #[test]
    fn test_project_image_fallback() {
        let project = &PROJECTS[1];
        assert_eq!(project.image_src(false), "/pictures/lost.png");
        assert_eq!(project.image_src(true), PROJECT_IMAGE_FALLBACK);
        assert_eq!(project.image_alt(), "Qisceet Reclaimithub project screenshot");
    }

    #[test]
    fn test_image_load_failed() {
        // finished with nothing decoded: the request already failed
        assert!(Project::image_load_failed(true, 0));
        assert!(!Project::image_load_failed(true, 400));
        // still loading, the error listener will catch it
        assert!(!Project::image_load_failed(false, 0));
    }

    #[test]
    fn test_declared_order_is_kept() {
        let titles = SKILL_GROUPS.iter().map(|g| g.title).collect::<Vec<_>>();
        assert_eq!(
            titles,
            vec!["Frontend Development", "Backend Development", "Tools & Workflow"]
        );
        assert_eq!(ACADEMICS[0].date, "2022 - 2026");
        assert_eq!(SKILL_GROUPS[2].skills[2].fill_width(), "99%");
    }

    #[test]
    fn test_copyright() {
        assert_eq!(
            copyright(2026),
            "© 2026 Akhil Pulukuri. All rights reserved."
        );
    }

    #[test]
    fn test_unique_reports_first_duplicate() {
        assert_eq!(
            unique("t", ["a", "b", "a"]),
            Err(ContentError::Duplicate { table: "t", key: "a" })
        );
    }
}
