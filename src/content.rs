//! Fixed content payload for the page. Everything here is decided at build
//! time; the components read it, nothing writes it.

use crate::icons::Icon;
use crate::scroll::SectionId;

pub const NAME: &str = "Mohammad Asghari";
pub const FIRST_NAME: &str = "Mohammad";
pub const LAST_NAME: &str = "Asghari";
pub const MONOGRAM: &str = "MA";
pub const LOCATION: &str = "Enschede – The Netherlands";

pub const TAGLINE: &str = "Mechanical Engineering student at the University of Twente, \
    passionate about applying programming, simulation, and smart design to solve \
    real-world challenges.";

pub struct NavItem {
    pub section: SectionId,
    pub label: &'static str,
    pub icon: Icon,
}

/// Nav entries in layout order. The hero has no entry; it is reached by
/// scrolling back up or via the logo.
pub static NAV_ITEMS: &[NavItem] = &[
    NavItem {
        section: SectionId::About,
        label: "About",
        icon: Icon::User,
    },
    NavItem {
        section: SectionId::Skills,
        label: "Skills",
        icon: Icon::Gear,
    },
    NavItem {
        section: SectionId::Experience,
        label: "Experience",
        icon: Icon::Briefcase,
    },
    NavItem {
        section: SectionId::Education,
        label: "Education",
        icon: Icon::GraduationCap,
    },
    NavItem {
        section: SectionId::Contact,
        label: "Contact",
        icon: Icon::Mail,
    },
];

pub struct AboutCard {
    pub icon: Icon,
    pub title: &'static str,
    pub text: &'static str,
}

pub static ABOUT_CARDS: &[AboutCard] = &[
    AboutCard {
        icon: Icon::Wrench,
        title: "My Passion",
        text: "My passion lies at the intersection of engineering and technology — \
            building systems that are both functional and intelligent.",
    },
    AboutCard {
        icon: Icon::GraduationCap,
        title: "Background",
        text: "I'm currently pursuing a Bachelor's degree in Mechanical Engineering at \
            the University of Twente, alongside an Honours program in Business and \
            Entrepreneurship. I work with tools like MATLAB, SolidWorks, and Python to \
            build smart mechanical systems and I'm especially interested in automation, \
            simulation, and product optimization.",
    },
];

pub struct Skill {
    pub name: &'static str,
    pub blurb: &'static str,
    pub icon: Icon,
    /// Proficiency as a percentage, 0..=100.
    pub level: u8,
}

pub static SKILLS: &[Skill] = &[
    Skill {
        name: "Python",
        blurb: "Experienced in OOP, data handling, and prototyping automation systems",
        icon: Icon::Code,
        level: 90,
    },
    Skill {
        name: "MATLAB",
        blurb: "Experienced in simulating power plant cycles and thermodynamic systems \
            (e.g., T–s diagrams), as well as performing data manipulation, algorithmic design",
        icon: Icon::BarChart,
        level: 85,
    },
    Skill {
        name: "SolidWorks",
        blurb: "Proficient in part modeling, assemblies, and technical drawing for \
            real-world manufacturing use cases",
        icon: Icon::Cog,
        level: 80,
    },
];

pub struct Job {
    pub company: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub span: &'static str,
    pub summary: &'static str,
}

pub static EXPERIENCE: &[Job] = &[Job {
    company: "RealtorAI",
    role: "Co-Founder / CRM Tool specialized for Real Estate Specialists",
    location: "Cyprus",
    span: "2022–2023",
    summary: "Led the development of an innovative CRM solution tailored specifically \
        for real estate professionals, combining technical expertise with business \
        acumen to create a comprehensive platform.",
}];

pub struct Study {
    pub program: &'static str,
    pub school: &'static str,
    pub span: &'static str,
    pub note: &'static str,
    pub icon: Icon,
}

pub static DEGREES: &[Study] = &[
    Study {
        program: "Bachelor Mechanical Engineering",
        school: "University of Twente",
        span: "2024–2027",
        note: "Project Oriented – Energy and Sustainability",
        icon: Icon::Cog,
    },
    Study {
        program: "Business & Entrepreneurship Honours",
        school: "University of Twente",
        span: "2025–2027",
        note: "Top 10% student, selected for Honours program via 4TU & NovelT startup \
            accelerator.",
        icon: Icon::Award,
    },
];

pub struct Highlight {
    pub icon: Icon,
    pub heading: &'static str,
    pub detail: &'static str,
    pub note: &'static str,
}

pub struct Secondary {
    pub program: &'static str,
    pub school: &'static str,
    pub span: &'static str,
    pub highlights: [Highlight; 2],
}

pub static SECONDARY: Secondary = Secondary {
    program: "International Advanced Level (A-Level)",
    school: "The English School of Kyrenia",
    span: "2021–2024",
    highlights: [
        Highlight {
            icon: Icon::BarChart,
            heading: "Academic Excellence",
            detail: "A-Levels: Mathematics, Physics, Computer Science",
            note: "GPA: 9.94 / 10",
        },
        Highlight {
            icon: Icon::Award,
            heading: "Results & Leadership",
            detail: "CS: A (Cambridge), Physics: B, Math: B (Pearson)",
            note: "Head of Robotic Arm & 3D Printing Club",
        },
    ],
};

pub struct ContactLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
    /// External links open in a new browsing context.
    pub external: bool,
}

pub static CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        label: "Email",
        href: "mailto:mohammad.m.asghari1@gmail.com",
        icon: Icon::Mail,
        external: false,
    },
    ContactLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/mohammadmahdi-asghari-79b2b9212/",
        icon: Icon::Linkedin,
        external: true,
    },
    ContactLink {
        label: "GitHub",
        href: "https://github.com/mohammadxe",
        icon: Icon::Github,
        external: true,
    },
    ContactLink {
        label: "Instagram",
        href: "https://www.instagram.com/centralmmd/",
        icon: Icon::Instagram,
        external: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_levels_are_percentages() {
        for skill in SKILLS {
            assert!(skill.level <= 100, "{} level out of range", skill.name);
        }
    }

    #[test]
    fn nav_covers_every_section_but_the_hero_in_order() {
        let sections: Vec<SectionId> = NAV_ITEMS.iter().map(|item| item.section).collect();
        let expected: Vec<SectionId> = SectionId::ALL
            .into_iter()
            .filter(|&id| id != SectionId::Hero)
            .collect();
        assert_eq!(sections, expected);
    }

    #[test]
    fn external_links_are_absolute_and_mail_is_not() {
        for link in CONTACT_LINKS {
            if link.external {
                assert!(link.href.starts_with("https://"), "{}", link.label);
            } else {
                assert!(link.href.starts_with("mailto:"), "{}", link.label);
            }
        }
    }
}
