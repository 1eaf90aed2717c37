/// Opaque glyph identifiers. The rendering layer resolves each to an
/// icon-font class (`devicon-*` for brand marks, `extra-*` for the rest), so
/// state and content code never touch presentation details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Award,
    BarChart,
    Briefcase,
    Building,
    Calendar,
    ChevronDown,
    Code,
    Cog,
    Gear,
    GraduationCap,
    Instagram,
    Linkedin,
    Github,
    Mail,
    MapPin,
    Moon,
    Send,
    Sun,
    User,
    Wrench,
}

impl Icon {
    pub fn class(self) -> &'static str {
        match self {
            Icon::Award => "extra-award",
            Icon::BarChart => "extra-bar-chart",
            Icon::Briefcase => "extra-briefcase",
            Icon::Building => "extra-building",
            Icon::Calendar => "extra-calendar",
            Icon::ChevronDown => "extra-chevron-down",
            Icon::Code => "extra-code",
            Icon::Cog => "extra-cog",
            Icon::Gear => "extra-gear",
            Icon::GraduationCap => "extra-graduation-cap",
            Icon::Instagram => "extra-instagram",
            Icon::Linkedin => "devicon-linkedin-plain",
            Icon::Github => "devicon-github-plain",
            Icon::Mail => "extra-email",
            Icon::MapPin => "extra-location",
            Icon::Moon => "extra-moon",
            Icon::Send => "extra-send",
            Icon::Sun => "extra-sun",
            Icon::User => "extra-user",
            Icon::Wrench => "extra-wrench",
        }
    }
}
