use leptos::prelude::*;

/// Visual mode of the whole page. Every themed attribute maps from this enum
/// through one of the class tables below, so there is no third state and no
/// unstyled fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn page(self) -> &'static str {
        match self {
            Theme::Light => "bg-gray-50 text-gray-900",
            Theme::Dark => "bg-gray-900 text-gray-100",
        }
    }

    pub fn nav(self) -> &'static str {
        match self {
            Theme::Light => "bg-white/95 border-gray-200",
            Theme::Dark => "bg-gray-900/95 border-gray-800",
        }
    }

    /// Square monogram badge in the nav bar.
    pub fn mark(self) -> &'static str {
        match self {
            Theme::Light => "bg-gray-900",
            Theme::Dark => "bg-gray-700",
        }
    }

    /// Large monogram badge in the hero banner.
    pub fn hero_mark(self) -> &'static str {
        match self {
            Theme::Light => "bg-gray-900",
            Theme::Dark => "bg-gray-800",
        }
    }

    pub fn link_active(self) -> &'static str {
        match self {
            Theme::Light => "text-gray-900",
            Theme::Dark => "text-white",
        }
    }

    pub fn link_idle(self) -> &'static str {
        match self {
            Theme::Light => "text-gray-600 hover:text-gray-900",
            Theme::Dark => "text-gray-400 hover:text-gray-300",
        }
    }

    pub fn toggle(self) -> &'static str {
        match self {
            Theme::Light => "bg-gray-100 hover:bg-gray-200",
            Theme::Dark => "bg-gray-800 hover:bg-gray-700",
        }
    }

    /// Section headline icons and other de-emphasized foreground.
    pub fn muted(self) -> &'static str {
        match self {
            Theme::Light => "text-gray-600",
            Theme::Dark => "text-gray-400",
        }
    }

    /// Body copy inside cards.
    pub fn body(self) -> &'static str {
        match self {
            Theme::Light => "text-gray-600",
            Theme::Dark => "text-gray-300",
        }
    }

    pub fn caption(self) -> &'static str {
        match self {
            Theme::Light => "text-gray-500",
            Theme::Dark => "text-gray-400",
        }
    }

    pub fn faint(self) -> &'static str {
        match self {
            Theme::Light => "text-gray-400",
            Theme::Dark => "text-gray-500",
        }
    }

    pub fn chevron(self) -> &'static str {
        match self {
            Theme::Light => "text-gray-400",
            Theme::Dark => "text-gray-600",
        }
    }

    pub fn btn_solid(self) -> &'static str {
        match self {
            Theme::Light => "bg-gray-900 text-white hover:bg-gray-800",
            Theme::Dark => "bg-white text-gray-900 hover:bg-gray-100",
        }
    }

    pub fn btn_outline(self) -> &'static str {
        match self {
            Theme::Light => "border-gray-300 hover:border-gray-400 hover:bg-gray-100",
            Theme::Dark => "border-gray-600 hover:border-gray-500 hover:bg-gray-800",
        }
    }

    /// Alternating band background behind every other section.
    pub fn band(self) -> &'static str {
        match self {
            Theme::Light => "bg-white",
            Theme::Dark => "bg-gray-800/50",
        }
    }

    /// Card resting on a band section.
    pub fn card(self) -> &'static str {
        match self {
            Theme::Light => "bg-gray-50 border border-gray-200",
            Theme::Dark => "bg-gray-800 border border-gray-700",
        }
    }

    /// Card resting on the page background, with a hover accent.
    pub fn card_raised(self) -> &'static str {
        match self {
            Theme::Light => "bg-white border border-gray-200 hover:border-gray-300",
            Theme::Dark => "bg-gray-800 border border-gray-700 hover:border-gray-600",
        }
    }

    pub fn chip(self) -> &'static str {
        match self {
            Theme::Light => "bg-gray-200",
            Theme::Dark => "bg-gray-700",
        }
    }

    pub fn chip_soft(self) -> &'static str {
        match self {
            Theme::Light => "bg-gray-100 group-hover:bg-gray-200",
            Theme::Dark => "bg-gray-700 group-hover:bg-gray-600",
        }
    }

    /// Icon foreground inside chips.
    pub fn ink(self) -> &'static str {
        match self {
            Theme::Light => "text-gray-700",
            Theme::Dark => "text-gray-300",
        }
    }

    pub fn meter_track(self) -> &'static str {
        match self {
            Theme::Light => "bg-gray-200",
            Theme::Dark => "bg-gray-700",
        }
    }

    pub fn meter_fill(self) -> &'static str {
        match self {
            Theme::Light => "bg-gray-600",
            Theme::Dark => "bg-gray-400",
        }
    }

    /// Inset panel inside a card.
    pub fn panel(self) -> &'static str {
        match self {
            Theme::Light => "bg-gray-50",
            Theme::Dark => "bg-gray-700",
        }
    }

    pub fn tile(self) -> &'static str {
        match self {
            Theme::Light => {
                "bg-white border border-gray-200 hover:border-gray-300 text-gray-700 hover:text-gray-900"
            }
            Theme::Dark => {
                "bg-gray-800 border border-gray-700 hover:border-gray-600 text-gray-300 hover:text-white"
            }
        }
    }

    pub fn footer(self) -> &'static str {
        match self {
            Theme::Light => "border-gray-200 bg-gray-100",
            Theme::Dark => "border-gray-800 bg-gray-900",
        }
    }
}

/// Installs the theme cell at the composition root. The cell is the single
/// writer for theme state; everything else reads it through [`use_theme`].
pub fn provide_theme() {
    provide_context(RwSignal::new(Theme::default()));
}

pub fn use_theme() -> RwSignal<Theme> {
    expect_context::<RwSignal<Theme>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn toggle_is_an_involution() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn every_class_table_has_distinct_light_and_dark_values() {
        let tables: &[fn(Theme) -> &'static str] = &[
            Theme::page,
            Theme::nav,
            Theme::mark,
            Theme::hero_mark,
            Theme::link_active,
            Theme::link_idle,
            Theme::toggle,
            Theme::muted,
            Theme::body,
            Theme::caption,
            Theme::faint,
            Theme::chevron,
            Theme::btn_solid,
            Theme::btn_outline,
            Theme::band,
            Theme::card,
            Theme::card_raised,
            Theme::chip,
            Theme::chip_soft,
            Theme::ink,
            Theme::meter_track,
            Theme::meter_fill,
            Theme::panel,
            Theme::tile,
            Theme::footer,
        ];
        for table in tables {
            let light = table(Theme::Light);
            let dark = table(Theme::Dark);
            assert!(!light.is_empty());
            assert!(!dark.is_empty());
            assert_ne!(light, dark);
        }
    }
}
