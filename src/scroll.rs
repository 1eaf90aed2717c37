use std::fmt;
use std::str::FromStr;

use leptos::ev;
use leptos::prelude::*;
use leptos_use::{use_event_listener, use_window};
use thiserror::Error;

/// Distance in px from the viewport top of the horizontal probe line used to
/// decide which section is in view. Matches the fixed nav bar height plus a
/// little slack, so the section under the nav is the one highlighted.
pub const NAV_PROBE_Y: f64 = 100.0;

/// The six content regions of the page, in layout order. The order is load
/// bearing: when two sections touch the probe line at once, the earlier one
/// wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    Skills,
    Experience,
    Education,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Education,
        SectionId::Contact,
    ];

    /// The DOM id of the rendered section element.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Education => "education",
            SectionId::Contact => "contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown section id: {0}")]
pub struct UnknownSection(String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Vertical extent of a rendered section, relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    pub fn spans(self, y: f64) -> bool {
        self.top <= y && self.bottom >= y
    }
}

/// First section in declared order whose bounds span the probe line. Sections
/// without a rendered element yield no bounds and are skipped.
pub fn section_at_probe<F>(mut bounds_of: F) -> Option<SectionId>
where
    F: FnMut(SectionId) -> Option<Bounds>,
{
    SectionId::ALL
        .into_iter()
        .find(|&id| bounds_of(id).is_some_and(|b| b.spans(NAV_PROBE_Y)))
}

/// One tracker step: the section at the probe line, or `current` unchanged
/// when nothing qualifies.
pub fn recompute<F>(current: SectionId, bounds_of: F) -> SectionId
where
    F: FnMut(SectionId) -> Option<Bounds>,
{
    section_at_probe(bounds_of).unwrap_or(current)
}

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

fn section_element(id: SectionId) -> Option<web_sys::Element> {
    document().and_then(|doc| doc.get_element_by_id(id.as_str()))
}

fn measured_bounds(id: SectionId) -> Option<Bounds> {
    let rect = section_element(id)?.get_bounding_client_rect();
    Some(Bounds {
        top: rect.top(),
        bottom: rect.bottom(),
    })
}

/// Smooth-scrolls the viewport so the section's top lands at the viewport top.
/// A missing element makes this a no-op.
pub fn scroll_to(id: SectionId) {
    let Some(el) = section_element(id) else {
        return;
    };
    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// Section named by the URL fragment, if any. Unknown fragments are ignored.
fn fragment_target() -> Option<SectionId> {
    let hash = web_sys::window()?.location().hash().ok()?;
    hash.strip_prefix('#')?.parse().ok()
}

/// Installs the active-section cell at the composition root, starting at the
/// hero banner.
pub fn provide_active_section() {
    provide_context(RwSignal::new(SectionId::Hero));
}

pub fn use_active_section() -> RwSignal<SectionId> {
    expect_context::<RwSignal<SectionId>>()
}

/// Wires the tracker to the page: one recomputation on mount (after honoring a
/// `#section` fragment), then one per window scroll event. The listener is
/// registered through `use_event_listener`, which releases it when the owning
/// scope is disposed. The walk is O(6) per tick, cheap enough to run
/// unthrottled.
pub fn use_section_observer() {
    let active = use_active_section();
    let refresh = move || {
        let current = active.get_untracked();
        let next = recompute(current, measured_bounds);
        if next != current {
            log::debug!("active section {current} -> {next}");
            active.set(next);
        }
    };

    Effect::new(move |_| {
        if let Some(target) = fragment_target() {
            scroll_to(target);
        }
        refresh();
    });

    let _cleanup = use_event_listener(use_window(), ev::scroll, move |_| refresh());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(top: f64, bottom: f64) -> Bounds {
        Bounds { top, bottom }
    }

    // A page-like layout positioned so `section` straddles the probe line.
    fn layout_with_at_probe(section: SectionId) -> impl FnMut(SectionId) -> Option<Bounds> {
        let offset = SectionId::ALL
            .into_iter()
            .position(|id| id == section)
            .unwrap() as f64
            * 600.0;
        move |id| {
            let index = SectionId::ALL.into_iter().position(|i| i == id).unwrap() as f64;
            let top = index * 600.0 - offset;
            Some(bounds(top, top + 600.0))
        }
    }

    #[test]
    fn declared_order_matches_page_layout() {
        let ids: Vec<&str> = SectionId::ALL.into_iter().map(SectionId::as_str).collect();
        assert_eq!(
            ids,
            ["hero", "about", "skills", "experience", "education", "contact"]
        );
    }

    #[test]
    fn resolves_the_section_spanning_the_probe_line() {
        for section in SectionId::ALL {
            let found = section_at_probe(layout_with_at_probe(section));
            assert_eq!(found, Some(section));
        }
    }

    #[test]
    fn probe_line_is_inclusive_on_both_edges() {
        let at_top = |_| Some(bounds(NAV_PROBE_Y, NAV_PROBE_Y + 500.0));
        assert_eq!(section_at_probe(at_top), Some(SectionId::Hero));

        let at_bottom = |_| Some(bounds(NAV_PROBE_Y - 500.0, NAV_PROBE_Y));
        assert_eq!(section_at_probe(at_bottom), Some(SectionId::Hero));
    }

    #[test]
    fn first_declared_section_wins_when_boundaries_coincide() {
        // Skills and Experience both claim the probe line.
        let found = section_at_probe(|id| match id {
            SectionId::Skills => Some(bounds(0.0, 100.0)),
            SectionId::Experience => Some(bounds(100.0, 700.0)),
            _ => None,
        });
        assert_eq!(found, Some(SectionId::Skills));
    }

    #[test]
    fn unrendered_sections_are_skipped() {
        let found = section_at_probe(|id| match id {
            SectionId::Hero => None,
            SectionId::About => None,
            _ => Some(bounds(50.0, 650.0)),
        });
        assert_eq!(found, Some(SectionId::Skills));
    }

    #[test]
    fn keeps_current_section_when_nothing_qualifies() {
        // Scrolled into a gap: everything is above or below the probe line.
        let gap = |id| match id {
            SectionId::Hero => Some(bounds(-700.0, -100.0)),
            _ => Some(bounds(300.0, 900.0)),
        };
        assert_eq!(section_at_probe(gap), None);
        assert_eq!(recompute(SectionId::Education, gap), SectionId::Education);
    }

    #[test]
    fn recompute_moves_to_the_qualifying_section() {
        let next = recompute(SectionId::Hero, layout_with_at_probe(SectionId::Contact));
        assert_eq!(next, SectionId::Contact);
    }

    #[test]
    fn ids_round_trip_through_strings() {
        for id in SectionId::ALL {
            assert_eq!(id.as_str().parse::<SectionId>(), Ok(id));
        }
    }

    #[test]
    fn unknown_ids_are_rejected() {
        assert!("projects".parse::<SectionId>().is_err());
        assert!("".parse::<SectionId>().is_err());
        assert!("Hero".parse::<SectionId>().is_err());
    }
}
