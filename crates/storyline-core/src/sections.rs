//! Page section tree, active-section tracking and scroll progress.

use log::trace;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
    pub children: &'static [Section],
}

impl Section {
    pub const fn leaf(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            children: &[],
        }
    }

    pub const fn group(
        id: &'static str,
        label: &'static str,
        children: &'static [Section],
    ) -> Self {
        Self {
            id,
            label,
            children,
        }
    }
}

const fn trace_and_interactive(trace: &'static str, interactive: &'static str) -> [Section; 2] {
    [
        Section::leaf(trace, "Trace"),
        Section::leaf(interactive, "Interactive"),
    ]
}

const CLAUDEMD_CHILDREN: [Section; 2] =
    trace_and_interactive("story-claudemd-trace", "story-claudemd-interactive");
const TESTING_CHILDREN: [Section; 2] =
    trace_and_interactive("story-testing-trace", "story-testing-interactive");
const MCP_CHILDREN: [Section; 2] =
    trace_and_interactive("story-mcp-trace", "story-mcp-interactive");
const LEGACY_CHILDREN: [Section; 2] =
    trace_and_interactive("story-legacy-trace", "story-legacy-interactive");

pub static SECTIONS: &[Section] = &[
    Section::leaf("hero", "Intro"),
    Section::group("story-claudemd", "CLAUDE.md", &CLAUDEMD_CHILDREN),
    Section::group("story-testing", "Testing", &TESTING_CHILDREN),
    Section::group("story-mcp", "MCP", &MCP_CHILDREN),
    Section::group("story-legacy", "Legacy", &LEGACY_CHILDREN),
    Section::leaf("vignettes", "Vignettes"),
    Section::leaf("perspectives", "Perspectives"),
    Section::leaf("sales-builder", "Talk Track"),
    Section::leaf("closing", "Closing"),
];

/// Every id in document order, each group followed by its children.
pub fn flattened_ids(sections: &'static [Section]) -> impl Iterator<Item = &'static str> {
    sections.iter().flat_map(|section| {
        core::iter::once(section.id).chain(section.children.iter().map(|child| child.id))
    })
}

/// Top-level id owning `id`; a top-level id maps to itself.
pub fn parent_of(sections: &'static [Section], id: &str) -> Option<&'static str> {
    sections.iter().find_map(|section| {
        let owns = section.id == id || section.children.iter().any(|child| child.id == id);
        owns.then_some(section.id)
    })
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DotState {
    Exact,
    ParentActive,
    Inactive,
}

/// Remembers the section that most recently started intersecting.
#[derive(Clone, Debug)]
pub struct ActiveSectionTracker {
    sections: &'static [Section],
    active: Option<&'static str>,
}

impl Default for ActiveSectionTracker {
    fn default() -> Self {
        Self::new(SECTIONS)
    }
}

impl ActiveSectionTracker {
    pub const fn new(sections: &'static [Section]) -> Self {
        Self {
            sections,
            active: None,
        }
    }

    pub fn active(&self) -> Option<&'static str> {
        self.active
    }

    pub fn active_parent(&self) -> Option<&'static str> {
        self.active.and_then(|id| parent_of(self.sections, id))
    }

    /// Returns true when the active section changed. Unknown ids are ignored.
    pub fn observe(&mut self, id: &str, intersecting: bool) -> bool {
        if !intersecting {
            return false;
        }
        let Some(known) = flattened_ids(self.sections).find(|candidate| *candidate == id) else {
            trace!("sections: ignoring unknown id={id}");
            return false;
        };
        if self.active == Some(known) {
            return false;
        }

        self.active = Some(known);
        true
    }

    pub fn dot_state(&self, id: &str) -> DotState {
        if self.active == Some(id) {
            DotState::Exact
        } else if self.active_parent() == Some(id) {
            DotState::ParentActive
        } else {
            DotState::Inactive
        }
    }

    /// Children are listed only while their group is active.
    pub fn expanded(&self, section: &Section) -> bool {
        !section.children.is_empty() && self.active_parent() == Some(section.id)
    }
}

/// Page scroll position in `[0, 1]`.
pub fn scroll_fraction(scroll_top: f32, scroll_height: f32, viewport_height: f32) -> f32 {
    if !scroll_top.is_finite() {
        return 0.0;
    }
    let range = scroll_height - viewport_height;
    if range <= 0.0 || !range.is_finite() {
        return 0.0;
    }
    (scroll_top / range).clamp(0.0, 1.0)
}
