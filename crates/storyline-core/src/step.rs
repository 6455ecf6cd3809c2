//! Step records and content-mode line classification.

/// How a step body is rendered.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ContentVariant {
    /// Patch-style lines, coloured by their leading marker.
    Diff,
    /// Log output, coloured by pass/fail keywords.
    Terminal,
    #[default]
    Text,
}

/// One unit of content in a navigator's fixed sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Step {
    pub label: &'static str,
    pub icon: &'static str,
    pub body: &'static str,
    pub variant: ContentVariant,
    /// Plain-language summary for non-technical readers.
    pub description: Option<&'static str>,
}

const DEFAULT_ICONS: [(&str, &str); 5] = [
    ("Understand", "\u{1F50D}"),
    ("Plan", "\u{1F4CB}"),
    ("Edit", "\u{270F}\u{FE0F}"),
    ("Test", "\u{2705}"),
    ("Ship", "\u{1F680}"),
];

impl Step {
    pub const fn new(label: &'static str, body: &'static str) -> Self {
        Self {
            label,
            icon: "",
            body,
            variant: ContentVariant::Text,
            description: None,
        }
    }

    pub const fn with_icon(mut self, icon: &'static str) -> Self {
        self.icon = icon;
        self
    }

    pub const fn with_variant(mut self, variant: ContentVariant) -> Self {
        self.variant = variant;
        self
    }

    pub const fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    /// Explicit icon, else the stock icon for well-known labels, else "".
    pub fn display_icon(&self) -> &'static str {
        if !self.icon.is_empty() {
            return self.icon;
        }

        DEFAULT_ICONS
            .iter()
            .find(|(label, _)| *label == self.label)
            .map(|(_, icon)| *icon)
            .unwrap_or("")
    }

    pub fn content(&self) -> StepContent<'static> {
        StepContent::new(self.body, self.variant)
    }
}

/// Colour role of one rendered body line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineTone {
    Normal,
    Added,
    Removed,
    Comment,
    Success,
    Failure,
    Highlight,
    /// Whole text body, wrapped by the renderer.
    Plain,
}

pub fn classify_line(variant: ContentVariant, line: &str) -> LineTone {
    match variant {
        ContentVariant::Diff => {
            if line.starts_with('+') {
                LineTone::Added
            } else if line.starts_with('-') {
                LineTone::Removed
            } else if line.starts_with("//") || line.starts_with('#') {
                LineTone::Comment
            } else {
                LineTone::Normal
            }
        }
        ContentVariant::Terminal => {
            if line.contains("PASS") || line.contains('\u{2713}') || line.contains("passing") {
                LineTone::Success
            } else if line.contains("FAIL") || line.contains('\u{2717}') || line.contains("error")
            {
                LineTone::Failure
            } else if line.starts_with('[') || line.contains("Coverage") {
                LineTone::Highlight
            } else {
                LineTone::Normal
            }
        }
        ContentVariant::Text => LineTone::Plain,
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ContentLine<'a> {
    pub text: &'a str,
    pub tone: LineTone,
}

/// Iterator over the rendered lines of a step body. Text bodies come out as a
/// single `Plain` block.
#[derive(Clone, Debug)]
pub struct StepContent<'a> {
    variant: ContentVariant,
    lines: core::str::Split<'a, char>,
    whole: Option<&'a str>,
}

impl<'a> StepContent<'a> {
    pub fn new(body: &'a str, variant: ContentVariant) -> Self {
        let whole = matches!(variant, ContentVariant::Text).then_some(body);
        Self {
            variant,
            lines: body.split('\n'),
            whole,
        }
    }
}

impl<'a> Iterator for StepContent<'a> {
    type Item = ContentLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if matches!(self.variant, ContentVariant::Text) {
            return self.whole.take().map(|text| ContentLine {
                text,
                tone: LineTone::Plain,
            });
        }

        let text = self.lines.next()?;
        Some(ContentLine {
            text,
            tone: classify_line(self.variant, text),
        })
    }
}
