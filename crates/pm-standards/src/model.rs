/// Closed tag types and the static record shapes they index.
///
/// Every lookup axis (topic, standard, project type, size, focus area) is an enum,
/// so the tables in `data` are matched exhaustively and a tag string either parses
/// into a known value or is rejected at the boundary.

/// A tag from a fixed, ordered set with a stable wire name and a display label.
pub trait Tag: Copy + Eq + 'static {
    /// All values in display order.
    const ALL: &'static [Self];

    /// Wire name, e.g. "risk".
    fn as_str(self) -> &'static str;

    /// Human-readable label, e.g. "Risk Management".
    fn label(self) -> &'static str;

    /// ASCII case-insensitive parse that ignores surrounding whitespace.
    fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(raw))
    }
}

/// Comma-separated wire names, for error messages.
pub fn available<T: Tag>() -> String {
    T::ALL
        .iter()
        .map(|tag| tag.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// One of the three compared project-management frameworks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standard {
    Pmbok,
    Prince2,
    Iso,
}

impl Standard {
    /// Label used on search cards.
    pub fn short_label(self) -> &'static str {
        match self {
            Standard::Pmbok => "PMBOK",
            Standard::Prince2 => "PRINCE2",
            Standard::Iso => "ISO",
        }
    }

    /// Label used in the standards block of a recommendation.
    pub fn integration_label(self) -> &'static str {
        match self {
            Standard::Pmbok => "PMBOK 7",
            Standard::Prince2 => "PRINCE2",
            Standard::Iso => "ISO 21500",
        }
    }
}

impl Tag for Standard {
    const ALL: &'static [Self] = &[Standard::Pmbok, Standard::Prince2, Standard::Iso];

    fn as_str(self) -> &'static str {
        match self {
            Standard::Pmbok => "pmbok",
            Standard::Prince2 => "prince2",
            Standard::Iso => "iso",
        }
    }

    /// Comparison table column heading.
    fn label(self) -> &'static str {
        match self {
            Standard::Pmbok => "PMBOK 7",
            Standard::Prince2 => "PRINCE2",
            Standard::Iso => "ISO 21500/21502",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicKey {
    Risk,
    Stakeholders,
    Planning,
}

impl Tag for TopicKey {
    const ALL: &'static [Self] = &[TopicKey::Risk, TopicKey::Stakeholders, TopicKey::Planning];

    fn as_str(self) -> &'static str {
        match self {
            TopicKey::Risk => "risk",
            TopicKey::Stakeholders => "stakeholders",
            TopicKey::Planning => "planning",
        }
    }

    fn label(self) -> &'static str {
        crate::data::topic(self).title
    }

    /// Topic keys are matched exactly, like the keys of the topic table.
    fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.as_str() == raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    Agile,
    Waterfall,
    Hybrid,
    Research,
}

impl Tag for ProjectType {
    const ALL: &'static [Self] = &[
        ProjectType::Agile,
        ProjectType::Waterfall,
        ProjectType::Hybrid,
        ProjectType::Research,
    ];

    fn as_str(self) -> &'static str {
        match self {
            ProjectType::Agile => "agile",
            ProjectType::Waterfall => "waterfall",
            ProjectType::Hybrid => "hybrid",
            ProjectType::Research => "research",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ProjectType::Agile => "Agile/Iterative",
            ProjectType::Waterfall => "Waterfall/Predictive",
            ProjectType::Hybrid => "Hybrid",
            ProjectType::Research => "Research & Development",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectSize {
    Small,
    Medium,
    Large,
}

impl Tag for ProjectSize {
    const ALL: &'static [Self] = &[ProjectSize::Small, ProjectSize::Medium, ProjectSize::Large];

    fn as_str(self) -> &'static str {
        match self {
            ProjectSize::Small => "small",
            ProjectSize::Medium => "medium",
            ProjectSize::Large => "large",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ProjectSize::Small => "Small",
            ProjectSize::Medium => "Medium",
            ProjectSize::Large => "Large",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusArea {
    Risk,
    Stakeholder,
    Quality,
    Change,
}

impl Tag for FocusArea {
    const ALL: &'static [Self] = &[
        FocusArea::Risk,
        FocusArea::Stakeholder,
        FocusArea::Quality,
        FocusArea::Change,
    ];

    fn as_str(self) -> &'static str {
        match self {
            FocusArea::Risk => "risk",
            FocusArea::Stakeholder => "stakeholder",
            FocusArea::Quality => "quality",
            FocusArea::Change => "change",
        }
    }

    fn label(self) -> &'static str {
        match self {
            FocusArea::Risk => "Risk Management",
            FocusArea::Stakeholder => "Stakeholder Engagement",
            FocusArea::Quality => "Quality Assurance",
            FocusArea::Change => "Change Control",
        }
    }
}

/// A subject area compared across the three standards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    pub key: TopicKey,
    pub title: &'static str,
    pub pmbok: &'static str,
    pub prince2: &'static str,
    pub iso: &'static str,
}

impl Topic {
    pub fn text(&self, standard: Standard) -> &'static str {
        match standard {
            Standard::Pmbok => self.pmbok,
            Standard::Prince2 => self.prince2,
            Standard::Iso => self.iso,
        }
    }
}

/// Per-standard guidance attached to a process profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guidance {
    pub pmbok: &'static str,
    pub prince2: &'static str,
    pub iso: &'static str,
}

impl Guidance {
    pub fn text(&self, standard: Standard) -> &'static str {
        match standard {
            Standard::Pmbok => self.pmbok,
            Standard::Prince2 => self.prince2,
            Standard::Iso => self.iso,
        }
    }
}

/// Base recommendation for one project type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessProfile {
    pub approach: &'static str,
    pub processes: &'static [&'static str],
    pub guidance: Guidance,
}

/// Similarities, differences and unique points, either global or for one topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Insights {
    pub similarities: &'static [&'static str],
    pub differences: &'static [&'static str],
    pub unique_points: &'static [&'static str],
}

impl Insights {
    pub const EMPTY: Insights = Insights {
        similarities: &[],
        differences: &[],
        unique_points: &[],
    };

    pub fn is_empty(&self) -> bool {
        self.similarities.is_empty() && self.differences.is_empty() && self.unique_points.is_empty()
    }
}
