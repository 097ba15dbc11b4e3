/// Compiled-in reference content. Loaded once, never mutated.
use crate::model::{FocusArea, Guidance, Insights, ProcessProfile, ProjectType, Topic, TopicKey};

static RISK: Topic = Topic {
    key: TopicKey::Risk,
    title: "Risk Management",
    pmbok: "PMBOK 7 emphasizes risk identification, qualitative and quantitative analysis, and continuous monitoring.",
    prince2: "PRINCE2 integrates risk management into themes, focusing on risk ownership and tolerance.",
    iso: "ISO 21500/21502 highlights risk as part of project context and requires a documented risk management approach.",
};

static STAKEHOLDERS: Topic = Topic {
    key: TopicKey::Stakeholders,
    title: "Stakeholder Engagement",
    pmbok: "PMBOK 7: Stakeholder engagement is a key performance domain with strategies for communication and involvement.",
    prince2: "PRINCE2: Stakeholders are managed via defined roles and responsibilities within governance structure.",
    iso: "ISO: Emphasizes stakeholder needs in defining objectives and success criteria.",
};

static PLANNING: Topic = Topic {
    key: TopicKey::Planning,
    title: "Planning / Tailoring",
    pmbok: "PMBOK 7 uses adaptive and predictive planning approaches depending on project environment.",
    prince2: "PRINCE2 relies on product-based planning technique ensuring clarity of deliverables.",
    iso: "ISO standards promote tailoring planning methods to organizational strategy and context.",
};

/// All topics in display order.
pub static TOPICS: [&Topic; 3] = [&RISK, &STAKEHOLDERS, &PLANNING];

pub fn topic(key: TopicKey) -> &'static Topic {
    match key {
        TopicKey::Risk => &RISK,
        TopicKey::Stakeholders => &STAKEHOLDERS,
        TopicKey::Planning => &PLANNING,
    }
}

pub const GLOBAL_INSIGHTS: Insights = Insights {
    similarities: &["All three emphasize risk, stakeholder, and governance."],
    differences: &[
        "PRINCE2 is process-heavy, PMBOK is principle-driven, ISO is high-level guidance.",
    ],
    unique_points: &[
        "PRINCE2 has themes and roles, PMBOK focuses on value delivery, ISO links project/program/portfolio management.",
    ],
};

pub fn topic_insights(key: TopicKey) -> Insights {
    match key {
        TopicKey::Risk => Insights {
            similarities: &["All standards require risk management to be documented."],
            differences: &[
                "PMBOK focuses on continuous monitoring, PRINCE2 on ownership, ISO on context.",
            ],
            unique_points: &["PRINCE2 uniquely defines 'risk tolerance'."],
        },
        TopicKey::Stakeholders => Insights {
            similarities: &["All standards emphasize importance of stakeholder engagement."],
            differences: &[
                "PMBOK focuses on strategies, PRINCE2 on governance, ISO on needs/objectives.",
            ],
            unique_points: &["PMBOK uniquely defines 'engagement strategies'."],
        },
        TopicKey::Planning => Insights {
            similarities: &["All require planning adapted to project type."],
            differences: &[
                "PMBOK uses adaptive/predictive, PRINCE2 product-based, ISO context-driven.",
            ],
            unique_points: &["PRINCE2 uniquely enforces 'product-based planning'."],
        },
    }
}

static AGILE: ProcessProfile = ProcessProfile {
    approach: "Iterative development with frequent deliverables and continuous feedback",
    processes: &[
        "Sprint planning and iterative delivery cycles",
        "Daily stand-ups and continuous stakeholder engagement",
        "Adaptive planning with regular retrospectives",
    ],
    guidance: Guidance {
        pmbok: "Use adaptive project life cycle and delivery performance domain",
        prince2: "Apply PRINCE2 Agile with flexible stage boundaries",
        iso: "Implement iterative planning and continuous improvement cycles",
    },
};

static WATERFALL: ProcessProfile = ProcessProfile {
    approach: "Sequential phase-based approach with formal stage gates",
    processes: &[
        "Comprehensive upfront planning and requirements gathering",
        "Sequential phase completion with formal approvals",
        "Detailed documentation and change control procedures",
    ],
    guidance: Guidance {
        pmbok: "Apply predictive life cycle and comprehensive planning",
        prince2: "Use staged delivery with formal project board reviews",
        iso: "Follow sequential project phases with defined deliverables",
    },
};

static HYBRID: ProcessProfile = ProcessProfile {
    approach: "Blended approach combining predictive planning with adaptive execution",
    processes: &[
        "High-level predictive planning with adaptive detailed planning",
        "Flexible stage gates with iterative development cycles",
        "Integrated change control with regular review points",
    ],
    guidance: Guidance {
        pmbok: "Combine predictive and adaptive approaches based on project needs",
        prince2: "Tailor processes with agile delivery within staged framework",
        iso: "Apply flexible methodology selection based on project characteristics",
    },
};

static RESEARCH: ProcessProfile = ProcessProfile {
    approach: "Exploratory approach with emphasis on learning and adaptation",
    processes: &[
        "Experimental iterations with knowledge management focus",
        "Flexible scope with regular feasibility assessments",
        "Stakeholder collaboration and knowledge sharing sessions",
    ],
    guidance: Guidance {
        pmbok: "Focus on uncertainty performance domain and adaptive planning",
        prince2: "Use exception planning and flexible business case management",
        iso: "Apply exploratory project management with emphasis on learning",
    },
};

pub fn profile(project_type: ProjectType) -> &'static ProcessProfile {
    match project_type {
        ProjectType::Agile => &AGILE,
        ProjectType::Waterfall => &WATERFALL,
        ProjectType::Hybrid => &HYBRID,
        ProjectType::Research => &RESEARCH,
    }
}

pub fn focus_recommendation(area: FocusArea) -> &'static str {
    match area {
        FocusArea::Risk => "Implement continuous risk review and adaptive risk responses",
        FocusArea::Stakeholder => "Use collaborative stakeholder engagement with regular feedback loops",
        FocusArea::Quality => "Apply iterative quality gates and continuous validation",
        FocusArea::Change => "Implement flexible change control with streamlined approval processes",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Tag;

    #[test]
    fn topic_table_follows_key_order() {
        assert_eq!(TOPICS.len(), TopicKey::ALL.len());
        for (entry, key) in TOPICS.iter().zip(TopicKey::ALL) {
            assert_eq!(entry.key, *key);
            assert_eq!(topic(*key), *entry);
        }
    }

    #[test]
    fn every_topic_has_insights() {
        for key in TopicKey::ALL {
            let insights = topic_insights(*key);
            assert!(!insights.similarities.is_empty());
            assert!(!insights.differences.is_empty());
            assert!(!insights.unique_points.is_empty());
            assert_ne!(insights, GLOBAL_INSIGHTS);
        }
    }

    #[test]
    fn every_profile_has_three_processes() {
        for project_type in ProjectType::ALL {
            assert_eq!(profile(*project_type).processes.len(), 3);
        }
    }
}
