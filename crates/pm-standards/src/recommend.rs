/// Process recommendation generator.
///
/// A deterministic table lookup: the base profile for the project type plus the
/// canned line for each requested focus area. Size only feeds the heading.
use tracing::debug;

use crate::data;
use crate::error::AppError;
use crate::model::{FocusArea, ProcessProfile, ProjectSize, ProjectType, Tag};

/// What to do with a focus area requested more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPolicy {
    /// Keep the first occurrence only.
    #[default]
    Dedupe,
    /// Emit one line per occurrence.
    KeepRepeats,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub project_type: ProjectType,
    pub size: ProjectSize,
    pub profile: &'static ProcessProfile,
    /// Empty means the focus section is omitted.
    pub focus_recommendations: Vec<&'static str>,
}

impl Recommendation {
    pub fn heading(&self) -> String {
        format!(
            "Recommended Process for {} {} Project",
            self.project_type.label(),
            self.size.label()
        )
    }
}

pub fn generate_recommendation<'a, I>(
    project_type: ProjectType,
    size: ProjectSize,
    focus_areas: I,
    policy: FocusPolicy,
) -> Recommendation
where
    I: IntoIterator<Item = &'a str>,
{
    let mut areas: Vec<FocusArea> = Vec::new();
    for raw in focus_areas {
        let Some(area) = FocusArea::parse(raw) else {
            debug!(tag = raw, "ignoring unknown focus area");
            continue;
        };
        if policy == FocusPolicy::Dedupe && areas.contains(&area) {
            continue;
        }
        areas.push(area);
    }

    Recommendation {
        project_type,
        size,
        profile: data::profile(project_type),
        focus_recommendations: areas
            .into_iter()
            .map(data::focus_recommendation)
            .collect(),
    }
}

/// Parse the type and size tags, then generate.
///
/// Unknown type or size tags are rejected; unknown focus tags are dropped.
pub fn generate_from_tags<'a, I>(
    project_type: &str,
    size: &str,
    focus_areas: I,
    policy: FocusPolicy,
) -> Result<Recommendation, AppError>
where
    I: IntoIterator<Item = &'a str>,
{
    let project_type = ProjectType::parse(project_type)
        .ok_or_else(|| AppError::UnknownProjectType(project_type.to_string()))?;
    let size =
        ProjectSize::parse(size).ok_or_else(|| AppError::UnknownProjectSize(size.to_string()))?;
    Ok(generate_recommendation(project_type, size, focus_areas, policy))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_FOCUS: [&str; 0] = [];

    #[test]
    fn no_focus_areas_gives_base_profile_only() {
        let rec = generate_from_tags("agile", "small", NO_FOCUS, FocusPolicy::Dedupe).unwrap();
        assert_eq!(rec.profile, data::profile(ProjectType::Agile));
        assert_eq!(
            rec.profile.approach,
            "Iterative development with frequent deliverables and continuous feedback"
        );
        assert!(rec.focus_recommendations.is_empty());
        assert_eq!(rec.heading(), "Recommended Process for Agile/Iterative Small Project");
    }

    #[test]
    fn focus_lines_follow_request_order() {
        let rec =
            generate_from_tags("agile", "small", ["risk", "quality"], FocusPolicy::Dedupe).unwrap();
        assert_eq!(
            rec.focus_recommendations,
            vec![
                "Implement continuous risk review and adaptive risk responses",
                "Apply iterative quality gates and continuous validation",
            ]
        );

        let reversed =
            generate_from_tags("agile", "small", ["quality", "risk"], FocusPolicy::Dedupe).unwrap();
        assert_eq!(reversed.focus_recommendations[0], rec.focus_recommendations[1]);
    }

    #[test]
    fn unknown_focus_tags_are_dropped() {
        let rec = generate_from_tags("hybrid", "large", ["budget"], FocusPolicy::Dedupe).unwrap();
        assert_eq!(rec.profile, data::profile(ProjectType::Hybrid));
        assert!(rec.focus_recommendations.is_empty());

        let mixed =
            generate_from_tags("hybrid", "large", ["budget", "change"], FocusPolicy::Dedupe)
                .unwrap();
        assert_eq!(mixed.focus_recommendations.len(), 1);
    }

    #[test]
    fn repeats_follow_policy() {
        let focus = ["risk", "risk", "change", "RISK"];
        let deduped =
            generate_recommendation(ProjectType::Research, ProjectSize::Medium, focus, FocusPolicy::Dedupe);
        assert_eq!(deduped.focus_recommendations.len(), 2);

        let repeated = generate_recommendation(
            ProjectType::Research,
            ProjectSize::Medium,
            focus,
            FocusPolicy::KeepRepeats,
        );
        assert_eq!(repeated.focus_recommendations.len(), 4);
        assert!(repeated.focus_recommendations.iter().all(|line| !line.is_empty()));
    }

    #[test]
    fn size_changes_heading_only() {
        let small = generate_from_tags("waterfall", "small", ["risk"], FocusPolicy::Dedupe).unwrap();
        let large = generate_from_tags("waterfall", "large", ["risk"], FocusPolicy::Dedupe).unwrap();
        assert_eq!(small.profile, large.profile);
        assert_eq!(small.focus_recommendations, large.focus_recommendations);
        assert_ne!(small.heading(), large.heading());
    }

    #[test]
    fn unknown_type_is_an_error() {
        let err = generate_from_tags("scrumfall", "small", NO_FOCUS, FocusPolicy::Dedupe).unwrap_err();
        assert!(matches!(err, AppError::UnknownProjectType(ref t) if t == "scrumfall"));
    }

    #[test]
    fn unknown_size_is_an_error() {
        let err = generate_from_tags("agile", "huge", NO_FOCUS, FocusPolicy::Dedupe).unwrap_err();
        assert!(matches!(err, AppError::UnknownProjectSize(_)));
    }
}
