use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::story::{Customization, PersonalInfo, Story, TimelineEvent, WritingStyle};

/// Immutable, publicly readable copy of a story's presentation data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareSnapshot {
    pub share_id: String,
    pub story_id: String,
    pub title: String,
    pub draft: String,
    pub created_at: DateTime<Utc>,
    pub style: WritingStyle,
    pub personal: PersonalInfo,
    pub customization: Customization,
    pub timeline: Vec<TimelineEvent>,
}

impl ShareSnapshot {
    /// Projects a story plus the chosen draft into a snapshot keyed by `share_id`.
    pub fn project(
        share_id: &str,
        story_id: &str,
        story: &Story,
        draft: &str,
        style: WritingStyle,
    ) -> Self {
        Self {
            share_id: share_id.to_string(),
            story_id: story_id.to_string(),
            title: story.display_title().to_string(),
            draft: draft.to_string(),
            created_at: Utc::now(),
            style,
            personal: story.personal.clone(),
            customization: story.customization.clone(),
            timeline: story.timeline.clone(),
        }
    }
}
