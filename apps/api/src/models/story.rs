//! Story record: structured autobiographical notes plus per-style drafts.
//!
//! Stored records are deserialized on top of `Story::default()` (container-level
//! `#[serde(default)]`), so a partially populated document always loads with every
//! field present.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::id::new_event_id;

// ────────────────────────────────────────────────────────────────────────────
// Writing style
// ────────────────────────────────────────────────────────────────────────────

/// The narrative voices a draft can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WritingStyle {
    #[default]
    Emotional,
    Professional,
    Simple,
    Poetic,
}

impl WritingStyle {
    pub const ALL: [WritingStyle; 4] = [
        WritingStyle::Emotional,
        WritingStyle::Professional,
        WritingStyle::Simple,
        WritingStyle::Poetic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WritingStyle::Emotional => "emotional",
            WritingStyle::Professional => "professional",
            WritingStyle::Simple => "simple",
            WritingStyle::Poetic => "poetic",
        }
    }

    /// Capitalized form used in human-facing headers ("Poetic draft").
    pub fn label(&self) -> &'static str {
        match self {
            WritingStyle::Emotional => "Emotional",
            WritingStyle::Professional => "Professional",
            WritingStyle::Simple => "Simple",
            WritingStyle::Poetic => "Poetic",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.as_str() == s)
    }
}

impl fmt::Display for WritingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Record parts
// ────────────────────────────────────────────────────────────────────────────

/// Client documents send `null` for text they never filled in; it loads as "".
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    #[serde(deserialize_with = "null_as_empty")]
    pub full_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub date_of_birth: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub birthplace: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub background: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionContent {
    #[serde(deserialize_with = "null_as_empty")]
    pub summary: String,
    pub highlights: Vec<String>,
}

impl Default for SectionContent {
    fn default() -> Self {
        Self {
            summary: String::new(),
            highlights: vec![String::new()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body for creating a timeline event; the id is assigned server-side.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewTimelineEvent {
    pub title: String,
    pub date: String,
    pub description: String,
    pub image_url: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimelineEventPatch {
    pub title: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub notes: Option<String>,
}

impl TimelineEvent {
    fn apply(&mut self, patch: TimelineEventPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if patch.image_url.is_some() {
            self.image_url = patch.image_url;
        }
        if patch.notes.is_some() {
            self.notes = patch.notes;
        }
    }
}

/// One draft per writing style. A struct rather than a map so that every style
/// always has an entry; absent keys load as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryDrafts {
    pub emotional: String,
    pub professional: String,
    pub simple: String,
    pub poetic: String,
}

impl StoryDrafts {
    pub fn get(&self, style: WritingStyle) -> &str {
        match style {
            WritingStyle::Emotional => &self.emotional,
            WritingStyle::Professional => &self.professional,
            WritingStyle::Simple => &self.simple,
            WritingStyle::Poetic => &self.poetic,
        }
    }

    pub fn set(&mut self, style: WritingStyle, content: String) {
        let slot = match style {
            WritingStyle::Emotional => &mut self.emotional,
            WritingStyle::Professional => &mut self.professional,
            WritingStyle::Simple => &mut self.simple,
            WritingStyle::Poetic => &mut self.poetic,
        };
        *slot = content;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customization {
    #[serde(deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub subtitle: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub cover_image: String,
    /// Font role id chosen in the editor ("serif", "sans", ...).
    #[serde(deserialize_with = "null_as_empty")]
    pub primary_font: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub quote: String,
}

impl Default for Customization {
    fn default() -> Self {
        Self {
            title: "My Autobiography".to_string(),
            subtitle: "A journey of growth".to_string(),
            cover_image: String::new(),
            primary_font: "serif".to_string(),
            quote: String::new(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Story
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Story {
    pub personal: PersonalInfo,
    pub childhood: SectionContent,
    pub education: SectionContent,
    pub career: SectionContent,
    pub relationships: SectionContent,
    pub challenges: SectionContent,
    pub dreams: SectionContent,
    pub timeline: Vec<TimelineEvent>,
    pub story_drafts: StoryDrafts,
    pub selected_style: WritingStyle,
    pub customization: Customization,
    pub last_updated: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shareable_id: Option<String>,
}

impl Default for Story {
    fn default() -> Self {
        Self {
            personal: PersonalInfo::default(),
            childhood: SectionContent::default(),
            education: SectionContent::default(),
            career: SectionContent::default(),
            relationships: SectionContent::default(),
            challenges: SectionContent::default(),
            dreams: SectionContent::default(),
            timeline: Vec::new(),
            story_drafts: StoryDrafts::default(),
            selected_style: WritingStyle::default(),
            customization: Customization::default(),
            last_updated: Utc::now(),
            shareable_id: None,
        }
    }
}

impl Story {
    /// Title shown on exports and share pages: customization title, then the
    /// author's name, then a generic fallback.
    pub fn display_title(&self) -> &str {
        if !self.customization.title.is_empty() {
            &self.customization.title
        } else if !self.personal.full_name.is_empty() {
            &self.personal.full_name
        } else {
            "Autobiography"
        }
    }

    /// Appends a timeline event under a freshly minted id.
    pub fn add_timeline_event(&mut self, event: NewTimelineEvent) -> TimelineEvent {
        let created = TimelineEvent {
            id: new_event_id(),
            title: event.title,
            date: event.date,
            description: event.description,
            image_url: event.image_url,
            notes: event.notes,
        };
        self.timeline.push(created.clone());
        created
    }

    /// Patches the event with `id` in place. Returns `None` if no event has that id.
    pub fn update_timeline_event(
        &mut self,
        id: &str,
        patch: TimelineEventPatch,
    ) -> Option<&TimelineEvent> {
        let event = self.timeline.iter_mut().find(|e| e.id == id)?;
        event.apply(patch);
        Some(&*event)
    }

    /// Removes the event with `id`. Returns whether anything was removed.
    pub fn remove_timeline_event(&mut self, id: &str) -> bool {
        let before = self.timeline.len();
        self.timeline.retain(|e| e.id != id);
        self.timeline.len() != before
    }

    pub fn touch(&mut self) {
        self.last_updated = Utc::now();
    }
}

/// Partial story update. Fields present in the patch replace the stored value
/// wholesale (arrays included); absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoryPatch {
    pub personal: Option<PersonalInfo>,
    pub childhood: Option<SectionContent>,
    pub education: Option<SectionContent>,
    pub career: Option<SectionContent>,
    pub relationships: Option<SectionContent>,
    pub challenges: Option<SectionContent>,
    pub dreams: Option<SectionContent>,
    pub timeline: Option<Vec<TimelineEvent>>,
    pub story_drafts: Option<StoryDrafts>,
    pub selected_style: Option<WritingStyle>,
    pub customization: Option<Customization>,
    pub shareable_id: Option<String>,
}

impl StoryPatch {
    pub fn apply(self, story: &mut Story) {
        fn replace<T>(slot: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *slot = value;
            }
        }

        replace(&mut story.personal, self.personal);
        replace(&mut story.childhood, self.childhood);
        replace(&mut story.education, self.education);
        replace(&mut story.career, self.career);
        replace(&mut story.relationships, self.relationships);
        replace(&mut story.challenges, self.challenges);
        replace(&mut story.dreams, self.dreams);
        replace(&mut story.timeline, self.timeline);
        replace(&mut story.story_drafts, self.story_drafts);
        replace(&mut story.selected_style, self.selected_style);
        replace(&mut story.customization, self.customization);
        if self.shareable_id.is_some() {
            story.shareable_id = self.shareable_id;
        }
        story.touch();
    }
}
