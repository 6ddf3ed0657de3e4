// Prompt text for draft generation. All model calls go through llm_client.

use std::fmt::Write;

use crate::models::story::{SectionContent, Story, WritingStyle};

/// System prompt for autobiography drafting.
pub const DRAFT_SYSTEM: &str = "You are an expert autobiographical writer. \
    You write warm, cohesive first-person prose from structured notes. \
    Respond with the chapter text only, without headings or commentary.";

/// Placeholder paragraph returned when there is nothing to write from.
pub const DEFAULT_PARAGRAPH: &str = "Your memories are almost ready to bloom. \
    Add more detail in each section, then regenerate for a richer narrative.";

/// One tone instruction per writing style.
pub fn style_tone(style: WritingStyle) -> &'static str {
    match style {
        WritingStyle::Emotional => {
            "Write in a heartfelt, intimate voice that emphasizes emotions, vulnerability, and sensory details."
        }
        WritingStyle::Professional => {
            "Write in an articulate, polished voice suitable for publication or professional audiences."
        }
        WritingStyle::Simple => {
            "Write in a clear, friendly, and accessible tone that any reader can understand."
        }
        WritingStyle::Poetic => {
            "Write with lyrical flow, metaphors, and rhythmic language that feels poetic and reflective."
        }
    }
}

fn section_block(out: &mut String, title: &str, section: &SectionContent) {
    let _ = writeln!(out, "### {title}");
    let _ = writeln!(out, "Summary: {}", section.summary);
    out.push_str("Highlights:\n");
    let highlights = section.highlights.iter().filter(|h| !h.is_empty());
    for (i, highlight) in highlights.enumerate() {
        let _ = writeln!(out, "{}. {highlight}", i + 1);
    }
    out.push('\n');
}

fn timeline_block(story: &Story) -> String {
    if story.timeline.is_empty() {
        return "No timeline events provided.".to_string();
    }
    story
        .timeline
        .iter()
        .enumerate()
        .map(|(i, event)| {
            let date = if event.date.is_empty() {
                "undated"
            } else {
                event.date.as_str()
            };
            let mut line = format!("{}. {} ({date}) - {}", i + 1, event.title, event.description);
            if let Some(notes) = event.notes.as_deref().filter(|n| !n.is_empty()) {
                let _ = write!(line, " | Notes: {notes}");
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the user prompt for one style from the story's structured notes.
pub fn build_prompt(story: &Story, style: WritingStyle) -> String {
    let mut out = String::with_capacity(2048);
    let _ = writeln!(
        out,
        "Using the structured notes below, craft a cohesive autobiography chapter in the {} style.\n",
        style.as_str().to_uppercase()
    );
    let _ = writeln!(out, "{}\n", style_tone(style));
    out.push_str(
        "Focus on narrative flow, transitions between periods of life, and reflective insights. \
        Sprinkle in details from the timeline where appropriate. Write in first person.\n\n",
    );

    let p = &story.personal;
    out.push_str("### Personal Information\n");
    let _ = writeln!(out, "Name: {}", p.full_name);
    let _ = writeln!(out, "Date of birth: {}", p.date_of_birth);
    let _ = writeln!(out, "Birthplace: {}", p.birthplace);
    let _ = writeln!(out, "Background: {}\n", p.background);

    section_block(&mut out, "Childhood", &story.childhood);
    section_block(&mut out, "Education", &story.education);
    section_block(&mut out, "Career", &story.career);
    section_block(&mut out, "Family & Relationships", &story.relationships);
    section_block(&mut out, "Challenges & Lessons", &story.challenges);
    section_block(&mut out, "Dreams & Future", &story.dreams);

    out.push_str("### Timeline\n");
    out.push_str(&timeline_block(story));
    out.push_str("\n\nInstructions:\n");
    out.push_str("- Produce 6-8 paragraphs.\n");
    out.push_str("- Open with a compelling scene or reflection.\n");
    out.push_str("- Close with forward-looking sentiments tied to dreams and beliefs.");
    out
}
