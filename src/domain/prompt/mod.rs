//! Prompt Synthesizer.
//!
//! Turns a validated request payload plus a [`PromptTemplate`] into the
//! system prompt and user prompt sent to the model. Pure string
//! construction; no I/O.

mod document;
mod format;
mod template;

pub use document::{PromptDocument, Section, Table};
pub use format::{format_currency, format_number};
pub use template::{ModelTier, PromptTemplate};

/// A validated request that can describe itself as prompt sections.
pub trait PromptPayload {
    /// Builds the ordered document for this payload.
    fn document(&self) -> PromptDocument;
}

/// The synthesized prompt pair for one AI call.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesizedPrompt {
    pub template: PromptTemplate,
    pub system_prompt: String,
    pub prompt: String,
}

/// Assembles the prompt for `payload` under `template`.
///
/// Deterministic: the same payload and template always produce the same text.
pub fn synthesize<P>(payload: &P, template: PromptTemplate) -> SynthesizedPrompt
where
    P: PromptPayload + ?Sized,
{
    let prompt = payload
        .document()
        .closing(template.response_instruction())
        .render();
    SynthesizedPrompt {
        template,
        system_prompt: template.system_prompt(),
        prompt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Notes(Option<&'static str>);

    impl PromptPayload for Notes {
        fn document(&self) -> PromptDocument {
            PromptDocument::new()
                .intro("Summarise the notes.")
                .section(Section::new("Notes").text(self.0))
        }
    }

    #[test]
    fn synthesize_appends_response_instruction() {
        let out = synthesize(&Notes(Some("called GP")), PromptTemplate::CaseNotes);
        assert!(out.prompt.starts_with("Summarise the notes."));
        assert!(out.prompt.contains("## Notes\ncalled GP"));
        assert!(out.prompt.ends_with(PromptTemplate::CaseNotes.output_contract()));
        assert_eq!(out.system_prompt, PromptTemplate::CaseNotes.system_prompt());
    }

    #[test]
    fn synthesize_is_deterministic() {
        let a = synthesize(&Notes(Some("x")), PromptTemplate::CaseNotes);
        let b = synthesize(&Notes(Some("x")), PromptTemplate::CaseNotes);
        assert_eq!(a, b);
    }

    #[test]
    fn synthesize_omits_absent_section() {
        let out = synthesize(&Notes(None), PromptTemplate::CaseNotes);
        assert!(!out.prompt.contains("## Notes"));
    }
}
