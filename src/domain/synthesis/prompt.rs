//! Prompt composer.
//!
//! Builds the system instruction for a synthesis call. The current
//! presentation, if any, is embedded as pretty-printed JSON so the model can
//! edit it instead of starting over.

use serde_json::json;

use super::UserTurn;
use crate::domain::presentation::Presentation;

/// Placeholder image service advertised to the model for `imageUrl` values.
pub const PLACEHOLDER_IMAGE_BASE: &str = "https://via.placeholder.com/800x600?text=";

const ROLE_DIRECTIVE: &str = "You are a presentation assistant. Create or edit slide \
presentations based on user requests. Respond with a short `message` explaining what you \
created or changed, and the complete `presentation`.";

const CREATE_DIRECTIVE: &str = "Create a new presentation based on the user's request.";

const EDIT_DIRECTIVE: &str = "Edit this presentation based on the user's latest request. \
Keep the parts the user did not ask to change and return the whole updated presentation; \
do not start over.";

/// Instruction payload for one synthesis call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt {
    pub system_instruction: String,
    pub messages: Vec<UserTurn>,
}

/// Stateless composer for synthesis prompts.
pub struct PromptComposer;

impl PromptComposer {
    /// Composes the system instruction and message list.
    pub fn compose(turns: Vec<UserTurn>, current: Option<&Presentation>) -> ComposedPrompt {
        let task = match current {
            Some(presentation) => format!(
                "Current presentation:\n{:#}\n\n{}",
                json!(presentation),
                EDIT_DIRECTIVE
            ),
            None => CREATE_DIRECTIVE.to_string(),
        };

        let system_instruction = format!(
            "{}\n{}\n{}",
            ROLE_DIRECTIVE,
            task,
            Self::image_guidance()
        );

        ComposedPrompt {
            system_instruction,
            messages: turns,
        }
    }

    fn image_guidance() -> String {
        format!(
            "You can also add an 'imageUrl' property to any slide object. \
             Use placeholder URLs of the form '{}IMAGE_DESCRIPTION' where \
             IMAGE_DESCRIPTION is a URL-encoded description of the desired image.",
            PLACEHOLDER_IMAGE_BASE
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presentation::Slide;
    use crate::domain::synthesis::sanitize;
    use serde_json::json;

    fn turns(texts: &[&str]) -> Vec<UserTurn> {
        let entries: Vec<_> = texts
            .iter()
            .map(|t| json!({"role": "user", "content": t}))
            .collect();
        sanitize(&entries)
    }

    fn deck() -> Presentation {
        Presentation::new(
            "Bees",
            vec![Slide::new("Pollination", vec!["Flowers".to_string()]).unwrap()],
        )
        .unwrap()
    }

    #[test]
    fn without_presentation_asks_for_new_deck() {
        let prompt = PromptComposer::compose(turns(&["Make a deck about bees"]), None);

        assert!(prompt.system_instruction.contains(CREATE_DIRECTIVE));
        assert!(!prompt.system_instruction.contains("Current presentation"));
    }

    #[test]
    fn with_presentation_embeds_document_and_asks_for_edit() {
        let current = deck();
        let prompt = PromptComposer::compose(turns(&["Add a slide about honey"]), Some(&current));

        assert!(prompt.system_instruction.contains("Current presentation:"));
        assert!(prompt.system_instruction.contains("\"title\": \"Bees\""));
        assert!(prompt.system_instruction.contains("\"Pollination\""));
        assert!(prompt.system_instruction.contains("do not start over"));
        assert!(!prompt.system_instruction.contains(CREATE_DIRECTIVE));
    }

    #[test]
    fn always_mentions_image_placeholder_convention() {
        for current in [None, Some(deck())] {
            let prompt = PromptComposer::compose(turns(&["x"]), current.as_ref());
            assert!(prompt.system_instruction.contains("imageUrl"));
            assert!(prompt.system_instruction.contains(PLACEHOLDER_IMAGE_BASE));
            assert!(prompt.system_instruction.contains("URL-encoded"));
        }
    }

    #[test]
    fn passes_messages_through_unchanged() {
        let input = turns(&["first", "second"]);
        let prompt = PromptComposer::compose(input.clone(), None);
        assert_eq!(prompt.messages, input);
    }

    #[test]
    fn composition_is_deterministic() {
        let current = deck();
        let a = PromptComposer::compose(turns(&["edit"]), Some(&current));
        let b = PromptComposer::compose(turns(&["edit"]), Some(&current));
        assert_eq!(a, b);
    }
}
