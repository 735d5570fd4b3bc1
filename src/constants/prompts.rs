//! Prompt templates for the four generation tasks.
//!
//! Every builder is a pure function: callers validate their input first, the
//! builder only embeds it into a fixed instruction template. Keeping these
//! together makes the full set of instructions sent to the model reviewable
//! in one place.

/// Step-by-step assignment solution, rendered as Markdown.
pub fn assignment_prompt(assignment_text: &str) -> String {
    format!(
        r#"You are an expert assignment solver. Analyze the following assignment text and provide a comprehensive, step-by-step solution.
Format the response in clean, structured Markdown.
Include explanations for each step and a final summary.

Assignment Text:
{assignment_text}"#
    )
}

/// Tutoring reply to a user message, grounded in optional PDF context.
///
/// The praise instruction is what the chat handler's affirmation check keys
/// off: a correct user answer is expected to be acknowledged in the reply.
pub fn chat_prompt(message: &str, pdf_text: Option<&str>) -> String {
    let context = pdf_text
        .filter(|text| !text.is_empty())
        .unwrap_or("No PDF context provided.");

    format!(
        r#"You are an expert AI tutor for the SmartStudy AI platform.

User Question: {message}

Context from PDF (if provided):
{context}

Instructions:
1. Be helpful, concise, and educational.
2. If the user asks about the PDF, base your answer strictly on the context provided.
3. If the user answers a question correctly, praise them."#
    )
}

/// Ten multiple-choice questions over the source text, as a JSON array.
/// The shape spelled out here is what the quiz parser expects back.
pub fn quiz_prompt(source_text: &str) -> String {
    format!(
        r#"Analyze the following text and generate 10 high-quality multiple-choice questions (MCQs).
Each question should have 4 options (A, B, C, D) and specify the correct answer.
Format the response as a JSON array of objects:
[
  {{
    "id": 1,
    "question": "Question text?",
    "options": ["Option A", "Option B", "Option C", "Option D"],
    "answer": "Option A"
  }},
  ...
]

Text:
{source_text}"#
    )
}

/// Video script for a topic: a 3-sentence explanation plus 5 labeled frame
/// prompts in the fixed EXPLANATION:/FRAMES: layout the parser splits on.
pub fn video_prompt(topic: &str) -> String {
    format!(
        r#"Generate an educational video script and image prompts for the topic: "{topic}".
Provide:
1. A clear, 3-sentence explanation of the topic.
2. 5 visual frame prompts for an AI image generator to illustrate the concept.

Format the response exactly like this:
EXPLANATION: [The 3-sentence explanation]
FRAMES:
1. [Frame 1 description]
2. [Frame 2 description]
3. [Frame 3 description]
4. [Frame 4 description]
5. [Frame 5 description]"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_are_deterministic() {
        assert_eq!(
            assignment_prompt("Solve 2x + 4 = 10"),
            assignment_prompt("Solve 2x + 4 = 10")
        );
        assert_eq!(
            chat_prompt("Is it 3?", Some("chapter text")),
            chat_prompt("Is it 3?", Some("chapter text"))
        );
        assert_eq!(quiz_prompt("source"), quiz_prompt("source"));
        assert_eq!(video_prompt("Bees"), video_prompt("Bees"));
    }

    #[test]
    fn assignment_prompt_embeds_text_verbatim() {
        let prompt = assignment_prompt("Prove that sqrt(2) is irrational.");
        assert!(prompt.contains("Prove that sqrt(2) is irrational."));
        assert!(prompt.contains("step-by-step solution"));
    }

    #[test]
    fn chat_prompt_falls_back_when_context_missing() {
        let without = chat_prompt("What is osmosis?", None);
        assert!(without.contains("No PDF context provided."));

        let empty = chat_prompt("What is osmosis?", Some(""));
        assert!(empty.contains("No PDF context provided."));

        let with = chat_prompt("What is osmosis?", Some("chapter on diffusion"));
        assert!(with.contains("chapter on diffusion"));
        assert!(!with.contains("No PDF context provided."));
    }

    #[test]
    fn quiz_prompt_spells_out_output_shape() {
        let prompt = quiz_prompt("The mitochondria is the powerhouse of the cell.");
        assert!(prompt.contains("10 high-quality multiple-choice questions"));
        assert!(prompt.contains(r#""options": ["Option A", "Option B", "Option C", "Option D"]"#));
        assert!(prompt.contains(r#""answer": "Option A""#));
    }

    #[test]
    fn video_prompt_fixes_the_section_layout() {
        let prompt = video_prompt("Photosynthesis");
        assert!(prompt.contains(r#"for the topic: "Photosynthesis""#));
        assert!(prompt.contains("EXPLANATION: [The 3-sentence explanation]"));
        assert!(prompt.contains("FRAMES:"));
        assert!(prompt.contains("5. [Frame 5 description]"));
    }
}
