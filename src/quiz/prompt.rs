/// Builds the fixed instructional prompt with the caller's text embedded
/// verbatim between the delimiter lines.
pub fn build_prompt(text: &str) -> String {
    format!(
        r#"You are an expert quiz generator. Your task is to analyze the provided text and generate a quiz from it.

**INSTRUCTIONS:**
1.  **Generate** exactly **5 Multiple Choice Questions (MCQ)** based on the attached text.
2.  For each question, provide exactly **4 answer options**.
3.  Ensure one option is the correct answer and the other three are plausible distractors (incorrect but believable options derived from the text's context).
4.  **Crucially, respond ONLY in JSON format.** Do not include any preceding or trailing text, explanations, or code block delimiters (like ```json).

**JSON STRUCTURE:**
You must strictly adhere to the following JSON structure:

{{
  "quiz": [
    {{
      "question": "The question derived from the text.",
      "options": ["Option A", "Option B", "Option C", "Option D"],
      "correct_answer": "The text of the correct option (must exactly match one of the options)."
    }}
  ]
}}

**TEXT FOR ANALYSIS:**
---
{text}
---
"#
    )
}
