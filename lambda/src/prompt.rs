/// Formatting rules sent ahead of the user's text. The model is trusted to
/// follow them; nothing here checks its output.
pub const SUMMARY_INSTRUCTIONS: &str = "Summarize the following text into 1-4 short sentences. Follow these specific rules:

1. The first 5-6 words are crucial and should be direct and action-oriented, avoiding words like 'regarding', 'concerning', or 'about'.
2. If the text contains a delivery or tracking number, ALWAYS start with that number (e.g., \"02167500003781 - part shipped to locker\").
3. If the text contains an FSI number (FSIxxxxxxx), do NOT include it in the first 6 words. It can be mentioned later in the summary if relevant.
4. Start with the most important action or subject.
5. Include any other reference numbers or key identifiers.

Example formats:
- For tracking numbers: \"02167500003781 - part shipped to locker\" followed by the rest of the summary.
- For other cases: \"Engineer visit scheduling: FSI0252801\" followed by the rest of the summary.

Text to summarize:
";

/// Builds the prompt for one summarization request.
///
/// The text is appended verbatim, untrimmed, so the same input always yields
/// the same prompt.
#[must_use]
pub fn build_summary_prompt(text: &str) -> String {
    let mut prompt = String::with_capacity(SUMMARY_INSTRUCTIONS.len() + text.len());
    prompt.push_str(SUMMARY_INSTRUCTIONS);
    prompt.push_str(text);
    prompt
}
