pub const VIDEO_INSTRUCTION: &str = include_str!("../data/prompts/video_instruction.txt");
pub const PAGE_SUMMARY: &str = include_str!("../data/prompts/page_summary.txt");

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}
