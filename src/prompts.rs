pub const MANDALA: &str = include_str!("../data/prompts/mandala.txt");

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}

/// Build the full mandala prompt for an inspiration word.
///
/// Deterministic and total: any word slots into the fixed template, which
/// always asks for a symmetrical, high-contrast, black and white design.
pub fn build(word: &str) -> String {
    render(MANDALA.trim_end(), &[("word", word)])
}
