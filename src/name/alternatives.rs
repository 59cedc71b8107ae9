/// Suffix words appended to propose alternative names, in display order
pub const ALTERNATIVE_SUFFIXES: [&str; 5] = ["Hub", "Pro", "Plus", "Go", "Now"];

/// `name + " " + suffix` for each alternative suffix
pub fn alternative_names(name: &str) -> Vec<String> {
    ALTERNATIVE_SUFFIXES
        .iter()
        .map(|suffix| format!("{} {}", name, suffix))
        .collect()
}
