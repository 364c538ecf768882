//! Normalization of free-form answers and list summaries

/// Split loosely delimited text into an ordered list of tokens.
///
/// Any run of commas and whitespace, in any mix, counts as one delimiter.
/// Empty tokens from leading, trailing or repeated delimiters are dropped.
/// Order is preserved and duplicates are kept.
pub fn separate_list_input(input: &str) -> Vec<String> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Summarize a list of domain names for display, e.g. "a.com and 2 more domains"
pub fn summarize_domain_list<S: AsRef<str>>(domains: &[S]) -> String {
    match domains {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [first, rest @ ..] => format!("{} and {} more domains", first.as_ref(), rest.len()),
    }
}

/// Wrap each line of `text` at `width` columns without splitting words.
///
/// Existing line breaks are kept; a word longer than `width` gets a line of
/// its own.
pub fn wrap_text(text: &str, width: usize) -> String {
    let mut wrapped = Vec::new();
    for line in text.lines() {
        let mut current = String::new();
        for word in line.split_whitespace() {
            if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
                wrapped.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        wrapped.push(current);
    }
    wrapped.join("\n")
}
