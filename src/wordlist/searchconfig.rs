use typed_builder::TypedBuilder;

/// Knobs for the suggestion path.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, TypedBuilder)]
pub struct SearchConfig {
    /// Words longer than this never reach the brute-force mutation phase.
    #[builder(default, setter(strip_option))]
    pub max_word_len: Option<usize>,
}

impl SearchConfig {
    pub fn new() -> SearchConfig {
        Default::default()
    }

    pub fn allows_mutation(&self, word: &str) -> bool {
        self.max_word_len.map(|max| word.len() <= max).unwrap_or(true)
    }
}
