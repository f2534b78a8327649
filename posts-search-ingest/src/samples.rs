//! Localized sample sentences attached to every indexed post.
//!
//! Post `i` of the feed receives `samples[i % samples.len()]`, so the rotation
//! is fully determined by feed order.

/// Ten Japanese sentences exercising the language-specific analyzer.
pub const LOCALIZED_SAMPLES: [&str; 10] = [
    "吾輩は猫である。名前はまだ無い。",
    "どこで生れたかとんと見当がつかぬ。",
    "雨ニモマケズ風ニモマケズ雪ニモ夏ノ暑サニモマケヌ丈夫ナカラダヲモチ",
    "人間は皆、死ぬべき運命にある。 ",
    "おれは人間である、猿ではない。 ",
    "彼の掌に載せられてしまった私は、もう逃げるべくもなくなってしまった。",
    "旅をするということは、ただ単に移動することだけではない。",
    "月がきれいですね。",
    "山路を登りながら、こう考えた。",
    "人間は皆、自分自身の幸せを求める生き物だ。",
];

/// The built-in sample table as owned strings.
pub fn default_samples() -> Vec<String> {
    LOCALIZED_SAMPLES.iter().map(|s| s.to_string()).collect()
}

/// Pick the sample for the post at `position` in the feed.
///
/// Returns `None` only for an empty table.
pub fn sample_for<S: AsRef<str>>(samples: &[S], position: usize) -> Option<&str> {
    if samples.is_empty() {
        return None;
    }
    Some(samples[position % samples.len()].as_ref())
}
