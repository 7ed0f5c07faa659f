//! Lookups over the flavor-text (serifu) dataset.

use crate::models::{FlavorTextCategory, SerifuEntry};

#[derive(Debug, Clone, Copy)]
pub struct SerifuIndex<'a> {
    entries: &'a [SerifuEntry],
}

impl<'a> SerifuIndex<'a> {
    pub fn new(entries: &'a [SerifuEntry]) -> Self {
        Self { entries }
    }

    /// Entries of one category, in dataset order
    pub fn for_category(&self, category: FlavorTextCategory) -> impl Iterator<Item = &'a SerifuEntry> {
        let entries = self.entries;
        let label = category.label();
        entries.iter().filter(move |e| e.category == label)
    }

    /// Hint note of the first entry whose text is `text`
    pub fn hint_for(&self, text: &str) -> Option<&'a str> {
        self.entries
            .iter()
            .find(|e| e.text == text)
            .map(|e| e.note.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serifu(category: &str, text: &str, note: &str) -> SerifuEntry {
        SerifuEntry {
            category: category.to_string(),
            text: text.to_string(),
            note: note.to_string(),
        }
    }

    fn sample() -> Vec<SerifuEntry> {
        vec![
            serifu("通常時", "波多野感じ", "モードB以上"),
            serifu("激走", "百年早え", "高設定示唆"),
            serifu("通常時", "百年早え", "モードC以上"),
            serifu("通常時", "まだまだ", "デフォルト"),
        ]
    }

    #[test]
    fn test_filter_by_category_keeps_order() {
        let entries = sample();
        let index = SerifuIndex::new(&entries);
        let texts: Vec<_> = index
            .for_category(FlavorTextCategory::NormalTime)
            .map(|e| e.text.as_str())
            .collect();
        assert_eq!(texts, vec!["波多野感じ", "百年早え", "まだまだ"]);
        assert_eq!(index.for_category(FlavorTextCategory::Surge).count(), 1);
    }

    #[test]
    fn test_duplicate_text_takes_first() {
        let entries = sample();
        let index = SerifuIndex::new(&entries);
        assert_eq!(index.hint_for("百年早え"), Some("高設定示唆"));
        assert_eq!(index.hint_for("unknown"), None);
    }

    #[test]
    fn test_empty_dataset() {
        let index = SerifuIndex::new(&[]);
        assert!(index.is_empty());
        assert_eq!(index.for_category(FlavorTextCategory::Surge).count(), 0);
        assert_eq!(index.hint_for(""), None);
    }
}
