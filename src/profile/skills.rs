use serde::{Deserialize, Serialize};

/// Ordered-unique collection of skill labels.
///
/// Labels are compared exactly as entered — no trimming, no case folding.
/// Marketplace search is case-insensitive; skill identity is not. The
/// asymmetry follows the product behavior, so "Yoga" and "yoga" are two
/// different entries here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet {
    labels: Vec<String>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self { labels: Vec::new() }
    }

    /// Appends `label` at the end of the set.
    ///
    /// Empty and already-present labels are silently ignored.
    pub fn add(&mut self, label: impl Into<String>) {
        let label = label.into();
        if label.is_empty() || self.contains(&label) {
            return;
        }
        self.labels.push(label);
    }

    /// Removes `label`; no-op when absent.
    pub fn remove(&mut self, label: &str) {
        self.labels.retain(|entry| entry != label);
    }

    /// Removes `label` when present, adds it otherwise.
    ///
    /// Backs the category-browser buttons: a single click both selects and
    /// deselects.
    pub fn toggle(&mut self, label: impl Into<String>) {
        let label = label.into();
        if self.contains(&label) {
            self.remove(&label);
        } else {
            self.add(label);
        }
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|entry| entry == label)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_idempotent() {
        let mut skills = SkillSet::new();
        skills.add("Yoga");
        skills.add("Yoga");
        assert_eq!(skills.len(), 1);
        assert!(skills.contains("Yoga"));
    }

    #[test]
    fn add_ignores_empty_label() {
        let mut skills = SkillSet::new();
        skills.add("");
        assert!(skills.is_empty());
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut skills = SkillSet::new();
        skills.add("Guitar");
        skills.add("Piano");
        skills.add("Drums");
        let labels: Vec<&str> = skills.iter().collect();
        assert_eq!(labels, ["Guitar", "Piano", "Drums"]);
    }

    #[test]
    fn labels_are_case_sensitive() {
        let mut skills = SkillSet::new();
        skills.add("Yoga");
        skills.add("yoga");
        assert_eq!(skills.len(), 2);
    }

    #[test]
    fn remove_absent_label_is_noop() {
        let mut skills = SkillSet::new();
        skills.add("Baking");
        skills.remove("Knitting");
        assert_eq!(skills.len(), 1);
    }

    #[test]
    fn toggle_twice_restores_content_and_order() {
        let mut skills = SkillSet::new();
        skills.add("Spanish");
        skills.add("French");
        skills.add("German");

        let before: Vec<&str> = skills.iter().collect();
        let before: Vec<String> = before.into_iter().map(String::from).collect();

        skills.toggle("German");
        assert!(!skills.contains("German"));
        skills.toggle("German");

        let after: Vec<String> = skills.iter().map(String::from).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn toggle_adds_missing_label() {
        let mut skills = SkillSet::new();
        skills.toggle("Painting");
        assert!(skills.contains("Painting"));
    }
}
