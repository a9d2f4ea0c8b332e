//! Category tab strip.

use emoji_core::{Categories, CategoryName, EmojiId};

use crate::host::PickerHost;
use crate::keymap::{handle_key, Navigation};

/// One tab in the category bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTab {
    pub name: CategoryName,
    pub label: String,
    pub icon: String,

    /// The tab matches the active category.
    pub selected: bool,

    /// Tabs are disabled while a search filter is applied.
    pub enabled: bool,
}

/// View model for the category bar.
#[derive(Debug, Clone)]
pub struct CategoryBar {
    tabs: Vec<CategoryTab>,
    emoji_per_row: usize,
}

impl CategoryBar {
    /// Build tabs for the current state. Recent comes first when there are
    /// recent emojis.
    pub fn new(
        categories: &Categories,
        recent: &[EmojiId],
        filter: &str,
        active: &CategoryName,
        emoji_per_row: usize,
    ) -> Self {
        let enabled = filter.is_empty();
        let tabs = categories
            .with_recent(recent)
            .iter()
            .map(|category| CategoryTab {
                name: category.name.clone(),
                label: category.label.clone(),
                icon: category.icon.clone(),
                selected: &category.name == active,
                enabled,
            })
            .collect();

        Self {
            tabs,
            emoji_per_row,
        }
    }

    pub fn tabs(&self) -> &[CategoryTab] {
        &self.tabs
    }

    pub fn selected(&self) -> Option<&CategoryTab> {
        self.tabs.iter().find(|tab| tab.selected)
    }

    /// Forward a click to the host if the tab is enabled.
    ///
    /// Returns whether the click was forwarded.
    pub fn click(&self, name: &CategoryName, host: &mut impl PickerHost) -> bool {
        match self.tabs.iter().find(|tab| &tab.name == name) {
            Some(tab) if tab.enabled => {
                host.set_active_category(tab.name.clone());
                true
            }
            _ => false,
        }
    }

    /// Forward a key press inside the bar.
    pub fn key_down(&self, key: &str, host: &mut impl PickerHost) -> Option<Navigation> {
        handle_key(key, self.emoji_per_row, host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MockPickerHost;
    use emoji_core::Category;
    use mockall::predicate::eq;

    fn categories() -> Categories {
        Categories::new(vec![
            Category::new("smileys-emotion", Vec::new()),
            Category::new("flags", Vec::new()),
        ])
    }

    #[test]
    fn test_tabs_reflect_state() {
        let bar = CategoryBar::new(&categories(), &[], "", &"flags".into(), 9);

        let names: Vec<_> = bar.tabs().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["smileys-emotion", "flags"]);
        assert!(bar.tabs().iter().all(|t| t.enabled));
        assert_eq!(bar.selected().unwrap().label, "Flags");
    }

    #[test]
    fn test_recent_tab_first() {
        let bar = CategoryBar::new(&categories(), &["1f600".into()], "", &"recent".into(), 9);

        assert_eq!(bar.tabs().len(), 3);
        assert_eq!(bar.tabs()[0].name, CategoryName::recent());
        assert!(bar.tabs()[0].selected);
    }

    #[test]
    fn test_click_forwards_when_enabled() {
        let bar = CategoryBar::new(&categories(), &[], "", &"smileys-emotion".into(), 9);
        let mut host = MockPickerHost::new();
        host.expect_set_active_category()
            .with(eq(CategoryName::from("flags")))
            .times(1)
            .return_const(());

        assert!(bar.click(&"flags".into(), &mut host));
    }

    #[test]
    fn test_click_ignored_while_filtering() {
        let bar = CategoryBar::new(&categories(), &[], "smile", &"smileys-emotion".into(), 9);
        assert!(bar.tabs().iter().all(|t| !t.enabled));

        let mut host = MockPickerHost::new();
        host.expect_set_active_category().never();

        assert!(!bar.click(&"flags".into(), &mut host));
    }

    #[test]
    fn test_click_unknown_tab() {
        let bar = CategoryBar::new(&categories(), &[], "", &"flags".into(), 9);
        let mut host = MockPickerHost::new();
        host.expect_set_active_category().never();

        assert!(!bar.click(&"objects".into(), &mut host));
    }

    #[test]
    fn test_key_down_uses_row_width() {
        let bar = CategoryBar::new(&categories(), &[], "", &"flags".into(), 7);
        let mut host = MockPickerHost::new();
        host.expect_select_prev_emoji()
            .with(eq(7))
            .times(1)
            .return_const(());
        host.expect_focus_search_input().times(1).return_const(());

        assert_eq!(bar.key_down("ArrowUp", &mut host), Some(Navigation::Prev(7)));
    }
}
