//! 右键菜单项

/// 菜单项被点击后执行的动作
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Exit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    /// 唯一标识
    pub key: &'static str,
    pub label: &'static str,
    pub action: MenuAction,
}

/// 固定菜单项集合，窗口加载时构建一次
pub const MENU_ENTRIES: &[MenuEntry] = &[MenuEntry {
    key: "EXIT",
    label: "Exit",
    action: MenuAction::Exit,
}];

/// 已构建的右键菜单
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContextMenu {
    entries: Vec<MenuEntry>,
}

impl ContextMenu {
    pub fn build(entries: &[MenuEntry]) -> Self {
        Self {
            entries: entries.to_vec(),
        }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn find(&self, key: &str) -> Option<&MenuEntry> {
        self.entries.iter().find(|e| e.key == key)
    }
}
