//! Sidebar text rendering
//!
//! Renders a [`DisplayMap`] as an indented text tree, one row per displayed
//! menu object. Redirects are aliases and never get a row of their own. Rows
//! below a collapsed node are not rendered even if they are in the map.

use crossterm::style::Stylize;

use crate::domain::entities::{
    MenuEntry, MenuItem, MenuObject, MenuTree, NodeId, TreeVisitor, UniqueIdTree, VisitControl,
};
use crate::domain::services::DisplayMap;
use crate::domain::value_objects::Locale;
use crate::ui::theme::{colors, IconSet};

/// Rendering switches, usually derived from terminal capabilities
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarOptions {
    pub unicode: bool,
    pub color: bool,
    pub locale: Locale,
}

impl Default for SidebarOptions {
    fn default() -> Self {
        Self {
            unicode: true,
            color: false,
            locale: Locale::default(),
        }
    }
}

/// Render the rows of `display`, marking `selected_id`
pub fn render_sidebar(
    tree: &MenuTree,
    display: &DisplayMap,
    selected_id: Option<&str>,
    options: &SidebarOptions,
) -> String {
    let mut renderer = SidebarRenderer {
        menu: tree,
        display,
        selected_id,
        options,
        icons: IconSet::new(options.unicode),
        lines: Vec::new(),
    };
    tree.tree().visit(&mut renderer);
    renderer.lines.join("\n")
}

struct SidebarRenderer<'a> {
    menu: &'a MenuTree,
    display: &'a DisplayMap,
    selected_id: Option<&'a str>,
    options: &'a SidebarOptions,
    icons: IconSet,
    lines: Vec<String>,
}

/// True if expanding `node` could show at least one child
fn has_displayable_children(tree: &UniqueIdTree<MenuObject>, node: NodeId) -> bool {
    tree.children(Some(node))
        .iter()
        .any(|&child| tree.data(child).matches_display_filter())
}

impl SidebarRenderer<'_> {
    fn expand_icon(
        &self,
        tree: &UniqueIdTree<MenuObject>,
        node: NodeId,
        expanded: bool,
    ) -> &'static str {
        let id = tree.id(node);
        if expanded && self.menu.has_display_children(id, self.display) {
            self.icons.expand
        } else if !expanded && has_displayable_children(tree, node) {
            self.icons.collapse
        } else {
            ""
        }
    }

    fn label(&self, object: &MenuObject) -> String {
        let text = object
            .as_item()
            .and_then(|item| item.display_text(&self.options.locale))
            .unwrap_or_else(|| object.id().to_string());
        match object {
            MenuObject::External(_) => format!("{} {}", text, self.icons.external),
            _ => text,
        }
    }

    fn render_row(
        &self,
        tree: &UniqueIdTree<MenuObject>,
        node: NodeId,
        depth: usize,
        expanded: bool,
    ) -> String {
        let indent = "  ".repeat(depth);
        let object = tree.data(node);

        if let MenuObject::Separator(_) = object {
            let line = self.icons.separator;
            return if self.options.color {
                format!("  {}  {}", indent, line.with(colors::DIM))
            } else {
                format!("  {}  {}", indent, line)
            };
        }

        let is_selected = self.selected_id == Some(object.id());
        let cursor = if is_selected {
            format!("{} ", self.icons.selected)
        } else {
            " ".repeat(self.icons.selected.chars().count() + 1)
        };
        let icon = self.expand_icon(tree, node, expanded);
        let label = self.label(object);
        let label = if self.options.color && is_selected {
            format!("{}", label.as_str().with(colors::SELECTED).bold())
        } else {
            label
        };

        let row = if icon.is_empty() {
            format!("{}{}  {}", cursor, indent, label)
        } else {
            format!("{}{}{} {}", cursor, indent, icon, label)
        };
        row.trim_end().to_string()
    }
}

impl TreeVisitor<MenuObject> for SidebarRenderer<'_> {
    fn on_item_before_children(
        &mut self,
        tree: &UniqueIdTree<MenuObject>,
        node: NodeId,
        depth: usize,
    ) -> VisitControl {
        let object = tree.data(node);
        if let MenuObject::Redirect(_) = object {
            return VisitControl::SkipChildren;
        }
        let Some(expanded) = self.display.is_expanded(object.id()) else {
            return VisitControl::SkipChildren;
        };

        let row = self.render_row(tree, node, depth, expanded);
        self.lines.push(row);
        if expanded {
            VisitControl::Continue
        } else {
            VisitControl::SkipChildren
        }
    }
}
