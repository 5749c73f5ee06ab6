//! Turns a `MenuConfig` into a `MenuTree`

use std::sync::Arc;

use tracing::{debug, warn};
use url::Url;

use crate::domain::entities::{MenuItem, MenuTree};
use crate::domain::policies::DisplayFilter;
use crate::error::{MenuError, MenuResult};
use crate::infrastructure::{LocalizedText, StaticPage};

use super::types::{MenuConfig, MenuItemConfig, MenuItemKind};

/// Attribute consulted by the role filter
pub(super) const ROLE_ATTRIBUTE: &str = "role";

pub(super) fn build_tree(config: &MenuConfig, roles: &[String]) -> MenuResult<MenuTree> {
    let role_filter = (!roles.is_empty())
        .then(|| DisplayFilter::attribute_in(ROLE_ATTRIBUTE, roles.iter().cloned()));

    let mut tree = MenuTree::new();
    for item in &config.items {
        create_object(&mut tree, item)?;
        apply_settings(&mut tree, item, role_filter.as_ref())?;
    }
    tree.set_default_menu_item_ids(config.default.iter().cloned());

    debug!(
        items = tree.len(),
        defaults = config.default.len(),
        "built menu tree from configuration"
    );
    Ok(tree)
}

fn localized_text(item: &MenuItemConfig) -> LocalizedText {
    let fallback = item.text.clone().unwrap_or_else(|| item.id.clone());
    item.texts
        .iter()
        .fold(LocalizedText::new(fallback), |text, (locale, value)| {
            text.with_text(locale.clone(), value.clone())
        })
}

fn create_object(tree: &mut MenuTree, item: &MenuItemConfig) -> MenuResult<()> {
    let id = item.id.clone();
    let parent = item.parent.as_deref();

    match item.kind {
        MenuItemKind::Page => {
            let page = Arc::new(StaticPage::new(id.clone(), localized_text(item)));
            match parent {
                Some(parent) => tree.create_item(parent, id, page).map(drop),
                None => tree.create_root_item(id, page).map(drop),
            }
        }
        MenuItemKind::External => {
            let raw = item.url.as_deref().ok_or_else(|| MenuError::MissingField {
                id: id.clone(),
                field: "url",
            })?;
            let url = Url::parse(raw).map_err(|e| MenuError::InvalidUrl {
                id: id.clone(),
                message: e.to_string(),
            })?;
            let name = Arc::new(localized_text(item));
            match parent {
                Some(parent) => tree.create_external(parent, id, Arc::new(url), name).map(drop),
                None => tree.create_root_external(id, Arc::new(url), name).map(drop),
            }
        }
        MenuItemKind::Separator => match parent {
            Some(parent) => tree.create_separator(parent, id).map(drop),
            None => tree.create_root_separator(id).map(drop),
        },
        MenuItemKind::Redirect => {
            if parent.is_some() {
                return Err(MenuError::UnsupportedOperation {
                    id,
                    operation: "placing a redirect below a parent",
                });
            }
            let target_id = item
                .redirect_to
                .as_deref()
                .ok_or_else(|| MenuError::MissingField {
                    id: id.clone(),
                    field: "redirect_to",
                })?;
            tree.create_redirect(id, target_id).map(drop)
        }
    }
}

fn apply_settings(
    tree: &mut MenuTree,
    item: &MenuItemConfig,
    role_filter: Option<&DisplayFilter>,
) -> MenuResult<()> {
    let Some(object) = tree.menu_object_of_id_mut(&item.id) else {
        return Ok(());
    };

    for (key, value) in &item.attributes {
        object.set_attribute(key.clone(), value.clone());
    }
    if let Some(filter) = role_filter {
        if item.attributes.contains_key(ROLE_ATTRIBUTE) {
            object.set_display_filter(Some(filter.clone()));
        }
    }

    if let Some(target) = &item.target {
        match object.as_item_mut() {
            Some(link) => link.set_target(Some(target.clone()))?,
            None => warn!(id = %item.id, "ignoring link target on a separator"),
        }
    }
    Ok(())
}
