//! Menu object entities - the payload stored at every menu tree node
//!
//! Four kinds exist:
//! - `MenuSeparator` - cosmetic divider, id only
//! - `MenuItemPage` - link to an application page
//! - `MenuItemExternal` - link to an external URL
//! - `MenuItemRedirect` - alias for a page item; target and text are delegated
//!
//! A page item owns its link target through a shared handle. Redirects hold
//! the same handle, so a target set on the page is what its redirects report.
//! For that reason page items, redirects and `MenuObject` are not `Clone`.
//!
//! `MenuObject` is the closed sum of the four. Every kind has an immutable,
//! tree-wide unique id, an optional display filter and a free-form attribute
//! bag for caller metadata (icons, roles, badges, ...).

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use parking_lot::RwLock;
use url::Url;

use crate::domain::policies::DisplayFilter;
use crate::domain::ports::{HasDisplayText, HasSimpleUrl, Page};
use crate::domain::value_objects::{Locale, MenuObjectType};
use crate::error::{MenuError, MenuResult};

/// Caller-defined metadata attached to a menu object
pub type Attributes = BTreeMap<String, String>;

/// Read access shared by all menu objects.
pub trait MenuEntry {
    fn id(&self) -> &str;

    fn object_type(&self) -> MenuObjectType;

    fn display_filter(&self) -> Option<&DisplayFilter>;

    fn attributes(&self) -> &Attributes;

    fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes().get(key).map(String::as_str)
    }

    /// True if no filter is set or the filter accepts this object
    fn matches_display_filter(&self) -> bool
    where
        Self: Sized,
    {
        self.display_filter()
            .map_or(true, |filter| filter.matches(self))
    }
}

/// Menu objects that link somewhere: pages, external links and redirects.
pub trait MenuItem: MenuEntry {
    /// HTML link target (e.g. `_blank`)
    fn target(&self) -> Option<String>;

    fn set_target(&mut self, target: Option<String>) -> MenuResult<()>;

    fn display_text(&self, locale: &Locale) -> Option<String>;
}

/// Link target of a page item, shared with the redirects aliasing it
type SharedTarget = Arc<RwLock<Option<String>>>;

/// Fields every menu object carries
#[derive(Debug, Clone)]
struct Header {
    id: String,
    display_filter: Option<DisplayFilter>,
    attributes: Attributes,
}

impl Header {
    fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_filter: None,
            attributes: Attributes::new(),
        }
    }
}

/// Implements `MenuEntry`, the shared mutators and the `MenuObject`
/// conversions for one menu object kind.
macro_rules! menu_object_kind {
    ($kind:ident, $variant:ident, $object_type:expr) => {
        impl MenuEntry for $kind {
            fn id(&self) -> &str {
                &self.header.id
            }

            fn object_type(&self) -> MenuObjectType {
                $object_type
            }

            fn display_filter(&self) -> Option<&DisplayFilter> {
                self.header.display_filter.as_ref()
            }

            fn attributes(&self) -> &Attributes {
                &self.header.attributes
            }
        }

        impl $kind {
            pub fn set_display_filter(&mut self, filter: Option<DisplayFilter>) -> &mut Self {
                self.header.display_filter = filter;
                self
            }

            pub fn set_attribute(
                &mut self,
                key: impl Into<String>,
                value: impl Into<String>,
            ) -> &mut Self {
                self.header.attributes.insert(key.into(), value.into());
                self
            }

            pub fn remove_attribute(&mut self, key: &str) -> Option<String> {
                self.header.attributes.remove(key)
            }
        }

        impl From<$kind> for MenuObject {
            fn from(object: $kind) -> Self {
                MenuObject::$variant(object)
            }
        }

        impl MenuObjectKind for $kind {
            fn from_object(object: &MenuObject) -> Option<&Self> {
                match object {
                    MenuObject::$variant(inner) => Some(inner),
                    _ => None,
                }
            }

            fn from_object_mut(object: &mut MenuObject) -> Option<&mut Self> {
                match object {
                    MenuObject::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
        }
    };
}

/// Typed access to one variant of `MenuObject`
pub(crate) trait MenuObjectKind: MenuEntry + Into<MenuObject> {
    fn from_object(object: &MenuObject) -> Option<&Self>;

    fn from_object_mut(object: &mut MenuObject) -> Option<&mut Self>;
}

/// A purely cosmetic divider between menu items
#[derive(Debug, Clone)]
pub struct MenuSeparator {
    header: Header,
}

impl MenuSeparator {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            header: Header::new(id),
        }
    }
}

menu_object_kind!(MenuSeparator, Separator, MenuObjectType::Separator);

impl PartialEq for MenuSeparator {
    fn eq(&self, other: &Self) -> bool {
        self.header.id == other.header.id
    }
}

impl Eq for MenuSeparator {}

impl Hash for MenuSeparator {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.header.id.hash(state);
    }
}

/// Menu item linking to an application page
#[derive(Debug)]
pub struct MenuItemPage {
    header: Header,
    page: Arc<dyn Page>,
    target: SharedTarget,
}

impl MenuItemPage {
    pub fn new(id: impl Into<String>, page: Arc<dyn Page>) -> Self {
        Self {
            header: Header::new(id),
            page,
            target: SharedTarget::default(),
        }
    }

    pub fn page(&self) -> &Arc<dyn Page> {
        &self.page
    }
}

menu_object_kind!(MenuItemPage, Page, MenuObjectType::Page);

impl MenuItem for MenuItemPage {
    fn target(&self) -> Option<String> {
        self.target.read().clone()
    }

    fn set_target(&mut self, target: Option<String>) -> MenuResult<()> {
        *self.target.write() = target;
        Ok(())
    }

    fn display_text(&self, locale: &Locale) -> Option<String> {
        self.page.display_text(locale)
    }
}

impl PartialEq for MenuItemPage {
    fn eq(&self, other: &Self) -> bool {
        self.header.id == other.header.id && self.page.id() == other.page.id()
    }
}

impl Eq for MenuItemPage {}

impl Hash for MenuItemPage {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.header.id.hash(state);
        self.page.id().hash(state);
    }
}

/// Menu item linking to a URL outside the application
#[derive(Debug, Clone)]
pub struct MenuItemExternal {
    header: Header,
    url: Arc<dyn HasSimpleUrl>,
    name: Arc<dyn HasDisplayText>,
    target: Option<String>,
}

impl MenuItemExternal {
    pub fn new(
        id: impl Into<String>,
        url: Arc<dyn HasSimpleUrl>,
        name: Arc<dyn HasDisplayText>,
    ) -> Self {
        Self {
            header: Header::new(id),
            url,
            name,
            target: None,
        }
    }

    /// URL as computed by the provider right now
    pub fn url(&self) -> Url {
        self.url.simple_url()
    }
}

menu_object_kind!(MenuItemExternal, External, MenuObjectType::External);

impl MenuItem for MenuItemExternal {
    fn target(&self) -> Option<String> {
        self.target.clone()
    }

    fn set_target(&mut self, target: Option<String>) -> MenuResult<()> {
        self.target = target;
        Ok(())
    }

    fn display_text(&self, locale: &Locale) -> Option<String> {
        self.name.display_text(locale)
    }
}

impl PartialEq for MenuItemExternal {
    fn eq(&self, other: &Self) -> bool {
        self.header.id == other.header.id
    }
}

impl Eq for MenuItemExternal {}

impl Hash for MenuItemExternal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.header.id.hash(state);
    }
}

/// Alias for another page item.
///
/// The redirect keeps a live link to the page item it was created for:
/// target and display text are always read from it and cannot be changed on
/// the redirect.
#[derive(Debug)]
pub struct MenuItemRedirect {
    header: Header,
    target_item_id: String,
    page: Arc<dyn Page>,
    target: SharedTarget,
}

impl MenuItemRedirect {
    pub fn new(id: impl Into<String>, target_item: &MenuItemPage) -> Self {
        Self {
            header: Header::new(id),
            target_item_id: target_item.id().to_string(),
            page: Arc::clone(&target_item.page),
            target: Arc::clone(&target_item.target),
        }
    }

    /// Id of the page item this redirect stands for
    pub fn target_menu_item_id(&self) -> &str {
        &self.target_item_id
    }

    /// The page behind the aliased item
    pub fn page(&self) -> &Arc<dyn Page> {
        &self.page
    }
}

menu_object_kind!(MenuItemRedirect, Redirect, MenuObjectType::RedirectToPage);

impl MenuItem for MenuItemRedirect {
    fn target(&self) -> Option<String> {
        self.target.read().clone()
    }

    fn set_target(&mut self, _target: Option<String>) -> MenuResult<()> {
        Err(MenuError::UnsupportedOperation {
            id: self.header.id.clone(),
            operation: "setting the target of a redirect",
        })
    }

    fn display_text(&self, locale: &Locale) -> Option<String> {
        self.page.display_text(locale)
    }
}

impl PartialEq for MenuItemRedirect {
    fn eq(&self, other: &Self) -> bool {
        self.header.id == other.header.id && self.target_item_id == other.target_item_id
    }
}

impl Eq for MenuItemRedirect {}

impl Hash for MenuItemRedirect {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.header.id.hash(state);
        self.target_item_id.hash(state);
    }
}

/// Payload of a menu tree node
#[derive(Debug, PartialEq, Eq, Hash)]
pub enum MenuObject {
    Separator(MenuSeparator),
    Page(MenuItemPage),
    External(MenuItemExternal),
    Redirect(MenuItemRedirect),
}

impl MenuObject {
    fn header(&self) -> &Header {
        match self {
            MenuObject::Separator(separator) => &separator.header,
            MenuObject::Page(page) => &page.header,
            MenuObject::External(external) => &external.header,
            MenuObject::Redirect(redirect) => &redirect.header,
        }
    }

    fn header_mut(&mut self) -> &mut Header {
        match self {
            MenuObject::Separator(separator) => &mut separator.header,
            MenuObject::Page(page) => &mut page.header,
            MenuObject::External(external) => &mut external.header,
            MenuObject::Redirect(redirect) => &mut redirect.header,
        }
    }

    pub fn set_display_filter(&mut self, filter: Option<DisplayFilter>) -> &mut Self {
        self.header_mut().display_filter = filter;
        self
    }

    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.header_mut().attributes.insert(key.into(), value.into());
        self
    }

    pub fn remove_attribute(&mut self, key: &str) -> Option<String> {
        self.header_mut().attributes.remove(key)
    }

    pub fn as_separator(&self) -> Option<&MenuSeparator> {
        MenuSeparator::from_object(self)
    }

    pub fn as_page(&self) -> Option<&MenuItemPage> {
        MenuItemPage::from_object(self)
    }

    pub fn as_external(&self) -> Option<&MenuItemExternal> {
        MenuItemExternal::from_object(self)
    }

    pub fn as_redirect(&self) -> Option<&MenuItemRedirect> {
        MenuItemRedirect::from_object(self)
    }

    /// Link view of the object; `None` for separators
    pub fn as_item(&self) -> Option<&dyn MenuItem> {
        match self {
            MenuObject::Separator(_) => None,
            MenuObject::Page(page) => Some(page as &dyn MenuItem),
            MenuObject::External(external) => Some(external as &dyn MenuItem),
            MenuObject::Redirect(redirect) => Some(redirect as &dyn MenuItem),
        }
    }

    pub fn as_item_mut(&mut self) -> Option<&mut dyn MenuItem> {
        match self {
            MenuObject::Separator(_) => None,
            MenuObject::Page(page) => Some(page as &mut dyn MenuItem),
            MenuObject::External(external) => Some(external as &mut dyn MenuItem),
            MenuObject::Redirect(redirect) => Some(redirect as &mut dyn MenuItem),
        }
    }
}

impl MenuEntry for MenuObject {
    fn id(&self) -> &str {
        &self.header().id
    }

    fn object_type(&self) -> MenuObjectType {
        match self {
            MenuObject::Separator(_) => MenuObjectType::Separator,
            MenuObject::Page(_) => MenuObjectType::Page,
            MenuObject::External(_) => MenuObjectType::External,
            MenuObject::Redirect(_) => MenuObjectType::RedirectToPage,
        }
    }

    fn display_filter(&self) -> Option<&DisplayFilter> {
        self.header().display_filter.as_ref()
    }

    fn attributes(&self) -> &Attributes {
        &self.header().attributes
    }
}

impl fmt::Display for MenuObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.object_type(), self.id())
    }
}
