//! Icon Component
//!
//! Resolves a symbolic icon name through the [`IconRegistry`] global and
//! renders the matching SVG. Unknown names render nothing.

use ahash::AHashMap;
use gpui::{
    App, Empty, Global, Hsla, IntoElement, RenderOnce, SharedString, Styled, Window,
    prelude::*, px,
};
use gpui_component::{Icon, Sizable};

use crate::assets::BootstrapIcon;

/// Size used when the caller does not ask for one
pub const DEFAULT_ICON_SIZE: f32 = 20.0;

/// Builds icons for one registry entry
#[derive(Debug, Clone, PartialEq)]
pub struct IconFactory {
    path: SharedString,
}

impl IconFactory {
    pub fn new(path: impl Into<SharedString>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &SharedString {
        &self.path
    }

    pub fn build(&self, size: f32) -> ResolvedIcon {
        ResolvedIcon {
            path: self.path.clone(),
            size,
        }
    }
}

/// An icon ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedIcon {
    pub path: SharedString,
    pub size: f32,
}

impl From<ResolvedIcon> for Icon {
    fn from(val: ResolvedIcon) -> Self {
        Icon::empty().path(val.path).with_size(px(val.size))
    }
}

/// Name to icon lookup table, built once at startup
#[derive(Debug, Clone)]
pub struct IconRegistry {
    factories: AHashMap<String, IconFactory>,
}

impl Global for IconRegistry {}

impl Default for IconRegistry {
    fn default() -> Self {
        Self::bootstrap()
    }
}

impl IconRegistry {
    /// An empty registry
    pub fn empty() -> Self {
        Self {
            factories: AHashMap::new(),
        }
    }

    /// The bundled bootstrap icons plus a few gpui-component built-ins
    pub fn bootstrap() -> Self {
        let mut registry = Self::empty();
        for icon in BootstrapIcon::ALL {
            registry.register(icon.name(), IconFactory::new(icon.path()));
        }
        for (name, path) in [
            ("Search", "icons/search.svg"),
            ("Info", "icons/info.svg"),
            ("Settings", "icons/settings-2.svg"),
        ] {
            registry.register(name, IconFactory::new(path));
        }
        registry
    }

    /// Add or replace an entry
    pub fn register(&mut self, name: impl Into<String>, factory: IconFactory) {
        self.factories.insert(name.into(), factory);
    }

    pub fn lookup(&self, name: &str) -> Option<&IconFactory> {
        self.factories.get(name)
    }

    /// Resolve `name` at `size` (default 20); warns once per miss
    pub fn resolve(&self, name: &str, size: Option<f32>) -> Option<ResolvedIcon> {
        let Some(factory) = self.lookup(name) else {
            tracing::warn!(icon = %name, "Icon not found");
            return None;
        };
        Some(factory.build(size.unwrap_or(DEFAULT_ICON_SIZE)))
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

/// An icon looked up by name
#[derive(IntoElement)]
pub struct NamedIcon {
    name: SharedString,
    size: Option<f32>,
    color: Option<Hsla>,
}

impl NamedIcon {
    pub fn new(name: impl Into<SharedString>) -> Self {
        Self {
            name: name.into(),
            size: None,
            color: None,
        }
    }

    /// Set the icon size in pixels
    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the icon color
    pub fn color(mut self, color: impl Into<Hsla>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl RenderOnce for NamedIcon {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let registry = cx.default_global::<IconRegistry>();
        let Some(resolved) = registry.resolve(&self.name, self.size) else {
            return Empty.into_any_element();
        };

        let icon = Icon::from(resolved);
        match self.color {
            Some(color) => icon.text_color(color).into_any_element(),
            None => icon.into_any_element(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    struct WarnCounter(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for WarnCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn count_warnings<R>(f: impl FnOnce() -> R) -> (R, usize) {
        let counter = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(WarnCounter(counter.clone()));
        let result = tracing::subscriber::with_default(subscriber, f);
        (result, counter.load(Ordering::SeqCst))
    }

    #[test]
    fn registry_has_the_catalog_icons() {
        let registry = IconRegistry::bootstrap();
        for name in [
            "HeartFill",
            "PlusCircleFill",
            "SortAlphaDown",
            "SortAlphaUp",
            "CaretUpFill",
            "CaretDownFill",
        ] {
            assert!(registry.lookup(name).is_some(), "{name} not registered");
        }
    }

    #[test]
    fn registered_names_resolve_at_requested_size() {
        let registry = IconRegistry::bootstrap();
        let (resolved, warnings) = count_warnings(|| {
            registry
                .names()
                .into_iter()
                .map(|name| registry.resolve(name, Some(18.0)))
                .collect::<Vec<_>>()
        });

        assert_eq!(warnings, 0);
        assert_eq!(resolved.len(), registry.len());
        assert!(resolved.iter().all(|icon| icon.as_ref().is_some_and(|i| i.size == 18.0)));
    }

    #[test]
    fn size_defaults_to_twenty() {
        let registry = IconRegistry::bootstrap();
        let icon = registry.resolve("HeartFill", None).expect("registered");
        assert_eq!(icon.size, DEFAULT_ICON_SIZE);
        assert_eq!(icon.path.to_string(), BootstrapIcon::HeartFill.path().to_string());
    }

    #[test]
    fn unknown_name_resolves_to_none_with_one_warning() {
        let registry = IconRegistry::bootstrap();
        let (resolved, warnings) = count_warnings(|| registry.resolve("Sparkles", Some(20.0)));
        assert!(resolved.is_none());
        assert_eq!(warnings, 1);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let registry = IconRegistry::bootstrap();
        assert!(registry.lookup("heartfill").is_none());
    }

    #[test]
    fn register_adds_and_replaces() {
        let mut registry = IconRegistry::empty();
        assert!(registry.is_empty());

        registry.register("Star", IconFactory::new("icons/star.svg"));
        registry.register("Star", IconFactory::new("icons/star-fill.svg"));

        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.lookup("Star").map(|f| f.path().to_string()),
            Some("icons/star-fill.svg".to_string())
        );
    }

    #[test]
    fn names_are_sorted() {
        let registry = IconRegistry::bootstrap();
        let names = registry.names();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }
}
