//! Compiled theme cache keyed by theme identity.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::OnceCell;

use super::{compile_theme, CompiledTheme};
use crate::theme::Theme;

struct CacheSlot {
    // Held so the allocation, and with it the key, stays unique while cached.
    theme: Arc<Theme>,
    compiled: OnceCell<Arc<CompiledTheme>>,
}

/// Memoizes [`compile_theme`] per theme handle.
///
/// Entries are keyed by the identity of the `Arc<Theme>`, not by content: two
/// separately built but identical themes compile separately, while clones of
/// one handle share a single compiled theme. Entries are never evicted.
///
/// The cache is safe to share between threads. Concurrent first use of a
/// theme compiles it once; later lookups only take a read lock.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use termtint::{Theme, ThemeCache};
///
/// let cache = ThemeCache::new();
/// let theme = Arc::new(Theme::new());
///
/// let first = cache.get_or_compile(&theme);
/// let second = cache.get_or_compile(&theme);
/// assert!(Arc::ptr_eq(&first, &second));
/// ```
#[derive(Default)]
pub struct ThemeCache {
    slots: RwLock<HashMap<usize, Arc<CacheSlot>>>,
}

impl ThemeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the compiled form of `theme`, compiling it on first use.
    pub fn get_or_compile(&self, theme: &Arc<Theme>) -> Arc<CompiledTheme> {
        let slot = self.slot(theme);
        let compiled = slot
            .compiled
            .get_or_init(|| Arc::new(compile_theme(&slot.theme)));
        Arc::clone(compiled)
    }

    /// Returns the compiled form of `theme` if it has been compiled already.
    pub fn get(&self, theme: &Arc<Theme>) -> Option<Arc<CompiledTheme>> {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        slots
            .get(&identity(theme))
            .and_then(|slot| slot.compiled.get().cloned())
    }

    /// Number of themes seen by the cache.
    pub fn len(&self) -> usize {
        self.slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, theme: &Arc<Theme>) -> Arc<CacheSlot> {
        let key = identity(theme);

        {
            let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(slot) = slots.get(&key) {
                log::trace!("theme cache hit for {:#x}", key);
                return Arc::clone(slot);
            }
        }

        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        let slot = slots.entry(key).or_insert_with(|| {
            Arc::new(CacheSlot {
                theme: Arc::clone(theme),
                compiled: OnceCell::new(),
            })
        });
        Arc::clone(slot)
    }
}

impl fmt::Debug for ThemeCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeCache")
            .field("themes", &self.len())
            .finish()
    }
}

fn identity(theme: &Arc<Theme>) -> usize {
    Arc::as_ptr(theme) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::Style;

    fn sample() -> Theme {
        Theme::new()
            .add("keyword", Style::new().bold())
            .add("string", Style::new().red())
    }

    #[test]
    fn test_same_handle_returns_same_compiled_theme() {
        let cache = ThemeCache::new();
        let theme = Arc::new(sample());
        let alias = Arc::clone(&theme);

        let first = cache.get_or_compile(&theme);
        let second = cache.get_or_compile(&alias);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_equal_themes_compile_independently() {
        let cache = ThemeCache::new();
        let a = Arc::new(sample());
        let b = Arc::new(sample());

        let compiled_a = cache.get_or_compile(&a);
        let compiled_b = cache.get_or_compile(&b);

        assert!(!Arc::ptr_eq(&compiled_a, &compiled_b));
        assert_eq!(compiled_a.len(), compiled_b.len());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_get_before_and_after_compile() {
        let cache = ThemeCache::new();
        let theme = Arc::new(sample());

        assert!(cache.get(&theme).is_none());
        let compiled = cache.get_or_compile(&theme);
        assert!(Arc::ptr_eq(&cache.get(&theme).unwrap(), &compiled));
    }

    #[test]
    fn test_cache_keeps_theme_alive() {
        let cache = ThemeCache::new();
        let theme = Arc::new(sample());
        cache.get_or_compile(&theme);

        assert_eq!(Arc::strong_count(&theme), 2);
    }

    #[test]
    fn test_concurrent_first_use_compiles_once() {
        let cache = ThemeCache::new();
        let theme = Arc::new(sample());

        let results: Vec<Arc<CompiledTheme>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| cache.get_or_compile(&theme)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for compiled in &results[1..] {
            assert!(Arc::ptr_eq(&results[0], compiled));
        }
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_debug_shows_count() {
        let cache = ThemeCache::new();
        cache.get_or_compile(&Arc::new(Theme::new()));
        assert_eq!(format!("{:?}", cache), "ThemeCache { themes: 1 }");
    }
}
