use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Sections reachable from the navbar, in display order.
pub const NAV_LINKS: [&str; 6] = ["Home", "About", "Skills", "Projects", "Academics", "Contact"];

pub fn anchor(link: &str) -> String {
    format!("#{}", link.to_lowercase())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Hamburger,
    Close,
    Link,
}

/// Mobile overlay menu. Open only after a hamburger activation that has not
/// been followed by a close or link activation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn apply(&mut self, event: MenuEvent) {
        let open = matches!(event, MenuEvent::Hamburger);
        if open != self.open {
            log::debug!("mobile menu {}", if open { "opened" } else { "closed" });
        }
        self.open = open;
    }
}

/// Document-level scroll behavior the lock acts on.
pub trait ScrollHost {
    /// Current inline `overflow` of the scrolling element, empty if unset.
    fn overflow(&self) -> String;
    /// Writes `overflow`; an empty value removes the inline property.
    fn set_overflow(&self, value: &str);
    fn scroll_to_top(&self);
}

#[derive(Debug)]
struct LockState {
    holders: usize,
    saved: Option<String>,
}

/// Reference counted scroll lock. The first guard saves the host's overflow,
/// hides it and pins the page to the top; dropping the last guard restores
/// the saved value.
#[derive(Debug)]
pub struct ScrollLock<H> {
    host: Arc<H>,
    state: Arc<Mutex<LockState>>,
}

impl<H> Clone for ScrollLock<H> {
    fn clone(&self) -> Self {
        Self {
            host: self.host.clone(),
            state: self.state.clone(),
        }
    }
}

impl<H: ScrollHost> ScrollLock<H> {
    pub fn new(host: H) -> Self {
        Self {
            host: Arc::new(host),
            state: Arc::new(Mutex::new(LockState {
                holders: 0,
                saved: None,
            })),
        }
    }

    pub fn acquire(&self) -> ScrollLockGuard<H> {
        let mut state = lock(&self.state);
        if state.holders == 0 {
            state.saved = Some(self.host.overflow());
            self.host.set_overflow("hidden");
            self.host.scroll_to_top();
            log::debug!("page scroll locked");
        }
        state.holders += 1;
        ScrollLockGuard { lock: self.clone() }
    }

    pub fn is_locked(&self) -> bool {
        lock(&self.state).holders > 0
    }

    fn release(&self) {
        let mut state = lock(&self.state);
        state.holders = state.holders.saturating_sub(1);
        if state.holders == 0 {
            if let Some(saved) = state.saved.take() {
                self.host.set_overflow(&saved);
                log::debug!("page scroll restored");
            }
        }
    }
}

fn lock(state: &Mutex<LockState>) -> MutexGuard<'_, LockState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

#[must_use = "the page unlocks as soon as the guard is dropped"]
#[derive(Debug)]
pub struct ScrollLockGuard<H: ScrollHost> {
    lock: ScrollLock<H>,
}

impl<H: ScrollHost> Drop for ScrollLockGuard<H> {
    fn drop(&mut self) {
        self.lock.release();
    }
}

/// Mobile menu bound to a scroll lock: the page stays locked exactly while
/// the menu is open. Dropping it while open releases the lock.
#[derive(Debug)]
pub struct MenuLock<H: ScrollHost> {
    menu: MenuState,
    lock: ScrollLock<H>,
    guard: Option<ScrollLockGuard<H>>,
}

impl<H: ScrollHost> MenuLock<H> {
    pub fn new(lock: ScrollLock<H>) -> Self {
        Self {
            menu: MenuState::default(),
            lock,
            guard: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn apply(&mut self, event: MenuEvent) {
        self.menu.apply(event);
        if !self.menu.is_open() {
            self.guard = None;
        } else if self.guard.is_none() {
            self.guard = Some(self.lock.acquire());
        }
    }

    /// The hamburger icon turns into an X while the menu is open, so the same
    /// control closes it.
    pub fn toggle(&mut self) {
        let event = if self.is_open() {
            MenuEvent::Close
        } else {
            MenuEvent::Hamburger
        };
        self.apply(event);
    }

    /// Closes the menu and gives the lock back.
    pub fn release(&mut self) {
        self.apply(MenuEvent::Close);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct MockScrollHost {
        overflow: Mutex<String>,
        writes: Mutex<Vec<String>>,
        scrolls_to_top: Mutex<usize>,
    }

    impl MockScrollHost {
        fn with_overflow(value: &str) -> Self {
            let host = Self::default();
            *host.overflow.lock().unwrap() = value.to_string();
            host
        }
    }

    impl ScrollHost for MockScrollHost {
        fn overflow(&self) -> String {
            self.overflow.lock().unwrap().clone()
        }

        fn set_overflow(&self, value: &str) {
            *self.overflow.lock().unwrap() = value.to_string();
            self.writes.lock().unwrap().push(value.to_string());
        }

        fn scroll_to_top(&self) {
            *self.scrolls_to_top.lock().unwrap() += 1;
        }
    }

    fn overflow(lock: &ScrollLock<MockScrollHost>) -> String {
        lock.host.overflow()
    }

    #[test]
    fn test_menu_follows_last_event() {
        use MenuEvent::*;
        let sequences: [&[MenuEvent]; 6] = [
            &[],
            &[Hamburger],
            &[Hamburger, Close],
            &[Hamburger, Link, Hamburger],
            &[Close, Link],
            &[Hamburger, Hamburger, Link],
        ];
        for events in sequences {
            let mut menu = MenuState::default();
            for ev in events {
                menu.apply(*ev);
            }
            assert_eq!(menu.is_open(), events.last() == Some(&Hamburger));
        }
    }

    #[test]
    fn test_lock_hides_and_restores() {
        let lock = ScrollLock::new(MockScrollHost::with_overflow("auto"));
        let guard = lock.acquire();
        assert!(lock.is_locked());
        assert_eq!(overflow(&lock), "hidden");
        assert_eq!(*lock.host.scrolls_to_top.lock().unwrap(), 1);

        drop(guard);
        assert!(!lock.is_locked());
        assert_eq!(overflow(&lock), "auto");
    }

    #[test]
    fn test_toggle_twice_restores_exactly() {
        let lock = ScrollLock::new(MockScrollHost::default());
        let mut menu = MenuLock::new(lock.clone());
        for ev in [
            MenuEvent::Hamburger,
            MenuEvent::Close,
            MenuEvent::Hamburger,
            MenuEvent::Link,
        ] {
            menu.apply(ev);
            assert_eq!(menu.is_open(), lock.is_locked());
        }
        assert_eq!(overflow(&lock), "");
        assert_eq!(
            *lock.host.writes.lock().unwrap(),
            vec!["hidden", "", "hidden", ""]
        );
    }

    #[test]
    fn test_menu_lock_link_closes_and_unlocks() {
        let lock = ScrollLock::new(MockScrollHost::with_overflow("auto"));
        let mut menu = MenuLock::new(lock.clone());
        menu.apply(MenuEvent::Hamburger);
        assert!(menu.is_open());
        assert_eq!(overflow(&lock), "hidden");
        assert_eq!(*lock.host.scrolls_to_top.lock().unwrap(), 1);

        menu.apply(MenuEvent::Link);
        assert!(!menu.is_open());
        assert!(!lock.is_locked());
        assert_eq!(overflow(&lock), "auto");
    }

    #[test]
    fn test_menu_lock_toggle_closes_when_open() {
        let lock = ScrollLock::new(MockScrollHost::with_overflow("scroll"));
        let mut menu = MenuLock::new(lock.clone());
        menu.toggle();
        assert!(menu.is_open());
        assert!(lock.is_locked());

        menu.toggle();
        assert!(!menu.is_open());
        assert_eq!(overflow(&lock), "scroll");

        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(lock.host.writes.lock().unwrap().len(), 3);
    }

    #[test]
    fn test_menu_lock_repeated_hamburger_locks_once() {
        let lock = ScrollLock::new(MockScrollHost::default());
        let mut menu = MenuLock::new(lock.clone());
        menu.apply(MenuEvent::Hamburger);
        menu.apply(MenuEvent::Hamburger);
        assert_eq!(*lock.host.writes.lock().unwrap(), vec!["hidden"]);
        menu.release();
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_menu_lock_drop_while_open_unlocks() {
        let lock = ScrollLock::new(MockScrollHost::with_overflow("auto"));
        {
            let mut menu = MenuLock::new(lock.clone());
            menu.apply(MenuEvent::Hamburger);
            assert!(lock.is_locked());
        }
        assert!(!lock.is_locked());
        assert_eq!(overflow(&lock), "auto");
    }

    #[test]
    fn test_nested_guards() {
        let lock = ScrollLock::new(MockScrollHost::with_overflow("scroll"));
        let outer = lock.acquire();
        let inner = lock.acquire();
        assert_eq!(*lock.host.scrolls_to_top.lock().unwrap(), 1);

        drop(outer);
        assert!(lock.is_locked());
        assert_eq!(overflow(&lock), "hidden");

        drop(inner);
        assert_eq!(overflow(&lock), "scroll");
        assert_eq!(lock.host.writes.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_guard_drop_on_teardown_releases() {
        let lock = ScrollLock::new(MockScrollHost::default());
        {
            let _open_menu = lock.acquire();
            assert!(lock.is_locked());
        }
        assert!(!lock.is_locked());
        assert_eq!(overflow(&lock), "");
    }

    #[test]
    fn test_anchor() {
        let anchors = NAV_LINKS.iter().map(|l| anchor(l)).collect::<Vec<_>>();
        assert_eq!(anchors[0], "#home");
        assert_eq!(anchors[4], "#academics");
    }
}
