use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

/// An interned identifier. Cheap to copy and compare; the backing text
/// lives in the [`Interner`] that produced it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Name(u32);

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

impl Name {
    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }
}

/// Interns identifier text so the rest of the compiler can compare names
/// by a cheap `u32` instead of repeatedly hashing or comparing strings.
///
/// Single-threaded by design: every phase of this compiler runs
/// sequentially, so there is no need for the `DashMap`/atomic machinery a
/// concurrent compiler would reach for here.
pub struct Interner {
    strings: Vec<Rc<str>>,
    lookup: RefCell<FxHashMap<Rc<str>, Name>>,
}

impl Interner {
    pub fn new() -> Self {
        Self {
            strings: Vec::new(),
            lookup: RefCell::new(FxHashMap::default()),
        }
    }

    /// Interns `text`, reusing the existing [`Name`] if it was seen before.
    ///
    /// Ada identifiers are case-insensitive; callers are expected to have
    /// already normalized to one case before interning so that `Foo` and
    /// `FOO` intern to the same [`Name`].
    pub fn intern(&mut self, text: &str) -> Name {
        if let Some(&name) = self.lookup.borrow().get(text) {
            return name;
        }
        let rc: Rc<str> = Rc::from(text);
        let name = Name(self.strings.len() as u32);
        self.strings.push(rc.clone());
        self.lookup.borrow_mut().insert(rc, name);
        name
    }

    pub fn resolve(&self, name: Name) -> &str {
        &self.strings[name.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Default for Interner {
    fn default() -> Self {
        Self::new()
    }
}
