//! Strongly typed identifiers and the name tables that issue them.
//!
//! Teachers, rooms, and classes arrive as free-form strings.  The ingestion
//! layer interns each distinct name once; everything downstream (ledgers,
//! grids, the availability checker) works on compact `u32` ids and only
//! resolves back to strings when building display labels or warnings.

use std::fmt;

use rustc_hash::FxHashMap;

/// Conversion between a typed id and its dense `usize` index.
pub trait TypedId: Copy + Eq + Ord + std::hash::Hash + fmt::Debug {
    fn from_index(index: usize) -> Self;
    fn index(self) -> usize;
}

/// Generate a typed ID wrapper around a `u32`.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident(u32);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl TypedId for $name {
            #[inline(always)]
            fn from_index(index: usize) -> Self {
                $name(index as u32)
            }

            #[inline(always)]
            fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }
    };
}

typed_id! {
    /// Index of a class (one weekly grid) in first-appearance order.
    pub struct ClassId(u32);
}

typed_id! {
    /// Interned teacher name.
    pub struct TeacherId(u32);
}

typed_id! {
    /// Interned lab room name.
    pub struct RoomId(u32);
}

// ── ClassKey ──────────────────────────────────────────────────────────────────

/// Natural identity of one class: (department, year, section).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassKey {
    pub department: String,
    pub year:       String,
    pub section:    String,
}

impl ClassKey {
    pub fn new(
        department: impl Into<String>,
        year:       impl Into<String>,
        section:    impl Into<String>,
    ) -> Self {
        Self {
            department: department.into(),
            year:       year.into(),
            section:    section.into(),
        }
    }

    /// Heading form used by renderers: `"CSE - 2 - A"`.
    pub fn heading(&self) -> String {
        format!("{} - {} - {}", self.department, self.year, self.section)
    }
}

impl fmt::Display for ClassKey {
    /// Compact form used in warnings and exports: `"CSE_2_A"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.department, self.year, self.section)
    }
}

// ── NameTable ─────────────────────────────────────────────────────────────────

/// Interner mapping names to dense typed ids (`0, 1, 2, …` in insertion order).
#[derive(Clone, Debug)]
pub struct NameTable<I: TypedId> {
    to_id: FxHashMap<String, I>,
    names: Vec<String>,
}

impl<I: TypedId> NameTable<I> {
    pub fn new() -> Self {
        Self {
            to_id: FxHashMap::default(),
            names: Vec::new(),
        }
    }

    /// Intern `name`, returning the existing id if it was seen before.
    pub fn intern(&mut self, name: &str) -> I {
        if let Some(&id) = self.to_id.get(name) {
            return id;
        }
        let id = I::from_index(self.names.len());
        self.names.push(name.to_owned());
        self.to_id.insert(name.to_owned(), id);
        id
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<I> {
        self.to_id.get(name).copied()
    }

    #[inline]
    pub fn resolve(&self, id: I) -> Option<&str> {
        self.names.get(id.index()).map(String::as_str)
    }

    /// Resolve `id`, falling back to its debug form for ids from another table.
    pub fn name_or_id(&self, id: I) -> String {
        self.resolve(id)
            .map(str::to_owned)
            .unwrap_or_else(|| format!("{id:?}"))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All `(id, name)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (I, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(i, n)| (I::from_index(i), n.as_str()))
    }
}

impl<I: TypedId> Default for NameTable<I> {
    fn default() -> Self {
        Self::new()
    }
}
