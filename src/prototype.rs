//! Prototype: duplicate an existing value instead of rebuilding it.
//!
//! Implementors copy every field explicitly, so a duplicate never shares
//! mutable state with its source.

pub trait Prototype {
    fn duplicate(&self) -> Self;
}

impl<T: Prototype> Prototype for Vec<T> {
    fn duplicate(&self) -> Self {
        self.iter().map(Prototype::duplicate).collect()
    }
}

impl<T: Prototype> Prototype for Option<T> {
    fn duplicate(&self) -> Self {
        self.as_ref().map(Prototype::duplicate)
    }
}
