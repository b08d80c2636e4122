//! Implementation of the valuation trait for any structure which can be dereferenced to a slice of optional booleans.

use crate::structures::{atom::Atom, valuation::Valuation};

impl<T: std::ops::Deref<Target = [Option<bool>]>> Valuation for T {
    fn value_of(&self, atom: Atom) -> Option<Option<bool>> {
        self.get(atom as usize).copied()
    }

    unsafe fn value_of_unchecked(&self, atom: Atom) -> Option<bool> {
        *self.get_unchecked(atom as usize)
    }

    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter()
            .enumerate()
            .filter_map(|(atom, value)| match value {
                None => Some(atom as Atom),
                _ => None,
            })
    }

    fn atom_count(&self) -> usize {
        self.len()
    }
}
