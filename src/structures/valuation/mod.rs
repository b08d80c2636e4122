/*!
A (partial) function from atoms to truth values.

If all atoms are assigned a value the valuation is 'full', otherwise the valuation is 'partial'.

The canonical representation of a valuation is a vector of optional booleans, where each index of the vector is interpreted as an atom.

In other words, the canonical representation of a valuation 𝐯 is a vector *v* whose length is the number of atoms in the context such that:
-  *v*\[a\] = Some(true) *if and only if* 𝐯(𝐚) = true.
-  *v*\[a\] = Some(false) *if and only if* 𝐯(𝐚) = false.
-  *v*\[a\] = None *if and only if* 𝐯(𝐚) is undefined.

The trait is implemented for anything which can be dereferenced to a slice of optional booleans.

```rust
# use minnow_sat::structures::valuation::Valuation;
let valuation = vec![Some(true), None, Some(true), None];

assert_eq!(valuation.value_of(1), Some(None));
assert_eq!(unsafe { valuation.value_of_unchecked(0) }, Some(true));
assert_eq!(valuation.unvalued_atoms().count(), 2);
```

During a solve each branch of the search holds its own canonical valuation, cloned from the valuation of the parent branch.
So, in contrast to a trail-based solver, sibling branches never observe the assignments of one another.

# Soundness

The valuation trait is implemented for any structure which can be dereferenced to a slice of optional booleans.
And, as the value of an atom is determined by using the atom as an index on the dereferenced structure, there is no structural guarantee that the returned value is for the atom.
The [atom database](crate::db::atom) upholds the guarantee by creating each valuation with one index for each atom of the context.

Where the guarantee is in hand, the unchecked [value_of_unchecked](Valuation::value_of_unchecked) is preferred to the checked [value_of](Valuation::value_of), as any further check on the atom is redundant.
In particular, the unchecked read is used when examining a clause against a valuation, and on each read a solve makes while simplifying a formula.
*/

mod slice_impl;

use super::atom::Atom;

/// The canonical representation of a valuation.
pub type CValuation = Vec<Option<bool>>;

/// A valuation is something which stores some value of an atom and/or perhaps the information that the atom has no value.
pub trait Valuation {
    /// Some value of an atom under the valuation, or otherwise nothing.
    fn value_of(&self, atom: Atom) -> Option<Option<bool>>;

    /// Some value of an atom under the valuation, or otherwise nothing.
    /// # Safety
    /// Implementations are not required to check the atom is part of the valuation.
    unsafe fn value_of_unchecked(&self, atom: Atom) -> Option<bool>;

    /// An iterator through atoms which do not have some value.
    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom>;

    /// A count of all the atoms in the valuation.
    fn atom_count(&self) -> usize;
}
