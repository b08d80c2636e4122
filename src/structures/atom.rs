/*!
(The internal representation of) an atom.

Broadly, atoms are things with a name to which assigning a (boolean) value (true or false) is of interest.
- 'Internal' atoms are used internal to a context.
- 'External' atoms are used during external interaction with a context, e.g. when providing a formula as input or reading the value of an atom. \
     External atoms are a string of non-whitespace characters which does not begin with '~' (a tilde). \
     Examples: `p`, `atom_one`, `96`.

Internal atoms are the contiguous block of u32s [0..*m*) for some *m*, fixed by the order in which external atoms were first seen.
This representation allows atoms to be used as the indices of a structure, e.g. `external_map[a]`, without taking too much space.

# Notes
- The external representation of an atom is stored in the [atom database](crate::db::atom).
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// A strict upper bound on the instance of an atom.
///
/// As the bound is strict, a count of atoms also fits in an [Atom].
pub const ATOM_MAX: Atom = Atom::MAX;
