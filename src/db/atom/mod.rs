/*!
A database of 'atom related' things, accessed via an [AtomDB] struct.

Things include:
- Internal and external name maps, for reading and writing [Atom](crate::structures::atom::Atom)s, [Literal](crate::structures::literal::Literal)s, etc.
- The [valuation](Valuation) found by the most recent solve, cleared if that solve found the formula unsatisfiable.

The external representation of an atom is the name under which the atom was read from input, e.g. `p` or `q_21`.
The internal representation is an index, fixed by the order in which names were first seen.
Name order is independent of internal order, and anything shown to a user --- the branch order of a solve, a valuation string, a trace --- goes by name order.
*/

use std::collections::HashMap;

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        formula::Formula,
        literal::Literal,
        valuation::{CValuation, Valuation},
    },
};

/// The atom database.
#[derive(Debug, Default)]
pub struct AtomDB {
    /// A map from the external representation of an atom to the internal representation.
    internal_map: HashMap<String, Atom>,

    /// A map from the internal representation of an atom to the external representation.
    external_map: Vec<String>,

    /// The valuation from the most recent solve.
    valuation: CValuation,
}

impl AtomDB {
    /// A count of atoms in the [AtomDB].
    pub fn count(&self) -> usize {
        self.external_map.len()
    }

    /// The stored valuation, as some structure which implements the valuation trait.
    pub fn valuation(&self) -> &impl Valuation {
        &self.valuation
    }

    /// The stored valuation, as a canonical [CValuation].
    pub fn valuation_canonical(&self) -> &CValuation {
        &self.valuation
    }

    /// Some value of an atom on the stored valuation, or otherwise nothing.
    ///
    /// An atom the database does not know has no value.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation.value_of(atom).flatten()
    }

    /// Stores the valuation found by a solve.
    pub(crate) fn store_valuation(&mut self, valuation: CValuation) {
        log::trace!(target: targets::VALUATION, "Noted: {}", self.assignment_string(&valuation));
        self.valuation = valuation;
    }

    /// Clears the stored valuation, on a solve which found no model.
    pub(crate) fn clear_valuation(&mut self) {
        log::trace!(target: targets::VALUATION, "Cleared");
        self.valuation.fill(None);
    }
}

impl AtomDB {
    /// The internal representation of a named atom, if the name is known.
    pub fn atom_representation(&self, name: &str) -> Option<Atom> {
        self.internal_map.get(name).copied()
    }

    /// The external representation of an atom.
    pub fn external_representation(&self, atom: Atom) -> &str {
        &self.external_map[atom as usize]
    }

    /// A fresh atom, recorded under the given name.
    ///
    /// The caller checks the name is not already in use, e.g. via [atom_representation](AtomDB::atom_representation).
    pub fn fresh_atom(&mut self, name: &str) -> Atom {
        let the_atom = self.external_map.len() as Atom;

        self.internal_map.insert(name.to_string(), the_atom);
        self.external_map.push(name.to_string());
        self.valuation.push(None);

        the_atom
    }

    /// Every atom of the database, ordered by external representation.
    ///
    /// The order is fixed for the atoms it covers, whatever order the atoms were introduced in, and is the order branching and output go by.
    pub fn atoms_by_name(&self) -> Vec<Atom> {
        let mut atoms: Vec<Atom> = (0..self.count() as Atom).collect();
        atoms.sort_unstable_by(|a, b| {
            self.external_map[*a as usize].cmp(&self.external_map[*b as usize])
        });
        atoms
    }
}

impl AtomDB {
    /// A string representing the stored valuation as `name=T`/`name=F` pairs in name order.
    ///
    /// An atom without a value is written `F`.
    /// This is a convention of the representation alone --- [value_of](AtomDB::value_of) still answers `None` for the atom.
    pub fn valuation_string(&self) -> String {
        self.atoms_by_name()
            .iter()
            .map(|&atom| {
                let name = self.external_representation(atom);
                match self.value_of(atom) {
                    Some(true) => format!("{name}=T"),
                    _ => format!("{name}=F"),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// A string representing the valued atoms of the given valuation, in name order.
    pub fn assignment_string(&self, valuation: &CValuation) -> String {
        self.atoms_by_name()
            .iter()
            .filter_map(|&atom| {
                let name = self.external_representation(atom);
                match valuation.value_of(atom) {
                    Some(Some(true)) => Some(format!("{name}=T")),
                    Some(Some(false)) => Some(format!("{name}=F")),
                    _ => None,
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// A string representing the given formula, with each clause bracketed and atoms in their external representation.
    pub fn formula_string(&self, formula: &Formula) -> String {
        formula
            .clauses()
            .map(|clause| {
                let literals = clause
                    .iter()
                    .map(|literal| match literal.polarity() {
                        true => self.external_representation(literal.atom()).to_string(),
                        false => format!("~{}", self.external_representation(literal.atom())),
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("[{literals}]")
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
