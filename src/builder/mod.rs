/*!
Methods for building the context of a solve, from strings or some readable source.

A clause is written as its literals separated by commas, and a literal is written as the name of an atom, prefixed with `~` for a negation.
Whitespace around a literal is ignored, and any atom named for the first time is added to the atom database of the context.

```rust
# use minnow_sat::context::Context;
# use minnow_sat::config::Config;
use minnow_sat::structures::clause::Clause;
let mut the_context = Context::from_config(Config::default());

let the_clause = the_context.clause_from_string("p, ~q, p").unwrap();

// The repeat literal is dropped.
assert_eq!(the_clause.size(), 2);
assert!(the_context.add_clause(the_clause).is_ok());
```

A repeated literal is dropped when a clause is parsed, as above.
A clause containing an atom in both polarities is kept as written --- such a clause is satisfied by any assignment to the atom, and falls away during a solve.

Sources read with [read_cnf](Context::read_cnf) hold one clause per line, with blank lines skipped.
*/

use std::io::BufRead;

use crate::{
    context::{Context, ContextState},
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::{CClause, Clause},
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// Ok results of adding a clause to a context.
#[derive(Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added to the formula of the context.
    Added,
}

impl Context {
    /// The atom with the given name, created fresh if the name is new.
    pub fn atom_from_string(&mut self, name: &str) -> Result<Atom, err::ErrorKind> {
        match self.atom_db.atom_representation(name) {
            Some(atom) => Ok(atom),

            // Note, strictly below ATOM_MAX, as a count of atoms must also fit in an Atom.
            None => match self.atom_db.count() < ATOM_MAX as usize {
                true => Ok(self.atom_db.fresh_atom(name)),
                false => Err(err::ErrorKind::Build(err::BuildError::AtomsExhausted)),
            },
        }
    }

    /// The literal written by the given string.
    pub fn literal_from_string(&mut self, string: &str) -> Result<CLiteral, err::ErrorKind> {
        let string = string.trim();

        let (name, polarity) = match string.strip_prefix('~') {
            Some(remainder) => (remainder, false),
            None => (string, true),
        };

        if name.is_empty() {
            match polarity {
                true => return Err(err::ErrorKind::Parse(err::ParseError::Empty)),
                false => return Err(err::ErrorKind::Parse(err::ParseError::Negation)),
            }
        }

        if name.starts_with('~') || name.contains(char::is_whitespace) {
            return Err(err::ErrorKind::Parse(err::ParseError::Atom));
        }

        let atom = self.atom_from_string(name)?;
        Ok(CLiteral::new(atom, polarity))
    }

    /// The clause written by the given string, with repeat literals dropped.
    pub fn clause_from_string(&mut self, string: &str) -> Result<CClause, err::ErrorKind> {
        let mut the_clause = CClause::default();

        for substring in string.split(',') {
            let the_literal = self.literal_from_string(substring)?;
            if !the_clause.iter().any(|literal| *literal == the_literal) {
                the_clause.push(the_literal);
            }
        }

        Ok(the_clause)
    }

    /// Adds a clause to the formula of the context.
    ///
    /// The clause must not be empty, as an empty clause is satisfied on no valuation.
    /// Adding a clause returns the context to [input state](ContextState::Input), so a solved context may take further clauses and be solved again.
    pub fn add_clause(&mut self, clause: impl Clause) -> Result<ClauseOk, err::ErrorKind> {
        if clause.size() == 0 {
            return Err(err::ErrorKind::Build(err::BuildError::EmptyClause));
        }

        self.formula.add_clause(clause.canonical());
        self.state = ContextState::Input;

        Ok(ClauseOk::Added)
    }

    /// Reads a formula from the given source, one clause per line.
    ///
    /// Blank lines are skipped.
    /// A clause which does not parse surfaces the parse error, and a line which cannot be read surfaces its line number.
    pub fn read_cnf(&mut self, mut reader: impl BufRead) -> Result<(), err::ErrorKind> {
        let mut buffer = String::with_capacity(1024);
        let mut line_counter = 0;

        loop {
            line_counter += 1;
            buffer.clear();

            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => {}
                Err(_) => {
                    return Err(err::ErrorKind::Parse(err::ParseError::Line(line_counter)))
                }
            }

            let line = buffer.trim();
            if line.is_empty() {
                continue;
            }

            let the_clause = self.clause_from_string(line)?;
            self.add_clause(the_clause)?;
        }

        Ok(())
    }
}
