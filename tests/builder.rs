use minnow_sat::{
    builder::ClauseOk,
    config::Config,
    context::Context,
    structures::{
        clause::{CClause, Clause},
        literal::Literal,
    },
    types::err,
};

mod literals {

    use super::*;

    #[test]
    fn polarity_by_prefix() {
        let mut ctx = Context::from_config(Config::default());

        let p = ctx.literal_from_string("p").unwrap();
        assert!(p.polarity());

        let not_q = ctx.literal_from_string(" ~q ").unwrap();
        assert!(!not_q.polarity());

        assert_ne!(p.atom(), not_q.atom());
    }

    #[test]
    fn names_are_shared() {
        let mut ctx = Context::from_config(Config::default());

        let p = ctx.literal_from_string("p").unwrap();
        let not_p = ctx.literal_from_string("~p").unwrap();

        assert_eq!(p.atom(), not_p.atom());
        assert_eq!(p.negate(), not_p);
    }

    #[test]
    fn nothing_is_not_a_literal() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(
            ctx.literal_from_string(""),
            Err(err::ErrorKind::Parse(err::ParseError::Empty))
        );

        assert_eq!(
            ctx.literal_from_string("  "),
            Err(err::ErrorKind::Parse(err::ParseError::Empty))
        );
    }

    #[test]
    fn a_bare_negation_is_not_a_literal() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(
            ctx.literal_from_string("~"),
            Err(err::ErrorKind::Parse(err::ParseError::Negation))
        );
    }

    #[test]
    fn awkward_names_are_not_atoms() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(
            ctx.literal_from_string("~~p"),
            Err(err::ErrorKind::Parse(err::ParseError::Atom))
        );

        assert_eq!(
            ctx.literal_from_string("p q"),
            Err(err::ErrorKind::Parse(err::ParseError::Atom))
        );
    }
}

mod clauses {

    use super::*;

    #[test]
    fn repeats_are_dropped() {
        let mut ctx = Context::from_config(Config::default());

        let the_clause = ctx.clause_from_string("p, ~q, p, ~q").unwrap();
        assert_eq!(the_clause.size(), 2);
    }

    #[test]
    fn complements_are_kept() {
        let mut ctx = Context::from_config(Config::default());

        let the_clause = ctx.clause_from_string("p, ~p").unwrap();
        assert_eq!(the_clause.size(), 2);
    }

    #[test]
    fn a_missing_literal_fails_the_clause() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(
            ctx.clause_from_string("p, , q"),
            Err(err::ErrorKind::Parse(err::ParseError::Empty))
        );
    }

    #[test]
    fn the_empty_clause_is_refused() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(
            ctx.add_clause(CClause::default()),
            Err(err::ErrorKind::Build(err::BuildError::EmptyClause))
        );
    }

    #[test]
    fn a_literal_stands_as_a_unit_clause() {
        let mut ctx = Context::from_config(Config::default());

        let not_p = ctx.literal_from_string("~p").unwrap();
        assert_eq!(Ok(ClauseOk::Added), ctx.add_clause(not_p));

        assert_eq!(ctx.formula.clause_count(), 1);
    }

    #[test]
    fn added_clauses_accumulate() {
        let mut ctx = Context::from_config(Config::default());

        for clause in ["p, q", "~p, r"] {
            let the_clause = ctx.clause_from_string(clause).unwrap();
            assert_eq!(Ok(ClauseOk::Added), ctx.add_clause(the_clause));
        }

        assert_eq!(ctx.formula.clause_count(), 2);
        assert_eq!(ctx.atom_db.count(), 3);
    }
}

mod sources {

    use super::*;

    #[test]
    fn blank_lines_are_skipped() {
        let mut ctx = Context::from_config(Config::default());

        let cnf = "

p, q

~p

";

        assert!(ctx.read_cnf(cnf.as_bytes()).is_ok());
        assert_eq!(ctx.formula.clause_count(), 2);
    }

    #[test]
    fn a_bad_clause_surfaces_its_parse_error() {
        let mut ctx = Context::from_config(Config::default());

        let cnf = "p, q\n~\n";

        assert_eq!(
            ctx.read_cnf(cnf.as_bytes()),
            Err(err::ErrorKind::Parse(err::ParseError::Negation))
        );
    }

    #[test]
    fn an_unreadable_line_surfaces_its_number() {
        let mut ctx = Context::from_config(Config::default());

        let cnf = b"p, q\n\xFF\xFE\n";

        assert_eq!(
            ctx.read_cnf(cnf.as_slice()),
            Err(err::ErrorKind::Parse(err::ParseError::Line(2)))
        );
    }
}
