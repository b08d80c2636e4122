use minnow_sat::{builder::ClauseOk, config::Config, context::Context, reports::Report};

mod basic {

    use minnow_sat::structures::valuation::Valuation;

    use super::*;

    #[test]
    fn unit_implication() {
        let mut ctx = Context::from_config(Config::default());

        for clause in ["p", "~p, q"] {
            let the_clause = ctx.clause_from_string(clause).unwrap();
            assert_eq!(Ok(ClauseOk::Added), ctx.add_clause(the_clause));
        }

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.atom_db.valuation().atom_count(), 2);

        let p = ctx.atom_db.atom_representation("p").unwrap();
        let q = ctx.atom_db.atom_representation("q").unwrap();
        assert_eq!(ctx.value_of(p), Some(true));
        assert_eq!(ctx.value_of(q), Some(true));

        assert_eq!(ctx.atom_db.valuation_string(), "p=T q=T");
    }

    #[test]
    fn opposed_units() {
        let mut ctx = Context::from_config(Config::default());

        for clause in ["p", "~p"] {
            let the_clause = ctx.clause_from_string(clause).unwrap();
            assert!(ctx.add_clause(the_clause).is_ok());
        }

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn branching() {
        let mut ctx = Context::from_config(Config::default());

        for clause in ["p, q", "~p, q", "p, ~q"] {
            let the_clause = ctx.clause_from_string(clause).unwrap();
            assert!(ctx.add_clause(the_clause).is_ok());
        }

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.atom_db.valuation_string(), "p=T q=T");
    }

    #[test]
    fn empty_formula() {
        let mut ctx = Context::from_config(Config::default());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.atom_db.valuation_string(), "");
    }

    #[test]
    fn conflict() {
        let mut ctx = Context::from_config(Config::default());

        for clause in ["p, q", "~p, ~q", "p, ~q", "~p, q"] {
            let the_clause = ctx.clause_from_string(clause).unwrap();
            assert!(ctx.add_clause(the_clause).is_ok());
        }

        assert!(ctx.solve().is_ok());
        assert!(matches!(ctx.report(), Report::Unsatisfiable))
    }

    #[test]
    fn tautology() {
        let mut ctx = Context::from_config(Config::default());

        let the_clause = ctx.clause_from_string("p, ~p").unwrap();
        assert!(ctx.add_clause(the_clause).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
    }
}

mod state {

    use minnow_sat::types::err;

    use super::*;

    #[test]
    fn resolve_after_adding() {
        let mut ctx = Context::from_config(Config::default());

        let the_clause = ctx.clause_from_string("p, q").unwrap();
        assert!(ctx.add_clause(the_clause).is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        let the_clause = ctx.clause_from_string("~p").unwrap();
        assert!(ctx.add_clause(the_clause).is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.atom_db.valuation_string(), "p=F q=T");

        let the_clause = ctx.clause_from_string("~q").unwrap();
        assert!(ctx.add_clause(the_clause).is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn an_unsatisfiable_solve_clears_the_model() {
        let mut ctx = Context::from_config(Config::default());

        let the_clause = ctx.clause_from_string("p").unwrap();
        assert!(ctx.add_clause(the_clause).is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        let p = ctx.atom_db.atom_representation("p").unwrap();
        assert_eq!(ctx.value_of(p), Some(true));

        let the_clause = ctx.clause_from_string("~p").unwrap();
        assert!(ctx.add_clause(the_clause).is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));

        assert_eq!(ctx.value_of(p), None);
    }

    #[test]
    fn resolve_without_adding() {
        let mut ctx = Context::from_config(Config::default());

        let the_clause = ctx.clause_from_string("p").unwrap();
        assert!(ctx.add_clause(the_clause).is_ok());

        assert!(ctx.solve().is_ok());
        assert_eq!(ctx.solve(), Err(err::ErrorKind::InvalidState));
    }

    #[test]
    fn report_before_solving() {
        let mut ctx = Context::from_config(Config::default());

        let the_clause = ctx.clause_from_string("p").unwrap();
        assert!(ctx.add_clause(the_clause).is_ok());

        assert_eq!(ctx.report(), Report::Unknown);
    }
}
