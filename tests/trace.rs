use std::{cell::RefCell, rc::Rc};

use minnow_sat::{
    config::{Config, Switches},
    context::Context,
    trace::Trace,
};

fn recorded_events(cnf: &str, unit_propagation: bool, pure_literals: bool) -> Vec<Trace> {
    let config = Config {
        switches: Switches {
            unit_propagation,
            pure_literals,
        },
    };

    let mut ctx = Context::from_config(config);
    ctx.read_cnf(cnf.as_bytes()).unwrap();

    let events = Rc::new(RefCell::new(Vec::new()));
    let record = events.clone();
    ctx.set_callback_trace(Box::new(move |trace| record.borrow_mut().push(trace)));

    ctx.solve().unwrap();

    events.take()
}

mod events {

    use super::*;

    fn node(assignment: &str, clauses: &str) -> Trace {
        Trace::Node {
            assignment: assignment.to_string(),
            clauses: clauses.to_string(),
        }
    }

    #[test]
    fn a_propagation_only_solve_in_full() {
        let events = recorded_events("p\n~p, q", true, true);

        let expected = vec![
            node("", "[p] [~p, q]"),
            Trace::Unit {
                atom: "p".to_string(),
                value: true,
            },
            Trace::Unit {
                atom: "q".to_string(),
                value: true,
            },
        ];

        assert_eq!(events, expected);
    }

    #[test]
    fn a_conflicting_unit_ends_the_trace() {
        let events = recorded_events("p\n~p", true, true);

        let expected = vec![
            node("", "[p] [~p]"),
            Trace::Unit {
                atom: "p".to_string(),
                value: true,
            },
            Trace::PropagationConflict {
                atom: "p".to_string(),
                value: false,
            },
        ];

        assert_eq!(events, expected);
    }

    #[test]
    fn branches_are_traced() {
        let events = recorded_events("p, q\n~p, q\np, ~q", true, true);

        let expected = vec![
            node("", "[p, q] [~p, q] [p, ~q]"),
            Trace::Branch {
                atom: "p".to_string(),
                value: true,
            },
            node("p=T", "[q]"),
            Trace::Unit {
                atom: "q".to_string(),
                value: true,
            },
        ];

        assert_eq!(events, expected);
    }

    #[test]
    fn empty_clauses_close_branches() {
        let events = recorded_events("p\n~p", false, false);

        let expected = vec![
            node("", "[p] [~p]"),
            Trace::Branch {
                atom: "p".to_string(),
                value: true,
            },
            node("p=T", "[]"),
            Trace::EmptyClause,
            Trace::Branch {
                atom: "p".to_string(),
                value: false,
            },
            node("p=F", "[]"),
            Trace::EmptyClause,
        ];

        assert_eq!(events, expected);
    }

    #[test]
    fn eliminations_are_traced() {
        let events = recorded_events("p, q\n~q, p", true, true);

        let expected = vec![
            node("", "[p, q] [~q, p]"),
            Trace::Pure {
                atom: "p".to_string(),
                value: true,
            },
        ];

        assert_eq!(events, expected);
    }
}

mod callbacks {

    use super::*;

    #[test]
    fn a_cleared_callback_hears_nothing() {
        let mut ctx = Context::from_config(Config::default());
        ctx.read_cnf("p\n~p, q".as_bytes()).unwrap();

        let events = Rc::new(RefCell::new(Vec::new()));
        let record = events.clone();
        ctx.set_callback_trace(Box::new(move |trace| record.borrow_mut().push(trace)));
        ctx.clear_callback_trace();

        ctx.solve().unwrap();

        assert!(events.take().is_empty());
    }
}
