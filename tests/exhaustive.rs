use minnow_sat::{
    config::{Config, Switches},
    context::Context,
    reports::Report,
    structures::{atom::Atom, formula::Formula, valuation::CValuation},
};

/// Whether some total valuation of the atoms of the formula satisfies the formula.
fn satisfiable_by_force(formula: &Formula) -> bool {
    let atoms: Vec<Atom> = formula.atoms().into_iter().collect();
    let size = match atoms.iter().max() {
        Some(atom) => *atom as usize + 1,
        None => 0,
    };

    (0..1_u32 << atoms.len()).any(|combination| {
        let mut valuation: CValuation = vec![None; size];
        for (index, atom) in atoms.iter().enumerate() {
            valuation[*atom as usize] = Some((combination >> index) & 1 == 1);
        }
        formula.satisfied_on(&valuation)
    })
}

const FORMULAS: [&str; 10] = [
    "p",
    "~p",
    "p\n~p",
    "p, ~p",
    "p\n~p, q",
    "p, q\n~p, q\np, ~q",
    "p, q\n~p, q\np, ~q\n~p, ~q",
    "a, b, c\n~a, ~b\n~b, ~c\n~a, ~c\na, ~b, c",
    "a, b\nb, c\nc, d\n~a, ~c\n~b, ~d",
    "a\n~a, b\n~b, c\n~c, d\n~d, ~a",
];

mod cross_check {

    use super::*;

    #[test]
    fn verdicts_match_exhaustive_evaluation() {
        for cnf in FORMULAS {
            for (unit_propagation, pure_literals) in
                [(true, true), (true, false), (false, true), (false, false)]
            {
                let config = Config {
                    switches: Switches {
                        unit_propagation,
                        pure_literals,
                    },
                };

                let mut ctx = Context::from_config(config);
                ctx.read_cnf(cnf.as_bytes()).unwrap();
                ctx.solve().unwrap();

                let expected = match satisfiable_by_force(&ctx.formula) {
                    true => Report::Satisfiable,
                    false => Report::Unsatisfiable,
                };

                assert_eq!(
                    ctx.report(),
                    expected,
                    "{cnf:?} with unit propagation {unit_propagation} and pure literals {pure_literals}"
                );
            }
        }
    }

    #[test]
    fn models_satisfy_their_formulas() {
        for cnf in FORMULAS {
            let mut ctx = Context::from_config(Config::default());
            ctx.read_cnf(cnf.as_bytes()).unwrap();
            ctx.solve().unwrap();

            if ctx.report() == Report::Satisfiable {
                assert!(ctx.formula.satisfied_on(ctx.atom_db.valuation()), "{cnf:?}");
            }
        }
    }
}
