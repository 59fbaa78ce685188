//! Property-based tests for parsing, reducing, and solving.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        algebra::{parse, reduce, CoefficientMap},
        solve, Equation, Solution,
    };

    // A single unsigned term, written in one of the many ways the parser
    // accepts
    fn term(powers: std::ops::RangeInclusive<u32>) -> impl Strategy<Value = String> {
        (1u32..50, powers, 0usize..4).prop_map(|(coefficient, power, style)| {
            match (power, style) {
                (0, _) => coefficient.to_string(),
                (1, 0) => format!("{}x", coefficient),
                (1, 1) => format!("{}*x", coefficient),
                (1, 2) => String::from("x"),
                (1, _) => format!("{}*x^1", coefficient),
                (p, 0) => format!("{}x{}", coefficient, p),
                (p, 1) => format!("{}*x^{}", coefficient, p),
                (p, 2) => format!("x**{}", p),
                (p, _) => format!("{}x^{}", coefficient, p),
            }
        })
    }

    fn signed_terms(
        powers: std::ops::RangeInclusive<u32>,
    ) -> impl Strategy<Value = Vec<(bool, String)>> {
        proptest::collection::vec((any::<bool>(), term(powers)), 0..4)
    }

    // Always has at least one `x` on the left so it's a valid equation
    fn equation() -> impl Strategy<Value = String> {
        (
            any::<bool>(),
            term(1..=2),
            signed_terms(0..=2),
            (any::<bool>(), term(0..=2)),
            signed_terms(0..=2),
        )
            .prop_map(|(negative, first, left, (rhs_negative, rhs_first), right)| {
                let mut src = String::new();

                if negative {
                    src.push('-');
                }
                src.push_str(&first);
                push_terms(&mut src, &left);

                src.push_str(if rhs_negative { "=-" } else { "=" });
                src.push_str(&rhs_first);
                push_terms(&mut src, &right);

                src
            })
    }

    fn push_terms(src: &mut String, terms: &[(bool, String)]) {
        for (negative, term) in terms {
            src.push(if *negative { '-' } else { '+' });
            src.push_str(term);
        }
    }

    // The powers in a reduced form, in the order they were written
    fn powers_in(reduced: &str) -> Vec<u32> {
        let lhs = reduced.trim_end_matches(" = 0").trim_start_matches('-');

        lhs.split(" + ")
            .flat_map(|chunk| chunk.split(" - "))
            .map(|term| match term.find("X^") {
                Some(index) => term[index + 2..].parse().unwrap(),
                None if term.contains('X') => 1,
                None => 0,
            })
            .collect()
    }

    proptest! {
        #[test]
        fn generated_equations_always_parse(src in equation()) {
            let coefficients = parse(&src).unwrap();

            for power in 0..=2 {
                prop_assert!(coefficients.get(power).is_some());
            }
        }

        #[test]
        fn reduced_form_is_in_ascending_order(src in equation()) {
            let coefficients = parse(&src).unwrap();

            let reduced = reduce(&coefficients);

            prop_assert!(reduced.ends_with(" = 0"));
            if !coefficients.is_zero() {
                let powers = powers_in(&reduced);
                prop_assert!(
                    powers.windows(2).all(|pair| pair[0] < pair[1]),
                    "{:?} aren't strictly ascending in {:?}",
                    powers,
                    reduced
                );
            }
        }

        #[test]
        fn reparsing_the_reduced_form_gives_the_same_roots(src in equation()) {
            let coefficients = parse(&src).unwrap();
            prop_assume!(!coefficients.is_zero());
            let original = solve(&coefficients).unwrap();

            let reparsed: Equation = original.reduced_form.parse().unwrap();
            let got = reparsed.solve().unwrap();

            prop_assert_eq!(got.solution, original.solution);
            prop_assert_eq!(got.reduced_form, original.reduced_form);
        }

        #[test]
        fn depressed_quadratics_have_opposite_roots(
            a in 1u32..1000,
            c in 1u32..1000,
        ) {
            let coefficients: CoefficientMap =
                vec![(0, -(c as f64)), (1, 0.0), (2, a as f64)]
                    .into_iter()
                    .collect();

            let got = solve(&coefficients).unwrap();

            match got.solution {
                Solution::TwoRoots(x1, x2) => prop_assert_eq!(x1, -x2),
                other => prop_assert!(false, "Expected two roots, found {:?}", other),
            }
        }

        #[test]
        fn every_root_satisfies_the_equation(
            a in -20i32..20,
            b in -20i32..20,
            c in -20i32..20,
        ) {
            let coefficients: CoefficientMap =
                vec![(0, c as f64), (1, b as f64), (2, a as f64)]
                    .into_iter()
                    .collect();

            let got = solve(&coefficients).unwrap();

            for root in got.solution.complex_roots() {
                let scale = 1.0
                    + (a.abs() as f64) * root.norm_sqr()
                    + (b.abs() as f64) * root.norm()
                    + c.abs() as f64;
                let residual = coefficients.evaluate(root).norm();
                prop_assert!(
                    residual <= 1e-9 * scale,
                    "p({}) = {} for {:?}",
                    root,
                    residual,
                    got.solution
                );
            }
        }
    }
}
