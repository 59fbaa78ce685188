use approx::assert_relative_eq;
use computor::{
    parse, reduce, solve_equation, Equation, Error, Solution, SolveError,
    SyntaxError,
};

fn solution_of(src: &str) -> Solution {
    solve_equation(src).unwrap().solution
}

fn syntax_error_of(src: &str) -> String {
    src.parse::<Equation>().unwrap_err().to_string()
}

#[test]
fn coefficients_are_collected_onto_one_side() {
    let inputs = vec![
        ("x**2 = x^2", vec![(0, 0.0), (1, 0.0), (2, 0.0)]),
        (
            "2x**2 - 2x2 + 1x^2 + x2 = - 1 * x^2",
            vec![(0, 0.0), (1, 0.0), (2, 3.0)],
        ),
        ("x2 = 1 - x", vec![(0, -1.0), (1, 1.0), (2, 1.0)]),
        (
            "10*x^2=1*x^1+12*x^2-1*x^1-5*x^0",
            vec![(0, 5.0), (1, 0.0), (2, -2.0)],
        ),
        ("45x = 4", vec![(0, -4.0), (1, 45.0), (2, 0.0)]),
        ("45x2 = 4", vec![(0, -4.0), (1, 0.0), (2, 45.0)]),
    ];

    for (src, should_be) in inputs {
        let equation: Equation = src.parse().unwrap();

        let got: Vec<_> = equation.coefficients().iter().collect();

        assert_eq!(got, should_be, "parsing {:?}", src);
    }
}

#[test]
fn reduced_forms() {
    let inputs = vec![
        ("2x2 - 4x  + 0 = -4", "4 - 4 * X + 2 * X^2 = 0"),
        (
            "x2 - 4x + 3 * x**2 + 0 = -4 + 0 - 34x -x2",
            "4 + 30 * X + 5 * X^2 = 0",
        ),
        ("2x2 = 2x2", "0 = 0"),
        ("2x2 = 3x2", "-X^2 = 0"),
        ("2x = 3x2", "2 * X - 3 * X^2 = 0"),
        ("2x = 2x - 5", "5 = 0"),
        (" -5 - 2x = 2x - 5", "-4 * X = 0"),
        (" -5 - 2x = -3 * x - 5", "X = 0"),
    ];

    for (src, should_be) in inputs {
        let equation: Equation = src.parse().unwrap();

        assert_eq!(equation.reduced_form().to_string(), should_be);
    }
}

#[test]
fn the_parser_expects_normalized_input() {
    let coefficients = parse("x2=1-x").unwrap();

    assert_eq!(reduce(&coefficients), "-1 + X + X^2 = 0");
    assert!(parse("x2 = 1 - x").is_err());
}

#[test]
fn solving() {
    assert_eq!(solution_of("x2 = 0"), Solution::SingleRoot(0.0));
    assert_eq!(
        solution_of("2 * x^2 - 4 * x - 6 = 0"),
        Solution::TwoRoots(3.0, -1.0)
    );
    assert_eq!(solution_of("x - x = 4"), Solution::NoRoots);
    assert_eq!(solution_of("x + x = 4"), Solution::SingleRoot(2.0));
    assert_eq!(solution_of("x2 = 4"), Solution::TwoRoots(2.0, -2.0));
    assert_eq!(solution_of("2x - x = x"), Solution::AnyNumber);
    assert_eq!(solution_of("x2 + 5 = 0"), Solution::NoRoots);
    assert_eq!(
        solution_of("x2 - 6x + 34 = 0"),
        Solution::ComplexPair { re: 3.0, im: 5.0 }
    );
    assert_eq!(solution_of("2x2 = -4 + x2 + x^2"), Solution::NoRoots);
}

#[test]
fn degree_three_is_too_high() {
    let got = solve_equation("x3 - 3x - 10 = 0").unwrap_err();

    assert_eq!(
        got,
        Error::Solve(SolveError::DegreeTooHigh {
            degree: 3,
            reduced_form: String::from("-10 - 3 * X + X^3 = 0"),
        })
    );
    assert_eq!(
        got.to_string(),
        "The polynomial degree is strictly greater than 2, I can't solve."
    );
}

#[test]
fn task_examples() {
    let got = solution_of("5 * X^0 + 4 * X^1 - 9.3 * X^2 = 1 * X^0");
    assert_relative_eq!(
        got,
        Solution::TwoRoots(-0.475131, 0.905239),
        epsilon = 1e-6
    );
    assert_eq!(got.to_string(), "-0.475131, 0.905239");

    let got = solution_of("5 * X^0 + 4 * X^1 = 4 * X^0");
    assert_relative_eq!(got, Solution::SingleRoot(-0.25));

    let got = solution_of("5 + 4 * X + X^2= X^2");
    assert_relative_eq!(got, Solution::SingleRoot(-1.25));
}

#[test]
fn equals_and_variables() {
    let inputs = vec![
        ("", "Syntax error! No variables detected."),
        ("52 - 12 = 0", "Syntax error! No variables detected."),
        ("x2 + 0", "Syntax error! Unexpected number of '='."),
        (
            "x2 + 0 = 45 + 3x - 4x^2 = 9",
            "Syntax error! Unexpected number of '='.",
        ),
        ("x2 + 0 =", "Syntax error near '='."),
        (" = x2 + 0", "Syntax error near '='."),
        ("4 = * x2 + 10", "Syntax error near '='."),
        ("x = ", "Syntax error near '='."),
        (" = x", "Syntax error near '='."),
    ];

    for (src, should_be) in inputs {
        assert_eq!(syntax_error_of(src), should_be, "parsing {:?}", src);
    }
}

#[test]
fn unexpected_values() {
    let inputs = vec![
        (" - x - = 435", '-'),
        ("3x = 435 + ", '+'),
        ("3x = 435y", 'y'),
        ("3x = 435 - 345x2 + 4/6 + y", '/'),
        ("3*x**2 = 435 - 345*x^^2 ", '^'),
        ("xx2 = 9", 'x'),
        ("x*x2 = 9", '*'),
        ("x2.1 = 9 - 1", '.'),
        ("2.1x2 = 9. - 1", '.'),
    ];

    for (src, character) in inputs {
        match src.parse::<Equation>() {
            Err(SyntaxError::UnexpectedValue { character: got, .. }) => {
                assert_eq!(got, character, "parsing {:?}", src)
            },
            other => panic!("Unexpected result for {:?}: {:?}", src, other),
        }

        assert_eq!(
            syntax_error_of(src),
            format!("Syntax error! Unexpected value: '{}'", character)
        );
    }
}

#[test]
fn upper_case_variables_are_accepted() {
    assert_eq!(solution_of("X^2 = 4 * X^0"), Solution::TwoRoots(2.0, -2.0));
}

#[test]
fn coefficients_too_big_for_a_float_are_rejected() {
    let src = format!("{0}x2 = {0}x2 + x - 1", "9".repeat(400));

    let got = solve_equation(&src).unwrap_err();

    assert_eq!(
        got,
        Error::Syntax(SyntaxError::CoefficientOutOfRange {
            coefficient: "9".repeat(400),
        })
    );
}
