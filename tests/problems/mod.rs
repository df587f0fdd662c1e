use ratlp::*;

pub fn assert_optimal(result: &RatLpResult, expected_obj: Rational, expected_x: &[Rational]) {
    match result {
        Ok(SolverResult::Optimal(sol)) => {
            assert_eq!(
                sol.obj(),
                &expected_obj,
                "obj: {}, expected: {}",
                sol.obj(),
                expected_obj
            );

            let x = sol.decision_values();

            assert_eq!(x.len(), expected_x.len());

            for (x1, x2) in x.iter().zip(expected_x) {
                assert_eq!(x1, x2, "x_i: {}, expected: {}", x1, x2);
            }
        }

        _ => panic!("not optimal: {:?}", result),
    }
}

pub fn assert_slacks(result: &RatLpResult, expected_slacks: &[Rational]) {
    match result {
        Ok(SolverResult::Optimal(sol)) => assert_eq!(sol.slack_values(), expected_slacks),
        _ => panic!("not optimal: {:?}", result),
    }
}

pub fn assert_unbounded(result: &RatLpResult) {
    match result {
        Ok(SolverResult::Unbounded { .. }) => (),
        _ => panic!("not unbounded: {:?}", result),
    }
}

pub fn assert_unsupported(result: &RatLpResult) {
    match result {
        Err(RatLpError::UnsupportedConstraint { .. }) => (),
        _ => panic!("not rejected: {:?}", result),
    }
}

pub struct TestProblem {
    pub prob: Problem,
    pub check_result: Box<dyn FnOnce(&RatLpResult)>,
}

impl TestProblem {
    fn new<F: FnOnce(&RatLpResult) + 'static>(prob: Problem, check_result: F) -> Self {
        Self {
            prob,
            check_result: Box::new(check_result),
        }
    }
}

fn r(n: i64) -> Rational {
    rational(n)
}

pub fn one_variable_one_pivot() -> TestProblem {
    let mut prob = Problem::new(Direction::Maximize);

    let x1 = prob.add_var(r(1), Some("x1".to_string())).unwrap();
    prob.add_constraint(vec![(x1, r(1))], ConstraintOp::Lte, r(5))
        .unwrap();

    TestProblem::new(prob, |result: &RatLpResult| {
        assert_optimal(result, r(5), &[r(5)]);
        assert_slacks(result, &[r(0)]);

        if let Ok(SolverResult::Optimal(sol)) = result {
            assert_eq!(sol.steps(), 1);
        }
    })
}

pub fn one_variable_unbounded() -> TestProblem {
    let mut prob = Problem::new(Direction::Maximize);

    let x1 = prob.add_var(r(1), Some("x1".to_string())).unwrap();
    prob.add_constraint(vec![(x1, r(-1))], ConstraintOp::Lte, r(5))
        .unwrap();

    TestProblem::new(prob, |result: &RatLpResult| assert_unbounded(result))
}

pub fn two_variables_unbounded() -> TestProblem {
    let mut prob = Problem::new(Direction::Maximize);

    let x1 = prob.add_var(r(1), None).unwrap();
    let x2 = prob.add_var(r(1), None).unwrap();

    prob.add_constraint(vec![(x1, r(1)), (x2, r(-1))], ConstraintOp::Lte, r(1))
        .unwrap();
    prob.add_constraint(vec![(x1, r(-1)), (x2, r(1))], ConstraintOp::Lte, r(1))
        .unwrap();

    TestProblem::new(prob, |result: &RatLpResult| assert_unbounded(result))
}

pub fn two_variables_small() -> TestProblem {
    let mut prob = Problem::new(Direction::Maximize);

    let x1 = prob.add_var(r(5), None).unwrap();
    let x2 = prob.add_var(r(2), None).unwrap();

    prob.add_constraint(vec![(x1, r(10)), (x2, r(12))], ConstraintOp::Lte, r(60))
        .unwrap();
    prob.add_constraint(vec![(x1, r(2)), (x2, r(1))], ConstraintOp::Lte, r(6))
        .unwrap();

    TestProblem::new(prob, |result: &RatLpResult| {
        assert_optimal(result, r(15), &[r(3), r(0)]);
        assert_slacks(result, &[r(30), r(0)]);
    })
}

pub fn already_optimal() -> TestProblem {
    let mut prob = Problem::new(Direction::Maximize);

    let x1 = prob.add_var(r(-1), None).unwrap();
    let x2 = prob.add_var(r(0), None).unwrap();

    prob.add_constraint(vec![(x1, r(1)), (x2, r(1))], ConstraintOp::Lte, r(3))
        .unwrap();

    TestProblem::new(prob, |result: &RatLpResult| {
        assert_optimal(result, r(0), &[r(0), r(0)]);
        assert_slacks(result, &[r(3)]);

        if let Ok(SolverResult::Optimal(sol)) = result {
            assert_eq!(sol.steps(), 0);
        }
    })
}

pub fn three_variables() -> TestProblem {
    let mut prob = Problem::new(Direction::Maximize);

    let x1 = prob.add_var(r(3), None).unwrap();
    let x2 = prob.add_var(r(1), None).unwrap();
    let x3 = prob.add_var(r(2), None).unwrap();

    prob.add_constraint(
        vec![(x1, r(1)), (x2, r(1)), (x3, r(3))],
        ConstraintOp::Lte,
        r(30),
    )
    .unwrap();

    prob.add_constraint(
        vec![(x1, r(2)), (x2, r(2)), (x3, r(5))],
        ConstraintOp::Lte,
        r(24),
    )
    .unwrap();

    prob.add_constraint(
        vec![(x1, r(4)), (x2, r(1)), (x3, r(2))],
        ConstraintOp::Lte,
        r(36),
    )
    .unwrap();

    TestProblem::new(prob, |result: &RatLpResult| {
        assert_optimal(result, r(28), &[r(8), r(4), r(0)]);
        assert_slacks(result, &[r(18), r(0), r(0)]);
    })
}

pub fn fractional_coefficients() -> TestProblem {
    let mut prob = Problem::new(Direction::Maximize);

    let x1 = prob.add_var(r(2), None).unwrap();
    let x2 = prob.add_var(r(3), None).unwrap();

    prob.add_constraint(
        vec![(x1, ratio(1, 2)), (x2, ratio(1, 4))],
        ConstraintOp::Lte,
        r(4),
    )
    .unwrap();

    prob.add_constraint(vec![(x1, r(1)), (x2, r(3))], ConstraintOp::Lte, r(20))
        .unwrap();
    prob.add_constraint(vec![(x1, r(1)), (x2, r(1))], ConstraintOp::Lte, r(10))
        .unwrap();

    TestProblem::new(prob, |result: &RatLpResult| {
        assert_optimal(result, r(25), &[r(5), r(5)]);
        assert_slacks(result, &[ratio(1, 4), r(0), r(0)]);
    })
}

pub fn degenerate_first_pivot() -> TestProblem {
    let mut prob = Problem::new(Direction::Maximize);

    let x1 = prob.add_var(r(2), None).unwrap();
    let x2 = prob.add_var(r(1), None).unwrap();

    prob.add_constraint(vec![(x1, r(1))], ConstraintOp::Lte, r(0))
        .unwrap();
    prob.add_constraint(vec![(x2, r(1))], ConstraintOp::Lte, r(2))
        .unwrap();
    prob.add_constraint(vec![(x1, r(1)), (x2, r(1))], ConstraintOp::Lte, r(3))
        .unwrap();

    TestProblem::new(prob, |result: &RatLpResult| {
        assert_optimal(result, r(2), &[r(0), r(2)]);
        assert_slacks(result, &[r(0), r(0), r(1)]);
    })
}

pub fn minimize() -> TestProblem {
    let mut prob = Problem::new(Direction::Minimize);

    let x1 = prob.add_var(r(-1), None).unwrap();
    let x2 = prob.add_var(r(-2), None).unwrap();

    prob.add_constraint(vec![(x1, r(1)), (x2, r(1))], ConstraintOp::Lte, r(4))
        .unwrap();
    prob.add_constraint(vec![(x2, r(1))], ConstraintOp::Lte, r(3))
        .unwrap();

    TestProblem::new(prob, |result: &RatLpResult| {
        //obj is reported with the negated coefficients the core maximized
        assert_optimal(result, r(7), &[r(1), r(3)]);

        if let Ok(SolverResult::Optimal(sol)) = result {
            assert_eq!(sol.original_obj(), r(-7));
            assert_eq!(sol.direction(), Direction::Minimize);
        }
    })
}

pub fn gte_constraint() -> TestProblem {
    let mut prob = Problem::new(Direction::Maximize);

    let x1 = prob.add_var(r(1), None).unwrap();
    prob.add_constraint(vec![(x1, r(1))], ConstraintOp::Lte, r(4))
        .unwrap();
    prob.add_constraint(vec![(x1, r(1))], ConstraintOp::Gte, r(1))
        .unwrap();

    TestProblem::new(prob, |result: &RatLpResult| assert_unsupported(result))
}

pub fn eq_constraint() -> TestProblem {
    let mut prob = Problem::new(Direction::Maximize);

    let x1 = prob.add_var(r(1), None).unwrap();
    prob.add_constraint(vec![(x1, r(1))], ConstraintOp::Eq, r(4))
        .unwrap();

    TestProblem::new(prob, |result: &RatLpResult| assert_unsupported(result))
}

/// Beale's example, cycles under the most negative reduced cost rule.
pub fn beale_cycle() -> TestProblem {
    let mut prob = Problem::new(Direction::Maximize);

    let x = prob.add_var(ratio(3, 4), Some("x".to_string())).unwrap();
    let y = prob.add_var(r(-20), Some("y".to_string())).unwrap();
    let z = prob.add_var(ratio(1, 2), Some("z".to_string())).unwrap();
    let w = prob.add_var(r(-6), Some("w".to_string())).unwrap();

    prob.add_constraint(
        vec![(x, ratio(1, 4)), (y, r(-8)), (z, r(-1)), (w, r(9))],
        ConstraintOp::Lte,
        r(0),
    )
    .unwrap();

    prob.add_constraint(
        vec![(x, ratio(1, 2)), (y, r(-12)), (z, ratio(-1, 2)), (w, r(3))],
        ConstraintOp::Lte,
        r(0),
    )
    .unwrap();

    prob.add_constraint(vec![(z, r(1))], ConstraintOp::Lte, r(1))
        .unwrap();

    TestProblem::new(prob, |result: &RatLpResult| {
        assert_optimal(result, ratio(5, 4), &[r(1), r(0), r(1), r(0)])
    })
}
