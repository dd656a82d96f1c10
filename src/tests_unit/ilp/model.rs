use super::*;

#[test]
fn test_comparison_holds() {
    assert!(Comparison::Le.holds(1.0, 1.0));
    assert!(Comparison::Le.holds(0.5, 1.0));
    assert!(!Comparison::Le.holds(1.5, 1.0));
    assert!(Comparison::Ge.holds(2.0, 1.0));
    assert!(!Comparison::Ge.holds(0.0, 1.0));
    assert!(Comparison::Eq.holds(1.0, 1.0));
    assert!(!Comparison::Eq.holds(1.0, 0.0));
}

#[test]
fn test_constraint_evaluation() {
    let constraint = LinearConstraint::ge(vec![(0, 1.0), (2, 2.0)], 2.0);
    assert_eq!(constraint.evaluate_lhs(&[1, 1, 1]), 3.0);
    assert!(constraint.is_satisfied(&[0, 0, 1]));
    assert!(!constraint.is_satisfied(&[1, 1, 0]));
    // indices past the assignment read as 0
    assert_eq!(constraint.evaluate_lhs(&[1]), 1.0);
}

#[test]
fn test_equality_constraint() {
    let constraint = LinearConstraint::eq(vec![(0, 1.0), (1, 1.0)], 1.0);
    assert!(constraint.is_satisfied(&[1, 0]));
    assert!(constraint.is_satisfied(&[0, 1]));
    assert!(!constraint.is_satisfied(&[1, 1]));
    assert!(!constraint.is_satisfied(&[0, 0]));
}

#[test]
fn test_fractional_coefficients() {
    // the double-Roman defense row uses exact halves
    let constraint = LinearConstraint::ge(vec![(0, 0.5), (1, 0.5)], 1.0);
    assert!(constraint.is_satisfied(&[1, 1]));
    assert!(!constraint.is_satisfied(&[1, 0]));
}

#[test]
fn test_program_feasibility_and_objective() {
    let program = BinaryProgram::new(
        3,
        vec![
            LinearConstraint::le(vec![(0, 1.0), (1, 1.0)], 1.0),
            LinearConstraint::ge(vec![(2, 1.0)], 1.0),
        ],
        vec![(0, 1.0), (1, 2.0), (2, 4.0)],
        ObjectiveSense::Maximize,
    );
    assert!(program.is_feasible(&[1, 0, 1]));
    assert!(program.is_feasible(&[0, 1, 1]));
    assert!(!program.is_feasible(&[1, 1, 1]));
    assert!(!program.is_feasible(&[1, 0, 0]));
    // wrong arity is never feasible
    assert!(!program.is_feasible(&[1, 0]));
    assert_eq!(program.evaluate_objective(&[0, 1, 1]), 6.0);
    assert_eq!(program.evaluate_objective(&[0, 0, 0]), 0.0);
}

#[test]
fn test_serde_round_trip() {
    let program = BinaryProgram::new(
        2,
        vec![LinearConstraint::le(vec![(0, 1.0), (1, 1.0)], 1.0)],
        vec![(0, 1.0)],
        ObjectiveSense::Minimize,
    );
    let json = serde_json::to_string(&program).unwrap();
    let back: BinaryProgram = serde_json::from_str(&json).unwrap();
    assert_eq!(program, back);
}
