use super::*;

#[test]
fn test_first_cell_runs_on_construction() {
    let m = Machine::new("7", "");
    assert_eq!(m.steps(), 1);
    assert_eq!(m.position(), (0, 0));
    assert_eq!(top(&m), vec![7.0]);
}

#[test]
fn test_end_on_first_cell() {
    let mut m = Machine::new(";", "");
    assert!(m.is_completed());
    assert!(m.step().is_ok());
    assert_eq!(m.steps(), 1);
}

#[test]
fn test_backslash_turns_right_into_down() {
    let m = run("1\\\n n\n ;");
    assert_eq!(m.output(), "1");
    assert_eq!(m.position(), (1, 2));
    assert_eq!(m.direction(), (0, 1));
}

#[test]
fn test_slash_turns_right_into_up_and_wraps() {
    let m = run("1/\n ;\n n");
    assert_eq!(m.output(), "1");
    assert_eq!(m.position(), (1, 1));
}

#[test]
fn test_vertical_mirror_bounces() {
    let m = run("a|;n");
    assert_eq!(m.output(), "10");
}

#[test]
fn test_wraps_leftward() {
    let m = run("<;n5");
    assert_eq!(m.state(), &State::Completed);
    assert_eq!(m.output(), "5");
}

#[test]
fn test_trampoline_on_first_cell() {
    let m = run("!;1n;");
    assert_eq!(m.output(), "1");
}

#[test]
fn test_conditional_skip() {
    assert_eq!(run("10?;1n;").output(), "1");
    assert_eq!(run("01?;1n;").output(), "");
}

#[test]
fn test_teleport() {
    let m = run("40.;;7n;");
    assert_eq!(m.output(), "7");
    assert_eq!(m.position(), (7, 0));
}

#[test]
fn test_growth_changes_wraparound() {
    let m = run("';'80p5n");
    assert!(m.is_completed());
    assert_eq!(m.output(), "5");
    assert_eq!(m.position(), (8, 0));
    assert_eq!(m.grid_size(), (9, 1));
}

#[test]
fn test_random_direction_is_injected() {
    let source = "x1n;\n2\nn\n;";
    let down = run_with(source, Box::new(Sequence::new(vec![Vector::DOWN])));
    assert_eq!(down.output(), "2");
    let right = run_with(source, Box::new(Sequence::new(vec![Vector::RIGHT])));
    assert_eq!(right.output(), "1");
}
