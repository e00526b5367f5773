use crate::mach::{Machine, Randomness, Sequence, State, Vector};

mod motion_test;

fn run(source: &str) -> Machine {
    run_cycles(Machine::new(source, ""), 5000)
}

fn run_with(source: &str, randomness: Box<dyn Randomness>) -> Machine {
    run_cycles(Machine::with_randomness(source, "", randomness), 5000)
}

fn run_cycles(mut machine: Machine, cycles: usize) -> Machine {
    for _ in 0..cycles {
        if !machine.is_running() {
            break;
        }
        let _ = machine.step();
    }
    machine
}

fn top(machine: &Machine) -> Vec<f64> {
    let frames = machine.stacks_snapshot();
    frames[frames.len() - 1].values().to_vec()
}
