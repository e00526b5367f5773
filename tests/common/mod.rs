use fish::mach::Machine;

pub fn exec(source: &str, input: &str) -> String {
    exec_n(source, input, 5000)
}

pub fn exec_n(source: &str, input: &str, cycles: usize) -> String {
    let mut machine = Machine::new(source, input);
    let mut s = String::new();
    for _ in 0..cycles {
        if !machine.is_running() {
            break;
        }
        if let Err(error) = machine.step() {
            s.push_str(&machine.take_output());
            s.push_str(&format!("\n?{}\n", error));
            return s;
        }
    }
    if let Some(error) = machine.error() {
        s.push_str(&format!("?{}\n", error));
    }
    if machine.is_running() {
        s.push_str(&machine.take_output());
        s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
        return s;
    }
    s.push_str(&machine.take_output());
    s
}
