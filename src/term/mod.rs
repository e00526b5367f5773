extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use ansi_term::Style;
use clap::Parser;
use fish::error;
use fish::lang::Error;
use fish::mach::{Frame, Machine, Random};
use linefeed::{Interface, ReadResult, Signal};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Run ><> programs.
#[derive(Parser, Debug)]
#[command(name = "fish", version)]
struct Args {
    /// Source file to run
    #[arg(required_unless_present = "code", conflicts_with = "code")]
    file: Option<PathBuf>,
    /// Program source given inline
    #[arg(short, long)]
    code: Option<String>,
    /// Text the program reads with `i`
    #[arg(short, long, default_value = "")]
    input: String,
    /// Seed for the `x` instruction
    #[arg(long)]
    seed: Option<u64>,
    /// Start the stepping debugger
    #[arg(short, long)]
    debug: bool,
    /// Milliseconds between steps when the debugger runs freely
    #[arg(long, default_value_t = 100)]
    delay: u64,
    /// Stop after this many steps
    #[arg(long)]
    limit: Option<usize>,
}

pub fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");

    let source = match (&args.code, &args.file) {
        (Some(code), _) => code.clone(),
        (None, Some(path)) => match load(path) {
            Ok(source) => source,
            Err(error) => {
                eprintln!("{}", Style::new().bold().paint(error.to_string()));
                std::process::exit(2);
            }
        },
        (None, None) => unreachable!("clap requires a source"),
    };
    let random = match args.seed {
        Some(seed) => Random::seeded(seed),
        None => Random::from_entropy(),
    };
    let machine = Machine::with_randomness(&source, &args.input, Box::new(random));
    info!(size = ?machine.grid_size(), debug = args.debug, "program loaded");

    let result = if args.debug {
        debug_loop(machine, Duration::from_millis(args.delay), interrupted)
    } else {
        headless(machine, args.limit, interrupted)
    };
    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    }
}

/// Streams output to stdout. Returns false if the program failed.
fn headless(
    mut machine: Machine,
    limit: Option<usize>,
    interrupted: Arc<AtomicBool>,
) -> std::io::Result<bool> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut taken = 0;
    loop {
        out.write_all(machine.take_output().as_bytes())?;
        if let Some(error) = machine.error() {
            out.flush()?;
            eprintln!("{}", Style::new().bold().paint(error.to_string()));
            return Ok(false);
        }
        if !machine.is_running() || interrupted.load(Ordering::SeqCst) {
            break;
        }
        if let Some(limit) = limit {
            if taken >= limit {
                info!(limit, "step limit reached");
                break;
            }
        }
        if let Err(error) = machine.step() {
            info!(%error, steps = machine.steps(), "program stopped");
        }
        taken += 1;
    }
    out.flush()?;
    Ok(true)
}

enum Command {
    Step(usize),
    Run,
    Delay(u64),
    Quit,
    Help,
}

impl Command {
    fn parse(line: &str) -> Option<Command> {
        let mut words = line.split_whitespace();
        let command = match words.next() {
            None => return Some(Command::Step(1)),
            Some(word) => word.to_ascii_lowercase(),
        };
        let arg = words.next();
        match command.as_str() {
            "s" | "step" => match arg {
                None => Some(Command::Step(1)),
                Some(n) => n.parse().ok().map(Command::Step),
            },
            "r" | "run" => Some(Command::Run),
            "d" | "delay" => arg.and_then(|ms| ms.parse().ok()).map(Command::Delay),
            "q" | "quit" => Some(Command::Quit),
            "h" | "help" | "?" => Some(Command::Help),
            _ => None,
        }
    }
}

const HELP: &str = "\
<enter>, s [N]  step N instructions
r               run until the program stops or Ctrl-C
d MS            delay between steps while running
q               quit
";

fn debug_loop(
    mut machine: Machine,
    mut delay: Duration,
    interrupted: Arc<AtomicBool>,
) -> std::io::Result<bool> {
    let interface = Interface::new("fish")?;
    interface.set_report_signal(Signal::Interrupt, true);
    interface.set_prompt("> ")?;
    interface.write_fmt(format_args!("{}", render(&machine)))?;
    loop {
        let line = match interface.read_line()? {
            ReadResult::Input(line) => line,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        match Command::parse(&line) {
            Some(Command::Step(n)) => {
                for _ in 0..n {
                    if machine.step().is_err() || !machine.is_running() {
                        break;
                    }
                }
            }
            Some(Command::Run) => {
                interrupted.store(false, Ordering::SeqCst);
                while machine.is_running() && !interrupted.load(Ordering::SeqCst) {
                    let result = machine.step();
                    interface.write_fmt(format_args!("{}", render(&machine)))?;
                    if result.is_err() {
                        break;
                    }
                    std::thread::sleep(delay);
                }
                interrupted.store(false, Ordering::SeqCst);
            }
            Some(Command::Delay(ms)) => delay = Duration::from_millis(ms),
            Some(Command::Quit) => break,
            Some(Command::Help) => {
                interface.write_fmt(format_args!("{}", HELP))?;
                continue;
            }
            None => {
                interface.write_fmt(format_args!("?{}\n{}", line, HELP))?;
                continue;
            }
        }
        if !line.trim().is_empty() {
            interface.add_history_unique(line);
        }
        interface.write_fmt(format_args!("{}", render(&machine)))?;
    }
    Ok(machine.error().is_none())
}

fn render(machine: &Machine) -> String {
    let mut s = String::from("\x1b[2J\x1b[H");
    for (index, frame) in machine.stacks_snapshot().iter().enumerate() {
        s.push_str(&format!("stack {}: {}\n", index, render_frame(frame)));
    }
    s.push('\n');
    let (px, py) = machine.position();
    let cursor = Style::new().reverse();
    let (width, _) = machine.grid_size();
    for (y, row) in machine.grid_snapshot().iter().enumerate() {
        let mut chars: Vec<char> = row.chars().collect();
        if y as isize == py && chars.len() < width as usize {
            chars.resize(width as usize, ' ');
        }
        for (x, ch) in chars.iter().enumerate() {
            if x as isize == px && y as isize == py {
                s.push_str(&cursor.paint(ch.to_string()).to_string());
            } else {
                s.push(*ch);
            }
        }
        s.push('\n');
    }
    if machine.in_string_mode() {
        s.push_str("\n(string mode)\n");
    }
    s.push_str(&format!("\ninput:  {}\n", machine.input()));
    s.push_str(&format!("output: {}\n", machine.output()));
    match machine.error() {
        Some(error) => s.push_str(&format!("{}\n", Style::new().bold().paint(error.to_string()))),
        None if machine.is_completed() => s.push_str("completed\n"),
        None => {}
    }
    s
}

fn render_frame(frame: &Frame) -> String {
    let values: Vec<String> = frame.values().iter().map(|v| v.to_string()).collect();
    let mut s = format!("[{}]", values.join(", "));
    if let Some(register) = frame.register() {
        s.push_str(&format!(" &{}", register));
    }
    s
}

fn load(path: &PathBuf) -> Result<String, Error> {
    let name = path.display().to_string();
    match std::fs::read_to_string(path) {
        Ok(source) => Ok(source),
        Err(error) => match error.kind() {
            ErrorKind::NotFound => Err(error!(FileNotFound; name.as_str())),
            _ => Err(error!(InternalError; error.to_string().as_str())),
        },
    }
}
