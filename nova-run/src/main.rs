use clap::{ArgAction, Parser as CParser};
use color_eyre::eyre::{Result, WrapErr, bail, eyre};
use log::LevelFilter;
use nova_vm::{CharSink, Exit, Machine, MachineConfig, OperandPolicy, ReaderSource, WriterSink};
use simple_logger::SimpleLogger;
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(CParser, Debug)]
#[command(name = "nova")]
#[command(about = "Nova word machine")]
struct Args {
    /// Program image: little-endian 16-bit words
    #[arg(required_unless_present = "self_test")]
    image: Option<PathBuf>,

    /// Halt on malformed operands instead of skipping the instruction
    #[arg(long)]
    strict: bool,

    /// Maximum stack depth
    #[arg(long, value_name = "WORDS")]
    stack_limit: Option<usize>,

    /// Stop after this many instructions
    #[arg(long, value_name = "N")]
    max_cycles: Option<u64>,

    /// Run the built-in check program instead of an image
    #[arg(long, conflicts_with = "image")]
    self_test: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn config(&self) -> MachineConfig {
        let mut config = MachineConfig::default();
        if self.strict {
            config = config.with_operand_policy(OperandPolicy::Strict);
        }
        if let Some(limit) = self.stack_limit {
            config = config.with_stack_limit(limit);
        }
        if let Some(limit) = self.max_cycles {
            config = config.with_cycle_limit(limit);
        }
        config
    }
}

fn build_machine(args: &Args) -> Result<Machine> {
    let config = args.config();
    if args.self_test {
        return nova_vm::self_test_machine(config).wrap_err("failed to load the self-test program");
    }

    let path = args
        .image
        .as_ref()
        .ok_or_else(|| eyre!("no program image given"))?;
    let image = fs::read(path).wrap_err_with(|| format!("failed to read {}", path.display()))?;

    let mut machine = Machine::new(config);
    machine
        .load(&image)
        .wrap_err_with(|| format!("failed to load {}", path.display()))?;
    Ok(machine)
}

fn main() -> Result<()> {
    color_eyre::install()?; // rust error handling
    let args = Args::parse();
    SimpleLogger::new().with_level(args.log_level()).init()?; // logging

    let mut machine = build_machine(&args)?;

    let mut input = ReaderSource::new(io::stdin().lock());
    let mut output = WriterSink::new(io::stdout().lock());
    let exit = machine.run(&mut input, &mut output);
    output.flush()?;

    match exit {
        Exit::Halted | Exit::OutOfBounds { .. } => Ok(()),
        Exit::CycleLimit { cycles } => bail!("stopped after {} cycles", cycles),
        Exit::Faulted(fault) => Err(fault).wrap_err("machine faulted"),
    }
}
