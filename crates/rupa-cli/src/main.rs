//! Rupa Polymorphic Value Core - CLI
//!
//! Demo harness for the Rupa core. Constructs values and shapes, invokes
//! the core call surface, and performs all of the printing the core itself
//! never does.

use std::process;

use clap::{Parser, Subcommand};

use rupa_core::config::RupaConfig;
use rupa_core::dispatch::registry::{ShapeKind, ShapeRegistry};
use rupa_core::events::EventRecorder;
use rupa_core::ops::{combine, double_value};
use rupa_core::value::tag::ValueTag;
use rupa_core::value::tagged::TaggedValue;
use rupa_core::RupaResult;
use rupa_host::counter::Counter;

#[derive(Parser)]
#[command(name = "rupa", about = "Rupa polymorphic value core demos", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tagged value construction, checked reads, and reinterpretation
    Values,

    /// Shape dispatch, bound callables, and lifecycle events
    Shapes {
        /// Print events as JSON lines
        #[arg(long)]
        json: bool,
    },

    /// Type-directed combination and doubling
    Combine,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Values => run_values(),
        Commands::Shapes { json } => run_shapes(json),
        Commands::Combine => run_combine(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run_values() -> RupaResult<()> {
    let answer = TaggedValue::integer(42);
    println!("integer value: {}", answer.as_integer()?);

    // a mismatched read is refused, never reinterpreted
    match answer.as_float() {
        Ok(v) => println!("unexpected float read: {}", v),
        Err(e) => println!("float read refused: {}", e),
    }

    // replacement swaps tag and payload together
    let pi = answer.set(ValueTag::Float, 3.14f64.to_bits());
    println!("replaced value: {}", pi.as_float()?);

    // the explicit escape hatch exposes the raw bit pattern
    let bits = pi.reinterpret(ValueTag::Integer);
    println!("float bits as integer: {}", bits.as_integer()?);

    let letter = TaggedValue::byte(b'A');
    println!("byte payload: {}", letter.get(ValueTag::Byte)?);

    Ok(())
}

fn run_shapes(json: bool) -> RupaResult<()> {
    let registry = ShapeRegistry::new(EventRecorder::new(&RupaConfig::new()));
    let recorder = registry.recorder().clone();

    {
        let base = registry.create(ShapeKind::Base);
        let derived = registry.create(ShapeKind::Derived);

        println!("{}", registry.describe(base.as_ref()));
        println!("{}", registry.describe(derived.as_ref()));

        registry.callable().invoke("Message via bound callable");
    } // shapes released here, derived facet before its base facet

    let events = recorder.drain();
    for event in &events {
        if json {
            let line = serde_json::to_string(event).expect("event serialization failed");
            println!("{}", line);
        } else {
            println!("{}", rupa_host::render_event(event));
        }
    }

    let delivered = rupa_host::deliver(&events, print_message)?;
    println!("{} message(s) delivered", delivered);

    Ok(())
}

fn print_message(message: &str) -> RupaResult<()> {
    println!("host sink: {}", message);
    Ok(())
}

fn run_combine() -> RupaResult<()> {
    println!("5 + 10 = {}", combine(5i64, 10i64)?);
    println!("combined greeting: {}", combine("Hello", "World")?);
    println!("1 + 2.5 = {}", combine(1i64, 2.5f64)?);
    println!("double 21 = {}", double_value(21i64)?);

    let mut counter = Counter::new();
    counter.increment();
    counter.increment();
    println!("counter now: {}", counter.value());

    Ok(())
}
