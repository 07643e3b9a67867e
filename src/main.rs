//! `a51` driver: builds registers from bit patterns, prints a keystream,
//! and exposes the modular-exponentiation helper.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use a51_keystream::utils::converter::{to_bit_string, to_hex, to_reversed_bit_string};
use a51_keystream::{fast_mod_exp, KeystreamGenerator, RegisterX, RegisterY, RegisterZ};

#[derive(Parser)]
#[command(name = "a51")]
#[command(about = "A5/1-style majority-clocked keystream generator")]
#[command(version)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate keystream bits from initial register contents
    Keystream(KeystreamArgs),
    /// Compute BASE^EXPONENT mod MODULUS by square-and-multiply
    Modexp(ModexpArgs),
}

#[derive(Args)]
struct KeystreamArgs {
    /// Initial contents of X (19 bits, index 0 leftmost)
    #[arg(long, default_value = "1111101010101010101")]
    x: String,

    /// Initial contents of Y (22 bits, index 0 leftmost)
    #[arg(long, default_value = "1100110011001100110011")]
    y: String,

    /// Initial contents of Z (23 bits, index 0 leftmost)
    #[arg(long, default_value = "11100001111000011110000")]
    z: String,

    /// Number of keystream bits
    #[arg(short = 'n', long, default_value_t = 10)]
    length: usize,

    /// How to print the keystream
    #[arg(long, value_enum, default_value_t = OutputFormat::Bits)]
    format: OutputFormat,

    /// Print register contents before and after generation
    #[arg(long)]
    show_registers: bool,
}

#[derive(Args)]
struct ModexpArgs {
    /// Base
    #[arg(default_value_t = 856)]
    base: u64,
    /// Exponent
    #[arg(default_value_t = 25)]
    exponent: u64,
    /// Modulus, must be non-zero
    #[arg(default_value_t = 7)]
    modulus: u64,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// `(0) <bits> (n-1)`, first bit leftmost
    Bits,
    /// `(n-1) <bits> (0)`, last bit leftmost
    Reversed,
    /// Packed bytes, first bit in the top bit of the first byte
    Hex,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "a51_keystream=warn",
        1 => "a51_keystream=debug",
        _ => "a51_keystream=trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Keystream(args) => run_keystream(args),
        Commands::Modexp(args) => run_modexp(args),
    }
}

fn run_keystream(args: KeystreamArgs) -> Result<()> {
    let x = RegisterX::from_bit_str(&args.x).context("invalid initial contents for X")?;
    let y = RegisterY::from_bit_str(&args.y).context("invalid initial contents for Y")?;
    let z = RegisterZ::from_bit_str(&args.z).context("invalid initial contents for Z")?;

    let mut ksg = KeystreamGenerator::new(x, y, z);
    if args.show_registers {
        println!("Initial registers:");
        print_registers(&ksg);
    }

    info!(length = args.length, "generating keystream");
    let keystream = ksg.generate_keystream(args.length);

    if args.show_registers {
        println!("Final registers:");
        print_registers(&ksg);
    }

    let last = args.length.saturating_sub(1);
    match args.format {
        OutputFormat::Bits => println!("(0) {} ({})", to_bit_string(&keystream), last),
        OutputFormat::Reversed => {
            println!("({}) {} (0)", last, to_reversed_bit_string(&keystream))
        }
        OutputFormat::Hex => println!("{}", to_hex(&keystream)),
    }
    Ok(())
}

fn print_registers(ksg: &KeystreamGenerator) {
    println!("{}", ksg.x());
    println!("{}", ksg.y());
    println!("{}", ksg.z());
}

fn run_modexp(args: ModexpArgs) -> Result<()> {
    let r = fast_mod_exp(args.base, args.exponent, args.modulus).with_context(|| {
        format!(
            "cannot compute {}^{} mod {}",
            args.base, args.exponent, args.modulus
        )
    })?;
    println!("final remainder: {}", r);
    Ok(())
}
