use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use memview_core::types::{Address, ProcessId};
use memview_core::{ProcessMemory, Result as MemviewResult};
use memview_utils::{info, init_logging};

/// A read-only process memory inspector with typed reads and region listing.
#[derive(Parser, Debug)]
#[command(name = "memview")]
#[command(version)]
#[command(about = "Inspect the memory of a running process", long_about = None)]
struct Cli
{
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands
{
    /// Read raw bytes from a process and hex-dump them
    Dump
    {
        /// Process ID (PID) to inspect
        pid: u32,
        /// Memory address to read from (hex format: 0x1000 or decimal)
        address: Address,
        /// Number of bytes to read
        #[arg(short, long, default_value_t = 16)]
        length: usize,
    },
    /// Read a single typed value from a process
    Value
    {
        /// Process ID (PID) to inspect
        pid: u32,
        /// Memory address to read from (hex format: 0x1000 or decimal)
        address: Address,
        /// Type to decode at the address
        #[arg(short, long, value_enum)]
        kind: ValueKind,
    },
    /// List memory regions of a process
    Regions
    {
        /// Process ID (PID) to inspect
        pid: u32,
    },
}

/// Primitive types the `value` subcommand can decode
#[derive(ValueEnum, Debug, Clone, Copy)]
enum ValueKind
{
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
}

fn main()
{
    // Initialize logging (reads from RUST_LOG env var)
    // Defaults to INFO level and Pretty format if not set
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    let cli = Cli::parse();

    if let Err(e) = run_command(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run_command(cli: Cli) -> MemviewResult<()>
{
    match cli.command {
        Commands::Dump { pid, address, length } => {
            info!("Reading {} bytes at {} from process {}", length, address, pid);
            let view = memview_core::open(ProcessId::from(pid))?;
            let data = view.read(address, length)?;
            print_hex_dump(address, &data);
            Ok(())
        }
        Commands::Value { pid, address, kind } => {
            info!("Reading {:?} at {} from process {}", kind, address, pid);
            let view = memview_core::open(ProcessId::from(pid))?;
            print_value(&*view, address, kind)
        }
        Commands::Regions { pid } => {
            info!("Listing memory regions of process {}", pid);
            let view = memview_core::open(ProcessId::from(pid))?;
            let regions = view.regions()?;
            for region in &regions {
                println!(
                    "{:4} {}-{} {} {:10} {}",
                    region.id.value(),
                    region.start,
                    region.end,
                    region.permissions,
                    region.size(),
                    region.name.as_deref().unwrap_or("")
                );
            }
            println!("{} regions", regions.len());
            Ok(())
        }
    }
}

fn print_value(view: &dyn ProcessMemory, address: Address, kind: ValueKind) -> MemviewResult<()>
{
    match kind {
        ValueKind::I8 => println!("{}", view.read_i8(address)?),
        ValueKind::U8 => println!("{}", view.read_u8(address)?),
        ValueKind::I16 => println!("{}", view.read_i16(address)?),
        ValueKind::U16 => println!("{}", view.read_u16(address)?),
        ValueKind::I32 => println!("{}", view.read_i32(address)?),
        ValueKind::U32 => println!("{}", view.read_u32(address)?),
        ValueKind::I64 => println!("{}", view.read_i64(address)?),
        ValueKind::U64 => println!("{}", view.read_u64(address)?),
        ValueKind::F32 => println!("{}", view.read_f32(address)?),
        ValueKind::F64 => println!("{}", view.read_f64(address)?),
    }
    Ok(())
}

/// Print `data` as rows of 16 hex bytes with an ASCII gutter.
fn print_hex_dump(start: Address, data: &[u8])
{
    for (i, row) in data.chunks(16).enumerate() {
        let row_addr = start + (i as u64 * 16);
        print!("{row_addr}  ");

        for (j, byte) in row.iter().enumerate() {
            if j == 8 {
                print!(" ");
            }
            print!("{byte:02x} ");
        }
        // Pad short final rows so the ASCII gutter lines up
        for j in row.len()..16 {
            if j == 8 {
                print!(" ");
            }
            print!("   ");
        }

        print!(" |");
        for byte in row {
            let c = if byte.is_ascii_graphic() || *byte == b' ' {
                *byte as char
            } else {
                '.'
            };
            print!("{c}");
        }
        println!("|");
    }
}
