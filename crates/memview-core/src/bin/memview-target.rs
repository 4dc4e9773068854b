//! Diagnostic target program for memview.
//!
//! Declares a handful of stack-allocated primitives of differing sizes,
//! prints each value with its runtime address, pauses on stdin, and repeats
//! the printout. An external inspector (the memview tests, or a memory
//! scanner under test) parses the printed addresses and reads this process's
//! memory between the two passes; the pause exists purely so it can do that
//! while the values are guaranteed to sit still.
//!
//! The locals live for the whole of `main` and are never mutated, so both
//! passes print identical values at identical addresses.

use std::io::{self, BufRead, Write};

fn main()
{
    let byte_value: i8 = 55;
    let short_value: i16 = 12041;
    let ushort_value: u16 = 54310;
    let int_value: i32 = -988_324;
    let uint_value: u32 = 2134;

    let float_value: f32 = 28.75;
    let double_value: f64 = -4.125;

    let bytes: [u8; 9] = [11, 22, 33, 44, 55, 66, 77, 88, 99];

    print_state(
        &byte_value,
        &short_value,
        &ushort_value,
        &int_value,
        &uint_value,
        &float_value,
        &double_value,
        &bytes,
    );
    pause("Press ENTER to continue...");

    print_state(
        &byte_value,
        &short_value,
        &ushort_value,
        &int_value,
        &uint_value,
        &float_value,
        &double_value,
        &bytes,
    );
    pause("Press ENTER to quit...");
}

/// Print every variable as `<label>: <value> at <address>`, in declaration
/// order, followed by the byte array as a space-separated dump.
#[allow(clippy::too_many_arguments)]
fn print_state(
    byte_value: &i8,
    short_value: &i16,
    ushort_value: &u16,
    int_value: &i32,
    uint_value: &u32,
    float_value: &f32,
    double_value: &f64,
    bytes: &[u8; 9],
)
{
    println!("i8: {} at {:p}", byte_value, byte_value);
    println!("i16: {} at {:p}", short_value, short_value);
    println!("u16: {} at {:p}", ushort_value, ushort_value);
    println!("i32: {} at {:p}", int_value, int_value);
    println!("u32: {} at {:p}", uint_value, uint_value);

    println!("f32: {} at {:p}", float_value, float_value);
    println!("f64: {} at {:p}", double_value, double_value);

    print!("bytes:");
    for b in bytes {
        print!(" {b}");
    }
    println!(" at {:p}", bytes.as_ptr());
}

/// Print a prompt, flush, and block until one line of stdin arrives.
fn pause(prompt: &str)
{
    println!("{prompt}");
    io::stdout().flush().expect("failed to flush stdout");

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).expect("failed to read stdin");
}
