//! Integration tests for reading live process memory.
//!
//! These tests spawn the `memview-target` fixture, parse the addresses it
//! prints, and verify that reading those addresses through a memory view
//! yields the printed values. The fixture is a direct child of the test
//! process, so the default Yama ptrace policy permits the reads.

#![cfg(target_os = "linux")]

use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use memview_core::error::MemviewError;
use memview_core::types::{Address, ProcessId};
use memview_core::ProcessMemory;
use regex::Regex;

const CONTINUE_PROMPT: &str = "Press ENTER to continue...";
const QUIT_PROMPT: &str = "Press ENTER to quit...";

/// A running fixture process, captured up to its first pause prompt.
struct TargetProcess
{
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
    /// The first printout, one entry per line, prompt excluded.
    lines: Vec<String>,
}

impl TargetProcess
{
    fn spawn() -> Self
    {
        let mut child = Command::new(env!("CARGO_BIN_EXE_memview-target"))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .expect("failed to spawn memview-target");

        let stdin = child.stdin.take().expect("fixture stdin not captured");
        let mut stdout = BufReader::new(child.stdout.take().expect("fixture stdout not captured"));
        let lines = read_until_prompt(&mut stdout, CONTINUE_PROMPT);

        Self {
            child,
            stdin,
            stdout,
            lines,
        }
    }

    fn pid(&self) -> ProcessId
    {
        ProcessId::from(self.child.id())
    }

    fn view(&self) -> Box<dyn ProcessMemory>
    {
        memview_core::open(self.pid()).expect("failed to open view on fixture")
    }

    /// Unblock the fixture's first pause and capture the second printout.
    fn advance(&mut self) -> Vec<String>
    {
        writeln!(self.stdin).expect("failed to write to fixture stdin");
        self.stdin.flush().expect("failed to flush fixture stdin");
        read_until_prompt(&mut self.stdout, QUIT_PROMPT)
    }

    /// Find the first line matching `pattern` and return its two captures:
    /// the printed value and the printed address.
    fn capture(&self, pattern: &str) -> (String, Address)
    {
        capture_in(&self.lines, pattern)
    }
}

impl Drop for TargetProcess
{
    fn drop(&mut self)
    {
        // Two newlines release both pauses regardless of how far the test got.
        let _ = self.stdin.write_all(b"\n\n");
        let _ = self.stdin.flush();
        let _ = self.child.wait();
    }
}

fn read_until_prompt(stdout: &mut BufReader<ChildStdout>, prompt: &str) -> Vec<String>
{
    let mut lines = Vec::new();
    loop {
        let mut line = String::new();
        let n = stdout.read_line(&mut line).expect("failed to read fixture stdout");
        assert!(n > 0, "fixture exited before printing {prompt:?}");

        let line = line.trim_end().to_string();
        if line == prompt {
            return lines;
        }
        lines.push(line);
    }
}

fn capture_in(lines: &[String], pattern: &str) -> (String, Address)
{
    let re = Regex::new(pattern).expect("invalid test pattern");
    for line in lines {
        if let Some(caps) = re.captures(line) {
            let value = caps[1].to_string();
            let address = caps[2].parse::<Address>().expect("unparseable address in fixture output");
            return (value, address);
        }
    }
    panic!("no fixture line matched {pattern:?} in {lines:#?}");
}

#[test]
fn test_open_rejects_pid_zero()
{
    let result = memview_core::open(ProcessId::from(0));
    match result {
        Err(MemviewError::InvalidArgument(_)) => {}
        other => panic!("expected InvalidArgument for PID 0, got {other:?}"),
    }
}

#[test]
fn test_open_vacant_pid()
{
    // pid_t holds it, but no process can: the kernel's pid_max tops out
    // well below i32::MAX.
    let result = memview_core::open(ProcessId::from(i32::MAX as u32));
    match result {
        Err(MemviewError::ProcessNotFound(pid)) => assert_eq!(pid, i32::MAX as u32),
        other => panic!("expected ProcessNotFound, got {other:?}"),
    }
}

#[test]
fn test_read_i8()
{
    let target = TargetProcess::spawn();
    let (value, address) = target.capture(r"^i8: (-?\d+) at (0x[0-9a-f]+)$");

    let view = target.view();
    assert_eq!(view.read_i8(address).unwrap(), value.parse::<i8>().unwrap());
}

#[test]
fn test_read_i16()
{
    let target = TargetProcess::spawn();
    let (value, address) = target.capture(r"^i16: (-?\d+) at (0x[0-9a-f]+)$");

    let view = target.view();
    assert_eq!(view.read_i16(address).unwrap(), value.parse::<i16>().unwrap());
}

#[test]
fn test_read_u16()
{
    let target = TargetProcess::spawn();
    let (value, address) = target.capture(r"^u16: (\d+) at (0x[0-9a-f]+)$");

    let view = target.view();
    assert_eq!(view.read_u16(address).unwrap(), value.parse::<u16>().unwrap());
}

#[test]
fn test_read_i32()
{
    let target = TargetProcess::spawn();
    let (value, address) = target.capture(r"^i32: (-?\d+) at (0x[0-9a-f]+)$");

    assert_eq!(value, "-988324");
    let view = target.view();
    assert_eq!(view.read_i32(address).unwrap(), -988_324);
}

#[test]
fn test_read_u32()
{
    let target = TargetProcess::spawn();
    let (value, address) = target.capture(r"^u32: (\d+) at (0x[0-9a-f]+)$");

    let view = target.view();
    assert_eq!(view.read_u32(address).unwrap(), value.parse::<u32>().unwrap());
}

#[test]
fn test_read_f32()
{
    let target = TargetProcess::spawn();
    let (value, address) = target.capture(r"^f32: (-?[0-9.]+) at (0x[0-9a-f]+)$");

    let view = target.view();
    // 28.75 is exactly representable, so bitwise equality is fine.
    assert_eq!(view.read_f32(address).unwrap(), value.parse::<f32>().unwrap());
}

#[test]
fn test_read_f64()
{
    let target = TargetProcess::spawn();
    let (value, address) = target.capture(r"^f64: (-?[0-9.]+) at (0x[0-9a-f]+)$");

    let view = target.view();
    assert_eq!(view.read_f64(address).unwrap(), value.parse::<f64>().unwrap());
}

#[test]
fn test_read_byte_array()
{
    let target = TargetProcess::spawn();
    let (values, address) = target.capture(r"^bytes: (\d+(?: \d+)*) at (0x[0-9a-f]+)$");

    let expected: Vec<u8> = values.split(' ').map(|v| v.parse().unwrap()).collect();
    assert_eq!(expected, vec![11, 22, 33, 44, 55, 66, 77, 88, 99]);

    let view = target.view();
    assert_eq!(view.read(address, expected.len()).unwrap(), expected);
}

#[test]
fn test_zero_length_read()
{
    let target = TargetProcess::spawn();
    let (_, address) = target.capture(r"^i32: (-?\d+) at (0x[0-9a-f]+)$");

    let view = target.view();
    assert_eq!(view.read(address, 0).unwrap(), Vec::<u8>::new());
}

#[test]
fn test_read_unmapped_address()
{
    let target = TargetProcess::spawn();
    let view = target.view();

    // Page zero is never mapped in an ordinary process.
    let result = view.read(Address::from(0x10), 8);
    match result {
        Err(MemviewError::BadAddress { .. } | MemviewError::ShortRead { .. }) => {}
        other => panic!("expected a read failure for an unmapped address, got {other:?}"),
    }
}

#[test]
fn test_view_reports_pid()
{
    let target = TargetProcess::spawn();
    let view = target.view();
    assert_eq!(view.pid(), target.pid());
}

#[test]
fn test_state_stable_across_pause()
{
    let mut target = TargetProcess::spawn();
    let first_pass = target.lines.clone();

    // Read through the view while the fixture waits at the first pause.
    let (_, int_addr) = target.capture(r"^i32: (-?\d+) at (0x[0-9a-f]+)$");
    let view = target.view();
    assert_eq!(view.read_i32(int_addr).unwrap(), -988_324);

    // Unblock the pause; the second printout must be byte-for-byte the
    // same (same values, same addresses, same order).
    let second_pass = target.advance();
    assert_eq!(first_pass, second_pass);

    // And the memory itself hasn't moved either.
    assert_eq!(view.read_i32(int_addr).unwrap(), -988_324);
}

#[test]
fn test_stack_variable_in_readable_region()
{
    let target = TargetProcess::spawn();
    let (_, address) = target.capture(r"^i32: (-?\d+) at (0x[0-9a-f]+)$");

    let view = target.view();
    let regions = view.regions().unwrap();
    assert!(!regions.is_empty());

    let region = regions
        .iter()
        .find(|r| r.contains(address))
        .expect("no region contains the fixture's stack variable");
    assert!(region.is_readable());
    assert!(region.is_writable());
    assert_eq!(region.name.as_deref(), Some("[stack]"));
}
