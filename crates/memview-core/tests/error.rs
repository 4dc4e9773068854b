//! Tests for error handling

use memview_core::error::MemviewError;
#[cfg(target_os = "linux")]
use memview_core::platform::linux::error::SysError;
use memview_core::types::Address;

#[cfg(target_os = "linux")]
#[test]
fn test_sys_error_no_such_process()
{
    let error = SysError::from(libc::ESRCH);
    let message = format!("{}", error);
    assert!(message.contains("No such process"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_sys_error_permission_denied()
{
    let eperm = SysError::from(libc::EPERM);
    assert!(format!("{eperm}").contains("Permission denied"));

    // EACCES maps to the same variant
    let eacces = SysError::from(libc::EACCES);
    assert!(format!("{eacces}").contains("Permission denied"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_sys_error_bad_address()
{
    let error = SysError::from(libc::EFAULT);
    let message = format!("{}", error);
    assert!(message.contains("Bad remote address"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_sys_error_unknown()
{
    let error = SysError::from(999);
    let message = format!("{}", error);
    assert!(message.contains("999"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_sys_error_to_memview_error()
{
    let sys_err = SysError::from(libc::ENOSYS);
    let view_err: MemviewError = sys_err.into();

    match view_err {
        MemviewError::Sys(_) => {
            // Expected: SysError should convert to the Sys variant
        }
        _ => panic!("Expected Sys variant"),
    }
}

#[test]
fn test_memview_error_process_not_found()
{
    let error = MemviewError::ProcessNotFound(12345);
    let message = format!("{}", error);
    assert!(message.contains("12345"));
    assert!(message.contains("not found"));
}

#[test]
fn test_memview_error_permission_denied()
{
    let error = MemviewError::PermissionDenied("test reason".to_string());
    let message = format!("{}", error);
    assert!(message.contains("Permission denied"));
    assert!(message.contains("test reason"));
}

#[test]
fn test_memview_error_invalid_argument()
{
    let error = MemviewError::InvalidArgument("PID 0 is not a valid target".to_string());
    let message = format!("{}", error);
    assert!(message.contains("Invalid argument"));
    assert!(message.contains("PID 0"));
}

#[test]
fn test_memview_error_bad_address()
{
    let error = MemviewError::BadAddress {
        address: Address::from(0x10),
        length: 8,
    };
    let message = format!("{}", error);
    assert!(message.contains("0x0000000000000010"));
    assert!(message.contains("8 bytes"));
}

#[test]
fn test_memview_error_short_read()
{
    let error = MemviewError::ShortRead {
        address: Address::from(0x1000),
        wanted: 4096,
        got: 512,
    };
    let message = format!("{}", error);
    assert!(message.contains("4096"));
    assert!(message.contains("512"));
}

#[test]
fn test_memview_error_from_io()
{
    let io_err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
    let view_err: MemviewError = io_err.into();
    assert!(format!("{view_err}").contains("boom"));
}
