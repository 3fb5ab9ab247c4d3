//! Debugger-attachment detection.
//!
//! On Linux and Android a non-zero `TracerPid` in `/proc/self/status`
//! means a tracer is attached. On macOS and iOS the kernel exposes the
//! same fact through the `P_TRACED` process flag.

use crate::signal::{SignalKind, SignalProbe};

#[derive(Debug, Default)]
pub struct DebuggerProbe;

impl SignalProbe for DebuggerProbe {
    fn kind(&self) -> SignalKind {
        SignalKind::Debugger
    }

    fn check(&self) -> bool {
        debugger_attached()
    }
}

pub fn debugger_attached() -> bool {
    #[cfg(any(target_os = "linux", target_os = "android"))]
    {
        match std::fs::read_to_string("/proc/self/status") {
            Ok(status) => parse_tracer_pid(&status).is_some_and(|pid| pid > 0),
            Err(_) => false,
        }
    }
    #[cfg(any(target_os = "macos", target_os = "ios"))]
    {
        traced_flag_set()
    }
    #[cfg(not(any(
        target_os = "linux",
        target_os = "android",
        target_os = "macos",
        target_os = "ios"
    )))]
    {
        false
    }
}

/// Pull the tracer pid out of `/proc/self/status` content.
pub fn parse_tracer_pid(status: &str) -> Option<u32> {
    for line in status.lines() {
        if let Some(raw) = line.strip_prefix("TracerPid:") {
            return raw.trim().parse::<u32>().ok();
        }
    }
    None
}

#[cfg(any(target_os = "macos", target_os = "ios"))]
fn traced_flag_set() -> bool {
    use std::mem;

    let mut mib: [libc::c_int; 4] = [
        libc::CTL_KERN,
        libc::KERN_PROC,
        libc::KERN_PROC_PID,
        // SAFETY: getpid has no preconditions and cannot fail.
        unsafe { libc::getpid() },
    ];
    let mut info: libc::kinfo_proc = unsafe { mem::zeroed() };
    let mut size = mem::size_of::<libc::kinfo_proc>();

    // SAFETY: sysctl writes at most `size` bytes into `info`, which is a
    // correctly sized and aligned kinfo_proc owned by this frame.
    let rc = unsafe {
        libc::sysctl(
            mib.as_mut_ptr(),
            mib.len() as libc::c_uint,
            &mut info as *mut libc::kinfo_proc as *mut libc::c_void,
            &mut size,
            std::ptr::null_mut(),
            0,
        )
    };

    rc == 0 && (info.kp_proc.p_flag & libc::P_TRACED) != 0
}

#[cfg(test)]
mod tests {
    use super::parse_tracer_pid;

    #[test]
    fn tracer_pid_is_parsed_from_status_content() {
        let status = "Name:\tapp\nState:\tS (sleeping)\nTracerPid:\t4242\nUid:\t1000\n";
        assert_eq!(parse_tracer_pid(status), Some(4242));
    }

    #[test]
    fn zero_tracer_pid_means_no_tracer() {
        assert_eq!(parse_tracer_pid("TracerPid:\t0\n"), Some(0));
    }

    #[test]
    fn malformed_or_missing_field_is_indeterminate() {
        assert_eq!(parse_tracer_pid("Name:\tapp\n"), None);
        assert_eq!(parse_tracer_pid("TracerPid:\tnot-a-pid\n"), None);
    }
}
