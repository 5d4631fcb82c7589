use super::{HostPlatform, PRODUCT_DIR, PlatformLocations};
use std::ffi::{CStr, OsStr};
use std::os::unix::ffi::OsStrExt;
use std::path::PathBuf;
use tracing::debug;

const PASSWD_BUFFER_LEN: usize = 16 * 1024;

impl PlatformLocations for HostPlatform {
    fn user_locations(&self) -> Vec<PathBuf> {
        let Some(home) = home_dir() else {
            debug!("no home directory for current uid; skipping per-user locations");
            return Vec::new();
        };
        let mut locations = vec![home.join(format!(".{PRODUCT_DIR}"))];
        if cfg!(target_os = "macos") {
            locations.push(home.join("Library").join("Spelling").join(PRODUCT_DIR));
        }
        locations
    }

    fn system_locations(&self) -> Vec<PathBuf> {
        vec![PathBuf::from("/etc").join(PRODUCT_DIR)]
    }
}

/// Home directory of the current uid from the password database, not `$HOME`.
fn home_dir() -> Option<PathBuf> {
    let mut buf = vec![0 as libc::c_char; PASSWD_BUFFER_LEN];
    let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
    let mut result: *mut libc::passwd = std::ptr::null_mut();
    let rc = unsafe {
        libc::getpwuid_r(
            libc::getuid(),
            &mut pwd,
            buf.as_mut_ptr(),
            buf.len(),
            &mut result,
        )
    };
    if rc != 0 || result.is_null() || pwd.pw_dir.is_null() {
        return None;
    }
    let dir = unsafe { CStr::from_ptr(pwd.pw_dir) }.to_bytes();
    if dir.is_empty() {
        return None;
    }
    Some(PathBuf::from(OsStr::from_bytes(dir)))
}
