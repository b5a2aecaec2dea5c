/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Advisory locking around a load-mutate-persist sequence.
//!
//! Two invocations updating the same snapshot concurrently would otherwise
//! both load the old state and the last one to persist would silently drop
//! the other's change. On Unix the lock is an exclusive `flock` on a sidecar
//! `<path>.lock` file. Elsewhere [`FileLock`] is a no-op.

use std::io;
use std::path::{Path, PathBuf};

use crate::file::parent_dir;

/// An exclusive advisory lock, released on drop.
#[derive(Debug)]
pub struct FileLock {
    #[cfg_attr(not(unix), allow(dead_code))]
    file: fs_err::File,
    path: PathBuf,
}

impl FileLock {
    /// Block until the lock guarding `snapshot` is acquired.
    ///
    /// The lock file sits next to the snapshot; its directory is created if
    /// missing.
    pub fn acquire(snapshot: impl AsRef<Path>) -> io::Result<Self> {
        let path = lock_path(snapshot.as_ref());
        fs_err::create_dir_all(parent_dir(&path))?;
        let file = fs_err::OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)?;

        #[cfg(unix)]
        flock(&file, libc::LOCK_EX)?;

        tracing::trace!(path = %path.display(), "acquired snapshot lock");
        Ok(Self { file, path })
    }

    /// Path of the sidecar lock file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // Closing the descriptor releases the lock as well; unlocking
        // explicitly makes the release independent of inherited descriptors.
        #[cfg(unix)]
        if let Err(err) = flock(&self.file, libc::LOCK_UN) {
            tracing::warn!(path = %self.path.display(), %err, "failed to release snapshot lock");
        }
    }
}

/// `<snapshot>.lock`
fn lock_path(snapshot: &Path) -> PathBuf {
    let mut name = snapshot.as_os_str().to_owned();
    name.push(".lock");
    PathBuf::from(name)
}

#[cfg(unix)]
fn flock(file: &fs_err::File, operation: libc::c_int) -> io::Result<()> {
    use std::os::unix::io::AsRawFd;

    let fd = file.file().as_raw_fd();
    loop {
        // SAFETY: `fd` is an open descriptor owned by `file`, which outlives
        // this call.
        let result = unsafe { libc::flock(fd, operation) };
        if result == 0 {
            return Ok(());
        }
        let err = io::Error::last_os_error();
        if err.kind() != io::ErrorKind::Interrupted {
            return Err(err);
        }
    }
}
