//! Writing the generated table to disk.

use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;

/// Writes `contents` to `path` by way of a temporary file in the same directory, so that a failed
/// run never leaves a half-written table behind.
pub fn write_atomically(path: &Path, contents: &str) -> anyhow::Result<()> {
   let dir = match path.parent() {
      Some(parent) if !parent.as_os_str().is_empty() => parent,
      _ => Path::new("."),
   };
   let mut builder = tempfile::Builder::new();
   // Same mode a plain `File::create` would get, before the umask.
   #[cfg(unix)]
   {
      use std::os::unix::fs::PermissionsExt;
      builder.permissions(std::fs::Permissions::from_mode(0o666));
   }
   let mut file = builder
      .tempfile_in(dir)
      .with_context(|| format!("cannot create a temporary file in {}", dir.display()))?;
   file.write_all(contents.as_bytes())
      .with_context(|| format!("cannot write to {}", file.path().display()))?;
   if let Ok(existing) = std::fs::metadata(path) {
      file.as_file()
         .set_permissions(existing.permissions())
         .with_context(|| format!("cannot copy permissions of {}", path.display()))?;
   }
   file.as_file()
      .sync_all()
      .with_context(|| format!("cannot flush {}", file.path().display()))?;
   file.persist(path).with_context(|| format!("cannot replace {}", path.display()))?;
   Ok(())
}

/// Returns whether the file at `path` already holds exactly `contents`.
pub fn is_up_to_date(path: &Path, contents: &str) -> anyhow::Result<bool> {
   match std::fs::read(path) {
      Ok(existing) => Ok(existing == contents.as_bytes()),
      Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(false),
      Err(error) => Err(error).with_context(|| format!("cannot read {}", path.display())),
   }
}
