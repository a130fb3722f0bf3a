use std::{
    fs::{self, File},
    io::{self, Write},
    path::PathBuf,
};

use chrono::Utc;
use tracing::debug;

/// Destination for downloaded icon bytes.
///
/// `create` opens a fresh target and returns where it lives together with a
/// writer for it. Dropping the writer releases the target.
pub trait IconSink: Send + Sync {
    fn create(&self) -> io::Result<(PathBuf, Box<dyn Write + Send>)>;
}

/// Writes each icon to a new file in `dir`, named by the current time in
/// milliseconds.
#[derive(Debug, Clone)]
pub struct TempDirSink {
    dir: PathBuf,
}

impl TempDirSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl IconSink for TempDirSink {
    fn create(&self) -> io::Result<(PathBuf, Box<dyn Write + Send>)> {
        fs::create_dir_all(&self.dir)?;

        let stamp = Utc::now().timestamp_millis();
        let mut suffix = 0u32;
        loop {
            let name = if suffix == 0 { stamp.to_string() } else { format!("{stamp}-{suffix}") };
            let path = self.dir.join(name);

            match File::create_new(&path) {
                Ok(file) => {
                    debug!(path = %path.display(), "Created icon file");
                    return Ok((path, Box::new(file)));
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => suffix += 1,
                Err(e) => return Err(e),
            }
        }
    }
}
