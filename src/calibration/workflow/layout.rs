use std::path::{Path, PathBuf};

/// Names and locations of every file a run reads or writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunLayout {
    name: String,
    dir: PathBuf,
}

impl RunLayout {
    /// `<root>/<base>_monitor_<display>/`, with files prefixed by the same name.
    pub fn for_display(root: &Path, base_name: &str, display: u32) -> Self {
        let name = format!("{}_monitor_{}", base_name, display);
        Self {
            dir: root.join(&name),
            name,
        }
    }

    /// Layout of an existing measurement file: its directory and stem.
    pub fn from_measurement_file(path: &Path) -> Option<Self> {
        let name = path.file_stem()?.to_str()?.to_string();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Some(Self { name, dir })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn measurement_path(&self) -> PathBuf {
        self.dir.join(format!("{}.ti3", self.name))
    }

    pub fn rgb_table_path(&self) -> PathBuf {
        self.dir.join(format!("{}_gamma_table_RGB.txt", self.name))
    }

    pub fn gray_table_path(&self) -> PathBuf {
        self.dir.join(format!("{}_gamma_table_Gray.txt", self.name))
    }

    pub fn plot_path(&self) -> PathBuf {
        self.dir.join(format!("{}.png", self.name))
    }
}
