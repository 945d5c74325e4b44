//! Project file kinds recognized in an application root.

use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectType {
    CSharp,
    FSharp,
    VisualBasic,
    Generic,
}

impl ProjectType {
    pub const ALL: [ProjectType; 4] = [
        ProjectType::CSharp,
        ProjectType::FSharp,
        ProjectType::VisualBasic,
        ProjectType::Generic,
    ];

    pub fn extension(&self) -> &'static str {
        match self {
            ProjectType::CSharp => "csproj",
            ProjectType::FSharp => "fsproj",
            ProjectType::VisualBasic => "vbproj",
            ProjectType::Generic => "proj",
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.extension() == ext)
    }

    /// Classifies a file name by its final extension. `app.csproj` is C#,
    /// never the generic `.proj` kind.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".{}", self.extension())
    }
}
