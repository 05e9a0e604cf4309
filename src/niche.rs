//! Niche (topic) resolution.

use crate::error::{PostError, Result};
use std::path::{Path, PathBuf};

/// Where the resolved niche came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NicheSource {
    /// Supplied explicitly via `--niche` or `NICHE`.
    Override,
    /// Derived from the working directory name.
    Directory,
}

/// Resolve the niche for this run.
///
/// A non-empty override is returned verbatim and `cwd` is never called.
/// Otherwise the niche comes from [`niche_from_dir`].
pub fn resolve_niche<F>(niche_override: Option<&str>, cwd: F) -> Result<(String, NicheSource)>
where
    F: FnOnce() -> std::io::Result<PathBuf>,
{
    if let Some(niche) = niche_override
        && !niche.is_empty()
    {
        return Ok((niche.to_string(), NicheSource::Override));
    }

    let dir = cwd().map_err(|e| {
        PostError::UserError(format!("failed to get current working directory: {}", e))
    })?;
    Ok((niche_from_dir(&dir), NicheSource::Directory))
}

/// The directory's base name with every `-` replaced by a space.
///
/// A path with no base name (such as `/`) yields an empty niche.
pub fn niche_from_dir(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().replace('-', " "))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn override_wins_verbatim() {
        let (niche, source) = resolve_niche(Some("Coffee  Makers"), || {
            panic!("working directory should not be consulted")
        })
        .unwrap();
        assert_eq!(niche, "Coffee  Makers");
        assert_eq!(source, NicheSource::Override);
    }

    #[test]
    fn empty_override_falls_back_to_directory() {
        let (niche, source) =
            resolve_niche(Some(""), || Ok(PathBuf::from("/home/me/coffee-makers"))).unwrap();
        assert_eq!(niche, "coffee makers");
        assert_eq!(source, NicheSource::Directory);
    }

    #[test]
    fn unavailable_directory_is_a_user_error() {
        let err = resolve_niche(None, || Err(io::Error::from(io::ErrorKind::NotFound))).unwrap_err();
        assert!(matches!(err, PostError::UserError(_)));
    }

    #[test]
    fn directory_dashes_become_spaces() {
        assert_eq!(
            niche_from_dir(Path::new("/sites/standing-desk-mats")),
            "standing desk mats"
        );
        assert_eq!(niche_from_dir(Path::new("/sites/plain")), "plain");
    }

    #[test]
    fn root_directory_yields_empty_niche() {
        assert_eq!(niche_from_dir(Path::new("/")), "");
    }
}
