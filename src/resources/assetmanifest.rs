//! Frame manifests and asset path resolution.
//!
//! Every animated type has a `manifest.json` next to its frames declaring how
//! many frames each sequence has. Resolution checks the manifest against the
//! directory before anything is decoded: each declared `<i>.png` must exist
//! and nothing else may sit beside them, so a missing or stray file fails
//! with a named [`AssetError`] instead of shifting the sequence.
//!
//! Layout:
//!
//! ```text
//! gfx/<entity_type>/manifest.json        {"walking_down": 4, "walking_horizontally": 4, "walking_up": 4}
//! gfx/<entity_type>/<action>/<i>.png
//! gfx/<projectile_type>/manifest.json    {"frames": 3}
//! gfx/<projectile_type>/<i>.png
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::animation::WalkAction;

pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset directory not found: {path}")]
    MissingDirectory { path: PathBuf },
    #[error("manifest not found: {path}")]
    MissingManifest { path: PathBuf },
    #[error("invalid manifest {path}: {source}")]
    InvalidManifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("'{name}' declares no frames in {path}")]
    EmptySequence { name: String, path: PathBuf },
    #[error("missing frame: {path}")]
    MissingFrame { path: PathBuf },
    #[error("unexpected file in frame directory: {path}")]
    UnexpectedFile { path: PathBuf },
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to load image {path}: {reason}")]
    Image { path: PathBuf, reason: String },
    #[error("failed to upload texture {path}: {reason}")]
    Texture { path: PathBuf, reason: String },
    #[error("invalid map {path}: {source}")]
    InvalidMap {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Frame counts of a walking entity, one per [`WalkAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityManifest {
    pub walking_down: usize,
    pub walking_horizontally: usize,
    pub walking_up: usize,
}

impl EntityManifest {
    pub fn frame_count(&self, action: WalkAction) -> usize {
        match action {
            WalkAction::Down => self.walking_down,
            WalkAction::Horizontal => self.walking_horizontally,
            WalkAction::Up => self.walking_up,
        }
    }
}

/// Frame count of a projectile's single sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectileManifest {
    pub frames: usize,
}

/// Validated frame paths of a walking entity, indexed by [`WalkAction::index`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityFramePaths {
    pub entity_type: String,
    pub actions: [Vec<PathBuf>; 3],
}

fn require_dir(path: &Path) -> Result<(), AssetError> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(AssetError::MissingDirectory {
            path: path.to_path_buf(),
        })
    }
}

fn read_manifest<T: for<'de> Deserialize<'de>>(dir: &Path) -> Result<T, AssetError> {
    let path = dir.join(MANIFEST_FILE);
    if !path.is_file() {
        return Err(AssetError::MissingManifest { path });
    }
    let text = fs::read_to_string(&path).map_err(|source| AssetError::Io {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| AssetError::InvalidManifest { path, source })
}

/// Resolve `<dir>/0.png .. <dir>/<count-1>.png`, rejecting gaps and strays.
///
/// Entries listed in `allowed_extra` (file names) are tolerated.
fn resolve_sequence(
    dir: &Path,
    name: &str,
    count: usize,
    allowed_extra: &[&str],
) -> Result<Vec<PathBuf>, AssetError> {
    if count == 0 {
        return Err(AssetError::EmptySequence {
            name: name.to_string(),
            path: dir.to_path_buf(),
        });
    }

    let frames: Vec<PathBuf> = (0..count).map(|i| dir.join(format!("{}.png", i))).collect();
    if let Some(missing) = frames.iter().find(|p| !p.is_file()) {
        return Err(AssetError::MissingFrame {
            path: missing.clone(),
        });
    }

    let expected: BTreeSet<String> = (0..count)
        .map(|i| format!("{}.png", i))
        .chain(allowed_extra.iter().map(|s| s.to_string()))
        .collect();
    let entries = fs::read_dir(dir).map_err(|source| AssetError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    // sorted so the reported stray is deterministic
    let mut strays = BTreeSet::new();
    for entry in entries {
        let entry = entry.map_err(|source| AssetError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !expected.contains(&file_name) {
            strays.insert(entry.path());
        }
    }
    if let Some(path) = strays.into_iter().next() {
        return Err(AssetError::UnexpectedFile { path });
    }

    Ok(frames)
}

/// Resolve and validate all frames of a walking entity type.
pub fn resolve_entity_frames(root: &Path, entity_type: &str) -> Result<EntityFramePaths, AssetError> {
    let type_dir = root.join(entity_type);
    require_dir(&type_dir)?;
    let manifest: EntityManifest = read_manifest(&type_dir)?;

    let mut actions: [Vec<PathBuf>; 3] = Default::default();
    for action in WalkAction::ALL {
        let action_dir = type_dir.join(action.dir_name());
        require_dir(&action_dir)?;
        actions[action.index()] = resolve_sequence(
            &action_dir,
            action.dir_name(),
            manifest.frame_count(action),
            &[],
        )?;
        log::debug!(
            "{}/{}: {} frames",
            entity_type,
            action.dir_name(),
            actions[action.index()].len()
        );
    }

    Ok(EntityFramePaths {
        entity_type: entity_type.to_string(),
        actions,
    })
}

/// Resolve and validate the flat frame list of a projectile type.
pub fn resolve_projectile_frames(
    root: &Path,
    projectile_type: &str,
) -> Result<Vec<PathBuf>, AssetError> {
    let type_dir = root.join(projectile_type);
    require_dir(&type_dir)?;
    let manifest: ProjectileManifest = read_manifest(&type_dir)?;
    resolve_sequence(&type_dir, projectile_type, manifest.frames, &[MANIFEST_FILE])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_frames(dir: &Path, count: usize) {
        fs::create_dir_all(dir).unwrap();
        for i in 0..count {
            fs::write(dir.join(format!("{}.png", i)), b"png").unwrap();
        }
    }

    fn player_tree(counts: [usize; 3]) -> TempDir {
        let tmp = TempDir::new().unwrap();
        let player = tmp.path().join("player");
        for action in WalkAction::ALL {
            write_frames(&player.join(action.dir_name()), counts[action.index()]);
        }
        let manifest = EntityManifest {
            walking_down: counts[0],
            walking_horizontally: counts[1],
            walking_up: counts[2],
        };
        fs::write(
            player.join(MANIFEST_FILE),
            serde_json::to_string(&manifest).unwrap(),
        )
        .unwrap();
        tmp
    }

    #[test]
    fn test_resolves_declared_frames_in_order() {
        let tmp = player_tree([4, 3, 1]);
        let paths = resolve_entity_frames(tmp.path(), "player").unwrap();
        assert_eq!(paths.entity_type, "player");
        assert_eq!(paths.actions[0].len(), 4);
        assert_eq!(paths.actions[1].len(), 3);
        assert_eq!(paths.actions[2].len(), 1);
        assert!(paths.actions[1][2].ends_with("player/walking_horizontally/2.png"));
    }

    #[test]
    fn test_missing_type_directory() {
        let tmp = TempDir::new().unwrap();
        let err = resolve_entity_frames(tmp.path(), "ghost").unwrap_err();
        assert!(matches!(err, AssetError::MissingDirectory { .. }));
    }

    #[test]
    fn test_missing_manifest() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("player")).unwrap();
        let err = resolve_entity_frames(tmp.path(), "player").unwrap_err();
        assert!(matches!(err, AssetError::MissingManifest { .. }));
    }

    #[test]
    fn test_manifest_missing_an_action_is_invalid() {
        let tmp = player_tree([2, 2, 2]);
        fs::write(
            tmp.path().join("player").join(MANIFEST_FILE),
            r#"{"walking_down": 2, "walking_up": 2}"#,
        )
        .unwrap();
        let err = resolve_entity_frames(tmp.path(), "player").unwrap_err();
        assert!(matches!(err, AssetError::InvalidManifest { .. }));
    }

    #[test]
    fn test_zero_frames_rejected() {
        let tmp = player_tree([2, 0, 2]);
        let err = resolve_entity_frames(tmp.path(), "player").unwrap_err();
        match err {
            AssetError::EmptySequence { name, .. } => assert_eq!(name, "walking_horizontally"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_gap_in_sequence_is_missing_frame() {
        let tmp = player_tree([3, 3, 3]);
        fs::remove_file(tmp.path().join("player/walking_up/1.png")).unwrap();
        let err = resolve_entity_frames(tmp.path(), "player").unwrap_err();
        match err {
            AssetError::MissingFrame { path } => assert!(path.ends_with("walking_up/1.png")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_stray_file_rejected() {
        let tmp = player_tree([2, 2, 2]);
        fs::write(tmp.path().join("player/walking_down/2.png"), b"png").unwrap();
        let err = resolve_entity_frames(tmp.path(), "player").unwrap_err();
        match err {
            AssetError::UnexpectedFile { path } => assert!(path.ends_with("walking_down/2.png")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_projectile_frames_tolerate_manifest() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("fireball");
        write_frames(&dir, 3);
        fs::write(dir.join(MANIFEST_FILE), r#"{"frames": 3}"#).unwrap();
        let frames = resolve_projectile_frames(tmp.path(), "fireball").unwrap();
        assert_eq!(frames.len(), 3);
        assert!(frames[0].ends_with("fireball/0.png"));
    }

    #[test]
    fn test_projectile_stray_file_rejected() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("fireball");
        write_frames(&dir, 2);
        fs::write(dir.join(MANIFEST_FILE), r#"{"frames": 2}"#).unwrap();
        fs::write(dir.join("notes.txt"), b"").unwrap();
        let err = resolve_projectile_frames(tmp.path(), "fireball").unwrap_err();
        assert!(matches!(err, AssetError::UnexpectedFile { .. }));
    }
}
