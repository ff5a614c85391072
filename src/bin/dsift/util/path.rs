use std::path::{Path, PathBuf};

/// Appends a suffix to the file stem, keeping the extension.
///
/// `fraglib_linker.mol2` with suffix `_cutoff` becomes
/// `fraglib_linker_cutoff.mol2`.
pub fn with_stem_suffix(path: &Path, suffix: &str) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    match path.extension() {
        Some(ext) => {
            path.with_file_name(format!("{}{}.{}", stem, suffix, ext.to_string_lossy()))
        }
        None => path.with_file_name(format!("{}{}", stem, suffix)),
    }
}

/// Sibling path `positions_<stem>.dat` next to the input file.
pub fn positions_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    input.with_file_name(format!("positions_{}.dat", stem))
}

/// Makes a molecule name safe to use as a file name.
///
/// DOCK pose names are usually ZINC identifiers, but de novo runs can emit
/// names carrying path separators.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_suffix_keeps_extension() {
        assert_eq!(
            with_stem_suffix(Path::new("out/fraglib_linker.mol2"), "_cutoff"),
            PathBuf::from("out/fraglib_linker_cutoff.mol2")
        );
    }

    #[test]
    fn stem_suffix_without_extension() {
        assert_eq!(
            with_stem_suffix(Path::new("ranked"), "_cutoff"),
            PathBuf::from("ranked_cutoff")
        );
    }

    #[test]
    fn positions_path_is_a_sibling() {
        assert_eq!(
            positions_path(Path::new("runs/ranked.mol2")),
            PathBuf::from("runs/positions_ranked.dat")
        );
    }

    #[test]
    fn sanitize_replaces_separators() {
        assert_eq!(sanitize_file_name("lig/pose\\1"), "lig_pose_1");
        assert_eq!(sanitize_file_name("ZINC000000001"), "ZINC000000001");
    }
}
