use std::path::PathBuf;

/// Expand `~` and `$VAR` references in a path using the given variable lookup.
///
/// `HOME` comes from the lookup first and falls back to the user's home directory.
/// Unknown variables are left as written.
pub fn expand_path_with<F>(path: &str, lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    let home = || {
        lookup("HOME").or_else(|| dirs::home_dir().map(|p| p.to_string_lossy().into_owned()))
    };
    let expanded = shellexpand::full_with_context_no_errors(path, home, |var| lookup(var));
    PathBuf::from(expanded.into_owned())
}
