//! Lexical helpers for Windows style paths.
//!
//! Nothing in here touches the filesystem. A path is only
//! looked at as a string, so these work the same on every
//! host OS.
//!
//! Eg.
//! C:\tools\app.exe        absolute, base name `app.exe`
//! C:app.exe               relative, base name `app.exe`
//! \\server\share\app.exe  absolute, base name `app.exe`
//! PRN                     absolute (reserved device name)
//!
//! This is a small port of the Windows parts of filepath
//! module used in Golang.
//!
//! To see actual golang implentation, please visit
//! https://golang.org/src/path/filepath/path_windows.go.

mod windows;

pub use self::windows::{is_reserved_name, RESERVED_NAMES};

pub fn os_separator() -> char {
    windows::PATH_SEPARATOR
}

/// Both '\\' and '/' separate volume names on Windows.
pub fn is_path_separator(c: char) -> bool {
    c.is_ascii() && windows::is_slash(c as u8)
}

/// Length in bytes of the leading drive letter or UNC
/// server/share, 0 when there is none.
pub fn volume_name_len<P: AsRef<str>>(path: P) -> usize {
    windows::volume_name_len(path.as_ref())
}

/// Reports whether the path is absolute.
///
/// A bare reserved device name (`NUL`, `com1`, ...) counts as
/// absolute. Otherwise a volume name followed by a separator is
/// required, so `C:foo` and `\foo` are both relative.
pub fn is_path_absolute<P: AsRef<str>>(path: P) -> bool {
    windows::is_abs(path.as_ref())
}

/// Returns the final element of the path, typically the
/// executable name.
pub fn base_name(path: &str) -> &str {
    windows::image_name(path)
}

#[test]
fn test_is_path_absolute() {
    let path_strs = [
        ("", false),
        ("C:\\foo", true),
        ("C:foo", false),
        ("\\\\server\\share", false),
        ("\\\\server\\share\\", true),
        ("PRN", true),
        ("prn", true),
        ("relative\\path", false),
    ];

    for (path_str, expected) in path_strs.iter() {
        assert_eq!(is_path_absolute(path_str), *expected, "{:?}", path_str);
    }

    // Owned strings work too.
    assert!(is_path_absolute(String::from("D:\\")));
}

#[test]
fn test_base_name() {
    let path_strs = [
        ("C:\\foo\\bar.exe", "bar.exe"),
        ("C:\\foo\\bar\\\\", "bar"),
        ("", ""),
        ("noseparator", "noseparator"),
    ];

    for (path_str, expected) in path_strs.iter() {
        assert_eq!(base_name(path_str), *expected);
        assert_eq!(base_name(base_name(path_str)), *expected);
    }
}

#[test]
fn test_is_path_separator() {
    assert!(is_path_separator('\\'));
    assert!(is_path_separator('/'));
    assert!(is_path_separator(os_separator()));
    assert!(!is_path_separator(':'));
    // Non-ASCII code points never truncate onto a slash.
    assert!(!is_path_separator('\u{15c}'));
    assert!(!is_path_separator('\u{22f}'));
}

#[test]
fn test_volume_name_len_never_exceeds_path() {
    let path_strs = ["", "C", "C:", "\\\\a\\b", "\\\\server\\share\\x", "//s/"];

    for path_str in path_strs.iter() {
        assert!(volume_name_len(path_str) <= path_str.len());
    }
}
