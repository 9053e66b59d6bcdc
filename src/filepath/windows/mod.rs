use std::collections::HashSet;

use lazy_static::lazy_static;

pub static PATH_SEPARATOR: char = '\\';

/// Reserved Windows device names. Search for PRN in
/// https://docs.microsoft.com/en-us/windows/desktop/fileio/naming-a-file
/// for details.
pub static RESERVED_NAMES: [&str; 22] = [
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

lazy_static! {
    // Upper-cased copy of RESERVED_NAMES for lookups.
    static ref RESERVED_NAME_SET: HashSet<String> = RESERVED_NAMES
        .iter()
        .map(|name| name.to_ascii_uppercase())
        .collect();
}

// Windows accepts both slashes when splitting off a volume,
// so this is what volume detection and is_abs use.
pub fn is_slash(c: u8) -> bool {
    c == b'\\' || c == b'/'
}

/// Returns true if the whole of `path` is a reserved device name,
/// ignoring ASCII case. Components are not extracted, so `dir\PRN`
/// is not reserved.
pub fn is_reserved_name(path: &str) -> bool {
    // Every reserved name is 3 or 4 bytes long.
    if path.len() < 3 || path.len() > 4 {
        return false;
    }

    RESERVED_NAME_SET.contains(&path.to_ascii_uppercase())
}

/// volume_name_len returns length of the leading volume name, either
/// a drive letter ("C:") or a UNC server/share ("\\server\share").
///
/// Works on raw bytes. Every boundary it returns sits right before an
/// ASCII separator or at the end of the string, so slicing `path` at
/// the result never splits a UTF-8 sequence.
pub fn volume_name_len(path: &str) -> usize {
    let bytes = path.as_bytes();
    let l = bytes.len();

    if l < 2 {
        return 0;
    }

    // Drive letter
    if bytes[1] == b':' && bytes[0].is_ascii_alphabetic() {
        return 2;
    }

    // UNC paths begin with two slashes and the third position cannot be
    // occupied with another slash or '.'.
    // See https://msdn.microsoft.com/en-us/library/windows/desktop/aa365247(v=vs.85).aspx
    if l >= 5 && is_slash(bytes[0]) && is_slash(bytes[1]) && !is_slash(bytes[2]) && bytes[2] != b'.'
    {
        // Server name runs up to the next slash.
        let mut n = 3;
        while n < l - 1 {
            if is_slash(bytes[n]) {
                n += 1;
                // Share name must not be empty, nor start with '.'.
                if is_slash(bytes[n]) || bytes[n] == b'.' {
                    return 0;
                }
                while n < l && !is_slash(bytes[n]) {
                    n += 1;
                }
                return n;
            }
            n += 1;
        }
    }

    0
}

/// Reports whether `path` is absolute: a reserved device name, or a
/// volume name followed by a slash.
pub fn is_abs(path: &str) -> bool {
    if is_reserved_name(path) {
        return true;
    }

    let vol_len = volume_name_len(path);
    if vol_len == 0 {
        return false;
    }

    match path.as_bytes().get(vol_len) {
        Some(&c) => is_slash(c),
        None => false,
    }
}

/// Returns the executable name of `path`: the last backslash separated
/// element once trailing backslashes and the volume name are removed.
///
/// Only '\\' counts here; forward slashes are kept as part of the name.
pub fn image_name(path: &str) -> &str {
    if path.is_empty() {
        return "";
    }

    let trimmed = path.trim_end_matches(PATH_SEPARATOR);
    let without_vol = &trimmed[volume_name_len(trimmed)..];

    match without_vol.rfind(PATH_SEPARATOR) {
        Some(i) => &without_vol[i + 1..],
        None => without_vol,
    }
}

#[test]
fn test_is_slash() {
    assert!(is_slash(b'\\'));
    assert!(is_slash(b'/'));
    assert!(!is_slash(b':'));
    assert!(!is_slash(b'.'));
    assert!(!is_slash(b'a'));
}

#[test]
fn test_is_reserved_name() {
    for name in RESERVED_NAMES.iter() {
        assert!(is_reserved_name(name), "{}", name);
        assert!(is_reserved_name(&name.to_ascii_lowercase()), "{}", name);
    }

    let names = [
        ("", false),
        ("Prn", true),
        ("cOm7", true),
        ("COM0", false),
        ("COM10", false),
        ("LPT", false),
        ("CONIN$", false),
        ("PRN.txt", false),
        ("\\PRN", false),
        ("folder\\PRN", false),
        (" NUL", false),
    ];

    for (name, expected) in names.iter() {
        assert_eq!(is_reserved_name(name), *expected, "{:?}", name);
    }
}

#[test]
fn test_volume_name_len() {
    let paths = [
        // multi-byte server and share, counted in bytes
        ("\\\\ふー\\バー", 15),
        // volumes
        ("C:", 2),
        ("c:\\foo", 2),
        ("z:bar", 2),
        ("1:\\foo", 0),
        (":\\", 0),
        // UNC cases
        ("\\\\teela\\", 0),
        ("\\\\teela\\admin\\folder", 13),
        ("\\\\?\\REL\\..\\\\..", 7),
        ("\\\\first\\next", 12),
        ("\\\\dir\\file.txt", 14),
        ("\\\\some.dir\\file", 15),
        ("//host/share/x", 12),
        ("\\/host\\share", 12),
        ("\\\\a\\b", 5),
        // Share name must not be empty or start with '.'
        ("\\\\server\\\\share", 0),
        ("\\\\server\\.share", 0),
        // No volume cases
        ("", 0),
        ("C", 0),
        (".\\temp.txt", 0),
        ("..\\Publications\\TravelBrochure.pdf", 0),
        ("\\\\\\", 0),
        ("\\\\.", 0),
        ("\\\\.\\pipe\\name", 0),
        ("\\\\\\server\\share", 0),
        ("\\\\server", 0),
        ("\\abc\\", 0),
    ];

    for (path, expected_len) in paths.iter() {
        assert_eq!(volume_name_len(path), *expected_len, "{:?}", path);
    }
}

#[test]
fn test_volume_name_len_within_bounds() {
    let paths = [
        "",
        "\\",
        "\\\\",
        "\\\\a",
        "\\\\a\\",
        "\\\\ab\\",
        "\\\\a\\b",
        "\\\\a\\b\\",
        "\\\\ab\\c",
        "C:",
        "\\\\ふー\\バー\\",
        "//x/y",
    ];

    for path in paths.iter() {
        assert!(volume_name_len(path) <= path.len(), "{:?}", path);
    }
}

#[test]
fn test_is_abs() {
    let paths = [
        ("", false),
        ("C:\\foo", true),
        ("C:/foo", true),
        ("c:\\", true),
        ("C:foo", false),
        ("C:", false),
        ("\\\\server\\share", false),
        ("\\\\server\\share\\", true),
        ("\\\\server\\share\\file.txt", true),
        ("//server/share/", true),
        ("\\\\server\\.share\\", false),
        ("PRN", true),
        ("prn", true),
        ("folder\\PRN", false),
        ("relative\\path", false),
        ("\\rooted", false),
        ("/rooted", false),
        (".\\file", false),
    ];

    for (path, expected) in paths.iter() {
        assert_eq!(is_abs(path), *expected, "{:?}", path);
    }
}

#[test]
fn test_image_name() {
    let paths = [
        ("", ""),
        ("C:\\foo\\bar.exe", "bar.exe"),
        ("C:\\foo\\bar\\\\", "bar"),
        ("noseparator", "noseparator"),
        ("C:bar.exe", "bar.exe"),
        ("C:\\", ""),
        ("C:", ""),
        ("\\\\", ""),
        ("\\\\server\\share", ""),
        ("\\\\server\\share\\tools\\app.exe", "app.exe"),
        ("relative\\path\\cmd.exe", "cmd.exe"),
        // Forward slashes are not split on
        ("C:/foo/bar.exe", "/foo/bar.exe"),
        ("dir\\sub/name.exe/", "sub/name.exe/"),
        ("\\\\ふー\\バー\\ファイル.exe", "ファイル.exe"),
    ];

    for (path, expected) in paths.iter() {
        assert_eq!(image_name(path), *expected, "{:?}", path);
    }
}

#[test]
fn test_image_name_idempotent() {
    let paths = [
        "C:\\foo\\bar.exe",
        "C:\\foo\\bar\\\\",
        "noseparator",
        "\\\\server\\share\\app.exe",
        "",
    ];

    for path in paths.iter() {
        let once = image_name(path);
        assert_eq!(image_name(once), once, "{:?}", path);
    }
}
