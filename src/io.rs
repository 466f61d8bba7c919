//! Whole-file I/O for the `mxc` binary.
//!
//! No streaming API (spec.md §1 Non-goals): both directions read their
//! entire input into memory and write their entire output in one shot.

use std::fs;
use std::io;
use std::path::Path;

/// Reads `path` fully into memory.
pub fn read_whole_file(path: &Path) -> io::Result<Vec<u8>> {
    fs::read(path)
}

/// Writes `data` to `path`, creating or truncating it.
pub fn write_whole_file(path: &Path, data: &[u8]) -> io::Result<()> {
    fs::write(path, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;

    #[test]
    fn round_trips_through_disk() {
        let path = temp_dir().join("lzacore_io_test.bin");
        write_whole_file(&path, b"round trip me").unwrap();
        let back = read_whole_file(&path).unwrap();
        assert_eq!(back, b"round trip me");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = temp_dir().join("lzacore_io_test_missing_file_does_not_exist.bin");
        assert!(read_whole_file(&path).is_err());
    }
}
