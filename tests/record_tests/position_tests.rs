//! LogRecordPos Tests
//!
//! Tests verify:
//! - Construction and field access
//! - Value semantics (copies are independent)
//! - Display formatting
//! - Fixed-width encoding handed to log/hint collaborators

use keydir::record::LogRecordPos;

#[test]
fn test_new_sets_fields() {
    let pos = LogRecordPos::new(7, 4096, 128);

    assert_eq!(pos.file_id, 7);
    assert_eq!(pos.offset, 4096);
    assert_eq!(pos.size, 128);
}

#[test]
fn test_copy_is_independent() {
    let original = LogRecordPos::new(1, 10, 100);
    let mut copy = original;

    copy.offset = 20;

    assert_eq!(original.offset, 10);
    assert_ne!(original, copy);
}

#[test]
fn test_display() {
    let pos = LogRecordPos::new(3, -1, 0);

    assert_eq!(pos.to_string(), "file_id=3, offset=-1, size=0");
}

#[test]
fn test_bincode_fixed_width_layout() {
    let pos = LogRecordPos::new(0x0102_0304, 0x10, 0xAABB);

    let bytes = bincode::serialize(&pos).unwrap();

    assert_eq!(bytes.len(), 16);
    assert_eq!(&bytes[0..4], &0x0102_0304u32.to_le_bytes());
    assert_eq!(&bytes[4..12], &0x10i64.to_le_bytes());
    assert_eq!(&bytes[12..16], &0xAABBu32.to_le_bytes());

    let decoded: LogRecordPos = bincode::deserialize(&bytes).unwrap();
    assert_eq!(decoded, pos);
}

#[test]
fn test_usable_as_hash_key() {
    use std::collections::HashSet;

    let mut live = HashSet::new();
    live.insert(LogRecordPos::new(1, 0, 10));
    live.insert(LogRecordPos::new(1, 0, 10));
    live.insert(LogRecordPos::new(1, 10, 10));

    assert_eq!(live.len(), 2);
}
