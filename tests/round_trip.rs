// Copyright 2021, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

use std::{sync::Arc, time::Duration};

use proptest::prelude::*;
use structpack::{
    append_buffer, expected_argument_count, expected_buffer_size, pack, unpack, BlockingEvent,
    Error, Mutex, PackValue, SizeRequirement, UnpackedValue,
};

/// One packable field: its format fragment, the value to pack, and what
/// unpacking should give back.
#[derive(Debug, Clone)]
struct Field {
    fmt: String,
    arg: Option<PackValue>,
    expected: Option<UnpackedValue>,
}

fn int_field(code: char, value: i64) -> Field {
    Field {
        fmt: code.to_string(),
        arg: Some(PackValue::Int(value)),
        expected: Some(UnpackedValue::Int(value)),
    }
}

fn field() -> impl Strategy<Value = Field> {
    prop_oneof![
        any::<u8>().prop_map(|v| int_field('B', v.into())),
        any::<u16>().prop_map(|v| int_field('H', v.into())),
        any::<u32>().prop_map(|v| int_field('L', v.into())),
        any::<i32>().prop_map(|v| int_field('l', v.into())),
        (1usize..5).prop_map(|n| Field {
            fmt: format!("{}x", n),
            arg: None,
            expected: None,
        }),
        ("[a-zA-Z0-9]{0,8}", 0usize..4).prop_map(|(s, extra)| {
            let size = s.len() + extra;
            let mut padded = s.clone();
            padded.extend(std::iter::repeat('\0').take(extra));
            Field {
                fmt: format!("{}s", size.max(1)),
                arg: Some(PackValue::from(s)),
                expected: Some(UnpackedValue::Text(if size == 0 {
                    "\0".to_owned()
                } else {
                    padded
                })),
            }
        }),
    ]
}

proptest! {
    #[test]
    fn pack_then_unpack(fields in prop::collection::vec(field(), 0..8)) {
        let fmt: String = fields.iter().map(|f| f.fmt.as_str()).collect();
        let args: Vec<PackValue> = fields.iter().filter_map(|f| f.arg.clone()).collect();
        let expected: Vec<UnpackedValue> =
            fields.iter().filter_map(|f| f.expected.clone()).collect();

        let packed = pack(&fmt, &args).unwrap();
        prop_assert_eq!(packed.len(), expected_buffer_size(&fmt).unwrap());
        prop_assert_eq!(args.len(), expected_argument_count(&fmt).unwrap());
        prop_assert_eq!(unpack(&fmt, &packed).unwrap(), expected);
    }

    #[test]
    fn variable_length_tail(prefix in any::<u16>(), tail in prop::collection::vec(any::<u8>(), 1..32)) {
        let packed = pack("HV", &[PackValue::from(prefix), PackValue::from(tail.clone())]).unwrap();
        prop_assert_eq!(packed.len(), 2 + tail.len());

        let values = unpack("HV", &packed).unwrap();
        prop_assert_eq!(values.len(), 2);
        prop_assert_eq!(&values[0], &UnpackedValue::Int(prefix.into()));
        prop_assert_eq!(values[1].to_bytes().unwrap(), tail);
    }

    #[test]
    fn wrong_size_rejected(extra in 1usize..8) {
        let buf = vec![0u8; 7 + extra];
        prop_assert_eq!(
            unpack("BHL", &buf).unwrap_err(),
            Error::SizeMismatch { required: SizeRequirement::Exactly(7), actual: 7 + extra }
        );
    }
}

#[test]
fn record_with_header_and_payload() {
    let header = structpack::pack!("BBH", 1, 2, 0x0300).unwrap();
    let payload = structpack::pack!("L6s", 0xDEAD_BEEFu32, "node").unwrap();
    let record = append_buffer(&header, &payload);
    assert_eq!(record.len(), 4 + 10);

    let values = unpack("BBHL6s", &record).unwrap();
    assert_eq!(
        values,
        vec![
            UnpackedValue::Int(1),
            UnpackedValue::Int(2),
            UnpackedValue::Int(0x0300),
            UnpackedValue::Int(0xDEAD_BEEF),
            UnpackedValue::Text("node\0\0".to_owned()),
        ]
    );
}

#[test]
fn integer_ranges() {
    assert!(structpack::pack!("B", 256).is_err());
    assert!(structpack::pack!("H", 65536).is_err());
    assert!(structpack::pack!("L", 4_294_967_296i64).is_err());
    assert!(structpack::pack!("l", 2_147_483_648i64).is_err());
    assert!(structpack::pack!("l", -2_147_483_648i64).is_ok());
    assert!(structpack::pack!("B", -1).is_err());
}

#[tokio::test]
async fn mutex_serializes_writers_behind_an_event() {
    let mutex = Mutex::new();
    let start = BlockingEvent::new();
    let log = Arc::new(parking_lot::Mutex::new(Vec::new()));

    let handles: Vec<_> = (0..4u64)
        .map(|i| {
            let acquire = mutex.acquire();
            let start = start.clone();
            let log = Arc::clone(&log);
            tokio::spawn(async move {
                start.wait().await;
                let releaser = acquire.await;
                log.lock().push(format!("begin {}", i));
                tokio::time::sleep(Duration::from_millis(4 - i)).await;
                log.lock().push(format!("end {}", i));
                releaser.release();
            })
        })
        .collect();

    start.set();
    for handle in handles {
        handle.await.unwrap();
    }

    let expected: Vec<String> = (0..4)
        .flat_map(|i| vec![format!("begin {}", i), format!("end {}", i)])
        .collect();
    assert_eq!(*log.lock(), expected);
    assert!(!mutex.is_locked());
}

#[test]
fn utilities_at_crate_root() {
    use structpack::{
        calculate_signature, compare_signatures, device_id_to_slug, guid, map_stream_name,
        StreamKind, MAX_STREAM_INDEX,
    };

    let name = format!("system {} {}", StreamKind::Output, MAX_STREAM_INDEX);
    let id = map_stream_name(&name).unwrap();
    assert_eq!(id, 0x5FFF);
    assert_eq!(device_id_to_slug(0x90), "d--0000-0000-0000-0090");

    let signature = calculate_signature(b"record");
    assert!(compare_signatures(&signature[..12], &signature));
    assert_eq!(guid().len(), 36);
}
