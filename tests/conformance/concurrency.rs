//! A built registry is shared read-only across threads

use crate::common::*;
use bigdecimal::BigDecimal;
use bsonbridge::{BsonReader, BsonWriter, Registry};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::thread;

const THREADS: i64 = 8;
const PER_THREAD: i64 = 500;

#[test]
fn concurrent_decode_and_encode() {
    let registry = Arc::new(Registry::default());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    let millis = t * 1_000_000 + i;
                    let wire = date_time(millis);
                    let mut when = DateTime::<Utc>::default();
                    registry
                        .decode(&mut BsonReader::new(&wire), &mut when)
                        .unwrap();
                    assert_eq!(when.timestamp_millis(), millis);

                    let amount = dec(&format!("{}E-2", millis));
                    let mut writer = BsonWriter::new();
                    registry.encode(&mut writer, &amount).unwrap();
                    let encoded = writer.into_inner().unwrap();

                    let mut decoded = BigDecimal::default();
                    registry
                        .decode(&mut BsonReader::new(&encoded), &mut decoded)
                        .unwrap();
                    assert_eq!(decoded, amount);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
