// src/data.rs
// Historical candle loading and the display windows served by `/spin`.

use crate::errors::ServiceError;
use crate::types::CandleData;
use chrono::NaiveDateTime;
use csv::ReaderBuilder;
use log::{debug, info};
use rand::Rng;
use serde::Serialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const DATE_TIME_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SpinResponse {
    pub past_data: Vec<CandleData>,
    pub future_data: Vec<CandleData>,
}

fn parse_field(record: &csv::StringRecord, idx: usize, row: usize, name: &str) -> Result<f64, ServiceError> {
    record
        .get(idx)
        .and_then(|v| v.trim().parse::<f64>().ok())
        .ok_or_else(|| ServiceError::Parse(format!("row {}: invalid {}", row, name)))
}

/// Parses `Date;Time;Open;High;Low;Close;Volume` rows without a header.
/// Output is sorted by time with duplicate timestamps removed (first row wins).
pub fn parse_candles<R: Read>(reader: R) -> Result<Vec<CandleData>, ServiceError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut candles = Vec::new();
    for (row, result) in rdr.records().enumerate() {
        let record = result?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let date = record.get(0).unwrap_or_default().trim();
        let time = record.get(1).unwrap_or_default().trim();
        let timestamp = NaiveDateTime::parse_from_str(&format!("{} {}", date, time), DATE_TIME_FORMAT)
            .map_err(|e| ServiceError::Parse(format!("row {}: bad date/time '{} {}': {}", row, date, time, e)))?
            .and_utc()
            .timestamp();

        candles.push(CandleData {
            time: timestamp,
            open: parse_field(&record, 2, row, "open")?,
            high: parse_field(&record, 3, row, "high")?,
            low: parse_field(&record, 4, row, "low")?,
            close: parse_field(&record, 5, row, "close")?,
            volume: record
                .get(6)
                .and_then(|v| v.trim().parse::<f64>().ok())
                .unwrap_or(0.0),
        });
    }

    let parsed = candles.len();
    candles.sort_by_key(|c| c.time);
    candles.dedup_by_key(|c| c.time);
    debug!(
        "[Data] parsed {} rows, {} after removing duplicate timestamps",
        parsed,
        candles.len()
    );
    Ok(candles)
}

pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<CandleData>, ServiceError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let candles = parse_candles(file)?;
    info!("[Data] loaded {} candles from {}", candles.len(), path.display());
    Ok(candles)
}

/// The last `n` candles, all as visible history.
pub fn latest_slice(candles: &[CandleData], n: usize) -> SpinResponse {
    let start = candles.len().saturating_sub(n);
    SpinResponse {
        past_data: candles[start..].to_vec(),
        future_data: Vec::new(),
    }
}

/// A random contiguous window split into visible history and hidden future.
pub fn random_slice<R: Rng + ?Sized>(
    candles: &[CandleData],
    past: usize,
    future: usize,
    rng: &mut R,
) -> Result<SpinResponse, ServiceError> {
    let total = past + future;
    if candles.len() < total {
        return Err(ServiceError::NotEnoughData {
            needed: total,
            available: candles.len(),
        });
    }

    let start = rng.gen_range(0..=candles.len() - total);
    let window = &candles[start..start + total];
    Ok(SpinResponse {
        past_data: window[..past].to_vec(),
        future_data: window[past..].to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    const SAMPLE: &str = "\
02/01/2024;09:00:00;4750.25;4760.00;4745.50;4755.75;1200
01/01/2024;17:05:00;4740.00;4752.00;4738.25;4750.25;900
02/01/2024;09:00:00;1.0;1.0;1.0;1.0;1
02/01/2024;13:00:00;4755.75;4770.50;4751.00;4768.00;1500
";

    fn series(n: usize) -> Vec<CandleData> {
        (0..n)
            .map(|i| CandleData::new(i as i64, 1.0, 2.0, 0.5, 1.5))
            .collect()
    }

    #[test]
    fn test_parse_sorts_and_dedups() {
        let candles = parse_candles(Cursor::new(SAMPLE)).unwrap();
        assert_eq!(candles.len(), 3);
        // 01/01/2024 17:05:00 UTC
        assert_eq!(candles[0].time, 1_704_128_700);
        assert!(candles.windows(2).all(|w| w[0].time < w[1].time));
        // Duplicate 09:00 row keeps the first occurrence.
        assert_eq!(candles[1].open, 4750.25);
        assert_eq!(candles[2].volume, 1500.0);
    }

    #[test]
    fn test_parse_rejects_bad_price() {
        let result = parse_candles(Cursor::new("01/01/2024;17:05:00;abc;1;1;1;1\n"));
        assert!(matches!(result, Err(ServiceError::Parse(_))));
    }

    #[test]
    fn test_parse_rejects_bad_date() {
        let result = parse_candles(Cursor::new("2024-01-01;17:05:00;1;1;1;1;1\n"));
        assert!(matches!(result, Err(ServiceError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_csv("/definitely/not/here.csv");
        assert!(matches!(result, Err(ServiceError::Io(_))));
    }

    #[test]
    fn test_latest_slice() {
        let candles = series(10);
        let spin = latest_slice(&candles, 4);
        assert_eq!(spin.past_data.len(), 4);
        assert_eq!(spin.past_data[0].time, 6);
        assert!(spin.future_data.is_empty());
        assert_eq!(latest_slice(&candles, 50).past_data.len(), 10);
    }

    #[test]
    fn test_random_slice_is_contiguous() {
        let candles = series(300);
        let mut rng = StdRng::seed_from_u64(7);
        let spin = random_slice(&candles, 100, 20, &mut rng).unwrap();
        assert_eq!(spin.past_data.len(), 100);
        assert_eq!(spin.future_data.len(), 20);
        let last_past = spin.past_data.last().unwrap().time;
        assert_eq!(spin.future_data[0].time, last_past + 1);
    }

    #[test]
    fn test_random_slice_needs_enough_candles() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = random_slice(&series(50), 100, 20, &mut rng);
        assert!(matches!(
            result,
            Err(ServiceError::NotEnoughData { needed: 120, available: 50 })
        ));
    }
}
