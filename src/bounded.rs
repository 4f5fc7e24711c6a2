// Copyright (c) 2018 Aleksandr Bezobchuk
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! A capacity-bounded Bloom filter that sizes itself for a target false
//! positive rate.

use std::f64;
use std::hash::Hash;

use crate::bloom::BloomFilter;
use crate::error::Error;

/// `ln 2` squared.
const LN_SQR: f64 = f64::consts::LN_2 * f64::consts::LN_2;

/// A Bloom filter that refuses inserts beyond a fixed capacity.
///
/// The filter derives its dimensions from the expected number of inserts and
/// the desired false positive rate, and rejects any insert past that number.
/// Bounding the inserts keeps the actual false positive rate from drifting
/// past the rate the filter was sized for.
#[derive(Clone, Debug)]
pub struct BoundedBloomFilter<K> {
    filter: BloomFilter<K>,
    capacity: usize,
}

impl<K: Hash> BoundedBloomFilter<K> {
    /// Return a new filter sized for the expected number of inserts and the
    /// desired false positive rate.
    ///
    /// Fails with [`Error::InvalidRate`] if the rate is outside of
    /// `[0.0, 1.0]`. A filter for zero expected inserts is valid, but
    /// rejects every insert.
    pub fn new(expected_inserts: usize, fp_rate: f64) -> Result<BoundedBloomFilter<K>, Error> {
        // At least one bit, so that lookups on a zero-capacity filter stay total.
        let nbits = estimate_bits(expected_inserts, fp_rate)?.max(1);
        let nhashes = optimal_hashes(expected_inserts, nbits);

        Ok(BoundedBloomFilter {
            filter: BloomFilter::new(nbits, nhashes),
            capacity: expected_inserts,
        })
    }

    /// Insert an item, failing with [`Error::CapacityExceeded`] once the
    /// filter is at capacity. A rejected insert leaves the filter untouched:
    /// no bits are set and the insert counter keeps its value.
    pub fn insert(&mut self, item: &K) -> Result<(), Error> {
        if self.filter.count() >= self.capacity {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.filter.insert(item);

        Ok(())
    }

    /// Return whether or not a given item is likely in the filter.
    pub fn contains(&self, item: &K) -> bool {
        self.filter.contains(item)
    }

    /// The maximum number of inserts this filter accepts.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of inserts performed on this filter.
    pub fn count(&self) -> usize {
        self.filter.count()
    }

    /// Return the number of bits in this filter.
    pub fn bits(&self) -> usize {
        self.filter.bits()
    }

    /// Number of hashes used (`k` parameter).
    pub fn hashes(&self) -> usize {
        self.filter.hashes()
    }

    /// Estimate the false positive rate from the current fill ratio,
    /// rounded to three decimal digits.
    pub fn false_positive_rate(&self) -> f64 {
        self.filter.false_positive_rate()
    }
}

impl<K> PartialEq for BoundedBloomFilter<K> {
    fn eq(&self, other: &Self) -> bool {
        self.filter == other.filter
    }
}

impl<K> Eq for BoundedBloomFilter<K> {}

/// Return the number of bits required to hold the expected number of inserts
/// at the given false positive rate, `m = ceil(-n * ln(p) / (ln 2)^2)`.
///
/// Returns zero when no inserts are expected; in that case the rate is not
/// validated. Otherwise fails with [`Error::InvalidRate`] if the rate is
/// outside of `[0.0, 1.0]`.
pub fn estimate_bits(expected_inserts: usize, fp_rate: f64) -> Result<usize, Error> {
    if expected_inserts == 0 {
        return Ok(0);
    }
    if !(0.0..=1.0).contains(&fp_rate) {
        return Err(Error::InvalidRate { rate: fp_rate });
    }
    Ok((-(expected_inserts as f64) * fp_rate.ln() / LN_SQR).ceil() as usize)
}

/// Return the optimal number of hash functions for a filter of `nbits` bits
/// holding the expected number of inserts, `k = ceil((m / n) * ln 2)`.
///
/// Never returns less than one, whatever the inputs.
pub fn optimal_hashes(expected_inserts: usize, nbits: usize) -> usize {
    if expected_inserts == 0 {
        return 1;
    }
    let k = (nbits as f64 / expected_inserts as f64) * f64::consts::LN_2;

    (k.ceil() as usize).max(1)
}
