// Copyright (c) 2018 Aleksandr Bezobchuk
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! A simple implementation of a Bloom filter using double hashing.

use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use siphasher::sip::SipHasher13;

use crate::bitvec::BitVec;

/// Seeds used for the two SipHash instantiations.
const HASHER_SEEDS: [u64; 2] = [535_345_345, 312_312_323];

/// A Bloom filter that keeps track of items of type `K`.
#[derive(Clone, Debug)]
pub struct BloomFilter<K> {
    bits: BitVec,
    nhashes: usize,
    inserts: usize,
    key: PhantomData<K>,
}

impl<K: Hash> BloomFilter<K> {
    /// Return a new Bloom filter with the given number of bits and number
    /// of hash functions. Both must be non-zero.
    pub fn new(nbits: usize, nhashes: usize) -> BloomFilter<K> {
        assert!(nbits > 0, "number of bits must be non-zero");
        assert!(nhashes > 0, "number of hashes must be non-zero");

        BloomFilter {
            bits: BitVec::new(nbits),
            nhashes,
            inserts: 0,
            key: PhantomData,
        }
    }

    /// Insert an item in the Bloom filter. Setting the item's bits is idempotent,
    /// but the insert counter is incremented on every call, whether or not the
    /// item was already present.
    pub fn insert(&mut self, item: &K) {
        for index in self.bit_indices(item) {
            self.bits.set(index, true);
        }
        self.inserts += 1;
    }

    /// Return whether or not a given item is likely in the Bloom filter. There is a
    /// possibility for a false positive, but a false negative will never occur.
    pub fn contains(&self, item: &K) -> bool {
        self.bit_indices(item).iter().all(|&index| self.bits.get(index))
    }

    /// Return the number of bits in this filter.
    pub fn bits(&self) -> usize {
        self.bits.len()
    }

    /// Number of hashes used (`k` parameter).
    pub fn hashes(&self) -> usize {
        self.nhashes
    }

    /// Number of inserts performed on this filter. Inserting the same item
    /// twice counts twice.
    pub fn count(&self) -> usize {
        self.inserts
    }

    /// Estimate the false positive rate from the current fill ratio,
    /// `(ones / nbits) ^ nhashes`, rounded to three decimal digits.
    ///
    /// This is zero for an empty filter and approaches `1.0` as the filter
    /// fills up; it never decreases as items are inserted.
    pub fn false_positive_rate(&self) -> f64 {
        let ratio = self.bits.count_ones() as f64 / self.bits.len() as f64;
        let rate = ratio.powi(self.nhashes as i32);

        (rate * 1000.).round() / 1000.
    }

    /// Derive the bit positions for an item using double hashing,
    /// g(i) = (h1 + i * h2) mod m. The same item always yields the
    /// same positions, all within `[0, nbits)`.
    fn bit_indices(&self, item: &K) -> Vec<usize> {
        let (h1, h2) = sip_hashes(item);
        let nbits = self.bits.len() as u64;

        (0..self.nhashes as u64)
            .map(|i| (h1.wrapping_add(i.wrapping_mul(h2)) % nbits) as usize)
            .collect()
    }
}

/// Hash an item with both seeded SipHash instantiations. The hashers are
/// constructed freshly seeded on every call, so the result depends only on
/// the item and the seeds.
fn sip_hashes<K: Hash>(item: &K) -> (u64, u64) {
    let mut sip1 = SipHasher13::new_with_keys(HASHER_SEEDS[0], HASHER_SEEDS[0]);
    let mut sip2 = SipHasher13::new_with_keys(HASHER_SEEDS[1], HASHER_SEEDS[1]);

    item.hash(&mut sip1);
    item.hash(&mut sip2);

    (sip1.finish(), sip2.finish())
}

impl<K> PartialEq for BloomFilter<K> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<K> Eq for BloomFilter<K> {}
