//! A simple implementation of a Bloom filter, a space-efficient probabilistic
//! data structure, together with a capacity-bounded variant that sizes itself
//! for a target false positive rate.
//!
//! # Bloom Filters
//!
//! A Bloom filter is a space-efficient probabilistic data structure that is
//! used to test whether an element is a member of a set. It allows for queries
//! to return: "possibly in set" or "definitely not in set". Elements can be
//! added to the set, but not removed; the more elements that are added to the
//! set, the larger the probability of false positives.
//!
//! The plain [`BloomFilter`] is constructed from a fixed number of bits and
//! hash functions. The [`BoundedBloomFilter`] derives both from the expected
//! number of inserts and a desired false positive rate, and then enforces
//! that insert count: once at capacity, further inserts are rejected, so the
//! actual false positive rate never drifts past what the sizing promised.
//!
//! # Double Hashing
//!
//! Double hashing is used to derive bit positions within the bit vector. The
//! choice of double hashing was shown to be effective without any loss in the
//! asymptotic false positive probability, leading to less computation and
//! potentially less need for randomness in practice, by Adam Kirsch and
//! Michael Mitzenmacher in a paper called *Less Hashing, Same Performance:
//! Building a Better Bloom Filter*.
//!
//! The double hash takes the form of the following formula:
//!
//! g<sub>i</sub>(x) = (H<sub>1</sub>(x) + iH<sub>2</sub>(x)) mod m, where
//! H<sub>1</sub> and H<sub>2</sub> are SipHash instantiations with fixed,
//! distinct seeds.
//!
//! # Example
//!
//! ```
//! use bloomcap::BloomFilter;
//!
//! let mut filter = BloomFilter::new(1024, 4);
//!
//! filter.insert(&"foo");
//! filter.insert(&"bar");
//!
//! filter.contains(&"foo"); // true
//! filter.contains(&"bar"); // true
//! filter.contains(&"baz"); // false
//!
//! filter.count(); // 2
//! ```
//!
//! Sized from an expected insert count and a target rate:
//!
//! ```
//! use bloomcap::{BoundedBloomFilter, Error};
//!
//! # fn main() -> Result<(), Error> {
//! let mut filter = BoundedBloomFilter::new(2, 0.01)?;
//!
//! filter.insert(&"foo")?;
//! filter.insert(&"bar")?;
//!
//! assert!(filter.contains(&"foo"));
//! assert!(filter.insert(&"baz").is_err()); // at capacity
//! # Ok(())
//! # }
//! ```
#![warn(missing_docs)]
#![allow(clippy::bool_assert_comparison)]

pub mod bitvec;
pub mod bloom;
pub mod bounded;
pub mod error;

pub use bloom::BloomFilter;
pub use bounded::BoundedBloomFilter;
pub use error::Error;
