//! XOR word checksum over BIOS ROM regions.
//!
//! The loader folds every 32-bit word of a ROM region into a single
//! accumulator with XOR. The value has no cryptographic strength; it
//! exists to tell two dumps apart and to flag obviously corrupt images.

/// Fold a byte region into `acc`, one native-endian `u32` word at a time.
///
/// # Panics
///
/// Panics when `data.len()` is not a multiple of 4. ROM regions are
/// power-of-two sized, so a misaligned length is a caller bug rather
/// than a recoverable condition.
#[must_use]
pub fn accumulate(acc: u32, data: &[u8]) -> u32 {
    assert!(
        data.len() % 4 == 0,
        "checksum region length {} is not a multiple of 4",
        data.len()
    );

    data.chunks_exact(4).fold(acc, |acc, word| {
        acc ^ u32::from_ne_bytes([word[0], word[1], word[2], word[3]])
    })
}

/// Checksum a region starting from a zero accumulator.
#[must_use]
pub fn checksum(data: &[u8]) -> u32 {
    accumulate(0, data)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_region_leaves_accumulator_untouched() {
        assert_eq!(accumulate(0xDEAD_BEEF, &[]), 0xDEAD_BEEF);
        assert_eq!(checksum(&[]), 0);
    }

    #[test]
    fn folds_words_in_order() {
        let mut data = Vec::new();
        for word in [0xDEAD_BEEF_u32, 0x0123_4567, 0x89AB_CDEF] {
            data.extend_from_slice(&word.to_ne_bytes());
        }

        assert_eq!(checksum(&data), 0xDEAD_BEEF ^ 0x0123_4567 ^ 0x89AB_CDEF);
    }

    #[test]
    fn doubled_region_cancels_itself() {
        let region: Vec<u8> = (0..64u8).collect();
        let doubled: Vec<u8> = region.iter().chain(region.iter()).copied().collect();

        assert_eq!(checksum(&doubled), 0);
    }

    #[test]
    fn zero_filled_tail_is_neutral() {
        let mut data = vec![0u8; 16];
        data[0] = 0x5A;
        let mut padded = data.clone();
        padded.extend_from_slice(&[0u8; 64]);

        assert_eq!(checksum(&data), checksum(&padded));
    }

    #[test]
    #[should_panic(expected = "multiple of 4")]
    fn misaligned_region_panics() {
        let _ = checksum(&[1, 2, 3]);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        /// Generate word-aligned byte regions
        fn region() -> impl Strategy<Value = Vec<u8>> {
            prop::collection::vec(any::<u32>(), 0..64)
                .prop_map(|words| words.iter().flat_map(|w| w.to_ne_bytes()).collect())
        }

        proptest! {
            /// Region order never affects the accumulated value
            #[test]
            fn accumulation_commutes(a in region(), b in region()) {
                prop_assert_eq!(
                    accumulate(accumulate(0, &a), &b),
                    accumulate(accumulate(0, &b), &a)
                );
            }
        }

        proptest! {
            /// A region folded in twice cancels out
            #[test]
            fn double_accumulation_cancels(seed in any::<u32>(), a in region()) {
                prop_assert_eq!(accumulate(accumulate(seed, &a), &a), seed);
            }
        }

        proptest! {
            /// Accumulating a split region matches the one-shot checksum
            #[test]
            fn chunked_accumulation_matches(
                words in prop::collection::vec(any::<u32>(), 0..64),
                cut in any::<prop::sample::Index>()
            ) {
                let data: Vec<u8> = words.iter().flat_map(|w| w.to_ne_bytes()).collect();
                let cut = cut.index(words.len() + 1) * 4;

                prop_assert_eq!(
                    accumulate(checksum(&data[..cut]), &data[cut..]),
                    checksum(&data)
                );
            }
        }
    }
}
