//! Fixed-size registry mapping ordinal index to (data, length) pairs.
//!
//! Two parallel statics pair each built-in sample's bytes with its byte
//! length, in declared order. Both arrays are typed `[_; SAMPLE_COUNT]`, so
//! they cannot drift apart in length. The tables live in static storage for
//! the whole program: nothing here allocates, copies, or mutates.

use crate::constants::BYTES_PER_FRAME;
use crate::samples::*;

/// Number of registered samples.
pub const SAMPLE_COUNT: usize = 8;

/// Sample data, indexed by ordinal. Non-owning references into static storage.
pub static SAMPLES: [&[u8]; SAMPLE_COUNT] = [
    &SAMPLE01, &SAMPLE02, &SAMPLE03, &SAMPLE04,
    &SAMPLE05, &SAMPLE06, &SAMPLE07, &SAMPLE08,
];

/// Byte length of each sample, indexed by ordinal.
pub static SAMPLE_LENGTHS: [u32; SAMPLE_COUNT] = [
    SAMPLE01_LEN, SAMPLE02_LEN, SAMPLE03_LEN, SAMPLE04_LEN,
    SAMPLE05_LEN, SAMPLE06_LEN, SAMPLE07_LEN, SAMPLE08_LEN,
];

/// Return the number of registered samples.
pub const fn count() -> usize {
    SAMPLE_COUNT
}

/// Return the bytes of the sample at `index`, or `None` if out of range.
///
/// The returned reference is stable: the same `index` yields the same
/// static slice every call.
pub fn data_at(index: usize) -> Option<&'static [u8]> {
    SAMPLES.get(index).copied()
}

/// Return the byte length of the sample at `index`, or `None` if out of range.
pub fn length_at(index: usize) -> Option<u32> {
    SAMPLE_LENGTHS.get(index).copied()
}

/// Return a [`Sample`] handle for `index`, or `None` if out of range.
pub fn get(index: usize) -> Option<Sample> {
    SAMPLES.get(index).map(|&data| Sample { data })
}

/// Iterate over all samples in ordinal order.
pub fn iter() -> impl Iterator<Item = Sample> {
    SAMPLES.iter().map(|&data| Sample { data })
}

/// Read-only view of one registered sample.
///
/// A `Sample` is a non-owning handle into static storage; it is `Copy` and
/// free to pass around.
#[derive(Clone, Copy, Debug)]
pub struct Sample {
    data: &'static [u8],
}

impl Sample {
    /// The raw little-endian 16-bit PCM bytes.
    pub fn data(&self) -> &'static [u8] {
        self.data
    }

    /// Length in bytes.
    pub fn len_bytes(&self) -> u32 {
        self.data.len() as u32
    }

    /// Length in 16-bit frames.
    pub fn len_frames(&self) -> usize {
        self.data.len() / BYTES_PER_FRAME
    }

    /// Decode the frame at `index`, or `None` if out of range.
    pub fn frame(&self, index: usize) -> Option<i16> {
        let lo = *self.data.get(index * BYTES_PER_FRAME)?;
        let hi = *self.data.get(index * BYTES_PER_FRAME + 1)?;
        Some(i16::from_le_bytes([lo, hi]))
    }

    /// Iterate over all frames as decoded `i16` values.
    pub fn frames(&self) -> impl Iterator<Item = i16> + 'static {
        let data = self.data;
        data.chunks_exact(BYTES_PER_FRAME)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_match_data() {
        for i in 0..count() {
            assert_eq!(
                SAMPLE_LENGTHS[i] as usize,
                SAMPLES[i].len(),
                "length constant for sample {} disagrees with its data",
                i
            );
        }
    }

    #[test]
    fn kit_lengths() {
        // Pinned to the checked-in generated tables
        assert_eq!(SAMPLE_LENGTHS, [192, 340, 128, 512, 98, 640, 210, 1024]);
    }

    #[test]
    fn count_is_eight() {
        assert_eq!(count(), 8);
        assert_eq!(SAMPLES.len(), count());
        assert_eq!(SAMPLE_LENGTHS.len(), count());
    }

    #[test]
    fn lengths_are_whole_frames() {
        for i in 0..count() {
            assert_eq!(SAMPLE_LENGTHS[i] as usize % BYTES_PER_FRAME, 0);
        }
    }

    #[test]
    fn data_at_in_range() {
        for i in 0..count() {
            let data = data_at(i).unwrap();
            assert_eq!(data.len(), length_at(i).unwrap() as usize);
        }
    }

    #[test]
    fn data_at_is_stable() {
        for i in 0..count() {
            let a = data_at(i).unwrap();
            let b = data_at(i).unwrap();
            assert!(core::ptr::eq(a, b), "sample {} reference not stable", i);
        }
    }

    #[test]
    fn out_of_range_is_none() {
        assert!(data_at(count()).is_none());
        assert!(length_at(count()).is_none());
        assert!(get(count()).is_none());
        assert!(data_at(usize::MAX).is_none());
    }

    #[test]
    fn get_matches_raw_tables() {
        for i in 0..count() {
            let s = get(i).unwrap();
            assert!(core::ptr::eq(s.data(), SAMPLES[i]));
            assert_eq!(s.len_bytes(), SAMPLE_LENGTHS[i]);
            assert_eq!(s.len_frames(), SAMPLES[i].len() / BYTES_PER_FRAME);
        }
    }

    #[test]
    fn frame_decodes_little_endian() {
        let s = get(0).unwrap();
        let data = s.data();
        let expected = i16::from_le_bytes([data[0], data[1]]);
        assert_eq!(s.frame(0), Some(expected));
        assert_eq!(s.frame(s.len_frames()), None);
    }

    #[test]
    fn frames_iterator_covers_all() {
        for s in iter() {
            let n = s.frames().count();
            assert_eq!(n, s.len_frames());
        }
    }

    #[test]
    fn iter_visits_in_ordinal_order() {
        let lengths: [u32; SAMPLE_COUNT] =
            core::array::from_fn(|i| iter().nth(i).unwrap().len_bytes());
        assert_eq!(lengths, SAMPLE_LENGTHS);
    }

    #[test]
    fn samples_are_not_silent() {
        for (i, s) in iter().enumerate() {
            let peak = s.frames().map(|f| f.unsigned_abs()).max().unwrap();
            assert!(peak > 1000, "sample {} looks silent, peak={}", i, peak);
        }
    }
}
