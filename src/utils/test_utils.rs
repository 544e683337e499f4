use crate::counts::Counts;
use crate::radix_key::bucket_of;
use arbitrary_chunks::ArbitraryChunks;
use block_pseudorand::block_rand;
use rayon::prelude::*;

/// `n` random elements, the first half shifted right by `shift` and the second half shifted
/// left, giving a bimodal distribution when `shift` is non-zero.
pub fn gen_inputs(n: usize, shift: u32) -> Vec<i32> {
    let mut inputs: Vec<u32> = block_rand(n);

    inputs[0..(n / 2)].par_iter_mut().for_each(|v| *v >>= shift);
    inputs[(n / 2)..n].par_iter_mut().for_each(|v| *v <<= shift);

    inputs.into_iter().map(|v| v as i32).collect()
}

pub fn gen_input_set(shift: u32) -> Vec<Vec<i32>> {
    let n = 500_000;
    let half = n / 2;
    let inputs = gen_inputs(n, shift);

    // Middle values are used for the case where shift is provided
    let mut out = vec![
        vec![],
        inputs[..1].to_vec(),
        inputs[(half - 1)..(half + 1)].to_vec(),
        inputs[(half - 5)..(half + 5)].to_vec(),
        inputs[(half - 50)..(half + 50)].to_vec(),
        inputs[(half - 2_500)..(half + 2_500)].to_vec(),
        inputs[(half - 25_000)..(half + 25_000)].to_vec(),
        inputs[(half - 100_000)..(half + 100_000)].to_vec(),
        inputs,
    ];

    out.reverse();

    out
}

/// Check that `sort_fn` returns a permutation of `inputs` ordered by unsigned bit pattern.
pub fn validate_sort<F>(inputs: Vec<i32>, sort_fn: F)
where
    F: Fn(&[i32]) -> Vec<i32>,
{
    let sorted = sort_fn(&inputs);
    assert_eq!(sorted.len(), inputs.len());

    let mut expected = inputs;
    expected.sort_unstable_by_key(|v| *v as u32);

    assert_eq!(sorted, expected);
}

pub fn sort_comparison_suite<F>(shift: u32, sort_fn: F)
where
    F: Fn(&[i32]) -> Vec<i32>,
{
    let input_set = gen_input_set(shift);

    for s in input_set {
        validate_sort(s, &sort_fn);
    }
}

/// Check `scan_fn` against a straightforward wrapping running sum.
pub fn validate_scan<F>(inputs: &[i32], scan_fn: F)
where
    F: Fn(&[i32]) -> Vec<i32>,
{
    let out = scan_fn(inputs);
    assert_eq!(out.len(), inputs.len());

    let mut total = 0i32;
    for (i, v) in inputs.iter().enumerate() {
        total = total.wrapping_add(*v);
        assert_eq!(out[i], total, "prefix sum differs at {}", i);
    }
}

/// Check that after a pass on `digit`, `bucket` is split into one contiguous region per bucket
/// value, in ascending bucket order.
pub fn validate_digit_regions(bucket: &[i32], digit: usize) {
    let mut counts = Counts::default();
    for v in bucket {
        counts[bucket_of(*v, digit)] += 1;
    }

    let mut prev: Option<usize> = None;
    let mut regions = 0;
    for region in bucket.arbitrary_chunks(&counts[..]) {
        let Some(first) = region.first() else {
            continue;
        };

        let b = bucket_of(*first, digit);
        assert_eq!(region.len(), counts[b]);
        assert!(region.iter().all(|v| bucket_of(*v, digit) == b));

        if let Some(p) = prev {
            assert!(p < b);
        }
        prev = Some(b);
        regions += 1;
    }

    assert_eq!(regions, (&counts).into_iter().filter(|c| **c > 0).count());
}

pub fn validate_i32_patterns<F>(sort_fn: F)
where
    F: Fn(&[i32]) -> Vec<i32>,
{
    let input_sets: Vec<Vec<i32>> = vec![
        vec![-1; 128],
        vec![i32::MIN; 64],
        gen_inputs(128, 0),
        gen_inputs(128_000, 0),
        gen_inputs(4, 0),
    ];

    let masks: [u32; 12] = [
        0xFFFF_FF00,
        0xFFFF_00FF,
        0xFF00_FFFF,
        0x00FF_FFFF,
        0x0000_FFFF,
        0xFFFF_0000,
        0b10000000000000000000000000000000,
        0b00000000000000000000000000000001,
        0b11111111111111111111111111111110,
        0b01111111111111111111111111111111,
        0b10101010101010101010101010101010,
        0b01010101010101010101010101010101,
    ];

    for inputs in input_sets.iter() {
        validate_sort(inputs.clone(), &sort_fn);

        // Empty levels
        for mask in masks {
            validate_sort(
                inputs
                    .iter()
                    .map(|v| ((*v as u32) & mask) as i32)
                    .collect::<Vec<i32>>(),
                &sort_fn,
            );
        }
    }
}
