use crate::test_utils::{gen_inputs, validate_scan, validate_sort};
use crate::{
    prefix_sum, prefix_sum_exclusive, radix_sort, radix_sort_builder, radix_sort_indices,
    BufferKernels, Error, HostBuffer,
};
use rand::{thread_rng, Rng, RngCore};
use rayon::prelude::*;

#[test]
pub fn test_prefix_sum_scenario() {
    let out = prefix_sum(&vec![1i32, 2, 3, 4]).unwrap();

    assert_eq!(out.result, vec![1, 3, 6, 10]);
}

#[test]
pub fn test_prefix_sum_empty() {
    let data: Vec<i32> = Vec::new();
    let out = data.prefix_sum().unwrap();

    assert!(out.is_empty());
    assert!(out.elapsed_ms >= 0.0);
}

#[test]
pub fn test_prefix_sum_random() {
    let mut rng = thread_rng();

    for len in [1usize, 2, 17, 1000, 65_537] {
        let inputs: Vec<i32> = (0..len).map(|_| rng.gen()).collect();

        validate_scan(&inputs, |s| prefix_sum(s).unwrap().result);
    }
}

#[test]
pub fn test_prefix_sum_exclusive() {
    let inputs = gen_inputs(10_000, 8);
    let inclusive = prefix_sum(&inputs).unwrap().result;
    let exclusive = prefix_sum_exclusive(&inputs).unwrap().result;

    assert_eq!(exclusive.len(), inputs.len());
    assert_eq!(exclusive[0], 0);

    for i in 1..inputs.len() {
        assert_eq!(exclusive[i], inclusive[i - 1]);
    }
}

#[test]
pub fn test_radix_sort_scenarios() {
    assert_eq!(
        radix_sort(&vec![5i32, 3, 8, 1, 9, 2]).unwrap().result,
        vec![1, 2, 3, 5, 8, 9]
    );
    assert_eq!(radix_sort(&Vec::<i32>::new()).unwrap().result, Vec::<i32>::new());
    assert_eq!(
        radix_sort(&vec![-1i32, 0, 1]).unwrap().result,
        vec![0, 1, -1]
    );
}

#[test]
pub fn test_radix_sort_random() {
    let mut inputs = Vec::new();
    let mut rng = thread_rng();

    for _ in 0..2000 {
        inputs.push(rng.next_u32() as i32)
    }

    validate_sort(inputs, |s| radix_sort(s).unwrap().result);
}

#[test]
pub fn test_series() {
    let inputs: Vec<i32> = (0..500_000).rev().collect();
    let out = radix_sort(&inputs).unwrap();

    let expected: Vec<i32> = (0..500_000).collect();
    assert_eq!(out.result, expected);
}

#[test]
pub fn test_idempotent() {
    let inputs = gen_inputs(100_000, 16);
    let once = radix_sort(&inputs).unwrap().result;
    let twice = radix_sort(&once).unwrap().result;

    assert_eq!(once, twice);
}

#[test]
pub fn test_stability_tagged() {
    // Only 256 distinct values, so nearly every element ties with others. An unstable sort would
    // scramble the input indices within each run of equal keys.
    let mut rng = thread_rng();
    let inputs: Vec<i32> = (0..60_000)
        .map(|_| (rng.gen_range(0..64u32) << 24 | rng.gen_range(0..4u32)) as i32)
        .collect();

    let perm = radix_sort_indices(&inputs).unwrap().result;

    let mut expected: Vec<u32> = (0..inputs.len() as u32).collect();
    expected.sort_by_key(|i| inputs[*i as usize] as u32);

    assert_eq!(perm, expected);
}

#[test]
pub fn test_indices_match_values() {
    let inputs: Vec<i32> = gen_inputs(100_000, 8)
        .into_iter()
        .map(|v| v & 0x0F0F_0F0F)
        .collect();

    let sorted = radix_sort(&inputs).unwrap().result;
    let perm = radix_sort_indices(&inputs).unwrap().result;

    assert_eq!(perm.len(), inputs.len());

    for (i, p) in perm.iter().enumerate() {
        assert_eq!(inputs[*p as usize], sorted[i]);
    }

    for w in perm.windows(2) {
        if inputs[w[0] as usize] == inputs[w[1] as usize] {
            assert!(w[0] < w[1]);
        }
    }
}

#[test]
pub fn test_signed_indices_are_stable() {
    let inputs: Vec<i32> = gen_inputs(50_000, 0)
        .into_iter()
        .map(|v| v >> 20)
        .collect();

    let perm = radix_sort_builder(&inputs)
        .with_signed_order()
        .sort_indices()
        .unwrap()
        .result;

    let mut expected: Vec<u32> = (0..inputs.len() as u32).collect();
    expected.sort_by_key(|i| inputs[*i as usize]);

    assert_eq!(perm, expected);
}

#[test]
pub fn test_signed_matches_std() {
    let inputs = gen_inputs(50_000, 0);
    let out = radix_sort_builder(&inputs)
        .with_signed_order()
        .sort()
        .unwrap()
        .result;

    let mut expected = inputs.clone();
    expected.sort_unstable();

    assert_eq!(out, expected);
}

#[test]
pub fn test_unsigned_source() {
    let inputs: Vec<u32> = vec![u32::MAX, 7, 0, 1 << 31];
    let out = inputs.radix_sort().unwrap();

    assert_eq!(out.result, vec![0, 7, i32::MIN, -1]);
}

#[test]
pub fn test_invalid_widths() {
    let bytes = vec![1u8; 64];

    for width in [1usize, 2, 8] {
        let source = HostBuffer::new(&bytes, width);

        assert_eq!(source.prefix_sum(), Err(Error::InvalidWidth { width }));
        assert_eq!(source.radix_sort(), Err(Error::InvalidWidth { width }));
    }
}

#[test]
pub fn test_output_byte_length() {
    let inputs = gen_inputs(1_001, 0);
    let bytes: &[u8] = bytemuck::cast_slice(&inputs);
    let source = HostBuffer::new(bytes, 4);

    let sorted = source.radix_sort().unwrap();
    let summed = source.prefix_sum().unwrap();

    assert_eq!(sorted.as_bytes().len(), bytes.len());
    assert_eq!(summed.as_bytes().len(), bytes.len());
    assert!(sorted.elapsed_ms >= 0.0);
    assert!(summed.elapsed_ms >= 0.0);
}

#[test]
pub fn test_concurrent_callers() {
    let input_sets: Vec<Vec<i32>> = (0..16).map(|i| gen_inputs(20_000 + i, 4)).collect();

    let outputs: Vec<Vec<i32>> = input_sets
        .par_iter()
        .map(|inputs| radix_sort(inputs).unwrap().result)
        .collect();

    for (inputs, out) in input_sets.into_iter().zip(outputs) {
        let mut expected = inputs;
        expected.sort_unstable_by_key(|v| *v as u32);

        assert_eq!(out, expected);
    }
}
