// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

use rand::Rng;

/// A uniformly random ordering of `0..length` (Fisher-Yates).
pub fn random_permutation<T>(
    length: usize,
    rng: &mut T,
) -> Vec<usize>
where
    T: Rng,
{
    let mut permutation: Vec<usize> = (0..length).collect();
    for i in (1..length).rev() {
        let random_index: usize = rng.gen_range(0..=i);
        permutation.swap(i, random_index);
    }
    return permutation;
}

/// `items` rearranged so that position `i` holds `items[permutation[i]]`.
pub fn permute<V>(
    items: &[V],
    permutation: &[usize],
) -> Vec<V>
where
    V: Clone,
{
    return permutation.iter().map(|index| items[*index].clone()).collect();
}
