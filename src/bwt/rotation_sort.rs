use std::cmp::Ordering;

/// Sort the rotation start indexes of `input` by full cyclic comparison.
/// Returns a permutation of 0..input.len().
///
/// The comparator walks both rotations byte by byte, wrapping at the block
/// end, for at most one full block length. Two rotations that survive a
/// whole lap are identical (the block is periodic) and compare Equal; the
/// stable sort keeps them in index order. This naive sort is the semantic
/// contract: any faster scheme must reproduce exactly this total order.
pub fn sort_rotations(input: &[u8]) -> Vec<usize> {
    let mut indexes: Vec<usize> = (0..input.len()).collect();
    indexes.sort_by(|&a, &b| cyclic_cmp(input, a, b));
    indexes
}

fn cyclic_cmp(input: &[u8], start1: usize, start2: usize) -> Ordering {
    let length = input.len();
    let mut i1 = start1;
    let mut i2 = start2;
    for _ in 0..length {
        match input[i1].cmp(&input[i2]) {
            Ordering::Equal => {
                i1 += 1;
                i2 += 1;
                if i1 == length {
                    i1 = 0;
                }
                if i2 == length {
                    i2 = 0;
                }
            }
            ord => return ord,
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod test {
    use super::sort_rotations;

    #[test]
    fn distinct_rotations_sort_lexicographically() {
        // Rotations of [3,1,2]: 0:[3,1,2] 1:[1,2,3] 2:[2,3,1].
        assert_eq!(sort_rotations(&[3, 1, 2]), vec![1, 2, 0]);
    }

    #[test]
    fn periodic_block_keeps_index_order_on_ties() {
        // [2,1,2,1] has two rotation pairs that compare equal; the stable
        // sort leaves each pair in index order.
        assert_eq!(sort_rotations(&[2, 1, 2, 1]), vec![1, 3, 0, 2]);
    }

    #[test]
    fn constant_block_is_all_ties() {
        assert_eq!(sort_rotations(&[7, 7, 7]), vec![0, 1, 2]);
    }

    #[test]
    fn empty_block() {
        assert_eq!(sort_rotations(&[]), Vec::<usize>::new());
    }
}
