#[cfg(test)]
use crate::Tensor;

/// Asserts that two tensors are exactly equal in both shape and values
///
/// # Arguments
/// * `a` - First tensor
/// * `b` - Second tensor
#[cfg(test)]
pub fn assert_tensors_eq(a: &Tensor, b: &Tensor) {
    assert_eq!(a.shape, b.shape);
    assert_eq!(a.data.len(), b.data.len());
    for (x, y) in a.data.iter().zip(b.data.iter()) {
        assert_eq!(x, y)
    }
}

/// Asserts that every row of `output` is a one-hot vector
/// with its single 1 at the matching entry of `indices`
#[cfg(test)]
pub fn assert_one_hot_rows(output: &Tensor, indices: &[f32], num_output: usize) {
    assert_eq!(output.data.len(), indices.len() * num_output);
    for (row, &index) in output.data.chunks(num_output).zip(indices.iter()) {
        for (n, &val) in row.iter().enumerate() {
            if n == index as usize {
                assert_eq!(val, 1.0);
            } else {
                assert_eq!(val, 0.0);
            }
        }
    }
}
