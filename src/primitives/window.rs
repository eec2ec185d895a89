use crate::error::Error;
use anyhow::Result;

/// Contiguous windows of `size` items starting at `0, step, 2 * step, ...`.
///
/// A trailing window with fewer than `size` items is dropped. A zero `size`
/// or `step` is [`Error::InvalidWindow`].
///
/// ```
/// use daprs::windowed;
///
/// let data: Vec<i32> = (0..10).collect();
/// assert_eq!(
///     windowed(&data, 2, 2).unwrap(),
///     vec![vec![0, 1], vec![2, 3], vec![4, 5], vec![6, 7], vec![8, 9]]
/// );
/// ```
pub fn windowed<T: Clone>(data: &[T], size: usize, step: usize) -> Result<Vec<Vec<T>>> {
    if size == 0 || step == 0 {
        return Err(Error::InvalidWindow { size, step }.into());
    }
    Ok(data.windows(size).step_by(step).map(<[T]>::to_vec).collect())
}
